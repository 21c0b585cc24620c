//! Target acquisition: resolving the tracked player and range queries.

use bevy::prelude::*;

use super::CurrentTarget;
use super::player::Player;
use crate::{GameSet, gameplay_running};

// === Pure Functions ===

/// Euclidean distance to an optional target position.
///
/// `INFINITY` when there is no target, so "no target" naturally fails
/// every [`in_range`] check without a separate branch.
#[must_use]
pub fn distance_to(from: Vec2, target: Option<Vec2>) -> f32 {
    target.map_or(f32::INFINITY, |to| from.distance(to))
}

/// Unit vector from `from` toward `to`. Zero vector when the points
/// coincide (or nearly so) — callers multiply by speed, so a zero vector
/// means "hold position".
#[must_use]
pub fn direction_to(from: Vec2, to: Vec2) -> Vec2 {
    (to - from).normalize_or_zero()
}

/// Whether a distance is within an attack radius. Infinity (no target)
/// is never within any finite radius.
#[must_use]
pub fn in_range(distance: f32, radius: f32) -> bool {
    distance <= radius
}

// === Systems ===

/// Resolves the tracked player for every seeker whose reference is empty
/// or stale. Runs in `GameSet::Ai`.
///
/// Seekers with a live reference keep it — there is exactly one player,
/// so there is nothing better to switch to. Seekers re-evaluate every
/// frame while they have no target, which also covers the respawn case.
pub fn acquire_target(
    mut seekers: Query<&mut CurrentTarget>,
    players: Query<Entity, With<Player>>,
) {
    for mut current_target in &mut seekers {
        let stale = current_target.0.is_none_or(|e| players.get(e).is_err());
        if stale {
            current_target.0 = players.iter().next();
        }
    }
}

// === Plugin ===

pub(super) fn plugin(app: &mut App) {
    app.add_systems(
        Update,
        acquire_target.in_set(GameSet::Ai).run_if(gameplay_running),
    );
}
