//! Per-tick enemy behavior: movement policy and the contact-attack trigger.

use avian2d::prelude::*;
use bevy::prelude::*;

use super::shooting::Shooter;
use super::{CONTACT_RANGE, Enemy, EnemyKind};
use crate::gameplay::combat::DamageMessage;
use crate::gameplay::targeting::{direction_to, in_range};
use crate::gameplay::{ContactDamage, CurrentTarget, Movement};
use crate::third_party::surface_distance;

// === Pure Functions ===

/// A shooter's kiting decision for one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveIntent {
    /// Close the distance.
    Advance,
    /// Back off — too close for comfort.
    Retreat,
    /// Inside the comfortable band: stand and shoot.
    Hold,
}

/// Kiting policy: retreat inside `min_range`, advance beyond
/// `optimal_range`, hold in between.
#[must_use]
pub fn shooter_move_intent(distance: f32, min_range: f32, optimal_range: f32) -> MoveIntent {
    if distance < min_range {
        MoveIntent::Retreat
    } else if distance > optimal_range {
        MoveIntent::Advance
    } else {
        MoveIntent::Hold
    }
}

// === Systems ===

/// Decides each enemy's velocity from its variant's movement policy.
/// Runs in `GameSet::Movement`, before any attack trigger fires.
///
/// Chargers and tanks steer straight at the target (the tank just slower;
/// it never staggers, damage does not touch its velocity). Shooters
/// kite: they hold a comfortable firing band around the target. No target
/// means a stationary idle tick for every variant.
pub(super) fn enemy_movement(
    mut enemies: Query<
        (
            &EnemyKind,
            &CurrentTarget,
            &Movement,
            &GlobalTransform,
            Option<&Shooter>,
            &mut LinearVelocity,
        ),
        With<Enemy>,
    >,
    targets: Query<&GlobalTransform>,
) {
    for (kind, current_target, movement, transform, shooter, mut velocity) in &mut enemies {
        let Some(target_entity) = current_target.0 else {
            velocity.0 = Vec2::ZERO;
            continue;
        };
        let Ok(target_pos) = targets.get(target_entity) else {
            velocity.0 = Vec2::ZERO;
            continue;
        };

        let current_xy = transform.translation().xy();
        let target_xy = target_pos.translation().xy();
        let toward = direction_to(current_xy, target_xy);

        let decided = match kind {
            EnemyKind::Charger | EnemyKind::Tank => toward * movement.speed,
            EnemyKind::Shooter => shooter.map_or(Vec2::ZERO, |shooter| {
                let distance = current_xy.distance(target_xy);
                match shooter_move_intent(distance, shooter.min_range, shooter.optimal_range) {
                    MoveIntent::Advance => toward * movement.speed,
                    MoveIntent::Retreat => -toward * movement.speed,
                    MoveIntent::Hold => Vec2::ZERO,
                }
            }),
        };
        velocity.0 = decided;
    }
}

/// Contact-attack trigger for chargers and tanks: while the target is
/// within contact range, queue contact damage every tick, no cooldown.
/// Standing in a charger is meant to hurt continuously.
/// Runs in the `AttackTriggers` set of `GameSet::Combat`.
pub(super) fn contact_attack(
    enemies: Query<
        (
            &EnemyKind,
            &CurrentTarget,
            &ContactDamage,
            &GlobalTransform,
            &Collider,
        ),
        With<Enemy>,
    >,
    targets: Query<(&GlobalTransform, &Collider)>,
    mut damage: MessageWriter<DamageMessage>,
) {
    for (kind, current_target, contact_damage, transform, collider) in &enemies {
        if !matches!(kind, EnemyKind::Charger | EnemyKind::Tank) {
            continue;
        }
        let Some(target_entity) = current_target.0 else {
            continue;
        };
        let Ok((target_pos, target_collider)) = targets.get(target_entity) else {
            continue;
        };

        let distance = surface_distance(
            collider,
            transform.translation().xy(),
            target_collider,
            target_pos.translation().xy(),
        );
        if in_range(distance, CONTACT_RANGE) {
            damage.write(DamageMessage {
                target: target_entity,
                amount: contact_damage.0,
            });
        }
    }
}
