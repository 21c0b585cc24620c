//! Shooter firing: cooldown, line-of-sight gate, projectile emission.

use avian2d::prelude::*;
use bevy::prelude::*;

use super::Enemy;
use crate::gameplay::combat::spawn_projectile;
use crate::gameplay::targeting::direction_to;
use crate::gameplay::{ContactDamage, CurrentTarget};
use crate::third_party::line_of_sight;

// === Components ===

/// Shooter-only firing state and tuning.
///
/// The cooldown is a one-shot timer: once elapsed, the shooter stays
/// *ready* until a shot actually goes out (a blocked line of sight must
/// not eat the charge), and resets on fire.
#[derive(Component, Debug, Clone, Reflect)]
#[reflect(Component)]
pub struct Shooter {
    pub cooldown: Timer,
    pub projectile_speed: f32,
    /// Kiting band, used by the movement policy.
    pub min_range: f32,
    pub optimal_range: f32,
}

impl Shooter {
    #[must_use]
    pub fn new(fire_rate: f32, projectile_speed: f32, min_range: f32, optimal_range: f32) -> Self {
        Self {
            cooldown: Timer::from_seconds(fire_rate, TimerMode::Once),
            projectile_speed,
            min_range,
            optimal_range,
        }
    }
}

// === Systems ===

/// Fires at the tracked target when the cooldown has elapsed AND the line
/// of sight is clear. Either gate failing is a silent skip, not an error.
/// On fire, the projectile heads
/// along the direction to the target at fire time and carries the
/// shooter's contact damage; the cooldown restarts.
/// Runs in the `AttackTriggers` set of `GameSet::Combat`.
pub(super) fn enemy_shoot(
    time: Res<Time>,
    spatial_query: SpatialQuery,
    mut commands: Commands,
    mut shooters: Query<
        (
            &CurrentTarget,
            &ContactDamage,
            &GlobalTransform,
            &mut Shooter,
        ),
        With<Enemy>,
    >,
    targets: Query<&GlobalTransform>,
) {
    for (current_target, contact_damage, transform, mut shooter) in &mut shooters {
        // Always tick so the charge builds even while idle or blocked
        shooter.cooldown.tick(time.delta());

        let Some(target_entity) = current_target.0 else {
            continue;
        };
        let Ok(target_pos) = targets.get(target_entity) else {
            continue;
        };
        if !shooter.cooldown.is_finished() {
            continue;
        }

        let origin = transform.translation().xy();
        let target_xy = target_pos.translation().xy();
        if !line_of_sight(&spatial_query, origin, target_xy) {
            continue;
        }

        let heading = direction_to(origin, target_xy);
        if heading == Vec2::ZERO {
            continue;
        }

        spawn_projectile(
            &mut commands,
            origin,
            heading,
            shooter.projectile_speed,
            contact_damage.0,
        );
        shooter.cooldown.reset();
    }
}
