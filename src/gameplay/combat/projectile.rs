//! Projectiles: straight-line hazards spawned by shooter enemies.

use avian2d::prelude::*;
use bevy::prelude::*;

use super::DamageMessage;
use crate::gameplay::arena::Obstacle;
use crate::gameplay::player::Player;
use crate::third_party::CollisionLayer;
use crate::{GameState, Z_ACTOR};

// === Constants ===

/// Projectile visual radius (pixels).
const PROJECTILE_RADIUS: f32 = 3.0;

/// Projectile color (sickly green).
const PROJECTILE_COLOR: Color = Color::srgb(0.6, 0.9, 0.3);

/// Seconds a projectile lives before despawning harmlessly.
const PROJECTILE_LIFETIME_SECS: f32 = 3.0;

// === Components ===

/// A projectile in flight. The heading is fixed at fire time — projectiles
/// do not home; a moving target can sidestep them.
#[derive(Component, Debug, Clone, Reflect)]
#[reflect(Component)]
pub struct Projectile {
    pub heading: Vec2,
    pub speed: f32,
    pub damage: u32,
}

/// One-shot timer; the projectile despawns when it finishes.
#[derive(Component, Debug, Clone, Reflect)]
#[reflect(Component)]
pub struct ProjectileLifetime(pub Timer);

// === Spawning ===

/// Spawns one projectile at `origin` flying along `heading` (unit vector).
/// The sensor hitbox collides with hurtboxes and obstacles; hits are
/// resolved by `handle_projectile_hits`.
pub fn spawn_projectile(
    commands: &mut Commands,
    origin: Vec2,
    heading: Vec2,
    speed: f32,
    damage: u32,
) {
    commands.spawn((
        Name::new("Projectile"),
        Projectile {
            heading,
            speed,
            damage,
        },
        ProjectileLifetime(Timer::from_seconds(PROJECTILE_LIFETIME_SECS, TimerMode::Once)),
        Sprite::from_color(PROJECTILE_COLOR, Vec2::splat(PROJECTILE_RADIUS * 2.0)),
        Transform::from_xyz(origin.x, origin.y, Z_ACTOR + 0.5),
        DespawnOnExit(GameState::InGame),
        // Physics: sensor hitbox for collision-based damage
        RigidBody::Kinematic,
        Collider::circle(PROJECTILE_RADIUS),
        Sensor,
        CollisionLayers::new(
            CollisionLayer::Hitbox,
            [CollisionLayer::Hurtbox, CollisionLayer::Obstacle],
        ),
        CollisionEventsEnabled,
        CollidingEntities::default(),
    ));
}

// === Systems ===

/// Advances projectiles along their fixed heading.
/// Runs in `GameSet::Combat`.
pub(super) fn move_projectiles(
    time: Res<Time>,
    mut projectiles: Query<(&Projectile, &mut Transform)>,
) {
    for (projectile, mut transform) in &mut projectiles {
        let step = projectile.heading * projectile.speed * time.delta_secs();
        transform.translation.x += step.x;
        transform.translation.y += step.y;
    }
}

/// Resolves projectile overlaps via `CollidingEntities`.
///
/// Hitting the player queues the payload as damage and consumes the
/// projectile; hitting an obstacle consumes it harmlessly. Other enemies
/// never block friendly fire — the projectile passes through them.
/// Runs after `move_projectiles` in the combat chain.
pub(super) fn handle_projectile_hits(
    mut commands: Commands,
    projectiles: Query<(Entity, &Projectile, &CollidingEntities)>,
    players: Query<(), With<Player>>,
    obstacles: Query<(), With<Obstacle>>,
    mut damage: MessageWriter<DamageMessage>,
) {
    for (entity, projectile, colliding) in &projectiles {
        for &hit in &colliding.0 {
            if players.get(hit).is_ok() {
                damage.write(DamageMessage {
                    target: hit,
                    amount: projectile.damage,
                });
                commands.entity(entity).despawn();
                break;
            }
            if obstacles.get(hit).is_ok() {
                commands.entity(entity).despawn();
                break;
            }
        }
    }
}

/// Despawns projectiles whose lifetime ran out without hitting anything.
pub(super) fn expire_projectiles(
    time: Res<Time>,
    mut commands: Commands,
    mut projectiles: Query<(Entity, &mut ProjectileLifetime)>,
) {
    for (entity, mut lifetime) in &mut projectiles {
        lifetime.0.tick(time.delta());
        if lifetime.0.is_finished() {
            commands.entity(entity).despawn();
        }
    }
}
