//! Enemy components, behavior variants, stats, and spawning.

pub mod behavior;
pub mod shooting;
pub mod spawn;

use std::collections::BTreeMap;

use avian2d::prelude::*;
use bevy::prelude::*;
use thiserror::Error;

use super::combat::AttackTriggers;
use super::loot::ResourceKind;
use super::{ContactDamage, CurrentTarget, Health, Movement};
use crate::third_party::CollisionLayer;
use crate::{GameSet, GameState, Z_ACTOR, gameplay_running};

pub use shooting::Shooter;

// === Constants ===

/// Visual radius of an enemy circle.
pub const ENEMY_RADIUS: f32 = 7.0;

/// Surface-to-surface distance at which chargers and tanks deal contact
/// damage.
pub const CONTACT_RANGE: f32 = 4.0;

/// Charger color (red).
const CHARGER_COLOR: Color = Color::srgb(0.85, 0.25, 0.2);

/// Shooter color (purple).
const SHOOTER_COLOR: Color = Color::srgb(0.6, 0.3, 0.8);

/// Tank color (dark slate).
const TANK_COLOR: Color = Color::srgb(0.35, 0.4, 0.45);

// === Components ===

/// Marker for enemy entities.
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct Enemy;

/// The three enemy behavior variants.
///
/// Per-tick behavior (movement policy, attack trigger) dispatches on this
/// tag; the shooter's firing state and the tank's armor live in their own
/// components so the shared systems stay uniform.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Hash, Reflect)]
#[reflect(Component)]
pub enum EnemyKind {
    /// Rushes the player and deals contact damage.
    Charger,
    /// Keeps its distance and fires projectiles.
    Shooter,
    /// Slow, armored charger. Never staggers.
    Tank,
}

impl EnemyKind {
    /// All enemy kinds, for iteration.
    pub const ALL: &[Self] = &[Self::Charger, Self::Shooter, Self::Tank];

    /// Human-readable display name.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Charger => "Charger",
            Self::Shooter => "Shooter",
            Self::Tank => "Tank",
        }
    }
}

/// Percentage damage reduction, tank only. Mitigation is
/// `max(1, floor(incoming × (1 − armor/100)))` — see `combat::damage`.
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct Armor(pub u32);

/// Resources granted when this enemy dies. Snapshotted onto the death
/// message and deposited into the run ledger exactly once.
#[derive(Component, Debug, Clone, Default, Reflect)]
#[reflect(Component)]
pub struct LootTable(pub BTreeMap<ResourceKind, u32>);

// === Stats ===

/// Tuning numbers for an enemy kind. All built-in values are compile-time
/// constants; custom stats pass through [`EnemyStats::validate`] at spawn.
#[derive(Debug, Clone, Copy)]
pub struct EnemyStats {
    pub max_health: u32,
    pub move_speed: f32,
    pub contact_damage: u32,
    /// Percentage damage reduction. Zero for everything but the tank.
    pub armor: u32,
    /// Shooter kiting band: retreat inside `min_range`, advance outside
    /// `optimal_range`, hold in between. Zero for contact enemies.
    pub min_range: f32,
    pub optimal_range: f32,
    /// Seconds between shots. Zero for contact enemies.
    pub fire_rate: f32,
    pub projectile_speed: f32,
}

/// Look up stats for an enemy kind.
#[must_use]
pub const fn enemy_stats(kind: EnemyKind) -> EnemyStats {
    match kind {
        EnemyKind::Charger => EnemyStats {
            max_health: 50,
            move_speed: 140.0,
            contact_damage: 10,
            armor: 0,
            min_range: 0.0,
            optimal_range: 0.0,
            fire_rate: 0.0,
            projectile_speed: 0.0,
        },
        EnemyKind::Shooter => EnemyStats {
            max_health: 30,
            move_speed: 90.0,
            contact_damage: 8,
            armor: 0,
            min_range: 120.0,
            optimal_range: 200.0,
            fire_rate: 1.5,
            projectile_speed: 320.0,
        },
        EnemyKind::Tank => EnemyStats {
            max_health: 200,
            move_speed: 45.0,
            contact_damage: 20,
            armor: 50,
            min_range: 0.0,
            optimal_range: 0.0,
            fire_rate: 0.0,
            projectile_speed: 0.0,
        },
    }
}

/// Loot granted by an enemy kind on death.
#[must_use]
pub fn loot_table(kind: EnemyKind) -> LootTable {
    let entries = match kind {
        EnemyKind::Charger => vec![(ResourceKind::Gold, 5)],
        EnemyKind::Shooter => vec![(ResourceKind::Gold, 8), (ResourceKind::Seeds, 2)],
        EnemyKind::Tank => vec![(ResourceKind::Gold, 15), (ResourceKind::Scrap, 3)],
    };
    LootTable(entries.into_iter().collect())
}

// === Validation ===

/// Rejected enemy configuration. Nothing is silently clamped — a bad
/// config never produces a spawned entity.
#[derive(Debug, Error, PartialEq)]
pub enum SpawnError {
    #[error("max health must be positive")]
    NonPositiveHealth,
    #[error("movement speed must be positive, got {0}")]
    NonPositiveSpeed(f32),
    #[error("shooter fire rate must be positive, got {0}")]
    NonPositiveFireRate(f32),
    #[error("shooter projectile speed must be positive, got {0}")]
    NonPositiveProjectileSpeed(f32),
    #[error("shooter range band is inverted: min {min} > optimal {optimal}")]
    InvertedRangeBand { min: f32, optimal: f32 },
}

impl EnemyStats {
    /// Validates the stats for the given kind. Shooter-only fields are
    /// ignored for contact enemies.
    pub fn validate(&self, kind: EnemyKind) -> Result<(), SpawnError> {
        if self.max_health == 0 {
            return Err(SpawnError::NonPositiveHealth);
        }
        if self.move_speed <= 0.0 {
            return Err(SpawnError::NonPositiveSpeed(self.move_speed));
        }
        if kind == EnemyKind::Shooter {
            if self.fire_rate <= 0.0 {
                return Err(SpawnError::NonPositiveFireRate(self.fire_rate));
            }
            if self.projectile_speed <= 0.0 {
                return Err(SpawnError::NonPositiveProjectileSpeed(self.projectile_speed));
            }
            if self.min_range > self.optimal_range {
                return Err(SpawnError::InvertedRangeBand {
                    min: self.min_range,
                    optimal: self.optimal_range,
                });
            }
        }
        Ok(())
    }
}

// === Spawning ===

/// Spawn an enemy of the given kind with its built-in stats and loot.
pub fn spawn_enemy(
    commands: &mut Commands,
    kind: EnemyKind,
    position: Vec2,
    assets: &EnemyAssets,
) -> Result<Entity, SpawnError> {
    spawn_enemy_with_stats(commands, kind, enemy_stats(kind), loot_table(kind), position, assets)
}

/// Spawn an enemy with explicit stats and loot.
/// Single source of truth for the enemy archetype.
pub fn spawn_enemy_with_stats(
    commands: &mut Commands,
    kind: EnemyKind,
    stats: EnemyStats,
    loot: LootTable,
    position: Vec2,
    assets: &EnemyAssets,
) -> Result<Entity, SpawnError> {
    stats.validate(kind)?;

    let material = match kind {
        EnemyKind::Charger => assets.charger_material.clone(),
        EnemyKind::Shooter => assets.shooter_material.clone(),
        EnemyKind::Tank => assets.tank_material.clone(),
    };

    let mut entity = commands.spawn((
        Name::new(format!("Enemy {}", kind.display_name())),
        Enemy,
        kind,
        CurrentTarget(None),
        Health::new(stats.max_health),
        ContactDamage(stats.contact_damage),
        Movement {
            speed: stats.move_speed,
        },
        loot,
        Mesh2d(assets.mesh.clone()),
        MeshMaterial2d(material),
        Transform::from_xyz(position.x, position.y, Z_ACTOR),
        DespawnOnExit(GameState::InGame),
    ));
    entity.insert((
        RigidBody::Dynamic,
        Collider::circle(ENEMY_RADIUS),
        CollisionLayers::new(
            [CollisionLayer::Pushbox, CollisionLayer::Hurtbox],
            [
                CollisionLayer::Pushbox,
                CollisionLayer::Hitbox,
                CollisionLayer::Obstacle,
            ],
        ),
        LockedAxes::ROTATION_LOCKED,
        LinearVelocity::ZERO,
    ));

    if stats.armor > 0 {
        entity.insert(Armor(stats.armor));
    }
    if kind == EnemyKind::Shooter {
        entity.insert(Shooter::new(
            stats.fire_rate,
            stats.projectile_speed,
            stats.min_range,
            stats.optimal_range,
        ));
    }

    Ok(entity.id())
}

// === Resources ===

/// Shared mesh and material handles for enemy circle rendering.
#[derive(Resource, Debug, Clone)]
pub struct EnemyAssets {
    pub mesh: Handle<Mesh>,
    pub charger_material: Handle<ColorMaterial>,
    pub shooter_material: Handle<ColorMaterial>,
    pub tank_material: Handle<ColorMaterial>,
}

// === Systems ===

fn setup_enemy_assets(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
) {
    commands.insert_resource(EnemyAssets {
        mesh: meshes.add(Circle::new(ENEMY_RADIUS)),
        charger_material: materials.add(CHARGER_COLOR),
        shooter_material: materials.add(SHOOTER_COLOR),
        tank_material: materials.add(TANK_COLOR),
    });
}

// === Plugin ===

pub(super) fn plugin(app: &mut App) {
    app.register_type::<Enemy>()
        .register_type::<EnemyKind>()
        .register_type::<Armor>()
        .register_type::<LootTable>()
        .register_type::<Shooter>()
        .register_type::<spawn::EnemySpawnTimer>();

    app.add_systems(OnEnter(GameState::InGame), setup_enemy_assets);

    spawn::plugin(app);

    app.add_systems(
        Update,
        (
            behavior::enemy_movement.in_set(GameSet::Movement),
            (behavior::contact_attack, shooting::enemy_shoot)
                .in_set(AttackTriggers)
                .in_set(GameSet::Combat),
        )
            .run_if(gameplay_running),
    );
}
