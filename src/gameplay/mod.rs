//! Gameplay domain: shared combat components and the domain plugins.

pub mod arena;
pub mod combat;
pub mod enemies;
pub mod loot;
pub mod player;
pub mod targeting;

use bevy::prelude::*;

// === Shared Components ===

/// Current and maximum hit points.
///
/// Unsigned on purpose: damage application clamps at zero with
/// `saturating_sub`, so no observer can ever read negative health.
/// `current == 0` is the dead state — dead entities are removed at the
/// end of the tick they die and never act again.
#[derive(Component, Debug, Clone, Reflect)]
#[reflect(Component)]
pub struct Health {
    pub current: u32,
    pub max: u32,
}

impl Health {
    /// Full health. Callers validate `max > 0` before construction
    /// (see `enemies::EnemyStats::validate`).
    #[must_use]
    pub const fn new(max: u32) -> Self {
        Self { current: max, max }
    }

    /// Whether the death transition has run.
    #[must_use]
    pub const fn is_dead(&self) -> bool {
        self.current == 0
    }
}

/// Movement speed in pixels per second.
#[derive(Component, Debug, Clone, Reflect)]
#[reflect(Component)]
pub struct Movement {
    pub speed: f32,
}

/// Damage dealt on contact (and carried by a shooter's projectiles).
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct ContactDamage(pub u32);

/// The entity this actor is currently tracking, if any.
///
/// `None` is the steady idle condition: movement and attack systems skip
/// the actor for that tick. Re-resolved by `targeting::acquire_target`
/// whenever empty or stale.
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct CurrentTarget(pub Option<Entity>);

// === Plugin ===

pub fn plugin(app: &mut App) {
    app.register_type::<Health>()
        .register_type::<Movement>()
        .register_type::<ContactDamage>()
        .register_type::<CurrentTarget>();

    app.add_plugins((
        arena::plugin,
        player::plugin,
        targeting::plugin,
        enemies::plugin,
        combat::plugin,
        loot::plugin,
    ));
}
