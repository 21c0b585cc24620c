//! Combat: the damage queue, death transition, and projectiles.

pub mod damage;
pub mod death;
pub mod projectile;

use bevy::prelude::*;

pub use damage::mitigated_damage;
pub use death::DeathCheck;
pub use projectile::{Projectile, ProjectileLifetime, spawn_projectile};

use super::enemies::LootTable;
use crate::{GameSet, gameplay_running};

// === Messages ===

/// A request to damage an entity. Written by attack triggers, projectile
/// hits, and (eventually) player weapon systems; drained in write order by
/// `apply_damage` once per tick. The writer never inspects the outcome.
#[derive(Message, Debug, Clone)]
pub struct DamageMessage {
    pub target: Entity,
    pub amount: u32,
}

/// An enemy's death transition fired this tick.
///
/// Carries the loot table snapshot taken at the moment of death — emitted
/// exactly once per enemy, consumed by the loot deposit system.
#[derive(Message, Debug, Clone)]
pub struct EnemyDied {
    pub enemy: Entity,
    pub loot: LootTable,
}

// === System Sets ===

/// `SystemSet` for the systems that *write* damage and spawn projectiles
/// (contact attacks, shooting). The damage/projectile pipeline below runs
/// after this set so everything written in a tick is applied in that tick.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct AttackTriggers;

// === Plugin ===

pub fn plugin(app: &mut App) {
    app.add_message::<DamageMessage>().add_message::<EnemyDied>();

    app.register_type::<Projectile>()
        .register_type::<ProjectileLifetime>();

    // Projectiles fly and resolve hits, then the damage queue is drained.
    // chain_ignore_deferred so projectiles spawned by AttackTriggers this
    // tick don't move until next frame (prevents instant-hit projectiles).
    app.add_systems(
        Update,
        (
            projectile::move_projectiles,
            projectile::handle_projectile_hits,
            projectile::expire_projectiles,
            damage::apply_damage,
        )
            .chain_ignore_deferred()
            .after(AttackTriggers)
            .in_set(GameSet::Combat)
            .run_if(gameplay_running),
    );

    death::plugin(app);
}
