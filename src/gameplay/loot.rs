//! Run-scoped loot: the temporary reward ledger filled by enemy deaths.

use std::collections::BTreeMap;

use bevy::prelude::*;

use super::combat::{DeathCheck, EnemyDied};
use crate::{GameSet, GameState, gameplay_running};

// === Types ===

/// Resource kinds an enemy can drop. Run-scoped loot is banked or lost by
/// the farm/progression side of the game, not by this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Reflect)]
pub enum ResourceKind {
    Gold,
    Seeds,
    Scrap,
}

// === Resources ===

/// The current run's accumulated loot.
///
/// Append-only within a run; reset when (re)entering `InGame`. Deposits
/// are fire-and-forget — the depositor never inspects the result.
#[derive(Resource, Debug, Clone, Default, Reflect)]
#[reflect(Resource)]
pub struct RunLoot(pub BTreeMap<ResourceKind, u32>);

impl RunLoot {
    /// Add `amount` of `kind` to the ledger.
    pub fn deposit(&mut self, kind: ResourceKind, amount: u32) {
        let entry = self.0.entry(kind).or_insert(0);
        *entry = entry.saturating_add(amount);
    }

    /// Total banked amount of `kind` this run.
    #[must_use]
    pub fn total(&self, kind: ResourceKind) -> u32 {
        self.0.get(&kind).copied().unwrap_or(0)
    }
}

// === Systems ===

/// Deposits each dead enemy's loot table into the run ledger, one call per
/// resource kind. Runs in `GameSet::Death` before `DeathCheck` so the
/// whole death transition (deposit, then removal) lands in one tick.
fn deposit_loot(mut died: MessageReader<EnemyDied>, mut run_loot: ResMut<RunLoot>) {
    for death in died.read() {
        for (&kind, &amount) in &death.loot.0 {
            run_loot.deposit(kind, amount);
        }
        info!("loot deposited for {:?}: {:?}", death.enemy, death.loot.0);
    }
}

fn reset_run_loot(mut run_loot: ResMut<RunLoot>) {
    run_loot.0.clear();
}

// === Plugin ===

pub(super) fn plugin(app: &mut App) {
    app.register_type::<ResourceKind>()
        .register_type::<RunLoot>()
        .init_resource::<RunLoot>();

    app.add_systems(OnEnter(GameState::InGame), reset_run_loot);

    app.add_systems(
        Update,
        deposit_loot
            .in_set(GameSet::Death)
            .before(DeathCheck)
            .run_if(gameplay_running),
    );
}
