//! Harvest Strike game library.

#[cfg(feature = "dev")]
pub mod dev_tools;
pub mod game;
pub mod gameplay;
#[cfg(test)]
pub mod testing;
pub mod third_party;

use bevy::prelude::*;

// === Z Layers ===

/// Z layer for arena floor and obstacles.
pub const Z_ARENA: f32 = 0.0;

/// Z layer for combat actors (player, enemies). Projectiles render at +0.5.
pub const Z_ACTOR: f32 = 10.0;

// === States ===

/// Primary game states.
#[derive(States, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameState {
    /// Initial loading state.
    #[default]
    Loading,
    /// Active gameplay state.
    InGame,
}

// === System Sets ===

/// Update-schedule system sets, chained in declaration order.
///
/// The chain guarantees the per-tick ordering contract: targets are
/// resolved before movement, movement is decided before attack triggers,
/// and damage is fully applied before loot deposit and removal.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameSet {
    /// Keyboard input (player movement, debug keys).
    Input,
    /// Target acquisition.
    Ai,
    /// Movement policy — writes velocities.
    Movement,
    /// Attack triggers, projectile flight and hits, damage application.
    Combat,
    /// Loot deposit and removal of dead entities.
    Death,
}

/// Run condition: active gameplay.
pub fn gameplay_running(state: Res<State<GameState>>) -> bool {
    *state.get() == GameState::InGame
}

/// Top-level plugin: states, system set ordering, and all domain plugins.
pub fn plugin(app: &mut App) {
    app.configure_sets(
        Update,
        (
            GameSet::Input,
            GameSet::Ai,
            GameSet::Movement,
            GameSet::Combat,
            GameSet::Death,
        )
            .chain(),
    );

    app.add_plugins((game::plugin, third_party::plugin, gameplay::plugin));

    #[cfg(feature = "dev")]
    app.add_plugins(dev_tools::plugin);
}
