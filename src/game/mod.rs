//! Core game shell: states and the global camera.

use bevy::prelude::*;

use crate::GameState;

pub fn plugin(app: &mut App) {
    app.init_state::<GameState>()
        .add_systems(Startup, setup_camera)
        .add_systems(
            Update,
            check_loading_complete.run_if(in_state(GameState::Loading)),
        );
}

/// Spawns the global 2D camera. Persists across all states (do NOT add `DespawnOnExit`).
fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

/// Advances straight to gameplay. There is no asset preload or menu in the
/// prototype; the `Loading` state exists so per-run setup and resets hang
/// off `OnEnter(GameState::InGame)` the same way they would in a full build.
fn check_loading_complete(mut next_state: ResMut<NextState<GameState>>) {
    next_state.set(GameState::InGame);
}
