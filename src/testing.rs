//! Testing utilities for Bevy systems.

#![cfg(test)]

use std::time::Duration;

use avian2d::prelude::*;
use bevy::ecs::query::QueryFilter;
use bevy::prelude::*;
use bevy::state::app::StatesPlugin;

use crate::GameState;
use crate::gameplay::enemies::{ENEMY_RADIUS, EnemyAssets, EnemyKind, spawn_enemy};
use crate::gameplay::player::{PLAYER_HEALTH, PLAYER_RADIUS, Player};
use crate::gameplay::{Health, Movement};

/// Creates a minimal app for testing with essential plugins.
pub fn create_test_app() -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins);
    app
}

/// Creates a test app with state support, initialized in `Loading`.
/// Use for plugins that hang setup off `OnEnter(GameState::InGame)`.
pub fn create_base_test_app() -> App {
    let mut app = create_test_app();
    app.add_plugins(StatesPlugin);
    app.init_state::<GameState>();
    app
}

/// Drives the state machine into `InGame` and lets deferred setup apply.
pub fn transition_to_ingame(app: &mut App) {
    app.world_mut()
        .resource_mut::<NextState<GameState>>()
        .set(GameState::InGame);
    app.update(); // transition + OnEnter systems
    app.update(); // deferred commands applied
}

/// Advance virtual time and run one update.
pub fn advance_and_update(app: &mut App, dt: Duration) {
    app.world_mut()
        .resource_mut::<Time<Virtual>>()
        .advance_by(dt);
    app.update();
}

/// Set a timer so close to finished that any positive delta fires it.
pub fn nearly_expire_timer(timer: &mut Timer) {
    let duration = timer.duration();
    timer.set_elapsed(duration.saturating_sub(Duration::from_micros(1)));
}

/// Assert the number of entities matching a query filter.
pub fn assert_entity_count<F: QueryFilter>(app: &mut App, expected: usize) {
    let count = app
        .world_mut()
        .query_filtered::<(), F>()
        .iter(app.world())
        .count();
    assert_eq!(count, expected, "expected {expected} entities, found {count}");
}

/// Insert `EnemyAssets` (and the asset stores it needs) without the
/// render plugins — mirrors what `setup_enemy_assets` does on enter.
pub fn create_enemy_assets(app: &mut App) {
    app.init_resource::<Assets<Mesh>>();
    app.init_resource::<Assets<ColorMaterial>>();

    let mesh = app
        .world_mut()
        .resource_mut::<Assets<Mesh>>()
        .add(Circle::new(ENEMY_RADIUS));
    let mut materials = app.world_mut().resource_mut::<Assets<ColorMaterial>>();
    let charger_material = materials.add(Color::srgb(0.85, 0.25, 0.2));
    let shooter_material = materials.add(Color::srgb(0.6, 0.3, 0.8));
    let tank_material = materials.add(Color::srgb(0.35, 0.4, 0.45));

    app.insert_resource(EnemyAssets {
        mesh,
        charger_material,
        shooter_material,
        tank_material,
    });
}

/// Spawn an enemy through the real archetype and give it a usable
/// `GlobalTransform` (MinimalPlugins has no transform propagation).
pub fn spawn_enemy_at(app: &mut App, kind: EnemyKind, position: Vec2) -> Entity {
    let assets = app.world().resource::<EnemyAssets>().clone();
    let mut commands = app.world_mut().commands();
    let entity =
        spawn_enemy(&mut commands, kind, position, &assets).expect("built-in stats are valid");
    app.world_mut().flush();

    let transform = *app.world().get::<Transform>(entity).unwrap();
    app.world_mut()
        .entity_mut(entity)
        .insert(GlobalTransform::from(transform));
    entity
}

/// Spawn a player-marked target with health, position, and a collider.
pub fn spawn_test_player(app: &mut App, position: Vec2) -> Entity {
    let transform = Transform::from_xyz(position.x, position.y, 0.0);
    app.world_mut()
        .spawn((
            Player,
            Health::new(PLAYER_HEALTH),
            Movement { speed: 0.0 },
            transform,
            GlobalTransform::from(transform),
            Collider::circle(PLAYER_RADIUS),
        ))
        .id()
}
