//! End-to-end tests for the enemy combat lifecycle: spawn → damage →
//! death → loot deposit → removal, driven through the full game plugin.

use bevy::input::InputPlugin;
use bevy::prelude::*;
use bevy::state::app::StatesPlugin;
use pretty_assertions::assert_eq;

use harvest_strike::GameState;
use harvest_strike::gameplay::combat::DamageMessage;
use harvest_strike::gameplay::enemies::{Enemy, EnemyAssets, EnemyKind, spawn_enemy};
use harvest_strike::gameplay::loot::{ResourceKind, RunLoot};
use harvest_strike::gameplay::player::Player;

fn create_game_app() -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins);
    app.add_plugins(StatesPlugin);
    app.add_plugins(InputPlugin);
    // Asset stores normally provided by the render plugins
    app.init_resource::<Assets<Mesh>>();
    app.init_resource::<Assets<ColorMaterial>>();
    app.add_plugins(harvest_strike::plugin);
    app
}

fn enter_gameplay(app: &mut App) {
    app.world_mut()
        .resource_mut::<NextState<GameState>>()
        .set(GameState::InGame);
    app.update();
    app.update();
}

fn spawn_kind(app: &mut App, kind: EnemyKind) -> Entity {
    let assets = app.world().resource::<EnemyAssets>().clone();
    let mut commands = app.world_mut().commands();
    let enemy = spawn_enemy(&mut commands, kind, Vec2::new(400.0, 0.0), &assets)
        .expect("built-in stats are valid");
    app.world_mut().flush();
    enemy
}

fn damage(app: &mut App, target: Entity, amount: u32) {
    app.world_mut()
        .write_message(DamageMessage { target, amount });
    app.update();
}

#[test]
fn game_initializes_in_loading_state() {
    let app = create_game_app();
    let state = app.world().resource::<State<GameState>>();
    assert_eq!(*state.get(), GameState::Loading);
}

#[test]
fn entering_gameplay_builds_the_world() {
    let mut app = create_game_app();
    enter_gameplay(&mut app);

    let mut players = app.world_mut().query_filtered::<(), With<Player>>();
    assert_eq!(players.iter(app.world()).count(), 1);

    let loot = app.world().resource::<RunLoot>();
    assert!(loot.0.is_empty());
}

#[test]
fn enemies_acquire_the_player_automatically() {
    let mut app = create_game_app();
    enter_gameplay(&mut app);

    let charger = spawn_kind(&mut app, EnemyKind::Charger);
    app.update();

    let mut players = app.world_mut().query_filtered::<Entity, With<Player>>();
    let player = players.single(app.world()).unwrap();

    let target = app
        .world()
        .get::<harvest_strike::gameplay::CurrentTarget>(charger)
        .unwrap();
    assert_eq!(target.0, Some(player));
}

#[test]
fn charger_lifecycle_damage_death_loot_removal() {
    let mut app = create_game_app();
    enter_gameplay(&mut app);

    // Charger: 50 max health, drops 5 gold
    let charger = spawn_kind(&mut app, EnemyKind::Charger);

    damage(&mut app, charger, 20);
    let health = app
        .world()
        .get::<harvest_strike::gameplay::Health>(charger)
        .unwrap();
    assert_eq!(health.current, 30);

    damage(&mut app, charger, 40);

    // Dead, removed from the world, loot deposited exactly once
    assert!(app.world().get_entity(charger).is_err());
    let loot = app.world().resource::<RunLoot>();
    assert_eq!(loot.total(ResourceKind::Gold), 5);

    // Late damage to the removed entity deposits nothing further
    damage(&mut app, charger, 40);
    let loot = app.world().resource::<RunLoot>();
    assert_eq!(loot.total(ResourceKind::Gold), 5);
}

#[test]
fn tank_lifecycle_mitigation_then_death() {
    let mut app = create_game_app();
    enter_gameplay(&mut app);

    // Tank: 200 max health, armor 50, drops 15 gold + 3 scrap
    let tank = spawn_kind(&mut app, EnemyKind::Tank);

    // 300 incoming × 50% armor = 150 actual
    damage(&mut app, tank, 300);
    let health = app
        .world()
        .get::<harvest_strike::gameplay::Health>(tank)
        .unwrap();
    assert_eq!(health.current, 50);

    damage(&mut app, tank, 300);

    assert!(app.world().get_entity(tank).is_err());
    let loot = app.world().resource::<RunLoot>();
    assert_eq!(loot.total(ResourceKind::Gold), 15);
    assert_eq!(loot.total(ResourceKind::Scrap), 3);
}

#[test]
fn two_enemies_dying_same_tick_both_deposit() {
    let mut app = create_game_app();
    enter_gameplay(&mut app);

    let first = spawn_kind(&mut app, EnemyKind::Charger);
    let second = spawn_kind(&mut app, EnemyKind::Charger);

    app.world_mut().write_message(DamageMessage {
        target: first,
        amount: 50,
    });
    app.world_mut().write_message(DamageMessage {
        target: second,
        amount: 50,
    });
    app.update();

    assert!(app.world().get_entity(first).is_err());
    assert!(app.world().get_entity(second).is_err());
    let loot = app.world().resource::<RunLoot>();
    assert_eq!(loot.total(ResourceKind::Gold), 10);
}

#[test]
fn run_loot_resets_on_reentering_gameplay() {
    let mut app = create_game_app();
    enter_gameplay(&mut app);

    let charger = spawn_kind(&mut app, EnemyKind::Charger);
    damage(&mut app, charger, 50);
    assert_eq!(app.world().resource::<RunLoot>().total(ResourceKind::Gold), 5);

    // Leave and re-enter: run-scoped loot is a fresh ledger
    app.world_mut()
        .resource_mut::<NextState<GameState>>()
        .set(GameState::Loading);
    app.update();
    app.update();
    enter_gameplay(&mut app);

    assert!(app.world().resource::<RunLoot>().0.is_empty());
}

#[test]
fn dead_enemies_leave_no_survivors_flagged() {
    let mut app = create_game_app();
    enter_gameplay(&mut app);

    let charger = spawn_kind(&mut app, EnemyKind::Charger);
    let bystander = spawn_kind(&mut app, EnemyKind::Shooter);

    damage(&mut app, charger, 9999);

    // Only the dead enemy is removed
    assert!(app.world().get_entity(charger).is_err());
    assert!(app.world().get_entity(bystander).is_ok());
    let mut enemies = app.world_mut().query_filtered::<(), With<Enemy>>();
    assert_eq!(enemies.iter(app.world()).count(), 1);
}
