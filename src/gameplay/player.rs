//! The player stand-in: the entity enemies hunt.
//!
//! Weapons, aiming, and the farming loop belong to other parts of the
//! game; this module only provides the target the combat core needs — a
//! marked, damageable body that can move around the arena.

use avian2d::prelude::*;
use bevy::prelude::*;

use super::{Health, Movement};
use crate::third_party::CollisionLayer;
use crate::{GameSet, GameState, Z_ACTOR, gameplay_running};

// === Constants ===

/// Player hit points.
pub const PLAYER_HEALTH: u32 = 100;

/// Player movement speed (pixels per second).
pub const PLAYER_MOVE_SPEED: f32 = 220.0;

/// Visual radius of the player circle.
pub const PLAYER_RADIUS: f32 = 8.0;

/// Player color (teal).
const PLAYER_COLOR: Color = Color::srgb(0.2, 0.7, 0.7);

// === Components ===

/// Marker for the player entity — the tag target acquisition looks up.
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct Player;

// === Systems ===

fn spawn_player(mut commands: Commands) {
    commands.spawn((
        Name::new("Player"),
        Player,
        Health::new(PLAYER_HEALTH),
        Movement {
            speed: PLAYER_MOVE_SPEED,
        },
        Sprite::from_color(PLAYER_COLOR, Vec2::splat(PLAYER_RADIUS * 2.0)),
        Transform::from_xyz(0.0, 0.0, Z_ACTOR),
        DespawnOnExit(GameState::InGame),
        RigidBody::Dynamic,
        Collider::circle(PLAYER_RADIUS),
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
}

/// WASD movement. Runs in `GameSet::Input`.
fn player_movement(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut players: Query<(&Movement, &mut LinearVelocity), With<Player>>,
) {
    let mut direction = Vec2::ZERO;
    if keyboard.pressed(KeyCode::KeyW) {
        direction.y += 1.0;
    }
    if keyboard.pressed(KeyCode::KeyS) {
        direction.y -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyA) {
        direction.x -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyD) {
        direction.x += 1.0;
    }
    let direction = direction.normalize_or_zero();

    for (movement, mut velocity) in &mut players {
        velocity.0 = direction * movement.speed;
    }
}

// === Plugin ===

pub(super) fn plugin(app: &mut App) {
    app.register_type::<Player>();

    app.add_systems(OnEnter(GameState::InGame), spawn_player);
    app.add_systems(
        Update,
        player_movement
            .in_set(GameSet::Input)
            .run_if(gameplay_running),
    );
}

#[cfg(test)]
mod integration_tests {
    use super::*;
    use crate::testing::assert_entity_count;
    use pretty_assertions::assert_eq;

    fn create_player_test_app() -> App {
        let mut app = crate::testing::create_test_app();
        app.init_resource::<ButtonInput<KeyCode>>();
        app.add_systems(Update, player_movement);
        app
    }

    fn spawn_movable_player(app: &mut App) -> Entity {
        app.world_mut()
            .spawn((
                Player,
                Health::new(PLAYER_HEALTH),
                Movement {
                    speed: PLAYER_MOVE_SPEED,
                },
                LinearVelocity::ZERO,
            ))
            .id()
    }

    #[test]
    fn player_spawned_on_enter_ingame() {
        let mut app = crate::testing::create_base_test_app();
        app.add_plugins(plugin);
        crate::testing::transition_to_ingame(&mut app);

        assert_entity_count::<With<Player>>(&mut app, 1);
    }

    #[test]
    fn wasd_sets_velocity() {
        let mut app = create_player_test_app();
        let player = spawn_movable_player(&mut app);

        app.world_mut()
            .resource_mut::<ButtonInput<KeyCode>>()
            .press(KeyCode::KeyD);
        app.update();

        let velocity = app.world().get::<LinearVelocity>(player).unwrap();
        assert_eq!(velocity.0, Vec2::new(PLAYER_MOVE_SPEED, 0.0));
    }

    #[test]
    fn diagonal_movement_is_normalized() {
        let mut app = create_player_test_app();
        let player = spawn_movable_player(&mut app);

        let mut input = app.world_mut().resource_mut::<ButtonInput<KeyCode>>();
        input.press(KeyCode::KeyW);
        input.press(KeyCode::KeyD);
        app.update();

        let velocity = app.world().get::<LinearVelocity>(player).unwrap();
        assert!(
            (velocity.0.length() - PLAYER_MOVE_SPEED).abs() < 0.1,
            "diagonal speed should be {PLAYER_MOVE_SPEED}, got {}",
            velocity.0.length()
        );
    }

    #[test]
    fn no_input_stops_the_player() {
        let mut app = create_player_test_app();
        let player = spawn_movable_player(&mut app);

        app.world_mut()
            .get_mut::<LinearVelocity>(player)
            .unwrap()
            .0 = Vec2::new(50.0, 0.0);
        app.update();

        let velocity = app.world().get::<LinearVelocity>(player).unwrap();
        assert_eq!(velocity.0, Vec2::ZERO);
    }
}
