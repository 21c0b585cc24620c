//! Arena: boundary walls and pillar obstacles.
//!
//! Obstacles live on their own collision layer so they block movement,
//! projectiles, and the shooters' line-of-sight casts.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::third_party::CollisionLayer;
use crate::{GameState, Z_ARENA};

// === Constants ===

/// Half extents of the playable area (pixels).
pub const ARENA_HALF_WIDTH: f32 = 600.0;
pub const ARENA_HALF_HEIGHT: f32 = 340.0;

/// Thickness of the boundary walls.
const WALL_THICKNESS: f32 = 16.0;

/// Square pillar side length.
const PILLAR_SIZE: f32 = 48.0;

/// Pillar centers — enough cover that shooters lose line of sight.
const PILLAR_POSITIONS: [Vec2; 3] = [
    Vec2::new(-200.0, 60.0),
    Vec2::new(200.0, -60.0),
    Vec2::new(0.0, 180.0),
];

const WALL_COLOR: Color = Color::srgb(0.25, 0.2, 0.15);
const PILLAR_COLOR: Color = Color::srgb(0.35, 0.28, 0.2);

// === Components ===

/// Marker for static level geometry. Blocks line of sight.
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct Obstacle;

// === Systems ===

fn setup_arena(mut commands: Commands) {
    let wall_width = ARENA_HALF_WIDTH.mul_add(2.0, WALL_THICKNESS * 2.0);
    let wall_height = ARENA_HALF_HEIGHT * 2.0;
    let horizontal = [
        (Vec2::new(0.0, ARENA_HALF_HEIGHT + WALL_THICKNESS / 2.0), wall_width, WALL_THICKNESS),
        (Vec2::new(0.0, -ARENA_HALF_HEIGHT - WALL_THICKNESS / 2.0), wall_width, WALL_THICKNESS),
    ];
    let vertical = [
        (Vec2::new(ARENA_HALF_WIDTH + WALL_THICKNESS / 2.0, 0.0), WALL_THICKNESS, wall_height),
        (Vec2::new(-ARENA_HALF_WIDTH - WALL_THICKNESS / 2.0, 0.0), WALL_THICKNESS, wall_height),
    ];

    for (position, width, height) in horizontal.into_iter().chain(vertical) {
        spawn_obstacle(&mut commands, "Wall", position, width, height, WALL_COLOR);
    }

    for position in PILLAR_POSITIONS {
        spawn_obstacle(&mut commands, "Pillar", position, PILLAR_SIZE, PILLAR_SIZE, PILLAR_COLOR);
    }
}

fn spawn_obstacle(
    commands: &mut Commands,
    name: &'static str,
    position: Vec2,
    width: f32,
    height: f32,
    color: Color,
) {
    commands.spawn((
        Name::new(name),
        Obstacle,
        Sprite::from_color(color, Vec2::new(width, height)),
        Transform::from_xyz(position.x, position.y, Z_ARENA),
        DespawnOnExit(GameState::InGame),
        RigidBody::Static,
        Collider::rectangle(width, height),
        CollisionLayers::new(
            CollisionLayer::Obstacle,
            [CollisionLayer::Pushbox, CollisionLayer::Hitbox],
        ),
    ));
}

// === Plugin ===

pub(super) fn plugin(app: &mut App) {
    app.register_type::<Obstacle>();
    app.add_systems(OnEnter(GameState::InGame), setup_arena);
}
