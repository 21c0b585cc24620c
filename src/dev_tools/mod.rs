//! Development tools — only included with `cargo run --features dev`.
//!
//! Debug spawn/damage keys go here. The player's weapon systems live
//! outside this crate, so the H key stands in for them when exercising
//! the damage → death → loot pipeline by hand.

use bevy::prelude::*;
use rand::Rng;

use crate::gameplay::combat::DamageMessage;
use crate::gameplay::enemies::{Enemy, EnemyAssets, EnemyKind, spawn_enemy};
use crate::{GameSet, gameplay_running};

/// Damage injected per H key press.
const DEBUG_DAMAGE: u32 = 25;

/// Radius around the arena center where debug enemies appear.
const DEBUG_SPAWN_RADIUS: f32 = 250.0;

fn debug_key_kind(keyboard: &ButtonInput<KeyCode>) -> Option<EnemyKind> {
    if keyboard.just_pressed(KeyCode::Digit1) {
        Some(EnemyKind::Charger)
    } else if keyboard.just_pressed(KeyCode::Digit2) {
        Some(EnemyKind::Shooter)
    } else if keyboard.just_pressed(KeyCode::Digit3) {
        Some(EnemyKind::Tank)
    } else {
        None
    }
}

fn debug_spawn_enemy(
    keyboard: Res<ButtonInput<KeyCode>>,
    assets: Res<EnemyAssets>,
    mut commands: Commands,
) {
    let Some(kind) = debug_key_kind(&keyboard) else {
        return;
    };

    let mut rng = rand::rng();
    let position = Vec2::new(
        rng.random_range(-DEBUG_SPAWN_RADIUS..DEBUG_SPAWN_RADIUS),
        rng.random_range(-DEBUG_SPAWN_RADIUS..DEBUG_SPAWN_RADIUS),
    );
    if let Err(error) = spawn_enemy(&mut commands, kind, position, &assets) {
        warn!("debug spawn rejected: {error}");
    }
}

/// H: hit every enemy for a flat chunk, standing in for player weapons.
fn debug_damage_enemies(
    keyboard: Res<ButtonInput<KeyCode>>,
    enemies: Query<Entity, With<Enemy>>,
    mut damage: MessageWriter<DamageMessage>,
) {
    if !keyboard.just_pressed(KeyCode::KeyH) {
        return;
    }
    for enemy in &enemies {
        damage.write(DamageMessage {
            target: enemy,
            amount: DEBUG_DAMAGE,
        });
    }
}

pub fn plugin(app: &mut App) {
    app.add_systems(
        Update,
        (debug_spawn_enemy, debug_damage_enemies)
            .in_set(GameSet::Input)
            .run_if(gameplay_running),
    );
}
