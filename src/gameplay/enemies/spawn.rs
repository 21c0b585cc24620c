//! Continuous enemy spawning at the arena edges with ramping difficulty.

use bevy::prelude::*;
use rand::Rng;

use super::{EnemyAssets, EnemyKind, spawn_enemy};
use crate::gameplay::arena::{ARENA_HALF_HEIGHT, ARENA_HALF_WIDTH};
use crate::{GameSet, GameState, gameplay_running};

// === Constants ===

/// Seconds before the first enemy spawns after entering `InGame`.
pub const INITIAL_DELAY: f32 = 3.0;

/// Starting spawn interval (seconds between enemies).
pub const START_INTERVAL: f32 = 4.0;

/// Minimum spawn interval (floor — never spawns faster than this).
pub const MIN_INTERVAL: f32 = 1.0;

/// Duration (seconds) over which the interval ramps from START to MIN.
pub const RAMP_DURATION: f32 = 300.0; // 5 minutes

/// Margin inside the walls where enemies appear.
const SPAWN_MARGIN: f32 = 24.0;

// === Resource ===

/// Tracks enemy spawn timing with ramping difficulty.
///
/// Inserted on `OnEnter(GameState::InGame)`, reset each time the state is
/// entered. The timer is one-shot and re-created with the current ramp
/// interval after each spawn.
#[derive(Resource, Debug, Reflect)]
#[reflect(Resource)]
pub struct EnemySpawnTimer {
    pub timer: Timer,
    /// Total elapsed time (seconds) since entering `InGame`. Used for
    /// ramp calculation.
    pub elapsed_secs: f32,
}

impl Default for EnemySpawnTimer {
    fn default() -> Self {
        Self {
            timer: Timer::from_seconds(INITIAL_DELAY, TimerMode::Once),
            elapsed_secs: 0.0,
        }
    }
}

// === Pure Functions ===

/// Compute the current spawn interval based on elapsed time.
/// Linear ramp from [`START_INTERVAL`] down to [`MIN_INTERVAL`] over
/// [`RAMP_DURATION`] seconds, clamped at the floor afterwards.
#[must_use]
pub fn spawn_interval(elapsed_secs: f32) -> f32 {
    let progress = (elapsed_secs / RAMP_DURATION).clamp(0.0, 1.0);
    (MIN_INTERVAL - START_INTERVAL).mul_add(progress, START_INTERVAL)
}

/// Pick the enemy kind for the next spawn. Chargers are the bread and
/// butter; shooters common; tanks rare.
fn roll_kind(roll: u32) -> EnemyKind {
    match roll {
        0..=5 => EnemyKind::Charger,
        6..=8 => EnemyKind::Shooter,
        _ => EnemyKind::Tank,
    }
}

// === Systems ===

fn reset_spawn_timer(mut commands: Commands) {
    commands.insert_resource(EnemySpawnTimer::default());
}

/// Spawns an enemy at a random point along a random arena edge whenever
/// the timer fires, then restarts the timer with the ramped interval.
/// Runs in `GameSet::Ai` (spawning is a world decision, not combat).
fn spawn_enemies(
    time: Res<Time>,
    mut spawn_timer: ResMut<EnemySpawnTimer>,
    assets: Res<EnemyAssets>,
    mut commands: Commands,
) {
    spawn_timer.elapsed_secs += time.delta_secs();
    spawn_timer.timer.tick(time.delta());
    if !spawn_timer.timer.just_finished() {
        return;
    }

    let mut rng = rand::rng();
    let kind = roll_kind(rng.random_range(0..10));

    let x_extent = ARENA_HALF_WIDTH - SPAWN_MARGIN;
    let y_extent = ARENA_HALF_HEIGHT - SPAWN_MARGIN;
    let position = match rng.random_range(0..4u8) {
        0 => Vec2::new(rng.random_range(-x_extent..x_extent), y_extent),
        1 => Vec2::new(rng.random_range(-x_extent..x_extent), -y_extent),
        2 => Vec2::new(-x_extent, rng.random_range(-y_extent..y_extent)),
        _ => Vec2::new(x_extent, rng.random_range(-y_extent..y_extent)),
    };

    // Built-in stats always validate; a failure here is a programmer error
    // worth hearing about, not worth crashing over.
    if let Err(error) = spawn_enemy(&mut commands, kind, position, &assets) {
        warn!("enemy spawn rejected: {error}");
    }

    let interval = spawn_interval(spawn_timer.elapsed_secs);
    spawn_timer.timer = Timer::from_seconds(interval, TimerMode::Once);
}

// === Plugin ===

pub(super) fn plugin(app: &mut App) {
    app.init_resource::<EnemySpawnTimer>();
    app.add_systems(OnEnter(GameState::InGame), reset_spawn_timer);
    app.add_systems(
        Update,
        spawn_enemies.in_set(GameSet::Ai).run_if(gameplay_running),
    );
}
