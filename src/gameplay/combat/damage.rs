//! Damage application: drains the damage queue and runs the death transition.

use bevy::prelude::*;

use super::{DamageMessage, EnemyDied};
use crate::gameplay::Health;
use crate::gameplay::enemies::{Armor, LootTable};

// === Pure Functions ===

/// Armor-mitigated damage: `max(1, floor(incoming × (1 − armor/100)))`.
///
/// At least 1 damage always lands, whatever the armor value — armor of
/// 100 (or more) cannot make an entity invulnerable.
#[must_use]
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn mitigated_damage(incoming: u32, armor: u32) -> u32 {
    let scaled = incoming as f32 * (1.0 - armor as f32 / 100.0);
    scaled.floor().max(1.0) as u32
}

// === Systems ===

/// Drains `DamageMessage`s in write order and applies them.
///
/// - Damage to a missing or already-dead target is a silent no-op;
///   redundant damage from multiple near-simultaneous sources is expected.
/// - Targets with `Armor` take mitigated damage; everyone else takes the
///   raw amount.
/// - Health clamps at zero (`saturating_sub`), and the tick an entity
///   reaches zero it emits a single `EnemyDied` carrying its loot table
///   snapshot. Two lethal messages in one tick emit one death; the
///   second sees a dead target and is absorbed.
pub fn apply_damage(
    mut messages: MessageReader<DamageMessage>,
    mut died: MessageWriter<EnemyDied>,
    mut targets: Query<(&mut Health, Option<&Armor>, Option<&LootTable>)>,
) {
    for message in messages.read() {
        let Ok((mut health, armor, loot)) = targets.get_mut(message.target) else {
            continue;
        };
        if health.is_dead() {
            continue;
        }

        let actual = armor.map_or(message.amount, |armor| {
            mitigated_damage(message.amount, armor.0)
        });
        health.current = health.current.saturating_sub(actual);

        if health.is_dead() {
            info!("{:?} died ({} damage)", message.target, actual);
            if let Some(loot) = loot {
                died.write(EnemyDied {
                    enemy: message.target,
                    loot: loot.clone(),
                });
            }
        }
    }
}
