//! Collision resolution and scoring
//!
//! The contact test is a coarse circle/box approximation: player center
//! against coin center, hit when the distance drops below the coin radius
//! plus half the larger player dimension. The generous reach is part of
//! the game feel; do not tighten it to exact AABB/circle intersection.

use super::spawn::spawn_level;
use super::state::{GamePhase, GameState, ItemKind};
use crate::consts::*;

/// Resolve player/coin contacts for the current frame.
///
/// Coins are walked in reverse index order so removal is safe in place.
/// Good contact scores and removes the coin; bad contact records the
/// label and ends the run. The sweep finishes the frame either way.
/// Afterwards, if no good coin remains and the run is still live, the
/// level advances and a fresh set is spawned at the new multiplier.
pub fn resolve_collisions(state: &mut GameState) {
    let center = state.player.center();
    let reach = state.player.collision_radius();

    for i in (0..state.items.len()).rev() {
        let hit = {
            let item = &state.items[i];
            center.distance(item.pos) < item.radius + reach
        };
        if !hit {
            continue;
        }

        match state.items[i].kind {
            ItemKind::Good => {
                let item = state.items.remove(i);
                state.score += GOOD_REWARD;
                state.last_collected = Some(item.name);
            }
            ItemKind::Bad => {
                state.last_bad = Some(state.items[i].name.clone());
                state.phase = GamePhase::GameOver;
            }
        }
    }

    if state.phase != GamePhase::GameOver && !state.good_remaining() {
        level_up(state);
    }
}

/// Advance to the next level: bump the counter and speed multiplier,
/// then respawn a full coin set around the player's current position.
fn level_up(state: &mut GameState) {
    state.level += 1;
    state.speed_multiplier += LEVEL_SPEED_STEP;
    spawn_level(state);
    log::debug!(
        "level up: level={} multiplier={:.1}",
        state.level,
        state.speed_multiplier
    );
}
