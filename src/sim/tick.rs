//! Per-frame simulation tick
//!
//! One tick per animation frame. Input is the held-key axis state from
//! the adapter; the sim derives player velocity from it each tick.

use super::collision::resolve_collisions;
use super::motion::{advance_item, advance_player};
use super::state::{GamePhase, GameState};
use glam::Vec2;

/// Held directional input for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Horizontal axis: -1 left, 0 idle, +1 right
    pub axis_x: i8,
    /// Vertical axis: -1 up, 0 idle, +1 down
    pub axis_y: i8,
}

/// Advance the game state by one frame.
///
/// Terminal once game over: the state is left untouched so the final
/// frame can be drawn and a restart builds a fresh state.
pub fn tick(state: &mut GameState, input: &TickInput) {
    if state.phase == GamePhase::GameOver {
        return;
    }

    state.time_ticks += 1;

    state.player.vel = Vec2::new(
        input.axis_x as f32 * state.player.speed,
        input.axis_y as f32 * state.player.speed,
    );

    let bounds = state.bounds;
    advance_player(&mut state.player, bounds);
    for item in &mut state.items {
        advance_item(item, bounds);
    }

    resolve_collisions(state);
}
