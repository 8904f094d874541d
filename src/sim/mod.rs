//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per animation frame, velocities in pixels/frame
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod collision;
pub mod motion;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::resolve_collisions;
pub use motion::{advance_item, advance_player};
pub use spawn::{spawn_level, spawn_position};
pub use state::{Bounds, GamePhase, GameState, Item, ItemKind, Player};
pub use tick::{TickInput, tick};
