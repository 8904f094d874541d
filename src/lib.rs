//! Crypto Dash - a 2D canvas collector arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, collisions, game state)
//! - `render`: Canvas2D rendering adapter (wasm only)
//! - `assets`: Coin catalog and sprite paths
//! - `settings`: UI preferences persisted in LocalStorage

pub mod assets;
#[cfg(target_arch = "wasm32")]
pub mod render;
pub mod settings;
pub mod sim;

pub use settings::{Settings, UiLayout};

/// Game configuration constants
pub mod consts {
    use glam::Vec2;

    /// Canvas dimensions (reference variant)
    pub const CANVAS_WIDTH: f32 = 600.0;
    pub const CANVAS_HEIGHT: f32 = 400.0;

    /// Player defaults
    pub const PLAYER_START: Vec2 = Vec2::new(20.0, 20.0);
    pub const PLAYER_SIZE: Vec2 = Vec2::new(20.0, 20.0);
    /// Player movement speed (pixels per frame)
    pub const PLAYER_SPEED: f32 = 3.0;

    /// Coin defaults
    pub const ITEM_RADIUS: f32 = 15.0;
    /// Base coin speed range is [0.5, 1.5) before the level multiplier
    pub const ITEM_BASE_SPEED: f32 = 0.5;

    /// Items spawned at the start of every level
    pub const GOOD_PER_LEVEL: usize = 6;
    pub const BAD_PER_LEVEL: usize = 7;

    /// Score awarded per good coin collected
    pub const GOOD_REWARD: u32 = 10;
    /// Speed multiplier increase per level
    pub const LEVEL_SPEED_STEP: f32 = 0.2;

    /// Minimum spawn distance from the player
    pub const MIN_SPAWN_DISTANCE: f32 = 200.0;
    /// Rejection-sampling attempts before settling for the farthest candidate
    pub const MAX_SPAWN_ATTEMPTS: u32 = 64;
}
