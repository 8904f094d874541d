//! Game state and core simulation types

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Run ended by touching a bad coin; terminal until restart
    GameOver,
}

/// Canvas extent in pixels. The two shipped variants differ only here.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self::new(CANVAS_WIDTH, CANVAS_HEIGHT)
    }
}

/// The player sprite (axis-aligned box, top-left anchored)
#[derive(Debug, Clone)]
pub struct Player {
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
    /// Current velocity (pixels per frame), set from held keys
    pub vel: Vec2,
    /// Movement speed applied per held axis
    pub speed: f32,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            pos: PLAYER_START,
            size: PLAYER_SIZE,
            vel: Vec2::ZERO,
            speed: PLAYER_SPEED,
        }
    }
}

impl Player {
    /// Center of the bounding box
    pub fn center(&self) -> Vec2 {
        self.pos + self.size / 2.0
    }

    /// Radius used for the coarse circle/box collision test
    pub fn collision_radius(&self) -> f32 {
        self.size.x.max(self.size.y) / 2.0
    }
}

/// Coin classification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKind {
    /// Collectible; scores and disappears on contact
    Good,
    /// Ends the game on contact
    Bad,
}

/// A drifting coin (circle, center anchored)
#[derive(Debug, Clone)]
pub struct Item {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub kind: ItemKind,
    /// Index into the coin pool for this kind (sprite selection)
    pub sprite: usize,
    /// Display label shown in the HUD when collected/hit
    pub name: String,
}

/// Complete game state for one session
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Canvas extent the session plays in
    pub bounds: Bounds,
    pub score: u32,
    /// 1-based level counter
    pub level: u32,
    /// Scales coin speed at spawn time; never decreases within a session
    pub speed_multiplier: f32,
    pub phase: GamePhase,
    /// Label of the most recently collected good coin
    pub last_collected: Option<String>,
    /// Label of the bad coin that ended the run
    pub last_bad: Option<String>,
    pub player: Player,
    pub items: Vec<Item>,
    /// Frame counter
    pub time_ticks: u64,
    pub rng: Pcg32,
}

impl GameState {
    /// Fresh session on the reference canvas: score 0, level 1,
    /// multiplier 1.0, player at the start corner, level 1 coins spawned.
    pub fn new(seed: u64) -> Self {
        Self::with_bounds(seed, Bounds::default())
    }

    /// Fresh session on an explicit canvas size
    pub fn with_bounds(seed: u64, bounds: Bounds) -> Self {
        let mut state = Self {
            seed,
            bounds,
            score: 0,
            level: 1,
            speed_multiplier: 1.0,
            phase: GamePhase::Playing,
            last_collected: None,
            last_bad: None,
            player: Player::default(),
            items: Vec::new(),
            time_ticks: 0,
            rng: Pcg32::seed_from_u64(seed),
        };
        super::spawn::spawn_level(&mut state);
        state
    }

    /// True while any good coin is still on the canvas
    pub fn good_remaining(&self) -> bool {
        self.items.iter().any(|i| i.kind == ItemKind::Good)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game_state() {
        let state = GameState::new(1);
        assert_eq!(state.score, 0);
        assert_eq!(state.level, 1);
        assert_eq!(state.speed_multiplier, 1.0);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.items.len(), GOOD_PER_LEVEL + BAD_PER_LEVEL);
        assert_eq!(state.player.pos, PLAYER_START);
        assert!(state.last_collected.is_none());
        assert!(state.last_bad.is_none());
    }

    #[test]
    fn test_player_center_and_radius() {
        let player = Player::default();
        assert_eq!(player.center(), Vec2::new(30.0, 30.0));
        assert_eq!(player.collision_radius(), 10.0);
    }
}
