//! Coin spawning
//!
//! Positions are rejection-sampled so no coin starts within reach of the
//! player. The loop is capped: on a canvas too small to satisfy the
//! exclusion distance it settles for the farthest candidate seen instead
//! of spinning forever.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;

use super::state::{Bounds, GameState, Item, ItemKind};
use crate::assets;
use crate::consts::*;

/// Pick a spawn position at least [`MIN_SPAWN_DISTANCE`] away from the
/// player, uniform over the canvas inset by the coin radius.
///
/// After [`MAX_SPAWN_ATTEMPTS`] rejected candidates the farthest one
/// sampled so far is returned, which may be closer than the exclusion
/// distance. Bounds must exceed the coin diameter on both axes.
pub fn spawn_position(rng: &mut Pcg32, player_pos: Vec2, bounds: Bounds, radius: f32) -> Vec2 {
    debug_assert!(bounds.width > radius * 2.0 && bounds.height > radius * 2.0);

    let mut best = player_pos;
    let mut best_distance = -1.0f32;

    for _ in 0..MAX_SPAWN_ATTEMPTS {
        let candidate = Vec2::new(
            rng.random_range(radius..bounds.width - radius),
            rng.random_range(radius..bounds.height - radius),
        );
        let distance = candidate.distance(player_pos);
        if distance >= MIN_SPAWN_DISTANCE {
            return candidate;
        }
        if distance > best_distance {
            best = candidate;
            best_distance = distance;
        }
    }
    best
}

/// Create one coin at a spawn position, with a random sprite from its
/// category pool and a random drift direction. Speed is
/// (0.5 + uniform[0,1)) scaled by the current level multiplier.
fn spawn_item(rng: &mut Pcg32, player_pos: Vec2, bounds: Bounds, multiplier: f32, kind: ItemKind) -> Item {
    let pos = spawn_position(rng, player_pos, bounds, ITEM_RADIUS);
    let pool = assets::pool(kind);
    let sprite = rng.random_range(0..pool.len());
    let angle = rng.random_range(0.0..std::f32::consts::TAU);
    let speed = (ITEM_BASE_SPEED + rng.random::<f32>()) * multiplier;

    Item {
        pos,
        vel: Vec2::new(angle.cos(), angle.sin()) * speed,
        radius: ITEM_RADIUS,
        kind,
        sprite,
        name: assets::display_name(pool[sprite]),
    }
}

/// Replace the item set with a fresh level: 6 good coins, then 7 bad.
pub fn spawn_level(state: &mut GameState) {
    let player_pos = state.player.pos;
    let bounds = state.bounds;
    let multiplier = state.speed_multiplier;

    state.items.clear();
    for _ in 0..GOOD_PER_LEVEL {
        let item = spawn_item(&mut state.rng, player_pos, bounds, multiplier, ItemKind::Good);
        state.items.push(item);
    }
    for _ in 0..BAD_PER_LEVEL {
        let item = spawn_item(&mut state.rng, player_pos, bounds, multiplier, ItemKind::Bad);
        state.items.push(item);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn test_spawn_position_respects_exclusion() {
        let mut rng = Pcg32::seed_from_u64(7);
        let player_pos = PLAYER_START;
        let bounds = Bounds::default();

        for _ in 0..100 {
            let pos = spawn_position(&mut rng, player_pos, bounds, ITEM_RADIUS);
            assert!(pos.distance(player_pos) >= MIN_SPAWN_DISTANCE);
            assert!(pos.x >= ITEM_RADIUS && pos.x <= bounds.width - ITEM_RADIUS);
            assert!(pos.y >= ITEM_RADIUS && pos.y <= bounds.height - ITEM_RADIUS);
        }
    }

    #[test]
    fn test_spawn_position_terminates_on_small_bounds() {
        // Canvas far smaller than the exclusion distance: the capped loop
        // must still return an in-bounds position.
        let mut rng = Pcg32::seed_from_u64(7);
        let bounds = Bounds::new(100.0, 100.0);
        let player_pos = Vec2::new(50.0, 50.0);

        let pos = spawn_position(&mut rng, player_pos, bounds, ITEM_RADIUS);
        assert!(pos.x >= ITEM_RADIUS && pos.x <= bounds.width - ITEM_RADIUS);
        assert!(pos.y >= ITEM_RADIUS && pos.y <= bounds.height - ITEM_RADIUS);
    }

    #[test]
    fn test_spawn_level_counts() {
        let state = GameState::new(42);
        let good = state.items.iter().filter(|i| i.kind == ItemKind::Good).count();
        let bad = state.items.iter().filter(|i| i.kind == ItemKind::Bad).count();
        assert_eq!(good, GOOD_PER_LEVEL);
        assert_eq!(bad, BAD_PER_LEVEL);
    }

    #[test]
    fn test_spawn_speed_scales_with_multiplier() {
        let mut state = GameState::new(42);
        state.speed_multiplier = 2.0;
        spawn_level(&mut state);

        for item in &state.items {
            let speed = item.vel.length();
            assert!(speed >= ITEM_BASE_SPEED * 2.0 - 1e-3);
            assert!(speed < (ITEM_BASE_SPEED + 1.0) * 2.0 + 1e-3);
        }
    }

    #[test]
    fn test_spawn_labels_come_from_pools() {
        let state = GameState::new(9);
        for item in &state.items {
            let pool = assets::pool(item.kind);
            assert_eq!(item.name, assets::display_name(pool[item.sprite]));
        }
    }
}
