//! Per-frame movement and boundary handling
//!
//! The player clamps against the canvas edges; coins reflect off them.
//! Reflection is evaluated once per axis per tick, each axis independent:
//! the position update on a contacted axis is undone and that velocity
//! component negated.

use super::state::{Bounds, Item, Player};

/// Advance the player one frame, keeping its full box inside the canvas.
pub fn advance_player(player: &mut Player, bounds: Bounds) {
    player.pos += player.vel;
    player.pos.x = player.pos.x.clamp(0.0, bounds.width - player.size.x);
    player.pos.y = player.pos.y.clamp(0.0, bounds.height - player.size.y);
}

/// Advance a coin one frame, reflecting elastically at the canvas edges.
pub fn advance_item(item: &mut Item, bounds: Bounds) {
    let old = item.pos;
    item.pos += item.vel;

    if item.pos.x - item.radius < 0.0 || item.pos.x + item.radius > bounds.width {
        item.pos.x = old.x;
        item.vel.x = -item.vel.x;
    }
    if item.pos.y - item.radius < 0.0 || item.pos.y + item.radius > bounds.height {
        item.pos.y = old.y;
        item.vel.y = -item.vel.y;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::ItemKind;
    use glam::Vec2;
    use proptest::prelude::*;

    fn item_at(pos: Vec2, vel: Vec2) -> Item {
        Item {
            pos,
            vel,
            radius: 15.0,
            kind: ItemKind::Good,
            sprite: 0,
            name: "Bitcoin".to_string(),
        }
    }

    #[test]
    fn test_player_clamps_at_edges() {
        let bounds = Bounds::new(600.0, 400.0);

        let mut player = Player::default();
        player.pos = Vec2::new(1.0, 1.0);
        player.vel = Vec2::new(-5.0, -5.0);
        advance_player(&mut player, bounds);
        assert_eq!(player.pos, Vec2::ZERO);

        let mut player = Player::default();
        player.pos = Vec2::new(579.0, 379.0);
        player.vel = Vec2::new(5.0, 5.0);
        advance_player(&mut player, bounds);
        assert_eq!(player.pos, Vec2::new(580.0, 380.0));
    }

    #[test]
    fn test_item_reflects_x_only() {
        let bounds = Bounds::new(600.0, 400.0);
        let mut item = item_at(Vec2::new(17.0, 200.0), Vec2::new(-4.0, 1.5));

        advance_item(&mut item, bounds);
        // X reverted to pre-tick, velocity negated; Y unaffected
        assert_eq!(item.pos.x, 17.0);
        assert_eq!(item.vel.x, 4.0);
        assert_eq!(item.pos.y, 201.5);
        assert_eq!(item.vel.y, 1.5);
    }

    #[test]
    fn test_item_reflects_y_only() {
        let bounds = Bounds::new(600.0, 400.0);
        let mut item = item_at(Vec2::new(300.0, 384.0), Vec2::new(2.0, 3.0));

        advance_item(&mut item, bounds);
        assert_eq!(item.pos.y, 384.0);
        assert_eq!(item.vel.y, -3.0);
        assert_eq!(item.pos.x, 302.0);
        assert_eq!(item.vel.x, 2.0);
    }

    #[test]
    fn test_item_free_flight_unchanged() {
        let bounds = Bounds::new(600.0, 400.0);
        let mut item = item_at(Vec2::new(300.0, 200.0), Vec2::new(1.0, -2.0));

        advance_item(&mut item, bounds);
        assert_eq!(item.pos, Vec2::new(301.0, 198.0));
        assert_eq!(item.vel, Vec2::new(1.0, -2.0));
    }

    proptest! {
        #[test]
        fn prop_player_stays_in_bounds(
            x in 0.0f32..580.0,
            y in 0.0f32..380.0,
            dx in -10.0f32..10.0,
            dy in -10.0f32..10.0,
        ) {
            let bounds = Bounds::new(600.0, 400.0);
            let mut player = Player::default();
            player.pos = Vec2::new(x, y);
            player.vel = Vec2::new(dx, dy);

            advance_player(&mut player, bounds);

            prop_assert!(player.pos.x >= 0.0);
            prop_assert!(player.pos.y >= 0.0);
            prop_assert!(player.pos.x + player.size.x <= bounds.width);
            prop_assert!(player.pos.y + player.size.y <= bounds.height);
        }

        #[test]
        fn prop_item_stays_in_bounds(
            x in 15.0f32..585.0,
            y in 15.0f32..385.0,
            dx in -5.0f32..5.0,
            dy in -5.0f32..5.0,
        ) {
            let bounds = Bounds::new(600.0, 400.0);
            let mut item = item_at(Vec2::new(x, y), Vec2::new(dx, dy));

            advance_item(&mut item, bounds);

            // A move is either accepted (leading edge inside) or reverted
            // to the in-bounds pre-tick position, so the coin never ends a
            // tick outside the canvas.
            prop_assert!(item.pos.x - item.radius >= -1e-3);
            prop_assert!(item.pos.x + item.radius <= bounds.width + 1e-3);
            prop_assert!(item.pos.y - item.radius >= -1e-3);
            prop_assert!(item.pos.y + item.radius <= bounds.height + 1e-3);
        }

        #[test]
        fn prop_reflection_preserves_speed(
            x in 15.0f32..585.0,
            y in 15.0f32..385.0,
            dx in -5.0f32..5.0,
            dy in -5.0f32..5.0,
        ) {
            let bounds = Bounds::new(600.0, 400.0);
            let mut item = item_at(Vec2::new(x, y), Vec2::new(dx, dy));
            let speed_before = item.vel.length();

            advance_item(&mut item, bounds);

            prop_assert!((item.vel.length() - speed_before).abs() < 1e-4);
        }
    }
}
