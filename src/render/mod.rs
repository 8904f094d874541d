//! Canvas2D rendering adapter
//!
//! Sprites load fire-and-forget; every draw call checks `complete()` on
//! the image it wants and falls back to a flat shape when the decode has
//! not finished yet. The fallback path allocates nothing and never waits.

use wasm_bindgen::JsValue;
use web_sys::{CanvasRenderingContext2d, HtmlImageElement};

use crate::assets;
use crate::sim::{GameState, Item, ItemKind};

/// Fallback colors while images are still decoding
const FALLBACK_BACKGROUND: &str = "#fff";
const FALLBACK_PLAYER: &str = "#00f";
const FALLBACK_GOOD: &str = "#f7931a";
const FALLBACK_BAD: &str = "#d33";

/// All images the game draws, created once at startup.
pub struct SpriteStore {
    background: HtmlImageElement,
    player: HtmlImageElement,
    good: Vec<HtmlImageElement>,
    bad: Vec<HtmlImageElement>,
}

impl SpriteStore {
    /// Create the image elements and kick off their loads.
    pub fn load() -> Result<Self, JsValue> {
        let background = HtmlImageElement::new()?;
        background.set_src("images/background.jpg");

        let player = HtmlImageElement::new()?;
        player.set_src("images/player.png");

        let load_pool = |kind: ItemKind| -> Result<Vec<HtmlImageElement>, JsValue> {
            assets::pool(kind)
                .iter()
                .map(|&file| {
                    let img = HtmlImageElement::new()?;
                    img.set_src(&assets::sprite_path(kind, file));
                    Ok(img)
                })
                .collect()
        };

        Ok(Self {
            background,
            player,
            good: load_pool(ItemKind::Good)?,
            bad: load_pool(ItemKind::Bad)?,
        })
    }

    fn sprite(&self, item: &Item) -> &HtmlImageElement {
        match item.kind {
            ItemKind::Good => &self.good[item.sprite],
            ItemKind::Bad => &self.bad[item.sprite],
        }
    }
}

/// Draw one full frame: background, coins, player.
pub fn draw_frame(ctx: &CanvasRenderingContext2d, state: &GameState, sprites: &SpriteStore) {
    let w = state.bounds.width as f64;
    let h = state.bounds.height as f64;
    ctx.clear_rect(0.0, 0.0, w, h);

    draw_background(ctx, sprites, w, h);
    for item in &state.items {
        draw_item(ctx, sprites, item);
    }
    draw_player(ctx, state, sprites);
}

fn draw_background(ctx: &CanvasRenderingContext2d, sprites: &SpriteStore, w: f64, h: f64) {
    if sprites.background.complete() {
        let _ = ctx.draw_image_with_html_image_element_and_dw_and_dh(
            &sprites.background,
            0.0,
            0.0,
            w,
            h,
        );
    } else {
        ctx.set_fill_style_str(FALLBACK_BACKGROUND);
        ctx.fill_rect(0.0, 0.0, w, h);
    }
}

fn draw_player(ctx: &CanvasRenderingContext2d, state: &GameState, sprites: &SpriteStore) {
    let p = &state.player;
    if sprites.player.complete() {
        let _ = ctx.draw_image_with_html_image_element_and_dw_and_dh(
            &sprites.player,
            p.pos.x as f64,
            p.pos.y as f64,
            p.size.x as f64,
            p.size.y as f64,
        );
    } else {
        ctx.set_fill_style_str(FALLBACK_PLAYER);
        ctx.fill_rect(
            p.pos.x as f64,
            p.pos.y as f64,
            p.size.x as f64,
            p.size.y as f64,
        );
    }
}

fn draw_item(ctx: &CanvasRenderingContext2d, sprites: &SpriteStore, item: &Item) {
    let img = sprites.sprite(item);
    let r = item.radius as f64;
    if img.complete() {
        let _ = ctx.draw_image_with_html_image_element_and_dw_and_dh(
            img,
            item.pos.x as f64 - r,
            item.pos.y as f64 - r,
            r * 2.0,
            r * 2.0,
        );
    } else {
        ctx.set_fill_style_str(match item.kind {
            ItemKind::Good => FALLBACK_GOOD,
            ItemKind::Bad => FALLBACK_BAD,
        });
        ctx.begin_path();
        let _ = ctx.arc(
            item.pos.x as f64,
            item.pos.y as f64,
            r,
            0.0,
            std::f64::consts::TAU,
        );
        ctx.fill();
    }
}
