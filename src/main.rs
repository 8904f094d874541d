//! Crypto Dash entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, KeyboardEvent};

    use crypto_dash::assets;
    use crypto_dash::consts::*;
    use crypto_dash::render::{SpriteStore, draw_frame};
    use crypto_dash::sim::{GamePhase, GameState, ItemKind, TickInput, tick};
    use crypto_dash::{Settings, UiLayout};

    /// Game instance holding all state
    struct Game {
        state: GameState,
        ctx: CanvasRenderingContext2d,
        sprites: SpriteStore,
        settings: Settings,
        /// Held-key axis state, consumed by every tick
        input: TickInput,
        // FPS tracking
        frame_times: [f64; 60],
        frame_index: usize,
        fps: u32,
    }

    impl Game {
        fn new(
            seed: u64,
            ctx: CanvasRenderingContext2d,
            sprites: SpriteStore,
            settings: Settings,
        ) -> Self {
            Self {
                state: GameState::new(seed),
                ctx,
                sprites,
                settings,
                input: TickInput::default(),
                frame_times: [0.0; 60],
                frame_index: 0,
                fps: 0,
            }
        }

        /// Run one simulation tick and refresh the FPS window
        fn update(&mut self, time: f64) {
            let input = self.input;
            tick(&mut self.state, &input);

            self.frame_times[self.frame_index] = time;
            self.frame_index = (self.frame_index + 1) % 60;

            let oldest_time = self.frame_times[self.frame_index];
            if oldest_time > 0.0 {
                let elapsed = time - oldest_time;
                if elapsed > 0.0 {
                    self.fps = (60000.0 / elapsed).round() as u32;
                }
            }
        }

        /// Render the current frame
        fn render(&self) {
            draw_frame(&self.ctx, &self.state, &self.sprites);
        }

        /// Update HUD elements in the DOM
        fn update_hud(&self) {
            let window = web_sys::window().unwrap();
            let document = window.document().unwrap();

            if let Some(el) = document.get_element_by_id("score") {
                el.set_text_content(Some(&format!(
                    "Score: {}   Level: {}",
                    self.state.score, self.state.level
                )));
            }

            if let Some(el) = document.get_element_by_id("last-collected") {
                let label = self.state.last_collected.as_deref().unwrap_or("None");
                el.set_text_content(Some(&format!("Last Collected: {label}")));
            }

            if self.settings.show_fps {
                if let Some(el) = document.get_element_by_id("fps") {
                    el.set_text_content(Some(&format!("{} fps", self.fps)));
                }
            }

            // Game-over overlay and restart affordance
            let over = self.state.phase == GamePhase::GameOver;
            if let Some(el) = document.get_element_by_id("game-over") {
                if over {
                    let label = self.state.last_bad.as_deref().unwrap_or("None");
                    el.set_inner_html(&format!(
                        "<div>Game Over! Your score: {}<br>Wrong coin collected: {}</div>",
                        self.state.score, label
                    ));
                } else {
                    el.set_inner_html("");
                }
            }
            if let Some(btn) = document.get_element_by_id("restart-btn") {
                let _ = btn.set_attribute("class", if over { "" } else { "hidden" });
            }
        }

        /// Reset for a new session
        fn restart(&mut self, seed: u64) {
            self.state = GameState::new(seed);
            self.input = TickInput::default();
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Crypto Dash starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("gameCanvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");
        canvas.set_width(CANVAS_WIDTH as u32);
        canvas.set_height(CANVAS_HEIGHT as u32);

        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")
            .expect("2d context request failed")
            .expect("no 2d context")
            .dyn_into()
            .expect("not a 2d context");

        let settings = Settings::load();
        apply_layout(&settings);

        let sprites = SpriteStore::load().expect("failed to create sprite images");

        let seed = js_sys::Date::now() as u64;
        let game = Rc::new(RefCell::new(Game::new(seed, ctx, sprites, settings)));
        log::info!("Game initialized with seed: {}", seed);

        setup_input_handlers(game.clone());
        setup_restart_button(game.clone());

        request_animation_frame(game);

        log::info!("Crypto Dash running!");
    }

    /// Show or hide the coin sidebar and fill its lists
    fn apply_layout(settings: &Settings) {
        let document = web_sys::window().unwrap().document().unwrap();

        if let Some(el) = document.get_element_by_id("sidebar") {
            let _ = el.set_attribute(
                "class",
                match settings.layout {
                    UiLayout::Sidebar => "",
                    UiLayout::Overlay => "hidden",
                },
            );
        }
        if settings.layout == UiLayout::Sidebar {
            populate_coin_list(ItemKind::Good, "good-list");
            populate_coin_list(ItemKind::Bad, "bad-list");
        }
    }

    /// Fill one sidebar list with the coins of a category
    fn populate_coin_list(kind: ItemKind, element_id: &str) {
        let document = web_sys::window().unwrap().document().unwrap();
        let Some(list) = document.get_element_by_id(element_id) else {
            return;
        };

        let mut html = String::new();
        for &file in assets::pool(kind) {
            let path = assets::sprite_path(kind, file);
            let name = assets::display_name(file);
            html.push_str(&format!(
                "<div class=\"coinItem\"><img src=\"{path}\" alt=\"{name}\"><span>{name}</span></div>"
            ));
        }
        list.set_inner_html(&html);
    }

    fn setup_input_handlers(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();

        // Key down: set the axis for the pressed direction
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let mut g = game.borrow_mut();
                match event.key().as_str() {
                    "ArrowRight" => g.input.axis_x = 1,
                    "ArrowLeft" => g.input.axis_x = -1,
                    "ArrowUp" => g.input.axis_y = -1,
                    "ArrowDown" => g.input.axis_y = 1,
                    _ => {}
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Key up: clear the axis the released key belongs to
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let mut g = game.borrow_mut();
                match event.key().as_str() {
                    "ArrowRight" | "ArrowLeft" => g.input.axis_x = 0,
                    "ArrowUp" | "ArrowDown" => g.input.axis_y = 0,
                    _ => {}
                }
            });
            let _ =
                window.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_restart_button(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let document = window.document().unwrap();

        if let Some(btn) = document.get_element_by_id("restart-btn") {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                // The loop stopped scheduling at game over; restarting
                // builds a fresh session and re-enters it.
                let over = game.borrow().state.phase == GamePhase::GameOver;
                if !over {
                    return;
                }
                let seed = js_sys::Date::now() as u64;
                game.borrow_mut().restart(seed);
                log::info!("Game restarted with seed: {}", seed);
                request_animation_frame(game.clone());
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        let game_over = {
            let mut g = game.borrow_mut();
            g.update(time);
            g.render();
            g.update_hud();
            g.state.phase == GamePhase::GameOver
        };

        if game_over {
            let g = game.borrow();
            log::info!(
                "Game over at level {} with score {} ({})",
                g.state.level,
                g.state.score,
                g.state.last_bad.as_deref().unwrap_or("None"),
            );
            // Final frame drawn; stop rescheduling until restart
            return;
        }

        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use std::time::{SystemTime, UNIX_EPOCH};

    use crypto_dash::sim::{GamePhase, GameState, TickInput, tick};

    env_logger::init();
    log::info!("Crypto Dash (native) starting...");
    log::info!("Native mode runs a headless session - run with `trunk serve` for the web version");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);
    let mut state = GameState::new(seed);
    log::info!("Headless session with seed: {}", seed);

    // Sweep the canvas diagonally until the run ends or time runs out
    let input = TickInput { axis_x: 1, axis_y: 1 };
    for _ in 0..3600 {
        tick(&mut state, &input);
        if state.phase == GamePhase::GameOver {
            break;
        }
    }

    match state.phase {
        GamePhase::GameOver => log::info!(
            "Game over after {} ticks: score {} at level {} ({})",
            state.time_ticks,
            state.score,
            state.level,
            state.last_bad.as_deref().unwrap_or("None"),
        ),
        GamePhase::Playing => log::info!(
            "Session still live after {} ticks: score {} at level {}",
            state.time_ticks,
            state.score,
            state.level,
        ),
    }
}
