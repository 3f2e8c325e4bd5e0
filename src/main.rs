//! Breakwall entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, TouchEvent};

    use breakwall::consts::*;
    use breakwall::renderer::{render, Surface};
    use breakwall::sim::{tick, GameEvent, GamePhase, GameState};
    use glam::Vec2;

    /// Canvas-2D backend for the renderer's `Surface` trait
    struct CanvasSurface {
        ctx: CanvasRenderingContext2d,
    }

    impl Surface for CanvasSurface {
        fn clear(&mut self, width: f32, height: f32) {
            self.ctx.clear_rect(0.0, 0.0, width as f64, height as f64);
        }

        fn fill_rect(&mut self, pos: Vec2, size: Vec2, color: &str) {
            self.ctx.set_fill_style_str(color);
            self.ctx
                .fill_rect(pos.x as f64, pos.y as f64, size.x as f64, size.y as f64);
        }

        fn fill_circle(&mut self, center: Vec2, radius: f32, color: &str) {
            self.ctx.begin_path();
            let _ = self.ctx.arc(
                center.x as f64,
                center.y as f64,
                radius as f64,
                0.0,
                std::f64::consts::TAU,
            );
            self.ctx.set_fill_style_str(color);
            self.ctx.fill();
            self.ctx.close_path();
        }
    }

    /// Game instance holding all state
    struct App {
        state: GameState,
        surface: Option<CanvasSurface>,
        events: Vec<GameEvent>,
        /// Reference x of the active touch drag
        touch_x: Option<f32>,
    }

    impl App {
        fn new(width: f32, height: f32) -> Self {
            Self {
                state: GameState::new(width, height),
                surface: None,
                events: Vec::new(),
                touch_x: None,
            }
        }

        /// Full reset for a start/restart action
        fn restart(&mut self, width: f32, height: f32) {
            self.state = GameState::new(width, height);
            self.state.phase = GamePhase::Running;
            self.events.clear();
            self.touch_x = None;
        }

        /// Run one frame: advance the simulation, then draw
        fn frame(&mut self) {
            tick(&mut self.state, &mut self.events);
            if let Some(ref mut surface) = self.surface {
                render(&self.state, surface);
            }
        }

        /// Push tick events out to the DOM (score readout, end-of-game UI)
        fn publish_events(&mut self) {
            for event in self.events.drain(..) {
                match event {
                    GameEvent::BrickDestroyed { score } => {
                        set_text("score", &score.to_string());
                    }
                    GameEvent::GameOver { score } => {
                        set_text("start-btn", "Restart");
                        show_outcome("Game over!", score);
                        log::info!("Game over, score {score}");
                    }
                    GameEvent::Victory { score } => {
                        set_text("start-btn", "Play Again");
                        show_outcome("You win!", score);
                        log::info!("Victory, score {score}");
                    }
                }
            }
        }
    }

    /// Set the text content of a DOM element by id
    fn set_text(id: &str, text: &str) {
        let document = web_sys::window().unwrap().document().unwrap();
        if let Some(el) = document.get_element_by_id(id) {
            el.set_text_content(Some(text));
        }
    }

    /// Show the end-of-game overlay with outcome and final score
    fn show_outcome(message: &str, score: u32) {
        let document = web_sys::window().unwrap().document().unwrap();
        if let Some(el) = document.get_element_by_id("game-over") {
            let _ = el.set_attribute("class", "");
        }
        set_text("outcome", message);
        set_text("final-score", &score.to_string());
    }

    /// Hide the end-of-game overlay
    fn hide_outcome() {
        let document = web_sys::window().unwrap().document().unwrap();
        if let Some(el) = document.get_element_by_id("game-over") {
            let _ = el.set_attribute("class", "hidden");
        }
    }

    /// Size the canvas from its container: client width minus padding,
    /// 0.6 aspect. Returns the logical (width, height) the game runs at.
    fn resize_canvas(canvas: &HtmlCanvasElement) -> (f32, f32) {
        let container_width = canvas
            .parent_element()
            .map(|el| el.client_width() as f32)
            .unwrap_or(800.0 + CANVAS_PADDING);
        let width = container_width - CANVAS_PADDING;
        let height = width * CANVAS_ASPECT;
        canvas.set_width(width as u32);
        canvas.set_height(height as u32);
        (width, height)
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Breakwall starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        let (width, height) = resize_canvas(&canvas);

        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")
            .expect("get_context failed")
            .expect("no 2d context")
            .dyn_into()
            .expect("not a 2d context");

        let app = Rc::new(RefCell::new(App::new(width, height)));
        app.borrow_mut().surface = Some(CanvasSurface { ctx });

        setup_input_handlers(&canvas, app.clone());
        setup_start_button(&canvas, app.clone());
        setup_resize(&canvas, app);

        log::info!("Breakwall ready ({width}x{height})");
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, app: Rc<RefCell<App>>) {
        // Mouse move - center paddle on the pointer
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let mut a = app.borrow_mut();
                if a.state.phase.is_running() {
                    a.state.move_paddle_to(event.offset_x() as f32);
                }
            });
            let _ = canvas
                .add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch start - record the drag reference point
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                if let Some(touch) = event.touches().get(0) {
                    app.borrow_mut().touch_x = Some(touch.client_x() as f32);
                }
            });
            let _ = canvas
                .add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch move - apply the drag delta to the paddle
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                let mut a = app.borrow_mut();
                if !a.state.phase.is_running() {
                    return;
                }
                if let Some(touch) = event.touches().get(0) {
                    let x = touch.client_x() as f32;
                    if let Some(start_x) = a.touch_x {
                        a.state.nudge_paddle(x - start_x);
                    }
                    a.touch_x = Some(x);
                }
            });
            let _ = canvas
                .add_event_listener_with_callback("touchmove", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_start_button(canvas: &HtmlCanvasElement, app: Rc<RefCell<App>>) {
        let document = web_sys::window().unwrap().document().unwrap();

        if let Some(btn) = document.get_element_by_id("start-btn") {
            let canvas = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                if app.borrow().state.phase.is_running() {
                    return;
                }

                let (width, height) = resize_canvas(&canvas);
                app.borrow_mut().restart(width, height);

                set_text("start-btn", "Playing...");
                set_text("score", "0");
                hide_outcome();

                log::info!("Game started ({width}x{height})");
                request_animation_frame(app.clone());
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_resize(canvas: &HtmlCanvasElement, app: Rc<RefCell<App>>) {
        let window = web_sys::window().unwrap();
        let canvas = canvas.clone();

        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            let (width, height) = resize_canvas(&canvas);
            let mut a = app.borrow_mut();
            if a.state.phase.is_running() {
                // Destructive: layout depends on canvas width, so reinit
                a.restart(width, height);
                set_text("score", "0");
                log::info!("Resized while running, reinitialized ({width}x{height})");
            }
        });
        let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn request_animation_frame(app: Rc<RefCell<App>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |_time: f64| {
            game_loop(app);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(app: Rc<RefCell<App>>) {
        {
            let mut a = app.borrow_mut();
            // Cancellation is just the cleared flag: a terminal tick leaves
            // the phase non-running and the next scheduled callback exits
            // here without rescheduling.
            if !a.state.phase.is_running() {
                return;
            }

            a.frame();
            a.publish_events();
        }

        request_animation_frame(app);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Breakwall (native) starting...");
    log::info!("Native mode is headless - run with `trunk serve` for the web version");

    println!("\nRunning headless simulation check...");
    headless_run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Drive a full game headlessly with a paddle that tracks the ball
#[cfg(not(target_arch = "wasm32"))]
fn headless_run() {
    use breakwall::sim::{tick, GamePhase, GameState};

    let mut state = GameState::new(800.0, 480.0);
    state.phase = GamePhase::Running;
    assert_eq!(state.bricks.len(), 40);

    let mut events = Vec::new();
    let mut frames = 0u32;
    while state.phase == GamePhase::Running && frames < 100_000 {
        state.move_paddle_to(state.ball.pos.x);
        tick(&mut state, &mut events);
        frames += 1;
    }

    println!(
        "✓ Simulated {} frames, phase {:?}, score {}, {} bricks left",
        frames,
        state.phase,
        state.score,
        state.bricks_remaining()
    );
}
