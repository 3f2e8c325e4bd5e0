//! Breakwall - a browser Breakout game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, collisions, game state)
//! - `renderer`: Draw-command emission over an abstract 2D surface
//!
//! The simulation is host-agnostic: the wasm entry point in `main.rs` drives
//! it from `requestAnimationFrame` and feeds it pointer/touch input, but every
//! frame transition can run headless in tests.

pub mod renderer;
pub mod sim;

/// Game configuration constants
pub mod consts {
    /// Paddle dimensions (pixels)
    pub const PADDLE_WIDTH: f32 = 100.0;
    pub const PADDLE_HEIGHT: f32 = 10.0;
    /// Gap between paddle bottom and canvas bottom
    pub const PADDLE_BOTTOM_MARGIN: f32 = 10.0;
    /// Nominal paddle speed (pixels per frame); input is absolute/delta
    /// driven, so this is the clamp-free upper bound per event
    pub const PADDLE_SPEED: f32 = 8.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 8.0;
    /// Scalar ball speed (pixels per frame along each axis at launch)
    pub const BALL_SPEED: f32 = 5.0;

    /// Brick grid geometry
    pub const BRICK_ROWS: u32 = 5;
    pub const BRICK_COLS: u32 = 8;
    pub const BRICK_HEIGHT: f32 = 20.0;
    pub const BRICK_PADDING: f32 = 10.0;
    pub const BRICK_OFFSET_TOP: f32 = 30.0;
    /// Points awarded per destroyed brick
    pub const BRICK_SCORE: u32 = 10;

    /// Canvas sizing: container width minus padding, 0.6 aspect
    pub const CANVAS_PADDING: f32 = 40.0;
    pub const CANVAS_ASPECT: f32 = 0.6;

    /// Fill colors (CSS strings, consumed by the `Surface` trait)
    pub const PADDLE_COLOR: &str = "#4caf50";
    pub const BALL_COLOR: &str = "#ff5722";
    pub const BRICK_COLOR: &str = "#2196f3";
}
