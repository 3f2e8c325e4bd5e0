//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed-size step per frame
//! - No rendering or platform dependencies
//! - Host input arrives as explicit paddle moves before a tick

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::{paddle_rebound, point_in_rect};
pub use state::{Ball, Brick, BrickConfig, GameEvent, GamePhase, GameState, Paddle};
pub use tick::tick;
