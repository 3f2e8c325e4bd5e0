//! Game state and core simulation types
//!
//! A full game lives in one [`GameState`] value: the host creates it on every
//! start action and mutates it through [`tick`](super::tick::tick) and the
//! paddle input methods. Nothing here touches the DOM or the drawing surface.

use glam::Vec2;

use crate::consts::*;

/// Lifecycle phase of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// No game in progress; last frame (if any) stays on screen
    Idle,
    /// Frame loop active
    Running,
    /// Ball exited the bottom edge
    GameOver,
    /// Every brick destroyed
    Victory,
}

impl GamePhase {
    /// True while the frame loop should keep scheduling itself
    pub fn is_running(self) -> bool {
        self == GamePhase::Running
    }
}

/// Events emitted by a tick, observed by the host UI
///
/// Terminal events replace the blocking end-of-game alert: the host decides
/// how to present them (overlay, button relabel).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// A brick was destroyed; carries the updated total score
    BrickDestroyed { score: u32 },
    /// Ball fell past the bottom edge; carries the final score
    GameOver { score: u32 },
    /// Last brick destroyed; carries the final score
    Victory { score: u32 },
}

/// The player's paddle
#[derive(Debug, Clone)]
pub struct Paddle {
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
    /// Nominal horizontal speed (pixels per frame)
    pub speed: f32,
}

impl Paddle {
    /// Horizontal span as (left, right)
    pub fn span(&self) -> (f32, f32) {
        (self.pos.x, self.pos.x + self.size.x)
    }
}

/// The ball
#[derive(Debug, Clone)]
pub struct Ball {
    /// Center position
    pub pos: Vec2,
    /// Velocity in pixels per frame
    pub vel: Vec2,
    pub radius: f32,
    /// Scalar speed used for launch and paddle rebound
    pub speed: f32,
}

/// One destructible brick
#[derive(Debug, Clone)]
pub struct Brick {
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
    /// Flips to false exactly once, on first ball contact
    pub alive: bool,
}

/// Brick grid geometry, computed once per game start from canvas width
#[derive(Debug, Clone)]
pub struct BrickConfig {
    pub rows: u32,
    pub cols: u32,
    /// Cell size (width derived from canvas width, fixed height)
    pub size: Vec2,
    pub padding: f32,
    /// Top-left of the grid (left offset centers the grid)
    pub offset: Vec2,
}

impl BrickConfig {
    /// Compute grid geometry for a canvas of the given width
    pub fn for_canvas(width: f32) -> Self {
        let cols = BRICK_COLS;
        let cell_width = (width - (cols + 1) as f32 * BRICK_PADDING) / cols as f32;
        let grid_width = cols as f32 * (cell_width + BRICK_PADDING) - BRICK_PADDING;
        Self {
            rows: BRICK_ROWS,
            cols,
            size: Vec2::new(cell_width, BRICK_HEIGHT),
            padding: BRICK_PADDING,
            offset: Vec2::new((width - grid_width) / 2.0, BRICK_OFFSET_TOP),
        }
    }

    /// Top-left corner of the cell at (row, col)
    pub fn cell_pos(&self, row: u32, col: u32) -> Vec2 {
        self.offset
            + Vec2::new(
                col as f32 * (self.size.x + self.padding),
                row as f32 * (self.size.y + self.padding),
            )
    }
}

/// Complete game state for one run
#[derive(Debug, Clone)]
pub struct GameState {
    /// Canvas dimensions the run was initialized against
    pub width: f32,
    pub height: f32,
    pub phase: GamePhase,
    /// Monotonically increasing, +10 per brick
    pub score: u32,
    pub paddle: Paddle,
    pub ball: Ball,
    /// Fixed rows*cols bricks; only the alive count shrinks during a run
    pub bricks: Vec<Brick>,
    pub brick_config: BrickConfig,
}

impl GameState {
    /// Initialize a fresh game for the given canvas dimensions
    ///
    /// Paddle centered above the bottom margin, ball centered on top of the
    /// paddle with a diagonal launch velocity, full brick grid, score zero.
    /// The caller flips the phase to `Running` when the frame loop starts.
    pub fn new(width: f32, height: f32) -> Self {
        let paddle = Paddle {
            pos: Vec2::new(
                (width - PADDLE_WIDTH) / 2.0,
                height - PADDLE_HEIGHT - PADDLE_BOTTOM_MARGIN,
            ),
            size: Vec2::new(PADDLE_WIDTH, PADDLE_HEIGHT),
            speed: PADDLE_SPEED,
        };

        let ball = Ball {
            pos: Vec2::new(width / 2.0, paddle.pos.y - BALL_RADIUS),
            vel: Vec2::new(BALL_SPEED, -BALL_SPEED),
            radius: BALL_RADIUS,
            speed: BALL_SPEED,
        };

        let brick_config = BrickConfig::for_canvas(width);
        let mut bricks = Vec::with_capacity((brick_config.rows * brick_config.cols) as usize);
        for row in 0..brick_config.rows {
            for col in 0..brick_config.cols {
                bricks.push(Brick {
                    pos: brick_config.cell_pos(row, col),
                    size: brick_config.size,
                    alive: true,
                });
            }
        }

        Self {
            width,
            height,
            phase: GamePhase::Idle,
            score: 0,
            paddle,
            ball,
            bricks,
            brick_config,
        }
    }

    /// Center the paddle on an absolute x coordinate (mouse input)
    pub fn move_paddle_to(&mut self, x: f32) {
        self.paddle.pos.x = x - self.paddle.size.x / 2.0;
        self.clamp_paddle();
    }

    /// Shift the paddle horizontally (touch-drag input)
    pub fn nudge_paddle(&mut self, dx: f32) {
        self.paddle.pos.x += dx;
        self.clamp_paddle();
    }

    /// Keep the paddle inside the canvas. Invariant-preserving correction,
    /// not an error path.
    fn clamp_paddle(&mut self) {
        // min-then-max so a canvas narrower than the paddle pins it left
        // instead of panicking on an inverted clamp range
        self.paddle.pos.x = self
            .paddle
            .pos
            .x
            .min(self.width - self.paddle.size.x)
            .max(0.0);
    }

    /// Number of bricks still standing
    pub fn bricks_remaining(&self) -> usize {
        self.bricks.iter().filter(|b| b.alive).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_init_800x480() {
        // Reference scenario: 800px container width after padding, 0.6 aspect
        let state = GameState::new(800.0, 480.0);

        assert_eq!(state.paddle.pos.x, 350.0);
        assert_eq!(state.paddle.pos.y, 480.0 - 10.0 - 10.0);
        assert_eq!(state.bricks.len(), 40);
        assert_eq!(state.bricks_remaining(), 40);
        assert_eq!(state.score, 0);
        assert_eq!(state.phase, GamePhase::Idle);

        // Ball centered above the paddle, launching up-right
        assert_eq!(state.ball.pos.x, 400.0);
        assert_eq!(state.ball.pos.y, state.paddle.pos.y - state.ball.radius);
        assert_eq!(state.ball.vel, Vec2::new(5.0, -5.0));
    }

    #[test]
    fn test_brick_grid_centered() {
        let state = GameState::new(800.0, 480.0);
        let cfg = &state.brick_config;

        // 8 cols, 10px padding: cell width (800 - 90) / 8
        assert!((cfg.size.x - 88.75).abs() < 1e-4);

        // Grid is horizontally centered: equal margins on both sides
        let first = &state.bricks[0];
        let last_col = &state.bricks[(cfg.cols - 1) as usize];
        let right_margin = 800.0 - (last_col.pos.x + last_col.size.x);
        assert!((first.pos.x - right_margin).abs() < 1e-3);
        assert_eq!(first.pos.y, BRICK_OFFSET_TOP);
    }

    #[test]
    fn test_paddle_moves_clamped() {
        let mut state = GameState::new(800.0, 480.0);

        state.move_paddle_to(-500.0);
        assert_eq!(state.paddle.pos.x, 0.0);

        state.move_paddle_to(5000.0);
        assert_eq!(state.paddle.pos.x, 800.0 - PADDLE_WIDTH);

        state.move_paddle_to(400.0);
        assert_eq!(state.paddle.pos.x, 350.0);

        state.nudge_paddle(-10000.0);
        assert_eq!(state.paddle.pos.x, 0.0);
    }

    proptest! {
        /// Paddle x stays within [0, width - paddle_width] after any input
        #[test]
        fn prop_paddle_always_in_bounds(
            moves in prop::collection::vec(-2000.0f32..2000.0, 0..32),
            absolute in proptest::bool::ANY,
        ) {
            let mut state = GameState::new(800.0, 480.0);
            for m in moves {
                if absolute {
                    state.move_paddle_to(m);
                } else {
                    state.nudge_paddle(m);
                }
                prop_assert!(state.paddle.pos.x >= 0.0);
                prop_assert!(state.paddle.pos.x <= state.width - state.paddle.size.x);
            }
        }
    }
}
