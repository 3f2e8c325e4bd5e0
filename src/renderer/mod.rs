//! Draw-command emission over an abstract 2D surface
//!
//! The simulation never talks to a real canvas: [`render`] walks the game
//! state and issues clear/rect/circle commands against the [`Surface`] trait.
//! The wasm host backs it with a `CanvasRenderingContext2d`; tests back it
//! with a command recorder.

use crate::consts::*;
use crate::sim::GameState;
use glam::Vec2;

/// A 2D raster surface the game can draw on
///
/// Colors are CSS color strings; the core never manages color spaces or
/// pixel formats, it only issues shape commands.
pub trait Surface {
    /// Clear the full drawing region
    fn clear(&mut self, width: f32, height: f32);
    /// Fill an axis-aligned rectangle, `pos` is the top-left corner
    fn fill_rect(&mut self, pos: Vec2, size: Vec2, color: &str);
    /// Fill a circle centered at `center`
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: &str);
}

/// Draw one frame: paddle, ball, and every still-alive brick
///
/// Destroyed bricks are skipped entirely; there is no "broken" visual state.
pub fn render(state: &GameState, surface: &mut dyn Surface) {
    surface.clear(state.width, state.height);

    surface.fill_rect(state.paddle.pos, state.paddle.size, PADDLE_COLOR);
    surface.fill_circle(state.ball.pos, state.ball.radius, BALL_COLOR);

    for brick in state.bricks.iter().filter(|b| b.alive) {
        surface.fill_rect(brick.pos, brick.size, BRICK_COLOR);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::GameState;

    #[derive(Debug, PartialEq)]
    enum Command {
        Clear(f32, f32),
        Rect(Vec2, Vec2, String),
        Circle(Vec2, f32, String),
    }

    #[derive(Default)]
    struct Recorder {
        commands: Vec<Command>,
    }

    impl Surface for Recorder {
        fn clear(&mut self, width: f32, height: f32) {
            self.commands.push(Command::Clear(width, height));
        }
        fn fill_rect(&mut self, pos: Vec2, size: Vec2, color: &str) {
            self.commands.push(Command::Rect(pos, size, color.to_string()));
        }
        fn fill_circle(&mut self, center: Vec2, radius: f32, color: &str) {
            self.commands.push(Command::Circle(center, radius, color.to_string()));
        }
    }

    #[test]
    fn test_full_frame_command_stream() {
        let state = GameState::new(800.0, 480.0);
        let mut surface = Recorder::default();

        render(&state, &mut surface);

        // Clear, paddle, ball, then all 40 bricks
        assert_eq!(surface.commands.len(), 43);
        assert_eq!(surface.commands[0], Command::Clear(800.0, 480.0));
        assert_eq!(
            surface.commands[1],
            Command::Rect(state.paddle.pos, state.paddle.size, PADDLE_COLOR.into())
        );
        assert_eq!(
            surface.commands[2],
            Command::Circle(state.ball.pos, state.ball.radius, BALL_COLOR.into())
        );
    }

    #[test]
    fn test_destroyed_bricks_are_skipped() {
        let mut state = GameState::new(800.0, 480.0);
        state.bricks[3].alive = false;
        state.bricks[17].alive = false;
        let mut surface = Recorder::default();

        render(&state, &mut surface);

        let brick_rects = surface
            .commands
            .iter()
            .filter(|c| matches!(c, Command::Rect(_, _, color) if color == BRICK_COLOR))
            .count();
        assert_eq!(brick_rects, 38);
    }
}
