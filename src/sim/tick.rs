//! Per-frame simulation step
//!
//! One call to [`tick`] advances the game by exactly one frame, in source
//! order: integrate, wall reflection, paddle collision, brick collisions,
//! terminal checks. Velocities are in pixels per frame, so there is no dt.

use super::collision::{paddle_rebound, point_in_rect};
use super::state::{GameEvent, GamePhase, GameState};
use crate::consts::BRICK_SCORE;

/// Advance the game state by one frame, appending any events produced
///
/// Does nothing unless the game is in the `Running` phase. A terminal
/// transition (bottom exit, last brick) flips the phase and emits the
/// matching event; the host stops scheduling frames when it sees the phase
/// is no longer running.
pub fn tick(state: &mut GameState, events: &mut Vec<GameEvent>) {
    if state.phase != GamePhase::Running {
        return;
    }

    // Integrate
    state.ball.pos += state.ball.vel;

    // Wall reflection: left/right flip dx, top flips dy. The bottom edge
    // never reflects; crossing it is the loss condition below.
    if state.ball.pos.x + state.ball.radius > state.width
        || state.ball.pos.x - state.ball.radius < 0.0
    {
        state.ball.vel.x = -state.ball.vel.x;
    }
    if state.ball.pos.y - state.ball.radius < 0.0 {
        state.ball.vel.y = -state.ball.vel.y;
    }

    // Paddle collision: lower-boundary crossing with the ball x inside the
    // paddle span. Fast balls can tunnel past this on rare frames; accepted.
    let (paddle_left, paddle_right) = state.paddle.span();
    if state.ball.pos.y + state.ball.radius > state.paddle.pos.y
        && state.ball.pos.x > paddle_left
        && state.ball.pos.x < paddle_right
    {
        state.ball.vel = paddle_rebound(
            state.ball.pos.x,
            state.paddle.pos.x,
            state.paddle.size.x,
            state.ball.speed,
        );
    }

    // Brick collisions: ball center vs brick rect, every active brick
    // checked with no early exit, so one frame can register several hits.
    for brick in &mut state.bricks {
        if brick.alive && point_in_rect(state.ball.pos, brick.pos, brick.size) {
            state.ball.vel.y = -state.ball.vel.y;
            brick.alive = false;
            state.score += BRICK_SCORE;
            events.push(GameEvent::BrickDestroyed { score: state.score });
        }
    }

    // Terminal checks, loss evaluated before victory
    if state.ball.pos.y + state.ball.radius > state.height {
        state.phase = GamePhase::GameOver;
        events.push(GameEvent::GameOver { score: state.score });
    }
    if state.bricks.iter().all(|b| !b.alive) {
        state.phase = GamePhase::Victory;
        events.push(GameEvent::Victory { score: state.score });
    }
}
