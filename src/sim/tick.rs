//! Per-frame simulation tick and input handlers
//!
//! The driver calls these one at a time: pointer motion and button presses as
//! they arrive, `tick` once per rendered frame. Physics is frame-count based;
//! the frame time is accepted but not used for scaling.

use glam::Vec2;

use super::collision::{resolve_bricks, resolve_paddle, resolve_walls};
use super::state::{GameEvent, GameOverReason, GamePhase, GameState};
use crate::consts::MAX_LEVEL;

/// Advance the game state by one frame
pub fn tick(state: &mut GameState, _dt: f32) {
    state.time_ticks += 1;

    match state.phase {
        GamePhase::AtRest => state.rest_ball_on_paddle(),
        GamePhase::InPlay => {
            step_ball(state);
            check_progress(state);
        }
        // A ball still in flight keeps moving, but nothing is scored against
        // the player and progression is frozen
        GamePhase::GameOver => {
            if state.ball.vel != Vec2::ZERO {
                step_ball(state);
            }
        }
    }

    state.paddle.vel.x = 0.0;
}

/// Move the paddle to the pointer and record its horizontal delta
///
/// The paddle stays between the side walls. A resting ball follows it.
pub fn on_pointer_move(state: &mut GameState, x: f32, _y: f32, dx: f32, _dy: f32) {
    state.paddle.pos.x = x;
    state.paddle.vel.x = dx;

    if state.paddle.left() < state.tuning.play_left() {
        state.paddle.set_left(state.tuning.play_left());
    } else if state.paddle.right() > state.tuning.play_right() {
        state.paddle.set_right(state.tuning.play_right());
    }

    if state.phase == GamePhase::AtRest {
        state.rest_ball_on_paddle();
    }
}

/// Launch the ball straight up if it is resting on the paddle
pub fn on_primary_button_press(state: &mut GameState) {
    if state.phase != GamePhase::AtRest {
        return;
    }

    state.ball.vel = Vec2::new(0.0, state.tuning.ball_speed);
    state.phase = GamePhase::InPlay;
    state.push_event(GameEvent::Launched);
    log::debug!("Ball launched at level {}", state.level);
}

/// Move the ball one step and run the wall, paddle and brick passes
fn step_ball(state: &mut GameState) {
    state.ball.advance();

    let walls = resolve_walls(&mut state.ball, &state.tuning);
    if walls.any() {
        state.push_event(GameEvent::WallBounce);
    }

    if resolve_paddle(&mut state.ball, &mut state.paddle, state.tuning.ball_max_x) {
        let score_delta = if state.is_game_over() {
            0
        } else {
            -state.tuning.paddle_score_penalty
        };
        state.score += score_delta;
        state.push_event(GameEvent::PaddleHit { score_delta });
    }

    // Brick rewards are not gated on game over
    for brick in resolve_bricks(&mut state.ball, &mut state.bricks) {
        state.score += state.tuning.brick_score;
        log::debug!("Brick {} destroyed, score {}", brick.id, state.score);
        state.push_event(GameEvent::BrickDestroyed {
            id: brick.id,
            pos: brick.body.pos,
        });
    }
}

/// Level clear, final clear and ball loss, checked in that order
fn check_progress(state: &mut GameState) {
    if state.bricks.is_empty() && state.level < MAX_LEVEL {
        state.advance_level();
        log::info!("Level cleared, advancing to level {}", state.level);
        state.push_event(GameEvent::LevelCleared {
            next_level: state.level,
        });
    } else if state.bricks.is_empty() {
        end_game(state, GameOverReason::AllLevelsCleared);
    } else if state.ball.top() < 0.0 {
        lose_life(state);
    }
}

fn lose_life(state: &mut GameState) {
    if !state.is_game_over() {
        state.score -= state.tuning.life_score_penalty;
    }

    if state.lives > 1 {
        state.lives -= 1;
        state.reset_ball();
        log::info!("Ball lost, {} lives left", state.lives);
        state.push_event(GameEvent::LifeLost {
            lives_left: state.lives,
        });
    } else {
        state.lives = 0;
        state.push_event(GameEvent::LifeLost { lives_left: 0 });
        end_game(state, GameOverReason::OutOfLives);
    }
}

fn end_game(state: &mut GameState, reason: GameOverReason) {
    state.phase = GamePhase::GameOver;
    log::info!(
        "Game over ({:?}) at level {} with score {}",
        reason,
        state.level,
        state.score
    );
    state.push_event(GameEvent::GameOver { reason });
}

/// Driver-facing handlers
impl GameState {
    /// Advance game logic by one frame
    pub fn on_tick(&mut self, delta_time: f32) {
        tick(self, delta_time);
    }

    pub fn on_pointer_move(&mut self, x: f32, y: f32, dx: f32, dy: f32) {
        on_pointer_move(self, x, y, dx, dy);
    }

    pub fn on_primary_button_press(&mut self) {
        on_primary_button_press(self);
    }
}
