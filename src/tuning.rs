//! Data-driven game balance
//!
//! Every gameplay constant can be overridden from JSON. Missing fields fall
//! back to the defaults in [`crate::consts`].

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::layout::try_layout;

/// Errors raised while loading a tuning file
#[derive(Debug, thiserror::Error)]
pub enum TuningError {
    #[error("Failed to parse tuning JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid tuning value for `{field}`: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

/// Gameplay constants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Board ===
    pub screen_width: f32,
    pub screen_height: f32,
    /// Wall segment size; also the inset of the playable area
    pub wall_thickness: f32,

    // === Paddle ===
    /// Center y of the paddle (fixed)
    pub paddle_y: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,

    // === Ball ===
    pub ball_size: f32,
    /// Vertical speed given on launch (pixels per tick)
    pub ball_speed: f32,
    /// Horizontal speed cap after paddle contact (pixels per tick)
    pub ball_max_x: f32,

    // === Bricks ===
    pub brick_width: f32,
    pub brick_height: f32,

    // === Scoring ===
    pub brick_score: i64,
    pub paddle_score_penalty: i64,
    pub life_score_penalty: i64,

    // === Progression ===
    pub starting_lives: u32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            wall_thickness: WALL_THICKNESS,

            paddle_y: PADDLE_Y,
            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,

            ball_size: BALL_SIZE,
            ball_speed: BALL_SPEED,
            ball_max_x: BALL_MAX_X,

            brick_width: BRICK_WIDTH,
            brick_height: BRICK_HEIGHT,

            brick_score: BRICK_SCORE,
            paddle_score_penalty: PADDLE_SCORE_PENALTY,
            life_score_penalty: LIFE_SCORE_PENALTY,

            starting_lives: STARTING_LIVES,
        }
    }
}

impl Tuning {
    /// Parse and validate a tuning document
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    pub fn to_json(&self) -> Result<String, TuningError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<(), TuningError> {
        let positive = [
            ("screen_width", self.screen_width),
            ("screen_height", self.screen_height),
            ("wall_thickness", self.wall_thickness),
            ("paddle_width", self.paddle_width),
            ("paddle_height", self.paddle_height),
            ("ball_size", self.ball_size),
            ("ball_speed", self.ball_speed),
            ("brick_width", self.brick_width),
            ("brick_height", self.brick_height),
        ];
        for (field, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(TuningError::Invalid {
                    field,
                    reason: "must be a positive number",
                });
            }
        }

        if !(self.ball_max_x.is_finite() && self.ball_max_x >= 0.0) {
            return Err(TuningError::Invalid {
                field: "ball_max_x",
                reason: "must be zero or positive",
            });
        }

        if self.play_width() < self.paddle_width {
            return Err(TuningError::Invalid {
                field: "paddle_width",
                reason: "paddle does not fit between the walls",
            });
        }

        if !(self.paddle_y > 0.0 && self.paddle_y < self.play_top()) {
            return Err(TuningError::Invalid {
                field: "paddle_y",
                reason: "paddle must sit inside the play area",
            });
        }

        self.validate_bricks()?;

        if self.starting_lives == 0 {
            return Err(TuningError::Invalid {
                field: "starting_lives",
                reason: "must be at least 1",
            });
        }

        Ok(())
    }

    /// Every level's bricks must sit inside the walls without touching each other
    ///
    /// Layout positions are fixed on a grid with a `BRICK_WIDTH` x
    /// `BRICK_HEIGHT` pitch, so bricks may shrink but not grow.
    fn validate_bricks(&self) -> Result<(), TuningError> {
        if self.brick_width > BRICK_WIDTH {
            return Err(TuningError::Invalid {
                field: "brick_width",
                reason: "bricks would overlap their neighbours",
            });
        }
        if self.brick_height > BRICK_HEIGHT {
            return Err(TuningError::Invalid {
                field: "brick_height",
                reason: "bricks would overlap their neighbours",
            });
        }

        let half_w = self.brick_width / 2.0;
        let half_h = self.brick_height / 2.0;
        for level in 1..=MAX_LEVEL {
            let Some(layout) = try_layout(level) else {
                continue;
            };
            for pos in layout.positions {
                if pos.x - half_w < self.play_left() || pos.x + half_w > self.play_right() {
                    return Err(TuningError::Invalid {
                        field: "screen_width",
                        reason: "level bricks fall outside the side walls",
                    });
                }
                if pos.y + half_h > self.play_top() {
                    return Err(TuningError::Invalid {
                        field: "screen_height",
                        reason: "level bricks fall above the top wall",
                    });
                }
            }
        }

        Ok(())
    }

    /// Left boundary of the play area
    #[inline]
    pub fn play_left(&self) -> f32 {
        self.wall_thickness
    }

    /// Right boundary of the play area
    #[inline]
    pub fn play_right(&self) -> f32 {
        self.screen_width - self.wall_thickness
    }

    /// Top boundary of the play area
    #[inline]
    pub fn play_top(&self) -> f32 {
        self.screen_height - self.wall_thickness
    }

    #[inline]
    pub fn play_width(&self) -> f32 {
        self.play_right() - self.play_left()
    }
}
