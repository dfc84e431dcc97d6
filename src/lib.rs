//! Brick Breaker - a single-screen brick breaking arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, collisions, game state)
//! - `render`: Read-only adapter turning game state into sprites and HUD text
//! - `tuning`: Data-driven game balance

pub mod render;
pub mod sim;
pub mod tuning;

pub use render::{HudText, SpriteInstance, SpriteKind, collect_sprites, hud_text};
pub use sim::{GameEvent, GameOverReason, GamePhase, GameState};
pub use tuning::{Tuning, TuningError};

/// Game configuration constants
pub mod consts {
    /// Play area dimensions
    pub const SCREEN_WIDTH: f32 = 500.0;
    pub const SCREEN_HEIGHT: f32 = 400.0;
    /// Wall segments are square tiles of this size
    pub const WALL_THICKNESS: f32 = 20.0;

    /// Paddle defaults
    pub const PADDLE_Y: f32 = 100.0;
    pub const PADDLE_WIDTH: f32 = 80.0;
    pub const PADDLE_HEIGHT: f32 = 12.0;

    /// Ball defaults
    pub const BALL_SIZE: f32 = 12.0;
    /// Vertical launch speed (pixels per tick)
    pub const BALL_SPEED: f32 = 3.0;
    /// Horizontal speed cap after paddle contact (pixels per tick)
    pub const BALL_MAX_X: f32 = 6.0;

    /// Brick defaults
    pub const BRICK_WIDTH: f32 = 50.0;
    pub const BRICK_HEIGHT: f32 = 20.0;

    /// Scoring
    pub const BRICK_SCORE: i64 = 10;
    pub const PADDLE_SCORE_PENALTY: i64 = 1;
    pub const LIFE_SCORE_PENALTY: i64 = 10;

    /// Progression
    pub const MAX_LEVEL: u32 = 4;
    pub const STARTING_LIVES: u32 = 3;

    /// Nominal frame time handed to `on_tick` by the native driver
    pub const FRAME_DT: f32 = 1.0 / 60.0;
}
