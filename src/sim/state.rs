//! Game state and core simulation types
//!
//! `GameState` is the context object every handler receives. It owns the
//! counters, the paddle and ball singletons, the current bricks and the walls.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::entity::Entity;
use super::layout::{self, BrickVariant};
use super::walls::build_walls;
use crate::tuning::Tuning;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Ball rides on the paddle, waiting for launch input
    #[default]
    AtRest,
    /// Ball is moving
    InPlay,
    /// Run ended (terminal)
    GameOver,
}

/// Why a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameOverReason {
    /// The last level was cleared
    AllLevelsCleared,
    /// The last life was lost
    OutOfLives,
}

/// Notable things that happened during a tick, for audio and HUD collaborators
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    Launched,
    WallBounce,
    PaddleHit { score_delta: i64 },
    BrickDestroyed { id: u32, pos: Vec2 },
    LevelCleared { next_level: u32 },
    LifeLost { lives_left: u32 },
    GameOver { reason: GameOverReason },
}

/// A destructible brick
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Brick {
    pub id: u32,
    pub body: Entity,
    pub variant: BrickVariant,
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Gameplay constants this run was built with
    pub tuning: Tuning,
    pub phase: GamePhase,
    /// May go negative
    pub score: i64,
    /// 1-based level index
    pub level: u32,
    pub lives: u32,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub paddle: Entity,
    pub ball: Entity,
    /// Live bricks, in layout order
    pub bricks: Vec<Brick>,
    /// Static boundary segments
    pub walls: Vec<Entity>,
    /// Events since the last `drain_events`
    #[serde(skip)]
    pub events: Vec<GameEvent>,
    /// Next brick ID
    next_id: u32,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Create a fresh game with default tuning
    pub fn new() -> Self {
        Self::with_tuning(Tuning::default())
    }

    /// Create a fresh game with the given tuning
    ///
    /// The tuning must pass [`Tuning::validate`]; load untrusted values through
    /// [`Tuning::from_json`].
    pub fn with_tuning(tuning: Tuning) -> Self {
        debug_assert!(
            tuning.validate().is_ok(),
            "invalid tuning: {:?}",
            tuning.validate()
        );
        let mut state = Self {
            paddle: Entity::new(Vec2::ZERO, Vec2::new(tuning.paddle_width, tuning.paddle_height)),
            ball: Entity::new(Vec2::ZERO, Vec2::splat(tuning.ball_size)),
            tuning,
            phase: GamePhase::AtRest,
            score: 0,
            level: 1,
            lives: 0,
            time_ticks: 0,
            bricks: Vec::new(),
            walls: Vec::new(),
            events: Vec::new(),
            next_id: 1,
        };
        state.setup();
        state
    }

    /// (Re)initialise walls, paddle, the first level's bricks and a resting ball
    pub fn setup(&mut self) {
        let t = &self.tuning;
        self.walls = build_walls(t.screen_width, t.screen_height, t.wall_thickness, t.wall_thickness);

        self.score = 0;
        self.level = 1;
        self.lives = t.starting_lives;
        self.time_ticks = 0;
        self.phase = GamePhase::AtRest;
        self.events.clear();

        self.paddle = Entity::new(
            Vec2::new(t.screen_width / 2.0, t.paddle_y),
            Vec2::new(t.paddle_width, t.paddle_height),
        );
        self.ball = Entity::new(Vec2::ZERO, Vec2::splat(t.ball_size));

        self.bricks.clear();
        self.populate_bricks();
        self.reset_ball();
    }

    /// Whether the run has ended
    #[inline]
    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Allocate a new brick ID
    fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Add the current level's bricks
    pub fn populate_bricks(&mut self) {
        let layout = layout::layout(self.level);
        let size = Vec2::new(self.tuning.brick_width, self.tuning.brick_height);
        for pos in layout.positions {
            let id = self.next_entity_id();
            self.bricks.push(Brick {
                id,
                body: Entity::new(pos, size),
                variant: layout.variant,
            });
        }
    }

    /// Slave the ball to the paddle: centered, bottom one pixel above its top
    pub fn rest_ball_on_paddle(&mut self) {
        self.ball.set_bottom(self.paddle.top() + 1.0);
        self.ball.pos.x = self.paddle.pos.x;
    }

    /// Stop the ball and place it on the paddle
    pub fn reset_ball(&mut self) {
        self.rest_ball_on_paddle();
        self.ball.vel = Vec2::ZERO;
        if self.phase != GamePhase::GameOver {
            self.phase = GamePhase::AtRest;
        }
    }

    /// Move to the next level and put the ball back on the paddle
    pub fn advance_level(&mut self) {
        self.level += 1;
        self.populate_bricks();
        self.reset_ball();
    }

    /// Record an event for collaborators
    pub fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Take all events recorded since the last call
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
