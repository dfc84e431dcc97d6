//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Frame-count based physics (fixed per-tick velocities)
//! - Stable iteration order (bricks keep layout order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod entity;
pub mod layout;
pub mod state;
pub mod tick;
pub mod walls;

pub use collision::{
    Bounce, WallHits, classify_brick_hit, resolve_bricks, resolve_paddle, resolve_walls,
};
pub use entity::{Aabb, Entity};
pub use layout::{BrickVariant, Layout, layout, try_layout};
pub use state::{Brick, GameEvent, GameOverReason, GamePhase, GameState};
pub use tick::{on_pointer_move, on_primary_button_press, tick};
pub use walls::build_walls;
