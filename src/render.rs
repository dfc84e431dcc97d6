//! Rendering adapter
//!
//! Reads game state and produces flat sprite instances and HUD text for
//! whatever drawing library sits outside the core. Nothing here mutates the
//! simulation.

use bytemuck::{Pod, Zeroable};
use glam::Vec2;

use crate::sim::{BrickVariant, Entity, GameState};

/// What a sprite depicts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpriteKind {
    Paddle,
    Ball,
    Brick(BrickVariant),
    Wall,
}

impl SpriteKind {
    /// Image reference for the drawing collaborator (opaque to the core)
    pub fn sprite_key(&self) -> &'static str {
        match self {
            SpriteKind::Paddle => "images/paddle.png",
            SpriteKind::Ball => "images/ball.png",
            SpriteKind::Brick(variant) => variant.sprite_key(),
            SpriteKind::Wall => "images/wall.png",
        }
    }

    /// Numeric kind id stored in instance buffers
    pub fn id(&self) -> u32 {
        match self {
            SpriteKind::Paddle => 0,
            SpriteKind::Ball => 1,
            SpriteKind::Brick(_) => 2,
            SpriteKind::Wall => 3,
        }
    }

    /// Variant id stored in instance buffers (bricks only, 0 otherwise)
    pub fn variant(&self) -> u32 {
        match self {
            SpriteKind::Brick(variant) => variant.index(),
            _ => 0,
        }
    }
}

/// One textured quad, laid out for direct upload to a GPU buffer
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct SpriteInstance {
    pub center: [f32; 2],
    pub size: [f32; 2],
    pub kind: u32,
    pub variant: u32,
}

impl SpriteInstance {
    pub fn new(entity: &Entity, kind: SpriteKind) -> Self {
        Self {
            center: entity.pos.to_array(),
            size: entity.size.to_array(),
            kind: kind.id(),
            variant: kind.variant(),
        }
    }
}

/// Colors for game elements
pub mod colors {
    pub const BACKGROUND: [f32; 4] = [0.855, 0.541, 0.404, 1.0]; // Pale copper
    pub const HUD_TEXT: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
    pub const GAME_OVER: [f32; 4] = [1.0, 0.922, 0.804, 1.0]; // Blanched almond
}

/// Build the sprite list for a frame: paddle, bricks, ball, then walls
pub fn collect_sprites(state: &GameState) -> Vec<SpriteInstance> {
    let mut sprites = Vec::with_capacity(state.bricks.len() + state.walls.len() + 2);

    sprites.push(SpriteInstance::new(&state.paddle, SpriteKind::Paddle));
    sprites.extend(
        state
            .bricks
            .iter()
            .map(|b| SpriteInstance::new(&b.body, SpriteKind::Brick(b.variant))),
    );
    sprites.push(SpriteInstance::new(&state.ball, SpriteKind::Ball));
    sprites.extend(
        state
            .walls
            .iter()
            .map(|w| SpriteInstance::new(w, SpriteKind::Wall)),
    );

    sprites
}

/// A line of HUD text
#[derive(Debug, Clone, PartialEq)]
pub struct HudText {
    pub text: String,
    /// Baseline start, in play-area coordinates
    pub pos: Vec2,
    pub font_size: f32,
    pub color: [f32; 4],
    pub bold: bool,
}

/// Score and lives along the bottom, plus a banner once the game is over
pub fn hud_text(state: &GameState) -> Vec<HudText> {
    let width = state.tuning.screen_width;
    let mut lines = vec![
        HudText {
            text: format!("Score: {}", state.score),
            pos: Vec2::new(30.0, 15.0),
            font_size: 12.0,
            color: colors::HUD_TEXT,
            bold: false,
        },
        HudText {
            text: format!("Lives: {}", state.lives),
            pos: Vec2::new(width - 90.0, 15.0),
            font_size: 12.0,
            color: colors::HUD_TEXT,
            bold: false,
        },
    ];

    if state.is_game_over() {
        lines.push(HudText {
            text: "Game Over".to_string(),
            pos: Vec2::new(width / 2.0 - 115.0, 150.0),
            font_size: 30.0,
            color: colors::GAME_OVER,
            bold: true,
        });
    }

    lines
}
