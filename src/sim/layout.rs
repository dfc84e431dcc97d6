//! Predefined brick layouts for each level
//!
//! Levels are authored as row maps over an 8-column grid: `#` places a brick,
//! anything else leaves the cell empty. Row 0 is the top row.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::{BRICK_HEIGHT, BRICK_WIDTH, MAX_LEVEL};

/// Number of grid columns in a layout row
pub const GRID_COLUMNS: usize = 8;
/// Center x of the leftmost grid column
pub const GRID_ORIGIN_X: f32 = 75.0;
/// Center y of the top grid row
pub const GRID_ORIGIN_Y: f32 = 340.0;

const LEVEL_1: &[&str] = &[
    "########", //
    "########", //
    "########",
];

const LEVEL_2: &[&str] = &[
    "########", //
    " ###### ", //
    "  ####  ", //
    "   ##   ",
];

const LEVEL_3: &[&str] = &[
    "# # # # ", //
    " # # # #", //
    "# # # # ", //
    " # # # #", //
    "# # # # ",
];

const LEVEL_4: &[&str] = &[
    "########", //
    "#      #", //
    "# #### #", //
    "#      #", //
    "########",
];

const LEVELS: [&[&str]; MAX_LEVEL as usize] = [LEVEL_1, LEVEL_2, LEVEL_3, LEVEL_4];

/// Brick appearance, one per level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BrickVariant {
    #[default]
    Standard,
    Striped,
    Cracked,
    Gilded,
}

impl BrickVariant {
    /// Variant used by the given 1-based level
    pub fn for_level(level: u32) -> Self {
        match level {
            0 | 1 => BrickVariant::Standard,
            2 => BrickVariant::Striped,
            3 => BrickVariant::Cracked,
            _ => BrickVariant::Gilded,
        }
    }

    /// Image reference handed to the rendering collaborator
    pub fn sprite_key(&self) -> &'static str {
        match self {
            BrickVariant::Standard => "images/brick.png",
            BrickVariant::Striped => "images/brick2.png",
            BrickVariant::Cracked => "images/brick3.png",
            BrickVariant::Gilded => "images/brick4.png",
        }
    }

    /// Stable numeric id for instance buffers
    pub fn index(&self) -> u32 {
        match self {
            BrickVariant::Standard => 0,
            BrickVariant::Striped => 1,
            BrickVariant::Cracked => 2,
            BrickVariant::Gilded => 3,
        }
    }
}

/// Brick placements for one level
#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    /// Brick centers in row-major order
    pub positions: Vec<Vec2>,
    pub variant: BrickVariant,
}

/// Look up the layout for a 1-based level index
pub fn try_layout(level: u32) -> Option<Layout> {
    let index = level.checked_sub(1)? as usize;
    let rows = LEVELS.get(index)?;
    Some(Layout {
        positions: parse_rows(rows),
        variant: BrickVariant::for_level(level),
    })
}

/// Look up the layout for a 1-based level index
///
/// Callers must stay within `1..=MAX_LEVEL`. Debug builds panic on a
/// violation; release builds fall back to the nearest valid level.
pub fn layout(level: u32) -> Layout {
    debug_assert!(
        (1..=MAX_LEVEL).contains(&level),
        "level {level} outside 1..={MAX_LEVEL}"
    );
    let level = level.clamp(1, MAX_LEVEL);
    try_layout(level).unwrap_or(Layout {
        positions: Vec::new(),
        variant: BrickVariant::for_level(level),
    })
}

fn parse_rows(rows: &[&str]) -> Vec<Vec2> {
    rows.iter()
        .enumerate()
        .flat_map(|(row, &line)| {
            line.chars()
                .take(GRID_COLUMNS)
                .enumerate()
                .filter(|&(_, c)| c == '#')
                .map(move |(col, _)| {
                    Vec2::new(
                        GRID_ORIGIN_X + col as f32 * BRICK_WIDTH,
                        GRID_ORIGIN_Y - row as f32 * BRICK_HEIGHT,
                    )
                })
        })
        .collect()
}
