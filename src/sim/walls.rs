//! Static boundary wall segments
//!
//! The left, right and top edges of the play area are tiled with square
//! segments. The bottom edge is left open.

use glam::Vec2;

use super::entity::Entity;

/// Tile the left, right and top edges of a `width` x `height` board
///
/// Side columns start half a segment up from the bottom and step one segment
/// at a time while they remain below `height`. The top row starts one segment
/// in from the left column and runs at the height of the last column row
/// while it stays left of the right column.
pub fn build_walls(width: f32, height: f32, segment_w: f32, segment_h: f32) -> Vec<Entity> {
    let size = Vec2::new(segment_w, segment_h);
    let mut walls = Vec::new();

    if segment_w <= 0.0 || segment_h <= 0.0 {
        return walls;
    }

    let mut left_x = segment_w / 2.0;
    let right_x = width - segment_w / 2.0;
    let mut y = segment_h / 2.0;

    while y < height {
        walls.push(Entity::new(Vec2::new(left_x, y), size));
        walls.push(Entity::new(Vec2::new(right_x, y), size));
        y += segment_h;
    }

    // Top row sits on the last column row
    left_x += segment_w;
    y -= segment_h;

    while left_x < width - segment_w {
        walls.push(Entity::new(Vec2::new(left_x, y), size));
        left_x += segment_w;
    }

    walls
}
