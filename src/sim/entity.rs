//! Axis-aligned rectangle geometry for every game entity
//!
//! Entities are center-based in a y-up coordinate system (y = 0 is the bottom
//! of the play area). The bounding box is never stored; it is always derived
//! from position and size.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Strict overlap test - boxes that only share an edge do not overlap
    #[inline]
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.min.x < other.max.x
            && self.max.x > other.min.x
            && self.min.y < other.max.y
            && self.max.y > other.min.y
    }
}

/// A rectangular entity with a per-tick velocity
///
/// Used for the paddle, the ball, bricks and wall segments. Static entities
/// simply keep a zero velocity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    /// Center position
    pub pos: Vec2,
    /// Full width and height
    pub size: Vec2,
    /// Displacement applied by `advance` (pixels per tick)
    pub vel: Vec2,
}

impl Entity {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self {
            pos,
            size,
            vel: Vec2::ZERO,
        }
    }

    #[inline]
    pub fn half_size(&self) -> Vec2 {
        self.size * 0.5
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x - self.size.x / 2.0
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x / 2.0
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y + self.size.y / 2.0
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y - self.size.y / 2.0
    }

    /// Move horizontally so the left edge sits at `x`
    pub fn set_left(&mut self, x: f32) {
        self.pos.x = x + self.size.x / 2.0;
    }

    /// Move horizontally so the right edge sits at `x`
    pub fn set_right(&mut self, x: f32) {
        self.pos.x = x - self.size.x / 2.0;
    }

    /// Move vertically so the top edge sits at `y`
    pub fn set_top(&mut self, y: f32) {
        self.pos.y = y - self.size.y / 2.0;
    }

    /// Move vertically so the bottom edge sits at `y`
    pub fn set_bottom(&mut self, y: f32) {
        self.pos.y = y + self.size.y / 2.0;
    }

    pub fn aabb(&self) -> Aabb {
        let half = self.half_size();
        Aabb::new(self.pos - half, self.pos + half)
    }

    /// Whether this entity's bounding box overlaps another's
    #[inline]
    pub fn overlaps(&self, other: &Entity) -> bool {
        self.aabb().overlaps(&other.aabb())
    }

    /// Apply one tick of velocity
    #[inline]
    pub fn advance(&mut self) {
        self.pos += self.vel;
    }
}
