//! Base entity geometry
//!
//! Every actor in the arena is an axis-aligned box with a top-left position,
//! a fixed size and a per-tick velocity. Coordinates are arena-local with y
//! growing downward.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Position, size and velocity shared by every actor
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GameObject {
    /// Top-left corner
    pub pos: Vec2,
    /// Bounding box, set at creation
    pub size: Vec2,
    /// Displacement applied by each `advance`
    pub vel: Vec2,
}

impl GameObject {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self {
            pos,
            size,
            vel: Vec2::ZERO,
        }
    }

    /// Square object of side `side` (all actors are visually circular)
    pub fn square(pos: Vec2, side: f32) -> Self {
        Self::new(pos, Vec2::splat(side))
    }

    /// Apply velocity to position. No bounds checks.
    #[inline]
    pub fn advance(&mut self) {
        self.pos += self.vel;
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.size.x
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.size.y
    }

    /// Entire box lies within `[0, arena]` on both axes
    pub fn is_fully_inside(&self, arena: Vec2) -> bool {
        self.pos.x >= 0.0
            && self.pos.y >= 0.0
            && self.pos.x + self.size.x <= arena.x
            && self.pos.y + self.size.y <= arena.y
    }

    /// Entire box has left the arena on some side
    pub fn is_fully_outside(&self, arena: Vec2) -> bool {
        self.pos.x >= arena.x
            || self.pos.y >= arena.y
            || self.pos.x < -self.size.x
            || self.pos.y < -self.size.y
    }
}

/// Capability shared by every actor kind
pub trait Body {
    fn body(&self) -> &GameObject;
    fn body_mut(&mut self) -> &mut GameObject;

    #[inline]
    fn advance(&mut self) {
        self.body_mut().advance();
    }

    #[inline]
    fn pos(&self) -> Vec2 {
        self.body().pos
    }
}

impl Body for GameObject {
    fn body(&self) -> &GameObject {
        self
    }

    fn body_mut(&mut self) -> &mut GameObject {
        self
    }
}
