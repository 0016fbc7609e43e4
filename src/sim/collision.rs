//! Contact geometry for the hull, island and hazard zones
//!
//! Everything here is axis-aligned: the hull never rotates its contact box,
//! tilt is judged separately at touchdown.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned box in screen space
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self {
            min: min.min(max),
            max: min.max(max),
        }
    }

    /// Box from a top-left corner and size
    pub fn from_corner(corner: Vec2, size: Vec2) -> Self {
        Self::new(corner, corner + size)
    }

    /// Box standing on `foot` (bottom-centre) with the given size
    pub fn from_foot(foot: Vec2, size: Vec2) -> Self {
        let half_w = size.x / 2.0;
        Self::new(
            Vec2::new(foot.x - half_w, foot.y - size.y),
            Vec2::new(foot.x + half_w, foot.y),
        )
    }

    /// Grow the box by `amount` on every side
    pub fn expanded(&self, amount: f32) -> Self {
        Self::new(self.min - Vec2::splat(amount), self.max + Vec2::splat(amount))
    }

    /// Overlap test; touching edges count as contact
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.min.x <= other.max.x
            && self.max.x >= other.min.x
            && self.min.y <= other.max.y
            && self.max.y >= other.min.y
    }

    /// Check if a point is inside the box (edges inclusive)
    pub fn contains_point(&self, point: Vec2) -> bool {
        point.x >= self.min.x && point.x <= self.max.x && point.y >= self.min.y && point.y <= self.max.y
    }
}
