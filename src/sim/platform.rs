//! The landing island
//!
//! A box whose top edge sits on the ground line. It shrinks as the stage
//! rises and, in the middle stages, drifts side to side between its bounds.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::collision::Aabb;
use super::rocket::Rocket;
use crate::consts::*;
use crate::tuning::Tuning;

/// What the island needs from whatever is trying to land on it
pub trait Lander {
    /// Contact box
    fn footprint(&self) -> Aabb;
    fn is_grounded(&self) -> bool;
    fn is_on_platform(&self) -> bool;
    fn set_on_platform(&mut self, on_platform: bool);
    /// Called on the tick the lander first settles on the island
    fn level_out(&mut self);
}

impl Lander for Rocket {
    fn footprint(&self) -> Aabb {
        self.hull()
    }

    fn is_grounded(&self) -> bool {
        self.grounded
    }

    fn is_on_platform(&self) -> bool {
        self.on_platform
    }

    fn set_on_platform(&mut self, on_platform: bool) {
        self.on_platform = on_platform;
    }

    fn level_out(&mut self) {
        Rocket::level_out(self);
    }
}

/// The island entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Platform {
    /// Top-left corner
    pub position: Vec2,
    pub size: Vec2,
    /// Difficulty tier (0..=MAX_STAGE)
    pub stage: u32,
    /// Lateral travel direction (+1 right, -1 left)
    pub direction: f32,
    /// Horizontal range the whole island stays inside
    pub min_x: f32,
    pub max_x: f32,
}

impl Default for Platform {
    fn default() -> Self {
        let width = PLATFORM_BASE_WIDTH;
        Self {
            position: Vec2::new((WORLD_WIDTH - width) / 2.0, GROUND_Y),
            size: Vec2::new(width, PLATFORM_HEIGHT),
            stage: 0,
            direction: 1.0,
            min_x: PLATFORM_MIN_X,
            max_x: PLATFORM_MAX_X,
        }
    }
}

/// Island width for a stage
pub fn width_for_stage(stage: u32, tuning: &Tuning) -> f32 {
    let shrink = stage.min(MAX_STAGE) as f32 * tuning.platform_shrink_per_stage;
    (PLATFORM_BASE_WIDTH - shrink).max(PLATFORM_MIN_WIDTH)
}

impl Platform {
    pub fn new(stage: u32, tuning: &Tuning) -> Self {
        let mut platform = Self::default();
        platform.set_stage(stage, tuning);
        platform
    }

    /// Island box for contact tests
    pub fn bounds(&self) -> Aabb {
        Aabb::from_corner(self.position, self.size)
    }

    /// Centre of the landing surface
    pub fn top_center(&self) -> Vec2 {
        Vec2::new(self.position.x + self.size.x / 2.0, self.position.y)
    }

    /// Whether this stage moves the island
    pub fn oscillates(&self) -> bool {
        (FIRST_OSCILLATING_STAGE..=LAST_OSCILLATING_STAGE).contains(&self.stage)
    }

    /// Lateral speed (px/s) for the current stage
    pub fn speed(&self, tuning: &Tuning) -> f32 {
        if self.oscillates() {
            tuning.platform_speed_per_stage * self.stage as f32
        } else {
            0.0
        }
    }

    /// Change tier and resize, keeping the island inside its bounds
    pub fn set_stage(&mut self, stage: u32, tuning: &Tuning) {
        self.stage = stage.min(MAX_STAGE);
        self.size.x = width_for_stage(self.stage, tuning);
        self.clamp_to_bounds();
    }

    /// Re-place the island somewhere within its bounds
    pub fn respawn<R: Rng>(&mut self, rng: &mut R) {
        let hi = self.max_x - self.size.x;
        self.position.x = if hi > self.min_x {
            rng.random_range(self.min_x..=hi)
        } else {
            self.min_x
        };
        self.position.y = GROUND_Y;
        self.direction = if rng.random_bool(0.5) { 1.0 } else { -1.0 };
    }

    /// Contact test against the lander, then drift if nobody is aboard.
    ///
    /// Returns true on the tick the lander settles on the island.
    pub fn update<L: Lander>(&mut self, dt: f32, lander: &mut L, tuning: &Tuning) -> bool {
        let touching = lander
            .footprint()
            .overlaps(&self.bounds().expanded(CONTACT_TOLERANCE));
        let aboard = touching && lander.is_grounded();
        let settled = aboard && !lander.is_on_platform();

        lander.set_on_platform(aboard);
        if aboard {
            lander.level_out();
        } else {
            self.drift(dt, tuning);
        }
        settled
    }

    /// Ping-pong between the bounds
    fn drift(&mut self, dt: f32, tuning: &Tuning) {
        let speed = self.speed(tuning);
        if speed <= 0.0 {
            return;
        }
        self.position.x += self.direction * speed * dt;

        let hi = self.max_x - self.size.x;
        if self.position.x >= hi {
            self.position.x = hi;
            self.direction = -1.0;
        } else if self.position.x <= self.min_x {
            self.position.x = self.min_x;
            self.direction = 1.0;
        }
    }

    fn clamp_to_bounds(&mut self) {
        let hi = (self.max_x - self.size.x).max(self.min_x);
        self.position.x = self.position.x.clamp(self.min_x, hi);
    }
}
