//! The player's rocket
//!
//! Owns its kinematics, throttle and contact flags. The session drives it
//! once per tick; restart resets it in place.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Aabb;
use crate::consts::*;
use crate::tuning::Tuning;
use crate::{angular_distance, heading_to_direction, wrap_degrees};

/// Contact report from the tick on which the rocket reached the ground
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Touchdown {
    /// Velocity just before the ground clamp
    pub velocity: Vec2,
    /// Tilt from upright at contact (degrees)
    pub tilt: f32,
}

impl Touchdown {
    pub fn speed(&self) -> f32 {
        self.velocity.length()
    }
}

/// The rocket entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Rocket {
    /// Foot point (bottom-centre of the hull)
    pub position: Vec2,
    pub velocity: Vec2,
    /// Velocity captured at the instant of ground contact
    pub previous_velocity: Vec2,
    /// Degrees in [0, 360); 0 is upright
    pub rotation: f32,
    /// Throttle level in [0, max_thrust]
    pub thrust: f32,
    pub engine_enabled: bool,
    /// Resting on the ground line
    pub grounded: bool,
    /// Resting on the island (implies grounded)
    pub on_platform: bool,
    /// Cleared by a tilted touchdown or a hazard; only restart sets it again
    pub is_stable: bool,
    /// Hull box extents
    pub size: Vec2,
}

impl Default for Rocket {
    fn default() -> Self {
        Self {
            position: Vec2::new(LAUNCH_X, LAUNCH_Y),
            velocity: Vec2::ZERO,
            previous_velocity: Vec2::ZERO,
            rotation: LAUNCH_ROTATION,
            thrust: 0.0,
            engine_enabled: false,
            grounded: false,
            on_platform: false,
            is_stable: true,
            size: Vec2::new(ROCKET_WIDTH, ROCKET_HEIGHT),
        }
    }
}

impl Rocket {
    pub fn new() -> Self {
        Self::default()
    }

    /// Put the rocket back on its launch pose
    pub fn reset(&mut self) {
        *self = Self {
            size: self.size,
            ..Self::default()
        };
    }

    pub fn increase_thrust(&mut self, dt: f32, tuning: &Tuning) {
        self.thrust = (self.thrust + tuning.thrust_rate * dt).clamp(0.0, tuning.max_thrust);
    }

    pub fn decrease_thrust(&mut self, dt: f32, tuning: &Tuning) {
        self.thrust = (self.thrust - tuning.thrust_rate * dt).clamp(0.0, tuning.max_thrust);
    }

    /// Returns true if the engine was off
    pub fn turn_on_engine(&mut self) -> bool {
        let changed = !self.engine_enabled;
        self.engine_enabled = true;
        changed
    }

    /// Returns true if the engine was on
    pub fn turn_off_engine(&mut self) -> bool {
        let changed = self.engine_enabled;
        self.engine_enabled = false;
        changed
    }

    /// Turn counter-clockwise
    pub fn rotate_left(&mut self, dt: f32, tuning: &Tuning) {
        self.rotation = wrap_degrees(self.rotation - tuning.rotation_speed * dt);
    }

    /// Turn clockwise
    pub fn rotate_right(&mut self, dt: f32, tuning: &Tuning) {
        self.rotation = wrap_degrees(self.rotation + tuning.rotation_speed * dt);
    }

    /// Snap upright once the island has caught the rocket
    pub fn level_out(&mut self) {
        self.rotation = UPRIGHT_ROTATION;
    }

    /// Degrees away from upright
    pub fn tilt(&self) -> f32 {
        angular_distance(self.rotation, UPRIGHT_ROTATION)
    }

    /// Current thrust acceleration (zero with the engine off)
    pub fn thrust_acceleration(&self) -> Vec2 {
        if self.engine_enabled {
            heading_to_direction(self.rotation) * self.thrust
        } else {
            Vec2::ZERO
        }
    }

    /// Hull box for contact tests
    pub fn hull(&self) -> Aabb {
        Aabb::from_foot(self.position, self.size)
    }

    /// Integrate one tick. Returns a report on the tick contact begins.
    pub fn update(&mut self, dt: f32, tuning: &Tuning) -> Option<Touchdown> {
        let gravity = Vec2::new(0.0, tuning.gravity);
        self.velocity += (self.thrust_acceleration() + gravity) * dt;
        self.position += self.velocity * dt;

        if self.position.y < GROUND_Y {
            self.grounded = false;
            self.on_platform = false;
            return None;
        }

        self.position.y = GROUND_Y;
        let touchdown = if self.grounded {
            None
        } else {
            let report = Touchdown {
                velocity: self.velocity,
                tilt: self.tilt(),
            };
            self.previous_velocity = self.velocity;
            if report.tilt > tuning.max_landing_tilt {
                self.is_stable = false;
            }
            Some(report)
        };
        self.velocity = Vec2::ZERO;
        self.grounded = true;
        touchdown
    }

    /// Grounded inside any hazard zone makes the rocket unstable
    pub fn check_hazards(&mut self, zones: &[Aabb]) {
        if self.grounded && zones.iter().any(|zone| zone.contains_point(self.position)) {
            self.is_stable = false;
        }
    }
}
