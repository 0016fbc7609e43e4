//! Rocket Lander - A rocket landing game core
//!
//! Core modules:
//! - `sim`: Simulation (rocket physics, island contact, landing state machine)
//! - `platform`: Input snapshots and frame timing
//! - `scene`: Menu/Game scenes and the frame loop
//! - `audio`: Sound cue interface and engine loop handling
//! - `tuning`: Data-driven game balance

pub mod audio;
pub mod highscores;
pub mod platform;
pub mod scene;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use highscores::StreakRecords;
pub use settings::{Settings, SettingsError, TimestepMode};
pub use tuning::Tuning;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (120 Hz for smooth physics)
    pub const SIM_DT: f32 = 1.0 / 120.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Longest frame delta fed to the simulation (seconds)
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// World dimensions (screen space, y grows downward)
    pub const WORLD_WIDTH: f32 = 800.0;
    pub const WORLD_HEIGHT: f32 = 600.0;
    /// Ground line the rocket comes to rest on
    pub const GROUND_Y: f32 = 560.0;

    /// Rocket hull box
    pub const ROCKET_WIDTH: f32 = 20.0;
    pub const ROCKET_HEIGHT: f32 = 48.0;
    /// Launch pose (foot point)
    pub const LAUNCH_X: f32 = 400.0;
    pub const LAUNCH_Y: f32 = 120.0;
    /// Rotation (degrees) at which thrust points straight up
    pub const UPRIGHT_ROTATION: f32 = 0.0;
    pub const LAUNCH_ROTATION: f32 = UPRIGHT_ROTATION;

    /// Island defaults - shrinks by stage down to the minimum width
    pub const PLATFORM_BASE_WIDTH: f32 = 160.0;
    pub const PLATFORM_MIN_WIDTH: f32 = 48.0;
    pub const PLATFORM_HEIGHT: f32 = 24.0;
    /// Horizontal range the island may occupy
    pub const PLATFORM_MIN_X: f32 = 120.0;
    pub const PLATFORM_MAX_X: f32 = 680.0;
    /// Slack for resting contact between hull and island top
    pub const CONTACT_TOLERANCE: f32 = 1.0;

    /// Stages that move the island side to side
    pub const FIRST_OSCILLATING_STAGE: u32 = 2;
    pub const LAST_OSCILLATING_STAGE: u32 = 4;
    /// Final stage: free flight, landings are no longer scored
    pub const MAX_STAGE: u32 = 9;

    /// Rock strips on either side of the island range (x_min, x_max)
    pub const HAZARD_STRIPS: [(f32, f32); 2] = [(0.0, 90.0), (710.0, 800.0)];
    /// Vertical half-extent of a hazard strip around the ground line
    pub const HAZARD_DEPTH: f32 = 20.0;
}

/// Wrap an angle in degrees to [0, 360)
#[inline]
pub fn wrap_degrees(angle: f32) -> f32 {
    let wrapped = angle.rem_euclid(360.0);
    // rem_euclid rounds tiny negatives up to exactly 360
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

/// Shortest angular distance between two headings (degrees, 0..=180)
#[inline]
pub fn angular_distance(a: f32, b: f32) -> f32 {
    let delta = wrap_degrees(a - b);
    if delta > 180.0 { 360.0 - delta } else { delta }
}

/// Unit thrust direction for a rotation in degrees.
///
/// Rotation 0 points up the screen (-y); positive rotation turns clockwise.
#[inline]
pub fn heading_to_direction(rotation: f32) -> Vec2 {
    let theta = (rotation - 90.0).to_radians();
    Vec2::new(theta.cos(), theta.sin())
}
