//! Simulation module
//!
//! All gameplay logic lives here. No rendering, audio or platform
//! dependencies; randomness comes only from the session's seeded RNG.

pub mod collision;
pub mod platform;
pub mod rocket;
pub mod state;
pub mod tick;

pub use collision::Aabb;
pub use platform::{Lander, Platform, width_for_stage};
pub use rocket::{Rocket, Touchdown};
pub use state::{GameEvent, GameSession, LandingState, SessionSnapshot, default_hazards};
pub use tick::{TickInput, tick};
