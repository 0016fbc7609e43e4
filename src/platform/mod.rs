//! Platform abstraction layer
//!
//! The host library feeds the game through these types:
//! - Input: per-frame snapshot of held logical actions
//! - Time: frame clock turning wall-clock time into simulation steps

pub mod input;
pub mod time;

pub use input::{Action, InputSnapshot};
pub use time::{FrameClock, StepPlan};
