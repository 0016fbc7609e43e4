//! Data-driven game balance
//!
//! Gameplay-tuning values (not derived from anything). Loaded as part of
//! [`Settings`](crate::Settings); every field falls back to its default.

use serde::{Deserialize, Serialize};

/// Physics and scoring knobs
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Downward acceleration (px/s²)
    pub gravity: f32,
    /// Throttle ceiling; thrust is an acceleration (px/s²)
    pub max_thrust: f32,
    /// Throttle change while a thrust key is held (per second)
    pub thrust_rate: f32,
    /// Turn rate while a rotate key is held (degrees/s)
    pub rotation_speed: f32,

    /// Fastest touchdown that still counts as a landing (px/s)
    pub safe_landing_speed: f32,
    /// Time the rocket must rest on the island before the win is confirmed
    pub win_dwell_secs: f32,
    /// Countdown shown to the player while the win is pending
    pub win_countdown_secs: f32,
    /// Largest tilt from upright survivable at touchdown (degrees)
    pub max_landing_tilt: f32,

    /// Throttle above which the booster loop plays
    pub engine_sound_threshold: f32,
    /// Island lateral speed per stage number (px/s)
    pub platform_speed_per_stage: f32,
    /// Island width lost per stage (px)
    pub platform_shrink_per_stage: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            gravity: 100.0,
            max_thrust: 250.0,
            thrust_rate: 300.0,
            rotation_speed: 120.0,

            safe_landing_speed: 40.0,
            win_dwell_secs: 3.9,
            win_countdown_secs: 4.0,
            max_landing_tilt: 15.0,

            engine_sound_threshold: 10.0,
            platform_speed_per_stage: 30.0,
            platform_shrink_per_stage: 12.0,
        }
    }
}

impl Tuning {
    /// Names of fields holding invalid values (empty when usable)
    pub fn problems(&self) -> Vec<&'static str> {
        let positive = [
            ("gravity", self.gravity),
            ("max_thrust", self.max_thrust),
            ("thrust_rate", self.thrust_rate),
            ("rotation_speed", self.rotation_speed),
            ("safe_landing_speed", self.safe_landing_speed),
            ("win_dwell_secs", self.win_dwell_secs),
            ("win_countdown_secs", self.win_countdown_secs),
        ];
        let non_negative = [
            ("max_landing_tilt", self.max_landing_tilt),
            ("engine_sound_threshold", self.engine_sound_threshold),
            ("platform_speed_per_stage", self.platform_speed_per_stage),
            ("platform_shrink_per_stage", self.platform_shrink_per_stage),
        ];

        let mut problems: Vec<&'static str> = positive
            .iter()
            .filter(|(_, v)| !(v.is_finite() && *v > 0.0))
            .map(|(name, _)| *name)
            .collect();
        problems.extend(
            non_negative
                .iter()
                .filter(|(_, v)| !(v.is_finite() && *v >= 0.0))
                .map(|(name, _)| *name),
        );
        if self.max_landing_tilt > 180.0 {
            problems.push("max_landing_tilt");
        }
        problems
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(Tuning::default().problems().is_empty());
    }

    #[test]
    fn test_problems_named() {
        let tuning = Tuning {
            gravity: 0.0,
            platform_speed_per_stage: -1.0,
            win_dwell_secs: f32::NAN,
            ..Default::default()
        };
        let problems = tuning.problems();
        assert!(problems.contains(&"gravity"));
        assert!(problems.contains(&"platform_speed_per_stage"));
        assert!(problems.contains(&"win_dwell_secs"));
        assert_eq!(problems.len(), 3);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let tuning: Tuning = serde_json::from_str(r#"{"safe_landing_speed": 25.0}"#).unwrap();
        assert_eq!(tuning.safe_landing_speed, 25.0);
        assert_eq!(tuning.win_dwell_secs, 3.9);
    }
}
