//! Frame clock
//!
//! Turns a monotonic elapsed-time source into simulation steps, either with
//! a fixed-step accumulator or by passing the raw frame delta through.

use crate::consts::{MAX_FRAME_DT, MAX_SUBSTEPS, SIM_DT};
use crate::settings::TimestepMode;

/// Steps to run for one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepPlan {
    pub steps: u32,
    pub dt: f32,
}

impl StepPlan {
    pub const NONE: StepPlan = StepPlan { steps: 0, dt: 0.0 };
}

#[derive(Debug, Clone)]
pub struct FrameClock {
    mode: TimestepMode,
    accumulator: f32,
    last_time: Option<f64>,
}

impl FrameClock {
    pub fn new(mode: TimestepMode) -> Self {
        Self {
            mode,
            accumulator: 0.0,
            last_time: None,
        }
    }

    /// Plan the steps for a frame that started at `now` (seconds)
    pub fn advance(&mut self, now: f64) -> StepPlan {
        let Some(last) = self.last_time.replace(now) else {
            return StepPlan::NONE;
        };
        let dt = ((now - last) as f32).clamp(0.0, MAX_FRAME_DT);

        match self.mode {
            TimestepMode::Variable => {
                if dt > 0.0 {
                    StepPlan { steps: 1, dt }
                } else {
                    StepPlan::NONE
                }
            }
            TimestepMode::Fixed => {
                self.accumulator += dt;
                let mut steps = 0;
                while self.accumulator >= SIM_DT && steps < MAX_SUBSTEPS {
                    self.accumulator -= SIM_DT;
                    steps += 1;
                }
                if steps == MAX_SUBSTEPS && self.accumulator >= SIM_DT {
                    log::debug!("Dropping {:.3}s of simulation backlog", self.accumulator);
                    self.accumulator = 0.0;
                }
                StepPlan { steps, dt: SIM_DT }
            }
        }
    }

    /// Forget frame history (e.g. after a scene switch)
    pub fn reset(&mut self) {
        self.accumulator = 0.0;
        self.last_time = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_first_frame_runs_nothing() {
        let mut clock = FrameClock::new(TimestepMode::Fixed);
        assert_eq!(clock.advance(10.0), StepPlan::NONE);
    }

    #[test]
    fn test_fixed_steps_at_60fps() {
        let mut clock = FrameClock::new(TimestepMode::Fixed);
        clock.advance(0.0);
        let mut total = 0;
        for frame in 1..=60 {
            let plan = clock.advance(frame as f64 / 60.0);
            assert_eq!(plan.dt, SIM_DT);
            total += plan.steps;
        }
        // One second at 120 Hz, give or take the accumulator remainder
        assert!((119..=120).contains(&total), "got {total}");
    }

    #[test]
    fn test_long_frame_is_capped() {
        let mut clock = FrameClock::new(TimestepMode::Fixed);
        clock.advance(0.0);
        let plan = clock.advance(5.0);
        assert!(plan.steps <= MAX_SUBSTEPS);
    }

    #[test]
    fn test_variable_passes_delta_through() {
        let mut clock = FrameClock::new(TimestepMode::Variable);
        clock.advance(1.0);
        let plan = clock.advance(1.025);
        assert_eq!(plan.steps, 1);
        assert!((plan.dt - 0.025).abs() < 1e-5);

        let stalled = clock.advance(1.025);
        assert_eq!(stalled, StepPlan::NONE);

        clock.reset();
        assert_eq!(clock.advance(3.0), StepPlan::NONE);
    }

    proptest! {
        #[test]
        fn prop_fixed_plan_bounded(deltas in proptest::collection::vec(0.0f64..0.5, 1..100)) {
            let mut clock = FrameClock::new(TimestepMode::Fixed);
            let mut now = 0.0;
            clock.advance(now);
            for delta in deltas {
                now += delta;
                let plan = clock.advance(now);
                prop_assert!(plan.steps <= MAX_SUBSTEPS);
                prop_assert_eq!(plan.dt, SIM_DT);
            }
        }
    }
}
