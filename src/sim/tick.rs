//! Simulation tick
//!
//! Order within a tick: controls, rocket integration, island contact,
//! hazards, then landing evaluation.

use super::state::{GameEvent, GameSession};

/// Input commands for a single tick
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickInput {
    pub increase_thrust: bool,
    pub decrease_thrust: bool,
    pub rotate_left: bool,
    pub rotate_right: bool,
    pub engine_on: bool,
    pub engine_off: bool,
    /// Start a new attempt (one-shot)
    pub restart: bool,
}

/// Advance the session by one timestep
pub fn tick(session: &mut GameSession, input: &TickInput, dt: f32) {
    if input.restart {
        session.restart();
        return;
    }

    let tuning = session.tuning;
    let rocket = &mut session.rocket;

    let toggled = if input.engine_on {
        rocket.turn_on_engine()
    } else if input.engine_off {
        rocket.turn_off_engine()
    } else {
        false
    };
    if input.increase_thrust {
        rocket.increase_thrust(dt, &tuning);
    }
    if input.decrease_thrust {
        rocket.decrease_thrust(dt, &tuning);
    }
    if input.rotate_left {
        rocket.rotate_left(dt, &tuning);
    }
    if input.rotate_right {
        rocket.rotate_right(dt, &tuning);
    }

    let touchdown = rocket.update(dt, &tuning);
    session.platform.update(dt, &mut session.rocket, &tuning);
    session.rocket.check_hazards(&session.hazards);

    if toggled {
        let enabled = session.rocket.engine_enabled;
        session.push_event(GameEvent::EngineToggled { enabled });
    }
    if let Some(touchdown) = touchdown {
        log::debug!(
            "Touchdown at x={:.1}: speed {:.1}, tilt {:.1}",
            session.rocket.position.x,
            touchdown.speed(),
            touchdown.tilt
        );
        session.push_event(GameEvent::Touchdown {
            speed: touchdown.speed(),
            tilt: touchdown.tilt,
        });
    }

    session.evaluate(dt);
    session.elapsed += dt as f64;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::sim::LandingState;
    use crate::tuning::Tuning;
    use glam::Vec2;

    /// Rocket resting on the island's centre with a recorded touchdown speed
    fn resting_on_island(session: &mut GameSession, impact: f32) {
        session.rocket.position = session.platform.top_center();
        session.rocket.grounded = true;
        session.rocket.previous_velocity = Vec2::new(0.0, impact);
    }

    #[test]
    fn test_win_after_dwell() {
        let mut session = GameSession::new(42, Tuning::default());
        resting_on_island(&mut session, 10.0);
        let input = TickInput::default();

        for _ in 0..38 {
            tick(&mut session, &input, 0.1);
            assert_eq!(session.state, LandingState::WinPending);
            assert!(session.rocket.on_platform);
        }
        for _ in 0..3 {
            tick(&mut session, &input, 0.1);
        }
        assert_eq!(session.state, LandingState::Won);
        assert!(session.drain_events().contains(&GameEvent::Won));

        let width = session.platform.size.x;
        tick(&mut session, &TickInput { restart: true, ..Default::default() }, 0.1);
        assert_eq!(session.win_streak, 1);
        assert!(session.platform.size.x < width);
        assert_eq!(session.state, LandingState::Flying);
    }

    #[test]
    fn test_unstable_loses_same_tick() {
        let mut session = GameSession::new(42, Tuning::default());
        session.win_streak = 4;
        resting_on_island(&mut session, 10.0);
        session.rocket.is_stable = false;

        tick(&mut session, &TickInput::default(), 0.1);
        assert_eq!(session.state, LandingState::Lost);

        tick(&mut session, &TickInput { restart: true, ..Default::default() }, 0.1);
        assert_eq!(session.win_streak, 0);
    }

    #[test]
    fn test_hazard_spoils_otherwise_good_landing() {
        let mut session = GameSession::new(42, Tuning::default());
        // Stretch the island over a rock strip so every other condition holds
        session.platform.min_x = 0.0;
        session.platform.position.x = 0.0;
        session.rocket.position = Vec2::new(40.0, GROUND_Y);
        session.rocket.grounded = true;
        session.rocket.previous_velocity = Vec2::new(0.0, 10.0);

        tick(&mut session, &TickInput::default(), 0.1);
        assert!(session.rocket.on_platform);
        assert!(!session.rocket.is_stable);
        assert_eq!(session.state, LandingState::Lost);
    }

    #[test]
    fn test_descent_onto_island_from_altitude() {
        let mut session = GameSession::new(3, Tuning::default());
        session.rocket.position = session.platform.top_center() - Vec2::new(0.0, 5.0);
        session.rocket.velocity = Vec2::new(0.0, 5.0);

        let input = TickInput::default();
        let mut ticks = 0;
        while !session.rocket.grounded {
            tick(&mut session, &input, SIM_DT);
            ticks += 1;
            assert!(ticks < 1000);
        }
        assert!(session.rocket.on_platform);
        assert!(session.rocket.previous_velocity.length() <= 40.0);
        assert_eq!(session.state, LandingState::WinPending);
        let events = session.drain_events();
        assert!(events.iter().any(|e| matches!(e, GameEvent::Touchdown { .. })));
    }

    #[test]
    fn test_free_fall_from_launch_crashes() {
        let mut session = GameSession::new(9, Tuning::default());
        let input = TickInput::default();
        for _ in 0..(120 * 10) {
            tick(&mut session, &input, SIM_DT);
        }
        assert!(session.rocket.grounded);
        assert_eq!(session.rocket.position.y, GROUND_Y);
        assert_eq!(session.state, LandingState::Lost);
    }

    #[test]
    fn test_engine_toggle_emits_event_once() {
        let mut session = GameSession::new(1, Tuning::default());
        let on = TickInput { engine_on: true, ..Default::default() };
        tick(&mut session, &on, SIM_DT);
        tick(&mut session, &on, SIM_DT);
        let toggles = session
            .drain_events()
            .into_iter()
            .filter(|e| matches!(e, GameEvent::EngineToggled { enabled: true }))
            .count();
        assert_eq!(toggles, 1);
    }

    #[test]
    fn test_restart_resets_kinematics() {
        let mut session = GameSession::new(5, Tuning::default());
        let input = TickInput {
            engine_on: true,
            increase_thrust: true,
            rotate_right: true,
            ..Default::default()
        };
        for _ in 0..300 {
            tick(&mut session, &input, SIM_DT);
        }
        tick(&mut session, &TickInput { restart: true, ..Default::default() }, SIM_DT);

        assert_eq!(session.rocket.velocity, Vec2::ZERO);
        assert_eq!(session.rocket.previous_velocity, Vec2::ZERO);
        assert_eq!(session.rocket.rotation, LAUNCH_ROTATION);
    }

    #[test]
    fn test_determinism() {
        let mut a = GameSession::new(99999, Tuning::default());
        let mut b = GameSession::new(99999, Tuning::default());
        let inputs = [
            TickInput { engine_on: true, ..Default::default() },
            TickInput { increase_thrust: true, ..Default::default() },
            TickInput { rotate_left: true, ..Default::default() },
            TickInput { restart: true, ..Default::default() },
            TickInput::default(),
        ];

        for input in inputs.iter().cycle().take(500) {
            tick(&mut a, input, SIM_DT);
            tick(&mut b, input, SIM_DT);
        }
        assert_eq!(a.rocket.position, b.rocket.position);
        assert_eq!(a.platform.position, b.platform.position);
        assert_eq!(a.state, b.state);
    }
}
