//! Rocket Lander entry point
//!
//! The windowed front end lives with the host library. Natively this runs
//! a headless session: a scripted pilot flies a few attempts and the result
//! is logged. Pass a settings JSON path as the first argument to override
//! defaults; set `RUST_LOG=debug` to see every touchdown and audio cue.

use std::path::PathBuf;

use rocket_lander::Settings;
use rocket_lander::audio::LogBackend;
use rocket_lander::platform::{Action, InputSnapshot};
use rocket_lander::scene::{App, GameScene};
use rocket_lander::sim::LandingState;

/// Simulated display rate for the headless run
const FRAME_RATE: f64 = 60.0;
/// Give up on an attempt after this long (seconds)
const ATTEMPT_LIMIT: f64 = 30.0;
const ATTEMPTS: u32 = 5;
/// Descent speed the pilot tries to hold (px/s)
const TARGET_DESCENT: f32 = 20.0;

/// Keys a cautious pilot would hold this frame
fn pilot(game: &GameScene) -> InputSnapshot {
    let rocket = &game.session.rocket;
    let island = game.session.platform.top_center();
    let mut keys = vec![Action::EngineOn];

    // Lean toward the island while high, stand upright for the last stretch
    let dx = island.x - rocket.position.x;
    let altitude = island.y - rocket.position.y;
    let desired_tilt = if altitude > 120.0 { (dx * 0.1).clamp(-10.0, 10.0) } else { 0.0 };
    let tilt = if rocket.rotation > 180.0 { rocket.rotation - 360.0 } else { rocket.rotation };
    if tilt < desired_tilt - 1.0 {
        keys.push(Action::RotateRight);
    } else if tilt > desired_tilt + 1.0 {
        keys.push(Action::RotateLeft);
    }

    if rocket.velocity.y > TARGET_DESCENT {
        keys.push(Action::IncreaseThrust);
    } else if rocket.velocity.y < TARGET_DESCENT * 0.5 {
        keys.push(Action::DecreaseThrust);
    }

    InputSnapshot::with(&keys)
}

fn main() {
    env_logger::init();
    log::info!("Rocket Lander (headless) starting...");

    let path = std::env::args().nth(1).map(PathBuf::from);
    let settings = Settings::load_or_default(path.as_deref());
    log::info!("Timestep: {}", settings.timestep.as_str());

    let mut app = App::new(settings, Box::new(LogBackend::default()));
    let mut now = 0.0;
    let step = 1.0 / FRAME_RATE;

    // Leave the menu
    app.frame(now, &InputSnapshot::new());
    now += step;
    app.frame(now, &InputSnapshot::with(&[Action::Restart]));

    for attempt in 1..=ATTEMPTS {
        let started = now;
        let mut outcome = LandingState::Flying;

        while now - started < ATTEMPT_LIMIT {
            now += step;
            let Some(game) = app.game() else { break };
            let input = pilot(game);
            app.frame(now, &input);

            outcome = app.game().map(|g| g.session.state).unwrap_or(outcome);
            if matches!(outcome, LandingState::Won | LandingState::Lost) {
                break;
            }
        }

        if let Some(game) = app.game() {
            let hud = game.hud();
            log::info!(
                "Attempt {}: {:?} at stage {} (streak {}, best {})",
                attempt,
                outcome,
                hud.stage,
                hud.win_streak,
                hud.best_streak
            );
            match serde_json::to_string(&game.session.snapshot()) {
                Ok(json) => log::debug!("Session snapshot: {}", json),
                Err(e) => log::warn!("Failed to serialize session snapshot: {}", e),
            }
        }

        // Release every key for a frame so the restart press registers
        now += step;
        app.frame(now, &InputSnapshot::new());
        now += step;
        app.frame(now, &InputSnapshot::with(&[Action::Restart]));
    }

    // Quit backs out to the menu, a second quit exits
    let idle = InputSnapshot::new();
    let quit = InputSnapshot::with(&[Action::Quit]);
    loop {
        now += step;
        app.frame(now, &idle);
        now += step;
        if !app.frame(now, &quit) {
            break;
        }
    }
    log::info!("Rocket Lander finished");
}
