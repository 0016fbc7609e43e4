//! Game session and landing state machine
//!
//! A session owns one rocket and one island for its whole life. Restart
//! resets them in place and moves the stage/streak counters.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::Aabb;
use super::platform::Platform;
use super::rocket::Rocket;
use crate::consts::*;
use crate::highscores::StreakRecords;
use crate::tuning::Tuning;

/// Where the current attempt stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LandingState {
    /// Airborne, or resting somewhere that doesn't count
    #[default]
    Flying,
    /// Resting on the island, dwell timer running
    WinPending,
    /// Dwell completed
    Won,
    /// Crashed or touched down unstable; holds until restart
    Lost,
}

/// Things the outside world may want to react to
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    EngineToggled { enabled: bool },
    Touchdown { speed: f32, tilt: f32 },
    WinPending,
    Won,
    Lost,
    Restarted { stage: u32, win_streak: u32 },
}

/// Default rock strips beside the island's range
pub fn default_hazards() -> Vec<Aabb> {
    HAZARD_STRIPS
        .iter()
        .map(|&(x_min, x_max)| {
            Aabb::new(
                Vec2::new(x_min, GROUND_Y - HAZARD_DEPTH),
                Vec2::new(x_max, GROUND_Y + HAZARD_DEPTH),
            )
        })
        .collect()
}

/// Serializable view of a session for logs and debugging
#[derive(Debug, Serialize)]
pub struct SessionSnapshot<'a> {
    pub stage: u32,
    pub win_streak: u32,
    pub state: LandingState,
    pub timer: f32,
    pub elapsed: f64,
    pub rocket: &'a Rocket,
    pub platform: &'a Platform,
}

/// One play session
#[derive(Debug, Clone)]
pub struct GameSession {
    pub stage: u32,
    pub win_streak: u32,
    /// Seconds the win preconditions have held
    pub timer: f32,
    pub state: LandingState,
    pub rocket: Rocket,
    pub platform: Platform,
    /// Zones that make a grounded rocket unstable
    pub hazards: Vec<Aabb>,
    pub tuning: Tuning,
    pub records: StreakRecords,
    /// Simulated seconds since the session started
    pub elapsed: f64,
    /// Events produced since the last drain
    events: Vec<GameEvent>,
    rng: Pcg32,
}

impl GameSession {
    /// Create a new session with the given seed
    pub fn new(seed: u64, tuning: Tuning) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let mut platform = Platform::new(0, &tuning);
        platform.respawn(&mut rng);

        Self {
            stage: 0,
            win_streak: 0,
            timer: 0.0,
            state: LandingState::Flying,
            rocket: Rocket::new(),
            platform,
            hazards: default_hazards(),
            tuning,
            records: StreakRecords::new(),
            elapsed: 0.0,
            events: Vec::new(),
            rng,
        }
    }

    /// Final stage reached: landings are no longer scored
    pub fn is_free_flight(&self) -> bool {
        self.stage >= MAX_STAGE
    }

    pub fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Take all pending events
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn snapshot(&self) -> SessionSnapshot<'_> {
        SessionSnapshot {
            stage: self.stage,
            win_streak: self.win_streak,
            state: self.state,
            timer: self.timer,
            elapsed: self.elapsed,
            rocket: &self.rocket,
            platform: &self.platform,
        }
    }

    /// Seconds left on the win countdown while one is running
    pub fn countdown(&self) -> Option<f32> {
        match self.state {
            LandingState::WinPending => Some((self.tuning.win_countdown_secs - self.timer).max(0.0)),
            _ => None,
        }
    }

    /// Decide the landing state from the rocket and island after physics
    pub fn evaluate(&mut self, dt: f32) {
        if self.state == LandingState::Lost {
            return;
        }
        if self.is_free_flight() {
            self.state = LandingState::Flying;
            self.timer = 0.0;
            return;
        }

        let rocket = &self.rocket;
        if !rocket.grounded {
            if self.state == LandingState::Won {
                log::info!("Lift-off revoked the win at stage {}", self.stage);
            }
            self.state = LandingState::Flying;
            self.timer = 0.0;
            return;
        }

        let impact = rocket.previous_velocity.length();
        let soft = impact <= self.tuning.safe_landing_speed;

        if !rocket.is_stable || !soft {
            self.state = LandingState::Lost;
            self.timer = 0.0;
            log::info!(
                "Lost at stage {} (impact {:.1}, stable {})",
                self.stage,
                impact,
                rocket.is_stable
            );
            self.push_event(GameEvent::Lost);
            return;
        }

        if !rocket.on_platform {
            self.state = LandingState::Flying;
            self.timer = 0.0;
            return;
        }

        match self.state {
            LandingState::Won => {}
            LandingState::Flying => {
                self.state = LandingState::WinPending;
                self.timer = dt;
                self.push_event(GameEvent::WinPending);
            }
            _ => {
                self.state = LandingState::WinPending;
                self.timer += dt;
            }
        }

        if self.state == LandingState::WinPending && self.timer > self.tuning.win_dwell_secs {
            self.state = LandingState::Won;
            log::info!("Won stage {} (impact {:.1})", self.stage, impact);
            self.push_event(GameEvent::Won);
        }
    }

    /// Start a fresh attempt, advancing or resetting the counters
    pub fn restart(&mut self) {
        match self.state {
            LandingState::Won if !self.is_free_flight() => {
                self.win_streak += 1;
                self.stage = (self.stage + 1).min(MAX_STAGE);
                self.platform.set_stage(self.stage, &self.tuning);
                if self.is_free_flight() {
                    log::info!("Final stage reached, free flight");
                } else {
                    log::info!("Advancing to stage {}", self.stage);
                }
            }
            LandingState::Lost => {
                if let Some(rank) = self.records.submit(self.win_streak, self.stage, self.elapsed) {
                    log::info!("Streak of {} ranked #{}", self.win_streak, rank);
                }
                self.win_streak = 0;
            }
            _ => {}
        }

        self.rocket.reset();
        self.platform.respawn(&mut self.rng);
        self.timer = 0.0;
        self.state = LandingState::Flying;
        self.push_event(GameEvent::Restarted {
            stage: self.stage,
            win_streak: self.win_streak,
        });
    }
}
