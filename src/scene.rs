//! Scenes and the frame loop
//!
//! Two scenes, dispatched by a single match in [`App::frame`]. Each scene
//! owns its own state; leaving a scene drops it.

use crate::audio::{AudioBackend, AudioManager};
use crate::platform::{Action, FrameClock, InputSnapshot};
use crate::settings::Settings;
use crate::sim::{GameSession, LandingState, TickInput, tick};

/// What a scene wants after handling input
#[derive(Debug)]
pub enum Transition {
    Stay,
    Switch(Scene),
    Exit,
}

/// Title screen; waits for the player to start
#[derive(Debug, Default)]
pub struct MenuScene;

impl MenuScene {
    fn handle_input(&mut self, input: &InputSnapshot, previous: &InputSnapshot, settings: &Settings) -> Transition {
        if input.pressed(Action::Quit, previous) {
            Transition::Exit
        } else if input.pressed(Action::EngineOn, previous) || input.pressed(Action::Restart, previous) {
            Transition::Switch(Scene::Game(Box::new(GameScene::new(settings))))
        } else {
            Transition::Stay
        }
    }
}

/// HUD values for the renderer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hud {
    pub stage: u32,
    pub win_streak: u32,
    pub best_streak: u32,
    /// Throttle as a fraction of maximum (0.0 - 1.0)
    pub thrust: f32,
    pub state: LandingState,
    /// Seconds left on the win countdown
    pub countdown: Option<f32>,
    pub free_flight: bool,
}

/// A running session
#[derive(Debug)]
pub struct GameScene {
    pub session: GameSession,
    /// Controls gathered this frame, applied on every substep
    pending: TickInput,
}

impl GameScene {
    pub fn new(settings: &Settings) -> Self {
        log::info!("Starting session (seed {:#x})", settings.seed);
        Self {
            session: GameSession::new(settings.seed, settings.tuning),
            pending: TickInput::default(),
        }
    }

    fn handle_input(&mut self, input: &InputSnapshot, previous: &InputSnapshot) -> Transition {
        if input.pressed(Action::Quit, previous) {
            return Transition::Switch(Scene::Menu(MenuScene));
        }
        // Held controls follow this frame; a restart press survives until a
        // tick consumes it, even across frames that run no substeps
        let restart = self.pending.restart;
        self.pending = input.to_tick_input(previous);
        self.pending.restart |= restart;
        Transition::Stay
    }

    fn update(&mut self, dt: f32, audio: &mut AudioManager) {
        tick(&mut self.session, &self.pending, dt);
        // Clear one-shot inputs after processing
        self.pending.restart = false;

        let events = self.session.drain_events();
        audio.handle_events(&events);
        audio.sync_engine(&self.session.rocket, &self.session.tuning);
    }

    pub fn hud(&self) -> Hud {
        let session = &self.session;
        Hud {
            stage: session.stage,
            win_streak: session.win_streak,
            best_streak: session.records.best().unwrap_or(0).max(session.win_streak),
            thrust: session.rocket.thrust / session.tuning.max_thrust,
            state: session.state,
            countdown: session.countdown(),
            free_flight: session.is_free_flight(),
        }
    }
}

#[derive(Debug)]
pub enum Scene {
    Menu(MenuScene),
    Game(Box<GameScene>),
}

impl Scene {
    pub fn name(&self) -> &'static str {
        match self {
            Scene::Menu(_) => "menu",
            Scene::Game(_) => "game",
        }
    }
}

/// Owns the active scene, the clock and the audio manager
pub struct App {
    pub settings: Settings,
    scene: Scene,
    clock: FrameClock,
    audio: AudioManager,
    previous_input: InputSnapshot,
}

impl App {
    pub fn new(settings: Settings, backend: Box<dyn AudioBackend>) -> Self {
        let mut audio = AudioManager::new(backend);
        audio.set_master_volume(settings.master_volume);
        audio.set_sfx_volume(settings.sfx_volume);
        audio.set_muted(settings.muted);
        Self {
            clock: FrameClock::new(settings.timestep),
            settings,
            scene: Scene::Menu(MenuScene),
            audio,
            previous_input: InputSnapshot::default(),
        }
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// The running game, if the game scene is active
    pub fn game(&self) -> Option<&GameScene> {
        match &self.scene {
            Scene::Game(game) => Some(game),
            Scene::Menu(_) => None,
        }
    }

    /// Run one frame. Returns false once the player has quit.
    pub fn frame(&mut self, now: f64, input: &InputSnapshot) -> bool {
        let previous = std::mem::replace(&mut self.previous_input, *input);
        let plan = self.clock.advance(now);

        let transition = match &mut self.scene {
            Scene::Menu(menu) => menu.handle_input(input, &previous, &self.settings),
            Scene::Game(game) => {
                let transition = game.handle_input(input, &previous);
                if matches!(transition, Transition::Stay) {
                    for _ in 0..plan.steps {
                        game.update(plan.dt, &mut self.audio);
                    }
                }
                transition
            }
        };

        match transition {
            Transition::Stay => true,
            Transition::Switch(next) => {
                log::info!("Scene {} -> {}", self.scene.name(), next.name());
                self.audio.stop_engine();
                self.clock.reset();
                self.scene = next;
                true
            }
            Transition::Exit => {
                self.audio.stop_engine();
                false
            }
        }
    }
}
