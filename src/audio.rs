//! Audio cues
//!
//! Mixing and decoding belong to the host library behind [`AudioBackend`].
//! This module decides *when* to play: one-shot cues for engine toggles and
//! a single booster loop whose volume follows the throttle.

use crate::sim::{GameEvent, Rocket};
use crate::tuning::Tuning;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Engine switched on or off
    EngineToggle,
}

/// Handle to a playing loop, issued by the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LoopHandle(pub u32);

/// Host-side playback
pub trait AudioBackend {
    /// Fire-and-forget cue
    fn play(&mut self, effect: SoundEffect, volume: f32);
    /// Start the booster loop at a volume
    fn start_loop(&mut self, volume: f32) -> LoopHandle;
    fn set_loop_volume(&mut self, handle: LoopHandle, volume: f32);
    fn stop_loop(&mut self, handle: LoopHandle);
}

/// Headless backend that only logs what it would play
#[derive(Debug, Default)]
pub struct LogBackend {
    next_handle: u32,
}

impl AudioBackend for LogBackend {
    fn play(&mut self, effect: SoundEffect, volume: f32) {
        log::debug!("cue {:?} at volume {:.2}", effect, volume);
    }

    fn start_loop(&mut self, volume: f32) -> LoopHandle {
        self.next_handle += 1;
        log::debug!("booster loop #{} started at volume {:.2}", self.next_handle, volume);
        LoopHandle(self.next_handle)
    }

    fn set_loop_volume(&mut self, _handle: LoopHandle, _volume: f32) {}

    fn stop_loop(&mut self, handle: LoopHandle) {
        log::debug!("booster loop #{} stopped", handle.0);
    }
}

/// Audio manager for the game
pub struct AudioManager {
    backend: Box<dyn AudioBackend>,
    master_volume: f32,
    sfx_volume: f32,
    muted: bool,
    /// At most one booster loop is ever outstanding
    engine_loop: Option<LoopHandle>,
}

impl AudioManager {
    pub fn new(backend: Box<dyn AudioBackend>) -> Self {
        Self {
            backend,
            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,
            engine_loop: None,
        }
    }

    /// Set master volume (0.0 - 1.0)
    pub fn set_master_volume(&mut self, vol: f32) {
        self.master_volume = vol.clamp(0.0, 1.0);
    }

    /// Set SFX volume (0.0 - 1.0)
    pub fn set_sfx_volume(&mut self, vol: f32) {
        self.sfx_volume = vol.clamp(0.0, 1.0);
    }

    /// Mute/unmute all audio
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    /// Get effective volume
    fn effective_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * self.sfx_volume
        }
    }

    pub fn engine_loop(&self) -> Option<LoopHandle> {
        self.engine_loop
    }

    /// Play a sound effect
    pub fn play(&mut self, effect: SoundEffect) {
        let vol = self.effective_volume();
        if vol <= 0.0 {
            return;
        }
        self.backend.play(effect, vol);
    }

    /// React to simulation events
    pub fn handle_events(&mut self, events: &[GameEvent]) {
        for event in events {
            if let GameEvent::EngineToggled { .. } = event {
                self.play(SoundEffect::EngineToggle);
            }
        }
    }

    /// Acquire, adjust or release the booster loop to match the rocket
    pub fn sync_engine(&mut self, rocket: &Rocket, tuning: &Tuning) {
        let wants_loop = rocket.engine_enabled && rocket.thrust > tuning.engine_sound_threshold;
        let volume = (rocket.thrust / tuning.max_thrust).clamp(0.0, 1.0) * self.effective_volume();

        match (self.engine_loop, wants_loop) {
            (None, true) => self.engine_loop = Some(self.backend.start_loop(volume)),
            (Some(handle), true) => self.backend.set_loop_volume(handle, volume),
            (Some(_), false) => self.stop_engine(),
            (None, false) => {}
        }
    }

    /// Release the booster loop if one is playing
    pub fn stop_engine(&mut self) {
        if let Some(handle) = self.engine_loop.take() {
            self.backend.stop_loop(handle);
        }
    }
}

impl Drop for AudioManager {
    fn drop(&mut self) {
        self.stop_engine();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Debug, Default)]
    struct Log {
        cues: Vec<SoundEffect>,
        started: u32,
        stopped: u32,
        last_volume: f32,
    }

    /// Backend sharing its log with the test
    struct Recording(Rc<RefCell<Log>>);

    impl AudioBackend for Recording {
        fn play(&mut self, effect: SoundEffect, _volume: f32) {
            self.0.borrow_mut().cues.push(effect);
        }
        fn start_loop(&mut self, volume: f32) -> LoopHandle {
            let mut log = self.0.borrow_mut();
            log.started += 1;
            log.last_volume = volume;
            LoopHandle(log.started)
        }
        fn set_loop_volume(&mut self, _handle: LoopHandle, volume: f32) {
            self.0.borrow_mut().last_volume = volume;
        }
        fn stop_loop(&mut self, _handle: LoopHandle) {
            self.0.borrow_mut().stopped += 1;
        }
    }

    fn manager() -> (AudioManager, Rc<RefCell<Log>>) {
        let log = Rc::new(RefCell::new(Log::default()));
        (AudioManager::new(Box::new(Recording(log.clone()))), log)
    }

    #[test]
    fn test_engine_loop_acquire_release() {
        let tuning = Tuning::default();
        let (mut audio, log) = manager();
        let mut rocket = Rocket::new();

        audio.sync_engine(&rocket, &tuning);
        assert!(audio.engine_loop().is_none());

        rocket.turn_on_engine();
        rocket.thrust = tuning.max_thrust / 2.0;
        audio.sync_engine(&rocket, &tuning);
        audio.sync_engine(&rocket, &tuning);
        assert!(audio.engine_loop().is_some());
        assert_eq!(log.borrow().started, 1);

        rocket.thrust = 0.0;
        audio.sync_engine(&rocket, &tuning);
        assert!(audio.engine_loop().is_none());
        assert_eq!(log.borrow().stopped, 1);
    }

    #[test]
    fn test_loop_volume_follows_thrust() {
        let tuning = Tuning::default();
        let (mut audio, log) = manager();
        audio.set_master_volume(1.0);
        let mut rocket = Rocket::new();
        rocket.turn_on_engine();
        rocket.thrust = tuning.max_thrust;
        audio.sync_engine(&rocket, &tuning);
        assert!((log.borrow().last_volume - 1.0).abs() < 1e-6);

        rocket.thrust = tuning.max_thrust / 4.0;
        audio.sync_engine(&rocket, &tuning);
        assert!((log.borrow().last_volume - 0.25).abs() < 1e-6);
    }

    #[test]
    fn test_engine_off_releases_loop() {
        let tuning = Tuning::default();
        let (mut audio, log) = manager();
        let mut rocket = Rocket::new();
        rocket.turn_on_engine();
        rocket.thrust = tuning.max_thrust;
        audio.sync_engine(&rocket, &tuning);

        rocket.turn_off_engine();
        audio.sync_engine(&rocket, &tuning);
        assert!(audio.engine_loop().is_none());
        assert_eq!(log.borrow().stopped, 1);
    }

    #[test]
    fn test_drop_releases_loop() {
        let tuning = Tuning::default();
        let (mut audio, log) = manager();
        let mut rocket = Rocket::new();
        rocket.turn_on_engine();
        rocket.thrust = tuning.max_thrust;
        audio.sync_engine(&rocket, &tuning);
        drop(audio);
        assert_eq!(log.borrow().stopped, 1);
    }

    #[test]
    fn test_toggle_cue_respects_mute() {
        let (mut audio, log) = manager();
        let events = [GameEvent::EngineToggled { enabled: true }];
        audio.handle_events(&events);
        assert_eq!(log.borrow().cues, vec![SoundEffect::EngineToggle]);

        audio.set_muted(true);
        audio.handle_events(&events);
        assert_eq!(log.borrow().cues.len(), 1);
    }
}
