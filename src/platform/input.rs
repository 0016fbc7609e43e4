//! Per-frame input snapshot

use glam::Vec2;

use crate::sim::TickInput;

/// Logical actions the host maps its keys onto
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Action {
    IncreaseThrust,
    DecreaseThrust,
    RotateLeft,
    RotateRight,
    EngineOn,
    EngineOff,
    Restart,
    Quit,
}

impl Action {
    pub const ALL: [Action; 8] = [
        Action::IncreaseThrust,
        Action::DecreaseThrust,
        Action::RotateLeft,
        Action::RotateRight,
        Action::EngineOn,
        Action::EngineOff,
        Action::Restart,
        Action::Quit,
    ];

    #[inline]
    fn bit(self) -> u16 {
        1 << self as u8
    }
}

/// Which actions are held this frame, plus the pointer
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct InputSnapshot {
    held: u16,
    /// Pointer position in screen space (not used by the simulation)
    pub pointer: Vec2,
}

impl InputSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot with the given actions held
    pub fn with(actions: &[Action]) -> Self {
        let mut snapshot = Self::default();
        for &action in actions {
            snapshot.set(action, true);
        }
        snapshot
    }

    pub fn set(&mut self, action: Action, down: bool) {
        if down {
            self.held |= action.bit();
        } else {
            self.held &= !action.bit();
        }
    }

    pub fn is_down(&self, action: Action) -> bool {
        self.held & action.bit() != 0
    }

    /// Down now but not in `previous`
    pub fn pressed(&self, action: Action, previous: &InputSnapshot) -> bool {
        self.is_down(action) && !previous.is_down(action)
    }

    /// Held actions become continuous controls; restart fires on the press
    pub fn to_tick_input(&self, previous: &InputSnapshot) -> TickInput {
        TickInput {
            increase_thrust: self.is_down(Action::IncreaseThrust),
            decrease_thrust: self.is_down(Action::DecreaseThrust),
            rotate_left: self.is_down(Action::RotateLeft),
            rotate_right: self.is_down(Action::RotateRight),
            engine_on: self.is_down(Action::EngineOn),
            engine_off: self.is_down(Action::EngineOff),
            restart: self.pressed(Action::Restart, previous),
        }
    }
}
