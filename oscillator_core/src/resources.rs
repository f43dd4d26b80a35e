use crate::components::ParameterDeltas;
use crate::config::Config;

/// Simulated time, advanced once per frame by the fixed frame duration
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Time {
    pub frame: u64, // Frames stepped
    pub now: f64,   // Total simulated time
}

impl Time {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&mut self, frame_dt: f64) {
        self.frame += 1;
        self.now += frame_dt;
    }
}

/// Frames left to show the impulse marker
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImpulseIndicator {
    pub frames_left: u32,
}

impl ImpulseIndicator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(&mut self, frames: u32) {
        self.frames_left = frames;
    }

    pub fn tick(&mut self) {
        self.frames_left = self.frames_left.saturating_sub(1);
    }

    pub fn is_active(&self) -> bool {
        self.frames_left > 0
    }
}

/// Control intents from the input side for one frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Controls {
    pub reset: bool,
    pub impulse: bool,
    pub mass_dir: i8,      // -1 = decrease, 0 = hold, 1 = increase
    pub stiffness_dir: i8, // -1 = decrease, 0 = hold, 1 = increase
    pub damping_dir: i8,   // -1 = decrease, 0 = hold, 1 = increase
}

impl Controls {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scale directions by the configured per-frame rates
    pub fn frame_input(&self, config: &Config) -> FrameInput {
        let scale = |dir: i8, rate: f64| dir.signum() as f64 * rate;
        FrameInput {
            reset: self.reset,
            impulse: self.impulse,
            deltas: ParameterDeltas::new(
                scale(self.mass_dir, config.mass_rate),
                scale(self.stiffness_dir, config.stiffness_rate),
                scale(self.damping_dir, config.damping_rate),
            ),
        }
    }
}

/// Everything the simulation consumes for one frame
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameInput {
    pub reset: bool,
    pub impulse: bool,
    pub deltas: ParameterDeltas,
}

impl FrameInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset() -> Self {
        Self {
            reset: true,
            ..Self::default()
        }
    }

    pub fn impulse() -> Self {
        Self {
            impulse: true,
            ..Self::default()
        }
    }

    pub fn with_deltas(deltas: ParameterDeltas) -> Self {
        Self {
            deltas,
            ..Self::default()
        }
    }
}
