use serde::Deserialize;

use crate::components::{Parameters, State};
use crate::params::Params;

/// Imaginary-axis limit of the classical RK4 stability region, |h * omega| <= 2 * sqrt(2)
const RK4_IMAGINARY_LIMIT: f64 = 2.0 * std::f64::consts::SQRT_2;

/// Simulation configuration
///
/// Deserializes from a partial object: missing fields fall back to [`Params`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub mass: f64,
    pub stiffness: f64,
    pub damping: f64,
    pub position: f64,
    pub velocity: f64,
    pub mass_rate: f64,
    pub stiffness_rate: f64,
    pub damping_rate: f64,
    pub impulse_velocity: f64,
    pub impulse_frames: u32,
    pub history_len: usize,
    pub substeps: u32,
    pub substep_dt: f64,
    pub units_per_meter: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            mass: Params::MASS_INITIAL,
            stiffness: Params::STIFFNESS_INITIAL,
            damping: Params::DAMPING_INITIAL,
            position: Params::POSITION_INITIAL,
            velocity: Params::VELOCITY_INITIAL,
            mass_rate: Params::MASS_RATE,
            stiffness_rate: Params::STIFFNESS_RATE,
            damping_rate: Params::DAMPING_RATE,
            impulse_velocity: Params::IMPULSE_VELOCITY,
            impulse_frames: Params::IMPULSE_FRAMES,
            history_len: Params::HISTORY_LEN,
            substeps: Params::SUBSTEPS,
            substep_dt: Params::SUBSTEP_DT,
            units_per_meter: Params::UNITS_PER_METER,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace overrides that would break the frame loop with defaults
    pub fn validated(mut self) -> Self {
        self.history_len = self.history_len.clamp(1, Params::HISTORY_LEN_MAX);
        self.substeps = self.substeps.clamp(1, Params::SUBSTEPS_MAX);
        if !(self.substep_dt.is_finite() && self.substep_dt > 0.0) {
            self.substep_dt = Params::SUBSTEP_DT;
        }
        if !(self.units_per_meter.is_finite() && self.units_per_meter > 0.0) {
            self.units_per_meter = Params::UNITS_PER_METER;
        }
        self.mass_rate = self.mass_rate.abs();
        self.stiffness_rate = self.stiffness_rate.abs();
        self.damping_rate = self.damping_rate.abs();
        self
    }

    /// State at startup and after a reset
    pub fn initial_state(&self) -> State {
        State::new(self.position, self.velocity)
    }

    /// Parameters at startup, clamped to their bounds
    pub fn initial_parameters(&self) -> Parameters {
        Parameters::new(self.mass, self.stiffness, self.damping)
    }

    /// Simulated time covered by one visual frame
    pub fn frame_dt(&self) -> f64 {
        self.substeps as f64 * self.substep_dt
    }

    /// Simulated time per wall-clock second, assuming the nominal frame rate
    pub fn simulated_rate(&self) -> f64 {
        self.frame_dt() * Params::FRAME_RATE
    }

    /// Largest sub-step for which RK4 stays non-divergent on the undamped oscillator
    ///
    /// Keep `substep_dt` well below this; near the limit the method visibly
    /// bleeds energy even though it does not blow up.
    pub fn max_stable_substep(&self, params: &Parameters) -> f64 {
        RK4_IMAGINARY_LIMIT / params.natural_frequency()
    }

    pub fn is_stable(&self, params: &Parameters) -> bool {
        self.substep_dt < self.max_stable_substep(params)
    }

    /// Convert a position to metres for display
    pub fn to_meters(&self, position: f64) -> f64 {
        position / self.units_per_meter
    }
}
