use glam::DVec2;

use crate::params::Params;

/// Oscillator state - offset from equilibrium and its rate of change
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct State {
    pub position: f64, // display units, 100 per metre
    pub velocity: f64,
}

impl State {
    pub fn new(position: f64, velocity: f64) -> Self {
        Self { position, velocity }
    }

    /// Pack as `[y, v]` for the integrator's vector arithmetic
    pub fn to_vec(self) -> DVec2 {
        DVec2::new(self.position, self.velocity)
    }

    pub fn from_vec(v: DVec2) -> Self {
        Self::new(v.x, v.y)
    }

    /// Total mechanical energy: kinetic plus spring potential
    pub fn energy(&self, params: &Parameters) -> f64 {
        0.5 * params.mass * self.velocity * self.velocity
            + 0.5 * params.stiffness * self.position * self.position
    }
}

/// Physical constants of the system
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Parameters {
    pub mass: f64,      // kg, >= Params::MASS_MIN
    pub stiffness: f64, // N/m, >= Params::STIFFNESS_MIN
    pub damping: f64,   // N*s/m, >= Params::DAMPING_MIN
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            mass: Params::MASS_INITIAL,
            stiffness: Params::STIFFNESS_INITIAL,
            damping: Params::DAMPING_INITIAL,
        }
    }
}

impl Parameters {
    /// Build a parameter set, clamped to the minimum bounds
    pub fn new(mass: f64, stiffness: f64, damping: f64) -> Self {
        Self {
            mass,
            stiffness,
            damping,
        }
        .clamped()
    }

    /// Clamp every parameter to its lower bound
    pub fn clamped(self) -> Self {
        Self {
            mass: self.mass.max(Params::MASS_MIN),
            stiffness: self.stiffness.max(Params::STIFFNESS_MIN),
            damping: self.damping.max(Params::DAMPING_MIN),
        }
    }

    /// Add per-frame deltas, then clamp
    pub fn apply(&mut self, deltas: ParameterDeltas) {
        *self = Self {
            mass: self.mass + deltas.mass,
            stiffness: self.stiffness + deltas.stiffness,
            damping: self.damping + deltas.damping,
        }
        .clamped();
    }

    /// c_critical = 2 * sqrt(m * k)
    pub fn critical_damping(&self) -> f64 {
        2.0 * (self.mass * self.stiffness).sqrt()
    }

    /// zeta = c / c_critical
    pub fn damping_ratio(&self) -> f64 {
        self.damping / self.critical_damping()
    }

    /// omega_n = sqrt(k / m), rad per time unit
    pub fn natural_frequency(&self) -> f64 {
        (self.stiffness / self.mass).sqrt()
    }
}

/// Pre-scaled parameter changes for one frame
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ParameterDeltas {
    pub mass: f64,
    pub stiffness: f64,
    pub damping: f64,
}

impl ParameterDeltas {
    pub fn new(mass: f64, stiffness: f64, damping: f64) -> Self {
        Self {
            mass,
            stiffness,
            damping,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parameters_default_matches_params() {
        let params = Parameters::default();
        assert_eq!(params.mass, 5.0);
        assert_eq!(params.stiffness, 15.0);
        assert_eq!(params.damping, 1.0);
    }

    #[test]
    fn test_parameters_new_clamps() {
        let params = Parameters::new(0.0, -3.0, -1.0);
        assert_eq!(params.mass, Params::MASS_MIN);
        assert_eq!(params.stiffness, Params::STIFFNESS_MIN);
        assert_eq!(params.damping, Params::DAMPING_MIN);
    }

    #[test]
    fn test_parameters_apply_clamps_after_delta() {
        let mut params = Parameters::new(0.6, 1.2, 0.05);
        params.apply(ParameterDeltas::new(-0.1, -0.5, -0.1));
        assert_eq!(params.mass, 0.5);
        assert_eq!(params.stiffness, 1.0);
        assert_eq!(params.damping, 0.0);
    }

    #[test]
    fn test_parameters_apply_increases() {
        let mut params = Parameters::default();
        params.apply(ParameterDeltas::new(0.1, 0.5, 0.1));
        assert!((params.mass - 5.1).abs() < 1e-12);
        assert!((params.stiffness - 15.5).abs() < 1e-12);
        assert!((params.damping - 1.1).abs() < 1e-12);
    }

    #[test]
    fn test_critical_damping_and_ratio() {
        let params = Parameters::new(2.0, 8.0, 4.0);
        assert_eq!(params.critical_damping(), 8.0);
        assert_eq!(params.damping_ratio(), 0.5);
        assert_eq!(params.natural_frequency(), 2.0);
    }

    #[test]
    fn test_state_vec_round_trip() {
        let state = State::new(3.0, -4.0);
        assert_eq!(state.to_vec(), DVec2::new(3.0, -4.0));
        assert_eq!(State::from_vec(state.to_vec()), state);
    }

    #[test]
    fn test_state_energy() {
        let params = Parameters::new(2.0, 10.0, 0.0);
        let state = State::new(3.0, 4.0);
        // 0.5*2*16 + 0.5*10*9
        assert_eq!(state.energy(&params), 61.0);
    }
}
