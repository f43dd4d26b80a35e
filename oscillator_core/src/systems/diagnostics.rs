use crate::components::{Parameters, State};

/// Damping regime of the current parameter set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Regime {
    Undamped,
    Underdamped,
    CriticallyDamped,
    Overdamped,
}

impl Regime {
    /// Classify `damping` against `critical`
    ///
    /// Boundaries use exact comparison, so `CriticallyDamped` is only reported
    /// when the two values are bit-for-bit equal.
    #[allow(clippy::float_cmp)]
    pub fn classify(damping: f64, critical: f64) -> Self {
        if damping == 0.0 {
            Regime::Undamped
        } else if damping < critical {
            Regime::Underdamped
        } else if damping > critical {
            Regime::Overdamped
        } else {
            Regime::CriticallyDamped
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Regime::Undamped => "Undamped (c = 0)",
            Regime::Underdamped => "Underdamped (zeta < 1)",
            Regime::CriticallyDamped => "Critically damped (zeta = 1)",
            Regime::Overdamped => "Overdamped (zeta > 1)",
        }
    }
}

/// Derived quantities shown alongside the plot
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Diagnostics {
    pub critical_damping: f64,
    pub damping_ratio: f64,
    pub regime: Regime,
    pub natural_frequency: f64,
    pub energy: f64,
}

/// Compute diagnostics for the current state and parameters
pub fn diagnose(state: &State, params: &Parameters) -> Diagnostics {
    let critical_damping = params.critical_damping();
    Diagnostics {
        critical_damping,
        damping_ratio: params.damping / critical_damping,
        regime: Regime::classify(params.damping, critical_damping),
        natural_frequency: params.natural_frequency(),
        energy: state.energy(params),
    }
}
