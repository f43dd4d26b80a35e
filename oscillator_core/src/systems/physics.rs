use glam::DVec2;

use crate::components::{Parameters, State};

/// Acceleration from Newton's second law for the damped spring
///
/// `a = (-k * y - c * v) / m`. Parameters are clamped by the caller, so the
/// mass is never below `Params::MASS_MIN`.
pub fn acceleration(state: State, params: &Parameters) -> f64 {
    let spring = -params.stiffness * state.position;
    let damper = -params.damping * state.velocity;
    (spring + damper) / params.mass
}

/// Right-hand side of the first-order system `y' = v, v' = a(y, v)`
pub fn derivative(y: DVec2, params: &Parameters) -> DVec2 {
    let state = State::from_vec(y);
    DVec2::new(state.velocity, acceleration(state, params))
}
