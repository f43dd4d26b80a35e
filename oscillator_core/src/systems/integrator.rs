//! Classical fourth-order Runge-Kutta stepping for the oscillator.
//!
//! There is no error control: accuracy and stability come from the caller
//! choosing a sub-step small relative to the natural period `2*pi / omega_n`
//! (see `Config::max_stable_substep`).

use crate::components::{Parameters, State};
use crate::systems::physics::derivative;

/// Advance `state` by `dt` with one RK4 step
///
/// Each stage evaluates `(v, a)` at a state extrapolated from the previous
/// stage's derivative (half a step for k2 and k3, a full step for k4), and
/// the stages are combined with weights (1, 2, 2, 1) / 6.
pub fn rk4_step(state: State, params: &Parameters, dt: f64) -> State {
    let y = state.to_vec();
    let half_dt = 0.5 * dt;

    let k1 = derivative(y, params);
    let k2 = derivative(y + half_dt * k1, params);
    let k3 = derivative(y + half_dt * k2, params);
    let k4 = derivative(y + dt * k3, params);

    State::from_vec(y + (dt / 6.0) * (k1 + 2.0 * k2 + 2.0 * k3 + k4))
}

/// Chain `count` RK4 steps of size `dt`
pub fn substep(state: State, params: &Parameters, dt: f64, count: u32) -> State {
    (0..count).fold(state, |s, _| rk4_step(s, params, dt))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rel_err(actual: f64, expected: f64) -> f64 {
        ((actual - expected) / expected).abs()
    }

    #[test]
    fn test_rk4_reference_step() {
        // k1 = (0, -300), k2 = (-15, -297), k3 = (-14.85, -294.78), k4 = (-29.478, -289.6494)
        let params = Parameters::new(5.0, 15.0, 1.0);
        let next = rk4_step(State::new(100.0, 0.0), &params, 0.1);
        assert!(rel_err(next.position, 98.5137) < 1e-9, "y = {}", next.position);
        assert!(rel_err(next.velocity, -29.55349) < 1e-9, "v = {}", next.velocity);
    }

    #[test]
    fn test_rk4_equilibrium_is_fixed_point() {
        let params = Parameters::default();
        assert_eq!(rk4_step(State::default(), &params, 0.1), State::default());
    }

    #[test]
    fn test_rk4_zero_dt_is_identity() {
        let params = Parameters::default();
        let state = State::new(42.0, -7.0);
        assert_eq!(rk4_step(state, &params, 0.0), state);
    }

    #[test]
    fn test_rk4_matches_exact_undamped_solution() {
        // y(t) = cos(omega t) with omega = 2
        let params = Parameters::new(1.0, 4.0, 0.0);
        let dt = 0.01;
        let steps = 500;
        let end = substep(State::new(1.0, 0.0), &params, dt, steps);
        let t = dt * steps as f64;
        assert!((end.position - (2.0 * t).cos()).abs() < 1e-7);
        assert!((end.velocity + 2.0 * (2.0 * t).sin()).abs() < 1e-7);
    }

    #[test]
    fn test_rk4_fourth_order_convergence() {
        // Global error should drop ~16x when dt halves
        let params = Parameters::new(1.0, 4.0, 0.0);
        let error = |dt: f64, steps: u32| {
            let end = substep(State::new(1.0, 0.0), &params, dt, steps);
            (end.position - 2.0f64.cos()).abs()
        };
        let coarse = error(0.1, 10);
        let fine = error(0.05, 20);
        let ratio = coarse / fine;
        assert!(ratio > 12.0 && ratio < 20.0, "ratio = {ratio}");
    }

    #[test]
    fn test_substep_chains_steps() {
        let params = Parameters::default();
        let start = State::new(100.0, 0.0);
        let mut manual = start;
        for _ in 0..4 {
            manual = rk4_step(manual, &params, 0.1);
        }
        assert_eq!(substep(start, &params, 0.1, 4), manual);
        assert_eq!(substep(start, &params, 0.1, 0), start);
    }
}
