use crate::components::{ParameterDeltas, Parameters, State};
use crate::config::Config;
use crate::history::HistoryBuffer;
use crate::resources::{FrameInput, ImpulseIndicator};

/// Apply the frame's discrete events: reset first, then impulse
pub fn apply_events(
    state: &mut State,
    history: &mut HistoryBuffer,
    indicator: &mut ImpulseIndicator,
    input: &FrameInput,
    config: &Config,
) {
    if input.reset {
        *state = config.initial_state();
        history.clear();
    }

    if input.impulse {
        state.velocity += config.impulse_velocity;
        indicator.start(config.impulse_frames);
    }
}

/// Apply continuous parameter changes; bounds hold afterwards
pub fn apply_deltas(params: &mut Parameters, deltas: ParameterDeltas) {
    params.apply(deltas);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::Params;

    #[test]
    fn test_reset_restores_state_and_zeroes_history() {
        let config = Config::new();
        let mut state = State::new(-37.0, 12.0);
        let mut history = HistoryBuffer::new(8);
        history.push(5.0);
        let mut indicator = ImpulseIndicator::new();

        apply_events(
            &mut state,
            &mut history,
            &mut indicator,
            &FrameInput::reset(),
            &config,
        );

        assert_eq!(state, State::new(100.0, 0.0));
        assert!(history.iter().all(|s| s == 0.0));
        assert!(!indicator.is_active());
    }

    #[test]
    fn test_impulse_adds_velocity_and_starts_indicator() {
        let config = Config::new();
        let mut state = State::new(10.0, -50.0);
        let mut history = HistoryBuffer::new(8);
        let mut indicator = ImpulseIndicator::new();

        apply_events(
            &mut state,
            &mut history,
            &mut indicator,
            &FrameInput::impulse(),
            &config,
        );

        assert_eq!(state, State::new(10.0, 150.0));
        assert_eq!(indicator.frames_left, Params::IMPULSE_FRAMES);
    }

    #[test]
    fn test_reset_then_impulse_same_frame() {
        let config = Config::new();
        let mut state = State::new(-1.0, -1.0);
        let mut history = HistoryBuffer::new(2);
        let mut indicator = ImpulseIndicator::new();
        let input = FrameInput {
            reset: true,
            impulse: true,
            ..FrameInput::new()
        };

        apply_events(&mut state, &mut history, &mut indicator, &input, &config);

        assert_eq!(state, State::new(100.0, 200.0));
        assert!(indicator.is_active());
    }

    #[test]
    fn test_apply_deltas_never_breaks_bounds() {
        let mut params = Parameters::default();
        for _ in 0..1000 {
            apply_deltas(&mut params, ParameterDeltas::new(-0.1, -0.5, -0.1));
        }
        assert_eq!(params.mass, Params::MASS_MIN);
        assert_eq!(params.stiffness, Params::STIFFNESS_MIN);
        assert_eq!(params.damping, Params::DAMPING_MIN);
    }
}
