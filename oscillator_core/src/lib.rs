//! Numerical core of the mass-spring-damper simulator
//!
//! [`Simulation`] owns the oscillator state, its parameters and the plot
//! history, and advances them once per visual frame with fixed RK4 sub-steps.
//! Rendering and input polling live outside this crate: they feed a
//! [`FrameInput`] into [`Simulation::step`] and read a [`Snapshot`] back.

pub mod components;
pub mod config;
pub mod history;
pub mod params;
pub mod resources;
pub mod systems;

pub use components::*;
pub use config::*;
pub use history::*;
pub use params::*;
pub use resources::*;
pub use systems::*;

/// Frame-synchronous simulation loop
#[derive(Debug, Clone)]
pub struct Simulation {
    config: Config,
    state: State,
    params: Parameters,
    history: HistoryBuffer,
    indicator: ImpulseIndicator,
    impulse_active: bool,
    diagnostics: Diagnostics,
    time: Time,
}

impl Default for Simulation {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl Simulation {
    pub fn new(config: Config) -> Self {
        let config = config.validated();
        let state = config.initial_state();
        let params = config.initial_parameters();
        Self {
            history: HistoryBuffer::new(config.history_len),
            diagnostics: diagnose(&state, &params),
            indicator: ImpulseIndicator::new(),
            impulse_active: false,
            time: Time::new(),
            config,
            state,
            params,
        }
    }

    /// Run one visual frame
    ///
    /// The sub-step count and size are fixed per frame, so simulated time runs
    /// at `frame_dt` per call regardless of how often the caller ticks.
    pub fn step(&mut self, input: &FrameInput) {
        // 1. Discrete events (reset, impulse)
        apply_events(
            &mut self.state,
            &mut self.history,
            &mut self.indicator,
            input,
            &self.config,
        );

        // 2. Parameter deltas, clamped
        apply_deltas(&mut self.params, input.deltas);

        // 3. Fixed RK4 sub-steps
        self.state = substep(
            self.state,
            &self.params,
            self.config.substep_dt,
            self.config.substeps,
        );

        // 4. Slide the plot window
        self.history.push(self.state.position);

        // 5. Diagnostics
        self.diagnostics = diagnose(&self.state, &self.params);

        // 6. Impulse marker is shown this frame, then counted down
        self.impulse_active = self.indicator.is_active();
        self.indicator.tick();

        self.time.advance(self.config.frame_dt());
    }

    /// Convenience for callers that track control directions rather than deltas
    pub fn step_controls(&mut self, controls: &Controls) {
        let input = controls.frame_input(&self.config);
        self.step(&input);
    }

    /// Read-only view for the renderer
    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            state: self.state,
            params: self.params,
            diagnostics: self.diagnostics,
            history: &self.history,
            impulse_active: self.impulse_active,
            position_m: self.config.to_meters(self.state.position),
            substep_stable: self.config.is_stable(&self.params),
            time: self.time,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn params(&self) -> Parameters {
        self.params
    }

    pub fn history(&self) -> &HistoryBuffer {
        &self.history
    }

    pub fn diagnostics(&self) -> Diagnostics {
        self.diagnostics
    }

    pub fn time(&self) -> Time {
        self.time
    }

    /// Replace the parameters; bounds are enforced
    pub fn set_parameters(&mut self, params: Parameters) {
        self.params = params.clamped();
        self.diagnostics = diagnose(&self.state, &self.params);
    }
}

/// Consistent per-frame view of the simulation
#[derive(Debug, Clone, Copy)]
pub struct Snapshot<'a> {
    pub state: State,
    pub params: Parameters,
    pub diagnostics: Diagnostics,
    pub history: &'a HistoryBuffer, // oldest to newest
    pub impulse_active: bool,
    pub position_m: f64,
    pub substep_stable: bool,
    pub time: Time,
}
