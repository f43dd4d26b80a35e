//! Browser driver for the mass-spring-damper simulator
//!
//! JavaScript owns the canvas and the `requestAnimationFrame` loop. It forwards
//! key events here, calls [`Simulator::frame`] once per animation frame and
//! draws from the getters and [`Simulator::history`].

mod env;
pub mod input;

pub use env::*;

use input::KeyState;
use oscillator_core::{Config, Regime, Simulation};
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg_attr(target_arch = "wasm32", wasm_bindgen(start))]
pub fn start() {
    console_error_panic_hook::set_once();
}

/// Simulation plus the keyboard state that drives it
#[cfg_attr(target_arch = "wasm32", wasm_bindgen)]
pub struct Simulator {
    sim: Simulation,
    keys: KeyState,
    regime: Regime,
    env: Box<dyn Environment>,
}

impl Default for Simulator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg_attr(target_arch = "wasm32", wasm_bindgen)]
impl Simulator {
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen(constructor))]
    pub fn new() -> Self {
        Self::with_env(Config::default(), default_env())
    }

    /// Build from a JSON object of config overrides, e.g. `{"mass": 2.0}`
    pub fn from_config_json(json: &str) -> Result<Simulator, String> {
        let config: Config =
            serde_json::from_str(json).map_err(|e| format!("Invalid config: {e}"))?;
        Ok(Self::with_env(config, default_env()))
    }

    /// Returns true if the key is bound, so the caller can suppress scrolling
    pub fn key_down(&mut self, key: &str) -> bool {
        self.keys.handle_key_down(key)
    }

    pub fn key_up(&mut self, key: &str) -> bool {
        self.keys.handle_key_up(key)
    }

    pub fn release_keys(&mut self) {
        self.keys.release_all();
    }

    /// Advance one animation frame
    pub fn frame(&mut self) {
        let controls = self.keys.take_controls();
        if controls.reset {
            self.env.log("Reset to initial state".to_string());
        }
        if controls.impulse {
            self.env.log(format!(
                "Impulse: velocity +{}",
                self.sim.config().impulse_velocity
            ));
        }

        self.sim.step_controls(&controls);

        let diagnostics = self.sim.diagnostics();
        if diagnostics.regime != self.regime {
            self.env.log(format!(
                "Regime: {} -> {} (zeta = {:.3})",
                self.regime.label(),
                diagnostics.regime.label(),
                diagnostics.damping_ratio
            ));
            self.regime = diagnostics.regime;
        }
    }

    #[cfg_attr(target_arch = "wasm32", wasm_bindgen(getter))]
    pub fn position(&self) -> f64 {
        self.sim.state().position
    }

    #[cfg_attr(target_arch = "wasm32", wasm_bindgen(getter))]
    pub fn position_m(&self) -> f64 {
        self.sim.snapshot().position_m
    }

    #[cfg_attr(target_arch = "wasm32", wasm_bindgen(getter))]
    pub fn velocity(&self) -> f64 {
        self.sim.state().velocity
    }

    #[cfg_attr(target_arch = "wasm32", wasm_bindgen(getter))]
    pub fn mass(&self) -> f64 {
        self.sim.params().mass
    }

    #[cfg_attr(target_arch = "wasm32", wasm_bindgen(getter))]
    pub fn stiffness(&self) -> f64 {
        self.sim.params().stiffness
    }

    #[cfg_attr(target_arch = "wasm32", wasm_bindgen(getter))]
    pub fn damping(&self) -> f64 {
        self.sim.params().damping
    }

    #[cfg_attr(target_arch = "wasm32", wasm_bindgen(getter))]
    pub fn critical_damping(&self) -> f64 {
        self.sim.diagnostics().critical_damping
    }

    #[cfg_attr(target_arch = "wasm32", wasm_bindgen(getter))]
    pub fn damping_ratio(&self) -> f64 {
        self.sim.diagnostics().damping_ratio
    }

    #[cfg_attr(target_arch = "wasm32", wasm_bindgen(getter))]
    pub fn natural_frequency(&self) -> f64 {
        self.sim.diagnostics().natural_frequency
    }

    #[cfg_attr(target_arch = "wasm32", wasm_bindgen(getter))]
    pub fn energy(&self) -> f64 {
        self.sim.diagnostics().energy
    }

    /// Regime label for the status line
    pub fn regime_label(&self) -> String {
        self.sim.diagnostics().regime.label().to_string()
    }

    #[cfg_attr(target_arch = "wasm32", wasm_bindgen(getter))]
    pub fn impulse_active(&self) -> bool {
        self.sim.snapshot().impulse_active
    }

    #[cfg_attr(target_arch = "wasm32", wasm_bindgen(getter))]
    pub fn substep_stable(&self) -> bool {
        self.sim.snapshot().substep_stable
    }

    #[cfg_attr(target_arch = "wasm32", wasm_bindgen(getter))]
    pub fn elapsed(&self) -> f64 {
        self.sim.time().now
    }

    /// Plot samples, oldest first
    pub fn history(&self) -> Vec<f64> {
        self.sim.history().to_vec()
    }

    pub fn history_len(&self) -> usize {
        self.sim.history().len()
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
impl Simulator {
    /// Key down straight from a DOM listener; bound keys don't scroll the page
    pub fn key_down_event(&mut self, event: &web_sys::KeyboardEvent) {
        if self.key_down(&input::get_key_from_event(event)) {
            event.prevent_default();
        }
    }

    pub fn key_up_event(&mut self, event: &web_sys::KeyboardEvent) {
        if self.key_up(&input::get_key_from_event(event)) {
            event.prevent_default();
        }
    }
}

impl Simulator {
    pub fn with_env(config: Config, env: Box<dyn Environment>) -> Self {
        let sim = Simulation::new(config);
        let params = sim.params();
        let config = sim.config();
        env.log(format!(
            "Simulator ready: m = {}, k = {}, c = {}, {} x {} per frame ({} time units/s at 60 Hz)",
            params.mass,
            params.stiffness,
            params.damping,
            config.substeps,
            config.substep_dt,
            config.simulated_rate()
        ));
        if !config.is_stable(&params) {
            env.log(format!(
                "Sub-step {} exceeds the RK4 stability bound {:.4}",
                config.substep_dt,
                config.max_stable_substep(&params)
            ));
        }
        Self {
            regime: sim.diagnostics().regime,
            keys: KeyState::new(),
            sim,
            env,
        }
    }

    pub fn simulation(&self) -> &Simulation {
        &self.sim
    }
}
