/// Tuning parameters for the oscillator
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Physical parameters at startup
    pub const MASS_INITIAL: f64 = 5.0; // kg
    pub const STIFFNESS_INITIAL: f64 = 15.0; // N/m
    pub const DAMPING_INITIAL: f64 = 1.0; // N*s/m

    // Lower bounds, enforced after every mutation
    pub const MASS_MIN: f64 = 0.5;
    pub const STIFFNESS_MIN: f64 = 1.0;
    pub const DAMPING_MIN: f64 = 0.0;

    // Per-frame change while a control is held
    pub const MASS_RATE: f64 = 0.1;
    pub const STIFFNESS_RATE: f64 = 0.5;
    pub const DAMPING_RATE: f64 = 0.1;

    // State at startup and after reset
    pub const POSITION_INITIAL: f64 = 100.0;
    pub const VELOCITY_INITIAL: f64 = 0.0;

    // Impulse
    pub const IMPULSE_VELOCITY: f64 = 200.0;
    pub const IMPULSE_FRAMES: u32 = 20;

    // Plot
    pub const HISTORY_LEN: usize = 500;
    pub const HISTORY_LEN_MAX: usize = 8192;
    pub const UNITS_PER_METER: f64 = 100.0;

    // Physics
    pub const SUBSTEPS: u32 = 4;
    pub const SUBSTEPS_MAX: u32 = 256;
    pub const SUBSTEP_DT: f64 = 0.1;
    pub const FRAME_RATE: f64 = 60.0; // nominal; sub-steps are not scaled by measured frame time
}
