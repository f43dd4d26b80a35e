pub mod diagnostics;
pub mod input;
pub mod integrator;
pub mod physics;

pub use diagnostics::*;
pub use input::*;
pub use integrator::*;
pub use physics::*;
