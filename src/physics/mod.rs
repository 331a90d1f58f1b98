//! Newtonian gravity and the fixed-step integrator.

pub mod gravity;
pub mod integrator;

pub use gravity::net_force;
pub use integrator::step;

/// Gravitational constant (m³ kg⁻¹ s⁻²).
pub const G: f64 = 6.67428e-11;
/// Astronomical unit in metres.
pub const AU: f64 = 1.496e11;
/// One simulated day in seconds; the fixed time step.
pub const DAY: f64 = 86_400.0;
