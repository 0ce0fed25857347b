//! Two-dimensional projectile simulation: a point mass under uniform
//! gravity and optional quadratic drag, integrated with fixed-step explicit
//! Euler until it returns to the ground.
//!
//! The core is [`sim::TrajectoryIntegrator`], a single-use state machine that
//! emits one sample per call and resolves ground impact by interpolating
//! inside the crossing step, so the last sample always has `y == 0`.

pub mod physics;
pub mod dynamics;
pub mod sim;
pub mod io;

// Flat re-exports for callers that only drive the integrator
pub use dynamics::state::{ParametersBuilder, SampleResult, SimConfig, SimulationParameters, State};
pub use sim::{SimError, TrajectoryIntegrator};
