pub mod error;
pub mod event;
pub mod integrator;
pub mod runner;

pub use error::SimError;
pub use integrator::{euler_step, TrajectoryIntegrator};
pub use runner::{simulate, simulate_with, Trajectory};
