pub mod pointmass;
pub mod state;

pub use pointmass::derivatives;
pub use state::{SampleResult, SimConfig, SimulationParameters, State};
