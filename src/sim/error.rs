use std::error::Error;
use std::fmt;

/// Errors raised by the trajectory integrator.
#[derive(Debug, Clone, PartialEq)]
pub enum SimError {
    /// Out-of-range input, raised at construction only.
    InvalidParameter {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },
    /// Ground crossing found while the projectile is not descending,
    /// so the impact time `-y / vy` is undefined.
    DegenerateState { step: usize, y: f64, vy: f64 },
}

impl SimError {
    pub(crate) fn invalid(name: &'static str, value: f64, reason: &'static str) -> Self {
        SimError::InvalidParameter { name, value, reason }
    }
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimError::InvalidParameter { name, value, reason } => {
                write!(f, "invalid parameter {}={}: {}", name, value, reason)
            }
            SimError::DegenerateState { step, y, vy } => write!(
                f,
                "degenerate state at step {}: ground crossing with y={} and vy={} (not descending)",
                step, y, vy
            ),
        }
    }
}

impl Error for SimError {}
