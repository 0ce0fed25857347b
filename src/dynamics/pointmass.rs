use nalgebra::Vector2;

use crate::dynamics::state::{Deriv, SimulationParameters, State};
use crate::physics::{aerodynamics, gravity};

// ---------------------------------------------------------------------------
// 2D point-mass equations of motion
// ---------------------------------------------------------------------------

/// Compute state derivatives for a point mass.
///
/// Forces modeled:
///   1. Gravity: uniform, vertical only
///   2. Drag:    quadratic, opposing velocity (only when enabled)
pub fn derivatives(state: &State, params: &SimulationParameters) -> Deriv {
    let a_gravity = gravity::gravity_accel(params.gravity);

    let a_drag = if params.include_drag {
        aerodynamics::drag_accel(
            &state.vel,
            params.effective_air_density(),
            params.drag_coefficient,
            params.effective_area(),
            params.mass,
        )
    } else {
        Vector2::zeros()
    };

    Deriv {
        dpos: state.vel,
        dvel: a_gravity + a_drag,
    }
}
