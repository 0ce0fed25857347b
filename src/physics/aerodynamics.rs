use nalgebra::Vector2;

/// Quadratic drag force magnitude: F = 0.5 * rho * A * Cd * v^2.
pub fn drag_force_magnitude(speed: f64, density: f64, cd: f64, area: f64) -> f64 {
    0.5 * density * area * cd * speed * speed
}

/// Drag deceleration vector for a point mass, opposing velocity.
///
/// Written as `-(a / v) * vel` so each component is scaled by the same
/// factor the scalar update uses. Zero when the body is at rest.
pub fn drag_accel(vel: &Vector2<f64>, density: f64, cd: f64, area: f64, mass: f64) -> Vector2<f64> {
    let speed = vel.norm();
    if speed > 0.0 {
        let a = drag_force_magnitude(speed, density, cd, area) / mass;
        vel * (-a / speed)
    } else {
        Vector2::zeros()
    }
}

/// Speed at which drag balances gravity: sqrt(2 m g / (rho A Cd)).
/// Infinite when there is no drag.
pub fn terminal_velocity(mass: f64, g: f64, density: f64, cd: f64, area: f64) -> f64 {
    let k = density * area * cd;
    if k > 0.0 {
        (2.0 * mass * g / k).sqrt()
    } else {
        f64::INFINITY
    }
}
