use nalgebra::Vector2;

/// Uniform gravity acceleration (x downrange, y up).
pub fn gravity_accel(g: f64) -> Vector2<f64> {
    Vector2::new(0.0, -g)
}

/// Vacuum range over flat ground: v0^2 sin(2θ) / g.
pub fn vacuum_range(speed: f64, angle_rad: f64, g: f64) -> f64 {
    speed * speed * (2.0 * angle_rad).sin() / g
}

/// Vacuum apex height: (v0 sin θ)^2 / 2g.
pub fn vacuum_apex(speed: f64, angle_rad: f64, g: f64) -> f64 {
    let vy = speed * angle_rad.sin();
    vy * vy / (2.0 * g)
}

/// Vacuum time of flight: 2 v0 sin θ / g.
pub fn vacuum_flight_time(speed: f64, angle_rad: f64, g: f64) -> f64 {
    2.0 * speed * angle_rad.sin() / g
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dynamics::state::G0;

    #[test]
    fn gravity_points_down() {
        let g = gravity_accel(G0);
        assert_eq!(g.x, 0.0);
        assert!((g.y + G0).abs() < 1e-12);
    }

    #[test]
    fn range_peaks_at_45_degrees() {
        let r30 = vacuum_range(50.0, 30f64.to_radians(), G0);
        let r45 = vacuum_range(50.0, 45f64.to_radians(), G0);
        let r60 = vacuum_range(50.0, 60f64.to_radians(), G0);
        assert!(r45 > r30 && r45 > r60);
        // Complementary angles share a range
        assert!((r30 - r60).abs() < 1e-9);
    }

    #[test]
    fn reference_scenario_range() {
        // 60 m/s at 20 deg
        let r = vacuum_range(60.0, 20f64.to_radians(), G0);
        assert!((r - 235.9).abs() < 0.5, "got {}", r);
    }
}
