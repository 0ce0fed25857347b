// ---------------------------------------------------------------------------
// Air properties for diagnostics (Reynolds number at launch)
// ---------------------------------------------------------------------------

const MU_REF: f64 = 1.716e-5; // dynamic viscosity at T_REF, kg/(m·s)
const T_REF: f64 = 273.15; // K
const SUTHERLAND_C: f64 = 111.0; // K

/// Dynamic viscosity of air from Sutherland's law.
pub fn air_viscosity(temperature: f64) -> f64 {
    MU_REF * ((T_REF + SUTHERLAND_C) / (temperature + SUTHERLAND_C)) * (temperature / T_REF).powf(1.5)
}

/// Reynolds number Re = rho v d / mu. Zero in vacuum.
pub fn reynolds_number(density: f64, speed: f64, length: f64, temperature: f64) -> f64 {
    let mu = air_viscosity(temperature);
    if density <= 0.0 || mu <= 0.0 {
        return 0.0;
    }
    density * speed * length / mu
}

/// Diameter of a circle with the given area.
pub fn equivalent_diameter(area: f64) -> f64 {
    2.0 * (area.max(0.0) / std::f64::consts::PI).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn viscosity_at_reference_temperature() {
        assert!((air_viscosity(T_REF) - MU_REF).abs() < 1e-15);
    }

    #[test]
    fn viscosity_rises_with_temperature() {
        assert!(air_viscosity(320.0) > air_viscosity(280.0));
    }

    #[test]
    fn baseball_scale_reynolds_number() {
        // 0.1 m sphere at 60 m/s in room-temperature air: turbulent regime
        let re = reynolds_number(1.225, 60.0, 0.1, 293.15);
        assert!(re > 3.0e5 && re < 5.0e5, "Re = {}", re);
        assert_eq!(reynolds_number(0.0, 60.0, 0.1, 293.15), 0.0);
    }

    #[test]
    fn diameter_round_trips_area() {
        let d = equivalent_diameter(std::f64::consts::PI * 0.05 * 0.05);
        assert!((d - 0.1).abs() < 1e-12);
    }
}
