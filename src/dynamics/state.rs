use std::f64::consts::PI;

use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

use crate::sim::error::SimError;

// ---------------------------------------------------------------------------
// Physical constants
// ---------------------------------------------------------------------------

pub const G0: f64 = 9.81; // gravity, m/s^2
pub const SEA_LEVEL_DENSITY: f64 = 1.225; // kg/m^3
pub const ROOM_TEMPERATURE: f64 = 293.15; // K
pub const DEFAULT_DIAMETER: f64 = 0.1; // m

/// Reference area of a sphere/cylinder of the given diameter.
pub fn area_from_diameter(diameter: f64) -> f64 {
    PI * (diameter / 2.0).powi(2)
}

// ---------------------------------------------------------------------------
// Launch parameters
// ---------------------------------------------------------------------------

/// Immutable inputs of one simulation run.
/// Angles are in degrees here and converted to radians on use.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationParameters {
    pub initial_speed: f64,        // m/s
    pub launch_angle: f64,         // deg above horizontal
    pub mass: f64,                 // kg
    pub time_step: f64,            // s
    pub drag_coefficient: f64,     // dimensionless
    pub include_drag: bool,
    pub air_density: f64,          // kg/m^3
    pub cross_sectional_area: f64, // m^2
    pub gravity: f64,              // m/s^2
    pub temperature: f64,          // K, diagnostics only
}

impl Default for SimulationParameters {
    fn default() -> Self {
        Self {
            initial_speed: 60.0,
            launch_angle: 20.0,
            mass: 1.0,
            time_step: 0.01,
            drag_coefficient: 0.47, // sphere
            include_drag: true,
            air_density: SEA_LEVEL_DENSITY,
            cross_sectional_area: area_from_diameter(DEFAULT_DIAMETER),
            gravity: G0,
            temperature: ROOM_TEMPERATURE,
        }
    }
}

impl SimulationParameters {
    pub fn launch_angle_rad(&self) -> f64 {
        self.launch_angle.to_radians()
    }

    /// Launch velocity vector: (v0 cos θ, v0 sin θ).
    pub fn initial_velocity(&self) -> Vector2<f64> {
        let theta = self.launch_angle_rad();
        Vector2::new(
            self.initial_speed * theta.cos(),
            self.initial_speed * theta.sin(),
        )
    }

    /// Density seen by the drag model. Zero when drag is switched off.
    pub fn effective_air_density(&self) -> f64 {
        if self.include_drag {
            self.air_density
        } else {
            0.0
        }
    }

    /// Reference area seen by the drag model. Zero when drag is switched off.
    pub fn effective_area(&self) -> f64 {
        if self.include_drag {
            self.cross_sectional_area
        } else {
            0.0
        }
    }

    /// Check every input against its physical range.
    pub fn validate(&self) -> Result<(), SimError> {
        let fields = [
            ("initial_speed", self.initial_speed),
            ("launch_angle", self.launch_angle),
            ("mass", self.mass),
            ("time_step", self.time_step),
            ("drag_coefficient", self.drag_coefficient),
            ("air_density", self.air_density),
            ("cross_sectional_area", self.cross_sectional_area),
            ("gravity", self.gravity),
            ("temperature", self.temperature),
        ];
        for (name, value) in fields {
            if !value.is_finite() {
                return Err(SimError::invalid(name, value, "must be finite"));
            }
        }

        if self.initial_speed <= 0.0 {
            return Err(SimError::invalid("initial_speed", self.initial_speed, "must be > 0"));
        }
        if self.mass <= 0.0 {
            return Err(SimError::invalid("mass", self.mass, "must be > 0"));
        }
        if self.time_step <= 0.0 {
            return Err(SimError::invalid("time_step", self.time_step, "must be > 0"));
        }
        if self.drag_coefficient < 0.0 {
            return Err(SimError::invalid(
                "drag_coefficient",
                self.drag_coefficient,
                "must be >= 0",
            ));
        }
        if self.air_density < 0.0 {
            return Err(SimError::invalid("air_density", self.air_density, "must be >= 0"));
        }
        if self.cross_sectional_area < 0.0 {
            return Err(SimError::invalid(
                "cross_sectional_area",
                self.cross_sectional_area,
                "must be >= 0",
            ));
        }
        if self.gravity <= 0.0 {
            return Err(SimError::invalid("gravity", self.gravity, "must be > 0"));
        }
        if self.temperature <= 0.0 {
            return Err(SimError::invalid("temperature", self.temperature, "must be > 0 K"));
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Parameters builder
// ---------------------------------------------------------------------------

pub struct ParametersBuilder {
    params: SimulationParameters,
}

impl ParametersBuilder {
    pub fn new() -> Self {
        Self { params: SimulationParameters::default() }
    }

    pub fn initial_speed(mut self, v: f64) -> Self { self.params.initial_speed = v; self }
    pub fn launch_angle(mut self, deg: f64) -> Self { self.params.launch_angle = deg; self }
    pub fn mass(mut self, v: f64) -> Self { self.params.mass = v; self }
    pub fn time_step(mut self, v: f64) -> Self { self.params.time_step = v; self }
    pub fn drag_coefficient(mut self, v: f64) -> Self { self.params.drag_coefficient = v; self }
    pub fn include_drag(mut self, v: bool) -> Self { self.params.include_drag = v; self }
    pub fn air_density(mut self, v: f64) -> Self { self.params.air_density = v; self }
    pub fn cross_sectional_area(mut self, v: f64) -> Self { self.params.cross_sectional_area = v; self }
    pub fn gravity(mut self, v: f64) -> Self { self.params.gravity = v; self }
    pub fn temperature(mut self, v: f64) -> Self { self.params.temperature = v; self }

    /// Set the reference area from a projectile diameter (m).
    pub fn diameter(mut self, d: f64) -> Self {
        self.params.cross_sectional_area = area_from_diameter(d);
        self
    }

    pub fn build(self) -> SimulationParameters {
        self.params
    }
}

impl Default for ParametersBuilder {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Point-mass state
// ---------------------------------------------------------------------------

/// Position and velocity at one instant.
/// Frame: x downrange, y up, origin at the launch point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct State {
    pub time: f64,           // s
    pub pos: Vector2<f64>,   // m
    pub vel: Vector2<f64>,   // m/s
}

impl State {
    pub fn launch(params: &SimulationParameters) -> Self {
        State {
            time: 0.0,
            pos: Vector2::zeros(),
            vel: params.initial_velocity(),
        }
    }

    /// Forward-Euler advance by a derivative scaled by dt.
    pub fn apply(&self, d: &Deriv, dt: f64) -> State {
        State {
            time: self.time + dt,
            pos: self.pos + d.dpos * dt,
            vel: self.vel + d.dvel * dt,
        }
    }

    pub fn speed(&self) -> f64 {
        self.vel.norm()
    }

    /// Flight path angle from horizontal (rad). Negative while descending.
    pub fn path_angle(&self) -> f64 {
        self.vel.y.atan2(self.vel.x)
    }
}

// ---------------------------------------------------------------------------
// State derivative
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy)]
pub struct Deriv {
    pub dpos: Vector2<f64>, // velocity
    pub dvel: Vector2<f64>, // acceleration
}

// ---------------------------------------------------------------------------
// Step output
// ---------------------------------------------------------------------------

/// Outcome of a single integrator step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SampleResult {
    /// Airborne sample; more will follow.
    Sample(State),
    /// Ground-impact sample with `pos.y == 0.0`; emitted once.
    Impact(State),
    /// Run is over.
    Done,
}

// ---------------------------------------------------------------------------
// Simulation config
// ---------------------------------------------------------------------------

/// Batch-run limits. The integrator itself has none.
#[derive(Debug, Clone)]
pub struct SimConfig {
    pub max_time: f64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            max_time: 600.0, // 10 min
        }
    }
}
