use std::io::{self, Write};

use serde::Serialize;

use crate::dynamics::state::SimulationParameters;
use crate::physics::atmosphere;
use crate::sim::runner::Trajectory;

/// Summary statistics computed from a flight trajectory.
#[derive(Debug, Clone, Serialize)]
pub struct FlightSummary {
    pub range_m: f64,
    pub apex_m: f64,
    pub apex_time_s: f64,
    pub flight_time_s: f64,
    pub max_speed_ms: f64,
    pub impact_speed_ms: f64,
    pub impact_angle_deg: f64,
    pub launch_reynolds: f64,
    pub samples: usize,
    pub landed: bool,
}

impl FlightSummary {
    /// Compute summary from a batch run.
    pub fn from_trajectory(trajectory: &Trajectory, params: &SimulationParameters) -> Self {
        let samples = &trajectory.samples;
        let (apex_m, apex_time_s) = trajectory
            .apex()
            .map_or((0.0, 0.0), |s| (s.pos.y, s.time));

        let max_speed_ms = samples
            .iter()
            .map(|s| s.speed())
            .fold(0.0_f64, f64::max);

        let (flight_time_s, impact_speed_ms, impact_angle_deg) = samples
            .last()
            .map_or((0.0, 0.0, 0.0), |s| (s.time, s.speed(), -s.path_angle().to_degrees()));

        let launch_reynolds = atmosphere::reynolds_number(
            params.effective_air_density(),
            params.initial_speed,
            atmosphere::equivalent_diameter(params.cross_sectional_area),
            params.temperature,
        );

        FlightSummary {
            range_m: trajectory.range(),
            apex_m,
            apex_time_s,
            flight_time_s,
            max_speed_ms,
            impact_speed_ms,
            impact_angle_deg,
            launch_reynolds,
            samples: samples.len(),
            landed: trajectory.landed,
        }
    }
}

#[derive(Serialize)]
struct SummaryDocument<'a> {
    parameters: &'a SimulationParameters,
    performance: &'a FlightSummary,
}

/// Write launch parameters and flight summary as JSON to a writer.
pub fn write_summary<W: Write>(
    writer: &mut W,
    params: &SimulationParameters,
    summary: &FlightSummary,
) -> io::Result<()> {
    let doc = SummaryDocument { parameters: params, performance: summary };
    serde_json::to_writer_pretty(&mut *writer, &doc)?;
    writeln!(writer)?;
    Ok(())
}

/// Write flight summary JSON to a file.
pub fn write_summary_file(
    path: &str,
    params: &SimulationParameters,
    summary: &FlightSummary,
) -> io::Result<()> {
    let mut file = io::BufWriter::new(std::fs::File::create(path)?);
    write_summary(&mut file, params, summary)?;
    file.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dynamics::state::{ParametersBuilder, SimConfig};
    use crate::sim;

    fn vacuum_run() -> (SimulationParameters, Trajectory) {
        let params = ParametersBuilder::new()
            .initial_speed(60.0)
            .launch_angle(20.0)
            .include_drag(false)
            .build();
        let traj = sim::simulate(&params, &SimConfig::default()).unwrap();
        (params, traj)
    }

    #[test]
    fn summary_matches_vacuum_arc() {
        let (params, traj) = vacuum_run();
        let s = FlightSummary::from_trajectory(&traj, &params);
        assert!(s.landed);
        assert!((s.range_m - 238.0).abs() / 238.0 < 0.01);
        // (60 sin 20)^2 / 2g = 21.5 m
        assert!((s.apex_m - 21.5).abs() < 0.5, "apex {}", s.apex_m);
        // Symmetric arc: lands at roughly the launch angle and speed
        assert!((s.impact_angle_deg - 20.0).abs() < 0.5);
        assert!((s.impact_speed_ms - 60.0).abs() < 0.5);
        // No air, no Reynolds number
        assert_eq!(s.launch_reynolds, 0.0);
    }

    #[test]
    fn json_output_is_valid() {
        let (params, traj) = vacuum_run();
        let summary = FlightSummary::from_trajectory(&traj, &params);

        let mut buf = Vec::new();
        write_summary(&mut buf, &params, &summary).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(value["parameters"]["initial_speed"], 60.0);
        assert!(value["performance"]["range_m"].as_f64().unwrap() > 230.0);
        assert_eq!(value["performance"]["landed"], true);
    }
}
