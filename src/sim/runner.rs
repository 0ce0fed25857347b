use crate::dynamics::state::{SampleResult, SimConfig, SimulationParameters, State};
use crate::sim::error::SimError;
use crate::sim::event::{ApexDetector, EventDetector, EventKind, SimEvent};
use crate::sim::integrator::TrajectoryIntegrator;

// ---------------------------------------------------------------------------
// Batch run result
// ---------------------------------------------------------------------------

/// Full record of one batch run.
#[derive(Debug, Clone)]
pub struct Trajectory {
    /// Launch state followed by every emitted sample.
    pub samples: Vec<State>,
    pub events: Vec<SimEvent>,
    /// False when the run stopped at `max_time` before ground impact.
    pub landed: bool,
}

impl Trajectory {
    pub fn impact(&self) -> Option<&State> {
        if self.landed {
            self.samples.last()
        } else {
            None
        }
    }

    /// Horizontal distance at impact, or the farthest sample so far.
    pub fn range(&self) -> f64 {
        self.samples.last().map_or(0.0, |s| s.pos.x)
    }

    pub fn apex(&self) -> Option<&State> {
        self.samples
            .iter()
            .max_by(|a, b| a.pos.y.total_cmp(&b.pos.y))
    }

    pub fn event(&self, kind: &EventKind) -> Option<&SimEvent> {
        self.events.iter().find(|e| &e.kind == kind)
    }
}

// ---------------------------------------------------------------------------
// Full simulation
// ---------------------------------------------------------------------------

/// Run one launch to impact (or `max_time`) with custom event detectors.
pub fn simulate_with(
    params: &SimulationParameters,
    config: &SimConfig,
    detectors: &mut [&mut dyn EventDetector],
) -> Result<Trajectory, SimError> {
    let mut integrator = TrajectoryIntegrator::new(params.clone())?;
    let launch = *integrator.state();

    let capacity = (config.max_time / params.time_step) as usize + 1;
    let mut samples = Vec::with_capacity(capacity.min(100_000));
    samples.push(launch);

    let mut events = vec![SimEvent { time: 0.0, kind: EventKind::Launch, state: launch }];
    let mut landed = false;

    while integrator.state().time < config.max_time {
        let result = integrator.next_sample()?;
        let current = match result {
            SampleResult::Sample(s) | SampleResult::Impact(s) => s,
            SampleResult::Done => break,
        };
        let prev = samples[samples.len() - 1];

        for det in detectors.iter_mut() {
            if let Some(kind) = det.check(&prev, &current) {
                events.push(SimEvent { time: current.time, kind, state: current });
            }
        }
        samples.push(current);

        if let SampleResult::Impact(s) = result {
            events.push(SimEvent { time: s.time, kind: EventKind::Impact, state: s });
            landed = true;
            break;
        }
    }

    if !landed {
        eprintln!(
            "Warning: run stopped at max_time={} s before ground impact ({} samples)",
            config.max_time,
            samples.len()
        );
    }

    Ok(Trajectory { samples, events, landed })
}

/// Run with the default apex detector (convenience wrapper).
pub fn simulate(params: &SimulationParameters, config: &SimConfig) -> Result<Trajectory, SimError> {
    let mut apex = ApexDetector::default();
    let mut detectors: [&mut dyn EventDetector; 1] = [&mut apex];
    simulate_with(params, config, &mut detectors)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dynamics::state::ParametersBuilder;
    use crate::sim::event::AltitudeDetector;

    fn lob() -> SimulationParameters {
        ParametersBuilder::new()
            .initial_speed(40.0)
            .launch_angle(60.0)
            .time_step(0.01)
            .build()
    }

    #[test]
    fn trajectory_starts_at_origin_and_lands() {
        let traj = simulate(&lob(), &SimConfig::default()).unwrap();
        assert!(traj.landed);
        assert_eq!(traj.samples[0].pos.norm(), 0.0);
        assert_eq!(traj.impact().unwrap().pos.y, 0.0);
        assert!(traj.range() > 0.0);
    }

    #[test]
    fn events_in_flight_order() {
        let traj = simulate(&lob(), &SimConfig::default()).unwrap();
        let kinds: Vec<&EventKind> = traj.events.iter().map(|e| &e.kind).collect();
        assert_eq!(kinds, vec![&EventKind::Launch, &EventKind::Apex, &EventKind::Impact]);

        let apex_event = traj.event(&EventKind::Apex).unwrap();
        let apex = traj.apex().unwrap();
        // Detected within one step of the highest sample
        assert!((apex_event.time - apex.time).abs() <= 0.01 + 1e-9);
    }

    #[test]
    fn custom_detectors_run() {
        let mut apex = ApexDetector::default();
        let mut up = AltitudeDetector::new(20.0, true);
        let mut down = AltitudeDetector::new(20.0, false);
        let mut detectors: [&mut dyn EventDetector; 3] = [&mut apex, &mut up, &mut down];
        let traj = simulate_with(&lob(), &SimConfig::default(), &mut detectors).unwrap();
        let custom = traj
            .events
            .iter()
            .filter(|e| matches!(e.kind, EventKind::Custom(_)))
            .count();
        assert_eq!(custom, 2);
    }

    #[test]
    fn max_time_caps_the_run() {
        let config = SimConfig { max_time: 1.0 };
        let traj = simulate(&lob(), &config).unwrap();
        assert!(!traj.landed);
        assert!(traj.impact().is_none());
        assert!(traj.samples.last().unwrap().time >= 1.0 - 1e-9);
        assert!(traj.samples.len() <= 102);
    }

    #[test]
    fn invalid_parameters_surface_immediately() {
        let p = ParametersBuilder::new().mass(0.0).build();
        assert!(matches!(
            simulate(&p, &SimConfig::default()),
            Err(SimError::InvalidParameter { .. })
        ));
    }
}
