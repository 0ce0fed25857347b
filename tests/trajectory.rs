//! End-to-end checks of the integrator contract through the public API.

use projectile_sim::physics::gravity;
use projectile_sim::sim::{self, TrajectoryIntegrator};
use projectile_sim::{ParametersBuilder, SampleResult, SimConfig, SimError, SimulationParameters, State};

fn reference_launch(include_drag: bool) -> SimulationParameters {
    ParametersBuilder::new()
        .initial_speed(60.0)
        .launch_angle(20.0)
        .mass(1.0)
        .time_step(0.01)
        .drag_coefficient(0.47)
        .include_drag(include_drag)
        .build()
}

/// Drive the integrator the way a UI timer would: one call per tick.
fn drive(params: SimulationParameters) -> (Vec<State>, usize) {
    let mut integrator = TrajectoryIntegrator::new(params).expect("valid parameters");
    let mut samples = Vec::new();
    let mut impacts = 0;
    loop {
        match integrator.next_sample().expect("no degenerate state") {
            SampleResult::Sample(s) => samples.push(s),
            SampleResult::Impact(s) => {
                impacts += 1;
                samples.push(s);
            }
            SampleResult::Done => break,
        }
    }
    (samples, impacts)
}

#[test]
fn reference_scenario_range() {
    let (samples, impacts) = drive(reference_launch(false));
    assert_eq!(impacts, 1);

    let last = samples.last().unwrap();
    assert_eq!(last.pos.y, 0.0);

    let closed_form = gravity::vacuum_range(60.0, 20f64.to_radians(), 9.81);
    assert!((last.pos.x - 238.0).abs() / 238.0 < 0.01, "range {}", last.pos.x);
    assert!((last.pos.x - closed_form).abs() / closed_form < 0.01);
}

#[test]
fn every_sample_is_above_ground_and_ordered_in_time() {
    for include_drag in [false, true] {
        let (samples, _) = drive(reference_launch(include_drag));
        assert!(samples.iter().all(|s| s.pos.y >= 0.0));
        assert!(samples.windows(2).all(|w| w[1].time > w[0].time));
        // Only the final sample touches the ground
        assert!(samples[..samples.len() - 1].iter().all(|s| s.pos.y > 0.0));
    }
}

#[test]
fn drag_reduces_range() {
    let (vacuum, _) = drive(reference_launch(false));
    let (air, _) = drive(reference_launch(true));
    assert!(air.last().unwrap().pos.x < vacuum.last().unwrap().pos.x);
}

#[test]
fn coarse_steps_still_land_exactly_on_ground() {
    for dt in [1.0, 0.37, 0.1] {
        let params = ParametersBuilder::new().time_step(dt).build();
        let (samples, impacts) = drive(params);
        assert_eq!(impacts, 1);
        assert_eq!(samples.last().unwrap().pos.y, 0.0);
    }
}

#[test]
fn invalid_construction_returns_no_instance() {
    let cases = [
        ParametersBuilder::new().mass(0.0).build(),
        ParametersBuilder::new().time_step(-1.0).build(),
        ParametersBuilder::new().initial_speed(-5.0).build(),
        ParametersBuilder::new().drag_coefficient(-0.47).build(),
    ];
    for params in cases {
        match TrajectoryIntegrator::new(params) {
            Err(SimError::InvalidParameter { .. }) => {}
            other => panic!("expected InvalidParameter, got {:?}", other),
        }
    }
}

#[test]
fn independent_runs_share_nothing() {
    let mut a = TrajectoryIntegrator::new(reference_launch(false)).unwrap();
    let mut b = TrajectoryIntegrator::new(reference_launch(false)).unwrap();

    // Interleave: advance `a` twice as often as `b`
    for _ in 0..10 {
        a.next_sample().unwrap();
        a.next_sample().unwrap();
        b.next_sample().unwrap();
    }
    assert_eq!(a.steps(), 20);
    assert_eq!(b.steps(), 10);

    let rest_a: Vec<State> = a.map(Result::unwrap).collect();
    let rest_b: Vec<State> = b.map(Result::unwrap).collect();
    assert_eq!(rest_a.last(), rest_b.last());
}

#[test]
fn runs_on_separate_threads() {
    let handles: Vec<_> = [15.0, 45.0, 75.0]
        .into_iter()
        .map(|angle| {
            let params = ParametersBuilder::new().launch_angle(angle).build();
            std::thread::spawn(move || sim::simulate(&params, &SimConfig::default()).unwrap().range())
        })
        .collect();
    let ranges: Vec<f64> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert!(ranges.iter().all(|r| *r > 0.0));
}

#[test]
fn batch_runner_agrees_with_manual_driving() {
    let params = reference_launch(true);
    let (manual, _) = drive(params.clone());
    let batch = sim::simulate(&params, &SimConfig::default()).unwrap();
    // Batch run also records the launch state
    assert_eq!(batch.samples.len(), manual.len() + 1);
    assert_eq!(batch.samples.last(), manual.last());
}
