use std::iter::FusedIterator;

use nalgebra::Vector2;

use crate::dynamics;
use crate::dynamics::state::{SampleResult, SimulationParameters, State};
use crate::sim::error::SimError;

// ---------------------------------------------------------------------------
// Explicit Euler step
// ---------------------------------------------------------------------------

/// Single forward-Euler step: position advances with the current velocity,
/// then velocity advances with the acceleration evaluated at the current
/// velocity.
pub fn euler_step(state: &State, params: &SimulationParameters, dt: f64) -> State {
    let d = dynamics::derivatives(state, params);
    state.apply(&d, dt)
}

// ---------------------------------------------------------------------------
// Steppable trajectory integrator
// ---------------------------------------------------------------------------

/// One launch, advanced one fixed step per call until ground impact.
///
/// The integrator is single use: after the impact sample every call returns
/// [`SampleResult::Done`]. Start a new run by constructing a new instance.
///
/// ```
/// use projectile_sim::dynamics::state::{ParametersBuilder, SampleResult};
/// use projectile_sim::sim::TrajectoryIntegrator;
///
/// let params = ParametersBuilder::new().include_drag(false).build();
/// let mut integrator = TrajectoryIntegrator::new(params).unwrap();
/// loop {
///     match integrator.next_sample().unwrap() {
///         SampleResult::Sample(_) => continue,
///         SampleResult::Impact(s) => assert_eq!(s.pos.y, 0.0),
///         SampleResult::Done => break,
///     }
/// }
/// ```
#[derive(Debug, Clone)]
pub struct TrajectoryIntegrator {
    params: SimulationParameters,
    state: State,
    step: usize,
    terminated: bool,
}

impl TrajectoryIntegrator {
    /// Validate parameters and place the projectile at the origin with its
    /// launch velocity.
    pub fn new(params: SimulationParameters) -> Result<Self, SimError> {
        params.validate()?;
        let state = State::launch(&params);
        Ok(Self {
            params,
            state,
            step: 0,
            terminated: false,
        })
    }

    pub fn params(&self) -> &SimulationParameters {
        &self.params
    }

    /// Latest state: the launch state before the first step, afterwards the
    /// last emitted sample.
    pub fn state(&self) -> &State {
        &self.state
    }

    /// Number of samples emitted so far.
    pub fn steps(&self) -> usize {
        self.step
    }

    pub fn is_terminated(&self) -> bool {
        self.terminated
    }

    /// Advance one step and return the new sample.
    ///
    /// A step that would end below ground is cut short at the crossing:
    /// the crossing time is `-y / vy` into the step, `x` advances by that
    /// fraction and `y` is set to exactly zero.
    pub fn next_sample(&mut self) -> Result<SampleResult, SimError> {
        if self.terminated {
            return Ok(SampleResult::Done);
        }

        let dt = self.params.time_step;
        let current = self.state;
        let next_y = current.pos.y + current.vel.y * dt;

        if next_y < 0.0 {
            // Whatever happens below, this run is over.
            self.terminated = true;

            let (y, vy) = (current.pos.y, current.vel.y);
            if vy >= 0.0 {
                return Err(SimError::DegenerateState {
                    step: self.step,
                    y,
                    vy,
                });
            }

            let t = -y / vy;
            let impact = State {
                time: self.step as f64 * dt + t,
                pos: Vector2::new(current.pos.x + current.vel.x * t, 0.0),
                vel: current.vel,
            };
            self.state = impact;
            self.step += 1;
            return Ok(SampleResult::Impact(impact));
        }

        let mut next = euler_step(&current, &self.params, dt);
        self.step += 1;
        // i * dt rather than an accumulated sum
        next.time = self.step as f64 * dt;
        self.state = next;
        Ok(SampleResult::Sample(next))
    }
}

impl Iterator for TrajectoryIntegrator {
    type Item = Result<State, SimError>;

    /// Yields every sample including the impact sample, then `None`.
    /// A degenerate state is yielded once as `Err`.
    fn next(&mut self) -> Option<Self::Item> {
        match self.next_sample() {
            Ok(SampleResult::Sample(s)) | Ok(SampleResult::Impact(s)) => Some(Ok(s)),
            Ok(SampleResult::Done) => None,
            Err(e) => Some(Err(e)),
        }
    }
}

impl FusedIterator for TrajectoryIntegrator {}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
