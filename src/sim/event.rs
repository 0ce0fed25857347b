use crate::dynamics::state::State;

// ---------------------------------------------------------------------------
// Simulation events
// ---------------------------------------------------------------------------

/// Kinds of simulation events.
#[derive(Debug, Clone, PartialEq)]
pub enum EventKind {
    Launch,
    Apex,
    Impact,
    Custom(String),
}

/// A discrete event that occurred during simulation.
#[derive(Debug, Clone)]
pub struct SimEvent {
    pub time: f64,
    pub kind: EventKind,
    pub state: State,
}

/// Trait for passive event detectors.
/// Implementations inspect consecutive samples and report events.
pub trait EventDetector {
    fn check(&mut self, prev: &State, current: &State) -> Option<EventKind>;
}

/// Detects the top of the arc (vertical velocity turning non-positive).
#[derive(Default)]
pub struct ApexDetector {
    fired: bool,
}

impl EventDetector for ApexDetector {
    fn check(&mut self, prev: &State, current: &State) -> Option<EventKind> {
        if self.fired {
            return None;
        }
        if prev.vel.y > 0.0 && current.vel.y <= 0.0 {
            self.fired = true;
            Some(EventKind::Apex)
        } else {
            None
        }
    }
}

/// Detects when height crosses a threshold (ascending or descending).
pub struct AltitudeDetector {
    pub altitude: f64,
    pub ascending: bool,
    fired: bool,
}

impl AltitudeDetector {
    pub fn new(altitude: f64, ascending: bool) -> Self {
        Self { altitude, ascending, fired: false }
    }
}

impl EventDetector for AltitudeDetector {
    fn check(&mut self, prev: &State, current: &State) -> Option<EventKind> {
        if self.fired {
            return None;
        }
        let crossed = if self.ascending {
            prev.pos.y < self.altitude && current.pos.y >= self.altitude
        } else {
            prev.pos.y > self.altitude && current.pos.y <= self.altitude
        };
        if crossed {
            self.fired = true;
            Some(EventKind::Custom(format!(
                "Height {:.1}m ({})",
                self.altitude,
                if self.ascending { "ascending" } else { "descending" }
            )))
        } else {
            None
        }
    }
}

/// Detects when the projectile passes a downrange distance.
pub struct DownrangeDetector {
    pub distance: f64,
    fired: bool,
}

impl DownrangeDetector {
    pub fn new(distance: f64) -> Self {
        Self { distance, fired: false }
    }
}

impl EventDetector for DownrangeDetector {
    fn check(&mut self, prev: &State, current: &State) -> Option<EventKind> {
        if !self.fired && prev.pos.x < self.distance && current.pos.x >= self.distance {
            self.fired = true;
            Some(EventKind::Custom(format!("Downrange {:.1}m", self.distance)))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Vector2;

    fn make_state(x: f64, y: f64, vy: f64) -> State {
        State {
            time: 0.0,
            pos: Vector2::new(x, y),
            vel: Vector2::new(10.0, vy),
        }
    }

    #[test]
    fn apex_detected_once() {
        let mut det = ApexDetector::default();
        let prev = make_state(0.0, 50.0, 0.5);
        let curr = make_state(1.0, 50.01, -0.1);
        assert_eq!(det.check(&prev, &curr), Some(EventKind::Apex));
        assert!(det.check(&prev, &curr).is_none());
    }

    #[test]
    fn altitude_detector_descending() {
        let mut det = AltitudeDetector::new(10.0, false);
        let prev = make_state(0.0, 12.0, -5.0);
        let curr = make_state(1.0, 9.0, -5.5);
        assert!(det.check(&prev, &curr).is_some());
        // Should not fire again
        assert!(det.check(&prev, &curr).is_none());
    }

    #[test]
    fn downrange_detector_fires_on_crossing() {
        let mut det = DownrangeDetector::new(100.0);
        assert!(det.check(&make_state(90.0, 5.0, 1.0), &make_state(99.0, 5.0, 1.0)).is_none());
        assert!(det.check(&make_state(99.0, 5.0, 1.0), &make_state(101.0, 5.0, 1.0)).is_some());
    }
}
