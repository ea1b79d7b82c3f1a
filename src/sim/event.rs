use std::fmt;

use serde::Serialize;

use crate::dynamics::state::Snapshot;

// ---------------------------------------------------------------------------
// Simulation events
// ---------------------------------------------------------------------------

/// Kinds of simulation events.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EventKind {
    /// Engine was called with an empty tank.
    NoFuel,
    /// Last of the fuel burned during this step.
    FuelExhausted,
    /// Altitude reached or crossed zero.
    Touchdown { velocity: f64 },
}

/// A discrete event that occurred during simulation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SimEvent {
    pub time: f64,
    #[serde(flatten)]
    pub kind: EventKind,
}

impl fmt::Display for SimEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            EventKind::NoFuel => write!(f, "No fuel at t={:.2}s", self.time),
            EventKind::FuelExhausted => write!(f, "Fuel exhausted at t={:.2}s", self.time),
            EventKind::Touchdown { velocity } => {
                write!(f, "Touchdown at t={:.2}s (vel={:.2} m/s)", self.time, velocity)
            }
        }
    }
}

/// Trait for passive event detectors.
/// Implementations inspect consecutive snapshots and report events.
pub trait EventDetector {
    fn check(&mut self, prev: &Snapshot, current: &Snapshot) -> Option<EventKind>;
}

/// Detects the step in which altitude goes from above ground to at/below it.
pub struct TouchdownDetector;

impl EventDetector for TouchdownDetector {
    fn check(&mut self, prev: &Snapshot, current: &Snapshot) -> Option<EventKind> {
        if prev.altitude > 0.0 && current.altitude <= 0.0 {
            Some(EventKind::Touchdown { velocity: current.velocity })
        } else {
            None
        }
    }
}

/// Detects the step in which the tank runs dry.
pub struct FuelDepletionDetector;

impl EventDetector for FuelDepletionDetector {
    fn check(&mut self, prev: &Snapshot, current: &Snapshot) -> Option<EventKind> {
        if prev.fuel > 0.0 && current.fuel <= 0.0 {
            Some(EventKind::FuelExhausted)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snap(altitude: f64, velocity: f64, fuel: f64) -> Snapshot {
        Snapshot { time: 0.0, altitude, velocity, fuel }
    }

    #[test]
    fn touchdown_detected() {
        let mut det = TouchdownDetector;
        let prev = snap(0.4, -4.0, 10.0);
        let curr = snap(-0.01, -4.1, 10.0);
        assert_eq!(det.check(&prev, &curr), Some(EventKind::Touchdown { velocity: -4.1 }));
        assert_eq!(det.check(&prev, &prev), None);
    }

    #[test]
    fn touchdown_at_exactly_zero() {
        let mut det = TouchdownDetector;
        assert!(det.check(&snap(1.0, -5.0, 0.0), &snap(0.0, -5.0, 0.0)).is_some());
    }

    #[test]
    fn fuel_depletion_fires_once_per_transition() {
        let mut det = FuelDepletionDetector;
        assert_eq!(
            det.check(&snap(100.0, -5.0, 0.2), &snap(99.0, -5.0, 0.0)),
            Some(EventKind::FuelExhausted)
        );
        assert_eq!(det.check(&snap(99.0, -5.0, 0.0), &snap(98.0, -5.0, 0.0)), None);
    }

    #[test]
    fn no_fuel_line_format() {
        let ev = SimEvent { time: 160.1, kind: EventKind::NoFuel };
        assert_eq!(ev.to_string(), "No fuel at t=160.10s");
    }
}
