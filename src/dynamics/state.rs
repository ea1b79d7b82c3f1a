use std::fmt;

use serde::Serialize;

use crate::error::{SimError, SimResult};

// ---------------------------------------------------------------------------
// Physical constants
// ---------------------------------------------------------------------------

pub const LUNAR_GRAVITY: f64 = 1.625; // m/s^2, lunar surface
pub const TIME_STEP: f64 = 0.1; // s per simulation tick

/// Steps allowed before a run is declared non-terminating.
pub const DEFAULT_MAX_STEPS: u64 = 1_000_000;

// ---------------------------------------------------------------------------
// Snapshot: read-only view of the lander at one tick
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Snapshot {
    pub time: f64,     // s
    pub altitude: f64, // m
    pub velocity: f64, // m/s, negative = descending
    pub fuel: f64,     // kg
}

impl fmt::Display for Snapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "T={:.1}s | Alt={:.1}m | Vel={:.2} m/s | Fuel={:.1} kg",
            self.time, self.altitude, self.velocity, self.fuel
        )
    }
}

// ---------------------------------------------------------------------------
// Initial conditions
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InitialConditions {
    pub altitude: f64,         // m
    pub velocity: f64,         // m/s
    pub thrust_angle_deg: f64, // deg from horizontal (90 = straight up)
}

impl Default for InitialConditions {
    fn default() -> Self {
        Self {
            altitude: 1500.0,
            velocity: -10.0,
            thrust_angle_deg: 90.0,
        }
    }
}

// ---------------------------------------------------------------------------
// Simulation config
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimConfig {
    pub dt: f64,        // fixed integration timestep, s
    pub gravity: f64,   // surface gravity, m/s^2 (positive, acts downward)
    pub max_steps: u64, // safety bound on loop iterations
}

impl SimConfig {
    pub fn validate(&self) -> SimResult<()> {
        crate::error::check_dt(self.dt)?;
        if !self.gravity.is_finite() || self.gravity < 0.0 {
            return Err(SimError::InvalidConfig {
                name: "gravity",
                value: self.gravity,
                reason: "must be finite and >= 0",
            });
        }
        if self.max_steps == 0 {
            return Err(SimError::InvalidConfig {
                name: "max_steps",
                value: 0.0,
                reason: "must allow at least one step",
            });
        }
        Ok(())
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            dt: TIME_STEP,
            gravity: LUNAR_GRAVITY,
            max_steps: DEFAULT_MAX_STEPS,
        }
    }
}
