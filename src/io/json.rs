use std::io::Write;

use serde::Serialize;

use crate::dynamics::state::Snapshot;
use crate::sim::{DescentRun, Landing, SimEvent};

/// Propulsion parameters the run started with.
#[derive(Debug, Clone, Serialize)]
pub struct LanderParams {
    pub dry_mass_kg: f64,
    pub initial_fuel_kg: f64,
    pub thrust_n: f64,
    pub burn_rate_kgs: f64,
}

/// Summary statistics computed from a completed descent.
#[derive(Debug, Clone, Serialize)]
pub struct DescentSummary {
    pub steps: u64,
    pub flight_time_s: f64,
    pub touchdown_velocity_ms: f64,
    pub fuel_remaining_kg: f64,
    pub fuel_used_kg: f64,
    pub max_descent_rate_ms: f64,
    pub no_fuel_events: usize,
    pub landing: Landing,
}

impl DescentSummary {
    pub fn from_run(run: &DescentRun, initial_fuel: f64) -> Self {
        let max_descent_rate = run
            .snapshots
            .iter()
            .map(|s| -s.velocity)
            .fold(0.0_f64, f64::max);

        DescentSummary {
            steps: run.steps,
            flight_time_s: run.lander.elapsed_time(),
            touchdown_velocity_ms: run.touchdown_velocity(),
            fuel_remaining_kg: run.lander.fuel_mass(),
            fuel_used_kg: initial_fuel - run.lander.fuel_mass(),
            max_descent_rate_ms: max_descent_rate,
            no_fuel_events: run.no_fuel_events().count(),
            landing: run.landing(),
        }
    }
}

/// Full machine-readable report of one descent.
#[derive(Debug, Clone, Serialize)]
pub struct DescentReport<'a> {
    pub lander: LanderParams,
    pub summary: DescentSummary,
    pub events: &'a [SimEvent],
    pub snapshots: &'a [Snapshot],
}

impl<'a> DescentReport<'a> {
    /// `initial_fuel` is the tank load before the first step.
    pub fn new(run: &'a DescentRun, initial_fuel: f64) -> Self {
        DescentReport {
            lander: LanderParams {
                dry_mass_kg: run.lander.dry_mass(),
                initial_fuel_kg: initial_fuel,
                thrust_n: run.lander.thrust_force(),
                burn_rate_kgs: run.lander.burn_rate(),
            },
            summary: DescentSummary::from_run(run, initial_fuel),
            events: &run.events,
            snapshots: &run.snapshots,
        }
    }

    pub fn write<W: Write>(&self, writer: W) -> serde_json::Result<()> {
        serde_json::to_writer_pretty(writer, self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dynamics::state::SimConfig;
    use crate::sim::simulate;
    use crate::vehicle::LanderBuilder;
    use pretty_assertions::assert_eq;

    #[test]
    fn summary_tracks_fuel_and_outcome() {
        let lander = LanderBuilder::new().altitude(200.0).build().unwrap();
        let run = simulate(lander, &SimConfig::default()).unwrap();
        let s = DescentSummary::from_run(&run, 800.0);

        assert_eq!(s.steps, run.steps);
        assert_eq!(s.fuel_remaining_kg + s.fuel_used_kg, 800.0);
        assert!(s.fuel_used_kg > 0.0);
        assert!(s.max_descent_rate_ms >= s.touchdown_velocity_ms.abs());
        assert_eq!(s.landing, run.landing());
    }

    #[test]
    fn json_output_is_valid() {
        let lander = LanderBuilder::new().altitude(50.0).fuel_mass(0.0).build().unwrap();
        let run = simulate(lander, &SimConfig::default()).unwrap();

        let mut buf = Vec::new();
        DescentReport::new(&run, 0.0).write(&mut buf).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();

        assert_eq!(value["summary"]["landing"], "crash");
        assert_eq!(value["summary"]["steps"], run.steps);
        assert_eq!(value["snapshots"].as_array().unwrap().len() as u64, run.steps);
        assert_eq!(value["events"][0]["kind"], "no_fuel");
        assert_eq!(value["lander"]["thrust_n"], 4500.0);
    }
}
