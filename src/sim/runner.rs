use crate::dynamics::state::{SimConfig, Snapshot};
use crate::error::{SimError, SimResult};
use crate::gnc::{ControlPolicy, SimpleAutopilot};
use crate::vehicle::{Lander, ThrustOutcome};
use super::event::{EventDetector, EventKind, FuelDepletionDetector, SimEvent, TouchdownDetector};
use super::landing::Landing;

// ---------------------------------------------------------------------------
// Descent phases
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Descending,
    /// Terminal: altitude reached zero. No further state changes.
    Landed,
}

// ---------------------------------------------------------------------------
// Completed run
// ---------------------------------------------------------------------------

/// Everything a completed descent produced.
#[derive(Debug, Clone)]
pub struct DescentRun {
    pub lander: Lander,
    pub snapshots: Vec<Snapshot>,
    pub events: Vec<SimEvent>,
    pub steps: u64,
}

impl DescentRun {
    pub fn no_fuel_events(&self) -> impl Iterator<Item = &SimEvent> {
        self.events.iter().filter(|e| e.kind == EventKind::NoFuel)
    }

    pub fn landing(&self) -> Landing {
        Landing::classify(self.lander.vertical_velocity())
    }

    pub fn touchdown_velocity(&self) -> f64 {
        self.lander.vertical_velocity()
    }
}

// ---------------------------------------------------------------------------
// Descent controller
// ---------------------------------------------------------------------------

/// Fixed-step descent loop driving one lander with one policy.
pub struct DescentController<'p> {
    lander: Lander,
    config: SimConfig,
    policy: &'p mut dyn ControlPolicy,
    detectors: Vec<Box<dyn EventDetector>>,
    phase: Phase,
    snapshots: Vec<Snapshot>,
    events: Vec<SimEvent>,
    steps: u64,
}

impl<'p> DescentController<'p> {
    pub fn new(
        lander: Lander,
        config: SimConfig,
        policy: &'p mut dyn ControlPolicy,
    ) -> SimResult<Self> {
        config.validate()?;
        policy.reset();

        let cap = (config.max_steps as usize).min(10_000);
        Ok(Self {
            lander,
            config,
            policy,
            detectors: vec![Box::new(FuelDepletionDetector), Box::new(TouchdownDetector)],
            phase: Phase::Descending,
            snapshots: Vec::with_capacity(cap),
            events: Vec::new(),
            steps: 0,
        })
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn lander(&self) -> &Lander {
        &self.lander
    }

    pub fn steps(&self) -> u64 {
        self.steps
    }

    /// Advance one timestep: policy, engine, physics, snapshot.
    ///
    /// With a dry tank the engine is still called whenever the policy
    /// demands thrust, so each unanswered demand is reported as a no-fuel
    /// event.
    pub fn step(&mut self) -> SimResult<Phase> {
        if self.phase == Phase::Landed {
            return Ok(Phase::Landed);
        }
        if self.steps >= self.config.max_steps {
            log::warn!(
                "{} did not reach the surface within {} steps",
                self.policy.name(),
                self.config.max_steps
            );
            return Err(SimError::DidNotTerminate {
                steps: self.steps,
                altitude: self.lander.altitude(),
                velocity: self.lander.vertical_velocity(),
            });
        }

        let dt = self.config.dt;
        let prev = self.lander.snapshot();

        let fire = self.policy.decide(&self.lander);
        let dry_demand = !self.lander.has_fuel() && self.policy.demands_thrust(&self.lander);
        if fire || dry_demand {
            if let ThrustOutcome::NoFuel { time } = self.lander.apply_thrust(dt)? {
                self.events.push(SimEvent { time, kind: EventKind::NoFuel });
            }
        }

        self.lander.integrate(dt, self.config.gravity)?;
        self.steps += 1;

        let snap = self.lander.snapshot();
        log::trace!("{}", snap);
        self.snapshots.push(snap);

        for det in self.detectors.iter_mut() {
            if let Some(kind) = det.check(&prev, &snap) {
                self.events.push(SimEvent { time: snap.time, kind });
            }
        }

        if self.lander.altitude() <= 0.0 {
            log::info!(
                "Touchdown after {} steps at t={:.1}s, vel={:.2} m/s, fuel={:.1} kg",
                self.steps,
                snap.time,
                snap.velocity,
                snap.fuel
            );
            self.phase = Phase::Landed;
        }

        Ok(self.phase)
    }

    /// Step until landed. Any error abandons the run.
    pub fn run(mut self) -> SimResult<DescentRun> {
        log::debug!(
            "Starting descent with {}: alt={:.1} m, vel={:.2} m/s, mass={:.1} kg, dt={} s",
            self.policy.name(),
            self.lander.altitude(),
            self.lander.vertical_velocity(),
            self.lander.current_mass(),
            self.config.dt
        );

        while self.step()? == Phase::Descending {}

        Ok(DescentRun {
            lander: self.lander,
            snapshots: self.snapshots,
            events: self.events,
            steps: self.steps,
        })
    }
}

// ---------------------------------------------------------------------------
// Convenience entry points
// ---------------------------------------------------------------------------

/// Simulate a complete descent with a custom policy.
pub fn simulate_with(
    lander: Lander,
    config: &SimConfig,
    policy: &mut dyn ControlPolicy,
) -> SimResult<DescentRun> {
    DescentController::new(lander, *config, policy)?.run()
}

/// Simulate with the default SimpleAutopilot (convenience wrapper).
pub fn simulate(lander: Lander, config: &SimConfig) -> SimResult<DescentRun> {
    let mut autopilot = SimpleAutopilot::new();
    simulate_with(lander, config, &mut autopilot)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
