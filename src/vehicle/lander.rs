use nalgebra::{Unit, Vector2};

use crate::dynamics::state::{InitialConditions, Snapshot};
use crate::error::{check_dt, SimError, SimResult};
use crate::sim::integrator::semi_implicit_euler;

// ---------------------------------------------------------------------------
// Lander: propulsion + vertical kinematic state of one craft
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct Lander {
    dry_mass: f64,          // kg, structure
    fuel_mass: f64,         // kg, never negative
    thrust_force: f64,      // N, full throttle
    burn_rate: f64,         // kg/s while firing
    altitude: f64,          // m
    vertical_velocity: f64, // m/s, negative = descending
    thrust_angle_deg: f64,  // deg from horizontal
    elapsed_time: f64,      // s

    // Elapsed time is rebuilt from a step count so that a fixed dt gives
    // exactly n*dt after n steps. `epoch` absorbs any earlier dt changes.
    epoch: f64,
    step_dt: f64,
    steps: u64,
}

/// Result of one call to [`Lander::apply_thrust`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ThrustOutcome {
    /// Engine fired: fuel consumed and vertical velocity gained.
    Fired { fuel_used: f64, delta_v: f64 },
    /// Tank was empty at `time`; nothing changed.
    NoFuel { time: f64 },
}

impl Lander {
    /// Lander with the given propulsion parameters and default initial conditions.
    pub fn new(dry_mass: f64, fuel_mass: f64, thrust_force: f64, burn_rate: f64) -> SimResult<Self> {
        LanderBuilder::new()
            .dry_mass(dry_mass)
            .fuel_mass(fuel_mass)
            .thrust(thrust_force)
            .burn_rate(burn_rate)
            .build()
    }

    pub fn dry_mass(&self) -> f64 {
        self.dry_mass
    }

    pub fn fuel_mass(&self) -> f64 {
        self.fuel_mass
    }

    pub fn thrust_force(&self) -> f64 {
        self.thrust_force
    }

    pub fn burn_rate(&self) -> f64 {
        self.burn_rate
    }

    pub fn altitude(&self) -> f64 {
        self.altitude
    }

    pub fn vertical_velocity(&self) -> f64 {
        self.vertical_velocity
    }

    pub fn thrust_angle_deg(&self) -> f64 {
        self.thrust_angle_deg
    }

    pub fn elapsed_time(&self) -> f64 {
        self.elapsed_time
    }

    pub fn has_fuel(&self) -> bool {
        self.fuel_mass > 0.0
    }

    /// Wet mass right now: dry + remaining fuel.
    pub fn current_mass(&self) -> f64 {
        self.dry_mass + self.fuel_mass
    }

    /// Unit thrust direction in the vertical plane, `[horizontal, up]`.
    pub fn thrust_direction(&self) -> Unit<Vector2<f64>> {
        let angle = self.thrust_angle_deg.to_radians();
        Unit::new_unchecked(Vector2::new(angle.cos(), angle.sin()))
    }

    /// Thrust-to-weight ratio at the current mass.
    pub fn thrust_to_weight(&self, gravity: f64) -> f64 {
        self.thrust_force / (self.current_mass() * gravity)
    }

    /// Ideal delta-v left in the tank (rocket equation, v_e = F / mdot).
    pub fn delta_v_budget(&self) -> f64 {
        let exhaust_velocity = self.thrust_force / self.burn_rate;
        exhaust_velocity * (self.current_mass() / self.dry_mass).ln()
    }

    /// Seconds of full-throttle burn left.
    pub fn burn_time_remaining(&self) -> f64 {
        self.fuel_mass / self.burn_rate
    }

    /// Fire the engine for `dt` seconds.
    ///
    /// Fuel is burned first (clamped to what is left), then the lighter
    /// craft is accelerated by the full thrust. With an empty tank the
    /// call reports [`ThrustOutcome::NoFuel`] and leaves the state alone.
    pub fn apply_thrust(&mut self, dt: f64) -> SimResult<ThrustOutcome> {
        check_dt(dt)?;

        if self.fuel_mass <= 0.0 {
            log::debug!("No fuel at t={:.2}s", self.elapsed_time);
            return Ok(ThrustOutcome::NoFuel { time: self.elapsed_time });
        }

        let fuel_used = (self.burn_rate * dt).min(self.fuel_mass);
        self.fuel_mass = (self.fuel_mass - fuel_used).max(0.0);

        let accel = self.thrust_force / self.current_mass();
        let dv = self.thrust_direction().into_inner() * accel * dt;
        self.vertical_velocity += dv.y;

        Ok(ThrustOutcome::Fired { fuel_used, delta_v: dv.y })
    }

    /// Advance gravity, velocity, altitude and clock by `dt`.
    ///
    /// Altitude is not clamped; a negative value means the craft has
    /// reached or passed the surface.
    pub fn integrate(&mut self, dt: f64, gravity: f64) -> SimResult<()> {
        check_dt(dt)?;

        let (altitude, velocity) =
            semi_implicit_euler(self.altitude, self.vertical_velocity, -gravity, dt);
        self.altitude = altitude;
        self.vertical_velocity = velocity;
        self.advance_clock(dt);
        Ok(())
    }

    fn advance_clock(&mut self, dt: f64) {
        if dt != self.step_dt {
            self.epoch = self.elapsed_time;
            self.step_dt = dt;
            self.steps = 0;
        }
        self.steps += 1;
        self.elapsed_time = self.epoch + self.steps as f64 * dt;
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            time: self.elapsed_time,
            altitude: self.altitude,
            velocity: self.vertical_velocity,
            fuel: self.fuel_mass,
        }
    }
}

// ---------------------------------------------------------------------------
// Lander builder
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct LanderBuilder {
    dry_mass: f64,
    fuel_mass: f64,
    thrust: f64,
    burn_rate: f64,
    initial: InitialConditions,
}

impl LanderBuilder {
    pub fn new() -> Self {
        Self {
            dry_mass: 1500.0,
            fuel_mass: 800.0,
            thrust: 4500.0,
            burn_rate: 5.0,
            initial: InitialConditions::default(),
        }
    }

    pub fn dry_mass(mut self, v: f64) -> Self { self.dry_mass = v; self }
    pub fn fuel_mass(mut self, v: f64) -> Self { self.fuel_mass = v; self }
    pub fn thrust(mut self, v: f64) -> Self { self.thrust = v; self }
    pub fn burn_rate(mut self, v: f64) -> Self { self.burn_rate = v; self }
    pub fn altitude(mut self, v: f64) -> Self { self.initial.altitude = v; self }
    pub fn velocity(mut self, v: f64) -> Self { self.initial.velocity = v; self }
    pub fn thrust_angle_deg(mut self, v: f64) -> Self { self.initial.thrust_angle_deg = v; self }
    pub fn initial(mut self, v: InitialConditions) -> Self { self.initial = v; self }

    pub fn build(self) -> SimResult<Lander> {
        require("dry_mass", self.dry_mass, self.dry_mass > 0.0, "must be > 0")?;
        require("fuel_mass", self.fuel_mass, self.fuel_mass >= 0.0, "must be >= 0")?;
        require("thrust", self.thrust, self.thrust >= 0.0, "must be >= 0")?;
        require("burn_rate", self.burn_rate, self.burn_rate > 0.0, "must be > 0")?;
        require("altitude", self.initial.altitude, self.initial.altitude > 0.0, "must start above the surface")?;
        require("velocity", self.initial.velocity, true, "")?;
        require("thrust_angle_deg", self.initial.thrust_angle_deg, true, "")?;

        Ok(Lander {
            dry_mass: self.dry_mass,
            fuel_mass: self.fuel_mass,
            thrust_force: self.thrust,
            burn_rate: self.burn_rate,
            altitude: self.initial.altitude,
            vertical_velocity: self.initial.velocity,
            thrust_angle_deg: self.initial.thrust_angle_deg,
            elapsed_time: 0.0,
            epoch: 0.0,
            step_dt: 0.0,
            steps: 0,
        })
    }
}

impl Default for LanderBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn require(name: &'static str, value: f64, ok: bool, reason: &'static str) -> SimResult<()> {
    if !value.is_finite() {
        return Err(SimError::InvalidParameter { name, value, reason: "must be finite" });
    }
    if !ok {
        return Err(SimError::InvalidParameter { name, value, reason });
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
