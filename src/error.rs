use thiserror::Error;

/// Errors raised while building a lander or running a descent.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimError {
    #[error("Invalid lander parameter `{name}` = {value}: {reason}")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },

    #[error("Invalid timestep: {0} s (must be finite and > 0)")]
    InvalidTimestep(f64),

    #[error("Invalid simulation config `{name}` = {value}: {reason}")]
    InvalidConfig {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },

    #[error(
        "Simulation did not terminate after {steps} steps \
         (alt={altitude:.1} m, vel={velocity:.2} m/s)"
    )]
    DidNotTerminate {
        steps: u64,
        altitude: f64,
        velocity: f64,
    },
}

pub type SimResult<T> = Result<T, SimError>;

/// Reject a timestep that would stall or reverse simulated time.
pub(crate) fn check_dt(dt: f64) -> SimResult<()> {
    if dt.is_finite() && dt > 0.0 {
        Ok(())
    } else {
        Err(SimError::InvalidTimestep(dt))
    }
}
