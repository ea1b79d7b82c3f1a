use std::fmt;

use serde::Serialize;

/// Touchdown speed below which a landing counts as safe, m/s.
pub const SAFE_LANDING_SPEED: f64 = 5.0;

/// Outcome of a descent, judged only on touchdown vertical speed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Landing {
    Safe,
    Crash,
}

impl Landing {
    pub fn classify(final_velocity: f64) -> Self {
        if final_velocity.abs() < SAFE_LANDING_SPEED {
            Landing::Safe
        } else {
            Landing::Crash
        }
    }

    pub fn is_safe(self) -> bool {
        self == Landing::Safe
    }
}

impl fmt::Display for Landing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Landing::Safe => write!(f, "Landing was successful!"),
            Landing::Crash => write!(f, "Crash landing!"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn safe_just_under_limit() {
        assert_eq!(Landing::classify(-4.9), Landing::Safe);
        assert!(Landing::classify(4.9).is_safe());
    }

    #[test]
    fn crash_at_or_over_limit() {
        assert_eq!(Landing::classify(-5.1), Landing::Crash);
        assert_eq!(Landing::classify(-5.0), Landing::Crash);
        assert_eq!(Landing::classify(f64::NAN), Landing::Crash);
    }
}
