use crate::vehicle::Lander;

// ---------------------------------------------------------------------------
// Simple autopilot: fire whenever the descent is too fast
// ---------------------------------------------------------------------------

/// Default descent-rate limit, m/s.
pub const MAX_DESCENT_RATE: f64 = 5.0;

/// Bang-bang autopilot: engine on while sinking faster than
/// `max_descent_rate` and fuel remains, off otherwise.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimpleAutopilot {
    pub max_descent_rate: f64,
}

impl SimpleAutopilot {
    pub fn new() -> Self {
        Self { max_descent_rate: MAX_DESCENT_RATE }
    }

    /// Pure decision rule, usable without a policy object.
    pub fn should_fire(&self, lander: &Lander) -> bool {
        self.too_fast(lander) && lander.has_fuel()
    }

    /// Sinking faster than the limit, fuel or not.
    pub fn too_fast(&self, lander: &Lander) -> bool {
        lander.vertical_velocity() < -self.max_descent_rate
    }
}

impl Default for SimpleAutopilot {
    fn default() -> Self {
        Self::new()
    }
}

impl super::ControlPolicy for SimpleAutopilot {
    fn decide(&mut self, lander: &Lander) -> bool {
        self.should_fire(lander)
    }

    fn demands_thrust(&self, lander: &Lander) -> bool {
        self.too_fast(lander)
    }

    fn name(&self) -> &str {
        "SimpleAutopilot"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gnc::ControlPolicy;
    use crate::vehicle::LanderBuilder;

    fn lander(velocity: f64, fuel: f64) -> Lander {
        LanderBuilder::new().velocity(velocity).fuel_mass(fuel).build().unwrap()
    }

    #[test]
    fn fires_when_falling_fast_with_fuel() {
        let mut ap = SimpleAutopilot::new();
        assert!(ap.decide(&lander(-10.0, 800.0)));
        assert!(ap.decide(&lander(-5.01, 0.1)));
    }

    #[test]
    fn idle_at_or_below_limit() {
        let mut ap = SimpleAutopilot::new();
        assert!(!ap.decide(&lander(-5.0, 800.0)));
        assert!(!ap.decide(&lander(-4.9, 800.0)));
        assert!(!ap.decide(&lander(3.0, 800.0)));
    }

    #[test]
    fn idle_without_fuel() {
        let mut ap = SimpleAutopilot::new();
        assert!(!ap.decide(&lander(-30.0, 0.0)));
    }

    #[test]
    fn dry_tank_still_demands_thrust_when_too_fast() {
        let ap = SimpleAutopilot::new();
        assert!(ap.demands_thrust(&lander(-30.0, 0.0)));
        assert!(!ap.demands_thrust(&lander(-4.0, 0.0)));
        assert!(!ap.demands_thrust(&lander(20.0, 0.0)));
    }

    #[test]
    fn custom_limit() {
        let mut ap = SimpleAutopilot { max_descent_rate: 2.0 };
        assert!(ap.decide(&lander(-3.0, 10.0)));
        assert_eq!(ap.name(), "SimpleAutopilot");
    }
}
