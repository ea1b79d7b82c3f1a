use crate::vehicle::Lander;

/// Trait for engine control policies.
///
/// Implement this to plug a custom throttle rule into the descent loop.
/// The policy only decides; the runner owns the lander and fires the engine.
pub trait ControlPolicy {
    /// Return `true` to fire the engine for the coming step.
    fn decide(&mut self, lander: &Lander) -> bool;

    /// Whether the policy would want thrust regardless of fuel.
    ///
    /// Only consulted when the tank is dry, so the runner can report the
    /// unanswered demand as a no-fuel event. Defaults to no demand.
    fn demands_thrust(&self, _lander: &Lander) -> bool {
        false
    }

    /// Reset policy internal state between runs.
    fn reset(&mut self) {}

    /// Human-readable name for logging/display.
    fn name(&self) -> &str {
        "unnamed"
    }
}
