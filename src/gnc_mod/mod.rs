pub mod controller;
pub mod autopilot;

pub use controller::ControlPolicy;
pub use autopilot::{SimpleAutopilot, MAX_DESCENT_RATE};
