pub mod integrator;
pub mod runner;
pub mod event;
pub mod landing;

pub use runner::{simulate, simulate_with, DescentController, DescentRun, Phase};
pub use integrator::semi_implicit_euler;
pub use event::{EventKind, SimEvent};
pub use landing::{Landing, SAFE_LANDING_SPEED};
