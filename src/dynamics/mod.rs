pub mod state;

pub use state::{InitialConditions, SimConfig, Snapshot, LUNAR_GRAVITY, TIME_STEP};
