pub mod dynamics;
pub mod vehicle;
mod gnc_mod;
pub mod sim;
pub mod io;
pub mod error;

// The gnc module: expose gnc_mod as `gnc` publicly
pub mod gnc {
    pub use crate::gnc_mod::*;
}

pub use error::{SimError, SimResult};

pub mod types {
    pub use crate::dynamics::state::{
        InitialConditions, SimConfig, Snapshot, DEFAULT_MAX_STEPS, LUNAR_GRAVITY, TIME_STEP,
    };
    pub use crate::vehicle::{Lander, LanderBuilder};
}
