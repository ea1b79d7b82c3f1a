pub mod csv;
pub mod json;

pub use self::csv::{write_snapshots, write_snapshots_file};
pub use self::json::{DescentReport, DescentSummary};
