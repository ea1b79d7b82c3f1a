use std::io::{self, Write};
use std::path::Path;

use crate::dynamics::state::Snapshot;

/// Write descent snapshots in CSV format.
///
/// Columns: time, altitude, velocity, fuel
pub fn write_snapshots<W: Write>(writer: &mut W, snapshots: &[Snapshot]) -> io::Result<()> {
    writeln!(writer, "time,altitude,velocity,fuel")?;

    for s in snapshots {
        writeln!(
            writer,
            "{:.2},{:.4},{:.4},{:.4}",
            s.time, s.altitude, s.velocity, s.fuel,
        )?;
    }

    Ok(())
}

/// Write snapshots to a CSV file at the given path.
pub fn write_snapshots_file(path: impl AsRef<Path>, snapshots: &[Snapshot]) -> io::Result<()> {
    let mut file = std::fs::File::create(path)?;
    write_snapshots(&mut file, snapshots)
}
