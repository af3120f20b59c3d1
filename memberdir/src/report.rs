use std::fmt::Display;
use std::io::{self, Write};

use probetable::ProbeTable;

/// Writes the occupied slots, optionally the probe histogram, and the
/// collision summary of `table`.
pub fn write_report<W, R, H>(out: &mut W, table: &ProbeTable<R, H>, histogram: bool) -> io::Result<()>
where
    W: Write,
    R: Display,
{
    writeln!(
        out,
        "{} of {} slots occupied:",
        table.len(),
        table.capacity()
    )?;
    write!(out, "{}", table.listing())?;

    if histogram {
        writeln!(out)?;
        writeln!(out, "Distribution of probe steps over the table:")?;
        write!(out, "{}", table.histogram())?;
    }

    writeln!(out)?;
    writeln!(out, "{}", table.collision_stats())?;
    Ok(())
}
