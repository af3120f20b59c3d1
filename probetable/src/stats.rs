//! Read-only diagnostics over a table's slots and probe counters.

use std::fmt;

use crate::iter::Iter;
use crate::slot::Slot;

/// Probe count recorded for a single slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotProbes {
    pub slot: usize,
    pub probes: u32,
}

/// Distribution of the per-slot probe counters.
///
/// `empty_cells + single_probe + multi_probe.len()` always equals the
/// capacity of the table the stats were taken from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollisionStats {
    /// Records stored when the stats were taken
    pub records: usize,
    /// Slots no probe step ever landed on
    pub empty_cells: usize,
    /// Slots landed on by exactly one probe step
    pub single_probe: usize,
    /// Slots landed on more than once, in slot order
    pub multi_probe: Vec<SlotProbes>,
}

impl CollisionStats {
    pub fn from_probe_counts(records: usize, probes: &[u32]) -> Self {
        let mut stats = CollisionStats {
            records,
            ..Default::default()
        };

        for (slot, &count) in probes.iter().enumerate() {
            match count {
                0 => stats.empty_cells += 1,
                1 => stats.single_probe += 1,
                _ => stats.multi_probe.push(SlotProbes { slot, probes: count }),
            }
        }

        stats
    }

    /// Number of slots covered, equal to the table capacity
    pub fn slots(&self) -> usize {
        self.empty_cells + self.single_probe + self.multi_probe.len()
    }

    /// Sum of all probe steps taken by successful inserts
    pub fn total_probes(&self) -> u64 {
        let multi: u64 = self.multi_probe.iter().map(|s| u64::from(s.probes)).sum();
        self.single_probe as u64 + multi
    }
}

impl fmt::Display for CollisionStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Probe steps taken while inserting {} records:",
            self.records
        )?;
        for SlotProbes { slot, probes } in &self.multi_probe {
            writeln!(f, "  at slot[{slot}] = {probes}")?;
        }
        writeln!(f, "{} slots never probed.", self.empty_cells)?;
        writeln!(f, "{} slots probed once.", self.single_probe)?;
        write!(f, "{} slots probed more than once.", self.multi_probe.len())
    }
}

/// Text histogram of the probe counters, one line per slot.
pub struct Histogram<'a> {
    probes: &'a [u32],
}

impl<'a> Histogram<'a> {
    pub(crate) fn new(probes: &'a [u32]) -> Self {
        Self { probes }
    }
}

impl fmt::Display for Histogram<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (slot, &count) in self.probes.iter().enumerate() {
            writeln!(f, "At slot[{slot}]: {}", "*".repeat(count as usize))?;
        }
        Ok(())
    }
}

/// Occupied slots printed as `index record`, in slot order.
pub struct Listing<'a, R> {
    slots: &'a [Slot<R>],
    len: usize,
}

impl<'a, R> Listing<'a, R> {
    pub(crate) fn new(slots: &'a [Slot<R>], len: usize) -> Self {
        Self { slots, len }
    }
}

impl<R: fmt::Display> fmt::Display for Listing<'_, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, record) in Iter::new(self.slots, self.len) {
            writeln!(f, "{index} {record}")?;
        }
        Ok(())
    }
}
