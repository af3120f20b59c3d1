//! Fills a small table with colliding keys and prints its diagnostics.
//!
//! Run with `RUST_LOG=debug` to see every insert.

use probetable::{ProbeTable, TableError};

fn last_digit(key: &str) -> usize {
    key.bytes()
        .rev()
        .find(u8::is_ascii_digit)
        .map_or(0, |d| (d - b'0') as usize)
}

fn main() {
    env_logger::init();

    let mut table = ProbeTable::with_capacity(10, last_digit);

    for key in ["604-111-0001", "604-222-0001", "778-333-0005", "778-444-0009", "250-555-0001"] {
        match table.insert(key.to_string()) {
            Ok(slot) => println!("{key} -> slot {slot} (home {})", table.home_slot(key)),
            Err(err) => println!("{key} rejected: {err}"),
        }
    }

    // Same key again is refused
    if let Err(TableError::DuplicateKey { slot, .. }) = table.insert("604-222-0001".to_string()) {
        println!("604-222-0001 already stored at slot {slot}");
    }

    println!("\nOccupied slots:\n{}", table.listing());
    println!("Histogram:\n{}", table.histogram());
    println!("{}", table.collision_stats());
}
