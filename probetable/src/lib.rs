//! Fixed-capacity open address hash table keyed by strings.
//!
//! Collisions are resolved with linear probing. The hash function is
//! injected at construction time and the table never grows, deletes or
//! reorders records.
//!
//! ```
//! use probetable::{ProbeTable, TableError};
//!
//! let mut table = ProbeTable::with_capacity(5, |key: &str| key.len());
//! table.insert("abc".to_string()).unwrap();
//! table.insert("xyz".to_string()).unwrap();
//!
//! assert_eq!(table.position("abc"), Ok(3));
//! assert_eq!(table.position("xyz"), Ok(4));
//! assert!(matches!(table.search("nope"), Err(TableError::NotFound { .. })));
//! ```

pub mod error;
pub mod iter;
pub mod slot;
pub mod stats;
pub mod table;

pub use error::{Result, TableError};
pub use iter::Iter;
pub use slot::{Keyed, Slot};
pub use stats::{CollisionStats, Histogram, Listing, SlotProbes};
pub use table::{DEFAULT_CAPACITY, DuplicatePolicy, ProbeTable, TableConfig};
