//! Member directory built on a `probetable::ProbeTable` keyed by phone
//! number, plus the helpers used to feed and inspect it: sample hash
//! strategies, random key generation, member file loading and reporting.

pub mod directory;
pub mod error;
pub mod hashing;
pub mod keygen;
pub mod loader;
pub mod logger;
pub mod member;
pub mod report;

pub use directory::{LoadSummary, MemberTable, member_table, populate, populate_strict};
pub use error::{MemberError, Result};
pub use hashing::HashStrategy;
pub use member::{Member, is_card_id, is_phone_number};
