use thiserror::Error;

/// Errors that can occur when inserting into or searching a probe table
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    /// Every slot is occupied, the table never grows
    #[error("table is full ({capacity} slots)")]
    TableFull { capacity: usize },

    /// A record with the same key is already stored
    #[error("key {key:?} already stored at slot {slot}")]
    DuplicateKey { key: String, slot: usize },

    /// Search on a table without records
    #[error("table is empty")]
    EmptyTable,

    /// Key not found in the table
    #[error("key {key:?} not found")]
    NotFound { key: String },
}

pub type Result<T> = std::result::Result<T, TableError>;
