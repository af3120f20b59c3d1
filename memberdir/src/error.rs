use std::io;

use probetable::TableError;
use thiserror::Error;

/// Errors raised while building, loading or storing members
#[derive(Error, Debug)]
pub enum MemberError {
    /// IO errors when reading member files
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// A member line that does not have the expected shape
    #[error("line {line}: {reason}")]
    Malformed { line: usize, reason: String },

    /// Phone number not in `DDD-DDD-DDDD` form
    #[error("invalid phone number {0:?}, expected DDD-DDD-DDDD")]
    InvalidPhone(String),

    /// Card identifier that is not a number
    #[error("invalid card id {0:?}")]
    InvalidCardId(String),

    #[error(transparent)]
    Table(#[from] TableError),
}

pub type Result<T> = std::result::Result<T, MemberError>;
