/// State of a single cell in the table.
///
/// There is no tombstone state: records are never removed, so an `Empty`
/// slot always terminates a probe chain.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Slot<R> {
    #[default]
    Empty,
    Occupied(R),
}

impl<R> Slot<R> {
    pub fn is_empty(&self) -> bool {
        matches!(self, Slot::Empty)
    }

    pub fn record(&self) -> Option<&R> {
        match self {
            Slot::Occupied(record) => Some(record),
            Slot::Empty => None,
        }
    }
}

/// Anything that can be stored in a `ProbeTable`.
///
/// The key is the only part of a record the table looks at, both for
/// hashing and for equality.
pub trait Keyed {
    fn key(&self) -> &str;
}

impl Keyed for String {
    fn key(&self) -> &str {
        self
    }
}

impl Keyed for &str {
    fn key(&self) -> &str {
        self
    }
}

impl<T: Keyed + ?Sized> Keyed for Box<T> {
    fn key(&self) -> &str {
        (**self).key()
    }
}
