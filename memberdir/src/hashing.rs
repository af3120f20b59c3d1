//! Sample hash functions over phone numbers.
//!
//! Every strategy only looks at the ASCII digits of a key, so any string
//! hashes to some index. Intermediate values wrap instead of overflowing.

use std::fmt;

use clap::ValueEnum;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum HashStrategy {
    /// All digits read as a single number, reduced modulo the capacity
    Modulo,
    /// Digit groups 3/3/rest added together, reduced modulo the capacity
    FoldShift,
    /// Like fold-shift, with the digits of the middle group reversed
    FoldBoundary,
}

fn digits(key: &str) -> Vec<u8> {
    key.bytes()
        .filter(u8::is_ascii_digit)
        .map(|d| d - b'0')
        .collect()
}

fn number<'a>(digits: impl Iterator<Item = &'a u8>) -> u64 {
    digits.fold(0u64, |acc, &d| acc.wrapping_mul(10).wrapping_add(u64::from(d)))
}

/// Splits digits into the area code, exchange and line number groups
fn groups(digits: &[u8]) -> (&[u8], &[u8], &[u8]) {
    let (first, rest) = digits.split_at(digits.len().min(3));
    let (second, third) = rest.split_at(rest.len().min(3));
    (first, second, third)
}

impl HashStrategy {
    pub const ALL: [HashStrategy; 3] = [
        HashStrategy::Modulo,
        HashStrategy::FoldShift,
        HashStrategy::FoldBoundary,
    ];

    /// Value before reduction modulo the capacity
    pub fn hash_code(self, key: &str) -> u64 {
        let digits = digits(key);
        match self {
            HashStrategy::Modulo => number(digits.iter()),
            HashStrategy::FoldShift => {
                let (first, second, third) = groups(&digits);
                number(first.iter())
                    .wrapping_add(number(second.iter()))
                    .wrapping_add(number(third.iter()))
            }
            HashStrategy::FoldBoundary => {
                let (first, second, third) = groups(&digits);
                number(first.iter())
                    .wrapping_add(number(second.iter().rev()))
                    .wrapping_add(number(third.iter()))
            }
        }
    }

    /// Index of `key` in a table of `capacity` slots.
    ///
    /// # Panics
    /// If `capacity` is zero.
    pub fn index(self, key: &str, capacity: usize) -> usize {
        (self.hash_code(key) % capacity as u64) as usize
    }

    /// Hash function for a `ProbeTable` with `capacity` slots
    pub fn hasher(self, capacity: usize) -> impl Fn(&str) -> usize + Copy {
        move |key: &str| self.index(key, capacity)
    }
}

impl fmt::Display for HashStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            HashStrategy::Modulo => "modulo",
            HashStrategy::FoldShift => "fold-shift",
            HashStrategy::FoldBoundary => "fold-boundary",
        };
        f.write_str(name)
    }
}
