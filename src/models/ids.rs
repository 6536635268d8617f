//! Transaction identifiers
//!
//! Ids come from a monotonic counter rather than the wall clock, so two
//! transactions created within the same instant still get distinct ids.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identity of a transaction within a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransactionId(u64);

impl TransactionId {
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Get the underlying integer
    pub const fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for TransactionId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl FromStr for TransactionId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let s = s.strip_prefix('#').unwrap_or(s);
        Ok(Self(s.parse()?))
    }
}

/// Hands out strictly increasing transaction ids
#[derive(Debug, Clone)]
pub struct IdGenerator {
    next: u64,
}

impl IdGenerator {
    /// Issue the next id
    pub fn next_id(&mut self) -> TransactionId {
        let id = TransactionId(self.next);
        self.next += 1;
        id
    }

    /// Make sure future ids are greater than `id`
    pub fn observe(&mut self, id: TransactionId) {
        if id.0 >= self.next {
            self.next = id.0 + 1;
        }
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self { next: 1 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generator_is_monotonic() {
        let mut ids = IdGenerator::default();
        let first = ids.next_id();
        let second = ids.next_id();
        let third = ids.next_id();

        assert_eq!(first.value(), 1);
        assert!(first < second && second < third);
    }

    #[test]
    fn test_observe_skips_past_existing_ids() {
        let mut ids = IdGenerator::default();
        ids.observe(TransactionId::new(3));
        assert_eq!(ids.next_id().value(), 4);

        // Observing a smaller id never moves the counter backwards
        ids.observe(TransactionId::new(2));
        assert_eq!(ids.next_id().value(), 5);
    }

    #[test]
    fn test_id_parse() {
        assert_eq!("42".parse::<TransactionId>().unwrap(), TransactionId::new(42));
        assert_eq!("#7".parse::<TransactionId>().unwrap(), TransactionId::new(7));
        assert!("abc".parse::<TransactionId>().is_err());
    }

    #[test]
    fn test_id_serialization() {
        let id = TransactionId::new(9);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "9");
    }
}
