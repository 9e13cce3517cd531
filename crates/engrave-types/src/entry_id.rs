use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TypeError;

/// Numeric identifier for a ledger entry.
///
/// Identifiers are non-negative integers chosen by the caller. An id is
/// permanent: once an entry has been claimed, the id is owned forever and
/// never recycled. Ids have no internal structure — the store treats them
/// as opaque map keys.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(u64);

impl EntryId {
    /// Wrap a raw numeric identifier.
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// The raw numeric value.
    pub const fn value(&self) -> u64 {
        self.0
    }
}

impl From<u64> for EntryId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl FromStr for EntryId {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<u64>()
            .map(Self)
            .map_err(|_| TypeError::InvalidEntryId(s.to_string()))
    }
}

impl fmt::Debug for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EntryId({})", self.0)
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_and_value_round_trip() {
        let id = EntryId::new(42);
        assert_eq!(id.value(), 42);
    }

    #[test]
    fn parse_valid() {
        let id: EntryId = "17".parse().unwrap();
        assert_eq!(id, EntryId::new(17));
    }

    #[test]
    fn parse_rejects_garbage() {
        let err = "not-a-number".parse::<EntryId>().unwrap_err();
        assert!(matches!(err, TypeError::InvalidEntryId(_)));
    }

    #[test]
    fn parse_rejects_negative() {
        assert!("-1".parse::<EntryId>().is_err());
    }

    #[test]
    fn display_is_plain_number() {
        assert_eq!(EntryId::new(7).to_string(), "7");
    }

    #[test]
    fn serde_is_transparent() {
        let json = serde_json::to_string(&EntryId::new(5)).unwrap();
        assert_eq!(json, "5");
        let back: EntryId = serde_json::from_str("5").unwrap();
        assert_eq!(back, EntryId::new(5));
    }

    #[test]
    fn ordering_follows_numeric_value() {
        assert!(EntryId::new(1) < EntryId::new(2));
    }

    proptest::proptest! {
        #[test]
        fn display_parse_round_trip(raw in proptest::prelude::any::<u64>()) {
            let id = EntryId::new(raw);
            let parsed: EntryId = id.to_string().parse().unwrap();
            proptest::prop_assert_eq!(parsed, id);
        }
    }
}
