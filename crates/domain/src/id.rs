//! Typed identifier newtype for user records.

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Unique identifier for a [`User`](crate::user::User).
///
/// Ids are assigned by the collection in increasing order starting at
/// [`UserId::FIRST`] and serialize as bare JSON integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct UserId(u64);

impl UserId {
    /// The id assigned to the first record of an empty collection.
    pub const FIRST: Self = Self(1);

    /// Wrap a raw integer id.
    #[must_use]
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    /// The id that follows this one, or `None` past the largest
    /// representable id.
    #[must_use]
    pub fn next(self) -> Option<Self> {
        self.0.checked_add(1).map(Self)
    }

    /// Access the raw integer value.
    #[must_use]
    pub fn as_u64(self) -> u64 {
        self.0
    }
}

impl From<u64> for UserId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for UserId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_start_numbering_at_one() {
        assert_eq!(UserId::FIRST, UserId::new(1));
    }

    #[test]
    fn should_increment_by_one_when_taking_next() {
        assert_eq!(UserId::new(7).next(), Some(UserId::new(8)));
    }

    #[test]
    fn should_have_no_successor_for_largest_id() {
        assert_eq!(UserId::new(u64::MAX).next(), None);
    }

    #[test]
    fn should_roundtrip_through_display_and_from_str() {
        let id = UserId::new(42);
        let text = id.to_string();
        let parsed: UserId = text.parse().unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn should_serialize_as_bare_integer() {
        let json = serde_json::to_string(&UserId::new(7)).unwrap();
        assert_eq!(json, "7");
        let parsed: UserId = serde_json::from_str("7").unwrap();
        assert_eq!(parsed, UserId::new(7));
    }

    #[test]
    fn should_return_error_when_parsing_non_numeric_text() {
        assert!(UserId::from_str("abc").is_err());
        assert!(UserId::from_str("").is_err());
        assert!(UserId::from_str("12abc").is_err());
        assert!(UserId::from_str("-3").is_err());
    }

    #[test]
    fn should_order_by_numeric_value() {
        assert!(UserId::new(2) < UserId::new(10));
    }
}
