//! Slot state for the open-addressing table
//!
//! A slot moves `Empty -> Occupied` on insert of a new key, stays `Occupied`
//! on overwrite, becomes a `Tombstone` on removal and may return to
//! `Occupied` when an insert reuses it. Only a resize or `clear` turns
//! tombstones back into empty slots.

use std::mem;

/// One cell of the slot array
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) enum Slot {
    /// Never used since the last resize or clear; terminates probe sequences
    #[default]
    Empty,
    /// Held a key that was removed; probe sequences continue past it
    Tombstone,
    /// Holds a live entry
    Occupied {
        /// Entry key, unique across the array
        key: String,
        /// Entry value
        value: String,
    },
}

impl Slot {
    #[inline]
    pub(crate) fn is_tombstone(&self) -> bool {
        matches!(self, Slot::Tombstone)
    }

    #[inline]
    pub(crate) fn is_occupied(&self) -> bool {
        matches!(self, Slot::Occupied { .. })
    }

    /// Key of a live entry
    #[inline]
    pub(crate) fn key(&self) -> Option<&str> {
        match self {
            Slot::Occupied { key, .. } => Some(key),
            _ => None,
        }
    }

    /// Key and value of a live entry
    #[inline]
    pub(crate) fn entry(&self) -> Option<(&str, &str)> {
        match self {
            Slot::Occupied { key, value } => Some((key, value)),
            _ => None,
        }
    }

    /// Mutable value of a live entry
    #[inline]
    pub(crate) fn value_mut(&mut self) -> Option<&mut String> {
        match self {
            Slot::Occupied { value, .. } => Some(value),
            _ => None,
        }
    }

    /// Turn an occupied slot into a tombstone, handing back its value.
    ///
    /// Any other slot is left untouched and `None` is returned.
    pub(crate) fn bury(&mut self) -> Option<String> {
        if !self.is_occupied() {
            return None;
        }
        match mem::replace(self, Slot::Tombstone) {
            Slot::Occupied { value, .. } => Some(value),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn occupied(key: &str, value: &str) -> Slot {
        Slot::Occupied {
            key: key.to_string(),
            value: value.to_string(),
        }
    }

    #[test]
    fn test_default_is_empty() {
        let slot = Slot::default();
        assert_eq!(slot, Slot::Empty);
        assert!(!slot.is_tombstone());
        assert!(!slot.is_occupied());
        assert_eq!(slot.key(), None);
        assert_eq!(slot.entry(), None);
    }

    #[test]
    fn test_occupied_accessors() {
        let mut slot = occupied("k", "v");
        assert!(slot.is_occupied());
        assert_eq!(slot.key(), Some("k"));
        assert_eq!(slot.entry(), Some(("k", "v")));

        slot.value_mut().unwrap().push('2');
        assert_eq!(slot.entry(), Some(("k", "v2")));
    }

    #[test]
    fn test_bury_occupied() {
        let mut slot = occupied("k", "v");
        assert_eq!(slot.bury(), Some("v".to_string()));
        assert!(slot.is_tombstone());
        // key and value no longer observable
        assert_eq!(slot.key(), None);
        assert_eq!(slot.bury(), None);
        assert!(slot.is_tombstone());
    }

    #[test]
    fn test_bury_empty_is_noop() {
        let mut slot = Slot::Empty;
        assert_eq!(slot.bury(), None);
        assert_eq!(slot, Slot::Empty);
    }

    #[test]
    fn test_empty_key_and_value_are_live() {
        let mut slot = occupied("", "");
        assert_eq!(slot.entry(), Some(("", "")));
        assert_eq!(slot.bury(), Some(String::new()));
    }
}
