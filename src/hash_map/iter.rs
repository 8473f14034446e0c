//! Iterators over the live entries of a [`LinearProbeMap`](super::LinearProbeMap)
//!
//! Each traversal walks the slot array from index 0 and yields occupied slots
//! only, so the order follows slot positions and changes whenever the map
//! resizes. There is no snapshot: an iterator reads the array as it is while
//! it runs, and the shared borrow it holds keeps the map from being mutated
//! until it is dropped.

use super::slot::Slot;
use std::iter::FusedIterator;
use std::slice;

/// Iterator over `(key, value)` pairs
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    slots: slice::Iter<'a, Slot>,
    remaining: usize,
}

impl<'a> Iter<'a> {
    pub(crate) fn new(slots: &'a [Slot], len: usize) -> Self {
        Self {
            slots: slots.iter(),
            remaining: len,
        }
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        for slot in self.slots.by_ref() {
            if let Some(entry) = slot.entry() {
                self.remaining = self.remaining.saturating_sub(1);
                return Some(entry);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl FusedIterator for Iter<'_> {}

/// Iterator over keys
#[derive(Debug, Clone)]
pub struct Keys<'a> {
    iter: Iter<'a>,
}

impl<'a> Keys<'a> {
    pub(crate) fn new(iter: Iter<'a>) -> Self {
        Self { iter }
    }
}

impl<'a> Iterator for Keys<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next().map(|(k, _)| k)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl ExactSizeIterator for Keys<'_> {}

impl FusedIterator for Keys<'_> {}

/// Iterator over values
#[derive(Debug, Clone)]
pub struct Values<'a> {
    iter: Iter<'a>,
}

impl<'a> Values<'a> {
    pub(crate) fn new(iter: Iter<'a>) -> Self {
        Self { iter }
    }
}

impl<'a> Iterator for Values<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next().map(|(_, v)| v)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl ExactSizeIterator for Values<'_> {}

impl FusedIterator for Values<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn slots() -> Vec<Slot> {
        vec![
            Slot::Empty,
            Slot::Occupied {
                key: "a".to_string(),
                value: "1".to_string(),
            },
            Slot::Tombstone,
            Slot::Occupied {
                key: "b".to_string(),
                value: "2".to_string(),
            },
            Slot::Empty,
        ]
    }

    #[test]
    fn test_iter_yields_occupied_in_slot_order() {
        let slots = slots();
        let pairs: Vec<_> = Iter::new(&slots, 2).collect();
        assert_eq!(pairs, vec![("a", "1"), ("b", "2")]);
    }

    #[test]
    fn test_size_hint_tracks_remaining() {
        let slots = slots();
        let mut iter = Iter::new(&slots, 2);
        assert_eq!(iter.len(), 2);
        iter.next();
        assert_eq!(iter.len(), 1);
        iter.next();
        assert_eq!(iter.len(), 0);
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn test_keys_and_values() {
        let slots = slots();
        let keys: Vec<_> = Keys::new(Iter::new(&slots, 2)).collect();
        let values: Vec<_> = Values::new(Iter::new(&slots, 2)).collect();
        assert_eq!(keys, vec!["a", "b"]);
        assert_eq!(values, vec!["1", "2"]);
    }

    #[test]
    fn test_no_live_slots() {
        let slots = vec![Slot::Tombstone, Slot::Empty, Slot::Tombstone];
        assert_eq!(Iter::new(&slots, 0).count(), 0);
    }
}
