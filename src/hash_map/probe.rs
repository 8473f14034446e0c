//! Linear probe-sequence search
//!
//! The single primitive behind insert, lookup, removal and membership checks.
//! Starting at `hash mod capacity`, consecutive slots are visited with
//! wraparound for at most `capacity` steps.

use super::slot::Slot;

/// Outcome of a probe-sequence search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ProbeResult {
    /// Slot holding the key when `found`, otherwise the insertion point
    pub index: usize,
    /// Whether `index` holds the target key
    pub found: bool,
    /// Every slot was visited without meeting the key or an empty slot.
    /// Unreachable while the load-factor invariant holds.
    pub exhausted: bool,
}

/// Home slot of `hash` in a table of `capacity` slots (a power of two)
#[inline]
pub(crate) fn home_index(hash: u64, capacity: usize) -> usize {
    debug_assert!(capacity.is_power_of_two());
    (hash as usize) & (capacity - 1)
}

/// Search `slots` for `key` along the linear probe sequence from `hash`.
///
/// An empty slot ends the search; the insertion point is then the first
/// tombstone met on the way, or the empty slot itself. On an exhausted scan
/// the first tombstone, or slot 0, is returned.
pub(crate) fn find_slot(slots: &[Slot], hash: u64, key: &str) -> ProbeResult {
    let capacity = slots.len();
    let mut index = home_index(hash, capacity);
    let mut first_tombstone: Option<usize> = None;

    for _ in 0..capacity {
        match &slots[index] {
            Slot::Empty => {
                return ProbeResult {
                    index: first_tombstone.unwrap_or(index),
                    found: false,
                    exhausted: false,
                };
            }
            Slot::Tombstone => {
                if first_tombstone.is_none() {
                    first_tombstone = Some(index);
                }
            }
            Slot::Occupied { key: k, .. } if k == key => {
                return ProbeResult {
                    index,
                    found: true,
                    exhausted: false,
                };
            }
            Slot::Occupied { .. } => {}
        }
        index = (index + 1) & (capacity - 1);
    }

    ProbeResult {
        index: first_tombstone.unwrap_or(0),
        found: false,
        exhausted: true,
    }
}

/// Number of steps from the home slot of `hash` to `index` along the probe sequence
#[inline]
pub(crate) fn displacement(hash: u64, index: usize, capacity: usize) -> usize {
    let home = home_index(hash, capacity);
    (index + capacity - home) & (capacity - 1)
}
