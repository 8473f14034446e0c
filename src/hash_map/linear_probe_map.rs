//! LinearProbeMap - open-addressing string map with linear probing
//!
//! All entries live directly in a single slot array. Collisions are resolved
//! by scanning forward (with wraparound) from the key's home slot. Removal
//! leaves a tombstone so probe sequences that ran past the removed key stay
//! intact, and later inserts reuse the first tombstone on their path.
//!
//! Growth is driven by the load factor `(size + tombstones) / capacity`: once
//! it reaches `max_load_factor` (0.75 by default) the next insert doubles the
//! slot array and re-inserts every live entry before placing its own key.
//! That rebuild is the only point where tombstones are discarded. The map
//! never shrinks.
//!
//! # Examples
//!
//! ```rust
//! use probemap::LinearProbeMap;
//! # fn main() -> probemap::Result<()> {
//! let mut map = LinearProbeMap::new();
//! map.insert("a", "1")?;
//! map.insert("b", "2")?;
//! map.remove("a");
//! map.insert("c", "3")?;
//!
//! assert_eq!(map.len(), 2);
//! assert_eq!(map.get("a"), None);
//! assert_eq!(map.get("b"), Some("2"));
//! assert_eq!(map.get("c"), Some("3"));
//! # Ok(())
//! # }
//! ```
//!
//! The map is single-threaded. Callers sharing one across threads must
//! serialize access themselves, e.g. with a `Mutex` around the whole map.

use super::iter::{Iter, Keys, Values};
use super::probe::{displacement, find_slot, ProbeResult};
use super::slot::Slot;
use crate::config::{Config, MapConfig, DEFAULT_MAX_LOAD_FACTOR};
use crate::error::{ProbeMapError, Result};
use std::collections::hash_map::DefaultHasher;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::mem;
use std::ops::Index;

/// Smallest slot array a map ever allocates
pub const MIN_CAPACITY: usize = 16;

/// Open-addressing hash map from `String` keys to `String` values
#[derive(Clone)]
pub struct LinearProbeMap {
    /// Slot array, length is always a power of two >= MIN_CAPACITY
    slots: Vec<Slot>,
    /// Number of occupied slots
    size: usize,
    /// Number of tombstone slots
    tombstones: usize,
    /// Resize threshold for (size + tombstones) / capacity
    max_load_factor: f64,
}

/// Snapshot of a map's occupancy and probe lengths
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapStats {
    /// Live entries
    pub len: usize,
    /// Slots in the array
    pub capacity: usize,
    /// Tombstone slots
    pub tombstones: usize,
    /// `(len + tombstones) / capacity`
    pub load_factor: f64,
    /// Longest distance of a live entry from its home slot
    pub max_displacement: usize,
    /// Average distance of live entries from their home slots
    pub mean_displacement: f64,
}

impl LinearProbeMap {
    /// Creates an empty map with [`MIN_CAPACITY`] slots and the default load factor
    pub fn new() -> Self {
        Self {
            slots: vec![Slot::Empty; MIN_CAPACITY],
            size: 0,
            tombstones: 0,
            max_load_factor: DEFAULT_MAX_LOAD_FACTOR,
        }
    }

    /// Creates an empty map with room for at least `capacity` slots
    ///
    /// The hint is floored at [`MIN_CAPACITY`] and rounded up to the next
    /// power of two.
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        Self::with_config(MapConfig::with_capacity(capacity))
    }

    /// Creates an empty map from a validated configuration
    pub fn with_config(config: MapConfig) -> Result<Self> {
        config.validate()?;
        let capacity = normalize_capacity(config.initial_capacity)?;

        Ok(Self {
            slots: allocate_slots(capacity)?,
            size: 0,
            tombstones: 0,
            max_load_factor: config.max_load_factor,
        })
    }

    /// Number of live entries. O(1).
    #[inline]
    pub fn len(&self) -> usize {
        self.size
    }

    /// Returns true if the map holds no live entries
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Number of slots in the backing array
    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of tombstone slots awaiting the next resize
    #[inline]
    pub fn tombstones(&self) -> usize {
        self.tombstones
    }

    /// Current `(len + tombstones) / capacity`
    pub fn load_factor(&self) -> f64 {
        (self.size + self.tombstones) as f64 / self.slots.len() as f64
    }

    /// Load factor at which the next insert resizes first
    pub fn max_load_factor(&self) -> f64 {
        self.max_load_factor
    }

    #[inline]
    fn hash_key(key: &str) -> u64 {
        let mut hasher = DefaultHasher::new();
        key.hash(&mut hasher);
        hasher.finish()
    }

    fn probe(&self, hash: u64, key: &str) -> ProbeResult {
        let result = find_slot(&self.slots, hash, key);
        if result.exhausted {
            log::error!(
                "probe sequence exhausted: capacity={} size={} tombstones={}",
                self.slots.len(),
                self.size,
                self.tombstones
            );
        }
        debug_assert!(!result.exhausted, "slot array saturated; resize invariant violated");
        result
    }

    fn needs_resize(&self) -> bool {
        let used = self.size + self.tombstones;
        let capacity = self.slots.len();
        // Always keep at least one empty slot so every probe sequence terminates
        used + 1 >= capacity || used as f64 / capacity as f64 >= self.max_load_factor
    }

    /// Inserts a key-value pair, returning the previous value if the key existed
    ///
    /// When the load factor has reached its threshold the slot array is
    /// doubled before the key is placed. The only failure is running out of
    /// memory (or address space) during that growth, in which case the map is
    /// left unchanged.
    pub fn insert<K, V>(&mut self, key: K, value: V) -> Result<Option<String>>
    where
        K: Into<String>,
        V: Into<String>,
    {
        if self.needs_resize() {
            self.resize()?;
        }

        let key = key.into();
        let hash = Self::hash_key(&key);
        Ok(self.place(hash, key, value.into()))
    }

    /// Put an entry into the current array without checking the load factor
    fn place(&mut self, hash: u64, key: String, value: String) -> Option<String> {
        let probe = self.probe(hash, &key);
        let slot = &mut self.slots[probe.index];

        if probe.found {
            return slot.value_mut().map(|old| mem::replace(old, value));
        }

        if slot.is_tombstone() {
            self.tombstones -= 1;
        }
        *slot = Slot::Occupied { key, value };
        self.size += 1;
        None
    }

    /// Double the slot array and re-insert every live entry in array order
    fn resize(&mut self) -> Result<()> {
        let old_capacity = self.slots.len();
        let new_capacity = old_capacity
            .checked_mul(2)
            .ok_or_else(|| ProbeMapError::capacity_overflow(old_capacity))?;
        let new_slots = allocate_slots(new_capacity)?;

        log::debug!(
            "resizing map from {} to {} slots ({} live, {} tombstones dropped)",
            old_capacity,
            new_capacity,
            self.size,
            self.tombstones
        );

        let old_slots = mem::replace(&mut self.slots, new_slots);
        self.size = 0;
        self.tombstones = 0;

        for slot in old_slots {
            if let Slot::Occupied { key, value } = slot {
                let hash = Self::hash_key(&key);
                self.place(hash, key, value);
            }
        }
        Ok(())
    }

    /// Gets the value for a key
    ///
    /// `None` means absent; a present empty string is `Some("")`.
    pub fn get(&self, key: &str) -> Option<&str> {
        let probe = self.probe(Self::hash_key(key), key);
        if !probe.found {
            return None;
        }
        self.slots[probe.index].entry().map(|(_, value)| value)
    }

    /// Gets a mutable reference to the value for a key
    pub fn get_mut(&mut self, key: &str) -> Option<&mut String> {
        let probe = self.probe(Self::hash_key(key), key);
        if !probe.found {
            return None;
        }
        self.slots[probe.index].value_mut()
    }

    /// Checks if the map contains a key
    pub fn contains_key(&self, key: &str) -> bool {
        self.probe(Self::hash_key(key), key).found
    }

    /// Gets the value for a key that must be present
    ///
    /// # Errors
    ///
    /// [`ProbeMapError::KeyNotFound`] when the key is absent.
    pub fn require(&self, key: &str) -> Result<&str> {
        self.get(key).ok_or_else(|| ProbeMapError::key_not_found(key))
    }

    /// Removes a key, returning its value if it was present
    ///
    /// The slot becomes a tombstone; neighbouring slots never move.
    pub fn remove(&mut self, key: &str) -> Option<String> {
        let probe = self.probe(Self::hash_key(key), key);
        if !probe.found {
            return None;
        }

        let value = self.slots[probe.index].bury()?;
        self.size -= 1;
        self.tombstones += 1;
        Some(value)
    }

    /// Removes a key that must be present, returning its value
    ///
    /// # Errors
    ///
    /// [`ProbeMapError::KeyNotFound`] when the key is absent; the map is unchanged.
    pub fn remove_existing(&mut self, key: &str) -> Result<String> {
        self.remove(key).ok_or_else(|| ProbeMapError::key_not_found(key))
    }

    /// Resets every slot to empty, keeping the current capacity. O(capacity).
    pub fn clear(&mut self) {
        log::trace!(
            "clearing map: {} live, {} tombstones, {} slots",
            self.size,
            self.tombstones,
            self.slots.len()
        );
        for slot in self.slots.iter_mut() {
            *slot = Slot::Empty;
        }
        self.size = 0;
        self.tombstones = 0;
    }

    /// Iterator over `(key, value)` pairs in slot order
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(&self.slots, self.size)
    }

    /// Iterator over keys in slot order
    pub fn keys(&self) -> Keys<'_> {
        Keys::new(self.iter())
    }

    /// Iterator over values in slot order
    pub fn values(&self) -> Values<'_> {
        Values::new(self.iter())
    }

    /// Occupancy and probe-length statistics. O(capacity).
    pub fn stats(&self) -> MapStats {
        let capacity = self.slots.len();
        let mut max_displacement = 0;
        let mut total_displacement = 0usize;

        for (index, slot) in self.slots.iter().enumerate() {
            if let Some(key) = slot.key() {
                let distance = displacement(Self::hash_key(key), index, capacity);
                max_displacement = max_displacement.max(distance);
                total_displacement += distance;
            }
        }

        MapStats {
            len: self.size,
            capacity,
            tombstones: self.tombstones,
            load_factor: self.load_factor(),
            max_displacement,
            mean_displacement: if self.size == 0 {
                0.0
            } else {
                total_displacement as f64 / self.size as f64
            },
        }
    }
}

/// Floor a capacity hint at MIN_CAPACITY and round it to a power of two
fn normalize_capacity(hint: usize) -> Result<usize> {
    hint.max(MIN_CAPACITY)
        .checked_next_power_of_two()
        .ok_or_else(|| ProbeMapError::capacity_overflow(hint))
}

fn allocate_slots(capacity: usize) -> Result<Vec<Slot>> {
    let mut slots = Vec::new();
    slots
        .try_reserve_exact(capacity)
        .map_err(|_| ProbeMapError::out_of_memory(capacity))?;
    slots.resize_with(capacity, Slot::default);
    Ok(slots)
}

impl Default for LinearProbeMap {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for LinearProbeMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl Index<&str> for LinearProbeMap {
    type Output = str;

    /// # Panics
    ///
    /// Panics if the key is not present, like `std::collections::HashMap`.
    fn index(&self, key: &str) -> &str {
        match self.get(key) {
            Some(value) => value,
            None => panic!("key not found: {:?}", key),
        }
    }
}

impl<'a> IntoIterator for &'a LinearProbeMap {
    type Item = (&'a str, &'a str);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
