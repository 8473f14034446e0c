//! Workload documents and replay
//!
//! A workload is a JSON document describing a fixed sequence of map
//! operations, produced by an external generator:
//!
//! ```json
//! {
//!   "name": "mixed_uniform_small",
//!   "size": 3,
//!   "distribution": "uniform",
//!   "operation_weights": {"insert": 0.4, "get": 0.4, "delete": 0.2},
//!   "seed": 46,
//!   "operations": [
//!     {"op": "insert", "key": "key_1", "value": "value_9"},
//!     {"op": "get", "key": "key_1"},
//!     {"op": "delete", "key": "key_1"}
//!   ]
//! }
//! ```
//!
//! Replaying drives a [`LinearProbeMap`] through the operations in order and
//! tallies what happened. The map itself knows nothing of this format.

use crate::error::{ProbeMapError, Result};
use crate::hash_map::LinearProbeMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Key distribution the generator sampled from
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Distribution {
    /// Keys drawn uniformly
    #[default]
    Uniform,
    /// Keys drawn from a Zipf distribution; a few keys dominate
    Zipf,
}

/// Kind of a single operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OpKind {
    /// `insert(key, value)`
    Insert,
    /// `get(key)`
    Get,
    /// `remove(key)`
    Delete,
}

/// One operation of a workload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Operation {
    /// Operation kind
    pub op: OpKind,
    /// Target key
    pub key: String,
    /// Value for inserts; an insert without one stores the empty string
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl Operation {
    /// Insert operation
    pub fn insert<K: Into<String>, V: Into<String>>(key: K, value: V) -> Self {
        Self {
            op: OpKind::Insert,
            key: key.into(),
            value: Some(value.into()),
        }
    }

    /// Lookup operation
    pub fn get<K: Into<String>>(key: K) -> Self {
        Self {
            op: OpKind::Get,
            key: key.into(),
            value: None,
        }
    }

    /// Removal operation
    pub fn delete<K: Into<String>>(key: K) -> Self {
        Self {
            op: OpKind::Delete,
            key: key.into(),
            value: None,
        }
    }
}

/// A complete workload document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workload {
    /// Workload name, e.g. `read_heavy_zipf_medium`
    pub name: String,
    /// Declared number of operations
    #[serde(default)]
    pub size: usize,
    /// Key distribution used by the generator
    #[serde(default)]
    pub distribution: Distribution,
    /// Relative weight of each operation kind used by the generator
    #[serde(default)]
    pub operation_weights: BTreeMap<String, f64>,
    /// Generator seed
    #[serde(default)]
    pub seed: u64,
    /// Operations in replay order
    pub operations: Vec<Operation>,
}

/// Tally of a replay
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplayReport {
    /// Inserts of a key that was absent
    pub inserts: usize,
    /// Inserts that overwrote an existing key
    pub updates: usize,
    /// Lookups that found their key
    pub hits: usize,
    /// Lookups that did not
    pub misses: usize,
    /// Removals of a present key
    pub removals: usize,
    /// Removals of an absent key
    pub absent_removals: usize,
    /// Map length after the last operation
    pub final_len: usize,
}

impl ReplayReport {
    /// Number of operations replayed
    pub fn total_operations(&self) -> usize {
        self.inserts + self.updates + self.hits + self.misses + self.removals + self.absent_removals
    }
}

impl Workload {
    /// Build a workload from a list of operations
    pub fn new<S: Into<String>>(name: S, operations: Vec<Operation>) -> Self {
        Self {
            name: name.into(),
            size: operations.len(),
            distribution: Distribution::default(),
            operation_weights: BTreeMap::new(),
            seed: 0,
            operations,
        }
    }

    /// Parse a workload from JSON text
    pub fn from_json_str(json: &str) -> Result<Self> {
        let workload: Self = serde_json::from_str(json)
            .map_err(|e| ProbeMapError::invalid_data(format!("Failed to parse workload: {}", e)))?;
        workload.validate()?;
        Ok(workload)
    }

    /// Load a workload from a JSON file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    /// Write the workload as pretty-printed JSON
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let serialized = serde_json::to_string_pretty(self).map_err(|e| {
            ProbeMapError::invalid_data(format!("Failed to serialize workload: {}", e))
        })?;
        std::fs::write(path, serialized)?;
        Ok(())
    }

    /// Check the document for values the replay cannot use
    pub fn validate(&self) -> Result<()> {
        if let Some((op, weight)) = self
            .operation_weights
            .iter()
            .find(|(_, w)| !w.is_finite() || **w < 0.0)
        {
            return Err(ProbeMapError::invalid_data(format!(
                "workload {}: weight for {:?} must be a non-negative number, got {}",
                self.name, op, weight
            )));
        }
        if self.size != self.operations.len() {
            log::warn!(
                "workload {} declares size {} but holds {} operations",
                self.name,
                self.size,
                self.operations.len()
            );
        }
        Ok(())
    }

    /// Count operations per kind
    pub fn operation_counts(&self) -> BTreeMap<&'static str, usize> {
        let mut counts = BTreeMap::new();
        for operation in &self.operations {
            let name = match operation.op {
                OpKind::Insert => "insert",
                OpKind::Get => "get",
                OpKind::Delete => "delete",
            };
            *counts.entry(name).or_insert(0) += 1;
        }
        counts
    }

    /// Apply every operation to `map` in order
    ///
    /// Stops at the first insert that fails to grow the map.
    pub fn replay(&self, map: &mut LinearProbeMap) -> Result<ReplayReport> {
        let mut report = ReplayReport::default();

        for operation in &self.operations {
            match operation.op {
                OpKind::Insert => {
                    let value = operation.value.clone().unwrap_or_default();
                    match map.insert(operation.key.as_str(), value)? {
                        Some(_) => report.updates += 1,
                        None => report.inserts += 1,
                    }
                }
                OpKind::Get => match map.get(&operation.key) {
                    Some(_) => report.hits += 1,
                    None => report.misses += 1,
                },
                OpKind::Delete => match map.remove(&operation.key) {
                    Some(_) => report.removals += 1,
                    None => report.absent_removals += 1,
                },
            }
        }

        report.final_len = map.len();
        Ok(report)
    }
}
