//! Open-addressing hash map engine
//!
//! - `slot`: three-state cells of the backing array
//! - `probe`: the linear probe-sequence search shared by every operation
//! - `linear_probe_map`: [`LinearProbeMap`] with insert, lookup, removal,
//!   resize and clear
//! - `iter`: traversals over live entries

mod iter;
mod linear_probe_map;
mod probe;
mod slot;

pub use iter::{Iter, Keys, Values};
pub use linear_probe_map::{LinearProbeMap, MapStats, MIN_CAPACITY};
