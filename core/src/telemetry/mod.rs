//! telemetry/mod.rs
//! Counters, stage timers, and immutable snapshots for envelope sealing.
//!
//! - Counters are plain integers owned by the envelope; no atomics, no locks.
//! - Snapshots are frozen copies, serde-serializable for logs or dashboards.

pub mod counters;
pub mod timers;
pub mod snapshot;

pub use counters::*;
pub use timers::*;
pub use snapshot::*;
