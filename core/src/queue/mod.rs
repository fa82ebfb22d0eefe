//! queue/mod.rs
//! Ordered, length-tracked queue of byte chunks.
//!
//! Responsibilities:
//! - Track chunk order and total length across appends
//! - Serve exact-length reads that span chunk boundaries
//! - Freeze into a single payload on finalize
//!
//! Non-responsibilities:
//! - Chunk sizing policy (see `splitter`)
//! - Cryptography

pub mod byte_queue;

pub use byte_queue::ByteQueue;
