//! compression/mod.rs
//! Compression tag wrapper: `[algorithm tag][payload]`.
//!
//! Tags are fixed across implementations:
//! plain = 0x0A, gzip = 0x0F, deflate = 0x10.
//!
//! - Registry resolves an algorithm to its codec.
//! - The wrapper prefixes / strips the tag byte.

pub mod types;
pub mod registry;
pub mod codecs;
pub mod wrapper;

pub use types::*;
pub use registry::*;
pub use wrapper::*;
