//! binary/mod.rs
//! Minimal tagged binary envelope.
//!
//! Layout:
//!
//! ```text
//! byte 0    tag (0x20..=0x2A, see `EnvelopeTag`)
//! byte 1    reserved, always 0x00
//! byte 2..  UTF-8 JSON text of the value
//! ```
//!
//! The tag only describes the value kind; the JSON text is authoritative.

pub mod types;
pub mod encode;
pub mod decode;

pub use types::*;
pub use encode::*;
pub use decode::*;
