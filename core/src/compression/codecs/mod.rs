//! compression/codecs/mod.rs
//! One-shot codecs behind the `Compressor` / `Decompressor` traits.

pub mod plain;
pub mod gzip;
pub mod deflate;

pub use plain::*;
pub use gzip::*;
pub use deflate::*;
