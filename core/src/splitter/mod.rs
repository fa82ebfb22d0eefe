//! splitter: bounded-size chunk streaming over a finalized payload.
//!
//! The consumer pulls; the source never pushes unsolicited data. Three views
//! over the same cursor:
//! - `Iterator` / `next_chunk` for synchronous consumers
//! - `futures::Stream` for async consumers
//! - `pump` for sink-style consumers that report `Readiness::Full`

pub mod types;
pub mod chunk_splitter;

pub use types::{ChunkSink, PumpStatus, Readiness};
pub use chunk_splitter::{resolve_max_chunk_size, ChunkSplitter};
