//! envelope-core
//!
//! Payload packaging for bounded-size streamed delivery: a tagged binary
//! envelope, optional seal + signature, and a pull-based chunk splitter.
//! No network I/O, no FFI.

#![forbid(unsafe_code)]

// Shared and top level
pub mod constants;
pub mod types;
pub mod utils;
pub mod config;

// Building blocks
pub mod queue;
pub mod splitter;
pub mod binary;
pub mod compression;
pub mod crypto;
pub mod telemetry;

// Orchestration
pub mod secure;

pub use types::EnvelopeError;

// -----------------------------------------------------------------------------
// Prelude (Rust users)
// -----------------------------------------------------------------------------
pub mod prelude {
    pub use crate::binary::{decode, decode_as, encode, encode_tagged, encode_value, EnvelopeTag};
    pub use crate::compression::CompressionAlgorithm;
    pub use crate::config::EnvelopeConfig;
    pub use crate::crypto::{
        CipherAlgorithm, DigestAlg, KdfAlgorithm, KdfOptions, KeyMaterial, KeyMaterialOptions, KeyUsages,
        SigningHash,
    };
    pub use crate::queue::ByteQueue;
    pub use crate::secure::{Secret, SecureEnvelope, SecureOptions, TransportMetadata};
    pub use crate::splitter::{ChunkSink, ChunkSplitter, PumpStatus, Readiness};
    pub use crate::types::EnvelopeError;
}
