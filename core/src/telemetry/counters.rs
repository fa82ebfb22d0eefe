// ### `src/telemetry/counters.rs`

//! telemetry/counters.rs
//! Byte and chunk counts collected while sealing one envelope.
//!
//! Converted into an immutable `TelemetrySnapshot` once the envelope is ready.

use std::ops::AddAssign;

use serde::{Deserialize, Serialize};

#[derive(Default, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TelemetryCounters {
    pub chunks: u64,
    pub bytes_plaintext: u64,
    pub bytes_compressed: u64,
    pub bytes_ciphertext: u64,
    pub bytes_signature: u64,
}

impl TelemetryCounters {
    /// Record the caller's payload before any compression wrapper.
    pub fn add_plaintext(&mut self, len: usize) {
        self.bytes_plaintext += len as u64;
    }

    /// Record the bytes actually sealed. Equals the plaintext length when no
    /// compression wrapper is applied.
    pub fn add_compressed(&mut self, sealed_input_len: usize) {
        self.bytes_compressed += sealed_input_len as u64;
    }

    /// Record the sealed output and how many chunks it was split into.
    pub fn add_ciphertext(&mut self, ct_len: usize, chunks: usize) {
        self.bytes_ciphertext += ct_len as u64;
        self.chunks += chunks as u64;
    }

    pub fn add_signature(&mut self, sig_len: usize) {
        self.bytes_signature += sig_len as u64;
    }

    /// AEAD overhead: ciphertext bytes beyond the sealed input.
    pub fn overhead_bytes(&self) -> u64 {
        self.bytes_ciphertext.saturating_sub(self.bytes_compressed)
    }

    pub fn merge(&mut self, other: &TelemetryCounters) {
        self.chunks += other.chunks;
        self.bytes_plaintext += other.bytes_plaintext;
        self.bytes_compressed += other.bytes_compressed;
        self.bytes_ciphertext += other.bytes_ciphertext;
        self.bytes_signature += other.bytes_signature;
    }
}

impl AddAssign for TelemetryCounters {
    fn add_assign(&mut self, rhs: Self) {
        self.merge(&rhs);
    }
}
