//! secure/mod.rs
//! Encrypt-then-sign-then-chunk orchestration.
//!
//! Sender: `SecureEnvelope::new` → `begin` → pull chunks from `transporter`.
//! Receiver: reassemble chunks → `SecureEnvelope::open_sealed` →
//! `SecureEnvelope::verify_signature`.

pub mod types;
pub mod metadata;
pub mod envelope;

pub use types::*;
pub use metadata::*;
pub use envelope::*;
