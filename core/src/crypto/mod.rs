//! crypto: packed key material and thin wrappers over delegated primitives.
//!
//! Nothing here implements a cipher or a hash; the RustCrypto crates do.
//! This module only fixes the conventions: key‖iv‖tag offsets, which bytes
//! sign, which name maps to which AEAD.

pub mod types;
pub mod key_material;
pub mod kdf;
pub mod aead;
pub mod digest;

pub use types::*;
pub use key_material::*;
pub use kdf::*;
pub use aead::*;
pub use digest::*;
