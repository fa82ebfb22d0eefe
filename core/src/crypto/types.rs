// ## 📂 File: `src/crypto/types.rs`

use std::fmt;
use std::str::FromStr;

use num_enum::TryFromPrimitive;

use crate::constants::{DEFAULT_IV_LEN, DEFAULT_TAG_LEN, XCHACHA_IV_LEN};
use crate::types::EnvelopeError;

/// Stable key lengths.
pub const KEY_LEN_16: usize = 16;
pub const KEY_LEN_32: usize = 32;

/// Fixed AEAD tag length appended to every ciphertext (bytes).
pub const AEAD_TAG_LEN: usize = 16;

/// Symmetric cipher registry.
///
/// Every supported mode is authenticated; the numeric ids are stable and may
/// appear in external metadata.
#[repr(u16)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, TryFromPrimitive)]
pub enum CipherAlgorithm {
    Aes128Gcm         = 0x0101,
    Aes256Gcm         = 0x0102,
    XChaCha20Poly1305 = 0x0201,
}

/// Algorithm family; drives default IV / tag lengths.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CipherFamily {
    Aes,
    ChaCha,
}

impl CipherAlgorithm {
    pub const ALL: [CipherAlgorithm; 3] = [
        CipherAlgorithm::Aes128Gcm,
        CipherAlgorithm::Aes256Gcm,
        CipherAlgorithm::XChaCha20Poly1305,
    ];

    /// Canonical lowercase name; this string is what the algorithm identifier hashes.
    pub const fn name(self) -> &'static str {
        match self {
            CipherAlgorithm::Aes128Gcm         => "aes-128-gcm",
            CipherAlgorithm::Aes256Gcm         => "aes-256-gcm",
            CipherAlgorithm::XChaCha20Poly1305 => "xchacha20-poly1305",
        }
    }

    pub const fn family(self) -> CipherFamily {
        match self {
            CipherAlgorithm::Aes128Gcm | CipherAlgorithm::Aes256Gcm => CipherFamily::Aes,
            CipherAlgorithm::XChaCha20Poly1305 => CipherFamily::ChaCha,
        }
    }

    pub const fn key_len(self) -> usize {
        match self {
            CipherAlgorithm::Aes128Gcm => KEY_LEN_16,
            CipherAlgorithm::Aes256Gcm | CipherAlgorithm::XChaCha20Poly1305 => KEY_LEN_32,
        }
    }

    /// Nonce length the primitive consumes; taken from the front of the IV view.
    pub const fn nonce_len(self) -> usize {
        match self.family() {
            CipherFamily::Aes => DEFAULT_IV_LEN,
            CipherFamily::ChaCha => XCHACHA_IV_LEN,
        }
    }

    pub const fn is_authenticated(self) -> bool {
        true
    }
}

impl CipherFamily {
    pub const fn default_iv_len(self) -> usize {
        match self {
            CipherFamily::Aes => DEFAULT_IV_LEN,
            CipherFamily::ChaCha => XCHACHA_IV_LEN,
        }
    }

    pub const fn default_tag_len(self) -> usize {
        DEFAULT_TAG_LEN
    }
}

impl fmt::Display for CipherAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CipherAlgorithm {
    type Err = EnvelopeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        CipherAlgorithm::ALL
            .into_iter()
            .find(|a| a.name() == wanted)
            .ok_or_else(|| EnvelopeError::InvalidAlgorithm(format!("unknown cipher algorithm: {s:?}")))
    }
}

/// Keyed-hash choices for the integrity signature.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum SigningHash {
    Sha256,
    #[default]
    Sha512,
    Sha3_256,
    Sha3_512,
}

impl SigningHash {
    pub const ALL: [SigningHash; 4] = [
        SigningHash::Sha256,
        SigningHash::Sha512,
        SigningHash::Sha3_256,
        SigningHash::Sha3_512,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            SigningHash::Sha256   => "sha256",
            SigningHash::Sha512   => "sha512",
            SigningHash::Sha3_256 => "sha3-256",
            SigningHash::Sha3_512 => "sha3-512",
        }
    }

    pub const fn output_len(self) -> usize {
        match self {
            SigningHash::Sha256 | SigningHash::Sha3_256 => 32,
            SigningHash::Sha512 | SigningHash::Sha3_512 => 64,
        }
    }
}

impl FromStr for SigningHash {
    type Err = EnvelopeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        SigningHash::ALL
            .into_iter()
            .find(|h| h.name() == wanted)
            .ok_or_else(|| EnvelopeError::InvalidAlgorithm(format!("unknown signing hash: {s:?}")))
    }
}

/// Unkeyed digest used for the algorithm identifier.
#[repr(u16)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, TryFromPrimitive)]
pub enum DigestAlg {
    #[default]
    Sha256 = 0x0001,
    Sha512 = 0x0002,
    Blake3 = 0x0003, // UNKEYED Blake3
}

impl DigestAlg {
    pub const fn name(self) -> &'static str {
        match self {
            DigestAlg::Sha256 => "sha256",
            DigestAlg::Sha512 => "sha512",
            DigestAlg::Blake3 => "blake3",
        }
    }
}

impl FromStr for DigestAlg {
    type Err = EnvelopeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sha256" => Ok(DigestAlg::Sha256),
            "sha512" => Ok(DigestAlg::Sha512),
            "blake3" => Ok(DigestAlg::Blake3),
            _ => Err(EnvelopeError::InvalidAlgorithm(format!("unknown digest: {s:?}"))),
        }
    }
}

bitflags::bitflags! {
    /// Declared usages of a KeyMaterial.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct KeyUsages: u8 {
        const ENCRYPT = 0b0000_0001;
        const DECRYPT = 0b0000_0010;
        const SIGN    = 0b0000_0100;
        const VERIFY  = 0b0000_1000;
    }
}

impl Default for KeyUsages {
    fn default() -> Self {
        KeyUsages::ENCRYPT | KeyUsages::DECRYPT
    }
}

#[derive(Debug)]
pub enum CryptoError {
    /// Invalid key length provided to cipher.
    InvalidKeyLen { expected: usize, actual: usize },

    /// Nonce length mismatch for the selected cipher.
    InvalidNonceLen { expected: usize, actual: usize },

    /// AEAD tag mismatch (authentication failure).
    TagMismatch,

    /// General derivation or runtime error with context.
    Failure(String),
}

impl fmt::Display for CryptoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use CryptoError::*;
        match self {
            InvalidKeyLen { expected, actual } =>
                write!(f, "invalid key length: expected={}, actual={}", expected, actual),
            InvalidNonceLen { expected, actual } =>
                write!(f, "invalid nonce length: expected={}, actual={}", expected, actual),
            TagMismatch =>
                write!(f, "AEAD tag mismatch"),
            Failure(msg) =>
                write!(f, "crypto failure: {}", msg),
        }
    }
}

impl std::error::Error for CryptoError {}
