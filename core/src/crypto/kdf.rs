// ## src/crypto/kdf.rs

//! crypto/kdf.rs
//! Password → packed key‖iv‖tag bytes.
//!
//! Design:
//! - One derivation call produces the whole KeyMaterial buffer, so the iv and
//!   tag views come from the same secret as the key.
//! - HKDF (default) binds the cipher name through `info`; PBKDF2 is offered for
//!   low-entropy passwords.
//!
//! Security notes:
//! - The default salt is a fixed domain constant so both ends derive the same
//!   bytes without exchanging anything. Supply a per-payload salt when the
//!   receiver can learn it out of band.

use hkdf::Hkdf;
use sha2::{Sha256, Sha512};
use zeroize::Zeroizing;

use crate::constants::{DEFAULT_KDF_SALT, DEFAULT_PBKDF2_ROUNDS};
use crate::crypto::types::CryptoError;

const HKDF_INFO_PREFIX: &[u8] = b"envelope-core|key-material|";

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum KdfAlgorithm {
    HkdfSha256,
    HkdfSha512,
    Pbkdf2Sha256 { rounds: u32 },
    Pbkdf2Sha512 { rounds: u32 },
}

impl Default for KdfAlgorithm {
    fn default() -> Self {
        KdfAlgorithm::HkdfSha256
    }
}

impl KdfAlgorithm {
    /// Parse `hkdf-sha256`, `hkdf-sha512`, `pbkdf2-sha256`, `pbkdf2-sha512`.
    /// `rounds` only matters for PBKDF2 and defaults to `DEFAULT_PBKDF2_ROUNDS`.
    pub fn from_name(name: &str, rounds: Option<u32>) -> Option<Self> {
        let rounds = rounds.unwrap_or(DEFAULT_PBKDF2_ROUNDS);
        match name.trim().to_ascii_lowercase().as_str() {
            "hkdf-sha256" => Some(KdfAlgorithm::HkdfSha256),
            "hkdf-sha512" => Some(KdfAlgorithm::HkdfSha512),
            "pbkdf2-sha256" => Some(KdfAlgorithm::Pbkdf2Sha256 { rounds }),
            "pbkdf2-sha512" => Some(KdfAlgorithm::Pbkdf2Sha512 { rounds }),
            _ => None,
        }
    }

    pub const fn name(&self) -> &'static str {
        match self {
            KdfAlgorithm::HkdfSha256 => "hkdf-sha256",
            KdfAlgorithm::HkdfSha512 => "hkdf-sha512",
            KdfAlgorithm::Pbkdf2Sha256 { .. } => "pbkdf2-sha256",
            KdfAlgorithm::Pbkdf2Sha512 { .. } => "pbkdf2-sha512",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KdfOptions {
    pub algorithm: KdfAlgorithm,
    pub salt: Vec<u8>,
}

impl Default for KdfOptions {
    fn default() -> Self {
        Self {
            algorithm: KdfAlgorithm::default(),
            salt: DEFAULT_KDF_SALT.to_vec(),
        }
    }
}

impl KdfOptions {
    pub fn new(algorithm: KdfAlgorithm, salt: impl Into<Vec<u8>>) -> Self {
        Self { algorithm, salt: salt.into() }
    }

    /// Fresh random 16-byte salt. The caller must carry it to the receiver.
    pub fn with_random_salt(algorithm: KdfAlgorithm) -> Self {
        use rand::RngCore;
        let mut salt = vec![0u8; 16];
        rand::thread_rng().fill_bytes(&mut salt);
        Self { algorithm, salt }
    }
}

/// Summary: Derive exactly `out_len` secret bytes from `password`.
/// - `context` (the cipher name) is bound into HKDF `info`.
///
/// Errors:
/// - Empty salt, zero PBKDF2 rounds, or an HKDF length the PRF cannot expand.
pub fn derive_secret(
    password: &[u8],
    out_len: usize,
    context: &str,
    opts: &KdfOptions,
) -> Result<Zeroizing<Vec<u8>>, CryptoError> {
    if opts.salt.is_empty() {
        return Err(CryptoError::Failure("KDF salt must not be empty".into()));
    }

    let mut out = Zeroizing::new(vec![0u8; out_len]);

    match opts.algorithm {
        KdfAlgorithm::HkdfSha256 => {
            let info = build_info(context);
            let hk = Hkdf::<Sha256>::new(Some(&opts.salt), password);
            hk.expand(&info, &mut out)
                .map_err(|_| CryptoError::Failure("HKDF expand failed (SHA-256)".into()))?;
        }
        KdfAlgorithm::HkdfSha512 => {
            let info = build_info(context);
            let hk = Hkdf::<Sha512>::new(Some(&opts.salt), password);
            hk.expand(&info, &mut out)
                .map_err(|_| CryptoError::Failure("HKDF expand failed (SHA-512)".into()))?;
        }
        KdfAlgorithm::Pbkdf2Sha256 { rounds } => {
            check_rounds(rounds)?;
            pbkdf2::pbkdf2_hmac::<Sha256>(password, &opts.salt, rounds, &mut out);
        }
        KdfAlgorithm::Pbkdf2Sha512 { rounds } => {
            check_rounds(rounds)?;
            pbkdf2::pbkdf2_hmac::<Sha512>(password, &opts.salt, rounds, &mut out);
        }
    }

    Ok(out)
}

#[inline]
fn build_info(context: &str) -> Vec<u8> {
    let mut info = Vec::with_capacity(HKDF_INFO_PREFIX.len() + context.len());
    info.extend_from_slice(HKDF_INFO_PREFIX);
    info.extend_from_slice(context.as_bytes());
    info
}

#[inline]
fn check_rounds(rounds: u32) -> Result<(), CryptoError> {
    if rounds == 0 {
        return Err(CryptoError::Failure("PBKDF2 rounds must be non-zero".into()));
    }
    Ok(())
}
