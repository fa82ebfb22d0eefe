// ## 📂 File: `src/crypto/key_material.rs`

//! Packed secret buffer with key / iv / tag views derived by offset.
//!
//! Layout (fixed, do not reorder):
//!
//! ```text
//! [0, key_length)                                      key
//! [key_length, key_length + iv_length)                 iv   (None if buffer too short)
//! [key_length + iv_length, ... + tag_length)           tag  (None if buffer too short)
//! ```
//!
//! Default iv / tag lengths come from the algorithm family, so the same
//! buffer length works for every cipher in a family.

use std::fmt;

use zeroize::Zeroizing;

use crate::constants::{DEFAULT_IV_LEN, DEFAULT_TAG_LEN};
use crate::crypto::kdf::{derive_secret, KdfOptions};
use crate::crypto::types::{CipherAlgorithm, KeyUsages};
use crate::types::EnvelopeError;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct KeyMaterialOptions {
    /// Algorithm this material is bound to. `None` leaves it unbound.
    pub algorithm: Option<CipherAlgorithm>,
    /// Defaults from the algorithm family when omitted.
    pub iv_length: Option<usize>,
    /// Defaults from the algorithm family when omitted.
    pub tag_length: Option<usize>,
    pub usages: KeyUsages,
}

impl KeyMaterialOptions {
    pub fn for_algorithm(algorithm: CipherAlgorithm) -> Self {
        Self { algorithm: Some(algorithm), ..Default::default() }
    }
}

#[derive(Clone)]
pub struct KeyMaterial {
    secret: Zeroizing<Vec<u8>>,
    key_length: usize,
    iv_length: usize,
    tag_length: usize,
    algorithm: Option<CipherAlgorithm>,
    usages: KeyUsages,
}

impl KeyMaterial {
    /// Wrap raw secret bytes (already password-derived or otherwise).
    ///
    /// Errors:
    /// - `InvalidArgument` if the secret is shorter than `key_length`.
    pub fn new(
        secret: impl Into<Vec<u8>>,
        key_length: usize,
        options: KeyMaterialOptions,
    ) -> Result<Self, EnvelopeError> {
        let secret = Zeroizing::new(secret.into());
        if secret.len() < key_length {
            return Err(EnvelopeError::invalid_argument(format!(
                "secret too short for key: {} < {}",
                secret.len(),
                key_length
            )));
        }

        let (default_iv, default_tag) = match options.algorithm {
            Some(alg) => (alg.family().default_iv_len(), alg.family().default_tag_len()),
            None => (DEFAULT_IV_LEN, DEFAULT_TAG_LEN),
        };

        Ok(Self {
            secret,
            key_length,
            iv_length: options.iv_length.unwrap_or(default_iv),
            tag_length: options.tag_length.unwrap_or(default_tag),
            algorithm: options.algorithm,
            usages: options.usages,
        })
    }

    /// Derive a full key‖iv‖tag buffer for `algorithm` from a password.
    pub fn derive(
        password: &[u8],
        algorithm: CipherAlgorithm,
        kdf: &KdfOptions,
    ) -> Result<Self, EnvelopeError> {
        let family = algorithm.family();
        let key_length = algorithm.key_len();
        let total = key_length + family.default_iv_len() + family.default_tag_len();

        let secret = derive_secret(password, total, algorithm.name(), kdf)?;
        tracing::trace!(algorithm = algorithm.name(), kdf = kdf.algorithm.name(), bytes = total, "key material derived");

        Self::new(secret.to_vec(), key_length, KeyMaterialOptions::for_algorithm(algorithm))
    }

    /// bytes[0, key_length)
    #[inline]
    pub fn key_slice(&self) -> &[u8] {
        &self.secret[..self.key_length]
    }

    /// bytes[key_length, key_length + iv_length), or `None` if the buffer is too short
    /// or the bounds overflow.
    #[inline]
    pub fn iv_slice(&self) -> Option<&[u8]> {
        let start = self.key_length;
        let end = start.checked_add(self.iv_length)?;
        self.secret.get(start..end)
    }

    /// bytes[key_length + iv_length, ... + tag_length), or `None` if the buffer is too short
    /// or the bounds overflow.
    #[inline]
    pub fn tag_slice(&self) -> Option<&[u8]> {
        let start = self.key_length.checked_add(self.iv_length)?;
        let end = start.checked_add(self.tag_length)?;
        self.secret.get(start..end)
    }

    /// Trailing `n` bytes of the secret.
    ///
    /// Errors:
    /// - `InvalidArgument` if `n` exceeds the secret length.
    pub fn last(&self, n: usize) -> Result<&[u8], EnvelopeError> {
        if n > self.secret.len() {
            return Err(EnvelopeError::invalid_argument(format!(
                "requested {} trailing bytes of a {}-byte secret",
                n,
                self.secret.len()
            )));
        }
        Ok(&self.secret[self.secret.len() - n..])
    }

    #[inline]
    pub fn secret_len(&self) -> usize {
        self.secret.len()
    }

    #[inline]
    pub fn key_length(&self) -> usize {
        self.key_length
    }

    #[inline]
    pub fn iv_length(&self) -> usize {
        self.iv_length
    }

    #[inline]
    pub fn tag_length(&self) -> usize {
        self.tag_length
    }

    #[inline]
    pub fn algorithm(&self) -> Option<CipherAlgorithm> {
        self.algorithm
    }

    #[inline]
    pub fn usages(&self) -> KeyUsages {
        self.usages
    }

    #[inline]
    pub fn allows(&self, usage: KeyUsages) -> bool {
        self.usages.contains(usage)
    }
}

impl fmt::Debug for KeyMaterial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyMaterial")
            .field("secret", &format_args!("<{} bytes redacted>", self.secret.len()))
            .field("key_length", &self.key_length)
            .field("iv_length", &self.iv_length)
            .field("tag_length", &self.tag_length)
            .field("algorithm", &self.algorithm)
            .field("usages", &self.usages)
            .finish()
    }
}
