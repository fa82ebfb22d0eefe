// ## 📂 File: `src/secure/types.rs`

use std::fmt;

use zeroize::Zeroizing;

use crate::crypto::{CipherAlgorithm, DigestAlg, KdfOptions, KeyMaterial, SigningHash};

/// What the envelope derives its keys from.
#[derive(Clone)]
pub enum Secret {
    /// Run through the configured KDF to produce key‖iv‖tag.
    Password(Zeroizing<Vec<u8>>),
    /// Used as-is; must match the requested algorithm.
    Material(KeyMaterial),
}

impl Secret {
    pub fn password(password: impl AsRef<[u8]>) -> Self {
        Secret::Password(Zeroizing::new(password.as_ref().to_vec()))
    }
}

impl From<KeyMaterial> for Secret {
    fn from(km: KeyMaterial) -> Self {
        Secret::Material(km)
    }
}

impl From<&str> for Secret {
    fn from(password: &str) -> Self {
        Secret::password(password)
    }
}

impl From<&[u8]> for Secret {
    fn from(password: &[u8]) -> Self {
        Secret::password(password)
    }
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Secret::Password(p) => write!(f, "Secret::Password(<{} bytes redacted>)", p.len()),
            Secret::Material(km) => f.debug_tuple("Secret::Material").field(km).finish(),
        }
    }
}

/// Sealing parameters. Both ends must agree on everything except
/// `max_chunk_size`.
#[derive(Clone)]
pub struct SecureOptions {
    pub algorithm: CipherAlgorithm,
    pub signing_hash: SigningHash,
    /// Hash of the algorithm name surfaced as the algorithm identifier.
    pub digest: DigestAlg,
    /// Falls back to the trailing `DEFAULT_SIGNING_KEY_LEN` secret bytes.
    pub signing_key: Option<Zeroizing<Vec<u8>>>,
    pub max_chunk_size: Option<usize>,
    pub kdf: KdfOptions,
}

impl Default for SecureOptions {
    fn default() -> Self {
        Self {
            algorithm: CipherAlgorithm::Aes256Gcm,
            signing_hash: SigningHash::default(),
            digest: DigestAlg::default(),
            signing_key: None,
            max_chunk_size: None,
            kdf: KdfOptions::default(),
        }
    }
}

impl SecureOptions {
    pub fn with_algorithm(mut self, algorithm: CipherAlgorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    pub fn with_signing_key(mut self, key: impl AsRef<[u8]>) -> Self {
        self.signing_key = Some(Zeroizing::new(key.as_ref().to_vec()));
        self
    }

    /// Bounds (`1..=MAX_CHUNK_SIZE`) are checked when `begin` builds the splitter.
    pub fn with_max_chunk_size(mut self, max: usize) -> Self {
        self.max_chunk_size = Some(max);
        self
    }
}

impl fmt::Debug for SecureOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecureOptions")
            .field("algorithm", &self.algorithm)
            .field("signing_hash", &self.signing_hash)
            .field("digest", &self.digest)
            .field("signing_key", &self.signing_key.as_ref().map(|_| "<redacted>"))
            .field("max_chunk_size", &self.max_chunk_size)
            .field("kdf", &self.kdf.algorithm)
            .finish()
    }
}
