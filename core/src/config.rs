// ## 📂 File: `src/config.rs`

//! Serde-loadable envelope configuration.
//!
//! Every field is optional; `None` resolves to the crate default. Names are
//! the same strings the registries parse (`aes-256-gcm`, `sha512`, ...).

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_CHUNK_SIZE;
use crate::crypto::{CipherAlgorithm, DigestAlg, KdfAlgorithm, KdfOptions, SigningHash};
use crate::compression::CompressionAlgorithm;
use crate::secure::SecureOptions;
use crate::splitter::resolve_max_chunk_size;
use crate::types::EnvelopeError;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EnvelopeConfig {
    /// Upper bound on each emitted chunk.
    /// - `None` → `DEFAULT_CHUNK_SIZE` (64 KiB).
    pub max_chunk_size: Option<usize>,

    /// Cipher name, e.g. `aes-256-gcm`, `xchacha20-poly1305`.
    pub algorithm: Option<String>,

    /// Signature hash name. `None` → `sha512`.
    pub signing_hash: Option<String>,

    /// Algorithm identifier digest name. `None` → `sha256`.
    pub digest: Option<String>,

    /// KDF name (`hkdf-sha256`, `pbkdf2-sha512`, ...).
    pub kdf: Option<String>,

    /// PBKDF2 rounds; ignored for HKDF.
    pub kdf_rounds: Option<u32>,

    /// Hex-encoded KDF salt. `None` → fixed domain salt.
    pub kdf_salt_hex: Option<String>,

    /// Compression wrapper name (`plain`, `gzip`, `deflate`). `None` → no wrapper.
    pub compression: Option<String>,
}

impl EnvelopeConfig {
    pub fn from_json_str(text: &str) -> Result<Self, EnvelopeError> {
        let cfg: Self = serde_json::from_str(text).map_err(EnvelopeError::Parse)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, EnvelopeError> {
        let text = std::fs::read_to_string(path.as_ref())?;
        tracing::debug!(path = %path.as_ref().display(), "loading envelope config");
        Self::from_json_str(&text)
    }

    pub fn validate(&self) -> Result<(), EnvelopeError> {
        resolve_max_chunk_size(self.max_chunk_size)?;
        self.secure_options()?;
        self.compression()?;
        Ok(())
    }

    #[inline]
    pub fn chunk_size(&self) -> usize {
        self.max_chunk_size.unwrap_or(DEFAULT_CHUNK_SIZE)
    }

    pub fn compression(&self) -> Result<Option<CompressionAlgorithm>, EnvelopeError> {
        self.compression.as_deref().map(str::parse::<CompressionAlgorithm>).transpose()
    }

    /// Resolve names into `SecureOptions`. The signing key is never read from config.
    pub fn secure_options(&self) -> Result<SecureOptions, EnvelopeError> {
        let mut opts = SecureOptions::default();

        if let Some(name) = &self.algorithm {
            opts.algorithm = name.parse::<CipherAlgorithm>()?;
        }
        if let Some(name) = &self.signing_hash {
            opts.signing_hash = name.parse::<SigningHash>()?;
        }
        if let Some(name) = &self.digest {
            opts.digest = name.parse::<DigestAlg>()?;
        }
        if let Some(name) = &self.kdf {
            opts.kdf.algorithm = KdfAlgorithm::from_name(name, self.kdf_rounds)
                .ok_or_else(|| EnvelopeError::InvalidAlgorithm(format!("unknown kdf: {name:?}")))?;
        }
        if let Some(salt) = &self.kdf_salt_hex {
            let salt = hex::decode(salt)
                .map_err(|e| EnvelopeError::invalid_argument(format!("kdf_salt_hex: {e}")))?;
            opts.kdf = KdfOptions::new(opts.kdf.algorithm, salt);
        }
        opts.max_chunk_size = Some(self.chunk_size());

        Ok(opts)
    }
}
