// ## 📂 File: `src/secure/envelope.rs`

//! One-shot sealing state machine.
//!
//! ```text
//! Unstarted --begin()--> InFlight --ok--> Ready
//!                            |
//!                            +--err--> (stays InFlight)
//! ```
//!
//! Ready-only accessors fail `UnsupportedOperation` in every other state.
//! The plaintext is zeroized and dropped before `Ready` is entered.

use std::fmt;

use zeroize::Zeroizing;

use crate::compression::{compress, CompressionAlgorithm};
use crate::constants::{DEFAULT_SIGNING_KEY_LEN, MIN_IV_LEN};
use crate::crypto::{
    digest, keyed_hash, verify_keyed_hash, AeadImpl, CipherAlgorithm, CryptoError, KeyMaterial,
    KeyUsages, SigningHash,
};
use crate::secure::metadata::TransportMetadata;
use crate::secure::types::{Secret, SecureOptions};
use crate::splitter::ChunkSplitter;
use crate::telemetry::{Stage, TelemetryCounters, TelemetrySnapshot, TelemetryTimer};
use crate::types::EnvelopeError;

enum State {
    Unstarted { payload: Zeroizing<Vec<u8>>, secret: Secret },
    InFlight,
    Ready(Box<Sealed>),
}

struct Sealed {
    signature: Vec<u8>,
    algorithm_id: Vec<u8>,
    transporter: ChunkSplitter,
    byte_size: usize,
    telemetry: TelemetrySnapshot,
}

pub struct SecureEnvelope {
    options: SecureOptions,
    compression: Option<CompressionAlgorithm>,
    counters: TelemetryCounters,
    timer: TelemetryTimer,
    state: State,
}

impl SecureEnvelope {
    pub fn new(payload: impl Into<Vec<u8>>, secret: impl Into<Secret>, options: SecureOptions) -> Self {
        let payload = Zeroizing::new(payload.into());
        let mut counters = TelemetryCounters::default();
        counters.add_plaintext(payload.len());
        counters.add_compressed(payload.len());

        Self {
            options,
            compression: None,
            counters,
            timer: TelemetryTimer::new(),
            state: State::Unstarted { payload, secret: secret.into() },
        }
    }

    /// Wrap `payload` as `[compression tag][compressed]` before sealing.
    /// The receiver reverses it with `compression::decompress` after
    /// `open_sealed`.
    pub fn with_compressed_payload(
        payload: &[u8],
        compression: CompressionAlgorithm,
        secret: impl Into<Secret>,
        options: SecureOptions,
    ) -> Result<Self, EnvelopeError> {
        let mut timer = TelemetryTimer::new();
        let wrapped = timer.time(Stage::Compress, || compress(compression, payload, None))?;

        let mut counters = TelemetryCounters::default();
        counters.add_plaintext(payload.len());
        counters.add_compressed(wrapped.len());

        Ok(Self {
            options,
            compression: Some(compression),
            counters,
            timer,
            state: State::Unstarted { payload: Zeroizing::new(wrapped), secret: secret.into() },
        })
    }

    /// Derive keys, sign, encrypt, and split. Runs exactly once.
    ///
    /// # Errors
    /// - `UnsupportedOperation` if already ready, or a previous attempt failed.
    /// - `InvalidIv` / `InvalidAuthTag` when the key material views are unusable.
    /// - `InvalidAlgorithm` / `InvalidArgument` for mismatched key material.
    pub fn begin(&mut self) -> Result<(), EnvelopeError> {
        let (payload, secret) = match std::mem::replace(&mut self.state, State::InFlight) {
            State::Unstarted { payload, secret } => (payload, secret),
            State::Ready(sealed) => {
                self.state = State::Ready(sealed);
                return Err(EnvelopeError::UnsupportedOperation("begin called twice"));
            }
            State::InFlight => {
                return Err(EnvelopeError::UnsupportedOperation("begin already attempted"));
            }
        };

        match self.seal(payload, secret) {
            Ok(sealed) => {
                tracing::debug!(
                    algorithm = self.options.algorithm.name(),
                    byte_size = sealed.byte_size,
                    chunks = sealed.transporter.chunk_count(),
                    "secure envelope ready"
                );
                self.state = State::Ready(Box::new(sealed));
                Ok(())
            }
            Err(e) => {
                tracing::debug!(kind = e.kind(), error = %e, "secure envelope begin failed");
                Err(e)
            }
        }
    }

    fn seal(&mut self, payload: Zeroizing<Vec<u8>>, secret: Secret) -> Result<Sealed, EnvelopeError> {
        let alg = self.options.algorithm;

        let km = match secret {
            Secret::Password(password) => {
                let kdf = &self.options.kdf;
                self.timer.time(Stage::Derive, || KeyMaterial::derive(&password, alg, kdf))?
            }
            Secret::Material(km) => km,
        };
        check_key_material(&km, alg, KeyUsages::ENCRYPT)?;
        let (nonce, aad) = cipher_inputs(&km, alg)?;

        let signing_key = match &self.options.signing_key {
            Some(key) => key.as_slice(),
            None => km.last(DEFAULT_SIGNING_KEY_LEN)?,
        };
        let hash = self.options.signing_hash;
        let signature = self.timer.time(Stage::Sign, || keyed_hash(hash, signing_key, &payload))?;

        let ciphertext = self.timer.time(Stage::Encrypt, || -> Result<Vec<u8>, CryptoError> {
            AeadImpl::from_algorithm_and_key(alg, km.key_slice())?.seal(nonce, aad, &payload)
        })?;
        drop(payload);

        let byte_size = ciphertext.len();
        let max = self.options.max_chunk_size;
        let transporter = self.timer.time(Stage::Split, || ChunkSplitter::new(ciphertext, max))?;

        let digest_alg = self.options.digest;
        let algorithm_id = self.timer.time(Stage::Digest, || digest(digest_alg, alg.name().as_bytes()));

        self.counters.add_signature(signature.len());
        self.counters.add_ciphertext(byte_size, transporter.chunk_count());
        self.timer.finish();
        let telemetry = TelemetrySnapshot::from(&self.counters, &self.timer);

        Ok(Sealed { signature, algorithm_id, transporter, byte_size, telemetry })
    }

    /// Receiver side: decrypt a reassembled ciphertext produced by `begin`
    /// with the same secret and options.
    pub fn open_sealed(
        ciphertext: &[u8],
        secret: impl Into<Secret>,
        options: &SecureOptions,
    ) -> Result<Zeroizing<Vec<u8>>, EnvelopeError> {
        let alg = options.algorithm;
        let km = match secret.into() {
            Secret::Password(password) => KeyMaterial::derive(&password, alg, &options.kdf)?,
            Secret::Material(km) => km,
        };
        check_key_material(&km, alg, KeyUsages::DECRYPT)?;
        let (nonce, aad) = cipher_inputs(&km, alg)?;

        let plaintext = AeadImpl::from_algorithm_and_key(alg, km.key_slice())?.open(nonce, aad, ciphertext)?;
        Ok(Zeroizing::new(plaintext))
    }

    /// Constant-time check of a signature produced by `begin`.
    pub fn verify_signature(
        payload: &[u8],
        signature: &[u8],
        signing_key: &[u8],
        hash: SigningHash,
    ) -> Result<bool, EnvelopeError> {
        Ok(verify_keyed_hash(hash, signing_key, payload, signature)?)
    }

    #[inline]
    pub fn is_ready(&self) -> bool {
        matches!(self.state, State::Ready(_))
    }

    pub fn options(&self) -> &SecureOptions {
        &self.options
    }

    pub fn compression(&self) -> Option<CompressionAlgorithm> {
        self.compression
    }

    fn sealed(&self) -> Result<&Sealed, EnvelopeError> {
        match &self.state {
            State::Ready(sealed) => Ok(sealed),
            _ => Err(EnvelopeError::UnsupportedOperation("envelope not ready")),
        }
    }

    /// Digest of the algorithm name.
    pub fn algorithm(&self) -> Result<&[u8], EnvelopeError> {
        Ok(&self.sealed()?.algorithm_id)
    }

    pub fn signature(&self) -> Result<&[u8], EnvelopeError> {
        Ok(&self.sealed()?.signature)
    }

    pub fn transporter(&mut self) -> Result<&mut ChunkSplitter, EnvelopeError> {
        match &mut self.state {
            State::Ready(sealed) => Ok(&mut sealed.transporter),
            _ => Err(EnvelopeError::UnsupportedOperation("envelope not ready")),
        }
    }

    pub fn into_transporter(self) -> Result<ChunkSplitter, EnvelopeError> {
        match self.state {
            State::Ready(sealed) => Ok(sealed.transporter),
            _ => Err(EnvelopeError::UnsupportedOperation("envelope not ready")),
        }
    }

    /// Ciphertext length (plaintext + AEAD tag).
    pub fn byte_size(&self) -> Result<usize, EnvelopeError> {
        Ok(self.sealed()?.byte_size)
    }

    pub fn metadata(&self) -> Result<TransportMetadata, EnvelopeError> {
        let sealed = self.sealed()?;
        Ok(TransportMetadata::new(
            sealed.byte_size,
            &sealed.signature,
            &sealed.algorithm_id,
            self.compression.map(CompressionAlgorithm::name),
        ))
    }

    pub fn telemetry(&self) -> Result<&TelemetrySnapshot, EnvelopeError> {
        Ok(&self.sealed()?.telemetry)
    }
}

impl fmt::Debug for SecureEnvelope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = match &self.state {
            State::Unstarted { .. } => "unstarted",
            State::InFlight => "in_flight",
            State::Ready(_) => "ready",
        };
        f.debug_struct("SecureEnvelope")
            .field("state", &state)
            .field("options", &self.options)
            .field("compression", &self.compression)
            .finish()
    }
}

fn check_key_material(km: &KeyMaterial, alg: CipherAlgorithm, usage: KeyUsages) -> Result<(), EnvelopeError> {
    if let Some(bound) = km.algorithm() {
        if bound != alg {
            return Err(EnvelopeError::InvalidAlgorithm(format!(
                "key material bound to {bound}, requested {alg}"
            )));
        }
    }
    if km.key_length() != alg.key_len() {
        return Err(EnvelopeError::invalid_argument(format!(
            "{alg} needs a {}-byte key, key material has {}",
            alg.key_len(),
            km.key_length()
        )));
    }
    if !km.allows(usage) {
        return Err(EnvelopeError::invalid_argument(format!(
            "key material usages {:?} lack {:?}",
            km.usages(),
            usage
        )));
    }
    Ok(())
}

/// Nonce (leading `nonce_len` IV bytes) and associated data (tag view).
fn cipher_inputs(km: &KeyMaterial, alg: CipherAlgorithm) -> Result<(&[u8], &[u8]), EnvelopeError> {
    let iv = km
        .iv_slice()
        .ok_or_else(|| EnvelopeError::InvalidIv("key material has no iv bytes".into()))?;
    if iv.len() < MIN_IV_LEN {
        return Err(EnvelopeError::InvalidIv(format!("iv is {} bytes, need at least {MIN_IV_LEN}", iv.len())));
    }
    if iv.len() < alg.nonce_len() {
        return Err(EnvelopeError::InvalidIv(format!(
            "{alg} needs a {}-byte nonce, iv is {} bytes",
            alg.nonce_len(),
            iv.len()
        )));
    }

    let aad: &[u8] = if alg.is_authenticated() {
        match km.tag_slice() {
            Some(tag) if !tag.is_empty() => tag,
            _ => return Err(EnvelopeError::InvalidAuthTag("key material has no tag bytes".into())),
        }
    } else {
        &[]
    };

    Ok((&iv[..alg.nonce_len()], aad))
}
