// ## 📂 File: `src/crypto/aead.rs`
//! AEAD dispatch over the supported cipher registry.
//!
//! AES-GCM runs with a 16-byte nonce (the packed IV view is 16 bytes for the
//! AES family). XChaCha20-Poly1305 takes the full 24-byte IV.

use aes_gcm::aead::consts::U16;
use aes_gcm::aead::generic_array::GenericArray;
use aes_gcm::aead::{Aead, KeyInit, Payload};
use aes_gcm::aes::{Aes128, Aes256};
use aes_gcm::AesGcm;
use chacha20poly1305::{XChaCha20Poly1305, XNonce};

use crate::crypto::types::{CipherAlgorithm, CryptoError};

type Aes128Gcm16 = AesGcm<Aes128, U16>;
type Aes256Gcm16 = AesGcm<Aes256, U16>;

/// Concrete AEAD instance keyed for one algorithm.
pub enum AeadImpl {
    Aes128(Aes128Gcm16),
    Aes256(Aes256Gcm16),
    XChaCha(XChaCha20Poly1305),
}

impl AeadImpl {
    pub fn from_algorithm_and_key(alg: CipherAlgorithm, key: &[u8]) -> Result<Self, CryptoError> {
        if key.len() != alg.key_len() {
            return Err(CryptoError::InvalidKeyLen { expected: alg.key_len(), actual: key.len() });
        }
        let bad_key = |_| CryptoError::InvalidKeyLen { expected: alg.key_len(), actual: key.len() };
        Ok(match alg {
            CipherAlgorithm::Aes128Gcm => AeadImpl::Aes128(Aes128Gcm16::new_from_slice(key).map_err(bad_key)?),
            CipherAlgorithm::Aes256Gcm => AeadImpl::Aes256(Aes256Gcm16::new_from_slice(key).map_err(bad_key)?),
            CipherAlgorithm::XChaCha20Poly1305 => {
                AeadImpl::XChaCha(XChaCha20Poly1305::new_from_slice(key).map_err(bad_key)?)
            }
        })
    }

    #[inline]
    pub fn nonce_len(&self) -> usize {
        match self {
            AeadImpl::Aes128(_) | AeadImpl::Aes256(_) => 16,
            AeadImpl::XChaCha(_) => 24,
        }
    }

    #[inline]
    fn check_nonce(&self, nonce: &[u8]) -> Result<(), CryptoError> {
        if nonce.len() != self.nonce_len() {
            return Err(CryptoError::InvalidNonceLen { expected: self.nonce_len(), actual: nonce.len() });
        }
        Ok(())
    }

    /// Returns ciphertext‖tag.
    pub fn seal(&self, nonce: &[u8], aad: &[u8], plaintext: &[u8]) -> Result<Vec<u8>, CryptoError> {
        self.check_nonce(nonce)?;
        let payload = Payload { msg: plaintext, aad };
        let out = match self {
            AeadImpl::Aes128(c) => c.encrypt(GenericArray::from_slice(nonce), payload),
            AeadImpl::Aes256(c) => c.encrypt(GenericArray::from_slice(nonce), payload),
            AeadImpl::XChaCha(c) => c.encrypt(XNonce::from_slice(nonce), payload),
        };
        out.map_err(|_| CryptoError::Failure("AEAD encryption failed".into()))
    }

    /// Verifies the trailing tag and returns plaintext.
    pub fn open(&self, nonce: &[u8], aad: &[u8], ciphertext: &[u8]) -> Result<Vec<u8>, CryptoError> {
        self.check_nonce(nonce)?;
        let payload = Payload { msg: ciphertext, aad };
        let out = match self {
            AeadImpl::Aes128(c) => c.decrypt(GenericArray::from_slice(nonce), payload),
            AeadImpl::Aes256(c) => c.decrypt(GenericArray::from_slice(nonce), payload),
            AeadImpl::XChaCha(c) => c.decrypt(XNonce::from_slice(nonce), payload),
        };
        out.map_err(|_| CryptoError::TagMismatch)
    }
}
