//! crypto/digest.rs
//! Keyed signature and unkeyed digest helpers.
//!
//! - `keyed_hash`: HMAC over the chosen hash; the integrity signature.
//! - `digest`: one-shot unkeyed hash; the algorithm identifier.

use hmac::{Hmac, Mac, SimpleHmac};
use sha2::{Digest as _, Sha256, Sha512};
use sha3::{Sha3_256, Sha3_512};
use subtle::ConstantTimeEq;

use crate::crypto::types::{CryptoError, DigestAlg, SigningHash};

/// Internal hashing state.
enum DigestState {
    Sha256(Sha256),
    Sha512(Sha512),
    Blake3(Box<blake3::Hasher>),
}

impl DigestState {
    fn new(alg: DigestAlg) -> Self {
        match alg {
            DigestAlg::Sha256 => DigestState::Sha256(Sha256::new()),
            DigestAlg::Sha512 => DigestState::Sha512(Sha512::new()),
            DigestAlg::Blake3 => DigestState::Blake3(Box::new(blake3::Hasher::new())),
        }
    }

    #[inline]
    fn update(&mut self, data: &[u8]) {
        match self {
            DigestState::Sha256(h) => h.update(data),
            DigestState::Sha512(h) => h.update(data),
            DigestState::Blake3(h) => {
                h.update(data);
            }
        }
    }

    #[inline]
    fn finalize(self) -> Vec<u8> {
        match self {
            DigestState::Sha256(h) => h.finalize().to_vec(),
            DigestState::Sha512(h) => h.finalize().to_vec(),
            DigestState::Blake3(h) => h.finalize().as_bytes().to_vec(),
        }
    }
}

/// One-shot unkeyed digest.
pub fn digest(alg: DigestAlg, data: &[u8]) -> Vec<u8> {
    let mut state = DigestState::new(alg);
    state.update(data);
    state.finalize()
}

/// HMAC(`key`, `data`) under `hash`.
pub fn keyed_hash(hash: SigningHash, key: &[u8], data: &[u8]) -> Result<Vec<u8>, CryptoError> {
    match hash {
        SigningHash::Sha256 => mac_bytes::<Hmac<Sha256>>(key, data),
        SigningHash::Sha512 => mac_bytes::<Hmac<Sha512>>(key, data),
        SigningHash::Sha3_256 => mac_bytes::<SimpleHmac<Sha3_256>>(key, data),
        SigningHash::Sha3_512 => mac_bytes::<SimpleHmac<Sha3_512>>(key, data),
    }
}

/// Constant-time comparison of a recomputed signature against `expected`.
pub fn verify_keyed_hash(
    hash: SigningHash,
    key: &[u8],
    data: &[u8],
    expected: &[u8],
) -> Result<bool, CryptoError> {
    let actual = keyed_hash(hash, key, data)?;
    Ok(actual.ct_eq(expected).into())
}

fn mac_bytes<M: Mac + hmac::digest::KeyInit>(key: &[u8], data: &[u8]) -> Result<Vec<u8>, CryptoError> {
    let mut mac = <M as hmac::digest::KeyInit>::new_from_slice(key)
        .map_err(|_| CryptoError::Failure("HMAC key rejected".into()))?;
    mac.update(data);
    Ok(mac.finalize().into_bytes().to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hmac_sha256_rfc4231_case_2() {
        let out = keyed_hash(SigningHash::Sha256, b"Jefe", b"what do ya want for nothing?").unwrap();
        assert_eq!(
            hex::encode(out),
            "5bdcc146bf60754e6a042426089575c75a003f089d2739839dec58b964ec3843"
        );
    }

    #[test]
    fn output_lengths_match_registry() {
        for h in SigningHash::ALL {
            assert_eq!(keyed_hash(h, b"k", b"data").unwrap().len(), h.output_len());
        }
        assert_eq!(digest(DigestAlg::Sha256, b"").len(), 32);
        assert_eq!(digest(DigestAlg::Sha512, b"").len(), 64);
        assert_eq!(digest(DigestAlg::Blake3, b"").len(), 32);
    }

    #[test]
    fn verify_rejects_tampered_signature() {
        let mut sig = keyed_hash(SigningHash::Sha512, b"key", b"msg").unwrap();
        assert!(verify_keyed_hash(SigningHash::Sha512, b"key", b"msg", &sig).unwrap());
        sig[0] ^= 1;
        assert!(!verify_keyed_hash(SigningHash::Sha512, b"key", b"msg", &sig).unwrap());
    }
}
