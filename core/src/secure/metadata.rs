// ## 📂 File: `src/secure/metadata.rs`
//! Advisory transport values for a collaborator (HTTP responder, socket
//! framer). Nothing here performs I/O.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::{Deserialize, Serialize};

use crate::constants::header_names;
use crate::types::EnvelopeError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransportMetadata {
    /// Ciphertext length; equals the splitter byte size.
    pub content_length: usize,
    /// Base64 (standard alphabet) of the keyed-hash signature.
    pub signature: String,
    /// Base64 of the algorithm-name digest.
    pub algorithm: String,
    /// Compression name when the payload went through the tag wrapper.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compression: Option<String>,
}

impl TransportMetadata {
    pub fn new(content_length: usize, signature: &[u8], algorithm_id: &[u8], compression: Option<&str>) -> Self {
        Self {
            content_length,
            signature: STANDARD.encode(signature),
            algorithm: STANDARD.encode(algorithm_id),
            compression: compression.map(str::to_owned),
        }
    }

    /// `(name, value)` pairs in a fixed order; `content-encoding` only when compressed.
    pub fn headers(&self) -> Vec<(&'static str, String)> {
        let mut out = vec![
            (header_names::CONTENT_LENGTH, self.content_length.to_string()),
            (header_names::SIGNATURE, self.signature.clone()),
            (header_names::ALGORITHM, self.algorithm.clone()),
        ];
        if let Some(c) = &self.compression {
            out.push((header_names::CONTENT_ENCODING, c.clone()));
        }
        out
    }

    pub fn signature_bytes(&self) -> Result<Vec<u8>, EnvelopeError> {
        decode_b64(&self.signature, "signature")
    }

    pub fn algorithm_bytes(&self) -> Result<Vec<u8>, EnvelopeError> {
        decode_b64(&self.algorithm, "algorithm")
    }
}

fn decode_b64(text: &str, field: &str) -> Result<Vec<u8>, EnvelopeError> {
    STANDARD
        .decode(text)
        .map_err(|e| EnvelopeError::invalid_argument(format!("bad base64 in {field}: {e}")))
}
