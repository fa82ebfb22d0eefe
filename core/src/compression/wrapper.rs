//! compression/wrapper.rs
//! `[tag][payload]` framing around the registry codecs.

use crate::compression::registry::{create_compressor, create_decompressor};
use crate::compression::types::{CompressionAlgorithm, CompressionError};
use crate::types::EnvelopeError;

/// Compress `payload` and prefix the algorithm tag.
pub fn compress(alg: CompressionAlgorithm, payload: &[u8], level: Option<u32>) -> Result<Vec<u8>, EnvelopeError> {
    let mut out = Vec::with_capacity(1 + payload.len());
    out.push(alg.tag());
    create_compressor(alg, level).compress(payload, &mut out)?;
    tracing::trace!(algorithm = alg.name(), input = payload.len(), output = out.len(), "payload compressed");
    Ok(out)
}

/// Strip the tag and decompress.
///
/// # Errors
/// - `OutOfRange` on an empty buffer.
/// - `InvalidArgument` for a tag outside the registry.
/// - `Compression` when the codec rejects the body.
pub fn decompress(buf: &[u8]) -> Result<(CompressionAlgorithm, Vec<u8>), EnvelopeError> {
    let Some((&tag, body)) = buf.split_first() else {
        return Err(EnvelopeError::OutOfRange { have: 0, need: 1 });
    };
    let alg = CompressionAlgorithm::try_from(tag)
        .map_err(|_| EnvelopeError::invalid_argument(CompressionError::UnknownAlgorithm { tag }.to_string()))?;

    let mut out = Vec::new();
    create_decompressor(alg).decompress(body, &mut out)?;
    Ok((alg, out))
}
