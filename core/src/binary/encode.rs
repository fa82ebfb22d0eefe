// ## 📂 File: `src/binary/encode.rs`
//! Binary envelope encoding.

use serde::Serialize;
use serde_json::Value;

use crate::binary::types::EnvelopeTag;
use crate::constants::envelope::{HEADER_LEN, RESERVED_BYTE};
use crate::types::EnvelopeError;

/// Serialize `value` to JSON and wrap it as `[tag][0x00][text]`.
///
/// # Errors
/// - `Serialization` when the value has no JSON representation
///   (e.g. a map with non-string keys).
pub fn encode<T: Serialize + ?Sized>(value: &T) -> Result<Vec<u8>, EnvelopeError> {
    let value = serde_json::to_value(value).map_err(EnvelopeError::Serialization)?;
    encode_value(&value)
}

/// Encode an already-built JSON value, inferring the tag.
pub fn encode_value(value: &Value) -> Result<Vec<u8>, EnvelopeError> {
    encode_tagged(EnvelopeTag::of(value), value)
}

/// Encode with an explicit tag, for kinds JSON cannot express on its own
/// (bigint, function, symbol, undefined).
pub fn encode_tagged(tag: EnvelopeTag, value: &Value) -> Result<Vec<u8>, EnvelopeError> {
    let text = serde_json::to_vec(value).map_err(EnvelopeError::Serialization)?;

    let mut out = Vec::with_capacity(HEADER_LEN + text.len());
    out.push(tag.as_u8());
    out.push(RESERVED_BYTE);
    out.extend_from_slice(&text);

    tracing::trace!(tag = %tag, bytes = out.len(), "binary envelope encoded");
    Ok(out)
}
