// ## 📂 File: `src/binary/decode.rs`
//! Binary envelope decoding.
//!
//! Validation order: length, tag, reserved byte, text.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::binary::types::EnvelopeTag;
use crate::constants::envelope::{HEADER_LEN, MIN_ENVELOPE_LEN, RESERVED_BYTE};
use crate::types::EnvelopeError;
use crate::utils::fmt_bytes;

/// Parse `[tag][0x00][text]` into the tag and the JSON value.
///
/// # Errors
/// - `OutOfRange` if the buffer is shorter than 3 bytes.
/// - `InvalidArgument` for an unknown tag or a non-zero reserved byte.
/// - `Parse` if the text is not valid UTF-8 JSON.
pub fn decode(buf: &[u8]) -> Result<(EnvelopeTag, Value), EnvelopeError> {
    let (tag, text) = split_header(buf)?;
    let value = serde_json::from_slice(text).map_err(EnvelopeError::Parse)?;
    Ok((tag, value))
}

/// Like `decode`, deserializing the text straight into `T`.
pub fn decode_as<T: DeserializeOwned>(buf: &[u8]) -> Result<(EnvelopeTag, T), EnvelopeError> {
    let (tag, text) = split_header(buf)?;
    let value = serde_json::from_slice(text).map_err(EnvelopeError::Parse)?;
    Ok((tag, value))
}

fn split_header(buf: &[u8]) -> Result<(EnvelopeTag, &[u8]), EnvelopeError> {
    if buf.len() < MIN_ENVELOPE_LEN {
        return Err(EnvelopeError::OutOfRange { have: buf.len(), need: MIN_ENVELOPE_LEN });
    }

    let tag = EnvelopeTag::try_from(buf[0]).map_err(|_| {
        EnvelopeError::invalid_argument(format!("unknown envelope tag 0x{:02x}", buf[0]))
    })?;

    if buf[1] != RESERVED_BYTE {
        return Err(EnvelopeError::invalid_argument(format!(
            "reserved byte must be 0x00, got {}",
            fmt_bytes(&buf[1..2])
        )));
    }

    Ok((tag, &buf[HEADER_LEN..]))
}
