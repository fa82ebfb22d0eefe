//! compression/types.rs
//! Algorithm registry ids, codec traits, module error.

use std::fmt;
use std::str::FromStr;

use num_enum::TryFromPrimitive;

use crate::types::EnvelopeError;
use crate::utils::enum_name_or_hex;

/// Wrapper tag byte. Values are part of the wire format.
#[repr(u8)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, TryFromPrimitive)]
pub enum CompressionAlgorithm {
    #[default]
    Plain   = 0x0A,
    Gzip    = 0x0F,
    Deflate = 0x10,
}

impl CompressionAlgorithm {
    pub const ALL: [CompressionAlgorithm; 3] = [
        CompressionAlgorithm::Plain,
        CompressionAlgorithm::Gzip,
        CompressionAlgorithm::Deflate,
    ];

    /// Name as it appears in `content-encoding`.
    pub const fn name(self) -> &'static str {
        match self {
            CompressionAlgorithm::Plain   => "plain",
            CompressionAlgorithm::Gzip    => "gzip",
            CompressionAlgorithm::Deflate => "deflate",
        }
    }

    #[inline]
    pub const fn tag(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for CompressionAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CompressionAlgorithm {
    type Err = EnvelopeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        CompressionAlgorithm::ALL
            .into_iter()
            .find(|a| a.name() == wanted)
            .ok_or_else(|| EnvelopeError::invalid_argument(format!("unknown compression: {s:?}")))
    }
}

#[derive(Debug)]
pub enum CompressionError {
    UnknownAlgorithm { tag: u8 },
    CodecProcessFailed { codec: &'static str, msg: String },
}

impl CompressionError {
    pub(crate) fn process(codec: &'static str, err: impl fmt::Display) -> Self {
        CompressionError::CodecProcessFailed { codec, msg: err.to_string() }
    }
}

impl fmt::Display for CompressionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use CompressionError::*;
        match self {
            UnknownAlgorithm { tag } =>
                write!(f, "unknown compression tag: {}", enum_name_or_hex::<CompressionAlgorithm>(*tag)),
            CodecProcessFailed { codec, msg } =>
                write!(f, "codec {} process failed: {}", codec, msg),
        }
    }
}

impl std::error::Error for CompressionError {}

pub trait Compressor: Send {
    /// Compress the whole `input`, appending to `out`.
    fn compress(&mut self, input: &[u8], out: &mut Vec<u8>) -> Result<(), CompressionError>;
}

pub trait Decompressor: Send {
    /// Decompress the whole `input`, appending to `out`.
    fn decompress(&mut self, input: &[u8], out: &mut Vec<u8>) -> Result<(), CompressionError>;
}
