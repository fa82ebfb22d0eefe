use thiserror::Error;

use crate::{compression::CompressionError, crypto::CryptoError};

/// Unified error covering queue bookkeeping, envelope framing, sealing, and
/// the delegated primitives.
/// - Ergonomic `From<T>` impls enable `?` across modules.
/// - Delegated failures (`Crypto`, `Compression`, `Io`) propagate unchanged.
#[derive(Debug, Error)]
pub enum EnvelopeError {
    /// Input shorter than the minimum required.
    #[error("out of range: need at least {need} bytes, have {have}")]
    OutOfRange { have: usize, need: usize },

    /// Malformed structural field: bad tag, bad reserved byte, bad encoding
    /// name, insufficient key length.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Read request exceeds available bytes.
    #[error("underflow: requested {requested} bytes, {available} available")]
    Underflow { requested: usize, available: usize },

    /// Mutation attempted after finalize, or finalize called twice.
    #[error("overflow: {0}")]
    Overflow(&'static str),

    /// Invalid state-machine transition or premature accessor use.
    #[error("unsupported operation: {0}")]
    UnsupportedOperation(&'static str),

    #[error("invalid algorithm: {0}")]
    InvalidAlgorithm(String),

    #[error("invalid IV: {0}")]
    InvalidIv(String),

    #[error("invalid auth tag: {0}")]
    InvalidAuthTag(String),

    /// Value cannot be represented as interchange text.
    #[error("serialization error: {0}")]
    Serialization(#[source] serde_json::Error),

    /// Interchange text is malformed.
    #[error("parse error: {0}")]
    Parse(#[source] serde_json::Error),

    #[error("crypto error: {0}")]
    Crypto(#[from] CryptoError),

    #[error("compression error: {0}")]
    Compression(#[from] CompressionError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl EnvelopeError {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        EnvelopeError::InvalidArgument(msg.into())
    }

    /// Short stable name of the taxonomy class, for telemetry and logs.
    pub fn kind(&self) -> &'static str {
        use EnvelopeError::*;
        match self {
            OutOfRange { .. }       => "out_of_range",
            InvalidArgument(_)      => "invalid_argument",
            Underflow { .. }        => "underflow",
            Overflow(_)             => "overflow",
            UnsupportedOperation(_) => "unsupported_operation",
            InvalidAlgorithm(_)     => "invalid_algorithm",
            InvalidIv(_)            => "invalid_iv",
            InvalidAuthTag(_)       => "invalid_auth_tag",
            Serialization(_)        => "serialization",
            Parse(_)                => "parse",
            Crypto(_)               => "crypto",
            Compression(_)          => "compression",
            Io(_)                   => "io",
        }
    }
}
