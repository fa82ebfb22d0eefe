/// Defaults when Option<T> is None
pub const DEFAULT_CHUNK_SIZE: usize = 64 * 1024; // 64 KB

/// Max chunk size sanity bound (32 MiB).
pub const MAX_CHUNK_SIZE: usize = 32 * 1024 * 1024;

/// Minimum IV length accepted by the sealing step (bytes).
pub const MIN_IV_LEN: usize = 16;

/// Default IV / tag lengths when KeyMaterial options omit them.
pub const DEFAULT_IV_LEN: usize = 16;
pub const DEFAULT_TAG_LEN: usize = 16;

/// XChaCha family nonce length.
pub const XCHACHA_IV_LEN: usize = 24;

/// Trailing secret bytes used as the signing key when none is supplied.
/// Compatibility convention only; carries no cryptographic rationale.
pub const DEFAULT_SIGNING_KEY_LEN: usize = 14;

/// Domain salt for KDFs when the caller does not provide one.
pub const DEFAULT_KDF_SALT: &[u8] = b"envelope-core/kdf/v1";

/// Default PBKDF2 rounds.
pub const DEFAULT_PBKDF2_ROUNDS: u32 = 100_000;

/// Binary envelope layout.
pub mod envelope {
    /// `[tag][reserved][text...]`; text must hold at least one byte.
    pub const MIN_ENVELOPE_LEN: usize = 3;
    pub const RESERVED_BYTE: u8 = 0x00;
    pub const HEADER_LEN: usize = 2;
}

/// Envelope tag registry (reserved range 0x20..=0x2A).
pub mod tag_ids {
    pub const STRING: u8    = 0x20;
    pub const INTEGER: u8   = 0x21;
    pub const FLOAT: u8     = 0x22;
    pub const BOOLEAN: u8   = 0x23;
    pub const BIGINT: u8    = 0x24;
    pub const OBJECT: u8    = 0x25;
    pub const ARRAY: u8     = 0x26;
    pub const FUNCTION: u8  = 0x27;
    pub const SYMBOL: u8    = 0x28;
    pub const UNDEFINED: u8 = 0x29;
    pub const NULL: u8      = 0x2A;

    pub const FIRST: u8 = STRING;
    pub const LAST: u8  = NULL;
}

/// Compression wrapper tags. Must match exactly across implementations.
pub mod compression_ids {
    pub const PLAIN: u8   = 0x0A;
    pub const GZIP: u8    = 0x0F;
    pub const DEFLATE: u8 = 0x10;
}

/// Transport header names surfaced by `TransportMetadata::headers`.
pub mod header_names {
    pub const CONTENT_LENGTH: &str   = "content-length";
    pub const SIGNATURE: &str        = "x-envelope-signature";
    pub const ALGORITHM: &str        = "x-envelope-algorithm";
    pub const CONTENT_ENCODING: &str = "content-encoding";
}

/// Default gzip / deflate level (balanced).
pub const DEFAULT_COMPRESSION_LEVEL: u32 = 6;
