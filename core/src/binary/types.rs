// ## 📂 File: `src/binary/types.rs`

use std::fmt;

use num_enum::TryFromPrimitive;
use serde_json::Value;

/// Kind of the value carried by a binary envelope.
///
/// Stable wire ids (`constants::tag_ids`); never renumber.
#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, TryFromPrimitive)]
pub enum EnvelopeTag {
    String    = 0x20,
    Integer   = 0x21,
    Float     = 0x22,
    Boolean   = 0x23,
    BigInt    = 0x24,
    Object    = 0x25,
    Array     = 0x26,
    Function  = 0x27,
    Symbol    = 0x28,
    Undefined = 0x29,
    Null      = 0x2A,
}

impl EnvelopeTag {
    /// Tag inferred from a JSON value. Integral numbers map to `Integer`,
    /// everything else numeric to `Float`.
    pub fn of(value: &Value) -> Self {
        match value {
            Value::String(_) => EnvelopeTag::String,
            Value::Number(n) if n.is_i64() || n.is_u64() => EnvelopeTag::Integer,
            Value::Number(_) => EnvelopeTag::Float,
            Value::Bool(_) => EnvelopeTag::Boolean,
            Value::Object(_) => EnvelopeTag::Object,
            Value::Array(_) => EnvelopeTag::Array,
            Value::Null => EnvelopeTag::Null,
        }
    }

    #[inline]
    pub const fn as_u8(self) -> u8 {
        self as u8
    }

    pub const fn name(self) -> &'static str {
        match self {
            EnvelopeTag::String    => "string",
            EnvelopeTag::Integer   => "integer",
            EnvelopeTag::Float     => "float",
            EnvelopeTag::Boolean   => "boolean",
            EnvelopeTag::BigInt    => "bigint",
            EnvelopeTag::Object    => "object",
            EnvelopeTag::Array     => "array",
            EnvelopeTag::Function  => "function",
            EnvelopeTag::Symbol    => "symbol",
            EnvelopeTag::Undefined => "undefined",
            EnvelopeTag::Null      => "null",
        }
    }
}

impl fmt::Display for EnvelopeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::tag_ids;

    #[test]
    fn tags_fill_reserved_range() {
        let all: Vec<u8> = (tag_ids::FIRST..=tag_ids::LAST).collect();
        assert_eq!(all.len(), 11);
        for raw in all {
            assert!(EnvelopeTag::try_from(raw).is_ok(), "0x{raw:02x}");
        }
        assert!(EnvelopeTag::try_from(tag_ids::FIRST - 1).is_err());
        assert!(EnvelopeTag::try_from(tag_ids::LAST + 1).is_err());
        assert_eq!(EnvelopeTag::Undefined.as_u8(), tag_ids::UNDEFINED);
    }
}
