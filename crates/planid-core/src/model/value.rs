use crate::hash::{
    CanonicalEncode, HashSink, write_bool, write_bytes, write_i64, write_i128, write_str,
    write_tag, write_u64,
};
use std::fmt::{self, Write as _};

///
/// Value
///
/// Literal operand of a pushed filter. Floating point is deliberately
/// absent: filter sets need total equality and ordering, so readers
/// report fractional literals as `Decimal`.
///

#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Uint(u64),
    Decimal { unscaled: i128, scale: u8 },
    Text(String),
    Bytes(Vec<u8>),
}

impl Value {
    /// Render as a SQL literal: text quoted with `'` doubled, bytes as `X'..'`.
    #[must_use]
    pub fn to_sql_literal(&self) -> String {
        match self {
            Self::Null => "NULL".to_string(),
            Self::Text(text) => quote_sql(text),
            Self::Bytes(bytes) => {
                let mut out = String::with_capacity(bytes.len() * 2 + 3);
                out.push_str("X'");
                for byte in bytes {
                    let _ = write!(out, "{byte:02X}");
                }
                out.push('\'');
                out
            }
            other => other.to_string(),
        }
    }
}

/// Quote a string as a SQL text literal.
pub(crate) fn quote_sql(text: &str) -> String {
    format!("'{}'", text.replace('\'', "''"))
}

fn fmt_decimal(f: &mut fmt::Formatter<'_>, unscaled: i128, scale: u8) -> fmt::Result {
    if scale == 0 {
        return write!(f, "{unscaled}");
    }

    let digits = unscaled.unsigned_abs().to_string();
    let scale = usize::from(scale);
    let sign = if unscaled < 0 { "-" } else { "" };
    if digits.len() > scale {
        let (int_part, frac_part) = digits.split_at(digits.len() - scale);
        write!(f, "{sign}{int_part}.{frac_part}")
    } else {
        write!(f, "{sign}0.{digits:0>scale$}")
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("null"),
            Self::Bool(value) => write!(f, "{value}"),
            Self::Int(value) => write!(f, "{value}"),
            Self::Uint(value) => write!(f, "{value}"),
            Self::Decimal { unscaled, scale } => fmt_decimal(f, *unscaled, *scale),
            Self::Text(text) => f.write_str(text),
            Self::Bytes(bytes) => write!(f, "[{} bytes]", bytes.len()),
        }
    }
}

impl CanonicalEncode for Value {
    fn encode(&self, sink: &mut dyn HashSink) {
        match self {
            Self::Null => write_tag(sink, 0x40),
            Self::Bool(value) => {
                write_tag(sink, 0x41);
                write_bool(sink, *value);
            }
            Self::Int(value) => {
                write_tag(sink, 0x42);
                write_i64(sink, *value);
            }
            Self::Uint(value) => {
                write_tag(sink, 0x43);
                write_u64(sink, *value);
            }
            Self::Decimal { unscaled, scale } => {
                write_tag(sink, 0x44);
                write_i128(sink, *unscaled);
                sink.write(&[*scale]);
            }
            Self::Text(text) => {
                write_tag(sink, 0x45);
                write_str(sink, text);
            }
            Self::Bytes(bytes) => {
                write_tag(sink, 0x46);
                write_bytes(sink, bytes);
            }
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<u64> for Value {
    fn from(value: u64) -> Self {
        Self::Uint(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<Vec<u8>> for Value {
    fn from(value: Vec<u8>) -> Self {
        Self::Bytes(value)
    }
}

///
/// TESTS
///
