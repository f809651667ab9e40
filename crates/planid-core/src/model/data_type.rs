use crate::hash::{CanonicalEncode, HashSink, write_tag};
use std::fmt;

///
/// DataType
///

#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum DataType {
    Boolean,
    Int32,
    Int64,
    UInt64,
    Float64,
    Decimal { precision: u8, scale: u8 },
    Utf8,
    Binary,
    Date,
    Timestamp,
}

impl DataType {
    const fn tag(self) -> u8 {
        match self {
            Self::Boolean => 0x01,
            Self::Int32 => 0x02,
            Self::Int64 => 0x03,
            Self::UInt64 => 0x04,
            Self::Float64 => 0x05,
            Self::Decimal { .. } => 0x06,
            Self::Utf8 => 0x07,
            Self::Binary => 0x08,
            Self::Date => 0x09,
            Self::Timestamp => 0x0a,
        }
    }
}

impl CanonicalEncode for DataType {
    fn encode(&self, sink: &mut dyn HashSink) {
        write_tag(sink, self.tag());
        if let Self::Decimal { precision, scale } = self {
            sink.write(&[*precision, *scale]);
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Boolean => f.write_str("boolean"),
            Self::Int32 => f.write_str("int"),
            Self::Int64 => f.write_str("bigint"),
            Self::UInt64 => f.write_str("ubigint"),
            Self::Float64 => f.write_str("double"),
            Self::Decimal { precision, scale } => write!(f, "decimal({precision},{scale})"),
            Self::Utf8 => f.write_str("string"),
            Self::Binary => f.write_str("binary"),
            Self::Date => f.write_str("date"),
            Self::Timestamp => f.write_str("timestamp"),
        }
    }
}
