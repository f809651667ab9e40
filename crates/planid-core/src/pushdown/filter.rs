//! Flat source filters: the simple pushdown vocabulary, one attribute
//! name against literal operands.

use crate::{
    hash::{CanonicalEncode, HashSink, write_len, write_str, write_tag},
    model::Value,
};
use std::fmt;

///
/// Filter
///
/// `Display` uses the constructor form readers report in explain output,
/// e.g. `GreaterThan(age,5)`.
///

#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Filter {
    EqualTo { attribute: String, value: Value },
    EqualNullSafe { attribute: String, value: Value },
    GreaterThan { attribute: String, value: Value },
    GreaterThanOrEqual { attribute: String, value: Value },
    LessThan { attribute: String, value: Value },
    LessThanOrEqual { attribute: String, value: Value },
    In { attribute: String, values: Vec<Value> },
    IsNull { attribute: String },
    IsNotNull { attribute: String },
    And(Box<Self>, Box<Self>),
    Or(Box<Self>, Box<Self>),
    Not(Box<Self>),
    StringStartsWith { attribute: String, value: String },
    StringEndsWith { attribute: String, value: String },
    StringContains { attribute: String, value: String },
    AlwaysTrue,
    AlwaysFalse,
}

impl Filter {
    #[must_use]
    pub fn eq(attribute: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::EqualTo {
            attribute: attribute.into(),
            value: value.into(),
        }
    }

    #[must_use]
    pub fn gt(attribute: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::GreaterThan {
            attribute: attribute.into(),
            value: value.into(),
        }
    }

    #[must_use]
    pub fn gte(attribute: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::GreaterThanOrEqual {
            attribute: attribute.into(),
            value: value.into(),
        }
    }

    #[must_use]
    pub fn lt(attribute: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::LessThan {
            attribute: attribute.into(),
            value: value.into(),
        }
    }

    #[must_use]
    pub fn lte(attribute: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::LessThanOrEqual {
            attribute: attribute.into(),
            value: value.into(),
        }
    }

    #[must_use]
    pub fn is_in<V>(attribute: impl Into<String>, values: impl IntoIterator<Item = V>) -> Self
    where
        V: Into<Value>,
    {
        Self::In {
            attribute: attribute.into(),
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    #[must_use]
    pub fn is_null(attribute: impl Into<String>) -> Self {
        Self::IsNull {
            attribute: attribute.into(),
        }
    }

    #[must_use]
    pub fn is_not_null(attribute: impl Into<String>) -> Self {
        Self::IsNotNull {
            attribute: attribute.into(),
        }
    }

    #[must_use]
    pub fn and(left: Self, right: Self) -> Self {
        Self::And(Box::new(left), Box::new(right))
    }

    #[must_use]
    pub fn or(left: Self, right: Self) -> Self {
        Self::Or(Box::new(left), Box::new(right))
    }

    #[must_use]
    pub fn not(inner: Self) -> Self {
        Self::Not(Box::new(inner))
    }

    #[must_use]
    pub fn starts_with(attribute: impl Into<String>, value: impl Into<String>) -> Self {
        Self::StringStartsWith {
            attribute: attribute.into(),
            value: value.into(),
        }
    }

    const fn tag(&self) -> u8 {
        match self {
            Self::EqualTo { .. } => 0x50,
            Self::EqualNullSafe { .. } => 0x51,
            Self::GreaterThan { .. } => 0x52,
            Self::GreaterThanOrEqual { .. } => 0x53,
            Self::LessThan { .. } => 0x54,
            Self::LessThanOrEqual { .. } => 0x55,
            Self::In { .. } => 0x56,
            Self::IsNull { .. } => 0x57,
            Self::IsNotNull { .. } => 0x58,
            Self::And(..) => 0x59,
            Self::Or(..) => 0x5a,
            Self::Not(_) => 0x5b,
            Self::StringStartsWith { .. } => 0x5c,
            Self::StringEndsWith { .. } => 0x5d,
            Self::StringContains { .. } => 0x5e,
            Self::AlwaysTrue => 0x5f,
            Self::AlwaysFalse => 0x60,
        }
    }
}

impl CanonicalEncode for Filter {
    fn encode(&self, sink: &mut dyn HashSink) {
        write_tag(sink, self.tag());
        match self {
            Self::EqualTo { attribute, value }
            | Self::EqualNullSafe { attribute, value }
            | Self::GreaterThan { attribute, value }
            | Self::GreaterThanOrEqual { attribute, value }
            | Self::LessThan { attribute, value }
            | Self::LessThanOrEqual { attribute, value } => {
                write_str(sink, attribute);
                value.encode(sink);
            }
            Self::In { attribute, values } => {
                write_str(sink, attribute);
                write_len(sink, values.len());
                for value in values {
                    value.encode(sink);
                }
            }
            Self::IsNull { attribute } | Self::IsNotNull { attribute } => {
                write_str(sink, attribute);
            }
            Self::StringStartsWith { attribute, value }
            | Self::StringEndsWith { attribute, value }
            | Self::StringContains { attribute, value } => {
                write_str(sink, attribute);
                write_str(sink, value);
            }
            Self::And(left, right) | Self::Or(left, right) => {
                left.encode(sink);
                right.encode(sink);
            }
            Self::Not(inner) => inner.encode(sink),
            Self::AlwaysTrue | Self::AlwaysFalse => {}
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EqualTo { attribute, value } => write!(f, "EqualTo({attribute},{value})"),
            Self::EqualNullSafe { attribute, value } => {
                write!(f, "EqualNullSafe({attribute},{value})")
            }
            Self::GreaterThan { attribute, value } => {
                write!(f, "GreaterThan({attribute},{value})")
            }
            Self::GreaterThanOrEqual { attribute, value } => {
                write!(f, "GreaterThanOrEqual({attribute},{value})")
            }
            Self::LessThan { attribute, value } => write!(f, "LessThan({attribute},{value})"),
            Self::LessThanOrEqual { attribute, value } => {
                write!(f, "LessThanOrEqual({attribute},{value})")
            }
            Self::In { attribute, values } => {
                write!(f, "In({attribute}, [")?;
                for (i, value) in values.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{value}")?;
                }
                f.write_str("])")
            }
            Self::IsNull { attribute } => write!(f, "IsNull({attribute})"),
            Self::IsNotNull { attribute } => write!(f, "IsNotNull({attribute})"),
            Self::And(left, right) => write!(f, "And({left},{right})"),
            Self::Or(left, right) => write!(f, "Or({left},{right})"),
            Self::Not(inner) => write!(f, "Not({inner})"),
            Self::StringStartsWith { attribute, value } => {
                write!(f, "StringStartsWith({attribute},{value})")
            }
            Self::StringEndsWith { attribute, value } => {
                write!(f, "StringEndsWith({attribute},{value})")
            }
            Self::StringContains { attribute, value } => {
                write!(f, "StringContains({attribute},{value})")
            }
            Self::AlwaysTrue => f.write_str("AlwaysTrue()"),
            Self::AlwaysFalse => f.write_str("AlwaysFalse()"),
        }
    }
}

///
/// TESTS
///
