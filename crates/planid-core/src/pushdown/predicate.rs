//! Structured predicates: the richer pushdown vocabulary, a named operator
//! over child expressions, rendered back as SQL text.

use crate::{
    hash::{CanonicalEncode, HashSink, write_len, write_str, write_tag},
    model::{Value, value::quote_sql},
};
use derive_more::Deref;
use std::fmt;

///
/// FieldRef
///
/// Nested column reference such as `address.city`.
///

#[derive(Clone, Debug, Deref, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct FieldRef(Vec<String>);

impl FieldRef {
    #[must_use]
    pub fn new(parts: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self(parts.into_iter().map(Into::into).collect())
    }

    /// Split a dotted path.
    #[must_use]
    pub fn parse(path: &str) -> Self {
        Self::new(path.split('.'))
    }
}

fn is_plain_identifier(part: &str) -> bool {
    let mut chars = part.chars();
    chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

impl fmt::Display for FieldRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, part) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            if is_plain_identifier(part) {
                f.write_str(part)?;
            } else {
                write!(f, "`{}`", part.replace('`', "``"))?;
            }
        }
        Ok(())
    }
}

impl From<&str> for FieldRef {
    fn from(path: &str) -> Self {
        Self::parse(path)
    }
}

///
/// Expression
///

#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Expression {
    Column(FieldRef),
    Literal(Value),
    Predicate(Box<Predicate>),
}

impl Expression {
    #[must_use]
    pub fn column(path: &str) -> Self {
        Self::Column(FieldRef::parse(path))
    }

    #[must_use]
    pub fn literal(value: impl Into<Value>) -> Self {
        Self::Literal(value.into())
    }
}

impl CanonicalEncode for Expression {
    fn encode(&self, sink: &mut dyn HashSink) {
        match self {
            Self::Column(field) => {
                write_tag(sink, 0x70);
                write_len(sink, field.len());
                for part in field.iter() {
                    write_str(sink, part);
                }
            }
            Self::Literal(value) => {
                write_tag(sink, 0x71);
                value.encode(sink);
            }
            Self::Predicate(predicate) => {
                write_tag(sink, 0x72);
                predicate.encode(sink);
            }
        }
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Column(field) => write!(f, "{field}"),
            Self::Literal(value) => f.write_str(&value.to_sql_literal()),
            Self::Predicate(predicate) => write!(f, "{predicate}"),
        }
    }
}

///
/// PredicateOp
///

#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum PredicateOp {
    Eq,
    NullSafeEq,
    Ne,
    Lt,
    Lte,
    Gt,
    Gte,
    In,
    IsNull,
    IsNotNull,
    StartsWith,
    EndsWith,
    Contains,
    And,
    Or,
    Not,
    AlwaysTrue,
    AlwaysFalse,
}

impl PredicateOp {
    /// Canonical operator name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Eq => "=",
            Self::NullSafeEq => "<=>",
            Self::Ne => "<>",
            Self::Lt => "<",
            Self::Lte => "<=",
            Self::Gt => ">",
            Self::Gte => ">=",
            Self::In => "IN",
            Self::IsNull => "IS_NULL",
            Self::IsNotNull => "IS_NOT_NULL",
            Self::StartsWith => "STARTS_WITH",
            Self::EndsWith => "ENDS_WITH",
            Self::Contains => "CONTAINS",
            Self::And => "AND",
            Self::Or => "OR",
            Self::Not => "NOT",
            Self::AlwaysTrue => "ALWAYS_TRUE",
            Self::AlwaysFalse => "ALWAYS_FALSE",
        }
    }

    const fn tag(self) -> u8 {
        match self {
            Self::Eq => 0x80,
            Self::NullSafeEq => 0x81,
            Self::Ne => 0x82,
            Self::Lt => 0x83,
            Self::Lte => 0x84,
            Self::Gt => 0x85,
            Self::Gte => 0x86,
            Self::In => 0x87,
            Self::IsNull => 0x88,
            Self::IsNotNull => 0x89,
            Self::StartsWith => 0x8a,
            Self::EndsWith => 0x8b,
            Self::Contains => 0x8c,
            Self::And => 0x8d,
            Self::Or => 0x8e,
            Self::Not => 0x8f,
            Self::AlwaysTrue => 0x90,
            Self::AlwaysFalse => 0x91,
        }
    }

    const fn is_comparison(self) -> bool {
        matches!(
            self,
            Self::Eq | Self::NullSafeEq | Self::Ne | Self::Lt | Self::Lte | Self::Gt | Self::Gte
        )
    }
}

///
/// Predicate
///
/// Operator plus ordered children. Malformed arities still render, using
/// the generic `NAME(child, ...)` form.
///

#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Predicate {
    pub op: PredicateOp,
    pub children: Vec<Expression>,
}

impl Predicate {
    #[must_use]
    pub const fn new(op: PredicateOp, children: Vec<Expression>) -> Self {
        Self { op, children }
    }

    #[must_use]
    pub fn compare(op: PredicateOp, column: &str, value: impl Into<Value>) -> Self {
        Self::new(
            op,
            vec![Expression::column(column), Expression::literal(value)],
        )
    }

    #[must_use]
    pub fn eq(column: &str, value: impl Into<Value>) -> Self {
        Self::compare(PredicateOp::Eq, column, value)
    }

    #[must_use]
    pub fn gt(column: &str, value: impl Into<Value>) -> Self {
        Self::compare(PredicateOp::Gt, column, value)
    }

    #[must_use]
    pub fn lt(column: &str, value: impl Into<Value>) -> Self {
        Self::compare(PredicateOp::Lt, column, value)
    }

    #[must_use]
    pub fn is_null(column: &str) -> Self {
        Self::new(PredicateOp::IsNull, vec![Expression::column(column)])
    }

    #[must_use]
    pub fn is_not_null(column: &str) -> Self {
        Self::new(PredicateOp::IsNotNull, vec![Expression::column(column)])
    }

    #[must_use]
    pub fn is_in<V>(column: &str, values: impl IntoIterator<Item = V>) -> Self
    where
        V: Into<Value>,
    {
        let mut children = vec![Expression::column(column)];
        children.extend(values.into_iter().map(Expression::literal));

        Self::new(PredicateOp::In, children)
    }

    #[must_use]
    pub fn starts_with(column: &str, prefix: &str) -> Self {
        Self::compare(PredicateOp::StartsWith, column, prefix)
    }

    #[must_use]
    pub fn and(left: Self, right: Self) -> Self {
        Self::new(
            PredicateOp::And,
            vec![
                Expression::Predicate(Box::new(left)),
                Expression::Predicate(Box::new(right)),
            ],
        )
    }

    #[must_use]
    pub fn or(left: Self, right: Self) -> Self {
        Self::new(
            PredicateOp::Or,
            vec![
                Expression::Predicate(Box::new(left)),
                Expression::Predicate(Box::new(right)),
            ],
        )
    }

    #[must_use]
    pub fn negate(inner: Self) -> Self {
        Self::new(
            PredicateOp::Not,
            vec![Expression::Predicate(Box::new(inner))],
        )
    }

    fn fmt_generic(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.op.name())?;
        for (i, child) in self.children.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{child}")?;
        }
        f.write_str(")")
    }

    fn fmt_like(
        &self,
        f: &mut fmt::Formatter<'_>,
        column: &Expression,
        pattern: &str,
    ) -> fmt::Result {
        let escaped = pattern
            .replace('\\', "\\\\")
            .replace('%', "\\%")
            .replace('_', "\\_");
        let pattern = match self.op {
            PredicateOp::StartsWith => format!("{escaped}%"),
            PredicateOp::EndsWith => format!("%{escaped}"),
            _ => format!("%{escaped}%"),
        };

        write!(f, "{column} LIKE {}", quote_sql(&pattern))
    }
}

impl CanonicalEncode for Predicate {
    fn encode(&self, sink: &mut dyn HashSink) {
        write_tag(sink, self.op.tag());
        write_len(sink, self.children.len());
        for child in &self.children {
            child.encode(sink);
        }
    }
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.op, self.children.as_slice()) {
            (op, [left, right]) if op.is_comparison() => {
                write!(f, "{left} {} {right}", op.name())
            }
            (PredicateOp::In, [column, values @ ..]) => {
                write!(f, "{column} IN (")?;
                for (i, value) in values.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{value}")?;
                }
                f.write_str(")")
            }
            (PredicateOp::IsNull, [column]) => write!(f, "{column} IS NULL"),
            (PredicateOp::IsNotNull, [column]) => write!(f, "{column} IS NOT NULL"),
            (
                PredicateOp::StartsWith | PredicateOp::EndsWith | PredicateOp::Contains,
                [column, Expression::Literal(Value::Text(pattern))],
            ) => self.fmt_like(f, column, pattern),
            (PredicateOp::And | PredicateOp::Or, [left, right]) => {
                write!(f, "({left}) {} ({right})", self.op.name())
            }
            (PredicateOp::Not, [inner]) => write!(f, "NOT ({inner})"),
            (PredicateOp::AlwaysTrue, []) => f.write_str("TRUE"),
            (PredicateOp::AlwaysFalse, []) => f.write_str("FALSE"),
            _ => self.fmt_generic(f),
        }
    }
}

///
/// TESTS
///
