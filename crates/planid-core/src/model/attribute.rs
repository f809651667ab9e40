use crate::{
    hash::{CanonicalEncode, HashSink, write_bool, write_str, write_tag, write_u64},
    model::DataType,
};
use std::fmt;

///
/// AttributeId
///
/// Plan-unique id of one output attribute. Two attributes with the same
/// name but different ids are different columns.
///

#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct AttributeId(pub u64);

impl fmt::Display for AttributeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

///
/// Attribute
///
/// One column of a scan node's output schema. `Display` renders the bare
/// name, which is what descriptors show.
///

#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Attribute {
    pub id: AttributeId,
    pub name: String,
    pub data_type: DataType,
    pub nullable: bool,
}

impl Attribute {
    /// Build a nullable attribute.
    #[must_use]
    pub fn new(id: u64, name: impl Into<String>, data_type: DataType) -> Self {
        Self {
            id: AttributeId(id),
            name: name.into(),
            data_type,
            nullable: true,
        }
    }

    #[must_use]
    pub const fn with_nullable(mut self, nullable: bool) -> Self {
        self.nullable = nullable;
        self
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl CanonicalEncode for Attribute {
    fn encode(&self, sink: &mut dyn HashSink) {
        write_tag(sink, 0x10);
        write_u64(sink, self.id.0);
        write_str(sink, &self.name);
        self.data_type.encode(sink);
        write_bool(sink, self.nullable);
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
