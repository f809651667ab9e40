//! Data-source identity.
//!
//! Plan equivalence cares about *which implementation* backs a scan, never
//! about the instance: two `JdbcSource` values configured differently
//! still produce equal identities. Instance-specific settings belong in
//! the node's options, which only the descriptor renders.

use crate::hash::{CanonicalEncode, HashSink, write_str, write_tag};
use std::{
    any::{Any, TypeId, type_name},
    fmt,
    hash::{Hash, Hasher},
};

///
/// DataSource
///
/// Pluggable source implementation. The concrete type is the identity,
/// captured when a node is built, also through `dyn DataSource`.
///

pub trait DataSource: Any + Send + Sync {
    /// Runtime type descriptor of the implementing type.
    fn source_identity(&self) -> SourceIdentity {
        SourceIdentity {
            type_id: TypeId::of::<Self>(),
            type_name: type_name::<Self>(),
        }
    }
}

///
/// SourceIdentity
///
/// Runtime type descriptor of a `DataSource` implementation.
///

#[derive(Clone, Copy)]
pub struct SourceIdentity {
    type_id: TypeId,
    type_name: &'static str,
}

impl SourceIdentity {
    /// Fully qualified type name, stable across runs of the same build.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Last path segment of the type name with generic arguments dropped.
    #[must_use]
    pub fn simple_name(&self) -> &'static str {
        let base = self.type_name.split('<').next().unwrap_or(self.type_name);

        base.rsplit("::").next().unwrap_or(base)
    }
}

impl PartialEq for SourceIdentity {
    fn eq(&self, other: &Self) -> bool {
        self.type_id == other.type_id
    }
}

impl Eq for SourceIdentity {}

impl Hash for SourceIdentity {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.type_id.hash(state);
    }
}

impl CanonicalEncode for SourceIdentity {
    fn encode(&self, sink: &mut dyn HashSink) {
        write_tag(sink, 0x20);
        write_str(sink, self.type_name);
    }
}

impl fmt::Debug for SourceIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SourceIdentity")
            .field(&self.type_name)
            .finish()
    }
}

impl fmt::Display for SourceIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.simple_name())
    }
}

///
/// TESTS
///
