//! Identity for plan nodes that wrap an external, pluggable data source:
//! value equality, hashing for plan caches, stable fingerprints, and a
//! redacted, length-bounded descriptor for explain output.
#![warn(unreachable_pub)]

pub mod describe;
pub mod error;
pub mod model;
pub mod node;
pub mod pushdown;
pub mod source;
pub mod text;

pub(crate) mod hash;

// test
#[cfg(test)]
pub(crate) mod test_support;

///
/// Prelude
///
/// Vocabulary needed to build and compare scan nodes.
///

pub mod prelude {
    pub use crate::{
        model::{Attribute, DataType, Value},
        node::{ScanNode, ScanNodeKind},
        pushdown::{
            Filter, Predicate, ScanReader, SupportsFilterPushdown, SupportsPredicatePushdown,
        },
        source::DataSource,
    };
}
