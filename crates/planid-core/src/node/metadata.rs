//! Canonical metadata: the single value equality, hashing, fingerprints
//! and descriptors are all derived from.

use crate::{
    hash::{fold31, xxh3_of},
    model::Attribute,
    pushdown::PushedFilterSet,
    source::SourceIdentity,
};

///
/// CanonicalMetadata
///
/// Fixed-order tuple `(output, source, pushed_filters)`.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CanonicalMetadata {
    pub output: Vec<Attribute>,
    pub source: SourceIdentity,
    pub pushed_filters: PushedFilterSet,
}

impl CanonicalMetadata {
    /// `acc = 31 * acc + h` over the output, source and filter hashes.
    ///
    /// The output hash is order-sensitive, the filter hash is not.
    #[must_use]
    pub fn identity_hash(&self) -> u64 {
        let output = self
            .output
            .iter()
            .map(xxh3_of)
            .fold(0, fold31);
        let source = xxh3_of(&self.source);
        let filters = self.pushed_filters.identity_hash();

        [output, source, filters].into_iter().fold(0, fold31)
    }
}
