//! Scan plan nodes and their identity: equality, hashing, fingerprints and
//! explain descriptors, all derived from one memoized canonical metadata
//! value.

mod explain;
mod fingerprint;
mod kind;
mod metadata;

#[cfg(test)]
mod tests;

pub use explain::{OPTIONS_KEY, PUSHED_FILTER_KEY};
pub use fingerprint::ScanFingerprint;
pub use kind::ScanNodeKind;
pub use metadata::CanonicalMetadata;

use crate::{
    model::Attribute,
    pushdown::{PushedFilterSet, ScanReader, probe_pushed_filters},
    source::{DataSource, SourceIdentity},
};
use std::{
    any::Any,
    collections::BTreeMap,
    fmt,
    hash::{Hash, Hasher},
    sync::{Arc, OnceLock},
};

///
/// ScanNode
///
/// Plan node wrapping an external source and its already-built reader.
///
/// The node is immutable once built. Its canonical metadata is computed on
/// first use and kept for the node's lifetime; the reader is probed for
/// pushdown state exactly once, even under concurrent first access.
///

#[derive(Clone)]
pub struct ScanNode {
    kind: ScanNodeKind,
    output: Vec<Attribute>,
    source: Arc<dyn DataSource>,
    source_identity: SourceIdentity,
    reader: Arc<dyn ScanReader>,
    options: BTreeMap<String, String>,
    metadata: OnceLock<CanonicalMetadata>,
}

impl ScanNode {
    #[must_use]
    pub fn new(
        kind: ScanNodeKind,
        output: Vec<Attribute>,
        source: Arc<dyn DataSource>,
        reader: Arc<dyn ScanReader>,
    ) -> Self {
        Self {
            kind,
            output,
            source_identity: source.source_identity(),
            source,
            reader,
            options: BTreeMap::new(),
            metadata: OnceLock::new(),
        }
    }

    /// Attach source options. Options show up in descriptors only.
    #[must_use]
    pub fn with_options<K, V>(mut self, options: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.options
            .extend(options.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    #[must_use]
    pub const fn kind(&self) -> ScanNodeKind {
        self.kind
    }

    #[must_use]
    pub fn output(&self) -> &[Attribute] {
        &self.output
    }

    #[must_use]
    pub fn source(&self) -> &dyn DataSource {
        self.source.as_ref()
    }

    #[must_use]
    pub const fn source_identity(&self) -> SourceIdentity {
        self.source_identity
    }

    #[must_use]
    pub fn reader(&self) -> &dyn ScanReader {
        self.reader.as_ref()
    }

    #[must_use]
    pub const fn options(&self) -> &BTreeMap<String, String> {
        &self.options
    }

    /// Canonical metadata, derived on first call.
    pub fn metadata(&self) -> &CanonicalMetadata {
        self.metadata.get_or_init(|| CanonicalMetadata {
            output: self.output.clone(),
            source: self.source_identity,
            pushed_filters: probe_pushed_filters(self.reader.as_ref()),
        })
    }

    #[must_use]
    pub fn pushed_filters(&self) -> &PushedFilterSet {
        &self.metadata().pushed_filters
    }

    #[must_use]
    pub const fn can_equal(&self, other: &Self) -> bool {
        self.kind.can_equal(other.kind)
    }

    /// Equality against an arbitrary value; anything that is not a
    /// `ScanNode` compares unequal.
    #[must_use]
    pub fn equals_any(&self, other: &dyn Any) -> bool {
        other
            .downcast_ref::<Self>()
            .is_some_and(|other| self == other)
    }

    #[must_use]
    pub fn identity_hash(&self) -> u64 {
        self.metadata().identity_hash()
    }
}

impl PartialEq for ScanNode {
    fn eq(&self, other: &Self) -> bool {
        self.can_equal(other) && self.metadata() == other.metadata()
    }
}

impl Eq for ScanNode {}

impl Hash for ScanNode {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.identity_hash());
    }
}

impl fmt::Debug for ScanNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScanNode")
            .field("kind", &self.kind)
            .field("source", &self.source_identity)
            .field("output", &self.output)
            .field("options", &self.options.keys().collect::<Vec<_>>())
            .field("metadata", &self.metadata.get())
            .finish_non_exhaustive()
    }
}
