//! Reader pushdown capabilities and the probe that reads them.
//!
//! A reader exposes zero, one or both capabilities. The probe resolves
//! them once into a closed `PushdownCapability`, structured predicates
//! first, and reads only the winning capability.

use crate::pushdown::{Filter, Predicate, PushedFilterSet};
use std::fmt;
use tracing::debug;

///
/// SupportsPredicatePushdown
///

pub trait SupportsPredicatePushdown: Send + Sync {
    /// Structured predicates already consumed by the reader.
    fn pushed_predicates(&self) -> Vec<Predicate>;
}

///
/// SupportsFilterPushdown
///

pub trait SupportsFilterPushdown: Send + Sync {
    /// Flat filters already consumed by the reader.
    fn pushed_filters(&self) -> Vec<Filter>;
}

///
/// ScanReader
///
/// Reader attached to a scan node. Readers advertise capabilities by
/// returning `Some(self)` from the matching accessor.
///
/// Pushdown must be complete before the reader is attached to a node: the
/// node reads pushdown state once and keeps it for its lifetime, so filters
/// accepted afterwards are not reflected in equality, hashing or
/// descriptors.
///

pub trait ScanReader: Send + Sync {
    fn predicate_pushdown(&self) -> Option<&dyn SupportsPredicatePushdown> {
        None
    }

    fn filter_pushdown(&self) -> Option<&dyn SupportsFilterPushdown> {
        None
    }
}

///
/// PushdownCapability
///

#[derive(Clone, Copy)]
pub enum PushdownCapability<'a> {
    Predicates(&'a dyn SupportsPredicatePushdown),
    Filters(&'a dyn SupportsFilterPushdown),
    Unsupported,
}

impl<'a> PushdownCapability<'a> {
    /// Resolve the capability to consult. Structured predicates win over
    /// flat filters; the losing capability is never read.
    #[must_use]
    pub fn probe(reader: &'a dyn ScanReader) -> Self {
        if let Some(capability) = reader.predicate_pushdown() {
            return Self::Predicates(capability);
        }
        if let Some(capability) = reader.filter_pushdown() {
            return Self::Filters(capability);
        }

        Self::Unsupported
    }

    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Predicates(_) => "predicates",
            Self::Filters(_) => "filters",
            Self::Unsupported => "unsupported",
        }
    }

    #[must_use]
    pub fn pushed(&self) -> PushedFilterSet {
        match self {
            Self::Predicates(capability) => {
                PushedFilterSet::from_predicates(capability.pushed_predicates())
            }
            Self::Filters(capability) => PushedFilterSet::from_filters(capability.pushed_filters()),
            Self::Unsupported => PushedFilterSet::empty(),
        }
    }
}

impl fmt::Debug for PushdownCapability<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Probe a reader and collect its pushed filter set.
pub fn probe_pushed_filters(reader: &dyn ScanReader) -> PushedFilterSet {
    let capability = PushdownCapability::probe(reader);
    let pushed = capability.pushed();
    debug!(
        capability = capability.label(),
        filters = pushed.len(),
        "probed reader pushdown state"
    );

    pushed
}

///
/// TESTS
///
