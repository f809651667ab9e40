use crate::{
    hash::{CanonicalEncode, HashSink, write_tag, xxh3_of},
    pushdown::{Filter, Predicate},
};
use derive_more::{Deref, IntoIterator};
use std::{collections::BTreeSet, fmt};

///
/// PushedFilter
///
/// One filter a reader reports as consumed, in whichever vocabulary the
/// reader's pushdown capability speaks.
///

#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum PushedFilter {
    Predicate(Predicate),
    Filter(Filter),
}

impl CanonicalEncode for PushedFilter {
    fn encode(&self, sink: &mut dyn HashSink) {
        match self {
            Self::Predicate(predicate) => {
                write_tag(sink, 0x30);
                predicate.encode(sink);
            }
            Self::Filter(filter) => {
                write_tag(sink, 0x31);
                filter.encode(sink);
            }
        }
    }
}

impl fmt::Display for PushedFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Predicate(predicate) => write!(f, "{predicate}"),
            Self::Filter(filter) => write!(f, "{filter}"),
        }
    }
}

impl From<Predicate> for PushedFilter {
    fn from(predicate: Predicate) -> Self {
        Self::Predicate(predicate)
    }
}

impl From<Filter> for PushedFilter {
    fn from(filter: Filter) -> Self {
        Self::Filter(filter)
    }
}

///
/// PushedFilterSet
///
/// Deduplicated filters consumed by a reader. Equality is set equality;
/// iteration follows the filters' total order, so rendering is
/// deterministic no matter how the reader listed them.
///

#[derive(Clone, Debug, Default, Deref, Eq, IntoIterator, PartialEq)]
#[into_iterator(owned, ref)]
pub struct PushedFilterSet(BTreeSet<PushedFilter>);

impl PushedFilterSet {
    #[must_use]
    pub const fn empty() -> Self {
        Self(BTreeSet::new())
    }

    #[must_use]
    pub fn from_predicates(predicates: impl IntoIterator<Item = Predicate>) -> Self {
        predicates.into_iter().map(PushedFilter::Predicate).collect()
    }

    #[must_use]
    pub fn from_filters(filters: impl IntoIterator<Item = Filter>) -> Self {
        filters.into_iter().map(PushedFilter::Filter).collect()
    }

    /// Order-insensitive hash: wrapping sum of the element hashes.
    #[must_use]
    pub fn identity_hash(&self) -> u64 {
        self.0
            .iter()
            .map(xxh3_of)
            .fold(0, u64::wrapping_add)
    }

    /// `[f1, f2, ...]` in set order.
    #[must_use]
    pub fn render(&self) -> String {
        let rendered: Vec<String> = self.0.iter().map(ToString::to_string).collect();

        format!("[{}]", rendered.join(", "))
    }
}

impl FromIterator<PushedFilter> for PushedFilterSet {
    fn from_iter<I: IntoIterator<Item = PushedFilter>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

///
/// TESTS
///
