//! Predicate-pushdown state exposed by scan readers.

mod capability;
mod filter;
mod predicate;
mod set;

pub use capability::{
    PushdownCapability, ScanReader, SupportsFilterPushdown, SupportsPredicatePushdown,
    probe_pushed_filters,
};
pub use filter::Filter;
pub use predicate::{Expression, FieldRef, Predicate, PredicateOp};
pub use set::{PushedFilter, PushedFilterSet};
