//! Shared fixtures for unit tests: sources, readers and schema helpers.

use crate::{
    model::{Attribute, DataType},
    pushdown::{Filter, Predicate, ScanReader, SupportsFilterPushdown, SupportsPredicatePushdown},
    source::DataSource,
};
use std::sync::{
    Mutex, PoisonError,
    atomic::{AtomicUsize, Ordering},
};

///
/// Sources
///

pub(crate) struct JdbcSource {
    #[expect(dead_code)]
    pub(crate) url: String,
}

impl JdbcSource {
    pub(crate) fn new(url: &str) -> Self {
        Self {
            url: url.to_string(),
        }
    }
}

impl DataSource for JdbcSource {}

pub(crate) struct ParquetSource;

impl DataSource for ParquetSource {}

///
/// StaticReader
///
/// Reader with fixed pushdown state that counts capability reads.
///

#[derive(Default)]
pub(crate) struct StaticReader {
    predicates: Option<Vec<Predicate>>,
    filters: Option<Vec<Filter>>,
    predicate_reads: AtomicUsize,
    filter_reads: AtomicUsize,
}

impl StaticReader {
    pub(crate) fn plain() -> Self {
        Self::default()
    }

    pub(crate) fn with_predicates(mut self, predicates: Vec<Predicate>) -> Self {
        self.predicates = Some(predicates);
        self
    }

    pub(crate) fn with_filters(mut self, filters: Vec<Filter>) -> Self {
        self.filters = Some(filters);
        self
    }

    pub(crate) fn predicate_reads(&self) -> usize {
        self.predicate_reads.load(Ordering::SeqCst)
    }

    pub(crate) fn filter_reads(&self) -> usize {
        self.filter_reads.load(Ordering::SeqCst)
    }
}

impl SupportsPredicatePushdown for StaticReader {
    fn pushed_predicates(&self) -> Vec<Predicate> {
        self.predicate_reads.fetch_add(1, Ordering::SeqCst);
        self.predicates.clone().unwrap_or_default()
    }
}

impl SupportsFilterPushdown for StaticReader {
    fn pushed_filters(&self) -> Vec<Filter> {
        self.filter_reads.fetch_add(1, Ordering::SeqCst);
        self.filters.clone().unwrap_or_default()
    }
}

impl ScanReader for StaticReader {
    fn predicate_pushdown(&self) -> Option<&dyn SupportsPredicatePushdown> {
        self.predicates
            .as_ref()
            .map(|_| self as &dyn SupportsPredicatePushdown)
    }

    fn filter_pushdown(&self) -> Option<&dyn SupportsFilterPushdown> {
        self.filters
            .as_ref()
            .map(|_| self as &dyn SupportsFilterPushdown)
    }
}

///
/// MutableReader
///
/// Reader that keeps accepting filters through interior mutability.
///

#[derive(Default)]
pub(crate) struct MutableReader {
    filters: Mutex<Vec<Filter>>,
}

impl MutableReader {
    pub(crate) fn push(&self, filter: Filter) {
        self.filters
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(filter);
    }
}

impl SupportsFilterPushdown for MutableReader {
    fn pushed_filters(&self) -> Vec<Filter> {
        self.filters
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl ScanReader for MutableReader {
    fn filter_pushdown(&self) -> Option<&dyn SupportsFilterPushdown> {
        Some(self)
    }
}

///
/// Schema helpers
///

pub(crate) fn columns(names: &[&str]) -> Vec<Attribute> {
    names
        .iter()
        .zip(1_u64..)
        .map(|(name, id)| Attribute::new(id, *name, DataType::Utf8))
        .collect()
}

pub(crate) fn wide_columns(count: u64) -> Vec<Attribute> {
    (0..count)
        .map(|i| Attribute::new(i, format!("c{i}"), DataType::Int64))
        .collect()
}
