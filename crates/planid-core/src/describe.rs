//! Process-wide descriptor options.
//!
//! Descriptors read the installed options at format time. A scoped
//! thread-local override lets tests and tooling format under different
//! settings without touching global state.

use crate::{error::RedactionError, text::Redactor};
use planid_config::{DEFAULT_MAX_FIELDS, DEFAULT_MAX_VALUE_LEN, PlanidConfig};
use std::{
    cell::RefCell,
    sync::{Arc, OnceLock, PoisonError, RwLock},
};
use tracing::debug;

static GLOBAL: OnceLock<RwLock<Arc<DescribeOptions>>> = OnceLock::new();

thread_local! {
    static OVERRIDE: RefCell<Option<Arc<DescribeOptions>>> = const { RefCell::new(None) };
}

///
/// DescribeOptions
///

#[derive(Clone, Debug)]
pub struct DescribeOptions {
    max_fields: usize,
    max_value_len: usize,
    redactor: Redactor,
}

impl DescribeOptions {
    /// Options with the given limits and no redaction. Limits are clamped
    /// to at least one rendered field and one character.
    #[must_use]
    pub fn new(max_fields: usize, max_value_len: usize) -> Self {
        Self {
            max_fields: max_fields.max(1),
            max_value_len: max_value_len.max(1),
            redactor: Redactor::disabled(),
        }
    }

    /// Build options from configuration, compiling its redaction patterns.
    pub fn from_config(config: &PlanidConfig) -> Result<Self, RedactionError> {
        let redactor = Redactor::new(
            &config.redaction.value_patterns,
            &config.redaction.key_patterns,
        )?;

        Ok(Self::new(config.describe.max_fields, config.describe.max_value_len)
            .with_redactor(redactor))
    }

    #[must_use]
    pub fn with_redactor(mut self, redactor: Redactor) -> Self {
        self.redactor = redactor;
        self
    }

    #[must_use]
    pub const fn max_fields(&self) -> usize {
        self.max_fields
    }

    #[must_use]
    pub const fn max_value_len(&self) -> usize {
        self.max_value_len
    }

    #[must_use]
    pub const fn redactor(&self) -> &Redactor {
        &self.redactor
    }
}

impl Default for DescribeOptions {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_FIELDS, DEFAULT_MAX_VALUE_LEN)
    }
}

fn global() -> &'static RwLock<Arc<DescribeOptions>> {
    GLOBAL.get_or_init(|| RwLock::new(Arc::new(DescribeOptions::default())))
}

/// Publish process-wide options, replacing any previously installed.
pub fn install(options: DescribeOptions) {
    debug!(
        max_fields = options.max_fields,
        max_value_len = options.max_value_len,
        redaction = options.redactor.is_enabled(),
        "installed describe options"
    );

    *global().write().unwrap_or_else(PoisonError::into_inner) = Arc::new(options);
}

/// Options in effect for the current thread.
#[must_use]
pub fn current() -> Arc<DescribeOptions> {
    if let Some(options) = OVERRIDE.with(|cell| cell.borrow().clone()) {
        return options;
    }

    global()
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
}

/// Run `f` with `options` in effect on the current thread only.
///
/// The previous override is restored when `f` returns or unwinds.
pub fn with_options<R>(options: DescribeOptions, f: impl FnOnce() -> R) -> R {
    let prev = OVERRIDE.with(|cell| cell.replace(Some(Arc::new(options))));
    let _restore = RestoreOverride(prev);

    f()
}

///
/// RestoreOverride
///

struct RestoreOverride(Option<Arc<DescribeOptions>>);

impl Drop for RestoreOverride {
    fn drop(&mut self) {
        let prev = self.0.take();
        OVERRIDE.with(|cell| *cell.borrow_mut() = prev);
    }
}

///
/// TESTS
///
