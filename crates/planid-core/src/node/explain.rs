//! Deterministic, redacted, length-bounded scan descriptors; never
//! executes anything.

use crate::{
    describe::{self, DescribeOptions},
    node::ScanNode,
    text::{Redactor, abbreviate, truncated_list},
};
use std::{collections::BTreeMap, fmt};

/// Descriptor entry key for the pushed filter set.
pub const PUSHED_FILTER_KEY: &str = "PushedFilter";

/// Descriptor entry key for source options.
pub const OPTIONS_KEY: &str = "Options";

impl ScanNode {
    /// Describe this node under the options in effect for this thread.
    #[must_use]
    pub fn describe(&self) -> String {
        self.describe_with(&describe::current())
    }

    /// `<SourceName>[col, ...]` followed by ` (key: value, ...)` when the
    /// node has pushed filters or options.
    #[must_use]
    pub fn describe_with(&self, options: &DescribeOptions) -> String {
        let redactor = options.redactor();
        let entries = self.explain_entries(redactor);

        let mut out = String::from(self.source_identity().simple_name());
        out.push_str(&truncated_list(
            self.output(),
            "[",
            ", ",
            "]",
            options.max_fields(),
        ));

        if !entries.is_empty() {
            let rendered: Vec<String> = entries
                .iter()
                .map(|(key, value)| {
                    let value = redactor.redact(value);
                    format!("{key}: {}", abbreviate(&value, options.max_value_len()))
                })
                .collect();
            out.push_str(&truncated_list(
                &rendered,
                " (",
                ", ",
                ")",
                options.max_fields(),
            ));
        }

        out
    }

    fn explain_entries(&self, redactor: &Redactor) -> Vec<(&'static str, String)> {
        let mut entries = Vec::new();

        let pushed = self.pushed_filters();
        if !pushed.is_empty() {
            entries.push((PUSHED_FILTER_KEY, pushed.render()));
        }
        if !self.options().is_empty() {
            entries.push((OPTIONS_KEY, render_options(self.options(), redactor)));
        }

        entries
    }
}

fn render_options(options: &BTreeMap<String, String>, redactor: &Redactor) -> String {
    let pairs: Vec<String> = redactor
        .redact_options(options.iter().map(|(k, v)| (k.as_str(), v.as_str())))
        .into_iter()
        .map(|(key, value)| format!("{key}={value}"))
        .collect();

    format!("[{}]", pairs.join(","))
}

impl fmt::Display for ScanNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}
