//! Bounded, redacted rendering helpers used by scan descriptors.

pub mod redact;
pub mod truncate;

pub use redact::{REDACTION_REPLACEMENT, Redactor};
pub use truncate::{abbreviate, truncated_list};
