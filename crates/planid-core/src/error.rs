use thiserror::Error as ThisError;

///
/// RedactionError
///
/// Raised while compiling redaction patterns from configuration.
/// Formatting itself never fails.
///

#[derive(Debug, ThisError)]
pub enum RedactionError {
    #[error("invalid redaction pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        source: regex::Error,
    },
}
