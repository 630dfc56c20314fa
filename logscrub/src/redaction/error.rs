//! Errors raised while building or applying a policy.

use thiserror::Error;

/// The only ways the redaction core can fail.
///
/// Patterns that compile but never match are not errors; they simply redact
/// nothing.
#[derive(Debug, Error)]
pub enum RedactionError {
    /// A custom pattern failed to compile. Raised by the builder call that
    /// supplied it, never deferred to the first redaction.
    #[error("invalid redaction pattern `{name}`: {source}")]
    InvalidPattern {
        /// Name the rule was being registered under.
        name: String,
        #[source]
        source: regex::Error,
    },

    /// `try_redact` was handed no text at all.
    #[error("no text was supplied for redaction")]
    NullInput,
}
