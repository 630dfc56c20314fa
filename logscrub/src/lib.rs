//! Pattern-based redaction of sensitive data in log text.
//!
//! This crate separates:
//! - **Policies**: which shapes count as sensitive (credit-card numbers, SSNs,
//!   passwords, API keys, plus any custom patterns), built once and frozen.
//! - **Redaction**: rewriting a string so every match becomes
//!   [`REDACTION_MARKER`] before the record reaches a sink.
//!
//! What this crate does:
//! - defines the default pattern set and a builder to enable, disable and extend it
//! - rewrites text through a policy, borrowing the input when nothing matched
//! - provides hooks for logging pipelines: a redacting `io::Write`, and
//!   integrations behind feature flags (`tracing`, `slog`, `config`)
//!
//! What it does not do:
//! - choose sinks or configure a logger
//! - classify PII statistically or reverse a redaction
//!
//! ```rust
//! use logscrub::redact_sensitive_data;
//!
//! assert_eq!(
//!     redact_sensitive_data("My SSN is 123-45-6789"),
//!     "My SSN is ***REDACTED***"
//! );
//! ```

// <https://doc.rust-lang.org/rustc/lints/listing/allowed-by-default.html>
#![warn(
    anonymous_parameters,
    bare_trait_objects,
    elided_lifetimes_in_paths,
    missing_copy_implementations,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    unreachable_pub,
    unsafe_code,
    unused_extern_crates,
    unused_import_braces
)]
// <https://rust-lang.github.io/rust-clippy/stable>
#![warn(
    clippy::all,
    clippy::cargo,
    clippy::dbg_macro,
    clippy::float_cmp_const,
    clippy::get_unwrap,
    clippy::mem_forget,
    clippy::nursery,
    clippy::pedantic,
    clippy::todo,
    clippy::unwrap_used,
    clippy::uninlined_format_args
)]
// Allow some clippy lints
#![allow(
    clippy::doc_markdown,
    clippy::module_name_repetitions,
    clippy::multiple_crate_versions,
    clippy::must_use_candidate,
    clippy::needless_pass_by_value,
    clippy::use_self,
    clippy::cargo_common_metadata,
    clippy::missing_errors_doc,
    clippy::missing_const_for_fn,
    clippy::redundant_pub_crate,
    clippy::result_large_err,
    clippy::option_if_let_else
)]
// Allow some lints while testing
#![cfg_attr(test, allow(clippy::non_ascii_literal, clippy::unwrap_used))]

// Module declarations
#[cfg(feature = "config")]
pub mod config;
pub mod policy;
mod redaction;
#[cfg(feature = "slog")]
pub mod slog;
#[cfg(feature = "tracing")]
pub mod tracing;
pub mod writer;

// Re-exports from policy module
pub use policy::{
    DefaultPattern, PatternOptions, PatternRule, REDACTION_MARKER, RedactionPolicy,
    RedactionPolicyOptions,
};
// Re-exports from redaction module
pub use redaction::{PropertyValueFactory, RedactionError, redact_sensitive_data};
pub use writer::RedactingWriter;
#[cfg(feature = "config")]
pub use config::{ConfigError, RedactionConfig};
#[cfg(feature = "slog")]
pub use slog::{RedactingDrain, SlogRedactedExt};
#[cfg(feature = "tracing")]
pub use tracing::{MakeWriterRedactExt, TracingRedactedExt};
