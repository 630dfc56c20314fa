//! Redaction policies: the pattern registry and its builder.
//!
//! This module provides:
//!
//! - **Defaults** (`defaults`): the built-in [`DefaultPattern`] shapes and the
//!   [`REDACTION_MARKER`] substituted for every match.
//!
//! - **Rules** (`rule`): compiled [`PatternRule`]s and the [`PatternOptions`]
//!   flags used for custom patterns.
//!
//! - **Builder** (`builder`): [`RedactionPolicyOptions`], which enables,
//!   disables and extends the default set.
//!
//! - **Policy** (`compiled`): the immutable [`RedactionPolicy`] the builder
//!   produces. The text-rewriting entry points live in `crate::redaction`.
//!
//! # Example
//!
//! ```rust
//! use logscrub::{PatternOptions, RedactionPolicy};
//!
//! # fn main() -> Result<(), logscrub::RedactionError> {
//! let policy = RedactionPolicy::builder()
//!     .disable_all_defaults()
//!     .add_custom_pattern_with("internal-[0-9]+", PatternOptions::new().case_insensitive(true))?
//!     .build();
//!
//! assert_eq!(policy.redact("host INTERNAL-42 down"), "host ***REDACTED*** down");
//! # Ok(())
//! # }
//! ```

mod builder;
mod compiled;
mod defaults;
mod rule;

pub use builder::RedactionPolicyOptions;
pub use compiled::RedactionPolicy;
pub use defaults::{DefaultPattern, REDACTION_MARKER};
pub use rule::{PatternOptions, PatternRule};
