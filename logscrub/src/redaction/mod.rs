//! Applying policies to log text.
//!
//! This module provides the call-time half of the crate:
//!
//! - **`executor`**: [`RedactionPolicy::redact`](crate::RedactionPolicy::redact),
//!   `try_redact`, and the [`redact_sensitive_data`] shortcut over the default policy
//! - **`destructure`**: the scalar hook offered to structured property capture
//!   ([`PropertyValueFactory`])
//! - **`error`**: [`RedactionError`]
//!
//! Policy construction lives in `crate::policy`.

mod destructure;
mod error;
mod executor;

pub use destructure::PropertyValueFactory;
pub use error::RedactionError;
pub use executor::redact_sensitive_data;
