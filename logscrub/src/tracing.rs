//! Adapters for redacting log output produced through `tracing`.
//!
//! This module provides two hooks:
//!
//! - **`TracingRedactedExt`**: redacts a single string field at the call site
//!   and records it as a display value.
//!
//! - **`RedactingMakeWriter`**: wraps a `tracing_subscriber` writer so every
//!   formatted event is redacted before it reaches the sink, whatever the
//!   call site logged.
//!
//! # Example
//!
//! ```no_run
//! use logscrub::tracing::{MakeWriterRedactExt, TracingRedactedExt};
//!
//! tracing_subscriber::fmt()
//!     .with_writer(std::io::stdout.with_sensitive_data_redaction())
//!     .init();
//!
//! let header = "Bearer eyJhbGciOi";
//! tracing::info!(auth = %header.tracing_redacted(), "request received");
//! ```

use std::{borrow::Cow, sync::Arc};

use tracing::{
    Metadata,
    field::{DisplayValue, display},
};
use tracing_subscriber::fmt::MakeWriter;

use crate::{policy::RedactionPolicy, writer::RedactingWriter};

/// Extension trait for logging string-like values through a redaction policy.
pub trait TracingRedactedExt {
    /// Redacts with the default policy and wraps the result for `tracing`.
    fn tracing_redacted(&self) -> DisplayValue<Cow<'_, str>>;

    /// Redacts with `policy` and wraps the result for `tracing`.
    fn tracing_redacted_with(&self, policy: &RedactionPolicy) -> DisplayValue<Cow<'_, str>>;
}

impl<T> TracingRedactedExt for T
where
    T: AsRef<str> + ?Sized,
{
    fn tracing_redacted(&self) -> DisplayValue<Cow<'_, str>> {
        self.tracing_redacted_with(RedactionPolicy::global())
    }

    fn tracing_redacted_with(&self, policy: &RedactionPolicy) -> DisplayValue<Cow<'_, str>> {
        display(policy.redact(self.as_ref()))
    }
}

/// A [`MakeWriter`] whose writers redact each formatted line.
///
/// Every writer handed out shares the same policy.
#[derive(Clone, Debug)]
pub struct RedactingMakeWriter<M> {
    inner: M,
    policy: Arc<RedactionPolicy>,
}

impl<M> RedactingMakeWriter<M> {
    /// Wraps `inner`, redacting with `policy`.
    pub fn new(inner: M, policy: Arc<RedactionPolicy>) -> Self {
        Self { inner, policy }
    }

    /// The policy applied to every event.
    pub fn policy(&self) -> &RedactionPolicy {
        &self.policy
    }
}

impl<'a, M> MakeWriter<'a> for RedactingMakeWriter<M>
where
    M: MakeWriter<'a>,
{
    type Writer = RedactingWriter<M::Writer>;

    fn make_writer(&'a self) -> Self::Writer {
        RedactingWriter::with_policy(self.inner.make_writer(), Arc::clone(&self.policy))
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        RedactingWriter::with_policy(self.inner.make_writer_for(meta), Arc::clone(&self.policy))
    }
}

/// Extension trait that puts a redaction policy in front of any [`MakeWriter`].
pub trait MakeWriterRedactExt: Sized {
    /// Redacts with the process-wide default policy.
    fn with_sensitive_data_redaction(self) -> RedactingMakeWriter<Self> {
        RedactingMakeWriter::new(self, RedactionPolicy::shared())
    }

    /// Redacts with `policy`.
    fn with_redaction_policy(self, policy: RedactionPolicy) -> RedactingMakeWriter<Self> {
        RedactingMakeWriter::new(self, Arc::new(policy))
    }
}

impl<M> MakeWriterRedactExt for M where M: for<'a> MakeWriter<'a> {}

#[cfg(test)]
mod tests {
    use std::{
        io,
        sync::{Arc, Mutex},
    };

    use super::{MakeWriterRedactExt, TracingRedactedExt};
    use crate::policy::RedactionPolicyOptions;

    #[derive(Clone, Default)]
    struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

    impl SharedBuffer {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    impl io::Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn tracing_redacted_formats_redacted_text() {
        let value = "password: hunter2".tracing_redacted();
        assert_eq!(format!("{value:?}"), "***REDACTED***");

        let owned = String::from("nothing to hide");
        let value = owned.tracing_redacted();
        assert_eq!(format!("{value:?}"), "nothing to hide");
    }

    #[test]
    fn tracing_redacted_with_uses_the_given_policy() {
        let policy = RedactionPolicyOptions::create()
            .disable_password_redaction()
            .build();
        let value = "password: hunter2".tracing_redacted_with(&policy);
        assert_eq!(format!("{value:?}"), "password: hunter2");
    }

    #[test]
    fn make_writer_redacts_formatted_events() {
        let buffer = SharedBuffer::default();
        let sink = buffer.clone();
        let subscriber = tracing_subscriber::fmt()
            .without_time()
            .with_writer((move || sink.clone()).with_sensitive_data_redaction())
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            tracing::info!(card = "4532-1234-5678-9010", "charging password=hunter2");
        });

        let output = buffer.contents();
        assert!(output.contains("charging ***REDACTED***"), "{output}");
        assert!(!output.contains("hunter2"), "{output}");
        assert!(!output.contains("4532-1234-5678-9010"), "{output}");
    }

    #[test]
    fn make_writer_with_custom_policy() {
        let policy = RedactionPolicyOptions::create()
            .disable_all_defaults()
            .add_custom_pattern(r"\bCLIENT_SECRET\b")
            .unwrap()
            .build();
        let buffer = SharedBuffer::default();
        let sink = buffer.clone();
        let subscriber = tracing_subscriber::fmt()
            .without_time()
            .with_writer((move || sink.clone()).with_redaction_policy(policy))
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            tracing::warn!("rotating CLIENT_SECRET for ssn 123-45-6789");
        });

        let output = buffer.contents();
        assert!(output.contains("rotating ***REDACTED*** for ssn 123-45-6789"), "{output}");
    }
}
