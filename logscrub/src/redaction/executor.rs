//! Applying a policy to text.

use std::borrow::Cow;

use super::error::RedactionError;
use crate::policy::RedactionPolicy;

impl RedactionPolicy {
    /// Replaces every span matched by an active rule with the marker.
    ///
    /// Rules run in registration order, each one scanning the output of the
    /// previous one with non-overlapping, left-to-right replacement. Input that
    /// is empty, whitespace-only, or matched by no rule comes back borrowed.
    pub fn redact<'a>(&self, text: &'a str) -> Cow<'a, str> {
        if text.trim().is_empty() {
            return Cow::Borrowed(text);
        }

        let mut current = Cow::Borrowed(text);
        for rule in self.rules() {
            let replaced = match rule.replace_all(&current, self.marker()) {
                Cow::Borrowed(_) => continue,
                Cow::Owned(replaced) => replaced,
            };
            current = Cow::Owned(replaced);
        }
        current
    }

    /// Like [`redact`](Self::redact), for callers whose text may be absent.
    ///
    /// `None` is rejected with [`RedactionError::NullInput`] rather than treated
    /// as an empty string, so a missing message is never logged unredacted.
    pub fn try_redact<'a>(&self, text: Option<&'a str>) -> Result<Cow<'a, str>, RedactionError> {
        text.map(|text| self.redact(text))
            .ok_or(RedactionError::NullInput)
    }

    /// Reports whether any active rule matches `text`.
    pub fn is_sensitive(&self, text: &str) -> bool {
        self.rules().iter().any(|rule| rule.is_match(text))
    }
}

/// Redacts `text` with the process-wide default policy.
///
/// ```rust
/// assert_eq!(
///     logscrub::redact_sensitive_data("My SSN is 123-45-6789"),
///     "My SSN is ***REDACTED***"
/// );
/// ```
pub fn redact_sensitive_data(text: &str) -> Cow<'_, str> {
    RedactionPolicy::global().redact(text)
}
