//! Property-based tests for the default policy.
//!
//! Uses proptest to verify invariants across random inputs:
//! - Text with no sensitive shape is returned unchanged and borrowed
//! - Redacting realistic log lines twice equals redacting once, even when fragments touch
//! - `is_sensitive` agrees with whether redaction rewrote anything
//! - Generated SSNs and card numbers never survive redaction

#![allow(clippy::unwrap_used)]

use std::borrow::Cow;

use logscrub::{RedactionPolicy, redact_sensitive_data};
use proptest::prelude::*;

/// Log fragments, some sensitive, some not, joined by a space or glued together.
fn log_line() -> impl Strategy<Value = String> {
    let fragment = prop::sample::select(vec![
        "hello",
        "world",
        "4532-1234-5678-9010",
        "123-45-6789",
        "password: secret",
        "api_key: abc123",
        "pwd=x",
        "bearer",
        "12",
        "order-42",
    ]);
    let separator = prop::sample::select(vec!["", " "]);

    prop::collection::vec((fragment, separator), 0..12).prop_map(|parts| {
        parts
            .into_iter()
            .flat_map(|(fragment, separator)| [fragment, separator])
            .collect()
    })
}

proptest! {
    /// Property: text made of letters and punctuation is never rewritten.
    #[test]
    fn prop_plain_text_is_identity(text in "[A-Za-z,.!?]{0,64}") {
        let output = redact_sensitive_data(&text);
        prop_assert!(matches!(output, Cow::Borrowed(_)));
        prop_assert_eq!(output.as_ref(), text.as_str());
    }

    /// Property: whitespace-only input comes back borrowed.
    #[test]
    fn prop_whitespace_is_identity(text in "[ \t\n]{0,16}") {
        prop_assert!(matches!(redact_sensitive_data(&text), Cow::Borrowed(_)));
    }

    /// Property: redaction is idempotent, whether or not fragments are separated.
    #[test]
    fn prop_redaction_is_idempotent(line in log_line()) {
        let once = redact_sensitive_data(&line).into_owned();
        let twice = redact_sensitive_data(&once).into_owned();
        prop_assert_eq!(once, twice);
    }

    /// Property: a line is sensitive exactly when redaction changes it.
    #[test]
    fn prop_is_sensitive_matches_rewrite(line in log_line()) {
        let policy = RedactionPolicy::global();
        let rewritten = matches!(policy.redact(&line), Cow::Owned(_));
        prop_assert_eq!(policy.is_sensitive(&line), rewritten);
    }

    /// Property: generated SSNs are removed wherever they appear.
    #[test]
    fn prop_ssn_never_survives(
        prefix in "[a-z]{0,10}",
        ssn in "[0-9]{3}-[0-9]{2}-[0-9]{4}",
        suffix in "[a-z]{0,10}",
    ) {
        let line = format!("{prefix} {ssn} {suffix}");
        let output = redact_sensitive_data(&line);
        prop_assert!(!output.contains(&ssn), "{}", output);
    }

    /// Property: generated grouped card numbers are removed wherever they appear.
    #[test]
    fn prop_card_never_survives(
        prefix in "[a-z]{0,10}",
        card in "[0-9]{4}-[0-9]{4}-[0-9]{4}-[0-9]{4}",
    ) {
        let line = format!("{prefix} {card} done");
        let output = redact_sensitive_data(&line);
        prop_assert!(!output.contains(&card), "{}", output);
    }
}
