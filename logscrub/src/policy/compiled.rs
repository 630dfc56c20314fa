//! The frozen, shareable policy produced by the builder.

use std::{
    borrow::Cow,
    sync::{Arc, LazyLock},
};

use super::{builder::RedactionPolicyOptions, rule::PatternRule};

static DEFAULT_POLICY: LazyLock<Arc<RedactionPolicy>> =
    LazyLock::new(|| Arc::new(RedactionPolicyOptions::create().build()));

/// An immutable, ordered set of active rules plus the redaction marker.
///
/// A policy owns its compiled matchers and no mutable state, so one instance
/// can be shared across threads and called concurrently without locking.
/// Construct one with [`RedactionPolicyOptions`], or use
/// [`RedactionPolicy::global`] for the built-in defaults.
#[derive(Clone, Debug)]
pub struct RedactionPolicy {
    rules: Vec<PatternRule>,
    marker: Cow<'static, str>,
}

impl RedactionPolicy {
    pub(crate) fn from_parts(rules: Vec<PatternRule>, marker: Cow<'static, str>) -> Self {
        Self { rules, marker }
    }

    /// Starts a builder pre-seeded with every default rule.
    #[must_use]
    pub fn builder() -> RedactionPolicyOptions {
        RedactionPolicyOptions::create()
    }

    /// The process-wide policy with all defaults enabled and no custom rules.
    ///
    /// Built once on first use.
    pub fn global() -> &'static RedactionPolicy {
        &DEFAULT_POLICY
    }

    /// A shared handle to the [`global`](Self::global) policy, for adapters
    /// that hold their policy behind an `Arc`.
    pub fn shared() -> Arc<RedactionPolicy> {
        Arc::clone(&DEFAULT_POLICY)
    }

    /// Active rules, in evaluation order.
    pub fn rules(&self) -> &[PatternRule] {
        &self.rules
    }

    /// The literal substituted for every match.
    pub fn marker(&self) -> &str {
        &self.marker
    }

    /// True when the policy has no active rules and redaction is the identity.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl Default for RedactionPolicy {
    fn default() -> Self {
        Self::global().clone()
    }
}
