//! Fluent construction of [`RedactionPolicy`] values.
//!
//! The builder is a plain value moved through a chain of configuration calls
//! and frozen by [`RedactionPolicyOptions::build`]:
//!
//! ```rust
//! use logscrub::RedactionPolicyOptions;
//!
//! # fn main() -> Result<(), logscrub::RedactionError> {
//! let policy = RedactionPolicyOptions::create()
//!     .disable_credit_card_redaction()
//!     .add_custom_pattern(r"\bCLIENT_SECRET\b")?
//!     .build();
//!
//! assert_eq!(policy.redact("CLIENT_SECRET"), "***REDACTED***");
//! assert_eq!(policy.redact("4532-1234-5678-9010"), "4532-1234-5678-9010");
//! # Ok(())
//! # }
//! ```

use std::borrow::Cow;

use regex::Regex;

use super::{
    compiled::RedactionPolicy,
    defaults::{DefaultPattern, REDACTION_MARKER},
    rule::{PatternOptions, PatternRule},
};
use crate::redaction::RedactionError;

#[derive(Clone, Debug)]
enum RuleSource {
    // Compiled lazily by `build`, and only while enabled.
    Default(DefaultPattern),
    Custom(Regex),
}

#[derive(Clone, Debug)]
struct RuleEntry {
    name: Cow<'static, str>,
    source: RuleSource,
    enabled: bool,
}

impl RuleEntry {
    fn is_default(&self) -> bool {
        matches!(self.source, RuleSource::Default(_))
    }

    fn compile(&self) -> PatternRule {
        match &self.source {
            RuleSource::Default(pattern) => PatternRule::new(self.name.clone(), pattern.compile())
                .rejecting_trailing_digit(pattern.rejects_trailing_digit()),
            RuleSource::Custom(regex) => PatternRule::new(self.name.clone(), regex.clone()),
        }
    }
}

/// Mutable configuration for a [`RedactionPolicy`].
///
/// Created pre-seeded with every [`DefaultPattern`] enabled, in canonical
/// order. Custom patterns are always appended, so they run after the defaults.
#[derive(Clone, Debug)]
pub struct RedactionPolicyOptions {
    rules: Vec<RuleEntry>,
}

impl RedactionPolicyOptions {
    /// Returns a builder with all defaults enabled and no custom patterns.
    #[must_use]
    pub fn create() -> Self {
        let rules = DefaultPattern::ALL
            .into_iter()
            .map(|pattern| RuleEntry {
                name: Cow::Borrowed(pattern.name()),
                source: RuleSource::Default(pattern),
                enabled: true,
            })
            .collect();
        Self { rules }
    }

    /// Stops redacting credit card numbers.
    #[must_use]
    pub fn disable_credit_card_redaction(self) -> Self {
        self.set_default_enabled(DefaultPattern::CreditCard, false)
    }

    /// Stops redacting social security numbers.
    #[must_use]
    pub fn disable_ssn_redaction(self) -> Self {
        self.set_default_enabled(DefaultPattern::Ssn, false)
    }

    /// Stops redacting `password=...` style values.
    #[must_use]
    pub fn disable_password_redaction(self) -> Self {
        self.set_default_enabled(DefaultPattern::Password, false)
    }

    /// Stops redacting API keys and bearer tokens.
    #[must_use]
    pub fn disable_api_key_redaction(self) -> Self {
        self.set_default_enabled(DefaultPattern::ApiKey, false)
    }

    /// Disables every default rule registered so far.
    ///
    /// Custom patterns, including ones added later, are unaffected.
    #[must_use]
    pub fn disable_all_defaults(mut self) -> Self {
        for entry in self.rules.iter_mut().filter(|entry| entry.is_default()) {
            entry.enabled = false;
        }
        self
    }

    /// Enables every rule called `name`. Unknown names are ignored.
    ///
    /// A custom pattern may share its name with a default; both are affected.
    #[must_use]
    pub fn enable(self, name: &str) -> Self {
        self.set_enabled(name, true)
    }

    /// Disables every rule called `name`. Unknown names are ignored.
    #[must_use]
    pub fn disable(self, name: &str) -> Self {
        self.set_enabled(name, false)
    }

    /// Appends a case-sensitive custom pattern, named after its source text.
    pub fn add_custom_pattern(self, pattern: &str) -> Result<Self, RedactionError> {
        self.add_custom_pattern_with(pattern, PatternOptions::default())
    }

    /// Appends a custom pattern compiled with `options`, named after its source text.
    pub fn add_custom_pattern_with(
        self,
        pattern: &str,
        options: PatternOptions,
    ) -> Result<Self, RedactionError> {
        self.add_named_pattern(pattern.to_string(), pattern, options)
    }

    /// Appends a custom pattern under an explicit rule name.
    ///
    /// The pattern is compiled immediately; a malformed expression is returned
    /// as [`RedactionError::InvalidPattern`] and the builder is dropped. When a
    /// custom rule with the same name already exists it keeps its slot and
    /// expression and is re-enabled. Default rules never absorb a custom
    /// pattern, even one whose text equals a default's name.
    pub fn add_named_pattern(
        mut self,
        name: impl Into<Cow<'static, str>>,
        pattern: &str,
        options: PatternOptions,
    ) -> Result<Self, RedactionError> {
        let name = name.into();
        let expression = options.compile(&name, pattern)?;

        if let Some(existing) = self
            .rules
            .iter_mut()
            .find(|entry| !entry.is_default() && entry.name == name)
        {
            existing.enabled = true;
            return Ok(self);
        }

        self.rules.push(RuleEntry {
            name,
            source: RuleSource::Custom(expression),
            enabled: true,
        });
        Ok(self)
    }

    /// Reports whether a rule called `name` is registered and enabled.
    pub fn is_enabled(&self, name: &str) -> bool {
        self.rules
            .iter()
            .any(|entry| entry.enabled && entry.name == name)
    }

    /// Names of all registered rules, enabled or not, in evaluation order.
    pub fn rule_names(&self) -> impl Iterator<Item = &str> {
        self.rules.iter().map(|entry| entry.name.as_ref())
    }

    /// Freezes the current configuration into an immutable policy.
    ///
    /// The builder stays usable; building again yields a fresh policy that
    /// reflects any changes made in between. Disabled rules are left out.
    pub fn build(&self) -> RedactionPolicy {
        let rules = self
            .rules
            .iter()
            .filter(|entry| entry.enabled)
            .map(RuleEntry::compile)
            .collect();
        RedactionPolicy::from_parts(rules, Cow::Borrowed(REDACTION_MARKER))
    }

    fn set_default_enabled(mut self, pattern: DefaultPattern, enabled: bool) -> Self {
        for entry in &mut self.rules {
            if matches!(entry.source, RuleSource::Default(default) if default == pattern) {
                entry.enabled = enabled;
            }
        }
        self
    }

    fn set_enabled(mut self, name: &str, enabled: bool) -> Self {
        for entry in self.rules.iter_mut().filter(|entry| entry.name == name) {
            entry.enabled = enabled;
        }
        self
    }
}

impl Default for RedactionPolicyOptions {
    fn default() -> Self {
        Self::create()
    }
}
