//! Loading a redaction policy from a TOML file.
//!
//! ```toml
//! disable_all_defaults = false
//! disabled = ["CreditCard"]
//!
//! [[custom]]
//! name = "DatabaseUrl"
//! pattern = '\bDATABASE_URL=\S+'
//! case_insensitive = true
//! ```
//!
//! Defaults are switched off first, then custom patterns are appended in file
//! order, then every name in `disabled` is turned off. A `disabled` entry can
//! therefore name a default or a custom rule.

use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::Deserialize;
use thiserror::Error;

use crate::{
    policy::{PatternOptions, RedactionPolicy, RedactionPolicyOptions},
    redaction::RedactionError,
};

/// Errors returned while loading a [`RedactionConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("failed to read redaction config {}: {source}", path.display())]
    Read {
        /// Path that was opened.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// The text is not valid TOML or does not fit [`RedactionConfig`].
    #[error("failed to parse redaction config: {0}")]
    Parse(#[from] toml::de::Error),

    /// A custom pattern failed to compile.
    #[error(transparent)]
    Pattern(#[from] RedactionError),
}

/// On-disk shape of a redaction policy.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct RedactionConfig {
    /// Turns off all four built-in rules before anything else is applied.
    pub disable_all_defaults: bool,
    /// Rule names to turn off after custom patterns are added.
    pub disabled: Vec<String>,
    /// Custom patterns, appended in order.
    pub custom: Vec<CustomPatternConfig>,
}

/// One `[[custom]]` table.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct CustomPatternConfig {
    /// Rule name; the pattern text is used when omitted.
    #[serde(default)]
    pub name: Option<String>,
    /// Regular expression source.
    pub pattern: String,
    /// See [`PatternOptions::case_insensitive`].
    #[serde(default)]
    pub case_insensitive: bool,
    /// See [`PatternOptions::multi_line`].
    #[serde(default)]
    pub multi_line: bool,
    /// See [`PatternOptions::dot_matches_new_line`].
    #[serde(default)]
    pub dot_matches_new_line: bool,
    /// See [`PatternOptions::ignore_whitespace`].
    #[serde(default)]
    pub ignore_whitespace: bool,
    /// Compiled program size limit in bytes; the `regex` default when omitted.
    #[serde(default)]
    pub size_limit: Option<usize>,
}

impl CustomPatternConfig {
    fn options(&self) -> PatternOptions {
        let options = PatternOptions::new()
            .case_insensitive(self.case_insensitive)
            .multi_line(self.multi_line)
            .dot_matches_new_line(self.dot_matches_new_line)
            .ignore_whitespace(self.ignore_whitespace);
        match self.size_limit {
            Some(bytes) => options.size_limit(bytes),
            None => options,
        }
    }
}

// Defaults stay registered after being disabled, so this covers them too.
fn is_registered(options: &RedactionPolicyOptions, name: &str) -> bool {
    options.rule_names().any(|rule| rule == name)
}

impl RedactionConfig {
    /// Parses a config from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        tracing::debug!(
            disable_all_defaults = config.disable_all_defaults,
            disabled = config.disabled.len(),
            custom = config.custom.len(),
            "parsed redaction config"
        );
        Ok(config)
    }

    /// Reads and parses a TOML config file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "loading redaction config");
        Self::from_toml_str(&text)
    }

    /// Turns the config into a builder, compiling every custom pattern.
    pub fn into_options(self) -> Result<RedactionPolicyOptions, ConfigError> {
        let mut options = RedactionPolicyOptions::create();
        if self.disable_all_defaults {
            options = options.disable_all_defaults();
        }

        for custom in self.custom {
            let pattern_options = custom.options();
            let name = custom.name.unwrap_or_else(|| custom.pattern.clone());
            options = options.add_named_pattern(name, &custom.pattern, pattern_options)?;
        }

        for name in &self.disabled {
            if !is_registered(&options, name) {
                tracing::warn!(rule = %name, "redaction config disables an unknown rule");
            }
            options = options.disable(name);
        }

        Ok(options)
    }

    /// Builds the policy described by this config.
    pub fn build_policy(self) -> Result<RedactionPolicy, ConfigError> {
        Ok(self.into_options()?.build())
    }
}

#[cfg(test)]
mod tests {
    use super::{ConfigError, RedactionConfig, is_registered};
    use crate::{policy::RedactionPolicyOptions, redaction::RedactionError};

    #[test]
    fn empty_config_keeps_defaults() {
        let config = RedactionConfig::from_toml_str("").unwrap();
        assert_eq!(config, RedactionConfig::default());

        let policy = config.build_policy().unwrap();
        assert_eq!(policy.rules().len(), 4);
    }

    #[test]
    fn disabled_names_apply_to_defaults() {
        let policy = RedactionConfig::from_toml_str(r#"disabled = ["CreditCard", "Ssn"]"#)
            .unwrap()
            .build_policy()
            .unwrap();
        let names: Vec<_> = policy.rules().iter().map(|rule| rule.name()).collect();
        assert_eq!(names, ["Password", "ApiKey"]);
    }

    #[test]
    fn disabled_defaults_still_count_as_registered() {
        let options = RedactionConfig::from_toml_str(
            r#"
            disable_all_defaults = true
            disabled = ["Ssn"]

            [[custom]]
            name = "Ticket"
            pattern = 'TICKET-\d+'
            "#,
        )
        .unwrap()
        .into_options()
        .unwrap();

        assert!(is_registered(&options, "Ssn"));
        assert!(is_registered(&options, "Ticket"));
        assert!(!is_registered(&options, "ssn"));
        assert!(!is_registered(&RedactionPolicyOptions::create(), "Ticket"));
        assert!(!options.is_enabled("Ssn"));
    }

    #[test]
    fn custom_tables_honor_flags() {
        let policy = RedactionConfig::from_toml_str(
            r#"
            disable_all_defaults = true

            [[custom]]
            name = "DatabaseUrl"
            pattern = 'database_url=\S+'
            case_insensitive = true
            "#,
        )
        .unwrap()
        .build_policy()
        .unwrap();

        assert_eq!(
            policy.redact("DATABASE_URL=postgres://db ssn 123-45-6789"),
            "***REDACTED*** ssn 123-45-6789"
        );
    }

    #[test]
    fn unnamed_custom_pattern_is_named_after_its_text() {
        let options = RedactionConfig::from_toml_str(
            r#"
            [[custom]]
            pattern = 'CLIENT_SECRET'
            "#,
        )
        .unwrap()
        .into_options()
        .unwrap();
        assert!(options.is_enabled("CLIENT_SECRET"));
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let err = RedactionConfig::from_toml_str("disable_defaults = true").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn invalid_custom_pattern_surfaces_as_pattern_error() {
        let err = RedactionConfig::from_toml_str(
            r#"
            [[custom]]
            name = "Broken"
            pattern = '(unclosed'
            "#,
        )
        .unwrap()
        .build_policy()
        .unwrap_err();

        match err {
            ConfigError::Pattern(RedactionError::InvalidPattern { name, .. }) => {
                assert_eq!(name, "Broken");
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
