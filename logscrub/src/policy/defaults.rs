//! Built-in sensitive-data shapes.
//!
//! Every default pattern is identified by a stable name and compiled from a
//! fixed expression. The canonical evaluation order is the declaration order of
//! [`DefaultPattern::ALL`].

use regex::Regex;

/// Literal substituted for every matched span, regardless of pattern or length.
pub const REDACTION_MARKER: &str = "***REDACTED***";

/// One of the built-in sensitive-data shapes seeded into every builder.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DefaultPattern {
    /// 13–19 digit card numbers, optionally grouped by spaces or hyphens.
    CreditCard,
    /// North-American social security numbers in `ddd-dd-dddd` form.
    Ssn,
    /// `password`/`passwd`/`pwd` followed by a separator and a value.
    Password,
    /// `api_key`/`apikey`/`access_token`/`bearer` followed by a separator and a value.
    ApiKey,
}

impl DefaultPattern {
    /// All defaults, in evaluation order.
    pub const ALL: [DefaultPattern; 4] = [
        DefaultPattern::CreditCard,
        DefaultPattern::Ssn,
        DefaultPattern::Password,
        DefaultPattern::ApiKey,
    ];

    /// The rule name used by `enable`/`disable` on the builder.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            DefaultPattern::CreditCard => "CreditCard",
            DefaultPattern::Ssn => "Ssn",
            DefaultPattern::Password => "Password",
            DefaultPattern::ApiKey => "ApiKey",
        }
    }

    /// The regular expression source for this shape.
    #[must_use]
    pub const fn expression(self) -> &'static str {
        match self {
            // Three blocks of four with an optional separator, then 1-7 trailing
            // digits: 13 to 19 digits in total.
            DefaultPattern::CreditCard => r"\b(?:\d{4}[ -]?){3}\d{1,7}",
            DefaultPattern::Ssn => r"\b\d{3}-\d{2}-\d{4}",
            DefaultPattern::Password => r"(?i)(?:password|passwd|pwd)\s*[:=\s]\s*\S+",
            DefaultPattern::ApiKey => {
                r"(?i)(?:api[_-]?key|access[_-]?token|bearer)\s*[:=\s]\s*\S+"
            }
        }
    }

    /// Whether a match must not be directly followed by another digit.
    ///
    /// The digit shapes close on the end of the digit run instead of a word
    /// boundary, so a number glued to a keyword (`123-45-6789password=x`) is
    /// still found, while a longer digit run is not cut short.
    #[must_use]
    pub const fn rejects_trailing_digit(self) -> bool {
        matches!(self, DefaultPattern::CreditCard | DefaultPattern::Ssn)
    }

    /// Looks up a default by its rule name. Names are case-sensitive.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|pattern| pattern.name() == name)
    }

    /// Compiles the expression.
    ///
    /// The expressions are fixed at compile time and covered by tests, so a
    /// failure here is a bug in this crate rather than a configuration error.
    pub(crate) fn compile(self) -> Regex {
        Regex::new(self.expression()).unwrap_or_else(|err| {
            unreachable!("built-in pattern {} does not compile: {err}", self.name())
        })
    }
}

impl std::fmt::Display for DefaultPattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::{DefaultPattern, REDACTION_MARKER};

    #[test]
    fn every_default_compiles() {
        for pattern in DefaultPattern::ALL {
            let _ = pattern.compile();
        }
    }

    #[test]
    fn names_round_trip() {
        for pattern in DefaultPattern::ALL {
            assert_eq!(DefaultPattern::from_name(pattern.name()), Some(pattern));
        }
        assert_eq!(DefaultPattern::from_name("creditcard"), None);
        assert_eq!(DefaultPattern::from_name("Email"), None);
    }

    #[test]
    fn credit_card_accepts_grouped_and_ungrouped_runs() {
        let regex = DefaultPattern::CreditCard.compile();
        assert!(regex.is_match("4532-1234-5678-9010"));
        assert!(regex.is_match("4532 1234 5678 9010"));
        assert!(regex.is_match("4532123456789010"));
        assert!(regex.is_match("4532123456789"));
        assert!(!regex.is_match("453212345678"));
        assert!(!regex.is_match("123-45-6789"));
    }

    #[test]
    fn ssn_requires_hyphenated_grouping() {
        let regex = DefaultPattern::Ssn.compile();
        assert!(regex.is_match("123-45-6789"));
        assert!(!regex.is_match("123456789"));
        assert!(!regex.is_match("1234-56-7890"));
    }

    #[test]
    fn only_digit_shapes_reject_a_trailing_digit() {
        assert!(DefaultPattern::CreditCard.rejects_trailing_digit());
        assert!(DefaultPattern::Ssn.rejects_trailing_digit());
        assert!(!DefaultPattern::Password.rejects_trailing_digit());
        assert!(!DefaultPattern::ApiKey.rejects_trailing_digit());
    }

    #[test]
    fn digit_shapes_match_before_a_word_character() {
        assert!(DefaultPattern::Ssn.compile().is_match("123-45-6789password"));
        assert!(DefaultPattern::CreditCard.compile().is_match("4532-1234-5678-9010apikey"));
    }

    #[test]
    fn password_is_case_insensitive() {
        let regex = DefaultPattern::Password.compile();
        assert!(regex.is_match("PASSWORD=hunter2"));
        assert!(regex.is_match("Pwd: x"));
        assert!(regex.is_match("db_password=abc"));
        assert!(!regex.is_match("password:"));
    }

    #[test]
    fn api_key_covers_token_spellings() {
        let regex = DefaultPattern::ApiKey.compile();
        assert!(regex.is_match("api-key: abc"));
        assert!(regex.is_match("API_KEY=abc"));
        assert!(regex.is_match("access_token=abc"));
        assert!(regex.is_match("Authorization: Bearer abc.def"));
        assert!(!regex.is_match("bearer_token_here"));
    }

    #[test]
    fn marker_matches_no_default() {
        for pattern in DefaultPattern::ALL {
            assert!(!pattern.compile().is_match(REDACTION_MARKER), "{pattern}");
        }
    }
}
