//! Compiled pattern rules and the flags used to compile custom patterns.

use std::borrow::Cow;

use regex::{Match, NoExpand, Regex, RegexBuilder};

use crate::redaction::RedactionError;

/// Flags applied when compiling a custom pattern.
///
/// All flags default to off, matching the behavior of [`Regex::new`]. Inline
/// flags such as `(?i)` inside the pattern keep working either way.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PatternOptions {
    case_insensitive: bool,
    multi_line: bool,
    dot_matches_new_line: bool,
    ignore_whitespace: bool,
    size_limit: Option<usize>,
}

impl PatternOptions {
    /// Options with every flag off.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Matches letters regardless of case.
    #[must_use]
    pub fn case_insensitive(mut self, yes: bool) -> Self {
        self.case_insensitive = yes;
        self
    }

    /// Makes `^` and `$` match at line boundaries.
    #[must_use]
    pub fn multi_line(mut self, yes: bool) -> Self {
        self.multi_line = yes;
        self
    }

    /// Lets `.` match `\n`.
    #[must_use]
    pub fn dot_matches_new_line(mut self, yes: bool) -> Self {
        self.dot_matches_new_line = yes;
        self
    }

    /// Ignores whitespace and allows `#` comments in the pattern.
    #[must_use]
    pub fn ignore_whitespace(mut self, yes: bool) -> Self {
        self.ignore_whitespace = yes;
        self
    }

    /// Caps the size of the compiled program, in bytes.
    #[must_use]
    pub fn size_limit(mut self, bytes: usize) -> Self {
        self.size_limit = Some(bytes);
        self
    }

    pub(crate) fn compile(&self, name: &str, pattern: &str) -> Result<Regex, RedactionError> {
        let mut builder = RegexBuilder::new(pattern);
        builder
            .case_insensitive(self.case_insensitive)
            .multi_line(self.multi_line)
            .dot_matches_new_line(self.dot_matches_new_line)
            .ignore_whitespace(self.ignore_whitespace);
        if let Some(limit) = self.size_limit {
            builder.size_limit(limit);
        }
        builder
            .build()
            .map_err(|source| RedactionError::InvalidPattern {
                name: name.to_string(),
                source,
            })
    }
}

/// A named, compiled matcher owned by a [`RedactionPolicy`](crate::RedactionPolicy).
///
/// Rules are immutable once compiled. Cloning is cheap: the compiled program is
/// reference counted by `regex`.
#[derive(Clone, Debug)]
pub struct PatternRule {
    name: Cow<'static, str>,
    expression: Regex,
    // Digit shapes end at the end of the digit run, whatever follows it.
    rejects_trailing_digit: bool,
}

impl PatternRule {
    pub(crate) fn new(name: Cow<'static, str>, expression: Regex) -> Self {
        Self {
            name,
            expression,
            rejects_trailing_digit: false,
        }
    }

    pub(crate) fn rejecting_trailing_digit(mut self, yes: bool) -> Self {
        self.rejects_trailing_digit = yes;
        self
    }

    /// The rule's name. Defaults use their canonical names; custom patterns use
    /// the name they were added under.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The compiled expression.
    ///
    /// Built-in digit shapes are further restricted to matches not directly
    /// followed by a digit; use [`find_iter`](Self::find_iter) to honor that.
    pub fn expression(&self) -> &Regex {
        &self.expression
    }

    /// Source text of the compiled expression.
    pub fn pattern(&self) -> &str {
        self.expression.as_str()
    }

    /// Non-overlapping spans this rule redacts, left to right.
    pub fn find_iter<'h>(&self, text: &'h str) -> impl Iterator<Item = Match<'h>> {
        let rejects_trailing_digit = self.rejects_trailing_digit;
        self.expression.find_iter(text).filter(move |found| {
            !rejects_trailing_digit
                || !text[found.end()..].starts_with(|c: char| c.is_ascii_digit())
        })
    }

    /// Reports whether this rule would redact anything in `text`.
    pub fn is_match(&self, text: &str) -> bool {
        self.find_iter(text).next().is_some()
    }

    /// Replaces every span of [`find_iter`](Self::find_iter) with `marker`,
    /// borrowing `text` when nothing matched.
    pub(crate) fn replace_all<'h>(&self, text: &'h str, marker: &str) -> Cow<'h, str> {
        if !self.rejects_trailing_digit {
            return self.expression.replace_all(text, NoExpand(marker));
        }

        let mut redacted = String::new();
        let mut last = 0;
        let mut matched = false;
        for found in self.find_iter(text) {
            redacted.push_str(&text[last..found.start()]);
            redacted.push_str(marker);
            last = found.end();
            matched = true;
        }
        if !matched {
            return Cow::Borrowed(text);
        }
        redacted.push_str(&text[last..]);
        Cow::Owned(redacted)
    }
}
