//! Scalar destructuring hook for structured property capture.
//!
//! Logging pipelines that capture structured properties can offer each value
//! to [`RedactionPolicy::try_destructure`]. Only string values participate:
//! everything else is declined so the pipeline falls through to its default
//! formatting. A string that contains nothing sensitive is declined as well.

use std::{any::Any, borrow::Cow, sync::Arc};

use crate::policy::RedactionPolicy;

/// Builds the pipeline's property representation for a redacted string.
///
/// Any `Fn(String) -> V` closure is a factory.
pub trait PropertyValueFactory {
    /// The property type produced for the pipeline.
    type Value;

    /// Wraps redacted text as a scalar property value.
    fn create_property_value(&self, text: String) -> Self::Value;
}

impl<F, V> PropertyValueFactory for F
where
    F: Fn(String) -> V,
{
    type Value = V;

    fn create_property_value(&self, text: String) -> V {
        self(text)
    }
}

fn as_text(value: &dyn Any) -> Option<&str> {
    value
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| value.downcast_ref::<&'static str>().copied())
        .or_else(|| value.downcast_ref::<Box<str>>().map(|text| &**text))
        .or_else(|| value.downcast_ref::<Cow<'static, str>>().map(|text| &**text))
        .or_else(|| value.downcast_ref::<Arc<str>>().map(|text| &**text))
}

impl RedactionPolicy {
    /// Offers a captured property value to the policy.
    ///
    /// Returns `None` (declined) for non-string values and for strings that
    /// redact to themselves. Otherwise returns the factory's property value for
    /// the redacted text.
    ///
    /// ```rust
    /// use logscrub::RedactionPolicy;
    ///
    /// let policy = RedactionPolicy::global();
    /// let make = |text: String| text;
    ///
    /// assert_eq!(
    ///     policy.try_destructure(&String::from("password: secret"), &make),
    ///     Some("***REDACTED***".to_string())
    /// );
    /// assert_eq!(policy.try_destructure(&"Hello World", &make), None);
    /// assert_eq!(policy.try_destructure(&123_u32, &make), None);
    /// ```
    pub fn try_destructure<F>(&self, value: &dyn Any, factory: &F) -> Option<F::Value>
    where
        F: PropertyValueFactory,
    {
        let text = as_text(value)?;
        match self.redact(text) {
            Cow::Owned(redacted) if redacted != text => {
                Some(factory.create_property_value(redacted))
            }
            _ => None,
        }
    }
}
