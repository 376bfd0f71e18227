//! Externally supplied option lists for select-style fields

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One selectable option
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    /// Submitted value
    pub value: String,

    /// Displayed label
    pub label: String,

    /// Whether the option is shown but not selectable
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub disabled: bool,
}

impl SelectOption {
    /// Create enabled option
    #[inline]
    #[must_use]
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            disabled: false,
        }
    }

    /// Option whose label equals its value
    #[inline]
    #[must_use]
    pub fn plain(value: impl Into<String>) -> Self {
        let value = value.into();
        Self::new(value.clone(), value)
    }

    /// Mark option disabled
    #[inline]
    #[must_use]
    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }
}

/// Hint on how a field's value is shaped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueKind {
    /// Calendar date
    Date,

    /// Date with time of day
    Datetime,

    /// Several values at once
    Array,
}

/// Options for one field, typically fetched from related entities
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ValueSource {
    /// Available options, if fetched
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub values: Option<Vec<SelectOption>>,

    /// Whether a fetch is in flight
    #[serde(default)]
    pub loading: bool,

    /// Value shape hint
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<ValueKind>,
}

impl ValueSource {
    /// Source with loaded options
    #[must_use]
    pub fn with_values(values: impl IntoIterator<Item = SelectOption>) -> Self {
        Self {
            values: Some(values.into_iter().collect()),
            loading: false,
            kind: None,
        }
    }

    /// Source whose options are still being fetched
    #[inline]
    #[must_use]
    pub fn loading() -> Self {
        Self {
            values: None,
            loading: true,
            kind: None,
        }
    }

    /// Source carrying only a shape hint
    #[inline]
    #[must_use]
    pub fn of_kind(kind: ValueKind) -> Self {
        Self {
            values: None,
            loading: false,
            kind: Some(kind),
        }
    }

    /// Set shape hint
    #[inline]
    #[must_use]
    pub fn with_kind(mut self, kind: ValueKind) -> Self {
        self.kind = Some(kind);
        self
    }

    /// Loaded options, empty when none were supplied
    #[inline]
    #[must_use]
    pub fn options(&self) -> &[SelectOption] {
        self.values.as_deref().unwrap_or(&[])
    }

    /// Check if at least one option is available
    #[inline]
    #[must_use]
    pub fn has_options(&self) -> bool {
        !self.options().is_empty()
    }
}

/// Value sources keyed by field name
pub type ValueSources = IndexMap<String, ValueSource>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_values_have_no_options() {
        let source = ValueSource::with_values([]);
        assert!(!source.has_options());
        assert!(ValueSource::default().options().is_empty());
    }

    #[test]
    fn option_builders() {
        let opt = SelectOption::plain("A").disabled();
        assert_eq!(opt.label, "A");
        assert!(opt.disabled);
    }

    #[test]
    fn decodes_from_json() {
        let json = r#"{"values":[{"value":"s1","label":"Morning"}],"kind":"array"}"#;
        let source: ValueSource = serde_json::from_str(json).unwrap();
        assert!(!source.loading);
        assert_eq!(source.kind, Some(ValueKind::Array));
        assert_eq!(source.options()[0], SelectOption::new("s1", "Morning"));
    }
}
