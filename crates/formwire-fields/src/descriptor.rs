//! Compiled field descriptors
//!
//! A [`FieldDescriptor`] tells the renderer which control to paint for one
//! field. Descriptors are rebuilt on every compilation pass and never mutated.

use crate::source::SelectOption;
use formwire_schema::ConstraintKind;
use serde::{Deserialize, Serialize};

/// Date input granularity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DateKind {
    /// Calendar date only
    #[default]
    Date,

    /// Date and time of day
    Datetime,
}

/// Control to render for a field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "tag", rename_all = "snake_case")]
pub enum Control {
    /// Text input; `numeric` inputs coerce through a number parse on change
    Text {
        /// Coerce input to a number
        numeric: bool,

        /// Constraint hints from the schema
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        constraints: Vec<ConstraintKind>,
    },

    /// On/off toggle
    Boolean,

    /// Date or datetime picker
    Date {
        /// Granularity
        kind: DateKind,
    },

    /// Select with a fixed option list
    SelectStatic {
        /// Options in display order
        options: Vec<SelectOption>,
    },

    /// Select fed by an external, possibly still loading, source
    SelectDynamic {
        /// Options received so far
        options: Vec<SelectOption>,

        /// Whether more options are being fetched
        loading: bool,
    },

    /// No control available for this schema shape
    Unsupported {
        /// Diagnostic message
        reason: String,
    },
}

/// Discriminant of [`Control`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlTag {
    /// [`Control::Text`]
    Text,
    /// [`Control::Boolean`]
    Boolean,
    /// [`Control::Date`]
    Date,
    /// [`Control::SelectStatic`]
    SelectStatic,
    /// [`Control::SelectDynamic`]
    SelectDynamic,
    /// [`Control::Unsupported`]
    Unsupported,
}

impl ControlTag {
    /// Stable tag name
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Boolean => "boolean",
            Self::Date => "date",
            Self::SelectStatic => "select_static",
            Self::SelectDynamic => "select_dynamic",
            Self::Unsupported => "unsupported",
        }
    }
}

impl std::fmt::Display for ControlTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Renderable description of one field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    /// Field name, also the form/query key
    pub field_name: String,

    /// Resolved label
    pub label: String,

    /// Control to render
    #[serde(flatten)]
    pub control: Control,
}

impl FieldDescriptor {
    /// Create descriptor
    #[inline]
    #[must_use]
    pub fn new(field_name: impl Into<String>, label: impl Into<String>, control: Control) -> Self {
        Self {
            field_name: field_name.into(),
            label: label.into(),
            control,
        }
    }

    /// Control discriminant
    #[must_use]
    pub fn tag(&self) -> ControlTag {
        match self.control {
            Control::Text { .. } => ControlTag::Text,
            Control::Boolean => ControlTag::Boolean,
            Control::Date { .. } => ControlTag::Date,
            Control::SelectStatic { .. } => ControlTag::SelectStatic,
            Control::SelectDynamic { .. } => ControlTag::SelectDynamic,
            Control::Unsupported { .. } => ControlTag::Unsupported,
        }
    }

    /// Options of select controls, empty otherwise
    #[must_use]
    pub fn options(&self) -> &[SelectOption] {
        match &self.control {
            Control::SelectStatic { options } | Control::SelectDynamic { options, .. } => options,
            _ => &[],
        }
    }

    /// Check if the control is a numeric text input
    #[inline]
    #[must_use]
    pub fn is_numeric(&self) -> bool {
        matches!(self.control, Control::Text { numeric: true, .. })
    }

    /// Check if the control is waiting for options
    #[inline]
    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self.control, Control::SelectDynamic { loading: true, .. })
    }
}

/// Parse raw input of a numeric text control
///
/// Surrounding whitespace is ignored; empty or unparsable input yields `None`.
#[must_use]
pub fn coerce_number(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|n| n.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_names() {
        let d = FieldDescriptor::new("q", "Search", Control::Boolean);
        assert_eq!(d.tag(), ControlTag::Boolean);
        assert_eq!(d.tag().to_string(), "boolean");
        assert_eq!(ControlTag::SelectDynamic.as_str(), "select_dynamic");
    }

    #[test]
    fn options_of_non_select_are_empty() {
        let d = FieldDescriptor::new(
            "age",
            "age",
            Control::Text {
                numeric: true,
                constraints: vec![],
            },
        );
        assert!(d.options().is_empty());
        assert!(d.is_numeric());
    }

    #[test]
    fn serializes_flat_with_tag() {
        let d = FieldDescriptor::new("when", "When", Control::Date { kind: DateKind::Datetime });
        let json = serde_json::to_value(&d).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"field_name": "when", "label": "When", "tag": "date", "kind": "datetime"})
        );
    }

    #[test]
    fn coerce_number_cases() {
        assert_eq!(coerce_number(" 42 "), Some(42.0));
        assert_eq!(coerce_number("3.5"), Some(3.5));
        assert_eq!(coerce_number(""), None);
        assert_eq!(coerce_number("abc"), None);
        assert_eq!(coerce_number("inf"), None);
    }
}
