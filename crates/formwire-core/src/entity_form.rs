//! Entity form controller
//!
//! Edits one record of an entity. Every control writes through the field's
//! compiled descriptor, so numeric inputs land in the payload as numbers and
//! toggles as booleans.

use crate::error::{FormError, FormResult};
use formwire_fields::{coerce_number, walk, Control, FieldDescriptor, ValueSources};
use formwire_schema::ObjectSchema;
use serde_json::{Map, Number, Value};

/// Create/edit form for one entity
#[derive(Debug, Clone)]
pub struct EntityForm {
    schema: ObjectSchema,
    descriptors: Vec<FieldDescriptor>,
    initial: Map<String, Value>,
    draft: Map<String, Value>,
}

impl EntityForm {
    /// Empty form; every field starts as `null`
    #[must_use]
    pub fn new(schema: ObjectSchema, sources: &ValueSources) -> Self {
        let descriptors = walk(&schema, sources);
        let initial: Map<String, Value> = schema
            .names()
            .map(|name| (name.to_string(), Value::Null))
            .collect();
        Self {
            schema,
            descriptors,
            draft: initial.clone(),
            initial,
        }
    }

    /// Recompile controls for new value sources; typed values are kept
    pub fn refresh_sources(&mut self, sources: &ValueSources) {
        self.descriptors = walk(&self.schema, sources);
    }

    /// Initialize the form from a stored record
    ///
    /// Keys the schema does not declare are ignored; missing ones become `null`.
    ///
    /// # Errors
    /// Returns [`FormError::NotAnObject`] if `record` is not a JSON object.
    pub fn load(&mut self, record: &Value) -> FormResult<()> {
        let object = record.as_object().ok_or(FormError::NotAnObject)?;
        self.initial = self
            .schema
            .names()
            .map(|name| (name.to_string(), object.get(name).cloned().unwrap_or(Value::Null)))
            .collect();
        self.draft = self.initial.clone();
        tracing::debug!(fields = self.initial.len(), "loaded record");
        Ok(())
    }

    /// Compiled controls in field order
    #[inline]
    #[must_use]
    pub fn descriptors(&self) -> &[FieldDescriptor] {
        &self.descriptors
    }

    /// Descriptor of one field
    #[must_use]
    pub fn descriptor(&self, field: &str) -> Option<&FieldDescriptor> {
        self.descriptors.iter().find(|d| d.field_name == field)
    }

    /// Current value of one field
    #[must_use]
    pub fn value(&self, field: &str) -> Option<&Value> {
        self.draft.get(field)
    }

    /// Apply raw text input to a field
    ///
    /// # Errors
    /// Returns [`FormError::UnknownField`] for undeclared fields,
    /// [`FormError::TypeMismatch`] for toggles and [`FormError::Unsupported`]
    /// for fields without a control.
    pub fn edit_text(&mut self, field: &str, raw: &str) -> FormResult<()> {
        let descriptor = self
            .descriptor(field)
            .ok_or_else(|| FormError::UnknownField(field.to_string()))?;
        let value = match &descriptor.control {
            Control::Text { numeric: true, .. } => number_value(raw),
            Control::Text { .. }
            | Control::Date { .. }
            | Control::SelectStatic { .. }
            | Control::SelectDynamic { .. } => Value::String(raw.to_string()),
            Control::Boolean => return Err(FormError::type_mismatch(field, "a toggle")),
            Control::Unsupported { reason } => {
                return Err(FormError::Unsupported {
                    field: field.to_string(),
                    reason: reason.clone(),
                })
            }
        };
        self.draft.insert(field.to_string(), value);
        Ok(())
    }

    /// Flip a boolean field; `null` counts as off
    ///
    /// # Errors
    /// Returns [`FormError::UnknownField`] for undeclared fields and
    /// [`FormError::TypeMismatch`] for non-boolean controls.
    pub fn toggle(&mut self, field: &str) -> FormResult<bool> {
        let descriptor = self
            .descriptor(field)
            .ok_or_else(|| FormError::UnknownField(field.to_string()))?;
        if !matches!(descriptor.control, Control::Boolean) {
            return Err(FormError::type_mismatch(field, "text input"));
        }
        let next = !self.draft.get(field).and_then(Value::as_bool).unwrap_or(false);
        self.draft.insert(field.to_string(), Value::Bool(next));
        Ok(next)
    }

    /// Check if any value differs from the loaded record
    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.draft != self.initial
    }

    /// Values to send to the backend, in field order
    #[must_use]
    pub fn payload(&self) -> Value {
        Value::Object(self.draft.clone())
    }
}

/// Integral input stays an integer in the payload
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
fn number_value(raw: &str) -> Value {
    let Some(n) = coerce_number(raw) else {
        return Value::Null;
    };
    if n.fract() == 0.0 && n.abs() < i64::MAX as f64 {
        return Value::from(n as i64);
    }
    Number::from_f64(n).map_or(Value::Null, Value::Number)
}
