//! Form runtime state.
//!
//! Holds the captured values and the per-field validation status of one
//! form. Kept free of UI concerns so it can be unit tested and read by the
//! reducer when building requests.

use std::collections::HashMap;

/// Validation status of one field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FieldStatus {
    /// Never validated; nothing is shown.
    #[default]
    Untouched,
    Valid,
    Invalid(String),
}

impl FieldStatus {
    pub fn is_valid(&self) -> bool {
        matches!(self, FieldStatus::Valid)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            FieldStatus::Invalid(msg) => Some(msg),
            _ => None,
        }
    }
}

#[derive(Debug, Default, Clone)]
pub struct FormState {
    pub values: HashMap<String, String>,
    pub status: HashMap<String, FieldStatus>,
}

impl FormState {
    /// Set (or replace) the value of a field.
    pub fn set_value(&mut self, key: &str, value: impl Into<String>) {
        self.values.insert(key.to_string(), value.into());
    }

    /// Current value, empty when never set.
    pub fn value(&self, key: &str) -> &str {
        self.values.get(key).map(String::as_str).unwrap_or("")
    }

    /// Trimmed value, `None` when blank.
    pub fn optional(&self, key: &str) -> Option<String> {
        let v = self.value(key).trim();
        (!v.is_empty()).then(|| v.to_string())
    }

    pub fn status(&self, key: &str) -> &FieldStatus {
        const UNTOUCHED: &FieldStatus = &FieldStatus::Untouched;
        self.status.get(key).unwrap_or(UNTOUCHED)
    }

    pub fn set_status(&mut self, key: &str, status: FieldStatus) {
        self.status.insert(key.to_string(), status);
    }

    pub fn is_touched(&self, key: &str) -> bool {
        !matches!(self.status(key), FieldStatus::Untouched)
    }
}
