//! Form field kinds & metadata.
//!
//! A `FormField` is pure description: key, label, kind, whether it is
//! required, and an optional validator. Editing behaviour lives in
//! [`Form`](super::Form); runtime values live in [`FormState`].
//!
//! ```ignore
//! let field = FormField::new("username", "Username", FormFieldKind::Text)
//!     .required()
//!     .validator(|v, _| validators::username(v).map_err(|e| e.to_string()));
//! ```

use super::FormState;

/// Validator signature. Receives the field's current value and the whole
/// form state, so confirmation fields can compare against their primary.
pub type FieldValidator = Box<dyn Fn(&str, &FormState) -> Result<(), String> + Send + Sync>;

/// Input widget kinds.
///
/// Notes:
/// - Text and Secret are single-line editors
/// - Secret is only obfuscated visually; the value is kept plain in state
/// - Digits accepts ASCII digits only, up to `max_len` characters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormFieldKind {
    Text,
    Secret,
    Digits { max_len: usize },
}

pub struct FormField {
    pub key: String,
    pub label: String,
    pub kind: FormFieldKind,
    pub help: Option<String>,
    pub required: bool,
    pub validator: Option<FieldValidator>,
}

impl FormField {
    pub fn new(key: impl Into<String>, label: impl Into<String>, kind: FormFieldKind) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            kind,
            help: None,
            required: false,
            validator: None,
        }
    }

    /// Attach help / hint text shown beneath the field.
    pub fn help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    /// Empty input fails with "This field is required" before the validator runs.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn validator(
        mut self,
        f: impl Fn(&str, &FormState) -> Result<(), String> + Send + Sync + 'static,
    ) -> Self {
        self.validator = Some(Box::new(f));
        self
    }

    pub fn is_secret(&self) -> bool {
        matches!(self.kind, FormFieldKind::Secret)
    }

    /// Whether `c` may be typed into this field given its current length.
    pub fn accepts(&self, c: char, current_len: usize) -> bool {
        match self.kind {
            FormFieldKind::Text | FormFieldKind::Secret => true,
            FormFieldKind::Digits { max_len } => c.is_ascii_digit() && current_len < max_len,
        }
    }

    /// Run the required check and the validator against `value`.
    ///
    /// Empty optional fields are valid without consulting the validator.
    pub fn check(&self, value: &str, state: &FormState) -> Result<(), String> {
        if value.trim().is_empty() {
            return if self.required {
                Err(crate::domain::validators::ValidationError::Required.to_string())
            } else {
                Ok(())
            };
        }
        match &self.validator {
            Some(validate) => validate(value, state),
            None => Ok(()),
        }
    }
}
