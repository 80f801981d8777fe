//! Structured form state bound to the terminal inputs.
//!
//! Split into:
//! - `field.rs`  : `FormFieldKind`, `FormField`
//! - `schema.rs` : `FormSchema` (ordered fields + presentation metadata)
//! - `state.rs`  : `FormState` (values + per-field `FieldStatus`)
//!
//! [`Form`] ties them together with focus handling and a single `tui_input`
//! editor for the focused field. Every edit is written straight back into
//! the `FormState`, so nothing ever has to look values up from the widgets.

mod field;
mod schema;
mod state;

pub use field::{FieldValidator, FormField, FormFieldKind};
pub use schema::FormSchema;
pub use state::{FieldStatus, FormState};

use crossterm::event::{Event as CrosstermEvent, KeyCode, KeyEvent};
use tui_input::{backend::crossterm::EventHandler, Input};

pub struct Form {
    schema: FormSchema,
    state: FormState,
    focused: usize,
    input: Input,
}

impl Form {
    pub fn new(schema: FormSchema) -> Self {
        let mut form = Self {
            schema,
            state: FormState::default(),
            focused: 0,
            input: Input::default(),
        };
        form.load_input();
        form
    }

    pub fn schema(&self) -> &FormSchema {
        &self.schema
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn value(&self, key: &str) -> &str {
        self.state.value(key)
    }

    pub fn focused_index(&self) -> usize {
        self.focused
    }

    pub fn focused_field(&self) -> Option<&FormField> {
        self.schema.fields.get(self.focused)
    }

    /// Cursor column inside the focused editor.
    pub fn cursor(&self) -> usize {
        self.input.visual_cursor()
    }

    /// Programmatic assignment (prefill, tests). Re-validates touched fields.
    pub fn set_value(&mut self, key: &str, value: impl Into<String>) {
        self.state.set_value(key, value);
        if self.focused_field().is_some_and(|f| f.key == key) {
            self.load_input();
        }
        self.revalidate_touched();
    }

    pub fn focus_next(&mut self) {
        let count = self.schema.field_count();
        if count == 0 {
            return;
        }
        self.focused = (self.focused + 1) % count;
        self.load_input();
    }

    pub fn focus_prev(&mut self) {
        let count = self.schema.field_count();
        if count == 0 {
            return;
        }
        self.focused = if self.focused == 0 {
            count - 1
        } else {
            self.focused - 1
        };
        self.load_input();
    }

    /// Feed a key into the focused editor.
    pub fn handle_key(&mut self, key: KeyEvent) {
        let Some(field) = self.schema.fields.get(self.focused) else {
            return;
        };
        if let KeyCode::Char(c) = key.code {
            if !field.accepts(c, self.input.value().chars().count()) {
                return;
            }
        }
        let field_key = field.key.clone();
        if self
            .input
            .handle_event(&CrosstermEvent::Key(key))
            .is_some()
        {
            self.state.set_value(&field_key, self.input.value());
            self.revalidate_touched();
        }
    }

    /// Validate every field, marking all of them touched. Returns whether
    /// all of them passed.
    pub fn validate_all(&mut self) -> bool {
        let mut all_valid = true;
        for field in &self.schema.fields {
            let status = match field.check(self.state.value(&field.key), &self.state) {
                Ok(()) => FieldStatus::Valid,
                Err(msg) => {
                    all_valid = false;
                    FieldStatus::Invalid(msg)
                }
            };
            self.state.set_status(&field.key, status);
        }
        all_valid
    }

    /// Validation without marking anything touched.
    pub fn is_valid(&self) -> bool {
        self.schema
            .fields
            .iter()
            .all(|f| f.check(self.state.value(&f.key), &self.state).is_ok())
    }

    /// Blank the given fields (e.g. secrets after a failed attempt).
    pub fn clear(&mut self, keys: &[&str]) {
        for key in keys {
            self.state.set_value(key, "");
            self.state.set_status(key, FieldStatus::Untouched);
        }
        self.load_input();
    }

    // Live re-validation only for fields the user already saw errors on, so
    // confirmations follow their primary field as it changes.
    fn revalidate_touched(&mut self) {
        for field in &self.schema.fields {
            if !self.state.is_touched(&field.key) {
                continue;
            }
            let status = match field.check(self.state.value(&field.key), &self.state) {
                Ok(()) => FieldStatus::Valid,
                Err(msg) => FieldStatus::Invalid(msg),
            };
            self.state.set_status(&field.key, status);
        }
    }

    fn load_input(&mut self) {
        let value = self
            .focused_field()
            .map(|f| self.state.value(&f.key).to_string())
            .unwrap_or_default();
        self.input = Input::default().with_value(value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_text(form: &mut Form, text: &str) {
        for c in text.chars() {
            form.handle_key(key(KeyCode::Char(c)));
        }
    }

    fn sample() -> Form {
        Form::new(FormSchema::new(
            "Sample",
            vec![
                FormField::new("password", "Password", FormFieldKind::Secret).required(),
                FormField::new("confirm", "Confirm", FormFieldKind::Secret)
                    .required()
                    .validator(|v, s| {
                        if v == s.value("password") {
                            Ok(())
                        } else {
                            Err("mismatch".into())
                        }
                    }),
                FormField::new("code", "Code", FormFieldKind::Digits { max_len: 6 }),
            ],
        ))
    }

    #[test]
    fn typing_writes_into_state() {
        let mut form = sample();
        type_text(&mut form, "Potato");
        form.handle_key(key(KeyCode::Backspace));
        assert_eq!(form.value("password"), "Potat");
        assert_eq!(form.cursor(), 5);
    }

    #[test]
    fn focus_wraps_and_keeps_values() {
        let mut form = sample();
        type_text(&mut form, "abc");
        form.focus_prev();
        assert_eq!(form.focused_index(), 2);
        form.focus_next();
        assert_eq!(form.focused_index(), 0);
        type_text(&mut form, "d");
        assert_eq!(form.value("password"), "abcd");
    }

    #[test]
    fn digits_field_ignores_letters_and_overflow() {
        let mut form = sample();
        form.focus_prev();
        type_text(&mut form, "12a34567");
        assert_eq!(form.value("code"), "123456");
    }

    #[test]
    fn untouched_fields_show_nothing_until_validated() {
        let mut form = sample();
        assert_eq!(form.state().status("password"), &FieldStatus::Untouched);
        assert!(!form.validate_all());
        assert_eq!(
            form.state().status("password").error(),
            Some("This field is required")
        );
    }

    #[test]
    fn confirmation_follows_primary_once_touched() {
        let mut form = sample();
        form.set_value("password", "Potato123*");
        form.set_value("confirm", "Potato123");
        assert!(!form.validate_all());
        assert_eq!(form.state().status("confirm").error(), Some("mismatch"));

        form.set_value("password", "Potato123");
        assert!(form.state().status("confirm").is_valid());
        assert!(form.is_valid());
    }

    #[test]
    fn clear_resets_values_and_status() {
        let mut form = sample();
        form.set_value("password", "x");
        form.validate_all();
        form.clear(&["password"]);
        assert_eq!(form.value("password"), "");
        assert_eq!(form.state().status("password"), &FieldStatus::Untouched);
    }
}
