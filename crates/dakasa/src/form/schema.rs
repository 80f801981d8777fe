use super::FormField;

/// Declarative description of one form panel: title, optional description,
/// and the ordered fields.
pub struct FormSchema {
    pub title: String,
    pub description: Option<String>,
    pub fields: Vec<FormField>,
}

impl FormSchema {
    pub fn new(title: impl Into<String>, fields: Vec<FormField>) -> Self {
        Self {
            title: title.into(),
            description: None,
            fields,
        }
    }

    /// Attach a description rendered above the fields.
    pub fn description(mut self, desc: impl Into<String>) -> Self {
        self.description = Some(desc.into());
        self
    }

    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    pub fn field_by_key(&self, key: &str) -> Option<&FormField> {
        self.fields.iter().find(|f| f.key == key)
    }
}
