//! Step wizard controller.
//!
//! Tracks which of N sequential panels is active. "Next" only advances when
//! the current panel validates and turns into a submission request on the
//! last panel; "Back" always retreats and never touches field values.

use crate::form::Form;

/// Result of a "Next" press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// Moved to the given step index.
    Moved(usize),
    /// The current step has invalid fields; the index did not change.
    Blocked,
    /// The last step validated; the accumulated data should be submitted.
    Submit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepWizard {
    current: usize,
    total: usize,
}

impl StepWizard {
    /// A wizard needs at least one step.
    pub fn new(total: usize) -> Self {
        Self {
            current: 0,
            total: total.max(1),
        }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn is_first(&self) -> bool {
        self.current == 0
    }

    pub fn is_last(&self) -> bool {
        self.current + 1 == self.total
    }

    pub fn next(&mut self, current_step_valid: bool) -> Advance {
        if !current_step_valid {
            return Advance::Blocked;
        }
        if self.is_last() {
            return Advance::Submit;
        }
        self.current += 1;
        Advance::Moved(self.current)
    }

    /// Retreat one step. `false` when already on the first step.
    pub fn back(&mut self) -> bool {
        if self.is_first() {
            return false;
        }
        self.current -= 1;
        true
    }
}

/// A wizard over one [`Form`] per step.
pub struct FormWizard {
    wizard: StepWizard,
    steps: Vec<Form>,
}

impl FormWizard {
    /// A wizard always has a first step, so the current form always exists.
    pub fn new(first: Form, rest: impl IntoIterator<Item = Form>) -> Self {
        let steps: Vec<Form> = std::iter::once(first).chain(rest).collect();
        Self {
            wizard: StepWizard::new(steps.len()),
            steps,
        }
    }

    pub fn position(&self) -> StepWizard {
        self.wizard
    }

    pub fn current_form(&self) -> &Form {
        &self.steps[self.wizard.current()]
    }

    pub fn current_form_mut(&mut self) -> &mut Form {
        &mut self.steps[self.wizard.current()]
    }

    /// Validate the current step (showing its errors) and advance if it passes.
    pub fn next(&mut self) -> Advance {
        let valid = self.current_form_mut().validate_all();
        self.wizard.next(valid)
    }

    pub fn back(&mut self) -> bool {
        self.wizard.back()
    }

    fn owner(&self, key: &str) -> Option<&Form> {
        self.steps
            .iter()
            .find(|form| form.schema().field_by_key(key).is_some())
    }

    /// Read a value from whichever step owns `key`.
    pub fn value(&self, key: &str) -> &str {
        self.owner(key).map(|form| form.value(key)).unwrap_or("")
    }

    /// Trimmed value from the owning step, `None` when blank.
    pub fn optional(&self, key: &str) -> Option<String> {
        self.owner(key)
            .and_then(|form| form.state().optional(key))
    }

    /// Every step passes validation. Submission is only built when this holds.
    pub fn all_valid(&self) -> bool {
        self.steps.iter().all(Form::is_valid)
    }
}
