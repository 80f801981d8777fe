use crossterm::event::KeyEvent;
use serde::{Deserialize, Serialize};
use strum::Display;

use crate::core::effects::TaskResultKind;
use crate::core::executor::TaskId;
use crate::core::state::Mode;

#[derive(Debug, Clone, PartialEq, Serialize, Display, Deserialize)]
pub enum Action {
    Tick,
    Render,
    Resize(u16, u16),
    Suspend,
    Resume,
    Quit,
    ClearScreen,
    Error(String),
    FocusNext,
    FocusPrev,
    /// Raw key for the focused input.
    Edit(KeyEvent),
    /// "Next" / "Send" on the active panel.
    Submit,
    /// "Back" on the active panel.
    Back,
    Navigate(Mode),
    DismissAlert,
    TaskStarted(TaskId, String),
    TaskFinished(TaskId, TaskResultKind),
}
