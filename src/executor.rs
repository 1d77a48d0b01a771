//! Result execution - what the host does when a result is activated

use serde::Serialize;

/// The action to perform when a result is executed
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ExecutionAction {
    /// Copy text to the clipboard
    CopyToClipboard { content: String },

    /// No action (placeholder items)
    DoNothing,
}

impl ExecutionAction {
    /// Text handed to the clipboard, if any
    pub fn clipboard_text(&self) -> Option<&str> {
        match self {
            ExecutionAction::CopyToClipboard { content } => Some(content),
            ExecutionAction::DoNothing => None,
        }
    }
}
