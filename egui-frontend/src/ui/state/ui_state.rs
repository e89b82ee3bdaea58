//! # UI State Module
//!
//! General UI state that is not tied to a particular component: the pending
//! user feedback message and the active visual theme.

/// A message waiting to be acknowledged by the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserMessage {
    pub title: String,
    pub text: String,
    pub is_error: bool,
}

/// General UI state for user feedback and appearance
#[derive(Debug)]
pub struct UIState {
    /// Message shown in a dismissable window until acknowledged
    pub message: Option<UserMessage>,

    /// Whether the dark theme is active
    pub dark_mode: bool,
}

impl UIState {
    pub fn new(dark_mode: bool) -> Self {
        Self {
            message: None,
            dark_mode,
        }
    }

    pub fn set_success(&mut self, text: impl Into<String>) {
        self.message = Some(UserMessage {
            title: "Success".to_string(),
            text: text.into(),
            is_error: false,
        });
    }

    pub fn set_error(&mut self, title: impl Into<String>, text: impl Into<String>) {
        self.message = Some(UserMessage {
            title: title.into(),
            text: text.into(),
            is_error: true,
        });
    }

    pub fn clear_messages(&mut self) {
        self.message = None;
    }

    /// Flip between the dark and light themes
    pub fn toggle_theme(&mut self) {
        self.dark_mode = !self.dark_mode;
    }
}
