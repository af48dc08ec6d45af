//! Keyboard Input
//!
//! Browser-independent snapshot of a keydown event. Each controller maps it
//! to its own shortcut enum with a pure function.

/// A keydown as seen by the controllers
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyInput {
    /// `KeyboardEvent.key`, e.g. "Enter", "Escape", "k"
    pub key: String,
    pub ctrl: bool,
    pub meta: bool,
    pub shift: bool,
    /// Id of the focused element, if it has one
    pub target_id: Option<String>,
    /// Focus is inside an input, textarea or contenteditable region
    pub in_editable: bool,
}

impl KeyInput {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            ..Default::default()
        }
    }

    pub fn with_ctrl(mut self) -> Self {
        self.ctrl = true;
        self
    }

    pub fn with_meta(mut self) -> Self {
        self.meta = true;
        self
    }

    pub fn with_shift(mut self) -> Self {
        self.shift = true;
        self
    }

    /// Focus is in the editable field `id`
    pub fn in_field(mut self, id: impl Into<String>) -> Self {
        self.target_id = Some(id.into());
        self.in_editable = true;
        self
    }

    /// Ctrl on Linux/Windows, Cmd on macOS
    pub fn command(&self) -> bool {
        self.ctrl || self.meta
    }

    pub fn target_is(&self, id: &str) -> bool {
        self.target_id.as_deref() == Some(id)
    }
}
