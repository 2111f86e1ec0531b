//! Textarea Element Implementation

/// Multi-line text control
#[derive(Debug, Clone, Default)]
pub struct TextareaElement {
    pub value: String,
}

impl TextareaElement {
    /// Create an empty textarea
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the initial value
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }
}
