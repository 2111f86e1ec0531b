//! Input Element Implementation
//!
//! Text-like inputs, checkboxes and radio buttons.

/// HTML input types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputType {
    #[default]
    Text,
    Password,
    Email,
    Number,
    Search,
    Hidden,
    Checkbox,
    Radio,
    Submit,
    Reset,
    Button,
}

impl InputType {
    /// The `type` property as the DOM reports it
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Password => "password",
            Self::Email => "email",
            Self::Number => "number",
            Self::Search => "search",
            Self::Hidden => "hidden",
            Self::Checkbox => "checkbox",
            Self::Radio => "radio",
            Self::Submit => "submit",
            Self::Reset => "reset",
            Self::Button => "button",
        }
    }
}

/// Value a checkbox or radio reports when no `value` attribute was given
pub const DEFAULT_ON_VALUE: &str = "on";

/// Input element
#[derive(Debug, Clone, Default)]
pub struct InputElement {
    pub input_type: InputType,
    pub value: String,
    /// Checkbox/radio state
    pub checked: bool,
}

impl InputElement {
    /// Create a new input element
    pub fn new(input_type: InputType) -> Self {
        let value = match input_type {
            InputType::Checkbox | InputType::Radio => DEFAULT_ON_VALUE.to_string(),
            _ => String::new(),
        };
        Self {
            input_type,
            value,
            ..Default::default()
        }
    }

    /// Create a text input
    pub fn text() -> Self {
        Self::new(InputType::Text)
    }

    /// Create a password input
    pub fn password() -> Self {
        Self::new(InputType::Password)
    }

    /// Create a hidden input
    pub fn hidden() -> Self {
        Self::new(InputType::Hidden)
    }

    /// Create a checkbox
    pub fn checkbox() -> Self {
        Self::new(InputType::Checkbox)
    }

    /// Create a radio button
    pub fn radio(value: impl Into<String>) -> Self {
        Self::new(InputType::Radio).with_value(value)
    }

    /// Set the value
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    /// Mark as checked
    pub fn checked(mut self) -> Self {
        self.checked = true;
        self
    }
}
