//! Select and Option Element Implementation
//!
//! Dropdown and list selection.

/// Select element
#[derive(Debug, Clone)]
pub struct SelectElement {
    pub multiple: bool,

    pub options: Vec<OptionElement>,

    // Selected index, -1 when nothing is selected
    selected_index: i32,
}

/// Option element
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OptionElement {
    pub value: String,
    pub text: String,
    pub selected: bool,
}

impl OptionElement {
    /// Create a new option
    pub fn new(text: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            value: value.into(),
            selected: false,
        }
    }

    /// Mark as selected
    pub fn selected(mut self) -> Self {
        self.selected = true;
        self
    }
}

impl Default for SelectElement {
    fn default() -> Self {
        Self {
            multiple: false,
            options: Vec::new(),
            selected_index: -1,
        }
    }
}

impl SelectElement {
    /// Create a new select element
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a multi-select list
    pub fn multiple() -> Self {
        Self {
            multiple: true,
            ..Self::new()
        }
    }

    /// Add an option
    pub fn add_option(&mut self, option: OptionElement) {
        if option.selected && self.selected_index < 0 {
            self.selected_index = self.options.len() as i32;
        }
        self.options.push(option);
    }

    /// Add multiple options
    pub fn with_options(mut self, options: Vec<OptionElement>) -> Self {
        for opt in options {
            self.add_option(opt);
        }
        self
    }

    /// Remove every option
    pub fn clear_options(&mut self) {
        self.options.clear();
        self.selected_index = -1;
    }

    /// Current selected index (-1 if none)
    pub fn selected_index(&self) -> i32 {
        self.selected_index
    }

    /// Get selected value
    pub fn selected_value(&self) -> Option<&str> {
        if self.selected_index >= 0 && (self.selected_index as usize) < self.options.len() {
            Some(&self.options[self.selected_index as usize].value)
        } else {
            None
        }
    }

    /// Set selected by index
    pub fn set_selected_index(&mut self, index: i32) {
        // Deselect all if not multiple
        if !self.multiple {
            for opt in &mut self.options {
                opt.selected = false;
            }
        }

        if index >= 0 && (index as usize) < self.options.len() {
            self.selected_index = index;
            self.options[index as usize].selected = true;
        } else {
            self.selected_index = -1;
        }
    }

    /// Select the option carrying `value`. Returns false when none matches.
    pub fn select_value(&mut self, value: &str) -> bool {
        match self.options.iter().rposition(|o| o.value == value) {
            Some(i) => {
                self.set_selected_index(i as i32);
                true
            }
            None => false,
        }
    }

    /// Get length (number of options)
    pub fn length(&self) -> usize {
        self.options.len()
    }
}
