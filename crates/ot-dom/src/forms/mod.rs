//! Form Elements Module
//!
//! Form containers and the controls OpenThought reads and fills:
//! input, textarea, select.

mod input;
mod select;
mod textarea;

pub use input::{InputElement, InputType, DEFAULT_ON_VALUE};
pub use select::{OptionElement, SelectElement};
pub use textarea::TextareaElement;

use crate::{ElementRef, Handle};

/// Form element: its controls in document order
#[derive(Debug, Clone, Default)]
pub struct Form {
    controls: Vec<ElementRef>,
}

impl Form {
    /// Create an empty form
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a control, builder style
    pub fn with_control(mut self, control: ElementRef) -> Self {
        self.controls.push(control);
        self
    }

    /// All controls in document order
    pub fn controls(&self) -> &[ElementRef] {
        &self.controls
    }

    /// `form[name]`: the control(s) whose name, or failing that id, is `name`.
    /// Several controls sharing a name come back as a collection.
    pub fn named_control(&self, name: &str) -> Option<Handle> {
        let by_name: Vec<ElementRef> = self
            .controls
            .iter()
            .filter(|c| c.borrow().name.as_deref() == Some(name))
            .cloned()
            .collect();
        if let Some(handle) = Handle::from_matches(by_name) {
            return Some(handle);
        }
        self.controls
            .iter()
            .find(|c| c.borrow().id.as_deref() == Some(name))
            .cloned()
            .map(Handle::Element)
    }
}
