//! Document - High-level document API
//!
//! The lookups a script can do against a document: named properties,
//! the legacy `all` collection, `forms[]`, nested `layers[]` and
//! `getElementById`.

use crate::forms::Form;
use crate::{ElementRef, Handle};

/// Positioned legacy layer, carrying its own document
#[derive(Debug, Clone)]
pub struct Layer {
    pub name: String,
    pub document: Document,
}

impl Layer {
    pub fn new(name: impl Into<String>, document: Document) -> Self {
        Self {
            name: name.into(),
            document,
        }
    }
}

/// HTML Document
#[derive(Debug, Clone)]
pub struct Document {
    /// Document URL
    url: String,
    title: String,
    /// Elements outside any form, in document order
    elements: Vec<ElementRef>,
    forms: Vec<Form>,
    layers: Vec<Layer>,
    /// Whether `document.all` exists
    all_collection: bool,
}

impl Document {
    /// Create a new empty document
    pub fn new(url: &str) -> Self {
        Self {
            url: url.to_string(),
            title: String::new(),
            elements: Vec::new(),
            forms: Vec::new(),
            layers: Vec::new(),
            all_collection: false,
        }
    }

    /// Set the title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_element(mut self, element: ElementRef) -> Self {
        self.elements.push(element);
        self
    }

    pub fn with_form(mut self, form: Form) -> Self {
        self.forms.push(form);
        self
    }

    pub fn with_layer(mut self, layer: Layer) -> Self {
        self.layers.push(layer);
        self
    }

    /// Get document URL
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Get document title
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Turn the legacy `all` collection on or off, layer documents included
    pub fn set_all_collection(&mut self, on: bool) {
        self.all_collection = on;
        for layer in &mut self.layers {
            layer.document.set_all_collection(on);
        }
    }

    /// Insert an element before every existing free element
    pub fn prepend_element(&mut self, element: ElementRef) {
        self.elements.insert(0, element);
    }

    /// Drop free elements named `name`, returning how many went
    pub fn remove_elements(&mut self, name: &str) -> usize {
        let before = self.elements.len();
        self.elements.retain(|e| e.borrow().name.as_deref() != Some(name));
        before - self.elements.len()
    }

    /// Free elements, in document order
    pub fn elements(&self) -> &[ElementRef] {
        &self.elements
    }

    /// `document.forms`, in registration order
    pub fn forms(&self) -> &[Form] {
        &self.forms
    }

    /// `document.layers`
    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    /// `document[name]`: free elements exposed by name
    pub fn named_item(&self, name: &str) -> Option<Handle> {
        Handle::from_matches(
            self.elements
                .iter()
                .filter(|e| e.borrow().name.as_deref() == Some(name))
                .cloned()
                .collect(),
        )
    }

    /// `document.all[name]`: any element answering to `name` by name or id,
    /// including form controls. `None` when the collection is absent.
    pub fn all_item(&self, name: &str) -> Option<Handle> {
        if !self.all_collection {
            return None;
        }
        Handle::from_matches(
            self.all_elements()
                .filter(|e| e.borrow().answers_to(name))
                .cloned()
                .collect(),
        )
    }

    /// Get element by ID
    pub fn get_element_by_id(&self, id: &str) -> Option<ElementRef> {
        self.all_elements()
            .find(|e| e.borrow().id.as_deref() == Some(id))
            .cloned()
    }

    /// Free elements followed by form controls. Layers are separate documents.
    fn all_elements(&self) -> impl Iterator<Item = &ElementRef> {
        self.elements
            .iter()
            .chain(self.forms.iter().flat_map(|f| f.controls().iter()))
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new("about:blank")
    }
}
