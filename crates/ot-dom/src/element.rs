//! Elements and Handles
//!
//! An `Element` is a shared, mutable node. Scripts hold `ElementRef`s to
//! live elements, so writes through one handle are visible through every
//! other handle to the same element.

use std::cell::{Ref, RefCell, RefMut};
use std::fmt;
use std::rc::Rc;

use crate::forms::{InputElement, SelectElement, TextareaElement};

/// Form-control payload of an element
#[derive(Debug, Clone, Default)]
pub enum Control {
    /// Not a form control (div, span, td, ...)
    #[default]
    None,
    Input(InputElement),
    Textarea(TextareaElement),
    Select(SelectElement),
}

/// A single DOM element
#[derive(Debug, Clone, Default)]
pub struct Element {
    /// Tag name, lowercase
    pub tag: String,
    pub name: Option<String>,
    pub id: Option<String>,
    pub control: Control,
    /// Rendered markup content (`innerHTML`)
    pub inner_html: String,
    pub focused: bool,
}

impl Element {
    /// Create a bare element
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_ascii_lowercase(),
            ..Default::default()
        }
    }

    /// Named `<input>`
    pub fn input(name: &str, input: InputElement) -> Self {
        Self::new("input").with_name(name).with_control(Control::Input(input))
    }

    /// Named `<select>`
    pub fn select(name: &str, select: SelectElement) -> Self {
        Self::new("select").with_name(name).with_control(Control::Select(select))
    }

    /// Named `<textarea>`
    pub fn textarea(name: &str, textarea: TextareaElement) -> Self {
        Self::new("textarea").with_name(name).with_control(Control::Textarea(textarea))
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_control(mut self, control: Control) -> Self {
        self.control = control;
        self
    }

    pub fn with_inner_html(mut self, html: impl Into<String>) -> Self {
        self.inner_html = html.into();
        self
    }

    /// Wrap into a shared handle
    pub fn into_ref(self) -> ElementRef {
        ElementRef(Rc::new(RefCell::new(self)))
    }

    /// The `type` property of a form control, `None` for other elements
    pub fn form_type(&self) -> Option<&'static str> {
        match &self.control {
            Control::None => None,
            Control::Input(input) => Some(input.input_type.as_str()),
            Control::Textarea(_) => Some("textarea"),
            Control::Select(select) if select.multiple => Some("select-multiple"),
            Control::Select(_) => Some("select-one"),
        }
    }

    /// Is this a form control
    pub fn is_control(&self) -> bool {
        !matches!(self.control, Control::None)
    }

    /// Does `name` match this element's name or id
    pub fn answers_to(&self, name: &str) -> bool {
        self.name.as_deref() == Some(name) || self.id.as_deref() == Some(name)
    }

    pub fn as_input(&self) -> Option<&InputElement> {
        match &self.control {
            Control::Input(input) => Some(input),
            _ => None,
        }
    }

    pub fn as_input_mut(&mut self) -> Option<&mut InputElement> {
        match &mut self.control {
            Control::Input(input) => Some(input),
            _ => None,
        }
    }

    pub fn as_select(&self) -> Option<&SelectElement> {
        match &self.control {
            Control::Select(select) => Some(select),
            _ => None,
        }
    }

    pub fn as_select_mut(&mut self) -> Option<&mut SelectElement> {
        match &mut self.control {
            Control::Select(select) => Some(select),
            _ => None,
        }
    }

    /// `value` of a text-like input or textarea
    pub fn value(&self) -> Option<&str> {
        match &self.control {
            Control::Input(input) => Some(&input.value),
            Control::Textarea(textarea) => Some(&textarea.value),
            _ => None,
        }
    }

    /// Assign `value` on an input or textarea. No-op on other elements.
    pub fn set_value(&mut self, value: &str) {
        match &mut self.control {
            Control::Input(input) => input.value = value.to_string(),
            Control::Textarea(textarea) => textarea.value = value.to_string(),
            _ => {}
        }
    }

    /// `checked` of a checkbox or radio
    pub fn checked(&self) -> bool {
        self.as_input().is_some_and(|i| i.checked)
    }

    pub fn set_checked(&mut self, checked: bool) {
        if let Some(input) = self.as_input_mut() {
            input.checked = checked;
        }
    }
}

/// Shared handle to a live element
#[derive(Clone)]
pub struct ElementRef(Rc<RefCell<Element>>);

impl ElementRef {
    pub fn borrow(&self) -> Ref<'_, Element> {
        self.0.borrow()
    }

    pub fn borrow_mut(&self) -> RefMut<'_, Element> {
        self.0.borrow_mut()
    }

    /// Do both handles point at the same element
    pub fn ptr_eq(&self, other: &ElementRef) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl From<Element> for ElementRef {
    fn from(element: Element) -> Self {
        element.into_ref()
    }
}

impl fmt::Debug for ElementRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0.try_borrow() {
            Ok(el) => write!(
                f,
                "ElementRef(<{}> name={:?} id={:?})",
                el.tag, el.name, el.id
            ),
            Err(_) => write!(f, "ElementRef(<borrowed>)"),
        }
    }
}

/// Result of a name lookup: one element, or several sharing the name
#[derive(Debug, Clone)]
pub enum Handle {
    Element(ElementRef),
    /// Array-like collection, e.g. a radio group
    Collection(Vec<ElementRef>),
}

impl Handle {
    /// Wrap lookup matches: none, one, or a collection
    pub fn from_matches(mut matches: Vec<ElementRef>) -> Option<Self> {
        match matches.len() {
            0 => None,
            1 => matches.pop().map(Handle::Element),
            _ => Some(Handle::Collection(matches)),
        }
    }

    /// Elements behind this handle, in order
    pub fn elements(&self) -> &[ElementRef] {
        match self {
            Handle::Element(el) => std::slice::from_ref(el),
            Handle::Collection(items) => items,
        }
    }

    /// First element behind this handle
    pub fn first(&self) -> Option<&ElementRef> {
        self.elements().first()
    }

    /// Same element(s), by identity
    pub fn ptr_eq(&self, other: &Handle) -> bool {
        let (a, b) = (self.elements(), other.elements());
        a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x.ptr_eq(y))
    }
}
