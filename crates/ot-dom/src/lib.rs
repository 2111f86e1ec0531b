//! OpenThought DOM
//!
//! Deterministic in-memory page model: a frameset of named frames, each
//! holding a document with free elements, forms, legacy layers and the
//! form controls OpenThought reads and fills.

mod document;
mod element;
mod frameset;
pub mod forms;

pub use document::{Document, Layer};
pub use element::{Control, Element, ElementRef, Handle};
pub use forms::{
    Form, InputElement, InputType, OptionElement, SelectElement, TextareaElement, DEFAULT_ON_VALUE,
};
pub use frameset::{Features, Frame, Frameset, COMM_FRAME, CONTENT_FRAME};
