//! OpenThought Wire Format
//!
//! Request side: `ParameterSet` and the markup packet carried in the
//! `OpenThought` query parameter. Response side: the decoded `Content`
//! handed to the population step.

mod content;
mod params;
pub mod packet;

pub use content::{Content, Item, Value};
pub use packet::{decode, encode, escape_content, escape_name, unescape_content, unescape_name};
pub use params::{Group, ParameterSet, EXPR, FIELDS, SETTINGS};

/// Name of the query parameter carrying the packet
pub const QUERY_PARAM: &str = "OpenThought";

/// Wire decoding error
#[derive(Debug, thiserror::Error)]
pub enum WireError {
    #[error("Malformed packet: {0}")]
    Markup(#[from] roxmltree::Error),

    #[error("Unexpected root element <{0}>")]
    Root(String),

    #[error("Unknown group <{0}>")]
    UnknownGroup(String),

    #[error("Missing <{0}> group")]
    MissingGroup(&'static str),

    #[error("Invalid escaped name <{0}>")]
    Name(String),

    #[error("Invalid escape sequence: {0}")]
    Escape(#[from] std::str::Utf8Error),

    #[error("Invalid response content: {0}")]
    Content(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
