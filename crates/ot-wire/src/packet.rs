//! Packet Codec
//!
//! Markup encoding of a `ParameterSet`:
//!
//! ```text
//! <OpenThought><fields><user>bob</user></fields><settings>...</settings></OpenThought>
//! ```
//!
//! Content is escaped: `<` and `>` become `&lt;` / `&gt;` first, then the
//! result is percent-escaped, leaving alphanumerics and `@*_+-./`
//! untouched. Entry names go out as tag names. A name that is already a
//! plain tag name is written as is; any other character becomes
//! `_xHHHH_` (its code point in hex), so `user?side` is sent as
//! `user_x003F_side`.

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::params::{Group, ParameterSet, EXPR, FIELDS, SETTINGS};
use crate::WireError;

/// Root tag of every packet
pub const ROOT_TAG: &str = "OpenThought";

const ESCAPE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'@')
    .remove(b'*')
    .remove(b'_')
    .remove(b'+')
    .remove(b'-')
    .remove(b'.')
    .remove(b'/');

/// Tag standing in for the empty name
const EMPTY_NAME: &str = "_x_";

/// Escape one content value
pub fn escape_content(value: &str) -> String {
    let entities = value.replace('<', "&lt;").replace('>', "&gt;");
    utf8_percent_encode(&entities, ESCAPE_SET).to_string()
}

/// Reverse `escape_content`
pub fn unescape_content(value: &str) -> Result<String, WireError> {
    let decoded = percent_decode_str(value).decode_utf8()?;
    Ok(decoded.replace("&lt;", "<").replace("&gt;", ">"))
}

/// Escape an entry name into a tag name. ASCII letters and `_` pass
/// anywhere, digits `-` and `.` after the first character. Everything
/// else, and a `_` directly followed by `x`, is written as `_xHHHH_`.
pub fn escape_name(name: &str) -> String {
    if name.is_empty() {
        return EMPTY_NAME.to_string();
    }
    let mut tag = String::with_capacity(name.len());
    for (i, c) in name.char_indices() {
        let plain = c.is_ascii_alphabetic()
            || (c == '_' && !name[i + 1..].starts_with('x'))
            || (i > 0 && (c.is_ascii_digit() || c == '-' || c == '.'));
        if plain {
            tag.push(c);
        } else {
            tag.push_str(&format!("_x{:04X}_", c as u32));
        }
    }
    tag
}

/// Reverse `escape_name`
pub fn unescape_name(tag: &str) -> Result<String, WireError> {
    if tag == EMPTY_NAME {
        return Ok(String::new());
    }
    let bad = || WireError::Name(tag.to_string());
    let mut name = String::with_capacity(tag.len());
    let mut rest = tag;
    while let Some(start) = rest.find("_x") {
        name.push_str(&rest[..start]);
        let escape = &rest[start + 2..];
        let end = escape.find('_').ok_or_else(bad)?;
        let c = u32::from_str_radix(&escape[..end], 16)
            .ok()
            .and_then(char::from_u32)
            .ok_or_else(bad)?;
        name.push(c);
        rest = &escape[end + 1..];
    }
    name.push_str(rest);
    Ok(name)
}

/// Encode a parameter set. Groups go out as fields, expr, settings and
/// entries in their insertion order.
pub fn encode(set: &ParameterSet) -> String {
    let mut xml = format!("<{}>", ROOT_TAG);
    for (group_tag, group) in set.groups() {
        xml.push_str(&format!("<{}>", group_tag));
        for (name, value) in group.iter() {
            xml.push_str(&format!("<{0}>{1}</{0}>", escape_name(name), escape_content(value)));
        }
        xml.push_str(&format!("</{}>", group_tag));
    }
    xml.push_str(&format!("</{}>", ROOT_TAG));
    xml
}

/// Decode a packet produced by `encode`. Entry order does not matter.
pub fn decode(packet: &str) -> Result<ParameterSet, WireError> {
    let doc = roxmltree::Document::parse(packet)?;
    let root = doc.root_element();
    if root.tag_name().name() != ROOT_TAG {
        return Err(WireError::Root(root.tag_name().name().to_string()));
    }

    let mut fields = None;
    let mut expr = None;
    let mut settings = None;

    for group_node in root.children().filter(|n| n.is_element()) {
        let mut group = Group::new();
        for entry in group_node.children().filter(|n| n.is_element()) {
            let value = unescape_content(entry.text().unwrap_or(""))?;
            group.insert(unescape_name(entry.tag_name().name())?, value);
        }

        let slot = match group_node.tag_name().name() {
            FIELDS => &mut fields,
            EXPR => &mut expr,
            SETTINGS => &mut settings,
            other => return Err(WireError::UnknownGroup(other.to_string())),
        };
        *slot = Some(group);
    }

    let settings = settings.ok_or(WireError::MissingGroup(SETTINGS))?;
    tracing::debug!(
        "decoded packet: {} field(s), {} expr(s), {} setting(s)",
        fields.as_ref().map_or(0, Group::len),
        expr.as_ref().map_or(0, Group::len),
        settings.len()
    );
    Ok(ParameterSet { fields, expr, settings })
}
