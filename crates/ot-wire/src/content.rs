//! Response Content
//!
//! What the server sends back: field names mapped to a scalar or to an
//! ordered list of text/value entries for selection lists.

use std::borrow::Cow;

use crate::WireError;

/// One entry of a list value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Item {
    /// Bare string. A list of these alternates text, value, text, value.
    Text(String),
    /// Explicit (text, value) pair
    Pair(String, String),
}

/// Value for one field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Scalar(String),
    List(Vec<Item>),
}

impl Value {
    pub fn scalar(value: impl Into<String>) -> Self {
        Value::Scalar(value.into())
    }

    /// Flat alternating text/value list
    pub fn flat<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Value::List(items.into_iter().map(|s| Item::Text(s.into())).collect())
    }

    /// List of (text, value) pairs
    pub fn pairs<I, T, V>(items: I) -> Self
    where
        I: IntoIterator<Item = (T, V)>,
        T: Into<String>,
        V: Into<String>,
    {
        Value::List(
            items
                .into_iter()
                .map(|(t, v)| Item::Pair(t.into(), v.into()))
                .collect(),
        )
    }

    /// Text rendition used when a list lands on a scalar control:
    /// every string joined with commas.
    pub fn as_text(&self) -> Cow<'_, str> {
        match self {
            Value::Scalar(s) => Cow::Borrowed(s),
            Value::List(items) => {
                let parts: Vec<&str> = items
                    .iter()
                    .flat_map(|item| match item {
                        Item::Text(t) => vec![t.as_str()],
                        Item::Pair(t, v) => vec![t.as_str(), v.as_str()],
                    })
                    .collect();
                Cow::Owned(parts.join(","))
            }
        }
    }
}

/// Decoded reply: field name to value, in the order the server sent them
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Content {
    fields: Vec<(String, Value)>,
}

impl Content {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a field, builder style
    pub fn with(mut self, name: impl Into<String>, value: Value) -> Self {
        self.insert(name, value);
        self
    }

    /// Insert or overwrite a field
    pub fn insert(&mut self, name: impl Into<String>, value: Value) {
        let name = name.into();
        match self.fields.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = value,
            None => self.fields.push((name, value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.iter().find(|(n, _)| n == name).map(|(_, v)| v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(n, v)| (n.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Decode a JSON object. Strings, numbers and booleans become scalars.
    /// Arrays become lists, where nested arrays are `[text, value]` pairs.
    /// `null` is an empty scalar. Key order is preserved.
    pub fn from_json(json: &str) -> Result<Self, WireError> {
        let parsed: serde_json::Value = serde_json::from_str(json)?;
        let object = match parsed {
            serde_json::Value::Object(map) => map,
            other => {
                return Err(WireError::Content(format!(
                    "expected an object, got {}",
                    json_kind(&other)
                )))
            }
        };

        let mut content = Content::new();
        for (name, value) in object {
            let value = match value {
                serde_json::Value::Array(items) => Value::List(
                    items
                        .iter()
                        .map(|item| json_item(&name, item))
                        .collect::<Result<_, _>>()?,
                ),
                other => Value::Scalar(json_scalar(&name, &other)?),
            };
            content.insert(name, value);
        }
        Ok(content)
    }
}

impl<K: Into<String>> FromIterator<(K, Value)> for Content {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        let mut content = Content::new();
        for (k, v) in iter {
            content.insert(k, v);
        }
        content
    }
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}

fn json_scalar(field: &str, value: &serde_json::Value) -> Result<String, WireError> {
    match value {
        serde_json::Value::Null => Ok(String::new()),
        serde_json::Value::Bool(b) => Ok(b.to_string()),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        serde_json::Value::String(s) => Ok(s.clone()),
        other => Err(WireError::Content(format!(
            "field {}: unexpected {}",
            field,
            json_kind(other)
        ))),
    }
}

fn json_item(field: &str, item: &serde_json::Value) -> Result<Item, WireError> {
    match item {
        serde_json::Value::Array(pair) => {
            let text = pair.first().map(|v| json_scalar(field, v)).transpose()?;
            let value = pair.get(1).map(|v| json_scalar(field, v)).transpose()?;
            Ok(Item::Pair(text.unwrap_or_default(), value.unwrap_or_default()))
        }
        other => Ok(Item::Text(json_scalar(field, other)?)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_json_shapes() {
        let content = Content::from_json(
            r#"{"user": "bob", "count": 3, "agree": true,
                "names": [["Alice", "1"], ["Bob", "2"]],
                "flat": ["Alice", "1", "Bob", ""],
                "gone": null}"#,
        )
        .unwrap();

        assert_eq!(content.len(), 6);
        assert_eq!(content.get("user"), Some(&Value::scalar("bob")));
        assert_eq!(content.get("count"), Some(&Value::scalar("3")));
        assert_eq!(content.get("agree"), Some(&Value::scalar("true")));
        assert_eq!(content.get("names"), Some(&Value::pairs([("Alice", "1"), ("Bob", "2")])));
        assert_eq!(content.get("flat"), Some(&Value::flat(["Alice", "1", "Bob", ""])));
        assert_eq!(content.get("gone"), Some(&Value::scalar("")));
    }

    #[test]
    fn test_from_json_preserves_order() {
        let content = Content::from_json(r#"{"z": "1", "a": "2", "m": "3"}"#).unwrap();
        let names: Vec<_> = content.iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["z", "a", "m"]);
    }

    #[test]
    fn test_from_json_rejects_non_object() {
        assert!(matches!(Content::from_json("[1, 2]"), Err(WireError::Content(_))));
        assert!(matches!(Content::from_json(r#"{"x": {"y": 1}}"#), Err(WireError::Content(_))));
        assert!(matches!(Content::from_json("{"), Err(WireError::Json(_))));
    }

    #[test]
    fn test_as_text() {
        assert_eq!(Value::scalar("x").as_text(), "x");
        assert_eq!(Value::pairs([("a", "1"), ("b", "2")]).as_text(), "a,1,b,2");
        assert_eq!(Value::flat(["a", "b"]).as_text(), "a,b");
    }

    #[test]
    fn test_insert_overwrites() {
        let content = Content::new()
            .with("a", Value::scalar("1"))
            .with("b", Value::scalar("2"))
            .with("a", Value::scalar("3"));
        assert_eq!(content.len(), 2);
        assert_eq!(content.get("a"), Some(&Value::scalar("3")));
    }
}
