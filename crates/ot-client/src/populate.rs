//! Field Populators
//!
//! Apply a decoded reply to the page, one field at a time. A field that
//! cannot be found or filled is skipped; the rest still get their values.

use ot_dom::{ElementRef, OptionElement, SelectElement};
use ot_wire::{Content, Item, Value};

use crate::capability::Capability;
use crate::config::Settings;
use crate::host::Host;
use crate::resolver::{FieldKind, ObjectResolver};

/// Checkbox state for a reply value. `false` (any case), `unchecked` and
/// anything numerically below 1 (including the empty string) uncheck.
pub fn checkbox_state(value: &str) -> bool {
    if value.eq_ignore_ascii_case("false") || value == "unchecked" {
        return false;
    }
    let number = if value.trim().is_empty() {
        Some(0.0)
    } else {
        value.trim().parse::<f64>().ok()
    };
    !matches!(number, Some(n) if n < 1.0)
}

/// Selection list fill policy
#[derive(Debug, Clone, Copy)]
pub struct SelectPolicy {
    pub auto_clear: bool,
    /// 0 = unlimited
    pub max_width: usize,
    pub clip_text: bool,
}

/// Fill a selection list from a list reply.
///
/// Existing options go first when auto-clear is on and the list does not
/// start with a non-empty string, or whenever it starts with an empty
/// string. A lone `""` only clears. Every text/value pair then becomes
/// an option, the text standing in for an empty value.
pub fn fill_select(select: &mut SelectElement, items: &[Item], policy: SelectPolicy) {
    let (starts_nonempty_text, starts_empty_text) = match items.first() {
        Some(Item::Text(t)) => (!t.is_empty(), t.is_empty()),
        _ => (false, false),
    };

    if (policy.auto_clear && !starts_nonempty_text) || starts_empty_text {
        select.clear_options();
        if items.len() == 1 && starts_empty_text {
            return;
        }
    }

    let mut iter = items.iter();
    while let Some(item) = iter.next() {
        let (text, value) = match item {
            Item::Pair(text, value) => (text.clone(), value.clone()),
            Item::Text(text) => {
                let value = match iter.next() {
                    Some(Item::Text(v)) => v.clone(),
                    Some(Item::Pair(t, _)) => t.clone(),
                    None => String::new(),
                };
                (text.clone(), value)
            }
        };
        let value = if value.is_empty() { text.clone() } else { value };
        let text = if policy.clip_text && policy.max_width != 0 {
            text.chars().take(policy.max_width).collect()
        } else {
            text
        };
        select.add_option(OptionElement::new(text, value));
    }
}

/// Tick the radio whose value matches; leave the others alone
pub fn fill_radio(items: &[ElementRef], value: &str) {
    for item in items {
        let mut item = item.borrow_mut();
        if item.as_input().is_some_and(|i| i.value == value) {
            item.set_checked(true);
        }
    }
}

/// One reply's worth of population state
pub struct FieldPopulators<'a> {
    resolver: &'a mut ObjectResolver,
    host: &'a dyn Host,
    capability: &'a dyn Capability,
    settings: &'a Settings,
}

impl<'a> FieldPopulators<'a> {
    pub fn new(
        resolver: &'a mut ObjectResolver,
        host: &'a dyn Host,
        capability: &'a dyn Capability,
        settings: &'a Settings,
    ) -> Self {
        Self {
            resolver,
            host,
            capability,
            settings,
        }
    }

    /// Fill every field named in `content`. Returns how many were filled.
    pub fn populate_all(&mut self, content: &Content) -> usize {
        let mut filled = 0;
        for (name, value) in content.iter() {
            let kind = self
                .resolver
                .resolve(name, self.host, self.capability)
                .and_then(|resolved| resolved.kind);

            match kind {
                Some(kind) if self.populate(&kind, value) => filled += 1,
                Some(_) => tracing::debug!("field {} not fillable here", name),
                None => tracing::debug!("field {} skipped: unresolved or untyped", name),
            }
        }
        tracing::debug!("populated {}/{} field(s)", filled, content.len());
        filled
    }

    /// Apply one value. Returns whether the field took it.
    pub fn populate(&self, kind: &FieldKind, value: &Value) -> bool {
        match kind {
            FieldKind::Selection(element) => {
                let mut element = element.borrow_mut();
                let Some(select) = element.as_select_mut() else {
                    return false;
                };
                match value {
                    Value::Scalar(wanted) => select.select_value(wanted),
                    Value::List(items) => {
                        fill_select(select, items, self.select_policy());
                        true
                    }
                }
            }
            FieldKind::Text(element) => {
                element.borrow_mut().set_value(&value.as_text());
                true
            }
            FieldKind::Checkbox(element) => {
                element.borrow_mut().set_checked(checkbox_state(&value.as_text()));
                true
            }
            FieldKind::RadioGroup(items) => {
                fill_radio(items, &value.as_text());
                true
            }
            FieldKind::RenderedContent(element) => self
                .capability
                .write_rendered_content(&mut element.borrow_mut(), &value.as_text()),
        }
    }

    fn select_policy(&self) -> SelectPolicy {
        SelectPolicy {
            auto_clear: self.settings.auto_clear,
            max_width: self.settings.max_select_width,
            clip_text: self.capability.clips_option_text(),
        }
    }
}
