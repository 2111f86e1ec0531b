//! Object Resolver
//!
//! Turns a field name into live element handles. Lookups are memoized;
//! the cache has no way of noticing DOM changes, so whoever renames,
//! adds or removes elements must call `invalidate`.

use std::collections::HashMap;

use ot_dom::{Document, ElementRef, Handle};

use crate::capability::Capability;
use crate::host::Host;

/// Separates a field name from the frame it lives in: `name?frame`
pub const FRAME_SEPARATOR: char = '?';

/// What a resolved field is, for reading and filling
#[derive(Debug, Clone)]
pub enum FieldKind {
    /// text, password, textarea, hidden
    Text(ElementRef),
    /// select-one, select-multiple
    Selection(ElementRef),
    Checkbox(ElementRef),
    RadioGroup(Vec<ElementRef>),
    /// Non-control element; content access depends on the capability
    RenderedContent(ElementRef),
}

/// Result of a successful lookup
#[derive(Debug, Clone)]
pub struct Resolved {
    pub handle: Handle,
    /// `None` for elements we neither read nor fill (buttons and the like)
    pub kind: Option<FieldKind>,
}

impl Resolved {
    /// Classify a lookup result
    pub fn classify(handle: Handle, capability: &dyn Capability) -> Self {
        let kind = match &handle {
            Handle::Element(element) => classify_element(element),
            Handle::Collection(items) if capability.infers_radio_groups() && !items.is_empty() => {
                Some(FieldKind::RadioGroup(items.clone()))
            }
            Handle::Collection(_) => None,
        };
        Self { handle, kind }
    }

    /// Same element(s) as `other`
    pub fn same_as(&self, other: &Resolved) -> bool {
        self.handle.ptr_eq(&other.handle)
    }
}

fn classify_element(element: &ElementRef) -> Option<FieldKind> {
    let kind = element.borrow().form_type();
    match kind {
        Some("text" | "password" | "textarea" | "hidden") => Some(FieldKind::Text(element.clone())),
        Some("select-one" | "select-multiple") => Some(FieldKind::Selection(element.clone())),
        Some("checkbox") => Some(FieldKind::Checkbox(element.clone())),
        Some("radio") => Some(FieldKind::RadioGroup(vec![element.clone()])),
        Some(_) => None,
        None => Some(FieldKind::RenderedContent(element.clone())),
    }
}

/// Field name to resolution memo
#[derive(Debug, Default)]
pub struct ObjectCache {
    entries: HashMap<String, Resolved>,
}

impl ObjectCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&Resolved> {
        self.entries.get(name)
    }

    pub fn insert(&mut self, name: &str, resolved: Resolved) {
        self.entries.insert(name.to_string(), resolved);
    }

    /// Drop everything
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Cached name lookup across the host's documents
#[derive(Debug, Default)]
pub struct ObjectResolver {
    cache: ObjectCache,
}

impl ObjectResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve `name`, from cache when possible. A name of the form
    /// `field?frame` is looked up as `field` in the document of `frame`.
    pub fn resolve(
        &mut self,
        name: &str,
        host: &dyn Host,
        capability: &dyn Capability,
    ) -> Option<Resolved> {
        if let Some(hit) = self.cache.get(name) {
            tracing::trace!("cache hit: {}", name);
            return Some(hit.clone());
        }

        let (lookup, scope) = match scope_for(name, host) {
            Some(found) => found,
            None => {
                tracing::debug!("no frame for {}", name);
                return None;
            }
        };

        let handle = match capability.resolve_element(lookup, scope) {
            Some(handle) => handle,
            None => {
                tracing::debug!("unresolved: {}", name);
                return None;
            }
        };

        let resolved = Resolved::classify(handle, capability);
        self.cache.insert(name, resolved.clone());
        Some(resolved)
    }

    /// Forget every cached lookup
    pub fn invalidate(&mut self) {
        tracing::debug!("object cache expired ({} entries)", self.cache.len());
        self.cache.clear();
    }

    pub fn cache(&self) -> &ObjectCache {
        &self.cache
    }
}

/// Pick the document to search and the bare name to search for
fn scope_for<'a, 'h>(name: &'a str, host: &'h dyn Host) -> Option<(&'a str, &'h Document)> {
    match name.find(FRAME_SEPARATOR) {
        Some(p) if p > 0 => {
            let frame = &name[p + FRAME_SEPARATOR.len_utf8()..];
            host.frame_document(frame).map(|doc| (&name[..p], doc))
        }
        _ => Some((name, host.content_document())),
    }
}
