//! Scope Providers
//!
//! Each provider knows one way of finding a named element in a
//! document. A capability strings them together into a `ScopeChain`
//! that is tried in order until one answers.

use ot_dom::{Document, Handle};

/// One lookup strategy
pub trait ScopeProvider {
    /// Short label for logs
    fn label(&self) -> &'static str;

    /// Find `name` in `doc`. `chain` is the full chain, for providers that
    /// descend into nested documents.
    fn lookup(&self, doc: &Document, name: &str, chain: &ScopeChain) -> Option<Handle>;
}

/// `document[name]`, then `document.all[name]` where that exists
pub struct NamedScope;

impl ScopeProvider for NamedScope {
    fn label(&self) -> &'static str {
        "named"
    }

    fn lookup(&self, doc: &Document, name: &str, _chain: &ScopeChain) -> Option<Handle> {
        doc.named_item(name).or_else(|| doc.all_item(name))
    }
}

/// `document.forms[i][name]`, forms in registration order
pub struct FormScope;

impl ScopeProvider for FormScope {
    fn label(&self) -> &'static str {
        "forms"
    }

    fn lookup(&self, doc: &Document, name: &str, _chain: &ScopeChain) -> Option<Handle> {
        doc.forms().iter().find_map(|form| form.named_control(name))
    }
}

/// Depth-first descent into `document.layers[i].document`
pub struct LayerScope;

impl ScopeProvider for LayerScope {
    fn label(&self) -> &'static str {
        "layers"
    }

    fn lookup(&self, doc: &Document, name: &str, chain: &ScopeChain) -> Option<Handle> {
        doc.layers()
            .iter()
            .find_map(|layer| chain.search(&layer.document, name))
    }
}

/// `document.getElementById(name)`
pub struct IdScope;

impl ScopeProvider for IdScope {
    fn label(&self) -> &'static str {
        "id"
    }

    fn lookup(&self, doc: &Document, name: &str, _chain: &ScopeChain) -> Option<Handle> {
        doc.get_element_by_id(name).map(Handle::Element)
    }
}

/// Ordered list of providers; first answer wins
#[derive(Default)]
pub struct ScopeChain {
    providers: Vec<Box<dyn ScopeProvider>>,
}

impl ScopeChain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a provider, builder style
    pub fn with(mut self, provider: impl ScopeProvider + 'static) -> Self {
        self.providers.push(Box::new(provider));
        self
    }

    /// Provider labels, in search order
    pub fn labels(&self) -> Vec<&'static str> {
        self.providers.iter().map(|p| p.label()).collect()
    }

    /// Try every provider in order against `doc`
    pub fn search(&self, doc: &Document, name: &str) -> Option<Handle> {
        self.providers.iter().find_map(|provider| {
            let found = provider.lookup(doc, name, self);
            if found.is_some() {
                tracing::trace!("{} found by {} scope", name, provider.label());
            }
            found
        })
    }
}

impl std::fmt::Debug for ScopeChain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.labels()).finish()
    }
}
