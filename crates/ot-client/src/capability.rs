//! Browser Capabilities
//!
//! The hosting browser is classified once, at session start, into one
//! DOM access mode. Each mode maps to one `Capability` implementation
//! that owns everything mode-specific: the element search order, access
//! to rendered content, and a couple of population quirks. Nothing
//! downstream branches on the mode itself.

use ot_dom::{Document, Element, Features, Handle};

use crate::scope::{FormScope, IdScope, LayerScope, NamedScope, ScopeChain};

/// User agent fragment identifying the alternate engine
pub const ALTERNATE_ENGINE_SIGNATURE: &str = "Opera";

/// Detected DOM access mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CapabilityMode {
    /// `document.layers` based
    LegacyLayers,
    /// `document.all` based
    LegacyAll,
    /// `getElementById` based
    Standards,
    /// Recognised by user agent
    AlternateEngine,
    /// Nothing matched; best effort only
    Unknown,
}

/// Mode-specific DOM access
pub trait Capability {
    fn mode(&self) -> CapabilityMode;

    /// Element search order within one document
    fn scopes(&self) -> &ScopeChain;

    /// Find `name` within `scope`
    fn resolve_element(&self, name: &str, scope: &Document) -> Option<Handle> {
        self.scopes().search(scope, name)
    }

    /// Rendered content of a non-control element, if this mode can read it
    /// and there is any
    fn read_rendered_content(&self, _element: &Element) -> Option<String> {
        None
    }

    /// Replace rendered content. Returns whether anything was written.
    fn write_rendered_content(&self, _element: &mut Element, _html: &str) -> bool {
        false
    }

    /// Whether an untyped, array-like lookup result counts as a radio group
    fn infers_radio_groups(&self) -> bool {
        true
    }

    /// Whether option text is clipped to the configured width
    fn clips_option_text(&self) -> bool {
        true
    }
}

/// Layer-based legacy DOM. Fixed-width selection lists, so no clipping.
#[derive(Debug)]
pub struct LayerDom {
    scopes: ScopeChain,
}

impl LayerDom {
    pub fn new() -> Self {
        Self {
            scopes: ScopeChain::new().with(NamedScope).with(FormScope).with(LayerScope),
        }
    }
}

impl Capability for LayerDom {
    fn mode(&self) -> CapabilityMode {
        CapabilityMode::LegacyLayers
    }

    fn scopes(&self) -> &ScopeChain {
        &self.scopes
    }

    fn clips_option_text(&self) -> bool {
        false
    }
}

/// `document.all` DOM. Radio collections are not recognised.
#[derive(Debug)]
pub struct AllDom {
    scopes: ScopeChain,
}

impl AllDom {
    pub fn new() -> Self {
        Self {
            scopes: ScopeChain::new().with(NamedScope).with(FormScope),
        }
    }
}

impl Capability for AllDom {
    fn mode(&self) -> CapabilityMode {
        CapabilityMode::LegacyAll
    }

    fn scopes(&self) -> &ScopeChain {
        &self.scopes
    }

    fn infers_radio_groups(&self) -> bool {
        false
    }
}

/// Standards DOM: id lookup and rendered content access
#[derive(Debug)]
pub struct StandardDom {
    scopes: ScopeChain,
}

impl StandardDom {
    pub fn new() -> Self {
        Self {
            scopes: ScopeChain::new().with(NamedScope).with(FormScope).with(IdScope),
        }
    }
}

impl Capability for StandardDom {
    fn mode(&self) -> CapabilityMode {
        CapabilityMode::Standards
    }

    fn scopes(&self) -> &ScopeChain {
        &self.scopes
    }

    fn read_rendered_content(&self, element: &Element) -> Option<String> {
        if element.is_control() || element.inner_html.is_empty() {
            return None;
        }
        Some(element.inner_html.clone())
    }

    fn write_rendered_content(&self, element: &mut Element, html: &str) -> bool {
        if element.is_control() {
            return false;
        }
        element.inner_html = html.to_string();
        true
    }
}

/// Alternate engine: id lookup, but rendered content stays untouched
#[derive(Debug)]
pub struct AlternateDom {
    scopes: ScopeChain,
}

impl AlternateDom {
    pub fn new() -> Self {
        Self {
            scopes: ScopeChain::new().with(NamedScope).with(FormScope).with(IdScope),
        }
    }
}

impl Capability for AlternateDom {
    fn mode(&self) -> CapabilityMode {
        CapabilityMode::AlternateEngine
    }

    fn scopes(&self) -> &ScopeChain {
        &self.scopes
    }
}

/// Unclassified browser: plain named and form lookups only
#[derive(Debug)]
pub struct UnknownDom {
    scopes: ScopeChain,
}

impl UnknownDom {
    pub fn new() -> Self {
        Self {
            scopes: ScopeChain::new().with(NamedScope).with(FormScope),
        }
    }
}

impl Capability for UnknownDom {
    fn mode(&self) -> CapabilityMode {
        CapabilityMode::Unknown
    }

    fn scopes(&self) -> &ScopeChain {
        &self.scopes
    }
}

/// One-shot browser classification
pub struct CapabilityDetector;

impl CapabilityDetector {
    /// Probe in order: layers, alternate engine signature, standards
    /// lookup, `all` collection.
    pub fn detect(features: &Features) -> CapabilityMode {
        if features.layers {
            CapabilityMode::LegacyLayers
        } else if features.user_agent.contains(ALTERNATE_ENGINE_SIGNATURE) {
            CapabilityMode::AlternateEngine
        } else if features.get_element_by_id {
            CapabilityMode::Standards
        } else if features.all_collection {
            CapabilityMode::LegacyAll
        } else {
            CapabilityMode::Unknown
        }
    }

    /// The implementation for a mode
    pub fn select(mode: CapabilityMode) -> Box<dyn Capability> {
        match mode {
            CapabilityMode::LegacyLayers => Box::new(LayerDom::new()),
            CapabilityMode::LegacyAll => Box::new(AllDom::new()),
            CapabilityMode::Standards => Box::new(StandardDom::new()),
            CapabilityMode::AlternateEngine => Box::new(AlternateDom::new()),
            CapabilityMode::Unknown => Box::new(UnknownDom::new()),
        }
    }
}
