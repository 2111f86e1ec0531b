//! Host Window
//!
//! Everything the client needs from the browser window it runs in.

use ot_dom::{Document, Features, Frameset};

/// Which browsing context a request navigates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    /// The visible content frame (full page load)
    Content,
    /// The hidden communication frame (background request)
    Communication,
}

impl Target {
    /// Index into the window's frame list
    pub fn frame_index(self) -> usize {
        match self {
            Target::Content => 0,
            Target::Communication => 1,
        }
    }
}

/// The hosting window
pub trait Host {
    /// Probe-able browser facts
    fn features(&self) -> Features;

    /// Document of the content frame: the default lookup scope
    fn content_document(&self) -> &Document;

    /// Document of the child context `name`
    fn frame_document(&self, name: &str) -> Option<&Document>;

    /// Point a context at `url`
    fn navigate(&mut self, target: Target, url: &str);

    /// Set the status bar text
    fn set_status(&mut self, message: &str);

    /// Show an alert box
    fn alert(&mut self, message: &str);

    /// Copy the content document's title up to the window
    fn propagate_title(&mut self);
}

impl Host for Frameset {
    fn features(&self) -> Features {
        self.features.clone()
    }

    fn content_document(&self) -> &Document {
        &self.content().document
    }

    fn frame_document(&self, name: &str) -> Option<&Document> {
        self.frame(name).map(|f| &f.document)
    }

    fn navigate(&mut self, target: Target, url: &str) {
        Frameset::navigate(self, target.frame_index(), url);
    }

    fn set_status(&mut self, message: &str) {
        self.status = message.to_string();
    }

    fn alert(&mut self, message: &str) {
        Frameset::alert(self, message);
    }

    fn propagate_title(&mut self) {
        self.sync_title();
    }
}
