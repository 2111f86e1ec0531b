//! Frameset - the top-level window
//!
//! A window split into a visible content frame and a hidden
//! communication frame, plus the window chrome a script can touch:
//! status bar, alert boxes and the document title.

use crate::Document;

/// Name of the visible content frame (`frames[0]`)
pub const CONTENT_FRAME: &str = "contentFrame";
/// Name of the hidden communication frame (`frames[1]`)
pub const COMM_FRAME: &str = "commFrame";

/// Probe-able facts about the hosting browser
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Features {
    /// `document.layers` exists
    pub layers: bool,
    pub user_agent: String,
    /// `document.getElementById` exists
    pub get_element_by_id: bool,
    /// `document.all` exists
    pub all_collection: bool,
}

impl Features {
    /// A standards-compliant browser
    pub fn standards() -> Self {
        Self {
            layers: false,
            user_agent: "Mozilla/5.0 (X11; Linux x86_64) Gecko/20100101".to_string(),
            get_element_by_id: true,
            all_collection: false,
        }
    }

    /// Layer-based legacy browser
    pub fn legacy_layers() -> Self {
        Self {
            layers: true,
            user_agent: "Mozilla/4.78 [en] (X11; U; Linux 2.4.18 i686)".to_string(),
            get_element_by_id: false,
            all_collection: false,
        }
    }

    /// `document.all`-based legacy browser
    pub fn legacy_all() -> Self {
        Self {
            layers: false,
            user_agent: "Mozilla/4.0 (compatible; MSIE 4.01; Windows 98)".to_string(),
            get_element_by_id: false,
            all_collection: true,
        }
    }

    /// The alternate engine, recognised by its user agent
    pub fn alternate_engine() -> Self {
        Self {
            layers: false,
            user_agent: "Opera/7.23 (X11; Linux i686; U) [en]".to_string(),
            get_element_by_id: true,
            all_collection: true,
        }
    }

    /// Nothing we know how to drive
    pub fn bare() -> Self {
        Self {
            user_agent: "Lynx/2.8.4".to_string(),
            ..Self::default()
        }
    }
}

/// A named browsing context inside the frameset
#[derive(Debug, Clone)]
pub struct Frame {
    pub name: String,
    /// Current `location.href`
    pub location: String,
    pub document: Document,
    pub hidden: bool,
}

impl Frame {
    pub fn new(name: &str, document: Document) -> Self {
        Self {
            name: name.to_string(),
            location: document.url().to_string(),
            document,
            hidden: false,
        }
    }
}

/// Top-level window holding the frames
#[derive(Debug, Clone)]
pub struct Frameset {
    pub title: String,
    /// `window.status`
    pub status: String,
    /// Every alert raised, oldest first
    pub alerts: Vec<String>,
    pub features: Features,
    frames: Vec<Frame>,
    /// (frame name, url) for every navigation, oldest first
    navigations: Vec<(String, String)>,
}

impl Frameset {
    /// Standard two-frame layout: visible content plus hidden communication frame
    pub fn new(content: Document, features: Features) -> Self {
        let mut set = Self {
            title: content.title().to_string(),
            status: String::new(),
            alerts: Vec::new(),
            features,
            frames: Vec::with_capacity(2),
            navigations: Vec::new(),
        };
        set.attach(Frame::new(CONTENT_FRAME, content));
        let mut comm = Frame::new(COMM_FRAME, Document::default());
        comm.hidden = true;
        set.attach(comm);
        set
    }

    /// Add another named frame
    pub fn with_frame(mut self, frame: Frame) -> Self {
        self.attach(frame);
        self
    }

    fn attach(&mut self, mut frame: Frame) {
        frame.document.set_all_collection(self.features.all_collection);
        self.frames.push(frame);
    }

    /// `frames[name]`
    pub fn frame(&self, name: &str) -> Option<&Frame> {
        self.frames.iter().find(|f| f.name == name)
    }

    pub fn frame_mut(&mut self, name: &str) -> Option<&mut Frame> {
        self.frames.iter_mut().find(|f| f.name == name)
    }

    /// The visible content frame
    pub fn content(&self) -> &Frame {
        &self.frames[0]
    }

    pub fn content_mut(&mut self) -> &mut Frame {
        &mut self.frames[0]
    }

    /// The hidden communication frame
    pub fn communication(&self) -> &Frame {
        &self.frames[1]
    }

    /// Point `frames[index].location.href` at `url`
    pub fn navigate(&mut self, index: usize, url: &str) {
        if let Some(frame) = self.frames.get_mut(index) {
            tracing::debug!("frame {} -> {}", frame.name, url);
            frame.location = url.to_string();
            self.navigations.push((frame.name.clone(), url.to_string()));
        }
    }

    /// Finish loading a frame: swap in the document that arrived
    pub fn load(&mut self, name: &str, mut document: Document) {
        document.set_all_collection(self.features.all_collection);
        if let Some(frame) = self.frame_mut(name) {
            frame.location = document.url().to_string();
            frame.document = document;
        }
    }

    pub fn navigations(&self) -> &[(String, String)] {
        &self.navigations
    }

    pub fn alert(&mut self, message: &str) {
        self.alerts.push(message.to_string());
    }

    /// Copy the content frame's title up to the window
    pub fn sync_title(&mut self) {
        self.title = self.content().document.title().to_string();
    }
}
