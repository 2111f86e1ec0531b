//! Transport
//!
//! Sends a request by navigating a frame. A background request uses the
//! hidden communication frame, a foreground one replaces the content
//! frame. Nothing waits for the answer: the loaded frame calls back into
//! the response dispatcher on its own.

use ot_wire::QUERY_PARAM;

use crate::config::Settings;
use crate::host::{Host, Target};
use crate::runmode::RunMode;

/// URL carrying `packet` to `url`
pub fn compose_url(url: &str, packet: &str) -> String {
    format!("{}?{}={}", url, QUERY_PARAM, packet)
}

pub struct Transport<'a> {
    host: &'a mut dyn Host,
    run_mode: &'a mut RunMode,
    settings: &'a Settings,
}

impl<'a> Transport<'a> {
    pub fn new(host: &'a mut dyn Host, run_mode: &'a mut RunMode, settings: &'a Settings) -> Self {
        Self {
            host,
            run_mode,
            settings,
        }
    }

    /// Fire the request. The run mode is cleared because the packet
    /// already carries it.
    pub fn dispatch(&mut self, url: &str, packet: &str, background: bool) {
        self.run_mode.reset();
        self.host.set_status(&self.settings.fetch_start);

        let target = if background {
            Target::Communication
        } else {
            Target::Content
        };
        let href = compose_url(url, packet);
        tracing::info!("{:?} request to {} ({} bytes)", target, url, packet.len());
        self.host.navigate(target, &href);

        if !background {
            self.host.propagate_title();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use ot_dom::{Document, Features, Frameset, COMM_FRAME};

    fn frameset() -> Frameset {
        Frameset::new(Document::new("http://h/start").with_title("Start"), Features::standards())
    }

    #[test]
    fn test_compose_url() {
        assert_eq!(compose_url("/save.cgi", "<OpenThought/>"), "/save.cgi?OpenThought=<OpenThought/>");
    }

    #[test]
    fn test_background_dispatch() {
        let mut host = frameset();
        let mut run_mode = RunMode::new("mode");
        run_mode.set("edit");
        let settings = Settings::from(&Config::default());

        Transport::new(&mut host, &mut run_mode, &settings).dispatch("/save.cgi", "P", true);

        assert_eq!(run_mode.get(), "");
        assert_eq!(host.status, "Fetching...");
        assert_eq!(host.content().location, "http://h/start");
        assert_eq!(host.frame(COMM_FRAME).unwrap().location, "/save.cgi?OpenThought=P");
    }

    #[test]
    fn test_foreground_dispatch() {
        let mut host = frameset();
        host.title = "stale".to_string();
        let mut run_mode = RunMode::new("mode");
        let settings = Settings::from(&Config::default());

        Transport::new(&mut host, &mut run_mode, &settings).dispatch("/page.cgi", "P", false);

        assert_eq!(host.content().location, "/page.cgi?OpenThought=P");
        assert_eq!(host.communication().location, "about:blank");
        assert_eq!(host.title, "Start");
    }
}
