//! Response Dispatcher
//!
//! Entry point for a reply loaded into the communication frame.

use ot_wire::Content;

use crate::capability::Capability;
use crate::config::Settings;
use crate::host::Host;
use crate::populate::FieldPopulators;
use crate::resolver::ObjectResolver;

pub struct ResponseDispatcher<'a> {
    host: &'a mut dyn Host,
    resolver: &'a mut ObjectResolver,
    capability: &'a dyn Capability,
    settings: &'a Settings,
}

impl<'a> ResponseDispatcher<'a> {
    pub fn new(
        host: &'a mut dyn Host,
        resolver: &'a mut ObjectResolver,
        capability: &'a dyn Capability,
        settings: &'a Settings,
    ) -> Self {
        Self {
            host,
            resolver,
            capability,
            settings,
        }
    }

    /// Apply a reply. No content means the server answered with nothing
    /// to show: alert (when configured) and leave the page alone.
    /// Returns the number of fields filled.
    pub fn on_response(&mut self, content: Option<&Content>) -> usize {
        let Some(content) = content else {
            tracing::warn!("reply carried no content");
            if !self.settings.null_reply.is_empty() {
                self.host.alert(&self.settings.null_reply);
            }
            return 0;
        };

        self.host.set_status(&self.settings.fetch_display);
        let filled = FieldPopulators::new(&mut *self.resolver, &*self.host, self.capability, self.settings)
            .populate_all(content);
        self.host.set_status(&self.settings.fetch_finish);
        filled
    }
}
