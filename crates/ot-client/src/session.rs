//! Session
//!
//! Per-page client context. Owns the hosting window together with the
//! capability chosen for it, the runtime settings, the run mode and the
//! object cache. Every public entry point of the client is a method here.

use ot_dom::Handle;
use ot_wire::{Content, ParameterSet};

use crate::capability::{Capability, CapabilityDetector, CapabilityMode};
use crate::config::{Config, Settings};
use crate::host::Host;
use crate::resolver::{ObjectResolver, Resolved};
use crate::response::ResponseDispatcher;
use crate::runmode::RunMode;
use crate::serialize::ParameterSerializer;
use crate::transport::Transport;

/// A serialized request, ready to go out
#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    pub url: String,
    pub params: ParameterSet,
    /// Escaped markup payload
    pub packet: String,
}

pub struct Session<H: Host> {
    host: H,
    config: Config,
    capability: Box<dyn Capability>,
    settings: Settings,
    run_mode: RunMode,
    resolver: ObjectResolver,
}

impl<H: Host> Session<H> {
    /// Classify the host and set up a session for it. An unrecognized
    /// browser still gets a session, with the degraded capability.
    pub fn new(config: Config, mut host: H) -> Self {
        let mode = CapabilityDetector::detect(&host.features());
        tracing::info!("capability: {:?}", mode);
        if mode == CapabilityMode::Unknown {
            tracing::warn!("unrecognized browser, running degraded");
            if !config.wrong_browser.is_empty() {
                host.alert(&config.wrong_browser);
            }
        }
        Self::with_capability(config, host, CapabilityDetector::select(mode))
    }

    /// Set up with an explicit capability, skipping detection
    pub fn with_capability(config: Config, host: H, capability: Box<dyn Capability>) -> Self {
        Self {
            settings: Settings::from(&config),
            run_mode: RunMode::new(config.run_mode_param.clone()),
            resolver: ObjectResolver::new(),
            host,
            config,
            capability,
        }
    }

    /// Serialize a request from call arguments: target URL first, then
    /// field names and `key=value` expressions. `None` when there is no URL.
    pub fn prepare<S: AsRef<str>>(&mut self, args: &[S]) -> Option<Request> {
        let url = args.first()?.as_ref().to_string();
        let params = ParameterSerializer::new(
            &mut self.resolver,
            &self.host,
            self.capability.as_ref(),
            &self.config,
            &mut self.run_mode,
        )
        .serialize(args);
        let packet = ot_wire::encode(&params);
        tracing::debug!("prepared request to {}: {}", url, packet);
        Some(Request { url, params, packet })
    }

    /// Background request through the communication frame. The page
    /// stays as it is; the reply comes back through `update`.
    pub fn call_url<S: AsRef<str>>(&mut self, args: &[S]) {
        let Some(request) = self.prepare(args) else {
            tracing::warn!("call_url without a url");
            return;
        };
        self.dispatch(&request, true);
    }

    #[deprecated(note = "use call_url")]
    pub fn send_parameters<S: AsRef<str>>(&mut self, args: &[S]) {
        self.call_url(args);
    }

    /// Foreground request: the content frame loads the reply page
    pub fn fetch_html<S: AsRef<str>>(&mut self, args: &[S]) {
        let Some(request) = self.prepare(args) else {
            tracing::warn!("fetch_html without a url");
            return;
        };
        // The content document is about to be replaced
        self.resolver.invalidate();
        self.dispatch(&request, false);
    }

    fn dispatch(&mut self, request: &Request, background: bool) {
        Transport::new(&mut self.host, &mut self.run_mode, &self.settings).dispatch(
            &request.url,
            &request.packet,
            background,
        );
    }

    /// Apply a reply. Returns the number of fields filled.
    pub fn update(&mut self, content: Option<&Content>) -> usize {
        ResponseDispatcher::new(
            &mut self.host,
            &mut self.resolver,
            self.capability.as_ref(),
            &self.settings,
        )
        .on_response(content)
    }

    /// Give focus to the field's first element. Unknown names are ignored.
    pub fn focus_field(&mut self, name: &str) -> bool {
        let Some(resolved) = self.resolve(name) else {
            tracing::debug!("focus: {} unresolved", name);
            return false;
        };
        let Some(element) = resolved.handle.first() else {
            return false;
        };
        element.borrow_mut().focused = true;
        true
    }

    /// Look a field up through the session's cache
    pub fn resolve(&mut self, name: &str) -> Option<Resolved> {
        self.resolver.resolve(name, &self.host, self.capability.as_ref())
    }

    /// Raw element handle for a field
    pub fn element(&mut self, name: &str) -> Option<Handle> {
        self.resolve(name).map(|r| r.handle)
    }

    /// Forget cached lookups after changing the page
    pub fn expire_cache(&mut self) {
        self.resolver.invalidate();
    }

    pub fn display_error(&mut self, message: &str) {
        tracing::warn!("{}", message);
        self.host.alert(message);
    }

    pub fn session_id(&self) -> &str {
        &self.config.session_id
    }

    pub fn mode(&self) -> CapabilityMode {
        self.capability.mode()
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    /// Mutable host access. Call `expire_cache` after changing documents.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn max_select_width(&self) -> usize {
        self.settings.max_select_width
    }

    pub fn set_max_select_width(&mut self, width: usize) {
        self.settings.max_select_width = width;
    }

    pub fn auto_clear(&self) -> bool {
        self.settings.auto_clear
    }

    pub fn set_auto_clear(&mut self, auto_clear: bool) {
        self.settings.auto_clear = auto_clear;
    }

    pub fn fetch_start(&self) -> &str {
        &self.settings.fetch_start
    }

    pub fn set_fetch_start(&mut self, message: impl Into<String>) {
        self.settings.fetch_start = message.into();
    }

    pub fn fetch_display(&self) -> &str {
        &self.settings.fetch_display
    }

    pub fn set_fetch_display(&mut self, message: impl Into<String>) {
        self.settings.fetch_display = message.into();
    }

    pub fn fetch_finish(&self) -> &str {
        &self.settings.fetch_finish
    }

    pub fn set_fetch_finish(&mut self, message: impl Into<String>) {
        self.settings.fetch_finish = message.into();
    }

    pub fn null_reply(&self) -> &str {
        &self.settings.null_reply
    }

    pub fn set_null_reply(&mut self, message: impl Into<String>) {
        self.settings.null_reply = message.into();
    }

    pub fn run_mode(&self) -> &str {
        self.run_mode.get()
    }

    pub fn set_run_mode(&mut self, mode: impl Into<String>) {
        self.run_mode.set(mode);
    }

    pub fn run_mode_param(&self) -> &str {
        self.run_mode.param()
    }

    pub fn set_run_mode_param(&mut self, param: impl Into<String>) {
        self.run_mode.set_param(param);
    }
}
