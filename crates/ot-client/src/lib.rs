//! OpenThought Client
//!
//! Client half of the OpenThought protocol. Page state is serialized
//! into a markup packet and sent by navigating a hidden frame; the reply
//! comes back as `Content` and is written into the page's fields.
//!
//! ```text
//! Session::call_url ──► ParameterSerializer ──► ot_wire::encode ──► Transport
//!                            │                                          │
//!                       ObjectResolver ◄── Capability          Host::navigate
//!                            │
//! Session::update ──► ResponseDispatcher ──► FieldPopulators
//! ```

pub mod capability;
pub mod config;
pub mod host;
pub mod populate;
pub mod resolver;
pub mod response;
pub mod runmode;
pub mod scope;
pub mod serialize;
pub mod session;
pub mod transport;

pub use capability::{Capability, CapabilityDetector, CapabilityMode};
pub use config::{Config, ConfigError, Settings};
pub use host::{Host, Target};
pub use populate::{checkbox_state, FieldPopulators};
pub use resolver::{FieldKind, ObjectCache, ObjectResolver, Resolved};
pub use response::ResponseDispatcher;
pub use runmode::RunMode;
pub use scope::{ScopeChain, ScopeProvider};
pub use serialize::{classify, Classified, ParameterSerializer};
pub use session::{Request, Session};
pub use transport::Transport;

pub use ot_dom;
pub use ot_wire;
