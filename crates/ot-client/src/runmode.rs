//! Run Mode
//!
//! The server-interpreted state label carried in one designated request
//! field. Serialization updates it when it meets the trigger name and
//! every dispatch resets it.

/// Current run mode plus the trigger field name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunMode {
    current: String,
    param: String,
}

impl RunMode {
    pub fn new(param: impl Into<String>) -> Self {
        Self {
            current: String::new(),
            param: param.into(),
        }
    }

    pub fn get(&self) -> &str {
        &self.current
    }

    pub fn set(&mut self, mode: impl Into<String>) {
        self.current = mode.into();
    }

    /// Trigger field name
    pub fn param(&self) -> &str {
        &self.param
    }

    pub fn set_param(&mut self, param: impl Into<String>) {
        self.param = param.into();
    }

    pub fn reset(&mut self) {
        self.current.clear();
    }

    /// Record `value` as the run mode if `name` is the trigger.
    /// Returns whether it was.
    pub fn observe(&mut self, name: &str, value: &str) -> bool {
        if name != self.param {
            return false;
        }
        tracing::debug!("run mode {:?} -> {:?}", self.current, value);
        self.current = value.to_string();
        true
    }
}
