//! Parameter Serializer
//!
//! Turns the arguments of a request call into a `ParameterSet`:
//! bare names are read from the page, `key=value` strings are sent as
//! they are, and session settings ride along with every request.

use ot_dom::DEFAULT_ON_VALUE;
use ot_wire::{Group, ParameterSet};

use crate::capability::Capability;
use crate::config::Config;
use crate::host::Host;
use crate::resolver::{FieldKind, ObjectResolver};
use crate::runmode::RunMode;

/// Value reported for a selection list with nothing selected
pub const NO_SELECTION: &str = "-1";

/// Arguments after the URL, split by kind
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Classified {
    /// Element names, in call order
    pub fields: Vec<String>,
    /// `key=value` literals, in call order
    pub expr: Vec<String>,
}

/// Split call arguments into fields and expressions. The first argument
/// is the target URL and is skipped.
pub fn classify<S: AsRef<str>>(args: &[S]) -> Classified {
    let mut classified = Classified::default();
    for arg in args.iter().skip(1).map(AsRef::as_ref) {
        if arg.contains('=') {
            classified.expr.push(arg.to_string());
        } else {
            classified.fields.push(arg.to_string());
        }
    }
    classified
}

/// Read the value a field would submit
pub fn read_field(kind: &FieldKind, capability: &dyn Capability, config: &Config) -> Option<String> {
    match kind {
        FieldKind::Text(element) => element.borrow().value().map(str::to_string),
        FieldKind::Selection(element) => {
            let element = element.borrow();
            let select = element.as_select()?;
            Some(select.selected_value().unwrap_or(NO_SELECTION).to_string())
        }
        FieldKind::Checkbox(element) => {
            let element = element.borrow();
            let input = element.as_input()?;
            Some(if !input.checked {
                config.checked_false_value.clone()
            } else if input.value == DEFAULT_ON_VALUE {
                config.checked_true_value.clone()
            } else {
                input.value.clone()
            })
        }
        FieldKind::RadioGroup(items) => Some(
            items
                .iter()
                .find_map(|item| {
                    let item = item.borrow();
                    item.as_input().filter(|i| i.checked).map(|i| i.value.clone())
                })
                .unwrap_or_else(|| config.checked_false_value.clone()),
        ),
        FieldKind::RenderedContent(element) => capability.read_rendered_content(&element.borrow()),
    }
}

/// One request's worth of serialization state
pub struct ParameterSerializer<'a> {
    resolver: &'a mut ObjectResolver,
    host: &'a dyn Host,
    capability: &'a dyn Capability,
    config: &'a Config,
    run_mode: &'a mut RunMode,
}

impl<'a> ParameterSerializer<'a> {
    pub fn new(
        resolver: &'a mut ObjectResolver,
        host: &'a dyn Host,
        capability: &'a dyn Capability,
        config: &'a Config,
        run_mode: &'a mut RunMode,
    ) -> Self {
        Self {
            resolver,
            host,
            capability,
            config,
            run_mode,
        }
    }

    /// Read each named field from the page. Names that do not resolve,
    /// or resolve to something unreadable, are left out.
    pub fn build_field_params(&mut self, names: &[String]) -> Group {
        let mut group = Group::new();
        for name in names {
            let value = self
                .resolver
                .resolve(name, self.host, self.capability)
                .and_then(|resolved| resolved.kind)
                .and_then(|kind| read_field(&kind, self.capability, self.config));

            match value {
                Some(value) => {
                    self.run_mode.observe(name, &value);
                    group.insert(name.as_str(), value);
                }
                None => tracing::debug!("field {} skipped: nothing to read", name),
            }
        }
        group
    }

    /// Split each `key=value` on its first `=`. A string without `=`
    /// becomes a key with an empty value.
    pub fn build_expr_params(&mut self, exprs: &[String]) -> Group {
        let mut group = Group::new();
        for expr in exprs {
            let (key, value) = expr.split_once('=').unwrap_or((expr.as_str(), ""));
            self.run_mode.observe(key, value);
            group.insert(key, value);
        }
        group
    }

    /// Session id, script flag, run-mode trigger and, when set, the run mode
    pub fn build_settings(&self) -> Group {
        build_settings(self.config, self.run_mode)
    }

    /// Full pipeline: classify, read, assemble
    pub fn serialize<S: AsRef<str>>(&mut self, args: &[S]) -> ParameterSet {
        let classified = classify(args);
        let fields = self.build_field_params(&classified.fields);
        let expr = self.build_expr_params(&classified.expr);
        ParameterSet::assemble(fields, expr, self.build_settings())
    }
}

/// Settings group for the current session state
pub fn build_settings(config: &Config, run_mode: &RunMode) -> Group {
    let mut settings = Group::new();
    settings.insert("session_id", config.session_id.as_str());
    settings.insert("need_script", "1");
    settings.insert("runmode_param", run_mode.param());
    if !run_mode.get().is_empty() {
        settings.insert("runmode", run_mode.get());
    }
    settings
}
