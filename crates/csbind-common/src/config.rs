//! Binding configuration.
//!
//! The defaults reproduce the tables csbind ships for the sokol headers. A
//! user configuration file is deserialized as a [`PartialBindingConfig`] and
//! layered over the defaults with [`BindingConfig::merge`].

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::overrides::Overrides;

pub const DEFAULT_NAMESPACE: &str = "Sokol";
pub const DEFAULT_LIBRARY: &str = "sokol";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BindingConfig {
    /// Namespace wrapping every generated module class.
    pub namespace: String,
    /// Native library name used in `[DllImport]`.
    pub library: String,
    /// C prefix (`sg_`) -> generated module class name (`Gfx`).
    pub module_names: IndexMap<String, String>,
    pub overrides: Overrides,
}

/// A configuration layer where every scalar is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PartialBindingConfig {
    pub namespace: Option<String>,
    pub library: Option<String>,
    pub module_names: IndexMap<String, String>,
    pub overrides: Overrides,
}

impl Default for BindingConfig {
    fn default() -> Self {
        let module_names = [
            ("sg_", "Gfx"),
            ("sapp_", "App"),
            ("stm_", "Time"),
            ("saudio_", "Audio"),
            ("sgl_", "Gl"),
            ("sdtx_", "DebugText"),
            ("sshape_", "Shape"),
        ]
        .into_iter()
        .map(|(prefix, name)| (prefix.to_string(), name.to_string()))
        .collect();

        BindingConfig {
            namespace: DEFAULT_NAMESPACE.to_string(),
            library: DEFAULT_LIBRARY.to_string(),
            module_names,
            overrides: Overrides::builtin(),
        }
    }
}

impl BindingConfig {
    pub fn module_name(&self, prefix: &str) -> Option<&str> {
        self.module_names.get(prefix).map(String::as_str)
    }

    /// Layer `partial` over `self`: scalars replace, tables extend.
    pub fn merge(&mut self, partial: PartialBindingConfig) {
        if let Some(namespace) = partial.namespace {
            self.namespace = namespace;
        }
        if let Some(library) = partial.library {
            self.library = library;
        }
        self.module_names.extend(partial.module_names);
        self.overrides.merge(partial.overrides);
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod config_tests;
