//! Configuration file loading.
//!
//! `csbind.json` layers over the built-in binding configuration and lists
//! the modules to generate:
//!
//! ```json
//! {
//!   // comments are allowed
//!   "namespace": "Sokol",
//!   "out_dir": "src/sokol",
//!   "module_names": { "sfetch_": "Fetch" },
//!   "overrides": { "ignores": ["sfetch_dowork"] },
//!   "modules": [
//!     { "ir": "ir/sokol_gfx.json", "header": "c/sokol_gfx.h" },
//!     { "ir": "ir/sokol_shape.json" }
//!   ]
//! }
//! ```
//!
//! Relative paths are resolved against the directory holding the file.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use csbind_common::BindingConfig;
use csbind_common::config::PartialBindingConfig;

use crate::args::CliArgs;

/// File name looked up in the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "csbind.json";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ConfigFile {
    #[serde(flatten)]
    pub binding: PartialBindingConfig,
    pub out_dir: Option<PathBuf>,
    pub modules: Vec<ModuleEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ModuleEntry {
    pub ir: PathBuf,
    #[serde(default)]
    pub header: Option<PathBuf>,
}

pub fn parse_config(source: &str) -> Result<ConfigFile> {
    let stripped = strip_comments(source);
    let config = serde_json::from_str(&stripped).context("failed to parse csbind config JSON")?;
    Ok(config)
}

pub fn load_config(path: &Path) -> Result<ConfigFile> {
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config: {}", path.display()))?;
    let mut config =
        parse_config(&source).with_context(|| format!("failed to parse config: {}", path.display()))?;

    let base_dir = path.parent().unwrap_or_else(|| Path::new(""));
    config.out_dir = config.out_dir.map(|dir| base_dir.join(dir));
    for module in &mut config.modules {
        module.ir = base_dir.join(&module.ir);
        module.header = module.header.take().map(|header| base_dir.join(header));
    }
    Ok(config)
}

/// The config file named by `--config`, or `csbind.json` in `cwd` if present.
pub fn find_config(args: &CliArgs, cwd: &Path) -> Result<Option<ConfigFile>> {
    let path = match &args.config {
        Some(path) => cwd.join(path),
        None => {
            let default_path = cwd.join(DEFAULT_CONFIG_FILE);
            if !default_path.is_file() {
                return Ok(None);
            }
            default_path
        }
    };
    load_config(&path).map(Some)
}

/// Built-in defaults, then the config file, then command line flags.
pub fn resolve_binding_config(args: &CliArgs, file: Option<&ConfigFile>) -> BindingConfig {
    let mut config = BindingConfig::default();
    if let Some(file) = file {
        config.merge(file.binding.clone());
    }
    if let Some(namespace) = &args.namespace {
        config.namespace = namespace.clone();
    }
    if let Some(library) = &args.library {
        config.library = library.clone();
    }
    config
}

/// Remove `//` and `/* */` comments outside of string literals.
fn strip_comments(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();
    let mut in_string = false;
    let mut escape = false;

    while let Some(ch) = chars.next() {
        if in_string {
            out.push(ch);
            if escape {
                escape = false;
            } else if ch == '\\' {
                escape = true;
            } else if ch == '"' {
                in_string = false;
            }
            continue;
        }

        match (ch, chars.peek().copied()) {
            ('"', _) => {
                in_string = true;
                out.push(ch);
            }
            ('/', Some('/')) => {
                for next in chars.by_ref() {
                    if next == '\n' {
                        out.push(next);
                        break;
                    }
                }
            }
            ('/', Some('*')) => {
                chars.next();
                let mut prev = '\0';
                for next in chars.by_ref() {
                    if prev == '*' && next == '/' {
                        break;
                    }
                    if next == '\n' {
                        out.push(next);
                    }
                    prev = next;
                }
            }
            _ => out.push(ch),
        }
    }

    out
}
