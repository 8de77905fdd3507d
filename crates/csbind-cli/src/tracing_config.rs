//! Tracing configuration.
//!
//! Supports three output formats controlled by `CSBIND_LOG_FORMAT`:
//!
//! - `text` (default): standard `tracing-subscriber` flat output
//! - `tree`: hierarchical indented output via `tracing-tree`, one
//!   `generate_module` span per module with its declarations nested inside
//! - `json`: one JSON object per span/event
//!
//! ```bash
//! CSBIND_LOG=debug CSBIND_LOG_FORMAT=tree csbind ir/sokol_gfx.json
//! CSBIND_LOG="csbind_emitter=debug" csbind ir/sokol_gfx.json
//! ```
//!
//! The subscriber is only initialised when `CSBIND_LOG` (or `RUST_LOG`) is
//! set, so there is zero overhead otherwise.

use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, Registry, fmt};

const LOG_ENV: &str = "CSBIND_LOG";
const LOG_FORMAT_ENV: &str = "CSBIND_LOG_FORMAT";

/// Tracing output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Tree,
    Json,
}

impl LogFormat {
    pub fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "tree" => Self::Tree,
            "json" => Self::Json,
            _ => Self::Text,
        }
    }

    fn from_env() -> Self {
        Self::parse(&std::env::var(LOG_FORMAT_ENV).unwrap_or_default())
    }
}

/// `CSBIND_LOG` takes precedence over `RUST_LOG`; both use the `RUST_LOG`
/// directive syntax.
fn build_filter() -> EnvFilter {
    if let Ok(val) = std::env::var(LOG_ENV) {
        EnvFilter::builder().parse_lossy(val)
    } else {
        EnvFilter::from_default_env()
    }
}

/// Initialise the global tracing subscriber.
///
/// All output goes to stderr so it never mixes with `--stdout` or
/// `--show-config` output.
pub fn init_tracing() {
    let has_own_log = std::env::var(LOG_ENV).is_ok();
    let has_rust_log = std::env::var("RUST_LOG").is_ok();
    if !has_own_log && !has_rust_log {
        return;
    }

    let filter = build_filter();
    match LogFormat::from_env() {
        LogFormat::Tree => {
            let tree_layer = tracing_tree::HierarchicalLayer::default()
                .with_indent_amount(2)
                .with_indent_lines(true)
                .with_targets(true);

            Registry::default().with(filter).with(tree_layer).init();
        }
        LogFormat::Json => {
            let json_layer = fmt::layer().json().with_writer(std::io::stderr);

            Registry::default().with(filter).with(json_layer).init();
        }
        LogFormat::Text => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .init();
        }
    }
}
