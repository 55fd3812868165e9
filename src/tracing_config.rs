//! Tracing configuration for debugging resolution.
//!
//! Supports three output formats controlled by `GENSHAPE_LOG_FORMAT`:
//!
//! - `text` (default): Standard `tracing-subscriber` flat output
//! - `tree`: Hierarchical indented output via `tracing-tree`
//! - `json`: One JSON object per span/event
//!
//! ## Quick start
//!
//! ```bash
//! # Every cache miss and hierarchy step
//! GENSHAPE_LOG=trace cargo test -p genshape-solver
//!
//! # Only the member walk, as a tree
//! GENSHAPE_LOG="genshape_solver::member=trace" GENSHAPE_LOG_FORMAT=tree cargo test
//!
//! # JSON for tooling
//! GENSHAPE_LOG=debug GENSHAPE_LOG_FORMAT=json cargo test
//! ```
//!
//! The subscriber is only initialised when `GENSHAPE_LOG` (or `RUST_LOG`) is
//! set.

use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, Registry, fmt};

/// Tracing output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Standard flat text lines (default).
    Text,
    /// Hierarchical indented tree via `tracing-tree`.
    Tree,
    /// Newline-delimited JSON objects.
    Json,
}

impl LogFormat {
    /// Parse a format name; unknown names fall back to [`LogFormat::Text`].
    pub fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "tree" => Self::Tree,
            "json" => Self::Json,
            _ => Self::Text,
        }
    }

    fn from_env() -> Self {
        Self::parse(&std::env::var("GENSHAPE_LOG_FORMAT").unwrap_or_default())
    }
}

/// Build an `EnvFilter` from `GENSHAPE_LOG`, falling back to `RUST_LOG`.
fn build_filter() -> EnvFilter {
    if let Ok(val) = std::env::var("GENSHAPE_LOG") {
        EnvFilter::builder().parse_lossy(val)
    } else {
        EnvFilter::from_default_env()
    }
}

/// Initialise the global tracing subscriber.
///
/// Does nothing when neither `GENSHAPE_LOG` nor `RUST_LOG` is set. Calling it
/// again after a subscriber is installed is a no-op. Output goes to stderr
/// (`tracing-tree` writes there by default). Returns whether this call
/// installed the subscriber.
pub fn init_tracing() -> bool {
    let has_genshape_log = std::env::var("GENSHAPE_LOG").is_ok();
    let has_rust_log = std::env::var("RUST_LOG").is_ok();
    if !has_genshape_log && !has_rust_log {
        return false;
    }

    let filter = build_filter();
    let format = LogFormat::from_env();

    // try_init: tests may call this from several threads.
    let installed = match format {
        LogFormat::Tree => {
            let tree_layer = tracing_tree::HierarchicalLayer::default()
                .with_indent_amount(2)
                .with_indent_lines(true)
                .with_targets(true);

            Registry::default().with(filter).with(tree_layer).try_init()
        }
        LogFormat::Json => {
            let json_layer = fmt::layer().json().with_writer(std::io::stderr);

            Registry::default().with(filter).with(json_layer).try_init()
        }
        LogFormat::Text => {
            let text_layer = fmt::layer().with_writer(std::io::stderr);

            Registry::default().with(filter).with(text_layer).try_init()
        }
    }
    .is_ok();

    if installed {
        tracing::info!(?format, "genshape tracing initialised");
    }
    installed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_format_parse() {
        assert_eq!(LogFormat::parse("tree"), LogFormat::Tree);
        assert_eq!(LogFormat::parse(" JSON "), LogFormat::Json);
        assert_eq!(LogFormat::parse("text"), LogFormat::Text);
        assert_eq!(LogFormat::parse(""), LogFormat::Text);
        assert_eq!(LogFormat::parse("verbose"), LogFormat::Text);
    }

    #[test]
    fn test_init_tracing_installs_at_most_once() {
        init_tracing();
        assert!(!init_tracing());
    }
}
