//! # datacolor-cli: Command-Line Front End
//!
//! Provides the `datacolor` binary.
//!
//! ## Subcommands
//!
//! - `datacolor color --config FILE X [Y ...]`: evaluate a factory.
//! - `datacolor dump --config FILE`: human-readable listing.
//! - `datacolor snapshot --config FILE`: canonical snapshot and fingerprint.
//! - `datacolor nearest COLOR`: nearest CSS color name.
//! - `datacolor preset N [X ...]`: dump or evaluate a built-in factory.
//!
//! ```bash
//! datacolor color --config heat.yaml --css-fg-bg 12.5 80
//! datacolor -vv snapshot --config heat.yaml
//! ```
//!
//! Every `run_*` handler returns the process exit code, and errors are
//! reported by the binary with their full context chain.

pub mod color;
pub mod dump;
pub mod nearest;
pub mod preset;
pub mod snapshot;

use std::path::Path;

use anyhow::{Context, Result};

use datacolor_gradient::{FactoryConfig, MultiDimension};

/// Read a factory configuration. `.yaml`/`.yml` files are parsed as YAML,
/// anything else as JSON.
pub fn load_config(path: &Path) -> Result<FactoryConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config: {}", path.display()))?;

    let is_yaml = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("yaml") || e.eq_ignore_ascii_case("yml"));

    let config = if is_yaml {
        serde_yaml::from_str(&content)
            .with_context(|| format!("failed to parse YAML: {}", path.display()))?
    } else {
        serde_json::from_str(&content)
            .with_context(|| format!("failed to parse JSON: {}", path.display()))?
    };
    tracing::debug!(path = %path.display(), yaml = is_yaml, "config loaded");
    Ok(config)
}

/// Load a configuration and build its factory.
pub fn load_factory(path: &Path, cache_capacity: usize) -> Result<MultiDimension> {
    let config = load_config(path)?;
    let factory = MultiDimension::from_config(&config)
        .with_context(|| format!("invalid factory config: {}", path.display()))?;
    Ok(factory.with_cache_capacity(cache_capacity))
}
