//! # Dump Subcommand
//!
//! Prints the human-readable listing of a factory configuration, naming
//! the nearest CSS color of every anchor.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use datacolor_core::CssColorNames;

/// Arguments for the `datacolor dump` subcommand.
#[derive(Args, Debug)]
pub struct DumpArgs {
    /// Factory configuration (YAML or JSON).
    #[arg(long, value_name = "FILE")]
    pub config: PathBuf,
}

/// Execute the dump subcommand.
pub fn run_dump(args: &DumpArgs, cache_capacity: usize) -> Result<u8> {
    let factory = crate::load_factory(&args.config, cache_capacity)?;
    for line in factory.dump_lines(&CssColorNames) {
        println!("{line}");
    }
    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn run_dump_accepts_unready_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.yaml");
        std::fs::write(&path, "dimensions:\n  - exponent: 2\n").unwrap();
        let args = DumpArgs { config: path };
        assert_eq!(run_dump(&args, 4).unwrap(), 0);
    }
}
