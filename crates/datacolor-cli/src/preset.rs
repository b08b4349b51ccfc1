//! # Preset Subcommand
//!
//! Works with the built-in demo factories: without determiners it prints
//! the preset's dump, with determiners it evaluates the preset like
//! `datacolor color` does.

use anyhow::{Context, Result};
use clap::Args;

use datacolor_core::CssColorNames;
use datacolor_gradient::presets::PRESET_COUNT;
use datacolor_gradient::testable_factory;

use crate::color::{render, StyleArgs};

/// Arguments for the `datacolor preset` subcommand.
#[derive(Args, Debug)]
pub struct PresetArgs {
    /// Preset index.
    #[arg(value_name = "N")]
    pub index: usize,

    #[command(flatten)]
    pub style: StyleArgs,

    /// Determiners to evaluate. Omit to dump the preset.
    #[arg(value_name = "DETERMINER", allow_negative_numbers = true)]
    pub determiners: Vec<f64>,
}

/// Execute the preset subcommand.
pub fn run_preset(args: &PresetArgs, cache_capacity: usize) -> Result<u8> {
    for line in preset_lines(args, cache_capacity)? {
        println!("{line}");
    }
    Ok(0)
}

fn preset_lines(args: &PresetArgs, cache_capacity: usize) -> Result<Vec<String>> {
    let factory = testable_factory(args.index).with_context(|| {
        format!(
            "no preset {}; available presets are 0 to {}",
            args.index,
            PRESET_COUNT - 1
        )
    })?
    .with_cache_capacity(cache_capacity);
    if args.determiners.is_empty() {
        return Ok(factory.dump_lines(&CssColorNames));
    }
    Ok(vec![render(&factory, &args.determiners, args.style)?])
}
