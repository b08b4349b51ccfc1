//! # Nearest Subcommand
//!
//! Finds the CSS color name closest to a color given in any supported
//! text encoding.

use anyhow::{Context, Result};
use clap::Args;

use datacolor_core::{Color, CssColorNames};

/// Arguments for the `datacolor nearest` subcommand.
#[derive(Args, Debug)]
pub struct NearestArgs {
    /// `#RRGGBB`, `rgb(r,g,b)` or a color name.
    #[arg(value_name = "COLOR")]
    pub color: String,
}

/// Execute the nearest subcommand.
pub fn run_nearest(args: &NearestArgs) -> Result<u8> {
    println!("{}", describe(&args.color)?);
    Ok(0)
}

/// `rgb(r,g,b) #RRGGBB: <percent>% off of <name>`
pub fn describe(text: &str) -> Result<String> {
    let color = Color::parse(text).with_context(|| format!("cannot parse color {text:?}"))?;
    let name = color
        .similar_to(&CssColorNames)
        .context("color name table is empty")?;
    Ok(format!("{color} {}: {name}", color.to_hex()))
}
