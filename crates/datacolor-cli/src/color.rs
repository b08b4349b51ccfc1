//! # Color Subcommand
//!
//! Evaluates a factory at one determiner tuple and prints the result as
//! `rgb(r,g,b) #RRGGBB` or as a CSS fragment.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use datacolor_gradient::MultiDimension;

/// Output format flags shared by `color` and `preset`.
#[derive(Args, Debug, Clone, Copy, Default)]
pub struct StyleArgs {
    /// Print `background-color:#RRGGBB;`.
    #[arg(long, conflicts_with = "css_fg_bg")]
    pub css: bool,
    /// Print `color:<black|white>;background-color:#RRGGBB;`.
    #[arg(long)]
    pub css_fg_bg: bool,
}

/// Arguments for the `datacolor color` subcommand.
#[derive(Args, Debug)]
pub struct ColorArgs {
    /// Factory configuration (YAML or JSON).
    #[arg(long, value_name = "FILE")]
    pub config: PathBuf,

    #[command(flatten)]
    pub style: StyleArgs,

    /// One determiner per dimension, in dimension order.
    #[arg(
        value_name = "DETERMINER",
        required = true,
        num_args = 1..,
        allow_negative_numbers = true
    )]
    pub determiners: Vec<f64>,
}

/// Execute the color subcommand.
pub fn run_color(args: &ColorArgs, cache_capacity: usize) -> Result<u8> {
    let factory = crate::load_factory(&args.config, cache_capacity)?;
    println!("{}", render(&factory, &args.determiners, args.style)?);
    Ok(0)
}

/// Evaluate `factory` and format the result.
pub fn render(factory: &MultiDimension, determiners: &[f64], style: StyleArgs) -> Result<String> {
    let context = || format!("cannot evaluate determiners {determiners:?}");
    if style.css {
        factory.css_bg(determiners).with_context(context)
    } else if style.css_fg_bg {
        factory.css_fg_bg(determiners).with_context(context)
    } else {
        let color = factory.get_color(determiners).with_context(context)?;
        Ok(format!("{color} {}", color.to_hex()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use datacolor_gradient::testable_factory;

    #[test]
    fn render_plain_and_css() {
        let f = testable_factory(2).unwrap();
        assert_eq!(
            render(&f, &[0.0, 0.0], StyleArgs::default()).unwrap(),
            "rgb(255,255,255) #FFFFFF"
        );
        let css = StyleArgs {
            css: true,
            css_fg_bg: false,
        };
        assert_eq!(
            render(&f, &[0.0, 0.0], css).unwrap(),
            "background-color:#FFFFFF;"
        );
        let fg_bg = StyleArgs {
            css: false,
            css_fg_bg: true,
        };
        assert_eq!(
            render(&f, &[100.0, 100.0], fg_bg).unwrap(),
            "color:white;background-color:#7F007F;"
        );
    }

    #[test]
    fn render_wrong_arity_fails_with_context() {
        let f = testable_factory(2).unwrap();
        let err = render(&f, &[1.0], StyleArgs::default()).unwrap_err();
        let chain = format!("{err:#}");
        assert!(chain.contains("cannot evaluate"));
        assert!(chain.contains("expected 2 determiners"));
    }

    #[test]
    fn run_color_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("grey.json");
        std::fs::write(
            &path,
            r##"{"dimensions":[{"points":[{"determiner":0,"color":"#000000"},{"determiner":10,"color":"white"}]}]}"##,
        )
        .unwrap();
        let args = ColorArgs {
            config: path,
            style: StyleArgs::default(),
            determiners: vec![-3.0],
        };
        assert_eq!(run_color(&args, 4).unwrap(), 0);
    }
}
