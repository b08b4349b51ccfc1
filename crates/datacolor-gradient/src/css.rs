//! CSS style fragments for rendered cells.

use datacolor_core::Color;

use crate::error::GradientError;
use crate::factory::MultiDimension;

/// Backgrounds at or above this luminance get black text.
pub const FOREGROUND_THRESHOLD: f64 = 0.5 * 255.0;

/// `background-color:#RRGGBB;`
pub fn background(color: Color) -> String {
    format!("background-color:{};", color.to_hex())
}

/// Black or white, whichever contrasts with `background`.
pub fn contrasting_foreground(background: Color) -> &'static str {
    if background.luminance() >= FOREGROUND_THRESHOLD {
        "black"
    } else {
        "white"
    }
}

/// `color:<black|white>;background-color:#RRGGBB;`
pub fn foreground_background(color: Color) -> String {
    format!(
        "color:{};background-color:{};",
        contrasting_foreground(color),
        color.to_hex()
    )
}

impl MultiDimension {
    /// CSS background declaration for the color at `determiners`.
    pub fn css_bg(&self, determiners: &[f64]) -> Result<String, GradientError> {
        self.get_color(determiners).map(background)
    }

    /// CSS foreground and background declarations for the color at
    /// `determiners`.
    pub fn css_fg_bg(&self, determiners: &[f64]) -> Result<String, GradientError> {
        self.get_color(determiners).map(foreground_background)
    }
}
