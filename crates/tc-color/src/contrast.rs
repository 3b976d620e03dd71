//! WCAG 2.x relative luminance and contrast ratio.
//!
//! Thresholds checked by the report:
//!
//! - Normal text (AA): contrast ratio >= 4.5:1
//! - Large text (AA): contrast ratio >= 3.0:1
//!
//! Both comparisons are inclusive, so a ratio of exactly 4.5 passes AA.

use crate::rgb::Rgb;

/// Minimum contrast ratio for normal-size text at WCAG AA.
pub const AA_NORMAL: f64 = 4.5;

/// Minimum contrast ratio for large text at WCAG AA.
pub const AA_LARGE: f64 = 3.0;

/// Linearize one 8-bit sRGB channel (WCAG 2.x transfer function).
///
/// The channel is normalized by 255, then values at or below `0.03928` are
/// scaled by `1/12.92` and the rest go through `((v + 0.055) / 1.055)^2.4`.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn channel_to_linear(c: i64) -> f64 {
    let v = c as f64 / 255.0;
    if v <= 0.039_28 {
        v / 12.92
    } else {
        ((v + 0.055) / 1.055).powf(2.4)
    }
}

/// Compute the relative luminance of a color per WCAG.
///
///   L = 0.2126 * `R_lin` + 0.7152 * `G_lin` + 0.0722 * `B_lin`
///
/// In-range channels give a value in [0.0, 1.0].
#[must_use]
pub fn relative_luminance(rgb: Rgb) -> f64 {
    let r_lin = channel_to_linear(rgb.r);
    let g_lin = channel_to_linear(rgb.g);
    let b_lin = channel_to_linear(rgb.b);
    0.2126f64.mul_add(r_lin, 0.7152f64.mul_add(g_lin, 0.0722 * b_lin))
}

/// Compute the WCAG contrast ratio between two colors.
///
///   (`L_lighter` + 0.05) / (`L_darker` + 0.05)
///
/// Symmetric in its arguments and always >= 1.0 for in-range colors.
#[must_use]
pub fn contrast_ratio(a: Rgb, b: Rgb) -> f64 {
    let la = relative_luminance(a);
    let lb = relative_luminance(b);
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    (lighter + 0.05) / (darker + 0.05)
}

/// `true` if `ratio` meets AA for normal text.
#[inline]
#[must_use]
pub fn passes_aa(ratio: f64) -> bool {
    ratio >= AA_NORMAL
}

/// `true` if `ratio` meets AA for large text.
#[inline]
#[must_use]
pub fn passes_large(ratio: f64) -> bool {
    ratio >= AA_LARGE
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
