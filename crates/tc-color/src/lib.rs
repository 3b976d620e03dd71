// SPDX-License-Identifier: MIT
//
// tc-color — color values and WCAG contrast math for theme-contrast.
//
// Two halves, both pure:
//
//   rgb.rs      → turn a raw CSS custom-property value into an `Rgb` triple
//   contrast.rs → relative luminance, contrast ratio, AA thresholds
//
// Nothing here touches the filesystem or holds state between calls.

pub mod contrast;
pub mod rgb;

pub use contrast::{AA_LARGE, AA_NORMAL, contrast_ratio, relative_luminance};
pub use rgb::{Rgb, parse_color};
