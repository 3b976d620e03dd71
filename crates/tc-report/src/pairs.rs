//! Which color pairs get checked.
//!
//! The pair list is a fixed table. Each row names a *gate* variable (the
//! theme color whose group the row belongs to) and a *subject* variable (the
//! color actually measured). A row produces a pair only when both parsed, so
//! hover/active rows never appear without the primary color itself.

use std::collections::HashMap;

use tc_color::{Rgb, parse_color};
use tc_sheet::ThemeVar::{Primary, PrimaryActive, PrimaryCb, PrimaryHover, Secondary, SecondaryCb};
use tc_sheet::{ThemeVar, VarMap};

/// Parsed colors keyed by variable. Only values that parsed are present.
pub type ColorMap = HashMap<ThemeVar, Rgb>;

/// Parse every raw value, dropping the ones that are not colors.
#[must_use]
pub fn parse_colors(vars: &VarMap) -> ColorMap {
    vars.iter()
        .filter_map(|(&var, value)| {
            let parsed = parse_color(value);
            if parsed.is_none() {
                log::debug!("{var}: {value:?} is not a color, skipping");
            }
            parsed.map(|rgb| (var, rgb))
        })
        .collect()
}

/// A labelled pair of colors to compare. Which one is text and which one is
/// background is carried by the label only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComparisonPair {
    pub label: &'static str,
    pub first: Rgb,
    pub second: Rgb,
}

/// One row of [`PAIR_RULES`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PairRule {
    pub label: &'static str,
    pub gate: ThemeVar,
    pub subject: ThemeVar,
    pub against: Rgb,
}

impl PairRule {
    const fn new(label: &'static str, gate: ThemeVar, subject: ThemeVar, against: Rgb) -> Self {
        Self {
            label,
            gate,
            subject,
            against,
        }
    }

    /// The pair this rule yields for `colors`, if its variables parsed.
    #[must_use]
    pub fn apply(&self, colors: &ColorMap) -> Option<ComparisonPair> {
        colors.get(&self.gate)?;
        let subject = *colors.get(&self.subject)?;
        Some(ComparisonPair {
            label: self.label,
            first: subject,
            second: self.against,
        })
    }
}

/// Every pair the report can contain, in output order.
pub const PAIR_RULES: [PairRule; 11] = [
    PairRule::new("Primary (bg) vs White (text)", Primary, Primary, Rgb::WHITE),
    PairRule::new("Primary-hover (bg) vs White (text)", Primary, PrimaryHover, Rgb::WHITE),
    PairRule::new("Primary-active (bg) vs White (text)", Primary, PrimaryActive, Rgb::WHITE),
    PairRule::new("Primary (text) vs White (bg)", Primary, Primary, Rgb::WHITE),
    PairRule::new("Primary (text) vs Black (bg)", Primary, Primary, Rgb::BLACK),
    PairRule::new("Secondary (bg) vs White (text)", Secondary, Secondary, Rgb::WHITE),
    PairRule::new("Secondary (text) vs White (bg)", Secondary, Secondary, Rgb::WHITE),
    PairRule::new("CB Primary (bg) vs White (text)", PrimaryCb, PrimaryCb, Rgb::WHITE),
    PairRule::new("CB Primary (text) vs White (bg)", PrimaryCb, PrimaryCb, Rgb::WHITE),
    PairRule::new("CB Secondary (bg) vs White (text)", SecondaryCb, SecondaryCb, Rgb::WHITE),
    PairRule::new("CB Secondary (text) vs White (bg)", SecondaryCb, SecondaryCb, Rgb::WHITE),
];

/// Build the comparison list for whatever parsed.
#[must_use]
pub fn build_pairs(colors: &ColorMap) -> Vec<ComparisonPair> {
    PAIR_RULES.iter().filter_map(|rule| rule.apply(colors)).collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
