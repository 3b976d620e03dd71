//! A single measured pair.

use std::fmt;

use tc_color::contrast::{contrast_ratio, passes_aa, passes_large};

use crate::pairs::ComparisonPair;

/// The outcome of checking one [`ComparisonPair`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CheckResult {
    pub pair: ComparisonPair,
    pub ratio: f64,
    pub passes_aa: bool,
    pub passes_large: bool,
}

impl CheckResult {
    /// Measure `pair` against both AA thresholds.
    #[must_use]
    pub fn evaluate(pair: ComparisonPair) -> Self {
        Self::with_ratio(pair, contrast_ratio(pair.first, pair.second))
    }

    /// Judge an already-computed ratio.
    #[must_use]
    pub fn with_ratio(pair: ComparisonPair, ratio: f64) -> Self {
        Self {
            pair,
            ratio,
            passes_aa: passes_aa(ratio),
            passes_large: passes_large(ratio),
        }
    }

    #[must_use]
    pub const fn label(&self) -> &'static str {
        self.pair.label
    }
}

const fn verdict(pass: bool) -> &'static str {
    if pass { "PASS" } else { "FAIL" }
}

/// One report row:
/// `Label: (r, g, b) vs (r, g, b) -> 4.56x | AA: PASS | Large: PASS`.
impl fmt::Display for CheckResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} vs {} -> {:.2}x | AA: {} | Large: {}",
            self.pair.label,
            self.pair.first,
            self.pair.second,
            self.ratio,
            verdict(self.passes_aa),
            verdict(self.passes_large),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tc_color::Rgb;

    const PAIR: ComparisonPair = ComparisonPair {
        label: "Primary (bg) vs White (text)",
        first: Rgb::new(51, 102, 153),
        second: Rgb::WHITE,
    };

    #[test]
    fn exactly_aa_passes() {
        let check = CheckResult::with_ratio(PAIR, 4.5);
        assert!(check.passes_aa);
        assert!(check.passes_large);
    }

    #[test]
    fn just_below_aa_fails() {
        let check = CheckResult::with_ratio(PAIR, 4.499);
        assert!(!check.passes_aa);
        assert!(check.passes_large);
    }

    #[test]
    fn exactly_large_passes() {
        let check = CheckResult::with_ratio(PAIR, 3.0);
        assert!(!check.passes_aa);
        assert!(check.passes_large);
    }

    #[test]
    fn evaluate_measures_pair() {
        let check = CheckResult::evaluate(PAIR);
        // #336699 on white sits around 6.0:1.
        assert!(check.ratio > 5.5 && check.ratio < 6.5, "{}", check.ratio);
        assert!(check.passes_aa);
    }

    #[test]
    fn display_row() {
        let check = CheckResult::with_ratio(PAIR, 4.499);
        assert_eq!(
            check.to_string(),
            "Primary (bg) vs White (text): (51, 102, 153) vs (255, 255, 255) -> 4.50x | AA: FAIL | Large: PASS"
        );
    }
}
