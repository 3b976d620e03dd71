//! The printed report.
//!
//! Layout:
//!
//! ```text
//!
//! WCAG Contrast Report (targets: AA normal >= 4.5, Large >= 3.0)
//! ---------------------------------------------------------------
//! <one row per check>
//!
//! Summary:
//! All checked pairs pass AA (4.5:1).
//! ```
//!
//! When any pair misses AA, the last line becomes a failure count followed by
//! one ` - <label>: <ratio>x (needs >= 4.5)` line per failing pair.

use std::io::{self, Write};

use crate::check::CheckResult;
use crate::pairs::ComparisonPair;

const TITLE: &str = "WCAG Contrast Report (targets: AA normal >= 4.5, Large >= 3.0)";

/// Width of the rule under the title.
const RULE_WIDTH: usize = 63;

/// Checked pairs in table order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Report {
    results: Vec<CheckResult>,
}

impl Report {
    /// Evaluate every pair.
    #[must_use]
    pub fn run(pairs: impl IntoIterator<Item = ComparisonPair>) -> Self {
        Self::from_results(pairs.into_iter().map(CheckResult::evaluate).collect())
    }

    #[must_use]
    pub const fn from_results(results: Vec<CheckResult>) -> Self {
        Self { results }
    }

    #[must_use]
    pub fn results(&self) -> &[CheckResult] {
        &self.results
    }

    /// Checks that miss AA for normal text.
    pub fn failures(&self) -> impl Iterator<Item = &CheckResult> {
        self.results.iter().filter(|check| !check.passes_aa)
    }

    #[must_use]
    pub fn all_pass(&self) -> bool {
        self.failures().next().is_none()
    }

    /// Render the full report.
    ///
    /// # Errors
    ///
    /// Propagates write failures from `out`.
    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out)?;
        writeln!(out, "{TITLE}")?;
        writeln!(out, "{}", "-".repeat(RULE_WIDTH))?;
        for check in &self.results {
            writeln!(out, "{check}")?;
        }

        writeln!(out)?;
        writeln!(out, "Summary:")?;
        let failures: Vec<&CheckResult> = self.failures().collect();
        if failures.is_empty() {
            writeln!(out, "All checked pairs pass AA (4.5:1).")?;
        } else {
            writeln!(
                out,
                "{} pair(s) failed AA (4.5:1). See details above.",
                failures.len()
            )?;
            for check in failures {
                writeln!(out, " - {}: {:.2}x (needs >= 4.5)", check.label(), check.ratio)?;
            }
        }
        Ok(())
    }

    /// The rendered report as a string.
    #[must_use]
    pub fn render(&self) -> String {
        let mut buf = Vec::new();
        // Writing into a Vec cannot fail.
        let _ = self.write_to(&mut buf);
        String::from_utf8_lossy(&buf).into_owned()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
