//! # tc-report — WCAG AA report over a stylesheet's theme colors
//!
//! ```text
//! stylesheet text
//!     │
//!     ▼
//! tc_sheet::extract_vars:  raw values for the ten --theme-* variables
//!     │
//!     ▼
//! pairs::parse_colors:     Rgb for every value that is a color
//!     │
//!     ▼
//! pairs::build_pairs:      fixed pair table, gated on what parsed
//!     │
//!     ▼
//! check.rs:                contrast ratio + AA / large-text verdicts
//!     │
//!     ▼
//! report.rs:               rows + summary
//! ```

pub mod check;
pub mod pairs;
pub mod report;

pub use check::CheckResult;
pub use pairs::{ColorMap, ComparisonPair, PAIR_RULES, PairRule, build_pairs, parse_colors};
pub use report::Report;

use tc_sheet::extract_vars;

/// Reasons no report could be produced.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ReportError {
    /// None of the recognized `--theme-*` variables is declared.
    #[error("no theme variables found")]
    NoVariables,
}

/// Run the whole pipeline over stylesheet text.
///
/// Variables that are declared but do not parse as colors are dropped
/// silently; if that leaves nothing to compare, the report is empty.
///
/// # Errors
///
/// Returns [`ReportError::NoVariables`] when no recognized variable is
/// declared at all.
pub fn build_report(css: &str) -> Result<Report, ReportError> {
    let vars = extract_vars(css);
    if vars.is_empty() {
        return Err(ReportError::NoVariables);
    }
    let colors = parse_colors(&vars);
    log::debug!("{} of {} variables parsed as colors", colors.len(), vars.len());
    Ok(Report::run(build_pairs(&colors)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn labels(report: &Report) -> Vec<&'static str> {
        report.results().iter().map(CheckResult::label).collect()
    }

    #[test]
    fn no_variables() {
        assert_eq!(
            build_report("body { color: #000000; }"),
            Err(ReportError::NoVariables)
        );
    }

    #[test]
    fn primary_black_only() {
        let report = build_report(":root { --theme-primary: #000000; }").unwrap();
        assert_eq!(
            labels(&report),
            vec![
                "Primary (bg) vs White (text)",
                "Primary (text) vs White (bg)",
                "Primary (text) vs Black (bg)",
            ]
        );
        let failing: Vec<&str> = report.failures().map(CheckResult::label).collect();
        assert_eq!(failing, vec!["Primary (text) vs Black (bg)"]);
    }

    #[test]
    fn declared_but_unparseable_gives_empty_report() {
        let report = build_report("--theme-primary: tomato;").unwrap();
        assert!(report.results().is_empty());
        assert!(report.all_pass());
    }

    #[test]
    fn mixed_notations() {
        let css = r"
:root {
  --theme-primary: #2e7d32;
  --theme-primary-hover: rgb(27, 94, 32);
  --theme-secondary: rgba(21, 101, 192, 0.9);
  --theme-primary-cb: 0, 114, 178;
  --theme-secondary-cb: url(#d55e00) /* vermillion */;
}
";
        let report = build_report(css).unwrap();
        assert_eq!(report.results().len(), 10);
        let cb_secondary = report
            .results()
            .iter()
            .find(|c| c.label() == "CB Secondary (bg) vs White (text)")
            .unwrap();
        assert_eq!(cb_secondary.pair.first, tc_color::Rgb::new(213, 94, 0));
    }

    #[test]
    fn aa_pass_implies_large_pass() {
        let css = "--theme-primary: #767676; --theme-secondary: #959595; --theme-primary-cb: #0072b2;";
        let report = build_report(css).unwrap();
        for check in report.results() {
            if check.passes_aa {
                assert!(check.passes_large, "{check}");
            }
        }
    }
}
