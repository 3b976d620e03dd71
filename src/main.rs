// SPDX-License-Identifier: MIT
//
// theme-contrast — WCAG contrast report for a stylesheet's theme colors.
//
// Wires the crates together:
//
//   tc-sheet  → read the stylesheet, pull out the --theme-* variables
//   tc-report → parse colors, build the pair table, measure, render
//
// Running with no arguments scans ./style.css. The report goes to stdout,
// log records to stderr.
//
// Exit status:
//
//   0 → a report was printed, however many pairs failed
//   1 → no recognized variables, or the stylesheet could not be read

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use tc_report::{ReportError, build_report};
use tc_sheet::Stylesheet;

/// Stylesheet scanned when no path is given.
const DEFAULT_STYLESHEET: &str = "style.css";

#[derive(Parser, Debug)]
#[command(name = "theme-contrast")]
#[command(version, about = "Check theme colors in a stylesheet against WCAG AA contrast", long_about = None)]
struct Cli {
    /// Stylesheet to scan
    #[arg(long = "css", value_name = "PATH", env = "THEME_CONTRAST_CSS", default_value = DEFAULT_STYLESHEET)]
    stylesheet: PathBuf,

    /// Log extracted and skipped variables to stderr
    #[arg(short, long)]
    verbose: bool,
}

/// Everything a run needs, resolved from the command line and environment.
#[derive(Debug, Clone)]
struct Config {
    stylesheet: PathBuf,
}

impl From<&Cli> for Config {
    fn from(cli: &Cli) -> Self {
        Self {
            stylesheet: cli.stylesheet.clone(),
        }
    }
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();
}

fn run(config: &Config) -> Result<ExitCode> {
    let sheet = Stylesheet::load(&config.stylesheet)?;

    let report = match build_report(sheet.text()) {
        Ok(report) => report,
        Err(ReportError::NoVariables) => {
            println!("No theme variables found in {}", sheet.path().display());
            return Ok(ExitCode::FAILURE);
        }
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    report.write_to(&mut out).context("failed to write report")?;
    out.flush().context("failed to write report")?;

    log::debug!(
        "{} pair(s) checked, {} below AA",
        report.results().len(),
        report.failures().count()
    );
    Ok(ExitCode::SUCCESS)
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    run(&Config::from(&cli))
}

// ─── Tests ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn defaults_to_style_css() {
        let cli = Cli::try_parse_from(["theme-contrast"]).unwrap();
        assert!(!cli.verbose);
        // THEME_CONTRAST_CSS may be set in the environment running the tests.
        if std::env::var_os("THEME_CONTRAST_CSS").is_none() {
            assert_eq!(Config::from(&cli).stylesheet, PathBuf::from("style.css"));
        }
    }

    #[test]
    fn css_flag_overrides_path() {
        let cli = Cli::try_parse_from(["theme-contrast", "--css", "assets/site.css", "-v"]).unwrap();
        assert!(cli.verbose);
        assert_eq!(Config::from(&cli).stylesheet, PathBuf::from("assets/site.css"));
    }

    #[test]
    fn missing_stylesheet_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config {
            stylesheet: dir.path().join("style.css"),
        };
        let err = run(&config).unwrap_err();
        assert!(format!("{err:#}").contains("failed to read stylesheet"));
    }
}
