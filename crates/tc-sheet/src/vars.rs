//! Recognized theme custom properties and their extraction.
//!
//! A declaration is anything matching
//!
//! ```text
//! --<name> \s* : \s* <value> ;
//! ```
//!
//! where `<value>` is every character up to the next `;` (newlines and
//! parentheses included), trimmed. The first declaration in the text wins;
//! later overrides, selectors and media queries are not considered.

use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

/// Raw values keyed by variable. Only variables found in the text are present.
pub type VarMap = HashMap<ThemeVar, String>;

/// The theme variables the checker knows about.
///
/// The `*Rgb` variants are the comma-separated triples a theme exposes for
/// `rgba(var(--theme-primary-rgb), .5)` style usage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ThemeVar {
    Primary,
    PrimaryRgb,
    PrimaryHover,
    PrimaryActive,
    Secondary,
    SecondaryRgb,
    PrimaryCb,
    PrimaryCbRgb,
    SecondaryCb,
    SecondaryCbRgb,
}

impl ThemeVar {
    /// Every recognized variable, in lookup order.
    pub const ALL: [Self; 10] = [
        Self::Primary,
        Self::PrimaryRgb,
        Self::PrimaryHover,
        Self::PrimaryActive,
        Self::Secondary,
        Self::SecondaryRgb,
        Self::PrimaryCb,
        Self::PrimaryCbRgb,
        Self::SecondaryCb,
        Self::SecondaryCbRgb,
    ];

    /// Property name without the leading `--`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Primary => "theme-primary",
            Self::PrimaryRgb => "theme-primary-rgb",
            Self::PrimaryHover => "theme-primary-hover",
            Self::PrimaryActive => "theme-primary-active",
            Self::Secondary => "theme-secondary",
            Self::SecondaryRgb => "theme-secondary-rgb",
            Self::PrimaryCb => "theme-primary-cb",
            Self::PrimaryCbRgb => "theme-primary-cb-rgb",
            Self::SecondaryCb => "theme-secondary-cb",
            Self::SecondaryCbRgb => "theme-secondary-cb-rgb",
        }
    }

    /// Position in [`ThemeVar::ALL`].
    const fn index(self) -> usize {
        self as usize
    }
}

/// One declaration pattern per variable, indexed like [`ThemeVar::ALL`].
static DECLARATIONS: LazyLock<[Regex; 10]> = LazyLock::new(|| {
    ThemeVar::ALL.map(|var| {
        let pattern = format!(r"{}\s*:\s*([^;]+);", regex::escape(&var.to_string()));
        Regex::new(&pattern).expect("escaped variable name is a valid pattern")
    })
});

impl fmt::Display for ThemeVar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "--{}", self.name())
    }
}

/// Find the raw value of `var` in `css`.
///
/// Returns `None` if there is no declaration or its value is blank.
#[must_use]
pub fn find_variable(css: &str, var: ThemeVar) -> Option<String> {
    let value = DECLARATIONS[var.index()].captures(css)?.get(1)?.as_str().trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_owned())
    }
}

/// Extract every recognized variable declared in `css`.
#[must_use]
pub fn extract_vars(css: &str) -> VarMap {
    ThemeVar::ALL
        .into_iter()
        .filter_map(|var| {
            let value = find_variable(css, var)?;
            log::debug!("{var}: {value}");
            Some((var, value))
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
