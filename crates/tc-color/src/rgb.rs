// SPDX-License-Identifier: MIT
//
// RGB triples parsed out of stylesheet values.
//
// Theme variables show up in a handful of shapes, tried in this order:
//
//   #336699            → hex, first six digits after the leading '#'
//   rgb(52, 168, 83)   → functional, first three components (alpha ignored)
//   52, 168, 83        → bare triple, as used by `--*-rgb` helpers
//   anything else      → first embedded `#rrggbb` anywhere in the text
//
// Channels are kept as `i64` and are NOT range-checked. `rgb(300, -5, 999)`
// parses to exactly those numbers and the contrast math sees them as-is.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

/// A 1–3 digit number directly followed by a comma.
static BARE_TRIPLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{1,3}\s*,").expect("bare-triple pattern compiles"));

/// `#` followed by six hex digits, anywhere.
static EMBEDDED_HEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"#[0-9a-fA-F]{6}").expect("embedded-hex pattern compiles"));

// ─── Rgb ─────────────────────────────────────────────────────────────────────

/// An sRGB color as three integer channels, nominally `0..=255`.
///
/// # Examples
///
/// ```
/// use tc_color::rgb::{Rgb, parse_color};
///
/// assert_eq!(parse_color("#336699"), Some(Rgb::new(51, 102, 153)));
/// assert_eq!(Rgb::WHITE.to_string(), "(255, 255, 255)");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: i64,
    pub g: i64,
    pub b: i64,
}

impl Rgb {
    /// Pure white.
    pub const WHITE: Self = Self::new(255, 255, 255);

    /// Pure black.
    pub const BLACK: Self = Self::new(0, 0, 0);

    #[inline]
    #[must_use]
    pub const fn new(r: i64, g: i64, b: i64) -> Self {
        Self { r, g, b }
    }

    /// `true` if every channel lies in `0..=255`.
    #[must_use]
    pub const fn in_range(self) -> bool {
        matches!(self.r, 0..=255) && matches!(self.g, 0..=255) && matches!(self.b, 0..=255)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.r, self.g, self.b)
    }
}

impl From<(u8, u8, u8)> for Rgb {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::new(i64::from(r), i64::from(g), i64::from(b))
    }
}

// ─── Parsing ─────────────────────────────────────────────────────────────────

/// Parse a raw custom-property value into an [`Rgb`].
///
/// Leading and trailing whitespace is ignored. A value whose prefix selects a
/// form (`#`, `rgb(`, `rgba(`, `12,`) but whose body does not parse still gets
/// the embedded-hex fallback, so `"#abc /* was #112233 */"` yields `#112233`.
///
/// Returns `None` when no form matches.
#[must_use]
pub fn parse_color(value: &str) -> Option<Rgb> {
    let value = value.trim();

    let direct = if value.starts_with('#') {
        parse_hex(value)
    } else if value.starts_with("rgb(") || value.starts_with("rgba(") {
        parse_function(value)
    } else if is_bare_triple(value) {
        parse_bare(value)
    } else {
        None
    };

    direct.or_else(|| find_embedded_hex(value))
}

/// `#rrggbb`: every leading `#` is dropped, then the first six characters are
/// read as three hex bytes. Anything after them is ignored.
fn parse_hex(value: &str) -> Option<Rgb> {
    let digits = value.trim_start_matches('#').as_bytes();
    if digits.len() < 6 {
        return None;
    }
    let r = parse_hex_byte(&digits[0..2])?;
    let g = parse_hex_byte(&digits[2..4])?;
    let b = parse_hex_byte(&digits[4..6])?;
    Some(Rgb::from((r, g, b)))
}

/// `rgb(...)` / `rgba(...)`: the text between the first `(` and the last `)`.
fn parse_function(value: &str) -> Option<Rgb> {
    let open = value.find('(')?;
    let close = value.rfind(')')?;
    let inner = value.get(open + 1..close)?;
    parse_channels(inner.split(','))
}

/// `52, 168, 83`: exactly three comma-separated integers.
fn parse_bare(value: &str) -> Option<Rgb> {
    let parts: Vec<&str> = value.split(',').collect();
    if parts.len() != 3 {
        return None;
    }
    parse_channels(parts.into_iter())
}

/// A bare triple starts with a 1–3 digit number directly followed by a comma.
fn is_bare_triple(value: &str) -> bool {
    BARE_TRIPLE.is_match(value)
}

/// Last resort: the first `#rrggbb` anywhere in the value.
fn find_embedded_hex(value: &str) -> Option<Rgb> {
    parse_hex(EMBEDDED_HEX.find(value)?.as_str())
}

/// Parse the first three items as signed integers; extra items are ignored.
fn parse_channels<'a>(mut parts: impl Iterator<Item = &'a str>) -> Option<Rgb> {
    let mut next = || parts.next()?.trim().parse::<i64>().ok();
    let r = next()?;
    let g = next()?;
    let b = next()?;
    Some(Rgb::new(r, g, b))
}

#[inline]
const fn parse_hex_digit(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

#[inline]
fn parse_hex_byte(bytes: &[u8]) -> Option<u8> {
    let hi = parse_hex_digit(bytes[0])?;
    let lo = parse_hex_digit(bytes[1])?;
    Some((hi << 4) | lo)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
