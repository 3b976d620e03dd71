//! # tc-sheet — theme variables out of stylesheet text
//!
//! This crate is the narrow window theme-contrast has onto CSS:
//!
//! - **[`vars`]**: the ten recognized `--theme-*` custom properties and
//!   the lookup that pulls their raw values out of stylesheet text
//! - **[`stylesheet`]**: loading a stylesheet from disk
//!
//! It is not a CSS parser. Declarations are found by pattern, the first
//! match wins, and everything else in the file is ignored.

pub mod stylesheet;
pub mod vars;

pub use stylesheet::{SheetError, Stylesheet};
pub use vars::{ThemeVar, VarMap, extract_vars, find_variable};
