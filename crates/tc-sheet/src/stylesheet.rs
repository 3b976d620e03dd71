//! Stylesheet loading.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::vars::{VarMap, extract_vars};

/// Errors raised while loading a stylesheet.
#[derive(Debug, thiserror::Error)]
pub enum SheetError {
    /// The file could not be opened or read as UTF-8.
    #[error("failed to read stylesheet {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// A stylesheet read fully into memory.
#[derive(Debug, Clone)]
pub struct Stylesheet {
    path: PathBuf,
    text: String,
}

impl Stylesheet {
    /// Read the stylesheet at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`SheetError::Read`] if the file is missing or unreadable.
    pub fn load(path: &Path) -> Result<Self, SheetError> {
        let text = fs::read_to_string(path).map_err(|source| SheetError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        log::info!("scanning {} ({} bytes)", path.display(), text.len());
        Ok(Self {
            path: path.to_path_buf(),
            text,
        })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Extract the recognized theme variables.
    #[must_use]
    pub fn vars(&self) -> VarMap {
        extract_vars(&self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vars::ThemeVar;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    #[test]
    fn load_reads_whole_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, ":root {{\n  --theme-primary: #000000;\n}}\n").unwrap();

        let sheet = Stylesheet::load(file.path()).unwrap();
        assert_eq!(sheet.path(), file.path());
        assert_eq!(
            sheet.vars().get(&ThemeVar::Primary).map(String::as_str),
            Some("#000000")
        );
    }

    #[test]
    fn load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.css");

        let err = Stylesheet::load(&path).unwrap_err();
        let SheetError::Read { path: reported, source } = &err;
        assert_eq!(reported, &path);
        assert_eq!(source.kind(), io::ErrorKind::NotFound);
        assert!(err.to_string().contains("nope.css"));
    }
}
