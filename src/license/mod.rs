//! License discovery and identification.
//!
//! - [`files`]: finds the license file in a directory by well-known name.
//! - [`classifier`]: normalizes license text and runs the ordered phrase cascade.
//! - [`identifier`]: the fixed set of identifiers the classifier produces.
//! - [`source`]: the filesystem seam both of the above read through.

pub mod classifier;
pub mod files;
pub mod identifier;
pub mod source;

use std::path::{Path, PathBuf};

use crate::error::Result;
use source::{FileSource, OsFileSource};

/// A license: its identifier, its text, and the file it came from, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct License {
    kind: String,
    text: String,
    file: Option<PathBuf>,
}

impl License {
    /// Build a license from a type the caller already knows. No classification
    /// happens; `kind` may be any label.
    pub fn new(kind: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            text: text.into(),
            file: None,
        }
    }

    /// Build a license from raw text, guessing its type.
    pub fn from_text(text: impl Into<String>) -> Result<Self> {
        let mut license = Self::new(String::new(), text);
        license.guess_type()?;
        Ok(license)
    }

    /// Read `path` and guess the type of the license it contains.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        Self::from_file_in(&OsFileSource, path.as_ref())
    }

    pub fn from_file_in(fs: &dyn FileSource, path: &Path) -> Result<Self> {
        let text = fs.read_to_string(path)?;
        let mut license = Self {
            kind: String::new(),
            text,
            file: Some(path.to_path_buf()),
        };
        license.guess_type()?;
        Ok(license)
    }

    /// Locate the license file in `dir`, then load it as [`License::from_file`] does.
    pub fn from_dir(dir: impl AsRef<Path>) -> Result<Self> {
        Self::from_dir_in(&OsFileSource, dir.as_ref())
    }

    pub fn from_dir_in(fs: &dyn FileSource, dir: &Path) -> Result<Self> {
        let file = files::guess_file_in(fs, dir)?;
        Self::from_file_in(fs, &file)
    }

    /// Classify [`License::text`] and store the result as this license's type.
    ///
    /// On failure the type is left untouched.
    pub fn guess_type(&mut self) -> Result<&str> {
        let id = classifier::guess_type(&self.text)?;
        self.kind = id.to_string();
        Ok(&self.kind)
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn file(&self) -> Option<&Path> {
        self.file.as_deref()
    }

    /// Whether the type is one of [`identifier::KNOWN_LICENSES`].
    pub fn recognized(&self) -> bool {
        identifier::is_known(&self.kind)
    }
}
