use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use crate::error::{LicenseError, Result};
use crate::license::source::{FileSource, OsFileSource};

/// Base names of files that conventionally hold a project's license.
const FILE_NAMES: &[&str] = &["copying", "copyleft", "copyright", "license", "unlicense"];

/// Extensions accepted on top of [`FILE_NAMES`]; the empty string is a bare name.
const FILE_EXTENSIONS: &[&str] = &["", ".md", ".rst", ".txt"];

/// Every lowercase file name treated as a license file.
pub static DEFAULT_LICENSE_FILES: LazyLock<Vec<String>> = LazyLock::new(|| {
    FILE_NAMES
        .iter()
        .flat_map(|name| FILE_EXTENSIONS.iter().map(move |ext| format!("{name}{ext}")))
        .collect()
});

static FILE_TABLE: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| DEFAULT_LICENSE_FILES.iter().map(String::as_str).collect());

/// Whether `name` is a license file name, ignoring case.
pub fn is_license_file_name(name: &str) -> bool {
    FILE_TABLE.contains(name.to_lowercase().as_str())
}

/// Names (as they appear on disk, sorted) of the license files directly in `dir`.
pub fn license_files_in_dir(dir: &Path) -> Result<Vec<String>> {
    license_files_in_dir_in(&OsFileSource, dir)
}

pub fn license_files_in_dir_in(fs: &dyn FileSource, dir: &Path) -> Result<Vec<String>> {
    let mut files: Vec<String> = fs
        .read_dir_names(dir)?
        .into_iter()
        .filter(|name| is_license_file_name(name))
        .collect();
    files.sort();

    log::debug!("{}: license file candidates {:?}", dir.display(), files);
    Ok(files)
}

/// Find the one license file in `dir` (non-recursive).
///
/// Zero candidates is [`LicenseError::NoLicenseFile`]; more than one is
/// [`LicenseError::MultipleLicenses`], since choosing between them could
/// report the wrong license.
pub fn guess_file(dir: &Path) -> Result<PathBuf> {
    guess_file_in(&OsFileSource, dir)
}

pub fn guess_file_in(fs: &dyn FileSource, dir: &Path) -> Result<PathBuf> {
    let mut files = license_files_in_dir_in(fs, dir)?;
    match files.len() {
        0 => Err(LicenseError::NoLicenseFile),
        1 => Ok(dir.join(files.remove(0))),
        _ => Err(LicenseError::MultipleLicenses { files }),
    }
}
