use std::io;
use std::path::Path;

/// The read-only filesystem access license discovery needs.
///
/// [`OsFileSource`] is the real thing; tests and embedders can supply their
/// own, e.g. to scan an archive or an in-memory tree.
pub trait FileSource {
    /// Names of the immediate entries of `dir`. Fails if `dir` is missing or
    /// is not a directory.
    fn read_dir_names(&self, dir: &Path) -> io::Result<Vec<String>>;

    /// Full contents of the file at `path`. Bytes that are not valid UTF-8
    /// are replaced rather than reported as an error.
    fn read_to_string(&self, path: &Path) -> io::Result<String>;
}

/// [`FileSource`] backed by `std::fs`.
#[derive(Debug, Default, Clone, Copy)]
pub struct OsFileSource;

impl FileSource for OsFileSource {
    fn read_dir_names(&self, dir: &Path) -> io::Result<Vec<String>> {
        let mut names = Vec::new();
        for entry in std::fs::read_dir(dir)? {
            let entry = entry?;
            // Non-UTF-8 names can never match a candidate license file name.
            if let Ok(name) = entry.file_name().into_string() {
                names.push(name);
            }
        }
        Ok(names)
    }

    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        let bytes = std::fs::read(path)?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_latin1_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("LICENSE");
        std::fs::write(&path, b"Copyright (c) Jos\xE9\n").unwrap();

        let text = OsFileSource.read_to_string(&path).unwrap();
        assert!(text.starts_with("Copyright (c) Jos"));
        assert!(text.contains('\u{FFFD}'));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = OsFileSource
            .read_to_string(&dir.path().join("missing"))
            .unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
