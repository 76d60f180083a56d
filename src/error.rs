use thiserror::Error;

/// Failures produced while locating or identifying a license.
///
/// None of these are fatal: a caller scanning many projects can record the
/// failure for one and carry on with the next.
#[derive(Error, Debug)]
pub enum LicenseError {
    /// The directory holds no file with a recognizable license file name.
    #[error("unable to find any license file")]
    NoLicenseFile,

    /// More than one candidate license file was found; we never pick one.
    #[error("multiple license files found: {}", .files.join(", "))]
    MultipleLicenses { files: Vec<String> },

    /// The text was read but matched none of the known license signatures.
    #[error("could not guess license type")]
    UnrecognizedLicense,

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, LicenseError>;
