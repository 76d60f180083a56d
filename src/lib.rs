//! `license-guess`: find a project's license file and say which license it is.
//!
//! Identification is a literal phrase scan over normalized text: lowercase,
//! line endings folded, whitespace runs collapsed, then an ordered cascade of
//! signature checks where the first match wins. There is no fuzzy matching
//! and no confidence score; text either matches a known license or it is
//! [`LicenseError::UnrecognizedLicense`].
//!
//! ```no_run
//! use license_guess::License;
//!
//! let license = License::from_dir(".")?;
//! println!("{} ({})", license.kind(), license.recognized());
//! # Ok::<(), license_guess::LicenseError>(())
//! ```

pub mod config;
pub mod error;
pub mod license;
pub mod models;
pub mod report;
pub mod scan;

pub use error::LicenseError;
pub use license::License;
