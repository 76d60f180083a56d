use std::path::Path;

use crate::config::{apply_policy, Config};
use crate::error::{LicenseError, Result};
use crate::license::{files, License};
use crate::models::{Finding, FindingStatus, UNKNOWN};

/// Identify the license of a directory or a license file.
///
/// Directories go through license file discovery first; anything else is read
/// as license text. Failures become part of the finding rather than errors.
pub fn scan_path(config: &Config, path: &Path) -> Finding {
    let target = path.display().to_string();
    let file = if path.is_dir() {
        match files::guess_file(path) {
            Ok(file) => file,
            Err(err) => return finding_from(config, target, Err(err)),
        }
    } else {
        path.to_path_buf()
    };

    let mut finding = finding_from(config, target, License::from_file(&file));
    if finding.status != FindingStatus::IoError {
        finding.file = Some(file);
    }
    finding
}

/// Identify the license of text that did not come from a file.
pub fn scan_text(config: &Config, label: &str, text: &str) -> Finding {
    finding_from(config, label.to_string(), License::from_text(text))
}

fn finding_from(config: &Config, target: String, result: Result<License>) -> Finding {
    match result {
        Ok(license) => Finding {
            target,
            file: None,
            license: license.kind().to_string(),
            recognized: license.recognized(),
            status: FindingStatus::Identified,
            error: None,
            verdict: apply_policy(config, Some(license.kind())),
        },
        Err(err) => {
            log::debug!("{}: {}", target, err);
            Finding {
                target,
                file: None,
                license: UNKNOWN.to_string(),
                recognized: false,
                status: status_of(&err),
                error: Some(err.to_string()),
                verdict: apply_policy(config, None),
            }
        }
    }
}

fn status_of(err: &LicenseError) -> FindingStatus {
    match err {
        LicenseError::NoLicenseFile => FindingStatus::NoLicenseFile,
        LicenseError::MultipleLicenses { .. } => FindingStatus::MultipleLicenses,
        LicenseError::UnrecognizedLicense => FindingStatus::Unrecognized,
        LicenseError::Io(_) => FindingStatus::IoError,
    }
}
