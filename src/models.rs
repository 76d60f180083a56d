use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Label used for a finding whose license could not be identified.
pub const UNKNOWN: &str = "unknown";

/// The outcome of identifying the license for one scan target.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Finding {
    /// Directory or file as given on the command line, or `<stdin>`.
    pub target: String,
    /// The license file that was read, when one was located.
    pub file: Option<PathBuf>,
    /// Identified license, or [`UNKNOWN`].
    pub license: String,
    pub recognized: bool,
    pub status: FindingStatus,
    /// Failure message when `status` is not `Identified`.
    pub error: Option<String>,
    pub verdict: PolicyVerdict,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FindingStatus {
    Identified,
    NoLicenseFile,
    MultipleLicenses,
    Unrecognized,
    IoError,
}

impl std::fmt::Display for FindingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FindingStatus::Identified => write!(f, "identified"),
            FindingStatus::NoLicenseFile => write!(f, "no license file"),
            FindingStatus::MultipleLicenses => write!(f, "multiple licenses"),
            FindingStatus::Unrecognized => write!(f, "unrecognized"),
            FindingStatus::IoError => write!(f, "I/O error"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PolicyVerdict {
    Pass,
    Warn,
    Error,
}

impl std::fmt::Display for PolicyVerdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PolicyVerdict::Pass => write!(f, "pass"),
            PolicyVerdict::Warn => write!(f, "warn"),
            PolicyVerdict::Error => write!(f, "error"),
        }
    }
}
