//! Fatal errors for an audit run.
//!
//! Anything in here aborts the whole run. Per-dependency outcomes such as a
//! missing or unrecognizable license are not errors; they become verdicts.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Broad category of a fatal error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The policy source is missing or malformed.
    Config,
    /// The dependency manifest is missing or malformed.
    Manifest,
    /// A dependency could not be located, or its license could not be read.
    Resolution,
}

#[derive(Debug, Error)]
pub enum AuditError {
    #[error("You seem to be missing your policy file {}", path.display())]
    ConfigMissing { path: PathBuf },

    #[error("Couldn't read policy file {}", path.display())]
    ConfigUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Policy file {} is malformed: {message}", path.display())]
    ConfigMalformed { path: PathBuf, message: String },

    #[error("Couldn't find your dependency manifest at {}", path.display())]
    ManifestMissing { path: PathBuf },

    #[error("Couldn't read dependency manifest {}", path.display())]
    ManifestUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Your dependency manifest {} isn't valid: {message}", path.display())]
    ManifestMalformed { path: PathBuf, message: String },

    #[error("Could not find {dependency} in any search path")]
    DependencyNotLocated { dependency: String },

    #[error("License lookup for {dependency} failed: {cause}")]
    LookupFailed { dependency: String, cause: String },
}

impl AuditError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuditError::ConfigMissing { .. }
            | AuditError::ConfigUnreadable { .. }
            | AuditError::ConfigMalformed { .. } => ErrorKind::Config,
            AuditError::ManifestMissing { .. }
            | AuditError::ManifestUnreadable { .. }
            | AuditError::ManifestMalformed { .. } => ErrorKind::Manifest,
            AuditError::DependencyNotLocated { .. } | AuditError::LookupFailed { .. } => {
                ErrorKind::Resolution
            }
        }
    }
}

pub type AuditResult<T> = Result<T, AuditError>;
