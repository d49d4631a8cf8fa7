use serde::{Deserialize, Serialize};

use crate::error::AuditResult;

pub mod detector;
pub mod resolver;

pub use detector::guess_license;
pub use resolver::{GopathResolver, DEFAULT_LICENSE_FILES};

/// What a resolver learned about one dependency's license.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum LicenseLookupResult {
    /// A license file was found and its type recognized
    Found(String),
    /// No license file was found
    NotFound,
    /// A license file was found but its type could not be determined
    Ambiguous,
    /// The license could not be read at all
    LookupFailed(String),
}

/// Maps a dependency identifier to its license.
///
/// `Err` is reserved for failures that should stop the whole run, such as
/// a dependency that cannot be located.
pub trait LicenseResolver {
    fn resolve(&self, dependency: &str) -> AuditResult<LicenseLookupResult>;
}

impl<F> LicenseResolver for F
where
    F: Fn(&str) -> AuditResult<LicenseLookupResult>,
{
    fn resolve(&self, dependency: &str) -> AuditResult<LicenseLookupResult> {
        self(dependency)
    }
}
