use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::config::Policy;
use crate::error::{AuditError, AuditResult};
use crate::license::LicenseLookupResult;

/// Outcome of checking one dependency against the policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    /// Whitelisted, or greylisted with an exception
    Approved,
    /// A license file exists but its type could not be determined
    Unknown,
    /// No license file was found
    NoLicense,
    /// Blacklisted
    Contraband,
    /// Greylisted without an exception
    Borderline,
}

impl Verdict {
    pub fn is_approved(self) -> bool {
        self == Verdict::Approved
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Approved => write!(f, "approved"),
            Verdict::Unknown => write!(f, "unknown"),
            Verdict::NoLicense => write!(f, "no license"),
            Verdict::Contraband => write!(f, "contraband"),
            Verdict::Borderline => write!(f, "borderline"),
        }
    }
}

/// A verdict together with the dependency it belongs to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assessment {
    pub dependency: String,
    /// Detected license, when one was recognized
    pub license: Option<String>,
    pub verdict: Verdict,
}

impl Assessment {
    fn new(dependency: &str, license: Option<&str>, verdict: Verdict) -> Self {
        Self {
            dependency: dependency.to_string(),
            license: license.map(str::to_string),
            verdict,
        }
    }
}

/// Classify one dependency.
///
/// First match wins: a failed lookup aborts the run, a missing or
/// unrecognized license maps straight to a verdict, and a detected license
/// is checked against blacklist, whitelist, then greylist. A detected
/// license found on none of the lists yields `Ok(None)` and the dependency
/// is left out of the report.
pub fn classify(
    dependency: &str,
    lookup: &LicenseLookupResult,
    policy: &Policy,
) -> AuditResult<Option<Assessment>> {
    let license = match lookup {
        LicenseLookupResult::LookupFailed(cause) => {
            return Err(AuditError::LookupFailed {
                dependency: dependency.to_string(),
                cause: cause.clone(),
            });
        }
        LicenseLookupResult::NotFound => {
            return Ok(Some(Assessment::new(dependency, None, Verdict::NoLicense)));
        }
        LicenseLookupResult::Ambiguous => {
            return Ok(Some(Assessment::new(dependency, None, Verdict::Unknown)));
        }
        LicenseLookupResult::Found(license) => license.as_str(),
    };

    let verdict = if policy.is_denied(license) {
        Verdict::Contraband
    } else if policy.is_allowed(license) {
        Verdict::Approved
    } else if policy.is_conditional(license) {
        if policy.is_exempted(dependency) {
            Verdict::Approved
        } else {
            Verdict::Borderline
        }
    } else {
        // Licenses on no list get no verdict and never fail the build
        debug!(dependency, license, "license is not on any policy list, skipping");
        return Ok(None);
    };

    Ok(Some(Assessment::new(dependency, Some(license), verdict)))
}
