//! Drives an audit run: resolve each dependency, classify it, fold the
//! verdicts into one outcome.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::AuditResult;
use crate::license::LicenseResolver;
use crate::manifest::Dependency;
use crate::policy::{classify, Assessment, Policy, Verdict};

/// Result of a completed run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunOutcome {
    /// True when every reported verdict is `Approved`
    pub passed: bool,
    /// Verdicts in manifest order
    pub assessments: Vec<Assessment>,
}

impl RunOutcome {
    fn from_assessments(assessments: Vec<Assessment>) -> Self {
        let passed = assessments.iter().all(|a| a.verdict.is_approved());
        Self {
            passed,
            assessments,
        }
    }

    /// Process exit status for this outcome
    pub fn exit_code(&self) -> i32 {
        if self.passed {
            0
        } else {
            1
        }
    }

    pub fn count(&self, verdict: Verdict) -> usize {
        self.assessments
            .iter()
            .filter(|a| a.verdict == verdict)
            .count()
    }

    /// Assessments that fail the run
    pub fn failures(&self) -> impl Iterator<Item = &Assessment> {
        self.assessments.iter().filter(|a| !a.verdict.is_approved())
    }
}

/// Audit dependencies in order against the policy.
///
/// The first fatal error stops the run: later dependencies are never
/// resolved and no outcome is produced. Failing verdicts do not stop it.
pub fn run<R>(dependencies: &[Dependency], policy: &Policy, resolver: &R) -> AuditResult<RunOutcome>
where
    R: LicenseResolver + ?Sized,
{
    let mut assessments = Vec::with_capacity(dependencies.len());

    for dependency in dependencies {
        let lookup = resolver.resolve(&dependency.id)?;
        debug!(dependency = %dependency.id, ?lookup, "resolved license");

        if let Some(assessment) = classify(&dependency.id, &lookup, policy)? {
            assessments.push(assessment);
        }
    }

    Ok(RunOutcome::from_assessments(assessments))
}
