pub mod audit;
pub mod config;
pub mod error;
pub mod exceptions;
pub mod init;
pub mod license;
pub mod manifest;
pub mod output;
pub mod policy;

// Re-export main types for easy access
pub use audit::{run, RunOutcome};
pub use error::{AuditError, AuditResult, ErrorKind};
pub use license::{GopathResolver, LicenseLookupResult, LicenseResolver};
pub use manifest::Dependency;
pub use policy::{classify, Assessment, Policy, Verdict};
