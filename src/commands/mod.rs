pub mod check;
pub mod init;
pub mod exempt;
pub mod config;

pub use check::handle_check;
pub use init::handle_init;
pub use exempt::handle_exempt;
pub use config::handle_config;

use anyhow::{Context, Result};
use tracing::warn;

use anderson::config::Settings;
use anderson::manifest::load_dependencies;
use anderson::{run, GopathResolver, Policy, RunOutcome};

pub fn build_resolver(settings: &Settings) -> Result<GopathResolver> {
    let search_paths = settings.effective_search_paths();
    if search_paths.is_empty() {
        warn!("no search paths configured and GOPATH is not set");
    }

    GopathResolver::new(search_paths, &settings.effective_license_files())
        .context("Invalid license file pattern in settings")
}

/// Load policy, then manifest, then audit every dependency.
pub fn run_audit(settings: &Settings) -> Result<RunOutcome> {
    let policy = Policy::load(&settings.policy_path())?;
    let dependencies = load_dependencies(&settings.manifest_path())?;
    let resolver = build_resolver(settings)?;

    Ok(run(&dependencies, &policy, &resolver)?)
}
