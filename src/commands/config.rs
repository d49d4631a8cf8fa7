use anyhow::Result;
use serde_json::json;

use anderson::config::Settings;
use anderson::manifest::load_dependencies;
use anderson::Policy;

pub fn handle_config(settings: &Settings, show: bool, validate: bool, quiet: bool) -> Result<i32> {
    if !show && !validate {
        anyhow::bail!("Use --show or --validate");
    }

    let policy = Policy::load(&settings.policy_path())?;

    if show && !quiet {
        let effective = json!({
            "settings": settings,
            "search_paths": settings.effective_search_paths(),
            "policy": policy,
        });
        println!("{}", serde_json::to_string_pretty(&effective)?);
    }

    if validate {
        let dependencies = load_dependencies(&settings.manifest_path())?;
        super::build_resolver(settings)?;
        if !quiet {
            println!(
                "✅ Configuration is valid ({} dependencies declared)",
                dependencies.len()
            );
        }
    }

    Ok(0)
}
