use anyhow::Result;

use anderson::config::Settings;
use anderson::exceptions::add_exceptions_to_policy;
use anderson::Verdict;

pub fn handle_exempt(settings: &Settings, dry_run: bool, quiet: bool) -> Result<i32> {
    let outcome = super::run_audit(settings)?;

    let borderline: Vec<String> = outcome
        .assessments
        .iter()
        .filter(|a| a.verdict == Verdict::Borderline)
        .map(|a| a.dependency.clone())
        .collect();

    if borderline.is_empty() {
        if !quiet {
            println!("No borderline dependencies, nothing to exempt");
        }
        return Ok(0);
    }

    let policy_path = settings.policy_path();

    if dry_run {
        if !quiet {
            println!("Would add {} exceptions to {}:", borderline.len(), policy_path.display());
            for dependency in &borderline {
                println!("  - {}", dependency);
            }
        }
        return Ok(0);
    }

    let added = add_exceptions_to_policy(&policy_path, &borderline)?;

    if !quiet {
        println!("Added {} exceptions to {}:", added.len(), policy_path.display());
        for dependency in &added {
            println!("  ✅ {}", dependency);
        }
    }

    Ok(0)
}
