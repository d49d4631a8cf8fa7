//! Adding dependencies to a policy file's `exceptions` list.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::warn;

use crate::policy::{Policy, PolicyFormat};

/// Append dependencies to `exceptions`, skipping ones already listed.
/// Returns the dependencies that were actually added.
pub fn add_exceptions_to_policy(path: &Path, dependencies: &[String]) -> Result<Vec<String>> {
    match PolicyFormat::from_path(path) {
        PolicyFormat::Toml => add_to_toml_policy(path, dependencies),
        PolicyFormat::Yaml => add_to_yaml_policy(path, dependencies),
    }
}

fn add_to_toml_policy(path: &Path, dependencies: &[String]) -> Result<Vec<String>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read policy file: {}", path.display()))?;

    let mut doc = content
        .parse::<toml_edit::DocumentMut>()
        .with_context(|| format!("Failed to parse policy file: {}", path.display()))?;

    if !doc.contains_key("exceptions") {
        doc["exceptions"] = toml_edit::value(toml_edit::Array::new());
    }

    let exceptions = doc["exceptions"]
        .as_array_mut()
        .ok_or_else(|| anyhow::anyhow!("Invalid exceptions format in {}", path.display()))?;

    let mut added = Vec::new();
    for dependency in dependencies {
        let already_listed = exceptions
            .iter()
            .any(|existing| existing.as_str() == Some(dependency.as_str()));
        if !already_listed && !added.contains(dependency) {
            exceptions.push(dependency.as_str());
            added.push(dependency.clone());
        }
    }

    fs::write(path, doc.to_string())
        .with_context(|| format!("Failed to write policy file: {}", path.display()))?;

    Ok(added)
}

fn add_to_yaml_policy(path: &Path, dependencies: &[String]) -> Result<Vec<String>> {
    let mut policy = Policy::load(path)?;

    let mut added = Vec::new();
    for dependency in dependencies {
        if !policy.is_exempted(dependency) {
            policy = policy.with_exception(dependency.as_str());
            added.push(dependency.clone());
        }
    }

    if added.is_empty() {
        return Ok(added);
    }

    warn!(path = %path.display(), "rewriting YAML policy; comments are not preserved");
    let content = policy
        .to_yaml_string()
        .map_err(|e| anyhow::anyhow!(e))
        .context("Failed to serialize policy")?;

    fs::write(path, content)
        .with_context(|| format!("Failed to write policy file: {}", path.display()))?;

    Ok(added)
}
