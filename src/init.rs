use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::policy::{Policy, PolicyFormat};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitPreset {
    /// Permissive licenses only; everything copyleft is contraband
    Green,
    /// Weak copyleft needs a per-dependency exception
    Yellow,
    /// Weak copyleft allowed, GPL needs an exception, only AGPL is contraband
    Red,
}

impl InitPreset {
    pub fn name(self) -> &'static str {
        match self {
            InitPreset::Green => "green",
            InitPreset::Yellow => "yellow",
            InitPreset::Red => "red",
        }
    }
}

const PERMISSIVE: &[&str] = &["MIT", "BSD-2-Clause", "BSD-3-Clause", "ISC", "Apache-2.0", "Unlicense"];
const WEAK_COPYLEFT: &[&str] = &[
    "MPL-1.1", "MPL-2.0", "LGPL-2.0", "LGPL-2.1", "LGPL-3.0", "EPL-1.0", "EPL-2.0", "CDDL-1.0", "CDDL-1.1",
];
const STRONG_COPYLEFT: &[&str] = &["GPL-2.0", "GPL-3.0"];
const NETWORK_COPYLEFT: &[&str] = &["AGPL-3.0"];

pub fn preset_policy(preset: InitPreset) -> Policy {
    let none: &[&str] = &[];
    match preset {
        InitPreset::Green => Policy::new(
            PERMISSIVE.iter().copied(),
            [WEAK_COPYLEFT, STRONG_COPYLEFT, NETWORK_COPYLEFT].concat(),
            none.iter().copied(),
            none.iter().copied(),
        ),
        InitPreset::Yellow => Policy::new(
            PERMISSIVE.iter().copied(),
            [STRONG_COPYLEFT, NETWORK_COPYLEFT].concat(),
            WEAK_COPYLEFT.iter().copied(),
            none.iter().copied(),
        ),
        InitPreset::Red => Policy::new(
            [PERMISSIVE, WEAK_COPYLEFT].concat(),
            NETWORK_COPYLEFT.iter().copied(),
            STRONG_COPYLEFT.iter().copied(),
            none.iter().copied(),
        ),
    }
}

/// Render a preset in the format implied by `path`.
pub fn render_preset(preset: InitPreset, format: PolicyFormat) -> Result<String> {
    let policy = preset_policy(preset);
    let body = match format {
        PolicyFormat::Yaml => policy.to_yaml_string(),
        PolicyFormat::Toml => policy.to_toml_string(),
    }
    .map_err(|e| anyhow::anyhow!(e))
    .context("Failed to serialize preset policy")?;

    Ok(format!(
        "# anderson license policy ({} preset)\n\
         # whitelist: always allowed, blacklist: never allowed,\n\
         # greylist: allowed only for dependencies listed under exceptions\n{}",
        preset.name(),
        body
    ))
}

/// Write a starter policy file. An existing file is only replaced with `force`.
pub fn generate_policy_at_path<P: AsRef<Path>>(path: P, preset: InitPreset, force: bool) -> Result<()> {
    let path = path.as_ref();

    if path.exists() && !force {
        return Err(anyhow::anyhow!(
            "{} already exists. Use --force to overwrite it.",
            path.display()
        ));
    }

    let content = render_preset(preset, PolicyFormat::from_path(path))?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    fs::write(path, content)
        .with_context(|| format!("Failed to write policy file: {}", path.display()))?;

    Ok(())
}
