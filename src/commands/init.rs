use anyhow::Result;
use std::path::PathBuf;

use crate::cli::InitPreset;
use anderson::init;
use anderson::policy::DEFAULT_POLICY_FILE;

pub fn handle_init(preset: InitPreset, policy: Option<PathBuf>, force: bool, quiet: bool) -> Result<i32> {
    let init_preset = match preset {
        InitPreset::Green => init::InitPreset::Green,
        InitPreset::Yellow => init::InitPreset::Yellow,
        InitPreset::Red => init::InitPreset::Red,
    };
    let path = policy.unwrap_or_else(|| PathBuf::from(DEFAULT_POLICY_FILE));

    init::generate_policy_at_path(&path, init_preset, force)?;

    if !quiet {
        println!("✅ Wrote {} policy to {}", init_preset.name(), path.display());
    }

    Ok(0)
}
