use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::license::DEFAULT_LICENSE_FILES;
use crate::manifest::DEFAULT_MANIFEST_FILE;
use crate::policy::DEFAULT_POLICY_FILE;

/// Optional settings file looked up in the working directory
pub const DEFAULT_SETTINGS_FILE: &str = "anderson.toml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    /// Policy file (YAML, or TOML when it ends in `.toml`)
    pub policy: Option<PathBuf>,

    /// Godeps manifest
    pub manifest: Option<PathBuf>,

    /// GOPATH roots searched for dependency sources
    pub search_paths: Option<Vec<PathBuf>>,

    /// License file name patterns, tried in order
    pub license_files: Option<Vec<String>>,

    /// Output format
    pub format: Option<ReportFormat>,
}

/// Report format named in the settings file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    Terminal,
    Json,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            policy: Some(PathBuf::from(DEFAULT_POLICY_FILE)),
            manifest: Some(PathBuf::from(DEFAULT_MANIFEST_FILE)),
            search_paths: None,
            license_files: Some(DEFAULT_LICENSE_FILES.iter().map(|s| s.to_string()).collect()),
            format: Some(ReportFormat::Terminal),
        }
    }
}

impl Settings {
    pub fn policy_path(&self) -> PathBuf {
        self.policy
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_POLICY_FILE))
    }

    pub fn manifest_path(&self) -> PathBuf {
        self.manifest
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_MANIFEST_FILE))
    }

    /// Configured roots, or the entries of `$GOPATH`
    pub fn effective_search_paths(&self) -> Vec<PathBuf> {
        match &self.search_paths {
            Some(paths) if !paths.is_empty() => paths.clone(),
            _ => gopath_from_env(),
        }
    }

    pub fn effective_license_files(&self) -> Vec<String> {
        self.license_files
            .clone()
            .unwrap_or_else(|| DEFAULT_LICENSE_FILES.iter().map(|s| s.to_string()).collect())
    }

    /// Values present in `other` replace ours
    fn merge(self, other: Settings) -> Settings {
        Settings {
            policy: other.policy.or(self.policy),
            manifest: other.manifest.or(self.manifest),
            search_paths: other.search_paths.or(self.search_paths),
            license_files: other.license_files.or(self.license_files),
            format: other.format.or(self.format),
        }
    }
}

/// Search roots from `$GOPATH`, falling back to `$HOME/go` like the go tool.
pub fn gopath_from_env() -> Vec<PathBuf> {
    if let Some(gopath) = env::var_os("GOPATH") {
        let paths: Vec<PathBuf> = env::split_paths(&gopath)
            .filter(|p| !p.as_os_str().is_empty())
            .collect();
        if !paths.is_empty() {
            return paths;
        }
    }

    env::var_os("HOME")
        .map(|home| vec![PathBuf::from(home).join("go")])
        .unwrap_or_default()
}

/// Load settings from an explicit file, or from `anderson.toml` in the
/// working directory when present. Missing values keep their defaults.
pub fn load_settings(path: Option<&Path>) -> Result<Settings> {
    let settings_path = match path {
        Some(path) => path.to_path_buf(),
        None => {
            let default_path = env::current_dir()
                .unwrap_or_else(|_| PathBuf::from("."))
                .join(DEFAULT_SETTINGS_FILE);
            if !default_path.exists() {
                return Ok(Settings::default());
            }
            default_path
        }
    };

    load_settings_file(&settings_path)
}

pub fn load_settings_file(path: &Path) -> Result<Settings> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read settings file: {}", path.display()))?;

    let file_settings: Settings = toml::from_str(&content)
        .with_context(|| format!("Failed to parse settings file: {}", path.display()))?;

    Ok(Settings::default().merge(file_settings))
}
