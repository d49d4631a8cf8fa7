use std::fs;
use std::io;
use std::path::Path;

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{AuditError, AuditResult};

/// Default location of the policy file, relative to the project root.
pub const DEFAULT_POLICY_FILE: &str = ".anderson.yml";

/// On-disk encoding of a policy file, chosen by extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolicyFormat {
    Yaml,
    Toml,
}

impl PolicyFormat {
    /// `.toml` files are TOML; everything else is read as YAML.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => PolicyFormat::Toml,
            _ => PolicyFormat::Yaml,
        }
    }
}

/// License policy
///
/// Four independently configured lists. Nothing stops a license from
/// appearing in more than one of them; the classifier's evaluation order
/// decides which one wins.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Policy {
    /// Licenses that are always acceptable
    #[serde(rename = "whitelist", default)]
    allow: IndexSet<String>,
    /// Licenses that are only acceptable for exempted dependencies
    #[serde(rename = "greylist", default)]
    conditional: IndexSet<String>,
    /// Licenses that are never acceptable
    #[serde(rename = "blacklist", default)]
    deny: IndexSet<String>,
    /// Dependencies allowed to use a greylisted license
    #[serde(default)]
    exceptions: IndexSet<String>,
}

impl Policy {
    pub fn new<A, D, C, E>(allow: A, deny: D, conditional: C, exceptions: E) -> Self
    where
        A: IntoIterator,
        A::Item: Into<String>,
        D: IntoIterator,
        D::Item: Into<String>,
        C: IntoIterator,
        C::Item: Into<String>,
        E: IntoIterator,
        E::Item: Into<String>,
    {
        Self {
            allow: allow.into_iter().map(Into::into).collect(),
            deny: deny.into_iter().map(Into::into).collect(),
            conditional: conditional.into_iter().map(Into::into).collect(),
            exceptions: exceptions.into_iter().map(Into::into).collect(),
        }
    }

    /// Load a policy file, picking the parser from its extension.
    pub fn load(path: &Path) -> AuditResult<Self> {
        let content = fs::read_to_string(path).map_err(|source| {
            if source.kind() == io::ErrorKind::NotFound {
                AuditError::ConfigMissing {
                    path: path.to_path_buf(),
                }
            } else {
                AuditError::ConfigUnreadable {
                    path: path.to_path_buf(),
                    source,
                }
            }
        })?;

        let policy = match PolicyFormat::from_path(path) {
            PolicyFormat::Yaml => Self::from_yaml_str(&content),
            PolicyFormat::Toml => Self::from_toml_str(&content),
        }
        .map_err(|message| AuditError::ConfigMalformed {
            path: path.to_path_buf(),
            message,
        })?;

        info!(
            path = %path.display(),
            whitelist = policy.allow.len(),
            greylist = policy.conditional.len(),
            blacklist = policy.deny.len(),
            exceptions = policy.exceptions.len(),
            "loaded license policy"
        );

        Ok(policy)
    }

    pub fn from_yaml_str(content: &str) -> Result<Self, String> {
        // An empty YAML document is `null`, not an empty mapping.
        if content.trim().is_empty() {
            return Err("policy file is empty".to_string());
        }
        serde_yaml::from_str(content).map_err(|e| e.to_string())
    }

    pub fn from_toml_str(content: &str) -> Result<Self, String> {
        toml::from_str(content).map_err(|e| e.to_string())
    }

    pub fn to_yaml_string(&self) -> Result<String, String> {
        serde_yaml::to_string(self).map_err(|e| e.to_string())
    }

    pub fn to_toml_string(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| e.to_string())
    }

    /// Copy of this policy with one more exempted dependency.
    pub fn with_exception(mut self, dependency: impl Into<String>) -> Self {
        self.exceptions.insert(dependency.into());
        self
    }

    pub fn allow(&self) -> &IndexSet<String> {
        &self.allow
    }

    pub fn deny(&self) -> &IndexSet<String> {
        &self.deny
    }

    pub fn conditional(&self) -> &IndexSet<String> {
        &self.conditional
    }

    pub fn exceptions(&self) -> &IndexSet<String> {
        &self.exceptions
    }
}
