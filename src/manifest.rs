use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::{AuditError, AuditResult};

/// Default manifest location, relative to the project root.
pub const DEFAULT_MANIFEST_FILE: &str = "Godeps/Godeps.json";

/// One declared third-party dependency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dependency {
    pub id: String,
}

impl Dependency {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct GodepsFile {
    #[serde(rename = "ImportPath")]
    pub import_path: Option<String>,
    #[serde(rename = "GoVersion")]
    pub go_version: Option<String>,
    #[serde(rename = "Deps")]
    pub deps: Vec<GodepsEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GodepsEntry {
    #[serde(rename = "ImportPath")]
    pub import_path: String,
    #[serde(rename = "Comment")]
    pub comment: Option<String>,
    #[serde(rename = "Rev")]
    pub rev: Option<String>,
}

pub struct GodepsParser;

impl GodepsParser {
    /// Parse a Godeps.json file
    pub fn parse_godeps<P: AsRef<Path>>(path: P) -> AuditResult<GodepsFile> {
        let path_ref = path.as_ref();

        let content = fs::read_to_string(path_ref).map_err(|source| {
            if source.kind() == io::ErrorKind::NotFound {
                AuditError::ManifestMissing {
                    path: path_ref.to_path_buf(),
                }
            } else {
                AuditError::ManifestUnreadable {
                    path: path_ref.to_path_buf(),
                    source,
                }
            }
        })?;

        let godeps: GodepsFile =
            serde_json::from_str(&content).map_err(|e| AuditError::ManifestMalformed {
                path: path_ref.to_path_buf(),
                message: e.to_string(),
            })?;

        if godeps.deps.is_empty() {
            warn!(path = %path_ref.display(), "manifest declares no dependencies");
        }

        Ok(godeps)
    }

    /// Dependencies in declaration order
    pub fn extract_dependencies(godeps: &GodepsFile) -> Vec<Dependency> {
        godeps
            .deps
            .iter()
            .map(|entry| Dependency::new(entry.import_path.clone()))
            .collect()
    }
}

/// Read the ordered dependency list from a Godeps manifest.
pub fn load_dependencies(path: &Path) -> AuditResult<Vec<Dependency>> {
    let godeps = GodepsParser::parse_godeps(path)?;
    let dependencies = GodepsParser::extract_dependencies(&godeps);
    info!(path = %path.display(), count = dependencies.len(), "loaded dependency manifest");
    Ok(dependencies)
}
