use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};

use glob::Pattern;
use tracing::debug;

use super::{detector, LicenseLookupResult, LicenseResolver};
use crate::error::{AuditError, AuditResult};

/// License file names tried when none are configured, in priority order.
pub const DEFAULT_LICENSE_FILES: &[&str] = &[
    "LICENSE",
    "LICENSE.txt",
    "LICENSE.md",
    "license.txt",
    "COPYING",
    "COPYING.txt",
    "COPYING.md",
    "copying.txt",
    "MIT.LICENSE",
];

/// Resolves Go import paths against one or more GOPATH roots.
///
/// A dependency `github.com/foo/bar` lives at `<root>/src/github.com/foo/bar`
/// for the first root where that directory exists.
#[derive(Debug, Clone)]
pub struct GopathResolver {
    search_paths: Vec<PathBuf>,
    license_files: Vec<Pattern>,
}

impl GopathResolver {
    /// `license_files` are glob patterns matched against file names in the
    /// dependency directory, tried in order.
    pub fn new<S: AsRef<str>>(
        search_paths: Vec<PathBuf>,
        license_files: &[S],
    ) -> Result<Self, glob::PatternError> {
        let license_files = license_files
            .iter()
            .map(|name| Pattern::new(name.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            search_paths,
            license_files,
        })
    }

    pub fn with_default_license_files(search_paths: Vec<PathBuf>) -> Self {
        let license_files = DEFAULT_LICENSE_FILES
            .iter()
            .map(|name| Pattern::escape(name))
            .filter_map(|name| Pattern::new(&name).ok())
            .collect();

        Self {
            search_paths,
            license_files,
        }
    }

    pub fn search_paths(&self) -> &[PathBuf] {
        &self.search_paths
    }

    /// Find the directory holding a dependency's sources.
    ///
    /// Import paths must be relative and stay below `<root>/src`; anything
    /// else is never looked up.
    pub fn locate(&self, dependency: &str) -> AuditResult<PathBuf> {
        if !is_contained_import_path(dependency) {
            debug!(dependency, "import path escapes the search roots");
            return Err(AuditError::DependencyNotLocated {
                dependency: dependency.to_string(),
            });
        }

        self.search_paths
            .iter()
            .map(|root| root.join("src").join(dependency))
            .find(|dir| dir.is_dir())
            .ok_or_else(|| AuditError::DependencyNotLocated {
                dependency: dependency.to_string(),
            })
    }

    /// First file in `dir` matching the candidate list, honoring list order.
    pub fn find_license_file(&self, dir: &Path) -> io::Result<Option<PathBuf>> {
        let mut names = Vec::new();
        for entry in fs::read_dir(dir)? {
            let entry = entry?;
            if entry.path().is_file() {
                names.push(entry.file_name().to_string_lossy().into_owned());
            }
        }
        names.sort();

        for pattern in &self.license_files {
            if let Some(name) = names.iter().find(|name| pattern.matches(name)) {
                return Ok(Some(dir.join(name)));
            }
        }

        Ok(None)
    }
}

/// Non-empty and made only of normal components: no root, prefix, `.` or `..`.
fn is_contained_import_path(dependency: &str) -> bool {
    let path = Path::new(dependency);
    path.components().next().is_some()
        && path
            .components()
            .all(|component| matches!(component, Component::Normal(_)))
}

impl LicenseResolver for GopathResolver {
    fn resolve(&self, dependency: &str) -> AuditResult<LicenseLookupResult> {
        let dir = self.locate(dependency)?;

        let license_path = match self.find_license_file(&dir) {
            Ok(Some(path)) => path,
            Ok(None) => {
                debug!(dependency, dir = %dir.display(), "no license file found");
                return Ok(LicenseLookupResult::NotFound);
            }
            Err(e) => {
                return Ok(LicenseLookupResult::LookupFailed(format!(
                    "failed to list {}: {}",
                    dir.display(),
                    e
                )))
            }
        };

        let bytes = match fs::read(&license_path) {
            Ok(bytes) => bytes,
            Err(e) => {
                return Ok(LicenseLookupResult::LookupFailed(format!(
                    "failed to read {}: {}",
                    license_path.display(),
                    e
                )))
            }
        };

        let text = String::from_utf8_lossy(&bytes);
        match detector::guess_license(&text) {
            Some(license) => {
                debug!(dependency, license, file = %license_path.display(), "detected license");
                Ok(LicenseLookupResult::Found(license.to_string()))
            }
            None => {
                debug!(dependency, file = %license_path.display(), "could not guess license type");
                Ok(LicenseLookupResult::Ambiguous)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use tempfile::TempDir;

    const MIT_TEXT: &str = "Permission is hereby granted, free of charge, to any person obtaining a copy\n\
                            of this software";

    fn package_dir(root: &Path, import_path: &str) -> PathBuf {
        let dir = root.join("src").join(import_path);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_resolve_found() {
        let gopath = TempDir::new().unwrap();
        let dir = package_dir(gopath.path(), "github.com/foo/bar");
        fs::write(dir.join("LICENSE"), MIT_TEXT).unwrap();

        let resolver = GopathResolver::with_default_license_files(vec![gopath.path().to_path_buf()]);
        assert_eq!(
            resolver.resolve("github.com/foo/bar").unwrap(),
            LicenseLookupResult::Found("MIT".to_string())
        );
    }

    #[test]
    fn test_resolve_not_found_and_ambiguous() {
        let gopath = TempDir::new().unwrap();
        let bare = package_dir(gopath.path(), "github.com/foo/bare");
        fs::write(bare.join("main.go"), "package main").unwrap();
        let odd = package_dir(gopath.path(), "github.com/foo/odd");
        fs::write(odd.join("COPYING"), "All rights reserved.").unwrap();

        let resolver = GopathResolver::with_default_license_files(vec![gopath.path().to_path_buf()]);
        assert_eq!(resolver.resolve("github.com/foo/bare").unwrap(), LicenseLookupResult::NotFound);
        assert_eq!(resolver.resolve("github.com/foo/odd").unwrap(), LicenseLookupResult::Ambiguous);
    }

    #[test]
    fn test_missing_dependency_is_resolution_error() {
        let gopath = TempDir::new().unwrap();
        let resolver = GopathResolver::with_default_license_files(vec![gopath.path().to_path_buf()]);

        let err = resolver.resolve("github.com/nowhere/pkg").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Resolution);
    }

    #[test]
    fn test_import_path_must_stay_inside_search_roots() {
        let gopath = TempDir::new().unwrap();
        package_dir(gopath.path(), "github.com/foo/bar");
        let outside = TempDir::new().unwrap();
        fs::write(outside.path().join("LICENSE"), MIT_TEXT).unwrap();

        let resolver = GopathResolver::with_default_license_files(vec![gopath.path().to_path_buf()]);

        let absolute = outside.path().to_string_lossy().into_owned();
        let escaping = format!("../../{}", absolute.trim_start_matches('/'));
        let rejected = [
            absolute.as_str(),
            escaping.as_str(),
            "",
            "github.com/foo/../foo/bar",
            "./github.com/foo/bar",
        ];
        for dependency in rejected {
            let err = resolver.resolve(dependency).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::Resolution, "{dependency:?}");
        }

        assert!(resolver.locate("github.com/foo/bar").is_ok());
    }

    #[test]
    fn test_first_matching_search_path_wins() {
        let first = TempDir::new().unwrap();
        let second = TempDir::new().unwrap();
        package_dir(second.path(), "github.com/foo/bar");
        let expected = package_dir(first.path(), "github.com/foo/bar");

        let resolver = GopathResolver::with_default_license_files(vec![
            first.path().to_path_buf(),
            second.path().to_path_buf(),
        ]);
        assert_eq!(resolver.locate("github.com/foo/bar").unwrap(), expected);
    }

    #[test]
    fn test_candidate_order_decides_license_file() {
        let gopath = TempDir::new().unwrap();
        let dir = package_dir(gopath.path(), "github.com/foo/dual");
        fs::write(dir.join("COPYING"), "GNU GENERAL PUBLIC LICENSE Version 3").unwrap();
        fs::write(dir.join("LICENSE.md"), MIT_TEXT).unwrap();

        let resolver = GopathResolver::with_default_license_files(vec![gopath.path().to_path_buf()]);
        assert_eq!(
            resolver.find_license_file(&dir).unwrap(),
            Some(dir.join("LICENSE.md"))
        );

        let resolver = GopathResolver::new(vec![gopath.path().to_path_buf()], &["COPYING*"]).unwrap();
        assert_eq!(
            resolver.resolve("github.com/foo/dual").unwrap(),
            LicenseLookupResult::Found("GPL-3.0".to_string())
        );
    }

    #[test]
    fn test_license_file_patterns() {
        let gopath = TempDir::new().unwrap();
        let dir = package_dir(gopath.path(), "github.com/foo/custom");
        fs::write(dir.join("LICENSE-MIT"), MIT_TEXT).unwrap();

        let defaults = GopathResolver::with_default_license_files(vec![gopath.path().to_path_buf()]);
        assert_eq!(defaults.resolve("github.com/foo/custom").unwrap(), LicenseLookupResult::NotFound);

        let globbed = GopathResolver::new(vec![gopath.path().to_path_buf()], &["LICENSE*"]).unwrap();
        assert_eq!(
            globbed.resolve("github.com/foo/custom").unwrap(),
            LicenseLookupResult::Found("MIT".to_string())
        );

        assert!(GopathResolver::new(vec![], &["LICENSE[".to_string()]).is_err());
    }
}
