use std::fs;
use std::path::PathBuf;
use std::process::Command;
use tempfile::TempDir;

pub const MIT_TEXT: &str = "The MIT License (MIT)

Permission is hereby granted, free of charge, to any person obtaining a copy
of this software and associated documentation files.";

pub const LGPL_TEXT: &str = "GNU LESSER GENERAL PUBLIC LICENSE
Version 2.1, February 1999";

pub const GPL_TEXT: &str = "GNU GENERAL PUBLIC LICENSE
Version 3, 29 June 2007";

/// A Go project plus a private GOPATH, both inside one temp dir.
pub struct TestProject {
    pub dir: TempDir,
    pub binary_path: String,
}

impl TestProject {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let binary_path = env!("CARGO_BIN_EXE_anderson").to_string();
        fs::create_dir_all(dir.path().join("project").join("Godeps")).unwrap();
        fs::create_dir_all(dir.path().join("gopath").join("src")).unwrap();

        Self { dir, binary_path }
    }

    pub fn project_path(&self) -> PathBuf {
        self.dir.path().join("project")
    }

    pub fn gopath(&self) -> PathBuf {
        self.dir.path().join("gopath")
    }

    pub fn write_policy(&self, content: &str) {
        fs::write(self.project_path().join(".anderson.yml"), content).unwrap();
    }

    pub fn write_manifest(&self, import_paths: &[&str]) {
        let deps: Vec<String> = import_paths
            .iter()
            .map(|path| format!("{{\"ImportPath\": \"{}\", \"Rev\": \"0000\"}}", path))
            .collect();
        let content = format!(
            "{{\"ImportPath\": \"example.com/app\", \"GoVersion\": \"go1.4\", \"Deps\": [{}]}}",
            deps.join(", ")
        );
        fs::write(self.project_path().join("Godeps").join("Godeps.json"), content).unwrap();
    }

    /// Install a dependency into the GOPATH, optionally with a LICENSE file.
    pub fn add_package(&self, import_path: &str, license: Option<&str>) {
        let dir = self.gopath().join("src").join(import_path);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("main.go"), "package main\n").unwrap();
        if let Some(text) = license {
            fs::write(dir.join("LICENSE"), text).unwrap();
        }
    }

    pub fn run_auditor(&self, args: &[&str]) -> std::process::Output {
        Command::new(&self.binary_path)
            .args(args)
            .current_dir(self.project_path())
            .env("GOPATH", self.gopath())
            .env("NO_COLOR", "1")
            .env_remove("RUST_LOG")
            .output()
            .expect("Failed to run anderson")
    }
}
