use std::fs;

use super::helpers::{TestProject, MIT_TEXT};

#[test]
fn test_init_writes_loadable_policy() {
    let project = TestProject::new();

    let init = project.run_auditor(&["init", "--preset", "green"]);
    assert!(init.status.success());
    assert!(project.project_path().join(".anderson.yml").exists());

    let again = project.run_auditor(&["init"]);
    assert_eq!(again.status.code(), Some(1));

    project.write_manifest(&["dep/a"]);
    project.add_package("dep/a", Some(MIT_TEXT));
    let validate = project.run_auditor(&["config", "--validate"]);
    assert!(validate.status.success());
    assert!(String::from_utf8_lossy(&validate.stdout).contains("Configuration is valid"));
}

#[test]
fn test_settings_file_and_toml_policy() {
    let project = TestProject::new();
    let root = project.project_path();

    fs::write(
        root.join("licenses.toml"),
        "whitelist = [\"MIT\"]\nblacklist = [\"GPL-3.0\"]\n",
    )
    .unwrap();
    fs::write(
        root.join("anderson.toml"),
        format!(
            "policy = \"licenses.toml\"\nmanifest = \"deps.json\"\nsearch_paths = [\"{}\"]\nformat = \"json\"\n",
            project.gopath().display()
        ),
    )
    .unwrap();
    fs::write(
        root.join("deps.json"),
        r#"{"Deps": [{"ImportPath": "github.com/foo/bar"}]}"#,
    )
    .unwrap();
    project.add_package("github.com/foo/bar", Some(MIT_TEXT));

    let output = project.run_auditor(&["check"]);

    assert_eq!(output.status.code(), Some(0));
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["passed"], true);
    assert_eq!(report["summary"]["by_license"]["MIT"], 1);
}

#[test]
fn test_report_written_to_file() {
    let project = TestProject::new();
    project.write_policy("whitelist: [MIT]\n");
    project.write_manifest(&["dep/a"]);
    project.add_package("dep/a", Some(MIT_TEXT));

    let output = project.run_auditor(&["check", "--output", "report.txt"]);

    assert!(output.status.success());
    let report = fs::read_to_string(project.project_path().join("report.txt")).unwrap();
    assert!(report.contains("dep/a"));
    assert!(report.contains("CHECKS OUT"));
    assert!(!report.contains('\u{1b}'));
}
