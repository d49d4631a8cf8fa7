use super::helpers::{TestProject, GPL_TEXT, LGPL_TEXT, MIT_TEXT};

const POLICY: &str = "whitelist:
  - MIT
greylist:
  - LGPL-2.1
blacklist:
  - GPL-3.0
exceptions:
  - dep/b
";

fn mixed_project() -> TestProject {
    let project = TestProject::new();
    project.write_policy(POLICY);
    project.write_manifest(&["dep/a", "dep/b", "dep/c", "dep/d"]);
    project.add_package("dep/a", Some(MIT_TEXT));
    project.add_package("dep/b", Some(LGPL_TEXT));
    project.add_package("dep/c", Some(LGPL_TEXT));
    project.add_package("dep/d", None);
    project
}

#[test]
fn test_mixed_verdicts_fail_the_build() {
    let project = mixed_project();

    let output = project.run_auditor(&["check"]);

    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().filter(|l| l.contains("dep/")).collect();
    assert_eq!(lines.len(), 4);
    assert!(lines[0].contains("dep/a") && lines[0].contains("CHECKS OUT"));
    assert!(lines[1].contains("dep/b") && lines[1].contains("CHECKS OUT"));
    assert!(lines[2].contains("dep/c") && lines[2].contains("BORDERLINE"));
    assert!(lines[3].contains("dep/d") && lines[3].contains("NO LICENSE"));
}

#[test]
fn test_all_approved_passes() {
    let project = TestProject::new();
    project.write_policy(POLICY);
    project.write_manifest(&["dep/a"]);
    project.add_package("dep/a", Some(MIT_TEXT));

    let output = project.run_auditor(&["check"]);

    assert_eq!(output.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&output.stdout).contains("CHECKS OUT"));
}

#[test]
fn test_contraband_and_json_output() {
    let project = TestProject::new();
    project.write_policy(POLICY);
    project.write_manifest(&["dep/gpl", "dep/a"]);
    project.add_package("dep/gpl", Some(GPL_TEXT));
    project.add_package("dep/a", Some(MIT_TEXT));

    let output = project.run_auditor(&["check", "--format", "json"]);

    assert_eq!(output.status.code(), Some(1));
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["passed"], false);
    assert_eq!(report["dependencies"][0]["dependency"], "dep/gpl");
    assert_eq!(report["dependencies"][0]["verdict"], "contraband");
    assert_eq!(report["dependencies"][1]["verdict"], "approved");
}

#[test]
fn test_missing_dependency_aborts_without_report() {
    let project = TestProject::new();
    project.write_policy(POLICY);
    project.write_manifest(&["dep/a", "dep/ghost", "dep/c"]);
    project.add_package("dep/a", Some(MIT_TEXT));
    project.add_package("dep/c", Some(MIT_TEXT));

    let output = project.run_auditor(&["check"]);

    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(!stdout.contains("CHECKS OUT"));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Could not find dep/ghost"));
}

#[test]
fn test_missing_policy_is_fatal() {
    let project = TestProject::new();
    project.write_manifest(&["dep/a"]);
    project.add_package("dep/a", Some(MIT_TEXT));

    let output = project.run_auditor(&["check"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("missing your policy file"));
}

#[test]
fn test_invalid_manifest_is_fatal() {
    let project = TestProject::new();
    project.write_policy(POLICY);
    std::fs::write(project.project_path().join("Godeps").join("Godeps.json"), "not json").unwrap();

    let output = project.run_auditor(&["check"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("isn't valid"));
}

#[test]
fn test_exempt_then_check_passes() {
    let project = TestProject::new();
    project.write_policy(POLICY);
    project.write_manifest(&["dep/a", "dep/c"]);
    project.add_package("dep/a", Some(MIT_TEXT));
    project.add_package("dep/c", Some(LGPL_TEXT));

    let dry_run = project.run_auditor(&["exempt", "--dry-run"]);
    assert!(dry_run.status.success());
    assert!(String::from_utf8_lossy(&dry_run.stdout).contains("Would add 1 exceptions"));
    assert_eq!(project.run_auditor(&["check"]).status.code(), Some(1));

    let exempt = project.run_auditor(&["exempt"]);
    assert!(exempt.status.success());
    assert_eq!(project.run_auditor(&["check"]).status.code(), Some(0));
}

#[test]
fn test_quiet_check_keeps_exit_code() {
    let project = mixed_project();

    let output = project.run_auditor(&["--quiet", "check"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
}
