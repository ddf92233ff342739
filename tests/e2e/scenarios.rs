use super::helpers::TestProject;

const SINGLE_MIT: &str = r#"
{
    "third_party_libraries": [
        {
            "package_name": "foo",
            "licenses": [
                { "license": "MIT", "text": "MIT TEXT" }
            ]
        }
    ]
}
"#;

#[test]
fn test_generates_report_for_permitted_dependency() {
    let project = TestProject::new();
    project.stub_bundler(SINGLE_MIT, 0);

    let output = project.run(&[]);

    assert!(output.status.success());

    let report = project.read_report();
    assert!(report.starts_with("# Third party library licenses\n\n"));
    assert!(report.contains("## foo\n\nMIT\n\nMIT TEXT\n"));
}

#[test]
fn test_dependency_without_licenses_fails() {
    let project = TestProject::new();
    project.stub_bundler(
        r#"{ "third_party_libraries": [ { "package_name": "bar", "licenses": [] } ] }"#,
        0,
    );

    let output = project.run(&[]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error: bar has no licenses"));
    // Nothing was written: the report is buffered and only flushed on success.
    assert!(!project.report_path().exists());
}

#[test]
fn test_dependency_without_permissible_licenses_fails() {
    let project = TestProject::new();
    project.stub_bundler(
        r#"{ "third_party_libraries": [ { "package_name": "baz", "licenses": [ { "license": "GPL-3.0", "text": "..." } ] } ] }"#,
        0,
    );

    let output = project.run(&[]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error: baz has no permissible licenses"));
    assert!(!project.report_path().exists());
}

#[test]
fn test_allow_list_override_from_manifest() {
    let project = TestProject::new();
    project.write_manifest(
        r#"
[package]
name = "fixture-app"
version = "0.1.0"

[package.metadata.license-attribution]
permissible = ["Apache-2.0", "MIT"]
"#,
    );
    project.stub_bundler(
        r#"
{
    "third_party_libraries": [
        {
            "package_name": "dual",
            "licenses": [
                { "license": "MIT", "text": "MIT TEXT" },
                { "license": "Apache-2.0", "text": "APACHE TEXT" }
            ]
        }
    ]
}
"#,
        0,
    );

    let output = project.run(&[]);

    assert!(output.status.success());
    let report = project.read_report();
    // First allow-list match wins over the library's own ordering.
    assert!(report.contains("## dual\n\nApache-2.0\n\nAPACHE TEXT\n"));
    assert!(!report.contains("\nMIT TEXT\n"));
}

#[test]
fn test_repeated_runs_produce_identical_reports() {
    let project = TestProject::new();
    project.stub_bundler(SINGLE_MIT, 0);

    assert!(project.run(&[]).status.success());
    let first = project.read_report();

    assert!(project.run(&[]).status.success());
    let second = project.read_report();

    assert_eq!(first, second);
}

#[test]
fn test_bundler_failure_is_fatal() {
    let project = TestProject::new();
    project.stub_bundler("", 2);

    let output = project.run(&[]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("bundle-licenses"));
    assert!(!project.report_path().exists());
}

#[test]
fn test_malformed_bundler_output_is_fatal() {
    let project = TestProject::new();
    project.stub_bundler("{ not json", 0);

    let output = project.run(&[]);

    assert!(!output.status.success());
    assert!(!project.report_path().exists());
}

#[test]
fn test_output_flag_overrides_report_path() {
    let project = TestProject::new();
    project.stub_bundler(SINGLE_MIT, 0);

    let output = project.run(&["generate", "--output", "CREDITS.txt"]);

    assert!(output.status.success());
    assert!(project.dir.path().join("CREDITS.txt").exists());
    assert!(!project.report_path().exists());
}

#[test]
fn test_quiet_suppresses_status_line() {
    let project = TestProject::new();
    project.stub_bundler(SINGLE_MIT, 0);

    let output = project.run(&["--quiet"]);

    assert!(output.status.success());
    assert!(output.stdout.is_empty());
    assert!(project.report_path().exists());
}

#[test]
fn test_config_show_and_validate() {
    let project = TestProject::new();
    project.write_manifest(
        r#"
[package]
name = "fixture-app"
version = "0.1.0"

[package.metadata.license-attribution]
permissible = ["MIT"]
output = "LICENSES.txt"
"#,
    );

    let show = project.run(&["config", "--show"]);
    assert!(show.status.success());
    let stdout = String::from_utf8_lossy(&show.stdout);
    assert!(stdout.contains("LICENSES.txt"));

    let validate = project.run(&["config", "--validate"]);
    assert!(validate.status.success());
    assert!(String::from_utf8_lossy(&validate.stdout).contains("Configuration is valid"));
}
