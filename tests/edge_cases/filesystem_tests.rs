//! Edge case tests for filesystem-related scenarios

use crate::common::{assertions, CliTestRunner};
use std::fs;

#[test]
fn test_nonexistent_main_folder() {
    let runner = CliTestRunner::new().unwrap();
    let missing = runner.fixture().root().join("nope");
    let report = runner.fixture().report_path();

    let error = runner.expect_failure(&[
        "compare",
        missing.to_str().unwrap(),
        runner.fixture().comp_str(),
        "--output",
        report.to_str().unwrap(),
    ]);
    assert!(error.to_string().contains("Invalid folder path"), "Got: {}", error);
    assert!(!report.exists(), "No report should be written for an invalid folder");
}

#[test]
fn test_comparison_folder_is_a_file() {
    let runner = CliTestRunner::new().unwrap();
    let file = runner.fixture().create_main("a.csv", "id\n").unwrap();
    let report = runner.fixture().report_path();

    let error = runner.expect_failure(&[
        "compare",
        runner.fixture().main_str(),
        file.to_str().unwrap(),
        "--output",
        report.to_str().unwrap(),
    ]);
    assert!(matches!(error, headerdiff::HeaderDiffError::InvalidFolder { .. }));
}

#[test]
fn test_empty_folders_give_empty_report() {
    let runner = CliTestRunner::new().unwrap();
    let report = runner.compare(&[]).unwrap();
    assert!(report.is_empty());
}

#[test]
fn test_subfolders_and_other_extensions_are_ignored() {
    let runner = CliTestRunner::new().unwrap();
    let fixture = runner.fixture();
    fixture.create_pair("data.csv", "id\n", "id\n").unwrap();
    fixture.create_main("readme.md", "# notes\n").unwrap();
    fixture.create_comp("data.json", "{}\n").unwrap();
    fs::create_dir_all(fixture.main_dir.join("archive")).unwrap();
    fs::write(fixture.main_dir.join("archive").join("old.csv"), "id\n").unwrap();

    let report = runner.compare(&[]).unwrap();
    assert!(report.contains("Main File: data.csv"));
    assert!(!report.contains("readme.md"));
    assert!(!report.contains("data.json"));
    assert!(!report.contains("old.csv"));
}

#[test]
fn test_uppercase_extensions_are_included() {
    let runner = CliTestRunner::new().unwrap();
    runner.fixture().create_pair("DATA.TXT", "id\n", "id\n").unwrap();

    let report = runner.compare(&[]).unwrap();
    assert!(report.contains("Main File: DATA.TXT"));
}

#[test]
fn test_report_overwrites_existing_file() {
    let runner = CliTestRunner::new().unwrap();
    runner.fixture().create_pair("a.csv", "id\n", "id\n").unwrap();
    fs::write(runner.fixture().report_path(), "stale content that should go away").unwrap();

    let report = runner.compare(&[]).unwrap();
    assert!(!report.contains("stale"));
    assertions::assert_file_exists_and_not_empty(&runner.fixture().report_path());
}

#[test]
#[cfg(unix)]
fn test_unreadable_file_is_reported_inline() {
    use std::os::unix::fs::PermissionsExt;

    let runner = CliTestRunner::new().unwrap();
    let fixture = runner.fixture();
    fixture.create_pair("a.csv", "id,name\n", "id,name\n").unwrap();
    fixture.create_pair("b.csv", "id\n", "id\n").unwrap();

    let restricted = fixture.comp_dir.join("a.csv");
    let mut perms = fs::metadata(&restricted).unwrap().permissions();
    perms.set_mode(0o000);
    fs::set_permissions(&restricted, perms).unwrap();

    // Running as root ignores file permissions
    if fs::read(&restricted).is_ok() {
        return;
    }

    let report = runner.compare(&[]).unwrap();
    assert!(report.contains("In Comparison: "));
    assert!(!report.contains("In Main: "));
    assert!(report.contains("Main File: b.csv"));
    assert!(report.contains("Headers match exactly."));
}

#[test]
fn test_report_in_missing_folder_fails() {
    let runner = CliTestRunner::new().unwrap();
    runner.fixture().create_pair("a.csv", "id\n", "id\n").unwrap();
    let report = runner.fixture().root().join("missing").join("report.txt");

    let error = runner.expect_failure(&[
        "compare",
        runner.fixture().main_str(),
        runner.fixture().comp_str(),
        "--output",
        report.to_str().unwrap(),
    ]);
    assert!(error.to_string().contains("Failed to write report to"), "Got: {}", error);
}
