//! Integration tests for file matching, plan files and detection commands

use crate::common::CliTestRunner;
use headerdiff::config::{PlanFile, ReportConfigBuilder};
use headerdiff::DelimiterChoice;
use std::fs;

#[test]
fn test_match_saves_plan() {
    let runner = CliTestRunner::new().unwrap();
    let fixture = runner.fixture();
    fixture.create_main("Customers.csv", "id;name\n").unwrap();
    fixture.create_comp("customers_v2.csv", "id;name\n").unwrap();
    fixture.create_main("zzz.txt", "a b\n").unwrap();

    let plan_path = fixture.root().join("plan.json");
    runner.expect_success(&[
        "match",
        fixture.main_str(),
        fixture.comp_str(),
        "--format",
        "json",
        "--save-plan",
        plan_path.to_str().unwrap(),
    ]);

    let plan = PlanFile::load(&plan_path).unwrap();
    let customers = &plan.files["Customers.csv"];
    assert_eq!(customers.comparison.as_deref(), Some("customers_v2.csv"));
    assert_eq!(customers.delimiter.as_deref(), Some("Semicolon (;)"));
    assert_eq!(plan.files["zzz.txt"].comparison, None);
}

#[test]
fn test_edited_plan_drives_compare() {
    let runner = CliTestRunner::new().unwrap();
    let fixture = runner.fixture();
    fixture.create_main("left.csv", "id,name\n").unwrap();
    fixture.create_comp("qqq.txt", "id,name,extra\n").unwrap();

    // Names are too different to match automatically
    let config = ReportConfigBuilder::new(&fixture.main_dir, &fixture.comp_dir).build().unwrap();
    assert_eq!(config.comparison_for("left.csv"), None);

    let mut plan = config.to_plan();
    let entry = plan.files.get_mut("left.csv").unwrap();
    entry.comparison = Some("qqq.txt".to_string());
    entry.delimiter = Some("Comma (,)".to_string());
    let plan_path = fixture.root().join("plan.json");
    plan.save(&plan_path).unwrap();

    let report = runner.compare(&["--plan", plan_path.to_str().unwrap()]).unwrap();
    assert!(report.contains("Main File: left.csv\nComparison File: qqq.txt"));
    assert!(report.contains("Extra in Comparison:\n - extra"));
    assert!(!report.contains("Unmatched"));
}

#[test]
fn test_plan_without_delimiter_detects_against_new_match() {
    let runner = CliTestRunner::new().unwrap();
    let fixture = runner.fixture();
    fixture.create_main("left.txt", "a~b~c\n").unwrap();
    fixture.create_comp("right.txt", "a~b~d\n").unwrap();

    let plan: PlanFile = serde_json::from_str(r#"{ "files": { "left.txt": { "comparison": "right.txt" } } }"#).unwrap();
    let config = ReportConfigBuilder::new(&fixture.main_dir, &fixture.comp_dir)
        .plan(Some(plan))
        .build()
        .unwrap();

    assert_eq!(config.selections["left.txt"].delimiter, DelimiterChoice::Named("Tilde (~)"));
}

#[test]
fn test_plan_with_invalid_json_fails() {
    let runner = CliTestRunner::new().unwrap();
    let plan_path = runner.fixture().root().join("plan.json");
    fs::write(&plan_path, "{ not json").unwrap();

    let err = runner.compare(&["--plan", plan_path.to_str().unwrap()]).unwrap_err();
    assert!(matches!(err, headerdiff::HeaderDiffError::Json(_)));
}

#[test]
fn test_detect_command() {
    let runner = CliTestRunner::new().unwrap();
    let main = runner.fixture().create_main("a.txt", "id\tname\n").unwrap();
    let comp = runner.fixture().create_comp("a.txt", "id\tname\n").unwrap();

    runner.expect_success(&["detect", main.to_str().unwrap()]);
    runner.expect_success(&["detect", main.to_str().unwrap(), comp.to_str().unwrap()]);

    let missing = runner.fixture().root().join("missing.txt");
    let err = runner.expect_failure(&["detect", missing.to_str().unwrap()]);
    assert!(err.to_string().contains("does not exist"));
}

#[test]
fn test_delimiters_command() {
    let runner = CliTestRunner::new().unwrap();
    runner.expect_success(&["delimiters"]);
    runner.expect_success(&["delimiters", "--format", "json"]);
    runner.expect_failure(&["delimiters", "--format", "yaml"]);
}
