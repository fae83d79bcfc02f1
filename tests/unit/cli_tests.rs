//! Unit tests for CLI argument parsing and validation

use clap::Parser;
use headerdiff::cli::{Cli, Commands, OutputFormat, ReportFormat};

#[test]
fn test_cli_compare_command() {
    let cli = Cli::try_parse_from(&["headerdiff", "compare", "main", "comp", "--output", "report.txt"]).unwrap();
    match cli.command {
        Commands::Compare {
            main_folder,
            comp_folder,
            output,
            delimiter,
            custom_delimiter,
            plan,
            exclude,
            format,
        } => {
            assert_eq!(main_folder.to_str().unwrap(), "main");
            assert_eq!(comp_folder.to_str().unwrap(), "comp");
            assert_eq!(output.to_str().unwrap(), "report.txt");
            assert!(delimiter.is_none());
            assert!(custom_delimiter.is_none());
            assert!(plan.is_none());
            assert!(exclude.is_empty());
            assert_eq!(format, "text");
        }
        _ => panic!("Expected Compare command"),
    }
}

#[test]
fn test_cli_compare_command_with_options() {
    let cli = Cli::try_parse_from(&[
        "headerdiff", "compare", "main", "comp",
        "-o", "report.json",
        "--delimiter", "Custom",
        "--custom-delimiter", "##",
        "--plan", "plan.json",
        "--exclude", "a.csv",
        "--exclude", "b.txt",
        "--format", "json",
    ])
    .unwrap();

    match cli.command {
        Commands::Compare {
            output,
            delimiter,
            custom_delimiter,
            plan,
            exclude,
            format,
            ..
        } => {
            assert_eq!(output.to_str().unwrap(), "report.json");
            assert_eq!(delimiter.as_deref(), Some("Custom"));
            assert_eq!(custom_delimiter.as_deref(), Some("##"));
            assert_eq!(plan.unwrap().to_str().unwrap(), "plan.json");
            assert_eq!(exclude, vec!["a.csv", "b.txt"]);
            assert_eq!(format, "json");
        }
        _ => panic!("Expected Compare command"),
    }
}

#[test]
fn test_cli_compare_requires_output() {
    assert!(Cli::try_parse_from(&["headerdiff", "compare", "main", "comp"]).is_err());
}

#[test]
fn test_cli_match_command() {
    let cli = Cli::try_parse_from(&["headerdiff", "match", "main", "comp", "--save-plan", "plan.json"]).unwrap();
    match cli.command {
        Commands::Match {
            main_folder,
            comp_folder,
            format,
            save_plan,
        } => {
            assert_eq!(main_folder.to_str().unwrap(), "main");
            assert_eq!(comp_folder.to_str().unwrap(), "comp");
            assert_eq!(format, "pretty");
            assert_eq!(save_plan.unwrap().to_str().unwrap(), "plan.json");
        }
        _ => panic!("Expected Match command"),
    }
}

#[test]
fn test_cli_detect_command() {
    let cli = Cli::try_parse_from(&["headerdiff", "detect", "a.csv"]).unwrap();
    match cli.command {
        Commands::Detect { main_file, comp_file } => {
            assert_eq!(main_file.to_str().unwrap(), "a.csv");
            assert!(comp_file.is_none());
        }
        _ => panic!("Expected Detect command"),
    }

    let cli = Cli::try_parse_from(&["headerdiff", "detect", "a.csv", "b.csv"]).unwrap();
    match cli.command {
        Commands::Detect { comp_file, .. } => assert_eq!(comp_file.unwrap().to_str().unwrap(), "b.csv"),
        _ => panic!("Expected Detect command"),
    }
}

#[test]
fn test_cli_delimiters_command() {
    let cli = Cli::try_parse_from(&["headerdiff", "delimiters", "--format", "json"]).unwrap();
    match cli.command {
        Commands::Delimiters { format } => assert_eq!(format, "json"),
        _ => panic!("Expected Delimiters command"),
    }
}

#[test]
fn test_cli_global_verbose() {
    let cli = Cli::try_parse_from(&["headerdiff", "delimiters", "--verbose"]).unwrap();
    assert!(cli.verbose);

    let cli = Cli::try_parse_from(&["headerdiff", "-v", "delimiters"]).unwrap();
    assert!(cli.verbose);
}

#[test]
fn test_cli_invalid_subcommand() {
    assert!(Cli::try_parse_from(&["headerdiff", "frobnicate"]).is_err());
}

#[test]
fn test_format_parsers() {
    assert_eq!(ReportFormat::parse("Text"), Ok(ReportFormat::Text));
    assert!(ReportFormat::parse("pretty").is_err());
    assert_eq!(OutputFormat::parse("JSON"), Ok(OutputFormat::Json));
    assert!(OutputFormat::parse("text").is_err());
}
