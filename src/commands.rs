//! Command implementations for headerdiff CLI

use crate::cli::{Commands, OutputFormat, ReportFormat};
use crate::config::{PlanFile, ReportConfigBuilder};
use crate::delimiter::{DelimiterChoice, CUSTOM_CHOICE};
use crate::detect::detect_delimiter;
use crate::error::{HeaderDiffError, Result};
use crate::output::{JsonFormatter, PrettyPrinter};
use crate::progress::ProgressReporter;
use crate::report::{build_report, write_report};
use std::path::Path;

/// Execute a command
pub fn execute_command(command: Commands) -> Result<()> {
    match command {
        Commands::Compare {
            main_folder,
            comp_folder,
            output,
            delimiter,
            custom_delimiter,
            plan,
            exclude,
            format,
        } => compare_command(
            &main_folder,
            &comp_folder,
            &output,
            delimiter.as_deref(),
            custom_delimiter.as_deref(),
            plan.as_deref(),
            exclude,
            &format,
        ),
        Commands::Match {
            main_folder,
            comp_folder,
            format,
            save_plan,
        } => match_command(&main_folder, &comp_folder, &format, save_plan.as_deref()),
        Commands::Detect { main_file, comp_file } => detect_command(&main_file, comp_file.as_deref()),
        Commands::Delimiters { format } => delimiters_command(&format),
    }
}

/// Turn the override flags into a delimiter choice
pub fn override_choice(delimiter: Option<&str>, custom: Option<&str>) -> Result<Option<DelimiterChoice>> {
    match (delimiter, custom) {
        (Some(name), custom) => DelimiterChoice::parse(name, custom).map(Some),
        (None, Some(custom)) => DelimiterChoice::parse(CUSTOM_CHOICE, Some(custom)).map(Some),
        (None, None) => Ok(None),
    }
}

/// Generate and save the header comparison report
#[allow(clippy::too_many_arguments)]
fn compare_command(
    main_folder: &Path,
    comp_folder: &Path,
    output: &Path,
    delimiter: Option<&str>,
    custom_delimiter: Option<&str>,
    plan_path: Option<&Path>,
    exclude: Vec<String>,
    format: &str,
) -> Result<()> {
    let format = ReportFormat::parse(format).map_err(HeaderDiffError::invalid_input)?;
    if output.as_os_str().is_empty() {
        return Err(HeaderDiffError::invalid_input("Report path cannot be empty"));
    }

    let override_delim = override_choice(delimiter, custom_delimiter)?;
    let plan = plan_path.map(PlanFile::load).transpose()?;

    let config = ReportConfigBuilder::new(main_folder, comp_folder)
        .override_delimiter(override_delim)
        .plan(plan)
        .exclude(exclude)
        .build()?;

    let pair_count = config
        .main_files
        .iter()
        .filter(|f| config.comparison_for(f).is_some())
        .count();
    log::info!(
        "Comparing {} file pairs ({} main, {} comparison files)",
        pair_count,
        config.main_files.len(),
        config.comp_files.len()
    );

    let mut progress = if format == ReportFormat::Json {
        ProgressReporter::new_minimal()
    } else {
        ProgressReporter::new_for_pairs(pair_count as u64)
    };
    let report = build_report(&config, &progress);
    progress.finish("Headers compared");

    let content = match format {
        ReportFormat::Text => report.render_text(),
        ReportFormat::Json => JsonFormatter::format(&report)?,
    };
    write_report(output, &content)?;

    PrettyPrinter::print_summary(&report.summary(), output);
    Ok(())
}

/// Show the automatic matching and detected delimiters
fn match_command(main_folder: &Path, comp_folder: &Path, format: &str, save_plan: Option<&Path>) -> Result<()> {
    let format = OutputFormat::parse(format).map_err(HeaderDiffError::invalid_input)?;
    let config = ReportConfigBuilder::new(main_folder, comp_folder).build()?;
    let plan = config.to_plan();

    match format {
        OutputFormat::Pretty => PrettyPrinter::print_match_table(&config),
        OutputFormat::Json => println!("{}", JsonFormatter::format(&plan)?),
    }

    if let Some(path) = save_plan {
        plan.save(path)?;
        log::info!("Plan saved to {}", path.display());
    }

    Ok(())
}

/// Detect and print the delimiter of one file
fn detect_command(main_file: &Path, comp_file: Option<&Path>) -> Result<()> {
    if !main_file.is_file() {
        return Err(HeaderDiffError::invalid_input(format!(
            "Input file does not exist: {}",
            main_file.display()
        )));
    }

    let delimiter = detect_delimiter(main_file, comp_file);
    PrettyPrinter::print_detected(main_file, comp_file, &delimiter);
    Ok(())
}

/// List the delimiter table
fn delimiters_command(format: &str) -> Result<()> {
    match OutputFormat::parse(format).map_err(HeaderDiffError::invalid_input)? {
        OutputFormat::Pretty => PrettyPrinter::print_delimiters(),
        OutputFormat::Json => println!("{}", JsonFormatter::format_delimiters()?),
    }
    Ok(())
}
