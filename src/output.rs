//! Output formatting utilities

use crate::config::ReportConfig;
use crate::delimiter::{Delimiter, DELIMITERS, WHITESPACE_CHOICE};
use crate::error::Result;
use crate::report::ReportSummary;
use std::path::Path;

/// Pretty printer for headerdiff output
pub struct PrettyPrinter;

impl PrettyPrinter {
    /// Print the file matching table produced by folder scanning
    pub fn print_match_table(config: &ReportConfig) {
        if config.main_files.is_empty() {
            println!("No .txt or .csv files found in {}", config.main_folder.display());
            return;
        }

        println!("📂 {} → {}", config.main_folder.display(), config.comp_folder.display());
        let last = config.main_files.len() - 1;
        for (i, main_file) in config.main_files.iter().enumerate() {
            let prefix = if i == last { "└─" } else { "├─" };
            let comparison = config.comparison_for(main_file).unwrap_or("<unmatched>");
            let note = if config.excluded.contains(main_file) { " (excluded)" } else { "" };
            println!(
                "{} {} → {} [{}]{}",
                prefix,
                main_file,
                comparison,
                config.effective_delimiter(main_file),
                note
            );
        }
    }

    /// Print the named delimiter table
    pub fn print_delimiters() {
        println!("🔣 Delimiters:");
        println!("├─ {}: split on whitespace", WHITESPACE_CHOICE);
        println!("├─ Custom: any literal given with --custom-delimiter");
        for (i, (name, value)) in DELIMITERS.iter().enumerate() {
            let prefix = if i == DELIMITERS.len() - 1 { "└─" } else { "├─" };
            println!("{} {}: {:?}", prefix, name, value);
        }
    }

    /// Print a detected delimiter
    pub fn print_detected(main: &Path, comp: Option<&Path>, delimiter: &Delimiter) {
        match comp {
            Some(comp) => println!("🔍 {} vs {}", main.display(), comp.display()),
            None => println!("🔍 {}", main.display()),
        }
        println!("└─ Delimiter: {}", delimiter);
    }

    /// Print the summary shown after a report is saved
    pub fn print_summary(summary: &ReportSummary, report_path: &Path) {
        println!("✅ Report saved to: {}", report_path.display());
        println!("├─ Pairs compared: {}", summary.compared);
        println!("├─ Identical headers: {}", summary.identical);
        println!("├─ With differences: {}", summary.with_differences);
        println!("├─ Failed to read: {}", summary.failed);
        println!("├─ Unmatched main files: {}", summary.unmatched_main);
        println!("└─ Unmatched comparison files: {}", summary.unmatched_comparison);
    }
}

/// JSON formatter for machine-readable output
pub struct JsonFormatter;

impl JsonFormatter {
    /// Format any serializable data as JSON
    pub fn format<T: serde::Serialize + ?Sized>(data: &T) -> Result<String> {
        Ok(serde_json::to_string_pretty(data)?)
    }

    /// Delimiter table as a name → literal object
    pub fn format_delimiters() -> Result<String> {
        let table: serde_json::Map<String, serde_json::Value> = DELIMITERS
            .iter()
            .map(|(name, value)| (name.to_string(), serde_json::Value::from(*value)))
            .collect();
        Self::format(&table)
    }
}
