//! Report assembly: one block per file pair plus unmatched file listings

use crate::compare::{block_heading, compare_headers, equals_rule, HeaderComparison};
use crate::config::ReportConfig;
use crate::error::{HeaderDiffError, Result};
use crate::header::read_header;
use crate::progress::ProgressReporter;
use anyhow::Context;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

/// What happened to one file pair
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum PairOutcome {
    Compared {
        comparison: HeaderComparison,
    },
    Failed {
        #[serde(skip_serializing_if = "Option::is_none")]
        main_error: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        comparison_error: Option<String>,
    },
}

#[derive(Debug, Clone, Serialize)]
pub struct PairReport {
    pub main_file: String,
    pub comparison_file: String,
    pub delimiter: String,
    #[serde(flatten)]
    pub outcome: PairOutcome,
}

impl PairReport {
    pub fn render(&self) -> String {
        match &self.outcome {
            PairOutcome::Compared { comparison } => comparison.render(&self.main_file, &self.comparison_file),
            PairOutcome::Failed {
                main_error,
                comparison_error,
            } => {
                let mut out = block_heading(&self.main_file, &self.comparison_file);
                if let Some(message) = main_error {
                    out.push(format!("In Main: {}", message));
                }
                if let Some(message) = comparison_error {
                    out.push(format!("In Comparison: {}", message));
                }
                out.push(equals_rule());
                out.push(String::new());
                out.join("\n")
            }
        }
    }
}

/// Full result of a report run
#[derive(Debug, Clone, Serialize)]
pub struct HeaderReport {
    pub generated_at: DateTime<Utc>,
    pub pairs: Vec<PairReport>,
    pub unmatched_main: Vec<String>,
    pub unmatched_comparison: Vec<String>,
}

/// Counts shown after a run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ReportSummary {
    pub compared: usize,
    pub identical: usize,
    pub with_differences: usize,
    pub failed: usize,
    pub unmatched_main: usize,
    pub unmatched_comparison: usize,
}

impl HeaderReport {
    /// Plain-text report: pair blocks in main-file order, then unmatched files.
    pub fn render_text(&self) -> String {
        let mut blocks: Vec<String> = self.pairs.iter().map(PairReport::render).collect();

        if !self.unmatched_main.is_empty() {
            blocks.push(unmatched_block("Unmatched Main Files:", &self.unmatched_main));
        }
        if !self.unmatched_comparison.is_empty() {
            blocks.push(unmatched_block("Unmatched Comparison Files:", &self.unmatched_comparison));
        }

        blocks.join("\n")
    }

    pub fn summary(&self) -> ReportSummary {
        let mut summary = ReportSummary {
            unmatched_main: self.unmatched_main.len(),
            unmatched_comparison: self.unmatched_comparison.len(),
            ..Default::default()
        };

        for pair in &self.pairs {
            summary.compared += 1;
            match &pair.outcome {
                PairOutcome::Compared { comparison } if comparison.has_differences() => {
                    summary.with_differences += 1
                }
                PairOutcome::Compared { .. } => summary.identical += 1,
                PairOutcome::Failed { .. } => summary.failed += 1,
            }
        }

        summary
    }
}

fn unmatched_block(title: &str, files: &[String]) -> String {
    let items: Vec<String> = files.iter().map(|f| format!(" - {}", f)).collect();
    format!("{}\n{}\n{}\n{}\n", equals_rule(), title, items.join("\n"), equals_rule())
}

/// Compare every matched pair of the configuration.
///
/// A pair that cannot be read is recorded as failed and the run continues.
pub fn build_report(config: &ReportConfig, progress: &ProgressReporter) -> HeaderReport {
    let mut unmatched_main: BTreeSet<&str> = config.main_files.iter().map(String::as_str).collect();
    let mut unmatched_comp: BTreeSet<&str> = config.comp_files.iter().map(String::as_str).collect();
    let mut pairs = Vec::new();

    for main_file in &config.main_files {
        let Some(comp_file) = config.comparison_for(main_file) else {
            log::debug!("No comparison file for {}", main_file);
            continue;
        };

        let delimiter = config.effective_delimiter(main_file);
        let main_header = read_header(&config.main_path(main_file), &delimiter);
        let comp_header = read_header(&config.comp_path(comp_file), &delimiter);

        let outcome = match (main_header, comp_header) {
            (Ok(main_columns), Ok(comp_columns)) => PairOutcome::Compared {
                comparison: compare_headers(&main_columns, &comp_columns),
            },
            (main_result, comp_result) => {
                let main_error = main_result.err().map(|e| pair_error(main_file, &e));
                let comparison_error = comp_result.err().map(|e| pair_error(comp_file, &e));
                PairOutcome::Failed {
                    main_error,
                    comparison_error,
                }
            }
        };

        pairs.push(PairReport {
            main_file: main_file.clone(),
            comparison_file: comp_file.to_string(),
            delimiter: delimiter.to_string(),
            outcome,
        });

        unmatched_main.remove(main_file.as_str());
        unmatched_comp.remove(comp_file);
        progress.pair_done(main_file);
    }

    HeaderReport {
        generated_at: Utc::now(),
        pairs,
        unmatched_main: unmatched_main.into_iter().map(str::to_string).collect(),
        unmatched_comparison: unmatched_comp.into_iter().map(str::to_string).collect(),
    }
}

fn pair_error(file: &str, error: &HeaderDiffError) -> String {
    log::warn!("Could not read header of {}: {}", file, error);
    error.to_string()
}

/// Text report for a configuration, without progress output.
pub fn generate_report(config: &ReportConfig) -> String {
    build_report(config, &ProgressReporter::new_minimal()).render_text()
}

/// Write a finished report in one go.
pub fn write_report(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).with_context(|| format!("Failed to write report to {}", path.display()))?;
    log::info!("Report written to {}", path.display());
    Ok(())
}
