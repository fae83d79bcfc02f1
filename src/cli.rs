//! Command-line interface for headerdiff

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "headerdiff")]
#[command(about = "Compare the header rows of text/CSV files across two folders")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compare headers of matched files and save the report
    Compare {
        /// Folder holding the reference files
        main_folder: PathBuf,

        /// Folder holding the files to check
        comp_folder: PathBuf,

        /// Report destination
        #[arg(short, long)]
        output: PathBuf,

        /// Delimiter applied to every pair: a name such as "Pipe (|)", an
        /// alias such as "pipe", a literal, "None" or "Custom"
        #[arg(long)]
        delimiter: Option<String>,

        /// Literal used with --delimiter Custom (implies it when given alone)
        #[arg(long)]
        custom_delimiter: Option<String>,

        /// JSON plan with manual matches and per-file delimiters
        #[arg(long)]
        plan: Option<PathBuf>,

        /// Main files to leave out of the comparison
        #[arg(long)]
        exclude: Vec<String>,

        /// Report format: "text" or "json"
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// Show how files would be matched and which delimiters were detected
    Match {
        /// Folder holding the reference files
        main_folder: PathBuf,

        /// Folder holding the files to check
        comp_folder: PathBuf,

        /// Output format: "pretty", "json" (a plan file)
        #[arg(long, default_value = "pretty")]
        format: String,

        /// Also write the plan to this file
        #[arg(long)]
        save_plan: Option<PathBuf>,
    },

    /// Detect the delimiter of a file, optionally against a comparison file
    Detect {
        /// File whose header is split
        main_file: PathBuf,

        /// File whose header the split should line up with
        comp_file: Option<PathBuf>,
    },

    /// List the known delimiters
    Delimiters {
        /// Output format: "pretty", "json"
        #[arg(long, default_value = "pretty")]
        format: String,
    },
}

/// Parse report format string
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportFormat {
    Text,
    Json,
}

impl ReportFormat {
    pub fn parse(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(format!("Invalid report format: {}. Use 'text' or 'json'", s)),
        }
    }
}

/// Parse output format string
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputFormat {
    Pretty,
    Json,
}

impl OutputFormat {
    pub fn parse(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "pretty" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            _ => Err(format!("Invalid output format: {}. Use 'pretty' or 'json'", s)),
        }
    }
}
