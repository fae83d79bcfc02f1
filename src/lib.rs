//! # headerdiff
//!
//! Compares the header row of text/CSV files across two folders and reports
//! missing, extra, reordered and case-differing columns, whitespace issues
//! and files left unmatched.

pub mod cli;
pub mod error;
pub mod delimiter;
pub mod header;
pub mod detect;
pub mod compare;
pub mod discovery;
pub mod config;
pub mod report;
pub mod commands;
pub mod output;
pub mod progress;

pub use error::{HeaderDiffError, Result};
pub use delimiter::{Delimiter, DelimiterChoice};
pub use header::read_header;
pub use detect::detect_delimiter;
pub use compare::{compare_headers, HeaderComparison};
pub use config::{ReportConfig, ReportConfigBuilder};
pub use report::{build_report, generate_report};
