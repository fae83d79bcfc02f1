//! Progress reporting utilities

use indicatif::{ProgressBar, ProgressStyle};

/// Progress reporter for report generation
#[derive(Debug)]
pub struct ProgressReporter {
    pub pairs_pb: Option<ProgressBar>,
}

impl ProgressReporter {
    /// Create progress reporter over a known number of file pairs
    pub fn new_for_pairs(total: u64) -> Self {
        Self {
            pairs_pb: Some(create_progress_bar(total, "Comparing headers")),
        }
    }

    /// Create minimal progress reporter (no progress bars)
    pub fn new_minimal() -> Self {
        Self { pairs_pb: None }
    }

    /// Advance by one pair
    pub fn pair_done(&self, main_file: &str) {
        if let Some(pb) = &self.pairs_pb {
            pb.set_message(main_file.to_string());
            pb.inc(1);
        }
    }

    pub fn finish(&mut self, message: &str) {
        if let Some(pb) = self.pairs_pb.take() {
            pb.finish_with_message(message.to_string());
        }
    }
}

impl Drop for ProgressReporter {
    fn drop(&mut self) {
        if let Some(pb) = self.pairs_pb.take() {
            pb.finish_and_clear();
        }
    }
}

/// Create a progress bar with known total
fn create_progress_bar(total: u64, message: &str) -> ProgressBar {
    let pb = ProgressBar::new(total);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos:>5}/{len:5} {msg}")
            .expect("Invalid progress template")
            .progress_chars("#>-"),
    );
    pb.set_message(message.to_string());
    pb
}
