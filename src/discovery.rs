//! Folder scanning and main-to-comparison file matching

use crate::error::{HeaderDiffError, Result};
use std::path::Path;
use walkdir::WalkDir;

/// Extensions (lowercase) of files taken into account
pub const HEADER_FILE_EXTENSIONS: &[&str] = &[".txt", ".csv"];

/// Minimum name similarity for an automatic match
pub const MATCH_CUTOFF: f32 = 0.6;

/// Fail with `InvalidFolder` unless `folder` is an existing directory.
pub fn ensure_folder(folder: &Path) -> Result<()> {
    if folder.is_dir() {
        Ok(())
    } else {
        Err(HeaderDiffError::invalid_folder(folder))
    }
}

/// List the `.txt`/`.csv` files directly inside `folder`, sorted by name.
pub fn find_files(folder: &Path) -> Result<Vec<String>> {
    ensure_folder(folder)?;

    let mut files = Vec::new();
    for entry in WalkDir::new(folder).min_depth(1).max_depth(1) {
        let entry = entry?;
        if !entry.path().is_file() {
            continue;
        }

        let Some(name) = entry.file_name().to_str() else {
            log::warn!("Skipping non UTF-8 file name: {}", entry.path().display());
            continue;
        };

        let lowered = name.to_lowercase();
        if HEADER_FILE_EXTENSIONS.iter().any(|ext| lowered.ends_with(ext)) {
            files.push(name.to_string());
        }
    }

    files.sort();
    log::debug!("Found {} header files in {}", files.len(), folder.display());
    Ok(files)
}

/// Closest comparison file for `main_file` by case-insensitive name similarity,
/// returned in its original casing.
pub fn auto_match(main_file: &str, comp_files: &[String]) -> Option<String> {
    let lowered: Vec<String> = comp_files.iter().map(|f| f.to_lowercase()).collect();
    let candidates: Vec<&str> = lowered.iter().map(String::as_str).collect();

    let best = similar::get_close_matches(main_file.to_lowercase().as_str(), &candidates, 1, MATCH_CUTOFF)
        .into_iter()
        .next()?;

    let index = lowered.iter().position(|f| f == best)?;
    Some(comp_files[index].clone())
}
