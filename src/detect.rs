//! Delimiter auto-detection for a pair of files

use crate::delimiter::Delimiter;
use crate::header::{column_key, read_first_line};
use std::collections::HashSet;
use std::path::Path;

/// Outcome of scoring one candidate delimiter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateScore {
    pub delimiter: Delimiter,
    pub score: usize,
    pub main_columns: usize,
}

/// Pick the delimiter that best splits the headers of `main_path` and,
/// when given and present on disk, `comp_path`.
///
/// With a comparison file the score of a candidate is the number of column
/// names (normalized, case-insensitive) both headers share; without one it is
/// the number of main columns. Returns [`Delimiter::Whitespace`] when no
/// candidate splits or when either file cannot be read.
pub fn detect_delimiter(main_path: &Path, comp_path: Option<&Path>) -> Delimiter {
    let main_line = match read_first_line(main_path) {
        Ok(line) => line,
        Err(e) => {
            log::debug!("Delimiter detection skipped for {}: {}", main_path.display(), e);
            return Delimiter::Whitespace;
        }
    };

    let comp_line = match comp_path.filter(|p| p.exists()) {
        Some(path) => match read_first_line(path) {
            Ok(line) => Some(line),
            Err(e) => {
                log::debug!("Delimiter detection skipped for {}: {}", path.display(), e);
                return Delimiter::Whitespace;
            }
        },
        None => None,
    };

    let detected = detect_from_lines(&main_line, comp_line.as_deref());
    log::debug!("Detected delimiter for {}: {}", main_path.display(), detected);
    detected
}

/// Detection over already-read header lines.
pub fn detect_from_lines(main_line: &str, comp_line: Option<&str>) -> Delimiter {
    let mut best: Option<CandidateScore> = None;

    for candidate in Delimiter::candidates() {
        let Some(scored) = score_candidate(&candidate, main_line, comp_line) else {
            continue;
        };

        let wins = match &best {
            None => true,
            Some(current) if scored.score > current.score => true,
            Some(current) if scored.score == current.score => {
                scored.main_columns > resplit_count(&current.delimiter, main_line)
            }
            Some(_) => false,
        };

        if wins {
            best = Some(scored);
        }
    }

    best.map(|b| b.delimiter).unwrap_or(Delimiter::Whitespace)
}

/// Score one candidate, or `None` when it yields no columns on a side that
/// has a header.
pub fn score_candidate(candidate: &Delimiter, main_line: &str, comp_line: Option<&str>) -> Option<CandidateScore> {
    let main_keys: Vec<String> = candidate.split(main_line).into_iter().map(column_key).collect();
    if main_keys.is_empty() {
        return None;
    }

    let score = match comp_line {
        Some(line) => {
            let comp_keys: HashSet<String> = candidate.split(line).into_iter().map(column_key).collect();
            if comp_keys.is_empty() {
                return None;
            }
            let main_set: HashSet<&String> = main_keys.iter().collect();
            main_set.into_iter().filter(|key| comp_keys.contains(*key)).count()
        }
        None => main_keys.len(),
    };

    Some(CandidateScore {
        delimiter: candidate.clone(),
        score,
        main_columns: main_keys.len(),
    })
}

/// Column count of the current best, recomputed from the raw line.
/// A whitespace best counts as zero, so any later tie with columns replaces it.
fn resplit_count(best: &Delimiter, main_line: &str) -> usize {
    match best {
        Delimiter::Whitespace => 0,
        literal => literal.split(main_line).len(),
    }
}
