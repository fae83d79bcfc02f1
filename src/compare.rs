//! Header comparison and report block rendering

use crate::header::column_key;
use serde::Serialize;
use std::collections::{HashMap, HashSet};
use std::fmt;

/// Width of the separator rules in rendered reports
pub const RULE_WIDTH: usize = 80;

pub fn dash_rule() -> String {
    "-".repeat(RULE_WIDTH)
}

pub fn equals_rule() -> String {
    "=".repeat(RULE_WIDTH)
}

/// Which header a finding belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Side {
    Main,
    Comparison,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Main => write!(f, "Main"),
            Side::Comparison => write!(f, "Comparison"),
        }
    }
}

/// A main column found at another position in the comparison header
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReorderedColumn {
    pub name: String,
    /// 1-based
    pub main_position: usize,
    /// 1-based, first matching comparison column
    pub comp_position: usize,
}

/// Leading/trailing spaces around a column name
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WhitespaceIssue {
    pub name: String,
    pub leading: usize,
    pub trailing: usize,
    pub side: Side,
}

/// Same column name, different characters (usually casing)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CaseDifference {
    pub main: String,
    pub comparison: String,
}

/// Result of comparing two headers. Names are always the original strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeaderComparison {
    pub exact_match: bool,
    pub missing: Vec<String>,
    pub extra: Vec<String>,
    pub reordered: Vec<ReorderedColumn>,
    pub whitespace_issues: Vec<WhitespaceIssue>,
    pub case_differences: Vec<CaseDifference>,
}

/// Compare a main header against a comparison header.
pub fn compare_headers<S: AsRef<str>>(main_columns: &[S], comp_columns: &[S]) -> HeaderComparison {
    let main: Vec<&str> = main_columns.iter().map(AsRef::as_ref).collect();
    let comp: Vec<&str> = comp_columns.iter().map(AsRef::as_ref).collect();

    let main_keys: Vec<String> = main.iter().map(|c| column_key(c)).collect();
    let comp_keys: Vec<String> = comp.iter().map(|c| column_key(c)).collect();

    let main_key_set: HashSet<&str> = main_keys.iter().map(String::as_str).collect();
    let mut comp_first: HashMap<&str, usize> = HashMap::new();
    for (index, key) in comp_keys.iter().enumerate() {
        comp_first.entry(key.as_str()).or_insert(index);
    }

    let missing = main
        .iter()
        .zip(&main_keys)
        .filter(|(_, key)| !comp_first.contains_key(key.as_str()))
        .map(|(name, _)| name.to_string())
        .collect();

    let extra = comp
        .iter()
        .zip(&comp_keys)
        .filter(|(_, key)| !main_key_set.contains(key.as_str()))
        .map(|(name, _)| name.to_string())
        .collect();

    let reordered = main_keys
        .iter()
        .enumerate()
        .filter_map(|(index, key)| {
            let found = *comp_first.get(key.as_str())?;
            (found != index).then(|| ReorderedColumn {
                name: main[index].to_string(),
                main_position: index + 1,
                comp_position: found + 1,
            })
        })
        .collect();

    let mut whitespace_issues = Vec::new();
    let mut main_padded = HashSet::new();
    let mut comp_padded = HashSet::new();
    for (side, columns, padded) in [
        (Side::Main, &main, &mut main_padded),
        (Side::Comparison, &comp, &mut comp_padded),
    ] {
        for column in columns.iter() {
            let (leading, trailing) = space_padding(column);
            if leading > 0 || trailing > 0 {
                whitespace_issues.push(WhitespaceIssue {
                    name: column.to_string(),
                    leading,
                    trailing,
                    side,
                });
                padded.insert(column.trim().to_lowercase());
            }
        }
    }

    let case_differences = main_keys
        .iter()
        .enumerate()
        .filter_map(|(index, key)| {
            let found = *comp_first.get(key.as_str())?;
            let differs = main[index] != comp[found];
            let padded = main_padded.contains(key) || comp_padded.contains(key);
            (differs && !padded).then(|| CaseDifference {
                main: main[index].to_string(),
                comparison: comp[found].to_string(),
            })
        })
        .collect();

    let exact_match = main.len() == comp.len()
        && main
            .iter()
            .zip(&comp)
            .all(|(a, b)| a.trim_start_matches('\u{feff}') == b.trim_start_matches('\u{feff}'))
        && whitespace_issues.is_empty();

    HeaderComparison {
        exact_match,
        missing,
        extra,
        reordered,
        whitespace_issues,
        case_differences,
    }
}

/// Count of plain spaces at the start and end of a column name
fn space_padding(column: &str) -> (usize, usize) {
    let leading = column.len() - column.trim_start_matches(' ').len();
    let trailing = column.len() - column.trim_end_matches(' ').len();
    (leading, trailing)
}

impl HeaderComparison {
    /// Whether anything in the report block points at a difference
    pub fn has_differences(&self) -> bool {
        !self.exact_match
    }

    /// Render the report block for one file pair.
    pub fn render(&self, main_label: &str, comp_label: &str) -> String {
        let mut out = block_heading(main_label, comp_label);

        if self.exact_match {
            out.push("Headers match exactly.".to_string());
        }

        if !self.whitespace_issues.is_empty() {
            out.push("\nLeading/Trailing space issues:".to_string());
            out.extend(self.whitespace_issues.iter().map(|issue| {
                format!(
                    " - [{}] '{}' Lead:{} Trail:{}",
                    issue.side, issue.name, issue.leading, issue.trailing
                )
            }));
        }

        if !self.exact_match {
            if !self.missing.is_empty() {
                out.push("\nMissing in Comparison:".to_string());
                out.extend(self.missing.iter().map(|c| format!(" - {}", c)));
            }
            if !self.extra.is_empty() {
                out.push("\nExtra in Comparison:".to_string());
                out.extend(self.extra.iter().map(|c| format!(" - {}", c)));
            }
            if !self.reordered.is_empty() {
                out.push("\nReordered columns:".to_string());
                out.extend(self.reordered.iter().map(|r| {
                    format!(" - '{}' Main:{} Comp:{}", r.name, r.main_position, r.comp_position)
                }));
            }
            if !self.case_differences.is_empty() {
                out.push("\nCase differences:".to_string());
                out.extend(
                    self.case_differences
                        .iter()
                        .map(|d| format!(" - Main:'{}' vs Comp:'{}'", d.main, d.comparison)),
                );
            }
        }

        out.push(equals_rule());
        out.push(String::new());
        out.join("\n")
    }
}

/// Opening lines shared by comparison and error blocks
pub fn block_heading(main_label: &str, comp_label: &str) -> Vec<String> {
    vec![
        dash_rule(),
        format!("Main File: {}", main_label),
        format!("Comparison File: {}", comp_label),
        dash_rule(),
    ]
}
