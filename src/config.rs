//! Report configuration: folders, file pairs and delimiter choices

use crate::delimiter::{resolve_delimiter, Delimiter, DelimiterChoice, CUSTOM_CHOICE};
use crate::detect::detect_delimiter;
use crate::discovery::{auto_match, find_files};
use crate::error::{HeaderDiffError, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

/// Editable description of the pairs to compare.
///
/// `headerdiff match --format json` writes one; `headerdiff compare --plan`
/// reads it back.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlanFile {
    /// Per main file settings, keyed by main file name
    #[serde(default)]
    pub files: IndexMap<String, PlanEntry>,
    /// Main files left out of the comparison
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub exclude: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlanEntry {
    /// Comparison file name, `null` to leave the main file unmatched
    pub comparison: Option<String>,
    /// Delimiter choice name; detected when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delimiter: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_delimiter: Option<String>,
}

impl PlanFile {
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let plan = serde_json::from_str(&content)?;
        log::debug!("Loaded plan from {}", path.display());
        Ok(plan)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }
}

/// Matching and delimiter choice for one main file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSelection {
    pub comparison: Option<String>,
    pub delimiter: DelimiterChoice,
}

/// Everything a report run needs. Built once, never mutated.
#[derive(Debug, Clone)]
pub struct ReportConfig {
    pub main_folder: PathBuf,
    pub comp_folder: PathBuf,
    /// Sorted main file names
    pub main_files: Vec<String>,
    /// Sorted comparison file names
    pub comp_files: Vec<String>,
    pub selections: IndexMap<String, FileSelection>,
    /// Delimiter applied to every pair, superseding per-file choices
    pub override_delimiter: Option<Delimiter>,
    pub excluded: BTreeSet<String>,
}

impl ReportConfig {
    /// Comparison file assigned to `main_file`, if it takes part in the report
    pub fn comparison_for(&self, main_file: &str) -> Option<&str> {
        if self.excluded.contains(main_file) {
            return None;
        }
        self.selections
            .get(main_file)
            .and_then(|selection| selection.comparison.as_deref())
    }

    /// Delimiter used to read both headers of the pair led by `main_file`
    pub fn effective_delimiter(&self, main_file: &str) -> Delimiter {
        resolve_delimiter(
            self.override_delimiter.as_ref(),
            self.selections.get(main_file).map(|s| &s.delimiter),
        )
    }

    pub fn main_path(&self, main_file: &str) -> PathBuf {
        self.main_folder.join(main_file)
    }

    pub fn comp_path(&self, comp_file: &str) -> PathBuf {
        self.comp_folder.join(comp_file)
    }

    /// Plan file reproducing this configuration
    pub fn to_plan(&self) -> PlanFile {
        let files = self
            .selections
            .iter()
            .map(|(name, selection)| {
                let entry = PlanEntry {
                    comparison: selection.comparison.clone(),
                    delimiter: Some(selection.delimiter.name().to_string()),
                    custom_delimiter: selection.delimiter.custom_value().map(str::to_string),
                };
                (name.clone(), entry)
            })
            .collect();

        PlanFile {
            files,
            exclude: self.excluded.iter().cloned().collect(),
        }
    }
}

/// Builds a [`ReportConfig`] from two folders plus optional overrides
#[derive(Debug, Clone)]
pub struct ReportConfigBuilder {
    main_folder: PathBuf,
    comp_folder: PathBuf,
    override_choice: Option<DelimiterChoice>,
    plan: Option<PlanFile>,
    exclude: Vec<String>,
}

impl ReportConfigBuilder {
    pub fn new(main_folder: impl Into<PathBuf>, comp_folder: impl Into<PathBuf>) -> Self {
        Self {
            main_folder: main_folder.into(),
            comp_folder: comp_folder.into(),
            override_choice: None,
            plan: None,
            exclude: Vec::new(),
        }
    }

    pub fn override_delimiter(mut self, choice: Option<DelimiterChoice>) -> Self {
        self.override_choice = choice;
        self
    }

    pub fn plan(mut self, plan: Option<PlanFile>) -> Self {
        self.plan = plan;
        self
    }

    pub fn exclude(mut self, files: Vec<String>) -> Self {
        self.exclude = files;
        self
    }

    /// Scan both folders, match files, detect delimiters and apply the plan.
    ///
    /// Both folders are validated before any file is read.
    pub fn build(self) -> Result<ReportConfig> {
        let main_files = find_files(&self.main_folder)?;
        let comp_files = find_files(&self.comp_folder)?;

        let plan = self.plan.unwrap_or_default();
        for (name, entry) in &plan.files {
            if !main_files.contains(name) {
                return Err(HeaderDiffError::config(format!(
                    "Plan refers to unknown main file: {}",
                    name
                )));
            }
            if let Some(comp) = &entry.comparison {
                if !comp_files.contains(comp) {
                    return Err(HeaderDiffError::config(format!(
                        "Plan refers to unknown comparison file: {}",
                        comp
                    )));
                }
            }
        }

        let mut excluded = BTreeSet::new();
        for name in plan.exclude.iter().chain(&self.exclude) {
            if !main_files.contains(name) {
                return Err(HeaderDiffError::config(format!(
                    "Cannot exclude unknown main file: {}",
                    name
                )));
            }
            excluded.insert(name.clone());
        }

        let mut selections = IndexMap::new();
        for main_file in &main_files {
            let entry = plan.files.get(main_file);
            let comparison = match entry {
                Some(entry) => entry.comparison.clone(),
                None => auto_match(main_file, &comp_files),
            };

            let delimiter = match entry.and_then(|e| e.delimiter.as_deref()) {
                Some(name) => plan_choice(main_file, name, entry.and_then(|e| e.custom_delimiter.as_deref()))?,
                None => {
                    let comp_path = comparison.as_ref().map(|c| self.comp_folder.join(c));
                    let detected = detect_delimiter(&self.main_folder.join(main_file), comp_path.as_deref());
                    DelimiterChoice::from_delimiter(&detected)
                }
            };

            log::debug!(
                "{} -> {} ({})",
                main_file,
                comparison.as_deref().unwrap_or("<none>"),
                delimiter.name()
            );
            selections.insert(main_file.clone(), FileSelection { comparison, delimiter });
        }

        let override_delimiter = self.override_choice.as_ref().and_then(DelimiterChoice::as_override);
        if let Some(delim) = &override_delimiter {
            log::info!("Delimiter override in effect: {}", delim);
        }

        Ok(ReportConfig {
            main_folder: self.main_folder,
            comp_folder: self.comp_folder,
            main_files,
            comp_files,
            selections,
            override_delimiter,
            excluded,
        })
    }
}

/// Delimiter choice of a plan entry. A `Custom` entry without a literal
/// falls back to whitespace for that file only.
fn plan_choice(main_file: &str, name: &str, custom: Option<&str>) -> Result<DelimiterChoice> {
    if name.eq_ignore_ascii_case(CUSTOM_CHOICE) && custom.map_or(true, str::is_empty) {
        log::warn!("No custom delimiter given for {}, splitting on whitespace", main_file);
        return Ok(DelimiterChoice::None);
    }
    DelimiterChoice::parse(name, custom)
}
