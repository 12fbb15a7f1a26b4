//! Normalized coverage model
//!
//! The parser produces a [`CoverageModel`] tree and the Cobertura formatter
//! reads it. Packages, classes and methods keep the order in which they were
//! first seen in the tracefile; line records are keyed by line number and
//! therefore always iterate in ascending order.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::rate::format_rate;

/// Line and branch counters shared by classes, packages and the summary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Totals {
    /// Number of instrumented lines
    pub lines_total: u64,
    /// Number of lines hit at least once
    pub lines_covered: u64,
    /// Number of branches
    pub branches_total: u64,
    /// Number of branches taken at least once
    pub branches_covered: u64,
}

impl Totals {
    /// Add another set of counters to this one.
    pub fn accumulate(&mut self, other: &Self) {
        self.lines_total = self.lines_total.saturating_add(other.lines_total);
        self.lines_covered = self.lines_covered.saturating_add(other.lines_covered);
        self.branches_total = self.branches_total.saturating_add(other.branches_total);
        self.branches_covered = self.branches_covered.saturating_add(other.branches_covered);
    }

    /// Line rate string for these counters
    #[must_use]
    pub fn line_rate(&self) -> String {
        format_rate(self.lines_total, self.lines_covered)
    }

    /// Branch rate string for these counters
    #[must_use]
    pub fn branch_rate(&self) -> String {
        format_rate(self.branches_total, self.branches_covered)
    }
}

/// Execution data for one source line
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineRecord {
    /// Whether any `BRDA` record referenced this line
    #[serde(rename = "branch")]
    pub is_branch: bool,
    /// Execution count (0 when uncovered or unreadable)
    pub hits: u64,
    /// Branches recorded on this line
    pub branches_total: u64,
    /// Branches taken on this line
    pub branches_covered: u64,
}

impl LineRecord {
    /// Cobertura `condition-coverage` value, e.g. `50% (1/2)`.
    ///
    /// Returns `None` for non-branch lines.
    #[must_use]
    pub fn condition_coverage(&self) -> Option<String> {
        if !self.is_branch {
            return None;
        }
        let percent = self
            .branches_covered
            .saturating_mul(100)
            .checked_div(self.branches_total)
            .unwrap_or(0);
        Some(format!(
            "{percent}% ({}/{})",
            self.branches_covered, self.branches_total
        ))
    }
}

/// A function declared with `FN` and/or counted with `FNDA`.
///
/// Both fields stay textual: hit tokens are passed through to the report
/// untouched.
///
/// On the wire a method is the pair `[line, hits]`, with `"0"` standing in
/// for a method no `FN` record declared.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "(String, String)", into = "(String, String)")]
pub struct MethodRecord {
    /// Line from the `FN` record, if one has been seen
    pub declared_at: Option<String>,
    /// Raw hit token from the latest `FNDA` record
    pub hits: String,
}

impl Default for MethodRecord {
    fn default() -> Self {
        Self {
            declared_at: None,
            hits: "0".to_string(),
        }
    }
}

impl MethodRecord {
    /// Record created by an `FN` line
    #[must_use]
    pub fn declared(line: impl Into<String>) -> Self {
        Self {
            declared_at: Some(line.into()),
            hits: "0".to_string(),
        }
    }

    /// Declared line, `"0"` when only `FNDA` records named this method
    #[must_use]
    pub fn line(&self) -> &str {
        self.declared_at.as_deref().unwrap_or("0")
    }
}

impl From<(String, String)> for MethodRecord {
    fn from((line, hits): (String, String)) -> Self {
        Self {
            declared_at: (line != "0").then_some(line),
            hits,
        }
    }
}

impl From<MethodRecord> for (String, String) {
    fn from(method: MethodRecord) -> Self {
        (method.declared_at.unwrap_or_else(|| "0".to_string()), method.hits)
    }
}

/// Line maps are keyed by number in memory and by decimal string in JSON.
mod line_keys {
    use serde::de::Error;
    use serde::{Deserialize, Deserializer};
    use std::collections::BTreeMap;

    use super::LineRecord;

    pub fn deserialize<'de, D>(deserializer: D) -> Result<BTreeMap<u32, LineRecord>, D::Error>
    where
        D: Deserializer<'de>,
    {
        BTreeMap::<String, LineRecord>::deserialize(deserializer)?
            .into_iter()
            .map(|(number, line)| {
                number
                    .parse()
                    .map(|number| (number, line))
                    .map_err(|_| D::Error::custom(format!("invalid line number `{number}`")))
            })
            .collect()
    }
}

/// One source file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Class {
    /// Display name: the relative path with separators replaced by `.`
    pub name: String,
    /// Line records keyed by 1-based line number
    #[serde(deserialize_with = "line_keys::deserialize")]
    pub lines: BTreeMap<u32, LineRecord>,
    /// Methods in first-seen order
    pub methods: IndexMap<String, MethodRecord>,
    /// Counters fixed at `end_of_record`
    #[serde(flatten)]
    pub totals: Totals,
}

impl Class {
    /// Empty class as created by an `SF` record
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

/// Source files grouped by directory
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Package {
    /// Classes keyed by relative file path, in first-seen order
    pub classes: IndexMap<String, Class>,
    /// Sum over every finalized file record of this package
    #[serde(flatten)]
    pub totals: Totals,
    /// Computed once parsing and exclusion are done
    pub line_rate: String,
    /// Computed once parsing and exclusion are done
    pub branch_rate: String,
}

impl Package {
    /// Fill in `line_rate` and `branch_rate` from the rolled-up totals.
    pub fn compute_rates(&mut self) {
        self.line_rate = self.totals.line_rate();
        self.branch_rate = self.totals.branch_rate();
    }
}

/// Root of a parsed tracefile
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoverageModel {
    /// Retained packages in first-seen order
    pub packages: IndexMap<String, Package>,
    /// Totals over every parsed file, excluded packages included
    pub summary: Totals,
    /// Seconds since the Unix epoch
    pub timestamp: String,
}

impl CoverageModel {
    /// Look up a class by package name and file key.
    #[must_use]
    pub fn class(&self, package: &str, file: &str) -> Option<&Class> {
        self.packages.get(package)?.classes.get(file)
    }
}
