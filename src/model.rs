// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Define the report and dashboard data model shared by parsing, series building, and rendering handoff
// role: model/types
// outputs: RawReport wrapper, NormalizedReport structures, serializable dashboard structs with camelCase field names
// invariants: NormalizedReport maps are epoch-keyed (chronological by construction); authors keep input enumeration order
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use std::collections::BTreeMap;

use serde::Serialize;

/// The fetched report document, exactly as produced by the external analysis
/// tool. Untrusted until it has been through `parse::parse`.
#[derive(Debug, Clone)]
pub struct RawReport(serde_json::Value);

impl RawReport {
  pub fn from_value(value: serde_json::Value) -> Self {
    RawReport(value)
  }

  pub fn from_slice(bytes: &[u8]) -> serde_json::Result<Self> {
    Ok(RawReport(serde_json::from_slice(bytes)?))
  }

  pub(crate) fn into_value(self) -> serde_json::Value {
    self.0
  }
}

impl std::str::FromStr for RawReport {
  type Err = serde_json::Error;

  fn from_str(text: &str) -> Result<Self, Self::Err> {
    Ok(RawReport(serde_json::from_str(text)?))
  }
}

impl From<serde_json::Value> for RawReport {
  fn from(value: serde_json::Value) -> Self {
    RawReport(value)
  }
}

/// One author's lifetime commit total, in the order the report enumerated it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorTotals {
  pub name: String,
  pub commits: i64,
}

/// One author's activity recorded at a single timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthorDayChange {
  pub commits: i64,
  pub lines_added: i64,
}

/// Aggregate line movement recorded at a single timestamp. `lines` is the
/// report's cumulative total as of that record; `ins`/`del` are deltas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayLineChange {
  pub lines: i64,
  pub ins: i64,
  pub del: i64,
}

/// The report after structural validation and numeric coercion. Immutable
/// once produced; every downstream component reads it, none mutate it.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedReport {
  pub authors: Vec<AuthorTotals>,
  pub author_of_month: BTreeMap<String, BTreeMap<String, i64>>,
  pub changes_by_author: BTreeMap<i64, BTreeMap<String, AuthorDayChange>>,
  pub changes_by_date: BTreeMap<i64, DayLineChange>,
  pub activity_by_hour: [i64; 24],
  pub tags: Vec<String>,
  pub stamp_created: i64,
  pub first_commit_stamp: i64,
  pub last_commit_stamp: i64,
  pub active_days: Vec<String>,
  pub total_lines: i64,
  pub total_lines_added: i64,
  pub total_lines_removed: i64,
  pub total_files: i64,
  pub total_commits: i64,
}

/// Running totals for one author, positionally aligned to the unified date axis.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AuthorTimeSeries {
  pub author: String,
  pub commits: Vec<i64>,
  pub lines: Vec<i64>,
}

/// Commit counts per month for one author, zero-filled over the month union.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyAuthorSeries {
  pub author: String,
  pub commits_by_month: BTreeMap<String, i64>,
}

/// Project-wide line movement over time, on its own date axis.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LineSeries {
  pub date_axis: Vec<String>,
  pub cumulative_lines: Vec<i64>,
  pub inserted_by_date: Vec<i64>,
  pub deleted_by_date: Vec<i64>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
  pub total_days: i64,
  pub active_days: i64,
  pub active_ratio_percent: f64,
  pub first_date: String,
  pub last_date: String,
  pub created_date: String,
  pub tag_count: usize,
  pub total_commits: i64,
  pub total_files: i64,
  pub total_lines: i64,
  pub total_lines_added: i64,
  pub total_lines_removed: i64,
}

/// The sole handoff to the rendering layer; treated as read-only there.
/// Field names serialize camelCase because the consumer is a JS chart stack.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DashboardData {
  pub author_rank: Vec<String>,
  pub date_axis: Vec<String>,
  pub per_author_series: Vec<AuthorTimeSeries>,
  pub monthly_author_series: Vec<MonthlyAuthorSeries>,
  pub line_series: LineSeries,
  pub hourly_activity: [i64; 24],
  pub summary: Summary,
}
