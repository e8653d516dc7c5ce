// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Calendar helpers shared by the series builder and summary calculator
// role: utilities/helpers
// inputs: Unix-second epochs already range-checked by the parser
// outputs: UTC calendar days and their YYYY-MM-DD rendering
// invariants: One timezone convention (UTC) for the whole pipeline; drift here would misalign every series
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use chrono::{DateTime, NaiveDate};

/// UTC calendar day of a unix-second epoch.
///
/// The parser rejects epochs chrono cannot represent, so the fallback is
/// unreachable in the pipeline; it exists to keep this helper total.
pub fn day_of(epoch: i64) -> NaiveDate {
  DateTime::from_timestamp(epoch, 0).map(|dt| dt.date_naive()).unwrap_or_default()
}

/// Canonical axis label for a calendar day.
pub fn format_day(day: &NaiveDate) -> String {
  day.format("%Y-%m-%d").to_string()
}
