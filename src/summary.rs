use crate::model::{NormalizedReport, Summary};
use crate::util::{day_of, format_day};

const SECONDS_PER_DAY: i64 = 86_400;

/// Scalar dashboard metrics derived from the normalized report.
///
/// `total_days` is the whole-day span between first and last commit stamps.
/// The active ratio is guarded: a zero-day span yields 0, never a division
/// error or NaN.
pub fn summarize(report: &NormalizedReport) -> Summary {
  let total_days = (report.last_commit_stamp - report.first_commit_stamp) / SECONDS_PER_DAY;
  let active_days = report.active_days.len() as i64;

  let active_ratio_percent = if total_days == 0 {
    0.0
  } else {
    round2(active_days as f64 / total_days as f64 * 100.0)
  };

  Summary {
    total_days,
    active_days,
    active_ratio_percent,
    first_date: format_day(&day_of(report.first_commit_stamp)),
    last_date: format_day(&day_of(report.last_commit_stamp)),
    created_date: format_day(&day_of(report.stamp_created)),
    tag_count: report.tags.len(),
    total_commits: report.total_commits,
    total_files: report.total_files,
    total_lines: report.total_lines,
    total_lines_added: report.total_lines_added,
    total_lines_removed: report.total_lines_removed,
  }
}

fn round2(value: f64) -> f64 {
  (value * 100.0).round() / 100.0
}
