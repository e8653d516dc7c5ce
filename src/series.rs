// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Turn sparse per-timestamp records into dense, date-ordered series per author and in aggregate
// role: series/core
// inputs: NormalizedReport (epoch-keyed, read-only) and the author ranking
// outputs: Unified date axis, per-author running-total series, aggregate line series, monthly commit matrix
// invariants:
// - every per-author series has exactly the axis length; authors without activity get all-zero series
// - missing (day, author) records carry the previous running values forward, never reset
// - all ordering comes from numeric epochs / sorted month keys, never key enumeration order
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::model::{AuthorDayChange, AuthorTimeSeries, LineSeries, MonthlyAuthorSeries, NormalizedReport};
use crate::util::{day_of, format_day};

/// Running totals for one author while folding across the date axis.
#[derive(Debug, Clone, Copy, Default)]
struct Running {
  commits: i64,
  lines: i64,
}

/// Merge timestamp-keyed author records onto calendar days. Commits within a
/// day accumulate; lines_added keeps the latest record of the day (epochs
/// iterate ascending, so later records overwrite earlier ones).
fn records_by_day(report: &NormalizedReport) -> BTreeMap<NaiveDate, BTreeMap<&str, AuthorDayChange>> {
  let mut by_day: BTreeMap<NaiveDate, BTreeMap<&str, AuthorDayChange>> = BTreeMap::new();

  for (epoch, per_author) in &report.changes_by_author {
    let slot = by_day.entry(day_of(*epoch)).or_default();

    for (author, record) in per_author {
      let cell = slot.entry(author.as_str()).or_insert(AuthorDayChange { commits: 0, lines_added: 0 });
      cell.commits += record.commits;
      cell.lines_added = record.lines_added;
    }
  }

  by_day
}

/// Build the unified date axis and one aligned series per ranked author.
///
/// The per-author running state threads forward through an explicit fold
/// over the sorted axis: a day with a record for an author updates that
/// author's totals (commits cumulative, lines most-recent); a day without
/// one carries the previous values unchanged. Before an author's first
/// recorded day the running values are zero.
pub fn per_author_series(
  report: &NormalizedReport,
  author_rank: &[String],
) -> (Vec<String>, Vec<AuthorTimeSeries>) {
  let by_day = records_by_day(report);
  let axis: Vec<NaiveDate> = by_day.keys().copied().collect();

  let columns: Vec<Vec<Running>> = axis.iter().fold(Vec::with_capacity(axis.len()), |mut cols, day| {
    let today = by_day.get(day);
    let column: Vec<Running> = author_rank
      .iter()
      .enumerate()
      .map(|(idx, author)| {
        let prev = cols.last().map(|col: &Vec<Running>| col[idx]).unwrap_or_default();
        match today.and_then(|m| m.get(author.as_str())) {
          Some(record) => Running {
            commits: prev.commits + record.commits,
            lines: record.lines_added,
          },
          None => prev,
        }
      })
      .collect();
    cols.push(column);
    cols
  });

  let mut series: Vec<AuthorTimeSeries> = author_rank
    .iter()
    .map(|author| AuthorTimeSeries {
      author: author.clone(),
      commits: Vec::with_capacity(axis.len()),
      lines: Vec::with_capacity(axis.len()),
    })
    .collect();

  for column in &columns {
    for (idx, running) in column.iter().enumerate() {
      series[idx].commits.push(running.commits);
      series[idx].lines.push(running.lines);
    }
  }

  (axis.iter().map(format_day).collect(), series)
}

/// Project-wide line movement on its own axis. `ins`/`del` are per-day
/// deltas and sum within a day (an empty day-group sums to zero); the
/// cumulative `lines` value keeps the latest record of the day. No
/// carry-forward here.
pub fn line_series(report: &NormalizedReport) -> LineSeries {
  let mut by_day: BTreeMap<NaiveDate, (i64, i64, i64)> = BTreeMap::new();

  for (epoch, change) in &report.changes_by_date {
    let cell = by_day.entry(day_of(*epoch)).or_insert((0, 0, 0));
    cell.0 = change.lines;
    cell.1 += change.ins;
    cell.2 += change.del;
  }

  LineSeries {
    date_axis: by_day.keys().map(format_day).collect(),
    cumulative_lines: by_day.values().map(|(lines, _, _)| *lines).collect(),
    inserted_by_date: by_day.values().map(|(_, ins, _)| *ins).collect(),
    deleted_by_date: by_day.values().map(|(_, _, del)| *del).collect(),
  }
}

/// Month-by-month commit counts per ranked author, zero-filled over the
/// union of months present in the report.
pub fn monthly_series(report: &NormalizedReport, author_rank: &[String]) -> Vec<MonthlyAuthorSeries> {
  author_rank
    .iter()
    .map(|author| {
      let commits_by_month = report
        .author_of_month
        .iter()
        .map(|(month, per_author)| (month.clone(), per_author.get(author).copied().unwrap_or(0)))
        .collect();
      MonthlyAuthorSeries { author: author.clone(), commits_by_month }
    })
    .collect()
}
