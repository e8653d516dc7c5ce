//! Derive chart-ready, per-author aggregates from a gitstats `report.json`.
//!
//! The pipeline is a pure function of its input document: fetch once (see
//! [`source`]), then [`build_dashboard_data`] parses, ranks, builds the
//! time-indexed series, and summarizes — producing one immutable
//! [`DashboardData`] for the rendering layer.

pub mod ext;
pub mod model;
pub mod parse;
pub mod rank;
pub mod series;
pub mod source;
pub mod summary;
mod util;

pub use crate::model::{DashboardData, RawReport};
pub use crate::parse::MalformedReportError;

/// Run the whole pipeline over one raw report.
///
/// All errors surface here from the parse boundary; downstream of a
/// successful parse the computation is total and deterministic.
pub fn build_dashboard_data(raw: RawReport) -> Result<DashboardData, MalformedReportError> {
  // Phase 1: validate and normalize the untrusted document
  let report = parse::parse(raw)?;

  // Phase 2: rank authors; the ranking fixes series order everywhere
  let author_rank = rank::rank(&report);

  // Phase 3: dense, axis-aligned series
  let (date_axis, per_author_series) = series::per_author_series(&report, &author_rank);
  let monthly_author_series = series::monthly_series(&report, &author_rank);
  let line_series = series::line_series(&report);

  // Phase 4: scalar metrics
  let summary = summary::summarize(&report);

  Ok(DashboardData {
    author_rank,
    date_axis,
    per_author_series,
    monthly_author_series,
    line_series,
    hourly_activity: report.activity_by_hour,
    summary,
  })
}
