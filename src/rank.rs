use crate::model::NormalizedReport;

/// Author names ordered by descending lifetime commit count.
///
/// The sort is stable, so authors with equal counts keep the order the
/// report enumerated them in. That tie-break is a contract the monthly and
/// per-author series rely on, not an iteration accident.
pub fn rank(report: &NormalizedReport) -> Vec<String> {
  let mut ordered: Vec<_> = report.authors.iter().collect();
  ordered.sort_by(|a, b| b.commits.cmp(&a.commits));
  ordered.into_iter().map(|a| a.name.clone()).collect()
}
