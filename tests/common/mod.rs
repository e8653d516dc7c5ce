use gitstats_dashboard::{source, RawReport};

/// The checked-in demo report used across the integration tests.
pub fn fixture_report() -> RawReport {
  let path = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR"))
    .join("tests")
    .join("fixtures")
    .join("report.json");
  source::read_report(&path).expect("fixture report")
}
