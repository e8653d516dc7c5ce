// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: One-shot retrieval of the raw report document from a file path or HTTP resource
// role: source/boundary
// inputs: URL or filesystem path of a gitstats report.json
// outputs: RawReport ready for the pipeline
// side_effects: Network call (fetch_report) or file read (read_report); performed exactly once per invocation
// invariants: No retries, no caching; JSON syntax errors surface here, structural errors belong to the parser
// errors: anyhow with source context; MalformedReportError is never produced here
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use std::path::Path;

use anyhow::{Context, Result};

use crate::model::RawReport;

/// Fetch the report document over HTTP. Blocking, one-shot, no retries;
/// re-fetching (e.g. on remount) is the caller's concern and independent
/// invocations share no state.
pub fn fetch_report(url: &str) -> Result<RawReport> {
  let value: serde_json::Value = ureq::get(url)
    .call()
    .with_context(|| format!("fetching report from {url}"))?
    .into_json()
    .with_context(|| format!("decoding report JSON from {url}"))?;

  Ok(RawReport::from_value(value))
}

/// Read the report document from disk.
pub fn read_report<P: AsRef<Path>>(path: P) -> Result<RawReport> {
  let path = path.as_ref();
  let bytes = std::fs::read(path).with_context(|| format!("reading report {}", path.display()))?;

  RawReport::from_slice(&bytes).with_context(|| format!("decoding report JSON {}", path.display()))
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn read_report_loads_json_from_disk() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("report.json");
    std::fs::write(&path, br#"{ "authors": {}, "changes_by_date": {} }"#).unwrap();

    let raw = read_report(&path).expect("read report");
    assert!(crate::parse::parse(raw).is_ok());
  }

  #[test]
  fn read_report_surfaces_missing_file_with_context() {
    let err = read_report("/definitely/not/here/report.json").unwrap_err();
    assert!(format!("{:#}", err).contains("report.json"));
  }

  #[test]
  fn read_report_surfaces_broken_json_with_context() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("report.json");
    std::fs::write(&path, b"{ not json").unwrap();

    let err = read_report(&path).unwrap_err();
    assert!(format!("{:#}", err).contains("decoding report JSON"));
  }
}
