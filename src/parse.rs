// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Validate and normalize the raw gitstats report into the typed NormalizedReport
// role: parser/boundary
// inputs: RawReport (untrusted serde_json document)
// outputs: NormalizedReport with coerced integers, epoch-keyed maps, and defaulted optional fields
// invariants:
// - authors and changes_by_date are the only structurally required mappings
// - timestamp keys and stamp fields either parse to a chrono-representable epoch or fail the whole parse
// - absent optional fields default (empty mapping, zero count); present values are trusted
// errors: MalformedReportError only; this is the single error boundary of the pipeline
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use std::collections::BTreeMap;

use chrono::DateTime;
use thiserror::Error;

use crate::ext::serde_json::{lenient_i64, JsonFetch};
use crate::model::{AuthorDayChange, AuthorTotals, DayLineChange, NormalizedReport, RawReport};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MalformedReportError {
  #[error("report document is not a JSON object")]
  NotAnObject,
  #[error("required field `{0}` is missing")]
  MissingField(&'static str),
  #[error("field `{0}` is not a mapping")]
  NotAMapping(&'static str),
  #[error("invalid unix timestamp `{value}` in `{field}`")]
  InvalidTimestamp { field: &'static str, value: String },
}

/// Validate the raw document and produce the normalized report all other
/// components read. Structural problems and broken timestamps surface here;
/// nothing downstream re-validates.
pub fn parse(raw: RawReport) -> Result<NormalizedReport, MalformedReportError> {
  let doc = raw.into_value();

  if !doc.is_object() {
    return Err(MalformedReportError::NotAnObject);
  }

  // Phase 1: structurally required mappings.
  let authors_obj = require_mapping(&doc, "authors")?;
  let changes_obj = require_mapping(&doc, "changes_by_date")?;

  // Input enumeration order is kept; it is the rank tie-break.
  let authors: Vec<AuthorTotals> = authors_obj
    .iter()
    .map(|(name, entry)| AuthorTotals {
      name: name.clone(),
      commits: entry.fetch("commits").count_or_zero(),
    })
    .collect();

  let mut changes_by_date: BTreeMap<i64, DayLineChange> = BTreeMap::new();

  for (key, entry) in changes_obj {
    let epoch = parse_stamp("changes_by_date", key)?;
    changes_by_date.insert(
      epoch,
      DayLineChange {
        lines: entry.fetch("lines").count_or_zero(),
        ins: entry.fetch("ins").count_or_zero(),
        del: entry.fetch("del").count_or_zero(),
      },
    );
  }

  // Phase 2: optional timestamp-keyed activity, re-keyed by epoch so that
  // chronological order never depends on key enumeration order.
  let mut changes_by_author: BTreeMap<i64, BTreeMap<String, AuthorDayChange>> = BTreeMap::new();

  for (key, per_author) in optional_mapping(&doc, "changes_by_date_by_author") {
    let epoch = parse_stamp("changes_by_date_by_author", key)?;
    let mut records: BTreeMap<String, AuthorDayChange> = BTreeMap::new();

    if let Some(obj) = per_author.as_object() {
      for (author, entry) in obj {
        records.insert(
          author.clone(),
          AuthorDayChange {
            commits: entry.fetch("commits").count_or_zero(),
            lines_added: entry.fetch("lines_added").count_or_zero(),
          },
        );
      }
    }

    changes_by_author.insert(epoch, records);
  }

  // Phase 3: remaining optional fields, all defaulted when absent.
  let mut author_of_month: BTreeMap<String, BTreeMap<String, i64>> = BTreeMap::new();

  for (month, per_author) in optional_mapping(&doc, "author_of_month") {
    let mut counts: BTreeMap<String, i64> = BTreeMap::new();

    if let Some(obj) = per_author.as_object() {
      for (author, n) in obj {
        counts.insert(author.clone(), lenient_i64(n).unwrap_or(0));
      }
    }

    author_of_month.insert(month.clone(), counts);
  }

  let mut activity_by_hour = [0i64; 24];

  for (label, n) in optional_mapping(&doc, "activity_by_hour_of_day") {
    if let Ok(hour) = label.trim().parse::<usize>() {
      if hour < 24 {
        activity_by_hour[hour] = lenient_i64(n).unwrap_or(0);
      }
    }
  }

  let tags: Vec<String> = optional_mapping(&doc, "tags").map(|(name, _)| name.clone()).collect();

  Ok(NormalizedReport {
    authors,
    author_of_month,
    changes_by_author,
    changes_by_date,
    activity_by_hour,
    tags,
    stamp_created: stamp_field(&doc, "stamp_created")?,
    first_commit_stamp: stamp_field(&doc, "first_commit_stamp")?,
    last_commit_stamp: stamp_field(&doc, "last_commit_stamp")?,
    active_days: doc.fetch("active_days").to_or_default(),
    total_lines: doc.fetch("total_lines").count_or_zero(),
    total_lines_added: doc.fetch("total_lines_added").count_or_zero(),
    total_lines_removed: doc.fetch("total_lines_removed").count_or_zero(),
    total_files: doc.fetch("total_files").count_or_zero(),
    total_commits: doc.fetch("total_commits").count_or_zero(),
  })
}

fn require_mapping<'a>(
  doc: &'a serde_json::Value,
  field: &'static str,
) -> Result<&'a serde_json::Map<String, serde_json::Value>, MalformedReportError> {
  match doc.fetch(field).value() {
    None => Err(MalformedReportError::MissingField(field)),
    Some(v) => v.as_object().ok_or(MalformedReportError::NotAMapping(field)),
  }
}

fn optional_mapping<'a>(
  doc: &'a serde_json::Value,
  field: &'static str,
) -> impl Iterator<Item = (&'a String, &'a serde_json::Value)> {
  doc.fetch(field).as_object().into_iter().flatten()
}

/// Timestamp keys must be decimal unix seconds and representable as a date;
/// anything else corrupts the axis downstream, so the whole parse fails.
fn parse_stamp(field: &'static str, key: &str) -> Result<i64, MalformedReportError> {
  let invalid = || MalformedReportError::InvalidTimestamp { field, value: key.to_string() };
  let epoch = key.trim().parse::<i64>().map_err(|_| invalid())?;

  if DateTime::from_timestamp(epoch, 0).is_none() {
    return Err(invalid());
  }

  Ok(epoch)
}

/// Stamp fields default to 0 when absent but fail when present and broken.
fn stamp_field(doc: &serde_json::Value, field: &'static str) -> Result<i64, MalformedReportError> {
  match doc.fetch(field).value() {
    None | Some(serde_json::Value::Null) => Ok(0),
    Some(serde_json::Value::String(s)) => parse_stamp(field, s),
    Some(v) => {
      let epoch = lenient_i64(v)
        .ok_or_else(|| MalformedReportError::InvalidTimestamp { field, value: v.to_string() })?;
      if DateTime::from_timestamp(epoch, 0).is_none() {
        return Err(MalformedReportError::InvalidTimestamp { field, value: v.to_string() });
      }
      Ok(epoch)
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  fn minimal() -> serde_json::Value {
    json!({ "authors": {}, "changes_by_date": {} })
  }

  #[test]
  fn missing_authors_is_malformed() {
    let raw = RawReport::from_value(json!({ "changes_by_date": {} }));
    assert_eq!(parse(raw).unwrap_err(), MalformedReportError::MissingField("authors"));
  }

  #[test]
  fn missing_changes_by_date_is_malformed() {
    let raw = RawReport::from_value(json!({ "authors": {} }));
    assert_eq!(parse(raw).unwrap_err(), MalformedReportError::MissingField("changes_by_date"));
  }

  #[test]
  fn wrong_shape_is_distinguished_from_missing() {
    let raw = RawReport::from_value(json!({ "authors": [1, 2], "changes_by_date": {} }));
    assert_eq!(parse(raw).unwrap_err(), MalformedReportError::NotAMapping("authors"));

    let raw = RawReport::from_value(json!(["not", "an", "object"]));
    assert_eq!(parse(raw).unwrap_err(), MalformedReportError::NotAnObject);
  }

  #[test]
  fn optional_mappings_default_to_empty() {
    let report = parse(RawReport::from_value(minimal())).unwrap();
    assert!(report.authors.is_empty());
    assert!(report.author_of_month.is_empty());
    assert!(report.changes_by_author.is_empty());
    assert_eq!(report.activity_by_hour, [0i64; 24]);
    assert!(report.tags.is_empty());
    assert_eq!(report.first_commit_stamp, 0);
    assert_eq!(report.total_commits, 0);
  }

  #[test]
  fn author_order_and_counts_are_preserved() {
    let raw = RawReport::from_value(json!({
      "authors": {
        "Zoe": { "commits": 3, "lines_added": 40 },
        "Abe": { "commits": 7 },
        "Kim": {}
      },
      "changes_by_date": {}
    }));
    let report = parse(raw).unwrap();
    let names: Vec<&str> = report.authors.iter().map(|a| a.name.as_str()).collect();
    assert_eq!(names, ["Zoe", "Abe", "Kim"]);
    assert_eq!(report.authors[1].commits, 7);
    assert_eq!(report.authors[2].commits, 0);
  }

  #[test]
  fn string_encoded_counts_are_coerced() {
    let raw = RawReport::from_value(json!({
      "authors": {},
      "changes_by_date": {
        "1000": { "lines": 120, "ins": "30", "del": "10" }
      },
      "first_commit_stamp": "1000",
      "last_commit_stamp": 90000,
      "total_lines": "120"
    }));
    let report = parse(raw).unwrap();
    let change = report.changes_by_date[&1000];
    assert_eq!((change.lines, change.ins, change.del), (120, 30, 10));
    assert_eq!(report.first_commit_stamp, 1000);
    assert_eq!(report.last_commit_stamp, 90000);
    assert_eq!(report.total_lines, 120);
  }

  #[test]
  fn timestamp_keys_are_rekeyed_in_numeric_order() {
    let raw = RawReport::from_value(json!({
      "authors": {},
      "changes_by_date": {},
      "changes_by_date_by_author": {
        "90000": { "Bob": { "commits": 1, "lines_added": 5 } },
        "1000": { "Alice": { "commits": 1, "lines_added": "10" } }
      }
    }));
    let report = parse(raw).unwrap();
    let epochs: Vec<i64> = report.changes_by_author.keys().copied().collect();
    assert_eq!(epochs, [1000, 90000]);
    assert_eq!(report.changes_by_author[&1000]["Alice"].lines_added, 10);
  }

  #[test]
  fn broken_timestamp_key_fails_the_whole_parse() {
    let raw = RawReport::from_value(json!({
      "authors": {},
      "changes_by_date": { "not-a-stamp": { "lines": 1, "ins": 0, "del": 0 } }
    }));
    assert_eq!(
      parse(raw).unwrap_err(),
      MalformedReportError::InvalidTimestamp {
        field: "changes_by_date",
        value: "not-a-stamp".into()
      }
    );
  }

  #[test]
  fn unrepresentable_epoch_fails_the_whole_parse() {
    let mut doc = minimal();
    doc["stamp_created"] = json!(i64::MAX);
    assert!(matches!(
      parse(RawReport::from_value(doc)).unwrap_err(),
      MalformedReportError::InvalidTimestamp { field: "stamp_created", .. }
    ));
  }

  #[test]
  fn hour_histogram_is_densified() {
    let raw = RawReport::from_value(json!({
      "authors": {},
      "changes_by_date": {},
      "activity_by_hour_of_day": { "0": 4, "13": "2", "23": 1, "24": 9, "noon": 9 }
    }));
    let report = parse(raw).unwrap();
    assert_eq!(report.activity_by_hour[0], 4);
    assert_eq!(report.activity_by_hour[13], 2);
    assert_eq!(report.activity_by_hour[23], 1);
    assert_eq!(report.activity_by_hour.iter().sum::<i64>(), 7);
  }

  #[test]
  fn tags_keep_names_only() {
    let raw = RawReport::from_value(json!({
      "authors": {},
      "changes_by_date": {},
      "tags": { "v1.0": { "stamp": "1000", "commits": 12 }, "v1.1": {} }
    }));
    let report = parse(raw).unwrap();
    assert_eq!(report.tags.len(), 2);
    assert!(report.tags.contains(&"v1.0".to_string()));
  }
}
