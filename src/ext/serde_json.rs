// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Ergonomic fetching and lenient numeric coercion over serde_json::Value for gitstats report fields
// role: extension/serde_json
// outputs: JsonFetch trait and JsonFetched wrapper for typed extraction, defaults, and string-or-int counts
// invariants: No panics; missing paths yield None; count() accepts integers and decimal-digit strings only
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use serde::de::DeserializeOwned;

/// Wrapper around a JSON location to allow typed extraction via a clear second step.
pub struct JsonFetched<'a> {
  inner: Option<&'a serde_json::Value>,
}

impl<'a> JsonFetched<'a> {
  /// The raw value at the fetched location, when present.
  pub fn value(&self) -> Option<&'a serde_json::Value> {
    self.inner
  }

  /// The value as a JSON object, when present and object-shaped.
  pub fn as_object(&self) -> Option<&'a serde_json::Map<String, serde_json::Value>> {
    self.inner.and_then(|v| v.as_object())
  }

  /// Attempt to deserialize the fetched value as `T`.
  pub fn to<T>(&self) -> Option<T>
  where
    T: DeserializeOwned,
  {
    self.inner.and_then(|v| serde_json::from_value::<T>(v.clone()).ok())
  }

  /// Deserialize as `T`, returning `T::default()` on failure.
  pub fn to_or_default<T>(&self) -> T
  where
    T: DeserializeOwned + Default,
  {
    self.to::<T>().unwrap_or_default()
  }

  /// Coerce to an integer count. gitstats encodes some counts as JSON numbers
  /// and others as decimal-digit strings ("ins"/"del", the stamp fields).
  pub fn count(&self) -> Option<i64> {
    self.inner.and_then(lenient_i64)
  }

  /// `count()` with the report's "missing means zero" default.
  pub fn count_or_zero(&self) -> i64 {
    self.count().unwrap_or(0)
  }
}

/// Extension to fetch nested values via dotted paths like "summary.total_commits".
pub trait JsonFetch {
  fn fetch(&self, path: &str) -> JsonFetched<'_>;
}

impl JsonFetch for serde_json::Value {
  fn fetch(&self, path: &str) -> JsonFetched<'_> {
    if path.is_empty() {
      return JsonFetched { inner: Some(self) };
    }

    let mut cur = self;

    for key in path.split('.') {
      match cur.get(key) {
        Some(next) => cur = next,
        None => return JsonFetched { inner: None },
      }
    }

    JsonFetched { inner: Some(cur) }
  }
}

/// Integer-or-digit-string coercion shared by `count()` and the parser's
/// stamp handling. Floats and non-numeric strings yield None.
pub fn lenient_i64(v: &serde_json::Value) -> Option<i64> {
  match v {
    serde_json::Value::Number(n) => n.as_i64(),
    serde_json::Value::String(s) => s.trim().parse::<i64>().ok(),
    _ => None,
  }
}
