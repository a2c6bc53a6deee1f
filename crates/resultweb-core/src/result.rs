//! Exercise result list
//!
//! Collects exercise result JSON documents as slim copies, one per run id.

use crate::error::{CoreError, CoreResult};
use crate::json::{get_nested, slim_copy, SLIM_KEYS};
use resultweb_utils::parse_iso8601_instant;
use serde_json::Value;
use std::collections::HashSet;
use std::path::Path;

/// Outcome of a graded exercise
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GradeStatus {
    Pass,
    Fail,
    Unknown,
}

impl GradeStatus {
    /// Read the `__isinstance_*__` markers of a grade object
    pub fn from_grade(grade: &Value) -> Self {
        let marked = |key: &str| grade.get(key).and_then(Value::as_bool).unwrap_or(false);
        if marked("__isinstance_Pass__") {
            GradeStatus::Pass
        } else if marked("__isinstance_Fail__") {
            GradeStatus::Fail
        } else {
            GradeStatus::Unknown
        }
    }
}

impl std::fmt::Display for GradeStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GradeStatus::Pass => write!(f, "Pass"),
            GradeStatus::Fail => write!(f, "Fail"),
            GradeStatus::Unknown => write!(f, "Unknown"),
        }
    }
}

/// Timestamp text of a `create_time` value.
///
/// The history stores datetimes as `{"__class__": "datetime.datetime",
/// "iso8601": "..."}`; a bare string is accepted as well.
pub fn timestamp_text(value: &Value) -> Option<&str> {
    match value {
        Value::String(s) => Some(s.as_str()),
        Value::Object(map) => map.get("iso8601").and_then(Value::as_str),
        _ => None,
    }
}

/// Pass/fail counts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ResultSummary {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
}

/// Slim exercise results, unique by run id
#[derive(Debug, Clone, Default)]
pub struct ResultList {
    results: Vec<Value>,
    run_ids: HashSet<String>,
}

impl ResultList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a full exercise result.
    ///
    /// Returns `false` when a result with the same run id was already added.
    pub fn add(&mut self, result: &Value) -> CoreResult<bool> {
        if !result.is_object() {
            return Err(CoreError::NotAnObject);
        }
        let run_id = result
            .get("run_id")
            .and_then(Value::as_str)
            .ok_or_else(|| CoreError::MissingField {
                field: "run_id".to_string(),
            })?;

        if !self.run_ids.insert(run_id.to_string()) {
            log::debug!("Skipping duplicate run {}", run_id);
            return Ok(false);
        }

        self.results.push(slim_copy(result, &SLIM_KEYS)?);
        Ok(true)
    }

    /// Load one result file
    pub fn load_file(&mut self, path: &Path) -> CoreResult<bool> {
        let content = std::fs::read_to_string(path).map_err(|source| CoreError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let result: Value = serde_json::from_str(&content).map_err(|e| CoreError::InvalidJson {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        self.add(&result)
    }

    /// Load every `*.json` file in a directory, in file name order.
    ///
    /// Returns the number of results added.
    pub fn load_dir(&mut self, dir: &Path) -> CoreResult<usize> {
        let io_error = |source| CoreError::Io {
            path: dir.display().to_string(),
            source,
        };

        let mut paths = Vec::new();
        for entry in std::fs::read_dir(dir).map_err(io_error)? {
            let path = entry.map_err(io_error)?.path();
            if path.is_file() && path.extension().map_or(false, |ext| ext == "json") {
                paths.push(path);
            }
        }
        paths.sort();

        let mut added = 0;
        for path in &paths {
            if self.load_file(path)? {
                added += 1;
            }
        }
        log::debug!("Loaded {} results from {}", added, dir.display());
        Ok(added)
    }

    /// Load a result file or a directory of result files
    pub fn load_path(&mut self, path: &Path) -> CoreResult<usize> {
        if path.is_dir() {
            self.load_dir(path)
        } else {
            Ok(usize::from(self.load_file(path)?))
        }
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Slim results in insertion order
    pub fn results(&self) -> &[Value] {
        &self.results
    }

    /// Results ordered by the moment they were created, offsets included.
    /// Results without a readable creation time sort before all others
    /// (after, when newest first).
    pub fn sorted(&self, newest_first: bool) -> Vec<Value> {
        let mut keyed: Vec<_> = self
            .results
            .iter()
            .map(|r| {
                let created = get_nested(r, &["create_time"])
                    .and_then(timestamp_text)
                    .and_then(|text| parse_iso8601_instant(text).ok());
                (created, r)
            })
            .collect();
        keyed.sort_by(|a, b| a.0.cmp(&b.0));
        if newest_first {
            keyed.reverse();
        }
        keyed.into_iter().map(|(_, r)| r.clone()).collect()
    }

    pub fn summary(&self) -> ResultSummary {
        let mut summary = ResultSummary {
            total: self.results.len(),
            ..ResultSummary::default()
        };
        for result in &self.results {
            match result.get("grade").map(GradeStatus::from_grade) {
                Some(GradeStatus::Pass) => summary.passed += 1,
                Some(GradeStatus::Fail) => summary.failed += 1,
                _ => {}
            }
        }
        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn result(run_id: &str, iso: &str, pass: bool) -> Value {
        let grade = if pass {
            json!({"__class__": "rlbot.training.training.Pass", "__isinstance_Pass__": true})
        } else {
            json!({"__class__": "rlbot.training.training.Fail", "__isinstance_Fail__": true})
        };
        json!({
            "run_id": run_id,
            "seed": 1,
            "create_time": {"__class__": "datetime.datetime", "iso8601": iso},
            "exercise": {"name": run_id, "__class__": "a.b.Exercise"},
            "grade": grade
        })
    }

    #[test]
    fn test_grade_status() {
        assert_eq!(GradeStatus::from_grade(&json!({"__isinstance_Pass__": true})), GradeStatus::Pass);
        assert_eq!(GradeStatus::from_grade(&json!({"__isinstance_Fail__": true})), GradeStatus::Fail);
        assert_eq!(GradeStatus::from_grade(&json!({"__class__": "x.Y"})), GradeStatus::Unknown);
        assert_eq!(GradeStatus::from_grade(&json!("pass")), GradeStatus::Unknown);
        assert_eq!(GradeStatus::Fail.to_string(), "Fail");
    }

    #[test]
    fn test_timestamp_text() {
        assert_eq!(timestamp_text(&json!({"iso8601": "2019-01-01T00:00:00Z"})), Some("2019-01-01T00:00:00Z"));
        assert_eq!(timestamp_text(&json!("2019-01-01T00:00:00Z")), Some("2019-01-01T00:00:00Z"));
        assert_eq!(timestamp_text(&json!(12)), None);
    }

    #[test]
    fn test_add_slims_and_dedups() {
        let mut list = ResultList::new();
        assert!(list.add(&result("r1", "2019-01-01T00:00:00Z", true)).unwrap());
        assert!(!list.add(&result("r1", "2019-01-02T00:00:00Z", false)).unwrap());
        assert_eq!(list.len(), 1);
        assert!(list.results()[0].get("seed").is_none());
        assert_eq!(list.results()[0]["exercise"]["name"], json!("r1"));
    }

    #[test]
    fn test_add_requires_run_id() {
        let mut list = ResultList::new();
        let err = list.add(&json!({"seed": 1})).unwrap_err();
        assert_eq!(err.code(), crate::error::ErrorCode::MissingField);
        assert!(matches!(list.add(&json!([1, 2])), Err(CoreError::NotAnObject)));
        assert!(list.is_empty());
    }

    #[test]
    fn test_sorted() {
        let mut list = ResultList::new();
        list.add(&result("mid", "2019-02-01T00:00:00.5Z", true)).unwrap();
        list.add(&result("new", "2019-03-01T00:00:00Z", true)).unwrap();
        list.add(&result("bad", "not a date", true)).unwrap();
        list.add(&result("old", "2019-01-01T00:00:00Z", true)).unwrap();

        let ids = |rows: Vec<Value>| -> Vec<String> {
            rows.iter().map(|r| r["run_id"].as_str().unwrap().to_string()).collect()
        };
        assert_eq!(ids(list.sorted(false)), vec!["bad", "old", "mid", "new"]);
        assert_eq!(ids(list.sorted(true)), vec!["new", "mid", "old", "bad"]);
    }

    #[test]
    fn test_sorted_unpadded_millis() {
        let mut list = ResultList::new();
        list.add(&result("ms40", "2019-02-01T00:00:00.40Z", true)).unwrap();
        list.add(&result("ms5", "2019-02-01T00:00:00.5Z", true)).unwrap();
        list.add(&result("ms1000", "2019-02-01T00:00:00.1000Z", true)).unwrap();
        list.add(&result("next", "2019-02-01T00:00:01.2Z", true)).unwrap();

        let ids: Vec<String> = list
            .sorted(false)
            .iter()
            .map(|r| r["run_id"].as_str().unwrap().to_string())
            .collect();
        assert_eq!(ids, vec!["ms5", "ms40", "ms1000", "next"]);
    }

    #[test]
    fn test_sorted_by_instant_across_offsets() {
        let mut list = ResultList::new();
        list.add(&result("utc", "2019-02-01T09:00:00Z", true)).unwrap();
        list.add(&result("east", "2019-02-01T10:00:00+02:00", true)).unwrap();

        let first = &list.sorted(false)[0];
        assert_eq!(first["run_id"], json!("east"));
    }

    #[test]
    fn test_summary() {
        let mut list = ResultList::new();
        list.add(&result("a", "2019-01-01T00:00:00Z", true)).unwrap();
        list.add(&result("b", "2019-01-01T00:00:00Z", false)).unwrap();
        list.add(&result("c", "2019-01-01T00:00:00Z", true)).unwrap();
        assert_eq!(
            list.summary(),
            ResultSummary {
                total: 3,
                passed: 2,
                failed: 1
            }
        );
    }

    #[test]
    fn test_load_dir() {
        let dir = tempfile::tempdir().unwrap();
        for (name, id) in [("b.json", "r2"), ("a.json", "r1")] {
            let body = result(id, "2019-01-01T00:00:00Z", true).to_string();
            std::fs::write(dir.path().join(name), body).unwrap();
        }
        std::fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

        let mut list = ResultList::new();
        assert_eq!(list.load_path(dir.path()).unwrap(), 2);
        assert_eq!(list.results()[0]["run_id"], json!("r1"));
        assert_eq!(list.results()[1]["run_id"], json!("r2"));
        assert_eq!(list.load_dir(dir.path()).unwrap(), 0);
    }

    #[test]
    fn test_load_file_invalid_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "{").unwrap();

        let mut list = ResultList::new();
        let err = list.load_file(&path).unwrap_err();
        assert_eq!(err.code(), crate::error::ErrorCode::InvalidFormat);
    }

    #[test]
    fn test_load_missing_file() {
        let mut list = ResultList::new();
        let err = list.load_path(Path::new("/nonexistent/result.json")).unwrap_err();
        assert_eq!(err.code(), crate::error::ErrorCode::IoError);
    }
}
