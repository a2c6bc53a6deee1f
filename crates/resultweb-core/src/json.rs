//! Nested JSON access and slim copies of exercise results

use crate::error::{CoreError, CoreResult};
use serde_json::{Map, Value};

/// Key paths kept in the result list
pub const SLIM_KEYS: [&str; 9] = [
    "__class__",
    "run_id",
    "create_time",
    "exercise.name",
    "exercise.__class__",
    "exercise.grader.__class__",
    "grade.__class__",
    "grade.__isinstance_Pass__",
    "grade.__isinstance_Fail__",
];

/// Follow `key_path` through nested objects
pub fn get_nested<'a>(obj: &'a Value, key_path: &[&str]) -> Option<&'a Value> {
    let mut current = obj;
    for key in key_path {
        current = current.as_object()?.get(*key)?;
    }
    Some(current)
}

/// Set `value` at `key_path`, creating intermediate objects
pub fn set_nested(out: &mut Map<String, Value>, key_path: &[&str], value: Value) -> CoreResult<()> {
    let (last, parents) = match key_path.split_last() {
        Some(split) => split,
        None => return Ok(()),
    };

    let mut current = out;
    for key in parents {
        let entry = current
            .entry(key.to_string())
            .or_insert_with(|| Value::Object(Map::new()));
        current = entry.as_object_mut().ok_or_else(|| CoreError::PathConflict {
            path: key_path.join("."),
        })?;
    }
    current.insert(last.to_string(), value);
    Ok(())
}

/// Copy only the given dotted key paths of `in_json`.
///
/// Paths that are missing or null are skipped.
pub fn slim_copy(in_json: &Value, key_paths: &[&str]) -> CoreResult<Value> {
    let mut out = Map::new();
    for path in key_paths {
        let segments: Vec<&str> = path.split('.').collect();
        match get_nested(in_json, &segments) {
            None | Some(Value::Null) => continue,
            Some(value) => set_nested(&mut out, &segments, value.clone())?,
        }
    }
    Ok(Value::Object(out))
}
