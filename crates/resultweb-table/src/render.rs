//! Cell render hooks
//!
//! Every table is built with a `RenderDefaults` value. Its `column_render`
//! hook is used for each column that does not set its own, so cell content
//! is escaped unless a column opts out explicitly.

use resultweb_utils::{escape_text, Markup};
use serde_json::Value;

/// Converts a raw cell value to display content
pub type RenderHook = fn(&Value) -> Markup;

/// Escape a JSON cell value.
///
/// Strings are escaped as-is, null renders empty, anything else is escaped
/// in its JSON text form.
pub fn escape_value(value: &Value) -> Markup {
    match value {
        Value::Null => Markup::new(),
        Value::String(s) => Markup::raw(escape_text(s.as_str())),
        other => Markup::raw(escape_text(other)),
    }
}

/// Render settings shared by the tables of a page
#[derive(Clone, Copy)]
pub struct RenderDefaults {
    /// Hook for columns without their own render
    pub column_render: RenderHook,
}

impl std::fmt::Debug for RenderDefaults {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RenderDefaults").finish_non_exhaustive()
    }
}

impl Default for RenderDefaults {
    fn default() -> Self {
        Self {
            column_render: escape_value,
        }
    }
}

/// Look up a dotted key path in a JSON object.
///
/// Returns `None` when any segment is missing or a non-object is in the way.
pub fn lookup<'a>(value: &'a Value, key_path: &str) -> Option<&'a Value> {
    key_path
        .split('.')
        .try_fold(value, |current, key| current.as_object()?.get(key))
}
