//! Dotted class name display

use crate::markup::Markup;

/// CSS class for the de-emphasized module path
pub const NOT_IMPORTANT_CLASS: &str = "not-important";

/// Highlight the last segment of a dotted name.
///
/// `a.b.C` becomes `<span class="not-important">a.b.</span><span>C</span>`.
/// A name without a `.` is returned as plain text. Segments are escaped.
pub fn format_dotted_name(name: &str) -> Markup {
    let parts: Vec<&str> = name.split('.').collect();
    match parts.split_last() {
        Some((last, prefix)) if !prefix.is_empty() => {
            let prefix = format!("{}.", prefix.join("."));
            Markup::span(Some(NOT_IMPORTANT_CLASS), Markup::text(&prefix))
                + Markup::span(None, Markup::text(*last))
        }
        _ => Markup::text(name),
    }
}
