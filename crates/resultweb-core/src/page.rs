//! Results page rendering

use crate::result::{timestamp_text, GradeStatus, ResultList, ResultSummary};
use resultweb_config::{ColumnKind, Config, TableConfig};
use resultweb_table::{base_html, escape_value, Column, RenderDefaults, Table};
use resultweb_utils::{format_dotted_name, format_timestamp, parse_iso8601, Markup};
use serde_json::Value;

/// Render a `create_time` value; unreadable timestamps fall back to text
pub fn render_timestamp(value: &Value) -> Markup {
    let Some(text) = timestamp_text(value) else {
        return escape_value(value);
    };
    match parse_iso8601(text) {
        Ok(t) => Markup::text(&format_timestamp(&t)),
        Err(e) => {
            log::warn!("{}", e);
            Markup::text(text)
        }
    }
}

/// Render a class name with its module path de-emphasized
pub fn render_dotted_name(value: &Value) -> Markup {
    match value.as_str() {
        Some(name) => format_dotted_name(name),
        None => escape_value(value),
    }
}

/// Render a grade object as a pass/fail badge
pub fn render_grade(value: &Value) -> Markup {
    match GradeStatus::from_grade(value) {
        GradeStatus::Pass => Markup::span(Some("grade-pass"), Markup::text("Pass")),
        GradeStatus::Fail => Markup::span(Some("grade-fail"), Markup::text("Fail")),
        GradeStatus::Unknown => value
            .get("__class__")
            .map(render_dotted_name)
            .unwrap_or_default(),
    }
}

/// Build the results table from the configured columns.
///
/// Text columns keep the render from `defaults`; other kinds set their own.
pub fn results_table(config: &TableConfig, defaults: &RenderDefaults) -> Table {
    let columns = config
        .columns
        .iter()
        .map(|c| {
            let column = Column::new(&c.key, &c.title);
            match c.kind {
                ColumnKind::Text => column,
                ColumnKind::Timestamp => column.with_render(render_timestamp),
                ColumnKind::DottedName => column.with_render(render_dotted_name),
                ColumnKind::Grade => column.with_render(render_grade),
            }
        })
        .collect();
    Table::new(columns, defaults).with_class("results")
}

fn render_summary(summary: &ResultSummary) -> Markup {
    Markup::element(
        "p",
        Some("summary"),
        Markup::text(&format!(
            "{} results, {} passed, {} failed",
            summary.total, summary.passed, summary.failed
        )),
    )
}

/// Render the full results page
pub fn render_results_page(list: &ResultList, config: &Config) -> String {
    let defaults = RenderDefaults::default();
    let table = results_table(&config.table, &defaults);
    let rows = list.sorted(config.table.newest_first);

    let content = render_summary(&list.summary()) + table.render(&rows);
    base_html(&config.page.title, &config.page.stylesheet, &content)
}
