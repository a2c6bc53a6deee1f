//! Tables and columns

use crate::render::{lookup, RenderDefaults, RenderHook};
use resultweb_utils::Markup;
use serde_json::Value;

/// A table column
#[derive(Clone)]
pub struct Column {
    /// Dotted key path of the cell value in each row
    pub key: String,
    /// Header text, escaped on render
    pub title: String,
    /// Column-specific render; `None` uses the table defaults
    pub render: Option<RenderHook>,
}

impl Column {
    pub fn new(key: &str, title: &str) -> Self {
        Self {
            key: key.to_string(),
            title: title.to_string(),
            render: None,
        }
    }

    /// Replace the default (escaping) render for this column only
    pub fn with_render(mut self, render: RenderHook) -> Self {
        self.render = Some(render);
        self
    }
}

impl std::fmt::Debug for Column {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Column")
            .field("key", &self.key)
            .field("title", &self.title)
            .field("custom_render", &self.render.is_some())
            .finish()
    }
}

/// An HTML table over JSON rows
#[derive(Debug, Clone)]
pub struct Table {
    columns: Vec<Column>,
    defaults: RenderDefaults,
    class: Option<String>,
}

impl Table {
    pub fn new(columns: Vec<Column>, defaults: &RenderDefaults) -> Self {
        Self {
            columns,
            defaults: *defaults,
            class: None,
        }
    }

    pub fn with_class(mut self, class: &str) -> Self {
        self.class = Some(class.to_string());
        self
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Render a single cell
    pub fn render_cell(&self, column: &Column, row: &Value) -> Markup {
        let render = column.render.unwrap_or(self.defaults.column_render);
        match lookup(row, &column.key) {
            Some(value) => render(value),
            None => render(&Value::Null),
        }
    }

    /// Render the whole table
    pub fn render(&self, rows: &[Value]) -> Markup {
        let header = Markup::concat(
            self.columns
                .iter()
                .map(|c| Markup::element("th", None, Markup::text(&c.title))),
        );
        let head = Markup::element("thead", None, Markup::element("tr", None, header));

        let body = Markup::concat(rows.iter().map(|row| {
            let cells = Markup::concat(
                self.columns
                    .iter()
                    .map(|c| Markup::element("td", None, self.render_cell(c, row))),
            );
            Markup::element("tr", None, cells)
        }));
        let body = Markup::element("tbody", None, body);

        log::debug!("Rendered table with {} columns, {} rows", self.columns.len(), rows.len());

        Markup::element("table", self.class.as_deref(), head + body)
    }
}
