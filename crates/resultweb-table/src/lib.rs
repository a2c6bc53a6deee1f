//! HTML table rendering for result lists
//!
//! Modules:
//! - render: render hooks and the defaults injected into every table
//! - table: columns and the table itself
//! - page: the HTML page shell

pub mod page;
pub mod render;
pub mod table;

pub use page::base_html;
pub use render::{escape_value, lookup, RenderDefaults, RenderHook};
pub use table::{Column, Table};
