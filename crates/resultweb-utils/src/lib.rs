//! Utility functions and helpers
//!
//! Display formatting for the results page:
//! - markup: escaped text and typed HTML fragments
//! - timestamp: fixed-width date/time strings
//! - name: highlighted dotted class names

pub mod error;
pub mod markup;
pub mod name;
pub mod timestamp;

pub use error::{FormatError, FormatResult};
pub use markup::{escape_text, Markup};
pub use name::format_dotted_name;
pub use timestamp::{format_timestamp, parse_iso8601, parse_iso8601_instant, FIGURE_SPACE};
