//! Exercise result history for the results page
//!
//! - json: nested access and slim copies of result documents
//! - result: the result list and grade status
//! - page: the rendered results page

pub mod error;
pub mod json;
pub mod page;
pub mod result;

pub use error::{CoreError, CoreResult, ErrorCode};
pub use page::{render_results_page, results_table};
pub use result::{GradeStatus, ResultList, ResultSummary};
