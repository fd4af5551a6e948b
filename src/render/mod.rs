//! Rendering processed documents for output.

mod bionic;
mod json;

pub use bionic::{page_to_bionic_markdown, to_bionic_markdown};
pub use json::{report_to_json, to_json, DocumentReport, JsonFormat};
