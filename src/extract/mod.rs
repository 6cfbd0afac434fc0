pub mod regex;

pub use regex::RegexExtractor;

use crate::model::Report;

/// Narrow seam between raw page text and the data model. The renderer only
/// ever sees a `Report`, so this implementation can be swapped for a
/// tree-based parser without touching anything downstream.
pub trait Extractor {
    /// Parse one page. `fallback_heading` (the input file stem) is used when
    /// the document carries no heading element. Extraction never fails:
    /// structure that does not match is simply absent from the result.
    fn extract(&self, html: &str, fallback_heading: &str) -> Report;
}
