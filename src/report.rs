use serde::{Deserialize, Serialize};

/// Accounting for one `run` invocation, optionally written as JSON next to
/// the generated pages. Timestamps live here and only here; rendered pages
/// stay timestamp-free.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    pub started: String,
    pub finished: String,
    pub scanned: usize,
    pub produced: Vec<ProducedFile>,
    pub skipped: Vec<SkippedFile>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProducedFile {
    pub input: String,
    pub output: String,
    pub slug: String,
    pub input_sha256: String,
    pub subjects: usize,
    pub cards: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkippedFile {
    pub input: String,
    pub reason: String,
}
