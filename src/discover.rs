use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use crate::config::Discovery;

/// One discovered input file plus the slug used to name its output.
#[derive(Debug, Clone)]
pub struct InputPage {
    pub path: PathBuf,
    pub slug: String,
}

/// List `dir` for files matching "<prefix><slug>.<extension>", sorted by
/// path for a deterministic processing order.
pub fn discover(cfg: &Discovery, dir: &Path) -> Result<Vec<InputPage>> {
    let entries =
        std::fs::read_dir(dir).with_context(|| format!("reading input dir: {}", dir.display()))?;

    let mut pages = Vec::new();
    for entry in entries {
        let entry = entry.with_context(|| format!("reading entry in {}", dir.display()))?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if !name.starts_with(&cfg.prefix) {
            continue;
        }
        let ext_matches = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case(&cfg.extension));
        if !ext_matches {
            continue;
        }
        let slug = slug_for(cfg, &path);
        pages.push(InputPage { path, slug });
    }

    pages.sort_by(|a, b| a.path.cmp(&b.path));
    Ok(pages)
}

/// Slug = file stem with the discovery prefix stripped. Files that do not
/// carry the prefix (single-file conversion) use their whole stem.
pub fn slug_for(cfg: &Discovery, path: &Path) -> String {
    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or_default();
    stem.strip_prefix(&cfg.prefix).unwrap_or(stem).to_string()
}
