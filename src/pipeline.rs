use crate::{
    config::Config,
    discover::{self, InputPage},
    extract::Extractor,
    render::Renderer,
    report::{ProducedFile, RunReport, SkippedFile},
    util::{ensure_dir, now_rfc3339, sha256_hex},
};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Per-run orchestration: discover, then for each input read → extract →
/// render → write, fully sequential. Each file is independent; the only
/// shared resource is the filesystem.
pub struct Pipeline<E: Extractor> {
    cfg: Config,
    extractor: E,
    renderer: Renderer,
}

impl<E: Extractor> Pipeline<E> {
    pub fn new(cfg: &Config, extractor: E) -> Self {
        Self {
            cfg: cfg.clone(),
            extractor,
            renderer: Renderer::new(&cfg.rendering),
        }
    }

    /// Convert every discovered page under `input_dir`. `out_dir` overrides
    /// the configured output directory when given.
    pub fn run(&self, input_dir: &Path, out_dir: Option<&Path>) -> Result<RunReport> {
        let started = now_rfc3339();
        let pages = discover::discover(&self.cfg.discovery, input_dir)?;
        info!(
            "discovered {} input page(s) in {}",
            pages.len(),
            input_dir.display()
        );

        let mut produced = Vec::new();
        let mut skipped = Vec::new();
        for page in &pages {
            let out_path = self.output_path(page, out_dir);
            match self.convert_page(page, &out_path)? {
                Some(record) => {
                    println!("Generated {}", record.output);
                    produced.push(record);
                }
                None => {
                    debug!("no subjects in {}; skipping", page.path.display());
                    skipped.push(SkippedFile {
                        input: page.path.display().to_string(),
                        reason: "no subjects".into(),
                    });
                }
            }
        }

        let report = RunReport {
            started,
            finished: now_rfc3339(),
            scanned: pages.len(),
            produced,
            skipped,
        };
        info!(
            "run complete: {} produced, {} skipped",
            report.produced.len(),
            report.skipped.len()
        );

        if self.cfg.output.write_report_json {
            let dir = out_dir
                .map(Path::to_path_buf)
                .unwrap_or_else(|| self.report_dir(input_dir));
            ensure_dir(&dir)?;
            let path = dir.join(&self.cfg.output.report_filename);
            std::fs::write(&path, serde_json::to_string_pretty(&report)?)
                .with_context(|| format!("writing run report: {}", path.display()))?;
        }

        Ok(report)
    }

    /// Convert one page to `out_path`. Returns `None` (and writes nothing)
    /// when extraction finds no subjects.
    pub fn convert_page(&self, page: &InputPage, out_path: &Path) -> Result<Option<ProducedFile>> {
        let html = std::fs::read_to_string(&page.path)
            .with_context(|| format!("reading input: {}", page.path.display()))?;

        let stem = page
            .path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or_default();
        let report = self.extractor.extract(&html, stem);
        if report.is_empty() {
            return Ok(None);
        }

        let document = self.renderer.render_page(&report);
        if let Some(parent) = out_path.parent() {
            if !parent.as_os_str().is_empty() {
                ensure_dir(parent)?;
            }
        }
        std::fs::write(out_path, &document)
            .with_context(|| format!("writing output: {}", out_path.display()))?;

        Ok(Some(ProducedFile {
            input: page.path.display().to_string(),
            output: out_path.display().to_string(),
            slug: page.slug.clone(),
            input_sha256: sha256_hex(html.as_bytes()),
            subjects: report.subjects.len(),
            cards: report.card_count(),
        }))
    }

    /// "<slug><suffix>.html" in the override dir, the configured out_dir, or
    /// next to the input, in that order of precedence.
    pub fn output_path(&self, page: &InputPage, out_dir: Option<&Path>) -> PathBuf {
        let file_name = format!("{}{}.html", page.slug, self.cfg.output.suffix);
        let dir = out_dir.map(Path::to_path_buf).unwrap_or_else(|| {
            if self.cfg.output.out_dir.is_empty() {
                page.path.parent().unwrap_or(Path::new(".")).to_path_buf()
            } else {
                PathBuf::from(&self.cfg.output.out_dir)
            }
        });
        dir.join(file_name)
    }

    fn report_dir(&self, input_dir: &Path) -> PathBuf {
        if self.cfg.output.out_dir.is_empty() {
            input_dir.to_path_buf()
        } else {
            PathBuf::from(&self.cfg.output.out_dir)
        }
    }
}
