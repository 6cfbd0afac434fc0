use crate::{
    config::Config,
    discover::{self, InputPage},
    extract::{Extractor, RegexExtractor},
    pipeline::Pipeline,
};
use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::warn;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

#[derive(Parser, Debug)]
#[command(name = "gradecut")]
#[command(about = "Deterministic grade-cutoff page restyler (regex extraction + static HTML rendering)")]
pub struct Args {
    #[command(subcommand)]
    pub cmd: Command,

    /// Path to config TOML. If omitted, uses ./gradecut.toml if present.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Override log level (trace/debug/info/warn/error).
    #[arg(long)]
    pub log_level: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Convert every discovered input page.
    Run {
        /// Directory scanned for input pages; defaults to [discovery].input_dir.
        #[arg(long)]
        input_dir: Option<PathBuf>,
        /// Write outputs here instead of next to each input.
        #[arg(long)]
        out_dir: Option<PathBuf>,
    },
    /// Extract one page and print the parsed report as JSON.
    Extract {
        #[arg(long)]
        input: PathBuf,
    },
    /// Convert a single page regardless of its file name.
    Render {
        #[arg(long)]
        input: PathBuf,
        /// Output file; defaults to "<slug><suffix>.html" next to the input.
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

pub fn dispatch(args: Args) -> Result<()> {
    let cfg_path = resolve_config_path(args.config.as_deref())?;
    let cfg = Config::load(&cfg_path)?;
    let _guard = init_logging(&args, &cfg)?;

    match &args.cmd {
        Command::Run { input_dir, out_dir } => run(&cfg, input_dir.as_deref(), out_dir.as_deref()),
        Command::Extract { input } => extract(&cfg, input),
        Command::Render { input, output } => render_single(&cfg, input, output.as_deref()),
    }
}

fn resolve_config_path(user: Option<&Path>) -> Result<PathBuf> {
    if let Some(p) = user {
        return Ok(p.to_path_buf());
    }
    let default = PathBuf::from("gradecut.toml");
    if default.exists() {
        Ok(default)
    } else {
        Ok(PathBuf::from("gradecut.example.toml"))
    }
}

fn init_logging(args: &Args, cfg: &Config) -> Result<Option<WorkerGuard>> {
    let level = args
        .log_level
        .as_deref()
        .unwrap_or(cfg.logging.level.as_str());

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let stdout_layer = if cfg.logging.json {
        tracing_subscriber::fmt::layer()
            .json()
            .with_target(true)
            .boxed()
    } else {
        tracing_subscriber::fmt::layer()
            .with_target(true)
            .boxed()
    };

    let (file_layer, guard) = if cfg.logging.write_to_file {
        let path = if cfg.logging.file_path.is_empty() {
            PathBuf::from("gradecut.log")
        } else {
            PathBuf::from(&cfg.logging.file_path)
        };
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                crate::util::ensure_dir(parent)?;
            }
        }
        let file = std::fs::File::create(&path)
            .with_context(|| format!("create log file: {}", path.display()))?;
        let (non_blocking, guard) = tracing_appender::non_blocking(file);
        let layer = tracing_subscriber::fmt::layer()
            .with_writer(non_blocking)
            .with_ansi(false)
            .with_target(true)
            .boxed();
        (Some(layer), Some(guard))
    } else {
        (None, None)
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stdout_layer)
        .with(file_layer)
        .try_init()
        .map_err(|e| anyhow!("failed to init logging: {e}"))?;

    Ok(guard)
}

fn run(cfg: &Config, input_dir: Option<&Path>, out_dir: Option<&Path>) -> Result<()> {
    let input_dir = input_dir
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(&cfg.discovery.input_dir));
    let pipeline = Pipeline::new(cfg, RegexExtractor::new(&cfg.extraction));
    pipeline.run(&input_dir, out_dir)?;
    Ok(())
}

fn extract(cfg: &Config, input: &Path) -> Result<()> {
    validate_input(input)?;
    let html = std::fs::read_to_string(input)
        .with_context(|| format!("reading input: {}", input.display()))?;
    let stem = input.file_stem().and_then(|s| s.to_str()).unwrap_or_default();
    let extractor = RegexExtractor::new(&cfg.extraction);
    let report = extractor.extract(&html, stem);
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn render_single(cfg: &Config, input: &Path, output: Option<&Path>) -> Result<()> {
    validate_input(input)?;
    let page = InputPage {
        path: input.to_path_buf(),
        slug: discover::slug_for(&cfg.discovery, input),
    };
    let pipeline = Pipeline::new(cfg, RegexExtractor::new(&cfg.extraction));
    let out_path = output
        .map(Path::to_path_buf)
        .unwrap_or_else(|| pipeline.output_path(&page, None));
    match pipeline.convert_page(&page, &out_path)? {
        Some(record) => {
            println!("Generated {}", record.output);
            Ok(())
        }
        None => Err(anyhow!("no subjects extracted from {}", input.display())),
    }
}

fn validate_input(input: &Path) -> Result<()> {
    if !input.exists() {
        return Err(anyhow!("input does not exist: {}", input.display()));
    }
    if let Some(ext) = input.extension().and_then(|s| s.to_str()) {
        if !ext.eq_ignore_ascii_case("html") {
            warn!("input does not look like HTML: {}", input.display());
        }
    }
    Ok(())
}
