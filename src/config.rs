use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub discovery: Discovery,
    #[serde(default)]
    pub extraction: Extraction,
    #[serde(default)]
    pub rendering: Rendering,
    #[serde(default)]
    pub output: Output,
    #[serde(default)]
    pub logging: Logging,
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("reading config: {}", path.display()))?;
        let cfg: Config = toml::from_str(&raw).with_context(|| "parsing TOML")?;
        Ok(cfg)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            discovery: Default::default(),
            extraction: Default::default(),
            rendering: Default::default(),
            output: Default::default(),
            logging: Default::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Discovery {
    pub input_dir: String,
    pub prefix: String,
    pub extension: String,
}
impl Default for Discovery {
    fn default() -> Self {
        Self {
            input_dir: ".".into(),
            prefix: "고3 등급컷 ".into(),
            extension: "html".into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Extraction {
    pub normalize_unicode: bool,
}
impl Default for Extraction {
    fn default() -> Self {
        Self {
            normalize_unicode: true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Rendering {
    /// HTML-escape interpolated text. Set to false only when byte-compatible
    /// output with the legacy generator is required.
    pub escape_text: bool,
}
impl Default for Rendering {
    fn default() -> Self {
        Self { escape_text: true }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Output {
    /// Empty string writes each page next to its input.
    pub out_dir: String,
    pub suffix: String,
    pub write_report_json: bool,
    pub report_filename: String,
}
impl Default for Output {
    fn default() -> Self {
        Self {
            out_dir: "".into(),
            suffix: "-modern".into(),
            write_report_json: false,
            report_filename: "gradecut-report.json".into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Logging {
    pub level: String,
    pub json: bool,
    pub write_to_file: bool,
    pub file_path: String,
}
impl Default for Logging {
    fn default() -> Self {
        Self {
            level: "info".into(),
            json: false,
            write_to_file: false,
            file_path: "".into(),
        }
    }
}
