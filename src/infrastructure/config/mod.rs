use std::path::{Path, PathBuf};

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};

use crate::domain::error::{AppError, Result};

pub const DEFAULT_CONFIG_FILE: &str = "dealsheet.toml";
pub const ENV_PREFIX: &str = "DEALSHEET_";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Xlsx,
    Csv,
}

impl OutputFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Xlsx => "xlsx",
            OutputFormat::Csv => "csv",
        }
    }
}

/// Storage locations and pipeline switches for one process
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Where uploads are staged before extraction
    pub upload_dir: PathBuf,

    /// Directory holding the single generated record file
    pub output_dir: PathBuf,

    /// File name of the generated record, without extension
    pub output_file_stem: String,

    pub output_format: OutputFormat,

    /// Upload extensions that are extracted; anything else is skipped
    pub allowed_extensions: Vec<String>,

    /// Continue with an empty extraction when the upload is not a readable
    /// workbook, instead of failing the submission
    pub fallback_on_unreadable_workbook: bool,

    /// Default tracing filter when RUST_LOG is unset
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            upload_dir: PathBuf::from("uploads"),
            output_dir: PathBuf::from("uploads"),
            output_file_stem: "data_record".to_string(),
            output_format: OutputFormat::Xlsx,
            allowed_extensions: vec!["xlsx".to_string(), "xlsm".to_string()],
            fallback_on_unreadable_workbook: false,
            log_filter: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Full path of the generated record file
    pub fn output_path(&self) -> PathBuf {
        self.output_dir.join(format!(
            "{}.{}",
            self.output_file_stem,
            self.output_format.extension()
        ))
    }

    pub fn validate(&self) -> std::result::Result<(), String> {
        if self.output_file_stem.trim().is_empty() {
            return Err("output_file_stem must not be empty".to_string());
        }
        if self.allowed_extensions.is_empty() {
            return Err("allowed_extensions must list at least one extension".to_string());
        }
        if let Some(ext) = self
            .allowed_extensions
            .iter()
            .find(|ext| ext.is_empty() || ext.contains('.'))
        {
            return Err(format!(
                "allowed_extensions entries must be bare extensions, got {:?}",
                ext
            ));
        }
        Ok(())
    }
}

pub struct ConfigService;

impl ConfigService {
    /// Defaults, then `dealsheet.toml` if present, then `DEALSHEET_*` variables
    pub fn load() -> Result<AppConfig> {
        let _ = dotenvy::dotenv();
        Self::load_from(Path::new(DEFAULT_CONFIG_FILE))
    }

    /// Same layering with an explicit TOML file; a missing file is skipped
    pub fn load_from(path: &Path) -> Result<AppConfig> {
        let config: AppConfig = Figment::from(Serialized::defaults(AppConfig::default()))
            .merge(Toml::file(path))
            .merge(Env::prefixed(ENV_PREFIX))
            .extract()
            .map_err(|e| AppError::ConfigError(e.to_string()))?;

        config
            .validate()
            .map_err(|e| AppError::ConfigError(format!("Invalid configuration: {}", e)))?;
        Ok(config)
    }
}
