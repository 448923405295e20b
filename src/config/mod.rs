pub mod cli;
pub mod toml_config;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::logger::LogFormat;
use crate::utils::validation::{self, Validate};
#[cfg(feature = "cli")]
use toml_config::TomlConfig;

#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "course-planner")]
#[command(about = "Load a course catalog and look up courses and their prerequisites")]
pub struct CliConfig {
    /// Catalog file to load before showing the menu
    #[arg(short, long)]
    pub file: Option<String>,

    /// Path to TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Directory that relative catalog file names are resolved against
    #[arg(long)]
    pub base_dir: Option<String>,

    /// Log format: compact or json
    #[arg(long)]
    pub log_format: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// 合併命令列與 TOML 設定，命令列優先
    pub fn resolve(&self) -> Result<PlannerSettings> {
        let toml = match &self.config {
            Some(path) => {
                tracing::debug!("Loading configuration from: {}", path);
                TomlConfig::from_file(path)?
            }
            None => TomlConfig::default(),
        };
        toml.validate()?;

        let log_format = match &self.log_format {
            Some(format) => validation::validate_log_format("--log-format", format)?,
            None => toml.log_format()?,
        };

        let settings = PlannerSettings {
            catalog_file: self.file.clone().or(toml.catalog.file.clone()),
            base_dir: self
                .base_dir
                .clone()
                .unwrap_or_else(|| toml.base_dir().to_string()),
            log_level: toml.logging.level.clone(),
            log_format,
            verbose: self.verbose,
        };
        settings.validate()?;
        Ok(settings)
    }
}

/// Effective settings after command line and file configuration are merged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannerSettings {
    pub catalog_file: Option<String>,
    pub base_dir: String,
    pub log_level: Option<String>,
    pub log_format: LogFormat,
    pub verbose: bool,
}

impl Default for PlannerSettings {
    fn default() -> Self {
        Self {
            catalog_file: None,
            base_dir: ".".to_string(),
            log_level: None,
            log_format: LogFormat::default(),
            verbose: false,
        }
    }
}

impl ConfigProvider for PlannerSettings {
    fn catalog_file(&self) -> Option<&str> {
        self.catalog_file.as_deref()
    }

    fn base_dir(&self) -> &str {
        &self.base_dir
    }
}

impl Validate for PlannerSettings {
    fn validate(&self) -> Result<()> {
        validation::validate_path("base_dir", &self.base_dir)?;
        if let Some(file) = &self.catalog_file {
            validation::validate_path("file", file)?;
        }
        Ok(())
    }
}
