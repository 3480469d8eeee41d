use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Settings {
    pub dataset: DatasetConfig,
    pub logging: LoggingConfig,
    pub report: ReportConfig,
}

#[derive(Debug, Deserialize)]
pub struct DatasetConfig {
    /// Path to the merged order export (delimited text, headers required).
    pub path: String,
}

#[derive(Debug, Deserialize)]
pub struct ReportConfig {
    #[serde(default = "default_category_list_len")]
    pub top_categories: usize,
    #[serde(default = "default_category_list_len")]
    pub bottom_categories: usize,
    #[serde(default = "default_top_cities")]
    pub top_cities: usize,
}

fn default_category_list_len() -> usize {
    5
}

fn default_top_cities() -> usize {
    10
}

#[derive(Debug, Deserialize)]
pub struct LoggingConfig {
    pub log_dir: String,
    pub stdout_level: String,
    pub file_level: String,
}

use std::env;

pub fn load_settings() -> Result<Settings, config::ConfigError> {
    let config_path = env::var("VITRINE_CONFIG").unwrap_or_else(|_| "config".to_string());

    let settings: Settings = config::Config::builder()
        .add_source(config::File::with_name(&config_path))
        .build()?
        .try_deserialize()?;

    Ok(settings)
}
