use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::cli::{AppContext, InitArgs};
use crate::core::similarity;
use crate::llm;

/// On-disk defaults for the enrichment run. Every field can be overridden by
/// a CLI flag; the file itself is optional.
#[derive(Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct Config
{
    /// Run-loop defaults
    pub run: RunConfig,

    /// Generation service defaults
    pub service: ServiceConfig,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig
{
    /// Input product export
    pub input: String,
    /// Enriched output location
    pub output: String,
    /// Progress checkpoint file
    pub progress: String,
    /// Pause between items, in seconds
    pub delay_secs: f64,
    /// Similarity rejection threshold
    pub threshold: f32,
    /// Generation attempts per item
    pub max_attempts: usize,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig
{
    /// OpenAI-compatible endpoint base URL
    pub base_url: String,
    /// Model identifier
    pub model: String,
    /// Output length bound per request, in tokens
    pub max_tokens: usize,
}

impl Default for Config
{
    fn default() -> Self
    {
        Self { run: RunConfig::default(), service: ServiceConfig::default() }
    }
}

impl Default for RunConfig
{
    fn default() -> Self
    {
        Self {
            input: "csv_input/product_export.csv".to_string(),
            output: "csv_output/product_export_seo.csv".to_string(),
            progress: "csv_output/progress.json".to_string(),
            delay_secs: 5.0,
            threshold: similarity::DEFAULT_THRESHOLD,
            max_attempts: 3,
        }
    }
}

impl Default for ServiceConfig
{
    fn default() -> Self
    {
        Self {
            base_url: llm::DEFAULT_BASE_URL.to_string(),
            model: llm::DEFAULT_MODEL.to_string(),
            max_tokens: 256,
        }
    }
}

pub fn load_config() -> Result<Config>
{
    let mut builder = config::Config::builder();

    // Load from config files in priority order
    let config_paths = ["seogen.toml", ".seogen.toml"];

    for path in &config_paths
    {
        if Path::new(path).exists()
        {
            builder = builder.add_source(config::File::with_name(path));
            break;
        }
    }

    // Add environment variables with SEOGEN_ prefix (SEOGEN_RUN_DELAY_SECS, ...)
    builder = builder.add_source(
        config::Environment::with_prefix("SEOGEN")
            .separator("_")
            .try_parsing(true),
    );

    let cfg = builder
        .build()
        .context("Failed to load configuration")?;
    let parsed: Config = cfg
        .try_deserialize()
        .context("Failed to parse configuration")?;

    Ok(parsed)
}

pub fn init(
    args: InitArgs,
    ctx: &AppContext,
) -> Result<()>
{
    let config_path = args
        .path
        .join("seogen.toml");

    if config_path.exists() && !args.force
    {
        anyhow::bail!(
            "Config file already exists at {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    let config = Config::default();
    let toml_string =
        toml::to_string_pretty(&config).context("Failed to serialize default config")?;

    std::fs::write(&config_path, toml_string).context("Failed to write config file")?;

    if !ctx.quiet
    {
        println!("Created config file at {}", config_path.display());
    }
    Ok(())
}
