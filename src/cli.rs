use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Shared application context for global flags
#[derive(Clone, Debug)]
pub struct AppContext {
    pub quiet: bool,    // global --quiet
    pub no_color: bool, // global --no-color
    pub dry_run: bool,  // global --dry-run
}

#[derive(Parser)]
#[command(name = "seogen")]
#[command(
    about = "A lightweight CLI that enriches Shopify product CSV exports with generated, deduplicated SEO metadata"
)]
#[command(version, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Suppress progress bars and non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Show what would be done without calling the service or writing files
    #[arg(long, global = true)]
    pub dry_run: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate SEO metadata for every eligible row of the export
    Run(RunArgs),

    /// Print the per-category keyword scores and the detected category
    Detect(DetectArgs),

    /// Initialize a seogen.toml config file
    Init(InitArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(Parser, Debug)]
pub struct RunArgs {
    /// Input product export CSV (default: csv_input/product_export.csv)
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Output CSV path (default: csv_output/product_export_seo.csv)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Progress checkpoint file (default: csv_output/progress.json)
    #[arg(long)]
    pub progress: Option<PathBuf>,

    /// Regenerate all rows from scratch, clearing the progress file first
    #[arg(long)]
    pub overwrite: bool,

    /// Model identifier sent to the generation service
    #[arg(long)]
    pub model: Option<String>,

    /// Base URL of the OpenAI-compatible generation endpoint
    #[arg(long)]
    pub base_url: Option<String>,

    /// Pause between items, in seconds
    #[arg(long)]
    pub delay: Option<f64>,

    /// Similarity threshold above which a description is regenerated (0.0-1.0)
    #[arg(long)]
    pub threshold: Option<f32>,

    /// Generation attempts per item before keeping the last candidate
    #[arg(long)]
    pub max_attempts: Option<usize>,

    /// Process at most N items this run
    #[arg(long)]
    pub limit: Option<usize>,
}

#[derive(Parser, Debug)]
pub struct DetectArgs {
    /// Input product export CSV (default: csv_input/product_export.csv)
    #[arg(short, long)]
    pub input: Option<PathBuf>,
}

#[derive(Parser)]
pub struct InitArgs {
    /// Directory to initialize config in
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Overwrite existing config file
    #[arg(long)]
    pub force: bool,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

#[derive(Parser)]
pub struct CompletionsArgs {
    /// Target shell
    #[arg(value_enum)]
    pub shell: Shell,

    /// Output directory; if omitted and --stdout not set, prints error
    #[arg(long)]
    pub out_dir: Option<PathBuf>,

    /// Print completion script to stdout instead of a file
    #[arg(long)]
    pub stdout: bool,
}
