use anyhow::Result;
use clap::Parser;
use seogen::cli::{AppContext, Cli, Commands};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Diagnostics go to stderr; RUST_LOG overrides the default level
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    // Build a context once, pass everywhere
    let ctx = AppContext {
        quiet: cli.quiet,
        no_color: cli.no_color,
        dry_run: cli.dry_run,
    };

    match cli.command {
        Commands::Run(args) => seogen::core::enrich_run(args, &ctx),
        Commands::Detect(args) => seogen::core::detect_run(args, &ctx),
        Commands::Init(args) => seogen::infra::config::init(args, &ctx),
        Commands::Completions(args) => seogen::completion::run(args),
    }
}
