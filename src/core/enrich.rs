//! The `run` and `detect` commands: whole-catalog enrichment.
//!
//! Items are processed strictly one at a time. The only shared mutable state
//! is the description pool and the progress set, both updated between items,
//! so a crash loses at most the in-flight row. Per-item failures never abort
//! the run; configuration problems abort before any processing starts.

use std::collections::BTreeSet;
use std::path::PathBuf;
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use rand::Rng;
use tracing::{info, warn};

use crate::cli::{AppContext, DetectArgs, RunArgs};
use crate::core::category::{self, Category, Detection};
use crate::core::generate::{self, GenSettings};
use crate::infra::catalog::Catalog;
use crate::infra::config::{self, Config};
use crate::infra::progress;
use crate::llm::{ChatClient, GenerationClient};

/// Environment variable holding the service credential
pub const API_KEY_VAR: &str = "CEREBRAS_API_KEY";

/// Fully resolved run parameters: CLI flags override the config file, which
/// overrides built-in defaults.
#[derive(Debug, Clone)]
pub struct RunPlan {
    pub input: PathBuf,
    pub output: PathBuf,
    pub progress: PathBuf,
    pub overwrite: bool,
    pub limit: Option<usize>,
    pub item_delay: Duration,
    pub model: String,
    pub base_url: String,
    pub generation: GenSettings,
}

impl RunPlan {
    pub fn resolve(args: &RunArgs, cfg: &Config) -> Self {
        let generation = GenSettings {
            max_attempts: args.max_attempts.unwrap_or(cfg.run.max_attempts),
            similarity_threshold: args.threshold.unwrap_or(cfg.run.threshold),
            max_tokens: cfg.service.max_tokens,
            ..GenSettings::default()
        };

        Self {
            input: args
                .input
                .clone()
                .unwrap_or_else(|| PathBuf::from(&cfg.run.input)),
            output: args
                .output
                .clone()
                .unwrap_or_else(|| PathBuf::from(&cfg.run.output)),
            progress: args
                .progress
                .clone()
                .unwrap_or_else(|| PathBuf::from(&cfg.run.progress)),
            overwrite: args.overwrite,
            limit: args.limit,
            item_delay: Duration::from_secs_f64(args.delay.unwrap_or(cfg.run.delay_secs)),
            model: args
                .model
                .clone()
                .unwrap_or_else(|| cfg.service.model.clone()),
            base_url: args
                .base_url
                .clone()
                .unwrap_or_else(|| cfg.service.base_url.clone()),
            generation,
        }
    }
}

/// What happened over one whole run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct EnrichReport {
    /// Items successfully (re)generated
    pub generated: usize,
    /// Items accepted best-effort after similarity exhaustion
    pub best_effort: usize,
    /// Items skipped because of a fatal-for-item service error
    pub failed: usize,
}

/// Entry point for the `run` subcommand.
pub fn run(args: RunArgs, ctx: &AppContext) -> Result<()> {
    let cfg = config::load_config()?;
    let plan = RunPlan::resolve(&args, &cfg);

    // Secrets come from the environment, optionally via .env. A missing
    // credential aborts before anything is read or written; dry runs never
    // touch the service and get a pass.
    dotenvy::dotenv().ok();
    let api_key = if ctx.dry_run {
        String::new()
    } else {
        std::env::var(API_KEY_VAR).with_context(|| {
            format!("{API_KEY_VAR} not found. Set it in the environment or a .env file.")
        })?
    };

    let mut catalog = Catalog::read(&plan.input)?;
    if !ctx.quiet {
        println!("Total rows in CSV: {}", catalog.records.len());
    }

    let detection = category::detect(&catalog.rows());
    report_detection(&detection, ctx);

    let mut processed = if plan.overwrite {
        if !ctx.dry_run {
            progress::clear(&plan.progress)?;
        }
        if !ctx.quiet {
            println!("OVERWRITE MODE: Regenerating all SEO data from scratch.");
        }
        BTreeSet::new()
    } else {
        progress::load(&plan.progress)?
    };
    if !ctx.quiet {
        println!("Already processed: {} products", processed.len());
    }

    let eligible = select_items(&catalog, plan.overwrite, &processed);
    if !ctx.quiet {
        println!("Products needing SEO generation: {}", eligible.len());
    }

    if ctx.dry_run {
        print_dry_run(&catalog, &eligible, ctx);
        return Ok(());
    }

    if eligible.is_empty() {
        if !ctx.quiet {
            println!("Nothing to process. All products already have SEO data.");
        }
    } else {
        let client = ChatClient::new(&plan.base_url, api_key, plan.model.clone())?;
        let mut rng = rand::rng();

        let report = process_catalog(
            &mut catalog,
            detection.category,
            &client,
            &mut rng,
            &plan,
            &mut processed,
            ctx,
        )?;

        if !ctx.quiet {
            summarize(&report, ctx);
        }
    }

    catalog.write(&plan.output)?;
    if !ctx.quiet {
        println!("\nOutput written to: {}", plan.output.display());
    }

    Ok(())
}

/// Entry point for the `detect` subcommand.
pub fn detect_run(args: DetectArgs, ctx: &AppContext) -> Result<()> {
    let cfg = config::load_config()?;
    let input = args
        .input
        .unwrap_or_else(|| PathBuf::from(&cfg.run.input));

    let catalog = Catalog::read(&input)?;
    let detection = category::detect(&catalog.rows());

    report_detection(&detection, ctx);
    if ctx.quiet {
        // Quiet mode still answers the one question asked
        println!("{}", detection.category.label());
    }

    Ok(())
}

/// Pick the indices of rows that need generation this run.
///
/// Normal mode skips rows that already carry a generated description; both
/// modes honor the progress set so interrupted runs resume. Rows without a
/// title are never eligible.
pub fn select_items(
    catalog: &Catalog,
    overwrite: bool,
    processed: &BTreeSet<String>,
) -> Vec<usize> {
    catalog
        .rows()
        .iter()
        .filter(|row| {
            if row.title().is_empty() || processed.contains(row.handle()) {
                return false;
            }
            overwrite || row.seo_description().is_empty()
        })
        .map(|row| row.index)
        .collect()
}

/// Seed the similarity pool from descriptions already present in the export.
///
/// Force-regenerate runs start from an empty pool: everything will be
/// rewritten, so old text must not block new text.
pub fn seed_pool(catalog: &Catalog, overwrite: bool) -> Vec<String> {
    if overwrite {
        return Vec::new();
    }

    catalog
        .rows()
        .iter()
        .map(|row| row.seo_description())
        .filter(|d| !d.is_empty())
        .map(str::to_string)
        .collect()
}

/// Sequentially drive every eligible row through the generation loop.
///
/// Public so integration tests can run the whole pipeline against a scripted
/// client. The progress file is rewritten after each success; fatal-for-item
/// errors are reported and skipped, leaving the row eligible next run.
pub fn process_catalog<C, R>(
    catalog: &mut Catalog,
    category: Category,
    client: &C,
    rng: &mut R,
    plan: &RunPlan,
    processed: &mut BTreeSet<String>,
    ctx: &AppContext,
) -> Result<EnrichReport>
where
    C: GenerationClient,
    R: Rng + ?Sized,
{
    let mut eligible = select_items(catalog, plan.overwrite, processed);
    if let Some(limit) = plan.limit {
        eligible.truncate(limit);
    }

    let mut pool = seed_pool(catalog, plan.overwrite);
    let mut report = EnrichReport::default();

    let bar = if ctx.quiet {
        ProgressBar::hidden()
    } else {
        let pb = ProgressBar::new(eligible.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{bar:30} {pos}/{len} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar()),
        );
        pb
    };

    for (position, &index) in eligible.iter().enumerate() {
        let (handle, title, body) = {
            let rows = catalog.rows();
            let row = rows[index];
            (
                row.handle().to_string(),
                row.title().to_string(),
                row.body().to_string(),
            )
        };

        bar.set_message(title.clone());
        info!(%handle, %title, "generating SEO metadata");

        match generate::generate_seo(client, category, &title, &body, &pool, &plan.generation, rng)
        {
            Ok(generated) => {
                catalog.set_seo(index, &generated.title, &generated.description);

                // Pool grows before the next item so later rows are checked
                // against this one
                pool.push(generated.description.clone());

                processed.insert(handle);
                progress::save(&plan.progress, processed)?;

                if generated.unique {
                    report.generated += 1;
                } else {
                    report.best_effort += 1;
                    item_warning(
                        ctx,
                        &bar,
                        &format!(
                            "{title}: similarity stayed at {:.0}% after {} attempts, keeping last result",
                            generated.score * 100.0,
                            generated.attempts
                        ),
                    );
                }
            }
            Err(err) => {
                report.failed += 1;
                warn!(%handle, %err, "skipping product, will retry on next run");
                item_warning(ctx, &bar, &format!("{title}: {err}"));
            }
        }

        bar.inc(1);

        // Fixed inter-item pacing is the only rate limiting toward the service
        if position + 1 < eligible.len() {
            thread::sleep(plan.item_delay);
        }
    }

    bar.finish_and_clear();
    Ok(report)
}

fn report_detection(detection: &Detection, ctx: &AppContext) {
    if detection.fallback {
        let msg = format!(
            "WARNING: Could not confidently detect product type. Defaulting to {}.",
            detection.category.label()
        );
        if ctx.no_color {
            eprintln!("{msg}");
        } else {
            eprintln!("{}", msg.yellow());
        }
        return;
    }

    if !ctx.quiet {
        println!(
            "Detected product type: {} (score: {})",
            detection.category.label(),
            detection.winning_score()
        );

        let all = detection
            .scores
            .iter()
            .map(|(c, s)| format!("{}={s}", c.label()))
            .collect::<Vec<_>>()
            .join(", ");
        println!("  All scores: {all}");
    }
}

fn print_dry_run(catalog: &Catalog, eligible: &[usize], ctx: &AppContext) {
    if ctx.quiet {
        return;
    }

    let header = "DRY RUN: Would generate SEO for:";
    if ctx.no_color {
        println!("{header}");
    } else {
        println!("{}", header.yellow());
    }

    let rows = catalog.rows();
    for &index in eligible {
        println!("  {} ({})", rows[index].title(), rows[index].handle());
    }
}

fn item_warning(ctx: &AppContext, bar: &ProgressBar, msg: &str) {
    let line = if ctx.no_color {
        format!("! {msg}")
    } else {
        format!("{} {msg}", "!".yellow())
    };
    // Keep the warning visible above the live bar
    bar.println(line);
}

fn summarize(report: &EnrichReport, ctx: &AppContext) {
    let ok = format!(
        "{} generated ({} best-effort), {} failed",
        report.generated + report.best_effort,
        report.best_effort,
        report.failed
    );

    if ctx.no_color {
        println!("Done: {ok}");
    } else {
        println!("{} {ok}", "✓".green());
    }
}
