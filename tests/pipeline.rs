//! Whole-pipeline tests over a scripted generation client: eligibility,
//! resumption, pool growth, degraded outcomes, and checkpointing.

use std::cell::RefCell;
use std::collections::{BTreeSet, VecDeque};
use std::path::PathBuf;
use std::time::Duration;

use assert_fs::TempDir;
use assert_fs::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

use seogen::cli::AppContext;
use seogen::core::enrich::{EnrichReport, RunPlan, process_catalog, seed_pool, select_items};
use seogen::core::generate::GenSettings;
use seogen::core::{Category, detect};
use seogen::infra::Catalog;
use seogen::infra::progress;
use seogen::llm::{GenerationClient, GenerationRequest, ServiceError};

/// Pops canned results in order; records every prompt it saw.
struct ScriptedClient {
    script: RefCell<VecDeque<Result<String, ServiceError>>>,
    prompts: RefCell<Vec<String>>,
}

impl ScriptedClient {
    fn new(script: Vec<Result<String, ServiceError>>) -> Self {
        Self {
            script: RefCell::new(script.into()),
            prompts: RefCell::new(Vec::new()),
        }
    }

    fn calls(&self) -> usize {
        self.prompts.borrow().len()
    }
}

impl GenerationClient for ScriptedClient {
    fn complete(&self, request: &GenerationRequest<'_>) -> Result<String, ServiceError> {
        self.prompts.borrow_mut().push(request.prompt.to_string());
        self.script
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(ServiceError::Fatal("script exhausted".into())))
    }
}

fn response(desc: &str) -> Result<String, ServiceError> {
    Ok(format!("SEO Title: ignored\nSEO Description: {desc}"))
}

fn quiet_ctx() -> AppContext {
    AppContext { quiet: true, no_color: true, dry_run: false }
}

fn plan(dir: &TempDir, overwrite: bool) -> RunPlan {
    RunPlan {
        input: PathBuf::new(),
        output: PathBuf::new(),
        progress: dir.path().join("progress.json"),
        overwrite,
        limit: None,
        item_delay: Duration::ZERO,
        model: "test-model".to_string(),
        base_url: "http://unused.test".to_string(),
        generation: GenSettings {
            retry_delay: Duration::ZERO,
            backoff_unit: Duration::ZERO,
            ..GenSettings::default()
        },
    }
}

fn catalog_from(dir: &TempDir, csv: &str) -> Catalog {
    let file = dir.child("export.csv");
    file.write_str(csv).unwrap();
    Catalog::read(file.path()).unwrap()
}

const CLOCK_CSV: &str = "\
Handle,Title,Body (HTML),Type,Tags,SEO Title,SEO Description
p1,Nordic Minimalist Silent Wall Clock 12 Inch,<p>Scandinavian design wall clock with silent sweep movement.</p>,Home,clock,,
p2,Farmhouse Oak Wall Clock,<p>Rustic oak clock face.</p>,Home,clock,,
";

#[test]
fn end_to_end_example_enriches_row_and_grows_pool() {
    let dir = TempDir::new().unwrap();
    let mut catalog = catalog_from(
        &dir,
        "Handle,Title,Body (HTML),Type,Tags,SEO Title,SEO Description\n\
         p1,Nordic Minimalist Silent Wall Clock 12 Inch,<p>Scandinavian design...</p>,Home,clock,,\n",
    );

    let detection = detect(&catalog.rows());
    assert_eq!(detection.category, Category::WallClocks);

    let client = ScriptedClient::new(vec![Ok(
        "SEO Title: Nordic Minimalist Silent Wall Clock 12 Inch\n\
         SEO Description: Scandinavian-style wall clock with silent sweep movement..."
            .to_string(),
    )]);
    let mut rng = StdRng::seed_from_u64(1);
    let mut processed = BTreeSet::new();

    let report = process_catalog(
        &mut catalog,
        detection.category,
        &client,
        &mut rng,
        &plan(&dir, false),
        &mut processed,
        &quiet_ctx(),
    )
    .unwrap();

    assert_eq!(report, EnrichReport { generated: 1, best_effort: 0, failed: 0 });
    assert_eq!(client.calls(), 1);

    let rows = catalog.rows();
    // Title is the input title, verbatim
    let record = &catalog.records[0];
    assert_eq!(record.get(5), Some("Nordic Minimalist Silent Wall Clock 12 Inch"));
    let desc = rows[0].seo_description();
    assert!(desc.chars().count() <= 320);
    assert!(!desc.contains('<'));
    assert!(desc.starts_with("Scandinavian-style wall clock"));

    // Accepted description entered the pool exactly once
    assert_eq!(seed_pool(&catalog, false), vec![desc.to_string()]);

    // Progress was persisted for the handle
    let saved = progress::load(&dir.path().join("progress.json")).unwrap();
    assert!(saved.contains("p1"));
}

#[test]
fn progress_set_suppresses_generation_entirely() {
    let dir = TempDir::new().unwrap();
    let mut catalog = catalog_from(&dir, CLOCK_CSV);

    let mut processed: BTreeSet<String> = BTreeSet::new();
    processed.insert("p1".to_string());

    let client = ScriptedClient::new(vec![response("A fresh oak farmhouse wall clock.")]);
    let mut rng = StdRng::seed_from_u64(1);

    let report = process_catalog(
        &mut catalog,
        Category::WallClocks,
        &client,
        &mut rng,
        &plan(&dir, false),
        &mut processed,
        &quiet_ctx(),
    )
    .unwrap();

    // Only p2 was generated; no request ever mentioned p1's title
    assert_eq!(report.generated, 1);
    assert_eq!(client.calls(), 1);
    for prompt in client.prompts.borrow().iter() {
        assert!(!prompt.contains("Nordic Minimalist"));
    }
}

#[test]
fn normal_mode_skips_rows_with_existing_descriptions() {
    let dir = TempDir::new().unwrap();
    let catalog = catalog_from(
        &dir,
        "Handle,Title,Body (HTML),Type,Tags,SEO Title,SEO Description\n\
         p1,Clock A,,,,Old,Existing description\n\
         p2,Clock B,,,,,\n\
         p3,,,,,,\n",
    );

    let eligible = select_items(&catalog, false, &BTreeSet::new());

    // p1 has SEO already, p3 has no title
    assert_eq!(eligible, vec![1]);

    // Overwrite mode reprocesses p1 but still never the title-less row
    let eligible = select_items(&catalog, true, &BTreeSet::new());
    assert_eq!(eligible, vec![0, 1]);
}

#[test]
fn overwrite_mode_starts_from_an_empty_pool() {
    let dir = TempDir::new().unwrap();
    let catalog = catalog_from(
        &dir,
        "Handle,Title,Body (HTML),Type,Tags,SEO Title,SEO Description\n\
         p1,Clock A,,,,Old,Existing description\n",
    );

    assert_eq!(seed_pool(&catalog, false), vec!["Existing description".to_string()]);
    assert!(seed_pool(&catalog, true).is_empty());
}

#[test]
fn fatal_item_error_skips_row_and_continues() {
    let dir = TempDir::new().unwrap();
    let mut catalog = catalog_from(&dir, CLOCK_CSV);

    let client = ScriptedClient::new(vec![
        Err(ServiceError::Fatal("401 unauthorized".into())),
        response("A rustic farmhouse oak wall clock for kitchens."),
    ]);
    let mut rng = StdRng::seed_from_u64(1);
    let mut processed = BTreeSet::new();

    let report = process_catalog(
        &mut catalog,
        Category::WallClocks,
        &client,
        &mut rng,
        &plan(&dir, false),
        &mut processed,
        &quiet_ctx(),
    )
    .unwrap();

    assert_eq!(report.failed, 1);
    assert_eq!(report.generated, 1);

    // The failed row keeps its empty SEO fields and stays out of progress
    assert_eq!(catalog.rows()[0].seo_description(), "");
    assert!(!processed.contains("p1"));
    assert!(processed.contains("p2"));
}

#[test]
fn similarity_exhaustion_is_a_degraded_success() {
    let dir = TempDir::new().unwrap();
    let mut catalog = catalog_from(
        &dir,
        "Handle,Title,Body (HTML),Type,Tags,SEO Title,SEO Description\n\
         p1,Clock A,,,,,Seeded identical description\n\
         p2,Clock B,,,,,\n",
    );

    // Every candidate for p2 collides with the seeded pool entry
    let client = ScriptedClient::new(vec![
        response("Seeded identical description"),
        response("Seeded identical description"),
        response("Seeded identical description"),
    ]);
    let mut rng = StdRng::seed_from_u64(1);
    let mut processed = BTreeSet::new();

    let report = process_catalog(
        &mut catalog,
        Category::WallClocks,
        &client,
        &mut rng,
        &plan(&dir, false),
        &mut processed,
        &quiet_ctx(),
    )
    .unwrap();

    assert_eq!(client.calls(), 3, "one request per attempt");
    assert_eq!(report, EnrichReport { generated: 0, best_effort: 1, failed: 0 });

    // Best-effort result is still written and checkpointed
    assert_eq!(catalog.rows()[1].seo_description(), "Seeded identical description");
    assert!(processed.contains("p2"));
}

#[test]
fn limit_caps_the_number_of_items() {
    let dir = TempDir::new().unwrap();
    let mut catalog = catalog_from(&dir, CLOCK_CSV);

    let client = ScriptedClient::new(vec![response("A minimalist silent wall clock.")]);
    let mut rng = StdRng::seed_from_u64(1);
    let mut processed = BTreeSet::new();

    let mut p = plan(&dir, false);
    p.limit = Some(1);

    let report = process_catalog(
        &mut catalog,
        Category::WallClocks,
        &client,
        &mut rng,
        &p,
        &mut processed,
        &quiet_ctx(),
    )
    .unwrap();

    assert_eq!(report.generated, 1);
    assert_eq!(client.calls(), 1);
    assert_eq!(catalog.rows()[1].seo_description(), "");
}

#[test]
fn progress_file_is_rewritten_after_every_success() {
    let dir = TempDir::new().unwrap();
    let mut catalog = catalog_from(&dir, CLOCK_CSV);

    let client = ScriptedClient::new(vec![
        response("A Scandinavian silent wall clock for bedrooms."),
        Err(ServiceError::Fatal("boom".into())),
    ]);
    let mut rng = StdRng::seed_from_u64(1);
    let mut processed = BTreeSet::new();

    process_catalog(
        &mut catalog,
        Category::WallClocks,
        &client,
        &mut rng,
        &plan(&dir, false),
        &mut processed,
        &quiet_ctx(),
    )
    .unwrap();

    // Crash after p1 would still find p1 durably recorded
    let saved = progress::load(&dir.path().join("progress.json")).unwrap();
    assert_eq!(saved.into_iter().collect::<Vec<_>>(), vec!["p1".to_string()]);
}
