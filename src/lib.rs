//! **seogen** - CLI that enriches Shopify product CSV exports with generated,
//! deduplicated SEO metadata
//!
//! One detected category per export drives vocabulary and prompt choice; each
//! row runs through a generate/verify/retry loop gated by catalog-wide
//! similarity checking, with progress checkpointed after every success.

/// Command-line interface with clap integration
pub mod cli;

/// Shell completion generation
pub mod completion;

/// Core generation pipeline - detection, variation, gating, orchestration
pub mod core {
    /// Category detection over the whole export (stable argmax + fallback)
    pub mod category;
    pub use self::category::{Category, Detection, detect};

    /// The `run` and `detect` commands driving the sequential item loop
    pub mod enrich;
    pub use self::enrich::{detect_run, run as enrich_run};

    /// Per-item generate/verify/retry state machine with server backoff
    pub mod generate;
    pub use self::generate::{GenSettings, Generated, generate_seo};

    /// Response parsing and cleanup (fixed-title policy, caps, substitutions)
    pub mod sanitize;

    /// Cross-catalog similarity gate over the description pool
    pub mod similarity;

    /// Prompt variation sampling with an injected randomness source
    pub mod variation;

    /// Static keyword lists, vocabulary pools, and prompt templates
    pub mod vocab;
}

/// Infrastructure - configuration, catalog I/O, and utilities
pub mod infra {
    /// Catalog CSV reading/writing with pass-through column preservation
    pub mod catalog;
    pub use self::catalog::{Catalog, Columns, ProductRow};

    /// Configuration management with TOML support and env overrides
    pub mod config;
    pub use self::config::{Config, init as config_init, load_config};

    /// Markup stripping for prompt bodies
    pub mod html;

    /// Durable progress checkpointing (atomic JSON overwrite)
    pub mod progress;
}

/// Generation service boundary - client trait, HTTP client, error taxonomy
pub mod llm;

// Strategic re-exports for clean CLI interface
pub use self::core::{Category, detect_run, enrich_run, generate_seo};
pub use self::infra::{Catalog, Config, load_config};
pub use cli::{AppContext, Cli, Commands};
pub use llm::{ChatClient, GenerationClient, GenerationRequest, ServiceError};
