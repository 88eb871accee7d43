//! Per-item generation orchestration.
//!
//! Drives one product through prompt construction, the service call with
//! server-error backoff, response sanitizing, and the similarity gate.
//! Rejected candidates get a fresh variation and a hotter temperature, up to
//! a fixed attempt budget; an exhausted budget still returns the last
//! candidate, flagged as not guaranteed unique. Appending accepted
//! descriptions to the shared pool is the caller's job, which is what keeps
//! the pool strictly ordered by item.

use std::thread;
use std::time::Duration;

use rand::Rng;
use tracing::{debug, warn};

use crate::core::category::Category;
use crate::core::sanitize;
use crate::core::similarity;
use crate::core::variation;
use crate::core::vocab::SYSTEM_INSTRUCTION;
use crate::infra::html;
use crate::llm::{GenerationClient, GenerationRequest, ServiceError};

/// Knobs for the per-item loop. All delays are injectable so tests run with
/// zero pacing.
#[derive(Debug, Clone)]
pub struct GenSettings {
    /// Generation attempts per item before giving up on uniqueness
    pub max_attempts: usize,
    /// Temperature of the first attempt
    pub base_temperature: f32,
    /// Temperature increase per rejected attempt
    pub temperature_step: f32,
    /// Output length bound passed to the service
    pub max_tokens: usize,
    /// Similarity gate threshold
    pub similarity_threshold: f32,
    /// Total tries per request when the service reports a transient error
    pub server_retries: usize,
    /// Backoff unit; the n-th retry waits n × this
    pub backoff_unit: Duration,
    /// Pause between generation attempts after a similarity rejection
    pub retry_delay: Duration,
}

impl Default for GenSettings {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            base_temperature: 0.5,
            temperature_step: 0.15,
            max_tokens: 256,
            similarity_threshold: similarity::DEFAULT_THRESHOLD,
            server_retries: 5,
            backoff_unit: Duration::from_secs(8),
            retry_delay: Duration::from_secs(5),
        }
    }
}

/// Outcome of one item's generation loop.
#[derive(Debug, Clone)]
pub struct Generated {
    /// Always the catalog title, capped
    pub title: String,
    /// Sanitized description of the final candidate
    pub description: String,
    /// Requests actually issued (1-based)
    pub attempts: usize,
    /// False when the attempt budget ran out and the last candidate was kept
    pub unique: bool,
    /// Maximum pool similarity of the final candidate
    pub score: f32,
}

/// Run the generate/verify/retry loop for a single product.
///
/// `pool` is the shared set of previously accepted descriptions; it is only
/// read here. Transient service failures are retried with linear backoff
/// inside each attempt; any surfaced `ServiceError` is fatal for this item
/// and the caller decides whether the run continues.
pub fn generate_seo<C, R>(
    client: &C,
    category: Category,
    title: &str,
    body_html: &str,
    pool: &[String],
    settings: &GenSettings,
    rng: &mut R,
) -> Result<Generated, ServiceError>
where
    C: GenerationClient,
    R: Rng + ?Sized,
{
    let clean_body = html::strip_markup(body_html);
    let template = category.prompt_template();

    let mut last: Option<(String, String, f32)> = None;
    let attempts = settings.max_attempts.max(1);

    for attempt in 0..attempts {
        let hint = variation::variation_hint(category, rng);
        let prompt = template
            .replace("{variation_hint}", &hint)
            .replace("{title}", title)
            .replace("{body}", &clean_body);

        let request = GenerationRequest {
            system: SYSTEM_INSTRUCTION,
            prompt: &prompt,
            max_tokens: settings.max_tokens,
            temperature: settings.base_temperature
                + settings.temperature_step * attempt as f32,
        };

        let raw = request_with_backoff(client, &request, settings)?;
        let (seo_title, seo_description) = sanitize::parse_response(&raw, title);

        let verdict =
            similarity::check(&seo_description, pool, settings.similarity_threshold);

        if verdict.accepted {
            if attempt > 0 {
                debug!(attempts = attempt + 1, "needed retries to get a unique description");
            }
            return Ok(Generated {
                title: seo_title,
                description: seo_description,
                attempts: attempt + 1,
                unique: true,
                score: verdict.score,
            });
        }

        debug!(
            attempt = attempt + 1,
            score = verdict.score,
            "candidate too similar to an accepted description, retrying"
        );
        last = Some((seo_title, seo_description, verdict.score));

        if attempt + 1 < attempts {
            thread::sleep(settings.retry_delay);
        }
    }

    // Budget exhausted: keep the best-effort last candidate
    let (title, description, score) =
        last.unwrap_or_else(|| (title.to_string(), String::new(), 0.0));

    warn!(
        score,
        threshold = settings.similarity_threshold,
        "similarity stayed above threshold after all attempts, using last result"
    );

    Ok(Generated { title, description, attempts, unique: false, score })
}

/// Issue one request, absorbing transient failures with escalating waits.
///
/// The n-th retry sleeps n × `backoff_unit`; once `server_retries` tries are
/// spent the last transient error surfaces as fatal for the item.
fn request_with_backoff<C>(
    client: &C,
    request: &GenerationRequest<'_>,
    settings: &GenSettings,
) -> Result<String, ServiceError>
where
    C: GenerationClient,
{
    let tries = settings.server_retries.max(1);
    let mut attempt = 0;

    loop {
        match client.complete(request) {
            Ok(text) => return Ok(text),
            Err(err) if err.is_transient() => {
                attempt += 1;
                if attempt >= tries {
                    return Err(err);
                }

                let wait = settings.backoff_unit * attempt as u32;
                warn!(
                    retry = attempt,
                    max = tries,
                    wait_secs = wait.as_secs(),
                    "transient service error, backing off: {err}"
                );
                thread::sleep(wait);
            }
            Err(err) => return Err(err),
        }
    }
}
