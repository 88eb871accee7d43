//! Prompt variation sampling.
//!
//! Each generation attempt gets a fresh "variation hint": one random writing
//! angle plus a small sample from each vocabulary axis. The hint is what keeps
//! phrasing diverse across hundreds of otherwise similar products. The
//! randomness source is injected so tests can seed a deterministic generator.

use itertools::Itertools;
use rand::Rng;
use rand::seq::IndexedRandom;

use crate::core::category::Category;

// Per-axis sample counts; fixed, not configurable
const SETTINGS_PICKS: usize = 4;
const MATERIALS_PICKS: usize = 4;
const QUALITIES_PICKS: usize = 2;
const STYLE_PICKS: usize = 3;
const FEATURES_PICKS: usize = 3;
const DIMENSIONS_PICKS: usize = 2;

/// Build a self-contained hint fragment for one generation attempt.
///
/// Samples are drawn without replacement within a call and independently
/// across calls. The fragment is interpolated into the category's prompt
/// template via the `{variation_hint}` placeholder.
pub fn variation_hint<R>(
    category: Category,
    rng: &mut R,
) -> String
where
    R: Rng + ?Sized,
{
    let pool = category.vocab();

    let angle = pool
        .angles
        .choose(rng)
        .copied()
        .unwrap_or_default();

    let settings = pool
        .settings
        .choose_multiple(rng, SETTINGS_PICKS)
        .join(", ");
    let materials = pool
        .materials
        .choose_multiple(rng, MATERIALS_PICKS)
        .join(", ");
    let qualities = pool
        .qualities
        .choose_multiple(rng, QUALITIES_PICKS)
        .join(", ");
    let style = pool
        .style_words
        .choose_multiple(rng, STYLE_PICKS)
        .join(", ");
    let features = pool
        .features
        .choose_multiple(rng, FEATURES_PICKS)
        .join(", ");
    let dims = pool
        .dimensions
        .choose_multiple(rng, DIMENSIONS_PICKS)
        .join(", ");

    format!(
        "WRITING ANGLE: {angle}\n\
         Consider using some of these words/phrases where they fit naturally \
         (do NOT force them all in, pick 3-5 max):\n\
         - Settings: {settings}\n\
         - Materials: {materials}\n\
         - Qualities: {qualities}\n\
         - Style: {style}\n\
         - Features: {features}\n\
         - Dimensions: {dims}"
    )
}
