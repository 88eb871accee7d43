//! Cross-catalog description deduplication.
//!
//! A candidate description is compared against every previously accepted
//! description; the maximum character-level diff ratio decides acceptance.
//! The pool spans the whole export: uniqueness is catalog-wide, not per item.

use similar::TextDiff;

/// Reject candidates whose best match is at or above this ratio
pub const DEFAULT_THRESHOLD: f32 = 0.80;

/// Result of gating one candidate against the pool.
#[derive(Debug, Clone)]
pub struct Verdict
{
    /// True when the maximum ratio is strictly below the threshold
    pub accepted: bool,
    /// Maximum similarity ratio found, in [0, 1]
    pub score: f32,
    /// Pool member that produced the maximum ratio (empty for an empty pool)
    pub nearest: String,
}

/// Normalized similarity ratio between two strings, in [0, 1].
///
/// Character-level LCS-family measure: 1.0 for identical inputs, symmetric,
/// and monotonic as shared substrings grow. Comparison is case-insensitive.
pub fn ratio(
    a: &str,
    b: &str,
) -> f32
{
    TextDiff::from_chars(a.to_lowercase().as_str(), b.to_lowercase().as_str()).ratio()
}

/// Gate `candidate` against the pool of accepted descriptions.
///
/// An empty pool always accepts with score 0. The score and nearest match are
/// reported regardless of the verdict so callers can log rejections.
pub fn check(
    candidate: &str,
    pool: &[String],
    threshold: f32,
) -> Verdict
{
    if pool.is_empty()
    {
        return Verdict { accepted: true, score: 0.0, nearest: String::new() };
    }

    let mut score = 0.0f32;
    let mut nearest = "";

    for existing in pool
    {
        let r = ratio(candidate, existing);

        if r > score
        {
            score = r;
            nearest = existing;
        }
    }

    Verdict { accepted: score < threshold, score, nearest: nearest.to_string() }
}
