//! Response parsing and cleanup.
//!
//! The model is asked for exactly two labelled lines, but responses drift:
//! extra prose, markup, rewritten titles. This module degrades malformed
//! input to an empty or truncated description and never errors. The title is
//! always the catalog's own title; the generated one is only recognized so
//! the label line is not mistaken for description text.

use std::sync::LazyLock;

use regex::Regex;

/// Shopify SEO title cap, in characters
pub const MAX_TITLE_LEN: usize = 70;
/// Shopify SEO description cap, in characters
pub const MAX_DESCRIPTION_LEN: usize = 320;

static TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]+>").expect("tag pattern compiles"));
static WS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace pattern compiles"));

/// Banned-term replacements, applied literally and in order. Case variants
/// are separate entries so the replacement preserves capitalization.
const SUBSTITUTIONS: &[(&str, &str)] = &[
    ("faux leather", "vinyl"),
    ("Faux leather", "Vinyl"),
    ("Faux Leather", "Vinyl"),
];

/// Hard char-boundary cut at `max` characters.
fn truncate_chars(s: &str, max: usize) -> String {
    match s.char_indices().nth(max) {
        Some((idx, _)) => s[..idx].to_string(),
        None => s.to_string(),
    }
}

/// Extract (title, description) from a raw model response.
///
/// The title is forced to the original product title verbatim (then capped).
/// The description comes from the first line whose label reads
/// `SEO Description:` case-insensitively; a missing label yields an empty
/// description. Cleanup order: strip markup, drop quote characters, apply
/// terminology substitutions, collapse whitespace, cap length.
pub fn parse_response(raw: &str, original_title: &str) -> (String, String) {
    let mut description = String::new();

    for line in raw.lines().map(str::trim).filter(|l| !l.is_empty()) {
        let lower = line.to_lowercase();

        if lower.starts_with("seo title:") {
            // Recognized but discarded: the catalog title always wins
            continue;
        }

        if lower.starts_with("seo description:") {
            if let Some((_, rest)) = line.split_once(':') {
                description = rest.trim().to_string();
            }
        }
    }

    let description = clean_description(&description);

    let title = truncate_chars(original_title, MAX_TITLE_LEN);
    let description = truncate_chars(&description, MAX_DESCRIPTION_LEN);

    (title, description)
}

/// Apply the cleanup rules that make a description safe for a CSV cell and a
/// search snippet.
fn clean_description(desc: &str) -> String {
    let no_tags = TAG_RE.replace_all(desc, "");

    let mut cleaned: String = no_tags.chars().filter(|c| *c != '"' && *c != '\'').collect();

    for (banned, replacement) in SUBSTITUTIONS {
        cleaned = cleaned.replace(banned, replacement);
    }

    WS_RE.replace_all(&cleaned, " ").trim().to_string()
}
