//! Markup stripping for prompt bodies.
//!
//! Product bodies arrive as Shopify HTML. The model only needs readable
//! text, so tags go away, the common entities are decoded, and very long
//! bodies are cut to keep the prompt focused. The cut is a hint marked with
//! an ellipsis, not a correctness boundary.

use std::sync::LazyLock;

use regex::Regex;

/// Prompt body cap, in characters
pub const MAX_PROMPT_BODY_LEN: usize = 800;

static TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]+>").expect("tag pattern compiles"));
static NUMERIC_ENTITY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"&#\d+;").expect("entity pattern compiles"));
static WS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace pattern compiles"));

/// Remove markup and squeeze a product body down to plain prompt text.
pub fn strip_markup(html: &str) -> String
{
    if html.is_empty()
    {
        return String::new();
    }

    // Tags become spaces so adjacent words do not fuse
    let text = TAG_RE.replace_all(html, " ");

    let text = text
        .replace("&amp;", "&")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&nbsp;", " ");

    let text = NUMERIC_ENTITY_RE.replace_all(&text, "");
    let text = WS_RE
        .replace_all(&text, " ")
        .trim()
        .to_string();

    // Truncate very long descriptions to keep the prompt focused
    match text
        .char_indices()
        .nth(MAX_PROMPT_BODY_LEN)
    {
        Some((idx, _)) => format!("{}...", &text[..idx]),
        None => text,
    }
}
