//! Catalog category detection.
//!
//! The whole input is assumed to hold products of a single category. We scan
//! every row's text fields for keyword hits and take a stable argmax over the
//! per-category totals; a zero-hit catalog falls back to wall clocks with a
//! warning flag instead of failing.

use indexmap::IndexMap;

use crate::core::vocab::{
    self,
    VocabPool, // variation word pools
};
use crate::infra::catalog::ProductRow;

/// Closed set of catalog domains the tool knows how to write for.
///
/// Declaration order is the tie-break order for detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category
{
    WallClocks,
    WaterBottles,
    LampShades,
}

impl Category
{
    /// All categories in declaration (tie-break) order
    pub const ALL: [Category; 3] = [Category::WallClocks, Category::WaterBottles, Category::LampShades];

    /// Human-readable label for console output
    pub fn label(self) -> &'static str
    {
        match self
        {
            Category::WallClocks => "Wall Clocks",
            Category::WaterBottles => "Water Bottles",
            Category::LampShades => "Lamp Shades",
        }
    }

    /// Detection keywords for this category
    pub fn keywords(self) -> &'static [&'static str]
    {
        match self
        {
            Category::WallClocks => vocab::WALL_CLOCK_KEYWORDS,
            Category::WaterBottles => vocab::WATER_BOTTLE_KEYWORDS,
            Category::LampShades => vocab::LAMP_SHADE_KEYWORDS,
        }
    }

    /// Variation word pools for this category
    pub fn vocab(self) -> &'static VocabPool
    {
        match self
        {
            Category::WallClocks => &vocab::WALL_CLOCK_POOL,
            Category::WaterBottles => &vocab::WATER_BOTTLE_POOL,
            Category::LampShades => &vocab::LAMP_SHADE_POOL,
        }
    }

    /// Prompt template for this category
    pub fn prompt_template(self) -> &'static str
    {
        match self
        {
            Category::WallClocks => vocab::WALL_CLOCK_PROMPT,
            Category::WaterBottles => vocab::WATER_BOTTLE_PROMPT,
            Category::LampShades => vocab::LAMP_SHADE_PROMPT,
        }
    }
}

/// Outcome of a detection pass over the whole catalog.
#[derive(Debug, Clone)]
pub struct Detection
{
    /// Winning category (fallback when no keyword matched anywhere)
    pub category: Category,
    /// Total keyword hits per category, in declaration order
    pub scores: IndexMap<Category, usize>,
    /// True when the winning score was zero and the fallback was used
    pub fallback: bool,
}

impl Detection
{
    /// Hit count of the winning category
    pub fn winning_score(&self) -> usize
    {
        self.scores
            .get(&self.category)
            .copied()
            .unwrap_or(0)
    }
}

/// Count substring occurrences of `needle` in `haystack`.
///
/// Overlapping matches are not counted twice; this mirrors a left-to-right
/// scan that advances past each hit.
fn count_occurrences(
    haystack: &str,
    needle: &str,
) -> usize
{
    if needle.is_empty()
    {
        return 0;
    }

    let mut count = 0;
    let mut rest = haystack;

    while let Some(pos) = rest.find(needle)
    {
        count += 1;
        rest = &rest[pos + needle.len()..];
    }

    count
}

/// Scan all rows and pick the category with the most keyword hits.
///
/// Every row contributes its title, body, type, and tags, lowercased. The
/// argmax is stable: on ties the first category in declaration order wins.
/// A catalog with zero hits everywhere yields `Category::WallClocks` with
/// `fallback = true`; detection never fails.
pub fn detect(rows: &[ProductRow<'_>]) -> Detection
{
    let mut scores: IndexMap<Category, usize> = Category::ALL
        .iter()
        .map(|c| (*c, 0))
        .collect();

    for row in rows
    {
        // One concatenated, lowercased haystack per row
        let text = format!(
            "{} {} {} {}",
            row.title(),
            row.body(),
            row.product_type(),
            row.tags()
        )
        .to_lowercase();

        for category in Category::ALL
        {
            let hits: usize = category
                .keywords()
                .iter()
                .map(|kw| count_occurrences(&text, kw))
                .sum();

            *scores
                .entry(category)
                .or_insert(0) += hits;
        }
    }

    // Stable argmax: strict `>` keeps the earliest maximum
    let mut best = Category::ALL[0];
    let mut best_score = 0usize;

    for (category, score) in &scores
    {
        if *score > best_score
        {
            best = *category;
            best_score = *score;
        }
    }

    Detection {
        category: best,
        fallback: best_score == 0,
        scores,
    }
}

#[cfg(test)]
mod tests
{
    use csv::StringRecord;

    use super::*;
    use crate::infra::catalog::Columns;

    /// Build a minimal header + row pair for detection tests
    fn row_fixture(
        title: &str,
        body: &str,
    ) -> (Columns, StringRecord)
    {
        let headers = StringRecord::from(vec![
            "Handle",
            "Title",
            "Body (HTML)",
            "Type",
            "Tags",
            "SEO Title",
            "SEO Description",
        ]);

        let cols = Columns::from_headers(&headers).expect("required columns present");
        let record = StringRecord::from(vec!["h1", title, body, "", "", "", ""]);

        (cols, record)
    }

    #[test]
    fn zero_scores_fall_back_to_wall_clocks()
    {
        // Given a catalog with no category keyword anywhere
        let (cols, record) = row_fixture("Untitled thing", "nothing to see");
        let rows = vec![ProductRow::new(&cols, &record, 0)];

        // When detecting
        let det = detect(&rows);

        // Then the fixed default wins and the fallback flag is set
        assert_eq!(det.category, Category::WallClocks);
        assert!(det.fallback);
        assert_eq!(det.winning_score(), 0);
    }

    #[test]
    fn single_scoring_category_wins()
    {
        // Given rows that only mention hydration gear
        let (cols, record) =
            row_fixture("Insulated Water Bottle", "a reusable bottle with straw lid");
        let rows = vec![ProductRow::new(&cols, &record, 0)];

        // When detecting
        let det = detect(&rows);

        // Then that category is returned without fallback
        assert_eq!(det.category, Category::WaterBottles);
        assert!(!det.fallback);
        assert!(det.winning_score() > 0);
    }

    #[test]
    fn tie_resolves_to_declaration_order()
    {
        // "shade" scores once for lamp shades, "clock" once for wall clocks
        let (cols, record) = row_fixture("clock", "shade");
        let rows = vec![ProductRow::new(&cols, &record, 0)];

        let det = detect(&rows);

        // Wall clocks is declared first, so it wins the tie
        assert_eq!(det.category, Category::WallClocks);
    }

    #[test]
    fn substring_hits_accumulate_across_rows()
    {
        let (cols, r1) = row_fixture("Quartz Wall Clock", "silent sweep movement");
        let (_, r2) = row_fixture("Pendulum Clock", "roman numeral dial");

        let rows = vec![ProductRow::new(&cols, &r1, 0), ProductRow::new(&cols, &r2, 1)];

        let det = detect(&rows);

        assert_eq!(det.category, Category::WallClocks);
        // "clock" appears in both titles, plus the more specific keywords
        assert!(det.winning_score() >= 4);
    }
}
