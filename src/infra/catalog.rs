//! Catalog CSV reading and writing.
//!
//! The export is treated as an opaque table: the only columns the tool
//! understands are resolved by header name, everything else passes through
//! byte-for-byte in the original order. Output is always fully rewritten with
//! quote-all style, matching what Shopify re-imports cleanly.

use std::path::Path;

use anyhow::{Context, Result, bail};
use csv::{QuoteStyle, ReaderBuilder, StringRecord, WriterBuilder};

/// Resolved positions of the columns the pipeline reads or writes.
///
/// `Handle`, `Title`, `SEO Title` and `SEO Description` are required;
/// the free-text columns are optional and read as empty when absent.
#[derive(Debug, Clone)]
pub struct Columns
{
    pub handle: usize,
    pub title: usize,
    pub seo_title: usize,
    pub seo_description: usize,
    pub body: Option<usize>,
    pub product_type: Option<usize>,
    pub tags: Option<usize>,
}

impl Columns
{
    /// Resolve column positions from the header row.
    pub fn from_headers(headers: &StringRecord) -> Result<Self>
    {
        let find = |name: &str| {
            headers
                .iter()
                .position(|h| h == name)
        };

        let require = |name: &str| {
            find(name).ok_or_else(|| {
                anyhow::anyhow!("input CSV is missing the required column '{name}'")
            })
        };

        Ok(Self {
            handle: require("Handle")?,
            title: require("Title")?,
            seo_title: require("SEO Title")?,
            seo_description: require("SEO Description")?,
            body: find("Body (HTML)"),
            product_type: find("Type"),
            tags: find("Tags"),
        })
    }
}

/// Read-only view of one record through the resolved columns.
#[derive(Debug, Clone, Copy)]
pub struct ProductRow<'a>
{
    cols: &'a Columns,
    record: &'a StringRecord,
    /// Position of this record in the catalog
    pub index: usize,
}

impl<'a> ProductRow<'a>
{
    pub fn new(
        cols: &'a Columns,
        record: &'a StringRecord,
        index: usize,
    ) -> Self
    {
        Self { cols, record, index }
    }

    fn field(
        &self,
        idx: usize,
    ) -> &'a str
    {
        self.record
            .get(idx)
            .unwrap_or("")
    }

    fn optional_field(
        &self,
        idx: Option<usize>,
    ) -> &'a str
    {
        idx.map(|i| self.field(i))
            .unwrap_or("")
    }

    pub fn handle(&self) -> &'a str
    {
        self.field(self.cols.handle)
            .trim()
    }

    pub fn title(&self) -> &'a str
    {
        self.field(self.cols.title)
            .trim()
    }

    pub fn body(&self) -> &'a str
    {
        self.optional_field(self.cols.body)
    }

    pub fn product_type(&self) -> &'a str
    {
        self.optional_field(self.cols.product_type)
    }

    pub fn tags(&self) -> &'a str
    {
        self.optional_field(self.cols.tags)
    }

    pub fn seo_description(&self) -> &'a str
    {
        self.field(self.cols.seo_description)
            .trim()
    }
}

/// The whole export held in memory: header row plus every record.
#[derive(Debug)]
pub struct Catalog
{
    pub headers: StringRecord,
    pub columns: Columns,
    pub records: Vec<StringRecord>,
}

impl Catalog
{
    /// Read an export from disk. Missing file or missing required columns
    /// are configuration errors.
    pub fn read(path: &Path) -> Result<Self>
    {
        if !path.exists()
        {
            bail!(
                "input file not found: {} (place your Shopify product export there)",
                path.display()
            );
        }

        let mut reader = ReaderBuilder::new()
            .flexible(true)
            .from_path(path)
            .with_context(|| format!("open input CSV {}", path.display()))?;

        let headers = reader
            .headers()
            .context("read CSV header row")?
            .clone();
        let columns = Columns::from_headers(&headers)?;

        let mut records = Vec::new();
        for record in reader.records()
        {
            records.push(record.context("read CSV record")?);
        }

        Ok(Self { headers, columns, records })
    }

    /// Borrow every record as a `ProductRow` view.
    pub fn rows(&self) -> Vec<ProductRow<'_>>
    {
        self.records
            .iter()
            .enumerate()
            .map(|(i, r)| ProductRow::new(&self.columns, r, i))
            .collect()
    }

    /// Overwrite the SEO fields of one record in place.
    ///
    /// Short (ragged) records are padded out to the header width first so the
    /// target columns exist.
    pub fn set_seo(
        &mut self,
        index: usize,
        seo_title: &str,
        seo_description: &str,
    )
    {
        let Some(record) = self
            .records
            .get(index)
        else
        {
            return;
        };

        let mut fields: Vec<String> = record
            .iter()
            .map(str::to_string)
            .collect();
        fields.resize(self.headers.len().max(fields.len()), String::new());

        fields[self.columns.seo_title] = seo_title.to_string();
        fields[self.columns.seo_description] = seo_description.to_string();

        self.records[index] = StringRecord::from(fields);
    }

    /// Write the full catalog back out, quote-all style, creating the parent
    /// directory when needed.
    pub fn write(
        &self,
        path: &Path,
    ) -> Result<()>
    {
        if let Some(parent) = path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
        {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create output directory {}", parent.display()))?;
        }

        let mut writer = WriterBuilder::new()
            .quote_style(QuoteStyle::Always)
            .from_path(path)
            .with_context(|| format!("open output CSV {}", path.display()))?;

        writer
            .write_record(&self.headers)
            .context("write CSV header row")?;

        for record in &self.records
        {
            writer
                .write_record(record)
                .context("write CSV record")?;
        }

        writer
            .flush()
            .context("flush output CSV")?;

        Ok(())
    }
}

#[cfg(test)]
mod tests
{
    use assert_fs::TempDir;
    use assert_fs::prelude::*;

    use super::*;

    const SAMPLE: &str = "\
Handle,Title,Body (HTML),Type,Tags,Extra,SEO Title,SEO Description
p1,Wall Clock,<p>body</p>,Home,decor,keepme,,
p2,Drum Shade,,Home,light,alsome,Existing,Existing desc
";

    fn sample_catalog(dir: &TempDir) -> Catalog
    {
        let file = dir.child("export.csv");
        file.write_str(SAMPLE)
            .unwrap();

        Catalog::read(file.path()).unwrap()
    }

    #[test]
    fn reads_rows_and_resolves_columns()
    {
        let dir = TempDir::new().unwrap();
        let catalog = sample_catalog(&dir);

        assert_eq!(catalog.records.len(), 2);

        let rows = catalog.rows();
        assert_eq!(rows[0].handle(), "p1");
        assert_eq!(rows[0].title(), "Wall Clock");
        assert_eq!(rows[0].body(), "<p>body</p>");
        assert_eq!(rows[1].seo_description(), "Existing desc");
    }

    #[test]
    fn missing_required_column_is_an_error()
    {
        let dir = TempDir::new().unwrap();
        let file = dir.child("bad.csv");
        file.write_str("Handle,Title\nx,y\n")
            .unwrap();

        let err = Catalog::read(file.path()).unwrap_err();
        assert!(
            err.to_string()
                .contains("SEO Title")
        );
    }

    #[test]
    fn missing_input_file_is_an_error()
    {
        let dir = TempDir::new().unwrap();

        assert!(Catalog::read(&dir.path().join("nope.csv")).is_err());
    }

    #[test]
    fn set_seo_updates_only_the_seo_fields()
    {
        let dir = TempDir::new().unwrap();
        let mut catalog = sample_catalog(&dir);

        catalog.set_seo(0, "New Title", "New description");

        let rows = catalog.rows();
        assert_eq!(rows[0].seo_description(), "New description");
        // Pass-through column untouched
        assert_eq!(rows[0].record.get(5), Some("keepme"));
    }

    #[test]
    fn write_preserves_columns_and_quotes_everything()
    {
        let dir = TempDir::new().unwrap();
        let mut catalog = sample_catalog(&dir);
        catalog.set_seo(0, "T", "D");

        let out = dir
            .path()
            .join("nested/out.csv");
        catalog
            .write(&out)
            .unwrap();

        let written = std::fs::read_to_string(&out).unwrap();
        let mut lines = written.lines();

        assert_eq!(
            lines
                .next()
                .unwrap(),
            "\"Handle\",\"Title\",\"Body (HTML)\",\"Type\",\"Tags\",\"Extra\",\"SEO Title\",\"SEO Description\""
        );
        assert!(
            lines
                .next()
                .unwrap()
                .contains("\"keepme\"")
        );
    }
}
