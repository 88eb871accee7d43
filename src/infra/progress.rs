//! Durable progress checkpointing.
//!
//! The progress file is a sorted JSON array of product handles that have been
//! fully processed. It is rewritten after every successful item, so a crash
//! loses at most the in-flight row. Writes go through a temp file in the same
//! directory and are renamed into place, so the file is never observed half
//! written.

use std::collections::BTreeSet;
use std::fs;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use tempfile::NamedTempFile;

/// Load the set of already-processed handles.
///
/// A missing file means an empty set; a present but unreadable file is an
/// error rather than silently restarting from scratch.
pub fn load(path: &Path) -> Result<BTreeSet<String>>
{
    if !path.exists()
    {
        return Ok(BTreeSet::new());
    }

    let data = fs::read_to_string(path)
        .with_context(|| format!("read progress file {}", path.display()))?;

    let handles: Vec<String> = serde_json::from_str(&data)
        .with_context(|| format!("parse progress file {}", path.display()))?;

    Ok(handles
        .into_iter()
        .collect())
}

/// Overwrite the progress file with the full set of handles.
///
/// Full overwrite (not append) tolerates external edits; the BTreeSet keeps
/// the serialized array sorted.
pub fn save(
    path: &Path,
    processed: &BTreeSet<String>,
) -> Result<()>
{
    let parent = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));

    fs::create_dir_all(parent)
        .with_context(|| format!("create progress directory {}", parent.display()))?;

    let mut tmp = NamedTempFile::new_in(parent).context("create progress temp file")?;

    let handles: Vec<&String> = processed
        .iter()
        .collect();
    serde_json::to_writer_pretty(&mut tmp, &handles).context("serialize progress")?;
    tmp.write_all(b"\n")
        .context("finish progress temp file")?;

    tmp.persist(path)
        .with_context(|| format!("replace progress file {}", path.display()))?;

    Ok(())
}

/// Remove the progress file entirely (force-regenerate runs).
pub fn clear(path: &Path) -> Result<()>
{
    if path.exists()
    {
        fs::remove_file(path)
            .with_context(|| format!("remove progress file {}", path.display()))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests
{
    use assert_fs::TempDir;

    use super::*;

    #[test]
    fn missing_file_loads_empty()
    {
        let dir = TempDir::new().unwrap();

        let set = load(&dir.path().join("progress.json")).unwrap();

        assert!(set.is_empty());
    }

    #[test]
    fn save_then_load_round_trips_sorted()
    {
        let dir = TempDir::new().unwrap();
        let path = dir
            .path()
            .join("out/progress.json");

        let mut set = BTreeSet::new();
        set.insert("zeta".to_string());
        set.insert("alpha".to_string());

        save(&path, &set).unwrap();

        // The on-disk array is sorted
        let raw = fs::read_to_string(&path).unwrap();
        assert!(raw.find("alpha").unwrap() < raw.find("zeta").unwrap());

        let loaded = load(&path).unwrap();
        assert_eq!(loaded, set);
    }

    #[test]
    fn save_overwrites_previous_content()
    {
        let dir = TempDir::new().unwrap();
        let path = dir
            .path()
            .join("progress.json");

        let mut first = BTreeSet::new();
        first.insert("a".to_string());
        first.insert("b".to_string());
        save(&path, &first).unwrap();

        let mut second = BTreeSet::new();
        second.insert("c".to_string());
        save(&path, &second).unwrap();

        let loaded = load(&path).unwrap();
        assert_eq!(loaded, second);
    }

    #[test]
    fn clear_removes_the_file_and_tolerates_absence()
    {
        let dir = TempDir::new().unwrap();
        let path = dir
            .path()
            .join("progress.json");

        let mut set = BTreeSet::new();
        set.insert("a".to_string());
        save(&path, &set).unwrap();

        clear(&path).unwrap();
        assert!(!path.exists());

        // Second clear is a no-op
        clear(&path).unwrap();
    }

    #[test]
    fn malformed_file_is_an_error()
    {
        let dir = TempDir::new().unwrap();
        let path = dir
            .path()
            .join("progress.json");
        fs::write(&path, "{not json").unwrap();

        assert!(load(&path).is_err());
    }
}
