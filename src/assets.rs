//! Catalog loading from disk.
//!
//! Two sources are supported:
//!
//! - a JSON catalog file (see [`crate::core::catalog`] for the shape)
//! - an asset directory laid out as
//!
//! ```text
//! <root>/bins/recyclable.png      one file per category; the stem names it
//! <root>/recyclable/newspaper.png one file per item of that category
//! <root>/recyclable/tin_can.png
//! ```
//!
//! Only file stems matter; image contents are never read. Entries are sorted by
//! name so the same directory always produces the same item ids.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};

use crate::core::Catalog;

pub const BINS_DIR: &str = "bins";

pub fn load_catalog_file(path: &Path) -> Result<Catalog> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading catalog {}", path.display()))?;
    let catalog = Catalog::from_json_str(&text)
        .with_context(|| format!("loading catalog {}", path.display()))?;
    tracing::info!(
        path = %path.display(),
        categories = catalog.category_count(),
        items = catalog.item_count(),
        "catalog loaded"
    );
    Ok(catalog)
}

pub fn scan_asset_dir(root: &Path) -> Result<Catalog> {
    let bins = root.join(BINS_DIR);
    let bin_files = sorted_files(&bins)
        .with_context(|| format!("listing bins in {}", bins.display()))?;
    if bin_files.is_empty() {
        return Err(anyhow!("no bins found in {}", bins.display()));
    }

    let mut catalog = Catalog::new();
    for bin in bin_files {
        let Some(stem) = file_stem(&bin) else {
            continue;
        };
        let item_dir = root.join(&stem);
        let labels: Vec<String> = sorted_files(&item_dir)
            .with_context(|| format!("listing items in {}", item_dir.display()))?
            .iter()
            .filter_map(|p| file_stem(p))
            .map(|s| display_name(&s))
            .collect();
        tracing::debug!(category = %stem, items = labels.len(), "scanned category");
        catalog.push_category(display_name(&stem), labels);
    }

    catalog
        .validate()
        .with_context(|| format!("asset directory {}", root.display()))?;
    tracing::info!(
        root = %root.display(),
        categories = catalog.category_count(),
        items = catalog.item_count(),
        "asset directory scanned"
    );
    Ok(catalog)
}

fn sorted_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if entry.file_type()?.is_file() {
            files.push(entry.path());
        }
    }
    files.sort();
    Ok(files)
}

fn file_stem(path: &Path) -> Option<String> {
    let stem = path.file_stem()?.to_str()?;
    (!stem.starts_with('.')).then(|| stem.to_string())
}

/// `tin_can` -> `Tin can`
fn display_name(stem: &str) -> String {
    let spaced = stem.replace(['_', '-'], " ");
    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
