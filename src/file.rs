// src/file.rs

use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
};

use crate::catalog::{CategoryIndex, RecordSet};
use crate::config::options::ExportOptions;
use crate::core::csv::to_export_string;
use crate::core::sanitize::sanitize_category_filename;

/// Write the whole catalog to a single file per ExportOptions
/// (path, headers policy, delimiter). Returns the final path written to.
pub fn write_export_single(
    export: &ExportOptions,
    set: &RecordSet,
) -> Result<PathBuf, Box<dyn std::error::Error>> {
    let path = export.out_path();

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }

    let contents = to_export_string(
        Some(set.headers()),
        &set.to_rows(),
        export.include_headers,
        export.format.delim(),
    );

    fs::write(&path, contents)?;
    Ok(path)
}

/// Write one file per category into the directory implied by
/// `export.out_path()` (which is a directory when `export_type == PerCategory`).
/// Returns the paths written, in label order.
pub fn write_export_per_category(
    export: &ExportOptions,
    index: &CategoryIndex,
) -> Result<Vec<PathBuf>, Box<dyn std::error::Error>> {
    let outdir = export.out_path();
    ensure_directory(&outdir)?;

    // Dedup stems within this run and write each file
    let mut seen: HashMap<String, usize> = HashMap::new();
    let mut written = Vec::with_capacity(index.len());
    let ext = export.format.ext();

    for (label, records) in index.iter() {
        let stem = sanitize_category_filename(label);
        let path = resolve_category_filename(&outdir, &stem, &mut seen, ext);

        // Records of one category share the parse's key set.
        let headers: Vec<String> = records
            .first()
            .map(|r| r.keys().map(String::from).collect())
            .unwrap_or_default();
        let rows: Vec<Vec<String>> = records.iter().map(|r| r.values()).collect();

        let contents = to_export_string(
            Some(&headers),
            &rows,
            export.include_headers,
            export.format.delim(),
        );

        fs::write(&path, contents)?;
        written.push(path);
    }

    Ok(written)
}

pub fn ensure_directory(dir: &Path) -> Result<(), Box<dyn std::error::Error>> {
    if dir.exists() && !dir.is_dir() {
        return Err(format!("Path exists but is not a directory: {}", dir.display()).into());
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}

/// Duplicate handling **only within this run**
fn resolve_category_filename(
    dir: &Path,
    stem: &str,                        // already sanitized, no extension
    seen_names: &mut HashMap<String, usize>,
    ext: &str,                         // "csv" | "tsv"
) -> PathBuf {
    // How many times have we seen this base?
    let count = seen_names.entry(stem.to_string()).or_insert(0);

    // First occurrence: "<stem>.ext"
    // Subsequent:       "<stem> (N).ext" with N starting at 2
    let filename = if *count == 0 {
        format!("{stem}.{ext}")
    } else {
        format!("{stem} ({}).{ext}", *count + 1)
    };

    *count += 1;
    dir.join(filename)
}
