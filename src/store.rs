// src/store.rs
//
// Local cache for the last successfully fetched catalog text.
// Best-effort: every write error is the caller's to ignore, and a missing
// or unreadable cache simply means there is no fallback.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use crate::config::consts::{CATALOG_CACHE, STORE_DIR};

fn cache_path_in(root: &Path) -> PathBuf {
    root.join(CATALOG_CACHE)
}

fn save_catalog_in(root: &Path, text: &str) -> io::Result<PathBuf> {
    let path = cache_path_in(root);
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(&path, text)?;
    Ok(path)
}

fn load_catalog_in(root: &Path) -> io::Result<String> {
    fs::read_to_string(cache_path_in(root))
}

/// Persist raw catalog text under `.store/`.
pub fn save_catalog(text: &str) -> io::Result<PathBuf> {
    save_catalog_in(Path::new(STORE_DIR), text)
}

/// Raw text of the cached catalog, if any.
pub fn load_catalog() -> io::Result<String> {
    load_catalog_in(Path::new(STORE_DIR))
}
