// src/load.rs
//
// Load orchestration: retrieve raw catalog text (network, cache fallback,
// or local file), then hand it to the parser. Every failure maps into
// LoadError so frontends can show one uniform message and an empty view,
// never a half-populated one.

use std::fs;

use crate::{
    catalog::{RecordSet, parse, parse_with},
    config::{
        consts::DATA_FILE,
        options::{Source, SourceOptions},
    },
    core::net,
    error::{FetchError, LoadError},
    progress::Progress,
    store,
};

/// Fetch the remote catalog file as raw text.
pub fn fetch_catalog() -> Result<String, FetchError> {
    net::http_get(DATA_FILE)
}

/// Retrieve and parse the catalog according to `source`.
///
/// Remote source: network first, cache fallback on fetch failure; a
/// successful fetch refreshes the cache (best-effort). Local file source:
/// straight read, no cache.
pub fn collect_catalog(
    source: &SourceOptions,
    mut progress: Option<&mut dyn Progress>,
) -> Result<RecordSet, LoadError> {
    let text = match &source.source {
        Source::File(path) => {
            logf!("Load: reading {}", path.display());
            fs::read_to_string(path).map_err(LoadError::Io)?
        }
        Source::Remote => {
            if let Some(p) = progress.as_deref_mut() {
                p.log("Fetching catalog…");
            }
            match fetch_catalog() {
                Ok(text) => {
                    let _ = store::save_catalog(&text);
                    text
                }
                Err(e) => {
                    loge!("Load: fetch failed ({e}), trying cache");
                    if let Some(p) = progress.as_deref_mut() {
                        p.log("Fetch failed, trying local cache…");
                    }
                    store::load_catalog().map_err(|_| LoadError::Fetch(e))?
                }
            }
        }
    };

    let set = parse_with(&text, source.mode)?;
    logf!(
        "Load: {} record(s), {} field(s)",
        set.len(),
        set.headers().len()
    );

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    Ok(set)
}

/// Parse whatever is in the local cache, if anything. Used by the GUI to
/// show content at startup before the first fetch lands.
pub fn load_cached() -> Option<RecordSet> {
    let text = store::load_catalog().ok()?;
    match parse(&text) {
        Ok(set) => Some(set),
        Err(e) => {
            logd!("Load: cached catalog unusable ({e})");
            None
        }
    }
}
