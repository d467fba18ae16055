// src/core/sanitize.rs

/// Turn a category label into a safe file stem for per-category export.
/// Alphanumerics kept, whitespace collapsed to single underscores,
/// `-`/`_` kept without doubling, everything else dropped.
pub fn sanitize_category_filename(label: &str) -> String {
    let mut out = String::with_capacity(label.len());
    let mut last_us = false;
    for ch in label.chars() {
        if ch.is_ascii_alphanumeric() { out.push(ch); last_us = false; }
        else if ch.is_whitespace() { if !last_us { out.push('_'); last_us = true; } }
        else if ch == '-' || ch == '_' { if !(last_us && ch == '_') { out.push(ch); } last_us = ch == '_'; }
    }
    let out = out.trim_matches('_').to_string();
    if out.is_empty() { s!("category") } else { out }
}
