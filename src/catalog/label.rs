// src/catalog/label.rs

/// Turn an underscore-delimited key into a title: split strictly on `_`
/// (never other whitespace), capitalize the first char of each word,
/// lowercase the rest, rejoin with single spaces. `"" -> ""`.
pub fn format_label(raw: &str) -> String {
    raw.split('_')
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => {
            let mut out: String = first.to_uppercase().collect();
            out.push_str(&chars.as_str().to_lowercase());
            out
        }
        None => s!(),
    }
}

/// Display form of a grouping key. Underscore-style keys go through
/// `format_label`; labels that are already human text pass through as-is
/// (grouping keys stay raw, see `group_by_field`).
pub fn display_label(raw: &str) -> String {
    if raw.contains('_') {
        format_label(raw)
    } else {
        s!(raw)
    }
}
