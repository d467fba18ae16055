// src/catalog/parse.rs

use crate::core::csv;
use crate::error::MalformedInputError;

use super::record::{Record, RecordSet};

/// Which tokenizer reads the raw text.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ParseMode {
    /// Literal comma/newline split, cells trimmed. The catalog's documented
    /// format: a value containing a comma fragments, and that is contract.
    #[default]
    Naive,
    /// Opt-in RFC-4180-style quoting (double-quote escapes, CRLF tolerant).
    Strict,
}

/// Parse raw catalog text in the default (naive) mode.
pub fn parse(raw_text: &str) -> Result<RecordSet, MalformedInputError> {
    parse_with(raw_text, ParseMode::Naive)
}

/// Parse with quoted-field handling. Additive alternative only; existing
/// data files are written against `parse`.
pub fn parse_strict(raw_text: &str) -> Result<RecordSet, MalformedInputError> {
    parse_with(raw_text, ParseMode::Strict)
}

/// Line 0 of the surviving lines is the header; every later line becomes
/// one `Record`. Fewer than two surviving lines → `MalformedInputError`.
pub fn parse_with(raw_text: &str, mode: ParseMode) -> Result<RecordSet, MalformedInputError> {
    let mut rows = match mode {
        ParseMode::Naive => csv::naive_rows(raw_text),
        ParseMode::Strict => csv::quoted_rows(raw_text),
    };

    if rows.len() < 2 {
        return Err(MalformedInputError { usable_lines: rows.len() });
    }

    let header_cells = rows.remove(0);
    // Header fields are used verbatim as record keys, trimmed either way.
    let headers: Vec<String> = header_cells
        .into_iter()
        .map(|h| h.trim().to_string())
        .collect();

    let records: Vec<Record> = rows
        .iter()
        .map(|cells| Record::assemble(&headers, cells))
        .collect();

    Ok(RecordSet::new(headers, records))
}
