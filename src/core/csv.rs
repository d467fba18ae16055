// src/core/csv.rs
use std::io::{self, Write};
use std::mem::take;

/* ---------------- Tokenizing ---------------- */

/// Naive row split: newline-separated lines, comma-separated cells,
/// every cell trimmed. Blank lines (after trimming) are dropped wherever
/// they occur, including trailing ones.
///
/// No quote awareness on purpose: a cell containing a literal comma is
/// split apart, a cell containing a literal newline ends its row early.
/// Existing catalog files rely on exactly these semantics; the quoted
/// tokenizer below is the opt-in alternative.
pub fn naive_rows(text: &str) -> Vec<Vec<String>> {
    text.split('\n')
        .filter(|line| !line.trim().is_empty())
        .map(|line| line.split(',').map(|cell| cell.trim().to_string()).collect())
        .collect()
}

/// Quote-aware row split (RFC-4180-ish: double-quote escapes, CRLF
/// tolerant). Cells are returned verbatim, no trimming inside quotes.
pub fn quoted_rows(text: &str) -> Vec<Vec<String>> {
    let mut rows = Vec::new();
    let mut field = s!();
    let mut row = Vec::new();
    let mut in_quotes = false;
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '"' => {
                if in_quotes {
                    if matches!(chars.peek(), Some('"')) {
                        chars.next(); // double-quote escape
                        field.push('"');
                    } else {
                        in_quotes = false;
                    }
                } else {
                    in_quotes = true;
                }
            }
            ',' if !in_quotes => {
                // move the field without cloning
                row.push(take(&mut field));
            }
            '\n' | '\r' if !in_quotes => {
                if ch == '\r' && matches!(chars.peek(), Some('\n')) { chars.next(); }
                row.push(take(&mut field));
                if !row_is_blank(&row) {
                    rows.push(take(&mut row));
                } else {
                    row.clear();
                }
            }
            _ => field.push(ch),
        }
    }

    // Flush any trailing field/row even if quotes were unterminated.
    row.push(field);
    if !row_is_blank(&row) {
        rows.push(row);
    }

    rows
}

fn row_is_blank(row: &[String]) -> bool {
    row.is_empty() || (row.len() == 1 && row[0].trim().is_empty())
}

/* ---------------- Writing ---------------- */

fn needs_quotes(field: &str, sep: char) -> bool {
    field.contains(sep) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write a single CSV/TSV row to any writer.
pub fn write_row<W: Write>(mut w: W, row: &[String], sep: char) -> io::Result<()> {
    let mut first = true;
    for cell in row {
        if !first { write!(w, "{}", sep)?; } else { first = false; }
        if needs_quotes(cell, sep) {
            let escaped = cell.replace('"', "\"\"");
            write!(w, "\"{}\"", escaped)?;
        } else {
            write!(w, "{}", cell)?;
        }
    }
    writeln!(w)
}

/// Create a full export string from headers and rows.
/// Output is always quote-safe, regardless of which tokenizer read the data.
pub fn to_export_string(
    headers: Option<&[String]>,
    rows: &[Vec<String>],
    include_headers: bool,
    sep: char,
) -> String {
    let mut buf: Vec<u8> = Vec::new();

    if include_headers {
        if let Some(h) = headers {
            let _ = write_row(&mut buf, h, sep);
        }
    }
    for r in rows {
        let _ = write_row(&mut buf, r, sep);
    }

    match String::from_utf8(buf) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn naive_split_ignores_quotes() {
        let rows = naive_rows("a,\"b,c\"\n1,2,3");
        assert_eq!(rows[0], vec!["a", "\"b", "c\""]);
        assert_eq!(rows[1], vec!["1", "2", "3"]);
    }

    #[test]
    fn naive_drops_blank_lines_anywhere() {
        let rows = naive_rows("a,b\n\n  \n1,2\n\n");
        assert_eq!(rows.len(), 2);
    }

    #[test]
    fn quoted_split_keeps_embedded_comma() {
        let rows = quoted_rows("a,\"b,c\"\r\n1,\"say \"\"hi\"\"\"\n");
        assert_eq!(rows[0], vec!["a", "b,c"]);
        assert_eq!(rows[1], vec!["1", "say \"hi\""]);
    }

    #[test]
    fn quoted_split_no_phantom_trailing_row() {
        assert_eq!(quoted_rows("a,b\n1,2\n").len(), 2);
        assert_eq!(quoted_rows("a,b\n1,2").len(), 2);
    }

    #[test]
    fn write_quotes_only_when_needed() {
        let mut buf = Vec::new();
        let row = vec![s!("plain"), s!("with,comma"), s!("with\"quote")];
        write_row(&mut buf, &row, ',').unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "plain,\"with,comma\",\"with\"\"quote\"\n"
        );
    }
}
