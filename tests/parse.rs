// tests/parse.rs
//
// Record Parser contract tests: naive split semantics, blank-line
// robustness, short/long row policy, malformed input, strict opt-in mode.

use quillshelf::catalog::{parse, parse_strict};

fn sample_path() -> String {
    format!(
        "{}/assets/data/DBGuidedQuill-Books.csv",
        env!("CARGO_MANIFEST_DIR")
    )
}

#[test]
fn well_formed_input_yields_one_record_per_data_row() {
    let set = parse("A,B,C\n1,2,3\n4,5,6\n7,8,9").unwrap();
    assert_eq!(set.len(), 3);
    assert_eq!(set.headers(), ["A", "B", "C"]);
    for rec in set.iter() {
        let keys: Vec<&str> = rec.keys().collect();
        assert_eq!(keys, ["A", "B", "C"]);
    }
}

#[test]
fn parsing_is_idempotent() {
    let text = "A,B\nx,y\nz,";
    assert_eq!(parse(text).unwrap(), parse(text).unwrap());
}

#[test]
fn short_rows_pad_missing_trailing_fields_with_empty() {
    let set = parse("A,B,C\n1\n1,2").unwrap();
    assert_eq!(set.records()[0].get("B"), Some(""));
    assert_eq!(set.records()[0].get("C"), Some(""));
    assert_eq!(set.records()[1].get("B"), Some("2"));
    assert_eq!(set.records()[1].get("C"), Some(""));
}

#[test]
fn extra_values_are_silently_dropped() {
    let set = parse("A,B\n1,2,3,4").unwrap();
    let rec = &set.records()[0];
    assert_eq!(rec.len(), 2);
    assert_eq!(rec.get("A"), Some("1"));
    assert_eq!(rec.get("B"), Some("2"));
}

#[test]
fn blank_lines_anywhere_do_not_change_the_result() {
    let clean = "A,B\n1,2\n3,4";
    let noisy = "\n\nA,B\n\n  \n1,2\n\n\n3,4\n  \n\n";
    assert_eq!(parse(noisy).unwrap(), parse(clean).unwrap());
}

#[test]
fn values_are_trimmed() {
    let set = parse(" A , B \n  1 ,\t2 ").unwrap();
    assert_eq!(set.headers(), ["A", "B"]);
    assert_eq!(set.records()[0].get("A"), Some("1"));
    assert_eq!(set.records()[0].get("B"), Some("2"));
}

#[test]
fn header_only_input_is_malformed() {
    let err = parse("TITLE,CATEGORY").unwrap_err();
    assert_eq!(err.usable_lines, 1);
}

#[test]
fn empty_input_is_malformed() {
    assert!(parse("").is_err());
    assert!(parse("\n\n   \n").is_err());
}

#[test]
fn naive_split_fragments_embedded_commas() {
    // The documented limitation, reproduced on the shipped sample file:
    // Zainab's description contains a comma, so its fields shift right
    // and the real purchase link falls off the end.
    let text = std::fs::read_to_string(sample_path()).unwrap();
    let set = parse(&text).unwrap();
    assert_eq!(set.len(), 3);

    let zainab = &set.records()[2];
    assert_eq!(zainab.get("TITLE"), Some("Zainab's First Ramadan"));
    assert_eq!(zainab.get("DESCRIPTION"), Some("Introducing Fasting to kids"));
    assert_eq!(zainab.get("CATEGORY"), Some("For Ages 4 to 10"));
    // The cover column holds the shifted category, the link column the cover.
    assert_eq!(zainab.get("COVER_LINK"), Some("For Ages 4 to 10"));
    assert!(zainab.get("AMAZON_LINK").unwrap().ends_with(".jpg"));
}

#[test]
fn strict_mode_keeps_quoted_fields_whole() {
    let text = "TITLE,DESCRIPTION,CATEGORY\n\
                Zainab's First Ramadan,\"Introducing Fasting to kids,For Ages 4 to 10\",For Ages 4 to 10\n";
    let strict = parse_strict(text).unwrap();
    assert_eq!(
        strict.records()[0].get("DESCRIPTION"),
        Some("Introducing Fasting to kids,For Ages 4 to 10")
    );
    assert_eq!(strict.records()[0].get("CATEGORY"), Some("For Ages 4 to 10"));

    // The default mode fragments the same line.
    let naive = parse(text).unwrap();
    assert_eq!(
        naive.records()[0].get("DESCRIPTION"),
        Some("\"Introducing Fasting to kids")
    );
}
