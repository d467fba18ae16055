// tests/catalog.rs
//
// Grouping, label formatting and card view-model construction, plus the
// end-to-end path over the shipped sample catalog.

use std::path::PathBuf;

use quillshelf::catalog::{format_label, group_by_field, parse};
use quillshelf::config::consts::{
    DEFAULT_CATEGORY, FIELD_CATEGORY, NO_DESCRIPTION, PLACEHOLDER_IMAGE, UNTITLED,
};
use quillshelf::config::options::{Source, SourceOptions};
use quillshelf::progress::NullProgress;
use quillshelf::{load, render, store};

fn sample_path() -> PathBuf {
    PathBuf::from(format!(
        "{}/assets/data/DBGuidedQuill-Books.csv",
        env!("CARGO_MANIFEST_DIR")
    ))
}

fn sample_text() -> String {
    std::fs::read_to_string(sample_path()).unwrap()
}

#[test]
fn grouping_keeps_first_seen_order_and_defaults() {
    // Rows 4 and 5: explicitly empty category, and a short row (absent).
    let set = parse("ID,CATEGORY\n1,A\n2,A\n3,B\n4,\n5").unwrap();
    let index = group_by_field(set, FIELD_CATEGORY, DEFAULT_CATEGORY);

    let labels: Vec<&str> = index.labels().collect();
    assert_eq!(labels, ["A", "B", "Uncategorized"]);

    assert_eq!(index.get("A").unwrap().len(), 2);
    assert_eq!(index.get("B").unwrap().len(), 1);
    assert_eq!(index.get("Uncategorized").unwrap().len(), 2);
}

#[test]
fn grouping_preserves_row_order_within_a_label() {
    let set = parse("ID,CATEGORY\n1,A\n2,B\n3,A").unwrap();
    let index = group_by_field(set, FIELD_CATEGORY, DEFAULT_CATEGORY);
    let ids: Vec<&str> = index
        .get("A")
        .unwrap()
        .iter()
        .map(|r| r.get("ID").unwrap())
        .collect();
    assert_eq!(ids, ["1", "3"]);
}

#[test]
fn grouping_on_unknown_field_is_total() {
    let set = parse("A,B\n1,2\n3,4").unwrap();
    let index = group_by_field(set, "NO_SUCH_FIELD", DEFAULT_CATEGORY);
    assert_eq!(index.len(), 1);
    assert_eq!(index.get(DEFAULT_CATEGORY).unwrap().len(), 2);
}

#[test]
fn label_formatting_matches_site_behavior() {
    assert_eq!(format_label("stories_from_islam"), "Stories From Islam");
    assert_eq!(format_label("daily_practice_worship"), "Daily Practice Worship");
    assert_eq!(format_label("for_ages_4_to_10"), "For Ages 4 To 10");
    assert_eq!(format_label("SINGLE_WORD"), "Single Word");
    assert_eq!(format_label(""), "");
}

#[test]
fn cards_apply_fallbacks_for_missing_data() {
    let set = parse("TITLE,DESCRIPTION,CATEGORY,COVER_LINK,AMAZON_LINK\nOnly Title").unwrap();
    let index = group_by_field(set, FIELD_CATEGORY, DEFAULT_CATEGORY);
    let sections = render::build_sections(&index);

    assert_eq!(sections.len(), 1);
    assert_eq!(sections[0].label, DEFAULT_CATEGORY);

    let card = &sections[0].cards[0];
    assert_eq!(card.title, "Only Title");
    assert_eq!(card.description, NO_DESCRIPTION);
    assert_eq!(card.cover, PLACEHOLDER_IMAGE);
    assert_eq!(card.link, None); // click-through suppressed
}

#[test]
fn cards_use_untitled_fallback() {
    let set = parse("TITLE,AMAZON_LINK\n,https://example.com/u/abc").unwrap();
    let card = render::card_for(&set.records()[0]);
    assert_eq!(card.title, UNTITLED);
    assert_eq!(card.link.as_deref(), Some("https://example.com/u/abc"));
}

#[test]
fn cached_catalog_round_trips_through_load() {
    // save_catalog / load_cached share the fixed `.store/` location, so
    // exercise them back to back in one test.
    let text = sample_text();
    store::save_catalog(&text).unwrap();

    let cached = load::load_cached().unwrap();
    assert_eq!(cached, parse(&text).unwrap());
    assert_eq!(cached.len(), 3);
}

#[test]
fn collect_catalog_reads_local_files() {
    let source = SourceOptions {
        source: Source::File(sample_path()),
        ..SourceOptions::default()
    };
    let set = load::collect_catalog(&source, Some(&mut NullProgress)).unwrap();
    assert_eq!(set.len(), 3);
    assert_eq!(set.records()[0].get("TITLE"), Some("Stories of 25 Prophets In Islam"));
}

#[test]
fn sample_catalog_end_to_end() {
    let set = parse(&sample_text()).unwrap();
    assert_eq!(set.len(), 3);

    let index = group_by_field(set, FIELD_CATEGORY, DEFAULT_CATEGORY);
    let labels: Vec<&str> = index.labels().collect();
    assert_eq!(labels, ["Stories from Islam", "For Ages 4 to 10"]);
    assert_eq!(index.get("Stories from Islam").unwrap().len(), 2);
    assert_eq!(index.get("For Ages 4 to 10").unwrap().len(), 1);

    // Human-readable labels pass through display formatting untouched.
    let sections = render::build_sections(&index);
    assert_eq!(sections[0].heading, "Stories from Islam");
    assert_eq!(sections[0].cards.len(), 2);
    assert_eq!(
        sections[0].cards[0].link.as_deref(),
        Some("https://books2read.com/u/mde7XW")
    );
}
