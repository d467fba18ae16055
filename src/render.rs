// src/render.rs
//
// The rendering collaborator's input: pure view-model construction from a
// CategoryIndex. No DOM, no ambient globals — frontends take these structs
// and decide how to draw them (egui cards, stdout listing, …).

use crate::catalog::{CategoryIndex, Record, display_label};
use crate::config::consts::*;

/// One book card, fallbacks already applied.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Card {
    pub title: String,
    pub description: String,
    /// Cover image location; the placeholder path when the record has none.
    pub cover: String,
    /// Purchase link. `None` means frontends suppress the click-through.
    pub link: Option<String>,
}

/// One category worth of cards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Section {
    /// Raw grouping key.
    pub label: String,
    /// Display form of the key (underscore keys get title-cased).
    pub heading: String,
    pub cards: Vec<Card>,
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

pub fn card_for(record: &Record) -> Card {
    Card {
        title: s!(non_empty(record.get(FIELD_TITLE)).unwrap_or(UNTITLED)),
        description: s!(non_empty(record.get(FIELD_DESCRIPTION)).unwrap_or(NO_DESCRIPTION)),
        cover: s!(non_empty(record.get(FIELD_COVER)).unwrap_or(PLACEHOLDER_IMAGE)),
        link: non_empty(record.get(FIELD_AMAZON)).map(String::from),
    }
}

/// Sections in the index's label order, cards in record order.
pub fn build_sections(index: &CategoryIndex) -> Vec<Section> {
    index
        .iter()
        .map(|(label, records)| Section {
            label: s!(label),
            heading: display_label(label),
            cards: records.iter().map(card_for).collect(),
        })
        .collect()
}
