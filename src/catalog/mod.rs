// src/catalog/mod.rs
//! The catalog core: parse delimited text into records, group records by
//! category, format category labels for display.
//!
//! All three pieces are pure and synchronous. The raw text is handed in
//! already retrieved (see `load`); nothing in here touches network or disk.

pub mod group;
pub mod label;
pub mod parse;
pub mod record;

pub use group::{CategoryIndex, group_by_field};
pub use label::{display_label, format_label};
pub use parse::{ParseMode, parse, parse_strict, parse_with};
pub use record::{Record, RecordSet};
