// src/catalog/group.rs

use super::record::{Record, RecordSet};

/// Category label → records sharing that label.
///
/// Label order is first-seen order across the input, and within a label
/// the original row order is kept. Fully derived; never mutated in place.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CategoryIndex {
    groups: Vec<(String, Vec<Record>)>,
}

impl CategoryIndex {
    pub fn get(&self, label: &str) -> Option<&[Record]> {
        self.groups
            .iter()
            .find(|(k, _)| k == label)
            .map(|(_, v)| v.as_slice())
    }

    /// Labels in first-seen order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.groups.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Record])> {
        self.groups.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    pub fn len(&self) -> usize { self.groups.len() }
    pub fn is_empty(&self) -> bool { self.groups.is_empty() }
}

/// Partition `records` by the value of `field_name`.
///
/// Total function: a record with no such field, or whose value is the empty
/// string (no trimming), lands under `default_label`.
pub fn group_by_field(records: RecordSet, field_name: &str, default_label: &str) -> CategoryIndex {
    let mut groups: Vec<(String, Vec<Record>)> = Vec::new();

    for record in records.into_records() {
        let label = match record.get(field_name) {
            Some(v) if !v.is_empty() => v.to_string(),
            _ => default_label.to_string(),
        };
        match groups.iter_mut().find(|(k, _)| *k == label) {
            Some((_, v)) => v.push(record),
            None => groups.push((label, vec![record])),
        }
    }

    CategoryIndex { groups }
}
