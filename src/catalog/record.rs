// src/catalog/record.rs

/// One catalog entry: field name → value, in header order.
///
/// Every record assembled from the same parse carries exactly the header's
/// key set, in the header's order. Immutable after assembly.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Record {
    fields: Vec<(String, String)>,
}

impl Record {
    /// Pair header field *i* with cell *i*.
    ///
    /// Short rows pad missing trailing fields with `""`; extra cells have
    /// no key and are dropped. Duplicate header cells collapse to one key
    /// and the later cell's value wins.
    pub(crate) fn assemble(headers: &[String], cells: &[String]) -> Self {
        let mut fields: Vec<(String, String)> = Vec::with_capacity(headers.len());
        for (i, name) in headers.iter().enumerate() {
            let value = cells.get(i).cloned().unwrap_or_default();
            match fields.iter_mut().find(|(k, _)| k == name) {
                Some((_, v)) => *v = value,
                None => fields.push((name.clone(), value)),
            }
        }
        Self { fields }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(k, _)| k.as_str())
    }

    /// Values in key order, for table display and export.
    pub fn values(&self) -> Vec<String> {
        self.fields.iter().map(|(_, v)| v.clone()).collect()
    }

    pub fn len(&self) -> usize { self.fields.len() }
    pub fn is_empty(&self) -> bool { self.fields.is_empty() }
}

/// Ordered parse result: the header row plus one `Record` per data row,
/// in original row order. Rebuilt wholesale on every (re)load.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RecordSet {
    headers: Vec<String>,
    records: Vec<Record>,
}

impl RecordSet {
    pub(crate) fn new(headers: Vec<String>, records: Vec<Record>) -> Self {
        Self { headers, records }
    }

    pub fn headers(&self) -> &[String] { &self.headers }
    pub fn records(&self) -> &[Record] { &self.records }

    pub fn len(&self) -> usize { self.records.len() }
    pub fn is_empty(&self) -> bool { self.records.is_empty() }

    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.iter()
    }

    /// Hand the records over (e.g. to the grouper); header list is dropped.
    pub fn into_records(self) -> Vec<Record> {
        self.records
    }

    /// Materialize plain rows in header order, for table view and export.
    pub fn to_rows(&self) -> Vec<Vec<String>> {
        self.records.iter().map(|r| r.values()).collect()
    }
}
