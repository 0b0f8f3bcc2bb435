use std::collections::BTreeSet;

/// Deduplicated set of extracted strings for one run.
///
/// Values are unquoted and non-empty by the time they get here. The set only
/// grows; iteration is in sorted order so output is stable between runs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractedSet {
    values: BTreeSet<String>,
}

impl ExtractedSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `value`. Returns false if it was already present.
    pub fn record(&mut self, value: impl Into<String>) -> bool {
        self.values.insert(value.into())
    }

    pub fn contains(&self, value: &str) -> bool {
        self.values.contains(value)
    }

    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.values.iter().map(String::as_str)
    }

    pub fn to_vec(&self) -> Vec<String> {
        self.values.iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
