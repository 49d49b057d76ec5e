//! Label suggestion index
//!
//! Accumulates the label keys and values observed on scanned resources so
//! the host's filter inputs can offer them as autocomplete suggestions.

use std::collections::BTreeMap;

use crate::resource::Resource;

/// Mapping from label key to the values observed for it
///
/// Values are appended in scan order and deliberately not deduplicated:
/// repeated scans of overlapping resource sets accumulate repeats, and the
/// host's input widget is expected to collapse them for display. Replace
/// the whole index with `set_suggestions` when seeding from a precomputed
/// catalog instead of per-resource scanning.
#[derive(Debug, Clone, Default)]
pub struct LabelSuggestionIndex {
    suggestions: BTreeMap<String, Vec<String>>,
}

impl LabelSuggestionIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record every label of a single resource
    pub fn add_from_resource(&mut self, resource: &Resource) {
        for (key, value) in resource.labels() {
            self.suggestions
                .entry(key.clone())
                .or_default()
                .push(value.clone());
        }
    }

    /// Record every label of each resource in a collection
    pub fn add_from_resources<'a, I>(&mut self, resources: I)
    where
        I: IntoIterator<Item = &'a Resource>,
    {
        for resource in resources {
            self.add_from_resource(resource);
        }
    }

    /// Replace the whole index with a precomputed catalog
    pub fn set_suggestions(&mut self, suggestions: BTreeMap<String, Vec<String>>) {
        self.suggestions = suggestions;
    }

    /// Known label keys, in sorted order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.suggestions.keys().map(String::as_str)
    }

    /// Observed values for a key, in scan order
    pub fn values_for(&self, key: &str) -> Option<&[String]> {
        self.suggestions.get(key).map(Vec::as_slice)
    }

    /// The full key-to-values mapping, for autocomplete rendering
    pub fn as_map(&self) -> &BTreeMap<String, Vec<String>> {
        &self.suggestions
    }

    pub fn is_empty(&self) -> bool {
        self.suggestions.is_empty()
    }

    /// Number of distinct keys in the index
    pub fn len(&self) -> usize {
        self.suggestions.len()
    }
}
