//! Label selector module
//!
//! A selector is an ordered list of conjuncts combined by logical AND.
//! It decides, per resource, whether the resource's labels satisfy every
//! active constraint. Insertion order is preserved for display and
//! duplicate keys across conjuncts are allowed.

mod conjunct;

pub use conjunct::{Conjunct, ConjunctId, Operator};

use std::collections::BTreeMap;
use std::slice;

use crate::resource::Resource;

/// Filter construction errors
#[derive(Debug, thiserror::Error)]
pub enum FilterError {
    #[error("Filter key must not be empty")]
    EmptyKey,

    #[error("Operator '{0}' requires at least one value")]
    ValuesRequired(Operator),

    #[error("Operator '{0}' does not accept values")]
    ValuesNotAllowed(Operator),

    #[error("Unknown operator: {0}")]
    UnknownOperator(String),
}

/// Result type for filter operations
pub type FilterResult<T> = Result<T, FilterError>;

/// An ordered AND-combination of conjuncts
///
/// Owned by exactly one filtering context (one `FilterEngine`, one list
/// view). Conjunct ids come from a counter scoped to this selector and are
/// never reused within it.
#[derive(Debug, Clone)]
pub struct LabelSelector {
    conjuncts: Vec<Conjunct>,
    next_id: u64,
    empty_selects_all: bool,
}

impl LabelSelector {
    /// Create an empty selector where no active filters means match-all
    ///
    /// This is the policy a filter bar wants: with nothing entered, the
    /// whole list stays visible.
    pub fn new() -> Self {
        Self::with_empty_selects_all(true)
    }

    /// Create an empty selector with an explicit empty-selector policy
    ///
    /// With `empty_selects_all = false` an empty selector matches nothing,
    /// for hosts where an unfiltered view should start blank.
    pub fn with_empty_selects_all(empty_selects_all: bool) -> Self {
        Self {
            conjuncts: Vec::new(),
            next_id: 0,
            empty_selects_all,
        }
    }

    /// Build and append a conjunct, returning a reference to it
    ///
    /// Assigns a fresh id unique within this selector. On a validation
    /// error the selector is left unchanged.
    pub fn add_conjunct(
        &mut self,
        key: impl Into<String>,
        operator: Operator,
        values: Vec<String>,
    ) -> FilterResult<&Conjunct> {
        let conjunct = Conjunct::new(ConjunctId(self.next_id), key.into(), operator, values)?;
        self.next_id += 1;
        self.conjuncts.push(conjunct);
        Ok(self.conjuncts.last().expect("just pushed"))
    }

    /// Remove the conjunct with the given id
    ///
    /// Removing an unknown id is a no-op; the returned flag says whether
    /// a conjunct was actually removed.
    pub fn remove_conjunct(&mut self, id: ConjunctId) -> bool {
        let before = self.conjuncts.len();
        self.conjuncts.retain(|c| c.id() != id);
        self.conjuncts.len() < before
    }

    /// Remove all conjuncts
    pub fn clear_conjuncts(&mut self) {
        self.conjuncts.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.conjuncts.is_empty()
    }

    pub fn len(&self) -> usize {
        self.conjuncts.len()
    }

    /// The conjuncts in insertion order
    pub fn conjuncts(&self) -> &[Conjunct] {
        &self.conjuncts
    }

    /// Iterate over conjuncts in insertion order
    pub fn iter(&self) -> slice::Iter<'_, Conjunct> {
        self.conjuncts.iter()
    }

    /// Evaluate a resource's labels against every conjunct
    ///
    /// An empty selector returns its empty-selector policy (`true` by
    /// default, the vacuous match-all).
    pub fn evaluate(&self, labels: &BTreeMap<String, String>) -> bool {
        if self.conjuncts.is_empty() {
            return self.empty_selects_all;
        }
        self.conjuncts.iter().all(|c| c.evaluate(labels))
    }

    /// Filter a sequence of resources down to those this selector matches
    pub fn select<'a, I>(&self, resources: I) -> Vec<&'a Resource>
    where
        I: IntoIterator<Item = &'a Resource>,
    {
        resources
            .into_iter()
            .filter(|r| self.evaluate(r.labels()))
            .collect()
    }
}

impl Default for LabelSelector {
    fn default() -> Self {
        Self::new()
    }
}
