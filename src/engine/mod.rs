//! Filter engine facade
//!
//! Composes the selector, suggestion index, and change notifier for one
//! filtering context (one resource-list view). This is the single
//! integration point for a host UI: ingest resources, mutate filters,
//! subscribe to changes, read suggestions.

use std::collections::BTreeMap;

use anyhow::Result;

use crate::notify::{ChangeNotifier, SubscriptionId};
use crate::resource::Resource;
use crate::selector::{Conjunct, ConjunctId, FilterResult, LabelSelector, Operator};
use crate::suggest::LabelSuggestionIndex;

/// One filtering context over a displayed resource collection
///
/// Every mutating call (`add_filter`, `remove_filter`, `clear_filters`)
/// fires exactly one synchronous notification carrying the post-mutation
/// selector; there is no batching or coalescing. Mutating methods take
/// `&mut self`, so a subscriber cannot re-enter the engine from within a
/// notification - the borrow checker rejects it.
#[derive(Debug, Default)]
pub struct FilterEngine {
    selector: LabelSelector,
    suggestions: LabelSuggestionIndex,
    notifier: ChangeNotifier,
}

impl FilterEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed a single resource's labels into the suggestion index
    pub fn ingest_one(&mut self, resource: &Resource) {
        self.suggestions.add_from_resource(resource);
    }

    /// Feed a collection of resources into the suggestion index
    pub fn ingest_many<'a, I>(&mut self, resources: I)
    where
        I: IntoIterator<Item = &'a Resource>,
    {
        self.suggestions.add_from_resources(resources);
    }

    /// Replace the suggestion index with a precomputed catalog
    pub fn set_suggestions(&mut self, suggestions: BTreeMap<String, Vec<String>>) {
        self.suggestions.set_suggestions(suggestions);
    }

    /// Add an active filter and notify subscribers
    ///
    /// Returns the created conjunct so the host can render it and keep its
    /// id for later removal. On a validation error nothing is added and no
    /// notification fires.
    pub fn add_filter(
        &mut self,
        key: impl Into<String>,
        operator: Operator,
        values: Vec<String>,
    ) -> FilterResult<Conjunct> {
        let conjunct = self.selector.add_conjunct(key, operator, values)?.clone();
        tracing::debug!(filter = %conjunct.display(), "Added active filter");
        self.notifier.fire(&self.selector);
        Ok(conjunct)
    }

    /// Remove an active filter and notify subscribers
    ///
    /// An unknown id removes nothing but still notifies, matching the
    /// remove-then-fire protocol of the active-filter widget; the returned
    /// flag says whether a filter was actually removed.
    pub fn remove_filter(&mut self, id: ConjunctId) -> bool {
        let removed = self.selector.remove_conjunct(id);
        if !removed {
            tracing::debug!(%id, "Ignoring removal of unknown filter id");
        }
        self.notifier.fire(&self.selector);
        removed
    }

    /// Remove every active filter and notify subscribers
    pub fn clear_filters(&mut self) {
        self.selector.clear_conjuncts();
        self.notifier.fire(&self.selector);
    }

    /// Subscribe to selector changes
    ///
    /// The callback runs synchronously after each mutation, receiving the
    /// post-mutation selector. Keep the returned handle and pass it to
    /// `unsubscribe` when the subscribing view is torn down.
    pub fn on_change<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(&LabelSelector) -> Result<()> + 'static,
    {
        self.notifier.subscribe(callback)
    }

    /// Drop a change subscription
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.notifier.unsubscribe(id)
    }

    /// The current selector, for per-resource evaluation by the host
    pub fn selector(&self) -> &LabelSelector {
        &self.selector
    }

    /// The accumulated suggestion index, for autocomplete rendering
    pub fn suggestions(&self) -> &LabelSuggestionIndex {
        &self.suggestions
    }
}
