//! Labelsift
//!
//! A label-selector filtering engine for Kubernetes-style labeled resources.
//! Hosts compose key/operator/value constraints into a selector, feed scanned
//! resources into a suggestion index for autocomplete, and subscribe to
//! change notifications that drive re-filtering of a displayed list.

pub mod engine;
pub mod notify;
pub mod resource;
pub mod selector;
pub mod suggest;

// Re-export commonly used types for convenience
pub use engine::FilterEngine;
pub use notify::{ChangeNotifier, SubscriptionId};
pub use resource::{Metadata, Resource};
pub use selector::{Conjunct, ConjunctId, FilterError, FilterResult, LabelSelector, Operator};
pub use suggest::LabelSuggestionIndex;
