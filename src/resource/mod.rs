//! Resource data model
//!
//! The minimal shape of a labeled resource as supplied by the host:
//! an optional metadata block carrying a name and a string-to-string
//! label map. The filtering core reads this shape and never mutates it.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A labeled resource as seen by the filtering core
///
/// Hosts typically deserialize this from the JSON objects they already
/// hold (Kubernetes objects, cached API responses). Fields the host has
/// beyond `metadata` are ignored on deserialization.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Resource {
    /// Resource metadata (name and labels)
    #[serde(default)]
    pub metadata: Metadata,
}

/// Metadata block of a resource
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Metadata {
    /// Resource name, if the host supplies one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Labels attached to the resource
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub labels: BTreeMap<String, String>,
}

impl Resource {
    /// Create a resource with the given labels and no name
    pub fn with_labels(labels: BTreeMap<String, String>) -> Self {
        Self {
            metadata: Metadata {
                name: None,
                labels,
            },
        }
    }

    /// Deserialize a resource from a dynamic JSON object
    ///
    /// Extra fields are ignored; a missing or null `metadata` block yields
    /// an unnamed resource with no labels.
    pub fn from_json(value: serde_json::Value) -> serde_json::Result<Self> {
        serde_json::from_value(value)
    }

    /// The resource's labels
    pub fn labels(&self) -> &BTreeMap<String, String> {
        &self.metadata.labels
    }
}
