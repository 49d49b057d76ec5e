//! Conjunct: a single key/operator/value(s) constraint
//!
//! Conjuncts are immutable once created; changing one means removing it
//! and adding a replacement. Construction is only reachable through
//! `LabelSelector::add_conjunct`, which assigns the id.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{FilterError, FilterResult};

/// Matching operator for a conjunct
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operator {
    /// Key must be present, value irrelevant
    Exists,
    /// Key must be present with a value in the conjunct's value set
    In,
    /// Key absent, or present with a value outside the conjunct's value set
    #[serde(rename = "not in")]
    NotIn,
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operator::Exists => write!(f, "exists"),
            Operator::In => write!(f, "in"),
            Operator::NotIn => write!(f, "not in"),
        }
    }
}

impl FromStr for Operator {
    type Err = FilterError;

    /// Parse the operator strings used by filter UIs ("exists", "in", "not in")
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "exists" => Ok(Operator::Exists),
            "in" => Ok(Operator::In),
            "not in" => Ok(Operator::NotIn),
            other => Err(FilterError::UnknownOperator(other.to_string())),
        }
    }
}

/// Identifier of a conjunct, unique within its owning selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ConjunctId(pub(crate) u64);

impl fmt::Display for ConjunctId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single key/operator/value(s) constraint
///
/// Serializable for hosts that mirror active filters into a URL or view
/// state; not deserializable, since construction must go through the
/// owning selector's validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Conjunct {
    id: ConjunctId,
    key: String,
    operator: Operator,
    values: Vec<String>,
    display: String,
}

impl Conjunct {
    /// Build a conjunct, validating key/operator/value arity
    ///
    /// `In`/`NotIn` require at least one value; `Exists` must have none.
    pub(crate) fn new(
        id: ConjunctId,
        key: String,
        operator: Operator,
        values: Vec<String>,
    ) -> FilterResult<Self> {
        if key.is_empty() {
            return Err(FilterError::EmptyKey);
        }
        match operator {
            Operator::In | Operator::NotIn if values.is_empty() => {
                return Err(FilterError::ValuesRequired(operator));
            }
            Operator::Exists if !values.is_empty() => {
                return Err(FilterError::ValuesNotAllowed(operator));
            }
            _ => {}
        }

        let display = render_display(&key, operator, &values);
        Ok(Self {
            id,
            key,
            operator,
            values,
            display,
        })
    }

    pub fn id(&self) -> ConjunctId {
        self.id
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn operator(&self) -> Operator {
        self.operator
    }

    /// The conjunct's values, in the order supplied at creation
    pub fn values(&self) -> &[String] {
        &self.values
    }

    /// Human-readable rendering of this conjunct, e.g. `tier in (frontend,backend)`
    ///
    /// Derived once at construction; repeated calls always return the same string.
    pub fn display(&self) -> &str {
        &self.display
    }

    /// Evaluate this conjunct against a resource's labels
    pub fn evaluate(&self, labels: &BTreeMap<String, String>) -> bool {
        match self.operator {
            Operator::Exists => labels.contains_key(&self.key),
            Operator::In => labels
                .get(&self.key)
                .is_some_and(|value| self.values.iter().any(|v| v == value)),
            Operator::NotIn => labels
                .get(&self.key)
                .is_none_or(|value| !self.values.iter().any(|v| v == value)),
        }
    }
}

fn render_display(key: &str, operator: Operator, values: &[String]) -> String {
    match operator {
        Operator::Exists => key.to_string(),
        Operator::In => format!("{} in ({})", key, values.join(",")),
        Operator::NotIn => format!("{} not in ({})", key, values.join(",")),
    }
}
