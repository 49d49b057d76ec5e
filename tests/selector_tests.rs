//! Selector evaluation tests
//!
//! End-to-end checks of the three operators and the AND-combination
//! semantics a list view relies on when re-filtering.

use std::collections::BTreeMap;

use labelsift::{FilterError, LabelSelector, Operator, Resource};
use serde_json::json;

fn labels(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[test]
fn test_exists_ignores_value() {
    let mut selector = LabelSelector::new();
    selector.add_conjunct("tier", Operator::Exists, vec![]).unwrap();

    assert!(selector.evaluate(&labels(&[("tier", "frontend")])));
    assert!(selector.evaluate(&labels(&[("tier", "anything-at-all")])));
    assert!(!selector.evaluate(&labels(&[("env", "prod")])));
}

#[test]
fn test_in_with_two_values() {
    let mut selector = LabelSelector::new();
    selector
        .add_conjunct(
            "tier",
            Operator::In,
            vec!["frontend".to_string(), "backend".to_string()],
        )
        .unwrap();

    assert!(selector.evaluate(&labels(&[("tier", "frontend")])));
    assert!(selector.evaluate(&labels(&[("tier", "backend")])));
    assert!(!selector.evaluate(&labels(&[("tier", "cache")])));
    assert!(!selector.evaluate(&labels(&[])));
}

#[test]
fn test_not_in_with_two_values() {
    let mut selector = LabelSelector::new();
    selector
        .add_conjunct(
            "tier",
            Operator::NotIn,
            vec!["frontend".to_string(), "backend".to_string()],
        )
        .unwrap();

    // absent key matches
    assert!(selector.evaluate(&labels(&[])));
    assert!(selector.evaluate(&labels(&[("env", "prod")])));
    // unlisted value matches
    assert!(selector.evaluate(&labels(&[("tier", "cache")])));
    // listed values do not
    assert!(!selector.evaluate(&labels(&[("tier", "frontend")])));
    assert!(!selector.evaluate(&labels(&[("tier", "backend")])));
}

#[test]
fn test_empty_selector_is_match_all() {
    let selector = LabelSelector::new();
    assert!(selector.evaluate(&labels(&[])));
    assert!(selector.evaluate(&labels(&[("tier", "frontend"), ("env", "prod")])));
}

#[test]
fn test_add_then_remove_restores_match_all() {
    let mut selector = LabelSelector::new();
    let resource_labels = labels(&[("tier", "frontend")]);

    let id = selector
        .add_conjunct("tier", Operator::In, vec!["frontend".to_string()])
        .unwrap()
        .id();
    assert!(selector.evaluate(&resource_labels));

    assert!(selector.remove_conjunct(id));
    assert!(selector.is_empty());
    assert!(selector.evaluate(&resource_labels));
}

#[test]
fn test_clear_restores_match_all() {
    let mut selector = LabelSelector::new();
    selector
        .add_conjunct("tier", Operator::In, vec!["frontend".to_string()])
        .unwrap();
    selector
        .add_conjunct("env", Operator::NotIn, vec!["dev".to_string()])
        .unwrap();

    selector.clear_conjuncts();
    assert!(selector.is_empty());
    assert!(selector.evaluate(&labels(&[("env", "dev")])));
}

#[test]
fn test_display_is_deterministic_and_ordered() {
    let mut selector = LabelSelector::new();
    let conjunct = selector
        .add_conjunct("app", Operator::In, vec!["a".to_string(), "b".to_string()])
        .unwrap();

    assert_eq!(conjunct.display(), "app in (a,b)");
    assert_eq!(conjunct.display(), "app in (a,b)");
}

#[test]
fn test_construction_error_taxonomy() {
    let mut selector = LabelSelector::new();

    assert!(matches!(
        selector.add_conjunct("", Operator::Exists, vec![]),
        Err(FilterError::EmptyKey)
    ));
    assert!(matches!(
        selector.add_conjunct("tier", Operator::NotIn, vec![]),
        Err(FilterError::ValuesRequired(Operator::NotIn))
    ));
    assert!(matches!(
        selector.add_conjunct("tier", Operator::Exists, vec!["x".to_string()]),
        Err(FilterError::ValuesNotAllowed(Operator::Exists))
    ));
    assert!(selector.is_empty());
}

#[test]
fn test_select_over_json_resources() {
    let resources: Vec<Resource> = [
        json!({ "metadata": { "name": "web", "labels": { "tier": "frontend" } } }),
        json!({ "metadata": { "name": "api", "labels": { "tier": "backend", "env": "prod" } } }),
        json!({ "metadata": { "name": "bare" } }),
    ]
    .into_iter()
    .map(|v| Resource::from_json(v).unwrap())
    .collect();

    let mut selector = LabelSelector::new();
    selector
        .add_conjunct("tier", Operator::In, vec!["backend".to_string()])
        .unwrap();

    let matched = selector.select(&resources);
    assert_eq!(matched.len(), 1);
    assert_eq!(matched[0].metadata.name.as_deref(), Some("api"));
}
