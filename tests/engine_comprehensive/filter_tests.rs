//! Categorical filters and key listings

use crate::common::{sample_indexer, write_document};
use casedex::Indexer;
use serde_json::json;

#[test]
fn status_filter_returns_exact_matches_in_position_order() {
    let indexer = sample_indexer();
    let production = indexer.filter_by_status("Production");
    let ids: Vec<u64> = production.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![1, 2]);
}

#[test]
fn filter_membership_matches_field_equality() {
    let indexer = sample_indexer();
    for domain in indexer.domains() {
        let matched = indexer.filter_by_domain(&domain);
        assert!(!matched.is_empty());
        assert!(matched.iter().all(|c| c.application_domain == domain));
    }
}

#[test]
fn unknown_values_yield_empty_not_error() {
    let indexer = sample_indexer();
    assert!(indexer.filter_by_domain("NoSuchDomain").is_empty());
    assert!(indexer.filter_by_method("NoSuchMethod").is_empty());
    assert!(indexer.filter_by_status("NoSuchStatus").is_empty());
}

#[test]
fn filters_are_case_sensitive_on_exact_values() {
    let indexer = sample_indexer();
    assert_eq!(indexer.filter_by_domain("Healthcare").len(), 1);
    assert!(indexer.filter_by_domain("healthcare").is_empty());
}

#[test]
fn methods_ordered_by_descending_frequency() {
    let indexer = sample_indexer();
    let methods = indexer.ai_methods();

    assert_eq!(methods.len(), 4);
    assert_eq!(methods[0], "Machine Learning");
    // remaining singletons: order among them is implementation-defined
    // (here: lexicographic), but all must be present
    let mut rest: Vec<&str> = methods[1..].iter().map(String::as_str).collect();
    rest.sort_unstable();
    assert_eq!(rest, vec!["Computer Vision", "Deep Learning", "NLP"]);
}

#[test]
fn domain_and_status_listings_are_sorted() {
    let indexer = sample_indexer();
    assert_eq!(
        indexer.domains(),
        vec!["Finance", "Healthcare", "Manufacturing"]
    );
    assert_eq!(indexer.statuses(), vec!["PoC", "Production"]);
}

#[test]
fn empty_categorical_fields_do_not_create_keys() {
    let file = write_document(json!([
        {"id": 1, "name": "Unclassified", "application_domain": "", "status": ""},
        {"id": 2, "name": "Classified", "application_domain": "Energy", "status": "Pilot"}
    ]));
    let indexer = Indexer::default();
    indexer.load_and_index(file.path()).unwrap();

    assert_eq!(indexer.domains(), vec!["Energy"]);
    assert_eq!(indexer.statuses(), vec!["Pilot"]);
    assert!(indexer.filter_by_domain("").is_empty());
}

#[test]
fn method_filter_matches_any_list_element() {
    let indexer = sample_indexer();
    let vision = indexer.filter_by_method("Computer Vision");
    assert_eq!(vision.len(), 1);
    assert_eq!(vision[0].id, 3);

    let ml = indexer.filter_by_method("Machine Learning");
    assert_eq!(ml.len(), 3);
}
