//! Statistics aggregation over loaded snapshots

use crate::common::{sample_indexer, write_document};
use casedex::Indexer;
use serde_json::json;

#[test]
fn sample_catalog_distributions() {
    let indexer = sample_indexer();
    let stats = indexer.statistics();

    assert_eq!(stats.total_use_cases, 3);
    assert_eq!(stats.domains.len(), 3);
    assert_eq!(stats.domains["Healthcare"], 1);
    assert_eq!(stats.ai_methods["Machine Learning"], 3);
    assert_eq!(stats.statuses["Production"], 2);
    assert_eq!(stats.statuses["PoC"], 1);
}

#[test]
fn top_lists_are_count_ordered_and_capped() {
    let cases: Vec<serde_json::Value> = (0..15)
        .map(|i| {
            json!({
                "id": i,
                "application_domain": format!("Domain{:02}", i % 12),
                "ai_methods": ["Machine Learning"]
            })
        })
        .collect();
    let file = write_document(json!(cases));
    let indexer = Indexer::default();
    indexer.load_and_index(file.path()).unwrap();

    let stats = indexer.statistics();
    assert_eq!(stats.domains.len(), 12);
    assert_eq!(stats.top_domains.len(), 10);
    // domains 0..3 appear twice, the rest once
    assert_eq!(stats.top_domains[0].1, 2);
    assert_eq!(stats.top_ai_methods, vec![("Machine Learning".to_string(), 15)]);
}

#[test]
fn distinct_tasks_with_cardinality() {
    let indexer = sample_indexer();
    let stats = indexer.statistics();

    assert_eq!(
        stats.tasks,
        vec!["Diagnosis", "Fraud Detection", "Quality Control"]
    );
    assert_eq!(stats.task_count, 3);
}

#[test]
fn duplicate_tasks_collapse() {
    let file = write_document(json!([
        {"id": 1, "tasks": ["Forecasting", "Forecasting"]},
        {"id": 2, "tasks": ["Forecasting"]}
    ]));
    let indexer = Indexer::default();
    indexer.load_and_index(file.path()).unwrap();

    let stats = indexer.statistics();
    assert_eq!(stats.tasks, vec!["Forecasting"]);
    assert_eq!(stats.task_count, 1);
}

#[test]
fn statistics_track_the_current_snapshot_only() {
    let indexer = sample_indexer();
    assert_eq!(indexer.statistics().total_use_cases, 3);

    let file = write_document(json!([{"id": 7, "application_domain": "Energy"}]));
    indexer.reload(file.path()).unwrap();

    let stats = indexer.statistics();
    assert_eq!(stats.total_use_cases, 1);
    assert_eq!(stats.domains.len(), 1);
    assert!(stats.domains.contains_key("Energy"));
    assert!(stats.tasks.is_empty());
}
