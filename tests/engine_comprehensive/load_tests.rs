//! Document loading: accepted shapes, failure modes, reload semantics

use crate::common::{sample_catalog, sample_indexer, write_document};
use casedex::{Error, Indexer};
use serde_json::json;

#[test]
fn loads_use_cases_object_shape() {
    let file = write_document(json!({"use_cases": [{"id": 1}, {"id": 2}]}));
    let indexer = Indexer::default();
    assert_eq!(indexer.load_and_index(file.path()).unwrap(), 2);
}

#[test]
fn loads_bare_array_shape() {
    let file = write_document(json!([{"id": 1}, {"id": 2}, {"id": 3}]));
    let indexer = Indexer::default();
    assert_eq!(indexer.load_and_index(file.path()).unwrap(), 3);
}

#[test]
fn rejects_other_top_level_shapes() {
    for bad in [json!("cases"), json!(17), json!({"items": []}), json!(null)] {
        let file = write_document(bad);
        let indexer = Indexer::default();
        assert!(matches!(
            indexer.load_and_index(file.path()),
            Err(Error::InvalidShape(_))
        ));
    }
}

#[test]
fn rejects_malformed_json() {
    use std::io::Write;
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "use_cases: [").unwrap();
    let indexer = Indexer::default();
    assert!(matches!(
        indexer.load_and_index(file.path()),
        Err(Error::Json(_))
    ));
}

#[test]
fn missing_file_is_io_error() {
    let indexer = Indexer::default();
    assert!(matches!(
        indexer.load_and_index(std::path::Path::new("/no/such/file.json")),
        Err(Error::Io { .. })
    ));
}

#[test]
fn failed_reload_is_all_or_nothing() {
    let indexer = sample_indexer();
    let stats_before = indexer.statistics();

    let bad = write_document(json!("oops"));
    assert!(indexer.reload(bad.path()).is_err());

    assert_eq!(indexer.statistics(), stats_before);
    assert_eq!(indexer.len(), 3);
}

#[test]
fn reload_same_document_is_idempotent() {
    let file = write_document(sample_catalog());
    let indexer = Indexer::default();

    indexer.load_and_index(file.path()).unwrap();
    let first = indexer.statistics();
    indexer.reload(file.path()).unwrap();
    let second = indexer.statistics();

    assert_eq!(first, second);
}

#[test]
fn reload_replaces_previous_snapshot_wholesale() {
    let indexer = sample_indexer();
    assert_eq!(indexer.len(), 3);

    let file = write_document(json!([{
        "id": 42,
        "name": "Demand forecasting",
        "application_domain": "Retail",
        "status": "Pilot"
    }]));
    indexer.reload(file.path()).unwrap();

    assert_eq!(indexer.len(), 1);
    // old categorical keys are gone with the old indices
    assert!(indexer.filter_by_domain("Healthcare").is_empty());
    assert_eq!(indexer.domains(), vec!["Retail"]);
    assert_eq!(indexer.statuses(), vec!["Pilot"]);
}

#[test]
fn extra_fields_survive_load_and_search() {
    let file = write_document(json!([{
        "id": 1,
        "name": "Crop monitoring",
        "region": "EMEA",
        "partners": ["AgriCo", "FieldSense"]
    }]));
    let indexer = Indexer::default();
    indexer.load_and_index(file.path()).unwrap();

    let case = indexer.get_use_case(1).unwrap();
    assert_eq!(case.extra["region"], json!("EMEA"));
}
