use std::fs;

use linkrank_corpus::{load_link_records, CorpusError, LinkRecord, Registry};

#[test]
fn loads_conventional_files_from_corpus_dir() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("url.tsv"),
        "0 http://example.edu\n1 http://example.edu/about\n2 http://example.edu/grad\n",
    )
    .unwrap();
    fs::write(dir.path().join("id-graph.tsv"), "0 1\n1 2\n2 0\n0 1\n").unwrap();

    let registry = Registry::load(dir.path()).unwrap();
    assert_eq!(registry.len(), 3);
    assert!(registry.contains(2));
    assert_eq!(registry.url(1), Some("http://example.edu/about"));

    let records = load_link_records(dir.path()).unwrap();
    assert_eq!(records.len(), 4);
    assert_eq!(records[0], LinkRecord { from: 0, to: 1 });
    // The duplicate edge survives ingestion.
    assert_eq!(records[3], LinkRecord { from: 0, to: 1 });
}

#[test]
fn missing_registry_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = Registry::load(dir.path()).unwrap_err();
    assert!(matches!(err, CorpusError::Io { .. }));
}

#[test]
fn malformed_edge_aborts_loading() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("id-graph.tsv"), "0 1\n1 2 3\n").unwrap();
    let err = load_link_records(dir.path()).unwrap_err();
    match err {
        CorpusError::MalformedRecord { line, .. } => assert_eq!(line, 2),
        other => panic!("unexpected error: {other}"),
    }
}
