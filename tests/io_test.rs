// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Loading inputs from disk and running them.

use motif_search::config::SchedulePolicy;
use motif_search::io::{load_config, load_graph, load_motif};
use motif_search::{LoadError, Orchestrator};
use std::fs;
use tempfile::TempDir;

fn write(dir: &TempDir, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_files_to_report() {
    let dir = tempfile::tempdir().unwrap();
    let graph = write(&dir, "graph.txt", "# triangle\n0 1 0\n1 2 1\n2 0 2\n");
    let motif = write(&dir, "motif.txt", "0 1 0\n1 2 1\n");
    let config = write(
        &dir,
        "config.json",
        r#"{ "lanes": 2, "schedule": "dynamic", "parallel": false, "latency": { "dram": 100 } }"#,
    );

    let config = load_config(&config).unwrap();
    assert_eq!(config.lanes, 2);
    assert_eq!(config.schedule, SchedulePolicy::Dynamic);
    assert_eq!(config.latency.dram, 100);

    let graph = load_graph(&graph).unwrap();
    let motif = load_motif(&motif, config.max_motif_len).unwrap();
    assert_eq!(graph.len(), 3);
    assert_eq!(motif.window(), 1);

    let outcome = Orchestrator::new(config, graph, motif.edges().to_vec())
        .unwrap()
        .run()
        .unwrap();
    assert_eq!(outcome.report.result_count, 2);
    assert_eq!(outcome.report.lane_cycles.len(), 2);
}

#[test]
fn test_malformed_graph_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let graph = write(&dir, "graph.txt", "0 1 0\n1 2 one\n");
    match load_graph(&graph) {
        Err(LoadError::Parse { line, message }) => {
            assert_eq!(line, 2);
            assert!(message.contains("timestamp"));
        }
        other => panic!("expected parse error, got {:?}", other),
    }
}

#[test]
fn test_bad_config_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let config = write(&dir, "config.json", r#"{ "lanes": "many" }"#);
    assert!(matches!(load_config(&config), Err(LoadError::Config(_))));
}

#[test]
fn test_empty_motif_file_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let motif = write(&dir, "motif.txt", "# nothing here\n\n");
    assert!(matches!(load_motif(&motif, 5), Err(LoadError::Motif(_))));
}
