// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Text loaders for graphs, motifs and configuration files.
//!
//! Graph and motif files share one format: one edge per line, written as
//! three whitespace-separated integers `u v time`. Blank lines and lines
//! starting with `#` are ignored.

use crate::config::SimConfig;
use crate::error::LoadError;
use crate::graph::{Edge, Motif, NodeId, TemporalGraph, Timestamp};
use crate::state::MotifMatch;
use std::fs;
use std::io::Write;
use std::path::Path;
use std::str::FromStr;

/// Parse edge records from text.
pub fn parse_edges(text: &str) -> Result<Vec<Edge>, LoadError> {
    let mut edges = Vec::new();
    for (index, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        edges.push(parse_edge(line, index + 1)?);
    }
    Ok(edges)
}

fn parse_edge(line: &str, number: usize) -> Result<Edge, LoadError> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() != 3 {
        return Err(LoadError::Parse {
            line: number,
            message: format!("expected `u v time`, found {} fields", fields.len()),
        });
    }
    let u: NodeId = parse_field(fields[0], "source node", number)?;
    let v: NodeId = parse_field(fields[1], "target node", number)?;
    let time: Timestamp = parse_field(fields[2], "timestamp", number)?;
    Ok(Edge::new(u, v, time))
}

fn parse_field<T>(field: &str, what: &str, number: usize) -> Result<T, LoadError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    field.parse().map_err(|err| LoadError::Parse {
        line: number,
        message: format!("bad {} `{}`: {}", what, field, err),
    })
}

fn read(path: &Path) -> Result<String, LoadError> {
    fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Read an edge file.
pub fn load_edges(path: &Path) -> Result<Vec<Edge>, LoadError> {
    parse_edges(&read(path)?)
}

/// Read a graph file and build its adjacency indexes.
pub fn load_graph(path: &Path) -> Result<TemporalGraph, LoadError> {
    Ok(TemporalGraph::new(load_edges(path)?))
}

/// Read a motif file of at most `max_len` edges.
pub fn load_motif(path: &Path, max_len: usize) -> Result<Motif, LoadError> {
    Ok(Motif::new(load_edges(path)?, max_len)?)
}

/// Read a JSON config file. Validation is left to the orchestrator.
pub fn load_config(path: &Path) -> Result<SimConfig, LoadError> {
    Ok(SimConfig::from_json(&read(path)?)?)
}

/// Rule printed after each occurrence.
pub const RESULT_SEPARATOR: &str = "--------------------";

/// Write every occurrence as `motif graph count` lines, each followed by a rule.
pub fn write_results<W: Write>(out: &mut W, results: &[MotifMatch]) -> std::io::Result<()> {
    for found in results {
        write!(out, "{}", found)?;
        writeln!(out, "{}", RESULT_SEPARATOR)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MotifError;
    use crate::state::CorrespondenceTable;

    #[test]
    fn test_parse_skips_blanks_and_comments() {
        let text = "# u v t\n0 1 0\n\n  1 2 5  \n# trailing\n2\t0\t-3\n";
        let edges = parse_edges(text).unwrap();
        assert_eq!(
            edges,
            vec![Edge::new(0, 1, 0), Edge::new(1, 2, 5), Edge::new(2, 0, -3)]
        );
    }

    #[test]
    fn test_parse_reports_line() {
        match parse_edges("0 1 0\n1 2\n") {
            Err(LoadError::Parse { line, .. }) => assert_eq!(line, 2),
            other => panic!("expected parse error, got {:?}", other),
        }
        match parse_edges("0 1 0\n\n1 x 3\n") {
            Err(LoadError::Parse { line, message }) => {
                assert_eq!(line, 3);
                assert!(message.contains("target node"));
            }
            other => panic!("expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_negative_node_is_rejected() {
        assert!(matches!(parse_edges("-1 2 0"), Err(LoadError::Parse { line: 1, .. })));
    }

    #[test]
    fn test_missing_file() {
        let err = load_edges(Path::new("/nonexistent/motif-search/graph.txt")).unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
        assert!(err.to_string().contains("graph.txt"));
    }

    #[test]
    fn test_motif_bound_applies() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("motif.txt");
        fs::write(&path, "0 1 0\n1 2 1\n2 0 2\n").unwrap();
        assert_eq!(load_motif(&path, 3).unwrap().len(), 3);
        assert!(matches!(
            load_motif(&path, 2),
            Err(LoadError::Motif(MotifError::TooLong { len: 3, max: 2 }))
        ));
    }

    #[test]
    fn test_results_are_separated_by_rules() {
        let mut table = CorrespondenceTable::new();
        table.insert(4, 0);
        table.insert(5, 1);
        let found = vec![MotifMatch::new(vec![0], &table), MotifMatch::new(vec![1], &table)];
        let mut out = Vec::new();
        write_results(&mut out, &found).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            "0 4 1\n1 5 1\n--------------------\n0 4 1\n1 5 1\n--------------------\n"
        );
    }
}
