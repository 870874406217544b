use partviz::config::GraphFormat;
use partviz::graph::Graph;
use partviz::stream::{Separator, VertexRecord, VertexStream};
use partviz::VisualizerError;
use std::fs;

#[test]
fn test_iterate_graph_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("graph.txt");
    fs::write(&path, "0\t0\t1\n1\t1\t0\t2\n2\t0\t1\n").unwrap();

    let mut seen = vec![];
    for record in VertexStream::from_path(&path, GraphFormat::default()).unwrap() {
        seen.push(record.unwrap());
    }
    assert_eq!(
        seen,
        vec![
            VertexRecord::new(0, 0, vec![1]),
            VertexRecord::new(1, 1, vec![0, 2]),
            VertexRecord::new(2, 0, vec![1]),
        ]
    );
}

#[test]
fn test_empty_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("empty.txt");
    fs::write(&path, "").unwrap();

    let mut stream = VertexStream::from_path(&path, GraphFormat::default()).unwrap();
    assert!(stream.next().is_none());
    assert!(Graph::load(&path, &GraphFormat::default()).unwrap().is_empty());
}

#[test]
fn test_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = Graph::load(dir.path().join("nope"), &GraphFormat::default()).unwrap_err();
    assert!(matches!(err, VisualizerError::FileNotFound { .. }));
}

#[test]
fn test_bad_line_fails_whole_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("graph.txt");
    fs::write(&path, "0\t0\t1\n1\t1\tzero\n").unwrap();

    let err = Graph::load(&path, &GraphFormat::default()).unwrap_err();
    match err {
        VisualizerError::Parse { path: p, line, .. } => {
            assert_eq!(p, path);
            assert_eq!(line, 2);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_regex_separator() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("graph.txt");
    fs::write(&path, "0 0  1\n1\t1 0\n").unwrap();

    let format = GraphFormat {
        separator: Separator::new("\\s+").unwrap(),
        ..GraphFormat::default()
    };
    let graph = Graph::load(&path, &format).unwrap();
    assert_eq!(graph.edges().collect::<Vec<_>>(), vec![(0, 1), (1, 0)]);
}

#[test]
fn test_partition_file_overrides_partitions() {
    let dir = tempfile::tempdir().unwrap();
    let graph_path = dir.path().join("graph.txt");
    let parts_path = dir.path().join("graph.parts");
    fs::write(&graph_path, "0\t0\t1\n1\t0\t0\n2\t0\n").unwrap();
    fs::write(&parts_path, "0\t3\n1\t4\n9\t4\n").unwrap();

    let graph = Graph::load(&graph_path, &GraphFormat::default())
        .unwrap()
        .with_partitions(&parts_path, &Separator::tab())
        .unwrap();

    assert_eq!(graph.partition_of(0), Some(3));
    assert_eq!(graph.partition_of(1), Some(4));
    assert_eq!(graph.partition_of(2), Some(0));
    assert_eq!(graph.partition_of(9), None);
}

#[test]
fn test_missing_partition_file() {
    let dir = tempfile::tempdir().unwrap();
    let graph = Graph::default();
    let err = graph
        .with_partitions(dir.path().join("absent"), &Separator::tab())
        .unwrap_err();
    assert!(matches!(err, VisualizerError::FileNotFound { .. }));
}
