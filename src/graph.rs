use crate::config::GraphFormat;
use crate::error::{Result, VisualizerError};
use crate::stream::{Separator, VertexRecord, VertexStream};
use std::collections::{HashMap, HashSet};
use std::path::Path;
use tracing::{debug, info};

pub type VertexId = i64;
pub type PartitionId = i64;

/// Partitioned directed graph held as adjacency lists.
///
/// Vertices iterate in the order their ids first appeared in the input.
/// The graph is built once and only read afterwards.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Graph {
    order: Vec<VertexId>,
    adjacency: HashMap<VertexId, Vec<VertexId>>, // vertex -> out neighbors
    partitions: HashMap<VertexId, PartitionId>,  // vertex -> partition id
}

impl Graph {
    /// Reads a partitioned graph description from `path`.
    pub fn load(path: impl AsRef<Path>, format: &GraphFormat) -> Result<Self> {
        let path = path.as_ref();
        let graph = Self::from_stream(VertexStream::from_path(path, format.clone())?)?;
        info!(
            path = %path.display(),
            vertices = graph.vertex_count(),
            edges = graph.edge_count(),
            "graph loaded"
        );
        Ok(graph)
    }

    /// Stops at the first malformed record; a partially loaded graph would
    /// silently skew coloring and edge-cut results.
    pub fn from_stream(stream: impl Iterator<Item = Result<VertexRecord>>) -> Result<Self> {
        let mut graph = Self::default();
        for record in stream {
            graph.insert(record?);
        }
        Ok(graph)
    }

    pub fn from_records(records: impl IntoIterator<Item = VertexRecord>) -> Self {
        let mut graph = Self::default();
        for record in records {
            graph.insert(record);
        }
        graph
    }

    /// A repeated vertex id replaces the earlier line but keeps its position.
    fn insert(&mut self, record: VertexRecord) {
        let VertexRecord {
            id,
            partition,
            nbrs,
        } = record;
        if self.adjacency.insert(id, nbrs).is_some() {
            debug!(vertex = id, "duplicate vertex line, keeping the last one");
        } else {
            self.order.push(id);
        }
        self.partitions.insert(id, partition);
    }

    /// Replaces partition ids with the ones listed in a
    /// `<vertex><sep><partition>` file, e.g. the output of an external
    /// partitioner. Ids not present in the graph are skipped.
    pub fn with_partitions(mut self, path: impl AsRef<Path>, separator: &Separator) -> Result<Self> {
        let path = path.as_ref();
        let format = GraphFormat {
            separator: separator.clone(),
            edge_offset: 2,
            partition_token_index: 1,
        };

        let mut updated = 0usize;
        for record in VertexStream::from_path(path, format)? {
            let record = record?;
            match self.partitions.get_mut(&record.id) {
                Some(partition) => {
                    *partition = record.partition;
                    updated += 1;
                }
                None => debug!(vertex = record.id, "partition entry for unknown vertex"),
            }
        }

        info!(path = %path.display(), updated, "partitions applied");
        Ok(self)
    }

    pub fn partition_of(&self, v: VertexId) -> Option<PartitionId> {
        self.partitions.get(&v).copied()
    }

    /// Like `partition_of`, for callers that cannot continue without it.
    pub fn require_partition(&self, v: VertexId) -> Result<PartitionId> {
        self.partition_of(v)
            .ok_or(VisualizerError::MissingVertexPartition { vertex: v })
    }

    pub fn neighbors(&self, v: VertexId) -> Option<&[VertexId]> {
        self.adjacency.get(&v).map(Vec::as_slice)
    }

    /// `(vertex, out neighbors)` pairs in input order.
    pub fn vertices(&self) -> impl Iterator<Item = (VertexId, &[VertexId])> + '_ {
        self.order
            .iter()
            .map(|&v| (v, self.adjacency.get(&v).map_or(&[][..], Vec::as_slice)))
    }

    /// Every stored `(source, target)` entry, multi-edges and self-loops
    /// included.
    pub fn edges(&self) -> impl Iterator<Item = (VertexId, VertexId)> + '_ {
        self.vertices()
            .flat_map(|(v, nbrs)| nbrs.iter().map(move |&nbr| (v, nbr)))
    }

    /// Distinct partition ids in order of first appearance.
    pub fn partitions(&self) -> Vec<PartitionId> {
        let mut seen = HashSet::new();
        self.order
            .iter()
            .filter_map(|v| self.partition_of(*v))
            .filter(|p| seen.insert(*p))
            .collect()
    }

    pub fn vertex_count(&self) -> usize {
        self.order.len()
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
