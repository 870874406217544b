use crate::graph::PartitionId;
use std::collections::BTreeMap;

/// Edge counts between partitions, as produced by [`EdgeCutReport::compute`].
///
/// Counts are per stored adjacency entry: `a->b` and `b->a` are two entries,
/// and multi-edges and self-loops each count on their own.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EdgeCutReport {
    pub vertex_count: u64,
    pub edge_count: u64,
    pub num_partitions: u64,

    pair_counts: BTreeMap<(PartitionId, PartitionId), u64>, // (src, dst) -> entries
    cut_count: u64,
}

impl EdgeCutReport {
    pub(crate) fn new(vertex_count: u64, num_partitions: u64) -> Self {
        Self {
            vertex_count,
            num_partitions,
            ..Default::default()
        }
    }

    pub(crate) fn record_edge(&mut self, src: PartitionId, dst: PartitionId) {
        *self.pair_counts.entry((src, dst)).or_insert(0) += 1;
        self.edge_count += 1;
        if src != dst {
            self.cut_count += 1;
        }
    }

    /// Number of entries whose endpoints lie in different partitions.
    pub fn cut_count(&self) -> u64 {
        self.cut_count
    }

    /// Entries from `src` to `dst`; `src == dst` gives intra-partition edges.
    pub fn pair_count(&self, src: PartitionId, dst: PartitionId) -> u64 {
        self.pair_counts.get(&(src, dst)).copied().unwrap_or(0)
    }

    /// Every observed `(src, dst, count)`, sorted by partition pair.
    pub fn pairs(&self) -> impl Iterator<Item = (PartitionId, PartitionId, u64)> + '_ {
        self.pair_counts.iter().map(|(&(s, d), &n)| (s, d, n))
    }

    /// Only the cross-partition pairs of [`Self::pairs`].
    pub fn cut_pairs(&self) -> impl Iterator<Item = (PartitionId, PartitionId, u64)> + '_ {
        self.pairs().filter(|(s, d, _)| s != d)
    }

    pub fn edge_cut_ratio(&self) -> f64 {
        if self.edge_count == 0 {
            return 0.0;
        }
        self.cut_count as f64 / self.edge_count as f64
    }

    pub fn communication_volume(&self) -> f64 {
        if self.num_partitions == 0 || self.vertex_count == 0 {
            return 0.0;
        }
        self.cut_count as f64 / (self.num_partitions * self.vertex_count) as f64
    }
}
