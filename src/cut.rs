use crate::error::Result;
use crate::graph::Graph;
use crate::result::EdgeCutReport;

/// Number of adjacency entries whose endpoints lie in different partitions.
///
/// Every stored entry is counted on its own: an edge listed as both `a->b`
/// and `b->a` across a boundary contributes two, and repeated entries are
/// not deduplicated.
pub fn edge_cut(graph: &Graph) -> Result<u64> {
    let mut cut = 0;
    for (v, nbrs) in graph.vertices() {
        let src = graph.require_partition(v)?;
        for &nbr in nbrs {
            if graph.require_partition(nbr)? != src {
                cut += 1;
            }
        }
    }
    Ok(cut)
}

impl EdgeCutReport {
    /// Breaks the edge cut down per ordered `(source, destination)`
    /// partition pair.
    pub fn compute(graph: &Graph) -> Result<Self> {
        let mut report =
            EdgeCutReport::new(graph.vertex_count() as u64, graph.partitions().len() as u64);

        for (v, nbr) in graph.edges() {
            let src = graph.require_partition(v)?;
            let dst = graph.require_partition(nbr)?;
            report.record_edge(src, dst);
        }
        Ok(report)
    }
}
