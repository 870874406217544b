//! Colored DOT output and edge-cut reports for partitioned graphs.
//!
//! Input graphs are line oriented: `<vertex><sep><partition><sep><nbr>...`.
//! Each partition gets one color, either freshly drawn or loaded from a color
//! map persisted by an earlier run, and every vertex is emitted with the
//! color of its partition.

pub mod color;
pub mod config;
pub mod cut;
pub mod dot;
pub mod error;
pub mod graph;
pub mod result;
pub mod stream;
pub mod visualize;

pub use color::{Color, ColorAssignment};
pub use cut::edge_cut;
pub use dot::{render_dot, write_dot, write_dot_to};
pub use error::{Result, VisualizerError};
pub use graph::{Graph, PartitionId, VertexId};
pub use visualize::{RunOutcome, run, run_with_rng};
