use crate::graph::{PartitionId, VertexId};
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, VisualizerError>;

/// Failures surfaced by the loading, coloring and serialization stages.
///
/// All variants are deterministic functions of the input, so none of them
/// are worth retrying.
#[derive(Debug, Error)]
pub enum VisualizerError {
    #[error("file not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    #[error("{}:{line}: {reason}", path.display())]
    Parse {
        path: PathBuf,
        line: usize,
        reason: String,
    },

    #[error("no color assigned to partition {partition} (vertex {vertex})")]
    MissingPartitionColor {
        vertex: VertexId,
        partition: PartitionId,
    },

    #[error("vertex {vertex} has no partition entry")]
    MissingVertexPartition { vertex: VertexId },

    #[error("invalid separator pattern `{pattern}`")]
    InvalidSeparator {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("failed to write dot output")]
    DotWrite(#[source] io::Error),

    #[error("i/o error on {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl VisualizerError {
    /// Maps an `io::Error` raised while touching `path`, keeping `NotFound`
    /// distinct from other failures.
    pub(crate) fn io(path: &Path, source: io::Error) -> Self {
        if source.kind() == io::ErrorKind::NotFound {
            Self::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            Self::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    }

    pub(crate) fn parse(path: &Path, line: usize, reason: impl Into<String>) -> Self {
        Self::Parse {
            path: path.to_path_buf(),
            line,
            reason: reason.into(),
        }
    }
}
