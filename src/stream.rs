use crate::config::GraphFormat;
use crate::error::{Result, VisualizerError};
use crate::graph::{PartitionId, VertexId};
use regex::Regex;
use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::{Path, PathBuf};

/// Token separator of the line-oriented input formats.
#[derive(Clone, Debug)]
pub enum Separator {
    /// Split on an exact string, e.g. `"\t"`.
    Literal(String),
    /// Split on every match of a regular expression, e.g. `"\\s+"`.
    Pattern(Regex),
    /// Split on runs of whitespace.
    Whitespace,
}

impl Separator {
    /// Builds a separator from user input. Plain strings are matched
    /// literally, anything containing regex syntax is compiled as a pattern
    /// and an empty string means "any whitespace".
    pub fn new(token: &str) -> Result<Self> {
        if token.is_empty() {
            return Ok(Self::Whitespace);
        }
        if regex::escape(token) == token {
            return Ok(Self::Literal(token.to_string()));
        }
        Regex::new(token)
            .map(Self::Pattern)
            .map_err(|source| VisualizerError::InvalidSeparator {
                pattern: token.to_string(),
                source,
            })
    }

    pub fn tab() -> Self {
        Self::Literal("\t".to_string())
    }

    /// Splits `line` into tokens. Trailing empty tokens are dropped so a
    /// dangling separator at the end of a line does not produce a bogus
    /// neighbor.
    pub fn split<'a>(&self, line: &'a str) -> Vec<&'a str> {
        let mut tokens: Vec<&str> = match self {
            Self::Literal(sep) => line.split(sep.as_str()).collect(),
            Self::Pattern(re) => re.split(line).collect(),
            Self::Whitespace => line.split_whitespace().collect(),
        };
        while tokens.last().is_some_and(|t| t.is_empty()) {
            tokens.pop();
        }
        tokens
    }
}

impl Default for Separator {
    fn default() -> Self {
        Self::tab()
    }
}

/// One parsed input line: a vertex, its partition and its outgoing edges.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VertexRecord {
    pub id: VertexId,
    pub partition: PartitionId,
    pub nbrs: Vec<VertexId>,
}

impl VertexRecord {
    pub fn new(id: VertexId, partition: PartitionId, nbrs: Vec<VertexId>) -> Self {
        Self {
            id,
            partition,
            nbrs,
        }
    }
}

/// A pull-based vertex stream over a line-oriented graph description.
/// Consumers iterate until `None`; the first malformed line yields an error
/// and the caller is expected to stop there.
pub struct VertexStream<R> {
    lines: Lines<R>,
    format: GraphFormat,
    source: PathBuf,
    line_no: usize,
}

impl VertexStream<BufReader<File>> {
    pub fn from_path(path: impl AsRef<Path>, format: GraphFormat) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| VisualizerError::io(path, e))?;
        Ok(Self::from_reader(BufReader::new(file), path, format))
    }
}

impl<R: BufRead> VertexStream<R> {
    /// `source` is only used to label parse errors.
    pub fn from_reader(reader: R, source: impl Into<PathBuf>, format: GraphFormat) -> Self {
        Self {
            lines: reader.lines(),
            format,
            source: source.into(),
            line_no: 0,
        }
    }

    fn parse_line(&self, line: &str) -> Result<VertexRecord> {
        let tokens = self.format.separator.split(line);
        let GraphFormat {
            edge_offset,
            partition_token_index,
            ..
        } = self.format;

        if tokens.len() < edge_offset {
            return Err(self.error(format!(
                "expected at least {edge_offset} tokens, found {}",
                tokens.len()
            )));
        }
        let Some(partition) = tokens.get(partition_token_index) else {
            return Err(self.error(format!(
                "missing partition id at token {partition_token_index}"
            )));
        };

        let id = self.parse_int(tokens[0], "vertex id")?;
        let partition = self.parse_int(partition, "partition id")?;
        let nbrs = tokens[edge_offset..]
            .iter()
            .map(|t| self.parse_int(t, "neighbor id"))
            .collect::<Result<Vec<_>>>()?;

        Ok(VertexRecord::new(id, partition, nbrs))
    }

    fn parse_int(&self, token: &str, what: &str) -> Result<i64> {
        token
            .trim()
            .parse()
            .map_err(|_| self.error(format!("invalid {what} `{token}`")))
    }

    fn error(&self, reason: String) -> VisualizerError {
        VisualizerError::parse(&self.source, self.line_no, reason)
    }
}

impl<R: BufRead> Iterator for VertexStream<R> {
    type Item = Result<VertexRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let line = match self.lines.next()? {
                Ok(line) => line,
                Err(e) => return Some(Err(VisualizerError::io(&self.source, e))),
            };
            self.line_no += 1;

            let line = line.trim_end_matches('\r');
            if line.trim().is_empty() {
                continue;
            }
            return Some(self.parse_line(line));
        }
    }
}
