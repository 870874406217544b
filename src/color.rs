use crate::error::{Result, VisualizerError};
use crate::graph::{Graph, PartitionId};
use rand::Rng;
use std::collections::HashMap;
use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use std::str::FromStr;
use tracing::{debug, info};

/// Exclusive upper bound of a freshly drawn color channel.
pub const MAX_CHANNEL: i32 = 250;

/// Fill color of a partition.
///
/// Generated colors are `Rgb` triples. Colors read from a persisted map keep
/// the file's token as written, so anything the renderer accepts (hex
/// strings, spaced triples, out-of-range channels) survives a load/store
/// cycle unchanged.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    Rgb { r: i32, g: i32, b: i32 },
    Raw(String),
}

impl Color {
    pub fn new(r: i32, g: i32, b: i32) -> Self {
        Self::Rgb { r, g, b }
    }

    /// Three independent uniform draws from `[0, MAX_CHANNEL)`.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::Rgb {
            r: rng.random_range(0..MAX_CHANNEL),
            g: rng.random_range(0..MAX_CHANNEL),
            b: rng.random_range(0..MAX_CHANNEL),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rgb { r, g, b } => write!(f, "{r},{g},{b}"),
            Self::Raw(token) => f.write_str(token),
        }
    }
}

impl FromStr for Color {
    type Err = String;

    /// Tokens that are exactly `r,g,b` become `Rgb`; every other non-empty
    /// token is kept verbatim.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        if s.trim().is_empty() {
            return Err("empty color".to_string());
        }

        let channels: Vec<_> = s.split(',').map(|c| c.parse::<i32>()).collect();
        if let [Ok(r), Ok(g), Ok(b)] = channels.as_slice() {
            let rgb = Self::new(*r, *g, *b);
            if rgb.to_string() == s {
                return Ok(rgb);
            }
        }
        Ok(Self::Raw(s.to_string()))
    }
}

/// Partition id to color mapping.
///
/// Holds at most one color per partition; the first assignment wins and is
/// never replaced. Iterates in the order partitions were first assigned,
/// which is also the order of the persisted file.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ColorAssignment {
    order: Vec<PartitionId>,
    colors: HashMap<PartitionId, Color>,
}

impl ColorAssignment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Draws one random color for every distinct partition of `graph`.
    pub fn generate<R: Rng + ?Sized>(graph: &Graph, rng: &mut R) -> Self {
        let mut colors = Self::new();
        for partition in graph.partitions() {
            colors.assign_random(partition, rng);
        }
        debug!(partitions = colors.len(), "color map generated");
        colors
    }

    /// Returns the color of `partition`, drawing one only if the partition
    /// has none yet.
    pub fn assign_random<R: Rng + ?Sized>(&mut self, partition: PartitionId, rng: &mut R) -> &Color {
        if !self.colors.contains_key(&partition) {
            self.order.push(partition);
        }
        self.colors
            .entry(partition)
            .or_insert_with(|| Color::random(rng))
    }

    /// Returns `false` and keeps the existing color if `partition` already
    /// has one.
    pub fn insert(&mut self, partition: PartitionId, color: Color) -> bool {
        if self.colors.contains_key(&partition) {
            return false;
        }
        self.colors.insert(partition, color);
        self.order.push(partition);
        true
    }

    pub fn get(&self, partition: PartitionId) -> Option<&Color> {
        self.colors.get(&partition)
    }

    pub fn iter(&self) -> impl Iterator<Item = (PartitionId, &Color)> + '_ {
        self.order.iter().map(|p| (*p, &self.colors[p]))
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Reads a `<partition>\t<color>` file, e.g. one written by
    /// [`Self::store`]. Color tokens are not validated.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| VisualizerError::io(path, e))?;
        let colors = Self::read_from(BufReader::new(file), path)?;
        info!(path = %path.display(), partitions = colors.len(), "color map loaded");
        Ok(colors)
    }

    /// `source` is only used to label parse errors.
    pub fn read_from(reader: impl BufRead, source: &Path) -> Result<Self> {
        let mut colors = Self::new();
        for (idx, line) in reader.lines().enumerate() {
            let line_no = idx + 1;
            let line = line.map_err(|e| VisualizerError::io(source, e))?;
            let line = line.trim_end_matches('\r');
            if line.trim().is_empty() {
                continue;
            }

            let Some((partition, color)) = line.split_once('\t') else {
                return Err(VisualizerError::parse(
                    source,
                    line_no,
                    "expected `<partition>\\t<color>`",
                ));
            };
            let partition: PartitionId = partition.trim().parse().map_err(|_| {
                VisualizerError::parse(source, line_no, format!("invalid partition id `{partition}`"))
            })?;
            let color: Color = color
                .parse()
                .map_err(|reason| VisualizerError::parse(source, line_no, reason))?;

            if !colors.insert(partition, color) {
                debug!(partition, line = line_no, "duplicate color entry ignored");
            }
        }
        Ok(colors)
    }

    /// Persists the mapping so a later run can reuse identical colors.
    pub fn store(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|e| VisualizerError::io(path, e))?;
        let mut writer = BufWriter::new(file);
        self.write_to(&mut writer)
            .and_then(|_| writer.flush())
            .map_err(|e| VisualizerError::io(path, e))?;
        info!(path = %path.display(), partitions = self.len(), "color map stored");
        Ok(())
    }

    pub fn write_to(&self, mut out: impl Write) -> std::io::Result<()> {
        for (partition, color) in self.iter() {
            writeln!(out, "{partition}\t{color}")?;
        }
        Ok(())
    }
}
