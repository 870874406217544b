use crate::stream::Separator;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

pub const DEFAULT_SEPARATOR: &str = "\t";
pub const DEFAULT_EDGE_OFFSET: usize = 2;
pub const DEFAULT_PARTITION_TOKEN_INDEX: usize = 1;

/// Layout of one input line: `<id><sep><partition><sep><nbr>...`
#[derive(Clone, Debug)]
pub struct GraphFormat {
    pub separator: Separator,
    /// Index of the first neighbor token.
    pub edge_offset: usize,
    pub partition_token_index: usize,
}

impl Default for GraphFormat {
    fn default() -> Self {
        Self {
            separator: Separator::tab(),
            edge_offset: DEFAULT_EDGE_OFFSET,
            partition_token_index: DEFAULT_PARTITION_TOKEN_INDEX,
        }
    }
}

/// Where partition colors come from.
#[derive(Clone, Debug, Default)]
pub enum ColorMapMode {
    /// Draw fresh colors and persist them, by default next to the input
    /// graph as `<input>_cm`.
    #[default]
    Generate,
    GenerateInto(PathBuf),
    /// Reuse a color map written by an earlier run.
    Load(PathBuf),
}

/// Everything a single run needs from its caller.
#[derive(Clone, Debug)]
pub struct RunConfig {
    pub input: PathBuf,
    pub format: GraphFormat,
    /// Vertex to partition file produced by an external partitioner. When
    /// set, it overrides the partition ids read from `input`.
    pub partition_file: Option<PathBuf>,
    pub color_map: ColorMapMode,
    pub edge_cut_only: bool,
    pub output: Option<PathBuf>,
}

impl RunConfig {
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            format: GraphFormat::default(),
            partition_file: None,
            color_map: ColorMapMode::default(),
            edge_cut_only: false,
            output: None,
        }
    }

    /// `<input>.dot`, or `<input>_matched.dot` when a partition file is
    /// applied, unless an explicit output was given.
    pub fn dot_path(&self) -> PathBuf {
        match (&self.output, &self.partition_file) {
            (Some(path), _) => path.clone(),
            (None, Some(_)) => with_suffix(&self.input, "_matched.dot"),
            (None, None) => with_suffix(&self.input, ".dot"),
        }
    }

    /// Target of a freshly generated color map; `None` when colors are loaded.
    pub fn color_map_output(&self) -> Option<PathBuf> {
        match &self.color_map {
            ColorMapMode::Generate => Some(with_suffix(&self.input, "_cm")),
            ColorMapMode::GenerateInto(path) => Some(path.clone()),
            ColorMapMode::Load(_) => None,
        }
    }
}

fn with_suffix(path: &Path, suffix: &str) -> PathBuf {
    let mut name: OsString = path.as_os_str().to_owned();
    name.push(suffix);
    PathBuf::from(name)
}
