use crate::color::ColorAssignment;
use crate::config::{ColorMapMode, RunConfig};
use crate::dot::write_dot;
use crate::error::Result;
use crate::graph::Graph;
use crate::result::EdgeCutReport;
use rand::Rng;
use std::path::PathBuf;
use tracing::info;

/// What a completed run produced.
#[derive(Debug)]
pub enum RunOutcome {
    Rendered {
        dot_path: PathBuf,
        /// Set when colors were freshly generated and persisted.
        color_map_path: Option<PathBuf>,
    },
    EdgeCut(EdgeCutReport),
}

/// Runs the pipeline with colors drawn from the thread-local generator.
pub fn run(config: &RunConfig) -> Result<RunOutcome> {
    run_with_rng(config, &mut rand::rng())
}

/// Loads the graph, then either reports its edge cut or writes colored DOT
/// output. Every input is read before the first output file is created.
pub fn run_with_rng<R: Rng + ?Sized>(config: &RunConfig, rng: &mut R) -> Result<RunOutcome> {
    let graph = load_graph(config)?;

    if config.edge_cut_only {
        let report = EdgeCutReport::compute(&graph)?;
        info!(
            edges = report.edge_count,
            cut = report.cut_count(),
            ratio = report.edge_cut_ratio(),
            "edge cut computed"
        );
        return Ok(RunOutcome::EdgeCut(report));
    }

    let colors = match &config.color_map {
        ColorMapMode::Load(path) => ColorAssignment::load(path)?,
        ColorMapMode::Generate | ColorMapMode::GenerateInto(_) => {
            ColorAssignment::generate(&graph, rng)
        }
    };

    let color_map_path = config.color_map_output();
    if let Some(path) = &color_map_path {
        colors.store(path)?;
    }

    let dot_path = config.dot_path();
    write_dot(&dot_path, &graph, &colors)?;

    Ok(RunOutcome::Rendered {
        dot_path,
        color_map_path,
    })
}

fn load_graph(config: &RunConfig) -> Result<Graph> {
    let graph = Graph::load(&config.input, &config.format)?;
    match &config.partition_file {
        Some(path) => graph.with_partitions(path, &config.format.separator),
        None => Ok(graph),
    }
}
