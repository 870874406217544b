use anyhow::Context;
use clap::Parser;
use partviz::config::{
    ColorMapMode, DEFAULT_EDGE_OFFSET, DEFAULT_PARTITION_TOKEN_INDEX, DEFAULT_SEPARATOR,
    GraphFormat, RunConfig,
};
use partviz::stream::Separator;
use partviz::{RunOutcome, run};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "partviz")]
#[command(version)]
#[command(about = "Write colored .dot files and edge-cut reports for partitioned graphs", long_about = None)]
struct Cli {
    /// Path to input graph (`<id><sep><partition><sep><nbr>...` per line)
    #[arg(short, long)]
    input_graph: PathBuf,

    /// Value separator used in input graph; regex syntax is allowed
    #[arg(short, long, default_value = DEFAULT_SEPARATOR)]
    separator: String,

    /// Token index in input line where the edge list starts
    #[arg(long, default_value_t = DEFAULT_EDGE_OFFSET)]
    edge_offset: usize,

    /// Token index of the partition id in an input line
    #[arg(long, default_value_t = DEFAULT_PARTITION_TOKEN_INDEX)]
    partition_token_index: usize,

    /// Vertex to partition file overriding the partition ids of the input
    #[arg(short, long)]
    partitioned_graph: Option<PathBuf>,

    /// Reuse a color map written by an earlier run
    #[arg(short, long)]
    color_map: Option<PathBuf>,

    /// Only calculate the edge cut of the input graph
    #[arg(short, long)]
    edge_cut: bool,

    /// Path of the .dot output (default: `<input-graph>.dot`)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .with(tracing_subscriber::EnvFilter::new(&cli.log_level))
        .init();

    let config = RunConfig {
        input: cli.input_graph,
        format: GraphFormat {
            separator: Separator::new(&cli.separator)?,
            edge_offset: cli.edge_offset,
            partition_token_index: cli.partition_token_index,
        },
        partition_file: cli.partitioned_graph,
        color_map: cli.color_map.map_or(ColorMapMode::Generate, ColorMapMode::Load),
        edge_cut_only: cli.edge_cut,
        output: cli.output,
    };

    let outcome = run(&config)
        .with_context(|| format!("failed to process {}", config.input.display()))?;

    match outcome {
        RunOutcome::EdgeCut(report) => {
            for (src, dst, count) in report.pairs() {
                println!("{src} to {dst} : {count}");
            }
            println!("Edges: {}", report.edge_count);
            println!("Edge cut: {}", report.cut_count());
            println!("Edge cut ratio: {:.3}", report.edge_cut_ratio());
        }
        RunOutcome::Rendered {
            dot_path,
            color_map_path,
        } => {
            if let Some(path) = color_map_path {
                println!("Color map: {}", path.display());
            }
            println!("Dot: {}", dot_path.display());
        }
    }

    Ok(())
}
