use clap::{Parser, ValueEnum};
use depthpaths::{
    graph::{AdjacencyGraph, Graph},
    report::PathReport,
    search::{PathFinder, Rescan, Resume},
};
use std::{error::Error, path::PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ScanMode {
    /// Keep one resume position per vertex
    Resume,
    /// Rescan each adjacency list from its start on every lookup
    Rescan,
}

/// Depth-first paths from a source vertex in an undirected graph
#[derive(Parser, Debug)]
#[command(name = "depthpaths")]
#[command(about = "Finds depth-first paths from a source vertex to every vertex of an undirected graph", long_about = None)]
struct Args {
    /// Path to the graph file (vertex count, edge count, then one `v w` pair per edge)
    #[arg(short, long, conflicts_with = "random_vertices", required_unless_present = "random_vertices")]
    graph: Option<PathBuf>,

    /// Generate a random graph with this many vertices instead of loading one
    #[arg(long, requires = "random_edges")]
    random_vertices: Option<usize>,

    /// Number of edges of the random graph
    #[arg(long, requires = "random_vertices")]
    random_edges: Option<usize>,

    /// Seed for the random graph
    #[arg(long, requires = "random_vertices")]
    seed: Option<u64>,

    /// Source vertex
    #[arg(short, long, default_value_t = 0)]
    source: usize,

    /// How the traversal looks for the next unmarked neighbor
    #[arg(long, value_enum, default_value_t = ScanMode::Resume)]
    scan: ScanMode,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,

    /// Verbosity level (-v, -vv, -vvv), overridden by RUST_LOG
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_graph(args: &Args) -> Result<AdjacencyGraph, Box<dyn Error>> {
    match (&args.graph, args.random_vertices, args.random_edges) {
        (Some(path), _, _) => {
            info!(path = %path.display(), "loading graph");
            Ok(AdjacencyGraph::load_from_path(path)?)
        }
        (None, Some(vertices), Some(edges)) => {
            AdjacencyGraph::check_vertex_count(vertices)?;
            if vertices == 0 && edges > 0 {
                return Err(format!("cannot place {edges} edges on a graph without vertices").into());
            }
            Ok(match args.seed {
                Some(seed) => AdjacencyGraph::random_seeded(vertices, edges, seed),
                None => AdjacencyGraph::random(vertices, edges),
            })
        }
        _ => Err("either --graph or --random-vertices with --random-edges is required".into()),
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    init_logging(args.verbose);

    let graph = load_graph(&args)?;
    let vertex_count = graph.vertex_count();
    if args.source >= vertex_count {
        return Err(format!(
            "source vertex {} is out of range for a graph with {vertex_count} vertices",
            args.source
        )
        .into());
    }

    let paths = match args.scan {
        ScanMode::Resume => PathFinder::with_scan::<Resume>(&graph, args.source),
        ScanMode::Rescan => PathFinder::with_scan::<Rescan>(&graph, args.source),
    };
    info!(
        source = args.source,
        reached = paths.reachable_count(),
        vertex_count,
        stats = %paths.stats(),
        "paths computed"
    );

    let report = PathReport::new(&graph, &paths);
    if args.json {
        println!("{}", report.to_json()?);
    } else {
        print!("{report}");
    }

    Ok(())
}
