use std::env;
use std::time::{Duration, Instant};

use log::info;
use ordered_float::OrderedFloat;
use serde::Serialize;
use trailblazer::algorithm::{ManhattanHeuristic, PathFinder, SpanningTreeAlgorithm};
use trailblazer::graph::generators::{grid_graph, path_cost, GridConfig};
use trailblazer::graph::{Graph, UndirectedGraph};
use trailblazer::{
    BinaryHeapQueue, BreadthFirstSearch, BucketQueue, CostSearch, DepthFirstSearch, Kruskal,
    KruskalClusters, LinkedQueue, PrimQueue, PrimScan, PriorityQueue, SortedArrayQueue,
    UnsortedArrayQueue,
};

type Cost = OrderedFloat<f64>;
type Maze = UndirectedGraph<Cost>;

/// Lower bound of the random maze edge weights
const MIN_STEP_COST: f64 = 1.0;

/// Command line configuration: `benchmark [rows] [cols] [seed] [--json]`
#[derive(Debug, Clone)]
struct BenchConfig {
    rows: usize,
    cols: usize,
    seed: u64,
    json: bool,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            rows: 40,
            cols: 40,
            seed: 106,
            json: false,
        }
    }
}

impl BenchConfig {
    fn from_args() -> Self {
        let mut config = Self::default();
        let mut positional = Vec::new();
        for arg in env::args().skip(1) {
            if arg == "--json" {
                config.json = true;
            } else {
                positional.push(arg);
            }
        }
        if let Some(rows) = positional.first().and_then(|s| s.parse().ok()) {
            config.rows = rows;
        }
        if let Some(cols) = positional.get(1).and_then(|s| s.parse().ok()) {
            config.cols = cols;
        }
        if let Some(seed) = positional.get(2).and_then(|s| s.parse().ok()) {
            config.seed = seed;
        }
        config
    }
}

/// Timings and outcomes for one queue variant
#[derive(Debug, Serialize)]
struct VariantReport {
    queue: String,
    dijkstra_ms: f64,
    a_star_ms: f64,
    kruskal_ms: f64,
    prim_ms: f64,
    path_cost: f64,
    path_len: usize,
    mst_cost: f64,
}

/// Full benchmark output
#[derive(Debug, Serialize)]
struct Report {
    rows: usize,
    cols: usize,
    seed: u64,
    vertices: usize,
    edges: usize,
    bfs_hops: usize,
    dfs_len: usize,
    prim_scan_cost: f64,
    variants: Vec<VariantReport>,
}

fn millis(duration: Duration) -> f64 {
    duration.as_secs_f64() * 1000.0
}

fn timed<T>(run: impl FnOnce() -> T) -> (T, Duration) {
    let start = Instant::now();
    let value = run();
    (value, start.elapsed())
}

fn run_variant<Q>(graph: &mut Maze, config: &BenchConfig) -> trailblazer::Result<VariantReport>
where
    Q: PriorityQueue<usize, Cost>,
{
    let start = 0;
    let end = config.rows * config.cols - 1;
    let queue_name = Q::default().name().to_string();
    info!("Running algorithms with the {} queue", queue_name);

    let dijkstra = CostSearch::<Q>::dijkstra();
    let (path, dijkstra_time) =
        timed(|| PathFinder::<Cost, Maze>::find_path(&dijkstra, &mut *graph, start, end));
    let path = path?;

    // Maze edges cost at least MIN_STEP_COST, so the scaled distance is admissible
    let a_star = CostSearch::<Q, _>::a_star(
        ManhattanHeuristic::new(config.cols).with_step_cost(MIN_STEP_COST),
    );
    let (a_star_path, a_star_time) =
        timed(|| PathFinder::<Cost, Maze>::find_path(&a_star, &mut *graph, start, end));
    a_star_path?;

    let kruskal = Kruskal::<Q>::new();
    let (tree, kruskal_time) =
        timed(|| SpanningTreeAlgorithm::<Cost, Maze>::spanning_tree(&kruskal, &mut *graph));
    let tree = tree?;

    let prim = PrimQueue::<Q>::new();
    let (prim_tree, prim_time) =
        timed(|| SpanningTreeAlgorithm::<Cost, Maze>::spanning_tree(&prim, &mut *graph));
    prim_tree?;

    Ok(VariantReport {
        queue: queue_name,
        dijkstra_ms: millis(dijkstra_time),
        a_star_ms: millis(a_star_time),
        kruskal_ms: millis(kruskal_time),
        prim_ms: millis(prim_time),
        path_cost: path_cost(&*graph, &path).map_or(f64::INFINITY, |c: Cost| c.0),
        path_len: path.len(),
        mst_cost: tree.total_cost.0,
    })
}

fn run(config: &BenchConfig) -> trailblazer::Result<Report> {
    let grid = GridConfig::new(config.rows, config.cols)
        .with_random_weights(MIN_STEP_COST, 10.0)
        .with_seed(config.seed);
    let mut graph = grid_graph(&grid)?;
    let end = grid.vertex_at(config.rows - 1, config.cols - 1);

    let bfs = PathFinder::<Cost, Maze>::find_path(&BreadthFirstSearch::new(), &mut graph, 0, end)?;
    let dfs = PathFinder::<Cost, Maze>::find_path(&DepthFirstSearch::new(), &mut graph, 0, end)?;
    let prim_scan = SpanningTreeAlgorithm::<Cost, Maze>::spanning_tree(&PrimScan::new(), &mut graph)?;
    let clusters = SpanningTreeAlgorithm::<Cost, Maze>::spanning_tree(
        &KruskalClusters::<BinaryHeapQueue<usize, Cost>>::new(),
        &mut graph,
    )?;
    info!("Cluster-scan Kruskal total cost {}", clusters.total_cost);

    let variants = vec![
        run_variant::<UnsortedArrayQueue<usize, Cost>>(&mut graph, config)?,
        run_variant::<SortedArrayQueue<usize, Cost>>(&mut graph, config)?,
        run_variant::<BucketQueue<usize, Cost>>(&mut graph, config)?,
        run_variant::<LinkedQueue<usize, Cost>>(&mut graph, config)?,
        run_variant::<BinaryHeapQueue<usize, Cost>>(&mut graph, config)?,
    ];

    Ok(Report {
        rows: config.rows,
        cols: config.cols,
        seed: config.seed,
        vertices: graph.vertex_count(),
        edges: graph.edge_count(),
        bfs_hops: bfs.len().saturating_sub(1),
        dfs_len: dfs.len(),
        prim_scan_cost: prim_scan.total_cost.0,
        variants,
    })
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    env_logger::init();

    let mut config = BenchConfig::from_args();
    config.rows = config.rows.max(1);
    config.cols = config.cols.max(1);

    let report = run(&config)?;

    if config.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("=====================================================");
    println!("Benchmark: priority queue variants on a {}x{} maze", report.rows, report.cols);
    println!("Vertices: {}, edges: {}, seed: {}", report.vertices, report.edges, report.seed);
    println!("BFS hops: {}, DFS path length: {}", report.bfs_hops, report.dfs_len);
    println!("Prim (scan) MST cost: {:.3}", report.prim_scan_cost);
    println!("=====================================================");
    println!(
        "{:<20} | {:<12} | {:<12} | {:<12} | {:<12} | {:<10} | {:<10}",
        "Queue", "Dijkstra ms", "A* ms", "Kruskal ms", "Prim ms", "Path cost", "MST cost"
    );
    println!("-----------------------------------------------------");
    for variant in &report.variants {
        println!(
            "{:<20} | {:<12.3} | {:<12.3} | {:<12.3} | {:<12.3} | {:<10.3} | {:<10.3}",
            variant.queue,
            variant.dijkstra_ms,
            variant.a_star_ms,
            variant.kruskal_ms,
            variant.prim_ms,
            variant.path_cost,
            variant.mst_cost
        );
    }

    Ok(())
}
