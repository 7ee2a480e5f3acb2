//! Generates a small-world graph (or loads an edge list) and prints its structural statistics.
//!
//! ```text
//! cargo run --example small_world                      # ring lattice on 1000 vertices, rewired with p = 0.01
//! cargo run --example small_world -- 2000 5 0.1 42     # n, k, p, seed
//! cargo run --example small_world -- edges.csv         # edge list with `from, to` header
//! RUST_LOG=graphstats=debug cargo run --example small_world
//! ```

use std::{env, error::Error, path::Path};

use graphstats::{algo::*, gens::*, io::*, prelude::*};
use rand::SeedableRng;
use rand_pcg::Pcg64Mcg;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_N: Node = 1000;
const DEFAULT_K: NumVertices = 5;
const DEFAULT_P: f64 = 0.01;
const DEFAULT_SEED: u64 = 1;

fn build_graph(args: &[String], rng: &mut Pcg64Mcg) -> Result<Graph, Box<dyn Error>> {
    if let Some(path) = args.first().filter(|a| Path::new(a).is_file()) {
        info!(%path, "loading edge list");
        return Ok(CsvReader::new().header(true).try_read_graph_file(path)?);
    }

    let n = args.first().map_or(Ok(DEFAULT_N), |a| a.parse())?;
    let k = args.get(1).map_or(Ok(DEFAULT_K), |a| a.parse())?;
    let p = args.get(2).map_or(Ok(DEFAULT_P), |a| a.parse())?;

    info!(n, k, p, "generating small-world graph");
    let mut graph: Graph = Graph::from_vertices(0..n);
    graph.make_regular(k)?;
    let outcome = graph.rewire(rng, p)?;
    info!(rewired = outcome.rewired, collapsed = outcome.collapsed, "rewired");

    Ok(graph)
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    let seed = args
        .get(3)
        .map_or(Ok(DEFAULT_SEED), |a| a.parse())?;
    let rng = &mut Pcg64Mcg::seed_from_u64(seed);

    let graph = build_graph(&args, rng)?;
    println!("Number of vertices = {}", graph.number_of_vertices());
    println!("Number of edges = {}", graph.number_of_edges());

    let distribution = graph.degree_distribution();
    let nonzero: Vec<_> = distribution
        .iter()
        .enumerate()
        .filter(|&(_, &count)| count > 0)
        .map(|(d, count)| format!("{d}:{count}"))
        .collect();
    println!("Degree distribution = {}", nonzero.join(" "));

    let paths = graph.average_shortest_path_length();
    match paths.average() {
        Some(avg) => println!(
            "Average shortest path length = {avg:.4} ({} unreachable pairs)",
            paths.unreachable_pairs
        ),
        None => println!("Average shortest path length = undefined"),
    }

    println!("Number of triangles = {}", graph.triangle_count());
    println!("Number of 3-star centers = {}", graph.k_star_count(3));
    println!("Number of 3-stars = {}", graph.k_star_subgraph_count(3));
    println!("Number of 4-cliques = {}", graph.four_clique_count());
    println!("Number of near 4-cliques = {}", graph.diamond_count());

    let epsilon = 1.0;
    let max_degree = graph.max_degree().max(1);
    println!(
        "Noisy number of 3-stars (epsilon = {epsilon}) = {:.1}",
        graph.noisy_k_star_count(rng, 3, epsilon)?
    );
    println!(
        "Local private number of 3-stars (epsilon = {epsilon}, max degree = {max_degree}) = {:.1}",
        graph.private_k_star_count(rng, 3, epsilon, max_degree)?
    );

    Ok(())
}
