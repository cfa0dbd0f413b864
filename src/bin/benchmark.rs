use std::time::{Duration, Instant};
use network_delay::data_structures::HeapifyStrategy;
use network_delay::graph::generators::generate_spanning_network;
use network_delay::NetworkDelay;
use rand::rngs::StdRng;
use rand::SeedableRng;

// Function to benchmark one heapify strategy on an edge list
fn benchmark_strategy(
    strategy: HeapifyStrategy,
    edges: &[(u32, u32, u32)],
    n: usize,
    source: u32,
) -> (Duration, i64) {
    let solver = NetworkDelay::new().with_heapify_strategy(strategy);

    let start = Instant::now();
    let answer = match solver.solve(edges.iter().copied(), n, source) {
        Ok(outcome) => outcome.sentinel(),
        Err(e) => {
            eprintln!("  - {:?} failed: {}", strategy, e);
            -1
        }
    };
    (start.elapsed(), answer)
}

fn main() {
    env_logger::init();

    // (nodes, extra edges) pairs, up to the problem bounds and beyond
    let graph_sizes = vec![(100, 1_000), (100, 6_000), (1_000, 10_000), (3_000, 30_000)];
    let mut rng = StdRng::seed_from_u64(42);

    println!("=====================================================");
    println!("Benchmark: sift-up pass vs bottom-up heapify");
    println!("=====================================================");

    let mut results = Vec::new();
    for &(n, extra) in &graph_sizes {
        let edges = generate_spanning_network(&mut rng, n, 1, extra, 100);
        println!("\nNetwork with {} nodes and {} edges", n, edges.len());

        let (sift_up_time, sift_up_answer) =
            benchmark_strategy(HeapifyStrategy::SiftUpPass, &edges, n as usize, 1);
        let (bottom_up_time, bottom_up_answer) =
            benchmark_strategy(HeapifyStrategy::BottomUp, &edges, n as usize, 1);

        if sift_up_answer != bottom_up_answer {
            eprintln!(
                "  - Answers differ: {} vs {}",
                sift_up_answer, bottom_up_answer
            );
        }
        println!("  - Delay {} (sift-up {:?}, bottom-up {:?})", sift_up_answer, sift_up_time, bottom_up_time);
        results.push((n, edges.len(), sift_up_time, bottom_up_time));
    }

    // Print summary table
    println!("\n=====================================================");
    println!("Summary of Results");
    println!("=====================================================");
    println!("{:<8} | {:<8} | {:<14} | {:<14} | {:<8}", "Nodes", "Edges", "SiftUp (ms)", "BottomUp (ms)", "Speedup");
    println!("-----------------------------------------------------");
    for (n, m, sift_up_time, bottom_up_time) in &results {
        let speedup = sift_up_time.as_secs_f64() / bottom_up_time.as_secs_f64().max(f64::EPSILON);
        println!(
            "{:<8} | {:<8} | {:<14.2} | {:<14.2} | {:<8.2}",
            n,
            m,
            sift_up_time.as_secs_f64() * 1000.0,
            bottom_up_time.as_secs_f64() * 1000.0,
            speedup
        );
    }
}
