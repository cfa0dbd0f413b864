use crate::selection::Point;
use rand::prelude::*;

/// Generates `edge_count` random directed edges over labels `1..=n` with weights in `1..=max_weight`.
///
/// Nothing guarantees that every label appears or that anything is reachable;
/// use [`generate_spanning_network`] when the graph must cover all `n` nodes.
/// The same `(u, v)` pair may be drawn more than once.
///
/// # Panics
///
/// Panics if `n` or `max_weight` is zero.
pub fn generate_random_network<R: Rng>(
    rng: &mut R,
    n: u32,
    edge_count: usize,
    max_weight: u32,
) -> Vec<(u32, u32, u32)> {
    assert!(n > 0, "n must be positive");
    assert!(max_weight > 0, "max_weight must be positive");

    (0..edge_count)
        .map(|_| {
            let u = rng.gen_range(1..=n);
            let v = rng.gen_range(1..=n);
            (u, v, rng.gen_range(1..=max_weight))
        })
        .collect()
}

/// Generates a network over labels `1..=n` in which every node is reachable from `source`,
/// plus `extra_edges` random edges on top of the spanning arborescence.
///
/// The extra edges can repeat an arborescence pair with a different weight. A graph
/// built from the list keeps the last occurrence, so weights may change but every
/// node stays reachable. Edges are shuffled, so which occurrence is last is random.
///
/// # Panics
///
/// Panics if `source` is outside `1..=n` or `max_weight` is zero.
pub fn generate_spanning_network<R: Rng>(
    rng: &mut R,
    n: u32,
    source: u32,
    extra_edges: usize,
    max_weight: u32,
) -> Vec<(u32, u32, u32)> {
    assert!((1..=n).contains(&source), "source must be within 1..=n");
    assert!(max_weight > 0, "max_weight must be positive");

    // Random visiting order starting at the source; each node hangs off an earlier one
    let mut order: Vec<u32> = (1..=n).filter(|&v| v != source).collect();
    order.shuffle(rng);
    order.insert(0, source);

    let mut edges = Vec::with_capacity(n as usize - 1 + extra_edges);
    for i in 1..order.len() {
        let parent = order[rng.gen_range(0..i)];
        edges.push((parent, order[i], rng.gen_range(1..=max_weight)));
    }
    edges.extend(generate_random_network(rng, n, extra_edges, max_weight));
    edges.shuffle(rng);
    edges
}

/// Generates `count` points with both coordinates strictly inside `(-bound, bound)`
///
/// # Panics
///
/// Panics if `bound` is not positive.
pub fn generate_points<R: Rng>(rng: &mut R, count: usize, bound: i32) -> Vec<Point> {
    assert!(bound > 0, "bound must be positive");
    (0..count)
        .map(|_| [rng.gen_range(-bound + 1..bound), rng.gen_range(-bound + 1..bound)])
        .collect()
}
