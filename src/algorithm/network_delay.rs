use log::{debug, warn};
use num_traits::ToPrimitive;
use serde::Serialize;

use crate::algorithm::dijkstra::HeapifyDijkstra;
use crate::data_structures::HeapifyStrategy;
use crate::graph::{DirectedGraph, Distance, Graph, Label, Weight};
use crate::{Error, Result};

/// How long a signal takes to reach every node, or why it never does
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum DelayOutcome<W> {
    /// Every node received the signal; `time` is the largest shortest-path distance
    AllReached { time: W },
    /// The edge list does not define exactly the expected number of nodes
    VertexCountMismatch { expected: usize, found: usize },
    /// Some nodes cannot be reached from the source
    Unreachable { unreached: usize },
}

impl<W> DelayOutcome<W>
where
    W: Weight + ToPrimitive,
{
    pub fn time(&self) -> Option<W> {
        match *self {
            DelayOutcome::AllReached { time } => Some(time),
            _ => None,
        }
    }

    /// Integer contract: the delay, or `-1` when not every node is reached.
    /// A delay too large for `i64` saturates to `i64::MAX`.
    pub fn sentinel(&self) -> i64 {
        match self.time() {
            Some(time) => time.to_i64().unwrap_or(i64::MAX),
            None => -1,
        }
    }
}

/// Network delay time solver
#[derive(Debug, Default, Clone, Copy)]
pub struct NetworkDelay {
    strategy: HeapifyStrategy,
}

impl NetworkDelay {
    /// Create a new solver with default settings
    pub fn new() -> Self {
        NetworkDelay::default()
    }

    /// Set the heapify strategy used by the underlying Dijkstra loop
    pub fn with_heapify_strategy(mut self, strategy: HeapifyStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Sends a signal from `source` over the directed `edges` and reports how long
    /// it takes to reach all `n` nodes.
    ///
    /// Fails only on a negative weight; every "signal never arrives" case is an outcome.
    pub fn solve<L, W, I>(&self, edges: I, n: usize, source: L) -> Result<DelayOutcome<W>>
    where
        L: Label,
        W: Weight,
        I: IntoIterator<Item = (L, L, W)>,
    {
        let edges: Vec<(L, L, W)> = edges.into_iter().collect();
        if let Some((from, to, weight)) = edges.iter().find(|(_, _, w)| *w < W::zero()) {
            return Err(Error::NegativeWeight(format!(
                "{:?} on edge {:?} -> {:?}",
                weight, from, to
            )));
        }

        let mut graph = DirectedGraph::from_edges(edges);
        if graph.vertex_count() != n {
            debug!(
                "Edge list defines {} nodes, expected {}",
                graph.vertex_count(),
                n
            );
            return Ok(DelayOutcome::VertexCountMismatch {
                expected: n,
                found: graph.vertex_count(),
            });
        }

        let dijkstra = HeapifyDijkstra::new().with_strategy(self.strategy);
        let result = match dijkstra.compute_shortest_paths(&mut graph, source) {
            Ok(result) => result,
            Err(Error::SourceNotFound) => {
                debug!("Source {:?} is not one of the {} nodes", source, n);
                return Ok(DelayOutcome::Unreachable { unreached: n });
            }
            Err(e) => return Err(e),
        };

        Ok(match result.eccentricity() {
            Distance::Finite(time) => DelayOutcome::AllReached { time },
            Distance::Infinite => DelayOutcome::Unreachable {
                unreached: result.unreached_count(),
            },
        })
    }
}

/// Time for a signal sent from `k` to reach all `n` nodes, or `-1` if some node never receives it
///
/// `times` holds directed `(source, target, travel time)` edges.
pub fn network_delay_time(times: &[(u32, u32, u32)], n: usize, k: u32) -> i64 {
    match NetworkDelay::new().solve(times.iter().copied(), n, k) {
        Ok(outcome) => outcome.sentinel(),
        Err(e) => {
            warn!("network_delay_time failed: {}", e);
            -1
        }
    }
}
