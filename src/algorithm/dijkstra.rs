use log::{debug, trace};

use crate::algorithm::relax::relax_slots;
use crate::algorithm::ShortestPathResult;
use crate::data_structures::{HeapifyStrategy, MinHeap};
use crate::graph::{DirectedGraph, Distance, Graph, Label, Weight};
use crate::{Error, Result};

/// Dijkstra's algorithm that restores heap order with a full heapify after each
/// relaxation round instead of a decrease-key operation
#[derive(Debug, Default, Clone, Copy)]
pub struct HeapifyDijkstra {
    strategy: HeapifyStrategy,
}

impl HeapifyDijkstra {
    /// Creates a new instance using the default heapify strategy
    pub fn new() -> Self {
        HeapifyDijkstra::default()
    }

    /// Set the heapify strategy used after each relaxation round
    pub fn with_strategy(mut self, strategy: HeapifyStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn strategy(&self) -> HeapifyStrategy {
        self.strategy
    }

    pub fn name(&self) -> &'static str {
        "HeapifyDijkstra"
    }

    /// Computes distances from `source` to every vertex.
    ///
    /// Distances and predecessors are written into the graph's own vertex records
    /// (any previous values are reset first) and also copied into the returned result.
    pub fn compute_shortest_paths<L, W>(
        &self,
        graph: &mut DirectedGraph<L, W>,
        source: L,
    ) -> Result<ShortestPathResult<L, W>>
    where
        L: Label,
        W: Weight,
    {
        let source_slot = graph.slot(source).ok_or(Error::SourceNotFound)?;

        graph.reset_distances();
        graph.vertex_at_mut(source_slot).dist = Distance::Finite(W::zero());

        let mut unvisited = MinHeap::with_strategy(self.strategy);
        for slot in 0..graph.vertex_count() {
            unvisited.insert(slot, &*graph);
        }
        debug!(
            "{}: {} vertices, {} edges, source {:?}, {:?}",
            self.name(),
            graph.vertex_count(),
            graph.edge_count(),
            source,
            self.strategy
        );

        let mut rounds = 0usize;
        while !unvisited.is_empty() {
            let current = unvisited.extract_min(&*graph)?;
            trace!(
                "Finalized {:?} at {:?}",
                graph.vertex_at(current).val,
                graph.vertex_at(current).dist
            );

            let adjacents = graph.adjacents_at(current).to_vec();
            for (next, weight) in adjacents {
                relax_slots(graph, current, next, weight);
            }
            unvisited.heapify(&*graph);
            rounds += 1;
        }
        debug!("{}: finished after {} rounds", self.name(), rounds);

        let labels = graph.vertices().map(|v| v.val).collect();
        let distances = graph.vertices().map(|v| v.dist).collect();
        let predecessors = graph.vertices().map(|v| v.prev).collect();
        Ok(ShortestPathResult::new(source, labels, distances, predecessors))
    }
}
