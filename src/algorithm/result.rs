use std::collections::{HashMap, HashSet};

use crate::graph::{Distance, Label, Weight};

/// Result of a shortest path computation, one entry per vertex in graph arena order
#[derive(Debug, Clone)]
pub struct ShortestPathResult<L, W>
where
    L: Label,
    W: Weight,
{
    /// Source vertex label
    pub source: L,

    /// Vertex labels
    pub labels: Vec<L>,

    /// Distance from the source to each vertex
    pub distances: Vec<Distance<W>>,

    /// Predecessor of each vertex in the shortest path tree
    pub predecessors: Vec<Option<L>>,

    index: HashMap<L, usize>,
}

impl<L, W> ShortestPathResult<L, W>
where
    L: Label,
    W: Weight,
{
    pub(crate) fn new(
        source: L,
        labels: Vec<L>,
        distances: Vec<Distance<W>>,
        predecessors: Vec<Option<L>>,
    ) -> Self {
        let index = labels.iter().enumerate().map(|(i, &label)| (label, i)).collect();
        ShortestPathResult {
            source,
            labels,
            distances,
            predecessors,
            index,
        }
    }

    /// Distance to a vertex, `None` if the label is not in the graph
    pub fn distance(&self, target: L) -> Option<Distance<W>> {
        self.index.get(&target).map(|&i| self.distances[i])
    }

    pub fn predecessor(&self, target: L) -> Option<L> {
        self.index.get(&target).and_then(|&i| self.predecessors[i])
    }

    /// Number of vertices left at an infinite distance
    pub fn unreached_count(&self) -> usize {
        self.distances.iter().filter(|d| !d.is_finite()).count()
    }

    /// Largest distance from the source; `Infinite` as soon as one vertex is unreached.
    /// An empty result yields zero.
    pub fn eccentricity(&self) -> Distance<W> {
        self.distances
            .iter()
            .copied()
            .max()
            .unwrap_or(Distance::Finite(W::zero()))
    }

    /// Rebuilds the path from the source to `target` by following predecessors
    pub fn path_to(&self, target: L) -> Option<Vec<L>> {
        if !self.distance(target)?.is_finite() {
            return None;
        }

        let mut path = vec![target];
        let mut visited = HashSet::new();
        let mut current = target;

        while current != self.source {
            if !visited.insert(current) {
                return None;
            }
            current = self.predecessor(current)?;
            path.push(current);
        }

        path.reverse();
        Some(path)
    }
}
