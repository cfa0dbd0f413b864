use std::fmt::Debug;
use std::hash::Hash;
use num_traits::{CheckedAdd, Zero};

use crate::graph::Vertex;
use crate::Result;

/// Edge weight usable by the shortest path driver
///
/// Addition is checked so that an overflowing path length degrades to
/// [`Distance::Infinite`](crate::graph::Distance::Infinite) instead of wrapping.
pub trait Weight: Copy + Ord + Debug + Zero + CheckedAdd {}

impl<T> Weight for T where T: Copy + Ord + Debug + Zero + CheckedAdd {}

/// Opaque vertex label, the identity of a vertex
pub trait Label: Copy + Eq + Hash + Debug {}

impl<T> Label for T where T: Copy + Eq + Hash + Debug {}

/// Trait representing a weighted directed graph keyed by vertex label
pub trait Graph<L, W>: Debug
where
    L: Label,
    W: Weight,
{
    /// Returns the number of distinct vertex labels
    fn vertex_count(&self) -> usize;

    /// Returns the number of edges in the graph
    fn edge_count(&self) -> usize;

    /// Returns an iterator over the labels in insertion order
    fn labels(&self) -> Box<dyn Iterator<Item = L> + '_>;

    /// Returns an iterator over the outgoing `(neighbor, weight)` pairs of a vertex
    fn neighbors(&self, vertex: L) -> Box<dyn Iterator<Item = (L, W)> + '_>;

    /// Returns true if the vertex exists in the graph
    fn has_vertex(&self, vertex: L) -> bool;

    /// Returns true if there's an edge between the two vertices
    fn has_edge(&self, from: L, to: L) -> bool;

    /// Gets the weight of an edge, failing with [`Error::EdgeNotFound`](crate::Error::EdgeNotFound)
    fn edge_weight(&self, from: L, to: L) -> Result<W>;
}

/// Trait for mutable graph operations
pub trait MutableGraph<L, W>: Graph<L, W>
where
    L: Label,
    W: Weight,
{
    /// Adds a vertex with an infinite distance; returns false if it was already present
    fn add_vertex(&mut self, vertex: L) -> bool;

    /// Removes a vertex and every edge touching it, returning the deleted record
    fn remove_vertex(&mut self, vertex: L) -> Option<Vertex<L, W>>;

    /// Sets the weight of edge `from -> to`, inserting it when absent.
    /// Returns false (and changes nothing) when an endpoint is missing or the weight is negative.
    fn add_edge(&mut self, from: L, to: L, weight: W) -> bool;

    /// Removes an edge from the graph
    fn remove_edge(&mut self, from: L, to: L) -> bool;
}
