//! Network Delay Time - single-source shortest paths over a hand-rolled graph
//!
//! The crate solves two selection/shortest-path exercises:
//!
//! * [`network_delay_time`]: how long a signal sent from one node takes to reach
//!   every node of a directed weighted network. It runs a Dijkstra traversal over an
//!   adjacency-list [`DirectedGraph`] with a binary [`MinHeap`] that is re-heapified
//!   after every relaxation round instead of using decrease-key.
//! * [`closest_k_points`]: quickselect of the K points closest to the origin.

pub mod algorithm;
pub mod data_structures;
#[cfg(feature = "ffi")]
pub mod ffi;
pub mod graph;
pub mod problem;
pub mod selection;

pub use algorithm::{
    dijkstra::HeapifyDijkstra,
    network_delay::{network_delay_time, DelayOutcome, NetworkDelay},
    ShortestPathResult,
};
pub use data_structures::{HeapifyStrategy, MinHeap};
/// Re-export main types for convenient use
pub use graph::{directed::DirectedGraph, Distance, Vertex};
pub use selection::{closest_k_points, Point};

/// Error types for the library
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Heap is empty")]
    EmptyHeap,

    #[error("Edge not found: from {from} to {to}")]
    EdgeNotFound { from: String, to: String },

    #[error("Vertex not found: {0}")]
    VertexNotFound(String),

    #[error("Source vertex not found in graph")]
    SourceNotFound,

    #[error("Negative edge weight: {0}")]
    NegativeWeight(String),

    #[error("k must be within 1..={len}, got {k}")]
    InvalidK { k: usize, len: usize },

    #[error("Invalid problem: {0}")]
    InvalidProblem(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
