pub mod traits;
pub mod vertex;
pub mod directed;
pub mod generators;

pub use traits::{Graph, Label, MutableGraph, Weight};
pub use vertex::{Distance, Vertex};
pub use directed::DirectedGraph;
