pub mod result;
pub mod relax;
pub mod dijkstra;
pub mod network_delay;

pub use result::ShortestPathResult;
pub use relax::relax;
