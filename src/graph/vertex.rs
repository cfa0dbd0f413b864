use crate::graph::traits::{Label, Weight};

/// Tentative distance from the source
///
/// Variant order matters: every `Finite` value compares below `Infinite`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Distance<W> {
    Finite(W),
    Infinite,
}

impl<W: Weight> Distance<W> {
    pub fn is_finite(&self) -> bool {
        matches!(self, Distance::Finite(_))
    }

    /// The finite value, if any
    pub fn finite(self) -> Option<W> {
        match self {
            Distance::Finite(w) => Some(w),
            Distance::Infinite => None,
        }
    }

    /// Extends this distance by one edge. Infinity absorbs, overflow saturates to infinity.
    pub fn extend(self, weight: W) -> Self {
        match self {
            Distance::Finite(d) => d
                .checked_add(&weight)
                .map_or(Distance::Infinite, Distance::Finite),
            Distance::Infinite => Distance::Infinite,
        }
    }
}

impl<W> Default for Distance<W> {
    fn default() -> Self {
        Distance::Infinite
    }
}

/// A vertex record owned by the graph arena
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vertex<L, W> {
    /// Unique label
    pub val: L,
    /// Tentative shortest distance from the source
    pub dist: Distance<W>,
    /// Predecessor on the best known path
    pub prev: Option<L>,
}

impl<L: Label, W: Weight> Vertex<L, W> {
    pub fn new(val: L) -> Self {
        Vertex {
            val,
            dist: Distance::Infinite,
            prev: None,
        }
    }
}
