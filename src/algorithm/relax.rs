use crate::graph::{DirectedGraph, Graph, Label, Weight};
use crate::{Error, Result};

/// Relaxes edge `u -> v` given arena slots and the edge weight.
///
/// Sets `dist(v) = dist(u) + weight` and `prev(v) = u` when that is strictly shorter.
/// Returns whether `v` improved. An unreached `u` never improves anything.
pub(crate) fn relax_slots<L, W>(graph: &mut DirectedGraph<L, W>, u: usize, v: usize, weight: W) -> bool
where
    L: Label,
    W: Weight,
{
    let from = graph.vertex_at(u);
    let candidate = from.dist.extend(weight);
    let from_label = from.val;

    let target = graph.vertex_at_mut(v);
    if candidate < target.dist {
        target.dist = candidate;
        target.prev = Some(from_label);
        true
    } else {
        false
    }
}

/// Relaxes the existing edge `from -> to` by label
pub fn relax<L, W>(graph: &mut DirectedGraph<L, W>, from: L, to: L) -> Result<bool>
where
    L: Label,
    W: Weight,
{
    let weight = graph.edge_weight(from, to)?;
    let u = graph
        .slot(from)
        .ok_or_else(|| Error::VertexNotFound(format!("{:?}", from)))?;
    let v = graph
        .slot(to)
        .ok_or_else(|| Error::VertexNotFound(format!("{:?}", to)))?;
    Ok(relax_slots(graph, u, v, weight))
}
