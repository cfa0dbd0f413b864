use crate::data_structures::Keyed;
use crate::graph::traits::{Graph, Label, MutableGraph, Weight};
use crate::graph::{Distance, Vertex};
use crate::{Error, Result};
use log::warn;
use std::collections::HashMap;

/// A vertex record together with its outgoing edges
#[derive(Debug, Clone)]
struct Entry<L, W> {
    vertex: Vertex<L, W>,
    /// Outgoing edges: (arena slot of target, weight), in insertion order
    adjacents: Vec<(usize, W)>,
}

/// A directed graph implementation using adjacency lists
///
/// Vertex records live in a single arena; labels map to arena slots. Edges and
/// the priority queue both refer to slots, so a distance written by relaxation
/// is what the heap reads on its next comparison.
#[derive(Debug, Clone)]
pub struct DirectedGraph<L, W>
where
    L: Label,
    W: Weight,
{
    /// Vertex arena, in insertion order
    entries: Vec<Entry<L, W>>,

    /// Label -> arena slot
    slots: HashMap<L, usize>,
}

impl<L, W> DirectedGraph<L, W>
where
    L: Label,
    W: Weight,
{
    /// Creates a new empty directed graph
    pub fn new() -> Self {
        DirectedGraph {
            entries: Vec::new(),
            slots: HashMap::new(),
        }
    }

    /// Builds a graph from `(from, to, weight)` triples, adding endpoints as they appear.
    /// A repeated pair keeps the weight of its last occurrence.
    pub fn from_edges<I>(edges: I) -> Self
    where
        I: IntoIterator<Item = (L, L, W)>,
    {
        let mut graph = DirectedGraph::new();
        for (from, to, weight) in edges {
            graph.add_vertex(from);
            graph.add_vertex(to);
            graph.add_edge(from, to, weight);
        }
        graph
    }

    /// Arena slot of a label
    pub fn slot(&self, vertex: L) -> Option<usize> {
        self.slots.get(&vertex).copied()
    }

    /// Looks up the record of a vertex
    pub fn vertex(&self, vertex: L) -> Option<&Vertex<L, W>> {
        self.slot(vertex).map(|slot| &self.entries[slot].vertex)
    }

    /// Iterates over all vertex records in arena order
    pub fn vertices(&self) -> impl Iterator<Item = &Vertex<L, W>> + '_ {
        self.entries.iter().map(|entry| &entry.vertex)
    }

    /// Puts every vertex back to `dist = infinity, prev = none`
    pub fn reset_distances(&mut self) {
        for entry in &mut self.entries {
            entry.vertex.dist = Distance::Infinite;
            entry.vertex.prev = None;
        }
    }

    pub(crate) fn vertex_at(&self, slot: usize) -> &Vertex<L, W> {
        &self.entries[slot].vertex
    }

    pub(crate) fn vertex_at_mut(&mut self, slot: usize) -> &mut Vertex<L, W> {
        &mut self.entries[slot].vertex
    }

    pub(crate) fn adjacents_at(&self, slot: usize) -> &[(usize, W)] {
        &self.entries[slot].adjacents
    }

    fn find_edge(&self, from: L, to: L) -> Option<W> {
        let from = self.slot(from)?;
        let to = self.slot(to)?;
        self.entries[from]
            .adjacents
            .iter()
            .find(|(target, _)| *target == to)
            .map(|(_, weight)| *weight)
    }
}

impl<L, W> Default for DirectedGraph<L, W>
where
    L: Label,
    W: Weight,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<L, W> Graph<L, W> for DirectedGraph<L, W>
where
    L: Label,
    W: Weight,
{
    fn vertex_count(&self) -> usize {
        self.entries.len()
    }

    fn edge_count(&self) -> usize {
        self.entries.iter().map(|entry| entry.adjacents.len()).sum()
    }

    fn labels(&self) -> Box<dyn Iterator<Item = L> + '_> {
        Box::new(self.entries.iter().map(|entry| entry.vertex.val))
    }

    fn neighbors(&self, vertex: L) -> Box<dyn Iterator<Item = (L, W)> + '_> {
        if let Some(slot) = self.slot(vertex) {
            Box::new(
                self.entries[slot]
                    .adjacents
                    .iter()
                    .map(move |&(target, weight)| (self.entries[target].vertex.val, weight)),
            )
        } else {
            Box::new(std::iter::empty())
        }
    }

    fn has_vertex(&self, vertex: L) -> bool {
        self.slots.contains_key(&vertex)
    }

    fn has_edge(&self, from: L, to: L) -> bool {
        self.find_edge(from, to).is_some()
    }

    fn edge_weight(&self, from: L, to: L) -> Result<W> {
        self.find_edge(from, to).ok_or_else(|| Error::EdgeNotFound {
            from: format!("{:?}", from),
            to: format!("{:?}", to),
        })
    }
}

impl<L, W> MutableGraph<L, W> for DirectedGraph<L, W>
where
    L: Label,
    W: Weight,
{
    fn add_vertex(&mut self, vertex: L) -> bool {
        if self.slots.contains_key(&vertex) {
            return false;
        }
        self.slots.insert(vertex, self.entries.len());
        self.entries.push(Entry {
            vertex: Vertex::new(vertex),
            adjacents: Vec::new(),
        });
        true
    }

    fn remove_vertex(&mut self, vertex: L) -> Option<Vertex<L, W>> {
        let slot = self.slots.remove(&vertex)?;

        // Drop every edge pointing at the vertex
        for entry in &mut self.entries {
            entry.adjacents.retain(|(target, _)| *target != slot);
        }

        // The last record moves into the freed slot; retarget edges that pointed at it
        let last = self.entries.len() - 1;
        let removed = self.entries.swap_remove(slot);
        if slot != last {
            let moved = self.entries[slot].vertex.val;
            self.slots.insert(moved, slot);
            for entry in &mut self.entries {
                for edge in entry.adjacents.iter_mut() {
                    if edge.0 == last {
                        edge.0 = slot;
                    }
                }
            }
        }

        Some(removed.vertex)
    }

    fn add_edge(&mut self, from: L, to: L, weight: W) -> bool {
        let (Some(from_slot), Some(to_slot)) = (self.slot(from), self.slot(to)) else {
            return false;
        };
        if weight < W::zero() {
            warn!("Rejecting edge {:?} -> {:?} with negative weight {:?}", from, to, weight);
            return false;
        }

        let outgoing = &mut self.entries[from_slot].adjacents;
        match outgoing.iter().position(|(target, _)| *target == to_slot) {
            Some(i) => outgoing[i].1 = weight,
            None => outgoing.push((to_slot, weight)),
        }
        true
    }

    fn remove_edge(&mut self, from: L, to: L) -> bool {
        let (Some(from_slot), Some(to_slot)) = (self.slot(from), self.slot(to)) else {
            return false;
        };
        let outgoing = &mut self.entries[from_slot].adjacents;
        let len_before = outgoing.len();
        outgoing.retain(|(target, _)| *target != to_slot);
        len_before > outgoing.len()
    }
}

impl<L, W> Keyed for DirectedGraph<L, W>
where
    L: Label,
    W: Weight,
{
    type Key = Distance<W>;

    fn key_of(&self, handle: usize) -> Distance<W> {
        self.entries[handle].vertex.dist
    }
}
