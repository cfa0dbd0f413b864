use network_delay::graph::{DirectedGraph, Distance, Graph, MutableGraph};
use network_delay::Error;

// Graph from the first network delay example
fn sample_graph() -> DirectedGraph<u32, u32> {
    DirectedGraph::from_edges(vec![(2, 1, 1), (2, 3, 1), (3, 4, 1)])
}

#[test]
fn test_add_vertex_is_idempotent() {
    let mut graph: DirectedGraph<u32, u32> = DirectedGraph::new();
    assert!(graph.add_vertex(7));
    assert!(!graph.add_vertex(7));
    assert_eq!(graph.vertex_count(), 1);

    let vertex = graph.vertex(7).unwrap();
    assert_eq!(vertex.val, 7);
    assert_eq!(vertex.dist, Distance::Infinite);
    assert_eq!(vertex.prev, None);
}

#[test]
fn test_add_edge_requires_both_endpoints() {
    let mut graph: DirectedGraph<u32, u32> = DirectedGraph::new();
    graph.add_vertex(1);
    assert!(!graph.add_edge(1, 2, 5));
    assert!(!graph.add_edge(2, 1, 5));
    assert_eq!(graph.edge_count(), 0);
    assert_eq!(graph.vertex_count(), 1);
}

#[test]
fn test_add_edge_overwrites_weight() {
    let mut graph = sample_graph();
    assert_eq!(graph.edge_weight(2, 3).unwrap(), 1);

    assert!(graph.add_edge(2, 3, 9));
    assert_eq!(graph.edge_weight(2, 3).unwrap(), 9);
    assert_eq!(graph.edge_count(), 3);
}

#[test]
fn test_edges_are_directed() {
    let graph = sample_graph();
    assert!(graph.has_edge(2, 1));
    assert!(!graph.has_edge(1, 2));

    match graph.edge_weight(1, 2) {
        Err(Error::EdgeNotFound { from, to }) => {
            assert_eq!(from, "1");
            assert_eq!(to, "2");
        }
        other => panic!("expected EdgeNotFound, got {:?}", other),
    }
}

#[test]
fn test_neighbors_in_insertion_order() {
    let graph = sample_graph();
    let neighbors: Vec<(u32, u32)> = graph.neighbors(2).collect();
    assert_eq!(neighbors, vec![(1, 1), (3, 1)]);
    assert_eq!(graph.neighbors(4).count(), 0);
    assert_eq!(graph.neighbors(99).count(), 0);

    let labels: Vec<u32> = graph.labels().collect();
    assert_eq!(labels, vec![2, 1, 3, 4]);
}

#[test]
fn test_remove_edge() {
    let mut graph = sample_graph();
    assert!(graph.remove_edge(2, 3));
    assert!(!graph.has_edge(2, 3));
    assert!(!graph.remove_edge(2, 3));
    assert!(!graph.remove_edge(2, 42));
    assert_eq!(graph.edge_count(), 2);
}

#[test]
fn test_remove_vertex_drops_incident_edges() {
    let mut graph = sample_graph();

    let removed = graph.remove_vertex(3).unwrap();
    assert_eq!(removed.val, 3);
    assert!(graph.remove_vertex(3).is_none());

    assert_eq!(graph.vertex_count(), 3);
    assert!(!graph.has_vertex(3));
    assert!(!graph.has_edge(2, 3));
    assert_eq!(graph.edge_count(), 1);
    assert_eq!(graph.edge_weight(2, 1).unwrap(), 1);
}

#[test]
fn test_remove_vertex_keeps_remaining_edges_consistent() {
    let mut graph: DirectedGraph<char, u32> =
        DirectedGraph::from_edges(vec![('a', 'b', 1), ('b', 'c', 2), ('c', 'd', 3), ('d', 'a', 4), ('d', 'b', 5)]);

    // The last record is relocated into the removed vertex's place
    graph.remove_vertex('a');

    assert_eq!(graph.vertex_count(), 3);
    assert!(graph.has_edge('b', 'c'));
    assert!(graph.has_edge('c', 'd'));
    assert!(graph.has_edge('d', 'b'));
    assert!(!graph.has_edge('d', 'a'));
    assert_eq!(graph.edge_weight('c', 'd').unwrap(), 3);
    assert_eq!(graph.neighbors('d').collect::<Vec<_>>(), vec![('b', 5)]);

    // Re-adding the label starts from a clean record
    assert!(graph.add_vertex('a'));
    assert_eq!(graph.neighbors('a').count(), 0);
    assert!(graph.add_edge('a', 'd', 7));
    assert_eq!(graph.edge_weight('a', 'd').unwrap(), 7);
}

#[test]
fn test_negative_weight_rejected() {
    let mut graph: DirectedGraph<u32, i32> = DirectedGraph::new();
    graph.add_vertex(1);
    graph.add_vertex(2);
    assert!(!graph.add_edge(1, 2, -3));
    assert!(graph.add_edge(1, 2, 0));
    assert_eq!(graph.edge_weight(1, 2).unwrap(), 0);
}

#[test]
fn test_distance_ordering_and_extension() {
    assert!(Distance::Finite(u32::MAX) < Distance::Infinite);
    assert!(Distance::Finite(3u32) < Distance::Finite(4));
    assert_eq!(Distance::Finite(3u32).extend(4), Distance::Finite(7));
    assert_eq!(Distance::<u32>::Infinite.extend(1), Distance::Infinite);
    assert_eq!(Distance::Finite(u32::MAX).extend(1), Distance::Infinite);
    assert_eq!(Distance::Finite(5u32).finite(), Some(5));
}
