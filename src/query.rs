//! Predicates and measures over a [`Graph`].
//!
//! These are free functions so that analysis stays separate from the
//! container that owns the data.

use super::graph::Graph;

/// True iff the graph has no nodes. A graph without nodes cannot have edges.
pub fn is_empty<T: Ord>(graph: &Graph<T>) -> bool {
    graph.node_count() == 0
}

/// True iff every ordered pair of distinct nodes `(u, v)` has an edge `u -> v`.
///
/// Graphs with zero or one node are complete. Self-loops are ignored.
pub fn is_complete<T: Ord>(graph: &Graph<T>) -> bool {
    let n = graph.node_count();
    graph.adjacencies().iter().all(|(node, successors)| {
        let loops = usize::from(successors.contains(node));
        // Successors are always nodes, so counting them is enough.
        successors.len() - loops == n - 1
    })
}

/// True iff the graph has no edges. Nodes may be present.
pub fn is_edgeless<T: Ord>(graph: &Graph<T>) -> bool {
    graph.adjacencies().values().all(|successors| successors.is_empty())
}

/// True iff the graph consists of a single node and no edges.
pub fn is_trivial<T: Ord>(graph: &Graph<T>) -> bool {
    order(graph) == 1 && is_edgeless(graph)
}

/// Number of nodes.
pub fn order<T: Ord>(graph: &Graph<T>) -> usize {
    graph.node_count()
}

/// Number of directed edges.
pub fn size<T: Ord>(graph: &Graph<T>) -> usize {
    graph.edge_count()
}

/// True iff there is an edge `from -> to`.
pub fn are_adjacent<T: Ord>(graph: &Graph<T>, from: &T, to: &T) -> bool {
    graph.contains_edge(from, to)
}

/// True iff the edges `first -> middle` and `middle -> last` both exist,
/// i.e. the two edges meet head to tail at `middle`.
pub fn are_adjacent_edges<T: Ord>(graph: &Graph<T>, first: &T, middle: &T, last: &T) -> bool {
    are_adjacent(graph, first, middle) && are_adjacent(graph, middle, last)
}

/// True iff every node and edge of `subgraph` is also in `graph`.
pub fn is_subgraph<T: Ord>(graph: &Graph<T>, subgraph: &Graph<T>) -> bool {
    subgraph.adjacencies().iter().all(|(node, successors)| {
        graph
            .adjacencies()
            .get(node)
            .map_or(false, |outer| successors.is_subset(outer))
    })
}

/// A subgraph that is not equal to `graph`.
pub fn is_proper_subgraph<T: Ord>(graph: &Graph<T>, subgraph: &Graph<T>) -> bool {
    graph != subgraph && is_subgraph(graph, subgraph)
}

/// A subgraph identical to `graph`.
pub fn is_improper_subgraph<T: Ord>(graph: &Graph<T>, subgraph: &Graph<T>) -> bool {
    graph == subgraph
}

/// A subgraph containing all of `graph`'s nodes.
pub fn is_spanning_subgraph<T: Ord>(graph: &Graph<T>, subgraph: &Graph<T>) -> bool {
    order(graph) == order(subgraph) && is_subgraph(graph, subgraph)
}
