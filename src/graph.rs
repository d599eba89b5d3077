use std::collections::{BTreeMap, BTreeSet};
use std::fmt::{self, Debug, Display};

use tracing::{debug, trace};

pub use error::GraphError;

pub mod error;

/// A directed graph whose nodes are identified by their labels.
///
/// Every edge endpoint is always a node of the graph.
/// Nodes and edges are kept in label order, so iteration, formatting and
/// DOT output are deterministic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph<T> {
    /// Each node mapped to the nodes it has an outgoing edge to.
    adjacencies: BTreeMap<T, BTreeSet<T>>,
}

impl<T> Default for Graph<T> {
    fn default() -> Self {
        Self {
            adjacencies: BTreeMap::new(),
        }
    }
}

impl<T: Ord + Clone> Graph<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a node.
    /// Returns `false` if the node was already present, in which case the graph is unchanged.
    pub fn add_node(&mut self, node: T) -> bool {
        if self.adjacencies.contains_key(&node) {
            return false;
        }
        self.adjacencies.insert(node, BTreeSet::new());
        true
    }

    /// Removes a node together with all of its incoming and outgoing edges.
    pub fn remove_node(&mut self, node: &T) -> bool {
        if self.adjacencies.remove(node).is_none() {
            return false;
        }
        for successors in self.adjacencies.values_mut() {
            successors.remove(node);
        }
        true
    }

    /// Inserts a directed edge between two existing nodes.
    ///
    /// Fails with [`GraphError::NodeNotFound`] if either endpoint is missing.
    /// Returns `Ok(false)` if the edge was already present.
    pub fn add_edge(&mut self, from: &T, to: &T) -> Result<bool, GraphError>
    where
        T: Debug,
    {
        if !self.adjacencies.contains_key(to) {
            debug!(node = ?to, "rejected edge with missing destination");
            return Err(GraphError::node_not_found(to));
        }
        let successors = self.adjacencies.get_mut(from).ok_or_else(|| {
            debug!(node = ?from, "rejected edge with missing source");
            GraphError::node_not_found(from)
        })?;
        let inserted = successors.insert(to.clone());
        trace!(?from, ?to, inserted, "add_edge");
        Ok(inserted)
    }

    /// Inserts a directed edge, adding whichever endpoints are missing.
    /// Returns `false` if the edge was already present.
    pub fn connect(&mut self, from: T, to: T) -> bool {
        self.adjacencies.entry(to.clone()).or_default();
        self.adjacencies.entry(from).or_default().insert(to)
    }

    /// Removes a directed edge. Removing an absent edge is a no-op.
    pub fn remove_edge(&mut self, from: &T, to: &T) -> bool {
        self.adjacencies
            .get_mut(from)
            .map_or(false, |successors| successors.remove(to))
    }

    pub fn clear(&mut self) {
        self.adjacencies.clear();
    }

    /// Removes every edge but keeps the nodes.
    pub fn clear_edges(&mut self) {
        for successors in self.adjacencies.values_mut() {
            successors.clear();
        }
    }
}

impl<T: Ord> Graph<T> {
    pub fn contains_node(&self, node: &T) -> bool {
        self.adjacencies.contains_key(node)
    }

    pub fn contains_edge(&self, from: &T, to: &T) -> bool {
        self.adjacencies
            .get(from)
            .map_or(false, |successors| successors.contains(to))
    }

    pub fn nodes(&self) -> impl Iterator<Item = &T> + '_ {
        self.adjacencies.keys()
    }

    /// Returns all edges as `(source, destination)` pairs, ordered by source then destination.
    pub fn edges(&self) -> impl Iterator<Item = (&T, &T)> + '_ {
        self.adjacencies
            .iter()
            .flat_map(|(from, successors)| successors.iter().map(move |to| (from, to)))
    }

    /// Returns nodes which have an incoming edge from `node`.
    /// Empty if `node` is not in the graph.
    pub fn successors<'a>(&'a self, node: &T) -> impl Iterator<Item = &'a T> + 'a {
        self.adjacencies.get(node).into_iter().flatten()
    }

    /// Returns nodes which have an outgoing edge to `node`.
    pub fn predecessors<'a>(&'a self, node: &'a T) -> impl Iterator<Item = &'a T> + 'a {
        self.adjacencies
            .iter()
            .filter(move |(_, successors)| successors.contains(node))
            .map(|(from, _)| from)
    }

    pub(crate) fn node_count(&self) -> usize {
        self.adjacencies.len()
    }

    pub(crate) fn edge_count(&self) -> usize {
        self.adjacencies.values().map(BTreeSet::len).sum()
    }

    pub(crate) fn adjacencies(&self) -> &BTreeMap<T, BTreeSet<T>> {
        &self.adjacencies
    }
}

impl<T: Ord + Clone> FromIterator<(T, T)> for Graph<T> {
    fn from_iter<I: IntoIterator<Item = (T, T)>>(edges: I) -> Self {
        let mut graph = Graph::new();
        graph.extend(edges);
        graph
    }
}

impl<T: Ord + Clone> Extend<(T, T)> for Graph<T> {
    fn extend<I: IntoIterator<Item = (T, T)>>(&mut self, edges: I) {
        for (from, to) in edges {
            self.connect(from, to);
        }
    }
}

/// One line per node in label order: the label alone, or
/// `label -> successor, successor, ...` when it has outgoing edges.
impl<T: Display> Display for Graph<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (node, successors) in &self.adjacencies {
            write!(f, "{}", node)?;
            for (i, successor) in successors.iter().enumerate() {
                let sep = if i == 0 { " -> " } else { ", " };
                write!(f, "{}{}", sep, successor)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}


#[cfg(test)]
mod prop_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn prop_add_node_twice_keeps_one(nodes in prop::collection::vec(0u8..16, 0..32)) {
            let mut graph = Graph::new();
            for node in &nodes {
                graph.add_node(*node);
                graph.add_node(*node);
            }
            let distinct: BTreeSet<_> = nodes.iter().collect();
            prop_assert_eq!(graph.nodes().count(), distinct.len());
        }

        #[test]
        fn prop_edge_endpoints_are_nodes(
            edges in prop::collection::vec((0u8..8, 0u8..8), 0..32),
            removed in prop::collection::vec(0u8..8, 0..4),
        ) {
            let mut graph: Graph<_> = edges.into_iter().collect();
            for node in &removed {
                graph.remove_node(node);
            }
            for (from, to) in graph.edges() {
                prop_assert!(graph.contains_node(from));
                prop_assert!(graph.contains_node(to));
            }
        }

        #[test]
        fn prop_add_then_remove_edge(
            edges in prop::collection::vec((0u8..8, 0u8..8), 0..32),
            from in 0u8..8,
            to in 0u8..8,
        ) {
            let mut graph: Graph<_> = edges.into_iter().collect();
            graph.connect(from, to);
            prop_assert!(graph.remove_edge(&from, &to));
            prop_assert!(!graph.contains_edge(&from, &to));
        }
    }
}
