use std::cmp::Ordering;
use std::ops::{Add, Sub};

use super::graph::Graph;
use super::query::is_subgraph;

/// Union of nodes and edges.
impl<T: Ord + Clone> Add for &Graph<T> {
    type Output = Graph<T>;

    fn add(self, rhs: Self) -> Graph<T> {
        let mut result = self.clone();
        for node in rhs.nodes() {
            result.add_node(node.clone());
        }
        result.extend(rhs.edges().map(|(from, to)| (from.clone(), to.clone())));
        result
    }
}

/// `self` with every edge of `rhs` removed. The nodes of `self` are kept.
impl<T: Ord + Clone> Sub for &Graph<T> {
    type Output = Graph<T>;

    fn sub(self, rhs: Self) -> Graph<T> {
        let mut result = self.clone();
        for (from, to) in rhs.edges() {
            result.remove_edge(from, to);
        }
        result
    }
}

/// Graphs are ordered by the subgraph relation: `a <= b` iff `a` is a subgraph of `b`.
impl<T: Ord> PartialOrd for Graph<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self == other {
            Some(Ordering::Equal)
        } else if is_subgraph(other, self) {
            Some(Ordering::Less)
        } else if is_subgraph(self, other) {
            Some(Ordering::Greater)
        } else {
            None
        }
    }
}
