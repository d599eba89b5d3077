pub use dot::{generate_dot_graph, write_dot, ToDot};
pub use graph::{Graph, GraphError};
pub use query::{
    are_adjacent, are_adjacent_edges, is_complete, is_edgeless, is_empty, is_improper_subgraph,
    is_proper_subgraph, is_spanning_subgraph, is_subgraph, is_trivial, order, size,
};

pub mod dot;
pub mod graph;
pub mod ops;
pub mod query;
