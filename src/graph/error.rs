use thiserror::Error;

#[derive(Error, Debug)]
pub enum GraphError {
    #[error("Node not found: {node}")]
    NodeNotFound { node: String },

    #[error("Failed to write DOT output: {0}")]
    Io(#[from] std::io::Error),
}

impl GraphError {
    pub(crate) fn node_not_found<T: std::fmt::Debug>(node: &T) -> Self {
        GraphError::NodeNotFound {
            node: format!("{:?}", node),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn node_not_found_message() {
        let err = GraphError::node_not_found(&"A");
        assert_eq!(err.to_string(), "Node not found: \"A\"");
    }

    #[test]
    fn io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = GraphError::from(io);
        assert!(matches!(err, GraphError::Io(_)));
        assert!(err.to_string().contains("denied"));
    }
}
