/// Errors raised while validating a graph or rendering its edges.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GraphError {
	/// The graph has no nodes, so it has no bounding box.
	#[error("graph has no nodes; bounds are undefined")]
	EmptyGraph,
	/// Two nodes share the same id.
	#[error("duplicate node id: {id}")]
	DuplicateNode {
		/// The repeated id.
		id: String,
	},
	/// A node has a NaN or infinite coordinate.
	#[error("node {id} has a non-finite coordinate")]
	NonFiniteCoordinate {
		/// The offending node.
		id: String,
	},
	/// An edge endpoint names a node that is not in the graph.
	#[error("edge references unknown node: {id}")]
	UnknownNode {
		/// The id that failed to resolve.
		id: String,
	},
	/// Graph JSON could not be parsed.
	#[error("invalid graph json: {0}")]
	InvalidJson(String),
}

/// Result alias for graph operations.
pub type Result<T> = std::result::Result<T, GraphError>;
