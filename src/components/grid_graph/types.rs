use serde::{Deserialize, Serialize};

use super::error::{GraphError, Result};

/// A vertex of an edge path, in grid units.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
	/// Horizontal grid coordinate.
	pub x: f64,
	/// Vertical grid coordinate.
	pub y: f64,
}

impl Point {
	/// Creates a point.
	pub const fn new(x: f64, y: f64) -> Self {
		Self { x, y }
	}
}

/// A labeled point on the diagram grid.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GridNode {
	/// Unique id within the graph, also used as the label.
	pub id: String,
	/// Horizontal grid coordinate.
	pub x: f64,
	/// Vertical grid coordinate.
	pub y: f64,
}

impl GridNode {
	/// Creates a node at `(x, y)`.
	pub fn new(id: impl Into<String>, x: f64, y: f64) -> Self {
		Self {
			id: id.into(),
			x,
			y,
		}
	}

	/// The node position as a [`Point`].
	pub const fn position(&self) -> Point {
		Point::new(self.x, self.y)
	}
}

/// A directed connection between two node ids.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridEdge {
	/// Source node id.
	pub from: String,
	/// Target node id.
	pub to: String,
}

impl GridEdge {
	/// Creates an edge `from -> to`.
	pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
		Self {
			from: from.into(),
			to: to.into(),
		}
	}

	/// True when both endpoints name the same node.
	pub fn is_self_loop(&self) -> bool {
		self.from == self.to
	}
}

/// Nodes and edges as supplied by the host page.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphModel {
	/// Nodes, ids unique.
	pub nodes: Vec<GridNode>,
	/// Edges between node ids.
	#[serde(default)]
	pub edges: Vec<GridEdge>,
}

impl GraphModel {
	/// Parses `{ "nodes": [{id,x,y}], "edges": [{from,to}] }`.
	pub fn from_json(json: &str) -> Result<Self> {
		serde_json::from_str(json).map_err(|e| GraphError::InvalidJson(e.to_string()))
	}
}
