use std::collections::HashMap;

use log::debug;

use super::error::{GraphError, Result};
use super::render;
use super::routing::RoutingStrategy;
use super::types::{GraphModel, GridEdge, GridNode, Point};

/// Margin around the bounding box in the SVG viewport, in grid units.
pub const VIEWPORT_MARGIN: f64 = 0.5;

/// Axis-aligned box around every node.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
	/// Smallest node x.
	pub min_x: f64,
	/// Largest node x.
	pub max_x: f64,
	/// Smallest node y.
	pub min_y: f64,
	/// Largest node y.
	pub max_y: f64,
}

impl Bounds {
	/// Bounding box over `nodes`. Fails with [`GraphError::EmptyGraph`] when
	/// there are none and [`GraphError::NonFiniteCoordinate`] for a NaN or
	/// infinite coordinate.
	pub fn from_nodes(nodes: &[GridNode]) -> Result<Self> {
		let (first, _) = nodes.split_first().ok_or(GraphError::EmptyGraph)?;
		let seed = Self {
			min_x: first.x,
			max_x: first.x,
			min_y: first.y,
			max_y: first.y,
		};
		nodes.iter().try_fold(seed, |b, n| {
			if !n.x.is_finite() || !n.y.is_finite() {
				return Err(GraphError::NonFiniteCoordinate { id: n.id.clone() });
			}
			Ok(Self {
				min_x: b.min_x.min(n.x),
				max_x: b.max_x.max(n.x),
				min_y: b.min_y.min(n.y),
				max_y: b.max_y.max(n.y),
			})
		})
	}

	/// `max_x - min_x`.
	pub fn width(&self) -> f64 {
		self.max_x - self.min_x
	}

	/// `max_y - min_y`.
	pub fn height(&self) -> f64 {
		self.max_y - self.min_y
	}

	/// SVG `viewBox` value: the box grown by [`VIEWPORT_MARGIN`] on each side.
	pub fn view_box(&self) -> String {
		format!(
			"{} {} {} {}",
			render::format_number(self.min_x - VIEWPORT_MARGIN),
			render::format_number(self.min_y - VIEWPORT_MARGIN),
			render::format_number(self.width() + 2.0 * VIEWPORT_MARGIN),
			render::format_number(self.height() + 2.0 * VIEWPORT_MARGIN),
		)
	}
}

/// A validated graph with its bounds and an id index, ready to produce SVG
/// path data.
#[derive(Clone, Debug, PartialEq)]
pub struct GraphRenderer {
	graph: GraphModel,
	positions: HashMap<String, Point>,
	bounds: Bounds,
}

impl GraphRenderer {
	/// Validates `graph` (non-empty, finite, unique ids) and derives its
	/// bounds.
	///
	/// Edges are not checked here; an edge with a dangling id fails when its
	/// path is requested.
	pub fn new(graph: GraphModel) -> Result<Self> {
		let bounds = Bounds::from_nodes(&graph.nodes)?;
		let mut positions = HashMap::with_capacity(graph.nodes.len());
		for node in &graph.nodes {
			if positions.insert(node.id.clone(), node.position()).is_some() {
				return Err(GraphError::DuplicateNode {
					id: node.id.clone(),
				});
			}
		}
		debug!(
			"graph ready: {} nodes, {} edges, bounds {:?}",
			graph.nodes.len(),
			graph.edges.len(),
			bounds
		);
		Ok(Self {
			graph,
			positions,
			bounds,
		})
	}

	/// Nodes in input order.
	pub fn nodes(&self) -> &[GridNode] {
		&self.graph.nodes
	}

	/// Edges in input order.
	pub fn edges(&self) -> &[GridEdge] {
		&self.graph.edges
	}

	/// Bounding box over all nodes.
	pub const fn bounds(&self) -> Bounds {
		self.bounds
	}

	/// SVG `viewBox` for the whole graph.
	pub fn view_box(&self) -> String {
		self.bounds.view_box()
	}

	/// Position of node `id`.
	pub fn position(&self, id: &str) -> Result<Point> {
		self.positions
			.get(id)
			.copied()
			.ok_or_else(|| GraphError::UnknownNode { id: id.to_owned() })
	}

	/// Polyline for `edge` under `strategy`.
	pub fn route(&self, edge: &GridEdge, strategy: RoutingStrategy) -> Result<Vec<Point>> {
		let from = self.position(&edge.from)?;
		let to = self.position(&edge.to)?;
		if edge.is_self_loop() {
			debug!("self-loop on {} renders as a zero-length path", edge.from);
		} else if from == to {
			debug!("coincident nodes {} and {}", edge.from, edge.to);
		}
		Ok(strategy.route(from, to))
	}

	/// SVG path data for `edge`, e.g. `"M 0,0 L 2,2 L 4,2"`.
	pub fn edge_path(&self, edge: &GridEdge, strategy: RoutingStrategy) -> Result<String> {
		self.route(edge, strategy).map(|points| render::path_data(&points))
	}

	/// Path data for every edge, in order. Fails on the first edge that does
	/// not resolve.
	pub fn edge_paths(&self, strategy: RoutingStrategy) -> Result<Vec<String>> {
		self.graph
			.edges
			.iter()
			.map(|edge| self.edge_path(edge, strategy))
			.collect()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn graph(nodes: &[(&str, f64, f64)], edges: &[(&str, &str)]) -> GraphModel {
		GraphModel {
			nodes: nodes.iter().map(|&(id, x, y)| GridNode::new(id, x, y)).collect(),
			edges: edges.iter().map(|&(f, t)| GridEdge::new(f, t)).collect(),
		}
	}

	fn kink_path(from: (f64, f64), to: (f64, f64)) -> String {
		let renderer =
			GraphRenderer::new(graph(&[("a", from.0, from.1), ("b", to.0, to.1)], &[("a", "b")]))
				.unwrap();
		renderer.edge_path(&renderer.edges()[0], RoutingStrategy::Kink).unwrap()
	}

	#[test]
	fn bounds_cover_every_node() {
		let g = graph(&[("a", 3.0, -1.0), ("b", -2.0, 4.0), ("c", 0.5, 0.0)], &[]);
		let bounds = Bounds::from_nodes(&g.nodes).unwrap();
		assert_eq!(
			bounds,
			Bounds {
				min_x: -2.0,
				max_x: 3.0,
				min_y: -1.0,
				max_y: 4.0,
			}
		);
		for node in &g.nodes {
			assert!(bounds.min_x <= node.x && node.x <= bounds.max_x);
			assert!(bounds.min_y <= node.y && node.y <= bounds.max_y);
		}
	}

	#[test]
	fn bounds_reject_nan_instead_of_skipping_it() {
		let g = graph(&[("a", f64::NAN, 0.0), ("b", 1.0, 1.0)], &[]);
		assert_eq!(
			Bounds::from_nodes(&g.nodes),
			Err(GraphError::NonFiniteCoordinate { id: "a".into() })
		);

		let g = graph(&[("a", 0.0, 0.0), ("b", 1.0, f64::INFINITY)], &[]);
		assert_eq!(
			Bounds::from_nodes(&g.nodes),
			Err(GraphError::NonFiniteCoordinate { id: "b".into() })
		);
	}

	#[test]
	fn bounds_of_empty_graph_fail() {
		assert_eq!(Bounds::from_nodes(&[]), Err(GraphError::EmptyGraph));
		assert_eq!(
			GraphRenderer::new(GraphModel::default()),
			Err(GraphError::EmptyGraph)
		);
	}

	#[test]
	fn view_box_adds_half_unit_margin() {
		let g = graph(&[("a", 0.0, 1.0), ("b", 4.0, 3.0)], &[]);
		let renderer = GraphRenderer::new(g).unwrap();
		assert_eq!(renderer.bounds().width(), 4.0);
		assert_eq!(renderer.bounds().height(), 2.0);
		assert_eq!(renderer.view_box(), "-0.5 0.5 5 3");
	}

	#[test]
	fn single_node_view_box_is_one_unit() {
		let renderer = GraphRenderer::new(graph(&[("a", 2.0, 2.0)], &[])).unwrap();
		assert_eq!(renderer.view_box(), "1.5 1.5 1 1");
	}

	#[test]
	fn duplicate_ids_are_rejected() {
		let err = GraphRenderer::new(graph(&[("a", 0.0, 0.0), ("a", 1.0, 1.0)], &[])).unwrap_err();
		assert_eq!(err, GraphError::DuplicateNode { id: "a".into() });
	}

	#[test]
	fn non_finite_coordinates_are_rejected() {
		let err = GraphRenderer::new(graph(&[("a", f64::NAN, 0.0)], &[])).unwrap_err();
		assert_eq!(err, GraphError::NonFiniteCoordinate { id: "a".into() });
	}

	#[test]
	fn vertical_edge_is_straight() {
		assert_eq!(kink_path((0.0, 0.0), (0.0, 5.0)), "M 0,0 L 0,5");
	}

	#[test]
	fn diagonal_edge_is_straight() {
		assert_eq!(kink_path((0.0, 0.0), (3.0, 3.0)), "M 0,0 L 3,3");
	}

	#[test]
	fn general_edge_kinks() {
		assert_eq!(kink_path((0.0, 0.0), (4.0, 2.0)), "M 0,0 L 2,2 L 4,2");
	}

	#[test]
	fn negative_deltas_kink_backwards() {
		assert_eq!(kink_path((5.0, 5.0), (2.0, 1.0)), "M 5,5 L 2,2 L 2,1");
	}

	#[test]
	fn fractional_coordinates_are_not_rounded() {
		assert_eq!(kink_path((0.5, 0.0), (3.0, 1.25)), "M 0.5,0 L 1.75,1.25 L 3,1.25");
	}

	#[test]
	fn self_loop_is_zero_length() {
		let renderer = GraphRenderer::new(graph(&[("a", 1.0, 2.0)], &[("a", "a")])).unwrap();
		let path = renderer.edge_path(&renderer.edges()[0], RoutingStrategy::Kink).unwrap();
		assert_eq!(path, "M 1,2 L 1,2");
	}

	#[test]
	fn unknown_endpoint_produces_no_path() {
		let renderer = GraphRenderer::new(graph(&[("a", 0.0, 0.0)], &[("a", "zz")])).unwrap();
		assert_eq!(
			renderer.edge_path(&renderer.edges()[0], RoutingStrategy::Kink),
			Err(GraphError::UnknownNode { id: "zz".into() })
		);
		assert_eq!(
			renderer.edge_paths(RoutingStrategy::Kink),
			Err(GraphError::UnknownNode { id: "zz".into() })
		);
	}

	#[test]
	fn edge_paths_keep_edge_order() {
		let renderer = GraphRenderer::new(graph(
			&[("a", 0.0, 0.0), ("b", 4.0, 2.0), ("c", 0.0, 5.0)],
			&[("a", "b"), ("a", "c")],
		))
		.unwrap();
		assert_eq!(
			renderer.edge_paths(RoutingStrategy::Kink).unwrap(),
			vec!["M 0,0 L 2,2 L 4,2".to_owned(), "M 0,0 L 0,5".to_owned()]
		);
		assert_eq!(
			renderer.edge_paths(RoutingStrategy::Hook).unwrap(),
			vec!["M 0,0 L 0.5,0 L 2.5,2 L 4,2".to_owned(), "M 0,0 L 0,5".to_owned()]
		);
	}
}
