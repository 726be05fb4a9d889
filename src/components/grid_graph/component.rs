use leptos::prelude::*;
use log::info;
use web_sys::MouseEvent;

use super::error::GraphError;
use super::render::format_number;
use super::routing::RoutingStrategy;
use super::state::GraphRenderer;
use super::types::{GraphModel, GridNode};

/// Node circle radius in grid units.
pub const NODE_RADIUS: f64 = 0.12;
const EDGE_WIDTH: f64 = 0.04;
const LABEL_SIZE: f64 = 0.22;

/// SVG rendering of a grid graph.
///
/// Errors in the graph (no nodes, duplicate ids, dangling edges) are returned
/// as `Err` and surface through the nearest `ErrorBoundary`.
#[component]
pub fn GridGraph(
	#[prop(into)] graph: Signal<GraphModel>,
	#[prop(into, default = Signal::stored(RoutingStrategy::Kink))] strategy: Signal<
		RoutingStrategy,
	>,
	#[prop(optional)] on_node_click: Option<Callback<String>>,
) -> impl IntoView {
	let selected = RwSignal::new(None::<String>);

	let scene = move || -> Result<_, GraphError> {
		let renderer = GraphRenderer::new(graph.get())?;
		let strategy = strategy.get();
		let paths = renderer.edge_paths(strategy)?;
		info!(
			"rendering {} edges with {} routing",
			paths.len(),
			strategy.name()
		);

		let min_x = renderer.bounds().min_x;
		let edges = paths
			.into_iter()
			.map(|d| view! { <path class="grid-graph-edge" d=d /> })
			.collect_view();
		let nodes = renderer
			.nodes()
			.iter()
			.cloned()
			.map(|node| node_view(node, min_x, selected, on_node_click))
			.collect_view();

		Ok(view! {
			<svg
				class="grid-graph"
				viewBox=renderer.view_box()
				on:click=move |_: MouseEvent| selected.set(None)
			>
				<g
					class="grid-graph-edges"
					fill="none"
					stroke="currentColor"
					stroke-width=format_number(EDGE_WIDTH)
					stroke-linecap="round"
					stroke-linejoin="round"
				>
					{edges}
				</g>
				<g class="grid-graph-nodes">{nodes}</g>
			</svg>
		})
	};

	view! { <div class="grid-graph-container">{scene}</div> }
}

fn node_view(
	node: GridNode,
	min_x: f64,
	selected: RwSignal<Option<String>>,
	on_node_click: Option<Callback<String>>,
) -> impl IntoView {
	let (cx, cy) = (format_number(node.x), format_number(node.y));
	let label_y = format_number(node.y - NODE_RADIUS * 1.5);
	let is_selected = {
		let id = node.id.clone();
		move || selected.with(|s| s.as_deref() == Some(id.as_str()))
	};
	let id = node.id.clone();
	let on_click = move |ev: MouseEvent| {
		// keep the background handler from clearing the selection again
		ev.stop_propagation();
		info!("node clicked: {id} (min x {min_x})");
		selected.set(Some(id.clone()));
		if let Some(cb) = on_node_click {
			cb.run(id.clone());
		}
	};

	view! {
		<g class="grid-graph-node" class:selected=is_selected on:click=on_click>
			<circle cx=cx.clone() cy=cy r=format_number(NODE_RADIUS) />
			<text
				x=cx
				y=label_y
				text-anchor="middle"
				font-size=format_number(LABEL_SIZE)
			>
				{node.id}
			</text>
		</g>
	}
}
