use leptos::prelude::*;
use log::error;

use crate::components::grid_graph::{GraphModel, GridGraph, RoutingStrategy};

const SAMPLE_GRAPH: &str = r#"{
	"nodes": [
		{"id": "A", "x": 0, "y": 0},
		{"id": "B", "x": 4, "y": 2},
		{"id": "C", "x": 0, "y": 5},
		{"id": "D", "x": 3, "y": 3},
		{"id": "E", "x": 6, "y": 0},
		{"id": "F", "x": 5, "y": 5},
		{"id": "G", "x": 2, "y": 1}
	],
	"edges": [
		{"from": "A", "to": "B"},
		{"from": "A", "to": "C"},
		{"from": "A", "to": "D"},
		{"from": "B", "to": "E"},
		{"from": "F", "to": "G"},
		{"from": "C", "to": "F"},
		{"from": "E", "to": "F"}
	]
}"#;

/// Parse the bundled sample graph. A bad sample yields an empty graph, which
/// the component reports through the error boundary.
fn sample_graph() -> GraphModel {
	GraphModel::from_json(SAMPLE_GRAPH).unwrap_or_else(|e| {
		error!("sample graph: {e}");
		GraphModel::default()
	})
}

/// Default Home Page
#[component]
pub fn Home() -> impl IntoView {
	let graph = Signal::derive(sample_graph);
	let strategy = RwSignal::new(RoutingStrategy::default());
	let clicked = RwSignal::new(None::<String>);

	let toggle = move |_| {
		strategy.update(|s| {
			*s = match s {
				RoutingStrategy::Kink => RoutingStrategy::Hook,
				RoutingStrategy::Hook => RoutingStrategy::Kink,
			}
		})
	};

	view! {
		<ErrorBoundary fallback=|errors| {
			view! {
				<div class="grid-graph-error">
					<h2>"Graph could not be rendered"</h2>
					<ul>
						{move || {
							errors
								.get()
								.into_iter()
								.map(|(_, e)| view! { <li>{e.to_string()}</li> })
								.collect_view()
						}}
					</ul>
				</div>
			}
		}>
			<div class="grid-graph-page">
				<h1>"Grid Graph"</h1>
				<p class="subtitle">
					"Routing: " {move || strategy.get().name()} " "
					<button on:click=toggle>"Switch routing"</button>
				</p>
				<GridGraph
					graph=graph
					strategy=strategy
					on_node_click=Callback::new(move |id: String| clicked.set(Some(id)))
				/>
				<p class="selection">
					{move || match clicked.get() {
						Some(id) => format!("Last clicked: {id}"),
						None => "Click a node".to_owned(),
					}}
				</p>
			</div>
		</ErrorBoundary>
	}
}
