//! Grid graph rendered as SVG: bounds, viewport and edge routing.

mod component;
mod error;
mod render;
mod routing;
mod state;
mod types;

pub use component::{GridGraph, NODE_RADIUS};
pub use error::{GraphError, Result};
pub use render::{format_number, path_data};
pub use routing::{HOOK_LENGTH, RoutingStrategy};
pub use state::{Bounds, GraphRenderer, VIEWPORT_MARGIN};
pub use types::{GraphModel, GridEdge, GridNode, Point};
