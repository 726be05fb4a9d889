//! Reusable UI components.

pub mod grid_graph;
