//! Read-only renderings of [LabeledGraph](crate::graph::LabeledGraph).
//!
//! All of them walk vertices in insertion order and then edges in the order of
//! [LabeledGraph::edges](crate::graph::LabeledGraph::edges), so undirected
//! edges are written once, from the smaller vertex id to the larger one.

pub mod graphviz;
pub mod petgraph_view;
pub mod text;
