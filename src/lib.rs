//! An in-memory, mutable graph with labeled vertices and edges.
//!
//! Besides adjacency, [graph::LabeledGraph] maintains reverse indices from
//! vertex labels to vertices and from edge labels to edges, and removes
//! vertices or edges in bulk by label.
//! It is meant as the working graph of graph-mining and pattern-search code,
//! which builds graphs element by element and then prunes them by label.
//!
//! ```rust
//! use labgraph::graph::*;
//!
//! let mut g = LabeledGraph::<char, char>::undirected();
//! g.add_vertex(VertexId(0), Some('A'));
//! g.add_vertex(VertexId(1), Some('B'));
//! g.add_vertex(VertexId(2), Some('A'));
//! g.add_edge(None, VertexId(0), VertexId(1), Some('x')).unwrap();
//! g.add_edge(None, VertexId(1), VertexId(2), Some('y')).unwrap();
//!
//! g.remove_edge_with_vevlb(&(Some('A'), Some('x'), Some('B')));
//! assert!(!g.contains_edge(&VertexId(1), &VertexId(0)));
//!
//! g.remove_vertex_with_vlb(&Some('A'));
//! assert_eq!(g.vertex_count(), 1);
//! assert_eq!(g.edge_count(), 0);
//! ```

pub mod export;
pub mod graph;
