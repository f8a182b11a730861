//! Hands labeled graphs over to `petgraph`, e.g. for layout or rendering.
use crate::graph::*;
use ahash::RandomState;
use petgraph::{
    graph::{Graph, NodeIndex},
    EdgeType,
};
use std::collections::HashMap;
use std::hash::Hash;

/// A `petgraph` copy of a labeled graph, weighted by labels.
pub struct PetgraphView<VL, EL, Ty>
where
    Ty: EdgeType,
{
    pub graph: Graph<Option<VL>, Option<EL>, Ty>,
    /// Where each vertex went.
    pub nodes: HashMap<VertexId, NodeIndex, RandomState>,
}

impl<VL, EL> LabeledGraph<VL, EL>
where
    VL: Hash + Eq + Clone,
    EL: Hash + Eq + Clone,
{
    /// Copies vertices and edges into a `petgraph::Graph`.
    ///
    /// Pick `petgraph::Undirected` for undirected graphs, where each edge is
    /// copied once, and `petgraph::Directed` otherwise.
    pub fn to_petgraph<Ty>(&self) -> PetgraphView<VL, EL, Ty>
    where
        Ty: EdgeType,
    {
        let mut graph = Graph::with_capacity(self.vertex_count(), self.edge_count());
        let mut nodes = HashMap::with_hasher(RandomState::new());
        for v in self.vertices() {
            let idx = graph.add_node(v.label().cloned());
            nodes.insert(v.id(), idx);
        }
        for e in self.edges() {
            if let (Some(a), Some(b)) = (nodes.get(&e.from), nodes.get(&e.to)) {
                graph.add_edge(*a, *b, e.label.clone());
            }
        }
        PetgraphView { graph, nodes }
    }
}

#[cfg(test)]
mod tests {
    use crate::graph::*;
    use petgraph::{Directed, Undirected};

    #[test]
    fn undirected_copy() {
        let mut g = LabeledGraph::<char, u8>::undirected();
        g.add_vertex(VertexId(4), Some('A'));
        g.add_vertex(VertexId(2), None);
        g.add_vertex(VertexId(9), Some('B'));
        g.add_edge(None, VertexId(4), VertexId(2), Some(1)).unwrap();
        g.add_edge(None, VertexId(9), VertexId(4), None).unwrap();
        let view = g.to_petgraph::<Undirected>();
        assert_eq!(view.graph.node_count(), 3);
        assert_eq!(view.graph.edge_count(), 2);
        let a = view.nodes[&VertexId(4)];
        let b = view.nodes[&VertexId(2)];
        let c = view.nodes[&VertexId(9)];
        assert_eq!(view.graph[a], Some('A'));
        assert_eq!(view.graph[b], None);
        let ab = view.graph.find_edge(b, a).unwrap();
        assert_eq!(view.graph[ab], Some(1));
        let ac = view.graph.find_edge(a, c).unwrap();
        assert_eq!(view.graph[ac], None);
    }

    #[test]
    fn directed_copy() {
        let mut g = LabeledGraph::<char, u8>::directed();
        g.add_vertex(VertexId(0), None);
        g.add_vertex(VertexId(1), None);
        g.add_edge(None, VertexId(1), VertexId(0), Some(3)).unwrap();
        let view = g.to_petgraph::<Directed>();
        let a = view.nodes[&VertexId(0)];
        let b = view.nodes[&VertexId(1)];
        assert!(view.graph.find_edge(b, a).is_some());
        assert!(view.graph.find_edge(a, b).is_none());
    }
}
