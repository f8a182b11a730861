use super::{Edge, EdgeId};
use ahash::RandomState;
use indexmap::{IndexMap, IndexSet};

/// ID for vertices, chosen by callers.
#[derive(Debug, Clone, Copy, Eq, PartialEq, PartialOrd, Ord, Hash)]
pub struct VertexId(pub usize);

/// ID for a graph inside a multi-graph dataset.
#[derive(Debug, Clone, Copy, Eq, PartialEq, PartialOrd, Ord, Hash)]
pub struct GraphId(pub usize);

impl VertexId {
    pub fn new(x: usize) -> Self {
        Self(x)
    }

    pub fn to_raw(&self) -> usize {
        self.0
    }
}

impl std::fmt::Display for VertexId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::fmt::Display for GraphId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A labeled vertex and the arcs leaving it.
///
/// Vertices are only reachable through [LabeledGraph](super::LabeledGraph),
/// which keeps them in step with its label indices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vertex<VL, EL> {
    pub(crate) id: VertexId,
    pub(crate) label: Option<VL>,
    /// Out-going arcs keyed by their sinks.
    pub(crate) edges: IndexMap<VertexId, Edge<EL>, RandomState>,
    /// Vertices owning an arc into this one.
    pub(crate) sources: IndexSet<VertexId, RandomState>,
}

impl<VL, EL> Vertex<VL, EL> {
    pub(crate) fn new(id: VertexId, label: Option<VL>) -> Self {
        Self {
            id,
            label,
            edges: IndexMap::with_hasher(RandomState::new()),
            sources: IndexSet::with_hasher(RandomState::new()),
        }
    }

    pub(crate) fn add_edge(
        &mut self,
        id: Option<EdgeId>,
        to: VertexId,
        label: Option<EL>,
    ) -> &Edge<EL> {
        let edge = Edge::new(id, self.id, to, label);
        self.edges.entry(to).or_insert(edge)
    }

    pub fn id(&self) -> VertexId {
        self.id
    }

    pub fn label(&self) -> Option<&VL> {
        self.label.as_ref()
    }

    /// Iterates over out-going arcs in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = &Edge<EL>> + '_ {
        self.edges.values()
    }

    /// The arc from this vertex to `to`, if any.
    pub fn edge_to(&self, to: &VertexId) -> Option<&Edge<EL>> {
        self.edges.get(to)
    }

    /// Iterates over `(sink, label)` of out-going arcs.
    pub fn neighbors(&self) -> impl Iterator<Item = (VertexId, Option<&EL>)> + '_ {
        self.edges.iter().map(|(to, e)| (*to, e.label.as_ref()))
    }

    /// Iterates over vertices with an arc into this one.
    pub fn sources(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.sources.iter().copied()
    }

    pub fn out_degree(&self) -> usize {
        self.edges.len()
    }

    pub fn in_degree(&self) -> usize {
        self.sources.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_edge_keeps_the_first_arc() {
        let mut v = Vertex::<char, char>::new(VertexId(0), Some('A'));
        v.add_edge(Some(EdgeId(0)), VertexId(1), Some('x'));
        let e = v.add_edge(Some(EdgeId(1)), VertexId(1), Some('y'));
        assert_eq!(e.id, Some(EdgeId(0)));
        assert_eq!(e.label, Some('x'));
        assert_eq!(v.out_degree(), 1);
        assert_eq!(v.edge_to(&VertexId(1)).map(|e| e.from), Some(VertexId(0)));
    }

    #[test]
    fn neighbors_follow_insertion_order() {
        let mut v = Vertex::<char, u8>::new(VertexId(5), None);
        v.add_edge(None, VertexId(9), Some(1));
        v.add_edge(None, VertexId(2), None);
        v.add_edge(None, VertexId(7), Some(3));
        let trial: Vec<_> = v.neighbors().collect();
        assert_eq!(
            trial,
            vec![
                (VertexId(9), Some(&1)),
                (VertexId(2), None),
                (VertexId(7), Some(&3)),
            ]
        );
        assert_eq!(v.label(), None);
    }
}
