use super::GraphId;

/// How a [LabeledGraph](super::LabeledGraph) is built.
///
/// ```rust
/// use labgraph::graph::*;
///
/// let opts = GraphOptions::new().id(GraphId(3)).undirected(false);
/// let g = LabeledGraph::<char, char>::with_options(opts);
/// assert_eq!(g.id(), Some(GraphId(3)));
/// assert!(!g.is_undirected());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GraphOptions {
    /// `None` for a graph outside any dataset.
    pub id: Option<GraphId>,
    /// Undirected graphs mirror every edge. Defaults to `true`.
    pub undirected: bool,
    /// Whether edge ids come from a per-graph counter instead of callers. Defaults to `true`.
    pub auto_edge_id: bool,
}

impl Default for GraphOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphOptions {
    pub fn new() -> Self {
        Self {
            id: None,
            undirected: true,
            auto_edge_id: true,
        }
    }

    pub fn id(mut self, id: GraphId) -> Self {
        self.id = Some(id);
        self
    }

    pub fn undirected(mut self, undirected: bool) -> Self {
        self.undirected = undirected;
        self
    }

    pub fn auto_edge_id(mut self, auto: bool) -> Self {
        self.auto_edge_id = auto;
        self
    }
}
