use super::VertexId;

/// ID for edges, which are essentially `usize`.
///
/// Both arcs of an undirected edge share one `EdgeId`.
#[derive(Debug, Clone, Copy, Eq, PartialEq, PartialOrd, Ord, Hash)]
pub struct EdgeId(pub usize);

/// A factory to generate `EdgeId` uniquely.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeIdFactory(usize);

/// A directed arc owned by its source vertex.
///
/// `id` is `None` only when the graph does not assign edge ids itself and the
/// caller supplied none. `label` is `None` for unlabeled edges.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Edge<EL> {
    pub id: Option<EdgeId>,
    pub from: VertexId,
    pub to: VertexId,
    pub label: Option<EL>,
}

impl Default for EdgeIdFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl EdgeIdFactory {
    pub fn new() -> Self {
        Self(0)
    }

    pub fn one_more(&mut self) -> EdgeId {
        let cur = self.0;
        self.0 += 1;
        EdgeId(cur)
    }

    /// The id the next call to `one_more` will hand out.
    pub fn peek(&self) -> EdgeId {
        EdgeId(self.0)
    }
}

impl EdgeId {
    pub fn new(x: usize) -> Self {
        Self(x)
    }

    pub fn to_raw(&self) -> usize {
        self.0
    }
}

impl std::fmt::Display for EdgeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl<EL> Edge<EL> {
    pub fn new(id: Option<EdgeId>, from: VertexId, to: VertexId, label: Option<EL>) -> Self {
        Self {
            id,
            from,
            to,
            label,
        }
    }

    /// The same edge seen from the other endpoint.
    pub fn mirrored(&self) -> Self
    where
        EL: Clone,
    {
        Self {
            id: self.id,
            from: self.to,
            to: self.from,
            label: self.label.clone(),
        }
    }

    pub fn endpoints(&self) -> (VertexId, VertexId) {
        (self.from, self.to)
    }

    pub fn is_self_loop(&self) -> bool {
        self.from == self.to
    }
}
