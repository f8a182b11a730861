use super::label_index::LabelIndex;
use crate::graph::*;
use ahash::RandomState;
use indexmap::IndexMap;
use std::hash::Hash;
use tracing::{debug, trace};

/// A mutable graph with labeled vertices and edges, and reverse indices from
/// labels to the vertices and arcs carrying them.
///
/// * `VL`: labels for vertices.
/// * `EL`: labels for edges.
///
/// Both kinds of labels are optional; `None` stands for "unlabeled" and is
/// indexed like any other label.
///
/// An undirected graph stores every edge as two mirrored arcs with one id and
/// one label. At most one arc exists per ordered pair of vertices.
///
/// | operation                 | cost                                            |
/// | ------------------------- | ----------------------------------------------- |
/// | `add_vertex`              | `O(1)`                                          |
/// | `add_edge`                | `O(1)`                                          |
/// | `remove_edge`             | `O(deg(from) + deg(to))`                        |
/// | `remove_vertex`           | `O(sum of degrees of its neighbors)`            |
/// | `remove_vertex_with_vlb`  | `remove_vertex` for each vertex of the label    |
/// | `remove_edge_with_elb`    | `remove_edge` for each arc of the label         |
/// | `remove_edge_with_vevlb`  | `O(arcs of the edge label)` plus removals       |
/// | `vertex_count`            | `O(1)`                                          |
/// | `edge_count`              | `O(|E|)`                                        |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabeledGraph<VL, EL>
where
    VL: Hash + Eq,
    EL: Hash + Eq,
{
    id: Option<GraphId>,
    undirected: bool,
    auto_edge_id: bool,
    vertices: IndexMap<VertexId, Vertex<VL, EL>, RandomState>,
    edge_label_index: LabelIndex<Option<EL>, (VertexId, VertexId)>,
    vertex_label_index: LabelIndex<Option<VL>, VertexId>,
    eid_factory: EdgeIdFactory,
}

impl<VL, EL> Default for LabeledGraph<VL, EL>
where
    VL: Hash + Eq + Clone,
    EL: Hash + Eq + Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<VL, EL> LabeledGraph<VL, EL>
where
    VL: Hash + Eq + Clone,
    EL: Hash + Eq + Clone,
{
    /// Creates an empty undirected graph which assigns edge ids by itself.
    pub fn new() -> Self {
        Self::with_options(GraphOptions::default())
    }

    /// Creates an empty directed graph which assigns edge ids by itself.
    pub fn directed() -> Self {
        Self::with_options(GraphOptions::new().undirected(false))
    }

    /// Creates an empty undirected graph which assigns edge ids by itself.
    pub fn undirected() -> Self {
        Self::with_options(GraphOptions::new().undirected(true))
    }

    pub fn with_options(opts: GraphOptions) -> Self {
        Self {
            id: opts.id,
            undirected: opts.undirected,
            auto_edge_id: opts.auto_edge_id,
            vertices: IndexMap::with_hasher(RandomState::new()),
            edge_label_index: LabelIndex::new(),
            vertex_label_index: LabelIndex::new(),
            eid_factory: EdgeIdFactory::new(),
        }
    }

    /// Adds a vertex unless one with the same id exists.
    ///
    /// An existing vertex keeps its label. Returns whether the vertex was added.
    pub fn add_vertex(&mut self, vid: VertexId, label: Option<VL>) -> bool {
        if self.vertices.contains_key(&vid) {
            debug!(vertex = %vid, "vertex exists, insertion ignored");
            return false;
        }
        self.vertex_label_index.insert(label.clone(), vid);
        self.vertices.insert(vid, Vertex::new(vid, label));
        trace!(vertex = %vid, "vertex added");
        true
    }

    /// Adds an edge from `from` to `to` unless one exists.
    ///
    /// If the graph assigns edge ids, `eid` is ignored.
    /// Undirected graphs also get the mirrored arc, with the same id and label.
    /// Returns whether the edge was added; an existing edge is left untouched.
    ///
    /// Fails if either endpoint is not in the graph.
    pub fn add_edge(
        &mut self,
        eid: Option<EdgeId>,
        from: VertexId,
        to: VertexId,
        label: Option<EL>,
    ) -> Result<bool> {
        self.check_vertex(&from)?;
        self.check_vertex(&to)?;
        if self.contains_edge(&from, &to) {
            debug!(%from, %to, "edge exists, insertion ignored");
            return Ok(false);
        }
        let eid = if self.auto_edge_id {
            Some(self.eid_factory.one_more())
        } else {
            eid
        };
        self.link(eid, from, to, label.clone());
        if self.undirected && from != to {
            self.link(eid, to, from, label);
        }
        trace!(edge = ?eid, %from, %to, "edge added");
        Ok(true)
    }

    /// Removes a vertex together with every edge touching it.
    ///
    /// Returns the removed edges.
    /// For undirected graphs, every edge is reported once, leaving the removed vertex.
    /// For directed graphs, in-edges come first and out-edges follow.
    pub fn remove_vertex(&mut self, vid: VertexId) -> Result<Vec<Edge<EL>>> {
        let sources: Vec<VertexId> = self
            .vertex(&vid)
            .ok_or(GraphError::VertexNotFound(vid))?
            .sources()
            .filter(|src| *src != vid)
            .collect();
        let mut removed = vec![];
        for src in sources {
            if let Some(edge) = self.unlink(src, vid) {
                if !self.undirected {
                    removed.push(edge);
                }
            }
        }
        let sinks: Vec<VertexId> = self
            .vertex(&vid)
            .map(|v| v.edges.keys().copied().collect())
            .unwrap_or_default();
        for to in sinks {
            if let Some(edge) = self.unlink(vid, to) {
                removed.push(edge);
            }
        }
        if let Some(vertex) = self.vertices.shift_remove(&vid) {
            self.vertex_label_index.remove(&vertex.label, &vid);
        }
        trace!(vertex = %vid, edges = removed.len(), "vertex removed");
        Ok(removed)
    }

    /// Removes every vertex labeled `label` and returns their ids.
    pub fn remove_vertex_with_vlb(&mut self, label: &Option<VL>) -> Vec<VertexId> {
        let vids = self.vertex_label_index.snapshot(label);
        let removed: Vec<_> = vids
            .into_iter()
            .filter(|vid| self.remove_vertex(*vid).is_ok())
            .collect();
        debug!(vertices = removed.len(), "vertices removed by label");
        removed
    }

    /// Removes the edge from `from` to `to`, and its mirror in undirected graphs.
    pub fn remove_edge(&mut self, from: VertexId, to: VertexId) -> Result<Edge<EL>> {
        let edge = self
            .unlink(from, to)
            .ok_or(GraphError::EdgeNotFound { from, to })?;
        if self.undirected && from != to {
            self.unlink(to, from);
        }
        trace!(edge = ?edge.id, %from, %to, "edge removed");
        Ok(edge)
    }

    /// Removes every edge labeled `label` and returns them.
    ///
    /// An undirected edge is reported once.
    pub fn remove_edge_with_elb(&mut self, label: &Option<EL>) -> Vec<Edge<EL>> {
        let pairs = self.edge_label_index.snapshot(label);
        let removed = self.remove_pairs(pairs);
        debug!(edges = removed.len(), "edges removed by label");
        removed
    }

    /// Removes every arc labeled `elb` whose source is labeled `vlb1` and
    /// whose sink is labeled `vlb2`, and returns them.
    ///
    /// Arcs are matched in their stored orientation.
    /// As an undirected graph stores both orientations, an undirected edge is
    /// removed if either of them matches.
    pub fn remove_edge_with_vevlb(
        &mut self,
        vevlb: &(Option<VL>, Option<EL>, Option<VL>),
    ) -> Vec<Edge<EL>> {
        let (vlb1, elb, vlb2) = vevlb;
        let pairs: Vec<_> = self
            .edge_label_index
            .members(elb)
            .filter(|(from, to)| {
                self.vertex_label_index.contains(vlb1, from)
                    && self.vertex_label_index.contains(vlb2, to)
            })
            .collect();
        let removed = self.remove_pairs(pairs);
        debug!(edges = removed.len(), "edges removed by labels of endpoints and edge");
        removed
    }

    fn remove_pairs(&mut self, pairs: Vec<(VertexId, VertexId)>) -> Vec<Edge<EL>> {
        // a pair is gone already if it mirrors one removed earlier
        pairs
            .into_iter()
            .filter_map(|(from, to)| self.remove_edge(from, to).ok())
            .collect()
    }

    fn check_vertex(&self, vid: &VertexId) -> Result<()> {
        if self.vertices.contains_key(vid) {
            Ok(())
        } else {
            Err(GraphError::VertexNotFound(*vid))
        }
    }

    /// Inserts one arc and indexes it. Both endpoints must exist.
    fn link(&mut self, eid: Option<EdgeId>, from: VertexId, to: VertexId, label: Option<EL>) {
        if let Some(v) = self.vertices.get_mut(&to) {
            v.sources.insert(from);
        }
        if let Some(v) = self.vertices.get_mut(&from) {
            v.add_edge(eid, to, label.clone());
        }
        self.edge_label_index.insert(label, (from, to));
    }

    /// Deletes one arc and drops it from the index.
    fn unlink(&mut self, from: VertexId, to: VertexId) -> Option<Edge<EL>> {
        let edge = self.vertices.get_mut(&from)?.edges.shift_remove(&to)?;
        if let Some(v) = self.vertices.get_mut(&to) {
            v.sources.shift_remove(&from);
        }
        self.edge_label_index.remove(&edge.label, &(from, to));
        Some(edge)
    }
}

impl<VL, EL> LabeledGraph<VL, EL>
where
    VL: Hash + Eq,
    EL: Hash + Eq,
{
    pub fn id(&self) -> Option<GraphId> {
        self.id
    }

    pub fn is_undirected(&self) -> bool {
        self.undirected
    }

    /// Whether edge ids come from the graph rather than callers.
    pub fn assigns_edge_ids(&self) -> bool {
        self.auto_edge_id
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Total number of edges. An undirected edge counts once.
    pub fn edge_count(&self) -> usize {
        let undirected = self.undirected;
        self.vertices
            .values()
            .flat_map(|v| v.edges.values())
            .filter(|e| !undirected || e.from <= e.to)
            .count()
    }

    pub fn contains_vertex(&self, vid: &VertexId) -> bool {
        self.vertices.contains_key(vid)
    }

    pub fn contains_edge(&self, from: &VertexId, to: &VertexId) -> bool {
        self.edge(from, to).is_some()
    }

    pub fn vertex(&self, vid: &VertexId) -> Option<&Vertex<VL, EL>> {
        self.vertices.get(vid)
    }

    pub fn edge(&self, from: &VertexId, to: &VertexId) -> Option<&Edge<EL>> {
        self.vertices.get(from).and_then(|v| v.edges.get(to))
    }

    /// Iterates over vertices in insertion order.
    pub fn vertices(&self) -> impl Iterator<Item = &Vertex<VL, EL>> + '_ {
        self.vertices.values()
    }

    /// Iterates over edges in display order.
    ///
    /// Arcs come vertex by vertex, in insertion order.
    /// For undirected graphs, only arcs with `from < to` are yielded, so every
    /// edge shows up once. Undirected self-loops are therefore not yielded.
    pub fn edges(&self) -> impl Iterator<Item = &Edge<EL>> + '_ {
        let undirected = self.undirected;
        self.vertices
            .values()
            .flat_map(|v| v.edges.values())
            .filter(move |e| !undirected || e.from < e.to)
    }

    /// Iterates over ids of vertices labeled `label`.
    pub fn vertices_with_label(&self, label: &Option<VL>) -> impl Iterator<Item = VertexId> + '_ {
        self.vertex_label_index.members(label)
    }

    /// Iterates over `(from, to)` of arcs labeled `label`.
    ///
    /// Both orientations of undirected edges are present.
    pub fn edges_with_label(
        &self,
        label: &Option<EL>,
    ) -> impl Iterator<Item = (VertexId, VertexId)> + '_ {
        self.edge_label_index.members(label)
    }

    /// Iterates over vertex labels carried by at least one vertex.
    pub fn vertex_labels(&self) -> impl Iterator<Item = &Option<VL>> + '_ {
        self.vertex_label_index.labels()
    }

    /// Iterates over edge labels carried by at least one edge.
    pub fn edge_labels(&self) -> impl Iterator<Item = &Option<EL>> + '_ {
        self.edge_label_index.labels()
    }
}

#[cfg(test)]
impl<VL, EL> LabeledGraph<VL, EL>
where
    VL: Hash + Eq + Clone + std::fmt::Debug,
    EL: Hash + Eq + Clone + std::fmt::Debug,
{
    /// Checks adjacency, mirrors, and both label indices against each other.
    pub(crate) fn assert_consistent(&self) {
        for (vid, v) in self.vertices.iter() {
            assert_eq!(v.id, *vid);
            assert!(self.vertex_label_index.contains(&v.label, vid));
            for (to, e) in v.edges.iter() {
                assert_eq!(e.from, *vid);
                assert_eq!(e.to, *to);
                let sink = self.vertices.get(to).expect("dangling arc");
                assert!(sink.sources.contains(vid));
                assert!(self.edge_label_index.contains(&e.label, &(*vid, *to)));
                if self.undirected {
                    assert_eq!(sink.edges.get(vid), Some(&e.mirrored()));
                }
            }
            for src in v.sources.iter() {
                assert!(self.vertices[src].edges.contains_key(vid));
            }
        }
        for label in self.vertex_label_index.labels() {
            assert!(self.vertex_label_index.members(label).next().is_some());
            for vid in self.vertex_label_index.members(label) {
                assert_eq!(&self.vertices[&vid].label, label);
            }
        }
        for label in self.edge_label_index.labels() {
            assert!(self.edge_label_index.members(label).next().is_some());
            for (from, to) in self.edge_label_index.members(label) {
                assert_eq!(&self.vertices[&from].edges[&to].label, label);
            }
        }
    }
}
