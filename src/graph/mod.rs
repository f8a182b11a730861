//! Labeled graphs with reverse label indices.
//!
//! # Vertices, edges and labels
//!
//! Vertex ids are chosen by callers. They are essentially `usize`.
//! Edge ids are either handed out by the graph or supplied by callers,
//! see [GraphOptions].
//!
//! Every vertex and every edge carries an optional label.
//! A [LabeledGraph] keeps, besides adjacency, two reverse indices:
//! from vertex labels to vertex ids, and from edge labels to `(from, to)` pairs.
//! All mutations go through [LabeledGraph], so both indices always agree with
//! adjacency. Bulk removals by label are built on these indices.
//!
//! # Directed or undirected
//!
//! The choice is made once, at construction.
//! An undirected edge is stored as two mirrored arcs sharing one id and one label.
//! They are added and removed together.

mod vertex;
pub use self::vertex::*;
mod edge;
pub use self::edge::*;
mod error;
pub use self::error::*;
mod options;
pub use self::options::*;
mod label_index;
mod labeled;
pub use self::labeled::*;
mod graph_debug;
pub use self::graph_debug::*;

#[cfg(test)]
pub use self::tests::*;

#[cfg(test)]
mod tests {
    use crate::graph::*;
    use quickcheck::{Arbitrary, Gen};
    use rs_quickcheck_util::*;

    const VERTEX_RANGE: usize = 8;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum Op {
        AddVertex(VertexId, Option<u8>),
        AddEdge(Option<EdgeId>, VertexId, VertexId, Option<u8>),
        RemoveVertex(VertexId),
        RemoveEdge(VertexId, VertexId),
        RemoveVertexWithVlb(Option<u8>),
        RemoveEdgeWithElb(Option<u8>),
        RemoveEdgeWithVevlb(Option<u8>, Option<u8>, Option<u8>),
    }

    /// Random mutations over a handful of vertex ids and labels,
    /// so that duplicates, misses and shared labels are common.
    #[derive(Clone)]
    pub struct Ops {
        pub ops: Vec<Op>,
    }

    impl std::fmt::Debug for Ops {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "{:?}", self.ops)
        }
    }

    impl Ops {
        pub fn iter(&self) -> impl Iterator<Item = &Op> + '_ {
            self.ops.iter()
        }
    }

    fn gen_vid(g: &mut Gen) -> VertexId {
        VertexId(usize::arbitrary(g) % VERTEX_RANGE)
    }

    fn gen_label(g: &mut Gen) -> Option<u8> {
        match u8::arbitrary(g) % 4 {
            0 => None,
            x => Some(x),
        }
    }

    impl Arbitrary for Ops {
        fn arbitrary(g: &mut Gen) -> Self {
            let ops = gen_bytes(g, b"abcd.", b'.', 0..)
                .iter()
                .map(|_| match u8::arbitrary(g) % 10 {
                    // growth is drawn more often than shrinking
                    0..=2 => Op::AddVertex(gen_vid(g), gen_label(g)),
                    3..=5 => {
                        let eid = Option::<usize>::arbitrary(g).map(EdgeId);
                        Op::AddEdge(eid, gen_vid(g), gen_vid(g), gen_label(g))
                    }
                    6 => Op::RemoveVertex(gen_vid(g)),
                    7 => Op::RemoveEdge(gen_vid(g), gen_vid(g)),
                    8 => match u8::arbitrary(g) % 2 {
                        0 => Op::RemoveVertexWithVlb(gen_label(g)),
                        _ => Op::RemoveEdgeWithElb(gen_label(g)),
                    },
                    9 => Op::RemoveEdgeWithVevlb(gen_label(g), gen_label(g), gen_label(g)),
                    _ => unreachable!(),
                })
                .collect();
            Self { ops }
        }

        fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
            let l = self.ops.len();
            let me = self.clone();
            let it = std::iter::successors(Some(l / 2), move |n| {
                let nxt = (n + l) / 2 + 1;
                if nxt >= l {
                    None
                } else {
                    Some(nxt)
                }
            })
            .map(move |n| {
                let mut res = me.clone();
                res.ops = me.ops[0..n].to_vec();
                res
            });
            Box::new(it)
        }
    }
}
