//! The line-oriented dump consumed by offline graph-mining tools.
//!
//! ```plain
//! t # <graph id>
//! v <vertex id> <vertex label>
//! e <from> <to> <edge label>
//! ```
//!
//! Vacant graph ids and labels are written as `-1`.
//!
//! ```rust
//! use labgraph::graph::*;
//!
//! let mut g = LabeledGraph::<u32, u32>::with_options(GraphOptions::new().id(GraphId(0)));
//! g.add_vertex(VertexId(0), Some(2));
//! g.add_vertex(VertexId(1), None);
//! g.add_edge(None, VertexId(1), VertexId(0), Some(5)).unwrap();
//! assert_eq!(g.to_string(), "t # 0\nv 0 2\nv 1 -1\ne 0 1 5\n");
//! ```
use crate::graph::*;
use std::fmt::Display;
use std::hash::Hash;

/// Displays a value, or `-1` in its absence.
pub struct OrVacant<'a, T>(pub Option<&'a T>);

impl<'a, T> Display for OrVacant<'a, T>
where
    T: Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            Some(x) => write!(f, "{}", x),
            None => write!(f, "-1"),
        }
    }
}

impl<VL, EL> Display for LabeledGraph<VL, EL>
where
    VL: Hash + Eq + Display,
    EL: Hash + Eq + Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "t # {}", OrVacant(self.id().as_ref()))?;
        for v in self.vertices() {
            writeln!(f, "v {} {}", v.id(), OrVacant(v.label()))?;
        }
        for e in self.edges() {
            writeln!(f, "e {} {} {}", e.from, e.to, OrVacant(e.label.as_ref()))?;
        }
        Ok(())
    }
}

impl<VL, EL> LabeledGraph<VL, EL>
where
    VL: Hash + Eq + Display,
    EL: Hash + Eq + Display,
{
    /// Writes the same dump as `Display` to a `std::io::Write` object.
    pub fn write_text<W>(&self, out: &mut W) -> std::io::Result<()>
    where
        W: std::io::Write,
    {
        write!(out, "{}", self)
    }
}
