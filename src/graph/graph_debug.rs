use crate::graph::*;
use std::hash::Hash;

/// Inspects a graph vertex by vertex, with customized indentation.
///
/// Every arc is listed under its source, so undirected edges show up twice.
pub struct GraphDebug<'a, VL, EL>
where
    VL: Hash + Eq,
    EL: Hash + Eq,
{
    graph: &'a LabeledGraph<VL, EL>,
    init_indent: usize,
    indent_step: usize,
}

impl<'a, VL, EL> GraphDebug<'a, VL, EL>
where
    VL: Hash + Eq,
    EL: Hash + Eq,
{
    pub fn new(graph: &'a LabeledGraph<VL, EL>) -> Self {
        Self {
            graph,
            init_indent: 0,
            indent_step: 2,
        }
    }

    pub fn indent(mut self, init: usize, step: usize) -> Self {
        self.init_indent = init;
        self.indent_step = step;
        self
    }

    fn display_indent(&self, f: &mut std::fmt::Formatter<'_>, level: usize) -> std::fmt::Result {
        let indention = self.init_indent + self.indent_step * level;
        for _ in 0..indention {
            write!(f, " ")?;
        }
        Ok(())
    }
}

impl<'a, VL, EL> std::fmt::Debug for GraphDebug<'a, VL, EL>
where
    VL: Hash + Eq + std::fmt::Debug,
    EL: Hash + Eq + std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for v in self.graph.vertices() {
            self.display_indent(f, 0)?;
            writeln!(f, "{:?}({:?})", v.id(), v.label())?;
            for e in v.edges() {
                self.display_indent(f, 1)?;
                writeln!(f, "--{:?}({:?})-> {:?}", e.id, e.label, e.to)?;
            }
        }
        Ok(())
    }
}

impl<VL, EL> LabeledGraph<VL, EL>
where
    VL: Hash + Eq,
    EL: Hash + Eq,
{
    pub fn debug(&self) -> GraphDebug<'_, VL, EL> {
        GraphDebug::new(self)
    }
}

#[cfg(test)]
mod tests {
    use crate::graph::*;

    #[test]
    fn indented_listing() {
        let mut g = LabeledGraph::<char, char>::directed();
        g.add_vertex(VertexId(0), Some('A'));
        g.add_vertex(VertexId(1), None);
        g.add_edge(None, VertexId(0), VertexId(1), Some('x'))
            .unwrap();
        let trial = format!("{:?}", g.debug().indent(1, 3));
        assert_eq!(
            trial,
            " VertexId(0)(Some('A'))\n    --Some(EdgeId(0))(Some('x'))-> VertexId(1)\n VertexId(1)(None)\n"
        );
    }
}
