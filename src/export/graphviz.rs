//! Visualize labeled graphs in the graphviz format.
use crate::graph::*;
use std::hash::Hash;

impl<VL, EL> LabeledGraph<VL, EL>
where
    VL: Hash + Eq,
    EL: Hash + Eq,
{
    /**
     * Dumps the graph to a `std::io::Write` object in the graphviz format.
     *
     * Vertices are named by their ids.
     * `vertex_attr` and `edge_attr` provide optional graphviz attributes.
     *
     * # Examples
     *
     * ```rust
     * use labgraph::graph::*;
     *
     * let mut g = LabeledGraph::<char, char>::undirected();
     * g.add_vertex(VertexId(0), Some('A'));
     * g.add_vertex(VertexId(1), Some('B'));
     * g.add_edge(None, VertexId(1), VertexId(0), Some('x')).unwrap();
     * let trial = {
     *     let mut buf = vec![];
     *     g.dump_in_graphviz(
     *         &mut buf,
     *         "trial",
     *         |v| v.label().map(|l| format!("label={}", l)),
     *         |e| e.label.map(|l| format!("label={}", l)),
     *     )
     *     .unwrap();
     *     String::from_utf8(buf).unwrap()
     * };
     * assert_eq!(
     *     trial,
     *     r#"graph trial {
     *   0 [label=A] ;
     *   1 [label=B] ;
     *   0 -- 1 [label=x] ;
     * }
     * "#
     * );
     * ```
     */
    pub fn dump_in_graphviz<W, FV, FE>(
        &self,
        out: &mut W,
        graph_name: &str,
        vertex_attr: FV,
        edge_attr: FE,
    ) -> std::io::Result<()>
    where
        W: std::io::Write,
        FV: Fn(&Vertex<VL, EL>) -> Option<String>,
        FE: Fn(&Edge<EL>) -> Option<String>,
    {
        if self.is_undirected() {
            writeln!(out, "graph {} {{", graph_name)?;
        } else {
            writeln!(out, "digraph {} {{", graph_name)?;
        }
        for v in self.vertices() {
            if let Some(attr) = vertex_attr(v) {
                writeln!(out, "  {} [{}] ;", v.id(), attr)?;
            } else {
                writeln!(out, "  {} ;", v.id())?;
            }
        }
        let dir = if self.is_undirected() { "--" } else { "->" };
        for e in self.edges() {
            if let Some(attr) = edge_attr(e) {
                writeln!(out, "  {} {} {} [{}] ;", e.from, dir, e.to, attr)?;
            } else {
                writeln!(out, "  {} {} {} ;", e.from, dir, e.to)?;
            }
        }
        writeln!(out, "}}")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::graph::*;

    #[derive(Debug, Clone, PartialEq, Eq, Hash)]
    enum Shape {
        Default,
        Rectangle,
    }

    #[derive(Debug, Clone, PartialEq, Eq, Hash)]
    enum Color {
        Default,
        Red,
    }

    #[test]
    fn directed_graph_to_graphviz() {
        let mut g = LabeledGraph::<Shape, Color>::directed();
        g.add_vertex(VertexId(0), Some(Shape::Default));
        g.add_vertex(VertexId(1), Some(Shape::Rectangle));
        g.add_edge(None, VertexId(0), VertexId(1), Some(Color::Red))
            .unwrap();
        g.add_edge(None, VertexId(0), VertexId(0), Some(Color::Default))
            .unwrap();
        let trial = {
            let mut buf = vec![];
            g.dump_in_graphviz(
                &mut buf,
                "trial",
                |v| match v.label() {
                    Some(Shape::Rectangle) => Some("shape=rectangle".to_owned()),
                    _ => None,
                },
                |e| match e.label {
                    Some(Color::Red) => Some("color=red".to_owned()),
                    _ => None,
                },
            )
            .unwrap();
            String::from_utf8(buf).unwrap()
        };
        assert_eq!(
            trial,
            r#"digraph trial {
  0 ;
  1 [shape=rectangle] ;
  0 -> 1 [color=red] ;
  0 -> 0 ;
}
"#
        );
    }

    #[test]
    fn undirected_graph_to_graphviz() {
        let mut g = LabeledGraph::<Shape, Color>::undirected();
        g.add_vertex(VertexId(0), None);
        g.add_vertex(VertexId(1), None);
        g.add_vertex(VertexId(2), None);
        g.add_edge(None, VertexId(2), VertexId(1), None).unwrap();
        g.add_edge(None, VertexId(0), VertexId(2), Some(Color::Red))
            .unwrap();
        let trial = {
            let mut buf = vec![];
            g.dump_in_graphviz(&mut buf, "trial", |_| None, |_| None)
                .unwrap();
            String::from_utf8(buf).unwrap()
        };
        assert_eq!(
            trial,
            r#"graph trial {
  0 ;
  1 ;
  2 ;
  0 -- 2 ;
  1 -- 2 ;
}
"#
        );
    }
}
