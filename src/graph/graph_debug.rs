use crate::graph::*;

/// A default implementation of inspecting into a graph with customized indentation.
///
/// Each vertex is printed on its own line, followed by its outgoing edges, one level deeper.
pub struct GraphDebug<'a, G>
where
    G: QueryableGraph,
{
    graph: &'a G,
    init_indent: usize,
    indent_step: usize,
}

impl<'a, G> GraphDebug<'a, G>
where
    G: QueryableGraph,
{
    pub fn new(graph: &'a G) -> Self {
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

impl<'a, G> std::fmt::Debug for GraphDebug<'a, G>
where
    G: QueryableGraph,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let directed = self.graph.graph_type().is_directed();
        for v in self.graph.vertex_set() {
            self.display_indent(f, 0)?;
            writeln!(f, "{:?}", v)?;
            let edges = self.graph.outgoing_edges_of(&v).unwrap_or_default();
            for e in edges {
                let (src, snk) = match (self.graph.edge_source(&e), self.graph.edge_target(&e)) {
                    (Ok(src), Ok(snk)) => (src, snk),
                    _ => continue,
                };
                let other = if !directed && snk == v { src } else { snk };
                self.display_indent(f, 1)?;
                writeln!(f, "--{:?}-> {:?}", e, other)?;
            }
        }
        Ok(())
    }
}
