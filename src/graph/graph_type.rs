use crate::error::{GraphError, GraphResult};
use serde::{Deserialize, Serialize};

/// Whether edges of a graph are directed, undirected, or either.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Topology {
    Directed,
    Undirected,
    Mixed,
}

/// An immutable description of what a graph permits.
///
/// Graphs consult their type on every mutation instead of encoding
/// the combination of capabilities in their own type.
/// Values can only be obtained from presets or [GraphTypeBuilder::build],
/// which rejects contradictory combinations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawGraphType")]
pub struct GraphType {
    topology: Topology,
    weighted: bool,
    multiple_edges: bool,
    self_loops: bool,
    cycles: bool,
    modifiable: bool,
}

#[derive(Deserialize)]
struct RawGraphType {
    topology: Topology,
    weighted: bool,
    multiple_edges: bool,
    self_loops: bool,
    cycles: bool,
    modifiable: bool,
}

impl TryFrom<RawGraphType> for GraphType {
    type Error = GraphError;

    fn try_from(raw: RawGraphType) -> GraphResult<Self> {
        let builder = match raw.topology {
            Topology::Directed => GraphTypeBuilder::directed(),
            Topology::Undirected => GraphTypeBuilder::undirected(),
            Topology::Mixed => GraphTypeBuilder::mixed(),
        };
        builder
            .weighted(raw.weighted)
            .allowing_multiple_edges(raw.multiple_edges)
            .allowing_self_loops(raw.self_loops)
            .allowing_cycles(raw.cycles)
            .modifiable(raw.modifiable)
            .build()
    }
}

impl GraphType {
    const fn preset(topology: Topology, multiple_edges: bool, self_loops: bool) -> Self {
        Self {
            topology,
            weighted: false,
            multiple_edges,
            self_loops,
            cycles: true,
            modifiable: true,
        }
    }

    /// Undirected, no multiple edges, no self-loops.
    pub const fn simple() -> Self {
        Self::preset(Topology::Undirected, false, false)
    }

    /// Undirected, multiple edges, no self-loops.
    pub const fn multigraph() -> Self {
        Self::preset(Topology::Undirected, true, false)
    }

    /// Undirected, multiple edges and self-loops.
    pub const fn pseudograph() -> Self {
        Self::preset(Topology::Undirected, true, true)
    }

    pub const fn directed_simple() -> Self {
        Self::preset(Topology::Directed, false, false)
    }

    pub const fn directed_multigraph() -> Self {
        Self::preset(Topology::Directed, true, false)
    }

    pub const fn directed_pseudograph() -> Self {
        Self::preset(Topology::Directed, true, true)
    }

    /// Directed, no self-loops, and declared free of cycles.
    ///
    /// Acyclicity is a declaration for consumers; the engine does not search for cycles.
    pub const fn directed_acyclic() -> Self {
        Self {
            cycles: false,
            ..Self::preset(Topology::Directed, true, false)
        }
    }

    /// No multiple edges, self-loops allowed.
    pub(crate) const fn single_edges_with_loops(topology: Topology) -> Self {
        Self::preset(topology, false, true)
    }

    pub fn topology(&self) -> Topology {
        self.topology
    }

    pub fn is_directed(&self) -> bool {
        self.topology == Topology::Directed
    }

    pub fn is_undirected(&self) -> bool {
        self.topology == Topology::Undirected
    }

    pub fn is_mixed(&self) -> bool {
        self.topology == Topology::Mixed
    }

    pub fn is_weighted(&self) -> bool {
        self.weighted
    }

    pub fn is_allowing_multiple_edges(&self) -> bool {
        self.multiple_edges
    }

    pub fn is_allowing_self_loops(&self) -> bool {
        self.self_loops
    }

    pub fn is_allowing_cycles(&self) -> bool {
        self.cycles
    }

    pub fn is_modifiable(&self) -> bool {
        self.modifiable
    }

    pub fn is_simple(&self) -> bool {
        !self.multiple_edges && !self.self_loops
    }

    pub fn is_multigraph(&self) -> bool {
        self.multiple_edges && !self.self_loops
    }

    pub fn is_pseudograph(&self) -> bool {
        self.multiple_edges && self.self_loops
    }

    pub fn as_directed(&self) -> Self {
        Self {
            topology: Topology::Directed,
            ..*self
        }
    }

    pub fn as_undirected(&self) -> Self {
        Self {
            topology: Topology::Undirected,
            ..*self
        }
    }

    pub fn as_weighted(&self) -> Self {
        Self {
            weighted: true,
            ..*self
        }
    }

    pub fn as_unweighted(&self) -> Self {
        Self {
            weighted: false,
            ..*self
        }
    }

    pub fn as_modifiable(&self) -> Self {
        Self {
            modifiable: true,
            ..*self
        }
    }

    pub fn as_unmodifiable(&self) -> Self {
        Self {
            modifiable: false,
            ..*self
        }
    }
}

/// Builds a [GraphType] and validates it once.
///
/// ```rust
/// use algograph_store::graph::*;
///
/// let t = GraphTypeBuilder::directed()
///     .weighted(true)
///     .allowing_multiple_edges(true)
///     .build()
///     .unwrap();
/// assert!(t.is_directed());
/// assert!(t.is_weighted());
/// assert!(!t.is_allowing_self_loops());
/// ```
#[derive(Debug, Clone)]
pub struct GraphTypeBuilder {
    directed: bool,
    undirected: bool,
    mixed: bool,
    weighted: bool,
    multiple_edges: bool,
    self_loops: bool,
    cycles: bool,
    modifiable: bool,
}

impl Default for GraphTypeBuilder {
    fn default() -> Self {
        Self {
            directed: false,
            undirected: false,
            mixed: false,
            weighted: false,
            multiple_edges: false,
            self_loops: false,
            cycles: true,
            modifiable: true,
        }
    }
}

impl GraphTypeBuilder {
    /// A builder with no topology chosen yet.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn directed() -> Self {
        Self::new().with_directed(true)
    }

    pub fn undirected() -> Self {
        Self::new().with_undirected(true)
    }

    pub fn mixed() -> Self {
        Self {
            directed: true,
            undirected: true,
            mixed: true,
            ..Self::default()
        }
    }

    /// Starts from an existing type.
    pub fn from_type(t: &GraphType) -> Self {
        let base = match t.topology {
            Topology::Directed => Self::directed(),
            Topology::Undirected => Self::undirected(),
            Topology::Mixed => Self::mixed(),
        };
        base.weighted(t.weighted)
            .allowing_multiple_edges(t.multiple_edges)
            .allowing_self_loops(t.self_loops)
            .allowing_cycles(t.cycles)
            .modifiable(t.modifiable)
    }

    pub fn with_directed(mut self, x: bool) -> Self {
        self.directed = x;
        self
    }

    pub fn with_undirected(mut self, x: bool) -> Self {
        self.undirected = x;
        self
    }

    pub fn weighted(mut self, x: bool) -> Self {
        self.weighted = x;
        self
    }

    pub fn allowing_multiple_edges(mut self, x: bool) -> Self {
        self.multiple_edges = x;
        self
    }

    pub fn allowing_self_loops(mut self, x: bool) -> Self {
        self.self_loops = x;
        self
    }

    pub fn allowing_cycles(mut self, x: bool) -> Self {
        self.cycles = x;
        self
    }

    pub fn modifiable(mut self, x: bool) -> Self {
        self.modifiable = x;
        self
    }

    /// Validates the flags and freezes them into a [GraphType].
    pub fn build(self) -> GraphResult<GraphType> {
        let topology = match (self.directed, self.undirected, self.mixed) {
            (true, true, true) => Topology::Mixed,
            (true, false, false) => Topology::Directed,
            (false, true, false) => Topology::Undirected,
            (true, true, false) => {
                return Err(GraphError::InvalidArgument(
                    "a graph cannot be both directed and undirected unless it is mixed".to_string(),
                ))
            }
            (false, false, _) => {
                return Err(GraphError::InvalidArgument(
                    "a graph must be directed, undirected or mixed".to_string(),
                ))
            }
            _ => {
                return Err(GraphError::InvalidArgument(
                    "a mixed graph must admit both directed and undirected edges".to_string(),
                ))
            }
        };
        if self.self_loops && !self.cycles {
            return Err(GraphError::InvalidArgument(
                "self-loops are cycles, so they cannot be allowed in an acyclic graph".to_string(),
            ));
        }
        Ok(GraphType {
            topology,
            weighted: self.weighted,
            multiple_edges: self.multiple_edges,
            self_loops: self.self_loops,
            cycles: self.cycles,
            modifiable: self.modifiable,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets() {
        let t = GraphType::simple();
        assert!(t.is_undirected());
        assert!(t.is_simple());
        assert!(t.is_modifiable());
        assert!(!t.is_weighted());

        let t = GraphType::directed_pseudograph();
        assert!(t.is_directed());
        assert!(t.is_pseudograph());
        assert!(!t.is_multigraph());

        let t = GraphType::directed_acyclic();
        assert!(!t.is_allowing_cycles());
        assert!(!t.is_allowing_self_loops());
    }

    #[test]
    fn contradictions_are_rejected() {
        let res = GraphTypeBuilder::directed().with_undirected(true).build();
        assert!(matches!(res, Err(GraphError::InvalidArgument(_))));

        let res = GraphTypeBuilder::new().build();
        assert!(matches!(res, Err(GraphError::InvalidArgument(_))));

        let res = GraphTypeBuilder::directed()
            .allowing_self_loops(true)
            .allowing_cycles(false)
            .build();
        assert!(matches!(res, Err(GraphError::InvalidArgument(_))));
    }

    #[test]
    fn mixed() {
        let t = GraphTypeBuilder::mixed().build().unwrap();
        assert!(t.is_mixed());
        assert!(!t.is_directed());
        assert!(!t.is_undirected());
    }

    #[test]
    fn derivations_do_not_touch_the_original() {
        let t = GraphType::simple();
        let w = t.as_weighted().as_directed().as_unmodifiable();
        assert!(w.is_weighted());
        assert!(w.is_directed());
        assert!(!w.is_modifiable());
        assert_eq!(t, GraphType::simple());
        assert_eq!(GraphTypeBuilder::from_type(&w).build().unwrap(), w);
    }

    #[test]
    fn deserialization_validates() {
        let bytes = bincode::serialize(&GraphType::multigraph().as_weighted()).unwrap();
        let t: GraphType = bincode::deserialize(&bytes).unwrap();
        assert_eq!(t, GraphType::multigraph().as_weighted());

        let bad = GraphType {
            self_loops: true,
            cycles: false,
            ..GraphType::simple()
        };
        let bytes = bincode::serialize(&bad).unwrap();
        assert!(bincode::deserialize::<GraphType>(&bytes).is_err());
    }
}
