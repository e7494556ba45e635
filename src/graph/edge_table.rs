use crate::error::{GraphError, GraphResult};
use crate::graph::*;
use indexmap::IndexMap;
use std::hash::BuildHasher;
use tracing::trace;

/// The single source of truth for which vertices an edge token connects.
///
/// Tokens themselves carry nothing.
/// Endpoints and weights live here, keyed by token,
/// so no edge ever points back into its graph.
pub trait EdgeTable<V, E> {
    /// Whether weights are stored.
    fn is_weighted(&self) -> bool;

    /// Registers `edge` as connecting `source` to `target`.
    ///
    /// Re-registering a token with the same endpoints only updates its weight.
    /// Re-registering it with different endpoints fails with
    /// [GraphError::EdgeAlreadyAttached] and changes nothing.
    fn register(&mut self, edge: E, source: V, target: V, weight: Option<f64>) -> GraphResult<()>;

    fn lookup(&self, edge: &E) -> Option<&EdgeTriple<V>>;

    /// Removes `edge` and returns what it connected.
    fn deregister(&mut self, edge: &E) -> Option<EdgeTriple<V>>;

    fn set_weight(&mut self, edge: &E, weight: f64) -> GraphResult<()>;

    fn len(&self) -> usize;

    /// Tokens in registration order.
    fn tokens(&self) -> Box<dyn Iterator<Item = &E> + '_>;

    fn contains(&self, edge: &E) -> bool {
        self.lookup(edge).is_some()
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// An [EdgeTable] over an insertion-ordered hash map.
///
/// | operation    | complexity         |
/// | ------------ | ------------------ |
/// | `register`   | amortized `O(1)`   |
/// | `lookup`     | `O(1)`             |
/// | `deregister` | `O(\|E\|)` to keep registration order |
/// | `set_weight` | `O(1)`             |
#[derive(Clone)]
pub struct IndexedEdgeTable<V, E, H> {
    weighted: bool,
    edges: IndexMap<E, EdgeTriple<V>, H>,
}

impl<V, E, H> IndexedEdgeTable<V, E, H>
where
    H: BuildHasher + Default,
{
    pub fn new(weighted: bool) -> Self {
        Self {
            weighted,
            edges: IndexMap::with_hasher(H::default()),
        }
    }
}

impl<V, E, H> EdgeTable<V, E> for IndexedEdgeTable<V, E, H>
where
    V: Element,
    E: Element,
    H: BuildHasher,
{
    fn is_weighted(&self) -> bool {
        self.weighted
    }

    fn register(&mut self, edge: E, source: V, target: V, weight: Option<f64>) -> GraphResult<()> {
        let weighted = self.weighted;
        if let Some(triple) = self.edges.get_mut(&edge) {
            if triple.source != source || triple.target != target {
                return Err(GraphError::already_attached(
                    &edge,
                    &triple.source,
                    &triple.target,
                ));
            }
            if weighted && weight.is_some() {
                triple.weight = weight;
            }
            return Ok(());
        }
        trace!(?edge, ?source, ?target, "register edge");
        let weight = if weighted {
            Some(weight.unwrap_or(DEFAULT_EDGE_WEIGHT))
        } else {
            None
        };
        self.edges
            .insert(edge, EdgeTriple::new(source, target, weight));
        Ok(())
    }

    fn lookup(&self, edge: &E) -> Option<&EdgeTriple<V>> {
        self.edges.get(edge)
    }

    fn deregister(&mut self, edge: &E) -> Option<EdgeTriple<V>> {
        let res = self.edges.shift_remove(edge);
        if res.is_some() {
            trace!(?edge, "deregister edge");
        }
        res
    }

    fn set_weight(&mut self, edge: &E, weight: f64) -> GraphResult<()> {
        if !self.weighted {
            return Err(GraphError::unweighted());
        }
        let triple = self
            .edges
            .get_mut(edge)
            .ok_or_else(|| GraphError::unknown_edge(edge))?;
        triple.weight = Some(weight);
        Ok(())
    }

    fn len(&self) -> usize {
        self.edges.len()
    }

    fn tokens(&self) -> Box<dyn Iterator<Item = &E> + '_> {
        Box::new(self.edges.keys())
    }
}
