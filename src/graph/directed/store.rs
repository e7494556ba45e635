use crate::graph::*;
use indexmap::{IndexMap, IndexSet};
use std::hash::BuildHasher;

/// Incidence storage for directed graphs.
///
/// Every vertex keeps its incoming and outgoing edge tokens in two ordered sets.
/// A self-loop sits in both sets of its vertex, so it counts twice in `degree`.
///
/// |                  | Complexity                                   |
/// | ---------------- | -------------------------------------------- |
/// | `add_vertex`     | amortized `O(1)`                             |
/// | `remove_vertex`  | `O(\|V\|)`, to keep insertion order           |
/// | `add_incidence`  | amortized `O(1)`                             |
/// | `remove_incidence` | `O(d)`, where `d` is the degree of the vertex |
/// | `degree`, `in_degree`, `out_degree` | `O(1)`                    |
/// | `edges_between`  | `O(min(out(s), in(t)))`                      |
#[derive(Clone)]
pub struct DirectedStore<V, E, H> {
    vertices: IndexMap<V, DirectedEntry<E, H>, H>,
}

#[derive(Clone)]
struct DirectedEntry<E, H> {
    incoming: IndexSet<E, H>,
    outgoing: IndexSet<E, H>,
}

impl<E, H> DirectedEntry<E, H>
where
    H: BuildHasher + Default,
{
    fn new() -> Self {
        Self {
            incoming: IndexSet::with_hasher(H::default()),
            outgoing: IndexSet::with_hasher(H::default()),
        }
    }
}

impl<V, E, H> Default for DirectedStore<V, E, H>
where
    H: BuildHasher + Default,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<V, E, H> DirectedStore<V, E, H>
where
    H: BuildHasher + Default,
{
    pub fn new() -> Self {
        Self {
            vertices: IndexMap::with_hasher(H::default()),
        }
    }
}

impl<V, E, H> AdjacencyStore<V, E> for DirectedStore<V, E, H>
where
    V: Element,
    E: Element,
    H: BuildHasher + Default,
{
    fn add_vertex(&mut self, v: V) -> bool {
        if self.vertices.contains_key(&v) {
            return false;
        }
        self.vertices.insert(v, DirectedEntry::new());
        true
    }

    fn remove_vertex(&mut self, v: &V) -> bool {
        match self.vertices.shift_remove(v) {
            None => false,
            Some(entry) => {
                debug_assert!(entry.incoming.is_empty() && entry.outgoing.is_empty());
                true
            }
        }
    }

    fn contains_vertex(&self, v: &V) -> bool {
        self.vertices.contains_key(v)
    }

    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    fn vertices(&self) -> Box<dyn Iterator<Item = &V> + '_> {
        Box::new(self.vertices.keys())
    }

    fn add_incidence(&mut self, v: &V, edge: E, role: Role) {
        debug_assert!(role != Role::Touching);
        if let Some(entry) = self.vertices.get_mut(v) {
            match role {
                Role::Incoming => entry.incoming.insert(edge),
                Role::Outgoing | Role::Touching => entry.outgoing.insert(edge),
            };
        }
    }

    fn remove_incidence(&mut self, v: &V, edge: &E, role: Role) {
        if let Some(entry) = self.vertices.get_mut(v) {
            match role {
                Role::Incoming => entry.incoming.shift_remove(edge),
                Role::Outgoing | Role::Touching => entry.outgoing.shift_remove(edge),
            };
        }
    }

    fn degree(&self, v: &V) -> Option<usize> {
        self.vertices
            .get(v)
            .map(|entry| entry.incoming.len() + entry.outgoing.len())
    }

    fn in_degree(&self, v: &V) -> Option<usize> {
        self.vertices.get(v).map(|entry| entry.incoming.len())
    }

    fn out_degree(&self, v: &V) -> Option<usize> {
        self.vertices.get(v).map(|entry| entry.outgoing.len())
    }

    fn incident(&self, v: &V, role: Role) -> Option<Snapshot<E>> {
        let entry = self.vertices.get(v)?;
        let res = match role {
            Role::Incoming => entry.incoming.iter().cloned().collect(),
            Role::Outgoing => entry.outgoing.iter().cloned().collect(),
            // a self-loop is in both sets but listed once
            Role::Touching => entry
                .incoming
                .iter()
                .chain(entry.outgoing.iter())
                .cloned()
                .collect(),
        };
        Some(res)
    }

    fn edges_between<T>(&self, source: &V, target: &V, table: &T) -> Snapshot<E>
    where
        T: EdgeTable<V, E>,
    {
        let (src, snk) = match (self.vertices.get(source), self.vertices.get(target)) {
            (Some(src), Some(snk)) => (src, snk),
            _ => return empty_snapshot(),
        };
        if src.outgoing.len() <= snk.incoming.len() {
            src.outgoing
                .iter()
                .filter(|e| table.lookup(e).map_or(false, |t| t.target == *target))
                .cloned()
                .collect()
        } else {
            snk.incoming
                .iter()
                .filter(|e| table.lookup(e).map_or(false, |t| t.source == *source))
                .cloned()
                .collect()
        }
    }
}
