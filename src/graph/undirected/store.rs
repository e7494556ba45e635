use crate::graph::*;
use indexmap::{IndexMap, IndexSet};
use std::hash::BuildHasher;

/// Incidence storage for undirected graphs.
///
/// Every vertex keeps one ordered set of touching edge tokens.
/// A self-loop is listed once in that set and once more among the vertex's loops,
/// so it counts twice in `degree` and the degree sum stays `2|E|`.
///
/// In- and out-degrees are the degree.
#[derive(Clone)]
pub struct UndirectedStore<V, E, H> {
    vertices: IndexMap<V, UndirectedEntry<E, H>, H>,
}

#[derive(Clone)]
struct UndirectedEntry<E, H> {
    touching: IndexSet<E, H>,
    loops: IndexSet<E, H>,
}

impl<E, H> UndirectedEntry<E, H>
where
    H: BuildHasher + Default,
{
    fn new() -> Self {
        Self {
            touching: IndexSet::with_hasher(H::default()),
            loops: IndexSet::with_hasher(H::default()),
        }
    }

    fn degree(&self) -> usize {
        self.touching.len() + self.loops.len()
    }
}

impl<V, E, H> Default for UndirectedStore<V, E, H>
where
    H: BuildHasher + Default,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<V, E, H> UndirectedStore<V, E, H>
where
    H: BuildHasher + Default,
{
    pub fn new() -> Self {
        Self {
            vertices: IndexMap::with_hasher(H::default()),
        }
    }
}

impl<V, E, H> AdjacencyStore<V, E> for UndirectedStore<V, E, H>
where
    V: Element,
    E: Element,
    H: BuildHasher + Default,
{
    fn add_vertex(&mut self, v: V) -> bool {
        if self.vertices.contains_key(&v) {
            return false;
        }
        self.vertices.insert(v, UndirectedEntry::new());
        true
    }

    fn remove_vertex(&mut self, v: &V) -> bool {
        match self.vertices.shift_remove(v) {
            None => false,
            Some(entry) => {
                debug_assert_eq!(entry.degree(), 0);
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

    fn add_incidence(&mut self, v: &V, edge: E, _role: Role) {
        if let Some(entry) = self.vertices.get_mut(v) {
            if entry.touching.contains(&edge) {
                entry.loops.insert(edge);
            } else {
                entry.touching.insert(edge);
            }
        }
    }

    fn remove_incidence(&mut self, v: &V, edge: &E, _role: Role) {
        if let Some(entry) = self.vertices.get_mut(v) {
            if !entry.loops.shift_remove(edge) {
                entry.touching.shift_remove(edge);
            }
        }
    }

    fn degree(&self, v: &V) -> Option<usize> {
        self.vertices.get(v).map(|entry| entry.degree())
    }

    fn in_degree(&self, v: &V) -> Option<usize> {
        self.degree(v)
    }

    fn out_degree(&self, v: &V) -> Option<usize> {
        self.degree(v)
    }

    fn incident(&self, v: &V, _role: Role) -> Option<Snapshot<E>> {
        self.vertices
            .get(v)
            .map(|entry| entry.touching.iter().cloned().collect())
    }

    fn edges_between<T>(&self, source: &V, target: &V, table: &T) -> Snapshot<E>
    where
        T: EdgeTable<V, E>,
    {
        let (a, b) = match (self.vertices.get(source), self.vertices.get(target)) {
            (Some(a), Some(b)) => (a, b),
            _ => return empty_snapshot(),
        };
        let smaller = if a.touching.len() <= b.touching.len() {
            a
        } else {
            b
        };
        smaller
            .touching
            .iter()
            .filter(|e| {
                table
                    .lookup(e)
                    .map_or(false, |t| t.connects(source, target, false))
            })
            .cloned()
            .collect()
    }
}
