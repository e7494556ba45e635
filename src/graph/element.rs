use crate::graph::{EdgeId, VertexId};
use ahash::RandomState;
use indexmap::IndexSet;
use std::fmt::Debug;
use std::hash::Hash;

/// What vertices and edge tokens must be: cheap identities compared by equality.
pub trait Element: Clone + Eq + Hash + Debug {}

impl<T> Element for T where T: Clone + Eq + Hash + Debug {}

/// Keys for which [IntegerStorage](crate::graph::IntegerStorage) is a good fit.
///
/// FxHash is fast on integers but degrades on structured keys,
/// so the integer-optimized strategy is restricted to these.
pub trait IntegerKey: Element + Copy {}

impl IntegerKey for u8 {}
impl IntegerKey for u16 {}
impl IntegerKey for u32 {}
impl IntegerKey for u64 {}
impl IntegerKey for usize {}
impl IntegerKey for i8 {}
impl IntegerKey for i16 {}
impl IntegerKey for i32 {}
impl IntegerKey for i64 {}
impl IntegerKey for isize {}
impl IntegerKey for VertexId {}
impl IntegerKey for EdgeId {}

/// An owned set returned by queries, iterating in insertion order.
///
/// It is computed at call time and never aliases the graph's storage.
pub type Snapshot<T> = IndexSet<T, RandomState>;

pub(crate) fn empty_snapshot<T>() -> Snapshot<T> {
    IndexSet::with_hasher(RandomState::new())
}

/// Generates new vertices or edges on request.
pub trait Supplier<T> {
    fn supply(&mut self) -> T;
}

impl<T, F> Supplier<T> for F
where
    F: FnMut() -> T,
{
    fn supply(&mut self) -> T {
        self()
    }
}
