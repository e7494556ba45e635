use crate::error::{GraphError, GraphResult};
use crate::graph::Element;
use ahash::RandomState;
use std::any::{Any, TypeId};
use std::cell::RefCell;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::debug;

/// Identity of one graph instance, used to tell owners apart in an [EdgeRegistry].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GraphId(u64);

impl GraphId {
    pub(crate) fn fresh() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(0);
        Self(NEXT.fetch_add(1, Ordering::Relaxed))
    }
}

/// Whether graphs over one [EdgeRegistry] may hold the same token together.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenSharing {
    /// At most one graph holds a token at a time.
    Exclusive,
    /// Several graphs may hold a token as long as they agree on its endpoints.
    SameEndpoints,
}

struct Attachment<V> {
    owners: Vec<GraphId>,
    source: V,
    target: V,
    directed: bool,
}

impl<V: PartialEq> Attachment<V> {
    fn agrees(&self, source: &V, target: &V, directed: bool) -> bool {
        let forward = &self.source == source && &self.target == target;
        if self.directed || directed {
            self.directed == directed && forward
        } else {
            forward || (&self.source == target && &self.target == source)
        }
    }
}

type Table<V, E> = HashMap<E, Attachment<V>, RandomState>;

thread_local! {
    static THREAD_DEFAULTS: RefCell<HashMap<TypeId, Box<dyn Any>, RandomState>> =
        RefCell::new(HashMap::with_hasher(RandomState::new()));
}

/// A table of edge attachments shared by several graphs.
///
/// Attaching a token that another graph holds with different endpoints
/// fails with [GraphError::EdgeAlreadyAttached].
/// Under [TokenSharing::Exclusive] it fails even when the endpoints agree.
/// Removing the edge from its owner, or dropping the owner, releases the token.
///
/// Graphs built without an explicit registry join [EdgeRegistry::thread_default].
///
/// Clones share the same table.
pub struct EdgeRegistry<V, E> {
    inner: Arc<Mutex<Table<V, E>>>,
    sharing: TokenSharing,
}

impl<V, E> Clone for EdgeRegistry<V, E> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
            sharing: self.sharing,
        }
    }
}

impl<V, E> Default for EdgeRegistry<V, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V, E> EdgeRegistry<V, E> {
    /// An exclusive registry.
    pub fn new() -> Self {
        Self::with_sharing(TokenSharing::Exclusive)
    }

    pub fn with_sharing(sharing: TokenSharing) -> Self {
        Self {
            inner: Arc::new(Mutex::new(HashMap::with_hasher(RandomState::new()))),
            sharing,
        }
    }

    pub fn sharing(&self) -> TokenSharing {
        self.sharing
    }

    fn table(&self) -> MutexGuard<'_, Table<V, E>> {
        // every update completes under one guard, so a poisoned table is still consistent
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<V, E> EdgeRegistry<V, E>
where
    V: 'static,
    E: 'static,
{
    /// The registry that graphs built on this thread join unless told otherwise.
    ///
    /// There is one per thread and per `(V, E)`; it uses [TokenSharing::SameEndpoints].
    pub fn thread_default() -> Self {
        THREAD_DEFAULTS.with(|defaults| {
            let mut defaults = defaults.borrow_mut();
            let slot = defaults
                .entry(TypeId::of::<(V, E)>())
                .or_insert_with(|| -> Box<dyn Any> {
                    Box::new(Self::with_sharing(TokenSharing::SameEndpoints))
                });
            match slot.downcast_ref::<Self>() {
                Some(registry) => registry.clone(),
                None => {
                    let registry = Self::with_sharing(TokenSharing::SameEndpoints);
                    *slot = Box::new(registry.clone());
                    registry
                }
            }
        })
    }
}

impl<V, E> EdgeRegistry<V, E>
where
    V: Element,
    E: Element,
{
    /// Number of attached tokens across all graphs.
    pub fn len(&self) -> usize {
        self.table().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_attached(&self, edge: &E) -> bool {
        self.table().contains_key(edge)
    }

    /// Endpoints a token is currently attached to, in whichever graphs hold it.
    pub fn endpoints(&self, edge: &E) -> Option<(V, V)> {
        self.table()
            .get(edge)
            .map(|a| (a.source.clone(), a.target.clone()))
    }

    /// Number of graphs holding `edge`.
    pub fn holders(&self, edge: &E) -> usize {
        self.table().get(edge).map_or(0, |a| a.owners.len())
    }

    /// Records that `owner` holds `edge` between `source` and `target`.
    ///
    /// The check and the update happen under one lock.
    pub(crate) fn attach(
        &self,
        owner: GraphId,
        edge: E,
        source: V,
        target: V,
        directed: bool,
    ) -> GraphResult<()> {
        let mut table = self.table();
        match table.entry(edge) {
            Entry::Vacant(slot) => {
                slot.insert(Attachment {
                    owners: vec![owner],
                    source,
                    target,
                    directed,
                });
                Ok(())
            }
            Entry::Occupied(mut slot) => {
                if slot.get().owners == [owner] {
                    let attachment = slot.get_mut();
                    attachment.source = source;
                    attachment.target = target;
                    attachment.directed = directed;
                    return Ok(());
                }
                if slot.get().owners.contains(&owner) {
                    return Ok(());
                }
                if self.sharing == TokenSharing::SameEndpoints
                    && slot.get().agrees(&source, &target, directed)
                {
                    slot.get_mut().owners.push(owner);
                    return Ok(());
                }
                let attachment = slot.get();
                debug!(edge = ?slot.key(), "edge token is held by another graph");
                Err(GraphError::already_attached(
                    slot.key(),
                    &attachment.source,
                    &attachment.target,
                ))
            }
        }
    }

    pub(crate) fn detach(&self, owner: GraphId, edge: &E) {
        let mut table = self.table();
        release(&mut table, owner, edge);
    }

    /// Releases every token in `edges` that `owner` holds, under one lock.
    pub(crate) fn detach_all<'a, I>(&self, owner: GraphId, edges: I)
    where
        I: IntoIterator<Item = &'a E>,
        E: 'a,
    {
        let mut table = self.table();
        for edge in edges {
            release(&mut table, owner, edge);
        }
    }
}

fn release<V, E>(table: &mut Table<V, E>, owner: GraphId, edge: &E)
where
    E: Element,
{
    let now_free = match table.get_mut(edge) {
        Some(a) => {
            a.owners.retain(|o| *o != owner);
            a.owners.is_empty()
        }
        None => false,
    };
    if now_free {
        table.remove(edge);
    }
}
