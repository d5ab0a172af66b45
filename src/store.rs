//! In-memory, newest-first record store.
//!
//! Each store keeps an ordered deque of ids, an id-keyed index of records and
//! a monotonic id sequence. All access goes through one `tokio` `RwLock`, so
//! a mutation is never observed half-applied. Stores are explicit values:
//! cloning a store clones the handle, not the data.

use std::borrow::Borrow;
use std::collections::{HashMap, VecDeque};
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::entity::Entity;

/// First value handed out by a fresh sequence.
pub const SEQUENCE_START: u64 = 100;

/// Monotonic id source. Top-level and nested ids of one store share it, so
/// they never collide.
#[derive(Debug, Clone)]
pub struct IdSequence {
    next: u64,
}

impl Default for IdSequence {
    fn default() -> Self {
        Self::starting_at(SEQUENCE_START)
    }
}

impl IdSequence {
    pub fn starting_at(next: u64) -> Self {
        Self { next }
    }

    /// Returns `<prefix><n>` and advances the sequence.
    pub fn next_id<I: From<String>>(&mut self, prefix: &str) -> I {
        let id = format!("{prefix}{}", self.next);
        self.next += 1;
        I::from(id)
    }

    /// Keeps a supplied id, or assigns a fresh one.
    pub fn keep_or_next<I: From<String>>(&mut self, existing: Option<I>, prefix: &str) -> I {
        match existing {
            Some(id) => id,
            None => self.next_id(prefix),
        }
    }

    #[must_use]
    pub fn peek(&self) -> u64 {
        self.next
    }
}

struct StoreInner<E: Entity> {
    order: VecDeque<E::Id>,
    records: HashMap<E::Id, E>,
    sequence: IdSequence,
}

pub struct InMemoryStore<E: Entity> {
    inner: Arc<RwLock<StoreInner<E>>>,
}

impl<E: Entity> Clone for InMemoryStore<E> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<E: Entity> Default for InMemoryStore<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Entity> std::fmt::Debug for InMemoryStore<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryStore")
            .field("entity", &E::NAME)
            .finish_non_exhaustive()
    }
}

impl<E: Entity> InMemoryStore<E> {
    pub fn new() -> Self {
        Self::seeded(Vec::new())
    }

    /// Builds a store holding `records` in the given order (first = newest).
    /// A record whose id repeats an earlier one replaces it in place.
    pub fn seeded(records: Vec<E>) -> Self {
        let mut order = VecDeque::with_capacity(records.len());
        let mut index = HashMap::with_capacity(records.len());
        for record in records {
            let id = record.id().clone();
            if index.insert(id.clone(), record).is_none() {
                order.push_back(id);
            }
        }

        Self {
            inner: Arc::new(RwLock::new(StoreInner {
                order,
                records: index,
                sequence: IdSequence::default(),
            })),
        }
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.order.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    pub async fn get(&self, id: &str) -> Option<E> {
        self.inner.read().await.records.get(id).cloned()
    }

    /// All records in store order.
    pub async fn snapshot(&self) -> Vec<E> {
        self.select(|_| true).await
    }

    /// Records matching `predicate`, in store order.
    pub async fn select(&self, predicate: impl Fn(&E) -> bool) -> Vec<E> {
        let inner = self.inner.read().await;
        inner
            .order
            .iter()
            .filter_map(|id| inner.records.get::<E::Id>(id))
            .filter(|record| predicate(record))
            .cloned()
            .collect()
    }

    /// Builds a record under the write lock and puts it at the front.
    pub async fn insert_with(&self, build: impl FnOnce(&mut IdSequence) -> E) -> E {
        let mut guard = self.inner.write().await;
        let inner = &mut *guard;
        let record = build(&mut inner.sequence);
        let id = record.id().clone();
        if inner.records.insert(id.clone(), record.clone()).is_some() {
            inner.order.retain(|existing| existing != &id);
        }
        inner.order.push_front(id);
        record
    }

    /// Mutates the record with `id` in place and returns the updated copy.
    /// Returns `None` without calling `apply` when the id is unknown.
    pub async fn update_with(
        &self,
        id: &str,
        apply: impl FnOnce(&mut E, &mut IdSequence),
    ) -> Option<E> {
        let mut guard = self.inner.write().await;
        let StoreInner {
            records, sequence, ..
        } = &mut *guard;
        let record = records.get_mut(id)?;
        apply(record, sequence);
        Some(record.clone())
    }

    pub async fn remove(&self, id: &str) -> Option<E> {
        let mut guard = self.inner.write().await;
        let removed = guard.records.remove(id)?;
        guard
            .order
            .retain(|existing| Borrow::<str>::borrow(existing) != id);
        Some(removed)
    }
}
