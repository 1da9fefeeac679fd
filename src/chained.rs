//! Separate-chaining strategy: one lazily created bucket list per slot.
//!
//! A put always appends at the bucket tail, including for a key the bucket
//! already holds; lookups return the first match in insertion order, so the
//! later duplicate is shadowed rather than replacing. That quirk comes from
//! the reference implementation and is kept deliberately. Deleting the last
//! node of a bucket destroys the bucket itself, so "slot has a bucket" and
//! "bucket is non-empty" stay equivalent.

use core::borrow::Borrow;
use core::hash::{BuildHasher, Hash};
use slotmap::DefaultKey;

use crate::bucket::{BucketArena, Entries};
use crate::events::TableEvents;
use crate::hash::home_slot;
use crate::slots::SlotArray;

#[derive(Debug)]
pub(crate) struct ChainedTable<K, V, S> {
    hasher: S,
    heads: SlotArray<DefaultKey>,
    arena: BucketArena<K, V>,
}

impl<K, V, S> ChainedTable<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    pub(crate) fn new(capacity: usize, hasher: S) -> Self {
        Self {
            hasher,
            heads: SlotArray::with_capacity(capacity),
            arena: BucketArena::new(),
        }
    }

    pub(crate) fn capacity(&self) -> usize {
        self.heads.capacity()
    }

    pub(crate) fn len(&self) -> usize {
        self.arena.len()
    }

    /// Append at the tail of the home slot's bucket, creating the bucket on
    /// first use. Never fails and never replaces.
    pub(crate) fn put(&mut self, key: K, value: V, events: &TableEvents) {
        let idx = home_slot(&self.hasher, &key, self.heads.capacity());
        match self.heads.peek(idx).copied() {
            None => {
                let head = self.arena.push_tail(None, key, value);
                self.heads.occupy(idx, head);
                events.record_bucket_created();
            }
            Some(head) => {
                events.record_collision();
                self.arena.push_tail(Some(head), key, value);
            }
        }
    }

    pub(crate) fn get<Q>(&self, q: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let idx = home_slot(&self.hasher, q, self.heads.capacity());
        self.arena.find_first(self.heads.peek(idx).copied(), q)
    }

    /// Unlink the first matching node; destroy the bucket when the unlink
    /// emptied it.
    pub(crate) fn delete<Q>(&mut self, q: &Q, events: &TableEvents) -> Option<(K, V)>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let idx = home_slot(&self.hasher, q, self.heads.capacity());
        let head = self.heads.peek(idx).copied()?;
        let (new_head, removed) = self.arena.unlink_first(head, q);
        if removed.is_some() {
            match new_head {
                None => {
                    self.heads.vacate(idx);
                    events.record_bucket_reclaimed();
                }
                Some(nh) => {
                    self.heads.occupy(idx, nh);
                }
            }
        }
        removed
    }

    pub(crate) fn entries(&self) -> Entries<'_, K, V> {
        self.arena.entries()
    }
}
