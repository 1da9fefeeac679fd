//! Overwrite strategy: the baseline, destructive table.
//!
//! Every key maps to its home slot and nothing else. A put into an occupied
//! slot destroys the previous occupant, whatever its key; the displaced pair
//! is handed back to the caller instead of being lost silently. Acceptable
//! only when the caller can guarantee key uniqueness under the hash
//! function; the chained and probing strategies exist because this one
//! loses data under collisions.

use core::borrow::Borrow;
use core::hash::{BuildHasher, Hash};

use crate::events::TableEvents;
use crate::hash::home_slot;
use crate::map::PutOutcome;
use crate::slots::{Entry, Occupants, SlotArray};

#[derive(Debug)]
pub(crate) struct OverwriteTable<K, V, S> {
    hasher: S,
    slots: SlotArray<Entry<K, V>>,
    len: usize,
}

impl<K, V, S> OverwriteTable<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    pub(crate) fn new(capacity: usize, hasher: S) -> Self {
        Self {
            hasher,
            slots: SlotArray::with_capacity(capacity),
            len: 0,
        }
    }

    pub(crate) fn capacity(&self) -> usize {
        self.slots.capacity()
    }

    pub(crate) fn len(&self) -> usize {
        self.len
    }

    /// Place at the home slot, destroying any previous occupant. The
    /// displaced pair is returned so the loss is observable.
    pub(crate) fn put(&mut self, key: K, value: V, events: &TableEvents) -> PutOutcome<K, V> {
        let idx = home_slot(&self.hasher, &key, self.slots.capacity());
        let collided = self
            .slots
            .peek(idx)
            .map_or(false, |prev| prev.key != key);
        if collided {
            events.record_collision();
            events.record_eviction();
        }
        match self.slots.occupy(idx, Entry { key, value }) {
            None => {
                self.len += 1;
                PutOutcome::Placed
            }
            Some(prev) => PutOutcome::Evicted(prev.key, prev.value),
        }
    }

    pub(crate) fn get<Q>(&self, q: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let idx = home_slot(&self.hasher, q, self.slots.capacity());
        self.slots
            .peek(idx)
            .filter(|e| e.key.borrow() == q)
            .map(|e| &e.value)
    }

    /// Clears the home slot unconditionally, matching the source behavior:
    /// the occupant is removed even when its key differs from `q`.
    pub(crate) fn delete<Q>(&mut self, q: &Q) -> Option<(K, V)>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let idx = home_slot(&self.hasher, q, self.slots.capacity());
        let prev = self.slots.vacate(idx)?;
        self.len -= 1;
        Some((prev.key, prev.value))
    }

    pub(crate) fn entries(&self) -> Occupants<'_, Entry<K, V>> {
        self.slots.occupants()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hash::KeyLengthState;
    use crate::map::PutOutcome;

    fn table(capacity: usize) -> OverwriteTable<String, &'static str, KeyLengthState> {
        OverwriteTable::new(capacity, KeyLengthState)
    }

    /// Invariant: non-colliding keys round-trip.
    #[test]
    fn disjoint_keys_round_trip() {
        let events = TableEvents::default();
        let mut t = table(10);
        assert!(matches!(t.put("a".into(), "X", &events), PutOutcome::Placed));
        assert!(matches!(t.put("bb".into(), "Y", &events), PutOutcome::Placed));
        assert_eq!(t.get("a"), Some(&"X"));
        assert_eq!(t.get("bb"), Some(&"Y"));
        assert_eq!(t.len(), 2);
        assert_eq!(events.collisions(), 0);
    }

    /// Invariant: a colliding put destroys the prior occupant and returns
    /// it; the victim is no longer retrievable.
    #[test]
    fn collision_evicts_and_returns_victim() {
        let events = TableEvents::default();
        let mut t = table(10);
        t.put("bb".into(), "Y", &events);
        match t.put("cc".into(), "Z", &events) {
            PutOutcome::Evicted(k, v) => {
                assert_eq!(k, "bb");
                assert_eq!(v, "Y");
            }
            other => panic!("unexpected outcome: {:?}", other),
        }
        assert_eq!(t.get("bb"), None);
        assert_eq!(t.get("cc"), Some(&"Z"));
        assert_eq!(t.len(), 1);
        assert_eq!(events.collisions(), 1);
        assert_eq!(events.evictions(), 1);
    }

    /// Invariant: a same-key put replaces in place without counting a
    /// collision.
    #[test]
    fn same_key_put_replaces_in_place() {
        let events = TableEvents::default();
        let mut t = table(10);
        t.put("a".into(), "old", &events);
        match t.put("a".into(), "new", &events) {
            PutOutcome::Evicted(k, v) => {
                assert_eq!(k, "a");
                assert_eq!(v, "old");
            }
            other => panic!("unexpected outcome: {:?}", other),
        }
        assert_eq!(t.get("a"), Some(&"new"));
        assert_eq!(t.len(), 1);
        assert_eq!(events.collisions(), 0);
        assert_eq!(events.evictions(), 0);
    }

    /// Invariant: delete clears the home slot unconditionally, even for a
    /// foreign occupant; deleting from an empty slot is a no-op.
    #[test]
    fn delete_clears_slot_unconditionally() {
        let events = TableEvents::default();
        let mut t = table(10);
        t.put("bb".into(), "Y", &events);
        // "cc" shares the home slot; the occupant is removed regardless.
        assert_eq!(t.delete("cc"), Some(("bb".into(), "Y")));
        assert_eq!(t.get("bb"), None);
        assert_eq!(t.delete("cc"), None);
        assert_eq!(t.len(), 0);
    }
}
