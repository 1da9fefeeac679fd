//! Bidirectional linear probing: open addressing with a direction
//! heuristic.
//!
//! The probe direction depends on which half of the table the home slot
//! falls in: keys homing in the upper half probe upward first, keys in the
//! lower half probe downward first. The intent is load balancing, pushing
//! displaced entries away from the crowded half. After the first leg hits
//! the table edge, the sequence continues on the other side of home toward
//! the opposite edge, so every probe order is a deterministic total order
//! over all `capacity` slots. Put, get and delete all walk the same order.
//!
//! There is no tombstone state: get and delete never stop early at an empty
//! slot, so a deletion cannot hide a later entry that shares the home slot.
//! The cost is an O(capacity) miss, acceptable for a fixed-capacity table.

use core::borrow::Borrow;
use core::hash::{BuildHasher, Hash};

use crate::events::TableEvents;
use crate::hash::home_slot;
use crate::map::PutError;
use crate::slots::{Entry, Occupants, SlotArray};

/// The deterministic slot visit order for one home slot: home first, then
/// the heuristic-direction leg to the table edge, then the remaining slots
/// on the other side of home.
#[derive(Debug)]
pub(crate) struct ProbeSequence {
    home: usize,
    capacity: usize,
    upward_first: bool,
    step: usize,
}

impl ProbeSequence {
    pub(crate) fn new(home: usize, capacity: usize) -> Self {
        debug_assert!(home < capacity);
        Self {
            home,
            capacity,
            upward_first: home >= capacity / 2,
            step: 0,
        }
    }
}

impl Iterator for ProbeSequence {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.step >= self.capacity {
            return None;
        }
        let s = self.step;
        self.step += 1;
        if s == 0 {
            return Some(self.home);
        }
        let (first_leg, second_leg_upward) = if self.upward_first {
            (self.capacity - self.home - 1, false)
        } else {
            (self.home, true)
        };
        let idx = if s <= first_leg {
            if self.upward_first {
                self.home + s
            } else {
                self.home - s
            }
        } else {
            let off = s - first_leg;
            if second_leg_upward {
                self.home + off
            } else {
                self.home - off
            }
        };
        Some(idx)
    }
}

#[derive(Debug)]
pub(crate) struct ProbingTable<K, V, S> {
    hasher: S,
    slots: SlotArray<Entry<K, V>>,
    len: usize,
}

impl<K, V, S> ProbingTable<K, V, S>
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

    /// Place at the first empty slot in probe order. A full table rejects
    /// the put and leaves every slot untouched.
    pub(crate) fn put(&mut self, key: K, value: V, events: &TableEvents) -> Result<(), PutError> {
        let capacity = self.slots.capacity();
        let home = home_slot(&self.hasher, &key, capacity);
        if !self.slots.is_vacant(home) {
            events.record_collision();
        }
        let mut target = None;
        for (i, idx) in ProbeSequence::new(home, capacity).enumerate() {
            if i > 0 {
                events.record_probe_step();
            }
            if self.slots.is_vacant(idx) {
                target = Some(idx);
                break;
            }
        }
        match target {
            Some(idx) => {
                self.slots.occupy(idx, Entry { key, value });
                self.len += 1;
                Ok(())
            }
            None => {
                events.record_full_rejection();
                Err(PutError::TableFull)
            }
        }
    }

    pub(crate) fn get<Q>(&self, q: &Q, events: &TableEvents) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let capacity = self.slots.capacity();
        let home = home_slot(&self.hasher, q, capacity);
        for (i, idx) in ProbeSequence::new(home, capacity).enumerate() {
            if i > 0 {
                events.record_probe_step();
            }
            if let Some(e) = self.slots.peek(idx) {
                if e.key.borrow() == q {
                    return Some(&e.value);
                }
            }
        }
        None
    }

    /// Same walk as `get`; clears the matching slot. No tombstone is left
    /// because lookups walk the whole probe sequence.
    pub(crate) fn delete<Q>(&mut self, q: &Q, events: &TableEvents) -> Option<(K, V)>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let capacity = self.slots.capacity();
        let home = home_slot(&self.hasher, q, capacity);
        for (i, idx) in ProbeSequence::new(home, capacity).enumerate() {
            if i > 0 {
                events.record_probe_step();
            }
            let matches = self
                .slots
                .peek(idx)
                .map_or(false, |e| e.key.borrow() == q);
            if matches {
                let e = self.slots.vacate(idx)?;
                self.len -= 1;
                return Some((e.key, e.value));
            }
        }
        None
    }

    pub(crate) fn entries(&self) -> Occupants<'_, Entry<K, V>> {
        self.slots.occupants()
    }
}
