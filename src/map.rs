//! FixedHashMap: the public map facade over the strategy tables.
//!
//! The strategy is a construction-time configuration choice; it is never
//! switched afterwards, so dispatch is a plain enum match with no runtime
//! type inspection. The facade owns the event counters and the reentrancy
//! flag and hides every slot-index detail from callers.

use core::borrow::Borrow;
use core::fmt;
use core::hash::{BuildHasher, Hash};

use crate::bucket;
use crate::chained::ChainedTable;
use crate::events::TableEvents;
use crate::hash::KeyLengthState;
use crate::overwrite::OverwriteTable;
use crate::probing::ProbingTable;
use crate::reentrancy::ReentryFlag;
use crate::slots::{Entry, Occupants};

/// Collision-resolution policy, fixed at construction.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Strategy {
    /// Home slot only; a colliding put destroys the previous occupant and
    /// returns it as [`PutOutcome::Evicted`]. Baseline, discouraged.
    Overwrite,
    /// One singly-linked bucket list per slot; colliding keys coexist.
    Chaining,
    /// Open addressing with a bidirectional probe order; a put into a full
    /// table fails with [`PutError::TableFull`].
    LinearProbing,
}

/// Outcome of a successful put.
#[derive(Debug, Eq, PartialEq)]
pub enum PutOutcome<K, V> {
    /// The entry landed in an empty slot or was appended to a bucket.
    Placed,
    /// The home slot's previous occupant was destroyed to make room and is
    /// returned here (Overwrite strategy only). For a same-key put this is
    /// the replaced pair; for a colliding put it is lost data made visible.
    Evicted(K, V),
}

/// Why a put failed.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum PutError {
    /// The probe sequence covered every slot without finding an empty one
    /// (LinearProbing only). The table is unchanged.
    TableFull,
}

impl fmt::Display for PutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PutError::TableFull => f.write_str("table full: no empty slot in probe sequence"),
        }
    }
}

impl std::error::Error for PutError {}

enum Table<K, V, S> {
    Overwrite(OverwriteTable<K, V, S>),
    Chained(ChainedTable<K, V, S>),
    Probing(ProbingTable<K, V, S>),
}

/// Fixed-capacity keyed container. Capacity is chosen once; there is no
/// resize or rehash path, so callers size the table for expected load.
pub struct FixedHashMap<K, V, S = KeyLengthState> {
    table: Table<K, V, S>,
    events: TableEvents,
    reentry: ReentryFlag,
}

impl<K, V> FixedHashMap<K, V>
where
    K: Eq + Hash,
{
    /// Create a map with the crate's key-length hasher.
    ///
    /// Panics if `capacity` is zero: no valid slot index could exist.
    pub fn new(capacity: usize, strategy: Strategy) -> Self {
        Self::with_hasher(capacity, strategy, KeyLengthState)
    }
}

impl<K, V, S> FixedHashMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    /// Create a map with a caller-supplied hasher.
    ///
    /// Panics if `capacity` is zero.
    pub fn with_hasher(capacity: usize, strategy: Strategy, hasher: S) -> Self {
        let table = match strategy {
            Strategy::Overwrite => Table::Overwrite(OverwriteTable::new(capacity, hasher)),
            Strategy::Chaining => Table::Chained(ChainedTable::new(capacity, hasher)),
            Strategy::LinearProbing => Table::Probing(ProbingTable::new(capacity, hasher)),
        };
        Self {
            table,
            events: TableEvents::default(),
            reentry: ReentryFlag::new(),
        }
    }

    pub fn capacity(&self) -> usize {
        match &self.table {
            Table::Overwrite(t) => t.capacity(),
            Table::Chained(t) => t.capacity(),
            Table::Probing(t) => t.capacity(),
        }
    }

    /// Number of stored entries. Under Chaining this counts shadowed
    /// duplicates too.
    pub fn len(&self) -> usize {
        match &self.table {
            Table::Overwrite(t) => t.len(),
            Table::Chained(t) => t.len(),
            Table::Probing(t) => t.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn strategy(&self) -> Strategy {
        match &self.table {
            Table::Overwrite(_) => Strategy::Overwrite,
            Table::Chained(_) => Strategy::Chaining,
            Table::Probing(_) => Strategy::LinearProbing,
        }
    }

    /// Event counters recorded by this map instance.
    pub fn events(&self) -> &TableEvents {
        &self.events
    }

    /// Store `value` under `key`. `Err(TableFull)` is only possible under
    /// LinearProbing; a failed put leaves the map exactly as it was.
    pub fn put(&mut self, key: K, value: V) -> Result<PutOutcome<K, V>, PutError> {
        let _g = self.reentry.lock();
        match &mut self.table {
            Table::Overwrite(t) => Ok(t.put(key, value, &self.events)),
            Table::Chained(t) => {
                t.put(key, value, &self.events);
                Ok(PutOutcome::Placed)
            }
            Table::Probing(t) => {
                t.put(key, value, &self.events)?;
                Ok(PutOutcome::Placed)
            }
        }
    }

    /// Borrowed lookup; absence is `None`, never an error.
    pub fn get<Q>(&self, q: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let _g = self.reentry.lock();
        match &self.table {
            Table::Overwrite(t) => t.get(q),
            Table::Chained(t) => t.get(q),
            Table::Probing(t) => t.get(q, &self.events),
        }
    }

    pub fn contains_key<Q>(&self, q: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.get(q).is_some()
    }

    /// Remove an entry, returning the owned pair. Idempotent: deleting an
    /// absent key is a silent no-op returning `None`. Under Overwrite the
    /// home slot is cleared unconditionally, so the returned key may differ
    /// from `q` (source fidelity; see the strategy docs).
    pub fn delete<Q>(&mut self, q: &Q) -> Option<(K, V)>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let _g = self.reentry.lock();
        match &mut self.table {
            Table::Overwrite(t) => t.delete(q),
            Table::Chained(t) => t.delete(q, &self.events),
            Table::Probing(t) => t.delete(q, &self.events),
        }
    }

    /// Visit every stored entry in no particular order. Under Chaining,
    /// shadowed duplicates are visited too.
    pub fn iter(&self) -> Iter<'_, K, V> {
        let inner = match &self.table {
            Table::Overwrite(t) => IterInner::Direct(t.entries()),
            Table::Chained(t) => IterInner::Buckets(t.entries()),
            Table::Probing(t) => IterInner::Direct(t.entries()),
        };
        Iter { inner }
    }
}

/// Iterator over a map's stored entries; order is unspecified.
pub struct Iter<'a, K, V> {
    inner: IterInner<'a, K, V>,
}

enum IterInner<'a, K, V> {
    Direct(Occupants<'a, Entry<K, V>>),
    Buckets(bucket::Entries<'a, K, V>),
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        match &mut self.inner {
            IterInner::Direct(it) => it.next().map(|e| (&e.key, &e.value)),
            IterInner::Buckets(it) => it.next(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    /// Invariant: the strategy chosen at construction is reported back and
    /// capacity is fixed.
    #[test]
    fn construction_reports_strategy_and_capacity() {
        for s in [Strategy::Overwrite, Strategy::Chaining, Strategy::LinearProbing] {
            let m: FixedHashMap<String, u32> = FixedHashMap::new(8, s);
            assert_eq!(m.strategy(), s);
            assert_eq!(m.capacity(), 8);
            assert!(m.is_empty());
        }
    }

    /// Invariant: zero capacity is rejected for every strategy.
    #[test]
    #[should_panic(expected = "capacity must be non-zero")]
    fn zero_capacity_rejected() {
        let _: FixedHashMap<String, u32> = FixedHashMap::new(0, Strategy::Chaining);
    }

    /// Invariant: round-trip holds for every strategy while no collision
    /// interferes.
    #[test]
    fn round_trip_all_strategies() {
        for s in [Strategy::Overwrite, Strategy::Chaining, Strategy::LinearProbing] {
            let mut m: FixedHashMap<String, u32> = FixedHashMap::new(10, s);
            assert_eq!(m.put("a".into(), 1), Ok(PutOutcome::Placed));
            assert_eq!(m.put("bb".into(), 2), Ok(PutOutcome::Placed));
            assert_eq!(m.get("a"), Some(&1));
            assert_eq!(m.get("bb"), Some(&2));
            assert!(m.contains_key("a"));
            assert!(!m.contains_key("zzz"));
            assert_eq!(m.len(), 2);
        }
    }

    /// Invariant: delete-then-get is None, and deleting an absent key
    /// changes nothing observable.
    #[test]
    fn delete_then_get_all_strategies() {
        for s in [Strategy::Overwrite, Strategy::Chaining, Strategy::LinearProbing] {
            let mut m: FixedHashMap<String, u32> = FixedHashMap::new(10, s);
            m.put("a".into(), 1).unwrap();
            m.put("bb".into(), 2).unwrap();
            assert_eq!(m.delete("a"), Some(("a".into(), 1)));
            assert_eq!(m.get("a"), None);
            assert_eq!(m.delete("a"), None);
            assert_eq!(m.get("bb"), Some(&2));
            assert_eq!(m.len(), 1);
        }
    }

    /// Invariant: iteration yields each stored entry exactly once.
    #[test]
    fn iter_yields_each_entry_once() {
        for s in [Strategy::Overwrite, Strategy::Chaining, Strategy::LinearProbing] {
            let mut m: FixedHashMap<String, u32> = FixedHashMap::new(10, s);
            for (i, k) in ["a", "bb", "ccc"].iter().enumerate() {
                m.put((*k).to_string(), i as u32).unwrap();
            }
            let seen: BTreeSet<String> = m.iter().map(|(k, _)| k.clone()).collect();
            let expected: BTreeSet<String> =
                ["a", "bb", "ccc"].iter().map(|s| s.to_string()).collect();
            assert_eq!(seen, expected);
            assert_eq!(m.iter().count(), 3);
        }
    }

    /// Invariant: `PutError` is a real error type with a readable message.
    #[test]
    fn put_error_displays() {
        let e = PutError::TableFull;
        let msg = format!("{}", e);
        assert!(msg.contains("table full"));
        let _: &dyn std::error::Error = &e;
    }
}
