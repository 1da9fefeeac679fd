//! Structured observability counters.
//!
//! The reference implementation narrated collisions and bucket churn to the
//! console. Here those moments are recorded as counters a caller can read
//! after the fact; the library itself never prints. Counters use `Cell` so
//! read-path operations (probing during `get`) can count too.

use core::cell::Cell;

/// Event counters for one map instance. Which counters move depends on the
/// strategy; the others stay at zero.
#[derive(Debug, Default)]
pub struct TableEvents {
    collisions: Cell<u64>,
    evictions: Cell<u64>,
    buckets_created: Cell<u64>,
    buckets_reclaimed: Cell<u64>,
    probe_steps: Cell<u64>,
    full_rejections: Cell<u64>,
}

impl TableEvents {
    /// Puts that found the home slot already claimed by another key.
    pub fn collisions(&self) -> u64 {
        self.collisions.get()
    }

    /// Entries destroyed by a colliding put (Overwrite strategy).
    pub fn evictions(&self) -> u64 {
        self.evictions.get()
    }

    /// Buckets lazily created on first put to a slot (Chaining strategy).
    pub fn buckets_created(&self) -> u64 {
        self.buckets_created.get()
    }

    /// Buckets destroyed when their last node was unlinked (Chaining
    /// strategy).
    pub fn buckets_reclaimed(&self) -> u64 {
        self.buckets_reclaimed.get()
    }

    /// Slots visited beyond the home slot (LinearProbing strategy).
    pub fn probe_steps(&self) -> u64 {
        self.probe_steps.get()
    }

    /// Puts rejected because the whole probe sequence was occupied
    /// (LinearProbing strategy).
    pub fn full_rejections(&self) -> u64 {
        self.full_rejections.get()
    }

    pub(crate) fn record_collision(&self) {
        bump(&self.collisions);
    }

    pub(crate) fn record_eviction(&self) {
        bump(&self.evictions);
    }

    pub(crate) fn record_bucket_created(&self) {
        bump(&self.buckets_created);
    }

    pub(crate) fn record_bucket_reclaimed(&self) {
        bump(&self.buckets_reclaimed);
    }

    pub(crate) fn record_probe_step(&self) {
        bump(&self.probe_steps);
    }

    pub(crate) fn record_full_rejection(&self) {
        bump(&self.full_rejections);
    }
}

fn bump(c: &Cell<u64>) {
    c.set(c.get().wrapping_add(1));
}
