//! fixed-hashmap: A fixed-capacity, single-threaded keyed container with
//! pluggable collision-resolution strategies.
//!
//! Internal Design:
//!
//! Summary
//! - Goal: keep lookup, insert and delete consistent with each other under
//!   heavy collision load, across three behaviorally different collision
//!   policies, over one common fixed-capacity substrate.
//! - Layers:
//!   - SlotArray<C>: fixed-length optional-cell storage; capacity chosen at
//!     construction, never resized.
//!   - BucketArena<K, V>: slotmap-backed singly-linked bucket lists for the
//!     chaining strategy; links are generational keys, not pointers.
//!   - OverwriteTable / ChainedTable / ProbingTable: one table per
//!     strategy, all driving the same hash-to-home-slot reduction.
//!   - FixedHashMap<K, V, S>: public facade; strategy selected once at
//!     construction, dispatched by enum match.
//!
//! Constraints
//! - Single-threaded: `!Send`/`!Sync` by design (interior-mutable event
//!   counters, no atomics).
//! - No resize/rehash path; callers size the table for expected load.
//! - Ownership is strictly hierarchical: slots own entries or bucket
//!   heads, each bucket node owns the link to its successor. No `Rc`, no
//!   raw pointers, no cycles.
//! - The provided hasher is deliberately weak (key length modulo capacity,
//!   matching the reference behavior) so collisions are the common case,
//!   not the exception. Any `BuildHasher` can be substituted.
//!
//! Failure surfacing
//! - The reference behavior lost data silently in two places; both are
//!   explicit here: an Overwrite collision returns the destroyed pair as
//!   `PutOutcome::Evicted`, and a probing put into a full table returns
//!   `PutError::TableFull` leaving the table untouched.
//! - Absence is `Option`, never an error: `get`/`delete` on a missing key
//!   are non-exceptional.
//!
//! Reentrancy policy
//! - The tables call user code only via `K: Eq`/`Hash` while probing. A
//!   debug-only flag at each public entry point panics on nested entry;
//!   release builds compile it to a no-op.
//!
//! Notes and non-goals
//! - No thread safety, persistence, or iteration-order guarantees.
//! - The chaining strategy keeps the reference quirk of appending duplicate
//!   keys (first match wins on lookup) rather than replacing in place.
//! - No tombstones: probing lookups walk the full probe sequence, so
//!   deletion cannot hide a later colliding entry.
//! - Public API surface is `FixedHashMap` plus its strategy/outcome/error
//!   types and the provided hasher; lower layers are implementation
//!   details.

mod bucket;
mod chained;
mod events;
mod hash;
mod map;
mod map_proptest;
mod overwrite;
mod probing;
mod reentrancy;
mod slots;

// Public surface
pub use events::TableEvents;
pub use hash::{KeyLengthHasher, KeyLengthState};
pub use map::{FixedHashMap, Iter, PutError, PutOutcome, Strategy};
