//! Arena-backed singly-linked bucket lists for the chaining strategy.
//!
//! Nodes live in one `SlotMap` arena shared by every bucket of a table;
//! links are generational keys rather than pointers, so a stale key can
//! never alias a reused node. A bucket is identified by its head key; the
//! slot array stores at most one head per slot. List order is append order,
//! and lookups return the first match, so a duplicate key appended later is
//! shadowed by the earlier node.

use core::borrow::Borrow;
use slotmap::{DefaultKey, SlotMap};

#[derive(Debug)]
struct BucketNode<K, V> {
    key: K,
    value: V,
    next: Option<DefaultKey>,
}

/// Node storage for all buckets of one table.
#[derive(Debug)]
pub(crate) struct BucketArena<K, V> {
    nodes: SlotMap<DefaultKey, BucketNode<K, V>>,
}

impl<K, V> BucketArena<K, V> {
    pub(crate) fn new() -> Self {
        Self {
            nodes: SlotMap::with_key(),
        }
    }

    /// Total nodes across all buckets.
    pub(crate) fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Append a node at the tail of the bucket rooted at `head`, returning
    /// the bucket's head afterwards (the new node when the bucket did not
    /// exist yet).
    pub(crate) fn push_tail(&mut self, head: Option<DefaultKey>, key: K, value: V) -> DefaultKey {
        let node = self.nodes.insert(BucketNode {
            key,
            value,
            next: None,
        });
        match head {
            None => node,
            Some(h) => {
                let mut tail = h;
                while let Some(next) = self.nodes[tail].next {
                    tail = next;
                }
                self.nodes[tail].next = Some(node);
                h
            }
        }
    }

    /// Scan the bucket in insertion order; first key match wins.
    pub(crate) fn find_first<Q>(&self, head: Option<DefaultKey>, q: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Eq,
    {
        let mut cur = head;
        while let Some(k) = cur {
            let node = &self.nodes[k];
            if node.key.borrow() == q {
                return Some(&node.value);
            }
            cur = node.next;
        }
        None
    }

    /// Unlink the first node matching `q` from the bucket rooted at `head`.
    /// Returns the bucket's new head (`None` when the unlink emptied it) and
    /// the removed pair.
    pub(crate) fn unlink_first<Q>(
        &mut self,
        head: DefaultKey,
        q: &Q,
    ) -> (Option<DefaultKey>, Option<(K, V)>)
    where
        K: Borrow<Q>,
        Q: ?Sized + Eq,
    {
        if self.nodes[head].key.borrow() == q {
            // Head special case: the bucket re-roots at the successor.
            let node = self.nodes.remove(head).unwrap();
            return (node.next, Some((node.key, node.value)));
        }

        let mut prev = head;
        while let Some(cur) = self.nodes[prev].next {
            if self.nodes[cur].key.borrow() == q {
                let node = self.nodes.remove(cur).unwrap();
                self.nodes[prev].next = node.next;
                return (Some(head), Some((node.key, node.value)));
            }
            prev = cur;
        }
        (Some(head), None)
    }

    /// Every stored node, shadowed duplicates included, in arena order.
    pub(crate) fn entries(&self) -> Entries<'_, K, V> {
        Entries {
            it: self.nodes.values(),
        }
    }
}

/// Iterator over all stored nodes across every bucket.
pub(crate) struct Entries<'a, K, V> {
    it: slotmap::basic::Values<'a, DefaultKey, BucketNode<K, V>>,
}

impl<'a, K, V> Iterator for Entries<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.it.next().map(|n| (&n.key, &n.value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bucket_keys(arena: &BucketArena<String, u32>, head: Option<DefaultKey>) -> Vec<String> {
        let mut out = Vec::new();
        let mut cur = head;
        while let Some(k) = cur {
            let node = &arena.nodes[k];
            out.push(node.key.clone());
            cur = node.next;
        }
        out
    }

    /// Invariant: push_tail preserves insertion order and keeps the original
    /// head for an existing bucket.
    #[test]
    fn push_tail_appends_in_order() {
        let mut a: BucketArena<String, u32> = BucketArena::new();
        let h = a.push_tail(None, "a".into(), 1);
        let h2 = a.push_tail(Some(h), "b".into(), 2);
        let h3 = a.push_tail(Some(h2), "c".into(), 3);
        assert_eq!(h, h2);
        assert_eq!(h, h3);
        assert_eq!(bucket_keys(&a, Some(h)), vec!["a", "b", "c"]);
        assert_eq!(a.len(), 3);
    }

    /// Invariant: lookup returns the first match in insertion order, so a
    /// later duplicate is shadowed.
    #[test]
    fn find_first_shadows_duplicates() {
        let mut a: BucketArena<String, u32> = BucketArena::new();
        let h = a.push_tail(None, "k".into(), 1);
        a.push_tail(Some(h), "k".into(), 2);
        assert_eq!(a.find_first(Some(h), "k"), Some(&1));
        assert_eq!(a.find_first(Some(h), "missing"), None);
        assert_eq!(a.find_first(None, "k"), None);
    }

    /// Invariant: unlinking the head re-roots the bucket at its successor;
    /// unlinking the only node empties the bucket.
    #[test]
    fn unlink_head_and_last() {
        let mut a: BucketArena<String, u32> = BucketArena::new();
        let h = a.push_tail(None, "a".into(), 1);
        a.push_tail(Some(h), "b".into(), 2);

        let (h, removed) = a.unlink_first(h, "a");
        assert_eq!(removed, Some(("a".into(), 1)));
        let h = h.expect("bucket still has a node");
        assert_eq!(bucket_keys(&a, Some(h)), vec!["b"]);

        let (h, removed) = a.unlink_first(h, "b");
        assert_eq!(removed, Some(("b".into(), 2)));
        assert!(h.is_none(), "bucket emptied");
        assert_eq!(a.len(), 0);
    }

    /// Invariant: unlinking a middle node relinks its predecessor to its
    /// successor; a missing key leaves the bucket untouched.
    #[test]
    fn unlink_middle_relinks() {
        let mut a: BucketArena<String, u32> = BucketArena::new();
        let h = a.push_tail(None, "a".into(), 1);
        a.push_tail(Some(h), "b".into(), 2);
        a.push_tail(Some(h), "c".into(), 3);

        let (h2, removed) = a.unlink_first(h, "b");
        assert_eq!(removed, Some(("b".into(), 2)));
        assert_eq!(h2, Some(h));
        assert_eq!(bucket_keys(&a, h2), vec!["a", "c"]);

        let (h3, removed) = a.unlink_first(h, "zz");
        assert_eq!(removed, None);
        assert_eq!(h3, Some(h));
        assert_eq!(bucket_keys(&a, h3), vec!["a", "c"]);
    }
}
