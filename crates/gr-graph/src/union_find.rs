//! Disjoint-set (union-find) keyed by arbitrary hashable ids.
//!
//! Used by the reinforcement planner to detect cycles while building a
//! spanning forest. Keys never seen before behave as singleton sets of
//! rank 0, so callers may seed explicitly with [`DisjointSet::insert`] or
//! rely on lazy initialization.

use std::collections::HashMap;
use std::hash::Hash;

#[derive(Clone, Debug)]
pub struct DisjointSet<K> {
    parent: HashMap<K, K>,
    rank: HashMap<K, u32>,
}

impl<K> Default for DisjointSet<K> {
    fn default() -> Self {
        Self {
            parent: HashMap::new(),
            rank: HashMap::new(),
        }
    }
}

impl<K: Clone + Eq + Hash> DisjointSet<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed `key` as its own singleton set (resets it if already present).
    pub fn insert(&mut self, key: K) {
        self.rank.insert(key.clone(), 0);
        self.parent.insert(key.clone(), key);
    }

    /// Representative of the set containing `key`, compressing the path behind it.
    pub fn find(&mut self, key: &K) -> K {
        let mut root = key.clone();
        while let Some(parent) = self.parent.get(&root) {
            if *parent == root {
                break;
            }
            root = parent.clone();
        }

        // Point every node on the walked path straight at the root.
        let mut node = key.clone();
        while node != root {
            match self.parent.insert(node, root.clone()) {
                Some(next) => node = next,
                None => break,
            }
        }

        root
    }

    /// Merge the sets containing `a` and `b`.
    ///
    /// Returns false when they were already in the same set (in a spanning
    /// tree that edge would close a cycle).
    pub fn union(&mut self, a: &K, b: &K) -> bool {
        let ra = self.find(a);
        let rb = self.find(b);
        if ra == rb {
            return false;
        }

        let rank_a = self.rank_of(&ra);
        let rank_b = self.rank_of(&rb);
        if rank_a < rank_b {
            self.parent.insert(ra, rb);
        } else {
            self.parent.insert(rb, ra.clone());
            if rank_a == rank_b {
                self.rank.insert(ra, rank_a + 1);
            }
        }
        true
    }

    pub fn same_set(&mut self, a: &K, b: &K) -> bool {
        self.find(a) == self.find(b)
    }

    pub fn rank_of(&self, key: &K) -> u32 {
        self.rank.get(key).copied().unwrap_or(0)
    }
}
