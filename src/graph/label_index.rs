use ahash::RandomState;
use indexmap::{IndexMap, IndexSet};
use std::hash::Hash;

/// A reverse index from labels to the members currently carrying them.
///
/// Members are ids or id pairs, never owned vertices or edges.
/// Empty buckets are dropped, so the index always equals the mapping derived
/// from the adjacency it mirrors.
#[derive(Debug, Clone)]
pub(crate) struct LabelIndex<L, T>
where
    L: Hash + Eq,
    T: Hash + Eq,
{
    buckets: IndexMap<L, IndexSet<T, RandomState>, RandomState>,
}

impl<L, T> PartialEq for LabelIndex<L, T>
where
    L: Hash + Eq,
    T: Hash + Eq,
{
    fn eq(&self, other: &Self) -> bool {
        self.buckets == other.buckets
    }
}

impl<L, T> Eq for LabelIndex<L, T>
where
    L: Hash + Eq,
    T: Hash + Eq,
{
}

impl<L, T> LabelIndex<L, T>
where
    L: Hash + Eq,
    T: Hash + Eq + Copy,
{
    pub fn new() -> Self {
        Self {
            buckets: IndexMap::with_hasher(RandomState::new()),
        }
    }

    pub fn insert(&mut self, label: L, member: T) -> bool {
        self.buckets
            .entry(label)
            .or_insert_with(|| IndexSet::with_hasher(RandomState::new()))
            .insert(member)
    }

    pub fn remove(&mut self, label: &L, member: &T) -> bool {
        let bucket = match self.buckets.get_mut(label) {
            Some(bucket) => bucket,
            None => return false,
        };
        let removed = bucket.shift_remove(member);
        if bucket.is_empty() {
            self.buckets.shift_remove(label);
        }
        removed
    }

    pub fn contains(&self, label: &L, member: &T) -> bool {
        self.buckets
            .get(label)
            .map_or(false, |bucket| bucket.contains(member))
    }

    /// Iterates over members of `label` in the order they were indexed.
    pub fn members(&self, label: &L) -> impl Iterator<Item = T> + '_ {
        self.buckets
            .get(label)
            .into_iter()
            .flat_map(|bucket| bucket.iter().copied())
    }

    /// Copies members of `label` out, so callers can mutate the index while walking them.
    pub fn snapshot(&self, label: &L) -> Vec<T> {
        self.members(label).collect()
    }

    pub fn labels(&self) -> impl Iterator<Item = &L> + '_ {
        self.buckets.keys()
    }
}
