//! Equivalence substrate shared by every operator that needs membership or keyed grouping.
//!
//! [`EquivalenceIndex`] is an insertion-ordered key/value index with two backings, chosen once
//! when the index is created from a [`Comparer`]:
//!
//! | Comparer              | Backing                                  | `find` / `insert` |
//! |-----------------------|------------------------------------------|-------------------|
//! | [`Comparer::identity`]| [`HashIndex`], a [`HashTable`] of slots  | O(1) amortized    |
//! | [`Comparer::custom`]  | [`LinearScanIndex`], a plain entry list  | O(n)              |
//!
//! A custom equivalence function cannot be hashed consistently, so the linear scan is the
//! price of correctness for arbitrary comparers. `distinct`, `union` and friends become O(n²)
//! on that path.
//!
//! Both backings keep entries in insertion order and never duplicate a key: the first key
//! inserted for an equivalence class is the one that is kept.

use core::hash::{BuildHasher, Hash};

use hashbrown::HashTable;
use rustc_hash::FxBuildHasher;

/// The default comparer function type, used when the comparer is [`Comparer::identity`].
pub type IdentityFn<K> = fn(&K, &K) -> bool;

/// Identity equality for `K`, i.e. its [`Eq`] and [`Hash`] impls.
pub struct Identity<K> {
    hash: fn(&K) -> u64,
    eq: fn(&K, &K) -> bool,
}

impl<K> Clone for Identity<K> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<K> Copy for Identity<K> {}

impl<K> Identity<K> {
    fn hash(&self, key: &K) -> u64 {
        (self.hash)(key)
    }

    fn eq(&self, a: &K, b: &K) -> bool {
        (self.eq)(a, b)
    }
}

fn hash_identity<K: Hash>(key: &K) -> u64 {
    FxBuildHasher.hash_one(key)
}

fn eq_identity<K: Eq>(a: &K, b: &K) -> bool {
    a == b
}

/// How keys are compared: identity equality or a caller-supplied equivalence function.
pub enum Comparer<K, F = IdentityFn<K>> {
    /// `Eq` + `Hash` identity, backed by a hash table.
    Identity(Identity<K>),
    /// A custom equivalence function `(stored, probe) -> bool`, backed by a linear scan.
    Custom(F),
}

impl<K> Comparer<K>
where
    K: Eq + Hash,
{
    /// Identity equality.
    pub fn identity() -> Self {
        Self::Identity(Identity {
            hash: hash_identity::<K>,
            eq: eq_identity::<K>,
        })
    }
}

impl<K, F> Comparer<K, F>
where
    F: Fn(&K, &K) -> bool,
{
    /// A custom equivalence function. Must be reflexive, symmetric and consistent for the
    /// lifetime of the operator using it.
    pub fn custom(eq: F) -> Self {
        Self::Custom(eq)
    }

    /// Returns if `a` and `b` are equivalent under this comparer.
    pub fn equivalent(&self, a: &K, b: &K) -> bool {
        match self {
            Self::Identity(identity) => identity.eq(a, b),
            Self::Custom(eq) => (eq)(a, b),
        }
    }
}

/// Hash-backed index, used for identity equality.
pub struct HashIndex<K, V> {
    slots: HashTable<usize>,
    entries: Vec<(K, V)>,
    identity: Identity<K>,
}

impl<K, V> HashIndex<K, V> {
    fn find(&self, key: &K) -> Option<usize> {
        let hash = self.identity.hash(key);
        self.find_hashed(hash, key)
    }

    fn find_hashed(&self, hash: u64, key: &K) -> Option<usize> {
        self.slots
            .find(hash, |&slot| self.identity.eq(&self.entries[slot].0, key))
            .copied()
    }

    fn find_or_push<A>(
        &mut self,
        key: K,
        arg: A,
        make: impl FnOnce(A) -> V,
    ) -> Result<usize, (usize, A)> {
        let hash = self.identity.hash(&key);
        if let Some(slot) = self.find_hashed(hash, &key) {
            return Err((slot, arg));
        }

        let slot = self.entries.len();
        self.entries.push((key, (make)(arg)));
        let Self {
            slots,
            entries,
            identity,
        } = self;
        slots.insert_unique(hash, slot, |&slot| identity.hash(&entries[slot].0));
        Ok(slot)
    }
}

/// Linear-scan index, used for custom equivalence functions.
pub struct LinearScanIndex<K, V, F> {
    entries: Vec<(K, V)>,
    eq: F,
}

impl<K, V, F> LinearScanIndex<K, V, F>
where
    F: Fn(&K, &K) -> bool,
{
    fn find(&self, key: &K) -> Option<usize> {
        self.entries
            .iter()
            .position(|(stored, _)| (self.eq)(stored, key))
    }

    fn find_or_push<A>(
        &mut self,
        key: K,
        arg: A,
        make: impl FnOnce(A) -> V,
    ) -> Result<usize, (usize, A)> {
        if let Some(slot) = self.find(&key) {
            return Err((slot, arg));
        }
        self.entries.push((key, (make)(arg)));
        Ok(self.entries.len() - 1)
    }
}

/// An insertion-ordered key/value index under an equivalence, see the [module docs](self).
///
/// Entries are addressed by *slot*, their insertion position, which stays valid for the
/// lifetime of the index.
pub enum EquivalenceIndex<K, V, F = IdentityFn<K>> {
    /// Selected for [`Comparer::Identity`].
    HashBacked(HashIndex<K, V>),
    /// Selected for [`Comparer::Custom`].
    LinearScanBacked(LinearScanIndex<K, V, F>),
}

impl<K, V, F> EquivalenceIndex<K, V, F>
where
    F: Fn(&K, &K) -> bool,
{
    /// Creates an empty index, selecting the backing from `comparer`.
    pub fn new(comparer: Comparer<K, F>) -> Self {
        match comparer {
            Comparer::Identity(identity) => Self::HashBacked(HashIndex {
                slots: HashTable::new(),
                entries: Vec::new(),
                identity,
            }),
            Comparer::Custom(eq) => {
                tracing::debug!("custom comparer, using linear-scan equivalence index");
                Self::LinearScanBacked(LinearScanIndex {
                    entries: Vec::new(),
                    eq,
                })
            }
        }
    }

    fn entries(&self) -> &Vec<(K, V)> {
        match self {
            Self::HashBacked(index) => &index.entries,
            Self::LinearScanBacked(index) => &index.entries,
        }
    }

    fn entries_mut(&mut self) -> &mut Vec<(K, V)> {
        match self {
            Self::HashBacked(index) => &mut index.entries,
            Self::LinearScanBacked(index) => &mut index.entries,
        }
    }

    /// Single lookup: `Err((slot, arg))` if an equivalent key exists, otherwise pushes
    /// `(key, make(arg))` and returns `Ok(slot)`.
    fn find_or_push<A>(
        &mut self,
        key: K,
        arg: A,
        make: impl FnOnce(A) -> V,
    ) -> Result<usize, (usize, A)> {
        match self {
            Self::HashBacked(index) => index.find_or_push(key, arg, make),
            Self::LinearScanBacked(index) => index.find_or_push(key, arg, make),
        }
    }

    /// Returns the slot of the entry equivalent to `key`.
    pub fn find(&self, key: &K) -> Option<usize> {
        match self {
            Self::HashBacked(index) => index.find(key),
            Self::LinearScanBacked(index) => index.find(key),
        }
    }

    /// Returns if an entry equivalent to `key` exists.
    pub fn contains(&self, key: &K) -> bool {
        self.find(key).is_some()
    }

    /// Inserts `(key, value)` unless an equivalent key exists.
    ///
    /// Returns the slot of the (new or existing) entry and whether it was inserted.
    pub fn insert_if_absent(&mut self, key: K, value: V) -> (usize, bool) {
        match self.find_or_push(key, value, |value| value) {
            Ok(slot) => (slot, true),
            Err((slot, _)) => (slot, false),
        }
    }

    /// Inserts `(key, value)`, replacing the value of an equivalent entry. The stored key is
    /// kept. Returns the replaced value.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        match self.find_or_push(key, value, |value| value) {
            Ok(_) => None,
            Err((slot, value)) => Some(core::mem::replace(self.value_at_mut(slot), value)),
        }
    }

    /// Returns the value for the entry equivalent to `key`, inserting `make()` if there is none.
    pub fn get_or_insert_with(&mut self, key: K, make: impl FnOnce() -> V) -> &mut V {
        let (Ok(slot) | Err((slot, ()))) = self.find_or_push(key, (), |()| (make)());
        self.value_at_mut(slot)
    }

    /// Returns the value for the entry equivalent to `key`.
    pub fn get(&self, key: &K) -> Option<&V> {
        self.find(key).map(|slot| &self.entries()[slot].1)
    }

    /// Returns the value for the entry equivalent to `key`, mutably.
    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        let slot = self.find(key)?;
        Some(self.value_at_mut(slot))
    }

    /// Returns the entry at `slot`.
    ///
    /// Panics if `slot` was not returned by this index.
    pub fn entry_at(&self, slot: usize) -> (&K, &V) {
        let (key, value) = &self.entries()[slot];
        (key, value)
    }

    /// Returns the value at `slot` mutably.
    ///
    /// Panics if `slot` was not returned by this index.
    pub fn value_at_mut(&mut self, slot: usize) -> &mut V {
        &mut self.entries_mut()[slot].1
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.entries().len()
    }

    /// If the index is empty (`len() == 0`).
    pub fn is_empty(&self) -> bool {
        0 == self.len()
    }

    /// Iterates entries in insertion order.
    pub fn iter(&self) -> core::slice::Iter<'_, (K, V)> {
        self.entries().iter()
    }
}

impl<K, V, F> IntoIterator for EquivalenceIndex<K, V, F> {
    type Item = (K, V);
    type IntoIter = std::vec::IntoIter<(K, V)>;

    /// Entries in insertion order.
    fn into_iter(self) -> Self::IntoIter {
        match self {
            Self::HashBacked(index) => index.entries.into_iter(),
            Self::LinearScanBacked(index) => index.entries.into_iter(),
        }
    }
}

/// A set of keys under an equivalence, backed by an [`EquivalenceIndex`].
pub struct EquivalenceSet<K, F = IdentityFn<K>> {
    index: EquivalenceIndex<K, (), F>,
}

impl<K, F> EquivalenceSet<K, F>
where
    F: Fn(&K, &K) -> bool,
{
    /// Creates an empty set, selecting the backing from `comparer`.
    pub fn new(comparer: Comparer<K, F>) -> Self {
        Self {
            index: EquivalenceIndex::new(comparer),
        }
    }

    /// Adds `key`, returning `true` if no equivalent key was present.
    pub fn add(&mut self, key: K) -> bool {
        self.index.insert_if_absent(key, ()).1
    }

    /// Returns if an equivalent key is present.
    pub fn contains(&self, key: &K) -> bool {
        self.index.contains(key)
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// If the set is empty.
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Returns if this set uses the hash-backed index.
    pub fn is_hash_backed(&self) -> bool {
        matches!(self.index, EquivalenceIndex::HashBacked(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ignore_case(a: &String, b: &String) -> bool {
        a.eq_ignore_ascii_case(b)
    }

    #[test]
    fn test_backing_selected_from_comparer() {
        let identity = EquivalenceSet::<u32>::new(Comparer::identity());
        assert!(identity.is_hash_backed());

        let custom = EquivalenceSet::new(Comparer::custom(|a: &u32, b: &u32| a % 10 == b % 10));
        assert!(!custom.is_hash_backed());
    }

    #[test]
    fn test_set_add_contains() {
        let mut set = EquivalenceSet::new(Comparer::identity());
        assert!(set.add(3));
        assert!(set.add(1));
        assert!(!set.add(3));
        assert!(set.contains(&1));
        assert!(!set.contains(&2));
        assert_eq!(2, set.len());
    }

    #[test]
    fn test_hash_index_grows() {
        let mut index = EquivalenceIndex::new(Comparer::identity());
        for i in 0..1000_u64 {
            assert_eq!((i as usize, true), index.insert_if_absent(i, i * 2));
        }
        for i in 0..1000_u64 {
            assert_eq!(Some(&(i * 2)), index.get(&i));
        }
        assert_eq!(None, index.get(&1000));
        assert_eq!(1000, index.len());
    }

    #[test]
    fn test_first_key_wins() {
        let mut index = EquivalenceIndex::new(Comparer::custom(ignore_case));
        assert_eq!(None, index.insert("Apple".to_owned(), 1));
        assert_eq!(Some(1), index.insert("APPLE".to_owned(), 2));
        assert_eq!(None, index.insert("pear".to_owned(), 3));

        let entries: Vec<_> = index.into_iter().collect();
        assert_eq!(
            vec![("Apple".to_owned(), 2), ("pear".to_owned(), 3)],
            entries
        );
    }

    #[test]
    fn test_insertion_order_hash_backed() {
        let mut index = EquivalenceIndex::new(Comparer::identity());
        for key in [5, 3, 9, 3, 1, 5] {
            index.get_or_insert_with(key, Vec::new).push(key);
        }
        let keys: Vec<_> = index.iter().map(|(k, _)| *k).collect();
        assert_eq!(vec![5, 3, 9, 1], keys);
        assert_eq!(Some(&vec![5, 5]), index.get(&5));
    }

    #[test]
    fn test_entry_at_and_value_at_mut() {
        let mut index = EquivalenceIndex::new(Comparer::custom(ignore_case));
        let (slot, inserted) = index.insert_if_absent("a".to_owned(), 0);
        assert!(inserted);
        *index.value_at_mut(slot) += 5;
        assert_eq!((&"a".to_owned(), &5), index.entry_at(slot));
        assert_eq!(Some(&mut 5), index.get_mut(&"A".to_owned()));
    }

    #[test]
    fn test_linear_scan_compares_once_per_entry() {
        use core::cell::Cell;

        let calls = Cell::new(0);
        let eq = |a: &u32, b: &u32| {
            calls.set(calls.get() + 1);
            a == b
        };
        let mut index = EquivalenceIndex::new(Comparer::custom(eq));
        for key in 0..4 {
            index.get_or_insert_with(key, Vec::new).push(key);
        }
        // 0 + 1 + 2 + 3 comparisons for four new keys.
        assert_eq!(6, calls.get());

        calls.set(0);
        assert_eq!(None, index.insert(9, vec![]));
        assert_eq!(Some(vec![9]), index.insert(9, vec![10]));
        assert_eq!((4, false), index.insert_if_absent(9, vec![]));
        // Miss scans 4 entries, each hit scans all 5.
        assert_eq!(4 + 5 + 5, calls.get());
        assert_eq!(Some(&vec![10]), index.get(&9));
    }

    #[test]
    fn test_comparer_equivalent() {
        assert!(Comparer::<i32>::identity().equivalent(&4, &4));
        assert!(!Comparer::<i32>::identity().equivalent(&4, &5));
        assert!(Comparer::custom(|a: &i32, b: &i32| a.abs() == b.abs()).equivalent(&-4, &4));
    }
}
