//! Stable multi-key ordering: [`OrderedEnumerable`] and its comparator chain.
//!
//! `order_by` starts a chain with one key; `then_by` and friends append secondary keys. Two
//! elements are compared key by key in chain order, stopping at the first key that is not
//! [`Ordering::Equal`], i.e. a lexicographic comparison of the key tuples. The sort is stable,
//! so elements equal on every key keep their source order.
//!
//! The chain is a builder that freezes on the first pull: `OrderedEnumerable` is not an
//! iterator, and pulling goes through [`IntoIterator`], which consumes the builder. There is
//! no way to append a key after elements have been produced.
use core::cmp::Ordering;

use crate::Query;

/// The default key comparer type, [`Ord::cmp`].
pub type OrdFn<K> = fn(&K, &K) -> Ordering;

/// Compares two elements of a sequence being ordered.
pub trait Comparator<T> {
    /// Compares `a` with `b`.
    fn compare(&mut self, a: &T, b: &T) -> Ordering;
}

/// Compares elements by the key `key(&item)`, with `cmp` on the keys, optionally descending.
pub struct KeyOrder<KS, C> {
    key: KS,
    cmp: C,
    descending: bool,
}

impl<KS, C> KeyOrder<KS, C> {
    /// Ascending by `key` under `cmp`.
    pub fn ascending(key: KS, cmp: C) -> Self {
        Self {
            key,
            cmp,
            descending: false,
        }
    }

    /// Descending by `key` under `cmp`.
    pub fn descending(key: KS, cmp: C) -> Self {
        Self {
            key,
            cmp,
            descending: true,
        }
    }
}

impl<T, K, KS, C> Comparator<T> for KeyOrder<KS, C>
where
    KS: FnMut(&T) -> K,
    C: FnMut(&K, &K) -> Ordering,
{
    fn compare(&mut self, a: &T, b: &T) -> Ordering {
        let (key_a, key_b) = ((self.key)(a), (self.key)(b));
        let ordering = (self.cmp)(&key_a, &key_b);
        if self.descending {
            ordering.reverse()
        } else {
            ordering
        }
    }
}

/// `first`, then `second` to break ties.
pub struct ThenBy<A, B> {
    first: A,
    second: B,
}

impl<T, A, B> Comparator<T> for ThenBy<A, B>
where
    A: Comparator<T>,
    B: Comparator<T>,
{
    fn compare(&mut self, a: &T, b: &T) -> Ordering {
        match self.first.compare(a, b) {
            Ordering::Equal => self.second.compare(a, b),
            ordering => ordering,
        }
    }
}

/// A sequence with an ordering under construction, see the [module docs](self).
#[must_use = "queries are lazy and do nothing unless consumed"]
pub struct OrderedEnumerable<I, C> {
    iter: I,
    comparator: C,
}

impl<I, C> OrderedEnumerable<I, C>
where
    I: Iterator,
    C: Comparator<I::Item>,
{
    pub(crate) fn new(iter: I, comparator: C) -> Self {
        Self { iter, comparator }
    }

    fn then<Next>(self, next: Next) -> OrderedEnumerable<I, ThenBy<C, Next>>
    where
        Next: Comparator<I::Item>,
    {
        OrderedEnumerable {
            iter: self.iter,
            comparator: ThenBy {
                first: self.comparator,
                second: next,
            },
        }
    }

    /// Breaks ties by `key`, ascending.
    pub fn then_by<KS, K>(
        self,
        key: KS,
    ) -> OrderedEnumerable<I, ThenBy<C, KeyOrder<KS, OrdFn<K>>>>
    where
        KS: FnMut(&I::Item) -> K,
        K: Ord,
    {
        let cmp: OrdFn<K> = K::cmp;
        self.then(KeyOrder::ascending(key, cmp))
    }

    /// Breaks ties by `key` compared with `cmp`, ascending.
    pub fn then_by_with<KS, K, Cmp>(
        self,
        key: KS,
        cmp: Cmp,
    ) -> OrderedEnumerable<I, ThenBy<C, KeyOrder<KS, Cmp>>>
    where
        KS: FnMut(&I::Item) -> K,
        Cmp: FnMut(&K, &K) -> Ordering,
    {
        self.then(KeyOrder::ascending(key, cmp))
    }

    /// Breaks ties by `key`, descending.
    pub fn then_by_descending<KS, K>(
        self,
        key: KS,
    ) -> OrderedEnumerable<I, ThenBy<C, KeyOrder<KS, OrdFn<K>>>>
    where
        KS: FnMut(&I::Item) -> K,
        K: Ord,
    {
        let cmp: OrdFn<K> = K::cmp;
        self.then(KeyOrder::descending(key, cmp))
    }

    /// Breaks ties by `key` compared with `cmp`, descending.
    pub fn then_by_descending_with<KS, K, Cmp>(
        self,
        key: KS,
        cmp: Cmp,
    ) -> OrderedEnumerable<I, ThenBy<C, KeyOrder<KS, Cmp>>>
    where
        KS: FnMut(&I::Item) -> K,
        Cmp: FnMut(&K, &K) -> Ordering,
    {
        self.then(KeyOrder::descending(key, cmp))
    }
}

impl<I, C> IntoIterator for OrderedEnumerable<I, C>
where
    I: Iterator,
    C: Comparator<I::Item>,
{
    type Item = I::Item;
    type IntoIter = Sorted<I, C>;

    fn into_iter(self) -> Self::IntoIter {
        Sorted {
            pending: Some((self.iter, self.comparator)),
            sorted: Vec::new().into_iter(),
        }
    }
}

impl<I, C> Query for OrderedEnumerable<I, C>
where
    I: Iterator,
    C: Comparator<I::Item>,
{
}

/// The pulling side of an [`OrderedEnumerable`]: buffers and sorts on the first pull.
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Sorted<I, C>
where
    I: Iterator,
{
    // Taken on the first pull.
    pending: Option<(I, C)>,
    sorted: std::vec::IntoIter<I::Item>,
}

impl<I, C> Iterator for Sorted<I, C>
where
    I: Iterator,
    C: Comparator<I::Item>,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some((iter, mut comparator)) = self.pending.take() {
            let mut buffer: Vec<_> = iter.collect();
            // Stable.
            buffer.sort_by(|a, b| comparator.compare(a, b));
            tracing::trace!(len = buffer.len(), "order_by: sorted source");
            self.sorted = buffer.into_iter();
        }
        self.sorted.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.pending {
            Some((iter, _)) => iter.size_hint(),
            None => self.sorted.size_hint(),
        }
    }
}
