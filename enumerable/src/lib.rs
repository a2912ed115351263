#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

use core::cmp::Ordering;
use core::hash::Hash;
use std::collections::{HashMap, HashSet};

mod concat;
pub use concat::Concat;
mod default_if_empty;
pub use default_if_empty::DefaultIfEmpty;
mod distinct;
pub use distinct::{Distinct, Union};
mod enumerable;
pub use enumerable::{Enumerable, IntoEnumerable, Stage};
pub mod equivalence;
pub use equivalence::{Comparer, EquivalenceIndex, EquivalenceSet, IdentityFn};
pub mod error;
pub use error::{ConstraintViolation, Error, Result};
mod except;
pub use except::Except;
mod filter;
pub use filter::Filter;
pub mod generate;
mod group_by;
pub use group_by::GroupBy;
mod grouping;
pub use grouping::Grouping;
mod intersect;
pub use intersect::Intersect;
mod join;
pub use join::Join;
mod numeric;
pub use numeric::Numeric;
pub mod ordered;
pub use ordered::{KeyOrder, OrdFn, OrderedEnumerable};
mod reverse;
pub use reverse::Reverse;
mod select;
pub use select::Select;
mod select_many;
pub use select_many::{SelectMany, SelectManyWith};
mod skip;
pub use skip::Skip;
mod skip_while;
pub use skip_while::SkipWhile;
mod take;
pub use take::Take;
mod take_while;
pub use take_while::TakeWhile;
mod terminal;
mod zip;
pub use zip::{Zip, ZipWith};

use crate::error::empty_sequence;

/// Starts a query over `source`, on the indexed path when `source` is contiguous storage.
pub fn from<S>(source: S) -> Enumerable<S::Iter, S::Indexed>
where
    S: IntoEnumerable,
{
    source.into_enumerable()
}

/// Starts a query over any iterable, on the generic path.
pub fn from_iter<S>(source: S) -> Enumerable<S::IntoIter>
where
    S: IntoIterator,
{
    Enumerable::new(source)
}

/// An empty query of `T`.
pub fn empty<T>() -> Enumerable<std::vec::IntoIter<T>> {
    Enumerable::empty()
}

/// The query operators, provided for [`Enumerable`] and [`OrderedEnumerable`].
///
/// Operators returning a sequence are lazy: they only build a stage, and nothing upstream is
/// pulled until the result is iterated or a terminal operator runs. Terminal operators consume
/// the query and pull only as much as they need to answer.
pub trait Query: IntoIterator + Sized {
    /// Keeps elements for which `pred(&item, index)` holds.
    fn filter<P>(self, pred: P) -> Enumerable<Filter<Self::IntoIter, P>>
    where
        P: FnMut(&Self::Item, usize) -> bool,
    {
        Enumerable::new(Filter::new(self.into_iter(), pred))
    }

    /// Maps each element with `func(item, index)`.
    fn select<F, U>(self, func: F) -> Enumerable<Select<Self::IntoIter, F>>
    where
        F: FnMut(Self::Item, usize) -> U,
    {
        Enumerable::new(Select::new(self.into_iter(), func))
    }

    /// Maps each element to a sequence with `func(item, index)` and flattens.
    fn select_many<F, C>(self, func: F) -> Enumerable<SelectMany<Self::IntoIter, F, C>>
    where
        F: FnMut(Self::Item, usize) -> C,
        C: IntoIterator,
    {
        Enumerable::new(SelectMany::new(self.into_iter(), func))
    }

    /// Maps each element to a sequence with `func(&item, index)`, then yields
    /// `result(&item, inner)` for every inner element.
    fn select_many_with<F, C, R, U>(
        self,
        func: F,
        result: R,
    ) -> Enumerable<SelectManyWith<Self::IntoIter, F, R, C>>
    where
        F: FnMut(&Self::Item, usize) -> C,
        C: IntoIterator,
        R: FnMut(&Self::Item, C::Item) -> U,
    {
        Enumerable::new(SelectManyWith::new(self.into_iter(), func, result))
    }

    /// Skips `count` elements.
    fn skip(self, count: usize) -> Enumerable<Skip<Self::IntoIter>> {
        Enumerable::new(Skip::new(self.into_iter(), count))
    }

    /// Skips elements while `pred(&item, index)` holds, then yields the rest.
    fn skip_while<P>(self, pred: P) -> Enumerable<SkipWhile<Self::IntoIter, P>>
    where
        P: FnMut(&Self::Item, usize) -> bool,
    {
        Enumerable::new(SkipWhile::new(self.into_iter(), pred))
    }

    /// Yields at most `count` elements, pulling exactly that many.
    fn take(self, count: usize) -> Enumerable<Take<Self::IntoIter>> {
        Enumerable::new(Take::new(self.into_iter(), count))
    }

    /// Yields elements while `pred(&item, index)` holds.
    fn take_while<P>(self, pred: P) -> Enumerable<TakeWhile<Self::IntoIter, P>>
    where
        P: FnMut(&Self::Item, usize) -> bool,
    {
        Enumerable::new(TakeWhile::new(self.into_iter(), pred))
    }

    /// Drops elements equal to one already yielded.
    fn distinct(self) -> Enumerable<Distinct<Self::IntoIter, IdentityFn<Self::Item>>>
    where
        Self::Item: Eq + Hash + Clone,
    {
        Enumerable::new(Distinct::new(self.into_iter(), Comparer::identity()))
    }

    /// Drops elements equivalent under `eq` to one already yielded.
    fn distinct_with<F>(self, eq: F) -> Enumerable<Distinct<Self::IntoIter, F>>
    where
        Self::Item: Clone,
        F: Fn(&Self::Item, &Self::Item) -> bool,
    {
        Enumerable::new(Distinct::new(self.into_iter(), Comparer::custom(eq)))
    }

    /// Distinct elements of `self` followed by those of `other`.
    fn union<S>(
        self,
        other: S,
    ) -> Enumerable<Union<Self::IntoIter, S::IntoIter, IdentityFn<Self::Item>>>
    where
        S: IntoIterator<Item = Self::Item>,
        Self::Item: Eq + Hash + Clone,
    {
        let concat = Concat::new(self.into_iter(), other.into_iter());
        Enumerable::new(Distinct::new(concat, Comparer::identity()))
    }

    /// [`Query::union`] under `eq`.
    fn union_with<S, F>(
        self,
        other: S,
        eq: F,
    ) -> Enumerable<Union<Self::IntoIter, S::IntoIter, F>>
    where
        S: IntoIterator<Item = Self::Item>,
        Self::Item: Clone,
        F: Fn(&Self::Item, &Self::Item) -> bool,
    {
        let concat = Concat::new(self.into_iter(), other.into_iter());
        Enumerable::new(Distinct::new(concat, Comparer::custom(eq)))
    }

    /// Elements with no equal element in `other`. Duplicates in `self` are kept.
    ///
    /// `other` is drained on the first pull.
    fn except<S>(
        self,
        other: S,
    ) -> Enumerable<Except<Self::IntoIter, S::IntoIter, IdentityFn<Self::Item>>>
    where
        S: IntoIterator<Item = Self::Item>,
        Self::Item: Eq + Hash,
    {
        Enumerable::new(Except::new(
            self.into_iter(),
            other.into_iter(),
            Comparer::identity(),
        ))
    }

    /// [`Query::except`] under `eq`.
    fn except_with<S, F>(
        self,
        other: S,
        eq: F,
    ) -> Enumerable<Except<Self::IntoIter, S::IntoIter, F>>
    where
        S: IntoIterator<Item = Self::Item>,
        F: Fn(&Self::Item, &Self::Item) -> bool,
    {
        Enumerable::new(Except::new(
            self.into_iter(),
            other.into_iter(),
            Comparer::custom(eq),
        ))
    }

    /// Elements with an equal element in `other`, each at most once, in `self`'s order.
    ///
    /// `other` is drained on the first pull.
    fn intersect<S>(
        self,
        other: S,
    ) -> Enumerable<Intersect<Self::IntoIter, S::IntoIter, IdentityFn<Self::Item>>>
    where
        S: IntoIterator<Item = Self::Item>,
        Self::Item: Eq + Hash,
    {
        Enumerable::new(Intersect::new(
            self.into_iter(),
            other.into_iter(),
            Comparer::identity(),
        ))
    }

    /// [`Query::intersect`] under `eq`.
    fn intersect_with<S, F>(
        self,
        other: S,
        eq: F,
    ) -> Enumerable<Intersect<Self::IntoIter, S::IntoIter, F>>
    where
        S: IntoIterator<Item = Self::Item>,
        F: Fn(&Self::Item, &Self::Item) -> bool,
    {
        Enumerable::new(Intersect::new(
            self.into_iter(),
            other.into_iter(),
            Comparer::custom(eq),
        ))
    }

    /// Everything in `self`, then everything in `other`.
    fn concat<S>(self, other: S) -> Enumerable<Concat<Self::IntoIter, S::IntoIter>>
    where
        S: IntoIterator<Item = Self::Item>,
    {
        Enumerable::new(Concat::new(self.into_iter(), other.into_iter()))
    }

    /// The elements in reverse order. Buffers the source on the first pull.
    fn reverse(self) -> Enumerable<Reverse<Self::IntoIter>> {
        Enumerable::new(Reverse::new(self.into_iter()))
    }

    /// The elements, or just `value` if there are none.
    fn default_if_empty(self, value: Self::Item) -> Enumerable<DefaultIfEmpty<Self::IntoIter>> {
        Enumerable::new(DefaultIfEmpty::new(self.into_iter(), value))
    }

    /// Groups elements by `key`, in order of each key's first occurrence.
    ///
    /// Drains the source on the first pull.
    fn group_by<KS, K>(
        self,
        key: KS,
    ) -> Enumerable<GroupBy<Self::IntoIter, KS, K, IdentityFn<K>>>
    where
        KS: FnMut(&Self::Item) -> K,
        K: Eq + Hash,
    {
        Enumerable::new(GroupBy::new(self.into_iter(), key, Comparer::identity()))
    }

    /// [`Query::group_by`] with keys compared under `eq`.
    fn group_by_with<KS, K, F>(
        self,
        key: KS,
        eq: F,
    ) -> Enumerable<GroupBy<Self::IntoIter, KS, K, F>>
    where
        KS: FnMut(&Self::Item) -> K,
        F: Fn(&K, &K) -> bool,
    {
        Enumerable::new(GroupBy::new(self.into_iter(), key, Comparer::custom(eq)))
    }

    /// Inner join with `inner` on equal keys, yielding `result(&outer, &inner)` per match.
    ///
    /// `inner` is indexed on the first pull, then `self` is streamed. Matches for one outer
    /// element come out in `inner`'s order.
    fn join<S, OK, IK, R, K, U>(
        self,
        inner: S,
        outer_key: OK,
        inner_key: IK,
        result: R,
    ) -> Enumerable<Join<Self::IntoIter, S::IntoIter, OK, IK, R, K, IdentityFn<K>>>
    where
        S: IntoIterator,
        OK: FnMut(&Self::Item) -> K,
        IK: FnMut(&S::Item) -> K,
        R: FnMut(&Self::Item, &S::Item) -> U,
        K: Eq + Hash,
    {
        Enumerable::new(Join::new(
            self.into_iter(),
            inner.into_iter(),
            outer_key,
            inner_key,
            result,
            Comparer::identity(),
        ))
    }

    /// [`Query::join`] with keys compared under `eq`.
    fn join_with<S, OK, IK, R, K, U, F>(
        self,
        inner: S,
        outer_key: OK,
        inner_key: IK,
        result: R,
        eq: F,
    ) -> Enumerable<Join<Self::IntoIter, S::IntoIter, OK, IK, R, K, F>>
    where
        S: IntoIterator,
        OK: FnMut(&Self::Item) -> K,
        IK: FnMut(&S::Item) -> K,
        R: FnMut(&Self::Item, &S::Item) -> U,
        F: Fn(&K, &K) -> bool,
    {
        Enumerable::new(Join::new(
            self.into_iter(),
            inner.into_iter(),
            outer_key,
            inner_key,
            result,
            Comparer::custom(eq),
        ))
    }

    /// Pairs elements by position, stopping when either side ends.
    fn zip<S>(self, other: S) -> Enumerable<Zip<Self::IntoIter, S::IntoIter>>
    where
        S: IntoIterator,
    {
        Enumerable::new(Zip::new(self.into_iter(), other.into_iter()))
    }

    /// Combines elements by position with `func`, stopping when either side ends.
    fn zip_with<S, F, U>(
        self,
        other: S,
        func: F,
    ) -> Enumerable<ZipWith<Self::IntoIter, S::IntoIter, F>>
    where
        S: IntoIterator,
        F: FnMut(Self::Item, S::Item) -> U,
    {
        Enumerable::new(ZipWith::new(self.into_iter(), other.into_iter(), func))
    }

    /// Sorts by `key`, ascending. Refine with [`OrderedEnumerable::then_by`].
    fn order_by<KS, K>(
        self,
        key: KS,
    ) -> OrderedEnumerable<Self::IntoIter, KeyOrder<KS, OrdFn<K>>>
    where
        KS: FnMut(&Self::Item) -> K,
        K: Ord,
    {
        let cmp: OrdFn<K> = K::cmp;
        OrderedEnumerable::new(self.into_iter(), KeyOrder::ascending(key, cmp))
    }

    /// Sorts by `key` compared with `cmp`, ascending.
    fn order_by_with<KS, K, C>(
        self,
        key: KS,
        cmp: C,
    ) -> OrderedEnumerable<Self::IntoIter, KeyOrder<KS, C>>
    where
        KS: FnMut(&Self::Item) -> K,
        C: FnMut(&K, &K) -> Ordering,
    {
        OrderedEnumerable::new(self.into_iter(), KeyOrder::ascending(key, cmp))
    }

    /// Sorts by `key`, descending.
    fn order_by_descending<KS, K>(
        self,
        key: KS,
    ) -> OrderedEnumerable<Self::IntoIter, KeyOrder<KS, OrdFn<K>>>
    where
        KS: FnMut(&Self::Item) -> K,
        K: Ord,
    {
        let cmp: OrdFn<K> = K::cmp;
        OrderedEnumerable::new(self.into_iter(), KeyOrder::descending(key, cmp))
    }

    /// Sorts by `key` compared with `cmp`, descending.
    fn order_by_descending_with<KS, K, C>(
        self,
        key: KS,
        cmp: C,
    ) -> OrderedEnumerable<Self::IntoIter, KeyOrder<KS, C>>
    where
        KS: FnMut(&Self::Item) -> K,
        C: FnMut(&K, &K) -> Ordering,
    {
        OrderedEnumerable::new(self.into_iter(), KeyOrder::descending(key, cmp))
    }

    /// Left fold seeded with the first element. `None` for an empty sequence.
    fn aggregate<F>(self, func: F) -> Option<Self::Item>
    where
        F: FnMut(Self::Item, Self::Item) -> Self::Item,
    {
        self.into_iter().reduce(func)
    }

    /// Left fold from `seed`.
    fn aggregate_seeded<A, F>(self, seed: A, func: F) -> A
    where
        F: FnMut(A, Self::Item) -> A,
    {
        self.into_iter().fold(seed, func)
    }

    /// Left fold from `seed`, then `result` applied to the accumulator.
    fn aggregate_with<A, F, R, U>(self, seed: A, func: F, result: R) -> U
    where
        F: FnMut(A, Self::Item) -> A,
        R: FnOnce(A) -> U,
    {
        (result)(self.aggregate_seeded(seed, func))
    }

    /// Returns if `pred` holds for every element. Stops at the first that fails.
    fn all<P>(self, mut pred: P) -> bool
    where
        P: FnMut(&Self::Item) -> bool,
    {
        for item in self {
            if !(pred)(&item) {
                return false;
            }
        }
        true
    }

    /// Returns if there is at least one element. Pulls at most one.
    fn any(self) -> bool {
        self.into_iter().next().is_some()
    }

    /// Returns if `pred` holds for some element. Stops at the first that does.
    fn any_where<P>(self, mut pred: P) -> bool
    where
        P: FnMut(&Self::Item) -> bool,
    {
        for item in self {
            if (pred)(&item) {
                return true;
            }
        }
        false
    }

    /// Arithmetic mean as `f64`. `NaN` for an empty sequence.
    fn average(self) -> f64
    where
        Self::Item: Numeric,
    {
        terminal::average(self.into_iter(), |item| item)
    }

    /// Arithmetic mean of `selector(item)`.
    fn average_by<N, S>(self, selector: S) -> f64
    where
        N: Numeric,
        S: FnMut(Self::Item) -> N,
    {
        terminal::average(self.into_iter(), selector)
    }

    /// Sum of the elements, zero for an empty sequence.
    fn sum(self) -> Self::Item
    where
        Self::Item: Numeric,
    {
        terminal::sum(self.into_iter(), |item| item)
    }

    /// Sum of `selector(item)`.
    fn sum_by<N, S>(self, selector: S) -> N
    where
        N: Numeric,
        S: FnMut(Self::Item) -> N,
    {
        terminal::sum(self.into_iter(), selector)
    }

    /// Number of elements.
    fn count(self) -> usize {
        terminal::count(self.into_iter())
    }

    /// Number of elements for which `pred` holds.
    fn count_where<P>(self, pred: P) -> usize
    where
        P: FnMut(&Self::Item) -> bool,
    {
        terminal::count_where(self.into_iter(), pred)
    }

    /// Returns if an element equals `value`.
    fn contains(self, value: &Self::Item) -> bool
    where
        Self::Item: PartialEq,
    {
        self.any_where(|item| item == value)
    }

    /// Returns if an element is equivalent to `value` under `eq(item, value)`.
    fn contains_with<F>(self, value: &Self::Item, eq: F) -> bool
    where
        F: Fn(&Self::Item, &Self::Item) -> bool,
    {
        self.any_where(|item| (eq)(item, value))
    }

    /// The element at `index`, failing with
    /// [`IndexOutOfRange`](ConstraintViolation::IndexOutOfRange) past the end.
    fn element_at(self, index: usize) -> Result<Self::Item> {
        terminal::element_at(self.into_iter(), index)
    }

    /// The element at `index`, or `default` past the end.
    fn element_at_or_default(self, index: usize, default: Self::Item) -> Self::Item {
        self.element_at(index).unwrap_or(default)
    }

    /// The first element, failing with [`EmptySequence`](ConstraintViolation::EmptySequence).
    fn first(self) -> Result<Self::Item> {
        self.into_iter().next().ok_or_else(empty_sequence)
    }

    /// The first element for which `pred` holds.
    fn first_where<P>(self, mut pred: P) -> Result<Self::Item>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        self.into_iter()
            .find(|item| (pred)(item))
            .ok_or_else(empty_sequence)
    }

    /// The first element, or `default`.
    fn first_or_default(self, default: Self::Item) -> Self::Item {
        self.first().unwrap_or(default)
    }

    /// The first element for which `pred` holds, or `default`.
    fn first_or_default_where<P>(self, default: Self::Item, pred: P) -> Self::Item
    where
        P: FnMut(&Self::Item) -> bool,
    {
        self.first_where(pred).unwrap_or(default)
    }

    /// The last element, failing with [`EmptySequence`](ConstraintViolation::EmptySequence).
    fn last(self) -> Result<Self::Item> {
        terminal::last_where(self.into_iter(), |_| true).ok_or_else(empty_sequence)
    }

    /// The last element for which `pred` holds.
    fn last_where<P>(self, pred: P) -> Result<Self::Item>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        terminal::last_where(self.into_iter(), pred).ok_or_else(empty_sequence)
    }

    /// The last element, or `default`.
    fn last_or_default(self, default: Self::Item) -> Self::Item {
        self.last().unwrap_or(default)
    }

    /// The last element for which `pred` holds, or `default`.
    fn last_or_default_where<P>(self, default: Self::Item, pred: P) -> Self::Item
    where
        P: FnMut(&Self::Item) -> bool,
    {
        self.last_where(pred).unwrap_or(default)
    }

    /// The only element. Fails with [`EmptySequence`](ConstraintViolation::EmptySequence) or
    /// [`MultipleMatches`](ConstraintViolation::MultipleMatches).
    fn single(self) -> Result<Self::Item> {
        self.single_where(|_| true)
    }

    /// The only element for which `pred` holds. Stops pulling at a second match.
    fn single_where<P>(self, pred: P) -> Result<Self::Item>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        terminal::single_where(self.into_iter(), pred)?.ok_or_else(empty_sequence)
    }

    /// The only element, or `default` if there is none. Still fails on a second element.
    fn single_or_default(self, default: Self::Item) -> Result<Self::Item> {
        self.single_or_default_where(default, |_| true)
    }

    /// The only element for which `pred` holds, or `default` if there is none. Still fails on a
    /// second match.
    fn single_or_default_where<P>(self, default: Self::Item, pred: P) -> Result<Self::Item>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        Ok(terminal::single_where(self.into_iter(), pred)?.unwrap_or(default))
    }

    /// The greatest element; ties keep the first seen.
    fn max(self) -> Result<Self::Item>
    where
        Self::Item: PartialOrd,
    {
        terminal::extremum(self.into_iter(), |best, item| item > best)
    }

    /// The element with the greatest `key`; ties keep the first seen.
    fn max_by_key<KS, K>(self, key: KS) -> Result<Self::Item>
    where
        KS: FnMut(&Self::Item) -> K,
        K: PartialOrd,
    {
        terminal::extremum_by_key(self.into_iter(), key, |best, item| item > best)
    }

    /// The least element; ties keep the first seen.
    fn min(self) -> Result<Self::Item>
    where
        Self::Item: PartialOrd,
    {
        terminal::extremum(self.into_iter(), |best, item| item < best)
    }

    /// The element with the least `key`; ties keep the first seen.
    fn min_by_key<KS, K>(self, key: KS) -> Result<Self::Item>
    where
        KS: FnMut(&Self::Item) -> K,
        K: PartialOrd,
    {
        terminal::extremum_by_key(self.into_iter(), key, |best, item| item < best)
    }

    /// Returns if both sequences have equal elements in the same order.
    fn sequence_equal<S>(self, other: S) -> bool
    where
        S: IntoIterator<Item = Self::Item>,
        Self::Item: PartialEq,
    {
        terminal::sequence_equal(self.into_iter(), other.into_iter(), |a, b| a == b)
    }

    /// [`Query::sequence_equal`] under `eq`.
    fn sequence_equal_with<S, F>(self, other: S, eq: F) -> bool
    where
        S: IntoIterator<Item = Self::Item>,
        F: Fn(&Self::Item, &Self::Item) -> bool,
    {
        terminal::sequence_equal(self.into_iter(), other.into_iter(), eq)
    }

    /// Collects into a map of `key(&item)` to `value(item)`. The last value wins for a repeated
    /// key.
    fn to_map<KS, VS, K, V>(self, mut key: KS, mut value: VS) -> HashMap<K, V>
    where
        KS: FnMut(&Self::Item) -> K,
        VS: FnMut(Self::Item) -> V,
        K: Eq + Hash,
    {
        self.into_iter()
            .map(|item| ((key)(&item), (value)(item)))
            .collect()
    }

    /// Collects into a set.
    fn to_set(self) -> HashSet<Self::Item>
    where
        Self::Item: Eq + Hash,
    {
        self.into_iter().collect()
    }

    /// Collects into a `Vec`, in order.
    fn to_vec(self) -> Vec<Self::Item> {
        self.into_iter().collect()
    }
}
