//! [`Enumerable`], the entry point of every query, and its indexed specialization.
use std::collections::{VecDeque, vec_deque};
use std::{slice, vec};

use crate::error::{Error, Result, empty_sequence, index_out_of_range};
use crate::generate::{Range, Repeat};
use crate::{Query, terminal};

/// A lazy sequence. Operators come from the [`Query`] trait; pull elements with
/// [`IntoIterator`].
///
/// Sources with O(1) length and random access (see [`IntoEnumerable`]) are held as
/// [`Stage::Indexed`], which answers `count`, `element_at`, `last` and `skip` without a full
/// traversal. `X` is the iterator over such a source: owned storage by default, or a borrowed
/// slice.
#[must_use = "queries are lazy and do nothing unless consumed"]
pub struct Enumerable<I, X = vec::IntoIter<<I as Iterator>::Item>>
where
    I: Iterator,
{
    stage: Stage<I, X>,
}

/// How an [`Enumerable`] reaches its elements.
pub enum Stage<I, X = vec::IntoIter<<I as Iterator>::Item>>
where
    I: Iterator,
{
    /// Any iterator, pulled one element at a time.
    Generic(I),
    /// Contiguous storage, random access.
    Indexed(X),
}

impl<I, X> Iterator for Stage<I, X>
where
    I: Iterator,
    X: Iterator<Item = I::Item>,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            Self::Generic(iter) => iter.next(),
            Self::Indexed(items) => items.next(),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self {
            Self::Generic(iter) => iter.size_hint(),
            Self::Indexed(items) => items.size_hint(),
        }
    }

    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        match self {
            Self::Generic(iter) => iter.nth(n),
            Self::Indexed(items) => items.nth(n),
        }
    }
}

impl<I> Enumerable<I>
where
    I: Iterator,
{
    /// Wraps any iterable on the generic path.
    pub fn new<S>(source: S) -> Self
    where
        S: IntoIterator<IntoIter = I>,
    {
        Self {
            stage: Stage::Generic(source.into_iter()),
        }
    }
}

impl<I, X> Enumerable<I, X>
where
    I: Iterator,
{
    /// Returns if this sequence is on the indexed path.
    pub fn is_indexed(&self) -> bool {
        matches!(self.stage, Stage::Indexed(_))
    }
}

impl<I> Enumerable<I, I>
where
    I: ExactSizeIterator + DoubleEndedIterator,
{
    /// Wraps an iterator over random-access storage on the indexed path.
    ///
    /// `iter.nth` must be an offset rather than a pull loop, as it is for [`slice::Iter`] and
    /// [`vec::IntoIter`].
    pub fn from_indexed_iter(iter: I) -> Self {
        Self {
            stage: Stage::Indexed(iter),
        }
    }

    /// Moves this sequence to the generic path. Results are unchanged, only the cost of
    /// `count`, `element_at`, `last` and `skip` is.
    pub fn into_generic(self) -> Self {
        let stage = match self.stage {
            Stage::Indexed(items) => Stage::Generic(items),
            generic => generic,
        };
        Self { stage }
    }
}

impl<T> Enumerable<vec::IntoIter<T>> {
    /// Wraps `items` on the indexed path.
    pub fn indexed(items: Vec<T>) -> Self {
        Self::from_indexed_iter(items.into_iter())
    }

    /// An empty sequence.
    pub fn empty() -> Self {
        Self::indexed(Vec::new())
    }
}

impl Enumerable<Range> {
    /// `count` consecutive integers starting at `start`.
    ///
    /// Fails with [`Error::InvalidArgument`] if the last value, `start + count - 1`, does not
    /// fit in an `i64`. A `count` of zero is always accepted.
    pub fn range(start: i64, count: usize) -> Result<Self> {
        if 0 < count {
            let fits = i64::try_from(count - 1)
                .ok()
                .and_then(|offset| start.checked_add(offset))
                .is_some();
            if !fits {
                return Err(Error::InvalidArgument {
                    reason: "range end overflows i64",
                });
            }
        }
        Ok(Self::new(Range::bounded(start, count)))
    }

    /// Every integer from `start` on. Ends after `i64::MAX`.
    pub fn range_from(start: i64) -> Self {
        Self::new(Range::unbounded(start))
    }
}

impl<T> Enumerable<Repeat<T>>
where
    T: Clone,
{
    /// `value`, `count` times.
    pub fn repeat(value: T, count: usize) -> Self {
        Self::new(Repeat::new(value, Some(count)))
    }

    /// `value`, forever.
    pub fn repeat_unbounded(value: T) -> Self {
        Self::new(Repeat::new(value, None))
    }
}

impl<I, X> IntoIterator for Enumerable<I, X>
where
    I: Iterator,
    X: Iterator<Item = I::Item>,
{
    type Item = I::Item;
    type IntoIter = Stage<I, X>;

    fn into_iter(self) -> Self::IntoIter {
        self.stage
    }
}

impl<T> FromIterator<T> for Enumerable<vec::IntoIter<T>> {
    /// Collects into an indexed sequence.
    fn from_iter<S: IntoIterator<Item = T>>(source: S) -> Self {
        Self::indexed(source.into_iter().collect())
    }
}

/// Conversion into an [`Enumerable`], picking the indexed path where the source allows it.
///
/// Owned storage (`Vec`, arrays, `Box<[T]>`, `VecDeque`) is moved into a `Vec`. Borrowed
/// slices, `&Vec<T>`, `&[T; N]` and `&VecDeque<T>` are iterated in place and yield references.
pub trait IntoEnumerable {
    /// The upstream iterator of the resulting sequence.
    type Iter: Iterator;
    /// The iterator used on the indexed path.
    type Indexed: Iterator<Item = <Self::Iter as Iterator>::Item>;

    /// Performs the conversion.
    fn into_enumerable(self) -> Enumerable<Self::Iter, Self::Indexed>;
}

macro_rules! into_indexed {
    ($( <$( $gen:tt ),*> $src:ty => $iter:ty, |$this:ident| $body:expr; )+) => {
        $(
            impl<$( $gen ),*> IntoEnumerable for $src {
                type Iter = $iter;
                type Indexed = $iter;

                fn into_enumerable(self) -> Enumerable<Self::Iter, Self::Indexed> {
                    let $this = self;
                    Enumerable::from_indexed_iter($body)
                }
            }
        )+
    };
}

into_indexed! {
    <T> Vec<T> => vec::IntoIter<T>, |this| this.into_iter();
    <T> Box<[T]> => vec::IntoIter<T>, |this| this.into_vec().into_iter();
    <T> VecDeque<T> => vec::IntoIter<T>, |this| Vec::from(this).into_iter();
    <'a, T> &'a [T] => slice::Iter<'a, T>, |this| this.iter();
    <'a, T> &'a Vec<T> => slice::Iter<'a, T>, |this| this.iter();
    <'a, T> &'a VecDeque<T> => vec_deque::Iter<'a, T>, |this| this.iter();
}

impl<T, const N: usize> IntoEnumerable for [T; N] {
    type Iter = vec::IntoIter<T>;
    type Indexed = vec::IntoIter<T>;

    fn into_enumerable(self) -> Enumerable<Self::Iter, Self::Indexed> {
        Enumerable::indexed(Vec::from(self))
    }
}

impl<'a, T, const N: usize> IntoEnumerable for &'a [T; N] {
    type Iter = slice::Iter<'a, T>;
    type Indexed = slice::Iter<'a, T>;

    fn into_enumerable(self) -> Enumerable<Self::Iter, Self::Indexed> {
        Enumerable::from_indexed_iter(self.iter())
    }
}

impl<I, X> IntoEnumerable for Enumerable<I, X>
where
    I: Iterator,
    X: Iterator<Item = I::Item>,
{
    type Iter = I;
    type Indexed = X;

    fn into_enumerable(self) -> Enumerable<Self::Iter, Self::Indexed> {
        self
    }
}

impl<I, X> Query for Enumerable<I, X>
where
    I: Iterator,
    X: ExactSizeIterator + DoubleEndedIterator<Item = I::Item>,
{
    fn count(self) -> usize {
        match self.stage {
            Stage::Indexed(items) => items.len(),
            Stage::Generic(iter) => terminal::count(iter),
        }
    }

    fn element_at(self, index: usize) -> Result<Self::Item> {
        match self.stage {
            Stage::Indexed(mut items) => items.nth(index).ok_or_else(|| index_out_of_range(index)),
            Stage::Generic(iter) => terminal::element_at(iter, index),
        }
    }

    fn last(self) -> Result<Self::Item> {
        match self.stage {
            Stage::Indexed(mut items) => items.next_back().ok_or_else(empty_sequence),
            Stage::Generic(iter) => terminal::last_where(iter, |_| true).ok_or_else(empty_sequence),
        }
    }

    fn last_where<P>(self, pred: P) -> Result<Self::Item>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        let last = match self.stage {
            Stage::Indexed(items) => items.rev().find(pred),
            Stage::Generic(iter) => terminal::last_where(iter, pred),
        };
        last.ok_or_else(empty_sequence)
    }
}
