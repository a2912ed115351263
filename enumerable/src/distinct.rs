//! [`Distinct`] stage, and [`Union`] which is `Distinct` over a [`Concat`].
use crate::concat::Concat;
use crate::equivalence::{Comparer, EquivalenceSet};

/// Yields each equivalence class once, as its first occurrence, in source order.
///
/// Keeps a clone of every yielded element to recognize later duplicates.
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Distinct<I, F>
where
    I: Iterator,
{
    iter: I,
    seen: EquivalenceSet<I::Item, F>,
}

impl<I, F> Distinct<I, F>
where
    I: Iterator,
    I::Item: Clone,
    F: Fn(&I::Item, &I::Item) -> bool,
{
    /// Create with upstream `iter`, comparing elements with `comparer`.
    pub fn new(iter: I, comparer: Comparer<I::Item, F>) -> Self {
        Self {
            iter,
            seen: EquivalenceSet::new(comparer),
        }
    }
}

impl<I, F> Iterator for Distinct<I, F>
where
    I: Iterator,
    I::Item: Clone,
    F: Fn(&I::Item, &I::Item) -> bool,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        self.iter.by_ref().find(|item| self.seen.add(item.clone()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lower, upper) = self.iter.size_hint();
        (lower.min(1), upper)
    }
}

/// Set union: the distinct elements of `first` followed by those of `second` not already seen.
pub type Union<I, J, F> = Distinct<Concat<I, J>, F>;
