//! [`Except`] stage.
use crate::equivalence::{Comparer, EquivalenceSet};

/// Yields the receiver's elements whose equivalence class does not occur in `other`.
///
/// `other` is drained into an [`EquivalenceSet`] on the first pull; the receiver is streamed.
/// Duplicates in the receiver are kept.
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Except<I, J, F>
where
    I: Iterator,
{
    iter: I,
    other: Option<J>,
    excluded: EquivalenceSet<I::Item, F>,
}

impl<I, J, F> Except<I, J, F>
where
    I: Iterator,
    J: Iterator<Item = I::Item>,
    F: Fn(&I::Item, &I::Item) -> bool,
{
    /// Create with receiver `iter`, excluded elements `other` and `comparer`.
    pub fn new(iter: I, other: J, comparer: Comparer<I::Item, F>) -> Self {
        Self {
            iter,
            other: Some(other),
            excluded: EquivalenceSet::new(comparer),
        }
    }
}

impl<I, J, F> Iterator for Except<I, J, F>
where
    I: Iterator,
    J: Iterator<Item = I::Item>,
    F: Fn(&I::Item, &I::Item) -> bool,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(other) = self.other.take() {
            for item in other {
                self.excluded.add(item);
            }
            tracing::trace!(excluded = self.excluded.len(), "except: drained argument");
        }

        self.iter
            .by_ref()
            .find(|item| !self.excluded.contains(item))
    }
}
