//! [`Intersect`] stage.
use crate::equivalence::{Comparer, EquivalenceIndex};

/// Yields the receiver's elements whose equivalence class occurs in `other`, each class once,
/// in receiver order.
///
/// `other` is drained on the first pull into an index of classes, each with a `claimed` flag
/// set once the class has been yielded.
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Intersect<I, J, F>
where
    I: Iterator,
{
    iter: I,
    other: Option<J>,
    candidates: EquivalenceIndex<I::Item, bool, F>,
}

impl<I, J, F> Intersect<I, J, F>
where
    I: Iterator,
    J: Iterator<Item = I::Item>,
    F: Fn(&I::Item, &I::Item) -> bool,
{
    /// Create with receiver `iter`, `other` and `comparer`.
    pub fn new(iter: I, other: J, comparer: Comparer<I::Item, F>) -> Self {
        Self {
            iter,
            other: Some(other),
            candidates: EquivalenceIndex::new(comparer),
        }
    }
}

impl<I, J, F> Iterator for Intersect<I, J, F>
where
    I: Iterator,
    J: Iterator<Item = I::Item>,
    F: Fn(&I::Item, &I::Item) -> bool,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(other) = self.other.take() {
            for item in other {
                self.candidates.insert_if_absent(item, false);
            }
            tracing::trace!(
                candidates = self.candidates.len(),
                "intersect: drained argument"
            );
        }

        for item in self.iter.by_ref() {
            let Some(slot) = self.candidates.find(&item) else {
                continue;
            };
            let claimed = self.candidates.value_at_mut(slot);
            if !*claimed {
                *claimed = true;
                return Some(item);
            }
        }
        None
    }
}
