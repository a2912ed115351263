//! [`Filter`], the `where` stage.
use core::iter::FusedIterator;

/// Yields the elements for which `pred(&item, index)` holds.
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Filter<I, P> {
    iter: I,
    pred: P,
    index: usize,
}

impl<I, P> Filter<I, P>
where
    I: Iterator,
    P: FnMut(&I::Item, usize) -> bool,
{
    /// Create with upstream `iter` and predicate `pred`.
    pub fn new(iter: I, pred: P) -> Self {
        Self {
            iter,
            pred,
            index: 0,
        }
    }
}

impl<I, P> Iterator for Filter<I, P>
where
    I: Iterator,
    P: FnMut(&I::Item, usize) -> bool,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        for item in self.iter.by_ref() {
            let index = self.index;
            self.index += 1;
            if (self.pred)(&item, index) {
                return Some(item);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.iter.size_hint().1)
    }
}

impl<I, P> FusedIterator for Filter<I, P>
where
    I: FusedIterator,
    P: FnMut(&I::Item, usize) -> bool,
{
}
