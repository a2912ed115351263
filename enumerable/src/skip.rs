//! [`Skip`] stage.

/// Skips the first `count` elements, then yields the rest.
///
/// The skip happens in one [`Iterator::nth`] call on the first pull, which is an index offset
/// for indexed sources (see [`Stage`](crate::Stage)) and a pull-and-discard loop otherwise.
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Skip<I> {
    iter: I,
    remaining: usize,
}

impl<I> Skip<I>
where
    I: Iterator,
{
    /// Create with upstream `iter`, skipping `count` elements.
    pub fn new(iter: I, count: usize) -> Self {
        Self {
            iter,
            remaining: count,
        }
    }
}

impl<I> Iterator for Skip<I>
where
    I: Iterator,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if 0 < self.remaining {
            let n = core::mem::take(&mut self.remaining);
            self.iter.nth(n)
        } else {
            self.iter.next()
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lower, upper) = self.iter.size_hint();
        (
            lower.saturating_sub(self.remaining),
            upper.map(|upper| upper.saturating_sub(self.remaining)),
        )
    }
}
