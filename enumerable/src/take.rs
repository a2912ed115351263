//! [`Take`] stage.

/// Yields at most `count` elements.
///
/// Pulls upstream exactly `count` times at most: once the count is reached the upstream is
/// never touched again, which keeps infinite sources usable.
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Take<I> {
    iter: I,
    remaining: usize,
}

impl<I> Take<I>
where
    I: Iterator,
{
    /// Create with upstream `iter`, yielding at most `count` elements.
    pub fn new(iter: I, count: usize) -> Self {
        Self {
            iter,
            remaining: count,
        }
    }
}

impl<I> Iterator for Take<I>
where
    I: Iterator,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if 0 == self.remaining {
            return None;
        }
        self.remaining -= 1;
        let item = self.iter.next();
        if item.is_none() {
            self.remaining = 0;
        }
        item
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if 0 == self.remaining {
            return (0, Some(0));
        }
        let (lower, upper) = self.iter.size_hint();
        (
            lower.min(self.remaining),
            Some(upper.map_or(self.remaining, |upper| upper.min(self.remaining))),
        )
    }
}
