//! [`SkipWhile`] stage.

enum Phase<P> {
    /// Still dropping elements while the predicate holds.
    Skipping { pred: P, index: usize },
    /// Predicate failed once, everything passes from here on.
    Passing,
}

/// Drops elements while `pred(&item, index)` holds, then yields the first rejected element and
/// everything after it.
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct SkipWhile<I, P> {
    iter: I,
    phase: Phase<P>,
}

impl<I, P> SkipWhile<I, P>
where
    I: Iterator,
    P: FnMut(&I::Item, usize) -> bool,
{
    /// Create with upstream `iter` and predicate `pred`.
    pub fn new(iter: I, pred: P) -> Self {
        Self {
            iter,
            phase: Phase::Skipping { pred, index: 0 },
        }
    }
}

impl<I, P> Iterator for SkipWhile<I, P>
where
    I: Iterator,
    P: FnMut(&I::Item, usize) -> bool,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if let Phase::Skipping { pred, index } = &mut self.phase {
            loop {
                let item = self.iter.next()?;
                let current = *index;
                *index += 1;
                if !(pred)(&item, current) {
                    self.phase = Phase::Passing;
                    return Some(item);
                }
            }
        }
        self.iter.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.phase {
            Phase::Skipping { .. } => (0, self.iter.size_hint().1),
            Phase::Passing => self.iter.size_hint(),
        }
    }
}
