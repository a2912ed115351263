//! [`TakeWhile`] stage.

/// Yields elements while `pred(&item, index)` holds, stopping at the first rejected element.
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct TakeWhile<I, P> {
    iter: I,
    pred: P,
    index: usize,
    done: bool,
}

impl<I, P> TakeWhile<I, P>
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
            done: false,
        }
    }
}

impl<I, P> Iterator for TakeWhile<I, P>
where
    I: Iterator,
    P: FnMut(&I::Item, usize) -> bool,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let item = self.iter.next();
        let accepted = item.filter(|item| {
            let index = self.index;
            self.index += 1;
            (self.pred)(item, index)
        });
        self.done = accepted.is_none();
        accepted
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            (0, Some(0))
        } else {
            (0, self.iter.size_hint().1)
        }
    }
}
