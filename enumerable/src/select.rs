//! [`Select`], the projection stage.

/// Yields `func(item, index)` for each upstream element.
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Select<I, F> {
    iter: I,
    func: F,
    index: usize,
}

impl<I, F, U> Select<I, F>
where
    I: Iterator,
    F: FnMut(I::Item, usize) -> U,
{
    /// Create with upstream `iter` and projection `func`.
    pub fn new(iter: I, func: F) -> Self {
        Self {
            iter,
            func,
            index: 0,
        }
    }
}

impl<I, F, U> Iterator for Select<I, F>
where
    I: Iterator,
    F: FnMut(I::Item, usize) -> U,
{
    type Item = U;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.iter.next()?;
        let index = self.index;
        self.index += 1;
        Some((self.func)(item, index))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}
