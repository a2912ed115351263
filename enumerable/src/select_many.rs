//! [`SelectMany`] and [`SelectManyWith`], the flattening projection stages.

/// Maps each element to an iterable with `func(item, index)` and flattens the results.
///
/// Like [`Iterator::flat_map`], with the element index.
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct SelectMany<I, F, C>
where
    C: IntoIterator,
{
    iter: I,
    func: F,
    index: usize,
    // Current inner iterator being drained.
    current: Option<C::IntoIter>,
}

impl<I, F, C> SelectMany<I, F, C>
where
    I: Iterator,
    F: FnMut(I::Item, usize) -> C,
    C: IntoIterator,
{
    /// Create with upstream `iter` and `func`.
    pub fn new(iter: I, func: F) -> Self {
        Self {
            iter,
            func,
            index: 0,
            current: None,
        }
    }
}

impl<I, F, C> Iterator for SelectMany<I, F, C>
where
    I: Iterator,
    F: FnMut(I::Item, usize) -> C,
    C: IntoIterator,
{
    type Item = C::Item;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(inner) = self.current.as_mut() {
                if let Some(item) = inner.next() {
                    return Some(item);
                }
                self.current = None;
            }

            let outer = self.iter.next()?;
            let index = self.index;
            self.index += 1;
            self.current = Some((self.func)(outer, index).into_iter());
        }
    }
}

/// Like [`SelectMany`], but each inner element is combined with its outer element by
/// `result(&outer, inner)`.
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct SelectManyWith<I, F, R, C>
where
    I: Iterator,
    C: IntoIterator,
{
    iter: I,
    func: F,
    result: R,
    index: usize,
    current: Option<(I::Item, C::IntoIter)>,
}

impl<I, F, R, C, U> SelectManyWith<I, F, R, C>
where
    I: Iterator,
    F: FnMut(&I::Item, usize) -> C,
    C: IntoIterator,
    R: FnMut(&I::Item, C::Item) -> U,
{
    /// Create with upstream `iter`, collection selector `func` and `result` selector.
    pub fn new(iter: I, func: F, result: R) -> Self {
        Self {
            iter,
            func,
            result,
            index: 0,
            current: None,
        }
    }
}

impl<I, F, R, C, U> Iterator for SelectManyWith<I, F, R, C>
where
    I: Iterator,
    F: FnMut(&I::Item, usize) -> C,
    C: IntoIterator,
    R: FnMut(&I::Item, C::Item) -> U,
{
    type Item = U;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some((outer, inner)) = self.current.as_mut() {
                if let Some(item) = inner.next() {
                    return Some((self.result)(outer, item));
                }
                self.current = None;
            }

            let outer = self.iter.next()?;
            let index = self.index;
            self.index += 1;
            let inner = (self.func)(&outer, index).into_iter();
            self.current = Some((outer, inner));
        }
    }
}
