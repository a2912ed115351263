//! Source iterators synthesized without backing storage: [`Range`] and [`Repeat`].
use core::iter::FusedIterator;

/// Consecutive `i64`s, see [`Enumerable::range`](crate::Enumerable::range) and
/// [`Enumerable::range_from`](crate::Enumerable::range_from).
#[derive(Debug, Clone)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Range {
    next: Option<i64>,
    /// `None` if unbounded.
    remaining: Option<usize>,
}

impl Range {
    /// `count` values starting at `start`. The caller checks that the last value fits.
    pub(crate) fn bounded(start: i64, count: usize) -> Self {
        Self {
            next: Some(start),
            remaining: Some(count),
        }
    }

    /// Every value from `start` through `i64::MAX`.
    pub(crate) fn unbounded(start: i64) -> Self {
        Self {
            next: Some(start),
            remaining: None,
        }
    }
}

impl Iterator for Range {
    type Item = i64;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(remaining) = &mut self.remaining {
            if 0 == *remaining {
                return None;
            }
            *remaining -= 1;
        }
        let current = self.next?;
        self.next = current.checked_add(1);
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match (self.remaining, self.next) {
            (Some(remaining), _) => (remaining, Some(remaining)),
            (None, None) => (0, Some(0)),
            (None, Some(next)) => {
                // Ends after `i64::MAX`.
                let remaining = i128::from(i64::MAX) - i128::from(next) + 1;
                usize::try_from(remaining).map_or((usize::MAX, None), |n| (n, Some(n)))
            }
        }
    }
}

impl FusedIterator for Range {}

/// One value repeated, see [`Enumerable::repeat`](crate::Enumerable::repeat) and
/// [`Enumerable::repeat_unbounded`](crate::Enumerable::repeat_unbounded).
#[derive(Debug, Clone)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Repeat<T> {
    value: Option<T>,
    /// `None` if unbounded.
    remaining: Option<usize>,
}

impl<T> Repeat<T> {
    pub(crate) fn new(value: T, count: Option<usize>) -> Self {
        Self {
            value: Some(value),
            remaining: count,
        }
    }
}

impl<T> Iterator for Repeat<T>
where
    T: Clone,
{
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        match &mut self.remaining {
            None => self.value.clone(),
            Some(0) => None,
            Some(remaining) => {
                *remaining -= 1;
                if 0 == *remaining {
                    // Last one, give up the value instead of cloning.
                    self.value.take()
                } else {
                    self.value.clone()
                }
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.remaining {
            Some(remaining) => (remaining, Some(remaining)),
            None => (usize::MAX, None),
        }
    }
}

impl<T> FusedIterator for Repeat<T> where T: Clone {}
