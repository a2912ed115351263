//! [`Concat`] stage.

/// Yields everything from `first`, then everything from `second`.
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Concat<I, J> {
    // Dropped once exhausted, so it is never pulled again.
    first: Option<I>,
    second: J,
}

impl<I, J> Concat<I, J>
where
    I: Iterator,
    J: Iterator<Item = I::Item>,
{
    /// Create from the two halves.
    pub fn new(first: I, second: J) -> Self {
        Self {
            first: Some(first),
            second,
        }
    }
}

impl<I, J> Iterator for Concat<I, J>
where
    I: Iterator,
    J: Iterator<Item = I::Item>,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(first) = self.first.as_mut() {
            if let Some(item) = first.next() {
                return Some(item);
            }
            self.first = None;
        }
        self.second.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lower, upper) = self.second.size_hint();
        match &self.first {
            None => (lower, upper),
            Some(first) => {
                let (first_lower, first_upper) = first.size_hint();
                (
                    first_lower.saturating_add(lower),
                    first_upper.zip(upper).and_then(|(a, b)| a.checked_add(b)),
                )
            }
        }
    }
}
