//! [`Reverse`] stage.

/// Buffers the whole upstream on the first pull, then yields it back to front.
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Reverse<I>
where
    I: Iterator,
{
    // Taken on the first pull.
    iter: Option<I>,
    buffer: Vec<I::Item>,
}

impl<I> Reverse<I>
where
    I: Iterator,
{
    /// Create with upstream `iter`.
    pub fn new(iter: I) -> Self {
        Self {
            iter: Some(iter),
            buffer: Vec::new(),
        }
    }
}

impl<I> Iterator for Reverse<I>
where
    I: Iterator,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(iter) = self.iter.take() {
            self.buffer.extend(iter);
            tracing::trace!(len = self.buffer.len(), "reverse: buffered source");
        }
        self.buffer.pop()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.iter {
            Some(iter) => iter.size_hint(),
            None => (self.buffer.len(), Some(self.buffer.len())),
        }
    }
}
