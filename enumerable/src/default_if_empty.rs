//! [`DefaultIfEmpty`] stage.

/// Passes the upstream through, or yields a single fallback value if it was empty.
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct DefaultIfEmpty<I>
where
    I: Iterator,
{
    iter: I,
    // Cleared as soon as upstream yields anything.
    default: Option<I::Item>,
}

impl<I> DefaultIfEmpty<I>
where
    I: Iterator,
{
    /// Create with upstream `iter` and fallback `default`.
    pub fn new(iter: I, default: I::Item) -> Self {
        Self {
            iter,
            default: Some(default),
        }
    }
}

impl<I> Iterator for DefaultIfEmpty<I>
where
    I: Iterator,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        match self.iter.next() {
            Some(item) => {
                self.default = None;
                Some(item)
            }
            None => self.default.take(),
        }
    }
}
