//! [`Zip`] and [`ZipWith`] stages.

/// Pairs elements of two sequences in lockstep, stopping when either is exhausted.
///
/// The left side is pulled first, so an exhausted left side never causes a pull on the right.
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Zip<A, B> {
    left: A,
    right: B,
}

impl<A, B> Zip<A, B>
where
    A: Iterator,
    B: Iterator,
{
    /// Create from the `left` and `right` sequences.
    pub fn new(left: A, right: B) -> Self {
        Self { left, right }
    }
}

impl<A, B> Iterator for Zip<A, B>
where
    A: Iterator,
    B: Iterator,
{
    type Item = (A::Item, B::Item);

    fn next(&mut self) -> Option<Self::Item> {
        let left = self.left.next()?;
        let right = self.right.next()?;
        Some((left, right))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        zip_size_hint(self.left.size_hint(), self.right.size_hint())
    }
}

/// Same as [`Zip`], but combines each pair with `func(left, right)`.
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct ZipWith<A, B, F> {
    zip: Zip<A, B>,
    func: F,
}

impl<A, B, F, U> ZipWith<A, B, F>
where
    A: Iterator,
    B: Iterator,
    F: FnMut(A::Item, B::Item) -> U,
{
    /// Create from the `left` and `right` sequences and combining `func`.
    pub fn new(left: A, right: B, func: F) -> Self {
        Self {
            zip: Zip::new(left, right),
            func,
        }
    }
}

impl<A, B, F, U> Iterator for ZipWith<A, B, F>
where
    A: Iterator,
    B: Iterator,
    F: FnMut(A::Item, B::Item) -> U,
{
    type Item = U;

    fn next(&mut self) -> Option<Self::Item> {
        let (left, right) = self.zip.next()?;
        Some((self.func)(left, right))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.zip.size_hint()
    }
}

fn zip_size_hint(
    (left_lower, left_upper): (usize, Option<usize>),
    (right_lower, right_upper): (usize, Option<usize>),
) -> (usize, Option<usize>) {
    let upper = match (left_upper, right_upper) {
        (Some(a), Some(b)) => Some(a.min(b)),
        (a, b) => a.or(b),
    };
    (left_lower.min(right_lower), upper)
}
