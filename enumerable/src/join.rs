//! [`Join`] stage, an inner hash join.
use smallvec::SmallVec;

use crate::equivalence::{Comparer, EquivalenceIndex};

/// Inner join of an outer and an inner sequence on equivalent keys.
///
/// On the first pull the inner sequence is drained into an [`EquivalenceIndex`] from key to
/// its inner elements (in inner order). The outer sequence is then streamed: for each outer
/// element, `result(&outer, &inner)` is yielded for every matching inner element. Outer
/// elements without a match yield nothing.
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Join<O, N, OK, IK, R, K, F>
where
    O: Iterator,
    N: Iterator,
{
    outer: O,
    // Taken on the first pull.
    inner: Option<(N, IK)>,
    outer_key: OK,
    result: R,
    index: EquivalenceIndex<K, SmallVec<[N::Item; 1]>, F>,
    /// Outer element being matched, its slot in `index` and the next match position.
    current: Option<(O::Item, usize, usize)>,
}

impl<O, N, OK, IK, R, K, F, U> Join<O, N, OK, IK, R, K, F>
where
    O: Iterator,
    N: Iterator,
    OK: FnMut(&O::Item) -> K,
    IK: FnMut(&N::Item) -> K,
    R: FnMut(&O::Item, &N::Item) -> U,
    F: Fn(&K, &K) -> bool,
{
    /// Create a join of `outer` with `inner`.
    pub fn new(
        outer: O,
        inner: N,
        outer_key: OK,
        inner_key: IK,
        result: R,
        comparer: Comparer<K, F>,
    ) -> Self {
        Self {
            outer,
            inner: Some((inner, inner_key)),
            outer_key,
            result,
            index: EquivalenceIndex::new(comparer),
            current: None,
        }
    }

    fn build(&mut self) {
        let Some((inner, mut inner_key)) = self.inner.take() else {
            return;
        };
        let mut rows = 0_usize;
        for item in inner {
            let key = (inner_key)(&item);
            self.index.get_or_insert_with(key, SmallVec::new).push(item);
            rows += 1;
        }
        tracing::trace!(rows, keys = self.index.len(), "join: built inner index");
    }
}

impl<O, N, OK, IK, R, K, F, U> Iterator for Join<O, N, OK, IK, R, K, F>
where
    O: Iterator,
    N: Iterator,
    OK: FnMut(&O::Item) -> K,
    IK: FnMut(&N::Item) -> K,
    R: FnMut(&O::Item, &N::Item) -> U,
    F: Fn(&K, &K) -> bool,
{
    type Item = U;

    fn next(&mut self) -> Option<Self::Item> {
        self.build();

        loop {
            if let Some((outer, slot, pos)) = self.current.as_mut() {
                let (_, matches) = self.index.entry_at(*slot);
                if let Some(inner) = matches.get(*pos) {
                    *pos += 1;
                    return Some((self.result)(outer, inner));
                }
                self.current = None;
            }

            let outer = self.outer.next()?;
            let key = (self.outer_key)(&outer);
            if let Some(slot) = self.index.find(&key) {
                self.current = Some((outer, slot, 0));
            }
        }
    }
}
