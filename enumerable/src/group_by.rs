//! [`GroupBy`] stage.
use crate::equivalence::{Comparer, EquivalenceIndex};
use crate::grouping::Grouping;

/// Groups elements by key, yielding [`Grouping`]s in order of first key occurrence.
///
/// Not streaming: the whole upstream is drained on the first pull, since any later element may
/// belong to an earlier group.
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct GroupBy<I, KS, K, F>
where
    I: Iterator,
{
    // Taken on the first pull.
    pending: Option<(I, KS, Comparer<K, F>)>,
    groups: std::vec::IntoIter<(K, Vec<I::Item>)>,
}

impl<I, KS, K, F> GroupBy<I, KS, K, F>
where
    I: Iterator,
    KS: FnMut(&I::Item) -> K,
    F: Fn(&K, &K) -> bool,
{
    /// Create with upstream `iter`, `key_selector` and key `comparer`.
    pub fn new(iter: I, key_selector: KS, comparer: Comparer<K, F>) -> Self {
        Self {
            pending: Some((iter, key_selector, comparer)),
            groups: Vec::new().into_iter(),
        }
    }
}

impl<I, KS, K, F> Iterator for GroupBy<I, KS, K, F>
where
    I: Iterator,
    KS: FnMut(&I::Item) -> K,
    F: Fn(&K, &K) -> bool,
{
    type Item = Grouping<K, I::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some((iter, mut key_selector, comparer)) = self.pending.take() {
            let mut index = EquivalenceIndex::new(comparer);
            for item in iter {
                let key = (key_selector)(&item);
                index.get_or_insert_with(key, Vec::new).push(item);
            }
            tracing::trace!(groups = index.len(), "group_by: drained source");
            self.groups = index.into_iter();
        }

        let (key, items) = self.groups.next()?;
        Some(Grouping::new(key, items))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.pending {
            Some((iter, _, _)) => (iter.size_hint().0.min(1), iter.size_hint().1),
            None => self.groups.size_hint(),
        }
    }
}
