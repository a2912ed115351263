//! [`Grouping`], the item type of `group_by`.

/// A key and the elements that mapped to it, in source order.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grouping<K, T> {
    key: K,
    items: Vec<T>,
}

impl<K, T> Grouping<K, T> {
    pub(crate) fn new(key: K, items: Vec<T>) -> Self {
        Self { key, items }
    }

    /// The first key seen for this group.
    pub fn key(&self) -> &K {
        &self.key
    }

    /// The members of this group, in source order.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Number of members. Never zero.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Always `false`, a group has at least one member.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Splits into key and members.
    pub fn into_parts(self) -> (K, Vec<T>) {
        (self.key, self.items)
    }
}

impl<K, T> IntoIterator for Grouping<K, T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, K, T> IntoIterator for &'a Grouping<K, T> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
