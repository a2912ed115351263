//! Pull-loop implementations of the terminal operators, shared by every [`Query`](crate::Query)
//! implementor. The indexed specializations live in [`crate::enumerable`].

use itertools::{EitherOrBoth, Itertools};

use crate::error::{Result, empty_sequence, index_out_of_range, multiple_matches};
use crate::numeric::Numeric;

pub(crate) fn count<I>(iter: I) -> usize
where
    I: Iterator,
{
    iter.count()
}

pub(crate) fn count_where<I, P>(iter: I, mut pred: P) -> usize
where
    I: Iterator,
    P: FnMut(&I::Item) -> bool,
{
    iter.filter(|item| (pred)(item)).count()
}

pub(crate) fn element_at<I>(mut iter: I, index: usize) -> Result<I::Item>
where
    I: Iterator,
{
    iter.nth(index).ok_or_else(|| index_out_of_range(index))
}

pub(crate) fn last_where<I, P>(iter: I, mut pred: P) -> Option<I::Item>
where
    I: Iterator,
    P: FnMut(&I::Item) -> bool,
{
    let mut last = None;
    for item in iter {
        if (pred)(&item) {
            last = Some(item);
        }
    }
    last
}

/// `Ok(None)` if nothing matches, `Err` on the second match. Stops pulling at the second match.
pub(crate) fn single_where<I, P>(iter: I, mut pred: P) -> Result<Option<I::Item>>
where
    I: Iterator,
    P: FnMut(&I::Item) -> bool,
{
    let mut found = None;
    for item in iter {
        if !(pred)(&item) {
            continue;
        }
        if found.is_some() {
            return Err(multiple_matches());
        }
        found = Some(item);
    }
    Ok(found)
}

/// The element for which `replace(&best, &candidate)` never fired afterwards. Ties keep the
/// first-seen element as long as `replace` is strict.
pub(crate) fn extremum<I, R>(mut iter: I, mut replace: R) -> Result<I::Item>
where
    I: Iterator,
    R: FnMut(&I::Item, &I::Item) -> bool,
{
    let mut best = iter.next().ok_or_else(empty_sequence)?;
    for item in iter {
        if (replace)(&best, &item) {
            best = item;
        }
    }
    Ok(best)
}

/// Same as [`extremum`], comparing the selected keys; each key is computed once.
pub(crate) fn extremum_by_key<I, KS, K, R>(
    mut iter: I,
    mut key: KS,
    mut replace: R,
) -> Result<I::Item>
where
    I: Iterator,
    KS: FnMut(&I::Item) -> K,
    R: FnMut(&K, &K) -> bool,
{
    let mut best = iter.next().ok_or_else(empty_sequence)?;
    let mut best_key = (key)(&best);
    for item in iter {
        let item_key = (key)(&item);
        if (replace)(&best_key, &item_key) {
            best = item;
            best_key = item_key;
        }
    }
    Ok(best)
}

pub(crate) fn sum<I, N, S>(iter: I, mut selector: S) -> N
where
    I: Iterator,
    N: Numeric,
    S: FnMut(I::Item) -> N,
{
    iter.fold(N::ZERO, |acc, item| acc + (selector)(item))
}

/// `NaN` for an empty sequence.
pub(crate) fn average<I, N, S>(iter: I, mut selector: S) -> f64
where
    I: Iterator,
    N: Numeric,
    S: FnMut(I::Item) -> N,
{
    let (sum, count) = iter.fold((0.0_f64, 0_usize), |(sum, count), item| {
        (sum + (selector)(item).to_f64(), count + 1)
    });
    sum / count as f64
}

/// Position-by-position comparison; `false` at the first mismatch or when one side ends first.
pub(crate) fn sequence_equal<I, J, F>(iter: I, other: J, eq: F) -> bool
where
    I: Iterator,
    J: Iterator<Item = I::Item>,
    F: Fn(&I::Item, &I::Item) -> bool,
{
    for pair in iter.zip_longest(other) {
        match pair {
            EitherOrBoth::Both(a, b) if (eq)(&a, &b) => {}
            _ => return false,
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ConstraintViolation;

    #[test]
    fn test_extremum_keeps_first_of_ties() {
        let items = [(1, 'a'), (3, 'b'), (3, 'c'), (0, 'd')];
        let max = extremum_by_key(items.into_iter(), |&(k, _): &(i32, char)| k, |best, k| k > best);
        assert_eq!(Ok((3, 'b')), max);
        let min = extremum(items.into_iter(), |best, item| item.0 < best.0);
        assert_eq!(Ok((0, 'd')), min);
        assert_eq!(
            Some(ConstraintViolation::EmptySequence),
            extremum(core::iter::empty::<i32>(), |b, i| i > b)
                .unwrap_err()
                .constraint()
        );
    }

    #[test]
    fn test_single_where() {
        assert_eq!(Ok(None), single_where([1, 3].into_iter(), |&x: &i32| 0 == x % 2));
        assert_eq!(Ok(Some(2)), single_where([1, 2, 3].into_iter(), |&x: &i32| 0 == x % 2));
        assert!(single_where([2, 4].into_iter(), |&x: &i32| 0 == x % 2).is_err());
    }

    #[test]
    fn test_average_of_empty_is_nan() {
        assert!(average(core::iter::empty::<u8>(), |x| x).is_nan());
        assert_eq!(1.5, average([1_u8, 2].into_iter(), |x| x));
    }

    #[test]
    fn test_sequence_equal_lengths() {
        let eq = |a: &i32, b: &i32| a == b;
        assert!(sequence_equal([1, 2].into_iter(), [1, 2].into_iter(), eq));
        assert!(!sequence_equal([1].into_iter(), [1, 2].into_iter(), eq));
        assert!(!sequence_equal([1, 2].into_iter(), [1].into_iter(), eq));
    }
}
