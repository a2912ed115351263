use std::cmp::Ordering;

use enumerable::{Enumerable, Query, from, from_iter};

#[test]
pub fn test_filter_and_select_indices() {
    let out = from([10, 11, 12, 13]).filter(|_, i| 0 == i % 2).to_vec();
    assert_eq!(vec![10, 12], out);

    let out = from(["a", "b", "c"])
        .select(|s, i| format!("{}{}", s, i))
        .to_vec();
    assert_eq!(vec!["a0", "b1", "c2"], out);
}

#[test]
pub fn test_select_many() {
    let out = from(vec![vec![1, 2], vec![], vec![3]])
        .select_many(|v, _| v)
        .to_vec();
    assert_eq!(vec![1, 2, 3], out);

    let out = from(["ab", "c"])
        .select_many_with(
            |s, _| s.chars().collect::<Vec<_>>(),
            |s, c| format!("{}{}", s, c),
        )
        .to_vec();
    assert_eq!(vec!["aba", "abb", "cc"], out);
}

#[test]
pub fn test_skip_and_take() {
    assert_eq!(vec![3, 4], from([1, 2, 3, 4]).skip(2).to_vec());
    assert_eq!(vec![3, 4], from([1, 2, 3, 4]).into_generic().skip(2).to_vec());
    assert!(from([1, 2]).skip(10).to_vec().is_empty());
    assert_eq!(vec![1, 2], from([1, 2, 3, 4]).skip(0).take(2).to_vec());
    assert_eq!(vec![1, 2], from([1, 2]).take(10).to_vec());
}

#[test]
pub fn test_skip_while_and_take_while() {
    assert_eq!(
        vec![5, 1],
        from([1, 2, 5, 1]).skip_while(|&x, _| x < 3).to_vec()
    );
    assert_eq!(
        vec![1, 2],
        from([1, 2, 5, 1]).take_while(|&x, _| x < 3).to_vec()
    );
    assert_eq!(
        vec![7, 8],
        from([5, 6, 7, 8]).skip_while(|_, i| i < 2).to_vec()
    );
    assert_eq!(
        vec![5, 6],
        from([5, 6, 7, 8]).take_while(|_, i| i < 2).to_vec()
    );
}

#[test]
pub fn test_distinct() {
    assert_eq!(vec![3, 1, 2], from([3, 1, 3, 2, 1]).distinct().to_vec());
    let out = from(["a", "B", "A", "b", "c"])
        .distinct_with(|x, y| x.eq_ignore_ascii_case(y))
        .to_vec();
    assert_eq!(vec!["a", "B", "c"], out);
}

#[test]
pub fn test_union() {
    assert_eq!(
        vec![1, 2, 3, 4],
        from([1, 2, 2]).union([2, 3, 1, 4]).to_vec()
    );
    let out = from(["x", "Y"])
        .union_with(["y", "z"], |a, b| a.eq_ignore_ascii_case(b))
        .to_vec();
    assert_eq!(vec!["x", "Y", "z"], out);
}

#[test]
pub fn test_except_keeps_receiver_duplicates() {
    assert_eq!(vec![1, 3, 4], from([1, 2, 2, 3, 4]).except([2]).to_vec());
    assert_eq!(vec![1, 1], from([1, 1, 3]).except([3]).to_vec());
    let out = from([11, 25, 31, 7])
        .except_with([1], |a, b| a % 10 == b % 10)
        .to_vec();
    assert_eq!(vec![25, 7], out);
}

#[test]
pub fn test_intersect_each_class_once() {
    assert_eq!(
        vec![4, 1],
        from([4, 1, 4, 2, 1, 3]).intersect([1, 1, 4, 9]).to_vec()
    );
    let out = from([13, 21, 3, 44])
        .intersect_with([1, 3], |a, b| a % 10 == b % 10)
        .to_vec();
    assert_eq!(vec![13, 21], out);
}

#[test]
pub fn test_concat_reverse_default_if_empty() {
    assert_eq!(vec![1, 2, 3], from([1, 2]).concat(vec![3]).to_vec());
    assert_eq!(vec![3, 2, 1], from([1, 2, 3]).reverse().to_vec());
    assert_eq!(vec![9], enumerable::empty::<i32>().default_if_empty(9).to_vec());
    assert_eq!(vec![1], from([1]).default_if_empty(9).to_vec());
}

#[test]
pub fn test_group_by_first_occurrence_order() {
    let groups = from([1, 2, 1, 3, 2]).group_by(|&x| x).to_vec();
    let keys: Vec<_> = groups.iter().map(|group| *group.key()).collect();
    assert_eq!(vec![1, 2, 3], keys);
    assert_eq!(&[1, 1], groups[0].items());
    assert_eq!(&[2, 2], groups[1].items());
    assert_eq!(&[3], groups[2].items());
}

#[test]
pub fn test_group_by_with_keeps_first_key() {
    let groups = from([1, 12, 3, 15, 22])
        .group_by_with(|&x| x, |a, b| a % 10 == b % 10)
        .select(|group, _| group.into_parts())
        .to_vec();
    assert_eq!(
        vec![(1, vec![1]), (12, vec![12, 22]), (3, vec![3]), (15, vec![15])],
        groups
    );
}

#[test]
pub fn test_join_inner() {
    let out = from([1, 2, 3])
        .join(
            [(1, "x"), (1, "y"), (3, "z")],
            |&o| o,
            |&(k, _)| k,
            |&o, &(_, s)| (o, s),
        )
        .to_vec();
    assert_eq!(vec![(1, "x"), (1, "y"), (3, "z")], out);
}

#[test]
pub fn test_join_with() {
    let out = from(["Ann", "bob"])
        .join_with(
            [("ANN", 1), ("BOB", 2), ("ann", 3)],
            |&name| name,
            |&(name, _)| name,
            |&name, &(_, id)| (name, id),
            |a, b| a.eq_ignore_ascii_case(b),
        )
        .to_vec();
    assert_eq!(vec![("Ann", 1), ("Ann", 3), ("bob", 2)], out);
}

#[test]
pub fn test_zip() {
    assert_eq!(
        vec![(1, "a"), (2, "b")],
        from([1, 2, 3]).zip(["a", "b"]).to_vec()
    );
    assert_eq!(
        vec![11, 22],
        from([1, 2]).zip_with([10, 20, 30], |a, b| a + b).to_vec()
    );
}

#[test]
pub fn test_order_by_then_by() {
    let out = from([(1, "b"), (1, "a"), (2, "a")])
        .order_by(|&(k, _)| k)
        .then_by(|&(_, s)| s)
        .to_vec();
    assert_eq!(vec![(1, "a"), (1, "b"), (2, "a")], out);
}

#[test]
pub fn test_order_by_is_stable() {
    let out = from([(2, 'a'), (1, 'b'), (2, 'c'), (1, 'd')])
        .order_by(|&(k, _)| k)
        .to_vec();
    assert_eq!(vec![(1, 'b'), (1, 'd'), (2, 'a'), (2, 'c')], out);

    let out = from([(2, 'a'), (1, 'b'), (2, 'c'), (1, 'd')])
        .order_by_descending(|&(k, _)| k)
        .to_vec();
    assert_eq!(vec![(2, 'a'), (2, 'c'), (1, 'b'), (1, 'd')], out);
}

#[test]
pub fn test_order_by_with_comparers() {
    let out = from([2.5, -1.0, 0.5])
        .order_by_with(|&x| x, f64::total_cmp)
        .to_vec();
    assert_eq!(vec![-1.0, 0.5, 2.5], out);

    let out = from(["bb", "a", "ccc", "dd"])
        .order_by_descending_with(|s| s.len(), usize::cmp)
        .then_by_with(|&s| s, |a, b| b.cmp(a))
        .to_vec();
    assert_eq!(vec!["ccc", "dd", "bb", "a"], out);

    let out = from([(1, 'x'), (0, 'y'), (1, 'z')])
        .order_by_with(|&(k, _)| k, |a: &i32, b: &i32| -> Ordering { a.cmp(b) })
        .then_by_descending(|&(_, c)| c)
        .select(|(k, c), _| format!("{}{}", k, c))
        .to_vec();
    assert_eq!(vec!["0y", "1z", "1x"], out);
}

#[test]
pub fn test_generic_and_constructed_sources() {
    assert_eq!(vec![0, 1, 2], from_iter(0..3).to_vec());
    assert_eq!(
        vec![-1, 0, 1],
        Enumerable::range(-1, 3).unwrap().to_vec()
    );
    assert_eq!(vec!['z'; 2], Enumerable::repeat('z', 2).to_vec());
    assert_eq!(
        vec![1, 1, 1],
        Enumerable::repeat_unbounded(1).take(3).to_vec()
    );
}
