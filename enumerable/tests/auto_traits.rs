use std::{slice, vec};

use enumerable::generate::{Range, Repeat};
use enumerable::ordered::Sorted;
use enumerable::{
    Comparer, Enumerable, EquivalenceIndex, EquivalenceSet, Error, Grouping, IdentityFn, KeyOrder,
    OrdFn, OrderedEnumerable, Stage,
};
use static_assertions::{assert_impl_all, assert_not_impl_any};

type ByKey = KeyOrder<fn(&(i32, String)) -> i32, OrdFn<i32>>;

assert_impl_all!(Enumerable<vec::IntoIter<String>>: Send, Sync);
assert_impl_all!(Enumerable<Range>: Send, Sync);
assert_impl_all!(Enumerable<slice::Iter<'static, String>, slice::Iter<'static, String>>: Send, Sync);
assert_impl_all!(Enumerable<Repeat<String>>: Send, Sync);
assert_impl_all!(Stage<vec::IntoIter<u8>>: Iterator, Send, Sync);
assert_impl_all!(OrderedEnumerable<vec::IntoIter<(i32, String)>, ByKey>: IntoIterator, Send);
assert_impl_all!(Sorted<vec::IntoIter<(i32, String)>, ByKey>: Iterator, Send);
assert_impl_all!(Comparer<String>: Send, Sync);
assert_impl_all!(EquivalenceIndex<String, Vec<u32>>: Send, Sync);
assert_impl_all!(EquivalenceSet<String, IdentityFn<String>>: Send, Sync);
assert_impl_all!(Grouping<String, u32>: Send, Sync, Clone);
assert_impl_all!(Error: std::error::Error, Send, Sync, Clone);

// Queries are not iterators, so `Iterator` methods never shadow query operators.
assert_not_impl_any!(Enumerable<vec::IntoIter<u8>>: Iterator);
assert_not_impl_any!(OrderedEnumerable<vec::IntoIter<(i32, String)>, ByKey>: Iterator);

#[test]
pub fn test_query_crosses_threads() {
    use enumerable::Query;

    let query = enumerable::from(vec![3, 1, 2]).select(|x, _| x * 2);
    let out = std::thread::spawn(move || query.to_vec()).join().unwrap();
    assert_eq!(vec![6, 2, 4], out);
}
