//! Tests for the IndexVec module.

use super::*;

crate::define_idx!(TestId);

#[test]
fn test_new_is_empty() {
    let vec: IndexVec<TestId, i32> = IndexVec::new();
    assert_eq!(vec.get(TestId(0)), None);

    let vec: IndexVec<TestId, i32> = IndexVec::default();
    assert_eq!(vec.get(TestId(0)), None);
}

#[test]
fn test_with_capacity_starts_at_zero() {
    let mut vec: IndexVec<TestId, i32> = IndexVec::with_capacity(10);
    assert_eq!(vec.get(TestId(0)), None);
    assert_eq!(vec.push(5), TestId(0));
}

#[test]
fn test_push_returns_sequential_ids() {
    let mut vec: IndexVec<TestId, &str> = IndexVec::new();
    assert_eq!(vec.push("a"), TestId(0));
    assert_eq!(vec.push("b"), TestId(1));
    assert_eq!(vec.push("c"), TestId(2));
    assert_eq!(vec[TestId(1)], "b");
    assert_eq!(vec.get(TestId(3)), None);
}

#[test]
fn test_get_and_get_mut() {
    let mut vec: IndexVec<TestId, Option<i32>> = IndexVec::new();
    let idx = vec.push(Some(42));

    assert_eq!(vec.get(idx), Some(&Some(42)));
    assert_eq!(vec.get(TestId(100)), None);

    // vacate the slot the way the space arena does
    let taken = vec.get_mut(idx).and_then(Option::take);
    assert_eq!(taken, Some(42));
    assert_eq!(vec[idx], None);
    assert!(vec.get_mut(TestId(7)).is_none());
}

#[test]
fn test_index_mut() {
    let mut vec: IndexVec<TestId, i32> = IndexVec::new();
    let idx = vec.push(1);
    vec[idx] += 9;
    assert_eq!(vec[idx], 10);
}

#[test]
fn test_clear() {
    let mut vec: IndexVec<TestId, i32> = IndexVec::new();
    vec.push(1);
    vec.push(2);

    vec.clear();
    assert_eq!(vec.get(TestId(0)), None);
    assert_eq!(vec.push(3), TestId(0));
}

#[test]
#[should_panic]
fn test_index_out_of_bounds() {
    let vec: IndexVec<TestId, i32> = IndexVec::new();
    let _ = vec[TestId(0)];
}
