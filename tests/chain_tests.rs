//! Tests for the fluent chain wrapper.
//!
//! Covers the Created -> (filter | map)* -> result life cycle, index
//! handling, and the value semantics of every intermediate chain.

#![cfg(feature = "chain")]

use rstest::{fixture, rstest};
use seqfn::chain::{Chain, start};

#[derive(Debug, Clone, PartialEq, Eq)]
struct User {
    id: u32,
    name: String,
    age: u32,
}

impl User {
    fn new(id: u32, name: &str, age: u32) -> Self {
        Self {
            id,
            name: name.to_string(),
            age,
        }
    }
}

#[fixture]
fn users() -> Vec<User> {
    vec![
        User::new(1, "Alice", 30),
        User::new(2, "Bob", 25),
        User::new(3, "Charlie", 35),
    ]
}

// =============================================================================
// Filter then map
// =============================================================================

#[rstest]
fn test_filter_then_map_users(users: Vec<User>) {
    let result = Chain::start(&users)
        .filter(|user, _| user.age >= 30)
        .map(|user, _| User {
            name: user.name.to_uppercase(),
            ..user.clone()
        })
        .result();

    let expected = vec![User::new(1, "ALICE", 30), User::new(3, "CHARLIE", 35)];
    assert_eq!(result, expected);
}

#[rstest]
fn test_chain_does_not_mutate_input(users: Vec<User>) {
    let snapshot = users.clone();
    let _ = start(&users).map(|user, _| User::new(0, "", user.age + 1)).result();
    assert_eq!(users, snapshot);
}

// =============================================================================
// Index handling
// =============================================================================

#[rstest]
#[case(vec![10, 20, 30, 40, 50], vec![10, 30, 50])]
#[case(vec![7], vec![7])]
#[case(vec![], vec![])]
fn test_filter_by_index(#[case] input: Vec<i32>, #[case] expected: Vec<i32>) {
    let even_positions = Chain::start(&input).filter(|_, index| index % 2 == 0);
    assert_eq!(even_positions.result(), expected);
}

#[rstest]
fn test_indices_restart_for_each_step() {
    let mut seen = Vec::new();
    let _ = Chain::start(&["a", "b", "c", "d"])
        .filter(|_, index| index >= 2)
        .map(|letter, index| {
            seen.push(index);
            *letter
        });
    assert_eq!(seen, vec![0, 1]);
}

#[rstest]
fn test_map_with_index() {
    let labels = Chain::start(&["x".to_string(), "y".to_string()])
        .map(|label, index| format!("{index}:{label}"))
        .result();
    assert_eq!(labels, vec!["0:x", "1:y"]);
}

// =============================================================================
// Value semantics
// =============================================================================

#[rstest]
fn test_result_twice_returns_equal_sequences(users: Vec<User>) {
    let chain = Chain::start(&users).filter(|user, _| user.id != 2);
    let first = chain.result();
    let second = chain.result();
    assert_eq!(first, second);
    assert_eq!(first.len(), 2);
}

#[rstest]
fn test_result_mid_chain_then_continue() {
    let base = Chain::start(&[1, 2, 3, 4, 5, 6]);
    let evens = base.filter(|value, _| value % 2 == 0);
    let mid = evens.result();

    let doubled = evens.map(|value, _| value * 2);

    assert_eq!(mid, vec![2, 4, 6]);
    assert_eq!(evens.result(), vec![2, 4, 6]);
    assert_eq!(doubled.result(), vec![4, 8, 12]);
    assert_eq!(base.result(), vec![1, 2, 3, 4, 5, 6]);
}

#[rstest]
fn test_branches_are_independent() {
    let base = Chain::start(&[1, 2, 3]);
    let left = base.map(|value, _| value * 100);
    let right = base.filter(|value, _| *value == 3);

    assert_eq!(left.result(), vec![100, 200, 300]);
    assert_eq!(right.result(), vec![3]);
    assert_eq!(base.len(), 3);
}

#[rstest]
fn test_clone_is_equal_and_independent() {
    let chain = Chain::start(&[3, 1, 2]);
    let copy = chain.clone();
    let filtered = copy.filter(|value, _| *value > 1);

    assert_eq!(chain, copy);
    assert_ne!(chain, filtered);
}

// =============================================================================
// Empty chains and accessors
// =============================================================================

#[rstest]
fn test_empty_chain() {
    let chain: Chain<u8> = Chain::default();
    assert!(chain.is_empty());
    assert!(chain.filter(|_, _| true).map(|value, _| *value).result().is_empty());
}

#[rstest]
fn test_filter_everything_out() {
    let chain = Chain::start(&[1, 2, 3]).filter(|_, _| false);
    assert!(chain.is_empty());
    assert_eq!(chain.len(), 0);
}

#[rstest]
fn test_accessors() {
    let chain = Chain::from(vec!['a', 'b', 'c']);
    assert_eq!(chain.as_slice(), &['a', 'b', 'c']);
    assert_eq!((&chain).into_iter().count(), 3);
    assert_eq!(chain.iter().rev().collect::<String>(), "cba");
    assert_eq!(chain.into_iter().collect::<String>(), "abc");
}

#[cfg(feature = "transform")]
#[rstest]
fn test_chain_result_feeds_free_map(users: Vec<User>) {
    let ages = seqfn::transform::map(
        &Chain::start(&users).filter(|user, _| user.age > 26).result(),
        |user| user.age,
    );
    assert_eq!(ages, vec![30, 35]);
}
