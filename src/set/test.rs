/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

use super::*;
use pretty_assertions::assert_eq;

fn left() -> Set<i32> {
    (0..10).collect()
}

fn right() -> Set<i32> {
    (5..15).collect()
}

mod algebra {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_union() {
        let union = left().union(&right());

        assert_eq!(union.len(), 15);

        for i in 0..15 {
            assert!(union.contains(&i));
        }
    }

    #[test]
    fn test_intersection() {
        let intersection = left().intersection(&right());

        assert_eq!(intersection, (5..10).collect());
        assert_eq!(intersection.len(), 5);
    }

    #[test]
    fn test_symmetric_difference() {
        let difference = left().symmetric_difference(&right());
        let expected: Set<i32> = (0..5).chain(10..15).collect();

        assert_eq!(difference, expected);
        assert_eq!(difference.len(), 10);
    }

    #[test]
    fn test_relative_complement() {
        let complement = left().relative_complement(&right());

        assert_eq!(complement, (0..5).collect());

        // not the same operation as the symmetric difference
        let reversed = right().relative_complement(&left());

        assert_eq!(reversed, (10..15).collect());
    }

    #[test]
    fn test_commutativity() {
        assert_eq!(left().union(&right()), right().union(&left()));
        assert_eq!(left().intersection(&right()), right().intersection(&left()));
        assert_eq!(
            left().symmetric_difference(&right()),
            right().symmetric_difference(&left())
        );
    }

    #[test]
    fn test_operands_are_not_mutated() {
        let a = left();
        let b = right();

        let _ = a.union(&b);
        let _ = a.intersection(&b);
        let _ = a.symmetric_difference(&b);
        let _ = a.relative_complement(&b);

        assert_eq!(a, left());
        assert_eq!(b, right());
    }

    #[test]
    fn test_union_has_no_duplicates() {
        let union = left().union(&right());
        let mut seen: Set<i32> = Set::new();

        for e in union.iter() {
            assert!(seen.insert(*e), "duplicate element in union");
        }
    }
}

mod n_ary {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_no_operands_yield_none() {
        assert_eq!(Set::<i32>::union_of(&[]), None);
        assert_eq!(Set::<i32>::intersection_of(&[]), None);
        assert_eq!(Set::<i32>::symmetric_difference_of(&[]), None);
        assert_eq!(Set::<i32>::relative_complement_of(&[]), None);
    }

    #[test]
    fn test_single_operand_yields_a_copy() {
        let a = left();

        assert_eq!(Set::union_of(&[&a]), Some(left()));
        assert_eq!(Set::intersection_of(&[&a]), Some(left()));
    }

    #[test]
    fn test_two_operands_match_the_binary_operations() {
        let a = left();
        let b = right();

        assert_eq!(Set::union_of(&[&a, &b]), Some(a.union(&b)));
        assert_eq!(Set::intersection_of(&[&a, &b]), Some(a.intersection(&b)));
        assert_eq!(
            Set::symmetric_difference_of(&[&a, &b]),
            Some(a.symmetric_difference(&b))
        );
        assert_eq!(
            Set::relative_complement_of(&[&a, &b]),
            Some(a.relative_complement(&b))
        );
    }

    #[test]
    fn test_three_way_fold() {
        let a: Set<i32> = set![1, 2, 3];
        let b: Set<i32> = set![3, 4];
        let c: Set<i32> = set![4, 5];

        assert_eq!(Set::union_of(&[&a, &b, &c]), Some(set![1, 2, 3, 4, 5]));
        assert_eq!(Set::intersection_of(&[&a, &b, &c]), Some(Set::new()));

        // elements belonging to an odd number of operands
        assert_eq!(
            Set::symmetric_difference_of(&[&a, &b, &c]),
            Some(set![1, 2, 5])
        );
        assert_eq!(Set::relative_complement_of(&[&a, &b, &c]), Some(set![1, 2]));
    }
}

#[test]
fn test_new() {
    let set: Set<i32> = Set::new();

    assert_eq!(set.len(), 0);
    assert!(set.is_empty());
}

#[test]
fn test_insert_enforces_uniqueness() {
    let mut set = Set::new();

    assert!(set.insert(1));
    assert!(set.insert(2));
    assert!(!set.insert(1));
    assert_eq!(set.len(), 2);
}

#[test]
fn test_remove() {
    let mut set = set![1, 2, 3];

    assert!(set.remove(&2));
    assert!(!set.contains(&2));
    assert!(!set.remove(&2));
    assert_eq!(set.len(), 2);
}

#[test]
fn test_contains() {
    let set = set!["a", "b"];

    assert!(set.contains(&"a"));
    assert!(!set.contains(&"z"));
}

#[test]
fn test_is_subset() {
    let small = set![1, 2];
    let big = set![1, 2, 3];

    assert!(small.is_subset(&big));
    assert!(!big.is_subset(&small));
    assert!(big.is_superset(&small));
    assert!(small.is_subset(&small));

    // the length short-circuit alone is not enough
    assert!(!set![1, 9].is_subset(&big));

    let empty: Set<i32> = Set::new();

    assert!(empty.is_subset(&small));
}

#[test]
fn test_eq_ignores_insertion_order() {
    assert_eq!(set![1, 2, 3], set![3, 1, 2]);
    assert_ne!(set![1, 2, 3], set![1, 2]);
    assert_ne!(set![1, 2], set![1, 3]);
}

#[test]
fn test_macro_set() {
    let set = set![1, 2, 2, 3];

    assert_eq!(set.len(), 3);

    let empty: Set<i32> = set![];

    assert!(empty.is_empty());
}

#[test]
fn test_display() {
    let empty: Set<i32> = Set::new();
    let set = set![4, 5, 6];

    assert_eq!(format!("{}", empty), "");
    assert_eq!(format!("{}", set), "4, 5, 6");
}

#[test]
fn test_from_iterator_deduplicates() {
    let set: Set<i32> = vec![1, 1, 2, 2, 3].into_iter().collect();

    assert_eq!(set.len(), 3);
}

#[test]
fn test_default() {
    let set: Set<i32> = Set::default();

    assert!(set.is_empty());
}

#[cfg(feature = "serde")]
#[test]
fn test_serde() {
    use bincode::{deserialize, serialize};

    let set: Set<i32> = (0..8).collect();
    let encoded = serialize(&set).unwrap();
    let decoded: Set<i32> = deserialize(&encoded).unwrap();

    assert_eq!(set, decoded);
}
