/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

use super::*;
use pretty_assertions::assert_eq;

mod cursor {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_next_stops_at_the_last_position() {
        let mut list = list!["a", "b", "c"];

        assert_eq!(list.position(), 0);
        assert_eq!(list.next(), Some(&"b"));
        assert_eq!(list.next(), Some(&"c"));
        assert_eq!(list.position(), 2);

        // past the end the cursor reports failure and stays put
        assert_eq!(list.next(), None);
        assert_eq!(list.position(), 2);
    }

    #[test]
    fn test_prev_stops_at_position_zero() {
        let mut list = list![1, 2];

        list.back();

        assert_eq!(list.prev(), Some(&1));
        assert_eq!(list.prev(), None);
        assert_eq!(list.position(), 0);
    }

    #[test]
    fn test_front_and_back() {
        let mut list = list![1, 2, 3];

        list.back();

        assert_eq!(list.position(), 2);
        assert_eq!(list.current(), Some(&3));

        list.front();

        assert_eq!(list.position(), 0);
        assert_eq!(list.current(), Some(&1));
    }

    #[test]
    fn test_move_to() {
        let mut list = list![1, 2, 3];

        assert!(list.move_to(2));
        assert_eq!(list.current(), Some(&3));

        // out of range leaves the cursor unchanged
        assert!(!list.move_to(3));
        assert_eq!(list.position(), 2);

        let mut empty: List<i32> = List::new();

        assert!(!empty.move_to(0));
    }

    #[test]
    fn test_current_on_empty_list() {
        let list: List<i32> = List::new();

        assert_eq!(list.current(), None);
    }
}

#[test]
fn test_new() {
    let list: List<i32> = List::new();

    assert_eq!(list.len(), 0);
    assert!(list.is_empty());
    assert_eq!(list.position(), 0);
}

#[test]
fn test_append() {
    let mut list = List::new();

    list.append("a");
    list.append("b");

    assert_eq!(list.len(), 2);
    assert_eq!(list.current(), Some(&"a"));
}

#[test]
fn test_insert_after_anchor() {
    let mut list = list!["a", "b", "c"];

    assert!(list.insert("X", &"b"));
    assert_eq!(list, list!["a", "b", "X", "c"]);

    // a missing anchor is a no-op, reported through the return value
    assert!(!list.insert("Y", &"zzz"));
    assert_eq!(list, list!["a", "b", "X", "c"]);
}

#[test]
fn test_remove() {
    let mut list = list![1, 2, 3, 2];

    assert!(list.remove(&2));
    assert_eq!(list, list![1, 3, 2]);

    assert!(!list.remove(&9));
    assert_eq!(list, list![1, 3, 2]);
}

#[test]
fn test_find_and_contains() {
    let list = list!["a", "b", "a"];

    assert_eq!(list.find(&"a"), Some(0));
    assert_eq!(list.find(&"b"), Some(1));
    assert_eq!(list.find(&"z"), None);
    assert!(list.contains(&"b"));
    assert!(!list.contains(&"z"));
}

#[test]
fn test_clear() {
    let mut list = list![1, 2, 3];

    list.back();
    list.clear();

    assert!(list.is_empty());
    assert_eq!(list.position(), 0);
}

#[test]
fn test_display() {
    let empty: List<i32> = List::new();
    let singleton = list![4];
    let list = list![4, 5, 6];

    assert_eq!(format!("{}", empty), "");
    assert_eq!(format!("{}", singleton), "4");
    assert_eq!(format!("{}", list), "4, 5, 6");
}

#[test]
fn test_eq_ignores_cursor() {
    let mut list = list![1, 2, 3];
    let moved = list![1, 2, 3];

    list.back();

    assert_eq!(list, moved);
    assert_ne!(list, list![1, 2]);
}

#[test]
fn test_ord() {
    assert!(list![1, 2] < list![1, 3]);
    assert!(list![1, 2] < list![1, 2, 0]);
    assert_eq!(list![1, 2].cmp(&list![1, 2]), Ordering::Equal);
}

#[test]
fn test_from_iterator() {
    let vec: Vec<u32> = vec![10, 11, 12];
    let list: List<u32> = vec.iter().copied().collect();

    assert!(vec.iter().eq(list.iter()));
    assert_eq!(list.position(), 0);
}

#[test]
fn test_into_iterator() {
    let list = list![1, 2, 3];
    let mut total = 0;

    for e in &list {
        total += e;
    }

    assert_eq!(total, 6);
}

#[test]
fn test_default() {
    let list: List<i32> = List::default();

    assert!(list.is_empty());
}

fn hash<T: Hash>(list: &List<T>) -> u64 {
    let mut hasher = std::collections::hash_map::DefaultHasher::new();

    list.hash(&mut hasher);

    hasher.finish()
}

#[test]
fn test_hash() {
    assert_eq!(hash(&list![1, 2]), hash(&list![1, 2]));
    assert_ne!(hash(&list![1, 2]), hash(&list![1, 2, 3]));
}

#[cfg(feature = "serde")]
#[test]
fn test_serde() {
    use bincode::{deserialize, serialize};

    let list: List<i32> = vec![5, 6, 7, 8].into_iter().collect();
    let encoded = serialize(&list).unwrap();
    let decoded: List<i32> = deserialize(&encoded).unwrap();

    assert_eq!(list, decoded);
    assert_eq!(decoded.position(), 0);
}
