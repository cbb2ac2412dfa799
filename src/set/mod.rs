/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

use core::fmt::Display;
use core::iter::FromIterator;

pub type Iter<'a, T> = core::slice::Iter<'a, T>;

/// Creates a [`Set`](crate::Set) containing the given elements:
///
/// ```
/// # use adts::*;
/// #
/// let mut s = Set::new();
/// s.insert(1);
/// s.insert(2);
/// s.insert(3);
///
/// assert_eq!(set![1, 2, 2, 3], s);
/// ```
///
/// Duplicate elements are ignored.
#[macro_export]
macro_rules! set {
    ($($e:expr),* $(,)?) => {
        {
            #[allow(unused_mut)]
            let mut s = $crate::Set::new();
            $(
                s.insert($e);
            )*
            s
        }
    };
}

/// An unordered collection of unique elements.
///
/// Membership is decided by equality, not hashing, so the element type only
/// needs `PartialEq`.  Two sets are equal if and only if they contain
/// precisely the same members, whatever order they were inserted in.
///
/// The algebra operations ([`union`](Set::union),
/// [`intersection`](Set::intersection),
/// [`symmetric_difference`](Set::symmetric_difference), and
/// [`relative_complement`](Set::relative_complement)) always build a new
/// set and never mutate their operands.  Each has an n-ary associated form
/// ([`union_of`](Set::union_of) and friends) that folds over a slice of
/// operands and yields `None` when given none.
///
/// # Complexity
///
/// Let *n* and *m* be the number of elements of the two operands.
///
/// ## Temporal complexity
///
/// | Operation               | Average  | Worst case  |
/// |:----------------------- | --------:| -----------:|
/// | `new()`                 |     Θ(1) |        Θ(1) |
/// | `insert()`              |     Θ(n) |        Θ(n) |
/// | `remove()`              |     Θ(n) |        Θ(n) |
/// | `contains()`            |     Θ(n) |        Θ(n) |
/// | `union()`               |   Θ(n·m) |      Θ(n·m) |
/// | `intersection()`        |   Θ(n·m) |      Θ(n·m) |
/// | `symmetric_difference()`|   Θ(n·m) |      Θ(n·m) |
/// | `is_subset()`           |   Θ(n·m) |      Θ(n·m) |
/// | `len()`                 |     Θ(1) |        Θ(1) |
#[derive(Clone, Debug)]
pub struct Set<T> {
    datastore: Vec<T>,
}

impl<T> Set<T> {
    #[must_use]
    pub fn new() -> Set<T> {
        Set { datastore: Vec::new() }
    }

    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.datastore.len()
    }

    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[allow(clippy::iter_without_into_iter)]
    pub fn iter(&self) -> Iter<'_, T> {
        self.datastore.iter()
    }
}

impl<T: PartialEq> Set<T> {
    /// Adds an element to the set.  Returns `false` if an equal element is
    /// already present.
    pub fn insert(&mut self, data: T) -> bool {
        if self.contains(&data) {
            return false;
        }

        self.datastore.push(data);

        true
    }

    /// Removes the element equal to `data`.  Returns `false` if the set
    /// does not contain it.
    pub fn remove(&mut self, data: &T) -> bool {
        match self.datastore.iter().position(|e| e == data) {
            Some(index) => {
                self.datastore.remove(index);
                true
            }
            None => false,
        }
    }

    #[must_use]
    pub fn contains(&self, data: &T) -> bool {
        self.datastore.iter().any(|e| e == data)
    }

    /// Returns `true` if every element of `self` is contained in `other`.
    #[must_use]
    pub fn is_subset(&self, other: &Set<T>) -> bool {
        self.len() <= other.len() && self.iter().all(|e| other.contains(e))
    }

    /// Returns `true` if every element of `other` is contained in `self`.
    #[must_use]
    pub fn is_superset(&self, other: &Set<T>) -> bool {
        other.is_subset(self)
    }
}

impl<T: PartialEq + Clone> Set<T> {
    /// Returns the set of elements belonging to `self` or `other`, or
    /// both.
    #[must_use]
    pub fn union(&self, other: &Set<T>) -> Set<T> {
        let mut result = self.clone();

        for e in other.iter() {
            if !result.contains(e) {
                result.datastore.push(e.clone());
            }
        }

        result
    }

    /// Returns the set of elements belonging to both `self` and `other`.
    #[must_use]
    pub fn intersection(&self, other: &Set<T>) -> Set<T> {
        let mut result = Set::new();

        for e in self.iter() {
            if other.contains(e) {
                result.datastore.push(e.clone());
            }
        }

        result
    }

    /// Returns the set of elements belonging to exactly one of `self` and
    /// `other`.
    #[must_use]
    pub fn symmetric_difference(&self, other: &Set<T>) -> Set<T> {
        let mut result = Set::new();

        for e in self.iter() {
            if !other.contains(e) {
                result.datastore.push(e.clone());
            }
        }

        for e in other.iter() {
            if !self.contains(e) {
                result.datastore.push(e.clone());
            }
        }

        result
    }

    /// Returns the set of elements of `self` that are not in `other`.
    /// This is the relative complement of `other` in `self`, a different
    /// operation from [`symmetric_difference`](Set::symmetric_difference).
    #[must_use]
    pub fn relative_complement(&self, other: &Set<T>) -> Set<T> {
        let mut result = Set::new();

        for e in self.iter() {
            if !other.contains(e) {
                result.datastore.push(e.clone());
            }
        }

        result
    }

    /// Folds [`union`](Set::union) over the given operands.  Yields `None`
    /// when given no operands, and a copy of the single operand when given
    /// one.
    #[must_use]
    pub fn union_of(sets: &[&Set<T>]) -> Option<Set<T>> {
        Set::fold_of(sets, Set::union)
    }

    /// Folds [`intersection`](Set::intersection) over the given operands.
    #[must_use]
    pub fn intersection_of(sets: &[&Set<T>]) -> Option<Set<T>> {
        Set::fold_of(sets, Set::intersection)
    }

    /// Folds [`symmetric_difference`](Set::symmetric_difference) over the
    /// given operands: the result holds the elements belonging to an odd
    /// number of them.
    #[must_use]
    pub fn symmetric_difference_of(sets: &[&Set<T>]) -> Option<Set<T>> {
        Set::fold_of(sets, Set::symmetric_difference)
    }

    /// Folds [`relative_complement`](Set::relative_complement) over the
    /// given operands: the elements of the first operand contained in none
    /// of the others.
    #[must_use]
    pub fn relative_complement_of(sets: &[&Set<T>]) -> Option<Set<T>> {
        Set::fold_of(sets, Set::relative_complement)
    }

    fn fold_of(sets: &[&Set<T>], combine: fn(&Set<T>, &Set<T>) -> Set<T>) -> Option<Set<T>> {
        let (first, rest) = sets.split_first()?;
        let mut result = (*first).clone();

        for set in rest {
            result = combine(&result, set);
        }

        Some(result)
    }
}

impl<T> Default for Set<T> {
    fn default() -> Set<T> {
        Set::new()
    }
}

impl<T: PartialEq> PartialEq for Set<T> {
    fn eq(&self, other: &Set<T>) -> bool {
        self.len() == other.len() && self.iter().all(|e| other.contains(e))
    }
}

impl<T: Eq> Eq for Set<T> {}

impl<T: Display> Display for Set<T> {
    fn fmt(&self, fmt: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let mut first = true;

        for e in self.iter() {
            if !first {
                fmt.write_str(", ")?;
            }
            e.fmt(fmt)?;
            first = false;
        }

        Ok(())
    }
}

impl<'a, T> IntoIterator for &'a Set<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<T: PartialEq> FromIterator<T> for Set<T> {
    fn from_iter<I: IntoIterator<Item = T>>(into_iter: I) -> Set<T> {
        let mut set = Set::new();

        for e in into_iter {
            set.insert(e);
        }

        set
    }
}

#[cfg(feature = "serde")]
pub mod serde {
    use super::*;
    use ::serde::de::{Deserialize, Deserializer, SeqAccess, Visitor};
    use ::serde::ser::{Serialize, Serializer};
    use core::fmt;
    use core::marker::PhantomData;

    impl<T> Serialize for Set<T>
    where
        T: Serialize,
    {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.collect_seq(self)
        }
    }

    impl<'de, T> Deserialize<'de> for Set<T>
    where
        T: PartialEq + Deserialize<'de>,
    {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Set<T>, D::Error> {
            deserializer.deserialize_seq(SetVisitor { _phantom_t: PhantomData })
        }
    }

    struct SetVisitor<T> {
        _phantom_t: PhantomData<T>,
    }

    impl<'de, T> Visitor<'de> for SetVisitor<T>
    where
        T: PartialEq + Deserialize<'de>,
    {
        type Value = Set<T>;

        fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
            formatter.write_str("a sequence")
        }

        fn visit_seq<A>(self, mut seq: A) -> Result<Set<T>, A::Error>
        where
            A: SeqAccess<'de>,
        {
            let mut set = Set::new();

            while let Some(value) = seq.next_element()? {
                set.insert(value);
            }

            Ok(set)
        }
    }
}

#[cfg(test)]
mod test;
