/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

use core::cmp::Ordering;
use core::fmt::Display;
use core::hash::{Hash, Hasher};
use core::iter::FromIterator;

pub type Iter<'a, T> = core::slice::Iter<'a, T>;

/// Creates a [`List`](crate::List) containing the given elements:
///
/// ```
/// # use adts::*;
/// #
/// let mut l = List::new();
/// l.append(1);
/// l.append(2);
/// l.append(3);
///
/// assert_eq!(list![1, 2, 3], l);
/// ```
#[macro_export]
macro_rules! list {
    ($($e:expr),* $(,)?) => {
        {
            #[allow(unused_mut)]
            let mut l = $crate::List::new();
            $(
                l.append($e);
            )*
            l
        }
    };
}

/// An ordered sequence with an internal traversal cursor.
///
/// The cursor is moved by [`next`](List::next), [`prev`](List::prev),
/// [`front`](List::front), [`back`](List::back), and
/// [`move_to`](List::move_to); it persists across mutations unless
/// explicitly moved.  Out-of-range movement never panics: the movement
/// operations report failure through their return value and leave the
/// cursor where it was.
///
/// # Complexity
///
/// Let *n* be the number of elements in the list.
///
/// ## Temporal complexity
///
/// | Operation         | Average | Worst case  |
/// |:----------------- | -------:| -----------:|
/// | `new()`           |    Θ(1) |        Θ(1) |
/// | `append()`        |    Θ(1) |        Θ(1) |
/// | `insert()`        |    Θ(n) |        Θ(n) |
/// | `remove()`        |    Θ(n) |        Θ(n) |
/// | `find()`          |    Θ(n) |        Θ(n) |
/// | `next()`/`prev()` |    Θ(1) |        Θ(1) |
/// | `move_to()`       |    Θ(1) |        Θ(1) |
/// | `len()`           |    Θ(1) |        Θ(1) |
#[derive(Clone, Debug)]
pub struct List<T> {
    datastore: Vec<T>,
    pos: usize,
}

impl<T> List<T> {
    #[must_use]
    pub fn new() -> List<T> {
        List { datastore: Vec::new(), pos: 0 }
    }

    /// Adds an element to the end of the list.
    pub fn append(&mut self, element: T) {
        self.datastore.push(element);
    }

    /// Removes all elements and rewinds the cursor to position 0.
    pub fn clear(&mut self) {
        self.datastore.clear();
        self.pos = 0;
    }

    /// Moves the cursor to `position`.  Returns `false` and leaves the
    /// cursor unchanged if `position` is past the last element.
    pub fn move_to(&mut self, position: usize) -> bool {
        if position < self.datastore.len() {
            self.pos = position;
            true
        } else {
            false
        }
    }

    /// Advances the cursor by one and returns the newly-current element,
    /// or `None` without moving if the cursor is already on the last
    /// element.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Option<&T> {
        if self.pos + 1 < self.datastore.len() {
            self.pos += 1;
            self.datastore.get(self.pos)
        } else {
            None
        }
    }

    /// Retreats the cursor by one and returns the newly-current element,
    /// or `None` without moving if the cursor is already at position 0.
    pub fn prev(&mut self) -> Option<&T> {
        if self.pos > 0 {
            self.pos -= 1;
            self.datastore.get(self.pos)
        } else {
            None
        }
    }

    /// Moves the cursor to the front of the list.
    pub fn front(&mut self) {
        self.pos = 0;
    }

    /// Moves the cursor to the back of the list.
    pub fn back(&mut self) {
        self.pos = self.datastore.len().saturating_sub(1);
    }

    /// Returns the element under the cursor.
    #[must_use]
    pub fn current(&self) -> Option<&T> {
        self.datastore.get(self.pos)
    }

    /// Returns the cursor position.
    #[must_use]
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
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

impl<T: PartialEq> List<T> {
    /// Inserts `element` immediately after the first element equal to
    /// `after`.  Returns `false` and leaves the list unchanged if no such
    /// anchor exists; callers are expected to check the result.
    pub fn insert(&mut self, element: T, after: &T) -> bool {
        match self.find(after) {
            Some(index) => {
                self.datastore.insert(index + 1, element);
                true
            }
            None => false,
        }
    }

    /// Removes the first element equal to `element`.  Returns `false` if
    /// the list does not contain it.
    pub fn remove(&mut self, element: &T) -> bool {
        match self.find(element) {
            Some(index) => {
                self.datastore.remove(index);
                true
            }
            None => false,
        }
    }

    /// Returns the index of the first element equal to `element`.
    #[must_use]
    pub fn find(&self, element: &T) -> Option<usize> {
        self.datastore.iter().position(|e| e == element)
    }

    #[must_use]
    pub fn contains(&self, element: &T) -> bool {
        self.find(element).is_some()
    }
}

impl<T> Default for List<T> {
    fn default() -> List<T> {
        List::new()
    }
}

impl<T: PartialEq> PartialEq for List<T> {
    /// Two lists are equal if they hold equal elements in the same order;
    /// the cursor is traversal state, not content, and is ignored.
    fn eq(&self, other: &List<T>) -> bool {
        self.datastore == other.datastore
    }
}

impl<T: Eq> Eq for List<T> {}

impl<T: PartialOrd> PartialOrd for List<T> {
    fn partial_cmp(&self, other: &List<T>) -> Option<Ordering> {
        self.datastore.partial_cmp(&other.datastore)
    }
}

impl<T: Ord> Ord for List<T> {
    fn cmp(&self, other: &List<T>) -> Ordering {
        self.datastore.cmp(&other.datastore)
    }
}

impl<T: Hash> Hash for List<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Add the hash of length so that if two collections are added one
        // after the other it doesn't hash to the same thing as a single
        // collection with the same elements in the same order.
        self.len().hash(state);

        for e in self.iter() {
            e.hash(state);
        }
    }
}

impl<T: Display> Display for List<T> {
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

impl<'a, T> IntoIterator for &'a List<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<T> FromIterator<T> for List<T> {
    fn from_iter<I: IntoIterator<Item = T>>(into_iter: I) -> List<T> {
        List { datastore: Vec::from_iter(into_iter), pos: 0 }
    }
}

#[cfg(feature = "serde")]
pub mod serde {
    use super::*;
    use ::serde::de::{Deserialize, Deserializer};
    use ::serde::ser::{Serialize, Serializer};

    impl<T> Serialize for List<T>
    where
        T: Serialize,
    {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.collect_seq(self)
        }
    }

    impl<'de, T> Deserialize<'de> for List<T>
    where
        T: Deserialize<'de>,
    {
        /// Deserializes the elements; the cursor starts over at position 0.
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<List<T>, D::Error> {
            Deserialize::deserialize(deserializer)
                .map(|datastore| List { datastore, pos: 0 })
        }
    }
}

#[cfg(test)]
mod test;
