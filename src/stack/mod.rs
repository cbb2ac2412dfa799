/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

use core::cmp::Ordering;
use core::fmt::Display;
use core::hash::{Hash, Hasher};
use core::iter::FromIterator;

pub mod chatty;

pub type Iter<'a, T> = core::slice::Iter<'a, T>;

/// Creates a [`Stack`](crate::Stack) containing the given elements, pushed
/// in order:
///
/// ```
/// # use adts::*;
/// #
/// let mut s = Stack::new();
/// s.push(1);
/// s.push(2);
/// s.push(3);
///
/// assert_eq!(stack![1, 2, 3], s);
/// ```
#[macro_export]
macro_rules! stack {
    ($($e:expr),* $(,)?) => {
        {
            #[allow(unused_mut)]
            let mut s = $crate::Stack::new();
            $(
                s.push($e);
            )*
            s
        }
    };
}

/// A last-in first-out stack.  This is the simplest of the containers: a
/// sequence accessed at one end only, whose length is the top-of-stack
/// position.
///
/// All operations are constant time (worst case Θ(n) when `push` grows the
/// backing store).
#[derive(Clone, Debug)]
pub struct Stack<T> {
    datastore: Vec<T>,
}

impl<T> Stack<T> {
    #[must_use]
    pub fn new() -> Stack<T> {
        Stack { datastore: Vec::new() }
    }

    /// Pushes an element onto the top of the stack.
    pub fn push(&mut self, element: T) {
        self.datastore.push(element);
    }

    /// Removes and returns the element at the top of the stack.
    ///
    /// Popping an already-empty stack performs a full reset of the stack
    /// and returns `None`.
    pub fn pop(&mut self) -> Option<T> {
        if self.datastore.is_empty() {
            self.clear();
            return None;
        }

        self.datastore.pop()
    }

    /// Returns the element at the top of the stack without removing it.
    #[must_use]
    pub fn peek(&self) -> Option<&T> {
        self.datastore.last()
    }

    /// Empties the stack.
    pub fn clear(&mut self) {
        self.datastore.clear();
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

    /// Iterates from the bottom of the stack to the top.
    #[allow(clippy::iter_without_into_iter)]
    pub fn iter(&self) -> Iter<'_, T> {
        self.datastore.iter()
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Stack<T> {
        Stack::new()
    }
}

impl<T: PartialEq> PartialEq for Stack<T> {
    fn eq(&self, other: &Stack<T>) -> bool {
        self.datastore == other.datastore
    }
}

impl<T: Eq> Eq for Stack<T> {}

impl<T: PartialOrd> PartialOrd for Stack<T> {
    fn partial_cmp(&self, other: &Stack<T>) -> Option<Ordering> {
        self.datastore.partial_cmp(&other.datastore)
    }
}

impl<T: Ord> Ord for Stack<T> {
    fn cmp(&self, other: &Stack<T>) -> Ordering {
        self.datastore.cmp(&other.datastore)
    }
}

impl<T: Hash> Hash for Stack<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.datastore.hash(state);
    }
}

impl<T: Display> Display for Stack<T> {
    /// Renders the stack from the bottom to the top.
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

impl<'a, T> IntoIterator for &'a Stack<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<T> FromIterator<T> for Stack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(into_iter: I) -> Stack<T> {
        Stack { datastore: Vec::from_iter(into_iter) }
    }
}

#[cfg(feature = "serde")]
pub mod serde {
    use super::*;
    use ::serde::de::{Deserialize, Deserializer};
    use ::serde::ser::{Serialize, Serializer};

    impl<T> Serialize for Stack<T>
    where
        T: Serialize,
    {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.collect_seq(self)
        }
    }

    impl<'de, T> Deserialize<'de> for Stack<T>
    where
        T: Deserialize<'de>,
    {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Stack<T>, D::Error> {
            Deserialize::deserialize(deserializer).map(|datastore| Stack { datastore })
        }
    }
}
