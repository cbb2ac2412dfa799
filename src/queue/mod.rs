/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

use core::cmp::Ordering;
use core::fmt::Display;
use core::hash::{Hash, Hasher};
use core::iter::FromIterator;

pub type Iter<'a, T> =
    core::iter::Chain<core::iter::Rev<core::slice::Iter<'a, T>>, core::slice::Iter<'a, T>>;

/// Creates a [`Queue`](crate::Queue) containing the given elements:
///
/// ```
/// # use adts::*;
/// #
/// let mut q = Queue::new();
/// q.enqueue(1);
/// q.enqueue(2);
/// q.enqueue(3);
///
/// assert_eq!(queue![1, 2, 3], q);
/// ```
#[macro_export]
macro_rules! queue {
    ($($e:expr),* $(,)?) => {
        {
            #[allow(unused_mut)]
            let mut q = $crate::Queue::new();
            $(
                q.enqueue($e);
            )*
            q
        }
    };
}

/// A first-in first-out queue.
///
/// # Complexity
///
/// Let *n* be the number of elements in the queue.
///
/// ## Temporal complexity
///
/// | Operation             | Average | Worst case  |
/// |:--------------------- | -------:| -----------:|
/// | `new()`               |    Θ(1) |        Θ(1) |
/// | `enqueue()`           |    Θ(1) |        Θ(1) |
/// | `dequeue()`           |    Θ(1) |        Θ(n) |
/// | `dequeue()` amortized |    Θ(1) |        Θ(1) |
/// | `front()`/`back()`    |    Θ(1) |        Θ(1) |
/// | `len()`               |    Θ(1) |        Θ(1) |
///
/// # Implementation details
///
/// Elements are enqueued onto an inbound store and dequeued from an
/// outbound store that holds its elements in reversed order; when the
/// outbound store runs dry the whole inbound store is shifted over in one
/// reversal.  Each element is therefore moved at most twice, which makes
/// `dequeue` amortized constant time without ever shifting the live
/// elements one position at a time.
#[derive(Clone, Debug)]
pub struct Queue<T> {
    in_store: Vec<T>,
    out_store: Vec<T>,
}

impl<T> Queue<T> {
    #[must_use]
    pub fn new() -> Queue<T> {
        Queue { in_store: Vec::new(), out_store: Vec::new() }
    }

    /// Adds an element to the back of the queue.
    pub fn enqueue(&mut self, element: T) {
        self.in_store.push(element);
    }

    /// Removes and returns the element at the front of the queue, or
    /// `None` if the queue is empty.
    pub fn dequeue(&mut self) -> Option<T> {
        if self.out_store.is_empty() {
            core::mem::swap(&mut self.in_store, &mut self.out_store);
            self.out_store.reverse();
        }

        self.out_store.pop()
    }

    /// Returns the element at the front of the queue without dequeueing
    /// it.
    #[must_use]
    pub fn front(&self) -> Option<&T> {
        self.out_store.last().or_else(|| self.in_store.first())
    }

    /// Returns the element at the back of the queue without dequeueing
    /// it.
    #[must_use]
    pub fn back(&self) -> Option<&T> {
        self.in_store.last().or_else(|| self.out_store.first())
    }

    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.in_store.len() + self.out_store.len()
    }

    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Discards all elements.
    pub fn clear(&mut self) {
        self.in_store.clear();
        self.out_store.clear();
    }

    #[allow(clippy::iter_without_into_iter)]
    pub fn iter(&self) -> Iter<'_, T> {
        self.out_store.iter().rev().chain(self.in_store.iter())
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Queue<T> {
        Queue::new()
    }
}

impl<T: PartialEq> PartialEq for Queue<T> {
    fn eq(&self, other: &Queue<T>) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for Queue<T> {}

impl<T: PartialOrd> PartialOrd for Queue<T> {
    fn partial_cmp(&self, other: &Queue<T>) -> Option<Ordering> {
        self.iter().partial_cmp(other.iter())
    }
}

impl<T: Ord> Ord for Queue<T> {
    fn cmp(&self, other: &Queue<T>) -> Ordering {
        self.iter().cmp(other.iter())
    }
}

impl<T: Hash> Hash for Queue<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Add the hash of length so that if two collections are added one
        // after the other it doesn't hash to the same thing as a single
        // collection with the same elements in the same order.
        self.len().hash(state);

        for e in self {
            e.hash(state);
        }
    }
}

impl<T: Display> Display for Queue<T> {
    fn fmt(&self, fmt: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let mut first = true;

        for e in self {
            if !first {
                fmt.write_str(", ")?;
            }
            e.fmt(fmt)?;
            first = false;
        }

        Ok(())
    }
}

impl<'a, T> IntoIterator for &'a Queue<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<T> FromIterator<T> for Queue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(into_iter: I) -> Queue<T> {
        Queue { in_store: Vec::from_iter(into_iter), out_store: Vec::new() }
    }
}

#[cfg(feature = "serde")]
pub mod serde {
    use super::*;
    use ::serde::de::{Deserialize, Deserializer};
    use ::serde::ser::{Serialize, Serializer};

    impl<T> Serialize for Queue<T>
    where
        T: Serialize,
    {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.collect_seq(self)
        }
    }

    impl<'de, T> Deserialize<'de> for Queue<T>
    where
        T: Deserialize<'de>,
    {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Queue<T>, D::Error> {
            Deserialize::deserialize(deserializer)
                .map(|elements| Queue { in_store: elements, out_store: Vec::new() })
        }
    }
}
