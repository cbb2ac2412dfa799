/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

/// A single element yielded by an [`Iter`], tagged with the shape of the
/// collection it came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Element<'a, T> {
    /// A character of a text source.
    Char(char),
    /// An item of a slice source.
    Item(&'a T),
    /// A key/value entry of a dictionary table source.
    Entry(&'a str, &'a T),
}

/// The collection an [`Iter`] traverses.  The shape is fixed when the
/// iterator is created and never changes for its lifetime.
#[derive(Clone, Copy, Debug)]
enum Source<'a, T> {
    Text(&'a str),
    Items(&'a [T]),
    Entries(&'a [(String, T)]),
}

/// A forward cursor over a flat collection: a string, a slice, or a flat
/// key/value table such as the one owned by a
/// [`Dictionary`](crate::Dictionary).
///
/// The iterator holds a shared reference to its collection and never copies
/// it, so the collection cannot be mutated while the iterator is alive.
/// Nested collections are unsupported by construction: the three admissible
/// shapes are all flat, and each yields a correspondingly tagged
/// [`Element`].
///
/// Besides the standard [`Iterator`] implementation, the cursor can be
/// rewound with [`reset`](Iter::reset) and restarted with
/// [`first`](Iter::first), consistent with calling `next()` on a freshly
/// created iterator yielding the first element.
///
/// # Example
///
/// ```
/// use adts::{Element, Iter};
///
/// let mut iterator = Iter::over_items(&[10, 20, 30]);
///
/// assert_eq!(iterator.next(), Some(Element::Item(&10)));
/// assert!(iterator.has_next());
///
/// iterator.reset();
///
/// assert_eq!(iterator.next(), Some(Element::Item(&10)));
/// ```
#[derive(Clone, Debug)]
pub struct Iter<'a, T> {
    source: Source<'a, T>,
    cursor: usize,
}

impl<'a> Iter<'a, ()> {
    /// Creates an iterator over the characters of a string.
    #[must_use]
    pub fn over_text(text: &'a str) -> Iter<'a, ()> {
        Iter { source: Source::Text(text), cursor: 0 }
    }
}

impl<'a, T> Iter<'a, T> {
    /// Creates an iterator over the items of a slice.
    #[must_use]
    pub fn over_items(items: &'a [T]) -> Iter<'a, T> {
        Iter { source: Source::Items(items), cursor: 0 }
    }

    /// Creates an iterator over the entries of a key/value table.
    #[must_use]
    pub fn over_entries(entries: &'a [(String, T)]) -> Iter<'a, T> {
        Iter { source: Source::Entries(entries), cursor: 0 }
    }

    /// Rewinds the cursor and yields the first element of the collection.
    pub fn first(&mut self) -> Option<Element<'a, T>> {
        self.reset();
        self.next()
    }

    /// Returns `true` if the cursor has not yet passed the last element.
    #[must_use]
    pub fn has_next(&self) -> bool {
        match self.source {
            Source::Text(text) => self.cursor < text.len(),
            Source::Items(items) => self.cursor < items.len(),
            Source::Entries(entries) => self.cursor < entries.len(),
        }
    }

    /// Rewinds the cursor to the start of the collection.
    pub fn reset(&mut self) {
        self.cursor = 0;
    }

    /// Rewinds the cursor, then applies `f` to every element in turn.
    pub fn each<F>(&mut self, mut f: F)
    where
        F: FnMut(Element<'a, T>),
    {
        self.reset();
        while let Some(element) = self.next() {
            f(element);
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = Element<'a, T>;

    fn next(&mut self) -> Option<Element<'a, T>> {
        match self.source {
            Source::Text(text) => {
                let c = text[self.cursor..].chars().next()?;
                self.cursor += c.len_utf8();
                Some(Element::Char(c))
            }
            Source::Items(items) => {
                let item = items.get(self.cursor)?;
                self.cursor += 1;
                Some(Element::Item(item))
            }
            Source::Entries(entries) => {
                let (key, value) = entries.get(self.cursor)?;
                self.cursor += 1;
                Some(Element::Entry(key, value))
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = match self.source {
            Source::Text(text) => text[self.cursor..].chars().count(),
            Source::Items(items) => items.len() - self.cursor,
            Source::Entries(entries) => entries.len() - self.cursor,
        };

        (remaining, Some(remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
