/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

use crate::error::Error;
use crate::iter::{Element, Iter};
use core::fmt::Display;
use core::iter::FromIterator;

/// Creates a [`Dictionary`](crate::Dictionary) containing the given entries:
///
/// ```
/// # use adts::*;
/// #
/// let mut d = Dictionary::new();
/// d.put("one", 1).unwrap();
/// d.put("two", 2).unwrap();
///
/// assert_eq!(dictionary! { "one" => 1, "two" => 2 }, d);
/// ```
///
/// An entry whose key is empty or already taken is silently skipped, so the
/// first binding of a key wins.
#[macro_export]
macro_rules! dictionary {
    ($($k:expr => $v:expr),* $(,)?) => {
        {
            #[allow(unused_mut)]
            let mut d = $crate::Dictionary::new();
            $(
                let _ = d.put($k, $v);
            )*
            d
        }
    };
}

/// A mapping from unique string keys to arbitrary values.
///
/// Keys are unique and never empty; both properties are enforced by
/// [`put`](Dictionary::put).  Entries enumerate in insertion order.
///
/// # Complexity
///
/// Let *n* be the number of entries in the dictionary.
///
/// ## Temporal complexity
///
/// | Operation         | Average | Worst case  |
/// |:----------------- | -------:| -----------:|
/// | `new()`           |    Θ(1) |        Θ(1) |
/// | `put()`           |    Θ(n) |        Θ(n) |
/// | `get()`           |    Θ(n) |        Θ(n) |
/// | `remove()`        |    Θ(n) |        Θ(n) |
/// | `size()`          |    Θ(1) |        Θ(1) |
/// | iterator creation |    Θ(1) |        Θ(1) |
/// | iterator step     |    Θ(1) |        Θ(1) |
/// | iterator full     |    Θ(n) |        Θ(n) |
///
/// # Implementation details
///
/// The table is an insertion-ordered vector of entries; `put` scans it to
/// enforce key uniqueness.  For a hashed variant of the same mapping
/// contract see [`HashTable`](crate::HashTable).
#[derive(Clone, Debug)]
pub struct Dictionary<V> {
    table: Vec<(String, V)>,
}

impl<V> Dictionary<V> {
    #[must_use]
    pub fn new() -> Dictionary<V> {
        Dictionary { table: Vec::new() }
    }

    /// Adds an entry to the dictionary.
    ///
    /// Rejects the empty string as a key, and rejects a key that is already
    /// bound, leaving the original value intact.
    pub fn put(&mut self, key: impl Into<String>, value: V) -> Result<(), Error> {
        let key = key.into();

        if key.is_empty() {
            return Err(Error::EmptyKey { operation: "put" });
        }

        if self.contains_key(&key) {
            return Err(Error::DuplicateKey { operation: "put", key });
        }

        self.table.push((key, value));

        Ok(())
    }

    /// Returns the value bound to `key`, or `None` if the key is absent.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&V> {
        self.table.iter().find(|(k, _)| k.as_str() == key).map(|(_, v)| v)
    }

    /// Removes the entry bound to `key` and returns its value.
    pub fn remove(&mut self, key: &str) -> Result<V, Error> {
        if key.is_empty() {
            return Err(Error::EmptyKey { operation: "remove" });
        }

        match self.table.iter().position(|(k, _)| k.as_str() == key) {
            Some(index) => Ok(self.table.remove(index).1),
            None => {
                Err(Error::KeyNotFound { operation: "remove", key: key.to_string() })
            }
        }
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.table.iter().any(|(k, _)| k.as_str() == key)
    }

    /// Returns a snapshot of all keys, in insertion order.
    #[must_use]
    pub fn keys(&self) -> Vec<&str> {
        self.table.iter().map(|(k, _)| k.as_str()).collect()
    }

    /// Returns a snapshot of all values, in the same order as
    /// [`keys`](Dictionary::keys).
    #[must_use]
    pub fn values(&self) -> Vec<&V> {
        self.table.iter().map(|(_, v)| v).collect()
    }

    #[must_use]
    #[inline]
    pub fn size(&self) -> usize {
        self.table.len()
    }

    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Removes all entries.
    pub fn clear(&mut self) {
        self.table.clear();
    }

    /// Returns a new [`Iter`] over this dictionary's entries, in insertion
    /// order.  The dictionary cannot be mutated while the iterator is
    /// alive.
    pub fn entries(&self) -> Iter<'_, V> {
        Iter::over_entries(&self.table)
    }
}

impl<V> Default for Dictionary<V> {
    fn default() -> Dictionary<V> {
        Dictionary::new()
    }
}

impl<V: PartialEq> PartialEq for Dictionary<V> {
    fn eq(&self, other: &Dictionary<V>) -> bool {
        self.size() == other.size()
            && self.table.iter().all(|(k, v)| other.get(k) == Some(v))
    }
}

impl<V: Eq> Eq for Dictionary<V> {}

impl<V: Display> Display for Dictionary<V> {
    /// Renders the dictionary as `"k1: v1, k2: v2"` with the keys in
    /// lexicographic order, so that equal dictionaries always render
    /// identically regardless of insertion order.
    fn fmt(&self, fmt: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let mut entries: Vec<(&str, &V)> =
            self.table.iter().map(|(k, v)| (k.as_str(), v)).collect();

        entries.sort_by(|a, b| a.0.cmp(b.0));

        let mut first = true;

        for (key, value) in entries {
            if !first {
                fmt.write_str(", ")?;
            }
            write!(fmt, "{key}: {value}")?;
            first = false;
        }

        Ok(())
    }
}

impl<'a, V> IntoIterator for &'a Dictionary<V> {
    type Item = Element<'a, V>;
    type IntoIter = Iter<'a, V>;

    fn into_iter(self) -> Iter<'a, V> {
        self.entries()
    }
}

impl<V> FromIterator<(String, V)> for Dictionary<V> {
    /// Collects key/value pairs into a dictionary.  Pairs with an empty or
    /// already-bound key are skipped: the first binding of a key wins.
    fn from_iter<I: IntoIterator<Item = (String, V)>>(into_iter: I) -> Dictionary<V> {
        let mut dictionary = Dictionary::new();

        for (key, value) in into_iter {
            let _ = dictionary.put(key, value);
        }

        dictionary
    }
}

#[cfg(feature = "serde")]
pub mod serde {
    use super::*;
    use ::serde::de::{Deserialize, Deserializer, MapAccess, Visitor};
    use ::serde::ser::{Serialize, Serializer};
    use core::fmt;
    use core::marker::PhantomData;

    impl<V> Serialize for Dictionary<V>
    where
        V: Serialize,
    {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.collect_map(self.table.iter().map(|(k, v)| (k, v)))
        }
    }

    impl<'de, V> Deserialize<'de> for Dictionary<V>
    where
        V: Deserialize<'de>,
    {
        fn deserialize<D: Deserializer<'de>>(
            deserializer: D,
        ) -> Result<Dictionary<V>, D::Error> {
            deserializer.deserialize_map(DictionaryVisitor { _phantom_v: PhantomData })
        }
    }

    struct DictionaryVisitor<V> {
        _phantom_v: PhantomData<V>,
    }

    impl<'de, V> Visitor<'de> for DictionaryVisitor<V>
    where
        V: Deserialize<'de>,
    {
        type Value = Dictionary<V>;

        fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
            formatter.write_str("a map")
        }

        fn visit_map<A>(self, mut map: A) -> Result<Dictionary<V>, A::Error>
        where
            A: MapAccess<'de>,
        {
            let mut dictionary = Dictionary::new();

            while let Some((key, value)) = map.next_entry::<String, V>()? {
                let _ = dictionary.put(key, value);
            }

            Ok(dictionary)
        }
    }
}
