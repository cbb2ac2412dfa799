/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

use crate::error::Error;
use core::fmt::Display;
use core::iter::FromIterator;

// A prime seed keeps early distributions from clustering.
const INITIAL_SLOTS: usize = 137;

const HASH_FACTOR: u64 = 37;

fn slot_entry<V>(slot: &Option<(String, V)>) -> Option<(&str, &V)> {
    slot.as_ref().map(|(key, value)| (key.as_str(), value))
}

pub type Iter<'a, V> = core::iter::FilterMap<
    core::slice::Iter<'a, Option<(String, V)>>,
    fn(&'a Option<(String, V)>) -> Option<(&'a str, &'a V)>,
>;

/// A mapping from string keys to values, hashed into an open-addressing
/// slot array.
///
/// Collisions are resolved by linear probing: an insertion that hashes to
/// an occupied slot walks forward (wrapping around) to the next free one,
/// and lookups retrace the same probe sequence.  The table rehashes into a
/// larger slot array whenever half of the slots are occupied, so the probe
/// sequences stay short.
///
/// This is the hashed counterpart of [`Dictionary`](crate::Dictionary):
/// same keys, same values, but `put` overwrites an existing binding
/// instead of rejecting it, and entries enumerate in slot order rather
/// than insertion order.
///
/// # Complexity
///
/// Let *n* be the number of entries in the table.
///
/// ## Temporal complexity
///
/// | Operation         | Average | Worst case  |
/// |:----------------- | -------:| -----------:|
/// | `new()`           |    Θ(1) |        Θ(1) |
/// | `put()`           |    Θ(1) |        Θ(n) |
/// | `get()`           |    Θ(1) |        Θ(n) |
/// | `len()`           |    Θ(1) |        Θ(1) |
#[derive(Clone, Debug)]
pub struct HashTable<V> {
    slots: Vec<Option<(String, V)>>,
    occupied: usize,
}

impl<V> HashTable<V> {
    #[must_use]
    pub fn new() -> HashTable<V> {
        HashTable { slots: HashTable::<V>::empty_slots(INITIAL_SLOTS), occupied: 0 }
    }

    fn empty_slots(slot_count: usize) -> Vec<Option<(String, V)>> {
        let mut slots = Vec::with_capacity(slot_count);

        slots.resize_with(slot_count, || None);

        slots
    }

    fn slot_index(key: &str, slot_count: usize) -> usize {
        let mut total: u64 = 0;

        for byte in key.bytes() {
            total = total.wrapping_mul(HASH_FACTOR).wrapping_add(u64::from(byte));
        }

        (total % slot_count as u64) as usize
    }

    /// Walks the probe sequence of `key`: the slot holding it if present,
    /// otherwise the free slot where it would be inserted.  The table is
    /// never full, so the walk always terminates.
    fn probe(&self, key: &str) -> usize {
        let slot_count = self.slots.len();
        let mut index = HashTable::<V>::slot_index(key, slot_count);

        while let Some((existing, _)) = &self.slots[index] {
            if existing == key {
                break;
            }
            index = (index + 1) % slot_count;
        }

        index
    }

    /// Adds an entry to the table, overwriting the value of an existing
    /// binding of the same key.  Rejects the empty string as a key.
    pub fn put(&mut self, key: impl Into<String>, value: V) -> Result<(), Error> {
        let key = key.into();

        if key.is_empty() {
            return Err(Error::EmptyKey { operation: "put" });
        }

        if (self.occupied + 1) * 2 > self.slots.len() {
            self.grow();
        }

        let index = self.probe(&key);

        if self.slots[index].is_none() {
            self.occupied += 1;
        }

        self.slots[index] = Some((key, value));

        Ok(())
    }

    /// Returns the value bound to `key`, or `None` if the key is absent.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&V> {
        let index = self.probe(key);

        self.slots[index].as_ref().map(|(_, value)| value)
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.occupied
    }

    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the number of slots in the table, occupied or not.
    #[must_use]
    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Iterates over the entries in slot order.
    #[allow(clippy::iter_without_into_iter)]
    pub fn iter(&self) -> Iter<'_, V> {
        self.slots.iter().filter_map(slot_entry)
    }

    fn grow(&mut self) {
        let new_count = self.slots.len() * 2 + 1;
        let old_slots =
            core::mem::replace(&mut self.slots, HashTable::<V>::empty_slots(new_count));

        self.occupied = 0;

        for slot in old_slots {
            if let Some((key, value)) = slot {
                let index = self.probe(&key);

                self.slots[index] = Some((key, value));
                self.occupied += 1;
            }
        }
    }
}

impl<V> Default for HashTable<V> {
    fn default() -> HashTable<V> {
        HashTable::new()
    }
}

impl<V: PartialEq> PartialEq for HashTable<V> {
    fn eq(&self, other: &HashTable<V>) -> bool {
        self.len() == other.len()
            && self.iter().all(|(key, value)| other.get(key) == Some(value))
    }
}

impl<V: Eq> Eq for HashTable<V> {}

impl<V> Display for HashTable<V> {
    /// Renders the distribution of the hashed entries, one `index: key`
    /// line per occupied slot.
    fn fmt(&self, fmt: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let mut first = true;

        for (index, slot) in self.slots.iter().enumerate() {
            if let Some((key, _)) = slot {
                if !first {
                    fmt.write_str("\n")?;
                }
                write!(fmt, "{index}: {key}")?;
                first = false;
            }
        }

        Ok(())
    }
}

impl<'a, V> IntoIterator for &'a HashTable<V> {
    type Item = (&'a str, &'a V);
    type IntoIter = Iter<'a, V>;

    fn into_iter(self) -> Iter<'a, V> {
        self.iter()
    }
}

impl<V> FromIterator<(String, V)> for HashTable<V> {
    /// Collects key/value pairs into a table.  Pairs with an empty key are
    /// skipped; for duplicate keys the last binding wins.
    fn from_iter<I: IntoIterator<Item = (String, V)>>(into_iter: I) -> HashTable<V> {
        let mut table = HashTable::new();

        for (key, value) in into_iter {
            let _ = table.put(key, value);
        }

        table
    }
}

#[cfg(feature = "serde")]
pub mod serde {
    use super::*;
    use ::serde::de::{Deserialize, Deserializer, MapAccess, Visitor};
    use ::serde::ser::{Serialize, Serializer};
    use core::fmt;
    use core::marker::PhantomData;

    impl<V> Serialize for HashTable<V>
    where
        V: Serialize,
    {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.collect_map(self.iter())
        }
    }

    impl<'de, V> Deserialize<'de> for HashTable<V>
    where
        V: Deserialize<'de>,
    {
        fn deserialize<D: Deserializer<'de>>(
            deserializer: D,
        ) -> Result<HashTable<V>, D::Error> {
            deserializer.deserialize_map(HashTableVisitor { _phantom_v: PhantomData })
        }
    }

    struct HashTableVisitor<V> {
        _phantom_v: PhantomData<V>,
    }

    impl<'de, V> Visitor<'de> for HashTableVisitor<V>
    where
        V: Deserialize<'de>,
    {
        type Value = HashTable<V>;

        fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
            formatter.write_str("a map")
        }

        fn visit_map<A>(self, mut map: A) -> Result<HashTable<V>, A::Error>
        where
            A: MapAccess<'de>,
        {
            let mut table = HashTable::new();

            while let Some((key, value)) = map.next_entry::<String, V>()? {
                let _ = table.put(key, value);
            }

            Ok(table)
        }
    }
}
