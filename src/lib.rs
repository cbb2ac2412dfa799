/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

#![cfg_attr(feature = "fatal-warnings", deny(warnings))]

// Note: Keep this in sync with `README.md`.
//! # Classic Abstract Data Types
//!
//! A small library of classic abstract data types with a uniform, readable
//! operation contract.  Every container is a plain mutable value holder:
//! single-threaded, synchronous, exclusively owned by its creator.
//! Operations never panic on bad input: rejections travel through
//! [`Result`](crate::Error), and soft failures (a missing element, an empty
//! container, an out-of-range cursor move) through `Option`/`bool`.
//!
//! # Data Structures
//!
//! This crate implements the following data structures:
//!
//!   1. [`List`](#list)
//!   2. [`Queue`](#queue)
//!   3. [`Stack`](#stack)
//!   4. [`Set`](#set)
//!   5. [`Dictionary`](#dictionary)
//!   6. [`HashTable`](#hashtable)
//!
//! and two helpers: [`Iter`](#iter), a shape-tagged cursor over flat
//! collections, and [`ChattyStack`](#chattystack), a logging decorator for
//! the stack.
//!
//! ## `List`
//!
//! An ordered sequence with an internal traversal cursor, distinct from
//! index-based random access.
//!
//! ### Example
//!
//! ```rust
//! use adts::List;
//!
//! let mut list = List::new();
//!
//! list.append("a");
//! list.append("b");
//! list.append("c");
//!
//! assert_eq!(list.current(), Some(&"a"));
//! assert_eq!(list.next(), Some(&"b"));
//! assert!(list.insert("x", &"b"));
//! assert_eq!(list.len(), 4);
//! ```
//!
//! ## `Queue`
//!
//! A FIFO (first in, first out) data structure.
//!
//! ### Example
//!
//! ```rust
//! use adts::Queue;
//!
//! let mut queue = Queue::new();
//!
//! queue.enqueue("um");
//! queue.enqueue("dois");
//! queue.enqueue("tres");
//!
//! assert_eq!(queue.front(), Some(&"um"));
//! assert_eq!(queue.dequeue(), Some("um"));
//! assert_eq!(queue.dequeue(), Some("dois"));
//! ```
//!
//! ## `Stack`
//!
//! A LIFO (last in, first out) data structure.
//!
//! ### Example
//!
//! ```rust
//! use adts::Stack;
//!
//! let mut stack = Stack::new();
//!
//! stack.push("stack");
//! stack.push("a");
//!
//! assert_eq!(stack.peek(), Some(&"a"));
//! assert_eq!(stack.pop(), Some("a"));
//! assert_eq!(stack.peek(), Some(&"stack"));
//! ```
//!
//! ## `Set`
//!
//! An unordered collection of unique elements with equality-based
//! membership and the usual algebra: union, intersection, symmetric
//! difference, and relative complement.
//!
//! ### Example
//!
//! ```rust
//! use adts::Set;
//!
//! let evens: Set<i32> = vec![0, 2, 4, 6].into_iter().collect();
//! let small: Set<i32> = vec![0, 1, 2, 3].into_iter().collect();
//!
//! assert_eq!(evens.union(&small).len(), 6);
//! assert_eq!(evens.intersection(&small).len(), 2);
//! assert!(evens.intersection(&small).is_subset(&evens));
//! ```
//!
//! ## `Dictionary`
//!
//! A mapping from unique, non-empty string keys to arbitrary values, with
//! insertion-order enumeration and a key-sorted display form.
//!
//! ### Example
//!
//! ```rust
//! use adts::Dictionary;
//!
//! let mut dictionary = Dictionary::new();
//!
//! dictionary.put("zero", 0).unwrap();
//! dictionary.put("one", 1).unwrap();
//!
//! assert_eq!(dictionary.get("one"), Some(&1));
//! assert!(dictionary.put("one", 2).is_err());
//! assert_eq!(dictionary.to_string(), "one: 1, zero: 0");
//! ```
//!
//! ## `HashTable`
//!
//! The hashed counterpart of the dictionary: an open-addressing slot array
//! with linear probing.
//!
//! ### Example
//!
//! ```rust
//! use adts::HashTable;
//!
//! let mut table = HashTable::new();
//!
//! table.put("zero", 0).unwrap();
//! table.put("zero", 1).unwrap();
//!
//! assert_eq!(table.get("zero"), Some(&1));
//! ```
//!
//! ## `Iter`
//!
//! A forward cursor over one flat collection (a string, a slice, or a
//! dictionary table), fixed to that shape for its lifetime.
//!
//! ### Example
//!
//! ```rust
//! use adts::{Element, Iter};
//!
//! let mut iterator = Iter::over_text("hi");
//!
//! assert_eq!(iterator.next(), Some(Element::Char('h')));
//! assert_eq!(iterator.next(), Some(Element::Char('i')));
//! assert_eq!(iterator.next(), None);
//! ```
//!
//! ## `ChattyStack`
//!
//! A [`Stack`] decorator that narrates every operation through the
//! [`log`] facade while forwarding it unchanged.
//!
//! ### Example
//!
//! ```rust
//! use adts::ChattyStack;
//!
//! let mut stack = ChattyStack::new();
//!
//! stack.push(1);
//!
//! assert_eq!(stack.pop(), Some(1));
//! ```

pub mod dictionary;
pub mod error;
pub mod hash_table;
pub mod iter;
pub mod list;
pub mod queue;
pub mod set;
pub mod stack;

pub use crate::dictionary::Dictionary;
pub use crate::error::Error;
pub use crate::hash_table::HashTable;
pub use crate::iter::{Element, Iter};
pub use crate::list::List;
pub use crate::queue::Queue;
pub use crate::set::Set;
pub use crate::stack::Stack;
pub use crate::stack::chatty::ChattyStack;
