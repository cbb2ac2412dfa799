/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

use crate::Stack;
use core::fmt::Display;
use log::{debug, info};

/// A [`Stack`] decorator that narrates every operation through the [`log`]
/// facade.
///
/// The decorator owns the stack it wraps and forwards each call unchanged,
/// emitting a log record around it.  No behavior is altered: a
/// `ChattyStack` and a `Stack` fed the same operations hold the same
/// elements.  The host program picks the logger implementation; with no
/// logger installed the records go nowhere.
///
/// # Example
///
/// ```
/// use adts::ChattyStack;
///
/// let mut stack = ChattyStack::new();
///
/// stack.push("a");
/// stack.push("b");
///
/// assert_eq!(stack.pop(), Some("b"));
/// ```
#[derive(Clone, Debug)]
pub struct ChattyStack<T> {
    inner: Stack<T>,
}

impl<T> ChattyStack<T> {
    #[must_use]
    pub fn new() -> ChattyStack<T> {
        info!("chatty stack initialised");
        ChattyStack { inner: Stack::new() }
    }

    pub fn push(&mut self, element: T) {
        self.inner.push(element);
        debug!("pushed an element, depth is now {}", self.inner.len());
    }

    pub fn pop(&mut self) -> Option<T> {
        let popped = self.inner.pop();

        match popped {
            Some(_) => debug!("popped an element, depth is now {}", self.inner.len()),
            None => debug!("pop on an empty stack, resetting it"),
        }

        popped
    }

    #[must_use]
    pub fn peek(&self) -> Option<&T> {
        debug!("peeking at the top of the stack");
        self.inner.peek()
    }

    pub fn clear(&mut self) {
        self.inner.clear();
        debug!("cleared the stack");
    }

    #[must_use]
    pub fn len(&self) -> usize {
        debug!("reporting the stack depth");
        self.inner.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Unwraps the decorator, returning the stack it was narrating.
    #[must_use]
    pub fn into_inner(self) -> Stack<T> {
        self.inner
    }
}

impl<T> Default for ChattyStack<T> {
    fn default() -> ChattyStack<T> {
        ChattyStack::new()
    }
}

impl<T> From<Stack<T>> for ChattyStack<T> {
    /// Starts narrating an existing stack.
    fn from(stack: Stack<T>) -> ChattyStack<T> {
        info!("chatty stack initialised around {} elements", stack.len());
        ChattyStack { inner: stack }
    }
}

impl<T: Display> Display for ChattyStack<T> {
    fn fmt(&self, fmt: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        debug!("rendering the stack");
        self.inner.fmt(fmt)
    }
}
