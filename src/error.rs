/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

use thiserror::Error;

/// The ways a keyed container can reject an operation.
///
/// Every variant carries the name of the rejecting operation and, where one
/// exists, the offending key.  Errors are constructed fresh at the failure
/// site; there is no shared error state anywhere in the crate.
///
/// Conditions that are not rejections, such as a missing element or an
/// out-of-range cursor move, are reported through `Option`/`bool` return
/// values instead.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// The empty string is not a valid key.
    #[error("{operation}: the key cannot be an empty string")]
    EmptyKey {
        /// Operation that rejected the key.
        operation: &'static str,
    },

    /// The key is already bound and the container does not overwrite.
    #[error("{operation}: the key `{key}` is already present")]
    DuplicateKey {
        /// Operation that rejected the key.
        operation: &'static str,
        /// The key that was already bound.
        key: String,
    },

    /// The key is not bound to any value.
    #[error("{operation}: the key `{key}` was not found")]
    KeyNotFound {
        /// Operation that failed to find the key.
        operation: &'static str,
        /// The key that was looked up.
        key: String,
    },
}
