// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors reported for invalid use of a [`CardStack`](crate::CardStack).

/// Host programming errors surfaced by the stack.
///
/// Transient conditions such as an empty source are not errors; they simply
/// produce an empty window.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum StackError {
    /// A position at or past the end of the source was requested.
    #[error("position {position} is out of range for a source of {count} items")]
    PositionOutOfRange {
        /// The requested position.
        position: usize,
        /// The source's item count at the time of the request.
        count: usize,
    },
}
