//! The eight instrumented sorting algorithms
//!
//! Each module exposes a single `sort` function that consumes an input
//! slice and produces a complete [`StepHistory`](crate::trace::StepHistory):
//! the unmodified input first, one snapshot per observable micro-operation
//! (comparison, exchange, placement, sorted-region growth), and a closing
//! snapshot with every position sorted.
//!
//! Shared discipline:
//! - the caller's input is copied on entry and never mutated;
//! - every step is a clone of the latest snapshot with only the changed
//!   fields touched (see [`StepHistory::clone_latest`]);
//! - an empty input yields just the initial snapshot;
//! - traces end via [`StepHistory::finish`].
//!
//! [`StepHistory::clone_latest`]: crate::trace::StepHistory::clone_latest
//! [`StepHistory::finish`]: crate::trace::StepHistory::finish

pub mod bubble;
pub mod bucket;
pub mod heap;
pub mod insertion;
pub mod merge;
pub mod quick;
pub mod radix;
pub mod selection;
