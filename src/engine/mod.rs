//! Trace generation engine
//!
//! The engine runs one sorting algorithm to completion over a copy of the
//! input, recording a [`Snapshot`](crate::trace::Snapshot) at every
//! observable micro-operation. Nothing streams or suspends: [`run_sort`]
//! returns the entire history plus derived statistics in one
//! [`SortResult`].
//!
//! The set of algorithms is closed: [`AlgorithmKind`] is an enum and
//! dispatch is a single exhaustive `match`, so adding an algorithm is a
//! compile-checked change rather than a registry entry. Unrecognized
//! identifiers fail with [`EngineError::InvalidAlgorithm`] instead of
//! silently substituting a default.

pub mod catalog;
pub mod errors;
pub mod sorts;

use crate::trace::{count_operations, SortResult};
use errors::EngineError;
use std::fmt;
use std::str::FromStr;

/// The eight supported sorting algorithms
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlgorithmKind {
    Bubble,
    Selection,
    Insertion,
    Merge,
    Quick,
    Heap,
    Radix,
    Bucket,
}

/// All algorithm kinds, in display order
pub const ALL_ALGORITHMS: [AlgorithmKind; 8] = [
    AlgorithmKind::Bubble,
    AlgorithmKind::Selection,
    AlgorithmKind::Insertion,
    AlgorithmKind::Merge,
    AlgorithmKind::Quick,
    AlgorithmKind::Heap,
    AlgorithmKind::Radix,
    AlgorithmKind::Bucket,
];

impl AlgorithmKind {
    /// The identifier used on the CLI and in serialized requests
    pub fn identifier(self) -> &'static str {
        match self {
            AlgorithmKind::Bubble => "bubble",
            AlgorithmKind::Selection => "selection",
            AlgorithmKind::Insertion => "insertion",
            AlgorithmKind::Merge => "merge",
            AlgorithmKind::Quick => "quick",
            AlgorithmKind::Heap => "heap",
            AlgorithmKind::Radix => "radix",
            AlgorithmKind::Bucket => "bucket",
        }
    }

    /// The next kind in display order, wrapping around
    pub fn next(self) -> Self {
        match self {
            AlgorithmKind::Bubble => AlgorithmKind::Selection,
            AlgorithmKind::Selection => AlgorithmKind::Insertion,
            AlgorithmKind::Insertion => AlgorithmKind::Merge,
            AlgorithmKind::Merge => AlgorithmKind::Quick,
            AlgorithmKind::Quick => AlgorithmKind::Heap,
            AlgorithmKind::Heap => AlgorithmKind::Radix,
            AlgorithmKind::Radix => AlgorithmKind::Bucket,
            AlgorithmKind::Bucket => AlgorithmKind::Bubble,
        }
    }
}

impl FromStr for AlgorithmKind {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bubble" => Ok(AlgorithmKind::Bubble),
            "selection" => Ok(AlgorithmKind::Selection),
            "insertion" => Ok(AlgorithmKind::Insertion),
            "merge" => Ok(AlgorithmKind::Merge),
            "quick" => Ok(AlgorithmKind::Quick),
            "heap" => Ok(AlgorithmKind::Heap),
            "radix" => Ok(AlgorithmKind::Radix),
            "bucket" => Ok(AlgorithmKind::Bucket),
            _ => Err(EngineError::InvalidAlgorithm {
                name: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for AlgorithmKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.identifier())
    }
}

/// Run `algorithm` over a copy of `input`, producing the full step history
/// and derived comparison/swap counts.
///
/// The caller's slice is never mutated. Only digit-based (radix) sorting
/// can fail, on negative input values.
pub fn run_sort(input: &[i64], algorithm: AlgorithmKind) -> Result<SortResult, EngineError> {
    let history = match algorithm {
        AlgorithmKind::Bubble => sorts::bubble::sort(input),
        AlgorithmKind::Selection => sorts::selection::sort(input),
        AlgorithmKind::Insertion => sorts::insertion::sort(input),
        AlgorithmKind::Merge => sorts::merge::sort(input),
        AlgorithmKind::Quick => sorts::quick::sort(input),
        AlgorithmKind::Heap => sorts::heap::sort(input),
        AlgorithmKind::Radix => sorts::radix::sort(input)?,
        AlgorithmKind::Bucket => sorts::bucket::sort(input),
    };

    let stats = count_operations(&history);
    Ok(SortResult { history, stats })
}

/// Identifier-based entry point: parse `name`, then run.
///
/// Fails with [`EngineError::InvalidAlgorithm`] for unrecognized names;
/// there is no silent fallback engine.
pub fn run_sort_named(input: &[i64], name: &str) -> Result<SortResult, EngineError> {
    let algorithm = name.parse::<AlgorithmKind>()?;
    run_sort(input, algorithm)
}
