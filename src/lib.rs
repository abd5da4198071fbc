//! # Introduction
//!
//! Sortty runs a classic sorting algorithm over an input array, capturing a
//! snapshot of the full array state at every observable micro-operation.
//! The snapshot history is then animated as a bar chart in a terminal UI
//! built with [ratatui](https://docs.rs/ratatui).
//!
//! ## Pipeline
//!
//! ```text
//! Input → Engine → StepHistory → TUI playback
//! ```
//!
//! 1. [`input`] — seedable array generators (random, nearly-sorted,
//!    reversed) and explicit value-list parsing.
//! 2. [`engine`] — the eight instrumented sort implementations; each
//!    builds a complete [`trace::StepHistory`] synchronously before
//!    returning, plus the static metadata catalog.
//! 3. [`trace`] — the [`trace::Snapshot`] model, the append-only history
//!    with its clone-before-mutate discipline, and the operation counter.
//! 4. [`ui`] — ratatui-based TUI; not part of the stable library API.
//!
//! ## Supported algorithms
//!
//! bubble, selection, insertion, merge, quick, heap, radix, bucket —
//! dispatched through the closed [`engine::AlgorithmKind`] enum.

pub mod engine;
pub mod input;
pub mod trace;
pub mod ui;
