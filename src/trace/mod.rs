// Snapshot history for sort trace playback

use serde::Serialize;

/// One frame of a sort in progress: the full array state plus the index
/// sets a renderer highlights.
///
/// Every snapshot owns its storage outright. The engines mutate a single
/// working array in place, so a snapshot that borrowed or aliased that
/// array would silently rewrite history as the sort progressed; cloning on
/// append is what makes the trace replayable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    /// Full array state at this instant (not a diff).
    pub array: Vec<i64>,
    /// Positions currently being compared.
    pub comparing_indices: Vec<usize>,
    /// Positions known to hold their final sorted value. Non-decreasing in
    /// size across the trace.
    pub sorted_indices: Vec<usize>,
    /// Active write positions (swap targets, placements, shifts).
    pub selected_indices: Vec<usize>,
    /// Positions acting as a pivot (partition sort; empty elsewhere).
    pub pivot_indices: Vec<usize>,
}

impl Snapshot {
    /// The first frame of a trace: the unmodified input, nothing highlighted.
    pub fn initial(array: Vec<i64>) -> Self {
        Snapshot {
            array,
            comparing_indices: Vec::new(),
            sorted_indices: Vec::new(),
            selected_indices: Vec::new(),
            pivot_indices: Vec::new(),
        }
    }
}

/// An append-only sequence of snapshots produced by one full run of one
/// algorithm on one input.
///
/// Engines follow a clone-latest-then-mutate discipline: take an
/// independent copy of the most recent snapshot with [`clone_latest`],
/// change only the fields that differ for the new step, and [`push`] it.
/// Fields left untouched deliberately carry over (e.g. a stale pivot
/// highlight persists until the next partition replaces it).
///
/// [`clone_latest`]: StepHistory::clone_latest
/// [`push`]: StepHistory::push
#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct StepHistory {
    steps: Vec<Snapshot>,
}

impl StepHistory {
    /// Start a history with the initial snapshot for `input`.
    pub fn starting_from(input: &[i64]) -> Self {
        StepHistory::with_initial(Snapshot::initial(input.to_vec()))
    }

    /// Start a history from a prepared first snapshot (insertion sort
    /// pre-marks index 0 as sorted).
    pub fn with_initial(first: Snapshot) -> Self {
        StepHistory { steps: vec![first] }
    }

    /// Append a snapshot to the history.
    pub fn push(&mut self, snapshot: Snapshot) {
        self.steps.push(snapshot);
    }

    /// A fully independent copy of the most recent snapshot, suitable for
    /// mutation without affecting anything already in the history.
    pub fn clone_latest(&self) -> Snapshot {
        self.steps
            .last()
            .expect("history always holds the initial snapshot")
            .clone()
    }

    /// Append the closing step: every position sorted, all highlights
    /// cleared. Every engine ends its trace with this.
    pub fn finish(&mut self, n: usize) {
        let mut step = self.clone_latest();
        step.sorted_indices = (0..n).collect();
        step.comparing_indices.clear();
        step.selected_indices.clear();
        step.pivot_indices.clear();
        self.push(step);
    }

    /// Get a snapshot by index.
    pub fn get(&self, index: usize) -> Option<&Snapshot> {
        self.steps.get(index)
    }

    /// The number of snapshots.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Check if empty. A history built through [`StepHistory::starting_from`]
    /// never is.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Iterate over the snapshots in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Snapshot> {
        self.steps.iter()
    }

    /// The snapshots as a slice.
    pub fn as_slice(&self) -> &[Snapshot] {
        &self.steps
    }
}

/// Comparison/swap totals derived from a finished trace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OperationCounts {
    pub comparisons: usize,
    pub swaps: usize,
}

/// A finished trace plus its derived statistics. Constructed fresh per
/// engine invocation and never mutated after return.
#[derive(Debug, Clone, Serialize)]
pub struct SortResult {
    pub history: StepHistory,
    pub stats: OperationCounts,
}

/// Derive comparison/swap counts by scanning snapshot flags.
///
/// This counts snapshots, not true operation counts: comparisons are
/// snapshots with a non-empty comparing set, swaps are snapshots whose
/// selected set has at least two positions. Engines that record a move
/// with a single selected index (insertion-sort shifts, merge placements)
/// are not counted as swaps, so treat the result as an approximation.
pub fn count_operations(history: &StepHistory) -> OperationCounts {
    let comparisons = history
        .iter()
        .filter(|step| !step.comparing_indices.is_empty())
        .count();
    let swaps = history
        .iter()
        .filter(|step| step.selected_indices.len() >= 2)
        .count();

    OperationCounts { comparisons, swaps }
}
