// Divide-and-merge sort over a shared working buffer

use crate::trace::StepHistory;
use rustc_hash::FxHashSet;

/// Merge sort with full step instrumentation.
///
/// Each split highlights the half about to be recursed into; the merge
/// emits one comparison snapshot per head-to-head candidate comparison and
/// one placement snapshot per element written into the destination range
/// (including the leftover-copy loops), then marks the merged range
/// sorted. Equal elements take from the left run first, so the sort is
/// stable.
pub fn sort(input: &[i64]) -> StepHistory {
    let history = StepHistory::starting_from(input);
    let array = input.to_vec();
    let n = array.len();
    if n == 0 {
        return history;
    }

    let mut run = MergeRun {
        array,
        history,
        sorted: FxHashSet::default(),
    };
    run.sort_range(0, n - 1);

    let mut history = run.history;
    history.finish(n);
    history
}

/// Working state for one invocation: the single shared buffer, the growing
/// history, and the set of positions already marked sorted (membership
/// checks keep the snapshot's sorted list duplicate-free).
struct MergeRun {
    array: Vec<i64>,
    history: StepHistory,
    sorted: FxHashSet<usize>,
}

impl MergeRun {
    fn sort_range(&mut self, start: usize, end: usize) {
        if start < end {
            let mid = (start + end) / 2;

            let mut left_split_step = self.history.clone_latest();
            left_split_step.selected_indices = (start..=mid).collect();
            self.history.push(left_split_step);

            self.sort_range(start, mid);

            let mut right_split_step = self.history.clone_latest();
            right_split_step.selected_indices = (mid + 1..=end).collect();
            self.history.push(right_split_step);

            self.sort_range(mid + 1, end);

            self.merge(start, mid, end);
        } else {
            // Single element: already sorted
            let mut single_step = self.history.clone_latest();
            if self.sorted.insert(start) {
                single_step.sorted_indices.push(start);
            }
            self.history.push(single_step);
        }
    }

    fn merge(&mut self, start: usize, mid: usize, end: usize) {
        let left_run: Vec<i64> = self.array[start..=mid].to_vec();
        let right_run: Vec<i64> = self.array[mid + 1..=end].to_vec();

        let mut span_step = self.history.clone_latest();
        span_step.selected_indices = (start..=end).collect();
        self.history.push(span_step);

        let mut i = 0;
        let mut j = 0;
        let mut k = start;

        while i < left_run.len() && j < right_run.len() {
            let mut compare_step = self.history.clone_latest();
            compare_step.comparing_indices = vec![start + i, mid + 1 + j];
            self.history.push(compare_step);

            // <= keeps equal elements in left-run order (stability)
            if left_run[i] <= right_run[j] {
                self.array[k] = left_run[i];
                i += 1;
            } else {
                self.array[k] = right_run[j];
                j += 1;
            }

            self.push_placement(k);
            k += 1;
        }

        while i < left_run.len() {
            self.array[k] = left_run[i];
            self.push_placement(k);
            i += 1;
            k += 1;
        }

        while j < right_run.len() {
            self.array[k] = right_run[j];
            self.push_placement(k);
            j += 1;
            k += 1;
        }

        let mut merged_step = self.history.clone_latest();
        for idx in start..=end {
            if self.sorted.insert(idx) {
                merged_step.sorted_indices.push(idx);
            }
        }
        merged_step.comparing_indices.clear();
        merged_step.selected_indices.clear();
        self.history.push(merged_step);
    }

    /// Snapshot an element landing at destination index `k`.
    fn push_placement(&mut self, k: usize) {
        let mut place_step = self.history.clone_latest();
        place_step.array = self.array.clone();
        place_step.selected_indices = vec![k];
        self.history.push(place_step);
    }
}
