// Partition-based sort, last-element pivot

use crate::trace::StepHistory;
use rustc_hash::FxHashSet;

/// Quick sort with full step instrumentation.
///
/// The pivot is always the last element of the active range. Partitioning
/// emits a pivot-highlight snapshot, one comparison snapshot per scanned
/// element, and an exchange snapshot each time an element enters the
/// low region (a single selected index when the element is already there).
/// The pivot's final placement is always emitted, even when it does not
/// move, before the pivot position is marked sorted.
pub fn sort(input: &[i64]) -> StepHistory {
    let history = StepHistory::starting_from(input);
    let array = input.to_vec();
    let n = array.len();
    if n == 0 {
        return history;
    }

    let mut run = QuickRun {
        array,
        history,
        sorted: FxHashSet::default(),
    };
    run.sort_range(0, n as isize - 1);

    let mut history = run.history;
    history.finish(n);
    history
}

/// Working state for one invocation. Bounds are signed because the
/// recursion steps to `pivot - 1`, which underflows at the left edge.
struct QuickRun {
    array: Vec<i64>,
    history: StepHistory,
    sorted: FxHashSet<usize>,
}

impl QuickRun {
    fn sort_range(&mut self, low: isize, high: isize) {
        if low < high {
            let pivot_pos = self.partition(low as usize, high as usize);
            self.sort_range(low, pivot_pos as isize - 1);
            self.sort_range(pivot_pos as isize + 1, high);
        } else if low == high {
            // Single element: already sorted
            let idx = low as usize;
            let mut single_step = self.history.clone_latest();
            if self.sorted.insert(idx) {
                single_step.sorted_indices.push(idx);
            }
            self.history.push(single_step);
        }
    }

    /// Partition `low..=high` around the last element; returns the pivot's
    /// final position.
    fn partition(&mut self, low: usize, high: usize) -> usize {
        let pivot = self.array[high];

        let mut pivot_step = self.history.clone_latest();
        pivot_step.pivot_indices = vec![high];
        self.history.push(pivot_step);

        // Next slot in the low region (everything below is <= pivot)
        let mut boundary = low;

        for j in low..high {
            let mut compare_step = self.history.clone_latest();
            compare_step.comparing_indices = vec![j, high];
            self.history.push(compare_step);

            if self.array[j] <= pivot {
                self.array.swap(boundary, j);

                let mut swap_step = self.history.clone_latest();
                swap_step.array = self.array.clone();
                swap_step.selected_indices = if boundary != j {
                    vec![boundary, j]
                } else {
                    vec![boundary]
                };
                self.history.push(swap_step);

                boundary += 1;
            }
        }

        self.array.swap(boundary, high);

        let mut place_step = self.history.clone_latest();
        place_step.array = self.array.clone();
        place_step.selected_indices = if boundary != high {
            vec![boundary, high]
        } else {
            vec![boundary]
        };
        place_step.pivot_indices = vec![boundary];
        self.history.push(place_step);

        let mut sorted_step = self.history.clone_latest();
        if self.sorted.insert(boundary) {
            sorted_step.sorted_indices.push(boundary);
        }
        sorted_step.comparing_indices.clear();
        sorted_step.selected_indices.clear();
        self.history.push(sorted_step);

        boundary
    }
}
