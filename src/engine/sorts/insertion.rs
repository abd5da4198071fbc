// Insertion-based sort: shift each new element left into the sorted prefix

use crate::trace::{Snapshot, StepHistory};

/// Insertion sort with full step instrumentation.
///
/// Index 0 starts pre-sorted. Each subsequent element is shifted left one
/// exchange at a time while it is smaller than its left neighbor, with a
/// comparison snapshot per probe and a single-index exchange snapshot per
/// shift; after element `i` settles, positions `0..=i` are marked sorted.
pub fn sort(input: &[i64]) -> StepHistory {
    let mut array = input.to_vec();
    let n = array.len();

    let mut first = Snapshot::initial(array.clone());
    if n > 0 {
        first.sorted_indices.push(0);
    }
    let mut history = StepHistory::with_initial(first);
    if n == 0 {
        return history;
    }

    for i in 1..n {
        let mut select_step = history.clone_latest();
        select_step.selected_indices = vec![i];
        history.push(select_step);

        let mut j = i;
        while j > 0 {
            let mut compare_step = history.clone_latest();
            compare_step.comparing_indices = vec![j, j - 1];
            history.push(compare_step);

            if array[j] < array[j - 1] {
                array.swap(j, j - 1);

                let mut shift_step = history.clone_latest();
                shift_step.array = array.clone();
                shift_step.selected_indices = vec![j - 1];
                history.push(shift_step);

                j -= 1;
            } else {
                // First non-inversion ends the walk
                break;
            }
        }

        let mut sorted_step = history.clone_latest();
        sorted_step.sorted_indices = (0..=i).collect();
        sorted_step.comparing_indices.clear();
        sorted_step.selected_indices.clear();
        history.push(sorted_step);
    }

    history.finish(n);
    history
}
