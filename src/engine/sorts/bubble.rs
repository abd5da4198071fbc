// Exchange-based sort: repeated adjacent-pair passes

use crate::trace::StepHistory;

/// Bubble sort with full step instrumentation.
///
/// One snapshot per adjacent comparison, one more per exchange. After each
/// pass the last unsorted position is marked sorted; a pass with zero
/// exchanges ends the sweep early.
pub fn sort(input: &[i64]) -> StepHistory {
    let mut history = StepHistory::starting_from(input);
    let mut array = input.to_vec();
    let n = array.len();
    if n == 0 {
        return history;
    }

    for i in 0..n {
        let mut swapped = false;

        for j in 0..n - i - 1 {
            let mut compare_step = history.clone_latest();
            compare_step.comparing_indices = vec![j, j + 1];
            history.push(compare_step);

            if array[j] > array[j + 1] {
                array.swap(j, j + 1);
                swapped = true;

                let mut swap_step = history.clone_latest();
                swap_step.array = array.clone();
                swap_step.selected_indices = vec![j, j + 1];
                history.push(swap_step);
            }
        }

        // The largest remaining value has bubbled into place
        let mut sorted_step = history.clone_latest();
        sorted_step.sorted_indices.push(n - i - 1);
        sorted_step.comparing_indices.clear();
        sorted_step.selected_indices.clear();
        history.push(sorted_step);

        if !swapped {
            break;
        }
    }

    history.finish(n);
    history
}
