// Selection-based sort: grow the sorted prefix by repeated minimum scans

use crate::trace::StepHistory;

/// Selection sort with full step instrumentation.
///
/// Each outer pass highlights the target position, emits one comparison
/// snapshot per scanned candidate and a selection snapshot whenever the
/// provisional minimum changes, performs at most one exchange (skipped if
/// the minimum is already in place), then marks the position sorted.
pub fn sort(input: &[i64]) -> StepHistory {
    let mut history = StepHistory::starting_from(input);
    let mut array = input.to_vec();
    let n = array.len();
    if n == 0 {
        return history;
    }

    for i in 0..n - 1 {
        let mut min_index = i;

        let mut select_step = history.clone_latest();
        select_step.selected_indices = vec![i];
        history.push(select_step);

        for j in i + 1..n {
            let mut compare_step = history.clone_latest();
            compare_step.comparing_indices = vec![min_index, j];
            history.push(compare_step);

            if array[j] < array[min_index] {
                min_index = j;

                let mut new_min_step = history.clone_latest();
                new_min_step.selected_indices = vec![min_index];
                history.push(new_min_step);
            }
        }

        if min_index != i {
            array.swap(i, min_index);

            let mut swap_step = history.clone_latest();
            swap_step.array = array.clone();
            swap_step.selected_indices = vec![i, min_index];
            history.push(swap_step);
        }

        let mut sorted_step = history.clone_latest();
        sorted_step.sorted_indices.push(i);
        sorted_step.comparing_indices.clear();
        sorted_step.selected_indices.clear();
        history.push(sorted_step);
    }

    history.finish(n);
    history
}
