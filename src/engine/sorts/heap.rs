// Heap-based sort: bottom-up max-heap build, then repeated root extraction

use crate::trace::StepHistory;

/// Heap sort with full step instrumentation.
///
/// The build phase sifts down every parent from `n/2 - 1` to the root.
/// Each sift emits a snapshot highlighting the node with its in-range
/// children in the comparing set, then up to two comparison snapshots
/// (node vs left, winner vs right), and an exchange snapshot plus a
/// recursive sift when the node is displaced. Extraction repeatedly swaps
/// the root with the last unsorted position and marks it sorted.
pub fn sort(input: &[i64]) -> StepHistory {
    let history = StepHistory::starting_from(input);
    let array = input.to_vec();
    let n = array.len();
    if n == 0 {
        return history;
    }

    let mut run = HeapRun { array, history };

    for i in (0..n / 2).rev() {
        run.sift_down(n, i);
    }

    for i in (1..n).rev() {
        run.array.swap(0, i);

        let mut swap_step = run.history.clone_latest();
        swap_step.array = run.array.clone();
        swap_step.selected_indices = vec![0, i];
        run.history.push(swap_step);

        let mut sorted_step = run.history.clone_latest();
        sorted_step.sorted_indices.push(i);
        sorted_step.comparing_indices.clear();
        sorted_step.selected_indices.clear();
        run.history.push(sorted_step);

        run.sift_down(i, 0);
    }

    // Position 0 is what remains; finish marks it with the rest
    let mut history = run.history;
    history.finish(n);
    history
}

struct HeapRun {
    array: Vec<i64>,
    history: StepHistory,
}

impl HeapRun {
    /// Restore the max-heap property for the subtree rooted at `i`,
    /// considering only the first `len` elements.
    fn sift_down(&mut self, len: usize, i: usize) {
        let mut largest = i;
        let left = 2 * i + 1;
        let right = 2 * i + 2;

        let mut node_step = self.history.clone_latest();
        node_step.selected_indices = vec![i];
        let mut children = Vec::new();
        if left < len {
            children.push(left);
        }
        if right < len {
            children.push(right);
        }
        node_step.comparing_indices = children;
        self.history.push(node_step);

        if left < len {
            let mut compare_step = self.history.clone_latest();
            compare_step.comparing_indices = vec![largest, left];
            self.history.push(compare_step);

            if self.array[left] > self.array[largest] {
                largest = left;
            }
        }

        if right < len {
            let mut compare_step = self.history.clone_latest();
            compare_step.comparing_indices = vec![largest, right];
            self.history.push(compare_step);

            if self.array[right] > self.array[largest] {
                largest = right;
            }
        }

        if largest != i {
            self.array.swap(i, largest);

            let mut swap_step = self.history.clone_latest();
            swap_step.array = self.array.clone();
            swap_step.selected_indices = vec![i, largest];
            self.history.push(swap_step);

            self.sift_down(len, largest);
        }
    }
}
