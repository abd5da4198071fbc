// Integration tests for the trace generation engine

use sortty::engine::errors::EngineError;
use sortty::engine::{run_sort, run_sort_named, AlgorithmKind, ALL_ALGORITHMS};
use sortty::input::SeededRng;
use sortty::trace::SortResult;

fn run(input: &[i64], algorithm: AlgorithmKind) -> SortResult {
    run_sort(input, algorithm)
        .unwrap_or_else(|e| panic!("{} failed on {:?}: {}", algorithm, input, e))
}

fn sorted_copy(input: &[i64]) -> Vec<i64> {
    let mut copy = input.to_vec();
    copy.sort_unstable();
    copy
}

/// Final snapshot of every engine: array is a sorted permutation of the
/// input, all positions marked sorted, no highlights left over.
fn assert_valid_trace(input: &[i64], algorithm: AlgorithmKind, result: &SortResult) {
    let n = input.len();
    let history = &result.history;
    assert!(!history.is_empty(), "{}: trace is never empty", algorithm);

    let first = history.get(0).expect("first snapshot");
    assert_eq!(
        first.array, input,
        "{}: first snapshot must hold the unmodified input",
        algorithm
    );
    assert!(first.comparing_indices.is_empty());
    assert!(first.selected_indices.is_empty());
    assert!(first.pivot_indices.is_empty());
    if algorithm == AlgorithmKind::Insertion && n > 0 {
        assert_eq!(
            first.sorted_indices,
            vec![0],
            "insertion pre-marks index 0 as sorted"
        );
    } else {
        assert!(first.sorted_indices.is_empty());
    }

    let last = history.get(history.len() - 1).expect("last snapshot");
    assert_eq!(
        last.array,
        sorted_copy(input),
        "{}: final array must be the sorted permutation of {:?}",
        algorithm,
        input
    );
    let mut final_sorted = last.sorted_indices.clone();
    final_sorted.sort_unstable();
    assert_eq!(
        final_sorted,
        (0..n).collect::<Vec<usize>>(),
        "{}: final snapshot must mark the full index range sorted",
        algorithm
    );
    assert!(last.comparing_indices.is_empty());
    assert!(last.selected_indices.is_empty());
    assert!(last.pivot_indices.is_empty());

    // Sorted region only ever grows, and no snapshot invents values
    let known_values = sorted_copy(input);
    let mut prev_sorted = 0;
    for (step_index, step) in history.iter().enumerate() {
        assert!(
            step.sorted_indices.len() >= prev_sorted,
            "{}: sorted region shrank at step {}",
            algorithm,
            step_index
        );
        prev_sorted = step.sorted_indices.len();

        assert_eq!(step.array.len(), n);
        for value in &step.array {
            assert!(
                known_values.binary_search(value).is_ok(),
                "{}: step {} fabricated value {}",
                algorithm,
                step_index,
                value
            );
        }
    }
}

#[test]
fn all_engines_sort_random_inputs() {
    for &algorithm in &ALL_ALGORITHMS {
        let mut rng = SeededRng::new(0xC0FFEE);
        for size in [0, 1, 2, 3, 5, 8, 16, 33, 64, 200] {
            let input: Vec<i64> = (0..size)
                .map(|_| rng.next_bounded(1000) as i64 + 1)
                .collect();
            let result = run(&input, algorithm);
            assert_valid_trace(&input, algorithm, &result);
        }
    }
}

#[test]
fn all_engines_handle_duplicates() {
    let input = [5, 1, 5, 1, 5, 3, 3];
    for &algorithm in &ALL_ALGORITHMS {
        let result = run(&input, algorithm);
        assert_valid_trace(&input, algorithm, &result);
    }
}

#[test]
fn all_engines_are_idempotent_on_sorted_input() {
    let input: Vec<i64> = (1..=20).collect();
    for &algorithm in &ALL_ALGORITHMS {
        let result = run(&input, algorithm);
        let last = result.history.get(result.history.len() - 1).unwrap();
        assert_eq!(last.array, input, "{}: sorted input must survive", algorithm);
    }
}

#[test]
fn empty_input_yields_a_single_snapshot() {
    for &algorithm in &ALL_ALGORITHMS {
        let result = run(&[], algorithm);
        assert_eq!(
            result.history.len(),
            1,
            "{}: empty input must produce exactly the initial snapshot",
            algorithm
        );
        let only = result.history.get(0).unwrap();
        assert!(only.array.is_empty());
        assert!(only.comparing_indices.is_empty());
        assert!(only.sorted_indices.is_empty());
        assert!(only.selected_indices.is_empty());
        assert!(only.pivot_indices.is_empty());
        assert_eq!(result.stats.comparisons, 0);
        assert_eq!(result.stats.swaps, 0);
    }
}

#[test]
fn single_element_is_marked_sorted_without_comparisons() {
    for &algorithm in &ALL_ALGORITHMS {
        let result = run(&[5], algorithm);
        let last = result.history.get(result.history.len() - 1).unwrap();
        assert_eq!(last.array, vec![5]);
        assert_eq!(last.sorted_indices, vec![0]);
        assert_eq!(
            result.stats.comparisons, 0,
            "{}: a single element needs no comparisons",
            algorithm
        );
    }
}

#[test]
fn engines_do_not_mutate_the_callers_input() {
    let input = vec![9, 4, 7, 1];
    for &algorithm in &ALL_ALGORITHMS {
        let _ = run(&input, algorithm);
        assert_eq!(input, vec![9, 4, 7, 1]);
    }
}

#[test]
fn traces_are_deterministic() {
    let input = [7, 3, 9, 1, 5, 5, 2];
    for &algorithm in &ALL_ALGORITHMS {
        let a = run(&input, algorithm);
        let b = run(&input, algorithm);
        assert_eq!(a.stats, b.stats, "{}: stats must be reproducible", algorithm);
        assert_eq!(
            a.history.as_slice(),
            b.history.as_slice(),
            "{}: traces must be reproducible",
            algorithm
        );
    }
}

// === CONCRETE SCENARIOS ===

#[test]
fn bubble_sort_worst_case_comparison_count() {
    // First pass always swaps, so the zero-swap early exit never skips a
    // comparison: the full 4+3+2+1 comparisons are observed
    let result = run(&[5, 3, 1, 4, 2], AlgorithmKind::Bubble);
    let last = result.history.get(result.history.len() - 1).unwrap();
    assert_eq!(last.array, vec![1, 2, 3, 4, 5]);
    assert_eq!(result.stats.comparisons, 10);
}

#[test]
fn bubble_sort_early_exit_on_sorted_input() {
    // One full pass (2 comparisons), no swaps, then the no-swap exit
    let result = run(&[1, 2, 3], AlgorithmKind::Bubble);
    assert_eq!(result.stats.comparisons, 2);
    assert_eq!(result.stats.swaps, 0);
    // initial, two comparisons, pass-end marking, final
    assert_eq!(result.history.len(), 5);
    let last = result.history.get(result.history.len() - 1).unwrap();
    assert_eq!(last.array, vec![1, 2, 3]);
}

#[test]
fn bubble_sort_two_element_trace_shape() {
    let result = run(&[2, 1], AlgorithmKind::Bubble);
    // initial, compare, swap, two pass-end markings, final
    assert_eq!(result.history.len(), 6);
    assert_eq!(result.stats.comparisons, 1);
    assert_eq!(result.stats.swaps, 1);

    let compare = result.history.get(1).unwrap();
    assert_eq!(compare.comparing_indices, vec![0, 1]);
    assert_eq!(compare.array, vec![2, 1], "comparison does not move values");

    let swap = result.history.get(2).unwrap();
    assert_eq!(swap.array, vec![1, 2]);
    assert_eq!(swap.selected_indices, vec![0, 1]);
}

#[test]
fn quick_sort_partitions_two_elements_around_last_pivot() {
    let result = run(&[4, 2], AlgorithmKind::Quick);

    // The pivot-highlight step marks the last element of the range
    let pivot_step = result.history.get(1).unwrap();
    assert_eq!(pivot_step.pivot_indices, vec![1]);
    assert_eq!(pivot_step.array, vec![4, 2]);

    // After partitioning the pivot lands at index 0
    let last = result.history.get(result.history.len() - 1).unwrap();
    assert_eq!(last.array, vec![2, 4]);
    let mut sorted = last.sorted_indices.clone();
    sorted.sort_unstable();
    assert_eq!(sorted, vec![0, 1]);
}

#[test]
fn quick_sort_emits_pivot_placement_even_when_unmoved() {
    // Already partitioned: the pivot (3) stays at the end, but its
    // placement step is still emitted with a single selected index
    let result = run(&[1, 2, 3], AlgorithmKind::Quick);
    let placement = result
        .history
        .iter()
        .find(|step| step.pivot_indices == vec![2] && step.selected_indices == vec![2]);
    assert!(
        placement.is_some(),
        "pivot placement must be recorded even for an in-place pivot"
    );
}

#[test]
fn radix_sort_orders_multi_digit_values() {
    let input = [170, 45, 75, 90, 802, 24, 2, 66];
    let result = run(&input, AlgorithmKind::Radix);
    let last = result.history.get(result.history.len() - 1).unwrap();
    assert_eq!(last.array, vec![2, 24, 45, 66, 75, 90, 170, 802]);
    // Digit passes never compare elements against each other
    assert_eq!(result.stats.comparisons, 0);
}

#[test]
fn radix_sort_rejects_negative_values() {
    let err = run_sort(&[3, -1, 2], AlgorithmKind::Radix)
        .expect_err("negative values must be rejected");
    assert!(
        matches!(err, EngineError::InvalidInput { .. }),
        "expected InvalidInput, got {:?}",
        err
    );
}

#[test]
fn insertion_sort_shifts_are_not_counted_as_swaps() {
    // Shift steps carry a single selected index, so the coarse counter
    // reports zero swaps for insertion sort
    let result = run(&[3, 1, 2], AlgorithmKind::Insertion);
    assert_eq!(result.stats.comparisons, 3);
    assert_eq!(result.stats.swaps, 0);
}

#[test]
fn selection_sort_counts_one_swap_per_displaced_minimum() {
    let result = run(&[3, 1, 2], AlgorithmKind::Selection);
    assert_eq!(result.stats.comparisons, 3);
    assert_eq!(result.stats.swaps, 2);
}

#[test]
fn merge_sort_is_stable_for_equal_elements() {
    // Equal heads resolve to the left run: a single comparison, then
    // in-order placements
    let result = run(&[2, 2], AlgorithmKind::Merge);
    assert_eq!(result.stats.comparisons, 1);
    let last = result.history.get(result.history.len() - 1).unwrap();
    assert_eq!(last.array, vec![2, 2]);
}

#[test]
fn unknown_algorithm_fails_loudly() {
    let err = run_sort_named(&[3, 1, 2], "bogo").expect_err("unknown name must fail");
    assert!(
        matches!(err, EngineError::InvalidAlgorithm { ref name } if name == "bogo"),
        "expected InvalidAlgorithm for 'bogo', got {:?}",
        err
    );
}

#[test]
fn known_identifiers_round_trip_through_parsing() {
    for &algorithm in &ALL_ALGORITHMS {
        let parsed: AlgorithmKind = algorithm
            .identifier()
            .parse()
            .expect("identifier must parse back");
        assert_eq!(parsed, algorithm);
    }
}
