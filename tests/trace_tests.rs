// Tests for the snapshot model, operation counter, catalog, and the
// serialized trace shape

use sortty::engine::catalog::{AlgorithmInfo, UNKNOWN_ALGORITHM};
use sortty::engine::{run_sort, AlgorithmKind, ALL_ALGORITHMS};
use sortty::trace::{count_operations, Snapshot, StepHistory};

#[test]
fn clone_latest_yields_an_independent_snapshot() {
    let history = StepHistory::starting_from(&[3, 1, 2]);

    let mut step = history.clone_latest();
    step.array[0] = 99;
    step.comparing_indices.push(0);
    step.sorted_indices.push(2);

    let original = history.get(0).expect("initial snapshot");
    assert_eq!(original.array, vec![3, 1, 2]);
    assert!(original.comparing_indices.is_empty());
    assert!(original.sorted_indices.is_empty());
}

#[test]
fn snapshots_do_not_alias_the_working_array() {
    // The engine mutates its working array in place; every recorded
    // snapshot must keep the state it saw at append time
    let result = run_sort(&[2, 1], AlgorithmKind::Bubble).expect("bubble cannot fail");

    let before_swap = result.history.get(1).expect("comparison step");
    assert_eq!(before_swap.array, vec![2, 1]);

    let after_swap = result.history.get(2).expect("swap step");
    assert_eq!(after_swap.array, vec![1, 2]);
}

#[test]
fn finish_marks_everything_and_clears_highlights() {
    let mut history = StepHistory::starting_from(&[4, 5]);
    let mut step = history.clone_latest();
    step.comparing_indices = vec![0, 1];
    step.pivot_indices = vec![1];
    history.push(step);

    history.finish(2);

    let last = history.get(history.len() - 1).unwrap();
    assert_eq!(last.sorted_indices, vec![0, 1]);
    assert!(last.comparing_indices.is_empty());
    assert!(last.selected_indices.is_empty());
    assert!(last.pivot_indices.is_empty());
}

#[test]
fn count_operations_scans_snapshot_flags() {
    let mut history = StepHistory::starting_from(&[2, 1, 3]);

    // A comparison step
    let mut step = history.clone_latest();
    step.comparing_indices = vec![0, 1];
    history.push(step);

    // A swap step (two selected positions); comparing carries over
    let mut step = history.clone_latest();
    step.selected_indices = vec![0, 1];
    history.push(step);

    // A single-index placement: not a swap
    let mut step = history.clone_latest();
    step.comparing_indices.clear();
    step.selected_indices = vec![2];
    history.push(step);

    let counts = count_operations(&history);
    assert_eq!(counts.comparisons, 2);
    assert_eq!(counts.swaps, 1);
}

#[test]
fn count_operations_on_a_bare_history_is_zero() {
    let history = StepHistory::starting_from(&[1]);
    let counts = count_operations(&history);
    assert_eq!(counts.comparisons, 0);
    assert_eq!(counts.swaps, 0);
}

// === METADATA CATALOG ===

#[test]
fn every_kind_has_a_real_catalog_entry() {
    for &algorithm in &ALL_ALGORITHMS {
        let info = AlgorithmInfo::for_kind(algorithm);
        assert_ne!(info.name, UNKNOWN_ALGORITHM.name);
        assert!(!info.description.is_empty());
    }
}

#[test]
fn catalog_lookup_by_identifier() {
    assert_eq!(AlgorithmInfo::lookup("quick").name, "Quick Sort");
    assert_eq!(AlgorithmInfo::lookup("merge").name, "Merge Sort");
    assert!(AlgorithmInfo::lookup("bubble").is_stable);
    assert!(!AlgorithmInfo::lookup("selection").is_stable);
}

#[test]
fn catalog_lookup_falls_back_to_the_unknown_sentinel() {
    let info = AlgorithmInfo::lookup("bogo");
    assert_eq!(info.name, "Unknown Algorithm");
    assert_eq!(info.time_complexity.best, "Unknown");
    assert!(!info.is_stable);
}

// === SERIALIZED SHAPE ===

#[test]
fn snapshot_serializes_with_camel_case_field_names() {
    let snapshot = Snapshot::initial(vec![3, 1, 2]);
    let value = serde_json::to_value(&snapshot).expect("serialization failed");
    let object = value.as_object().expect("snapshot serializes as an object");

    let mut keys: Vec<&str> = object.keys().map(String::as_str).collect();
    keys.sort_unstable();
    assert_eq!(
        keys,
        vec![
            "array",
            "comparingIndices",
            "pivotIndices",
            "selectedIndices",
            "sortedIndices",
        ]
    );
}

#[test]
fn sort_result_serializes_history_and_stats() {
    let result = run_sort(&[2, 1], AlgorithmKind::Bubble).expect("bubble cannot fail");
    let value = serde_json::to_value(&result).expect("serialization failed");

    let history = value
        .get("history")
        .and_then(|h| h.as_array())
        .expect("history is an array");
    assert_eq!(history.len(), result.history.len());
    assert!(history[0].get("comparingIndices").is_some());

    let stats = value.get("stats").expect("stats present");
    assert_eq!(stats.get("comparisons").and_then(|v| v.as_u64()), Some(1));
    assert_eq!(stats.get("swaps").and_then(|v| v.as_u64()), Some(1));
}
