// Distribution-based sort: scatter into value-range buckets, sort each,
// concatenate

use crate::trace::StepHistory;

/// Bucket sort with full step instrumentation.
///
/// A min/max scan emits one comparison snapshot per scanned element.
/// Bucket count is `min(floor(sqrt(n)), 10)`, bucket width
/// `ceil((max - min + 1) / count)`; assignments clamp to the last bucket
/// and emit one placement snapshot each. Buckets are sorted in place
/// without snapshots (only a boundary snapshot per bucket), then
/// concatenated back with one snapshot per element written.
pub fn sort(input: &[i64]) -> StepHistory {
    let mut history = StepHistory::starting_from(input);
    let mut array = input.to_vec();
    let n = array.len();
    if n == 0 {
        return history;
    }

    let mut min_value = array[0];
    let mut max_value = array[0];

    for i in 1..n {
        if array[i] < min_value {
            min_value = array[i];
        } else if array[i] > max_value {
            max_value = array[i];
        }

        let mut scan_step = history.clone_latest();
        scan_step.comparing_indices = vec![i];
        history.push(scan_step);
    }

    let bucket_count = ((n as f64).sqrt().floor() as usize).min(10);
    let range = max_value - min_value + 1;
    let width = (range + bucket_count as i64 - 1) / bucket_count as i64;
    let mut buckets: Vec<Vec<i64>> = vec![Vec::new(); bucket_count];

    for i in 0..n {
        let slot = (((array[i] - min_value) / width) as usize).min(bucket_count - 1);
        buckets[slot].push(array[i]);

        let mut place_step = history.clone_latest();
        place_step.selected_indices = vec![i];
        place_step.pivot_indices.clear();
        history.push(place_step);
    }

    let mut index = 0;
    for bucket in &mut buckets {
        // The inner sort is deliberately untraced; per-bucket churn would
        // clutter the playback
        insertion_sort_in_place(bucket);

        let boundary_step = history.clone_latest();
        history.push(boundary_step);

        for &value in bucket.iter() {
            array[index] = value;

            let mut concat_step = history.clone_latest();
            concat_step.array = array.clone();
            concat_step.selected_indices = vec![index];
            history.push(concat_step);

            index += 1;
        }
    }

    history.finish(n);
    history
}

fn insertion_sort_in_place(bucket: &mut [i64]) {
    for i in 1..bucket.len() {
        let mut j = i;
        while j > 0 && bucket[j] < bucket[j - 1] {
            bucket.swap(j, j - 1);
            j -= 1;
        }
    }
}
