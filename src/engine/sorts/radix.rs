// Digit-based sort: stable base-10 counting passes, least significant first

use crate::engine::errors::EngineError;
use crate::trace::StepHistory;

/// Radix sort with full step instrumentation.
///
/// Iterates over decimal digit positions until the place value exceeds the
/// maximum element. Each pass tallies digit counts (one selection snapshot
/// per element), scatters right-to-left into a digit-ordered output for
/// stability (one selection snapshot per element), copies the output back
/// (one array-update snapshot per position), and closes with a
/// pass-boundary snapshot. The prefix-sum step is not snapshotted.
///
/// Digit extraction assumes non-negative values; negative input fails with
/// [`EngineError::InvalidInput`] before any snapshot is produced.
pub fn sort(input: &[i64]) -> Result<StepHistory, EngineError> {
    if let Some(&value) = input.iter().find(|&&value| value < 0) {
        return Err(EngineError::InvalidInput {
            reason: format!(
                "digit-based sorting requires non-negative values, got {}",
                value
            ),
        });
    }

    let mut history = StepHistory::starting_from(input);
    let mut array = input.to_vec();
    let n = array.len();
    if n == 0 {
        return Ok(history);
    }

    let max = *array.iter().max().expect("n > 0");

    let mut exp: i64 = 1;
    while max / exp > 0 {
        let mut output = vec![0i64; n];
        let mut count = [0usize; 10];

        for i in 0..n {
            let digit = ((array[i] / exp) % 10) as usize;
            count[digit] += 1;

            let mut tally_step = history.clone_latest();
            tally_step.selected_indices = vec![i];
            tally_step.pivot_indices.clear();
            history.push(tally_step);
        }

        for digit in 1..10 {
            count[digit] += count[digit - 1];
        }

        // Right-to-left keeps equal digits in input order
        for i in (0..n).rev() {
            let digit = ((array[i] / exp) % 10) as usize;
            count[digit] -= 1;
            output[count[digit]] = array[i];

            let mut scatter_step = history.clone_latest();
            scatter_step.selected_indices = vec![i];
            history.push(scatter_step);
        }

        for i in 0..n {
            array[i] = output[i];

            let mut copy_step = history.clone_latest();
            copy_step.array = array.clone();
            copy_step.selected_indices = vec![i];
            history.push(copy_step);
        }

        let mut pass_step = history.clone_latest();
        pass_step.comparing_indices.clear();
        pass_step.selected_indices.clear();
        history.push(pass_step);

        // Saturation drives max / exp to 0 and ends the loop
        exp = exp.saturating_mul(10);
    }

    history.finish(n);
    Ok(history)
}
