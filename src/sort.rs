use crate::pipeline::Dataset;

/// Sorts `values` ascending with selection sort: for each position, select
/// the minimum of the unsorted suffix and swap it to the front of that
/// suffix. O(n²) comparisons; duplicates are indistinguishable so stability
/// is irrelevant.
pub fn selection_sort(values: &mut [i64]) {
    let n = values.len();
    for i in 0..n.saturating_sub(1) {
        let mut min_idx = i;
        for j in (i + 1)..n {
            if values[j] < values[min_idx] {
                min_idx = j;
            }
        }
        values.swap(i, min_idx);
    }
}

/// Sorts each record of `dataset` ascending, keeping the records themselves
/// in their original (input line) order.
pub fn sort_dataset(mut dataset: Dataset) -> Dataset {
    for record in &mut dataset {
        selection_sort(record);
    }
    dataset
}
