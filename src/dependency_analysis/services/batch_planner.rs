use crate::dependency_analysis::domain::{BatchLimit, Dependency};
use std::ops::Range;

/// BatchPlanner - Partitions import paths into metadata queries
///
/// Partitions are contiguous, keep input order, and their summed path length
/// stays within the limit. A path longer than the limit on its own gets a
/// partition to itself. Greedy packing gives the minimum partition count for
/// contiguous splits.
pub struct BatchPlanner;

impl BatchPlanner {
    /// Plans batches over dependencies, measured by import path length
    pub fn plan(dependencies: &[Dependency], limit: BatchLimit) -> Vec<Range<usize>> {
        Self::plan_lengths(
            dependencies.iter().map(|d| d.import_path().len()),
            limit,
        )
    }

    /// Plans batches over raw item lengths
    pub fn plan_lengths<I>(lengths: I, limit: BatchLimit) -> Vec<Range<usize>>
    where
        I: IntoIterator<Item = usize>,
    {
        let max_chars = limit.max_chars();
        let mut batches = Vec::new();
        let mut start = 0;
        let mut count = 0;
        let mut end = 0;

        for (index, length) in lengths.into_iter().enumerate() {
            if index > start && count + length > max_chars {
                batches.push(start..index);
                start = index;
                count = 0;
            }
            count += length;
            end = index + 1;
        }

        if end > start {
            batches.push(start..end);
        }

        batches
    }
}
