use crate::core::data::row_task::RowTask;

/// Computes every pixel of one row.
///
/// Implementations must be pure with respect to the task: the same task always
/// yields the same values, and nothing is shared between concurrent calls.
pub trait RowAlgorithm: Send + Sync {
    fn compute_row(&self, task: &RowTask) -> Vec<Option<u32>>;
}
