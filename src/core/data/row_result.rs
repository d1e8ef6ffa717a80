/// Output of one agent for one row.
///
/// `values[x]` is `Some(n)` when pixel `x` escaped after `n` iterations and
/// `None` when it never escaped, i.e. the point is inside the set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowResult {
    pub row: u32,
    pub generation: u64,
    pub values: Vec<Option<u32>>,
}
