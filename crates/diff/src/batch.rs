use anyhow::Result;
use rayon::prelude::*;

use crate::config::DiffConfig;
use crate::pane_diff::PaneDiff;

/// Diff independent text pairs in parallel.
///
/// Results come back in the order of `pairs`; a guard failure on one pair
/// does not affect the others.
pub fn diff_batch<S>(pairs: &[(S, S)], config: &DiffConfig) -> Vec<Result<PaneDiff>>
where
    S: AsRef<str> + Sync,
{
    pairs
        .par_iter()
        .map(|(left, right)| config.diff(left.as_ref(), right.as_ref()))
        .collect()
}
