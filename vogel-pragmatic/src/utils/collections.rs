#[cfg(test)]
#[path = "../../tests/unit/utils/collections_test.rs"]
mod collections_test;

use rustc_hash::FxHashSet;
use std::hash::Hash;

/// Combines error results into one, keeping all errors in original order.
pub fn combine_error_results<T: Clone>(results: &[Result<(), T>]) -> Result<(), Vec<T>> {
    let errors = results.iter().cloned().flat_map(|result| result.err().into_iter()).collect::<Vec<T>>();

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

/// Returns items which occur more than once, each reported once in order of second occurrence.
pub fn get_duplicates<'a, T: Hash + Eq + 'a>(items: impl Iterator<Item = &'a T>) -> Option<Vec<&'a T>> {
    let mut seen = FxHashSet::default();
    let mut reported = FxHashSet::default();

    let duplicates = items.filter(|item| !seen.insert(*item) && reported.insert(*item)).collect::<Vec<_>>();

    if duplicates.is_empty() { None } else { Some(duplicates) }
}
