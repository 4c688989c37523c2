//! Option filtering for the search key.
//!
//! An empty query resets to the full list. A custom matcher, when present,
//! owns the result entirely; otherwise options are kept when their label
//! contains the query, ignoring case.

use crate::error::{BoxError, MenuError, MenuResult};

/// Custom search function: `(query, all_options) -> filtered_options`
pub type Matcher<T> = Box<dyn Fn(&str, &[T]) -> Result<Vec<T>, BoxError>>;

/// Case-insensitive substring test
pub fn matches(query: &str, label: &str) -> bool {
    label.to_lowercase().contains(&query.to_lowercase())
}

/// Default filter: keep options whose label contains `query`, in original order
pub fn substring_filter<T: Clone>(query: &str, all: &[T], label: impl Fn(&T) -> String) -> Vec<T> {
    all.iter()
        .filter(|option| matches(query, &label(option)))
        .cloned()
        .collect()
}

/// Filter `all` for `query`, delegating to `matcher` when one is configured.
///
/// Always returns a fresh list; `all` is never handed out by reference.
pub fn filter<T: Clone>(
    query: &str,
    all: &[T],
    matcher: Option<&Matcher<T>>,
    label: impl Fn(&T) -> String,
) -> MenuResult<Vec<T>> {
    if query.is_empty() {
        return Ok(all.to_vec());
    }

    match matcher {
        Some(matcher) => matcher(query, all).map_err(|source| MenuError::Search {
            query: query.to_string(),
            source,
        }),
        None => Ok(substring_filter(query, all, label)),
    }
}
