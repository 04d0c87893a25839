//! Search filtering and ordering of path suggestions.

use crate::expand::{expand_paths, ExpandContext, PathOption};
use crate::schema::EntitySchema;

/// Keeps the options whose value contains the search term.
///
/// Case-sensitive plain containment, not fuzzy matching. An empty term
/// keeps everything.
pub fn search_options(options: Vec<PathOption>, term: &str) -> Vec<PathOption> {
    if term.is_empty() {
        return options;
    }
    options
        .into_iter()
        .filter(|option| option.value.contains(term))
        .collect()
}

/// Sorts options by label; duplicates keep their relative order.
pub fn sort_options(options: &mut [PathOption]) {
    options.sort_by(|a, b| a.label.cmp(&b.label));
}

/// Produces the suggestions visible for a committed path and a live search
/// term: expand, filter, sort.
///
/// The typed path drives navigation, the term only filters. They differ
/// while the user edits text that has not resolved to a path yet; an
/// unresolvable remainder therefore narrows the list instead of raising an
/// error.
pub fn visible_results(
    schema: &EntitySchema,
    root: &str,
    typed: &str,
    term: &str,
    ctx: &ExpandContext,
) -> Vec<PathOption> {
    let mut options = search_options(expand_paths(schema, root, typed, ctx), term);
    sort_options(&mut options);
    options
}
