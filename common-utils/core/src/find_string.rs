// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use tracing::debug;

/// Sorts `strings` in place, then binary searches it for `target`.
///
/// **Mutates the caller's slice**: after the call it is sorted ascending by
/// byte order, whatever the outcome. Use [`find_string_in_sorted_copy`] to keep
/// the original order.
///
/// # Returns
/// * `Some(i)` - `strings[i] == target` in the sorted slice, leftmost match for duplicates
/// * `None` - target absent, including the empty slice
pub fn find_string<S: AsRef<str>>(strings: &mut [S], target: &str) -> Option<usize> {
    strings.sort_unstable_by(|a, b| a.as_ref().cmp(b.as_ref()));
    let found = search_sorted(strings, target);
    debug!(len = strings.len(), needle = target, ?found, "find_string");
    found
}

/// Index `target` would have once `strings` is sorted, without touching `strings`.
/// Agrees with [`find_string`] on the same input.
pub fn find_string_in_sorted_copy<S: AsRef<str>>(strings: &[S], target: &str) -> Option<usize> {
    let mut sorted: Vec<&str> = strings.iter().map(AsRef::as_ref).collect();
    sorted.sort_unstable();
    let found = search_sorted(&sorted, target);
    debug!(len = sorted.len(), needle = target, ?found, "find_string_in_sorted_copy");
    found
}

fn search_sorted<S: AsRef<str>>(sorted: &[S], target: &str) -> Option<usize> {
    let index = sorted.partition_point(|s| s.as_ref() < target);
    match sorted.get(index) {
        Some(candidate) if candidate.as_ref() == target => Some(index),
        _ => None,
    }
}
