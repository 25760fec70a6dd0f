use std::cmp::Ordering;

/// Index of `key` in the sorted `space`, narrowing a half-open window in a loop
pub fn binary_search_with_loop<T: Ord>(key: &T, space: &[T]) -> Option<usize> {
    let (mut left, mut right) = (0, space.len());
    while left < right {
        let mid = left + (right - left) / 2;
        match space[mid].cmp(key) {
            Ordering::Equal => return Some(mid),
            Ordering::Less => left = mid + 1,
            Ordering::Greater => right = mid,
        }
    }
    None
}

/// Recursive search of `key` within `space[left..right]`
///
/// Returns `None` for an empty or inverted window, and clamps `right` to the
/// length of `space`.
pub fn search<T: Ord>(key: &T, space: &[T], left: usize, right: usize) -> Option<usize> {
    let right = right.min(space.len());
    if left >= right {
        return None;
    }

    let mid = left + (right - left) / 2;
    match space[mid].cmp(key) {
        Ordering::Equal => Some(mid),
        Ordering::Less => search(key, space, mid + 1, right),
        Ordering::Greater => search(key, space, left, mid),
    }
}
