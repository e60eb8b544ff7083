//! Utilities for ordered collections of arbitrary elements.

/// Returns a copy of `items` without the element at `index`.
///
/// An out of bounds index returns an unchanged copy.
#[must_use]
pub fn remove_nth<T: Clone>(items: &[T], index: usize) -> Vec<T> {
    if index >= items.len() {
        return items.to_vec();
    }

    let mut result = Vec::with_capacity(items.len() - 1);
    result.extend_from_slice(&items[..index]);
    result.extend_from_slice(&items[(index + 1)..]);
    result
}

/// All orderings of `items`, such as the words of a sentence.
///
/// Uses the same recursion and ordering as [`Runes::permutations`](crate::Runes::permutations):
/// each element in turn is placed first, followed by every ordering of the remaining ones.
#[must_use]
pub fn permute_items<T: Clone>(items: &[T]) -> Vec<Vec<T>> {
    if items.len() <= 1 {
        return vec![items.to_vec()];
    }

    let mut result = Vec::new();
    for (i, item) in items.iter().enumerate() {
        for tail in permute_items(&remove_nth(items, i)) {
            let mut perm = Vec::with_capacity(items.len());
            perm.push(item.clone());
            perm.extend(tail);
            result.push(perm);
        }
    }
    result
}
