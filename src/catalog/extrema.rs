//! Order-aware extrema
//!
//! `Iterator::max_by` keeps the last of several equal maxima; these folds
//! keep the first one encountered, for both max and min.

use std::cmp::Ordering;

/// First element whose value no later element exceeds
pub fn first_max_by<T, I, F>(items: I, mut compare: F) -> Option<T>
where
    I: IntoIterator<Item = T>,
    F: FnMut(&T, &T) -> Ordering,
{
    items.into_iter().fold(None, |best, item| match best {
        Some(current) if compare(&item, &current) != Ordering::Greater => Some(current),
        _ => Some(item),
    })
}

/// First element that no later element undercuts
pub fn first_min_by<T, I, F>(items: I, mut compare: F) -> Option<T>
where
    I: IntoIterator<Item = T>,
    F: FnMut(&T, &T) -> Ordering,
{
    items.into_iter().fold(None, |best, item| match best {
        Some(current) if compare(&item, &current) != Ordering::Less => Some(current),
        _ => Some(item),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_max_keeps_first_tie() {
        let items = vec![(1, 5), (2, 9), (3, 9), (4, 1)];
        let max = first_max_by(items, |a, b| a.1.cmp(&b.1));
        assert_eq!(max, Some((2, 9)));
    }

    #[test]
    fn test_first_min_keeps_first_tie() {
        let items = vec![(1, 5), (2, 1), (3, 1), (4, 9)];
        let min = first_min_by(items, |a, b| a.1.cmp(&b.1));
        assert_eq!(min, Some((2, 1)));
    }

    #[test]
    fn test_empty_is_none() {
        let empty: Vec<i32> = Vec::new();
        assert_eq!(first_max_by(empty.clone(), |a, b| a.cmp(b)), None);
        assert_eq!(first_min_by(empty, |a, b| a.cmp(b)), None);
    }

    #[test]
    fn test_std_max_by_differs_on_ties() {
        let items = [(1, 7), (2, 7)];
        let std_max = items.iter().max_by(|a, b| a.1.cmp(&b.1));
        let ours = first_max_by(items.iter(), |a, b| a.1.cmp(&b.1));
        assert_eq!(std_max, Some(&(2, 7)));
        assert_eq!(ours, Some(&(1, 7)));
    }
}
