use crate::error::{FmaxError, Result};

/// Return the element with the highest score.
///
/// Absent entries are skipped, including before the seed: the running
/// maximum starts at the first present element, so the scoring function is
/// only ever called on present items. Ties keep the earliest maximum
/// (strictly-greater comparison). Fails with `EmptyCollection` when the
/// sequence holds no present element.
pub fn max_by_score<T, I, F>(items: I, mut score: F) -> Result<T>
where
    I: IntoIterator<Item = Option<T>>,
    F: FnMut(&T) -> f64,
{
    let mut iter = items.into_iter();

    let mut best = loop {
        match iter.next() {
            Some(Some(item)) => break item,
            Some(None) => continue,
            None => return Err(FmaxError::EmptyCollection),
        }
    };
    let mut best_score = score(&best);

    for item in iter.flatten() {
        let value = score(&item);
        if value > best_score {
            best_score = value;
            best = item;
        }
    }

    Ok(best)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_max_of_plain_sequence() {
        let items = [3.0f64, 5.0, 2.0];
        let max = max_by_score(items.iter().map(Some), |v| **v).unwrap();
        assert_eq!(*max, 5.0);
    }

    #[test]
    fn test_ties_keep_earliest() {
        let items = [("a", 3.0), ("b", 5.0), ("c", 5.0), ("d", 1.0)];
        let max = max_by_score(items.iter().map(Some), |(_, v)| *v).unwrap();
        assert_eq!(max.0, "b");
    }

    #[test]
    fn test_absent_entries_are_skipped() {
        let items = [Some(("a", 2.0)), None, Some(("b", 9.0))];
        let max = max_by_score(items, |(_, v)| *v).unwrap();
        assert_eq!(max.0, "b");
    }

    #[test]
    fn test_absent_seed_is_skipped() {
        let items = [None, None, Some(("a", 1.0)), Some(("b", 0.5))];
        let max = max_by_score(items, |(_, v)| *v).unwrap();
        assert_eq!(max.0, "a");
    }

    #[test]
    fn test_empty_sequence_fails() {
        let items: Vec<Option<u64>> = Vec::new();
        let result = max_by_score(items, |v| *v as f64);
        assert!(matches!(result, Err(FmaxError::EmptyCollection)));
    }

    #[test]
    fn test_all_absent_fails() {
        let items: Vec<Option<u64>> = vec![None, None];
        let result = max_by_score(items, |v| *v as f64);
        assert!(matches!(result, Err(FmaxError::EmptyCollection)));
    }

    #[test]
    fn test_deterministic_on_repeated_calls() {
        let items = [("a", 4.0), ("b", 7.0), ("c", 7.0)];
        let first = max_by_score(items.iter().map(Some), |(_, v)| *v).unwrap();
        let second = max_by_score(items.iter().map(Some), |(_, v)| *v).unwrap();
        assert_eq!(first.0, second.0);
        assert_eq!(first.0, "b");
    }
}
