//! Generic collection helpers used by the card catalog and the draw flow.
//!
//! Every function takes a borrowed slice and returns freshly allocated
//! output; inputs are never reordered in place.

use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};
use std::hash::Hash;

use rand::Rng;
use rand::seq::{IndexedRandom, SliceRandom};
use thiserror::Error;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CollectionError {
    #[error("chunk size must be > 0")]
    InvalidChunkSize,
}

/// Comparator used by [`multi_sort`].
pub type Comparator<'a, T> = &'a dyn Fn(&T, &T) -> Ordering;

//
// ─── RANDOM SELECTION ──────────────────────────────────────────────────────────
//

/// Returns a uniformly shuffled copy of `items` using the thread-local RNG.
#[must_use]
pub fn shuffle<T: Clone>(items: &[T]) -> Vec<T> {
    shuffle_with(items, &mut rand::rng())
}

/// Fisher-Yates shuffle of a copy of `items`, driven by the supplied RNG.
pub fn shuffle_with<T: Clone, R: Rng + ?Sized>(items: &[T], rng: &mut R) -> Vec<T> {
    let mut shuffled = items.to_vec();
    shuffled.shuffle(rng);
    shuffled
}

/// Picks `count` distinct elements (by position) without replacement.
///
/// When `count` covers the whole input the result is a full shuffle.
#[must_use]
pub fn sample_unique<T: Clone>(items: &[T], count: usize) -> Vec<T> {
    sample_unique_with(items, count, &mut rand::rng())
}

pub fn sample_unique_with<T: Clone, R: Rng + ?Sized>(
    items: &[T],
    count: usize,
    rng: &mut R,
) -> Vec<T> {
    let mut shuffled = shuffle_with(items, rng);
    if count < shuffled.len() {
        shuffled.truncate(count);
    }
    shuffled
}

/// Uniformly random element, or `None` for an empty slice.
#[must_use]
pub fn random_element<T>(items: &[T]) -> Option<&T> {
    random_element_with(items, &mut rand::rng())
}

pub fn random_element_with<'a, T, R: Rng + ?Sized>(items: &'a [T], rng: &mut R) -> Option<&'a T> {
    items.choose(rng)
}

//
// ─── PARTITIONING / DEDUP ──────────────────────────────────────────────────────
//

/// Splits `items` into consecutive groups of `size`; the last group may be shorter.
///
/// # Errors
///
/// Returns `CollectionError::InvalidChunkSize` when `size` is zero.
pub fn chunk<T: Clone>(items: &[T], size: usize) -> Result<Vec<Vec<T>>, CollectionError> {
    if size == 0 {
        return Err(CollectionError::InvalidChunkSize);
    }
    Ok(items.chunks(size).map(<[T]>::to_vec).collect())
}

/// First occurrence of each derived key wins; relative order is preserved.
pub fn unique_by<T, K, F>(items: &[T], key: F) -> Vec<T>
where
    T: Clone,
    K: Eq + Hash,
    F: Fn(&T) -> K,
{
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    for item in items {
        if seen.insert(key(item)) {
            out.push(item.clone());
        }
    }
    out
}

/// Identity dedup, keeping first occurrences.
#[must_use]
pub fn unique<T: Clone + Eq + Hash>(items: &[T]) -> Vec<T> {
    unique_by(items, T::clone)
}

/// Groups items by key.
///
/// Keys appear in order of first occurrence and each group keeps the input
/// order of its members.
pub fn group_by<T, K, F>(items: &[T], key: F) -> Vec<(K, Vec<T>)>
where
    T: Clone,
    K: Eq + Hash + Clone,
    F: Fn(&T) -> K,
{
    let mut slots: HashMap<K, usize> = HashMap::new();
    let mut groups: Vec<(K, Vec<T>)> = Vec::new();
    for item in items {
        let k = key(item);
        match slots.get(&k) {
            Some(&idx) => groups[idx].1.push(item.clone()),
            None => {
                slots.insert(k.clone(), groups.len());
                groups.push((k, vec![item.clone()]));
            }
        }
    }
    groups
}

//
// ─── SORTING ───────────────────────────────────────────────────────────────────
//

/// Stable sort by a list of comparators in priority order.
///
/// The first comparator that does not return `Equal` decides; full ties
/// keep their input order.
#[must_use]
pub fn multi_sort<T: Clone>(items: &[T], comparators: &[Comparator<'_, T>]) -> Vec<T> {
    let mut sorted = items.to_vec();
    sorted.sort_by(|a, b| {
        comparators
            .iter()
            .map(|cmp| cmp(a, b))
            .find(|ord| *ord != Ordering::Equal)
            .unwrap_or(Ordering::Equal)
    });
    sorted
}

//
// ─── SET ALGEBRA ───────────────────────────────────────────────────────────────
//

/// Elements of `left` that also appear in `right`, in `left` order.
#[must_use]
pub fn intersection<T: Clone + Eq + Hash>(left: &[T], right: &[T]) -> Vec<T> {
    intersection_by(left, right, T::clone)
}

pub fn intersection_by<T, K, F>(left: &[T], right: &[T], key: F) -> Vec<T>
where
    T: Clone,
    K: Eq + Hash,
    F: Fn(&T) -> K,
{
    let keys: HashSet<K> = right.iter().map(&key).collect();
    left.iter()
        .filter(|item| keys.contains(&key(*item)))
        .cloned()
        .collect()
}

/// Elements of `left` that do not appear in `right`, in `left` order.
#[must_use]
pub fn difference<T: Clone + Eq + Hash>(left: &[T], right: &[T]) -> Vec<T> {
    difference_by(left, right, T::clone)
}

pub fn difference_by<T, K, F>(left: &[T], right: &[T], key: F) -> Vec<T>
where
    T: Clone,
    K: Eq + Hash,
    F: Fn(&T) -> K,
{
    let keys: HashSet<K> = right.iter().map(&key).collect();
    left.iter()
        .filter(|item| !keys.contains(&key(*item)))
        .cloned()
        .collect()
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn sorted(mut v: Vec<u32>) -> Vec<u32> {
        v.sort_unstable();
        v
    }

    #[test]
    fn shuffle_is_a_permutation_and_leaves_input_alone() {
        let input: Vec<u32> = (0..78).collect();
        let shuffled = shuffle(&input);

        assert_eq!(shuffled.len(), input.len());
        assert_eq!(sorted(shuffled), input);
        assert_eq!(input, (0..78).collect::<Vec<_>>());
    }

    #[test]
    fn shuffle_handles_empty_and_singleton() {
        let empty: Vec<u32> = Vec::new();
        assert!(shuffle(&empty).is_empty());
        assert_eq!(shuffle(&[7]), vec![7]);
    }

    #[test]
    fn seeded_shuffle_is_reproducible() {
        let input: Vec<u32> = (0..20).collect();
        let a = shuffle_with(&input, &mut StdRng::seed_from_u64(9));
        let b = shuffle_with(&input, &mut StdRng::seed_from_u64(9));
        assert_eq!(a, b);
    }

    #[test]
    fn seeded_picks_are_reproducible() {
        let input: Vec<u32> = (0..78).collect();
        let pick = |seed| {
            let mut rng = StdRng::seed_from_u64(seed);
            (
                random_element_with(&input, &mut rng).copied(),
                sample_unique_with(&input, 5, &mut rng),
            )
        };
        let (first, sample) = pick(3);
        assert_eq!(pick(3), (first, sample.clone()));
        assert!(first.is_some_and(|x| x < 78));
        assert_eq!(unique(&sample).len(), 5);

        let empty: [u32; 0] = [];
        assert!(random_element_with(&empty, &mut StdRng::seed_from_u64(3)).is_none());
    }

    #[test]
    fn shuffle_eventually_moves_elements() {
        let input: Vec<u32> = (0..10).collect();
        let mut rng = StdRng::seed_from_u64(1);
        let moved = (0..20).any(|_| shuffle_with(&input, &mut rng) != input);
        assert!(moved);
    }

    #[test]
    fn sample_unique_returns_distinct_members() {
        let input: Vec<u32> = (0..78).collect();
        for count in [0, 1, 3, 10, 77] {
            let picked = sample_unique(&input, count);
            assert_eq!(picked.len(), count);
            assert_eq!(unique(&picked).len(), count);
            assert!(picked.iter().all(|x| input.contains(x)));
        }
    }

    #[test]
    fn sample_unique_over_length_is_full_shuffle() {
        let input = vec![1, 2, 3];
        let picked = sample_unique(&input, 10);
        assert_eq!(sorted(picked), input);
    }

    #[test]
    fn random_element_on_empty_is_none() {
        let empty: [u8; 0] = [];
        assert!(random_element(&empty).is_none());
        let items = [4, 5, 6];
        let pick = random_element(&items).copied().unwrap();
        assert!(items.contains(&pick));
    }

    #[test]
    fn chunk_splits_with_short_tail() {
        let out = chunk(&[1, 2, 3, 4, 5], 2).unwrap();
        assert_eq!(out, vec![vec![1, 2], vec![3, 4], vec![5]]);
    }

    #[test]
    fn chunk_rejects_zero_size() {
        assert_eq!(chunk(&[1, 2], 0), Err(CollectionError::InvalidChunkSize));
    }

    #[test]
    fn unique_by_keeps_first_occurrence() {
        let items = [("a", 1), ("b", 2), ("a", 3), ("c", 4)];
        let out = unique_by(&items, |(k, _)| *k);
        assert_eq!(out, vec![("a", 1), ("b", 2), ("c", 4)]);
    }

    #[test]
    fn group_by_preserves_key_and_member_order() {
        let items = [3, 1, 4, 1, 5, 9, 2, 6];
        let groups = group_by(&items, |n| n % 2 == 0);
        assert_eq!(
            groups,
            vec![(false, vec![3, 1, 1, 5, 9]), (true, vec![4, 2, 6])]
        );
    }

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        k: u32,
        name: &'static str,
        i: u32,
    }

    #[test]
    fn multi_sort_is_stable() {
        let rows = vec![
            Row { k: 1, name: "x", i: 0 },
            Row { k: 1, name: "x", i: 1 },
            Row { k: 2, name: "x", i: 2 },
        ];
        let by_k = |a: &Row, b: &Row| a.k.cmp(&b.k);
        let out = multi_sort(&rows, &[&by_k]);
        assert_eq!(out.iter().map(|r| r.i).collect::<Vec<_>>(), vec![0, 1, 2]);
    }

    #[test]
    fn multi_sort_falls_through_to_next_comparator() {
        let rows = vec![
            Row { k: 2, name: "b", i: 0 },
            Row { k: 1, name: "z", i: 1 },
            Row { k: 2, name: "a", i: 2 },
            Row { k: 1, name: "a", i: 3 },
        ];
        let by_k = |a: &Row, b: &Row| a.k.cmp(&b.k);
        let by_name = |a: &Row, b: &Row| a.name.cmp(b.name);
        let out = multi_sort(&rows, &[&by_k, &by_name]);
        assert_eq!(out.iter().map(|r| r.i).collect::<Vec<_>>(), vec![3, 1, 2, 0]);
    }

    #[test]
    fn set_algebra_follows_left_order() {
        let left = [5, 1, 4, 2];
        let right = [2, 5, 9];
        assert_eq!(intersection(&left, &right), vec![5, 2]);
        assert_eq!(difference(&left, &right), vec![1, 4]);
    }

    #[test]
    fn set_algebra_by_key() {
        let left = [("el loco", 0), ("el mago", 1)];
        let right = [("EL MAGO", 99)];
        let key = |(name, _): &(&str, i32)| name.to_lowercase();
        assert_eq!(intersection_by(&left, &right, key), vec![("el mago", 1)]);
        assert_eq!(difference_by(&left, &right, key), vec![("el loco", 0)]);
    }
}
