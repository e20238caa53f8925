//! Reordering: reversal and random permutation.

#[cfg(feature = "random")]
use rand::Rng;
#[cfg(feature = "random")]
use rand::seq::SliceRandom;

/// Reverses `slice` in place.
///
/// # Examples
///
/// ```rust
/// use scalpel::slice::reverse_slice;
///
/// let mut values = vec![1, 2, 3];
/// reverse_slice(&mut values);
/// assert_eq!(values, vec![3, 2, 1]);
/// ```
#[inline]
pub fn reverse_slice<T>(slice: &mut [T]) {
    slice.reverse();
}

/// Returns a uniformly random permutation of `slice`, using the thread-local
/// random number generator.
///
/// # Examples
///
/// ```rust
/// use scalpel::slice::shuffle;
///
/// let mut shuffled = shuffle(&[1, 2, 3, 4]);
/// shuffled.sort_unstable();
/// assert_eq!(shuffled, vec![1, 2, 3, 4]);
/// ```
#[cfg(feature = "random")]
pub fn shuffle<T>(slice: &[T]) -> Vec<T>
where
    T: Clone,
{
    shuffle_with(slice, &mut rand::rng())
}

/// Returns a uniformly random permutation of `slice`, drawing from `rng`.
///
/// # Examples
///
/// ```rust
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use scalpel::slice::shuffle_with;
///
/// let first = shuffle_with(&[1, 2, 3, 4, 5], &mut StdRng::seed_from_u64(7));
/// let second = shuffle_with(&[1, 2, 3, 4, 5], &mut StdRng::seed_from_u64(7));
/// assert_eq!(first, second);
/// ```
#[cfg(feature = "random")]
pub fn shuffle_with<T, R>(slice: &[T], rng: &mut R) -> Vec<T>
where
    T: Clone,
    R: Rng + ?Sized,
{
    let mut result = slice.to_vec();
    result.shuffle(rng);
    result
}

/// Permutes `slice` in place, drawing from `rng`.
#[cfg(feature = "random")]
pub fn shuffle_in_place<T, R>(slice: &mut [T], rng: &mut R)
where
    R: Rng + ?Sized,
{
    slice.shuffle(rng);
}
