//! Element-wise transforms, folds, chunking, and trimming.

/// Splits `slice` into consecutive chunks of `size` elements.
///
/// The last chunk holds the remainder and may be shorter. An empty slice or
/// a `size` of zero yields no chunks.
///
/// # Examples
///
/// ```rust
/// use scalpel::slice::chunk;
///
/// assert_eq!(chunk(&[1, 2, 3, 4, 5], 2), vec![vec![1, 2], vec![3, 4], vec![5]]);
/// assert_eq!(chunk(&[1, 2, 3], 5), vec![vec![1, 2, 3]]);
/// assert!(chunk(&[1, 2, 3], 0).is_empty());
/// ```
pub fn chunk<T>(slice: &[T], size: usize) -> Vec<Vec<T>>
where
    T: Clone,
{
    if size == 0 {
        return Vec::new();
    }
    slice.chunks(size).map(<[T]>::to_vec).collect()
}

/// Applies `function` to every element, producing a vector of the same length.
///
/// # Examples
///
/// ```rust
/// use scalpel::slice::map;
///
/// let labels = map(&[10, 20], |index, value| format!("{index}:{value}"));
/// assert_eq!(labels, vec!["0:10", "1:20"]);
/// ```
pub fn map<T, U, F>(slice: &[T], mut function: F) -> Vec<U>
where
    F: FnMut(usize, &T) -> U,
{
    slice
        .iter()
        .enumerate()
        .map(|(index, value)| function(index, value))
        .collect()
}

/// Left-folds `slice`, seeding the accumulator with its first element.
///
/// - An empty slice returns `zero`.
/// - A single-element slice returns a clone of that element; `function` is
///   not called.
/// - Otherwise `function(0, slice[0], &slice[1])` produces the first
///   accumulator, and each later element `i` is folded in with
///   `function(i, accumulator, &slice[i])`.
///
/// # Examples
///
/// ```rust
/// use scalpel::slice::reduce;
///
/// let sum = reduce(&[1, 2, 3, 4], |_, accumulator, value| accumulator + value, 0);
/// assert_eq!(sum, 10);
/// assert_eq!(reduce(&[] as &[i32], |_, a, b| a + b, -1), -1);
/// assert_eq!(reduce(&[7], |_, a, b| a + b, -1), 7);
/// ```
pub fn reduce<T, F>(slice: &[T], mut function: F, zero: T) -> T
where
    T: Clone,
    F: FnMut(usize, T, &T) -> T,
{
    match slice {
        [] => zero,
        [only] => only.clone(),
        [first, second, rest @ ..] => {
            let seed = function(0, first.clone(), second);
            rest.iter()
                .enumerate()
                .fold(seed, |accumulator, (offset, value)| {
                    function(offset + 2, accumulator, value)
                })
        }
    }
}

/// Drops `count` elements from the front (positive) or back (negative).
///
/// Returns a copy when `count` is zero, and an empty vector when
/// `|count|` is at least the length of `slice`.
///
/// # Examples
///
/// ```rust
/// use scalpel::slice::drop_n;
///
/// assert_eq!(drop_n(&[1, 2, 3, 4], 1), vec![2, 3, 4]);
/// assert_eq!(drop_n(&[1, 2, 3, 4], -1), vec![1, 2, 3]);
/// assert!(drop_n(&[1, 2, 3, 4], 10).is_empty());
/// ```
pub fn drop_n<T>(slice: &[T], count: isize) -> Vec<T>
where
    T: Clone,
{
    let magnitude = count.unsigned_abs();
    if count == 0 {
        slice.to_vec()
    } else if magnitude >= slice.len() {
        Vec::new()
    } else if count > 0 {
        slice[magnitude..].to_vec()
    } else {
        slice[..slice.len() - magnitude].to_vec()
    }
}
