//! Arbitrarily nested sequences and deep flattening.

/// A value or a sequence of further nested values.
///
/// Rust slices have a single element type, so nesting of unknown depth is
/// modeled explicitly. Build values with [`Nested::leaf`] and
/// [`Nested::branch`], or with the [`nested!`](crate::nested) macro.
///
/// # Examples
///
/// ```rust
/// use scalpel::slice::Nested;
///
/// let tree = Nested::branch([Nested::leaf(1), Nested::branch([Nested::leaf(2)])]);
/// assert_eq!(tree.flatten(), vec![1, 2]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Nested<T> {
    /// A single value.
    Leaf(T),
    /// A sequence of nested values.
    Branch(Vec<Self>),
}

impl<T> Nested<T> {
    /// Wraps a single value.
    #[inline]
    pub const fn leaf(value: T) -> Self {
        Self::Leaf(value)
    }

    /// Wraps a sequence of nested values.
    #[inline]
    pub fn branch<I>(children: I) -> Self
    where
        I: IntoIterator<Item = Self>,
    {
        Self::Branch(children.into_iter().collect())
    }

    /// Consumes the value and returns its leaves, depth-first, left to right.
    pub fn flatten(self) -> Vec<T> {
        let mut result = Vec::new();
        let mut stack = vec![vec![self].into_iter()];
        while let Some(top) = stack.last_mut() {
            match top.next() {
                Some(Self::Leaf(value)) => result.push(value),
                Some(Self::Branch(children)) => stack.push(children.into_iter()),
                None => {
                    stack.pop();
                }
            }
        }
        result
    }
}

impl<T> From<Vec<Nested<T>>> for Nested<T> {
    fn from(children: Vec<Nested<T>>) -> Self {
        Self::Branch(children)
    }
}

/// Flattens nested sequences into a single vector.
///
/// Leaves are emitted depth-first, left to right. Nesting depth is limited
/// only by memory; traversal does not recurse on the call stack.
///
/// # Examples
///
/// ```rust
/// use scalpel::nested;
/// use scalpel::slice::flatten_deep;
///
/// let values = nested![1, [2, [3, [4]]], 5];
/// assert_eq!(flatten_deep(&values), vec![1, 2, 3, 4, 5]);
/// ```
pub fn flatten_deep<T>(slice: &[Nested<T>]) -> Vec<T>
where
    T: Clone,
{
    let mut result = Vec::new();
    let mut stack = vec![slice.iter()];
    while let Some(top) = stack.last_mut() {
        match top.next() {
            Some(Nested::Leaf(value)) => result.push(value.clone()),
            Some(Nested::Branch(children)) => stack.push(children.iter()),
            None => {
                stack.pop();
            }
        }
    }
    result
}

/// Builds a `Vec<Nested<T>>` from bracketed literals.
///
/// Each item must be a single token tree: a literal, an identifier, a
/// parenthesized expression, or a bracketed list of further items.
///
/// # Examples
///
/// ```rust
/// use scalpel::nested;
/// use scalpel::slice::Nested;
///
/// let values = nested![1, [2, 3]];
/// assert_eq!(
///     values,
///     vec![
///         Nested::Leaf(1),
///         Nested::Branch(vec![Nested::Leaf(2), Nested::Leaf(3)]),
///     ]
/// );
/// ```
#[macro_export]
macro_rules! nested {
    (@node [$($item:tt),* $(,)?]) => {
        $crate::slice::Nested::Branch(::std::vec![$($crate::nested!(@node $item)),*])
    };
    (@node $leaf:tt) => {
        $crate::slice::Nested::Leaf($leaf)
    };
    ($($item:tt),* $(,)?) => {
        ::std::vec![$($crate::nested!(@node $item)),*]
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_flatten_deep_empty_branches() {
        let values: Vec<Nested<i32>> = nested![[], [[]], 1, [[], 2]];
        assert_eq!(flatten_deep(&values), vec![1, 2]);
    }

    #[rstest]
    fn test_flatten_deep_nested_chain() {
        let mut value = Nested::leaf(0);
        for _ in 0..1_000 {
            value = Nested::branch([value]);
        }
        assert_eq!(flatten_deep(std::slice::from_ref(&value)), vec![0]);
        assert_eq!(value.flatten(), vec![0]);
    }

    #[rstest]
    fn test_nested_from_vec() {
        let branch: Nested<&str> = vec![Nested::leaf("a"), Nested::leaf("b")].into();
        assert_eq!(branch.flatten(), vec!["a", "b"]);
    }
}
