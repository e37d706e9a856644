//! Generic sequence operations
//!
//! Hand-written counterparts of `Iterator::map`, `Iterator::filter` and
//! `Iterator::fold`. Each takes a borrowed slice and returns freshly built
//! output, leaving the input untouched. The caller's closure is invoked once
//! per element, front to back.

pub mod keyed;

#[cfg(test)]
mod tests;

/// Apply `f` to every element, producing a new vector of the same length.
///
/// The `i`-th output is `f(&items[i])`.
///
/// ```
/// use genops_core::transform;
///
/// let labels = transform(&[1, 2, 3], |n| format!("#{n}"));
/// assert_eq!(labels, vec!["#1", "#2", "#3"]);
/// ```
pub fn transform<T, O, F>(items: &[T], mut f: F) -> Vec<O>
where
    F: FnMut(&T) -> O,
{
    let mut output = Vec::with_capacity(items.len());
    for item in items {
        output.push(f(item));
    }
    output
}

/// Keep the elements for which `predicate` returns `true`, in their original
/// relative order.
///
/// ```
/// use genops_core::filter;
///
/// assert_eq!(filter(&[1, 2, 3, 4, 5], |n| *n > 3), vec![4, 5]);
/// ```
pub fn filter<T, P>(items: &[T], mut predicate: P) -> Vec<T>
where
    T: Clone,
    P: FnMut(&T) -> bool,
{
    let mut output = Vec::new();
    for item in items {
        if predicate(item) {
            output.push(item.clone());
        }
    }
    output
}

/// Combine every element into a single value, left to right, starting from
/// `initial`.
///
/// An empty slice yields `initial` unchanged.
///
/// ```
/// use genops_core::fold;
///
/// assert_eq!(fold(&[1, 2, 3, 4, 5], 0, |acc, n| acc + n), 15);
/// assert_eq!(fold(&[] as &[i32], 7, |acc, n| acc + n), 7);
/// ```
pub fn fold<T, A, F>(items: &[T], initial: A, mut combine: F) -> A
where
    F: FnMut(A, &T) -> A,
{
    let mut accumulator = initial;
    for item in items {
        accumulator = combine(accumulator, item);
    }
    accumulator
}

/// Extension methods exposing [`transform`], [`filter`] and [`fold`] on any
/// slice, and therefore on `Vec<T>` and arrays.
///
/// Every method returns an owned result, so calls chain:
///
/// ```
/// use genops_core::SequenceExt;
///
/// let labels = [1, 2, 3, 4, 5]
///     .transform(|n| n * 3)
///     .filter(|n| *n > 10)
///     .transform(ToString::to_string);
///
/// assert_eq!(labels, vec!["12", "15"]);
/// ```
pub trait SequenceExt<T> {
    /// See [`transform`].
    fn transform<O, F>(&self, f: F) -> Vec<O>
    where
        F: FnMut(&T) -> O;

    /// See [`filter`].
    fn filter<P>(&self, predicate: P) -> Vec<T>
    where
        T: Clone,
        P: FnMut(&T) -> bool;

    /// See [`fold`].
    fn fold<A, F>(&self, initial: A, combine: F) -> A
    where
        F: FnMut(A, &T) -> A;
}

impl<T> SequenceExt<T> for [T] {
    fn transform<O, F>(&self, f: F) -> Vec<O>
    where
        F: FnMut(&T) -> O,
    {
        transform(self, f)
    }

    fn filter<P>(&self, predicate: P) -> Vec<T>
    where
        T: Clone,
        P: FnMut(&T) -> bool,
    {
        filter(self, predicate)
    }

    fn fold<A, F>(&self, initial: A, combine: F) -> A
    where
        F: FnMut(A, &T) -> A,
    {
        fold(self, initial, combine)
    }
}
