use std::cmp::Ordering;

/// A total order over keys of type `K`.
///
/// The set never looks at `PartialEq`/`Eq` of its keys: two keys are the same
/// key exactly when [`Comparator::compare`] returns [`Ordering::Equal`].
///
/// Any closure `Fn(&K, &K) -> Ordering` is a comparator:
///
/// ```rust
/// use rbset::RbSet;
///
/// let mut set: RbSet<i32, _> = RbSet::with_comparator(|a: &i32, b: &i32| b.cmp(a));
/// set.extend([1, 3, 2]);
/// assert_eq!(set.iter().copied().collect::<Vec<_>>(), vec![3, 2, 1]);
/// ```
pub trait Comparator<K: ?Sized> {
    fn compare(&self, a: &K, b: &K) -> Ordering;
}

/// The natural order of `K` as given by its [`Ord`] implementation.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Natural;

impl<K: Ord + ?Sized> Comparator<K> for Natural {
    #[inline]
    fn compare(&self, a: &K, b: &K) -> Ordering {
        a.cmp(b)
    }
}

impl<K: ?Sized, F> Comparator<K> for F
where
    F: Fn(&K, &K) -> Ordering,
{
    #[inline]
    fn compare(&self, a: &K, b: &K) -> Ordering {
        self(a, b)
    }
}
