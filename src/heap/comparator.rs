use std::cmp::Ordering;

/// A three-way comparison between two elements of a [`PriorityQueue`](super::PriorityQueue).
///
/// `Ordering::Less` means that `lhs` has to be extracted before `rhs`, while `Ordering::Equal` is
/// also used by the queue as the equality test of [`remove`](super::PriorityQueue::remove) and
/// [`contains`](super::PriorityQueue::contains).
pub trait Comparator<T> {
    fn compare(&self, lhs: &T, rhs: &T) -> Ordering;
}

impl<T, F> Comparator<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    #[inline(always)]
    fn compare(&self, lhs: &T, rhs: &T) -> Ordering {
        self(lhs, rhs)
    }
}

/// Orders the elements by their [`Ord`] implementation.
#[derive(Clone, Copy, Debug, Default)]
pub struct NaturalOrder;

impl<T: Ord> Comparator<T> for NaturalOrder {
    #[inline(always)]
    fn compare(&self, lhs: &T, rhs: &T) -> Ordering {
        lhs.cmp(rhs)
    }
}

/// Reverses the ordering of the wrapped comparator, turning a minimum queue into a maximum one.
#[derive(Clone, Copy, Debug, Default)]
pub struct Reversed<C>(pub C);

impl<T, C: Comparator<T>> Comparator<T> for Reversed<C> {
    #[inline(always)]
    fn compare(&self, lhs: &T, rhs: &T) -> Ordering {
        self.0.compare(rhs, lhs)
    }
}
