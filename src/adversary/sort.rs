//! Comparator-driven sorting
//!
//! The sort takes its ordering as an explicit strategy value instead of
//! relying on a type's built-in comparison, so word families can be ordered
//! adversarially while numbers and strings keep their natural order.

use super::WordFamily;
use std::cmp::Ordering;

/// An ordering strategy over `T`, defined by a strict "less than"
pub trait Comparator<T: ?Sized> {
    /// Whether `a` sorts strictly before `b`
    fn less_than(&self, a: &T, b: &T) -> bool;

    /// Three-way comparison derived from [`less_than`](Self::less_than)
    fn compare(&self, a: &T, b: &T) -> Ordering {
        if self.less_than(a, b) {
            Ordering::Less
        } else if self.less_than(b, a) {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }
}

/// The element type's own `<`
///
/// Works with anything `PartialOrd`, floats included. Values that are not
/// equal to themselves (NaN) sort after everything else and keep their
/// relative position among each other.
#[derive(Debug, Clone, Copy, Default)]
pub struct NaturalOrder;

impl<T: PartialOrd + ?Sized> Comparator<T> for NaturalOrder {
    fn less_than(&self, a: &T, b: &T) -> bool {
        self.compare(a, b) == Ordering::Less
    }

    #[allow(clippy::eq_op)]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.partial_cmp(b).unwrap_or_else(|| (a != a).cmp(&(b != b)))
    }
}

/// Worst-for-the-guesser first, see [`WordFamily::adversarial_cmp`]
#[derive(Debug, Clone, Copy, Default)]
pub struct AdversarialOrder;

impl Comparator<WordFamily> for AdversarialOrder {
    fn less_than(&self, a: &WordFamily, b: &WordFamily) -> bool {
        a.less_than(b)
    }

    fn compare(&self, a: &WordFamily, b: &WordFamily) -> Ordering {
        a.adversarial_cmp(b)
    }
}

/// Return a sorted copy of `items`
///
/// Stable: elements the comparator considers equal keep their input order.
/// The input slice is left untouched.
///
/// # Examples
/// ```
/// use evil_wordle::adversary::{NaturalOrder, sort};
///
/// assert_eq!(sort(&[4, 2, 5, 1, 3], &NaturalOrder), vec![1, 2, 3, 4, 5]);
/// ```
#[must_use]
pub fn sort<T, C>(items: &[T], comparator: &C) -> Vec<T>
where
    T: Clone,
    C: Comparator<T> + ?Sized,
{
    let mut sorted = items.to_vec();
    sorted.sort_by(|a, b| comparator.compare(a, b));
    sorted
}

/// [`sort`] with [`NaturalOrder`]
#[must_use]
pub fn sort_natural<T: PartialOrd + Clone>(items: &[T]) -> Vec<T> {
    sort(items, &NaturalOrder)
}
