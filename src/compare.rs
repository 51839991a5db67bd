//! Comparator functions usable with every `*_by` method of [`Sorted1Ext`](crate::Sorted1Ext).
//!
//! A comparator returns [`Less`] if `a` sorts before `b`, [`Greater`] if it sorts after `b`, and
//! [`Equal`] otherwise.

use core::cmp::Ordering::{self, Equal, Greater, Less};

/// Ascending order.
///
/// Returns [`Less`] if `a < b`, [`Greater`] if `b < a`, and [`Equal`] otherwise. Incomparable
/// values (e.g., `NaN`) hence compare [`Equal`] to everything.
///
/// ```
/// use core::cmp::Ordering::{Equal, Greater, Less};
/// use ndarray_sorted::compare::standard;
///
/// assert_eq!(standard(&1, &2), Less);
/// assert_eq!(standard(&2, &1), Greater);
/// assert_eq!(standard(&f64::NAN, &1.0), Equal);
/// ```
#[inline]
pub fn standard<T: PartialOrd>(a: &T, b: &T) -> Ordering {
	if a < b {
		Less
	} else if b < a {
		Greater
	} else {
		Equal
	}
}

/// Descending order, the inverse of [`standard`].
#[inline]
pub fn reverse<T: PartialOrd>(a: &T, b: &T) -> Ordering {
	if a < b {
		Greater
	} else if b < a {
		Less
	} else {
		Equal
	}
}

/// Ascending order of the last decimal digit only.
///
/// Delegates to [`standard`] on `a mod 10` and `b mod 10`. This is not a total order as distinct
/// values share their last digit. Their relative order is decided by the merge tie-break, which
/// emits the element of the right-hand run first.
///
/// ```
/// use core::cmp::Ordering::{Equal, Less};
/// use ndarray_sorted::compare::last_digit;
///
/// assert_eq!(last_digit(&21, &13), Less);
/// assert_eq!(last_digit(&7, &-3), Equal);
/// ```
#[inline]
pub fn last_digit<T: LastDigit>(a: &T, b: &T) -> Ordering {
	standard(&a.last_digit(), &b.last_digit())
}

/// Value modulo 10 as used by [`last_digit`].
///
/// The modulo is floored, so negative values map into `0..10` as well (e.g., `-3` maps to `7`).
pub trait LastDigit {
	/// Type of the digit.
	type Digit: PartialOrd;

	/// Returns `self mod 10`.
	fn last_digit(&self) -> Self::Digit;
}

macro_rules! impl_last_digit {
	($ten:literal => $($ty:ty)*) => {
		$(
			impl LastDigit for $ty {
				type Digit = $ty;

				#[inline]
				fn last_digit(&self) -> $ty {
					self.rem_euclid($ten)
				}
			}
		)*
	};
}

impl_last_digit!(10 => u8 u16 u32 u64 u128 usize i8 i16 i32 i64 i128 isize);

// `f32::rem_euclid` needs `std`.
#[cfg(feature = "std")]
impl_last_digit!(10.0 => f32 f64);

impl<T: LastDigit + ?Sized> LastDigit for &T {
	type Digit = T::Digit;

	#[inline]
	fn last_digit(&self) -> T::Digit {
		(**self).last_digit()
	}
}

#[cfg(feature = "std")]
#[cfg(test)]
mod test {
	use super::{last_digit, reverse, standard, LastDigit};
	use core::cmp::Ordering::{Equal, Greater, Less};
	use quickcheck_macros::quickcheck;

	#[test]
	fn ordering() {
		assert_eq!(standard(&3, &5), Less);
		assert_eq!(standard(&5, &3), Greater);
		assert_eq!(standard(&4, &4), Equal);
		assert_eq!(reverse(&3, &5), Greater);
		assert_eq!(reverse(&5, &3), Less);
		assert_eq!(reverse(&4, &4), Equal);
	}

	#[test]
	fn digits() {
		assert_eq!(123u32.last_digit(), 3);
		assert_eq!((-3i32).last_digit(), 7);
		assert_eq!((-10i64).last_digit(), 0);
		assert_eq!(13.5f64.last_digit(), 3.5);
		assert_eq!(last_digit(&19, &21), Greater);
		assert_eq!(last_digit(&19, &9), Equal);
		assert_eq!(last_digit(&-1, &9), Equal);
	}

	#[quickcheck]
	fn reversed(a: i32, b: i32) {
		assert_eq!(reverse(&a, &b), standard(&a, &b).reverse());
		assert_eq!(standard(&a, &b), a.cmp(&b));
	}

	#[quickcheck]
	fn last_digit_of(a: i64, b: i64) {
		assert_eq!(
			last_digit(&a, &b),
			a.rem_euclid(10).cmp(&b.rem_euclid(10))
		);
	}
}
