//! Merge sort and positional-split quicksort producing sorted copies of 1-dimensional arrays or
//! (sub)views into *n*-dimensional arrays with arbitrary memory layout (e.g., non-contiguous).
//!
//! # Example
//!
//! ```
//! use ndarray_sorted::{compare, ndarray::{arr1, arr2}, Sorted1Ext};
//!
//! // 2-dimensional array of 4 rows and 5 columns.
//! let v = arr2(&[[-5, 4, 1, -3,  2],   // row 0, axis 0
//!                [ 8, 3, 2,  4,  8],   // row 1, axis 0
//!                [38, 9, 3,  0,  3],   // row 2, axis 0
//!                [ 4, 9, 0,  8, -1]]); // row 3, axis 0
//! //                \     \       \
//! //              column 0 \    column 4         axis 1
//! //                     column 2                axis 1
//!
//! // Subview into the last column.
//! let column = v.column(4);
//!
//! // Due to row-major memory layout, columns are non-contiguous.
//! assert_eq!(column.as_slice(), None);
//!
//! // Sorting returns a new array and leaves the view untouched.
//! assert_eq!(column.merge_sorted(), arr1(&[-1, 2, 3, 8]));
//! assert_eq!(column.merge_sorted_by(compare::reverse), arr1(&[8, 3, 2, -1]));
//! assert_eq!(column, arr1(&[2, 8, 3, -1]));
//! ```
//!
//! # Current Implementation
//!
//! Complexities where *n* is the length of the (sub)view.
//!
//! | Resource | Complexity | Merge Sort       | Quick Sort (positional) | Quick Sort (pivot) | Merge       |
//! |----------|------------|------------------|-------------------------|--------------------|-------------|
//! | Time     | Best       | *O*(*n* log *n*) | *O*(*n* log *n*)        | *O*(*n* log *n*)   | *O*(*n*)    |
//! | Time     | Average    | *O*(*n* log *n*) | *O*(*n* log *n*)        | *O*(*n* log *n*)   | *O*(*n*)    |
//! | Time     | Worst      | *O*(*n* log *n*) | *O*(*n*^2)              | *O*(*n*^2)         | *O*(*n*)    |
//! | Space    | Worst      | *O*(*n*)         | *O*(*n*)                | *O*(*n*)           | *O*(*n*)    |
//! | Depth    | Worst      | *O*(log *n*)     | *O*(*n*)                | *O*(*n*)           | *O*(1)      |
//!
//! Both merge sort and positional quicksort emit the element of the right-hand run first when
//! merging elements comparing equal, so neither is stable.
//!
//! # Features
//!
//!   * `std` for [`quick_sorted`](Sorted1Ext::quick_sorted),
//!     [`quick_sorted_by`](Sorted1Ext::quick_sorted_by), and
//!     [`pivot_sorted_by`](Sorted1Ext::pivot_sorted_by) drawing split indices from the
//!     thread-local random number generator. Enabled by `default`.
//!   * `stacker` for growing the stack on demand instead of overflowing it on deep recursion.
//!     Enabled by `default`.
//!
//! Without `std`, the crate is `no_std` but requires `alloc`.

#![deny(
	missing_docs,
	rustdoc::broken_intra_doc_links,
	rustdoc::missing_crate_level_docs
)]
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

extern crate alloc;

pub mod compare;

mod merge;
mod merge_sort;
mod quick_sort;
mod stack;

use crate::{
	merge::merge,
	merge_sort::merge_sort,
	quick_sort::{pivot_sort, quick_sort},
};
use core::{
	cmp::Ordering::{self, Greater, Less},
	convert::Infallible,
};
use ndarray::{Array1, ArrayBase, Data, Ix1};

pub use crate::quick_sort::random_split;
pub use ndarray;

/// Extension trait for 1-dimensional [`ArrayBase<S, Ix1>`](`ArrayBase`) array or (sub)view with
/// arbitrary memory layout (e.g., non-contiguous) providing [sorting] methods returning sorted
/// copies, and methods checking and merging sorted sequences.
///
/// Methods without a comparator sort in ascending order as defined by [`compare::standard`].
///
/// [sorting]: https://en.wikipedia.org/wiki/Sorting_algorithm
pub trait Sorted1Ext<A, S>
where
	S: Data<Elem = A>,
{
	/// Returns a sorted copy of the array.
	///
	/// This sort is *O*(*n* log *n*) worst-case and emits the later element first when merging
	/// equal elements.
	///
	/// # Current Implementation
	///
	/// The current algorithm is a top-down merge sort. It splits the array at its midpoint,
	/// sorts both halves recursively, and merges them in linear time. It allocates a copy of the
	/// array per recursion level.
	///
	/// # Examples
	///
	/// ```
	/// use ndarray_sorted::{ndarray::arr1, Sorted1Ext};
	///
	/// let v = arr1(&[5, 3, 8, 1, 9, 2]);
	///
	/// assert_eq!(v.merge_sorted(), arr1(&[1, 2, 3, 5, 8, 9]));
	/// ```
	#[must_use]
	fn merge_sorted(&self) -> Array1<A>
	where
		A: PartialOrd + Clone;
	/// Returns a sorted copy of the array with a comparator function.
	///
	/// This sort is *O*(*n* log *n*) worst-case.
	///
	/// The comparator function should define a total ordering for the elements in the array. If
	/// the ordering is not total, the order of the elements is unspecified but the result is
	/// still a permutation of the array. Elements comparing [`Equal`](Ordering::Equal) are
	/// ordered by the merge tie-break, which emits the element of the right-hand half first.
	///
	/// # Examples
	///
	/// ```
	/// use ndarray_sorted::{compare, ndarray::arr1, Sorted1Ext};
	///
	/// let v = arr1(&[5, 4, 1, 3, 2]);
	/// assert_eq!(v.merge_sorted_by(|a, b| a.cmp(b)), arr1(&[1, 2, 3, 4, 5]));
	///
	/// // reverse sorting
	/// assert_eq!(v.merge_sorted_by(compare::reverse), arr1(&[5, 4, 3, 2, 1]));
	///
	/// // sorting by last digit, later elements first among equal digits
	/// let v = arr1(&[13, 2, 23, 41]);
	/// assert_eq!(v.merge_sorted_by(compare::last_digit), arr1(&[41, 2, 23, 13]));
	/// ```
	#[must_use]
	fn merge_sorted_by<F>(&self, compare: F) -> Array1<A>
	where
		A: Clone,
		F: FnMut(&A, &A) -> Ordering;
	/// Returns a sorted copy of the array with a key extraction function.
	///
	/// This sort is *O*(*mn* log *n*) worst-case, where the key function is *O*(*m*).
	///
	/// # Examples
	///
	/// ```
	/// use ndarray_sorted::{ndarray::arr1, Sorted1Ext};
	///
	/// let v = arr1(&[-5i32, 4, 1, -3, 2]);
	///
	/// assert_eq!(v.merge_sorted_by_key(|k| k.abs()), arr1(&[1, 2, -3, 4, -5]));
	/// ```
	#[must_use]
	fn merge_sorted_by_key<K, F>(&self, f: F) -> Array1<A>
	where
		A: Clone,
		K: PartialOrd,
		F: FnMut(&A) -> K;
	/// Returns a sorted copy of the array with a fallible comparator function.
	///
	/// Like [`merge_sorted_by`](Sorted1Ext::merge_sorted_by) but stops at and returns the first
	/// error of `compare`.
	///
	/// # Examples
	///
	/// ```
	/// use ndarray_sorted::{ndarray::arr1, Sorted1Ext};
	///
	/// let v = arr1(&[2.0, f64::NAN, 1.0]);
	/// let sorted = v.try_merge_sorted_by(|a, b| a.partial_cmp(b).ok_or("NaN"));
	/// assert_eq!(sorted, Err("NaN"));
	///
	/// let v = arr1(&[2.0, 3.0, 1.0]);
	/// let sorted = v.try_merge_sorted_by(|a, b| a.partial_cmp(b).ok_or("NaN"));
	/// assert_eq!(sorted, Ok(arr1(&[1.0, 2.0, 3.0])));
	/// ```
	fn try_merge_sorted_by<F, E>(&self, compare: F) -> Result<Array1<A>, E>
	where
		A: Clone,
		F: FnMut(&A, &A) -> Result<Ordering, E>;

	/// Returns a sorted copy of the array by splitting it at random positions.
	///
	/// This sort is *O*(*n* log *n*) expected and *O*(*n*^2) worst-case.
	///
	/// # Current Implementation
	///
	/// The current algorithm draws a random index `p` from the thread-local random number
	/// generator, splits the array by position into `[..p]` and `[p..]`, sorts both parts
	/// recursively, and merges them like [`merge_sorted`](Sorted1Ext::merge_sorted) does.
	/// Elements are never partitioned around a pivot value; see
	/// [`pivot_sorted_by`](Sorted1Ext::pivot_sorted_by) for that.
	///
	/// # Examples
	///
	/// ```
	/// use ndarray_sorted::{ndarray::arr1, Sorted1Ext};
	///
	/// let v = arr1(&[5, 3, 8, 1, 9, 2]);
	///
	/// assert_eq!(v.quick_sorted(), arr1(&[1, 2, 3, 5, 8, 9]));
	/// ```
	#[cfg(feature = "std")]
	#[must_use]
	fn quick_sorted(&self) -> Array1<A>
	where
		A: PartialOrd + Clone;
	/// Returns a sorted copy of the array by splitting it at random positions with a comparator
	/// function.
	///
	/// See [`quick_sorted`](Sorted1Ext::quick_sorted) and
	/// [`merge_sorted_by`](Sorted1Ext::merge_sorted_by). As split positions are random, the order
	/// of elements comparing [`Equal`](Ordering::Equal) differs between calls.
	#[cfg(feature = "std")]
	#[must_use]
	fn quick_sorted_by<F>(&self, compare: F) -> Array1<A>
	where
		A: Clone,
		F: FnMut(&A, &A) -> Ordering;
	/// Returns a sorted copy of the array by splitting it at positions drawn from `split`.
	///
	/// `split(len)` is called for each sequence of `len >= 2` elements and must return an index
	/// in `0..len`. Index `0` is redrawn as it would split off an empty part only.
	///
	/// # Panics
	///
	/// Panics if `split(len)` returns an index `>= len`, or index `0` a thousand times in a row
	/// for the same sequence.
	///
	/// # Examples
	///
	/// ```
	/// use ndarray_sorted::{
	///     compare, ndarray::arr1, random_split, Sorted1Ext,
	/// };
	/// use rand::{rngs::SmallRng, SeedableRng};
	///
	/// let v = arr1(&[5, 3, 8, 1, 9, 2]);
	///
	/// // reproducible split positions
	/// let rng = SmallRng::seed_from_u64(42);
	/// let sorted = v.quick_sorted_with(compare::standard, random_split(rng));
	/// assert_eq!(sorted, arr1(&[1, 2, 3, 5, 8, 9]));
	///
	/// // midpoint split positions as in merge sort
	/// let sorted = v.quick_sorted_with(compare::reverse, |len| len / 2);
	/// assert_eq!(sorted, v.merge_sorted_by(compare::reverse));
	/// ```
	#[must_use]
	fn quick_sorted_with<F, P>(&self, compare: F, split: P) -> Array1<A>
	where
		A: Clone,
		F: FnMut(&A, &A) -> Ordering,
		P: FnMut(usize) -> usize;
	/// Returns a sorted copy of the array by splitting it at positions drawn from `split` with a
	/// fallible comparator function.
	///
	/// Like [`quick_sorted_with`](Sorted1Ext::quick_sorted_with) but stops at and returns the
	/// first error of `compare`.
	///
	/// # Panics
	///
	/// Panics if `split(len)` returns an index `>= len`.
	fn try_quick_sorted_with<F, P, E>(&self, compare: F, split: P) -> Result<Array1<A>, E>
	where
		A: Clone,
		F: FnMut(&A, &A) -> Result<Ordering, E>,
		P: FnMut(usize) -> usize;

	/// Returns a sorted copy of the array using quicksort partitioning around random pivots with
	/// a comparator function.
	///
	/// This sort is *O*(*n* log *n*) expected and *O*(*n*^2) worst-case.
	///
	/// # Current Implementation
	///
	/// The current algorithm picks a random pivot element, partitions the other elements into
	/// those less than the pivot and the rest, sorts both partitions recursively, and concatenates
	/// them around the pivot.
	///
	/// # Examples
	///
	/// ```
	/// use ndarray_sorted::{compare, ndarray::arr1, Sorted1Ext};
	///
	/// let v = arr1(&[5, 3, 8, 1, 9, 2]);
	///
	/// assert_eq!(v.pivot_sorted_by(compare::reverse), arr1(&[9, 8, 5, 3, 2, 1]));
	/// ```
	#[cfg(feature = "std")]
	#[must_use]
	fn pivot_sorted_by<F>(&self, compare: F) -> Array1<A>
	where
		A: Clone,
		F: FnMut(&A, &A) -> Ordering;
	/// Returns a sorted copy of the array using quicksort partitioning around the pivots at
	/// indices drawn from `split` with a comparator function.
	///
	/// `split(len)` is called for each sequence of `len >= 2` elements and must return an index
	/// in `0..len`.
	///
	/// # Panics
	///
	/// Panics if `split(len)` returns an index `>= len`.
	#[must_use]
	fn pivot_sorted_with<F, P>(&self, compare: F, split: P) -> Array1<A>
	where
		A: Clone,
		F: FnMut(&A, &A) -> Ordering,
		P: FnMut(usize) -> usize;

	/// Merges the sorted array and the sorted `other` array into a new sorted array.
	///
	/// This is *O*(*n*) where *n* is the total length. If either array is empty, a copy of the
	/// other one is returned as is.
	///
	/// # Examples
	///
	/// ```
	/// use ndarray_sorted::{ndarray::arr1, Sorted1Ext};
	///
	/// let merged = arr1(&[1, 3, 5]).merged(&arr1(&[2, 4, 6]));
	///
	/// assert_eq!(merged, arr1(&[1, 2, 3, 4, 5, 6]));
	/// ```
	#[must_use]
	fn merged<S2>(&self, other: &ArrayBase<S2, Ix1>) -> Array1<A>
	where
		A: PartialOrd + Clone,
		S2: Data<Elem = A>;
	/// Merges the array and `other`, both sorted with respect to a comparator function, into a
	/// new sorted array.
	///
	/// Whenever the next elements of both arrays compare [`Equal`](Ordering::Equal), the element
	/// of `other` is emitted first.
	///
	/// # Examples
	///
	/// ```
	/// use ndarray_sorted::{compare, ndarray::arr1, Sorted1Ext};
	///
	/// let merged = arr1(&[11, 32]).merged_by(&arr1(&[21, 3]), compare::last_digit);
	///
	/// assert_eq!(merged, arr1(&[21, 11, 32, 3]));
	/// ```
	#[must_use]
	fn merged_by<S2, F>(&self, other: &ArrayBase<S2, Ix1>, compare: F) -> Array1<A>
	where
		A: Clone,
		S2: Data<Elem = A>,
		F: FnMut(&A, &A) -> Ordering;
	/// Merges the array and `other`, both sorted with respect to a fallible comparator function,
	/// into a new sorted array.
	///
	/// Like [`merged_by`](Sorted1Ext::merged_by) but stops at and returns the first error of
	/// `compare`.
	fn try_merged_by<S2, F, E>(&self, other: &ArrayBase<S2, Ix1>, compare: F) -> Result<Array1<A>, E>
	where
		A: Clone,
		S2: Data<Elem = A>,
		F: FnMut(&A, &A) -> Result<Ordering, E>;

	/// Checks if the elements of this array are sorted.
	///
	/// That is, for each element `a` and its following element `b`, `a <= b` must hold. If the
	/// array yields exactly zero or one element, `true` is returned.
	///
	/// # Examples
	///
	/// ```
	/// use ndarray_sorted::{ndarray::arr1, Sorted1Ext};
	///
	/// assert!(arr1(&[1, 2, 2, 9]).is_sorted());
	/// assert!(!arr1(&[1, 3, 2, 4]).is_sorted());
	/// ```
	#[must_use]
	fn is_sorted(&self) -> bool
	where
		A: PartialOrd;
	/// Checks if the elements of this array are sorted using the given comparator function.
	///
	/// That is, `compare(a, b)` must not return [`Greater`](Ordering::Greater) for any element
	/// `a` and its following element `b`.
	#[must_use]
	fn is_sorted_by<F>(&self, compare: F) -> bool
	where
		F: FnMut(&A, &A) -> Ordering;
	/// Checks if the elements of this array are sorted using the given key extraction function.
	#[must_use]
	fn is_sorted_by_key<K, F>(&self, f: F) -> bool
	where
		K: PartialOrd,
		F: FnMut(&A) -> K;
}

impl<A, S> Sorted1Ext<A, S> for ArrayBase<S, Ix1>
where
	S: Data<Elem = A>,
{
	#[inline]
	fn merge_sorted(&self) -> Array1<A>
	where
		A: PartialOrd + Clone,
	{
		self.merge_sorted_by(compare::standard)
	}
	#[inline]
	fn merge_sorted_by<F>(&self, mut compare: F) -> Array1<A>
	where
		A: Clone,
		F: FnMut(&A, &A) -> Ordering,
	{
		infallible(merge_sort(self.view(), |a: &A, b: &A| {
			Ok(compare(a, b) == Less)
		}))
	}
	#[inline]
	fn merge_sorted_by_key<K, F>(&self, mut f: F) -> Array1<A>
	where
		A: Clone,
		K: PartialOrd,
		F: FnMut(&A) -> K,
	{
		self.merge_sorted_by(|a, b| compare::standard(&f(a), &f(b)))
	}
	#[inline]
	fn try_merge_sorted_by<F, E>(&self, mut compare: F) -> Result<Array1<A>, E>
	where
		A: Clone,
		F: FnMut(&A, &A) -> Result<Ordering, E>,
	{
		merge_sort(self.view(), |a: &A, b: &A| Ok(compare(a, b)? == Less))
	}

	#[cfg(feature = "std")]
	#[inline]
	fn quick_sorted(&self) -> Array1<A>
	where
		A: PartialOrd + Clone,
	{
		self.quick_sorted_by(compare::standard)
	}
	#[cfg(feature = "std")]
	#[inline]
	fn quick_sorted_by<F>(&self, compare: F) -> Array1<A>
	where
		A: Clone,
		F: FnMut(&A, &A) -> Ordering,
	{
		self.quick_sorted_with(compare, random_split(rand::rng()))
	}
	#[inline]
	fn quick_sorted_with<F, P>(&self, mut compare: F, split: P) -> Array1<A>
	where
		A: Clone,
		F: FnMut(&A, &A) -> Ordering,
		P: FnMut(usize) -> usize,
	{
		infallible(quick_sort(
			self.view(),
			|a: &A, b: &A| Ok(compare(a, b) == Less),
			split,
		))
	}
	#[inline]
	fn try_quick_sorted_with<F, P, E>(&self, mut compare: F, split: P) -> Result<Array1<A>, E>
	where
		A: Clone,
		F: FnMut(&A, &A) -> Result<Ordering, E>,
		P: FnMut(usize) -> usize,
	{
		quick_sort(
			self.view(),
			|a: &A, b: &A| Ok(compare(a, b)? == Less),
			split,
		)
	}

	#[cfg(feature = "std")]
	#[inline]
	fn pivot_sorted_by<F>(&self, compare: F) -> Array1<A>
	where
		A: Clone,
		F: FnMut(&A, &A) -> Ordering,
	{
		self.pivot_sorted_with(compare, random_split(rand::rng()))
	}
	#[inline]
	fn pivot_sorted_with<F, P>(&self, mut compare: F, split: P) -> Array1<A>
	where
		A: Clone,
		F: FnMut(&A, &A) -> Ordering,
		P: FnMut(usize) -> usize,
	{
		infallible(pivot_sort(
			self.view(),
			|a: &A, b: &A| Ok(compare(a, b) == Less),
			split,
		))
	}

	#[inline]
	fn merged<S2>(&self, other: &ArrayBase<S2, Ix1>) -> Array1<A>
	where
		A: PartialOrd + Clone,
		S2: Data<Elem = A>,
	{
		self.merged_by(other, compare::standard)
	}
	#[inline]
	fn merged_by<S2, F>(&self, other: &ArrayBase<S2, Ix1>, mut compare: F) -> Array1<A>
	where
		A: Clone,
		S2: Data<Elem = A>,
		F: FnMut(&A, &A) -> Ordering,
	{
		infallible(merge(self.view(), other.view(), |a: &A, b: &A| {
			Ok(compare(a, b) == Less)
		}))
	}
	#[inline]
	fn try_merged_by<S2, F, E>(
		&self,
		other: &ArrayBase<S2, Ix1>,
		mut compare: F,
	) -> Result<Array1<A>, E>
	where
		A: Clone,
		S2: Data<Elem = A>,
		F: FnMut(&A, &A) -> Result<Ordering, E>,
	{
		merge(self.view(), other.view(), |a: &A, b: &A| {
			Ok(compare(a, b)? == Less)
		})
	}

	#[inline]
	fn is_sorted(&self) -> bool
	where
		A: PartialOrd,
	{
		self.is_sorted_by(compare::standard)
	}
	#[inline]
	fn is_sorted_by<F>(&self, mut compare: F) -> bool
	where
		F: FnMut(&A, &A) -> Ordering,
	{
		self.iter()
			.zip(self.iter().skip(1))
			.all(|(a, b)| compare(a, b) != Greater)
	}
	#[inline]
	fn is_sorted_by_key<K, F>(&self, mut f: F) -> bool
	where
		K: PartialOrd,
		F: FnMut(&A) -> K,
	{
		self.is_sorted_by(|a, b| compare::standard(&f(a), &f(b)))
	}
}

/// Unwraps the result of a sort whose comparator cannot fail.
#[inline]
fn infallible<T>(result: Result<T, Infallible>) -> T {
	let Ok(value) = result;
	value
}

#[cfg(feature = "std")]
#[cfg(test)]
mod test {
	use super::{compare, random_split, Sorted1Ext};
	use core::cmp::Ordering;
	use ndarray::{arr1, arr2, s, Array1};
	use quickcheck_macros::quickcheck;
	use rand::{rngs::SmallRng, SeedableRng};

	#[derive(Debug, Clone, Copy)]
	struct Item {
		index: usize,
		value: u32,
	}

	impl Eq for Item {}

	impl PartialEq for Item {
		fn eq(&self, other: &Self) -> bool {
			self.value == other.value
		}
	}

	impl Ord for Item {
		fn cmp(&self, other: &Self) -> Ordering {
			self.value.cmp(&other.value)
		}
	}

	impl PartialOrd for Item {
		fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
			Some(self.cmp(other))
		}
	}

	impl From<(usize, u32)> for Item {
		fn from((index, value): (usize, u32)) -> Self {
			Self { index, value }
		}
	}

	#[test]
	fn strided() {
		let v = arr2(&[[9, 4, 7], [1, 8, 3], [5, 2, 6]]);
		let diagonal = v.diag();
		assert_eq!(diagonal.merge_sorted(), arr1(&[6, 8, 9]));
		let reversed = v.slice(s![..;-1, 1]);
		assert_eq!(reversed, arr1(&[2, 8, 4]));
		assert_eq!(reversed.merge_sorted(), arr1(&[2, 4, 8]));
		assert_eq!(reversed.quick_sorted(), arr1(&[2, 4, 8]));
		assert_eq!(reversed.pivot_sorted_by(compare::standard), arr1(&[2, 4, 8]));
	}

	#[test]
	fn trivial() {
		let empty = Array1::<i32>::zeros(0);
		assert_eq!(empty.merge_sorted(), empty);
		assert_eq!(empty.quick_sorted(), empty);
		assert_eq!(empty.merged(&empty), empty);
		assert!(empty.is_sorted());
		let single = arr1(&[7]);
		assert_eq!(single.merge_sorted_by(compare::reverse), single);
		assert_eq!(single.quick_sorted_by(compare::last_digit), single);
		assert_eq!(single.merged(&empty), single);
		assert_eq!(empty.merged(&single), single);
		assert!(single.is_sorted());
	}

	#[test]
	fn merged_ties() {
		let left = arr1(&[Item::from((0, 1)), Item::from((1, 2))]);
		let right = arr1(&[Item::from((2, 1)), Item::from((3, 2))]);
		let merged = left.merged(&right);
		let indices = merged.iter().map(|item| item.index).collect::<Vec<_>>();
		assert_eq!(indices, [2, 0, 3, 1]);
	}

	#[test]
	fn fallible() {
		let v = arr1(&[3, 1, 2]);
		let sorted = v.try_quick_sorted_with(
			|a: &i32, b: &i32| Ok::<_, ()>(a.cmp(b)),
			|len| len - 1,
		);
		assert_eq!(sorted, Ok(arr1(&[1, 2, 3])));
		let sorted = v.try_quick_sorted_with(|_, _| Err(()), |len| len - 1);
		assert_eq!(sorted, Err(()));
		let merged = v.try_merged_by(&v, |_, _| Err(()));
		assert_eq!(merged, Err(()));
	}

	#[test]
	fn sorted_checks() {
		assert!(arr1(&[3, 2, 2, 1]).is_sorted_by(compare::reverse));
		assert!(!arr1(&[3, 2, 2, 1]).is_sorted());
		assert!(arr1(&[21, 11, 32, 3]).is_sorted_by(compare::last_digit));
		assert!(arr1(&[-1i32, 2, -3]).is_sorted_by_key(|x| x.abs()));
	}

	#[quickcheck]
	fn sorted(xs: Vec<u32>, seed: u64) {
		let mut expected = xs.clone();
		expected.sort();
		let expected = Array1::from_vec(expected);
		let array = Array1::from_vec(xs);
		assert_eq!(array.merge_sorted(), expected);
		assert_eq!(array.quick_sorted(), expected);
		let split = random_split(SmallRng::seed_from_u64(seed));
		assert_eq!(array.quick_sorted_with(compare::standard, split), expected);
		assert!(array.merge_sorted().is_sorted());
	}

	#[quickcheck]
	fn reversed(xs: Vec<u32>) {
		let mut xs = xs;
		xs.sort_unstable();
		xs.dedup();
		let array = Array1::from_vec(xs);
		let mut expected = array.merge_sorted().to_vec();
		expected.reverse();
		assert_eq!(array.merge_sorted_by(compare::reverse).to_vec(), expected);
		assert_eq!(array.quick_sorted_by(compare::reverse).to_vec(), expected);
		assert!(array.merge_sorted_by(compare::reverse).is_sorted_by(compare::reverse));
	}

	#[quickcheck]
	fn all_equal_reversed(xs: Vec<u32>) {
		// Ties favor the right-hand run at every level.
		let xs = xs
			.iter()
			.enumerate()
			.map(|(index, _)| Item::from((index, 0)))
			.collect::<Vec<Item>>();
		let array = Array1::from_vec(xs);
		let sorted = array.merge_sorted();
		for (position, item) in sorted.iter().enumerate() {
			assert_eq!(item.index, sorted.len() - 1 - position);
		}
	}

	#[quickcheck]
	fn merged(xs: Vec<u32>, ys: Vec<u32>) {
		let xs = Array1::from_vec(xs).merge_sorted();
		let ys = Array1::from_vec(ys).merge_sorted();
		let merged = xs.merged(&ys);
		assert!(merged.is_sorted());
		assert_eq!(merged.len(), xs.len() + ys.len());
		let mut expected = xs.iter().chain(&ys).copied().collect::<Vec<_>>();
		expected.sort_unstable();
		assert_eq!(merged.to_vec(), expected);
	}
}
