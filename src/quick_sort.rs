use crate::{merge::merge_runs, stack::grow};
use alloc::vec::Vec;
use ndarray::{Array1, ArrayView1};
use rand::Rng;

/// Consecutive draws of split index 0 for one sequence before giving up on the split source.
const MAX_REDRAWS: usize = 1000;

/// Adapts `rng` into a split-index source drawing uniformly from `0..len`.
///
/// Pass a seeded generator (e.g., [`SmallRng`](rand::rngs::SmallRng)) for reproducible sorts.
pub fn random_split<R: Rng>(mut rng: R) -> impl FnMut(usize) -> usize {
	move |len| rng.random_range(0..len)
}

/// Returns a sorted copy of `v` by splitting it at random positions and merging the sorted parts.
///
/// Despite the name, elements are never partitioned around a pivot value. Each sequence is split
/// by position at `split(len)` into `v[..p]` and `v[p..]`, both parts are sorted recursively and
/// merged like in merge sort. This is *O*(*n* \* log(*n*)) expected and *O*(*n*^2) worst-case.
///
/// `split(len)` must return an index in `0..len`. A zero index is redrawn as it would split off an
/// empty part only, but at most `MAX_REDRAWS` times in a row for the same sequence.
///
/// Stops at and returns the first error of `is_less`. The view itself is never modified.
pub fn quick_sort<T, F, S, E>(
	v: ArrayView1<'_, T>,
	mut is_less: F,
	mut split: S,
) -> Result<Array1<T>, E>
where
	T: Clone,
	F: FnMut(&T, &T) -> Result<bool, E>,
	S: FnMut(usize) -> usize,
{
	log::debug!("quick sort of {} elements", v.len());
	recurse(v.to_vec(), &mut is_less, &mut split).map(Array1::from_vec)
}

/// Sorts `v` by sorting both parts of a random positional split and merging them.
fn recurse<T, F, S, E>(mut v: Vec<T>, is_less: &mut F, split: &mut S) -> Result<Vec<T>, E>
where
	F: FnMut(&T, &T) -> Result<bool, E>,
	S: FnMut(usize) -> usize,
{
	let len = v.len();
	if len <= 1 {
		return Ok(v);
	}

	let mut redraws = 0;
	let mid = loop {
		let mid = split(len);
		assert!(mid < len, "split index {mid} out of bounds for length {len}");
		if mid > 0 {
			break mid;
		}
		redraws += 1;
		assert!(
			redraws < MAX_REDRAWS,
			"split index 0 drawn {redraws} times in a row for length {len}"
		);
		log::trace!("redrawing split index 0 of {len} elements");
	};
	log::trace!("splitting {len} elements at {mid}");

	// The left part must not keep the capacity of `v` alive while the right part is sorted.
	let right = v.split_off(mid);
	v.shrink_to_fit();
	let left = grow(|| recurse(v, is_less, split))?;
	let right = grow(|| recurse(right, is_less, split))?;
	merge_runs(left, right, is_less)
}

/// Returns a sorted copy of `v` using quicksort partitioning around pivot values.
///
/// The pivot is the element at `split(len)`. All other elements are partitioned into those less
/// than the pivot and the rest, keeping their relative order, both partitions are sorted
/// recursively and concatenated around the pivot. This is *O*(*n* \* log(*n*)) expected and
/// *O*(*n*^2) worst-case.
///
/// `split(len)` must return an index in `0..len`.
pub fn pivot_sort<T, F, S, E>(
	v: ArrayView1<'_, T>,
	mut is_less: F,
	mut split: S,
) -> Result<Array1<T>, E>
where
	T: Clone,
	F: FnMut(&T, &T) -> Result<bool, E>,
	S: FnMut(usize) -> usize,
{
	log::debug!("pivot sort of {} elements", v.len());
	pivot_recurse(v.to_vec(), &mut is_less, &mut split).map(Array1::from_vec)
}

fn pivot_recurse<T, F, S, E>(mut v: Vec<T>, is_less: &mut F, split: &mut S) -> Result<Vec<T>, E>
where
	F: FnMut(&T, &T) -> Result<bool, E>,
	S: FnMut(usize) -> usize,
{
	let len = v.len();
	if len <= 1 {
		return Ok(v);
	}

	let pivot = split(len);
	assert!(pivot < len, "pivot index {pivot} out of bounds for length {len}");
	let pivot = v.remove(pivot);

	let mut less = Vec::new();
	let mut rest = Vec::new();
	for x in v {
		if is_less(&x, &pivot)? {
			less.push(x);
		} else {
			rest.push(x);
		}
	}
	log::trace!("partitioned {len} elements into {} and {}", less.len(), rest.len());

	let mut sorted = grow(|| pivot_recurse(less, is_less, split))?;
	sorted.push(pivot);
	sorted.extend(grow(|| pivot_recurse(rest, is_less, split))?);
	Ok(sorted)
}
