use crate::{merge::merge_runs, stack::grow};
use alloc::vec::Vec;
use ndarray::{Array1, ArrayView1};

/// Returns a sorted copy of `v` using top-down merge sort, which is *O*(*n* \* log(*n*)).
///
/// Stops at and returns the first error of `is_less`. The view itself is never modified.
pub fn merge_sort<T, F, E>(v: ArrayView1<'_, T>, mut is_less: F) -> Result<Array1<T>, E>
where
	T: Clone,
	F: FnMut(&T, &T) -> Result<bool, E>,
{
	log::debug!("merge sort of {} elements", v.len());
	recurse(v.to_vec(), &mut is_less).map(Array1::from_vec)
}

/// Sorts `v` by sorting both halves split at `len / 2` and merging them.
fn recurse<T, F, E>(mut v: Vec<T>, is_less: &mut F) -> Result<Vec<T>, E>
where
	F: FnMut(&T, &T) -> Result<bool, E>,
{
	if v.len() <= 1 {
		return Ok(v);
	}

	let right = v.split_off(v.len() / 2);
	let left = grow(|| recurse(v, is_less))?;
	let right = grow(|| recurse(right, is_less))?;
	merge_runs(left, right, is_less)
}
