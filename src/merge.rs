use alloc::vec::Vec;
use ndarray::{Array1, ArrayView1};

/// Merges the non-decreasing runs `left` and `right` into one non-decreasing run.
///
/// The lesser head is moved out first. If `is_less` is `false` both ways, the head of `right`
/// wins the tie. As soon as either run is consumed, the rest of the other is appended as is.
/// Either run being empty returns the other one without comparing anything.
///
/// Stops at and returns the first error of `is_less`.
pub fn merge_runs<T, F, E>(left: Vec<T>, right: Vec<T>, is_less: &mut F) -> Result<Vec<T>, E>
where
	F: FnMut(&T, &T) -> Result<bool, E>,
{
	if left.is_empty() {
		return Ok(right);
	}
	if right.is_empty() {
		return Ok(left);
	}

	let mut merged = Vec::with_capacity(left.len() + right.len());
	let mut left = left.into_iter().peekable();
	let mut right = right.into_iter().peekable();

	while let (Some(l), Some(r)) = (left.peek(), right.peek()) {
		let next = if is_less(l, r)? {
			left.next()
		} else {
			right.next()
		};
		merged.extend(next);
	}
	merged.extend(left);
	merged.extend(right);

	Ok(merged)
}

/// Merges the non-decreasing (sub)views `left` and `right` into a new array.
///
/// See [`merge_runs`] for the tie-break.
pub fn merge<T, F, E>(
	left: ArrayView1<'_, T>,
	right: ArrayView1<'_, T>,
	mut is_less: F,
) -> Result<Array1<T>, E>
where
	T: Clone,
	F: FnMut(&T, &T) -> Result<bool, E>,
{
	merge_runs(left.to_vec(), right.to_vec(), &mut is_less).map(Array1::from_vec)
}
