/// Remaining stack space below which a new segment is allocated.
#[cfg(feature = "stacker")]
const RED_ZONE: usize = 64 * 1024;
/// Size of each newly allocated stack segment.
#[cfg(feature = "stacker")]
const STACK_SIZE: usize = 1024 * 1024;

/// Runs one level of recursion, growing the stack first if it is about to run out.
///
/// The positional split recurses up to *O*(*n*) levels deep for unlucky split points.
#[inline]
pub fn grow<R, F>(f: F) -> R
where
	F: FnOnce() -> R,
{
	#[cfg(feature = "stacker")]
	{
		stacker::maybe_grow(RED_ZONE, STACK_SIZE, f)
	}
	#[cfg(not(feature = "stacker"))]
	{
		f()
	}
}

#[cfg(feature = "std")]
#[cfg(test)]
mod test {
	use super::grow;

	fn depth(n: usize) -> usize {
		if n == 0 { 0 } else { grow(|| depth(n - 1)) + 1 }
	}

	#[cfg_attr(miri, ignore)]
	#[cfg_attr(not(feature = "stacker"), ignore)]
	#[test]
	fn deep() {
		assert_eq!(depth(200_000), 200_000);
	}
}
