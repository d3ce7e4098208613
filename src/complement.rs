//! A module containing [`Range::flip`].

use chrono::TimeZone;
use itertools::Itertools;

use crate::{merge_overlapping, Range};

impl<Tz> Range<Tz>
where
	Tz: TimeZone,
{
	/// Returns the gaps inside `self` that none of `ranges` cover, sorted by
	/// start.
	///
	/// `ranges` may be unsorted, overlapping or reach outside of `self`: they
	/// are clipped to `self` and run through [`merge_overlapping`] first.
	/// Boundaries are treated as touching, so a range starting exactly at
	/// the start of `self` (or ending exactly at its end) leaves no
	/// zero-length gap there. With no ranges inside `self` the whole of
	/// `self` is the only gap.
	///
	/// Complexity: `O(n log n)`.
	///
	/// # Examples
	/// ```
	/// use time_ranges::test_ranges::r;
	///
	/// let day = r(9, 0, 17, 0);
	///
	/// assert_eq!(
	/// 	day.flip(&[r(12, 0, 13, 0), r(9, 0, 10, 0), r(12, 30, 14, 0)]),
	/// 	[r(10, 0, 12, 0), r(14, 0, 17, 0)]
	/// );
	/// assert_eq!(day.flip(&[]), [day]);
	/// ```
	pub fn flip(&self, ranges: &[Range<Tz>]) -> Vec<Range<Tz>> {
		let clipped = ranges
			.iter()
			.filter_map(|range| range.clip(self))
			.collect::<Vec<_>>();
		let covered = merge_overlapping(&clipped);

		let (Some(first), Some(last)) = (covered.first(), covered.last())
		else {
			return vec![self.clone()];
		};

		let mut gaps = Vec::with_capacity(covered.len() + 1);
		if self.start != first.start {
			gaps.push(Range::spanning(self.start.clone(), first.start.clone()));
		}
		gaps.extend(
			covered
				.iter()
				.tuple_windows()
				.map(|(prev, next)| Range::spanning(prev.end(), next.start.clone())),
		);
		let end = self.end();
		if end != last.end() {
			gaps.push(Range::spanning(last.end(), end));
		}

		tracing::trace!(
			ranges = ranges.len(),
			covered = covered.len(),
			gaps = gaps.len(),
			"flipped ranges"
		);

		gaps
	}
}
