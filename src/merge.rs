//! A module containing [`merge_overlapping`], the boundary sweep which
//! normalises any list of ranges into sorted, disjoint ranges.

use core::cmp::Ordering;

use chrono::{DateTime, TimeDelta, TimeZone};

use crate::Range;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum BoundaryKind {
	Start,
	End,
}

#[derive(Debug, Clone)]
struct Boundary<Tz: TimeZone> {
	at: DateTime<Tz>,
	kind: BoundaryKind,
}

/// The sweep order of two boundaries: by instant, and at the same instant
/// every [`BoundaryKind::Start`] comes before every [`BoundaryKind::End`].
///
/// Opening before closing keeps the open count above zero across an
/// instant where one range ends and another begins, so the two fuse into a
/// single run, and a range's own end is never swept before its own start.
fn sweep_order<Tz>(a: &Boundary<Tz>, b: &Boundary<Tz>) -> Ordering
where
	Tz: TimeZone,
{
	a.at.cmp(&b.at).then(a.kind.cmp(&b.kind))
}

fn boundaries<Tz>(ranges: &[Range<Tz>]) -> Vec<Boundary<Tz>>
where
	Tz: TimeZone,
{
	let mut boundaries = Vec::with_capacity(ranges.len() * 2);
	for range in ranges.iter().filter(|r| r.duration >= TimeDelta::zero()) {
		let Some(end) = range.checked_end() else {
			continue;
		};
		boundaries.push(Boundary {
			at: range.start(),
			kind: BoundaryKind::Start,
		});
		boundaries.push(Boundary {
			at: end,
			kind: BoundaryKind::End,
		});
	}
	boundaries
}

/// Merges every overlapping or touching range in `ranges`, returning the
/// fewest disjoint ranges covering the same instants, sorted by start.
///
/// The input may be in any order and may contain duplicates, nested
/// ranges and zero-length ranges. Ranges where one ends exactly where
/// another starts are fused. A zero-length range that touches nothing is
/// kept as a zero-length range. Ranges with a negative duration cover no
/// instants and are skipped, as are ranges whose end lies past the last
/// representable instant. An empty input gives an empty output.
///
/// Complexity: `O(n log n)`.
///
/// # Examples
/// ```
/// use time_ranges::merge_overlapping;
/// use time_ranges::test_ranges::r;
///
/// assert_eq!(
/// 	merge_overlapping(&[
/// 		r(13, 15, 13, 30),
/// 		r(12, 0, 12, 15),
/// 		r(13, 0, 13, 15),
/// 		r(12, 5, 12, 10),
/// 	]),
/// 	[r(12, 0, 12, 15), r(13, 0, 13, 30)]
/// );
/// ```
pub fn merge_overlapping<Tz>(ranges: &[Range<Tz>]) -> Vec<Range<Tz>>
where
	Tz: TimeZone,
{
	let mut boundaries = boundaries(ranges);
	boundaries.sort_unstable_by(sweep_order);

	let mut merged = Vec::new();
	let mut run_start = None;
	let mut open = 0_usize;

	for boundary in boundaries {
		match boundary.kind {
			BoundaryKind::Start => {
				if open == 0 {
					run_start = Some(boundary.at);
				}
				open += 1;
			}
			BoundaryKind::End => {
				open -= 1;
				if open == 0 {
					if let Some(start) = run_start.take() {
						merged.push(Range::spanning(start, boundary.at));
					}
				}
			}
		}
	}

	tracing::trace!(
		ranges = ranges.len(),
		merged = merged.len(),
		"merged overlapping ranges"
	);

	merged
}
