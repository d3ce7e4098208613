//! A module containing [`Range::truncate`] and [`intersection`].

use chrono::{TimeDelta, TimeZone};

use crate::utils::{config, Config};
use crate::Range;

impl<Tz> Range<Tz>
where
	Tz: TimeZone,
{
	/// Clips `self` to the part of it that lies inside `bounds`.
	///
	/// Boundaries are compared inclusively: a range that ends exactly where
	/// `bounds` starts is cut down to the zero-length range at that instant.
	/// If the two ranges have no instant in common at all the empty sentinel
	/// is returned (see [`Range::empty_in`]), and truncating the empty
	/// sentinel itself always gives back the empty sentinel.
	///
	/// # Examples
	/// ```
	/// use time_ranges::test_ranges::r;
	///
	/// let range = r(14, 0, 16, 0);
	///
	/// assert_eq!(range.truncate(&r(13, 0, 15, 0)), r(14, 0, 15, 0));
	/// assert_eq!(range.truncate(&r(15, 0, 17, 0)), r(15, 0, 16, 0));
	/// assert_eq!(range.truncate(&r(12, 0, 18, 0)), range);
	/// assert!(range.truncate(&r(17, 0, 18, 0)).is_empty());
	/// ```
	pub fn truncate(&self, bounds: &Range<Tz>) -> Range<Tz> {
		if self.is_empty() {
			return self.clone();
		}

		self.clip(bounds)
			.unwrap_or_else(|| Range::empty_in(&self.start.timezone()))
	}

	/// The overlap of `self` with `bounds`, or [`None`] if they share no
	/// instant. A range with a negative duration, or with an end past the
	/// last representable instant, shares no instant with anything.
	pub(crate) fn clip(&self, bounds: &Range<Tz>) -> Option<Range<Tz>> {
		let measurable = |range: &Range<Tz>| {
			range.duration >= TimeDelta::zero() && range.checked_end().is_some()
		};
		if !measurable(self) || !measurable(bounds) {
			return None;
		}

		match config(self, bounds) {
			Config::LeftFirstNonOverlapping
			| Config::RightFirstNonOverlapping => None,
			Config::LeftContainsRight => Some(bounds.clone()),
			Config::RightContainsLeft => Some(self.clone()),
			Config::LeftFirstPartialOverlap => {
				Some(Range::spanning(bounds.start.clone(), self.end()))
			}
			Config::RightFirstPartialOverlap => {
				Some(Range::spanning(self.start.clone(), bounds.end()))
			}
		}
	}
}

/// Returns the range common to every range in `ranges`.
///
/// This folds [`Range::truncate`] from left to right, so as soon as two
/// ranges have nothing in common the result is the empty sentinel. An empty
/// `ranges` gives the empty sentinel in the `tz` zone.
///
/// # Examples
/// ```
/// use chrono::Utc;
/// use time_ranges::intersection;
/// use time_ranges::test_ranges::r;
///
/// assert_eq!(
/// 	intersection(&[r(13, 0, 19, 0), r(15, 0, 17, 0), r(16, 0, 21, 0)], &Utc),
/// 	r(16, 0, 17, 0)
/// );
/// assert!(intersection(&[r(13, 0, 14, 0), r(15, 0, 17, 0)], &Utc).is_empty());
/// assert!(intersection(&[], &Utc).is_empty());
/// ```
pub fn intersection<Tz>(ranges: &[Range<Tz>], tz: &Tz) -> Range<Tz>
where
	Tz: TimeZone,
{
	let Some((first, rest)) = ranges.split_first() else {
		return Range::empty_in(tz);
	};

	rest.iter()
		.fold(first.clone(), |common, range| common.truncate(range))
}
