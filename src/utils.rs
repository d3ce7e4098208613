use chrono::{DateTime, TimeZone};

use crate::Range;

pub(crate) fn contains_point<Tz>(range: &Range<Tz>, point: &DateTime<Tz>) -> bool
where
	Tz: TimeZone,
{
	range.start <= *point && *point <= range.end()
}

/// How two ranges sit relative to each other, boundaries compared
/// inclusively so touching ranges count as overlapping.
#[derive(Debug, PartialEq)]
pub(crate) enum Config {
	LeftFirstNonOverlapping,
	LeftFirstPartialOverlap,
	LeftContainsRight,

	RightFirstNonOverlapping,
	RightFirstPartialOverlap,
	RightContainsLeft,
}

pub(crate) fn config<Tz>(a: &Range<Tz>, b: &Range<Tz>) -> Config
where
	Tz: TimeZone,
{
	if a.start < b.start {
		match (contains_point(a, &b.start), contains_point(a, &b.end())) {
			(false, false) => Config::LeftFirstNonOverlapping,
			(true, false) => Config::LeftFirstPartialOverlap,
			(true, true) => Config::LeftContainsRight,
			(false, true) => unreachable!("range ends before it starts"),
		}
	} else {
		match (contains_point(b, &a.start), contains_point(b, &a.end())) {
			(false, false) => Config::RightFirstNonOverlapping,
			(true, false) => Config::RightFirstPartialOverlap,
			(true, true) => Config::RightContainsLeft,
			(false, true) => unreachable!("range ends before it starts"),
		}
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;
	use crate::test_ranges::r;

	#[test]
	fn config_tests() {
		assert_eq!(
			config(&r(10, 0, 11, 0), &r(12, 0, 13, 0)),
			Config::LeftFirstNonOverlapping
		);
		assert_eq!(
			config(&r(10, 0, 12, 0), &r(12, 0, 13, 0)),
			Config::LeftFirstPartialOverlap
		);
		assert_eq!(
			config(&r(10, 0, 13, 0), &r(11, 0, 13, 0)),
			Config::LeftContainsRight
		);
		assert_eq!(
			config(&r(12, 0, 13, 0), &r(10, 0, 11, 0)),
			Config::RightFirstNonOverlapping
		);
		assert_eq!(
			config(&r(12, 0, 14, 0), &r(10, 0, 13, 0)),
			Config::RightFirstPartialOverlap
		);
		assert_eq!(
			config(&r(10, 0, 11, 0), &r(10, 0, 12, 0)),
			Config::RightContainsLeft
		);
		assert_eq!(
			config(&r(10, 0, 12, 0), &r(10, 0, 11, 0)),
			Config::RightFirstPartialOverlap
		);
	}
}
