use chrono::TimeDelta;
use proptest::prelude::*;

use crate::test_ranges::at;
use crate::Range;

/// Ranges on whole minutes of the test day, some of them zero-length.
pub(crate) fn range() -> impl Strategy<Value = Range> {
	(0_i64..1200, 0_i64..180).prop_map(|(start, len)| {
		Range::of(at(0, 0) + TimeDelta::minutes(start), TimeDelta::minutes(len))
	})
}

pub(crate) fn ranges() -> impl Strategy<Value = Vec<Range>> {
	prop::collection::vec(range(), 0..48)
}

/// Whether any of `ranges` covers the minute `minute` of the test day,
/// half-open.
pub(crate) fn covers(ranges: &[Range], minute: i64) -> bool {
	let point = at(0, 0) + TimeDelta::minutes(minute);
	ranges.iter().any(|r| r.start() <= point && point < r.end())
}

pub(crate) fn total(ranges: &[Range]) -> TimeDelta {
	ranges
		.iter()
		.fold(TimeDelta::zero(), |total, r| total + r.duration())
}
