//! A module containing [`Range::split_by_day`] and [`split_per_day`], which
//! cut ranges at the local midnights of their zone.

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, Offset, TimeZone};
use smallvec::SmallVec;

use crate::Range;

/// The first instant of the day after the one `at` falls on, in `at`'s zone.
///
/// A midnight which does not exist in the zone (skipped over by a
/// daylight-saving jump) is taken at the offset in effect at `at` instead.
fn next_midnight<Tz>(at: &DateTime<Tz>) -> Option<DateTime<Tz>>
where
	Tz: TimeZone,
{
	let tz = at.timezone();
	let midnight = at.date_naive().succ_opt()?.and_hms_opt(0, 0, 0)?;

	tz.from_local_datetime(&midnight).earliest().or_else(|| {
		let fixed = at.offset().fix();
		let shifted = fixed.from_local_datetime(&midnight).single()?;
		Some(shifted.with_timezone(&tz))
	})
}

impl<Tz> Range<Tz>
where
	Tz: TimeZone,
{
	/// Cuts the range at every local midnight it crosses, returning each
	/// piece along with the date it falls on in the range's zone.
	///
	/// Every piece but the last ends exactly at the next midnight, so the
	/// pieces tile the range. A range ending exactly at midnight has no
	/// zero-length piece on the following day. A zero-length range, or one
	/// ending past the last representable instant, has no pieces at all.
	///
	/// # Examples
	/// ```
	/// use chrono::NaiveDate;
	/// use time_ranges::test_ranges::rd;
	///
	/// let pieces = rd(15, 22, 0, 16, 2, 0).split_by_day();
	///
	/// assert_eq!(
	/// 	pieces.as_slice(),
	/// 	[
	/// 		(NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(), rd(15, 22, 0, 16, 0, 0)),
	/// 		(NaiveDate::from_ymd_opt(2024, 3, 16).unwrap(), rd(16, 0, 0, 16, 2, 0)),
	/// 	]
	/// );
	/// ```
	pub fn split_by_day(&self) -> SmallVec<[(NaiveDate, Range<Tz>); 2]> {
		let mut pieces = SmallVec::new();
		let Some(end) = self.checked_end() else {
			return pieces;
		};
		let mut cursor = self.start.clone();

		while cursor.date_naive() < end.date_naive() {
			let Some(midnight) = next_midnight(&cursor) else {
				break;
			};
			if midnight <= cursor || midnight > end {
				break;
			}

			pieces.push((
				cursor.date_naive(),
				Range::spanning(cursor, midnight.clone()),
			));
			cursor = midnight;
		}

		if cursor < end {
			pieces.push((cursor.date_naive(), Range::spanning(cursor, end)));
		}

		pieces
	}
}

/// Cuts every range in `ranges` at local midnights with
/// [`Range::split_by_day`] and groups the pieces by date.
///
/// Pieces keep the order of `ranges` within each date, so sorted disjoint
/// input (for instance the output of [`merge_overlapping`]) gives sorted
/// disjoint days.
///
/// [`merge_overlapping`]: crate::merge_overlapping
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use time_ranges::split_per_day;
/// use time_ranges::test_ranges::rd;
///
/// let days = split_per_day(&[rd(15, 9, 0, 15, 10, 0), rd(15, 23, 0, 16, 1, 0)]);
/// let day = |d| NaiveDate::from_ymd_opt(2024, 3, d).unwrap();
///
/// assert_eq!(days[&day(15)], [rd(15, 9, 0, 15, 10, 0), rd(15, 23, 0, 16, 0, 0)]);
/// assert_eq!(days[&day(16)], [rd(16, 0, 0, 16, 1, 0)]);
/// ```
pub fn split_per_day<Tz>(ranges: &[Range<Tz>]) -> BTreeMap<NaiveDate, Vec<Range<Tz>>>
where
	Tz: TimeZone,
{
	let mut days: BTreeMap<NaiveDate, Vec<Range<Tz>>> = BTreeMap::new();
	for range in ranges {
		for (date, piece) in range.split_by_day() {
			days.entry(date).or_default().push(piece);
		}
	}

	tracing::trace!(
		ranges = ranges.len(),
		days = days.len(),
		"split ranges per day"
	);

	days
}

#[cfg(test)]
mod tests {
	use chrono::{FixedOffset, TimeDelta, Utc};
	use chrono_tz::America::Sao_Paulo;
	use pretty_assertions::assert_eq;

	use super::*;
	use crate::test_ranges::{r, rd};

	fn day(d: u32) -> NaiveDate {
		NaiveDate::from_ymd_opt(2024, 3, d).unwrap()
	}

	#[test]
	fn split_by_day_tests() {
		//within a single day
		assert_eq!(
			r(9, 0, 17, 0).split_by_day().as_slice(),
			[(day(15), r(9, 0, 17, 0))]
		);
		//spanning three days
		assert_eq!(
			rd(15, 22, 0, 17, 2, 0).split_by_day().as_slice(),
			[
				(day(15), rd(15, 22, 0, 16, 0, 0)),
				(day(16), rd(16, 0, 0, 17, 0, 0)),
				(day(17), rd(17, 0, 0, 17, 2, 0)),
			]
		);
		//ending at midnight
		assert_eq!(
			rd(15, 22, 0, 16, 0, 0).split_by_day().as_slice(),
			[(day(15), rd(15, 22, 0, 16, 0, 0))]
		);
		//starting at midnight
		assert_eq!(
			rd(16, 0, 0, 16, 3, 0).split_by_day().as_slice(),
			[(day(16), rd(16, 0, 0, 16, 3, 0))]
		);
		//zero-length
		assert!(r(9, 0, 9, 0).split_by_day().is_empty());
	}

	#[test]
	fn split_by_day_uses_local_midnight() {
		let tz = FixedOffset::east_opt(2 * 3600).unwrap();
		//21:00..23:30 UTC is 23:00..01:30 at +02:00
		let range = r(21, 0, 23, 30).with_timezone(&tz);
		let pieces = range.split_by_day();

		assert_eq!(pieces.len(), 2);
		assert_eq!(pieces[0].0, day(15));
		assert_eq!(pieces[0].1.to_utc(), r(21, 0, 22, 0));
		assert_eq!(pieces[1].0, day(16));
		assert_eq!(pieces[1].1.to_utc(), r(22, 0, 23, 30));
	}

	#[test]
	fn split_by_day_across_a_skipped_midnight() {
		//clocks in Sao Paulo jumped from 00:00 to 01:00 on 2018-11-04
		let start = Sao_Paulo.with_ymd_and_hms(2018, 11, 3, 22, 0, 0).unwrap();
		let pieces = Range::of(start, TimeDelta::hours(4)).split_by_day();
		let utc = |d, h| Utc.with_ymd_and_hms(2018, 11, d, h, 0, 0).unwrap();

		assert_eq!(pieces.len(), 2);
		assert_eq!(pieces[0].0, NaiveDate::from_ymd_opt(2018, 11, 3).unwrap());
		assert_eq!(pieces[0].1.to_utc(), Range::new(utc(4, 1), utc(4, 3)));
		assert_eq!(pieces[1].0, NaiveDate::from_ymd_opt(2018, 11, 4).unwrap());
		assert_eq!(pieces[1].1.to_utc(), Range::new(utc(4, 3), utc(4, 5)));
		assert_eq!(pieces[1].1.format("%H:%M %:z"), "[01:00 -02:00, 03:00 -02:00]");
	}

	#[test]
	fn split_by_day_past_the_last_instant() {
		let huge = Range::of(DateTime::<Utc>::MAX_UTC, TimeDelta::days(2));

		assert!(huge.split_by_day().is_empty());
	}

	#[cfg(feature = "serde")]
	#[test]
	fn split_by_day_serializes() {
		let json = serde_json::to_string(&rd(15, 23, 0, 16, 1, 0).split_by_day()).unwrap();

		assert_eq!(
			json,
			concat!(
				r#"[["2024-03-15",{"start":"2024-03-15T23:00:00Z","end":"2024-03-16T00:00:00Z"}],"#,
				r#"["2024-03-16",{"start":"2024-03-16T00:00:00Z","end":"2024-03-16T01:00:00Z"}]]"#,
			)
		);
	}

	#[test]
	fn split_per_day_tests() {
		let days = split_per_day(&[
			rd(15, 9, 0, 15, 10, 0),
			rd(15, 20, 0, 17, 4, 0),
			rd(17, 8, 0, 17, 9, 0),
		]);

		assert_eq!(days.len(), 3);
		assert_eq!(
			days[&day(15)],
			[rd(15, 9, 0, 15, 10, 0), rd(15, 20, 0, 16, 0, 0)]
		);
		assert_eq!(days[&day(16)], [rd(16, 0, 0, 17, 0, 0)]);
		assert_eq!(
			days[&day(17)],
			[rd(17, 0, 0, 17, 4, 0), rd(17, 8, 0, 17, 9, 0)]
		);

		let total = days
			.values()
			.flatten()
			.fold(TimeDelta::zero(), |sum, piece| sum + piece.duration());
		assert_eq!(total, TimeDelta::hours(1 + 32 + 1));
	}
}
