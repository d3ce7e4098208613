//! A module containing [`Range`], the half-open time range every other
//! operation in this crate is built on.

use core::fmt;
use core::hash::{Hash, Hasher};

use chrono::{DateTime, FixedOffset, TimeDelta, TimeZone, Utc};

/// The chrono layout used by the [`Display`](fmt::Display) impl of
/// [`Range`], both ends are rendered in UTC.
pub const DEFAULT_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.f %z %Z";

/// A half-open range of instants `[start, start + duration)`.
///
/// The end is never stored, it is always derived from the start and the
/// duration, so a [`Range`] built through [`Range::between`] can never end
/// before it starts.
///
/// The zone of the start instant is kept as-is, all comparisons are done
/// on the underlying instants so two ranges over the same instants in
/// different zones compare equal after [`Range::with_timezone`].
///
/// # Examples
/// ```
/// use chrono::TimeDelta;
/// use time_ranges::test_ranges::{at, r};
/// use time_ranges::Range;
///
/// let range = Range::between(at(14, 0), at(16, 0)).unwrap();
///
/// assert_eq!(range.duration(), TimeDelta::hours(2));
/// assert_eq!(range.end(), at(16, 0));
/// assert!(range.contains(&r(14, 30, 15, 0)));
/// assert!(!range.contains(&r(13, 30, 15, 0)));
/// ```
#[derive(Clone)]
pub struct Range<Tz: TimeZone = Utc> {
	pub(crate) start: DateTime<Tz>,
	pub(crate) duration: TimeDelta,
}

/// The error returned when building a [`Range`] whose end comes before its
/// start.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("range end {end} precedes its start {start}")]
pub struct InvertedBoundsError {
	/// The start that was given.
	pub start: DateTime<FixedOffset>,
	/// The end that was given, which is before `start`.
	pub end: DateTime<FixedOffset>,
}

impl<Tz> Range<Tz>
where
	Tz: TimeZone,
{
	/// Makes a new [`Range`] from its two boundaries.
	///
	/// Returns an [`InvertedBoundsError`] if `end` is before `start`, a
	/// zero-length range (`start == end`) is fine.
	///
	/// # Examples
	/// ```
	/// use time_ranges::test_ranges::at;
	/// use time_ranges::Range;
	///
	/// assert!(Range::between(at(10, 0), at(11, 0)).is_ok());
	/// assert!(Range::between(at(10, 0), at(10, 0)).is_ok());
	/// assert!(Range::between(at(11, 0), at(10, 0)).is_err());
	/// ```
	pub fn between(
		start: DateTime<Tz>,
		end: DateTime<Tz>,
	) -> Result<Self, InvertedBoundsError> {
		if start > end {
			return Err(InvertedBoundsError {
				start: start.fixed_offset(),
				end: end.fixed_offset(),
			});
		}

		Ok(Range::spanning(start, end))
	}

	/// Makes a new [`Range`] from its two boundaries.
	///
	/// # Panics
	///
	/// Panics if `end` is before `start`, see [`Range::between`] for the
	/// non-panicking version.
	pub fn new(start: DateTime<Tz>, end: DateTime<Tz>) -> Self {
		match Range::between(start, end) {
			Ok(range) => range,
			Err(error) => panic!("{error}"),
		}
	}

	/// Makes a new [`Range`] from its start and its duration.
	///
	/// The duration is not checked here, operations which need a positive
	/// duration check it themselves.
	pub fn of(start: DateTime<Tz>, duration: TimeDelta) -> Self {
		Range { start, duration }
	}

	/// The empty sentinel range: the zero instant (the Unix epoch) in `tz`
	/// with a zero duration.
	///
	/// This is what [`Range::truncate`] and [`intersection`] hand back when
	/// there is nothing in common.
	///
	/// [`intersection`]: crate::intersection
	pub fn empty_in(tz: &Tz) -> Self {
		Range {
			start: DateTime::<Utc>::UNIX_EPOCH.with_timezone(tz),
			duration: TimeDelta::zero(),
		}
	}

	/// The first instant of the range, included.
	pub fn start(&self) -> DateTime<Tz> {
		self.start.clone()
	}

	/// The length of the range.
	pub fn duration(&self) -> TimeDelta {
		self.duration
	}

	/// The instant right after the range, excluded.
	///
	/// # Panics
	///
	/// Panics if the end falls outside the instants chrono can represent,
	/// which only a range built with [`Range::of`] can do.
	pub fn end(&self) -> DateTime<Tz> {
		self.start.clone() + self.duration
	}

	/// The end of the range, or [`None`] if it cannot be represented.
	pub(crate) fn checked_end(&self) -> Option<DateTime<Tz>> {
		self.start.clone().checked_add_signed(self.duration)
	}

	/// Returns `true` if `other` lies completely inside `self`. Both
	/// boundaries are compared inclusively so every range contains itself.
	///
	/// An end past the last representable instant compares after every
	/// representable one.
	pub fn contains(&self, other: &Range<Tz>) -> bool {
		let ends_within = match (self.checked_end(), other.checked_end()) {
			(Some(end), Some(other_end)) => end >= other_end,
			(None, _) => true,
			(Some(_), None) => false,
		};

		self.start <= other.start && ends_within
	}

	/// Returns `true` if this is the empty sentinel, see
	/// [`Range::empty_in`].
	pub fn is_empty(&self) -> bool {
		self.start == DateTime::<Utc>::UNIX_EPOCH && self.duration.is_zero()
	}

	/// Returns the same range with its start expressed in the `tz` zone.
	pub fn with_timezone<Tz2>(&self, tz: &Tz2) -> Range<Tz2>
	where
		Tz2: TimeZone,
	{
		Range {
			start: self.start.with_timezone(tz),
			duration: self.duration,
		}
	}

	/// Returns the same range with its start expressed in UTC.
	pub fn to_utc(&self) -> Range<Utc> {
		self.with_timezone(&Utc)
	}

	/// Renders the range as `[start, end]` with both boundaries formatted
	/// in the range's own zone using the given chrono `layout`.
	///
	/// # Panics
	///
	/// Panics in the same case as [`Range::end`].
	///
	/// # Examples
	/// ```
	/// use time_ranges::test_ranges::r;
	///
	/// assert_eq!(r(9, 0, 17, 30).format("%H:%M"), "[09:00, 17:30]");
	/// ```
	pub fn format(&self, layout: &str) -> String
	where
		Tz::Offset: fmt::Display,
	{
		format!(
			"[{}, {}]",
			self.start.format(layout),
			self.end().format(layout)
		)
	}

	/// Builds a range from boundaries the caller already knows to be
	/// ordered.
	pub(crate) fn spanning(start: DateTime<Tz>, end: DateTime<Tz>) -> Self {
		let duration = end - start.clone();
		debug_assert!(duration >= TimeDelta::zero());

		Range { start, duration }
	}
}

impl<Tz> Copy for Range<Tz>
where
	Tz: TimeZone,
	Tz::Offset: Copy,
{
}

impl<Tz> PartialEq for Range<Tz>
where
	Tz: TimeZone,
{
	fn eq(&self, other: &Self) -> bool {
		self.start == other.start && self.duration == other.duration
	}
}

impl<Tz> Eq for Range<Tz> where Tz: TimeZone {}

impl<Tz> Hash for Range<Tz>
where
	Tz: TimeZone,
{
	fn hash<H: Hasher>(&self, state: &mut H) {
		self.start.hash(state);
		self.duration.hash(state);
	}
}

impl<Tz> fmt::Debug for Range<Tz>
where
	Tz: TimeZone,
{
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self.checked_end() {
			Some(end) => write!(f, "{:?}..{:?}", self.start, end),
			None => write!(f, "{:?}..+{}", self.start, self.duration),
		}
	}
}

impl<Tz> fmt::Display for Range<Tz>
where
	Tz: TimeZone,
{
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let utc = self.to_utc();
		write!(
			f,
			"[{}, {}]",
			utc.start.format(DEFAULT_FORMAT),
			utc.end().format(DEFAULT_FORMAT)
		)
	}
}

/// Sorts `ranges` in place by their start, keeping the order of ranges with
/// equal starts.
///
/// # Examples
/// ```
/// use time_ranges::range::sort_by_start;
/// use time_ranges::test_ranges::r;
///
/// let mut ranges = [r(13, 0, 14, 0), r(9, 0, 17, 0), r(9, 0, 10, 0)];
/// sort_by_start(&mut ranges);
///
/// assert_eq!(ranges, [r(9, 0, 17, 0), r(9, 0, 10, 0), r(13, 0, 14, 0)]);
/// ```
pub fn sort_by_start<Tz>(ranges: &mut [Range<Tz>])
where
	Tz: TimeZone,
{
	ranges.sort_by(|a, b| a.start.cmp(&b.start));
}

/// Returns every range in `ranges` with its start expressed in the `tz`
/// zone, see [`Range::with_timezone`].
pub fn ranges_in<Tz, Tz2>(ranges: &[Range<Tz>], tz: &Tz2) -> Vec<Range<Tz2>>
where
	Tz: TimeZone,
	Tz2: TimeZone,
{
	ranges.iter().map(|range| range.with_timezone(tz)).collect()
}

/// Returns every range in `ranges` with its start expressed in UTC.
pub fn ranges_to_utc<Tz>(ranges: &[Range<Tz>]) -> Vec<Range<Utc>>
where
	Tz: TimeZone,
{
	ranges_in(ranges, &Utc)
}

#[cfg(feature = "serde")]
mod serde {
	use chrono::{DateTime, TimeZone};
	use serde::ser::{self, SerializeStruct};
	use serde::{Deserialize, Deserializer, Serialize, Serializer};

	use crate::Range;

	impl<Tz> Serialize for Range<Tz>
	where
		Tz: TimeZone,
		DateTime<Tz>: Serialize,
	{
		fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
		where
			S: Serializer,
		{
			let end = self.checked_end().ok_or_else(|| {
				<S::Error as ser::Error>::custom(
					"range end is out of the representable range",
				)
			})?;

			let mut state = serializer.serialize_struct("Range", 2)?;
			state.serialize_field("start", &self.start)?;
			state.serialize_field("end", &end)?;
			state.end()
		}
	}

	#[derive(Deserialize)]
	#[serde(bound(deserialize = "DateTime<Tz>: Deserialize<'de>"))]
	struct Bounds<Tz: TimeZone> {
		start: DateTime<Tz>,
		end: DateTime<Tz>,
	}

	impl<'de, Tz> Deserialize<'de> for Range<Tz>
	where
		Tz: TimeZone,
		DateTime<Tz>: Deserialize<'de>,
	{
		fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
		where
			D: Deserializer<'de>,
		{
			let Bounds { start, end } = Bounds::deserialize(deserializer)?;
			Range::between(start, end).map_err(serde::de::Error::custom)
		}
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;
	use crate::test_ranges::{at, r};

	#[test]
	fn between_tests() {
		assert_eq!(
			Range::between(at(14, 0), at(16, 0)),
			Ok(Range::of(at(14, 0), TimeDelta::hours(2)))
		);
		assert_eq!(
			Range::between(at(14, 0), at(14, 0)),
			Ok(Range::of(at(14, 0), TimeDelta::zero()))
		);
		assert_eq!(
			Range::between(at(16, 0), at(14, 0)),
			Err(InvertedBoundsError {
				start: at(16, 0).fixed_offset(),
				end: at(14, 0).fixed_offset(),
			})
		);
	}

	#[test]
	#[should_panic(expected = "precedes its start")]
	fn new_panics_on_inverted_bounds() {
		Range::new(at(16, 0), at(14, 0));
	}

	#[test]
	fn contains_tests() {
		let outer = r(14, 0, 16, 0);

		assert!(outer.contains(&outer));
		assert!(outer.contains(&r(14, 0, 15, 0)));
		assert!(outer.contains(&r(15, 0, 16, 0)));
		assert!(outer.contains(&r(15, 0, 15, 0)));
		assert!(!outer.contains(&r(13, 59, 15, 0)));
		assert!(!outer.contains(&r(15, 0, 16, 1)));
		assert!(!r(15, 0, 15, 0).contains(&outer));
	}

	#[test]
	fn empty_tests() {
		assert!(Range::empty_in(&Utc).is_empty());
		assert!(Range::empty_in(&FixedOffset::east_opt(3600).unwrap())
			.is_empty());
		assert!(!r(0, 0, 0, 0).is_empty());
		assert!(!Range::of(DateTime::<Utc>::UNIX_EPOCH, TimeDelta::seconds(1))
			.is_empty());
	}

	#[test]
	fn with_timezone_keeps_instants() {
		let tz = FixedOffset::east_opt(5 * 3600).unwrap();
		let range = r(10, 0, 12, 0);
		let shifted = range.with_timezone(&tz);

		assert_eq!(shifted.start(), range.start());
		assert_eq!(shifted.end(), range.end());
		assert_eq!(shifted.format("%H:%M"), "[15:00, 17:00]");
		assert_eq!(shifted.to_utc(), range);
	}

	#[test]
	fn end_past_the_representable_range() {
		let huge = Range::of(
			DateTime::<Utc>::MAX_UTC - TimeDelta::hours(1),
			TimeDelta::hours(2),
		);
		let last_hour = Range::new(
			DateTime::<Utc>::MAX_UTC - TimeDelta::hours(1),
			DateTime::<Utc>::MAX_UTC,
		);

		assert_eq!(huge.checked_end(), None);
		assert_eq!(last_hour.checked_end(), Some(DateTime::<Utc>::MAX_UTC));
		assert!(huge.contains(&last_hour));
		assert!(!last_hour.contains(&huge));
		assert!(!r(9, 0, 17, 0).contains(&huge));
		assert!(format!("{huge:?}").ends_with("..+PT7200S"));
	}

	#[test]
	fn list_helpers() {
		let tz = FixedOffset::east_opt(3600).unwrap();
		let mut ranges = [r(13, 0, 14, 0), r(9, 0, 17, 0), r(9, 0, 10, 0)];
		sort_by_start(&mut ranges);

		assert_eq!(ranges, [r(9, 0, 17, 0), r(9, 0, 10, 0), r(13, 0, 14, 0)]);

		let shifted = ranges_in(&ranges, &tz);
		assert_eq!(shifted[0].format("%H:%M"), "[10:00, 18:00]");
		assert_eq!(ranges_to_utc(&shifted), ranges);
	}

	#[test]
	fn display_renders_utc() {
		let tz = FixedOffset::west_opt(2 * 3600).unwrap();
		let range = r(10, 0, 12, 0).with_timezone(&tz);

		assert_eq!(
			range.to_string(),
			"[2024-03-15 10:00:00 +0000 UTC, 2024-03-15 12:00:00 +0000 UTC]"
		);
	}

	#[cfg(feature = "serde")]
	#[test]
	fn serde_round_trips_through_between() {
		let range = r(9, 15, 10, 45);
		let json = serde_json::to_string(&range).unwrap();

		assert_eq!(
			json,
			r#"{"start":"2024-03-15T09:15:00Z","end":"2024-03-15T10:45:00Z"}"#
		);
		assert_eq!(serde_json::from_str::<Range>(&json).unwrap(), range);

		let inverted =
			r#"{"start":"2024-03-15T10:45:00Z","end":"2024-03-15T09:15:00Z"}"#;
		assert!(serde_json::from_str::<Range>(inverted).is_err());

		let huge = Range::of(DateTime::<Utc>::MAX_UTC, TimeDelta::hours(1));
		assert!(serde_json::to_string(&huge).is_err());
	}
}
