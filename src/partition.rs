//! A module containing the window generators [`Range::stratify`] and
//! [`Range::split`], and the [`Windows`] iterator they are built on.

use core::iter::FusedIterator;

use chrono::{DateTime, TimeDelta, TimeZone};

use crate::Range;

/// The error returned when asking for windows with a non-positive length or
/// step, or a negative offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error(
	"invalid window: offset {offset}, duration {duration}, interval {interval}"
)]
pub struct InvalidWindowError {
	/// The offset of the first window from the start of the range.
	pub offset: TimeDelta,
	/// The length of each window.
	pub duration: TimeDelta,
	/// The step between window starts for [`Range::stratify`], or the gap
	/// between windows for [`Range::split`].
	pub interval: TimeDelta,
}

/// An iterator over fixed-length windows inside a [`Range`], see
/// [`Range::windows`].
#[derive(Debug, Clone)]
pub struct Windows<Tz: TimeZone> {
	cursor: Option<DateTime<Tz>>,
	// None when the range ends past the last representable instant
	end: Option<DateTime<Tz>>,
	duration: TimeDelta,
	step: TimeDelta,
}

impl<Tz> Iterator for Windows<Tz>
where
	Tz: TimeZone,
{
	type Item = Range<Tz>;

	fn next(&mut self) -> Option<Self::Item> {
		let start = self.cursor.take()?;
		let window_end = start.clone().checked_add_signed(self.duration)?;
		if self.end.as_ref().is_some_and(|end| window_end > *end) {
			return None;
		}

		self.cursor = start.clone().checked_add_signed(self.step);
		Some(Range::of(start, self.duration))
	}
}

impl<Tz> FusedIterator for Windows<Tz> where Tz: TimeZone {}

impl<Tz> Range<Tz>
where
	Tz: TimeZone,
{
	/// Returns an iterator over windows of length `duration` whose starts are
	/// `step` apart, the first one starting at `offset` after the start of
	/// the range.
	///
	/// Windows are produced while they end no later than the end of the
	/// range, so the last window may end exactly on it but a window is never
	/// cut short. Windows overlap when `step` is shorter than `duration`.
	///
	/// Returns an [`InvalidWindowError`] if `duration` or `step` is not
	/// positive or `offset` is negative.
	///
	/// # Examples
	/// ```
	/// use chrono::TimeDelta;
	/// use time_ranges::test_ranges::r;
	///
	/// let windows = r(9, 0, 10, 0)
	/// 	.windows(
	/// 		TimeDelta::minutes(10),
	/// 		TimeDelta::minutes(20),
	/// 		TimeDelta::minutes(15),
	/// 	)
	/// 	.unwrap()
	/// 	.map(|window| window.format("%H:%M"))
	/// 	.collect::<Vec<_>>();
	///
	/// assert_eq!(windows, ["[09:10, 09:30]", "[09:25, 09:45]", "[09:40, 10:00]"]);
	/// ```
	pub fn windows(
		&self,
		offset: TimeDelta,
		duration: TimeDelta,
		step: TimeDelta,
	) -> Result<Windows<Tz>, InvalidWindowError> {
		let zero = TimeDelta::zero();
		if offset < zero || duration <= zero || step <= zero {
			tracing::debug!(%offset, %duration, %step, "rejecting window layout");
			return Err(InvalidWindowError {
				offset,
				duration,
				interval: step,
			});
		}

		Ok(Windows {
			cursor: self.start.clone().checked_add_signed(offset),
			end: self.checked_end(),
			duration,
			step,
		})
	}

	/// Splits the range into windows of length `duration` whose starts are
	/// `interval` apart, see [`Range::windows`].
	///
	/// # Examples
	/// ```
	/// use chrono::TimeDelta;
	/// use time_ranges::test_ranges::r;
	///
	/// let windows = r(1, 40, 2, 40)
	/// 	.stratify(TimeDelta::minutes(30), TimeDelta::minutes(5))
	/// 	.unwrap();
	///
	/// assert_eq!(windows.len(), 7);
	/// assert_eq!(windows[0], r(1, 40, 2, 10));
	/// assert_eq!(windows[6], r(2, 10, 2, 40));
	/// ```
	pub fn stratify(
		&self,
		duration: TimeDelta,
		interval: TimeDelta,
	) -> Result<Vec<Range<Tz>>, InvalidWindowError> {
		self.stratify_from(TimeDelta::zero(), duration, interval)
	}

	/// Like [`Range::stratify`] but the first window starts `offset` after
	/// the start of the range.
	pub fn stratify_from(
		&self,
		offset: TimeDelta,
		duration: TimeDelta,
		interval: TimeDelta,
	) -> Result<Vec<Range<Tz>>, InvalidWindowError> {
		Ok(self.windows(offset, duration, interval)?.collect())
	}

	/// Splits the range into back-to-back windows of length `duration` with
	/// a gap of `interval` between the end of one window and the start of
	/// the next.
	///
	/// A zero `interval` tiles the range. Returns an [`InvalidWindowError`]
	/// if `duration` is not positive or `interval` is negative.
	///
	/// # Examples
	/// ```
	/// use chrono::TimeDelta;
	/// use time_ranges::test_ranges::r;
	///
	/// assert_eq!(
	/// 	r(1, 40, 3, 20)
	/// 		.split(TimeDelta::minutes(30), TimeDelta::minutes(5))
	/// 		.unwrap(),
	/// 	[r(1, 40, 2, 10), r(2, 15, 2, 45), r(2, 50, 3, 20)]
	/// );
	/// ```
	pub fn split(
		&self,
		duration: TimeDelta,
		interval: TimeDelta,
	) -> Result<Vec<Range<Tz>>, InvalidWindowError> {
		self.split_from(TimeDelta::zero(), duration, interval)
	}

	/// Like [`Range::split`] but the first window starts `offset` after the
	/// start of the range.
	pub fn split_from(
		&self,
		offset: TimeDelta,
		duration: TimeDelta,
		interval: TimeDelta,
	) -> Result<Vec<Range<Tz>>, InvalidWindowError> {
		let error = InvalidWindowError {
			offset,
			duration,
			interval,
		};
		if interval < TimeDelta::zero() {
			tracing::debug!(%interval, "rejecting negative gap between windows");
			return Err(error);
		}

		let step = duration.checked_add(&interval).ok_or(error)?;
		self.stratify_from(offset, duration, step)
			.map_err(|_| error)
	}
}
