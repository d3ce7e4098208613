//! A module containing small constructor functions for instants and
//! [`Range`]s on a fixed day, used throughout the examples and tests.
//!
//! Every instant lives on `2024-03-15` in UTC unless the day is given
//! explicitly with [`on`] or [`rd`].

use chrono::{DateTime, NaiveDate, TimeZone, Utc};

use crate::Range;

/// The day every helper without an explicit day refers to.
pub const DAY: (i32, u32, u32) = (2024, 3, 15);

/// The instant `hour:minute` on [`DAY`].
pub fn at(hour: u32, minute: u32) -> DateTime<Utc> {
	on(DAY.2, hour, minute)
}

/// The instant `hour:minute` on the given day of [`DAY`]'s month.
pub fn on(day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
	let date = NaiveDate::from_ymd_opt(DAY.0, DAY.1, day).unwrap();
	Utc.from_utc_datetime(&date.and_hms_opt(hour, minute, 0).unwrap())
}

/// The range `[h1:m1, h2:m2)` on [`DAY`].
pub fn r(h1: u32, m1: u32, h2: u32, m2: u32) -> Range {
	Range::new(at(h1, m1), at(h2, m2))
}

/// The range from `h1:m1` on day `d1` to `h2:m2` on day `d2` of [`DAY`]'s
/// month.
pub fn rd(d1: u32, h1: u32, m1: u32, d2: u32, h2: u32, m2: u32) -> Range {
	Range::new(on(d1, h1, m1), on(d2, h2, m2))
}
