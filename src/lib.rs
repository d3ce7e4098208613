//! This crate provides [`Range`], a half-open range of [`chrono`] instants,
//! along with the interval algebra needed to reconcile overlapping or
//! adjacent time windows: merging, clipping, intersecting, windowing and
//! complementing.
//!
//! It is meant as the building block for busy/free slot computations and
//! slot generation in booking systems.
//!
//! ## Example: free slots in a working day
//!
//! ```rust
//! use chrono::TimeDelta;
//! use time_ranges::test_ranges::r;
//! use time_ranges::{intersection, merge_overlapping};
//!
//! let working_day = r(9, 0, 17, 0);
//! let meetings = [
//! 	r(10, 0, 11, 0),
//! 	r(10, 30, 11, 30),
//! 	r(13, 0, 14, 0),
//! 	r(14, 0, 14, 30),
//! ];
//!
//! // Overlapping and back-to-back meetings collapse into one busy block
//! assert_eq!(
//! 	merge_overlapping(&meetings),
//! 	[r(10, 0, 11, 30), r(13, 0, 14, 30)]
//! );
//!
//! // The free time is the complement of the meetings in the working day
//! let free = working_day.flip(&meetings);
//! assert_eq!(free, [r(9, 0, 10, 0), r(11, 30, 13, 0), r(14, 30, 17, 0)]);
//!
//! // Bookable 45 minute slots with a 15 minute break between them
//! let slots = free[2]
//! 	.split(TimeDelta::minutes(45), TimeDelta::minutes(15))
//! 	.unwrap();
//! assert_eq!(slots, [r(14, 30, 15, 15), r(15, 30, 16, 15)]);
//!
//! // The window two calendars both have free
//! assert_eq!(
//! 	intersection(&[r(9, 0, 12, 0), r(11, 0, 17, 0)], &chrono::Utc),
//! 	r(11, 0, 12, 0)
//! );
//! ```
//!
//! ## Key Understandings and Philosophies:
//!
//! ### Half-open, but touching
//!
//! A [`Range`] covers `[start, end)`, its end is derived from its start and
//! its [`duration`](Range::duration) so it can never come before its start.
//! When two ranges are compared however, shared boundaries count:
//! [`Range::contains`] is inclusive at both ends, [`merge_overlapping`] fuses
//! a range ending at `t` with one starting at `t`, and [`Range::flip`] never
//! produces a zero-length gap where a sub-range touches the period boundary.
//!
//! ### The empty sentinel
//!
//! Operations with no meaningful result, such as truncating a range to a
//! disjoint one or intersecting nothing, return the empty sentinel: the Unix
//! epoch with a zero duration. Check for it with [`Range::is_empty`].
//!
//! ### Values, not places
//!
//! Every operation takes its inputs by reference and returns new ranges,
//! nothing is ever mutated in place and nothing is kept between calls.
//!
//! ## Features
//!
//! - `serde`: `Serialize` and `Deserialize` for [`Range`] as a
//!   `{ "start", "end" }` pair. Deserializing goes through
//!   [`Range::between`] so an inverted pair is rejected. It also turns on
//!   `smallvec`'s `serde` support so the pieces returned by
//!   [`Range::split_by_day`] can be serialized as they are.

#![allow(clippy::tabs_in_doc_comments)]

pub mod test_ranges;
pub(crate) mod utils;

#[cfg(test)]
pub(crate) mod prop;

pub mod algebra;
pub mod complement;
pub mod daily;
pub mod merge;
pub mod partition;
pub mod range;

pub use crate::algebra::intersection;
pub use crate::daily::split_per_day;
pub use crate::merge::merge_overlapping;
pub use crate::partition::{InvalidWindowError, Windows};
pub use crate::range::{
	ranges_in, ranges_to_utc, sort_by_start, InvertedBoundsError, Range,
	DEFAULT_FORMAT,
};
