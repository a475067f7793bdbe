//! The `civil_rs` crate implements pure, immutable Gregorian calendar and
//! 24-hour clock values in Rust.
//!
//! ```rust
//! use civil_rs::{Date, DateTime, Month, Time};
//!
//! // Leap days clamp when the target year is shorter.
//! let leap_day = Date::try_new(2020, Month::February, 29).unwrap();
//! assert_eq!(
//!     leap_day.next_year().unwrap(),
//!     Date::try_new(2021, Month::February, 28).unwrap()
//! );
//!
//! // Clock carry propagates into the calendar.
//! let evening = DateTime::new(
//!     Date::try_new(2018, Month::December, 31).unwrap(),
//!     Time::try_new(23, 0, 0, 0).unwrap(),
//! );
//! let next = evening.next_hour().unwrap();
//! assert_eq!(next.year().get(), 2019);
//! assert_eq!(next.month(), Month::January);
//! assert_eq!(next.hour().get(), 0);
//! ```
//!
//! Every value is a plain `Copy` type with no identity: setters and
//! increment/decrement operations return new values and never mutate in
//! place. The universal interchange format is [`EpochMilliseconds`], a
//! signed millisecond offset from 1970-01-01T00:00:00.000 with no time
//! zone applied.
//!
//! Time zones, daylight-saving rules, locale-aware formatting and parsing,
//! and calendars other than the proleptic Gregorian calendar are out of
//! scope.
#![no_std]
#![cfg_attr(not(test), forbid(clippy::unwrap_used))]
#![allow(
    clippy::module_name_repetitions,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod date;
pub mod datetime;
pub mod epoch;
pub mod error;
pub mod fields;
mod fmt;
pub mod month;
pub mod options;
pub mod time;

#[doc(hidden)]
pub(crate) mod utils;

pub use date::{Date, Weekday};
pub use datetime::DateTime;
pub use epoch::EpochMilliseconds;
pub use error::RangeError;
pub use fields::{DateFields, Day, Hour, Millisecond, Minute, Second, TimeFields, Year};
pub use month::{Month, MonthCode};
pub use options::Overflow;
pub use time::Time;

/// The result type for fallible construction and mutation.
pub type CivilResult<T> = Result<T, RangeError>;

// Relevant numeric constants
/// Milliseconds per day constant: 8.64e+7
pub const MS_PER_DAY: i64 = 24 * 60 * 60 * 1000;
/// Milliseconds per hour constant: 3.6e+6
pub const MS_PER_HOUR: i64 = 60 * 60 * 1000;
/// Milliseconds per minute constant: 6.0e+4
pub const MS_PER_MINUTE: i64 = 60 * 1000;
/// Milliseconds per second constant: 1.0e+3
pub const MS_PER_SECOND: i64 = 1000;
