//! Validated field newtypes and the raw constructor records.
//!
//! Each calendar and clock field gets its own nominal type so that fields
//! cannot be swapped accidentally once past the validation boundary; a
//! bare integer never survives construction.

use crate::{error::reject, month::Month, utils, CivilResult, RangeError};

/// A validated Gregorian year.
///
/// Years are 1-based: year zero and negative years are rejected. The
/// upper bound keeps every representable instant within 100,000,000 days
/// of the epoch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Year(i32);

impl Year {
    /// The first supported year.
    pub const MIN: Self = Self(1);
    /// The last supported year.
    pub const MAX: Self = Self(275_759);

    /// Creates a new `Year`, rejecting values outside the supported
    /// range.
    pub fn try_new(year: i32) -> CivilResult<Self> {
        if !(Self::MIN.0..=Self::MAX.0).contains(&year) {
            reject!("year {year} is out of the supported range");
        }
        Ok(Self(year))
    }

    pub(crate) const fn new_unchecked(year: i32) -> Self {
        Self(year)
    }

    /// Returns the year as an integer.
    #[inline]
    #[must_use]
    pub const fn get(self) -> i32 {
        self.0
    }

    /// Returns whether this is a leap year.
    #[must_use]
    pub fn is_leap(self) -> bool {
        utils::is_leap_year(self.0)
    }

    /// The number of days in this year.
    #[must_use]
    pub fn days(self) -> u16 {
        utils::days_in_year(self.0) as u16
    }
}

impl TryFrom<i32> for Year {
    type Error = RangeError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

impl From<Year> for i32 {
    fn from(value: Year) -> Self {
        value.0
    }
}

/// A validated day of month.
///
/// On its own a day is only bounded by `1..=31`; the contextual bound
/// (the last day of a particular year and month) is enforced when a
/// [`Date`](crate::Date) is constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Day(u8);

impl Day {
    /// Creates a new `Day`, rejecting values outside `1..=31`.
    pub fn try_new(day: u8) -> CivilResult<Self> {
        if !(1..=31).contains(&day) {
            reject!("day {day} is out of range");
        }
        Ok(Self(day))
    }

    pub(crate) const fn new_unchecked(day: u8) -> Self {
        Self(day)
    }

    /// Returns the day as an integer.
    #[inline]
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Day {
    type Error = RangeError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

impl From<Day> for u8 {
    fn from(value: Day) -> Self {
        value.0
    }
}

macro_rules! clock_field {
    ($name:ident, $int:ty, $max:literal, $what:literal) => {
        #[doc = concat!("A validated ", $what, ", in `0..=", stringify!($max), "`.")]
        #[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name($int);

        impl $name {
            #[doc = concat!("Creates a new `", stringify!($name), "`, rejecting out-of-range values.")]
            pub fn try_new(value: $int) -> CivilResult<Self> {
                if value > $max {
                    reject!(concat!($what, " {} is out of range"), value);
                }
                Ok(Self(value))
            }

            pub(crate) const fn new_unchecked(value: $int) -> Self {
                Self(value)
            }

            /// Returns the field as an integer.
            #[inline]
            #[must_use]
            pub const fn get(self) -> $int {
                self.0
            }
        }

        impl TryFrom<$int> for $name {
            type Error = RangeError;

            fn try_from(value: $int) -> Result<Self, Self::Error> {
                Self::try_new(value)
            }
        }

        impl From<$name> for $int {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

clock_field!(Hour, u8, 23, "hour of day");
clock_field!(Minute, u8, 59, "minute of hour");
clock_field!(Second, u8, 59, "second of minute");
clock_field!(Millisecond, u16, 999, "millisecond of second");

/// Raw date fields used as constructor arguments.
///
/// This is a plain structural record with no hidden state; it is never
/// the validated runtime representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateFields {
    pub year: i32,
    pub month: Month,
    pub day: u8,
}

impl DateFields {
    pub const fn new(year: i32, month: Month, day: u8) -> Self {
        Self { year, month, day }
    }
}

/// Raw time fields used as constructor arguments.
///
/// Like [`DateFields`], a plain record; the default value names midnight.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TimeFields {
    pub hours: u8,
    pub minutes: u8,
    pub seconds: u8,
    pub milliseconds: u16,
}

impl TimeFields {
    pub const fn new(hours: u8, minutes: u8, seconds: u8, milliseconds: u16) -> Self {
        Self {
            hours,
            minutes,
            seconds,
            milliseconds,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Day, Hour, Millisecond, Minute, Second, Year};

    #[test]
    fn year_bounds() {
        assert!(Year::try_new(1).is_ok());
        assert!(Year::try_new(0).is_err());
        assert!(Year::try_new(-45).is_err());
        assert!(Year::try_new(Year::MAX.get()).is_ok());
        assert!(Year::try_new(Year::MAX.get() + 1).is_err());
    }

    #[test]
    fn year_properties() {
        assert!(Year::try_new(2020).unwrap().is_leap());
        assert!(!Year::try_new(1900).unwrap().is_leap());
        assert_eq!(Year::try_new(2020).unwrap().days(), 366);
        assert_eq!(Year::try_new(2019).unwrap().days(), 365);
    }

    #[test]
    fn day_bounds() {
        assert!(Day::try_new(1).is_ok());
        assert!(Day::try_new(31).is_ok());
        assert!(Day::try_new(0).is_err());
        assert!(Day::try_new(32).is_err());
    }

    #[test]
    fn clock_field_bounds() {
        assert!(Hour::try_new(23).is_ok());
        assert!(Hour::try_new(24).is_err());
        assert!(Minute::try_new(59).is_ok());
        assert!(Minute::try_new(60).is_err());
        assert!(Second::try_new(59).is_ok());
        assert!(Second::try_new(60).is_err());
        assert!(Millisecond::try_new(999).is_ok());
        assert!(Millisecond::try_new(1000).is_err());
    }
}
