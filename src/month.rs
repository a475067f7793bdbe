//! The Gregorian month enumeration and month codes.

use crate::{error::reject, CivilResult, RangeError};
use num_traits::{FromPrimitive, ToPrimitive};
use tinystr::{tinystr, TinyAsciiStr};

/// A month of the Gregorian calendar year.
///
/// Months order in calendar sequence and map bijectively onto the numbers
/// 1 through 12.
///
/// ```rust
/// use civil_rs::Month;
///
/// assert!(Month::January < Month::December);
/// assert_eq!(Month::March.number(), 3);
/// assert_eq!(Month::December.next(), Month::January);
/// ```
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Month {
    January = 1,
    February = 2,
    March = 3,
    April = 4,
    May = 5,
    June = 6,
    July = 7,
    August = 8,
    September = 9,
    October = 10,
    November = 11,
    December = 12,
}

impl Month {
    /// Every month in calendar order.
    pub const ALL: [Month; 12] = [
        Month::January,
        Month::February,
        Month::March,
        Month::April,
        Month::May,
        Month::June,
        Month::July,
        Month::August,
        Month::September,
        Month::October,
        Month::November,
        Month::December,
    ];

    /// The 1-based month number.
    #[inline]
    #[must_use]
    pub const fn number(self) -> u8 {
        self as u8
    }

    /// Returns the month for a 1-based month number.
    pub fn from_number(number: u8) -> CivilResult<Self> {
        if !(1..=12).contains(&number) {
            reject!("month number {number} is out of range");
        }
        Ok(Self::ALL[usize::from(number - 1)])
    }

    /// The English name of the month.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Month::January => "January",
            Month::February => "February",
            Month::March => "March",
            Month::April => "April",
            Month::May => "May",
            Month::June => "June",
            Month::July => "July",
            Month::August => "August",
            Month::September => "September",
            Month::October => "October",
            Month::November => "November",
            Month::December => "December",
        }
    }

    /// The number of days in this month for a leap or common year.
    #[must_use]
    pub const fn length(self, leap_year: bool) -> u8 {
        match self {
            Month::January
            | Month::March
            | Month::May
            | Month::July
            | Month::August
            | Month::October
            | Month::December => 31,
            Month::April | Month::June | Month::September | Month::November => 30,
            Month::February => {
                if leap_year {
                    29
                } else {
                    28
                }
            }
        }
    }

    /// The following month, wrapping December to January.
    #[must_use]
    pub const fn next(self) -> Month {
        match self {
            Month::January => Month::February,
            Month::February => Month::March,
            Month::March => Month::April,
            Month::April => Month::May,
            Month::May => Month::June,
            Month::June => Month::July,
            Month::July => Month::August,
            Month::August => Month::September,
            Month::September => Month::October,
            Month::October => Month::November,
            Month::November => Month::December,
            Month::December => Month::January,
        }
    }

    /// The prior month, wrapping January to December.
    #[must_use]
    pub const fn previous(self) -> Month {
        match self {
            Month::January => Month::December,
            Month::February => Month::January,
            Month::March => Month::February,
            Month::April => Month::March,
            Month::May => Month::April,
            Month::June => Month::May,
            Month::July => Month::June,
            Month::August => Month::July,
            Month::September => Month::August,
            Month::October => Month::September,
            Month::November => Month::October,
            Month::December => Month::November,
        }
    }

    /// The months strictly before this one within the same calendar year.
    #[must_use]
    pub fn preceding(self) -> &'static [Month] {
        &Self::ALL[..usize::from(self.number() - 1)]
    }

    /// The months strictly after this one within the same calendar year.
    #[must_use]
    pub fn following(self) -> &'static [Month] {
        &Self::ALL[usize::from(self.number())..]
    }

    /// The month code for this month, in the `"M01"` through `"M12"`
    /// style.
    #[must_use]
    pub fn code(self) -> MonthCode {
        MonthCode(match self {
            Month::January => tinystr!(4, "M01"),
            Month::February => tinystr!(4, "M02"),
            Month::March => tinystr!(4, "M03"),
            Month::April => tinystr!(4, "M04"),
            Month::May => tinystr!(4, "M05"),
            Month::June => tinystr!(4, "M06"),
            Month::July => tinystr!(4, "M07"),
            Month::August => tinystr!(4, "M08"),
            Month::September => tinystr!(4, "M09"),
            Month::October => tinystr!(4, "M10"),
            Month::November => tinystr!(4, "M11"),
            Month::December => tinystr!(4, "M12"),
        })
    }
}

impl FromPrimitive for Month {
    fn from_i64(n: i64) -> Option<Self> {
        if !(1..=12).contains(&n) {
            return None;
        }
        Some(Self::ALL[n as usize - 1])
    }

    fn from_u64(n: u64) -> Option<Self> {
        if !(1..=12).contains(&n) {
            return None;
        }
        Some(Self::ALL[n as usize - 1])
    }
}

impl ToPrimitive for Month {
    fn to_i64(&self) -> Option<i64> {
        Some(*self as i64)
    }

    fn to_u64(&self) -> Option<u64> {
        Some(*self as u64)
    }
}

/// A month code backed by a [`TinyAsciiStr`].
///
/// Codes are always of the form `"M01"` through `"M12"` and round-trip
/// with [`Month`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthCode(pub(crate) TinyAsciiStr<4>);

impl MonthCode {
    /// The code as a string slice.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Returns the month this code names.
    pub fn month(self) -> CivilResult<Month> {
        Month::ALL
            .iter()
            .copied()
            .find(|month| month.code() == self)
            .ok_or(RangeError)
    }
}

impl From<Month> for MonthCode {
    fn from(month: Month) -> Self {
        month.code()
    }
}

impl TryFrom<&str> for MonthCode {
    type Error = RangeError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        for month in Month::ALL {
            let code = month.code();
            if code.as_str() == value {
                return Ok(code);
            }
        }
        #[cfg(feature = "log")]
        log::debug!("{value:?} is not a valid month code");
        Err(RangeError)
    }
}

#[cfg(test)]
mod tests {
    use super::{Month, MonthCode};
    use num_traits::{FromPrimitive, ToPrimitive};

    #[test]
    fn numbers_are_bijective() {
        for (index, month) in Month::ALL.iter().enumerate() {
            assert_eq!(usize::from(month.number()), index + 1);
            assert_eq!(Month::from_number(month.number()).unwrap(), *month);
        }
        assert!(Month::from_number(0).is_err());
        assert!(Month::from_number(13).is_err());
    }

    #[test]
    fn primitive_conversions() {
        assert_eq!(Month::from_i64(8), Some(Month::August));
        assert_eq!(Month::from_u64(12), Some(Month::December));
        assert_eq!(Month::from_i64(0), None);
        assert_eq!(Month::from_i64(13), None);
        assert_eq!(Month::October.to_i64(), Some(10));
    }

    #[test]
    fn wrapping_steps() {
        assert_eq!(Month::December.next(), Month::January);
        assert_eq!(Month::January.previous(), Month::December);
        assert_eq!(Month::June.next(), Month::July);
        assert_eq!(Month::July.previous(), Month::June);
    }

    #[test]
    fn preceding_and_following_stay_in_year() {
        assert!(Month::January.preceding().is_empty());
        assert!(Month::December.following().is_empty());
        assert_eq!(
            Month::March.preceding(),
            &[Month::January, Month::February]
        );
        assert_eq!(
            Month::October.following(),
            &[Month::November, Month::December]
        );
        assert_eq!(Month::December.preceding().len(), 11);
    }

    #[test]
    fn month_codes_round_trip() {
        for month in Month::ALL {
            assert_eq!(month.code().month().unwrap(), month);
        }
        assert_eq!(Month::September.code().as_str(), "M09");
        assert_eq!(
            MonthCode::try_from("M02").unwrap().month().unwrap(),
            Month::February
        );
        assert!(MonthCode::try_from("M13").is_err());
        assert!(MonthCode::try_from("February").is_err());
    }
}
