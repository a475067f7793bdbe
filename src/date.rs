//! The Gregorian calendar date value and its arithmetic.

use alloc::vec::Vec;

use crate::{
    epoch::EpochMilliseconds,
    error::reject,
    fields::{DateFields, Day, Year},
    month::Month,
    options::Overflow,
    utils, CivilResult, MS_PER_DAY,
};

/// A Gregorian calendar date.
///
/// Every live `Date` satisfies `1 <= day <= days_in_month(year, month)`;
/// the public surface offers no way to construct an out-of-range value.
/// Dates are pure values: setters and increment/decrement operations
/// always produce a new `Date`.
///
/// Year and month steps clamp the day into the target month, while day
/// steps go through epoch-millisecond arithmetic: a one-day move always
/// lands on a valid calendar date, whereas a year or month move can
/// overflow the day field and must use the explicit clamping path.
///
/// ```rust
/// use civil_rs::{Date, Month};
///
/// let date = Date::try_new(2019, Month::January, 31).unwrap();
/// assert_eq!(
///     date.next_month().unwrap(),
///     Date::try_new(2019, Month::February, 28).unwrap()
/// );
/// assert_eq!(
///     date.tomorrow().unwrap(),
///     Date::try_new(2019, Month::February, 1).unwrap()
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date {
    year: Year,
    month: Month,
    day: Day,
}

// ==== Private API ====

impl Date {
    pub(crate) const fn new_unchecked(year: Year, month: Month, day: Day) -> Self {
        Self { year, month, day }
    }
}

// ==== Public API ====

impl Date {
    /// Creates a new `Date`, clamping the day into the month.
    ///
    /// ```rust
    /// use civil_rs::{Date, Month};
    ///
    /// let date = Date::new(2019, Month::February, 31).unwrap();
    /// assert_eq!(date.day().get(), 28);
    /// ```
    pub fn new(year: i32, month: Month, day: u8) -> CivilResult<Self> {
        Self::new_with_overflow(year, month, day, Overflow::Constrain)
    }

    /// Creates a new `Date`, rejecting any field outside its valid range.
    ///
    /// ```rust
    /// use civil_rs::{Date, Month};
    ///
    /// assert!(Date::try_new(2020, Month::February, 29).is_ok());
    /// assert!(Date::try_new(2019, Month::February, 29).is_err());
    /// ```
    pub fn try_new(year: i32, month: Month, day: u8) -> CivilResult<Self> {
        Self::new_with_overflow(year, month, day, Overflow::Reject)
    }

    /// Creates a new `Date` with the provided [`Overflow`] behavior.
    ///
    /// The year is validated under either behavior; only the day field is
    /// subject to constraining.
    pub fn new_with_overflow(
        year: i32,
        month: Month,
        day: u8,
        overflow: Overflow,
    ) -> CivilResult<Self> {
        let year = Year::try_new(year)?;
        let last = utils::days_in_month(year.get(), month);
        let day = match overflow {
            Overflow::Constrain => day.clamp(1, last),
            Overflow::Reject => {
                if day < 1 || day > last {
                    reject!(
                        "day {day} is out of range for {} {}",
                        month.name(),
                        year.get()
                    );
                }
                day
            }
        };

        Ok(Self::new_unchecked(year, month, Day::new_unchecked(day)))
    }

    /// Creates a `Date` from raw fields, rejecting invalid combinations.
    pub fn from_fields(fields: DateFields) -> CivilResult<Self> {
        Self::try_new(fields.year, fields.month, fields.day)
    }

    /// The calendar date containing the given instant, truncating time of
    /// day: any two instants within the same day yield the same `Date`.
    pub fn from_epoch_ms(ms: EpochMilliseconds) -> Self {
        let year = utils::epoch_ms_to_year(ms.as_i64());
        let (month, day) = utils::epoch_ms_to_month_day(ms.as_i64());
        Self::new_unchecked(Year::new_unchecked(year), month, Day::new_unchecked(day))
    }

    /// Millisecond offset from the epoch to this date's midnight.
    ///
    /// The value is the sum of three independently computed offsets: the
    /// start of the year, the start of the month within the year, and the
    /// elapsed days within the month. Pre-epoch years produce negative
    /// offsets.
    #[must_use]
    pub fn to_epoch_ms(&self) -> EpochMilliseconds {
        let year_ms = utils::epoch_ms_for_year(self.year.get());
        let month_ms = utils::epoch_ms_for_month_in_year(self.month, self.year.get());
        let day_ms = i64::from(self.day.get() - 1) * MS_PER_DAY;
        EpochMilliseconds::new_unchecked(year_ms + month_ms + day_ms)
    }

    /// The raw fields of this date.
    #[must_use]
    pub const fn fields(&self) -> DateFields {
        DateFields::new(self.year.get(), self.month, self.day.get())
    }

    /// Returns the internal `year` field.
    #[inline]
    #[must_use]
    pub const fn year(&self) -> Year {
        self.year
    }

    /// Returns the internal `month` field.
    #[inline]
    #[must_use]
    pub const fn month(&self) -> Month {
        self.month
    }

    /// Returns the internal `day` field.
    #[inline]
    #[must_use]
    pub const fn day(&self) -> Day {
        self.day
    }

    /// The number of days in this date's month.
    #[must_use]
    pub fn days_in_month(&self) -> u8 {
        utils::days_in_month(self.year.get(), self.month)
    }

    /// The number of days in this date's year.
    #[must_use]
    pub fn days_in_year(&self) -> u16 {
        self.year.days()
    }

    /// Returns whether this date falls in a leap year.
    #[must_use]
    pub fn in_leap_year(&self) -> bool {
        self.year.is_leap()
    }

    /// Replaces the year, rejecting combinations where the current day
    /// does not exist in the target year.
    pub fn with_year(&self, year: i32) -> CivilResult<Self> {
        Self::try_new(year, self.month, self.day.get())
    }

    /// Replaces the month, rejecting combinations where the current day
    /// does not exist in the target month.
    pub fn with_month(&self, month: Month) -> CivilResult<Self> {
        Self::try_new(self.year.get(), month, self.day.get())
    }

    /// Replaces the day, rejecting values past the end of the month.
    pub fn with_day(&self, day: u8) -> CivilResult<Self> {
        Self::try_new(self.year.get(), self.month, day)
    }

    /// The same date one year later, clamping a leap day down to
    /// February 28th when the target year is shorter.
    ///
    /// Fails only when the year leaves the supported range.
    pub fn next_year(&self) -> CivilResult<Self> {
        Self::new_with_overflow(
            self.year.get() + 1,
            self.month,
            self.day.get(),
            Overflow::Constrain,
        )
    }

    /// The same date one year earlier, with the same clamping rule as
    /// [`Date::next_year`].
    pub fn previous_year(&self) -> CivilResult<Self> {
        Self::new_with_overflow(
            self.year.get() - 1,
            self.month,
            self.day.get(),
            Overflow::Constrain,
        )
    }

    /// The same day one month later; December rolls into January of the
    /// next year, and the day clamps into the target month.
    pub fn next_month(&self) -> CivilResult<Self> {
        let month = self.month.next();
        let year = if month == Month::January {
            self.year.get() + 1
        } else {
            self.year.get()
        };
        Self::new_with_overflow(year, month, self.day.get(), Overflow::Constrain)
    }

    /// The same day one month earlier; January rolls into December of the
    /// prior year, and the day clamps into the target month.
    pub fn previous_month(&self) -> CivilResult<Self> {
        let month = self.month.previous();
        let year = if month == Month::December {
            self.year.get() - 1
        } else {
            self.year.get()
        };
        Self::new_with_overflow(year, month, self.day.get(), Overflow::Constrain)
    }

    /// The next calendar day.
    ///
    /// Implemented as a whole-day epoch-millisecond step; a one-day move
    /// never needs clamping.
    pub fn tomorrow(&self) -> CivilResult<Self> {
        let ms = self.to_epoch_ms().checked_add(MS_PER_DAY)?;
        Ok(Self::from_epoch_ms(ms))
    }

    /// The prior calendar day.
    pub fn yesterday(&self) -> CivilResult<Self> {
        let ms = self.to_epoch_ms().checked_add(-MS_PER_DAY)?;
        Ok(Self::from_epoch_ms(ms))
    }

    /// The day of week this date falls on.
    #[must_use]
    pub fn day_of_week(&self) -> Weekday {
        Weekday::from_epoch_day(self.to_epoch_ms().epoch_day())
    }

    /// Every date of the given month, ascending from the 1st through the
    /// last day.
    #[must_use]
    pub fn list_month(year: Year, month: Month) -> Vec<Date> {
        let last = utils::days_in_month(year.get(), month);
        (1..=last)
            .map(|day| Self::new_unchecked(year, month, Day::new_unchecked(day)))
            .collect()
    }

    /// All dates between the two endpoints, ascending and inclusive of
    /// both; the argument order does not matter.
    #[must_use]
    pub fn range(a: Date, b: Date) -> Vec<Date> {
        let (start, end) = if a <= b { (a, b) } else { (b, a) };
        let days = start.days_until(&end);
        let start_ms = start.to_epoch_ms().as_i64();
        (0..=days)
            .map(|offset| {
                Self::from_epoch_ms(EpochMilliseconds::new_unchecked(
                    start_ms + offset * MS_PER_DAY,
                ))
            })
            .collect()
    }

    /// Whole days from `self` to `other`; negative when `other` is
    /// earlier.
    #[must_use]
    pub fn days_until(&self, other: &Date) -> i64 {
        (other.to_epoch_ms().as_i64() - self.to_epoch_ms().as_i64()) / MS_PER_DAY
    }

    /// Sorts dates ascending by epoch millisecond; equal dates keep
    /// their relative order.
    pub fn sort(dates: &mut [Date]) {
        dates.sort_by_key(|date| date.to_epoch_ms());
    }
}

/// A day of the week, numbered Monday = 1 through Sunday = 7.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Weekday {
    Monday = 1,
    Tuesday = 2,
    Wednesday = 3,
    Thursday = 4,
    Friday = 5,
    Saturday = 6,
    Sunday = 7,
}

impl Weekday {
    /// Every weekday, Monday first.
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    /// The 1-based weekday number, Monday = 1.
    #[inline]
    #[must_use]
    pub const fn number(self) -> u8 {
        self as u8
    }

    /// The English name of the weekday.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
            Weekday::Sunday => "Sunday",
        }
    }

    // 1970-01-01, epoch day zero, was a Thursday.
    pub(crate) fn from_epoch_day(day: i64) -> Self {
        Self::ALL[(day + 3).rem_euclid(7) as usize]
    }
}
