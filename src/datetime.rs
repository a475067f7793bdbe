//! The combined calendar date and clock time value.

use alloc::vec::Vec;
use core::cmp::Ordering;

use crate::{
    date::{Date, Weekday},
    epoch::EpochMilliseconds,
    fields::{DateFields, Day, Hour, Millisecond, Minute, Second, TimeFields, Year},
    month::Month,
    time::Time,
    CivilResult,
};

/// A calendar date paired with a clock time.
///
/// Both constituents are independently valid; there is no additional
/// cross-field invariant. The value owns its [`Date`] and [`Time`] by
/// composition, so copying a `DateTime` copies both.
///
/// Clock-level increments and decrements report day rollover, and this
/// type propagates that carry into the date, so stepping the hour of
/// `2018-12-31T23:00` lands on `2019-01-01T00:00`.
///
/// ```rust
/// use civil_rs::{Date, DateTime, Month, Time};
///
/// let launch = DateTime::new(
///     Date::try_new(2020, Month::February, 29).unwrap(),
///     Time::try_new(12, 30, 0, 0).unwrap(),
/// );
/// let ms = launch.to_epoch_ms();
/// assert_eq!(DateTime::from_epoch_ms(ms), launch);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DateTime {
    date: Date,
    time: Time,
}

// ==== Private API ====

impl DateTime {
    /// Applies a clock step, advancing the date when the clock wrapped
    /// past midnight.
    fn roll_forward(&self, step: (Time, bool)) -> CivilResult<Self> {
        let (time, rolled) = step;
        let date = if rolled { self.date.tomorrow()? } else { self.date };
        Ok(Self::new(date, time))
    }

    /// Applies a clock step, retreating the date when the clock wrapped
    /// back past midnight.
    fn roll_backward(&self, step: (Time, bool)) -> CivilResult<Self> {
        let (time, rolled) = step;
        let date = if rolled { self.date.yesterday()? } else { self.date };
        Ok(Self::new(date, time))
    }
}

// ==== Public API ====

impl DateTime {
    /// Pairs an existing date and time; both inputs are already valid, so
    /// no validation is needed.
    #[must_use]
    pub const fn new(date: Date, time: Time) -> Self {
        Self { date, time }
    }

    /// Creates a `DateTime` from raw fields, validating each component
    /// independently and failing if either fails.
    pub fn from_fields(date: DateFields, time: TimeFields) -> CivilResult<Self> {
        Ok(Self::new(Date::from_fields(date)?, Time::from_fields(time)?))
    }

    /// Splits an epoch millisecond value into its calendar date and time
    /// of day.
    pub fn from_epoch_ms(ms: EpochMilliseconds) -> Self {
        Self::new(Date::from_epoch_ms(ms), Time::from_epoch_ms(ms))
    }

    /// Millisecond offset from the epoch to this instant.
    #[must_use]
    pub fn to_epoch_ms(&self) -> EpochMilliseconds {
        EpochMilliseconds::new_unchecked(
            self.date.to_epoch_ms().as_i64() + self.time.millisecond_of_day(),
        )
    }

    /// Returns the date component.
    #[inline]
    #[must_use]
    pub const fn date(&self) -> Date {
        self.date
    }

    /// Returns the time component.
    #[inline]
    #[must_use]
    pub const fn time(&self) -> Time {
        self.time
    }

    /// Returns the date's `year` field.
    #[inline]
    #[must_use]
    pub const fn year(&self) -> Year {
        self.date.year()
    }

    /// Returns the date's `month` field.
    #[inline]
    #[must_use]
    pub const fn month(&self) -> Month {
        self.date.month()
    }

    /// Returns the date's `day` field.
    #[inline]
    #[must_use]
    pub const fn day(&self) -> Day {
        self.date.day()
    }

    /// Returns the time's `hour` field.
    #[inline]
    #[must_use]
    pub const fn hour(&self) -> Hour {
        self.time.hour()
    }

    /// Returns the time's `minute` field.
    #[inline]
    #[must_use]
    pub const fn minute(&self) -> Minute {
        self.time.minute()
    }

    /// Returns the time's `second` field.
    #[inline]
    #[must_use]
    pub const fn second(&self) -> Second {
        self.time.second()
    }

    /// Returns the time's `millisecond` field.
    #[inline]
    #[must_use]
    pub const fn millisecond(&self) -> Millisecond {
        self.time.millisecond()
    }

    /// Replaces the date component, leaving the time untouched.
    #[must_use]
    pub const fn with_date(&self, date: Date) -> Self {
        Self::new(date, self.time)
    }

    /// Replaces the time component, leaving the date untouched.
    #[must_use]
    pub const fn with_time(&self, time: Time) -> Self {
        Self::new(self.date, time)
    }

    /// Replaces the year, rejecting invalid combinations.
    pub fn with_year(&self, year: i32) -> CivilResult<Self> {
        Ok(Self::new(self.date.with_year(year)?, self.time))
    }

    /// Replaces the month, rejecting invalid combinations.
    pub fn with_month(&self, month: Month) -> CivilResult<Self> {
        Ok(Self::new(self.date.with_month(month)?, self.time))
    }

    /// Replaces the day, rejecting values past the end of the month.
    pub fn with_day(&self, day: u8) -> CivilResult<Self> {
        Ok(Self::new(self.date.with_day(day)?, self.time))
    }

    /// Replaces the hour, rejecting out-of-range values.
    pub fn with_hour(&self, hour: u8) -> CivilResult<Self> {
        Ok(Self::new(self.date, self.time.with_hour(hour)?))
    }

    /// Replaces the minute, rejecting out-of-range values.
    pub fn with_minute(&self, minute: u8) -> CivilResult<Self> {
        Ok(Self::new(self.date, self.time.with_minute(minute)?))
    }

    /// Replaces the second, rejecting out-of-range values.
    pub fn with_second(&self, second: u8) -> CivilResult<Self> {
        Ok(Self::new(self.date, self.time.with_second(second)?))
    }

    /// Replaces the millisecond, rejecting out-of-range values.
    pub fn with_millisecond(&self, millisecond: u16) -> CivilResult<Self> {
        Ok(Self::new(self.date, self.time.with_millisecond(millisecond)?))
    }

    /// Steps the date one year forward; the time is unchanged.
    pub fn next_year(&self) -> CivilResult<Self> {
        Ok(Self::new(self.date.next_year()?, self.time))
    }

    /// Steps the date one year backward; the time is unchanged.
    pub fn previous_year(&self) -> CivilResult<Self> {
        Ok(Self::new(self.date.previous_year()?, self.time))
    }

    /// Steps the date one month forward; the time is unchanged.
    pub fn next_month(&self) -> CivilResult<Self> {
        Ok(Self::new(self.date.next_month()?, self.time))
    }

    /// Steps the date one month backward; the time is unchanged.
    pub fn previous_month(&self) -> CivilResult<Self> {
        Ok(Self::new(self.date.previous_month()?, self.time))
    }

    /// Steps the date one day forward; the time is unchanged.
    pub fn tomorrow(&self) -> CivilResult<Self> {
        Ok(Self::new(self.date.tomorrow()?, self.time))
    }

    /// Steps the date one day backward; the time is unchanged.
    pub fn yesterday(&self) -> CivilResult<Self> {
        Ok(Self::new(self.date.yesterday()?, self.time))
    }

    /// Steps the clock one hour forward, advancing the date when the
    /// clock wraps past midnight.
    pub fn next_hour(&self) -> CivilResult<Self> {
        self.roll_forward(self.time.next_hour())
    }

    /// Steps the clock one minute forward, advancing the date on
    /// rollover.
    pub fn next_minute(&self) -> CivilResult<Self> {
        self.roll_forward(self.time.next_minute())
    }

    /// Steps the clock one second forward, advancing the date on
    /// rollover.
    pub fn next_second(&self) -> CivilResult<Self> {
        self.roll_forward(self.time.next_second())
    }

    /// Steps the clock one millisecond forward, advancing the date on
    /// rollover.
    pub fn next_millisecond(&self) -> CivilResult<Self> {
        self.roll_forward(self.time.next_millisecond())
    }

    /// Steps the clock one hour backward, retreating the date when the
    /// clock wraps back past midnight.
    pub fn previous_hour(&self) -> CivilResult<Self> {
        self.roll_backward(self.time.previous_hour())
    }

    /// Steps the clock one minute backward, retreating the date on
    /// rollover.
    pub fn previous_minute(&self) -> CivilResult<Self> {
        self.roll_backward(self.time.previous_minute())
    }

    /// Steps the clock one second backward, retreating the date on
    /// rollover.
    pub fn previous_second(&self) -> CivilResult<Self> {
        self.roll_backward(self.time.previous_second())
    }

    /// Steps the clock one millisecond backward, retreating the date on
    /// rollover.
    pub fn previous_millisecond(&self) -> CivilResult<Self> {
        self.roll_backward(self.time.previous_millisecond())
    }

    /// Compares only the date components.
    #[must_use]
    pub fn compare_date(&self, other: &Self) -> Ordering {
        self.date.cmp(&other.date)
    }

    /// Compares only the time components.
    #[must_use]
    pub fn compare_time(&self, other: &Self) -> Ordering {
        self.time.cmp(&other.time)
    }

    /// The day of week of the date component.
    #[must_use]
    pub fn day_of_week(&self) -> Weekday {
        self.date.day_of_week()
    }

    /// Every date of this value's month, each paired with this value's
    /// time.
    #[must_use]
    pub fn list_month(&self) -> Vec<DateTime> {
        Date::list_month(self.date.year(), self.date.month())
            .into_iter()
            .map(|date| Self::new(date, self.time))
            .collect()
    }

    /// All dates between the two endpoints, ascending and inclusive of
    /// both, each paired with the chronologically earlier endpoint's
    /// time; the argument order does not matter.
    #[must_use]
    pub fn range(a: DateTime, b: DateTime) -> Vec<DateTime> {
        let (start, end) = if a <= b { (a, b) } else { (b, a) };
        Date::range(start.date, end.date)
            .into_iter()
            .map(|date| Self::new(date, start.time))
            .collect()
    }

    /// Sorts values ascending by epoch millisecond; equal values keep
    /// their relative order.
    pub fn sort(values: &mut [DateTime]) {
        values.sort_by_key(|value| value.to_epoch_ms());
    }
}

#[cfg(test)]
mod tests {
    use super::DateTime;
    use crate::{
        date::Date, epoch::EpochMilliseconds, fields::{DateFields, TimeFields}, month::Month,
        time::Time,
    };

    fn datetime(
        year: i32,
        month: Month,
        day: u8,
        hour: u8,
        minute: u8,
        second: u8,
        millisecond: u16,
    ) -> DateTime {
        DateTime::new(
            Date::try_new(year, month, day).unwrap(),
            Time::try_new(hour, minute, second, millisecond).unwrap(),
        )
    }

    #[test]
    fn from_fields_validates_both_components() {
        let date = DateFields::new(2020, Month::February, 29);
        let time = TimeFields::new(23, 59, 59, 999);
        assert!(DateTime::from_fields(date, time).is_ok());

        let bad_date = DateFields::new(2019, Month::February, 29);
        assert!(DateTime::from_fields(bad_date, time).is_err());

        let bad_time = TimeFields::new(24, 0, 0, 0);
        assert!(DateTime::from_fields(date, bad_time).is_err());
    }

    #[test]
    fn epoch_round_trip() {
        let cases = [
            datetime(1970, Month::January, 1, 0, 0, 0, 0),
            datetime(2020, Month::February, 29, 12, 30, 45, 500),
            datetime(1950, Month::August, 26, 0, 0, 0, 0),
            datetime(1969, Month::December, 31, 23, 59, 59, 999),
        ];
        for case in cases {
            assert_eq!(DateTime::from_epoch_ms(case.to_epoch_ms()), case, "{case}");
        }
    }

    #[test]
    fn pre_epoch_split_is_consistent() {
        // One millisecond before the epoch.
        let value = DateTime::from_epoch_ms(EpochMilliseconds::try_from(-1).unwrap());
        assert_eq!(value, datetime(1969, Month::December, 31, 23, 59, 59, 999));
        assert_eq!(value.to_epoch_ms().as_i64(), -1);

        let recovered =
            DateTime::from_epoch_ms(EpochMilliseconds::try_from(-610_675_200_000).unwrap());
        assert_eq!(recovered, datetime(1950, Month::August, 26, 0, 0, 0, 0));
    }

    #[test]
    fn hour_cascade_crosses_the_year_boundary() {
        let evening = datetime(2018, Month::December, 31, 23, 0, 0, 0);
        let next = evening.next_hour().unwrap();
        assert_eq!(next, datetime(2019, Month::January, 1, 0, 0, 0, 0));
        // The date must roll forward exactly once.
        assert_eq!(
            next.to_epoch_ms().as_i64() - evening.to_epoch_ms().as_i64(),
            crate::MS_PER_HOUR
        );
    }

    #[test]
    fn clock_carry_is_never_dropped() {
        let last_moment = datetime(2020, Month::February, 28, 23, 59, 59, 999);
        assert_eq!(
            last_moment.next_millisecond().unwrap(),
            datetime(2020, Month::February, 29, 0, 0, 0, 0)
        );

        let first_moment = datetime(2019, Month::January, 1, 0, 0, 0, 0);
        assert_eq!(
            first_moment.previous_millisecond().unwrap(),
            datetime(2018, Month::December, 31, 23, 59, 59, 999)
        );
        assert_eq!(
            first_moment.previous_hour().unwrap(),
            datetime(2018, Month::December, 31, 23, 0, 0, 0)
        );

        // No rollover leaves the date untouched.
        let noon = datetime(2020, Month::June, 15, 12, 0, 0, 0);
        assert_eq!(
            noon.next_minute().unwrap(),
            datetime(2020, Month::June, 15, 12, 1, 0, 0)
        );
    }

    #[test]
    fn date_steps_leave_the_time_unchanged() {
        let value = datetime(2020, Month::February, 29, 8, 15, 0, 250);
        assert_eq!(
            value.next_year().unwrap(),
            datetime(2021, Month::February, 28, 8, 15, 0, 250)
        );
        assert_eq!(
            value.next_month().unwrap(),
            datetime(2020, Month::March, 29, 8, 15, 0, 250)
        );
        assert_eq!(
            value.tomorrow().unwrap(),
            datetime(2020, Month::March, 1, 8, 15, 0, 250)
        );
        assert_eq!(
            value.yesterday().unwrap(),
            datetime(2020, Month::February, 28, 8, 15, 0, 250)
        );
    }

    #[test]
    fn setters_replace_one_component_only() {
        let value = datetime(2020, Month::February, 29, 8, 15, 30, 250);
        assert_eq!(
            value.with_hour(0).unwrap(),
            datetime(2020, Month::February, 29, 0, 15, 30, 250)
        );
        assert_eq!(
            value.with_minute(45).unwrap(),
            datetime(2020, Month::February, 29, 8, 45, 30, 250)
        );
        assert_eq!(
            value.with_second(0).unwrap(),
            datetime(2020, Month::February, 29, 8, 15, 0, 250)
        );
        assert_eq!(
            value.with_millisecond(999).unwrap(),
            datetime(2020, Month::February, 29, 8, 15, 30, 999)
        );
        assert_eq!(
            value.with_day(1).unwrap(),
            datetime(2020, Month::February, 1, 8, 15, 30, 250)
        );
        assert!(value.with_year(2021).is_err());
        assert!(value.with_minute(60).is_err());
    }

    #[test]
    fn comparison_is_date_major() {
        let earlier = datetime(2019, Month::December, 31, 23, 59, 59, 999);
        let later = datetime(2020, Month::January, 1, 0, 0, 0, 0);
        assert!(earlier < later);

        let morning = datetime(2020, Month::January, 1, 9, 0, 0, 0);
        let evening = datetime(2020, Month::January, 1, 21, 0, 0, 0);
        assert!(morning < evening);
        assert_eq!(
            morning.compare_date(&evening),
            core::cmp::Ordering::Equal
        );
        assert_eq!(morning.compare_time(&evening), core::cmp::Ordering::Less);
        assert_eq!(
            earlier.compare_time(&later),
            core::cmp::Ordering::Greater
        );
    }

    #[test]
    fn list_month_preserves_the_time() {
        let value = datetime(2020, Month::February, 14, 9, 30, 0, 0);
        let listed = value.list_month();
        assert_eq!(listed.len(), 29);
        assert_eq!(listed[0], datetime(2020, Month::February, 1, 9, 30, 0, 0));
        assert_eq!(listed[28], datetime(2020, Month::February, 29, 9, 30, 0, 0));
    }

    #[test]
    fn range_attaches_the_earlier_endpoint_time() {
        let a = datetime(2020, Month::February, 25, 6, 0, 0, 0);
        let b = datetime(2020, Month::March, 2, 18, 0, 0, 0);

        let forward = DateTime::range(a, b);
        let backward = DateTime::range(b, a);
        assert_eq!(forward, backward);
        assert_eq!(forward.len(), 7);
        assert_eq!(forward[0], a);
        assert_eq!(
            forward[6],
            datetime(2020, Month::March, 2, 6, 0, 0, 0)
        );
    }

    #[test]
    fn sort_orders_by_instant() {
        let mut values = [
            datetime(2020, Month::December, 25, 0, 0, 0, 0),
            datetime(1970, Month::January, 1, 12, 0, 0, 0),
            datetime(1970, Month::January, 1, 0, 0, 0, 1),
            datetime(1920, Month::August, 26, 23, 0, 0, 0),
        ];
        DateTime::sort(&mut values);
        assert_eq!(
            values,
            [
                datetime(1920, Month::August, 26, 23, 0, 0, 0),
                datetime(1970, Month::January, 1, 0, 0, 0, 1),
                datetime(1970, Month::January, 1, 12, 0, 0, 0),
                datetime(2020, Month::December, 25, 0, 0, 0, 0),
            ]
        );
    }
}
