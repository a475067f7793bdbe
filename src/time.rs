//! The 24-hour clock time value and its arithmetic.

use crate::{
    epoch::EpochMilliseconds,
    fields::{Hour, Millisecond, Minute, Second, TimeFields},
    CivilResult, MS_PER_HOUR, MS_PER_MINUTE, MS_PER_SECOND,
};

/// A 24-hour clock time with millisecond precision.
///
/// All field-valid combinations are valid times; there is no cross-field
/// invariant. Increment and decrement operations cascade carries toward
/// the hour and report day rollover to the caller, which keeps this type
/// free of any calendar dependency.
///
/// ```rust
/// use civil_rs::Time;
///
/// let almost_midnight = Time::try_new(23, 59, 59, 999).unwrap();
/// let (time, rolled) = almost_midnight.next_millisecond();
/// assert_eq!(time, Time::MIDNIGHT);
/// assert!(rolled);
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Time {
    hour: Hour,
    minute: Minute,
    second: Second,
    millisecond: Millisecond,
}

// ==== Private API ====

impl Time {
    pub(crate) const fn new_unchecked(
        hour: Hour,
        minute: Minute,
        second: Second,
        millisecond: Millisecond,
    ) -> Self {
        Self {
            hour,
            minute,
            second,
            millisecond,
        }
    }

    /// Balances raw field counts into a `Time` plus a whole-day carry.
    ///
    /// The carry is negative when the fields underflowed past midnight.
    pub(crate) fn balance(hour: i64, minute: i64, second: i64, millisecond: i64) -> (i64, Self) {
        let (carry, millisecond) = div_mod(millisecond, 1000);
        let second = second + carry;

        let (carry, second) = div_mod(second, 60);
        let minute = minute + carry;

        let (carry, minute) = div_mod(minute, 60);
        let hour = hour + carry;

        let (days, hour) = div_mod(hour, 24);

        let time = Self::new_unchecked(
            Hour::new_unchecked(hour as u8),
            Minute::new_unchecked(minute as u8),
            Second::new_unchecked(second as u8),
            Millisecond::new_unchecked(millisecond as u16),
        );

        (days, time)
    }
}

// ==== Public API ====

impl Time {
    /// The time at the start of the day, with every field zero.
    pub const MIDNIGHT: Self = Self::new_unchecked(
        Hour::new_unchecked(0),
        Minute::new_unchecked(0),
        Second::new_unchecked(0),
        Millisecond::new_unchecked(0),
    );

    /// Creates a new `Time`, rejecting any field outside its valid range.
    ///
    /// Validation is all-or-nothing: no partially valid value is ever
    /// produced.
    ///
    /// ```rust
    /// use civil_rs::Time;
    ///
    /// assert!(Time::try_new(23, 59, 59, 999).is_ok());
    /// assert!(Time::try_new(24, 0, 0, 0).is_err());
    /// ```
    pub fn try_new(hour: u8, minute: u8, second: u8, millisecond: u16) -> CivilResult<Self> {
        Ok(Self::new_unchecked(
            Hour::try_new(hour)?,
            Minute::try_new(minute)?,
            Second::try_new(second)?,
            Millisecond::try_new(millisecond)?,
        ))
    }

    /// Creates a `Time` from raw fields, rejecting invalid combinations.
    pub fn from_fields(fields: TimeFields) -> CivilResult<Self> {
        Self::try_new(
            fields.hours,
            fields.minutes,
            fields.seconds,
            fields.milliseconds,
        )
    }

    /// Extracts the time of day from an epoch millisecond value.
    ///
    /// Only the `ms mod MS_PER_DAY` portion is consumed, so pre-epoch
    /// values decompose consistently with their calendar date.
    pub fn from_epoch_ms(ms: EpochMilliseconds) -> Self {
        let ms = ms.millisecond_of_day();
        Self::new_unchecked(
            Hour::new_unchecked((ms / MS_PER_HOUR) as u8),
            Minute::new_unchecked(((ms / MS_PER_MINUTE) % 60) as u8),
            Second::new_unchecked(((ms / MS_PER_SECOND) % 60) as u8),
            Millisecond::new_unchecked((ms % 1000) as u16),
        )
    }

    /// The raw fields of this time.
    #[must_use]
    pub const fn fields(&self) -> TimeFields {
        TimeFields::new(
            self.hour.get(),
            self.minute.get(),
            self.second.get(),
            self.millisecond.get(),
        )
    }

    /// The millisecond of day, in `0..MS_PER_DAY`.
    #[must_use]
    pub fn millisecond_of_day(&self) -> i64 {
        i64::from(self.hour.get()) * MS_PER_HOUR
            + i64::from(self.minute.get()) * MS_PER_MINUTE
            + i64::from(self.second.get()) * MS_PER_SECOND
            + i64::from(self.millisecond.get())
    }

    /// Returns the internal `hour` field.
    #[inline]
    #[must_use]
    pub const fn hour(&self) -> Hour {
        self.hour
    }

    /// Returns the internal `minute` field.
    #[inline]
    #[must_use]
    pub const fn minute(&self) -> Minute {
        self.minute
    }

    /// Returns the internal `second` field.
    #[inline]
    #[must_use]
    pub const fn second(&self) -> Second {
        self.second
    }

    /// Returns the internal `millisecond` field.
    #[inline]
    #[must_use]
    pub const fn millisecond(&self) -> Millisecond {
        self.millisecond
    }

    /// Replaces the hour, rejecting out-of-range values.
    pub fn with_hour(&self, hour: u8) -> CivilResult<Self> {
        Ok(Self {
            hour: Hour::try_new(hour)?,
            ..*self
        })
    }

    /// Replaces the minute, rejecting out-of-range values.
    pub fn with_minute(&self, minute: u8) -> CivilResult<Self> {
        Ok(Self {
            minute: Minute::try_new(minute)?,
            ..*self
        })
    }

    /// Replaces the second, rejecting out-of-range values.
    pub fn with_second(&self, second: u8) -> CivilResult<Self> {
        Ok(Self {
            second: Second::try_new(second)?,
            ..*self
        })
    }

    /// Replaces the millisecond, rejecting out-of-range values.
    pub fn with_millisecond(&self, millisecond: u16) -> CivilResult<Self> {
        Ok(Self {
            millisecond: Millisecond::try_new(millisecond)?,
            ..*self
        })
    }

    /// The time one hour later, plus a flag that is true when the clock
    /// wrapped past midnight into the next day.
    #[must_use]
    pub fn next_hour(&self) -> (Self, bool) {
        let (days, time) = Self::balance(
            i64::from(self.hour.get()) + 1,
            self.minute.get().into(),
            self.second.get().into(),
            self.millisecond.get().into(),
        );
        (time, days != 0)
    }

    /// The time one minute later; overflow carries into the hour.
    #[must_use]
    pub fn next_minute(&self) -> (Self, bool) {
        let (days, time) = Self::balance(
            self.hour.get().into(),
            i64::from(self.minute.get()) + 1,
            self.second.get().into(),
            self.millisecond.get().into(),
        );
        (time, days != 0)
    }

    /// The time one second later; overflow carries into the minute.
    #[must_use]
    pub fn next_second(&self) -> (Self, bool) {
        let (days, time) = Self::balance(
            self.hour.get().into(),
            self.minute.get().into(),
            i64::from(self.second.get()) + 1,
            self.millisecond.get().into(),
        );
        (time, days != 0)
    }

    /// The time one millisecond later; overflow carries into the second.
    #[must_use]
    pub fn next_millisecond(&self) -> (Self, bool) {
        let (days, time) = Self::balance(
            self.hour.get().into(),
            self.minute.get().into(),
            self.second.get().into(),
            i64::from(self.millisecond.get()) + 1,
        );
        (time, days != 0)
    }

    /// The time one hour earlier, plus a flag that is true when the clock
    /// wrapped back past midnight into the prior day.
    #[must_use]
    pub fn previous_hour(&self) -> (Self, bool) {
        let (days, time) = Self::balance(
            i64::from(self.hour.get()) - 1,
            self.minute.get().into(),
            self.second.get().into(),
            self.millisecond.get().into(),
        );
        (time, days != 0)
    }

    /// The time one minute earlier; underflow borrows from the hour.
    #[must_use]
    pub fn previous_minute(&self) -> (Self, bool) {
        let (days, time) = Self::balance(
            self.hour.get().into(),
            i64::from(self.minute.get()) - 1,
            self.second.get().into(),
            self.millisecond.get().into(),
        );
        (time, days != 0)
    }

    /// The time one second earlier; underflow borrows from the minute.
    #[must_use]
    pub fn previous_second(&self) -> (Self, bool) {
        let (days, time) = Self::balance(
            self.hour.get().into(),
            self.minute.get().into(),
            i64::from(self.second.get()) - 1,
            self.millisecond.get().into(),
        );
        (time, days != 0)
    }

    /// The time one millisecond earlier; underflow borrows from the
    /// second.
    #[must_use]
    pub fn previous_millisecond(&self) -> (Self, bool) {
        let (days, time) = Self::balance(
            self.hour.get().into(),
            self.minute.get().into(),
            self.second.get().into(),
            i64::from(self.millisecond.get()) - 1,
        );
        (time, days != 0)
    }

    /// Sorts times ascending by millisecond of day; equal times keep
    /// their relative order.
    pub fn sort(times: &mut [Time]) {
        times.sort_by_key(|time| time.millisecond_of_day());
    }
}

#[inline]
fn div_mod(dividend: i64, divisor: i64) -> (i64, i64) {
    (dividend.div_euclid(divisor), dividend.rem_euclid(divisor))
}

#[cfg(test)]
mod tests {
    use super::Time;
    use crate::epoch::EpochMilliseconds;

    fn assert_time(result: Time, values: (u8, u8, u8, u16)) {
        assert_eq!(
            result,
            Time::try_new(values.0, values.1, values.2, values.3).unwrap()
        );
    }

    #[test]
    fn validation_is_all_or_nothing() {
        assert!(Time::try_new(23, 59, 59, 999).is_ok());
        assert!(Time::try_new(24, 0, 0, 0).is_err());
        assert!(Time::try_new(0, 60, 0, 0).is_err());
        assert!(Time::try_new(0, 0, 60, 0).is_err());
        assert!(Time::try_new(0, 0, 0, 1000).is_err());
    }

    #[test]
    fn millisecond_of_day_round_trip() {
        let time = Time::try_new(12, 34, 56, 789).unwrap();
        assert_eq!(time.millisecond_of_day(), 45_296_789);

        let ms = EpochMilliseconds::try_from(time.millisecond_of_day()).unwrap();
        assert_eq!(Time::from_epoch_ms(ms), time);
    }

    #[test]
    fn from_epoch_ms_ignores_the_date() {
        // 2020-02-29T12:00:00.000 and 1950-08-26T12:00:00.000
        let noon_2020 = EpochMilliseconds::try_from(1_582_934_400_000 + 43_200_000).unwrap();
        let noon_1950 = EpochMilliseconds::try_from(-610_675_200_000 + 43_200_000).unwrap();
        assert_time(Time::from_epoch_ms(noon_2020), (12, 0, 0, 0));
        assert_time(Time::from_epoch_ms(noon_1950), (12, 0, 0, 0));
    }

    #[test]
    fn pre_epoch_extraction() {
        // One millisecond before the epoch.
        let ms = EpochMilliseconds::try_from(-1).unwrap();
        assert_time(Time::from_epoch_ms(ms), (23, 59, 59, 999));
    }

    #[test]
    fn increments_cascade_toward_the_hour() {
        let (time, rolled) = Time::try_new(10, 59, 59, 999).unwrap().next_millisecond();
        assert_time(time, (11, 0, 0, 0));
        assert!(!rolled);

        let (time, rolled) = Time::try_new(10, 59, 0, 0).unwrap().next_minute();
        assert_time(time, (11, 0, 0, 0));
        assert!(!rolled);

        let (time, rolled) = Time::try_new(10, 0, 59, 0).unwrap().next_second();
        assert_time(time, (10, 1, 0, 0));
        assert!(!rolled);
    }

    #[test]
    fn day_rollover_flags() {
        let (time, rolled) = Time::try_new(23, 59, 59, 999).unwrap().next_millisecond();
        assert_eq!(time, Time::MIDNIGHT);
        assert!(rolled);

        let (time, rolled) = Time::try_new(23, 0, 0, 0).unwrap().next_hour();
        assert_eq!(time, Time::MIDNIGHT);
        assert!(rolled);

        let (time, rolled) = Time::try_new(23, 59, 0, 500).unwrap().next_minute();
        assert_time(time, (0, 0, 0, 500));
        assert!(rolled);

        let (_, rolled) = Time::try_new(12, 0, 0, 0).unwrap().next_hour();
        assert!(!rolled);
    }

    #[test]
    fn decrements_borrow_toward_the_hour() {
        let (time, rolled) = Time::try_new(11, 0, 0, 0).unwrap().previous_millisecond();
        assert_time(time, (10, 59, 59, 999));
        assert!(!rolled);

        let (time, rolled) = Time::try_new(11, 0, 30, 0).unwrap().previous_minute();
        assert_time(time, (10, 59, 30, 0));
        assert!(!rolled);
    }

    #[test]
    fn backward_day_rollover_flags() {
        let (time, rolled) = Time::MIDNIGHT.previous_millisecond();
        assert_time(time, (23, 59, 59, 999));
        assert!(rolled);

        let (time, rolled) = Time::try_new(0, 30, 0, 0).unwrap().previous_hour();
        assert_time(time, (23, 30, 0, 0));
        assert!(rolled);

        let (_, rolled) = Time::try_new(12, 0, 0, 0).unwrap().previous_second();
        assert!(!rolled);
    }

    #[test]
    fn ordering_is_lexicographic() {
        let earlier = Time::try_new(9, 30, 0, 999).unwrap();
        let later = Time::try_new(10, 0, 0, 0).unwrap();
        assert!(earlier < later);
        assert!(Time::try_new(10, 0, 0, 1).unwrap() > later);
        assert_eq!(later.cmp(&later), core::cmp::Ordering::Equal);
    }

    #[test]
    fn sort_orders_by_millisecond_of_day() {
        let mut times = [
            Time::try_new(23, 59, 59, 999).unwrap(),
            Time::MIDNIGHT,
            Time::try_new(12, 0, 0, 0).unwrap(),
        ];
        Time::sort(&mut times);
        assert_eq!(
            times,
            [
                Time::MIDNIGHT,
                Time::try_new(12, 0, 0, 0).unwrap(),
                Time::try_new(23, 59, 59, 999).unwrap(),
            ]
        );
    }

    #[test]
    fn setters_replace_one_field() {
        let time = Time::try_new(10, 20, 30, 400).unwrap();
        assert_time(time.with_hour(5).unwrap(), (5, 20, 30, 400));
        assert_time(time.with_minute(0).unwrap(), (10, 0, 30, 400));
        assert_time(time.with_second(59).unwrap(), (10, 20, 59, 400));
        assert_time(time.with_millisecond(0).unwrap(), (10, 20, 30, 0));
        assert!(time.with_hour(24).is_err());
        assert!(time.with_minute(60).is_err());
    }
}
