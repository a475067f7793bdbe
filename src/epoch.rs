//! The validated epoch-millisecond interchange type.

use crate::{error::reject, CivilResult, MS_PER_DAY};

/// A signed millisecond offset from 1970-01-01T00:00:00.000.
///
/// This is the universal interchange format of the library: every
/// [`Date`](crate::Date), [`Time`](crate::Time), and
/// [`DateTime`](crate::DateTime) converts to and from it, and no time zone
/// offset is ever applied: calendar and clock fields are derived as if
/// the millisecond count were already in the desired reference frame.
///
/// The valid range runs from 0001-01-01T00:00:00.000 through
/// 275759-12-31T23:59:59.999, so that every supported instant stays within
/// 100,000,000 days of the epoch. Within that range the mapping to a
/// `DateTime` is total: every value names exactly one calendar date and
/// clock time.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EpochMilliseconds(pub(crate) i64);

impl EpochMilliseconds {
    /// 0001-01-01T00:00:00.000
    pub const MIN: Self = Self(-62_135_596_800_000);
    /// 275759-12-31T23:59:59.999
    pub const MAX: Self = Self(8_639_977_881_599_999);

    pub(crate) const fn new_unchecked(ms: i64) -> Self {
        Self(ms)
    }

    /// Returns the raw millisecond count.
    #[inline]
    #[must_use]
    pub const fn as_i64(self) -> i64 {
        self.0
    }

    /// Offsets this value by a millisecond delta, rejecting results
    /// outside the supported range.
    pub fn checked_add(self, ms: i64) -> CivilResult<Self> {
        match self.0.checked_add(ms) {
            Some(value) => Self::try_from(value),
            None => Err(crate::RangeError),
        }
    }

    /// The epoch day number containing this instant (floor division, so
    /// pre-epoch instants belong to the earlier day).
    #[inline]
    pub(crate) const fn epoch_day(self) -> i64 {
        self.0.div_euclid(MS_PER_DAY)
    }

    /// The millisecond of day for this instant, always in
    /// `0..MS_PER_DAY`.
    #[inline]
    pub(crate) const fn millisecond_of_day(self) -> i64 {
        self.0.rem_euclid(MS_PER_DAY)
    }
}

impl TryFrom<i64> for EpochMilliseconds {
    type Error = crate::RangeError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        if !(Self::MIN.0..=Self::MAX.0).contains(&value) {
            reject!("epoch millisecond value {value} is out of the supported range");
        }
        Ok(Self(value))
    }
}

impl From<EpochMilliseconds> for i64 {
    fn from(value: EpochMilliseconds) -> Self {
        value.0
    }
}
