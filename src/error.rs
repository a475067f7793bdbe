//! The error type for field validation failures.

use core::fmt;

/// The error produced when date or time fields fail validation.
///
/// Exactly one failure mode exists in this library: a field value outside
/// its valid range, or a field combination (such as a day past the end of
/// its month) that names no calendar value. The error deliberately carries
/// no payload: an invalid combination is an expected outcome, and callers
/// only need to know that no value exists for the requested fields.
///
/// With the `log` feature enabled, rejection sites emit a debug-level
/// record describing the offending field.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RangeError;

impl fmt::Display for RangeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("invalid date or time field combination")
    }
}

impl core::error::Error for RangeError {}

/// Rejects the surrounding fallible operation, logging the reason when the
/// `log` feature is active.
macro_rules! reject {
    ($($args:tt)+) => {{
        #[cfg(feature = "log")]
        log::debug!($($args)+);
        return Err($crate::error::RangeError);
    }};
}

pub(crate) use reject;
