//! Options controlling fallible construction behavior.

/// Overflow behavior for a day field that exceeds the length of its
/// target month.
///
/// Year and month increments clamp (a January 31st stepped into February
/// becomes February 28th or 29th), while plain field construction
/// rejects; both routes share one constructor parameterized by this
/// option.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Overflow {
    /// Clamp the day into the valid range for the year and month.
    #[default]
    Constrain,
    /// Reject any field outside its valid range.
    Reject,
}
