//! Error types for feiertage.
//!
//! Every fallible operation in the workspace reports a single
//! `thiserror`-derived enum.  Bad regions and holiday identifiers are
//! rejected at the API boundary; the holiday engine itself trusts its
//! (already typed) inputs.

use thiserror::Error;

/// The top-level error type used throughout feiertage.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// The region code is not one of the known German regions.
    #[error("Invalid region: {0}! Must be one of {list}", list = crate::region::Region::code_list())]
    InvalidRegion(String),

    /// The holiday identifier is not one of the known holiday types.
    #[error("invalid holiday type \"{0}\"! Must be one of {list}", list = crate::holiday_type::HolidayType::key_list())]
    InvalidHolidayType(String),

    /// Date-related error (out-of-range fields, unrepresentable days).
    #[error("date error: {0}")]
    Date(String),

    /// Precondition violated.
    #[error("precondition not satisfied: {0}")]
    Precondition(String),
}

/// Shorthand `Result` type used throughout feiertage.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Returns `Err(Error::Precondition(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use ft_core::{ensure, errors::Error};
/// fn positive(x: i32) -> ft_core::errors::Result<i32> {
///     ensure!(x > 0, "x must be positive, got {x}");
///     Ok(x)
/// }
/// assert!(positive(1).is_ok());
/// assert!(positive(-1).is_err());
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Precondition(
                format!($($msg)*)
            ));
        }
    };
}
