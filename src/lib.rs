//! The `human_duration` crate turns signed nanosecond spans into human
//! readable text and rounds them by unit steps.
//!
//! ```rust
//! use human_duration::{Duration, Unit};
//!
//! let span = Duration::from_nanoseconds(7_999_999_999_999_999_999);
//! assert_eq!(
//!     span.to_string(),
//!     "253 years 35 weeks 2 days 14 hours 13 minutes 19 seconds 999 milliseconds 999999 nanoseconds"
//! );
//!
//! // A span equal to one of the unit constants is displayed as the unit name.
//! assert_eq!(Duration::from(Unit::Week).to_string(), "week");
//!
//! // Rounding always moves away from zero by one step of the granularity.
//! let rounded = Duration::from_nanoseconds(-123_456_789_123).round(Duration::MINUTE);
//! assert_eq!(rounded.as_nanoseconds(), -186_913_578_246);
//! ```
//!
//! The units are fixed magnitudes. A year is exactly 365 days and there
//! is no month unit, since a month does not have a fixed length.
#![no_std]
#![cfg_attr(not(test), forbid(clippy::unwrap_used))]
#![allow(
    clippy::module_name_repetitions,
    clippy::redundant_pub_crate,
    clippy::missing_errors_doc,
    clippy::cast_sign_loss,
    clippy::cast_possible_wrap,
)]

extern crate alloc;
extern crate core;

pub mod error;
pub mod unit;

mod duration;

#[doc(hidden)]
pub(crate) mod rounding;

use core::cmp::Ordering;

#[doc(inline)]
pub use error::DurationError;

/// The `human_duration` result type
pub type DurationResult<T> = Result<T, DurationError>;

pub use crate::duration::{Decomposition, Duration, Terms};
pub use crate::unit::{ParseUnitError, Unit};

/// One year, fixed at 365 days.
pub const YEAR: Duration = Duration::YEAR;
/// One week.
pub const WEEK: Duration = Duration::WEEK;
/// One day.
pub const DAY: Duration = Duration::DAY;
/// One hour.
pub const HOUR: Duration = Duration::HOUR;
/// One minute.
pub const MINUTE: Duration = Duration::MINUTE;
/// One second.
pub const SECOND: Duration = Duration::SECOND;
/// One millisecond.
pub const MILLISECOND: Duration = Duration::MILLISECOND;
/// One nanosecond.
pub const NANOSECOND: Duration = Duration::NANOSECOND;

#[doc(hidden)]
#[macro_export]
macro_rules! duration_assert {
    ($condition:expr $(,)*) => {
        if !$condition {
            return Err($crate::DurationError::assert());
        }
    };
    ($condition:expr, $($args:tt)+) => {
        if !$condition {
            #[cfg(feature = "log")]
            log::error!($($args)+);
            return Err($crate::DurationError::assert());
        }
    };
}

/// A general Sign type.
///
/// The default is `Sign::Zero`, the sign of `Duration::default()`.
#[repr(i8)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Sign {
    /// A value greater than zero.
    Positive = 1,
    /// Exactly zero.
    #[default]
    Zero = 0,
    /// A value less than zero, displayed with an `" ago"` suffix.
    Negative = -1,
}

impl From<i64> for Sign {
    fn from(value: i64) -> Self {
        match value.cmp(&0) {
            Ordering::Greater => Self::Positive,
            Ordering::Equal => Self::Zero,
            Ordering::Less => Self::Negative,
        }
    }
}

impl Sign {
    /// Returns whether this is `Sign::Negative`.
    #[inline]
    #[must_use]
    pub fn is_negative(self) -> bool {
        self == Self::Negative
    }
}
