//! This module implements `Duration`, a signed span of nanoseconds.

use alloc::string::{String, ToString};

use writeable::{impl_display_with_writeable, LengthHint, Writeable};

use crate::{rounding::StepRounder, unit::Unit, DurationResult, Sign};

mod decomposition;


pub use decomposition::{Decomposition, Terms};

/// A signed span of time with nanosecond resolution.
///
/// A `Duration` is displayed with [`Duration::name`]: one of the eight
/// unit constants displays as the bare unit name, any other value as its
/// full decomposition.
///
/// ```rust
/// use human_duration::Duration;
///
/// assert_eq!(Duration::DAY.to_string(), "day");
/// assert_eq!(Duration::from_nanoseconds(2 * 86_400_000_000_000).to_string(), "2 days");
/// assert_eq!(Duration::from_nanoseconds(-90).to_string(), "90 nanoseconds ago");
/// assert_eq!(Duration::ZERO.to_string(), "");
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Duration(i64);

// ==== Constants ====

impl Duration {
    /// A zero length `Duration`.
    pub const ZERO: Self = Self(0);
    /// One year of 365 days.
    pub const YEAR: Self = Self::from_unit(Unit::Year);
    /// One week.
    pub const WEEK: Self = Self::from_unit(Unit::Week);
    /// One day.
    pub const DAY: Self = Self::from_unit(Unit::Day);
    /// One hour.
    pub const HOUR: Self = Self::from_unit(Unit::Hour);
    /// One minute.
    pub const MINUTE: Self = Self::from_unit(Unit::Minute);
    /// One second.
    pub const SECOND: Self = Self::from_unit(Unit::Second);
    /// One millisecond.
    pub const MILLISECOND: Self = Self::from_unit(Unit::Millisecond);
    /// One nanosecond.
    pub const NANOSECOND: Self = Self::from_unit(Unit::Nanosecond);
}

// ==== Public API ====

impl Duration {
    /// Creates a `Duration` from a signed count of nanoseconds.
    #[inline]
    #[must_use]
    pub const fn from_nanoseconds(nanoseconds: i64) -> Self {
        Self(nanoseconds)
    }

    /// Creates a `Duration` of exactly one `unit`.
    #[inline]
    #[must_use]
    pub const fn from_unit(unit: Unit) -> Self {
        Self(unit.as_nanoseconds())
    }

    /// Returns the signed count of nanoseconds.
    #[inline]
    #[must_use]
    pub const fn as_nanoseconds(&self) -> i64 {
        self.0
    }

    #[inline]
    #[must_use]
    pub fn sign(&self) -> Sign {
        Sign::from(self.0)
    }

    #[inline]
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    #[inline]
    #[must_use]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Returns the absolute number of nanoseconds.
    ///
    /// Unlike negation this is defined for every value, including
    /// `i64::MIN`.
    #[inline]
    #[must_use]
    pub const fn unsigned_abs(&self) -> u64 {
        self.0.unsigned_abs()
    }

    /// Returns the `Unit` this `Duration` is exactly equal to, if any.
    #[inline]
    #[must_use]
    pub const fn unit(&self) -> Option<Unit> {
        Unit::from_nanoseconds(self.0)
    }

    /// Breaks this `Duration` down into unit counts, largest unit first.
    ///
    /// Every representable value can be decomposed. The breakdown works
    /// on the unsigned absolute value, so `i64::MIN` is handled without
    /// overflowing.
    #[must_use]
    pub fn decompose(&self) -> Decomposition {
        let mut remaining = self.unsigned_abs();
        let mut counts = [0; Unit::ALL.len()];
        for (count, unit) in counts.iter_mut().zip(Unit::ALL) {
            let magnitude = unit.as_nanoseconds() as u64;
            *count = remaining / magnitude;
            if *count != 0 {
                remaining %= magnitude;
            }
        }
        // The last unit is a single nanosecond.
        debug_assert_eq!(remaining, 0);
        Decomposition::new(self.sign(), counts)
    }

    /// Returns the full decomposition text of this `Duration`, even when
    /// it is equal to a unit constant.
    ///
    /// ```rust
    /// use human_duration::Duration;
    ///
    /// assert_eq!(Duration::HOUR.human(), "1 hour");
    /// assert_eq!(
    ///     Duration::from_nanoseconds(-3_660_000_000_000).human(),
    ///     "1 hour 1 minute ago"
    /// );
    /// ```
    #[must_use]
    pub fn human(&self) -> String {
        self.decompose().to_string()
    }

    /// Returns the name of this `Duration`.
    ///
    /// This serves two purposes. A `Duration` exactly equal to one of the
    /// eight unit constants returns that unit's singular, lower case
    /// name. Any other value returns its decomposition, as with
    /// [`Duration::human`].
    ///
    /// ```rust
    /// use human_duration::Duration;
    ///
    /// assert_eq!(Duration::HOUR.name(), "hour");
    /// assert_eq!(Duration::from_nanoseconds(90).name(), "90 nanoseconds");
    /// // Negative unit values are not unit constants.
    /// assert_eq!(Duration::from_nanoseconds(-1).name(), "1 nanosecond ago");
    /// ```
    #[must_use]
    pub fn name(&self) -> String {
        self.to_string()
    }

    /// Rounds this `Duration` away from zero by one step of `to`.
    ///
    /// A non-negative value is truncated to a multiple of `to` and then
    /// advanced by one `to`, giving the next multiple of `to`. A value
    /// that is already a multiple of `to` still advances.
    ///
    /// A negative value has its truncated remainder subtracted once more
    /// and is then moved down by one `to`. The result is a multiple of
    /// `to` only when the value already was one.
    ///
    /// ```rust
    /// use human_duration::Duration;
    ///
    /// let span = Duration::from_nanoseconds(123_456_789_123);
    /// assert_eq!(span.round(Duration::SECOND).as_nanoseconds(), 124_000_000_000);
    /// assert_eq!(Duration::SECOND.round(Duration::SECOND), Duration::from_nanoseconds(2_000_000_000));
    ///
    /// let span = Duration::from_nanoseconds(-123_456_789_123);
    /// assert_eq!(span.round(Duration::MINUTE).as_nanoseconds(), -186_913_578_246);
    ///
    /// // A negative exact multiple steps down by one `to`.
    /// let span = Duration::from_nanoseconds(-60_000_000_000);
    /// assert_eq!(span.round(Duration::MINUTE).as_nanoseconds(), -120_000_000_000);
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if `to` is not positive or if the result does not fit in
    /// a `Duration`. See [`Duration::checked_round`] for a fallible
    /// version.
    #[must_use]
    pub fn round(self, to: Duration) -> Duration {
        match self.checked_round(to) {
            Ok(rounded) => rounded,
            Err(err) => panic!("{err}"),
        }
    }

    /// Rounds this `Duration` like [`Duration::round`], returning an
    /// error instead of panicking.
    ///
    /// Errors with a `RangeError` when `to` is zero or negative, or when
    /// the rounded value is out of range.
    pub fn checked_round(self, to: Duration) -> DurationResult<Duration> {
        StepRounder::from_signed_num(self.0, to.0)
            .and_then(|rounder| rounder.round())
            .map(Self)
            .map_err(|err| {
                #[cfg(feature = "log")]
                log::debug!("could not round {self:?} to {to:?}: {err}");
                err
            })
    }
}

// ==== Trait impls ====

impl Writeable for Duration {
    fn write_to<W: core::fmt::Write + ?Sized>(&self, sink: &mut W) -> core::fmt::Result {
        match self.unit() {
            Some(unit) => sink.write_str(unit.name()),
            None => self.decompose().write_to(sink),
        }
    }

    fn writeable_length_hint(&self) -> LengthHint {
        match self.unit() {
            Some(unit) => LengthHint::exact(unit.name().len()),
            None => self.decompose().writeable_length_hint(),
        }
    }
}

impl_display_with_writeable!(Duration);

impl From<i64> for Duration {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl From<Duration> for i64 {
    fn from(value: Duration) -> Self {
        value.0
    }
}

impl From<Unit> for Duration {
    fn from(value: Unit) -> Self {
        Self::from_unit(value)
    }
}
