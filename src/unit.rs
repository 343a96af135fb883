//! The fixed set of units a `Duration` is decomposed into.

use core::{fmt, str::FromStr};

/// Nanoseconds per millisecond: 1e+6
const NS_PER_MILLISECOND: i64 = 1_000_000;
/// Nanoseconds per second: 1e+9
const NS_PER_SECOND: i64 = 1_000 * NS_PER_MILLISECOND;
/// Nanoseconds per minute: 6e+10
const NS_PER_MINUTE: i64 = 60 * NS_PER_SECOND;
/// Nanoseconds per hour: 3.6e+12
const NS_PER_HOUR: i64 = 60 * NS_PER_MINUTE;
/// Nanoseconds per day: 8.64e+13
const NS_PER_DAY: i64 = 24 * NS_PER_HOUR;
/// Nanoseconds per week: 6.048e+14
const NS_PER_WEEK: i64 = 7 * NS_PER_DAY;
/// Nanoseconds per 365 day year: 3.1536e+16
const NS_PER_YEAR: i64 = 365 * NS_PER_DAY;

/// A fixed magnitude used to break down a `Duration`.
///
/// Units are ordered from smallest to largest, so `Unit::Year` is the
/// greatest `Unit`. There is deliberately no month unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Unit {
    /// The `Nanosecond` unit
    Nanosecond,
    /// The `Millisecond` unit
    Millisecond,
    /// The `Second` unit
    Second,
    /// The `Minute` unit
    Minute,
    /// The `Hour` unit
    Hour,
    /// The `Day` unit
    Day,
    /// The `Week` unit
    Week,
    /// The `Year` unit, always 365 days
    Year,
}

impl Unit {
    /// Every unit, from largest to smallest.
    ///
    /// This is the order used by [`Duration::decompose`][crate::Duration::decompose].
    /// It always ends with `Unit::Nanosecond`.
    pub const ALL: [Unit; 8] = [
        Unit::Year,
        Unit::Week,
        Unit::Day,
        Unit::Hour,
        Unit::Minute,
        Unit::Second,
        Unit::Millisecond,
        Unit::Nanosecond,
    ];

    /// Returns the number of nanoseconds in this unit.
    #[inline]
    #[must_use]
    pub const fn as_nanoseconds(self) -> i64 {
        match self {
            Self::Year => NS_PER_YEAR,
            Self::Week => NS_PER_WEEK,
            Self::Day => NS_PER_DAY,
            Self::Hour => NS_PER_HOUR,
            Self::Minute => NS_PER_MINUTE,
            Self::Second => NS_PER_SECOND,
            Self::Millisecond => NS_PER_MILLISECOND,
            Self::Nanosecond => 1,
        }
    }

    /// Returns the unit whose magnitude is exactly `nanoseconds`, if any.
    ///
    /// ```rust
    /// use human_duration::Unit;
    ///
    /// assert_eq!(Unit::from_nanoseconds(3_600_000_000_000), Some(Unit::Hour));
    /// assert_eq!(Unit::from_nanoseconds(90), None);
    /// ```
    #[must_use]
    pub const fn from_nanoseconds(nanoseconds: i64) -> Option<Self> {
        let unit = match nanoseconds {
            NS_PER_YEAR => Self::Year,
            NS_PER_WEEK => Self::Week,
            NS_PER_DAY => Self::Day,
            NS_PER_HOUR => Self::Hour,
            NS_PER_MINUTE => Self::Minute,
            NS_PER_SECOND => Self::Second,
            NS_PER_MILLISECOND => Self::Millisecond,
            1 => Self::Nanosecond,
            _ => return None,
        };
        Some(unit)
    }

    /// The singular, lower case English name of this unit.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Year => "year",
            Self::Week => "week",
            Self::Day => "day",
            Self::Hour => "hour",
            Self::Minute => "minute",
            Self::Second => "second",
            Self::Millisecond => "millisecond",
            Self::Nanosecond => "nanosecond",
        }
    }

    /// The plural name of this unit, used for any count other than one.
    #[must_use]
    pub const fn plural_name(self) -> &'static str {
        match self {
            Self::Year => "years",
            Self::Week => "weeks",
            Self::Day => "days",
            Self::Hour => "hours",
            Self::Minute => "minutes",
            Self::Second => "seconds",
            Self::Millisecond => "milliseconds",
            Self::Nanosecond => "nanoseconds",
        }
    }

    /// Returns the name to pair with `count`.
    #[inline]
    #[must_use]
    pub const fn name_for_count(self, count: u64) -> &'static str {
        if count == 1 {
            self.name()
        } else {
            self.plural_name()
        }
    }

    // Position of this unit in `Unit::ALL`.
    #[inline]
    pub(crate) const fn table_index(self) -> usize {
        Self::Year as usize - self as usize
    }
}

/// A parsing error for `Unit`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseUnitError;

impl fmt::Display for ParseUnitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("provided string was not a valid Unit")
    }
}

impl core::error::Error for ParseUnitError {}

impl FromStr for Unit {
    type Err = ParseUnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "year" | "years" => Ok(Self::Year),
            "week" | "weeks" => Ok(Self::Week),
            "day" | "days" => Ok(Self::Day),
            "hour" | "hours" => Ok(Self::Hour),
            "minute" | "minutes" => Ok(Self::Minute),
            "second" | "seconds" => Ok(Self::Second),
            "millisecond" | "milliseconds" => Ok(Self::Millisecond),
            "nanosecond" | "nanoseconds" => Ok(Self::Nanosecond),
            _ => Err(ParseUnitError),
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.name().fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;
    use core::str::FromStr;

    use super::Unit;

    #[test]
    fn unit_values() {
        let expected = [
            (Unit::Year, 31_536_000_000_000_000),
            (Unit::Week, 604_800_000_000_000),
            (Unit::Day, 86_400_000_000_000),
            (Unit::Hour, 3_600_000_000_000),
            (Unit::Minute, 60_000_000_000),
            (Unit::Second, 1_000_000_000),
            (Unit::Millisecond, 1_000_000),
            (Unit::Nanosecond, 1),
        ];
        assert_eq!(Unit::ALL.len(), expected.len());
        for (unit, (expected_unit, nanos)) in Unit::ALL.iter().zip(expected) {
            assert_eq!(*unit, expected_unit);
            assert_eq!(unit.as_nanoseconds(), nanos, "{unit}");
        }
    }

    #[test]
    fn table_is_descending() {
        for pair in Unit::ALL.windows(2) {
            assert!(pair[0] > pair[1]);
            assert!(pair[0].as_nanoseconds() > pair[1].as_nanoseconds());
        }
        assert_eq!(Unit::ALL.last(), Some(&Unit::Nanosecond));
        for (i, unit) in Unit::ALL.iter().enumerate() {
            assert_eq!(unit.table_index(), i);
        }
    }

    #[test]
    fn exact_value_lookup() {
        for unit in Unit::ALL {
            assert_eq!(Unit::from_nanoseconds(unit.as_nanoseconds()), Some(unit));
        }
        assert_eq!(Unit::from_nanoseconds(0), None);
        assert_eq!(Unit::from_nanoseconds(-1), None);
        assert_eq!(Unit::from_nanoseconds(1_000), None);
        assert_eq!(Unit::from_nanoseconds(-3_600_000_000_000), None);
    }

    #[test]
    fn names() {
        assert_eq!(Unit::Millisecond.to_string(), "millisecond");
        assert_eq!(Unit::Day.name_for_count(1), "day");
        assert_eq!(Unit::Day.name_for_count(0), "days");
        assert_eq!(Unit::Day.name_for_count(2), "days");
        for unit in Unit::ALL {
            assert_eq!(Unit::from_str(unit.name()), Ok(unit));
            assert_eq!(Unit::from_str(unit.plural_name()), Ok(unit));
            assert_eq!(unit.plural_name().strip_suffix('s'), Some(unit.name()));
        }
        assert!(Unit::from_str("month").is_err());
        assert!(Unit::from_str("Hour").is_err());
    }
}
