//! The unit breakdown of a `Duration`.

use core::fmt::Write;

use writeable::{impl_display_with_writeable, LengthHint, Writeable};

use crate::{unit::Unit, Sign};

/// A `Duration` broken down into counts of each `Unit`, largest first.
///
/// The counts are of the absolute value. Summing each count multiplied
/// by its unit's magnitude gives back that absolute value exactly, see
/// [`Decomposition::total_nanoseconds`].
///
/// Displaying a `Decomposition` joins `"<count> <unit>"` terms with a
/// single space, skips units with a zero count, pluralizes any count
/// other than one and appends `" ago"` to negative spans.
///
/// ```rust
/// use human_duration::{Duration, Unit};
///
/// let decomposition = Duration::from_nanoseconds(-93_600_000_000_000).decompose();
/// assert!(decomposition.is_past());
/// assert_eq!(decomposition.count(Unit::Day), 1);
/// assert_eq!(decomposition.count(Unit::Hour), 2);
/// assert_eq!(decomposition.to_string(), "1 day 2 hours ago");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Decomposition {
    sign: Sign,
    counts: [u64; Unit::ALL.len()],
}

impl Decomposition {
    /// `counts` are in `Unit::ALL` order.
    pub(crate) const fn new(sign: Sign, counts: [u64; Unit::ALL.len()]) -> Self {
        Self { sign, counts }
    }

    /// The sign of the decomposed `Duration`.
    #[inline]
    #[must_use]
    pub const fn sign(&self) -> Sign {
        self.sign
    }

    /// Whether the decomposed `Duration` was negative.
    #[inline]
    #[must_use]
    pub fn is_past(&self) -> bool {
        self.sign.is_negative()
    }

    /// Whether every count is zero, i.e. the decomposed `Duration` was zero.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.iter().all(|count| *count == 0)
    }

    /// Returns the count recorded for `unit`.
    #[inline]
    #[must_use]
    pub const fn count(&self, unit: Unit) -> u64 {
        self.counts[unit.table_index()]
    }

    /// Returns the non-zero `(count, unit)` terms, largest unit first.
    #[inline]
    pub fn terms(&self) -> Terms<'_> {
        Terms {
            decomposition: self,
            next: 0,
        }
    }

    /// Returns the absolute number of nanoseconds the terms add up to.
    #[must_use]
    pub fn total_nanoseconds(&self) -> u64 {
        self.terms()
            .map(|(count, unit)| count * unit.as_nanoseconds() as u64)
            .sum()
    }
}

/// An iterator over the non-zero terms of a [`Decomposition`].
///
/// Created by [`Decomposition::terms`].
#[derive(Debug, Clone)]
pub struct Terms<'a> {
    decomposition: &'a Decomposition,
    next: usize,
}

impl Iterator for Terms<'_> {
    type Item = (u64, Unit);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(&unit) = Unit::ALL.get(self.next) {
            self.next += 1;
            let count = self.decomposition.count(unit);
            if count != 0 {
                return Some((count, unit));
            }
        }
        None
    }
}

impl Writeable for Decomposition {
    fn write_to<W: Write + ?Sized>(&self, sink: &mut W) -> core::fmt::Result {
        for (i, (count, unit)) in self.terms().enumerate() {
            if i > 0 {
                sink.write_char(' ')?;
            }
            write!(sink, "{count} {}", unit.name_for_count(count))?;
        }
        if self.is_past() {
            sink.write_str(" ago")?;
        }
        Ok(())
    }

    fn writeable_length_hint(&self) -> LengthHint {
        let mut len = 0;
        for (i, (count, unit)) in self.terms().enumerate() {
            if i > 0 {
                len += 1;
            }
            len += count_digits(count) + 1 + unit.name_for_count(count).len();
        }
        if self.is_past() {
            len += " ago".len();
        }
        LengthHint::exact(len)
    }
}

impl_display_with_writeable!(Decomposition);

#[inline]
fn count_digits(n: u64) -> usize {
    n.checked_ilog10().map_or(1, |digits| digits as usize + 1)
}

#[cfg(test)]
mod tests {
    use super::count_digits;

    #[test]
    fn digit_counts() {
        assert_eq!(count_digits(0), 1);
        assert_eq!(count_digits(9), 1);
        assert_eq!(count_digits(10), 2);
        assert_eq!(count_digits(999_999), 6);
        assert_eq!(count_digits(u64::MAX), 20);
    }
}
