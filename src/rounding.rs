//! Implementation of step rounding functionality

use crate::{error::ErrorMessage, DurationError, DurationResult};

use num_traits::{CheckedRem, PrimInt, Signed};

/// Rounds a signed value away from zero by one increment step.
///
/// A non-negative dividend is truncated to a multiple of the increment
/// and then advanced by one increment, so exact multiples still advance.
///
/// A negative dividend instead has its truncated remainder (whose sign
/// follows the dividend) added once more before stepping down by one
/// increment. The result is only a multiple of the increment when the
/// dividend already was one: `-7` with an increment of `5` gives `-14`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct StepRounder<T> {
    dividend: T,
    increment: T,
}

impl<T: PrimInt + Signed + CheckedRem> StepRounder<T> {
    #[inline]
    pub(crate) fn from_signed_num(number: T, increment: T) -> DurationResult<Self> {
        if increment.is_zero() {
            return Err(DurationError::range().with_enum(ErrorMessage::ZeroGranularity));
        }
        if increment.is_negative() {
            return Err(DurationError::range().with_enum(ErrorMessage::NegativeGranularity));
        }
        Ok(Self {
            dividend: number,
            increment,
        })
    }

    #[inline]
    pub(crate) fn round(&self) -> DurationResult<T> {
        let overflow = || DurationError::range().with_enum(ErrorMessage::RoundingOverflow);
        // `increment` is positive, so the remainder is always defined.
        let remainder = self
            .dividend
            .checked_rem(&self.increment)
            .ok_or_else(overflow)?;
        if self.dividend.is_negative() {
            return self
                .dividend
                .checked_add(&remainder)
                .and_then(|stepped| stepped.checked_sub(&self.increment))
                .ok_or_else(overflow);
        }

        let rounded = self
            .dividend
            .checked_sub(&remainder)
            .and_then(|truncated| truncated.checked_add(&self.increment))
            .ok_or_else(overflow)?;
        crate::duration_assert!(
            (rounded % self.increment).is_zero(),
            "rounded value is not a multiple of its increment"
        );
        Ok(rounded)
    }
}

#[cfg(test)]
mod tests {
    use super::StepRounder;
    use crate::error::{ErrorKind, ErrorMessage};

    #[derive(Debug)]
    struct TestCase {
        x: i64,
        increment: i64,
        expected: i64,
    }

    impl TestCase {
        fn run(&self) {
            let rounder = StepRounder::from_signed_num(self.x, self.increment).unwrap();
            assert_eq!(
                self.expected,
                rounder.round().unwrap(),
                "Testing {:?}/{:?}",
                self.x,
                self.increment
            );
        }
    }

    #[test]
    fn basic_step_rounding() {
        const CASES: [TestCase; 10] = [
            TestCase { x: 7, increment: 5, expected: 10 },
            TestCase { x: 5, increment: 5, expected: 10 },
            TestCase { x: 0, increment: 5, expected: 5 },
            TestCase { x: 4, increment: 5, expected: 5 },
            TestCase { x: 1, increment: 1, expected: 2 },
            // Negative values subtract the truncated remainder once more.
            TestCase { x: -7, increment: 5, expected: -14 },
            TestCase { x: -5, increment: 5, expected: -10 },
            TestCase { x: -4, increment: 5, expected: -13 },
            TestCase { x: -1, increment: 1, expected: -2 },
            TestCase { x: -123_456_789_123, increment: 60_000_000_000, expected: -186_913_578_246 },
        ];
        for case in CASES {
            case.run();
        }
    }

    #[test]
    fn negative_results_keep_the_remainder() {
        let rounder = StepRounder::from_signed_num(-123_456_789_123i64, 60_000_000_000).unwrap();
        let rounded = rounder.round().unwrap();
        assert_eq!(rounded, -186_913_578_246);
        assert_ne!(rounded % 60_000_000_000, 0);

        let rounder = StepRounder::from_signed_num(-100i64, 90).unwrap();
        assert_eq!(rounder.round().unwrap(), -200);

        // Negative exact multiples step down by exactly one increment.
        let rounder = StepRounder::from_signed_num(-180i64, 90).unwrap();
        assert_eq!(rounder.round().unwrap(), -270);
    }

    #[test]
    fn wide_integers() {
        let rounder = StepRounder::from_signed_num(i128::from(i64::MAX), 1_000).unwrap();
        assert_eq!(rounder.round().unwrap(), 9_223_372_036_854_776_000);
    }

    #[test]
    fn rejects_non_positive_increment() {
        let err = StepRounder::from_signed_num(10i64, 0).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Range);
        assert_eq!(err.message(), ErrorMessage::ZeroGranularity.to_str());

        let err = StepRounder::from_signed_num(10i64, -5).unwrap_err();
        assert_eq!(err.message(), ErrorMessage::NegativeGranularity.to_str());
    }

    #[test]
    fn overflow() {
        let rounder = StepRounder::from_signed_num(i64::MAX, 2).unwrap();
        let err = rounder.round().unwrap_err();
        assert_eq!(err.message(), ErrorMessage::RoundingOverflow.to_str());

        let rounder = StepRounder::from_signed_num(i64::MIN, 1).unwrap();
        assert!(rounder.round().is_err());
        let rounder = StepRounder::from_signed_num(i64::MIN + 1, 1).unwrap();
        assert_eq!(rounder.round().unwrap(), i64::MIN);

        // Largest values that still have a next boundary.
        let rounder = StepRounder::from_signed_num(i64::MAX - 1, 1).unwrap();
        assert_eq!(rounder.round().unwrap(), i64::MAX);
        let rounder = StepRounder::from_signed_num(i64::MIN / 2, 1).unwrap();
        assert_eq!(rounder.round().unwrap(), i64::MIN / 2 - 1);
    }
}
