//! Behaviour for built-in numeric types.
//!
//! We cannot add methods to `i64` itself, so the behaviour is a free
//! function taking the value as an argument.

use thiserror::Error;

/// Errors raised by the numeric helpers.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum NumericError {
    /// The result does not fit in an `i64`.
    #[error("The square of {number} does not fit in a 64-bit integer")]
    Overflow {
        /// The number that was squared.
        number: i64,
    },
}

/// Multiply a number by itself.
///
/// # Example
///
/// ```
/// # use retrofit_core::numeric::square_number;
/// assert_eq!(square_number(752), Ok(565_504));
/// ```
///
/// # Errors
///
/// [`NumericError::Overflow`] if the square exceeds [`i64::MAX`].
pub fn square_number(number: i64) -> Result<i64, NumericError> {
    number
        .checked_mul(number)
        .ok_or(NumericError::Overflow { number })
}

#[cfg(test)]
mod test {
    use super::{NumericError, square_number};
    use rstest::rstest;

    #[rstest]
    #[case(0, 0)]
    #[case(1, 1)]
    #[case(-7, 49)]
    #[case(752, 565_504)]
    #[case(3_037_000_499, 9_223_372_030_926_249_001)]
    fn squares(#[case] number: i64, #[case] expected: i64) {
        assert_eq!(square_number(number), Ok(expected));
    }

    #[rstest]
    #[case(3_037_000_500)]
    #[case(i64::MIN)]
    #[case(i64::MAX)]
    fn overflow(#[case] number: i64) {
        assert_eq!(
            square_number(number),
            Err(NumericError::Overflow { number })
        );
    }

    #[test]
    fn overflow_message() {
        let err = square_number(i64::MAX).unwrap_err();
        assert_eq!(
            err.to_string(),
            "The square of 9223372036854775807 does not fit in a 64-bit integer"
        );
    }
}
