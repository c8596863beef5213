//! Plain error values

use thiserror::Error;

/// Returned when dividing by zero
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("division by zero")]
pub struct DivisionByZero;

/// Divide `a` by `b`
///
/// # Errors
///
/// Returns [`DivisionByZero`] if `b` is zero
#[inline]
pub fn divide(a: f64, b: f64) -> Result<f64, DivisionByZero> {
    if b == 0.0 {
        return Err(DivisionByZero);
    }
    Ok(a / b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn divides_signed_operands() {
        let cases = [
            (10.0, 2.0, 5.0),
            (-10.0, 2.0, -5.0),
            (10.0, -2.0, -5.0),
            (-10.0, -2.0, 5.0),
            (7.5, 2.5, 3.0),
            (42.0, 1.0, 42.0),
            (0.0, 5.0, 0.0),
        ];
        for (a, b, expected) in cases {
            assert_eq!(divide(a, b), Ok(expected), "divide({a}, {b})");
        }
    }

    #[test]
    fn rejects_zero_divisor() {
        for a in [10.0, -10.0, 0.0] {
            let err = divide(a, 0.0).unwrap_err();
            assert_eq!(err.to_string(), "division by zero");
        }
    }

    #[test]
    fn negative_zero_is_still_zero() {
        assert_eq!(divide(1.0, -0.0), Err(DivisionByZero));
    }
}
